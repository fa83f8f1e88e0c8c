// Copyright 2026 the Fontprobe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

mod test_font_file;
pub(crate) mod utils;
