// Copyright 2026 the Fontprobe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

mod env;
mod synthetic;

pub(crate) use env::{TestService, arial_service, file_service, style, test_font};
pub(crate) use synthetic::{SyntheticFace, SyntheticLoader};
