// Copyright 2026 the Fontprobe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::ReducedStyle;

/// Errors that can occur while resolving a style to a font.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// The matching service returned no face at all for the style.
    #[error("no font matches {style}")]
    NoMatch {
        /// The style that was looked up.
        style: ReducedStyle,
    },
}
