// Copyright 2026 the Fontprobe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::{Path, PathBuf};

use fontmatch::{ReducedStyle, ResolveError};

/// Errors that can occur while opening the font behind a style.
#[derive(Debug, thiserror::Error)]
pub enum MetricsError {
    /// The style could not be resolved to a face.
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    /// The matched face is not backed by a file.
    #[error("the face matched for {style} has no file")]
    MissingFile {
        /// The style that was resolved.
        style: ReducedStyle,
    },
    /// The font file could not be opened or mapped.
    #[error("failed to read {}", path.display())]
    Io {
        /// Path of the font file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },
    /// The file is not a font, or its required tables are malformed.
    #[error("{} is not a readable font: {reason}", path.display())]
    InvalidFont {
        /// Path of the font file.
        path: PathBuf,
        /// Description of the parse failure.
        reason: String,
    },
    /// The requested face does not exist in the file.
    #[error("{} has no face {index} ({count} faces)", path.display())]
    FaceIndexOutOfRange {
        /// Path of the font file.
        path: PathBuf,
        /// The requested face index.
        index: u32,
        /// The number of faces in the file.
        count: u32,
    },
}

impl MetricsError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_owned(),
            source,
        }
    }

    pub(crate) fn invalid_font(path: &Path, reason: impl ToString) -> Self {
        Self::InvalidFont {
            path: path.to_owned(),
            reason: reason.to_string(),
        }
    }
}
