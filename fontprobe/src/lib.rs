// Copyright 2026 the Fontprobe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Font metrics for CSS styled text.
//!
//! Fontprobe answers the questions a text layout engine for vector documents has to ask about
//! fonts without rendering anything itself:
//!
//! - Which face actually renders a CSS style, and which face renders each character of a
//!   string when the primary face lacks some of them ([`FontService::true_font`],
//!   [`FontService::true_font_by_char`]).
//! - The vertical metrics of that face normalized to the em: ascent and descent, x-height,
//!   cap height and the dominant baselines ([`FontMetrics`]).
//! - Per-character advances and ink boxes, and the adjustment between pairs of characters
//!   from kerning or ligatures ([`CharAdvances`]).
//!
//! Optionally, a [`TextShaper`](shaping::TextShaper) measures laid out text through a shaping
//! engine such as Pango (feature `pango`).
//!
//! ## Example
//!
//! ```no_run
//! use fontprobe::{Baseline, FontService};
//! use fontprobe::fontmatch::StyleDescriptor;
//!
//! let mut service = FontService::system();
//! let style = StyleDescriptor::new()
//!     .with("font-family", "Arial, Helvetica")
//!     .with("font-weight", "bold");
//! let reduced = service.font_style(&style);
//! let font = service.font_instance(&reduced)?;
//! let central = font.metrics().baseline(Baseline::Central);
//! let advances = service.char_advances(&reduced, "AV".chars(), [('A', 'V')])?;
//! # let _ = (central, advances);
//! # Ok::<(), fontprobe::MetricsError>(())
//! ```
//!
//! ## Features
//!
//! - `system` (enabled by default): match styles against the system fonts with Fontconfig.
//! - `pango`: the [`PangoEngine`](shaping::PangoEngine) shaping engine.

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod font_file;
mod instance;
mod metrics;
mod service;
mod tables;

pub mod select;
pub mod shaping;

#[cfg(test)]
mod tests;

pub use font_attrs;
pub use fontmatch;
pub use read_fonts;
pub use skrifa;

pub use error::MetricsError;
pub use font_file::{FileLoader, FontFile};
pub use instance::{CharAdvances, FontInstance};
pub use metrics::{Baseline, FontMetrics};
pub use select::{FaceSelection, FaceTarget};
pub use service::{FontService, FontServiceOptions};
pub use tables::{
    FaceTables, GlyphBounds, HheaInfo, LigaturePair, Os2Info, TableLoader, VariationAxis,
};
