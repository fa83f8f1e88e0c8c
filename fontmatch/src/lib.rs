// Copyright 2026 the Fontprobe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style normalization and cached font matching.
//!
//! A document style is reduced to the four attributes that decide font selection
//! ([`ReducedStyle`]), translated into a [`MatchPattern`] and handed to a [`MatchSource`]
//! (the system font matching service, or an in-memory stand-in). The [`FontResolver`] caches
//! every answer for the lifetime of the resolver, so repeated lookups return the very same
//! [`ResolvedFace`].
//!
//! ```
//! use font_attrs::{FcSlant, FcWeight, FcWidth};
//! use fontmatch::{FontResolver, MemoryFace, MemorySource, StyleDescriptor};
//!
//! let mut source = MemorySource::new();
//! source.add(MemoryFace::new("Arial", 'A'..='z').weight(FcWeight::BOLD));
//! let mut resolver = FontResolver::new(source);
//!
//! let style = StyleDescriptor::new()
//!     .with("font-family", "\"Arial\",Helvetica")
//!     .with("font-weight", "700");
//! let reduced = resolver.font_style(&style);
//! assert_eq!(reduced.family(), "'Arial','Helvetica'");
//!
//! let face = resolver.true_font(&reduced).unwrap();
//! let css = face.css().unwrap();
//! assert_eq!(css.family(), "'Arial'");
//! assert_eq!(css.weight(), "700");
//! assert_eq!(face.found().slant, Some(FcSlant::ROMAN));
//! assert_eq!(face.found().width, Some(FcWidth::NORMAL));
//! ```

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

mod backend;
mod error;
mod face;
mod memory;
mod pattern;
mod resolver;
mod source;
mod style;

pub use font_attrs;

pub use backend::SystemSource;
pub use error::ResolveError;
pub use face::{CharCoverage, Coverage, FoundFace};
pub use memory::{MemoryFace, MemorySource};
pub use pattern::MatchPattern;
pub use resolver::{FontResolver, ResolvedFace};
pub use source::MatchSource;
pub use style::{ReducedStyle, StyleDescriptor};
