// Copyright 2026 the Fontprobe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Font attribute vocabularies.
//!
//! Three vocabularies describe the same four or five font selection attributes:
//!
//! - CSS: `font-weight`, `font-style`, `font-stretch` and `font-variant` as keyword or
//!   numeric strings ([`css`]).
//! - The system font matching service (Fontconfig): numeric weight, slant and width codes
//!   ([`FcWeight`], [`FcSlant`], [`FcWidth`]).
//! - The text shaping service: enumerated weight, style, stretch and variant ([`shaping`]).
//!
//! This crate holds the static lookup tables between them. Several of the tables are
//! deliberately lossy; they mirror how the host renderer buckets values rather than forming
//! bijections.
//!
//! ## Example
//!
//! ```
//! use font_attrs::{FcWeight, FcWidth};
//!
//! assert_eq!(FcWeight::from_css("bold"), FcWeight::BOLD);
//! assert_eq!(FcWeight::from_css("banana"), FcWeight::NORMAL);
//! assert_eq!(FcWeight::BOOK.to_css(), "400");
//! assert_eq!(FcWidth::new(90).to_css(), "semi-condensed");
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
#![no_std]

pub mod css;
mod fontconfig;
mod nearest;
pub mod shaping;

pub use fontconfig::{FcSlant, FcWeight, FcWidth};
pub use nearest::nearest_value;
