// Copyright 2026 the Fontprobe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Access to the font tables of a single face.
//!
//! All values are in font units unless stated otherwise.

use std::path::Path;

use read_fonts::types::{GlyphId, Tag};

use crate::MetricsError;

/// The `OS/2` fields used for metrics and face selection.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Os2Info {
    /// Table version.
    pub version: u16,
    /// `usWeightClass`.
    pub weight_class: u16,
    /// `usWidthClass`.
    pub width_class: u16,
    /// Bit 0 of `fsSelection`.
    pub italic: bool,
    /// `sTypoAscender`.
    pub typo_ascender: i16,
    /// `sTypoDescender`.
    pub typo_descender: i16,
    /// `sxHeight`, present from version 2.
    pub x_height: Option<i16>,
    /// `sCapHeight`, present from version 2.
    pub cap_height: Option<i16>,
}

/// The `hhea` fields used for metrics.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct HheaInfo {
    /// Typographic ascent.
    pub ascender: i16,
    /// Typographic descent, usually negative.
    pub descender: i16,
}

/// The bounding box of a glyph outline.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct GlyphBounds {
    /// Minimum x coordinate.
    pub x_min: f32,
    /// Minimum y coordinate.
    pub y_min: f32,
    /// Maximum x coordinate.
    pub x_max: f32,
    /// Maximum y coordinate.
    pub y_max: f32,
}

/// A variation axis of a variable font.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VariationAxis {
    /// Axis tag, e.g. `wght`.
    pub tag: Tag,
    /// Minimum value.
    pub min: f32,
    /// Default value.
    pub default: f32,
    /// Maximum value.
    pub max: f32,
}

/// A two-glyph ligature substitution.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct LigaturePair {
    /// The first component.
    pub first: GlyphId,
    /// The second component.
    pub second: GlyphId,
    /// The glyph both components are replaced with.
    pub ligature: GlyphId,
}

/// Read access to the tables of one face.
///
/// Absent tables read as `None` (or empty) rather than failing; the callers decide what
/// absence means.
pub trait FaceTables {
    /// Units per em from the `head` table.
    fn units_per_em(&self) -> u16;

    /// The `OS/2` table, if present.
    ///
    /// Vertical metrics include the `MVAR` deltas at the current variation coordinates.
    fn os2(&self) -> Option<Os2Info>;

    /// The `hhea` table, if present.
    fn hhea(&self) -> Option<HheaInfo>;

    /// The subfamily name (name ID 2), if present.
    fn subfamily_name(&self) -> Option<String>;

    /// The variation axes. Empty for static fonts.
    fn axes(&self) -> Vec<VariationAxis>;

    /// Sets the variation coordinates used by [`os2`](Self::os2),
    /// [`advance_width`](Self::advance_width) and [`bounds`](Self::bounds). Axes not named
    /// keep their default.
    fn set_variations(&mut self, settings: &[(Tag, f32)]);

    /// Returns `true` if the face has a usable Unicode character map.
    ///
    /// A face whose only map is a symbol map has none.
    fn has_char_map(&self) -> bool;

    /// Maps a character to its nominal glyph through the Unicode character map.
    fn map_char(&self, ch: char) -> Option<GlyphId>;

    /// The horizontal advance of a glyph.
    fn advance_width(&self, glyph: GlyphId) -> Option<f32>;

    /// The outline bounds of a glyph.
    fn bounds(&self, glyph: GlyphId) -> Option<GlyphBounds>;

    /// The legacy `kern` adjustment for a glyph pair, from the first subtable that has one.
    fn kerning(&self, left: GlyphId, right: GlyphId) -> Option<i32>;

    /// Every two-component ligature in `GSUB`, in lookup order.
    fn ligatures(&self) -> Vec<LigaturePair>;
}

/// Opens font files.
pub trait TableLoader {
    /// The face type produced.
    type Face: FaceTables;

    /// Returns the number of faces in the file; 1 for a plain font.
    fn face_count(&mut self, path: &Path) -> Result<u32, MetricsError>;

    /// Opens the face at `index`.
    fn open(&mut self, path: &Path, index: u32) -> Result<Self::Face, MetricsError>;
}
