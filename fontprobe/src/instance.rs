// Copyright 2026 the Fontprobe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-face metric handles.

use core::cell::OnceCell;

use hashbrown::HashMap;
use read_fonts::types::GlyphId;

use crate::{FaceSelection, FaceTables, FontMetrics};

/// Horizontal metrics of a run of characters, as fractions of the em.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CharAdvances {
    /// Advance of each character; `None` for characters the face does not map.
    pub advances: HashMap<char, Option<f32>>,
    /// Adjustment to apply between each `(preceding, current)` pair.
    ///
    /// A ligature of the pair contributes the difference between its advance and the advances
    /// of its parts; otherwise this is the `kern` value, or zero.
    pub pair_adjustments: HashMap<(char, char), f32>,
    /// Ink box `[x, y, width, height]` of each mapped character, with `y` pointing down from the
    /// baseline to the top of the ink. Zero when the glyph has no outline bounds.
    pub ink_boxes: HashMap<char, [f32; 4]>,
}

/// An opened face with its metrics.
///
/// The character map check and the ligature table are read on first use and kept for the
/// lifetime of the handle.
pub struct FontInstance<F> {
    face: F,
    selection: FaceSelection,
    metrics: FontMetrics,
    char_map: OnceCell<bool>,
    ligatures: OnceCell<HashMap<(GlyphId, GlyphId), GlyphId>>,
}

impl<F: FaceTables> FontInstance<F> {
    /// Wraps an opened face.
    pub fn new(face: F, selection: FaceSelection) -> Self {
        let metrics = FontMetrics::from_face(&face);
        Self {
            face,
            selection,
            metrics,
            char_map: OnceCell::new(),
            ligatures: OnceCell::new(),
        }
    }

    /// Returns the face tables.
    pub fn face(&self) -> &F {
        &self.face
    }

    /// Returns which face of the file was opened.
    pub fn selection(&self) -> FaceSelection {
        self.selection
    }

    /// Returns the vertical metrics.
    pub fn metrics(&self) -> &FontMetrics {
        &self.metrics
    }

    /// Measures `chars` and the adjustments between `pairs` of `(preceding, current)`
    /// characters.
    ///
    /// Returns `None` if the face has no character map, which is the case for some symbol
    /// fonts.
    pub fn char_advances(
        &self,
        chars: impl IntoIterator<Item = char>,
        pairs: impl IntoIterator<Item = (char, char)>,
    ) -> Option<CharAdvances> {
        if !*self.char_map.get_or_init(|| self.face.has_char_map()) {
            return None;
        }
        let upem = f32::from(self.metrics.units_per_em.max(1));
        let mut result = CharAdvances::default();

        for ch in chars {
            let Some(glyph) = self.face.map_char(ch) else {
                result.advances.insert(ch, None);
                continue;
            };
            let advance = self.face.advance_width(glyph).map(|advance| advance / upem);
            result.advances.insert(ch, advance);
            let ink = self.face.bounds(glyph).map_or([0.0; 4], |b| {
                [
                    b.x_min / upem,
                    -b.y_max / upem,
                    (b.x_max - b.x_min) / upem,
                    (b.y_max - b.y_min) / upem,
                ]
            });
            result.ink_boxes.insert(ch, ink);
        }

        for (preceding, current) in pairs {
            let adjustment = match (self.face.map_char(preceding), self.face.map_char(current)) {
                (Some(first), Some(second)) => self.pair_adjustment(first, second),
                _ => 0.0,
            };
            result
                .pair_adjustments
                .insert((preceding, current), adjustment / upem);
        }
        Some(result)
    }

    /// Returns the adjustment between two glyphs in font units.
    fn pair_adjustment(&self, first: GlyphId, second: GlyphId) -> f32 {
        let ligatures = self.ligatures.get_or_init(|| {
            // Later entries for the same components win.
            self.face
                .ligatures()
                .into_iter()
                .map(|pair| ((pair.first, pair.second), pair.ligature))
                .collect()
        });
        if let Some(&ligature) = ligatures.get(&(first, second)) {
            let advance = |glyph| self.face.advance_width(glyph).unwrap_or(0.0);
            return advance(ligature) - advance(first) - advance(second);
        }
        self.face
            .kerning(first, second)
            .map_or(0.0, |value| value as f32)
    }
}

impl<F> core::fmt::Debug for FontInstance<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FontInstance")
            .field("selection", &self.selection)
            .field("metrics", &self.metrics)
            .finish_non_exhaustive()
    }
}
