// Copyright 2026 the Fontprobe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vertical font metrics normalized to the em.

use crate::FaceTables;

/// Dominant baselines, in the order of [`FontMetrics::baselines`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum Baseline {
    /// `ideographic`
    Ideographic,
    /// `hanging`
    Hanging,
    /// `mathematical`
    Mathematical,
    /// `central`
    Central,
    /// `middle`
    Middle,
    /// `text-before-edge`
    TextBeforeEdge,
    /// `text-after-edge`
    TextAfterEdge,
    /// `alphabetic`
    Alphabetic,
}

impl Baseline {
    /// All baselines, in storage order.
    pub const ALL: [Self; 8] = [
        Self::Ideographic,
        Self::Hanging,
        Self::Mathematical,
        Self::Central,
        Self::Middle,
        Self::TextBeforeEdge,
        Self::TextAfterEdge,
        Self::Alphabetic,
    ];

    /// Parses a CSS `dominant-baseline` keyword.
    pub fn from_css(value: &str) -> Option<Self> {
        Some(match value {
            "ideographic" => Self::Ideographic,
            "hanging" => Self::Hanging,
            "mathematical" => Self::Mathematical,
            "central" => Self::Central,
            "middle" => Self::Middle,
            "text-before-edge" => Self::TextBeforeEdge,
            "text-after-edge" => Self::TextAfterEdge,
            "alphabetic" => Self::Alphabetic,
            _ => return None,
        })
    }
}

/// Vertical metrics of a face as fractions of the em.
///
/// `ascent` and `descent` come from the `OS/2` typographic values (or `hhea` when there is no
/// `OS/2` table) and are rescaled so that they sum to one. `ascent_max` and `descent_max` are the
/// unscaled `hhea` values. All values are non-negative except baseline offsets, which are measured
/// upward from the alphabetic baseline.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FontMetrics {
    /// Units per em of the face.
    pub units_per_em: u16,
    /// Ascent, normalized together with `descent`.
    pub ascent: f32,
    /// Descent, normalized together with `ascent`.
    pub descent: f32,
    /// `hhea` ascent.
    pub ascent_max: f32,
    /// `hhea` descent.
    pub descent_max: f32,
    /// Height of lowercase letters.
    pub x_height: f32,
    /// Height of capital letters.
    pub cap_height: f32,
    /// Baseline offsets indexed by [`Baseline`].
    pub baselines: [f32; 8],
}

impl FontMetrics {
    /// Computes the metrics of `face`.
    pub fn from_face(face: &impl FaceTables) -> Self {
        let units_per_em = face.units_per_em();
        let upem = f32::from(units_per_em.max(1));
        let os2 = face.os2();
        let hhea = face.hhea().unwrap_or_default();

        let ascent_max = (f32::from(hhea.ascender) / upem).abs();
        let descent_max = (f32::from(hhea.descender) / upem).abs();
        let (mut ascent, mut descent) = match os2 {
            Some(os2) => (
                (f32::from(os2.typo_ascender) / upem).abs(),
                (f32::from(os2.typo_descender) / upem).abs(),
            ),
            None => (ascent_max, descent_max),
        };
        let total = ascent + descent;
        if total > 0.0 {
            ascent /= total;
            descent /= total;
        }

        // Version 0xFFFF marks a broken table.
        let x_height = match os2
            .filter(|os2| os2.version >= 2 && os2.version != 0xFFFF)
            .and_then(|os2| os2.x_height)
        {
            Some(x_height) => (f32::from(x_height) / upem).abs(),
            None => glyph_top(face, 'x').map_or(0.5, |top| (top / upem).abs()),
        };
        let cap_height = match os2.and_then(|os2| os2.cap_height) {
            Some(cap_height) if cap_height != 0 => f32::from(cap_height) / upem,
            _ => glyph_top(face, 'I').map_or(1.0, |top| top / upem),
        };

        let baselines = [
            -descent,
            0.8 * ascent,
            0.8 * x_height,
            0.5 - descent,
            0.5 * x_height,
            ascent,
            -descent,
            0.0,
        ];
        Self {
            units_per_em,
            ascent,
            descent,
            ascent_max,
            descent_max,
            x_height,
            cap_height,
            baselines,
        }
    }

    /// Returns the offset of `baseline` from the alphabetic baseline.
    pub fn baseline(&self, baseline: Baseline) -> f32 {
        self.baselines[baseline as usize]
    }
}

fn glyph_top(face: &impl FaceTables, ch: char) -> Option<f32> {
    let glyph = face.map_char(ch)?;
    Some(face.bounds(glyph)?.y_max)
}
