// Copyright 2026 the Fontprobe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pango shaping engine.

#![allow(unsafe_code, reason = "Pango has no safe binding for logical attributes")]

use font_attrs::shaping::{Stretch, Style, Variant, Weight};
use pango::prelude::*;

use super::{
    FaceDescription, FontDescription, ShapingEngine, UnitClusterExtents, UnitFontMetrics,
    UnitRect,
};

/// A [`ShapingEngine`] backed by Pango with the Cairo font map.
///
/// The font map, context and layout are created once and reused for every measurement.
#[derive(Debug)]
pub struct PangoEngine {
    font_map: pango::FontMap,
    context: pango::Context,
    layout: pango::Layout,
}

impl PangoEngine {
    /// Creates an engine over the default Cairo font map.
    pub fn new() -> Self {
        let font_map = pangocairo::FontMap::new();
        let context = font_map.create_context();
        let layout = pango::Layout::new(&context);
        Self {
            font_map,
            context,
            layout,
        }
    }
}

impl Default for PangoEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapingEngine for PangoEngine {
    fn scale(&self) -> i32 {
        pango::SCALE
    }

    fn set_font(&mut self, description: &FontDescription) -> Option<UnitFontMetrics> {
        let mut desc = pango::FontDescription::from_string(&description.family);
        desc.set_weight(to_pango_weight(description.weight));
        desc.set_variant(match description.variant {
            Variant::Normal => pango::Variant::Normal,
            Variant::SmallCaps => pango::Variant::SmallCaps,
        });
        desc.set_style(to_pango_style(description.style));
        desc.set_stretch(to_pango_stretch(description.stretch));
        desc.set_absolute_size(f64::from(pango::units_from_double(description.size)));

        let font = self.font_map.load_font(&self.context, &desc)?;
        self.layout.set_font_description(Some(&desc));
        let metrics = font.metrics(None);
        Some(UnitFontMetrics {
            height: metrics.height(),
            ascent: metrics.ascent(),
            descent: metrics.descent(),
        })
    }

    fn set_text(&mut self, text: &str) {
        self.layout.set_text(text);
    }

    fn cluster_extents(&self) -> Vec<UnitClusterExtents> {
        let mut iter = self.layout.iter();
        let mut extents = Vec::new();
        loop {
            let (ink, logical) = iter.cluster_extents();
            extents.push(UnitClusterExtents {
                ink: to_unit_rect(&ink),
                logical: to_unit_rect(&logical),
            });
            if !iter.next_char() {
                break;
            }
        }
        extents
    }

    fn unknown_glyphs(&self) -> usize {
        usize::try_from(self.layout.unknown_glyphs_count()).unwrap_or(0)
    }

    fn faces(&self) -> Vec<FaceDescription> {
        self.font_map
            .list_families()
            .iter()
            .flat_map(|family| family.list_faces())
            .map(|face| {
                let desc = face.describe();
                FaceDescription {
                    family: desc.family().map(|name| name.to_string()).unwrap_or_default(),
                    weight: from_pango_weight(desc.weight()),
                    style: match desc.style() {
                        pango::Style::Italic => Style::Italic,
                        pango::Style::Oblique => Style::Oblique,
                        _ => Style::Normal,
                    },
                    stretch: from_pango_stretch(desc.stretch()),
                }
            })
            .collect()
    }

    fn line_breaks(&self, text: &str) -> Vec<bool> {
        let mut attrs = vec![LogAttr(0); text.chars().count() + 1];
        let (Ok(length), Ok(attrs_len)) = (i32::try_from(text.len()), i32::try_from(attrs.len()))
        else {
            return Vec::new();
        };
        // SAFETY: `text` is valid UTF-8 of `length` bytes and `attrs` holds one attribute per
        // character plus one, each with the size of a `PangoLogAttr`.
        unsafe {
            pango::ffi::pango_get_log_attrs(
                text.as_ptr().cast(),
                length,
                -1,
                pango::ffi::pango_language_get_default(),
                attrs.as_mut_ptr().cast(),
                attrs_len,
            );
        }
        attrs.into_iter().map(LogAttr::is_line_break).collect()
    }
}

/// A `PangoLogAttr`: 32 bits of flags, `is_line_break` in the lowest.
#[derive(Copy, Clone)]
#[repr(transparent)]
struct LogAttr(u32);

impl LogAttr {
    fn is_line_break(self) -> bool {
        self.0 & 1 != 0
    }
}

fn to_unit_rect(rect: &pango::Rectangle) -> UnitRect {
    UnitRect {
        x: rect.x(),
        y: rect.y(),
        width: rect.width(),
        height: rect.height(),
    }
}

const WEIGHTS: [(Weight, pango::Weight); 12] = [
    (Weight::Thin, pango::Weight::Thin),
    (Weight::Ultralight, pango::Weight::Ultralight),
    (Weight::Light, pango::Weight::Light),
    (Weight::Semilight, pango::Weight::Semilight),
    (Weight::Book, pango::Weight::Book),
    (Weight::Normal, pango::Weight::Normal),
    (Weight::Medium, pango::Weight::Medium),
    (Weight::Semibold, pango::Weight::Semibold),
    (Weight::Bold, pango::Weight::Bold),
    (Weight::Ultrabold, pango::Weight::Ultrabold),
    (Weight::Heavy, pango::Weight::Heavy),
    (Weight::Ultraheavy, pango::Weight::Ultraheavy),
];

const STRETCHES: [(Stretch, pango::Stretch); 9] = [
    (Stretch::UltraCondensed, pango::Stretch::UltraCondensed),
    (Stretch::ExtraCondensed, pango::Stretch::ExtraCondensed),
    (Stretch::Condensed, pango::Stretch::Condensed),
    (Stretch::SemiCondensed, pango::Stretch::SemiCondensed),
    (Stretch::Normal, pango::Stretch::Normal),
    (Stretch::SemiExpanded, pango::Stretch::SemiExpanded),
    (Stretch::Expanded, pango::Stretch::Expanded),
    (Stretch::ExtraExpanded, pango::Stretch::ExtraExpanded),
    (Stretch::UltraExpanded, pango::Stretch::UltraExpanded),
];

fn to_pango_weight(weight: Weight) -> pango::Weight {
    WEIGHTS
        .iter()
        .find(|(ours, _)| *ours == weight)
        .map_or(pango::Weight::Normal, |(_, theirs)| *theirs)
}

fn from_pango_weight(weight: pango::Weight) -> Option<Weight> {
    WEIGHTS
        .iter()
        .find(|(_, theirs)| *theirs == weight)
        .map(|(ours, _)| *ours)
}

fn to_pango_style(style: Style) -> pango::Style {
    match style {
        Style::Normal => pango::Style::Normal,
        Style::Oblique => pango::Style::Oblique,
        Style::Italic => pango::Style::Italic,
    }
}

fn to_pango_stretch(stretch: Stretch) -> pango::Stretch {
    STRETCHES
        .iter()
        .find(|(ours, _)| *ours == stretch)
        .map_or(pango::Stretch::Normal, |(_, theirs)| *theirs)
}

fn from_pango_stretch(stretch: pango::Stretch) -> Stretch {
    STRETCHES
        .iter()
        .find(|(_, theirs)| *theirs == stretch)
        .map_or(Stretch::Normal, |(ours, _)| *ours)
}
