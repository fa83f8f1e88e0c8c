// Copyright 2026 the Fontprobe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement through a shaping engine.
//!
//! A [`TextShaper`] sets a font from a CSS style, lays out a string at a large absolute size
//! and reads back per-character extents normalized to the em. It is a small state machine:
//! a style must be set before text is rendered, and text must be rendered before extents
//! are read.

#[cfg(feature = "pango")]
mod pango_engine;

#[cfg(feature = "pango")]
pub use pango_engine::PangoEngine;

use core::cell::OnceCell;

use font_attrs::css;
use font_attrs::shaping::{Stretch, Style, Variant, Weight};
use fontmatch::StyleDescriptor;
use hashbrown::HashSet;

/// Errors that can occur while measuring text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapingError {
    /// The engine could not load any font for the description.
    #[error("no font could be loaded for {family}")]
    FontUnavailable {
        /// The family list that was requested.
        family: String,
    },
    /// Text was rendered before a style was set.
    #[error("no text style has been set")]
    NotConfigured,
    /// Extents were requested before text was rendered.
    #[error("no text has been rendered")]
    NotRendered,
}

/// A rectangle in engine units.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct UnitRect {
    /// Left edge.
    pub x: i32,
    /// Top edge, growing downward.
    pub y: i32,
    /// Width.
    pub width: i32,
    /// Height.
    pub height: i32,
}

/// Line metrics of a loaded font in engine units.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct UnitFontMetrics {
    /// Line height.
    pub height: i32,
    /// Ascent.
    pub ascent: i32,
    /// Descent.
    pub descent: i32,
}

/// The ink and logical rectangles of one cluster in engine units.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct UnitClusterExtents {
    /// Extents of the drawn glyphs.
    pub ink: UnitRect,
    /// Extents used for positioning.
    pub logical: UnitRect,
}

/// A font request for a [`ShapingEngine`].
#[derive(Clone, Debug, PartialEq)]
pub struct FontDescription {
    /// Comma separated family list.
    pub family: String,
    /// Weight.
    pub weight: Weight,
    /// Style.
    pub style: Style,
    /// Variant.
    pub variant: Variant,
    /// Stretch.
    pub stretch: Stretch,
    /// Absolute size in points.
    pub size: f64,
}

/// A face known to a [`ShapingEngine`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaceDescription {
    /// Family name.
    pub family: String,
    /// Weight, if it is one of the enumerated weights.
    pub weight: Option<Weight>,
    /// Style.
    pub style: Style,
    /// Stretch.
    pub stretch: Stretch,
}

/// A text layout engine.
///
/// Coordinates are integers in engine units; [`scale`](Self::scale) engine units make one
/// point.
pub trait ShapingEngine {
    /// Engine units per point.
    fn scale(&self) -> i32;

    /// Loads the best font for `description` and makes it the layout font.
    ///
    /// Returns `None`, leaving the layout font unchanged, if nothing could be loaded.
    fn set_font(&mut self, description: &FontDescription) -> Option<UnitFontMetrics>;

    /// Replaces the layout text.
    fn set_text(&mut self, text: &str);

    /// Returns the extents of the cluster at each character position of the layout text, in
    /// order.
    fn cluster_extents(&self) -> Vec<UnitClusterExtents>;

    /// Returns the number of characters the layout font has no glyph for.
    fn unknown_glyphs(&self) -> usize;

    /// Lists every face the engine can use.
    fn faces(&self) -> Vec<FaceDescription>;

    /// Returns whether a line may break before each character of `text` and at its end.
    fn line_breaks(&self, text: &str) -> Vec<bool>;
}

/// Options for a [`TextShaper`].
#[derive(Copy, Clone, Debug)]
pub struct ShaperOptions {
    /// Absolute size text is rendered at, in points.
    ///
    /// All results are divided by it; a large size keeps sub-unit precision. The default value
    /// is 4096.
    pub render_size: f64,
}

impl Default for ShaperOptions {
    fn default() -> Self {
        Self {
            render_size: 4096.0,
        }
    }
}

/// Line metrics of the current font as fractions of the em.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct LineMetrics {
    /// Line height.
    pub height: f64,
    /// Ascent.
    pub ascent: f64,
    /// Descent.
    pub descent: f64,
}

/// Extents of one character as `[x, y, width, height]` fractions of the em.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ClusterExtents {
    /// Logical rectangle relative to the layout origin.
    pub logical: [f64; 4],
    /// Ink rectangle relative to the layout origin.
    pub ink: [f64; 4],
    /// Ink rectangle relative to the character's own origin on the baseline.
    pub ink_rel: [f64; 4],
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum State {
    Unconfigured,
    Configured,
    Rendered,
}

/// Measures text with a [`ShapingEngine`].
#[derive(Debug)]
pub struct TextShaper<E> {
    engine: E,
    options: ShaperOptions,
    state: State,
    metrics: Option<LineMetrics>,
    face_styles: OnceCell<Vec<StyleDescriptor>>,
}

impl<E: ShapingEngine> TextShaper<E> {
    /// Creates a shaper with default options.
    pub fn new(engine: E) -> Self {
        Self::with_options(engine, ShaperOptions::default())
    }

    /// Creates a shaper.
    pub fn with_options(engine: E, options: ShaperOptions) -> Self {
        Self {
            engine,
            options,
            state: State::Unconfigured,
            metrics: None,
            face_styles: OnceCell::new(),
        }
    }

    /// Returns the engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Returns the metrics of the current font, if a style has been set.
    pub fn metrics(&self) -> Option<LineMetrics> {
        self.metrics
    }

    /// Sets the font from a CSS style.
    ///
    /// Missing font properties take their initial values. On failure the previous font, if
    /// any, stays in effect.
    pub fn set_text_style(&mut self, style: &StyleDescriptor) -> Result<LineMetrics, ShapingError> {
        let description = self.describe(style);
        let Some(raw) = self.engine.set_font(&description) else {
            log::warn!("the shaping engine could not load {}", description.family);
            return Err(ShapingError::FontUnavailable {
                family: description.family,
            });
        };
        let metrics = LineMetrics {
            height: self.to_em(raw.height),
            ascent: self.to_em(raw.ascent),
            descent: self.to_em(raw.descent),
        };
        self.metrics = Some(metrics);
        self.state = State::Configured;
        Ok(metrics)
    }

    /// Lays out `text` with the current font.
    pub fn render_text(&mut self, text: &str) -> Result<(), ShapingError> {
        if self.state == State::Unconfigured {
            return Err(ShapingError::NotConfigured);
        }
        self.engine.set_text(text);
        self.state = State::Rendered;
        Ok(())
    }

    /// Returns the extents of each character of the rendered text and the number of
    /// characters without a glyph.
    ///
    /// Extents are only computed where `needed` is `true`; other positions, including those
    /// past the end of `needed`, are `None`. `ascent` is the em-relative ascent used to place
    /// [`ink_rel`](ClusterExtents::ink_rel) on the baseline.
    ///
    /// Engine coordinates are 32-bit and wrap around on long lines. Whenever the logical `x`
    /// of a needed character turns negative after a non-negative one, a full period of the
    /// coordinate space is added to it and to every later position.
    pub fn character_extents(
        &self,
        ascent: f64,
        needed: &[bool],
    ) -> Result<(Vec<Option<ClusterExtents>>, usize), ShapingError> {
        if self.state != State::Rendered {
            return Err(ShapingError::NotRendered);
        }
        let period = 2_f64.powi(32) / (f64::from(self.engine.scale()) * self.options.render_size);
        let mut unwrap = 0.0;
        let mut last_non_negative = true;
        let extents = self
            .engine
            .cluster_extents()
            .into_iter()
            .enumerate()
            .map(|(i, cluster)| {
                if !needed.get(i).copied().unwrap_or(false) {
                    return None;
                }
                let mut extents = self.process_extents(&cluster, ascent);
                if extents.logical[0] < 0.0 && last_non_negative {
                    unwrap += period;
                }
                last_non_negative = extents.logical[0] >= 0.0;
                extents.logical[0] += unwrap;
                extents.ink[0] += unwrap;
                Some(extents)
            })
            .collect();
        Ok((extents, self.engine.unknown_glyphs()))
    }

    /// Returns one flag per character of `text` plus one for its end, `true` where a line may
    /// break before that position.
    ///
    /// This does not depend on the current style.
    pub fn line_breaks(&self, text: &str) -> Vec<bool> {
        let mut breaks = self.engine.line_breaks(text);
        breaks.resize(text.chars().count() + 1, false);
        breaks
    }

    /// Lists every face the engine knows as a CSS style, sorted by family.
    ///
    /// Each style has `font-family` and, where they have CSS equivalents, `font-stretch`,
    /// a numeric `font-weight` and `font-style`. Faces with the same CSS style are listed once.
    pub fn face_styles(&self) -> &[StyleDescriptor] {
        self.face_styles.get_or_init(|| {
            let mut faces = self.engine.faces();
            faces.sort_by(|a, b| a.family.cmp(&b.family));
            let mut seen = HashSet::new();
            faces
                .into_iter()
                .map(|face| {
                    let mut style = StyleDescriptor::new()
                        .with(css::FONT_FAMILY, face.family)
                        .with(css::FONT_STRETCH, face.stretch.to_css());
                    if let Some(weight) = face.weight.and_then(Weight::to_css) {
                        style.insert(css::FONT_WEIGHT, weight);
                    }
                    style.insert(css::FONT_STYLE, face.style.to_css());
                    style
                })
                .filter(|style| seen.insert(style.clone()))
                .collect()
        })
    }

    fn describe(&self, style: &StyleDescriptor) -> FontDescription {
        let get = |name| {
            style
                .get(name)
                .or_else(|| css::initial_value(name))
                .unwrap_or(css::NORMAL)
        };
        let mut family = String::new();
        for name in get(css::FONT_FAMILY).split(',') {
            let name = name.trim().trim_matches('"').trim_matches('\'');
            if !name.is_empty() {
                family.push_str(name);
                family.push(',');
            }
        }
        FontDescription {
            family,
            weight: Weight::from_css(get(css::FONT_WEIGHT)),
            style: Style::from_css(get(css::FONT_STYLE)),
            variant: Variant::from_css(get(css::FONT_VARIANT)),
            stretch: Stretch::from_css(get(css::FONT_STRETCH)),
            size: self.options.render_size,
        }
    }

    fn process_extents(&self, cluster: &UnitClusterExtents, ascent: f64) -> ClusterExtents {
        let rect = |r: &UnitRect| {
            [
                self.to_em(r.x),
                self.to_em(r.y),
                self.to_em(r.width),
                self.to_em(r.height),
            ]
        };
        let logical = rect(&cluster.logical);
        let ink = rect(&cluster.ink);
        let ink_rel = [
            ink[0] - logical[0],
            ink[1] - logical[1] - ascent,
            ink[2],
            ink[3],
        ];
        ClusterExtents {
            logical,
            ink,
            ink_rel,
        }
    }

    fn to_em(&self, units: i32) -> f64 {
        f64::from(units) / f64::from(self.engine.scale()) / self.options.render_size
    }
}
