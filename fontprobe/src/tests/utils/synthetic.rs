// Copyright 2026 the Fontprobe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::io;
use std::path::{Path, PathBuf};

use hashbrown::HashMap;
use read_fonts::types::{GlyphId, Tag};

use crate::{
    FaceTables, GlyphBounds, HheaInfo, LigaturePair, MetricsError, Os2Info, TableLoader,
    VariationAxis,
};

/// A face built in memory, glyph by glyph.
#[derive(Clone, Debug)]
pub(crate) struct SyntheticFace {
    units_per_em: u16,
    os2: Option<Os2Info>,
    hhea: Option<HheaInfo>,
    subfamily: Option<String>,
    axes: Vec<VariationAxis>,
    variations: Vec<(Tag, f32)>,
    char_map: bool,
    cmap: HashMap<char, GlyphId>,
    advances: HashMap<GlyphId, f32>,
    bounds: HashMap<GlyphId, GlyphBounds>,
    kerning: HashMap<(GlyphId, GlyphId), i32>,
    ligatures: Vec<LigaturePair>,
}

impl SyntheticFace {
    pub(crate) fn new(units_per_em: u16) -> Self {
        Self {
            units_per_em,
            os2: None,
            hhea: None,
            subfamily: None,
            axes: Vec::new(),
            variations: Vec::new(),
            char_map: true,
            cmap: HashMap::new(),
            advances: HashMap::new(),
            bounds: HashMap::new(),
            kerning: HashMap::new(),
            ligatures: Vec::new(),
        }
    }

    /// A regular 1000 upem face with an 800/200 split and a handful of Latin glyphs.
    pub(crate) fn latin() -> Self {
        Self::new(1000)
            .os2(Os2Info {
                version: 4,
                weight_class: 400,
                width_class: 5,
                italic: false,
                typo_ascender: 800,
                typo_descender: -200,
                x_height: Some(500),
                cap_height: Some(700),
            })
            .hhea(HheaInfo {
                ascender: 900,
                descender: -250,
            })
            .glyph('A', 667.0, [0.0, 0.0, 667.0, 700.0])
            .glyph('V', 667.0, [5.0, 0.0, 662.0, 700.0])
            .glyph('a', 556.0, [30.0, -10.0, 520.0, 500.0])
            .glyph('x', 500.0, [10.0, 0.0, 490.0, 500.0])
    }

    pub(crate) fn os2(mut self, os2: Os2Info) -> Self {
        self.os2 = Some(os2);
        self
    }

    pub(crate) fn hhea(mut self, hhea: HheaInfo) -> Self {
        self.hhea = Some(hhea);
        self
    }

    /// Sets the `OS/2` weight class, width class and italic bit.
    pub(crate) fn classes(mut self, weight_class: u16, width_class: u16, italic: bool) -> Self {
        let os2 = self.os2.get_or_insert_with(Os2Info::default);
        os2.weight_class = weight_class;
        os2.width_class = width_class;
        os2.italic = italic;
        self
    }

    pub(crate) fn subfamily(mut self, name: &str) -> Self {
        self.subfamily = Some(name.to_owned());
        self
    }

    pub(crate) fn axis(mut self, tag: &[u8; 4], min: f32, default: f32, max: f32) -> Self {
        self.axes.push(VariationAxis {
            tag: Tag::new(tag),
            min,
            default,
            max,
        });
        self
    }

    /// Maps `ch` to a new glyph with `bounds` given as `[x_min, y_min, x_max, y_max]`.
    pub(crate) fn glyph(mut self, ch: char, advance: f32, bounds: [f32; 4]) -> Self {
        let glyph = GlyphId::new(self.cmap.len() as u32 + 1);
        self.cmap.insert(ch, glyph);
        self.advances.insert(glyph, advance);
        let [x_min, y_min, x_max, y_max] = bounds;
        self.bounds.insert(glyph, GlyphBounds {
            x_min,
            y_min,
            x_max,
            y_max,
        });
        self
    }

    /// Drops the outline bounds of the glyph for `ch`.
    pub(crate) fn no_bounds(mut self, ch: char) -> Self {
        if let Some(glyph) = self.cmap.get(&ch) {
            self.bounds.remove(glyph);
        }
        self
    }

    pub(crate) fn kern(mut self, left: char, right: char, value: i32) -> Self {
        let pair = (self.cmap[&left], self.cmap[&right]);
        self.kerning.insert(pair, value);
        self
    }

    /// Adds a ligature of `first` and `second` as `glyph` with its own advance.
    pub(crate) fn ligature(mut self, first: char, second: char, glyph: GlyphId, advance: f32) -> Self {
        self.ligatures.push(LigaturePair {
            first: self.cmap[&first],
            second: self.cmap[&second],
            ligature: glyph,
        });
        self.advances.insert(glyph, advance);
        self
    }

    pub(crate) fn without_char_map(mut self) -> Self {
        self.char_map = false;
        self
    }

    /// The variation coordinates last set on the face.
    pub(crate) fn variations(&self) -> &[(Tag, f32)] {
        &self.variations
    }
}

impl FaceTables for SyntheticFace {
    fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    fn os2(&self) -> Option<Os2Info> {
        self.os2
    }

    fn hhea(&self) -> Option<HheaInfo> {
        self.hhea
    }

    fn subfamily_name(&self) -> Option<String> {
        self.subfamily.clone()
    }

    fn axes(&self) -> Vec<VariationAxis> {
        self.axes.clone()
    }

    fn set_variations(&mut self, settings: &[(Tag, f32)]) {
        self.variations = settings.to_vec();
    }

    fn has_char_map(&self) -> bool {
        self.char_map
    }

    fn map_char(&self, ch: char) -> Option<GlyphId> {
        self.cmap.get(&ch).copied()
    }

    fn advance_width(&self, glyph: GlyphId) -> Option<f32> {
        self.advances.get(&glyph).copied()
    }

    fn bounds(&self, glyph: GlyphId) -> Option<GlyphBounds> {
        self.bounds.get(&glyph).copied()
    }

    fn kerning(&self, left: GlyphId, right: GlyphId) -> Option<i32> {
        self.kerning.get(&(left, right)).copied()
    }

    fn ligatures(&self) -> Vec<LigaturePair> {
        self.ligatures.clone()
    }
}

/// A [`TableLoader`] over in-memory "files" of synthetic faces.
#[derive(Debug, Default)]
pub(crate) struct SyntheticLoader {
    files: HashMap<PathBuf, Vec<SyntheticFace>>,
    opened: Vec<(PathBuf, u32)>,
}

impl SyntheticLoader {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn file(mut self, path: impl Into<PathBuf>, faces: Vec<SyntheticFace>) -> Self {
        self.files.insert(path.into(), faces);
        self
    }

    /// Every `(path, index)` opened so far, in order.
    pub(crate) fn opened(&self) -> &[(PathBuf, u32)] {
        &self.opened
    }

    fn faces(&self, path: &Path) -> Result<&[SyntheticFace], MetricsError> {
        self.files.get(path).map(Vec::as_slice).ok_or_else(|| MetricsError::Io {
            path: path.to_owned(),
            source: io::Error::from(io::ErrorKind::NotFound),
        })
    }
}

impl TableLoader for SyntheticLoader {
    type Face = SyntheticFace;

    fn face_count(&mut self, path: &Path) -> Result<u32, MetricsError> {
        Ok(self.faces(path)?.len() as u32)
    }

    fn open(&mut self, path: &Path, index: u32) -> Result<SyntheticFace, MetricsError> {
        let faces = self.faces(path)?;
        let face = faces
            .get(index as usize)
            .cloned()
            .ok_or(MetricsError::FaceIndexOutOfRange {
                path: path.to_owned(),
                index,
                count: faces.len() as u32,
            })?;
        self.opened.push((path.to_owned(), index));
        Ok(face)
    }
}
