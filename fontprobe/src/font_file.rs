// Copyright 2026 the Fontprobe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Font files read from disk.

#![allow(unsafe_code, reason = "font files are memory mapped")]

use std::{
    fs::File,
    path::{Path, PathBuf},
    rc::Rc,
};

use hashbrown::HashMap;
use memmap2::Mmap;
use read_fonts::{
    FileRef, FontRef, TableProvider as _,
    tables::{
        cmap::{Cmap, CmapSubtable, PlatformId},
        gsub::SubstitutionSubtables,
        kern::SubtableKind,
        mvar::tags::{CPHT, HASC, HDSC, XHGT},
        os2::SelectionFlags,
    },
    types::{GlyphId, Tag},
};
use skrifa::{
    MetadataProvider as _,
    instance::{Location, Size},
    string::StringId,
};

use crate::{
    FaceTables, GlyphBounds, HheaInfo, LigaturePair, MetricsError, Os2Info, TableLoader,
    VariationAxis,
};

/// One face of a memory mapped font file.
#[derive(Clone, Debug)]
pub struct FontFile {
    data: Rc<Mmap>,
    index: u32,
    units_per_em: u16,
    location: Location,
}

impl FontFile {
    fn new(data: Rc<Mmap>, index: u32, path: &Path) -> Result<Self, MetricsError> {
        let units_per_em = {
            let font = FontRef::from_index(&data, index)
                .map_err(|err| MetricsError::invalid_font(path, err))?;
            let head = font
                .head()
                .map_err(|err| MetricsError::invalid_font(path, err))?;
            head.units_per_em()
        };
        Ok(Self {
            data,
            index,
            units_per_em,
            location: Location::default(),
        })
    }

    /// Returns the index of the face in its file.
    pub fn index(&self) -> u32 {
        self.index
    }

    // The directory was validated in `new`.
    fn font(&self) -> Option<FontRef<'_>> {
        FontRef::from_index(&self.data, self.index).ok()
    }

    /// Applies the `MVAR` delta for `tag` at the current location to `value`.
    fn varied(&self, font: &FontRef<'_>, tag: Tag, value: i16) -> i16 {
        let coords = self.location.coords();
        if coords.is_empty() {
            return value;
        }
        let Ok(mvar) = font.mvar() else {
            return value;
        };
        let delta = mvar
            .metric_delta(tag, coords)
            .map_or(0.0, |delta| delta.to_f64());
        round_to_i16(f64::from(value) + delta)
    }
}

/// Unicode subtables in order of preference. Symbol subtables are not Unicode maps and are
/// never used.
const UNICODE_SUBTABLES: [(PlatformId, u16); 8] = [
    (PlatformId::Windows, 10),
    (PlatformId::Unicode, 6),
    (PlatformId::Unicode, 4),
    (PlatformId::Windows, 1),
    (PlatformId::Unicode, 3),
    (PlatformId::Unicode, 2),
    (PlatformId::Unicode, 1),
    (PlatformId::Unicode, 0),
];

fn unicode_subtable<'a>(cmap: &Cmap<'a>) -> Option<CmapSubtable<'a>> {
    let records = cmap.encoding_records();
    UNICODE_SUBTABLES
        .iter()
        .find_map(|&(platform, encoding)| {
            records
                .iter()
                .find(|record| {
                    record.platform_id() == platform && record.encoding_id() == encoding
                })?
                .subtable(cmap.offset_data())
                .ok()
        })
}

#[expect(clippy::cast_possible_truncation, reason = "float to int casts saturate")]
fn round_to_i16(value: f64) -> i16 {
    value.round() as i16
}

impl FaceTables for FontFile {
    fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    fn os2(&self) -> Option<Os2Info> {
        let font = self.font()?;
        let os2 = font.os2().ok()?;
        Some(Os2Info {
            version: os2.version(),
            weight_class: os2.us_weight_class(),
            width_class: os2.us_width_class(),
            italic: os2.fs_selection().contains(SelectionFlags::ITALIC),
            typo_ascender: self.varied(&font, HASC, os2.s_typo_ascender()),
            typo_descender: self.varied(&font, HDSC, os2.s_typo_descender()),
            x_height: os2
                .sx_height()
                .map(|x_height| self.varied(&font, XHGT, x_height)),
            cap_height: os2
                .s_cap_height()
                .map(|cap_height| self.varied(&font, CPHT, cap_height)),
        })
    }

    fn hhea(&self) -> Option<HheaInfo> {
        let hhea = self.font()?.hhea().ok()?;
        Some(HheaInfo {
            ascender: hhea.ascender().to_i16(),
            descender: hhea.descender().to_i16(),
        })
    }

    fn subfamily_name(&self) -> Option<String> {
        self.font()?
            .localized_strings(StringId::SUBFAMILY_NAME)
            .english_or_first()
            .map(|name| name.to_string())
    }

    fn axes(&self) -> Vec<VariationAxis> {
        let Some(font) = self.font() else {
            return Vec::new();
        };
        font.axes()
            .iter()
            .map(|axis| VariationAxis {
                tag: axis.tag(),
                min: axis.min_value(),
                default: axis.default_value(),
                max: axis.max_value(),
            })
            .collect()
    }

    fn set_variations(&mut self, settings: &[(Tag, f32)]) {
        let location = self
            .font()
            .map(|font| font.axes().location(settings.iter().copied()));
        if let Some(location) = location {
            self.location = location;
        }
    }

    fn has_char_map(&self) -> bool {
        self.font()
            .and_then(|font| font.cmap().ok())
            .is_some_and(|cmap| unicode_subtable(&cmap).is_some())
    }

    fn map_char(&self, ch: char) -> Option<GlyphId> {
        let cmap = self.font()?.cmap().ok()?;
        unicode_subtable(&cmap)?.map_codepoint(ch)
    }

    fn advance_width(&self, glyph: GlyphId) -> Option<f32> {
        self.font()?
            .glyph_metrics(Size::unscaled(), &self.location)
            .advance_width(glyph)
    }

    fn bounds(&self, glyph: GlyphId) -> Option<GlyphBounds> {
        let bounds = self
            .font()?
            .glyph_metrics(Size::unscaled(), &self.location)
            .bounds(glyph)?;
        Some(GlyphBounds {
            x_min: bounds.x_min,
            y_min: bounds.y_min,
            x_max: bounds.x_max,
            y_max: bounds.y_max,
        })
    }

    fn kerning(&self, left: GlyphId, right: GlyphId) -> Option<i32> {
        let kern = self.font()?.kern().ok()?;
        kern.subtables()
            .find_map(|subtable| match subtable.ok()?.kind().ok()? {
                SubtableKind::Format0(pairs) => pairs.kerning(left, right),
                _ => None,
            })
    }

    fn ligatures(&self) -> Vec<LigaturePair> {
        let mut pairs = Vec::new();
        let Some(font) = self.font() else {
            return pairs;
        };
        let Ok(lookups) = font.gsub().and_then(|gsub| gsub.lookup_list()) else {
            return pairs;
        };
        for lookup in lookups.lookups().iter().flatten() {
            // Extension lookups are unwrapped by `subtables`.
            let Ok(SubstitutionSubtables::Ligature(subtables)) = lookup.subtables() else {
                continue;
            };
            for subtable in subtables.iter().flatten() {
                let Ok(coverage) = subtable.coverage() else {
                    continue;
                };
                for (first, set) in coverage.iter().zip(subtable.ligature_sets().iter()) {
                    let Ok(set) = set else {
                        continue;
                    };
                    for ligature in set.ligatures().iter().flatten() {
                        if let [second] = ligature.component_glyph_ids() {
                            pairs.push(LigaturePair {
                                first: first.into(),
                                second: second.get().into(),
                                ligature: ligature.ligature_glyph().into(),
                            });
                        }
                    }
                }
            }
        }
        pairs
    }
}

/// Opens font files by memory mapping them.
///
/// A file is mapped once and shared by every face opened from it.
#[derive(Debug, Default)]
pub struct FileLoader {
    mapped: HashMap<PathBuf, Rc<Mmap>>,
}

impl FileLoader {
    /// Creates a loader with nothing mapped.
    pub fn new() -> Self {
        Self::default()
    }

    fn map(&mut self, path: &Path) -> Result<Rc<Mmap>, MetricsError> {
        if let Some(data) = self.mapped.get(path) {
            return Ok(data.clone());
        }
        let file = File::open(path).map_err(|err| MetricsError::io(path, err))?;
        let data = unsafe { Mmap::map(&file) }.map_err(|err| MetricsError::io(path, err))?;
        let data = Rc::new(data);
        self.mapped.insert(path.to_owned(), data.clone());
        Ok(data)
    }
}

impl TableLoader for FileLoader {
    type Face = FontFile;

    fn face_count(&mut self, path: &Path) -> Result<u32, MetricsError> {
        let data = self.map(path)?;
        let file = FileRef::new(&data).map_err(|err| MetricsError::invalid_font(path, err))?;
        let count = match file {
            FileRef::Font(_) => 1,
            FileRef::Collection(collection) => collection.len(),
        };
        Ok(count)
    }

    fn open(&mut self, path: &Path, index: u32) -> Result<FontFile, MetricsError> {
        let count = self.face_count(path)?;
        if index >= count {
            return Err(MetricsError::FaceIndexOutOfRange {
                path: path.to_owned(),
                index,
                count,
            });
        }
        FontFile::new(self.map(path)?, index, path)
    }
}
