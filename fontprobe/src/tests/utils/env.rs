// Copyright 2026 the Fontprobe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::{Path, PathBuf};

use font_attrs::{FcSlant, FcWeight};
use fontmatch::{MemoryFace, MemorySource, StyleDescriptor};
use read_fonts::types::GlyphId;

use super::{SyntheticFace, SyntheticLoader};
use crate::{FileLoader, FontService};

pub(crate) type TestService = FontService<MemorySource, SyntheticLoader>;

/// Path of a font file in `tests/assets`.
pub(crate) fn test_font(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("assets")
        .join(name)
}

/// Builds a style from `(property, value)` pairs.
pub(crate) fn style(properties: &[(&str, &str)]) -> StyleDescriptor {
    properties.iter().copied().collect()
}

const LATIN: &str = "AVax";

/// A service over a small Arial family, a DejaVu Sans fallback and a symbol font without a
/// character map.
pub(crate) fn arial_service() -> TestService {
    let source = MemorySource::new()
        .with(MemoryFace::new("Arial", LATIN.chars()).file("/fonts/arial.ttf", None))
        .with(
            MemoryFace::new("Arial", LATIN.chars())
                .weight(FcWeight::BOLD)
                .file("/fonts/arialbd.ttf", None),
        )
        .with(
            MemoryFace::new("Arial", LATIN.chars())
                .slant(FcSlant::ITALIC)
                .file("/fonts/ariali.ttf", None),
        )
        .with(
            MemoryFace::new("DejaVu Sans", LATIN.chars().chain(['Ω']))
                .file("/fonts/DejaVuSans.ttf", None),
        )
        .with(MemoryFace::new("Symbol", ['∑']).file("/fonts/symbol.ttf", None));

    let bold = SyntheticFace::latin()
        .classes(700, 5, false)
        .glyph('f', 333.0, [20.0, 0.0, 380.0, 730.0])
        .glyph('i', 278.0, [60.0, 0.0, 200.0, 716.0])
        .kern('A', 'V', -74)
        .kern('f', 'i', 50)
        .ligature('f', 'i', GlyphId::new(200), 600.0);
    let loader = SyntheticLoader::new()
        .file("/fonts/arial.ttf", vec![SyntheticFace::latin()])
        .file("/fonts/arialbd.ttf", vec![bold])
        .file("/fonts/ariali.ttf", vec![
            SyntheticFace::latin().classes(400, 5, true),
        ])
        .file("/fonts/DejaVuSans.ttf", vec![
            SyntheticFace::latin().glyph('Ω', 768.0, [40.0, 0.0, 728.0, 729.0]),
        ])
        .file("/fonts/symbol.ttf", vec![
            SyntheticFace::new(2048).without_char_map(),
        ]);
    FontService::new(source, loader)
}

/// A service over the font files in `tests/assets`: a static bold face, a variable face with a
/// `wght` axis and a face with only a symbol character map.
pub(crate) fn file_service() -> FontService<MemorySource, FileLoader> {
    const CHARS: &str = "AVIfix ";
    let source = MemorySource::new()
        .with(
            MemoryFace::new("Fontprobe Test", CHARS.chars())
                .weight(FcWeight::BOLD)
                .file(test_font("fontprobe_test.ttf"), None),
        )
        .with(
            MemoryFace::new("Fontprobe Test Variable", CHARS.chars())
                .variable_weight()
                .file(test_font("fontprobe_test_variable.ttf"), None),
        )
        .with(
            MemoryFace::new("Fontprobe Test Symbol", ['\u{f041}'])
                .file(test_font("fontprobe_test_symbol.ttf"), None),
        );
    FontService::new(source, FileLoader::new())
}
