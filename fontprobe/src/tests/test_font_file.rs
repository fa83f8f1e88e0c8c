// Copyright 2026 the Fontprobe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Table reads from real font files.

use read_fonts::types::{GlyphId, Tag};

use super::utils::{file_service, style, test_font};
use crate::{
    FaceSelection, FaceTables, FileLoader, FontFile, FontInstance, FontMetrics, LigaturePair,
    MetricsError, TableLoader, VariationAxis,
};

const NOT_SCORED: FaceSelection = FaceSelection {
    index: 0,
    score: None,
};

fn open(name: &str) -> FontFile {
    FileLoader::new().open(&test_font(name), 0).unwrap()
}

#[test]
fn static_tables() {
    let mut loader = FileLoader::new();
    let path = test_font("fontprobe_test.ttf");
    assert_eq!(loader.face_count(&path).unwrap(), 1);
    let err = loader.open(&path, 1).unwrap_err();
    assert!(
        matches!(err, MetricsError::FaceIndexOutOfRange { count: 1, .. }),
        "{err}"
    );

    let face = loader.open(&path, 0).unwrap();
    assert_eq!(face.index(), 0);
    assert_eq!(face.units_per_em(), 1000);
    let os2 = face.os2().unwrap();
    assert_eq!((os2.weight_class, os2.width_class), (700, 5));
    assert!(!os2.italic);
    assert_eq!((os2.typo_ascender, os2.typo_descender), (800, -200));
    assert_eq!((os2.x_height, os2.cap_height), (Some(510), Some(690)));
    let hhea = face.hhea().unwrap();
    assert_eq!((hhea.ascender, hhea.descender), (900, -300));
    assert_eq!(face.subfamily_name().as_deref(), Some("Bold"));
    assert!(face.axes().is_empty());
}

#[test]
fn unicode_map_wins_over_symbol_map() {
    let face = open("fontprobe_test.ttf");
    assert!(face.has_char_map());
    // The symbol subtable maps 'A' to the glyph of 'V'.
    assert_eq!(face.map_char('A'), Some(GlyphId::new(1)));
    assert_eq!(face.map_char('V'), Some(GlyphId::new(2)));
    assert_eq!(face.map_char('\u{f041}'), None);
}

#[test]
fn symbol_only_face_has_no_char_map() {
    let face = open("fontprobe_test_symbol.ttf");
    assert!(!face.has_char_map());
    assert_eq!(face.map_char('A'), None);
    assert_eq!(face.map_char('\u{f041}'), None);
    let instance = FontInstance::new(face, NOT_SCORED);
    assert_eq!(instance.char_advances(['A'], [('A', 'V')]), None);
}

#[test]
fn kerning_and_ligature_tables() {
    let face = open("fontprobe_test.ttf");
    let [a, v, f, i] = ['A', 'V', 'f', 'i'].map(|ch| face.map_char(ch).unwrap());
    assert_eq!(face.kerning(a, v), Some(-80));
    assert_eq!(face.kerning(v, a), Some(-60));
    assert_eq!(face.kerning(f, i), Some(-20));
    assert_eq!(face.kerning(a, f), None);
    // The ligature lookup sits behind an extension lookup.
    assert_eq!(face.ligatures(), vec![LigaturePair {
        first: f,
        second: i,
        ligature: GlyphId::new(7),
    }]);
}

#[test]
fn advances_and_ink_boxes() {
    let instance = FontInstance::new(open("fontprobe_test.ttf"), NOT_SCORED);
    let result = instance
        .char_advances("AV fi".chars(), [
            ('A', 'V'),
            ('V', 'A'),
            ('f', 'i'),
            ('i', 'f'),
        ])
        .unwrap();
    assert_eq!(result.advances[&'A'], Some(0.6));
    assert_eq!(result.advances[&'V'], Some(0.62));
    assert_eq!(result.advances[&' '], Some(0.25));
    assert_eq!(result.ink_boxes[&'A'], [0.01, -0.7, 0.58, 0.7]);
    assert_eq!(result.ink_boxes[&' '], [0.0; 4]);
    assert_eq!(result.pair_adjustments[&('A', 'V')], -0.08);
    assert_eq!(result.pair_adjustments[&('V', 'A')], -0.06);
    // 520 - 300 - 250, not the -20 kerning pair.
    assert_eq!(result.pair_adjustments[&('f', 'i')], -0.03);
    assert_eq!(result.pair_adjustments[&('i', 'f')], 0.0);
}

#[test]
fn vertical_metrics() {
    let metrics = FontMetrics::from_face(&open("fontprobe_test.ttf"));
    assert_eq!(metrics.units_per_em, 1000);
    assert_eq!(metrics.ascent, 0.8);
    assert_eq!(metrics.descent, 0.2);
    assert_eq!(metrics.ascent_max, 0.9);
    assert_eq!(metrics.descent_max, 0.3);
    assert_eq!(metrics.x_height, 0.51);
    assert_eq!(metrics.cap_height, 0.69);
}

#[test]
fn variable_metrics_follow_location() {
    let mut face = open("fontprobe_test_variable.ttf");
    let wght = Tag::new(b"wght");
    assert_eq!(face.axes(), vec![VariationAxis {
        tag: wght,
        min: 100.0,
        default: 400.0,
        max: 900.0,
    }]);
    assert_eq!(face.os2().unwrap().typo_ascender, 800);

    face.set_variations(&[(wght, 900.0)]);
    let os2 = face.os2().unwrap();
    assert_eq!((os2.typo_ascender, os2.typo_descender), (900, -250));
    assert_eq!((os2.x_height, os2.cap_height), (Some(540), Some(710)));
    // `hhea` has no `MVAR` entries.
    assert_eq!(face.hhea().unwrap().ascender, 900);

    face.set_variations(&[(wght, 650.0)]);
    let os2 = face.os2().unwrap();
    assert_eq!((os2.typo_ascender, os2.typo_descender), (850, -225));
    assert_eq!((os2.x_height, os2.cap_height), (Some(525), Some(700)));
}

#[test]
fn bold_request_instances_variable_file() {
    let mut service = file_service();
    let reduced = service.font_style(&style(&[
        ("font-family", "Fontprobe Test Variable"),
        ("font-weight", "bold"),
    ]));
    let font = service.font_instance(&reduced).unwrap();
    // wght 700 is 0.6 of the way to the maximum.
    let os2 = font.face().os2().unwrap();
    assert_eq!((os2.typo_ascender, os2.typo_descender), (860, -230));
    assert_eq!(os2.x_height, Some(528));
    assert_eq!(font.metrics().x_height, 0.528);
}

#[test]
fn measures_files_through_service() {
    let mut service = file_service();
    let bold = service.font_style(&style(&[
        ("font-family", "Fontprobe Test"),
        ("font-weight", "700"),
    ]));
    let advances = service
        .char_advances(&bold, "AV".chars(), [('A', 'V')])
        .unwrap()
        .unwrap();
    assert_eq!(advances.advances[&'V'], Some(0.62));
    assert_eq!(advances.pair_adjustments[&('A', 'V')], -0.08);

    let symbol = service.font_style(&style(&[("font-family", "Fontprobe Test Symbol")]));
    assert_eq!(
        service
            .char_advances(&symbol, "A".chars(), [('A', 'V')])
            .unwrap(),
        None
    );
}
