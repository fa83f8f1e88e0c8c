// Copyright 2026 the Fontprobe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Numeric attribute codes used by Fontconfig.

use crate::nearest_value;

/// Weight of a font as understood by Fontconfig.
///
/// Fontconfig weights are not on the CSS scale: `NORMAL` is 80 and `BOLD` is 200.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FcWeight(i32);

impl FcWeight {
    /// Thin weight (0).
    pub const THIN: Self = Self(0);
    /// Extra-light weight (40).
    pub const EXTRALIGHT: Self = Self(40);
    /// Alias for [`EXTRALIGHT`](Self::EXTRALIGHT).
    pub const ULTRALIGHT: Self = Self::EXTRALIGHT;
    /// Light weight (50).
    pub const LIGHT: Self = Self(50);
    /// Semi-light weight (55).
    pub const SEMILIGHT: Self = Self(55);
    /// Alias for [`SEMILIGHT`](Self::SEMILIGHT).
    pub const DEMILIGHT: Self = Self::SEMILIGHT;
    /// Book weight (75).
    pub const BOOK: Self = Self(75);
    /// Normal weight (80).
    pub const NORMAL: Self = Self(80);
    /// Alias for [`NORMAL`](Self::NORMAL).
    pub const REGULAR: Self = Self::NORMAL;
    /// Medium weight (100).
    pub const MEDIUM: Self = Self(100);
    /// Semi-bold weight (180).
    pub const SEMIBOLD: Self = Self(180);
    /// Alias for [`SEMIBOLD`](Self::SEMIBOLD).
    pub const DEMIBOLD: Self = Self::SEMIBOLD;
    /// Bold weight (200).
    pub const BOLD: Self = Self(200);
    /// Extra-bold weight (205).
    pub const ULTRABOLD: Self = Self(205);
    /// Alias for [`ULTRABOLD`](Self::ULTRABOLD).
    pub const EXTRABOLD: Self = Self::ULTRABOLD;
    /// Heavy weight (210).
    pub const HEAVY: Self = Self(210);
    /// Alias for [`HEAVY`](Self::HEAVY).
    pub const BLACK: Self = Self::HEAVY;
    /// Extra-black weight (215).
    pub const ULTRABLACK: Self = Self(215);
    /// Alias for [`ULTRABLACK`](Self::ULTRABLACK).
    pub const EXTRABLACK: Self = Self::ULTRABLACK;

    /// Creates a weight from a raw Fontconfig value.
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the raw Fontconfig value.
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Parses a CSS `font-weight` value.
    ///
    /// Only `normal`, `bold` and the multiples of 100 from `100` to `900` are recognized; the
    /// remaining keywords and intermediate numbers are ignored by the host renderer, so they
    /// yield `None` here.
    pub fn parse_css(value: &str) -> Option<Self> {
        Some(match value {
            "normal" | "400" => Self::NORMAL,
            "bold" | "700" => Self::BOLD,
            "100" => Self::THIN,
            "200" => Self::EXTRALIGHT,
            "300" => Self::LIGHT,
            "500" => Self::MEDIUM,
            "600" => Self::SEMIBOLD,
            "800" => Self::ULTRABOLD,
            "900" => Self::HEAVY,
            _ => return None,
        })
    }

    /// Like [`parse_css`](Self::parse_css), falling back to [`NORMAL`](Self::NORMAL).
    pub fn from_css(value: &str) -> Self {
        Self::parse_css(value).unwrap_or(Self::NORMAL)
    }

    /// Returns the CSS numeric weight the host renderer reports for this weight.
    ///
    /// The mapping is lossy: `SEMILIGHT` reports `300`, `BOOK` reports `400` and `ULTRABLACK`
    /// reports `900`. Values between the named codes resolve to the nearest one.
    pub fn to_css(self) -> &'static str {
        nearest_value(FC_TO_CSS_WEIGHT, self.0).unwrap_or("400")
    }

    /// Returns the OpenType `usWeightClass` nearest to this weight.
    pub fn to_os2(self) -> u16 {
        nearest_value(FC_TO_OS2_WEIGHT, self.0).unwrap_or(400)
    }

    /// Returns the Fontconfig weight nearest to an OpenType `usWeightClass`.
    pub fn from_os2(weight_class: u16) -> Self {
        nearest_value(OS2_TO_FC_WEIGHT, i32::from(weight_class)).unwrap_or(Self::NORMAL)
    }
}

impl Default for FcWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

const FC_TO_CSS_WEIGHT: &[(i32, &str)] = &[
    (FcWeight::THIN.0, "100"),
    (FcWeight::EXTRALIGHT.0, "200"),
    (FcWeight::LIGHT.0, "300"),
    (FcWeight::SEMILIGHT.0, "300"),
    (FcWeight::BOOK.0, "400"),
    (FcWeight::NORMAL.0, "400"),
    (FcWeight::MEDIUM.0, "500"),
    (FcWeight::SEMIBOLD.0, "600"),
    (FcWeight::BOLD.0, "700"),
    (FcWeight::ULTRABOLD.0, "800"),
    (FcWeight::HEAVY.0, "900"),
    (FcWeight::ULTRABLACK.0, "900"),
];

const FC_TO_OS2_WEIGHT: &[(i32, u16)] = &[
    (FcWeight::THIN.0, 100),
    (FcWeight::EXTRALIGHT.0, 200),
    (FcWeight::LIGHT.0, 300),
    (FcWeight::SEMILIGHT.0, 350),
    (FcWeight::BOOK.0, 380),
    (FcWeight::NORMAL.0, 400),
    (FcWeight::MEDIUM.0, 500),
    (FcWeight::SEMIBOLD.0, 600),
    (FcWeight::BOLD.0, 700),
    (FcWeight::ULTRABOLD.0, 800),
    (FcWeight::HEAVY.0, 900),
    (FcWeight::ULTRABLACK.0, 1000),
];

const OS2_TO_FC_WEIGHT: &[(i32, FcWeight)] = &[
    (100, FcWeight::THIN),
    (200, FcWeight::EXTRALIGHT),
    (300, FcWeight::LIGHT),
    (350, FcWeight::SEMILIGHT),
    (380, FcWeight::BOOK),
    (400, FcWeight::NORMAL),
    (500, FcWeight::MEDIUM),
    (600, FcWeight::SEMIBOLD),
    (700, FcWeight::BOLD),
    (800, FcWeight::ULTRABOLD),
    (900, FcWeight::HEAVY),
    (1000, FcWeight::ULTRABLACK),
];

/// Slant of a font as understood by Fontconfig.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FcSlant(i32);

impl FcSlant {
    /// Upright (0).
    pub const ROMAN: Self = Self(0);
    /// Italic (100).
    pub const ITALIC: Self = Self(100);
    /// Oblique (110).
    pub const OBLIQUE: Self = Self(110);

    /// Creates a slant from a raw Fontconfig value.
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the raw Fontconfig value.
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Parses a CSS `font-style` value.
    pub fn parse_css(value: &str) -> Option<Self> {
        match value {
            "normal" => Some(Self::ROMAN),
            "italic" => Some(Self::ITALIC),
            "oblique" => Some(Self::OBLIQUE),
            _ => None,
        }
    }

    /// Like [`parse_css`](Self::parse_css), falling back to [`ROMAN`](Self::ROMAN).
    pub fn from_css(value: &str) -> Self {
        Self::parse_css(value).unwrap_or(Self::ROMAN)
    }

    /// Returns the CSS `font-style` keyword, or `None` for slants without one.
    pub fn to_css(self) -> Option<&'static str> {
        match self {
            Self::ROMAN => Some("normal"),
            Self::ITALIC => Some("italic"),
            Self::OBLIQUE => Some("oblique"),
            _ => None,
        }
    }

    /// Returns `true` for italic and oblique slants.
    pub fn is_slanted(self) -> bool {
        matches!(self, Self::ITALIC | Self::OBLIQUE)
    }
}

/// Width of a font as understood by Fontconfig.
///
/// The value is a percentage of the normal width.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FcWidth(i32);

impl FcWidth {
    /// Ultra-condensed (50).
    pub const ULTRACONDENSED: Self = Self(50);
    /// Extra-condensed (63).
    pub const EXTRACONDENSED: Self = Self(63);
    /// Condensed (75).
    pub const CONDENSED: Self = Self(75);
    /// Semi-condensed (87).
    pub const SEMICONDENSED: Self = Self(87);
    /// Normal (100).
    pub const NORMAL: Self = Self(100);
    /// Semi-expanded (113).
    pub const SEMIEXPANDED: Self = Self(113);
    /// Expanded (125).
    pub const EXPANDED: Self = Self(125);
    /// Extra-expanded (150).
    pub const EXTRAEXPANDED: Self = Self(150);
    /// Ultra-expanded (200).
    pub const ULTRAEXPANDED: Self = Self(200);

    /// Creates a width from a raw Fontconfig value.
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the raw Fontconfig value.
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Parses a CSS `font-stretch` keyword.
    pub fn parse_css(value: &str) -> Option<Self> {
        STEPS
            .iter()
            .find(|(_, css)| *css == value)
            .map(|(code, _)| Self(*code))
    }

    /// Like [`parse_css`](Self::parse_css), falling back to [`NORMAL`](Self::NORMAL).
    pub fn from_css(value: &str) -> Self {
        Self::parse_css(value).unwrap_or(Self::NORMAL)
    }

    /// Returns the CSS `font-stretch` keyword nearest to this width.
    pub fn to_css(self) -> &'static str {
        nearest_value(STEPS, self.0).unwrap_or("normal")
    }

    /// Maps an OpenType `usWidthClass` (1 to 9) to a width.
    ///
    /// Returns `None` for values outside the defined range.
    pub fn from_os2(width_class: u16) -> Option<Self> {
        let index = usize::from(width_class).checked_sub(1)?;
        STEPS.get(index).map(|(code, _)| Self(*code))
    }
}

impl Default for FcWidth {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// The nine width steps in increasing order, which is also OpenType `usWidthClass` order.
const STEPS: &[(i32, &str)] = &[
    (FcWidth::ULTRACONDENSED.0, "ultra-condensed"),
    (FcWidth::EXTRACONDENSED.0, "extra-condensed"),
    (FcWidth::CONDENSED.0, "condensed"),
    (FcWidth::SEMICONDENSED.0, "semi-condensed"),
    (FcWidth::NORMAL.0, "normal"),
    (FcWidth::SEMIEXPANDED.0, "semi-expanded"),
    (FcWidth::EXPANDED.0, "expanded"),
    (FcWidth::EXTRAEXPANDED.0, "extra-expanded"),
    (FcWidth::ULTRAEXPANDED.0, "ultra-expanded"),
];

#[cfg(test)]
mod tests {
    use super::{FcSlant, FcWeight, FcWidth};

    #[test]
    fn css_weights_recognized_by_renderer() {
        assert_eq!(FcWeight::from_css("normal"), FcWeight::NORMAL);
        assert_eq!(FcWeight::from_css("bold"), FcWeight::BOLD);
        assert_eq!(FcWeight::from_css("100"), FcWeight::THIN);
        assert_eq!(FcWeight::from_css("200"), FcWeight::EXTRALIGHT);
        assert_eq!(FcWeight::from_css("700"), FcWeight::BOLD);
        assert_eq!(FcWeight::from_css("800"), FcWeight::ULTRABOLD);
        assert_eq!(FcWeight::from_css("900"), FcWeight::HEAVY);
    }

    #[test]
    fn unlisted_css_weights_fall_back_to_normal() {
        for value in ["350", "380", "1000", "light", "heavy", "", "bolder"] {
            assert_eq!(FcWeight::parse_css(value), None, "{value}");
            assert_eq!(FcWeight::from_css(value), FcWeight::NORMAL, "{value}");
        }
    }

    #[test]
    fn fc_to_css_weight_is_lossy() {
        assert_eq!(FcWeight::SEMILIGHT.to_css(), "300");
        assert_eq!(FcWeight::LIGHT.to_css(), "300");
        assert_eq!(FcWeight::BOOK.to_css(), "400");
        assert_eq!(FcWeight::NORMAL.to_css(), "400");
        assert_eq!(FcWeight::HEAVY.to_css(), "900");
        assert_eq!(FcWeight::ULTRABLACK.to_css(), "900");
    }

    #[test]
    fn fc_to_css_weight_uses_nearest_code() {
        // 90 is equidistant from NORMAL (80) and MEDIUM (100).
        assert_eq!(FcWeight::new(90).to_css(), "400");
        assert_eq!(FcWeight::new(190).to_css(), "600");
        assert_eq!(FcWeight::new(1000).to_css(), "900");
    }

    #[test]
    fn os2_weight_conversions() {
        assert_eq!(FcWeight::BOOK.to_os2(), 380);
        assert_eq!(FcWeight::ULTRABLACK.to_os2(), 1000);
        assert_eq!(FcWeight::from_os2(400), FcWeight::NORMAL);
        assert_eq!(FcWeight::from_os2(700), FcWeight::BOLD);
        assert_eq!(FcWeight::from_os2(650), FcWeight::SEMIBOLD);
        assert_eq!(FcWeight::from_os2(0), FcWeight::THIN);
        assert_eq!(FcWeight::from_os2(1), FcWeight::THIN);
    }

    #[test]
    fn slant_keywords() {
        assert_eq!(FcSlant::from_css("italic"), FcSlant::ITALIC);
        assert_eq!(FcSlant::from_css("oblique 10deg"), FcSlant::ROMAN);
        assert_eq!(FcSlant::OBLIQUE.to_css(), Some("oblique"));
        assert_eq!(FcSlant::new(50).to_css(), None);
        assert!(FcSlant::ITALIC.is_slanted());
        assert!(!FcSlant::ROMAN.is_slanted());
    }

    #[test]
    fn width_keywords_and_classes() {
        assert_eq!(FcWidth::from_css("condensed"), FcWidth::CONDENSED);
        assert_eq!(FcWidth::from_css("narrow"), FcWidth::NORMAL);
        assert_eq!(FcWidth::new(90).to_css(), "semi-condensed");
        assert_eq!(FcWidth::new(180).to_css(), "ultra-expanded");
        assert_eq!(FcWidth::from_os2(1), Some(FcWidth::ULTRACONDENSED));
        assert_eq!(FcWidth::from_os2(5), Some(FcWidth::NORMAL));
        assert_eq!(FcWidth::from_os2(9), Some(FcWidth::ULTRAEXPANDED));
        assert_eq!(FcWidth::from_os2(0), None);
        assert_eq!(FcWidth::from_os2(10), None);
    }

    #[test]
    fn css_round_trip() {
        for weight in ["100", "200", "300", "400", "500", "600", "700", "800", "900"] {
            assert_eq!(FcWeight::from_css(weight).to_css(), weight);
        }
        for style in ["normal", "italic", "oblique"] {
            assert_eq!(FcSlant::from_css(style).to_css(), Some(style));
        }
        for stretch in ["ultra-condensed", "semi-expanded", "ultra-expanded"] {
            assert_eq!(FcWidth::from_css(stretch).to_css(), stretch);
        }
    }
}
