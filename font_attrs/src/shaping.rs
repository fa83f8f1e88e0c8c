// Copyright 2026 the Fontprobe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attribute enumerations of the text shaping service.
//!
//! The numbering follows Pango. Conversions from CSS accept the same restricted vocabulary as
//! [`FcWeight::parse_css`](crate::FcWeight::parse_css) and fall back to the normal value.

use crate::{FcSlant, FcWeight, FcWidth};

/// Font weight as enumerated by the shaping service.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(i32)]
pub enum Weight {
    /// 100
    Thin = 100,
    /// 200
    Ultralight = 200,
    /// 300
    Light = 300,
    /// 350
    Semilight = 350,
    /// 380
    Book = 380,
    /// 400
    #[default]
    Normal = 400,
    /// 500
    Medium = 500,
    /// 600
    Semibold = 600,
    /// 700
    Bold = 700,
    /// 800
    Ultrabold = 800,
    /// 900
    Heavy = 900,
    /// 1000
    Ultraheavy = 1000,
}

impl Weight {
    /// Every weight in increasing order.
    pub const ALL: [Self; 12] = [
        Self::Thin,
        Self::Ultralight,
        Self::Light,
        Self::Semilight,
        Self::Book,
        Self::Normal,
        Self::Medium,
        Self::Semibold,
        Self::Bold,
        Self::Ultrabold,
        Self::Heavy,
        Self::Ultraheavy,
    ];

    /// Parses a CSS `font-weight` value, falling back to [`Normal`](Self::Normal).
    pub fn from_css(value: &str) -> Self {
        match value {
            "bold" | "700" => Self::Bold,
            "100" => Self::Thin,
            "200" => Self::Ultralight,
            "300" => Self::Light,
            "500" => Self::Medium,
            "600" => Self::Semibold,
            "800" => Self::Ultrabold,
            "900" => Self::Heavy,
            _ => Self::Normal,
        }
    }

    /// Returns the numeric CSS weight, or `None` for weights CSS input never produces.
    pub fn to_css(self) -> Option<&'static str> {
        Some(match self {
            Self::Thin => "100",
            Self::Ultralight => "200",
            Self::Light => "300",
            Self::Normal => "400",
            Self::Medium => "500",
            Self::Semibold => "600",
            Self::Bold => "700",
            Self::Ultrabold => "800",
            Self::Heavy => "900",
            Self::Semilight | Self::Book | Self::Ultraheavy => return None,
        })
    }

    /// Returns the equivalent Fontconfig weight.
    pub fn to_fontconfig(self) -> FcWeight {
        match self {
            Self::Thin => FcWeight::THIN,
            Self::Ultralight => FcWeight::EXTRALIGHT,
            Self::Light => FcWeight::LIGHT,
            Self::Semilight => FcWeight::SEMILIGHT,
            Self::Book => FcWeight::BOOK,
            Self::Normal => FcWeight::NORMAL,
            Self::Medium => FcWeight::MEDIUM,
            Self::Semibold => FcWeight::SEMIBOLD,
            Self::Bold => FcWeight::BOLD,
            Self::Ultrabold => FcWeight::ULTRABOLD,
            Self::Heavy => FcWeight::HEAVY,
            Self::Ultraheavy => FcWeight::ULTRABLACK,
        }
    }

    /// Returns the numeric value.
    pub fn value(self) -> i32 {
        self as i32
    }

    /// Returns the weight with this numeric value, if any.
    pub fn from_value(value: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|w| w.value() == value)
    }
}

/// Font style (posture) as enumerated by the shaping service.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Style {
    /// Upright.
    #[default]
    Normal,
    /// Slanted roman.
    Oblique,
    /// Italic.
    Italic,
}

impl Style {
    /// Parses a CSS `font-style` value, falling back to [`Normal`](Self::Normal).
    pub fn from_css(value: &str) -> Self {
        match value {
            "italic" => Self::Italic,
            "oblique" => Self::Oblique,
            _ => Self::Normal,
        }
    }

    /// Returns the CSS keyword.
    pub fn to_css(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Oblique => "oblique",
            Self::Italic => "italic",
        }
    }

    /// Returns the equivalent Fontconfig slant.
    pub fn to_fontconfig(self) -> FcSlant {
        match self {
            Self::Normal => FcSlant::ROMAN,
            Self::Oblique => FcSlant::OBLIQUE,
            Self::Italic => FcSlant::ITALIC,
        }
    }
}

/// Font stretch as enumerated by the shaping service.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stretch {
    /// Ultra-condensed.
    UltraCondensed,
    /// Extra-condensed.
    ExtraCondensed,
    /// Condensed.
    Condensed,
    /// Semi-condensed.
    SemiCondensed,
    /// Normal.
    #[default]
    Normal,
    /// Semi-expanded.
    SemiExpanded,
    /// Expanded.
    Expanded,
    /// Extra-expanded.
    ExtraExpanded,
    /// Ultra-expanded.
    UltraExpanded,
}

impl Stretch {
    const CSS: [(Self, &'static str); 9] = [
        (Self::UltraCondensed, "ultra-condensed"),
        (Self::ExtraCondensed, "extra-condensed"),
        (Self::Condensed, "condensed"),
        (Self::SemiCondensed, "semi-condensed"),
        (Self::Normal, "normal"),
        (Self::SemiExpanded, "semi-expanded"),
        (Self::Expanded, "expanded"),
        (Self::ExtraExpanded, "extra-expanded"),
        (Self::UltraExpanded, "ultra-expanded"),
    ];

    /// Parses a CSS `font-stretch` keyword, falling back to [`Normal`](Self::Normal).
    pub fn from_css(value: &str) -> Self {
        Self::CSS
            .iter()
            .find(|(_, css)| *css == value)
            .map_or(Self::Normal, |(stretch, _)| *stretch)
    }

    /// Returns the CSS keyword.
    pub fn to_css(self) -> &'static str {
        Self::CSS[self as usize].1
    }

    /// Returns the equivalent Fontconfig width.
    pub fn to_fontconfig(self) -> FcWidth {
        match self {
            Self::UltraCondensed => FcWidth::ULTRACONDENSED,
            Self::ExtraCondensed => FcWidth::EXTRACONDENSED,
            Self::Condensed => FcWidth::CONDENSED,
            Self::SemiCondensed => FcWidth::SEMICONDENSED,
            Self::Normal => FcWidth::NORMAL,
            Self::SemiExpanded => FcWidth::SEMIEXPANDED,
            Self::Expanded => FcWidth::EXPANDED,
            Self::ExtraExpanded => FcWidth::EXTRAEXPANDED,
            Self::UltraExpanded => FcWidth::ULTRAEXPANDED,
        }
    }
}

/// Capitalization variant as enumerated by the shaping service.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Normal.
    #[default]
    Normal,
    /// Small capitals.
    SmallCaps,
}

impl Variant {
    /// Parses a CSS `font-variant` value, falling back to [`Normal`](Self::Normal).
    pub fn from_css(value: &str) -> Self {
        match value {
            "small-caps" => Self::SmallCaps,
            _ => Self::Normal,
        }
    }
}
