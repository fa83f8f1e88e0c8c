// Copyright 2026 the Fontprobe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use font_attrs::shaping::{Stretch, Style, Weight};
use font_attrs::{FcSlant, FcWeight, FcWidth};
use smallvec::SmallVec;

use crate::ReducedStyle;
use crate::style::family_name;

/// A query for the matching service.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MatchPattern {
    /// Family names in order of preference, unquoted.
    pub families: SmallVec<[String; 4]>,
    /// Requested weight.
    pub weight: FcWeight,
    /// Requested slant.
    pub slant: FcSlant,
    /// Requested width.
    pub width: FcWidth,
}

impl MatchPattern {
    /// Builds the pattern for a reduced style.
    ///
    /// Attribute values the host renderer does not recognize request the normal weight,
    /// upright slant and normal width.
    pub fn from_style(style: &ReducedStyle) -> Self {
        Self {
            families: style.families().map(str::to_owned).collect(),
            weight: FcWeight::from_css(style.weight()),
            slant: FcSlant::from_css(style.style()),
            width: FcWidth::from_css(style.stretch()),
        }
    }

    /// Builds the pattern for a family list and shaping service attributes.
    pub fn from_shaping(family: &str, stretch: Stretch, weight: Weight, style: Style) -> Self {
        Self {
            families: family
                .split(',')
                .map(family_name)
                .filter(|name| !name.is_empty())
                .map(str::to_owned)
                .collect(),
            weight: weight.to_fontconfig(),
            slant: style.to_fontconfig(),
            width: stretch.to_fontconfig(),
        }
    }
}
