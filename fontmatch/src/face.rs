// Copyright 2026 the Fontprobe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use std::path::PathBuf;
use std::rc::Rc;

use font_attrs::{FcSlant, FcWeight, FcWidth};
use hashbrown::HashSet;

use crate::ReducedStyle;

/// The set of characters a face can render.
pub trait Coverage: fmt::Debug {
    /// Returns `true` if the face has a glyph for `ch`.
    fn contains(&self, ch: char) -> bool;
}

/// Character coverage backed by an explicit set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CharCoverage {
    chars: HashSet<char>,
}

impl CharCoverage {
    /// Creates an empty coverage set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns an iterator over the covered characters in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }

    /// Returns the number of covered characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns `true` if no character is covered.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl Coverage for CharCoverage {
    fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }
}

impl FromIterator<char> for CharCoverage {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        Self {
            chars: iter.into_iter().collect(),
        }
    }
}

/// A face reported by a matching service.
///
/// Attributes the service reports as a list or a range (typically a variable font's weight
/// axis) are `None`.
#[derive(Clone)]
pub struct FoundFace {
    /// Family name.
    pub family: Option<String>,
    /// Weight.
    pub weight: Option<FcWeight>,
    /// Slant.
    pub slant: Option<FcSlant>,
    /// Width.
    pub width: Option<FcWidth>,
    /// Path of the file that holds the face.
    pub file: Option<PathBuf>,
    /// Index of the face within the file, when the service reports one.
    pub index: Option<u32>,
    /// Characters the face covers.
    pub coverage: Rc<dyn Coverage>,
}

impl FoundFace {
    /// Describes the face as CSS attributes.
    ///
    /// Returns `None` when any of the four attributes is missing or non-scalar, or when the
    /// slant has no CSS keyword; such a face has no deterministic CSS representation. Weight
    /// and width snap to the nearest CSS value.
    pub fn to_css(&self) -> Option<ReducedStyle> {
        let family = self.family.as_deref()?;
        let weight = self.weight?;
        let style = self.slant?.to_css()?;
        let width = self.width?;
        Some(ReducedStyle::new(
            format!("'{}'", family.trim_matches('\'')),
            weight.to_css(),
            style,
            width.to_css(),
        ))
    }
}

impl fmt::Debug for FoundFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FoundFace")
            .field("family", &self.family)
            .field("weight", &self.weight)
            .field("slant", &self.slant)
            .field("width", &self.width)
            .field("file", &self.file)
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use font_attrs::{FcSlant, FcWeight, FcWidth};

    use super::{CharCoverage, FoundFace};
    use crate::{MatchPattern, ReducedStyle};

    fn face(weight: Option<FcWeight>, slant: Option<FcSlant>) -> FoundFace {
        FoundFace {
            family: Some("DejaVu Sans".into()),
            weight,
            slant,
            width: Some(FcWidth::NORMAL),
            file: None,
            index: None,
            coverage: Rc::new(CharCoverage::from_iter("abc".chars())),
        }
    }

    #[test]
    fn coverage_membership() {
        let found = face(Some(FcWeight::NORMAL), Some(FcSlant::ROMAN));
        assert!(found.coverage.contains('b'));
        assert!(!found.coverage.contains('z'));
    }

    #[test]
    fn css_description_quotes_family() {
        let css = face(Some(FcWeight::BOOK), Some(FcSlant::ITALIC))
            .to_css()
            .unwrap();
        assert_eq!(css, ReducedStyle::new("'DejaVu Sans'", "400", "italic", "normal"));
    }

    #[test]
    fn ambiguous_attributes_have_no_css() {
        assert!(face(None, Some(FcSlant::ROMAN)).to_css().is_none());
        assert!(face(Some(FcWeight::BOLD), None).to_css().is_none());
        assert!(face(Some(FcWeight::BOLD), Some(FcSlant::new(40))).to_css().is_none());
    }

    #[test]
    fn pattern_round_trip_keeps_weight_style_stretch() {
        let weights = ["100", "200", "300", "400", "500", "600", "700", "800", "900"];
        let styles = ["normal", "italic", "oblique"];
        let stretches = ["ultra-condensed", "condensed", "normal", "expanded", "ultra-expanded"];
        for weight in weights {
            for style in styles {
                for stretch in stretches {
                    let reduced = ReducedStyle::new("'Any'", weight, style, stretch);
                    let pattern = MatchPattern::from_style(&reduced);
                    let found = FoundFace {
                        family: Some("Fallback".into()),
                        weight: Some(pattern.weight),
                        slant: Some(pattern.slant),
                        width: Some(pattern.width),
                        file: None,
                        index: None,
                        coverage: Rc::new(CharCoverage::new()),
                    };
                    let css = found.to_css().unwrap();
                    assert_eq!(
                        (css.weight(), css.style(), css.stretch()),
                        (weight, style, stretch)
                    );
                }
            }
        }
    }
}
