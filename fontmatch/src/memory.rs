// Copyright 2026 the Fontprobe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A matching service over an explicit list of faces.

use std::path::PathBuf;
use std::rc::Rc;

use font_attrs::{FcSlant, FcWeight, FcWidth};
use hashbrown::HashSet;

use crate::{CharCoverage, Coverage, FoundFace, MatchPattern, MatchSource};

/// A face registered with a [`MemorySource`].
#[derive(Clone, Debug)]
pub struct MemoryFace {
    family: String,
    weight: Option<FcWeight>,
    slant: Option<FcSlant>,
    width: Option<FcWidth>,
    file: Option<PathBuf>,
    index: Option<u32>,
    coverage: Rc<CharCoverage>,
}

impl MemoryFace {
    /// Creates an upright face of normal weight and width covering `chars`.
    pub fn new(family: impl Into<String>, chars: impl IntoIterator<Item = char>) -> Self {
        Self {
            family: family.into(),
            weight: Some(FcWeight::NORMAL),
            slant: Some(FcSlant::ROMAN),
            width: Some(FcWidth::NORMAL),
            file: None,
            index: None,
            coverage: Rc::new(chars.into_iter().collect()),
        }
    }

    /// Sets the weight.
    #[must_use]
    pub fn weight(mut self, weight: FcWeight) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Sets the slant.
    #[must_use]
    pub fn slant(mut self, slant: FcSlant) -> Self {
        self.slant = Some(slant);
        self
    }

    /// Sets the width.
    #[must_use]
    pub fn width(mut self, width: FcWidth) -> Self {
        self.width = Some(width);
        self
    }

    /// Marks the weight as a range, the way variable fonts report it.
    ///
    /// Such a face matches any requested weight and has no CSS description.
    #[must_use]
    pub fn variable_weight(mut self) -> Self {
        self.weight = None;
        self
    }

    /// Sets the backing file and, optionally, the face index within it.
    #[must_use]
    pub fn file(mut self, path: impl Into<PathBuf>, index: Option<u32>) -> Self {
        self.file = Some(path.into());
        self.index = index;
        self
    }

    fn to_found(&self) -> FoundFace {
        FoundFace {
            family: Some(self.family.clone()),
            weight: self.weight,
            slant: self.slant,
            width: self.width,
            file: self.file.clone(),
            index: self.index,
            coverage: self.coverage.clone() as Rc<dyn Coverage>,
        }
    }

    /// Ranking key; lower is better.
    fn rank(&self, pattern: &MatchPattern) -> (usize, i32, u8, i32) {
        let family = pattern
            .families
            .iter()
            .position(|name| name.eq_ignore_ascii_case(&self.family))
            .unwrap_or(pattern.families.len());
        let weight = self
            .weight
            .map_or(0, |w| (w.value() - pattern.weight.value()).abs());
        let slant = match self.slant {
            Some(slant) if slant == pattern.slant => 0,
            Some(slant) if slant.is_slanted() && pattern.slant.is_slanted() => 1,
            _ => 2,
        };
        let width = self
            .width
            .map_or(0, |w| (w.value() - pattern.width.value()).abs());
        (family, weight, slant, width)
    }
}

/// A [`MatchSource`] over a registered list of faces.
///
/// Faces are ranked by the position of their family in the requested family list (faces of
/// unlisted families come last), then by weight distance, slant mismatch and width distance.
/// Italic and oblique count as closer to each other than to upright. Remaining ties keep
/// registration order.
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    faces: Vec<MemoryFace>,
}

impl MemorySource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a face.
    pub fn add(&mut self, face: MemoryFace) {
        self.faces.push(face);
    }

    /// Returns the source with `face` registered.
    #[must_use]
    pub fn with(mut self, face: MemoryFace) -> Self {
        self.add(face);
        self
    }

    /// Returns the number of registered faces.
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// Returns `true` if no face is registered.
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    fn ranked(&self, pattern: &MatchPattern) -> Vec<&MemoryFace> {
        let mut faces: Vec<_> = self.faces.iter().collect();
        faces.sort_by_cached_key(|face| face.rank(pattern));
        faces
    }
}

impl MatchSource for MemorySource {
    fn match_best(&mut self, pattern: &MatchPattern) -> Option<FoundFace> {
        self.ranked(pattern).first().map(|face| face.to_found())
    }

    fn match_ranked(&mut self, pattern: &MatchPattern, trim: bool) -> Vec<FoundFace> {
        let ranked = self.ranked(pattern);
        if !trim {
            return ranked.into_iter().map(MemoryFace::to_found).collect();
        }
        let mut covered = HashSet::new();
        let mut result = Vec::new();
        for (i, face) in ranked.into_iter().enumerate() {
            let mut adds_coverage = false;
            for ch in face.coverage.iter() {
                adds_coverage |= covered.insert(ch);
            }
            if i == 0 || adds_coverage {
                result.push(face.to_found());
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use font_attrs::{FcSlant, FcWeight, FcWidth};

    use super::{MemoryFace, MemorySource};
    use crate::{MatchPattern, MatchSource, ReducedStyle};

    fn pattern(family: &str, weight: &str, style: &str) -> MatchPattern {
        MatchPattern::from_style(&ReducedStyle::new(family, weight, style, "normal"))
    }

    fn source() -> MemorySource {
        MemorySource::new()
            .with(MemoryFace::new("DejaVu Sans", 'a'..='z'))
            .with(MemoryFace::new("Arial", 'a'..='z'))
            .with(MemoryFace::new("Arial", 'a'..='z').weight(FcWeight::BOLD))
            .with(MemoryFace::new("Arial", 'a'..='z').slant(FcSlant::ITALIC))
            .with(MemoryFace::new("Symbol", ['⎣', '∑']))
    }

    #[test]
    fn family_order_wins() {
        let mut source = source();
        let best = source.match_best(&pattern("'Helvetica','Arial'", "normal", "normal"));
        assert_eq!(best.unwrap().family.as_deref(), Some("Arial"));
    }

    #[test]
    fn nearest_weight_and_slant() {
        let mut source = source();
        let bold = source
            .match_best(&pattern("'Arial'", "800", "normal"))
            .unwrap();
        assert_eq!(bold.weight, Some(FcWeight::BOLD));
        let italic = source
            .match_best(&pattern("'Arial'", "normal", "oblique"))
            .unwrap();
        assert_eq!(italic.slant, Some(FcSlant::ITALIC));
        assert_eq!(italic.width, Some(FcWidth::NORMAL));
    }

    #[test]
    fn unlisted_families_keep_registration_order() {
        let mut source = source();
        let best = source
            .match_best(&pattern("'sans-serif'", "normal", "normal"))
            .unwrap();
        assert_eq!(best.family.as_deref(), Some("DejaVu Sans"));
    }

    #[test]
    fn trim_drops_faces_without_new_coverage() {
        let mut source = source();
        let all = source.match_ranked(&pattern("'Arial'", "normal", "normal"), false);
        assert_eq!(all.len(), 5);
        let trimmed = source.match_ranked(&pattern("'Arial'", "normal", "normal"), true);
        let families: Vec<_> = trimmed
            .iter()
            .map(|face| face.family.as_deref().unwrap())
            .collect();
        assert_eq!(families, ["Arial", "Symbol"]);
    }

    #[test]
    fn empty_source_matches_nothing() {
        let mut source = MemorySource::new();
        assert!(source.is_empty());
        assert!(source.match_best(&pattern("'Arial'", "normal", "normal")).is_none());
        assert!(source
            .match_ranked(&pattern("'Arial'", "normal", "normal"), true)
            .is_empty());
    }
}
