// Copyright 2026 the Fontprobe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cached resolution of styles to faces.

use core::fmt;
use std::rc::Rc;

use font_attrs::shaping::{Stretch, Style, Weight};
use hashbrown::{HashMap, HashSet};

use crate::{
    Coverage, FoundFace, MatchPattern, MatchSource, ReducedStyle, ResolveError, StyleDescriptor,
};

/// The face a matching service picked for a style.
#[derive(Debug)]
pub struct ResolvedFace {
    found: FoundFace,
    css: Option<Rc<ReducedStyle>>,
}

impl ResolvedFace {
    /// Returns the face as reported by the matching service.
    pub fn found(&self) -> &FoundFace {
        &self.found
    }

    /// Returns the CSS description of the face, or `None` if the service reported list or
    /// range valued attributes.
    pub fn css(&self) -> Option<&ReducedStyle> {
        self.css.as_deref()
    }

    /// Returns `true` if the face has a glyph for `ch`.
    pub fn covers(&self, ch: char) -> bool {
        self.found.coverage.contains(ch)
    }
}

/// Resolves styles to faces and remembers every answer.
///
/// Nothing is ever evicted; the style space of a single document is small. All lookups of an
/// equal style return the same shared value.
pub struct FontResolver<S> {
    source: S,
    reduced: HashMap<StyleDescriptor, Rc<ReducedStyle>>,
    true_styles: HashMap<StyleDescriptor, Rc<ResolvedFace>>,
    faces: HashMap<ReducedStyle, Rc<ResolvedFace>>,
    coverage: HashMap<ReducedStyle, Rc<dyn Coverage>>,
}

impl<S: MatchSource> FontResolver<S> {
    /// Creates a resolver that queries `source`.
    pub fn new(source: S) -> Self {
        Self {
            source,
            reduced: HashMap::new(),
            true_styles: HashMap::new(),
            faces: HashMap::new(),
            coverage: HashMap::new(),
        }
    }

    /// Returns the underlying matching service.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Reduces `style` to its selection attributes.
    ///
    /// Equal inputs return the same allocation.
    pub fn font_style(&mut self, style: &StyleDescriptor) -> Rc<ReducedStyle> {
        if let Some(reduced) = self.reduced.get(style) {
            return reduced.clone();
        }
        let reduced = Rc::new(ReducedStyle::from_style(style));
        self.reduced.insert(style.clone(), reduced.clone());
        reduced
    }

    /// Returns the CSS description of the face that renders `style`.
    ///
    /// The outer error reports that nothing matched at all; `Ok(None)` reports a match
    /// without a deterministic CSS description.
    pub fn true_style(
        &mut self,
        style: &StyleDescriptor,
    ) -> Result<Option<Rc<ReducedStyle>>, ResolveError> {
        if let Some(face) = self.true_styles.get(style) {
            return Ok(face.css.clone());
        }
        let reduced = self.font_style(style);
        let face = self.true_font(&reduced)?;
        self.true_styles.insert(style.clone(), face.clone());
        Ok(face.css.clone())
    }

    /// Returns the face that renders most text in `style`.
    ///
    /// The first lookup runs the matching service and records the face's coverage under its
    /// CSS description; later lookups return the cached face itself.
    pub fn true_font(&mut self, style: &ReducedStyle) -> Result<Rc<ResolvedFace>, ResolveError> {
        if let Some(face) = self.faces.get(style) {
            log::trace!("true font cache hit for {style}");
            return Ok(face.clone());
        }
        let pattern = MatchPattern::from_style(style);
        let Some(found) = self.source.match_best(&pattern) else {
            log::debug!("no font matches {style}");
            return Err(ResolveError::NoMatch {
                style: style.clone(),
            });
        };
        let face = Rc::new(self.resolve(found));
        log::debug!("resolved {style} to {:?}", face.found);
        self.faces.insert(style.clone(), face.clone());
        Ok(face)
    }

    /// Assigns each of `chars` to the face that renders it.
    ///
    /// Characters covered by the cached primary face of `style` are assigned to it directly.
    /// The rest are assigned to the first face in the ranked match list that covers them.
    /// Characters no ranked face covers map to `None`.
    pub fn true_font_by_char(
        &mut self,
        style: &ReducedStyle,
        chars: impl IntoIterator<Item = char>,
    ) -> HashMap<char, Option<Rc<ResolvedFace>>> {
        let mut seen = HashSet::new();
        let wanted: Vec<char> = chars.into_iter().filter(|ch| seen.insert(*ch)).collect();
        let mut assigned = HashMap::with_capacity(wanted.len());

        if let Some(primary) = self.faces.get(style) {
            let coverage = primary.css().and_then(|css| self.coverage.get(css));
            if let Some(coverage) = coverage {
                for &ch in &wanted {
                    if coverage.contains(ch) {
                        assigned.insert(ch, Some(primary.clone()));
                    }
                }
            }
        }
        if assigned.len() == wanted.len() {
            return assigned;
        }

        let pattern = MatchPattern::from_style(style);
        for found in self.source.match_ranked(&pattern, true) {
            let face = self.resolve(found);
            if face.css.is_none() {
                continue;
            }
            let face = Rc::new(face);
            for &ch in &wanted {
                if !assigned.contains_key(&ch) && face.covers(ch) {
                    assigned.insert(ch, Some(face.clone()));
                }
            }
            if assigned.len() == wanted.len() {
                return assigned;
            }
        }

        let missing = wanted.len() - assigned.len();
        log::warn!("{missing} character(s) are not covered by any font matching {style}");
        for ch in wanted {
            assigned.entry(ch).or_insert(None);
        }
        assigned
    }

    /// Returns the coverage recorded for a face's CSS description, if any face with that
    /// description has been resolved.
    pub fn cached_coverage(&self, css: &ReducedStyle) -> Option<Rc<dyn Coverage>> {
        self.coverage.get(css).cloned()
    }

    /// Matches a family list and shaping service attributes directly, bypassing the caches.
    pub fn match_shaping_attributes(
        &mut self,
        family: &str,
        stretch: Stretch,
        weight: Weight,
        style: Style,
    ) -> Option<FoundFace> {
        let pattern = MatchPattern::from_shaping(family, stretch, weight, style);
        self.source.match_best(&pattern)
    }

    fn resolve(&mut self, found: FoundFace) -> ResolvedFace {
        let css = found.to_css().map(Rc::new);
        if let Some(css) = &css {
            self.coverage
                .insert(ReducedStyle::clone(css), found.coverage.clone());
        }
        ResolvedFace { found, css }
    }
}

impl<S: fmt::Debug> fmt::Debug for FontResolver<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontResolver")
            .field("source", &self.source)
            .field("reduced", &self.reduced.len())
            .field("true_styles", &self.true_styles.len())
            .field("faces", &self.faces.len())
            .field("coverage", &self.coverage.len())
            .finish()
    }
}
