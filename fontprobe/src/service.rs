// Copyright 2026 the Fontprobe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The font service: resolution plus metric handles, behind one owner.

use core::fmt;
use std::rc::Rc;

use fontmatch::{
    FontResolver, MatchPattern, MatchSource, ReducedStyle, ResolveError, ResolvedFace,
    StyleDescriptor, SystemSource,
};
use hashbrown::HashMap;

use crate::{CharAdvances, FaceTarget, FileLoader, FontInstance, MetricsError, TableLoader};

/// Options for a [`FontService`].
#[derive(Copy, Clone, Debug)]
pub struct FontServiceOptions {
    /// If true, styles are matched against the fonts installed on the system.
    ///
    /// The default value is true.
    pub system_fonts: bool,
}

impl Default for FontServiceOptions {
    fn default() -> Self {
        Self { system_fonts: true }
    }
}

/// Resolves styles to faces and hands out metric handles for them.
///
/// Every answer is cached for the lifetime of the service. The service is single threaded;
/// create one per thread if needed.
pub struct FontService<S = SystemSource, L: TableLoader = FileLoader> {
    resolver: FontResolver<S>,
    loader: L,
    instances: HashMap<ReducedStyle, Rc<FontInstance<L::Face>>>,
}

impl FontService {
    /// Creates a service over the system fonts.
    pub fn system() -> Self {
        Self::with_options(FontServiceOptions::default())
    }

    /// Creates a service over the system fonts with the given options.
    pub fn with_options(options: FontServiceOptions) -> Self {
        let source = if options.system_fonts {
            SystemSource::new()
        } else {
            SystemSource::disabled()
        };
        Self::new(source, FileLoader::new())
    }
}

impl<S: MatchSource, L: TableLoader> FontService<S, L> {
    /// Creates a service matching with `source` and opening files with `loader`.
    pub fn new(source: S, loader: L) -> Self {
        Self {
            resolver: FontResolver::new(source),
            loader,
            instances: HashMap::new(),
        }
    }

    /// Returns the resolver.
    pub fn resolver(&self) -> &FontResolver<S> {
        &self.resolver
    }

    /// Returns the table loader.
    pub fn loader(&self) -> &L {
        &self.loader
    }

    /// See [`FontResolver::font_style`].
    pub fn font_style(&mut self, style: &StyleDescriptor) -> Rc<ReducedStyle> {
        self.resolver.font_style(style)
    }

    /// See [`FontResolver::true_style`].
    pub fn true_style(
        &mut self,
        style: &StyleDescriptor,
    ) -> Result<Option<Rc<ReducedStyle>>, ResolveError> {
        self.resolver.true_style(style)
    }

    /// See [`FontResolver::true_font`].
    pub fn true_font(&mut self, style: &ReducedStyle) -> Result<Rc<ResolvedFace>, ResolveError> {
        self.resolver.true_font(style)
    }

    /// See [`FontResolver::true_font_by_char`].
    pub fn true_font_by_char(
        &mut self,
        style: &ReducedStyle,
        chars: impl IntoIterator<Item = char>,
    ) -> HashMap<char, Option<Rc<ResolvedFace>>> {
        self.resolver.true_font_by_char(style, chars)
    }

    /// Opens the font that renders `style`.
    ///
    /// The face is picked from its file by [`open_face`](crate::select::open_face). The
    /// handle is cached; later calls for an equal style return the same handle.
    pub fn font_instance(
        &mut self,
        style: &ReducedStyle,
    ) -> Result<Rc<FontInstance<L::Face>>, MetricsError> {
        if let Some(instance) = self.instances.get(style) {
            return Ok(instance.clone());
        }
        let face = self.resolver.true_font(style)?;
        let found = face.found();
        let path = found.file.as_deref().ok_or_else(|| MetricsError::MissingFile {
            style: style.clone(),
        })?;
        let target = FaceTarget::new(found, &MatchPattern::from_style(style));
        let (tables, selection) =
            crate::select::open_face(&mut self.loader, path, found.index, &target)?;
        if !selection.is_exact() {
            log::warn!(
                "no face of {} fully matches {style}; using face {}",
                path.display(),
                selection.index
            );
        }
        log::debug!("opened face {} of {} for {style}", selection.index, path.display());
        let instance = Rc::new(FontInstance::new(tables, selection));
        self.instances.insert(style.clone(), instance.clone());
        Ok(instance)
    }

    /// Measures `chars` and `(preceding, current)` pairs in the font that renders `style`.
    ///
    /// The inner `None` reports a font without a character map.
    pub fn char_advances(
        &mut self,
        style: &ReducedStyle,
        chars: impl IntoIterator<Item = char>,
        pairs: impl IntoIterator<Item = (char, char)>,
    ) -> Result<Option<CharAdvances>, MetricsError> {
        Ok(self.font_instance(style)?.char_advances(chars, pairs))
    }
}

impl<S: fmt::Debug, L: TableLoader + fmt::Debug> fmt::Debug for FontService<S, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontService")
            .field("resolver", &self.resolver)
            .field("loader", &self.loader)
            .field("instances", &self.instances.len())
            .finish()
    }
}
