// Copyright 2026 the Fontprobe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Matching through the system Fontconfig library.

#![allow(unsafe_code, reason = "Fontconfig is only reachable through its C API")]

use core::{
    ffi::{CStr, c_char},
    fmt,
    ptr::NonNull,
};
use std::{
    borrow::Cow,
    ffi::{CString, OsStr},
    os::unix::ffi::OsStrExt,
    path::PathBuf,
    rc::Rc,
};

use font_attrs::{FcSlant, FcWeight, FcWidth};
use fontconfig_sys::{
    FcChar8, FcCharSet, FcConfig, FcFontSet, FcMatchKind, FcMatchPattern, FcPattern, FcResult,
    FcResultMatch, FcResultNoId, FcResultNoMatch, FcResultOutOfMemory, FcResultTypeMismatch,
    constants::{FC_CHARSET, FC_FAMILY, FC_FILE, FC_INDEX, FC_SLANT, FC_WEIGHT, FC_WIDTH},
    statics::{LIB, LIB_RESULT},
};

use crate::{CharCoverage, Coverage, FoundFace, MatchPattern, MatchSource};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum MatchErr {
    NoMatch,
    /// The value exists but is not of the requested type, e.g. a range where an integer was
    /// asked for.
    TypeMismatch,
    NoId,
    OutOfMemory,
    Other,
}

impl MatchErr {
    fn from_raw(raw: FcResult) -> Self {
        #[allow(non_upper_case_globals, reason = "Fontconfig result constants")]
        match raw {
            FcResultNoMatch => Self::NoMatch,
            FcResultTypeMismatch => Self::TypeMismatch,
            FcResultNoId => Self::NoId,
            FcResultOutOfMemory => Self::OutOfMemory,
            _ => Self::Other,
        }
    }
}

type MatchResult<T> = Result<T, MatchErr>;

/// Whether a refcounted Fontconfig object returned to us is ours to free.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Ownership {
    /// Owned by Fontconfig; we take an extra reference.
    Fontconfig,
    /// Owned by us.
    Application,
}

/// Wrapper for an `FcPattern`.
struct Pattern {
    inner: NonNull<FcPattern>,
}

impl Pattern {
    fn new() -> Option<Self> {
        unsafe { Self::from_raw((LIB.FcPatternCreate)(), Ownership::Application) }
    }

    unsafe fn from_raw(raw: *mut FcPattern, ownership: Ownership) -> Option<Self> {
        let inner = NonNull::new(raw)?;
        if ownership == Ownership::Fontconfig {
            unsafe {
                (LIB.FcPatternReference)(inner.as_ptr());
            }
        }
        Some(Self { inner })
    }

    fn add_string(&mut self, object: &CStr, s: &CStr) -> bool {
        // Added values are copied.
        unsafe {
            (LIB.FcPatternAddString)(self.inner.as_ptr(), object.as_ptr(), s.as_ptr() as *const _)
                != 0
        }
    }

    fn add_int(&mut self, object: &CStr, value: i32) -> bool {
        unsafe { (LIB.FcPatternAddInteger)(self.inner.as_ptr(), object.as_ptr(), value) != 0 }
    }

    fn default_substitute(&mut self) {
        unsafe { (LIB.FcDefaultSubstitute)(self.inner.as_ptr()) };
    }

    fn get_string<'a>(&'a self, object: &CStr, n: u32) -> MatchResult<Cow<'a, str>> {
        Ok(self.get_c_string(object, n)?.to_string_lossy())
    }

    fn get_c_string<'a>(&'a self, object: &CStr, n: u32) -> MatchResult<&'a CStr> {
        let mut dest: *mut FcChar8 = std::ptr::null_mut();
        let result = unsafe {
            (LIB.FcPatternGetString)(
                self.inner.as_ptr(),
                object.as_ptr(),
                n.try_into().map_err(|_| MatchErr::Other)?,
                &raw mut dest,
            )
        };
        if result != FcResultMatch {
            return Err(MatchErr::from_raw(result));
        }
        let dest = NonNull::new(dest).ok_or(MatchErr::Other)?;
        Ok(unsafe { CStr::from_ptr(dest.as_ptr() as *const _) })
    }

    /// Integer properties stored as a range (variable font axes) report `TypeMismatch`.
    fn get_int(&self, object: &CStr, n: u32) -> MatchResult<i32> {
        let mut dest = 0;
        let result = unsafe {
            (LIB.FcPatternGetInteger)(
                self.inner.as_ptr(),
                object.as_ptr(),
                n.try_into().map_err(|_| MatchErr::Other)?,
                &raw mut dest,
            )
        };
        if result != FcResultMatch {
            return Err(MatchErr::from_raw(result));
        }
        Ok(dest)
    }

    fn get_charset(&self, object: &CStr, n: u32) -> MatchResult<CharSet> {
        let mut dest: *mut FcCharSet = std::ptr::null_mut();
        let result = unsafe {
            (LIB.FcPatternGetCharSet)(
                self.inner.as_ptr(),
                object.as_ptr(),
                n.try_into().map_err(|_| MatchErr::Other)?,
                &raw mut dest,
            )
        };
        if result != FcResultMatch {
            return Err(MatchErr::from_raw(result));
        }
        // The pattern owns the returned charset; take our own reference.
        let copy = unsafe { (LIB.FcCharSetCopy)(dest) };
        Ok(CharSet {
            inner: NonNull::new(copy).ok_or(MatchErr::OutOfMemory)?,
        })
    }
}

impl Clone for Pattern {
    fn clone(&self) -> Self {
        unsafe { (LIB.FcPatternReference)(self.inner.as_ptr()) };
        Self { inner: self.inner }
    }
}

impl Drop for Pattern {
    fn drop(&mut self) {
        unsafe { (LIB.FcPatternDestroy)(self.inner.as_ptr()) };
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match NonNull::new(unsafe { (LIB.FcNameUnparse)(self.inner.as_ptr()) }) {
            Some(unparsed) => {
                let res = f.write_str(unsafe {
                    &CStr::from_ptr(unparsed.as_ptr() as *const c_char).to_string_lossy()
                });
                unsafe { (LIB.FcStrFree)(unparsed.as_ptr()) };
                res
            }
            None => f.debug_struct("Pattern").finish_non_exhaustive(),
        }
    }
}

/// An owned `FcFontSet`, as returned by `FcFontSort`.
struct FontSet {
    inner: NonNull<FcFontSet>,
}

impl FontSet {
    fn iter(&self) -> FontSetIter<'_> {
        FontSetIter {
            i: 0,
            font_set: self,
        }
    }
}

impl Drop for FontSet {
    fn drop(&mut self) {
        unsafe { (LIB.FcFontSetDestroy)(self.inner.as_ptr()) };
    }
}

struct FontSetIter<'a> {
    i: usize,
    font_set: &'a FontSet,
}

impl Iterator for FontSetIter<'_> {
    type Item = Pattern;

    fn next(&mut self) -> Option<Self::Item> {
        let font_set = self.font_set.inner.as_ptr();
        if self.i >= unsafe { (*font_set).nfont }.try_into().ok()? {
            None
        } else {
            let pattern: *mut FcPattern = unsafe { *(*font_set).fonts.add(self.i) };
            self.i += 1;
            unsafe { Pattern::from_raw(pattern, Ownership::Fontconfig) }
        }
    }
}

/// Wrapper for an `FcCharSet`.
struct CharSet {
    inner: NonNull<FcCharSet>,
}

impl Coverage for CharSet {
    fn contains(&self, ch: char) -> bool {
        unsafe { (LIB.FcCharSetHasChar)(self.inner.as_ptr(), ch as u32) != 0 }
    }
}

impl Drop for CharSet {
    fn drop(&mut self) {
        unsafe { (LIB.FcCharSetDestroy)(self.inner.as_ptr()) };
    }
}

impl fmt::Debug for CharSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CharSet").finish_non_exhaustive()
    }
}

struct Config {
    inner: NonNull<FcConfig>,
}

impl Config {
    unsafe fn from_raw(raw: *mut FcConfig, ownership: Ownership) -> Option<Self> {
        let inner = NonNull::new(raw)?;
        if ownership == Ownership::Fontconfig {
            unsafe {
                (LIB.FcConfigReference)(inner.as_ptr());
            }
        }
        Some(Self { inner })
    }

    fn substitute(&self, pattern: &mut Pattern, kind: FcMatchKind) {
        unsafe { (LIB.FcConfigSubstitute)(self.inner.as_ptr(), pattern.inner.as_ptr(), kind) };
    }

    fn font_sort(&self, pattern: &Pattern, trim: bool) -> MatchResult<FontSet> {
        let mut result = 0;
        // The returned set is ours to free.
        let font_set = unsafe {
            (LIB.FcFontSort)(
                self.inner.as_ptr(),
                pattern.inner.as_ptr(),
                i32::from(trim),
                std::ptr::null_mut(),
                &raw mut result,
            )
        };
        let inner = NonNull::new(font_set).ok_or(MatchErr::Other)?;
        let font_set = FontSet { inner };
        if result != FcResultMatch {
            return Err(MatchErr::from_raw(result));
        }
        Ok(font_set)
    }

    fn font_match(&self, pattern: &Pattern) -> MatchResult<Pattern> {
        let mut result = 0;
        // This calls FcFontRenderPrepare for us.
        let pattern = unsafe {
            Pattern::from_raw(
                (LIB.FcFontMatch)(self.inner.as_ptr(), pattern.inner.as_ptr(), &raw mut result),
                Ownership::Application,
            )
        }
        .ok_or(MatchErr::Other)?;
        if result != FcResultMatch {
            return Err(MatchErr::from_raw(result));
        }
        Ok(pattern)
    }

    fn font_render_prepare(&self, pat: &Pattern, font: &Pattern) -> Option<Pattern> {
        unsafe {
            Pattern::from_raw(
                (LIB.FcFontRenderPrepare)(
                    self.inner.as_ptr(),
                    pat.inner.as_ptr(),
                    font.inner.as_ptr(),
                ),
                Ownership::Application,
            )
        }
    }
}

impl Drop for Config {
    fn drop(&mut self) {
        unsafe { (LIB.FcConfigDestroy)(self.inner.as_ptr()) };
    }
}

/// A [`MatchSource`] backed by the system Fontconfig configuration.
///
/// If the Fontconfig library cannot be loaded, the source matches nothing.
pub(super) struct FontconfigSource {
    config: Option<Config>,
}

impl FontconfigSource {
    /// Loads the system configuration and scans the configured font directories.
    pub(super) fn new() -> Self {
        if LIB_RESULT.as_ref().is_err() {
            log::warn!("the Fontconfig library could not be loaded; no system fonts will match");
            return Self { config: None };
        }
        // FcInitLoadConfigAndFonts returns a new config each time it is called.
        let config =
            unsafe { Config::from_raw((LIB.FcInitLoadConfigAndFonts)(), Ownership::Application) };
        if config.is_none() {
            log::warn!("failed to load the Fontconfig configuration");
        }
        Self { config }
    }

    /// Returns `true` if the Fontconfig configuration was loaded.
    pub(super) fn is_available(&self) -> bool {
        self.config.is_some()
    }

    /// Builds the Fontconfig query for `pattern`, with configuration and default
    /// substitutions applied.
    fn query(config: &Config, pattern: &MatchPattern) -> Option<Pattern> {
        let mut query = Pattern::new()?;
        for family in &pattern.families {
            let Ok(name) = CString::new(family.as_str()) else {
                continue;
            };
            query.add_string(FC_FAMILY, &name);
        }
        query.add_int(FC_WIDTH, pattern.width.value());
        query.add_int(FC_WEIGHT, pattern.weight.value());
        query.add_int(FC_SLANT, pattern.slant.value());
        config.substitute(&mut query, FcMatchPattern);
        query.default_substitute();
        Some(query)
    }
}

impl fmt::Debug for FontconfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontconfigSource")
            .field("available", &self.is_available())
            .finish()
    }
}

impl MatchSource for FontconfigSource {
    fn match_best(&mut self, pattern: &MatchPattern) -> Option<FoundFace> {
        let config = self.config.as_ref()?;
        let query = Self::query(config, pattern)?;
        match config.font_match(&query) {
            Ok(font) => Some(found_face(&font)),
            Err(err) => {
                log::debug!("FcFontMatch failed for {query:?}: {err:?}");
                None
            }
        }
    }

    fn match_ranked(&mut self, pattern: &MatchPattern, trim: bool) -> Vec<FoundFace> {
        let Some(config) = self.config.as_ref() else {
            return Vec::new();
        };
        let Some(query) = Self::query(config, pattern) else {
            return Vec::new();
        };
        let font_set = match config.font_sort(&query, trim) {
            Ok(font_set) => font_set,
            Err(err) => {
                log::debug!("FcFontSort failed for {query:?}: {err:?}");
                return Vec::new();
            }
        };
        font_set
            .iter()
            .filter_map(|font| config.font_render_prepare(&query, &font))
            .map(|font| found_face(&font))
            .collect()
    }
}

fn found_face(font: &Pattern) -> FoundFace {
    let coverage: Rc<dyn Coverage> = match font.get_charset(FC_CHARSET, 0) {
        Ok(charset) => Rc::new(charset),
        Err(_) => Rc::new(CharCoverage::new()),
    };
    FoundFace {
        family: font
            .get_string(FC_FAMILY, 0)
            .ok()
            .map(|name| name.into_owned()),
        weight: font.get_int(FC_WEIGHT, 0).ok().map(FcWeight::new),
        slant: font.get_int(FC_SLANT, 0).ok().map(FcSlant::new),
        width: font.get_int(FC_WIDTH, 0).ok().map(FcWidth::new),
        // This part is Unix-specific.
        file: font
            .get_c_string(FC_FILE, 0)
            .ok()
            .map(|path| PathBuf::from(OsStr::from_bytes(path.to_bytes()))),
        index: font
            .get_int(FC_INDEX, 0)
            .ok()
            .and_then(|index| u32::try_from(index).ok()),
        coverage,
    }
}
