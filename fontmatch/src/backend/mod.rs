// Copyright 2026 the Fontprobe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! System matching backends.

#[cfg(all(feature = "system", target_os = "linux"))]
mod fontconfig;

use crate::{FoundFace, MatchPattern, MatchSource};

#[cfg(all(feature = "system", target_os = "linux"))]
type Backend = fontconfig::FontconfigSource;

#[cfg(not(all(feature = "system", target_os = "linux")))]
type Backend = null_backend::NullSource;

/// The matching service of the host system.
///
/// On Linux with the `system` feature this is Fontconfig. On other targets, or when created
/// with [`disabled`](Self::disabled), it matches nothing.
#[derive(Debug)]
pub struct SystemSource {
    backend: Option<Backend>,
}

impl SystemSource {
    /// Connects to the system matching service.
    pub fn new() -> Self {
        Self {
            backend: Some(Backend::new()),
        }
    }

    /// Creates a source that never touches the system and matches nothing.
    pub fn disabled() -> Self {
        Self { backend: None }
    }

    /// Returns `true` if the system service is loaded.
    pub fn is_available(&self) -> bool {
        self.backend
            .as_ref()
            .is_some_and(|backend| backend.is_available())
    }
}

impl Default for SystemSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchSource for SystemSource {
    fn match_best(&mut self, pattern: &MatchPattern) -> Option<FoundFace> {
        self.backend.as_mut()?.match_best(pattern)
    }

    fn match_ranked(&mut self, pattern: &MatchPattern, trim: bool) -> Vec<FoundFace> {
        match self.backend.as_mut() {
            Some(backend) => backend.match_ranked(pattern, trim),
            None => Vec::new(),
        }
    }
}

#[cfg(not(all(feature = "system", target_os = "linux")))]
mod null_backend {
    use crate::{FoundFace, MatchPattern, MatchSource};

    #[derive(Debug, Default)]
    pub(super) struct NullSource;

    impl NullSource {
        pub(super) fn new() -> Self {
            Self
        }

        pub(super) fn is_available(&self) -> bool {
            false
        }
    }

    impl MatchSource for NullSource {
        fn match_best(&mut self, _pattern: &MatchPattern) -> Option<FoundFace> {
            None
        }

        fn match_ranked(&mut self, _pattern: &MatchPattern, _trim: bool) -> Vec<FoundFace> {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SystemSource;
    use crate::{MatchPattern, MatchSource, ReducedStyle};

    #[test]
    fn disabled_source_matches_nothing() {
        let mut source = SystemSource::disabled();
        let pattern = MatchPattern::from_style(&ReducedStyle::default());
        assert!(!source.is_available());
        assert!(source.match_best(&pattern).is_none());
        assert!(source.match_ranked(&pattern, true).is_empty());
    }
}
