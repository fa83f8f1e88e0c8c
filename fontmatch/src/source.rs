// Copyright 2026 the Fontprobe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{FoundFace, MatchPattern};

/// A font matching service.
///
/// Implementations apply their own configuration and default substitutions to the pattern
/// before matching, the way Fontconfig's `FcConfigSubstitute` and `FcDefaultSubstitute` do.
pub trait MatchSource {
    /// Returns the single face that best matches `pattern`.
    fn match_best(&mut self, pattern: &MatchPattern) -> Option<FoundFace>;

    /// Returns every face that matches `pattern`, best first.
    ///
    /// When `trim` is set, faces that add no coverage beyond the faces ranked above them are
    /// left out.
    fn match_ranked(&mut self, pattern: &MatchPattern, trim: bool) -> Vec<FoundFace>;
}

impl<S: MatchSource + ?Sized> MatchSource for &mut S {
    fn match_best(&mut self, pattern: &MatchPattern) -> Option<FoundFace> {
        (**self).match_best(pattern)
    }

    fn match_ranked(&mut self, pattern: &MatchPattern, trim: bool) -> Vec<FoundFace> {
        (**self).match_ranked(pattern, trim)
    }
}
