// Copyright 2026 the Fontprobe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Choosing the face inside a font file and instancing variable fonts.

use std::path::Path;

use font_attrs::{FcSlant, FcWeight, FcWidth};
use fontmatch::{FoundFace, MatchPattern};
use read_fonts::types::Tag;

use crate::{FaceTables, MetricsError, TableLoader};

/// The attributes a font file is opened for.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FaceTarget {
    /// Wanted weight.
    pub weight: FcWeight,
    /// Wanted slant.
    pub slant: FcSlant,
    /// Wanted width.
    pub width: FcWidth,
}

impl FaceTarget {
    /// Takes the attributes reported for `found`, falling back to the requested ones where the
    /// matching service reported none (e.g. a weight range of a variable font).
    pub fn new(found: &FoundFace, requested: &MatchPattern) -> Self {
        Self {
            weight: found.weight.unwrap_or(requested.weight),
            slant: found.slant.unwrap_or(requested.slant),
            width: found.width.unwrap_or(requested.width),
        }
    }
}

/// The face that was opened from a file.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FaceSelection {
    /// Index of the face in its file.
    pub index: u32,
    /// How many of weight, width and slant agreed with the target, when the face had to be
    /// picked from a collection by scoring. `None` when no choice was made.
    pub score: Option<u8>,
}

impl FaceSelection {
    /// The score of a face agreeing on all attributes.
    pub const PERFECT_SCORE: u8 = 3;

    /// Returns `false` if the face was scored and disagreed on some attribute.
    pub fn is_exact(&self) -> bool {
        self.score.is_none_or(|score| score == Self::PERFECT_SCORE)
    }
}

/// Scores how well a face agrees with `target`, one point each for weight, width and slant.
pub fn score_face(face: &impl FaceTables, target: &FaceTarget) -> u8 {
    let os2 = face.os2();
    let weight = os2.is_some_and(|os2| FcWeight::from_os2(os2.weight_class) == target.weight);
    let width =
        os2.is_some_and(|os2| FcWidth::from_os2(os2.width_class) == Some(target.width));
    let italic = os2.is_some_and(|os2| os2.italic)
        || face.subfamily_name().is_some_and(|name| {
            let name = name.to_lowercase();
            name.contains("italic") || name.contains("oblique")
        });
    let slant = if italic {
        target.slant.is_slanted()
    } else {
        target.slant == FcSlant::ROMAN
    };
    u8::from(weight) + u8::from(width) + u8::from(slant)
}

/// Opens the face of the file at `path` that best matches `target`.
///
/// An explicit `index` (as reported by the matching service) is honored as is. Otherwise a
/// collection is searched for the first face with the highest score, stopping at a perfect
/// one. Variable faces are then instanced at the target weight and width.
///
/// Fontconfig reports an index for every face it matches, so with the system source the search
/// never runs. It applies to sources that report a file without an index, such as a
/// [`MemoryFace`](fontmatch::MemoryFace) registered with `None`.
pub fn open_face<L: TableLoader>(
    loader: &mut L,
    path: &Path,
    index: Option<u32>,
    target: &FaceTarget,
) -> Result<(L::Face, FaceSelection), MetricsError> {
    let (mut face, selection) = match index {
        Some(index) => {
            // The upper bits carry the named instance.
            let index = index & 0xFFFF;
            let face = loader.open(path, index)?;
            (face, FaceSelection { index, score: None })
        }
        None => {
            let count = loader.face_count(path)?;
            if count <= 1 {
                (loader.open(path, 0)?, FaceSelection {
                    index: 0,
                    score: None,
                })
            } else {
                best_face(loader, path, count, target)?
            }
        }
    };
    let settings = variation_settings(&face, target);
    if !settings.is_empty() {
        face.set_variations(&settings);
    }
    Ok((face, selection))
}

fn best_face<L: TableLoader>(
    loader: &mut L,
    path: &Path,
    count: u32,
    target: &FaceTarget,
) -> Result<(L::Face, FaceSelection), MetricsError> {
    let mut best: Option<(L::Face, FaceSelection)> = None;
    for index in 0..count {
        let face = loader.open(path, index)?;
        let score = score_face(&face, target);
        if best
            .as_ref()
            .is_none_or(|(_, selection)| selection.score < Some(score))
        {
            best = Some((face, FaceSelection {
                index,
                score: Some(score),
            }));
        }
        if score == FaceSelection::PERFECT_SCORE {
            break;
        }
    }
    best.ok_or_else(|| MetricsError::FaceIndexOutOfRange {
        path: path.to_owned(),
        index: 0,
        count,
    })
}

/// Returns the `wght` and `wdth` coordinates for the axes `face` has.
///
/// `wght` is the OS/2 weight nearest to the target weight; `wdth` is the target width
/// percentage.
pub fn variation_settings(face: &impl FaceTables, target: &FaceTarget) -> Vec<(Tag, f32)> {
    const WGHT: Tag = Tag::new(b"wght");
    const WDTH: Tag = Tag::new(b"wdth");
    face.axes()
        .iter()
        .filter_map(|axis| match axis.tag {
            WGHT => Some((WGHT, f32::from(target.weight.to_os2()))),
            WDTH => Some((WDTH, target.width.value() as f32)),
            _ => None,
        })
        .collect()
}
