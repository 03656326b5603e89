// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! The platform font facility

use super::{FontStyle, FontWeight, StyleCandidate};
use std::collections::BTreeSet;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to resolve a face, its file or its coverage
///
/// These are recoverable: the resolver reports them and degrades its result.
#[derive(Error, Debug)]
pub enum FaceError {
    #[error("no face matches the requested family")]
    NoMatch,
    #[error("face handle does not refer to a loaded face")]
    NoFace,
    #[error("face is not backed by a local file")]
    NotLocalFile,
    #[error("font parse error")]
    Parse(#[from] ttf_parser::FaceParsingError),
    #[error("face has no family name record")]
    NoFamilyName,
    #[error("code point {0:#x} is not a Unicode scalar value")]
    InvalidCodepoint(u32),
    #[error("failed to access font file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A source of installed fonts
///
/// This is the only interface to the platform. [`super::SystemSource`] is the
/// implementation over the system font database.
///
/// Faces are owned handles: dropping one releases whatever it holds.
pub trait FontSource {
    /// Handle to a selected face
    type Face;

    /// All installed family names
    ///
    /// Enumeration failure yields an empty list.
    fn family_names(&self) -> Vec<String>;

    /// All face variants of `family`
    ///
    /// Families are matched case-insensitively. Returns an empty list if the
    /// family is not installed.
    fn styles(&self, family: &str) -> Vec<StyleCandidate>;

    /// Select the nearest available face of `family`
    ///
    /// The exact style need not exist: the platform's matching picks the
    /// closest real face.
    fn select_face(
        &self,
        family: &str,
        weight: FontWeight,
        style: FontStyle,
    ) -> Result<Self::Face, FaceError>;

    /// Location of the file backing `face`
    ///
    /// The path is as known to the platform and has not been normalized.
    fn file_path(&self, face: &Self::Face) -> Result<PathBuf, FaceError>;

    /// The family name embedded in the face's own tables
    ///
    /// This is the typographic family where present, not the (possibly
    /// truncated) name used to enumerate the face.
    fn family_name(&self, face: &Self::Face) -> Result<String, FaceError>;

    /// Whether `face` has a glyph for `codepoint`
    fn has_char(&self, face: &Self::Face, codepoint: u32) -> Result<bool, FaceError>;

    /// The subset of `codepoints` which `face` cannot render
    ///
    /// A code point whose query fails counts as missing. Implementations may
    /// override this to avoid repeated set-up per code point.
    fn missing_chars(&self, face: &Self::Face, codepoints: &BTreeSet<u32>) -> BTreeSet<u32> {
        codepoints
            .iter()
            .copied()
            .filter(|cp| !matches!(self.has_char(face, *cp), Ok(true)))
            .collect()
    }
}

impl<S: FontSource + ?Sized> FontSource for &S {
    type Face = S::Face;

    fn family_names(&self) -> Vec<String> {
        (**self).family_names()
    }

    fn styles(&self, family: &str) -> Vec<StyleCandidate> {
        (**self).styles(family)
    }

    fn select_face(
        &self,
        family: &str,
        weight: FontWeight,
        style: FontStyle,
    ) -> Result<Self::Face, FaceError> {
        (**self).select_face(family, weight, style)
    }

    fn file_path(&self, face: &Self::Face) -> Result<PathBuf, FaceError> {
        (**self).file_path(face)
    }

    fn family_name(&self, face: &Self::Face) -> Result<String, FaceError> {
        (**self).family_name(face)
    }

    fn has_char(&self, face: &Self::Face, codepoint: u32) -> Result<bool, FaceError> {
        (**self).has_char(face, codepoint)
    }

    fn missing_chars(&self, face: &Self::Face, codepoints: &BTreeSet<u32>) -> BTreeSet<u32> {
        (**self).missing_chars(face, codepoints)
    }
}

/// Case-insensitive family name comparison
pub fn family_eq(a: &str, b: &str) -> bool {
    (a.len() == b.len() && a.eq_ignore_ascii_case(b))
        || a.chars().flat_map(char::to_lowercase).eq(b.chars().flat_map(char::to_lowercase))
}

#[cfg(test)]
mod test {
    use super::family_eq;

    #[test]
    fn family_case() {
        assert!(family_eq("DejaVu Sans", "dejavu sans"));
        assert!(family_eq("ÉLAN", "élan"));
        assert!(!family_eq("DejaVu Sans", "DejaVu Sans Mono"));
    }
}
