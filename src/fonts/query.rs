// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Font queries and resolution results

use super::{FontStyle, FontWeight};
use easy_cast::Conv;
use std::collections::BTreeSet;
use std::path::PathBuf;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Requested boldness
///
/// Subtitle formats store boldness as an integer: `0` is regular, `1` is bold
/// and any larger value is an explicit weight. Use [`BoldRequest::from_ass`]
/// to convert.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BoldRequest {
    /// Not bold
    #[default]
    Regular,
    /// Standard bold
    Bold,
    /// An explicit weight
    ///
    /// Faces count as bold only when strictly heavier than this value.
    Weight(u16),
}

impl BoldRequest {
    /// Convert from the integer representation used by subtitle styles
    ///
    /// Negative values are treated as [`BoldRequest::Bold`] since these
    /// formats write `-1` for "true".
    pub fn from_ass(bold: i32) -> Self {
        match bold {
            0 => BoldRequest::Regular,
            1 => BoldRequest::Bold,
            n if n > 1 => BoldRequest::Weight(u16::try_conv(n).unwrap_or(u16::MAX)),
            _ => BoldRequest::Bold,
        }
    }

    /// True unless [`BoldRequest::Regular`]
    #[inline]
    pub fn is_requested(self) -> bool {
        self != BoldRequest::Regular
    }

    /// The weight to request from the platform
    pub fn target_weight(self) -> FontWeight {
        match self {
            BoldRequest::Regular => FontWeight::NORMAL,
            BoldRequest::Bold => FontWeight::BOLD,
            BoldRequest::Weight(w) => FontWeight::new(w),
        }
    }

    /// Whether a face of `weight` satisfies this request without synthesis
    pub fn accepts(self, weight: FontWeight) -> bool {
        match self {
            BoldRequest::Regular => true,
            BoldRequest::Bold => weight >= FontWeight::BOLD,
            BoldRequest::Weight(w) => weight.value() > w,
        }
    }
}

/// A request to resolve
///
/// One query is built per distinct (family, bold, italic) combination used in
/// a document, carrying every character used with that style.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FontQuery {
    /// Family name, matched case-insensitively
    pub family: String,
    /// Requested boldness
    pub bold: BoldRequest,
    /// Requested italic
    pub italic: bool,
    /// Unicode code points which must be renderable
    pub codepoints: BTreeSet<u32>,
}

impl FontQuery {
    /// Construct a query for a family with regular style and no characters
    pub fn new(family: impl Into<String>) -> Self {
        FontQuery {
            family: family.into(),
            ..Default::default()
        }
    }

    /// Set boldness
    pub fn with_bold(mut self, bold: BoldRequest) -> Self {
        self.bold = bold;
        self
    }

    /// Set italic
    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    /// Add all characters of `text` to the required code points
    pub fn with_text(mut self, text: &str) -> Self {
        self.codepoints.extend(text.chars().map(u32::from));
        self
    }

    /// Add raw code points
    ///
    /// Values need not be valid Unicode scalars; invalid values are reported
    /// as missing.
    pub fn with_codepoints(mut self, codepoints: impl IntoIterator<Item = u32>) -> Self {
        self.codepoints.extend(codepoints);
        self
    }

    /// Whether any non-regular style is requested
    #[inline]
    pub fn wants_style(&self) -> bool {
        self.italic || self.bold.is_requested()
    }

    /// The style to request from the platform
    #[inline]
    pub fn target_style(&self) -> FontStyle {
        FontStyle::from_italic(self.italic)
    }
}

/// One installed face variant of a family
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct StyleCandidate {
    /// Weight class of the face
    pub weight: FontWeight,
    /// Slant of the face
    pub style: FontStyle,
}

impl StyleCandidate {
    /// Construct
    pub fn new(weight: FontWeight, style: FontStyle) -> Self {
        StyleCandidate { weight, style }
    }

    /// True for italic and oblique faces
    #[inline]
    pub fn is_italic(&self) -> bool {
        self.style.is_italic()
    }
}

/// Which requested styles must be synthesized
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleFidelity {
    /// No face is heavy enough for the requested boldness
    pub fake_bold: bool,
    /// No face has a slant
    pub fake_italic: bool,
}

impl StyleFidelity {
    /// Decide which styles of `query` no candidate provides
    ///
    /// When italic is available, bold must exist in combination with it.
    /// When italic will be synthesized anyway, bold is judged on its own.
    pub fn evaluate(query: &FontQuery, candidates: &[StyleCandidate]) -> Self {
        if !query.wants_style() {
            return StyleFidelity::default();
        }

        let is_italic_ok = |c: &StyleCandidate| !query.italic || c.is_italic();
        let is_bold_ok = |c: &StyleCandidate| query.bold.accepts(c.weight);

        let mut has_bold = false;
        let mut has_italic = false;
        let mut has_bold_italic = false;
        for c in candidates {
            has_bold |= is_bold_ok(c);
            has_italic |= is_italic_ok(c);
            has_bold_italic |= is_bold_ok(c) && is_italic_ok(c);
        }

        StyleFidelity {
            fake_bold: if query.italic && has_italic {
                !has_bold_italic
            } else {
                !has_bold
            },
            fake_italic: !has_italic,
        }
    }
}

/// Result of resolving a [`FontQuery`]
///
/// Without a `path` the family was not found (or not usable) on this system.
/// With a `path`, set `fake_*` flags indicate styles the platform will
/// synthesize.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResolutionResult {
    /// Normalized absolute path to the font file
    pub path: Option<PathBuf>,
    /// Bold must be synthesized
    pub fake_bold: bool,
    /// Italic must be synthesized
    pub fake_italic: bool,
    /// Requested code points which the face cannot render
    pub missing: BTreeSet<u32>,
}

impl ResolutionResult {
    /// True if a font file was located
    #[inline]
    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }

    /// True if found with all styles and characters available
    pub fn is_exact(&self) -> bool {
        self.is_found() && !self.fake_bold && !self.fake_italic && self.missing.is_empty()
    }

    /// Missing code points as chars, skipping invalid scalar values
    pub fn missing_chars(&self) -> impl Iterator<Item = char> + '_ {
        self.missing.iter().filter_map(|cp| char::from_u32(*cp))
    }

    pub(crate) fn set_fidelity(&mut self, fidelity: StyleFidelity) {
        self.fake_bold = fidelity.fake_bold;
        self.fake_italic = fidelity.fake_italic;
    }
}
