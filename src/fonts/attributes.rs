// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Weight and style types are adapted from https://github.com/linebender/parley PR #359.
// Copyright 2024 the Parley Authors

//! Properties for specifying font weight and style.

use core::fmt;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Visual weight class of a font, typically on a scale from 1 to 1000.
///
/// The default value is [`FontWeight::NORMAL`] or `400`.
///
/// See <https://fonts.google.com/knowledge/glossary/weight>
///
/// In CSS, this corresponds to the [`font-weight`] property.
///
/// [`font-weight`]: https://www.w3.org/TR/css-fonts-4/#font-weight-prop
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FontWeight(u16);

impl FontWeight {
    /// Weight value of 400. This is the default value.
    pub const NORMAL: Self = Self(400);

    /// Weight value of 700.
    ///
    /// This is the threshold at which a face counts as "bold" for a plain
    /// bold request.
    pub const BOLD: Self = Self(700);

    /// Weight value of 900.
    pub const BLACK: Self = Self(900);
}

impl FontWeight {
    /// Creates a new weight attribute with the given value.
    pub const fn new(weight: u16) -> Self {
        Self(weight)
    }

    /// Returns the underlying weight value.
    pub fn value(self) -> u16 {
        self.0
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match self.0 {
            400 => "normal",
            700 => "bold",
            900 => "black",
            _ => return write!(f, "{}", self.0),
        };
        write!(f, "{keyword}")
    }
}

impl From<fontdb::Weight> for FontWeight {
    fn from(weight: fontdb::Weight) -> Self {
        FontWeight(weight.0)
    }
}

impl From<FontWeight> for fontdb::Weight {
    fn from(weight: FontWeight) -> Self {
        fontdb::Weight(weight.0)
    }
}

/// Visual style or 'slope' of a font.
///
/// The default value is [`FontStyle::Normal`].
///
/// See <https://fonts.google.com/knowledge/glossary/style>
///
/// In CSS, this corresponds to the [`font-style`] property.
///
/// [`font-style`]: https://www.w3.org/TR/css-fonts-4/#font-style-prop
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FontStyle {
    /// An upright or "roman" style.
    #[default]
    Normal,
    /// Generally a slanted style, originally based on semi-cursive forms.
    /// This often has a different structure from the normal style.
    Italic,
    /// Oblique (or slanted) style.
    Oblique,
}

impl FontStyle {
    /// Select the style for an italic flag
    #[inline]
    pub fn from_italic(italic: bool) -> Self {
        if italic {
            FontStyle::Italic
        } else {
            FontStyle::Normal
        }
    }

    /// True for any slanted face
    ///
    /// Oblique faces satisfy an italic request: platforms do not synthesize
    /// a slant over a face which already has one.
    #[inline]
    pub fn is_italic(self) -> bool {
        self != FontStyle::Normal
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match *self {
            Self::Normal => "normal",
            Self::Italic => "italic",
            Self::Oblique => "oblique",
        };
        write!(f, "{value}")
    }
}

impl From<fontdb::Style> for FontStyle {
    fn from(style: fontdb::Style) -> Self {
        match style {
            fontdb::Style::Normal => FontStyle::Normal,
            fontdb::Style::Italic => FontStyle::Italic,
            fontdb::Style::Oblique => FontStyle::Oblique,
        }
    }
}

impl From<FontStyle> for fontdb::Style {
    fn from(style: FontStyle) -> Self {
        match style {
            FontStyle::Normal => fontdb::Style::Normal,
            FontStyle::Italic => fontdb::Style::Italic,
            FontStyle::Oblique => fontdb::Style::Oblique,
        }
    }
}
