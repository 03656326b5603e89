// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Font source configuration

use crate::fonts::FamilyNaming;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration of the system font source
///
/// A `SourceConfig` can be default-constructed (installed fonts only, with the
/// platform's default naming strategy).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SourceConfig {
    /// Load installed system fonts
    ///
    /// Defaults to `true`. Disabling this restricts resolution to
    /// [`SourceConfig::font_dirs`] and [`SourceConfig::font_files`].
    pub system_fonts: bool,
    /// Additional directories to scan (recursively)
    ///
    /// Each must be readable or construction fails.
    pub font_dirs: Vec<PathBuf>,
    /// Additional font files
    ///
    /// Each must be readable or construction fails. Files which are readable
    /// but not valid fonts are skipped.
    pub font_files: Vec<PathBuf>,
    /// How family names are listed
    ///
    /// See [`FamilyNaming`].
    pub naming: FamilyNaming,
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig {
            system_fonts: true,
            font_dirs: vec![],
            font_files: vec![],
            naming: FamilyNaming::default(),
        }
    }
}

impl SourceConfig {
    /// Alternative default constructor
    pub fn new() -> Self {
        Self::default()
    }

    /// A configuration loading only the given files, without system fonts
    pub fn with_files(files: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        SourceConfig {
            system_fonts: false,
            font_files: files.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }
}
