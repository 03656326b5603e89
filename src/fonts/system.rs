// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! System font source
//!
//! Installed fonts are discovered by [`fontdb`] (fontconfig on Unix-like
//! systems, the standard font directories elsewhere). Face tables are read
//! with [`ttf_parser`].

use super::{family_eq, FaceError, FontSource, FontStyle, FontWeight, StyleCandidate};
use crate::SourceConfig;
use fontdb::{Database, Family, FaceInfo, Language, Query, Source, Stretch, ID};
use log::{debug, info, warn};
use std::collections::BTreeSet;
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use ttf_parser::{name_id, Face};

/// Failure to construct a font source
///
/// This is fatal: no source (and thus no resolver) exists afterwards.
#[derive(Error, Debug)]
pub enum InitError {
    #[error("failed to read font directory {}", path.display())]
    FontDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to load font file {}", path.display())]
    FontFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("no fonts found")]
    NoFonts,
}

/// Handle to a face of a [`SystemSource`]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SystemFace {
    id: ID,
}

impl SystemFace {
    /// The face's identifier within the source database
    pub fn id(&self) -> ID {
        self.id
    }
}

/// The installed font collection
///
/// This is constructed once and then queried read-only.
pub struct SystemSource {
    db: Database,
}

impl SystemSource {
    /// Load the font collection described by `config`
    pub fn new(config: &SourceConfig) -> Result<Self, InitError> {
        let mut db = Database::new();
        if config.system_fonts {
            db.load_system_fonts();
        }

        for path in &config.font_dirs {
            // fontdb silently skips unreadable directories
            if let Err(source) = std::fs::read_dir(path) {
                let path = path.clone();
                return Err(InitError::FontDir { path, source });
            }
            db.load_fonts_dir(path);
        }

        for path in &config.font_files {
            if let Err(source) = db.load_font_file(path) {
                let path = path.clone();
                return Err(InitError::FontFile { path, source });
            }
        }

        Self::from_database(db)
    }

    /// Use an existing database
    ///
    /// Fails with [`InitError::NoFonts`] if `db` is empty.
    pub fn from_database(db: Database) -> Result<Self, InitError> {
        if db.len() == 0 {
            return Err(InitError::NoFonts);
        }
        info!("Found {} fonts", db.len());
        Ok(SystemSource { db })
    }

    /// Access the underlying database
    pub fn database(&self) -> &Database {
        &self.db
    }

    fn family_faces<'a>(&'a self, family: &'a str) -> impl Iterator<Item = &'a FaceInfo> + 'a {
        self.db
            .faces()
            .filter(move |face| face.families.iter().any(|(name, _)| family_eq(name, family)))
    }

    /// The database's own spelling of `family`
    fn canonical_family(&self, family: &str) -> Option<&str> {
        self.db.faces().find_map(|face| {
            face.families
                .iter()
                .map(|(name, _)| name.as_str())
                .find(|name| family_eq(name, family))
        })
    }
}

impl FontSource for SystemSource {
    type Face = SystemFace;

    fn family_names(&self) -> Vec<String> {
        let names: BTreeSet<&str> = self
            .db
            .faces()
            .filter_map(|face| face.families.first())
            .map(|(name, _)| name.as_str())
            .collect();
        names.into_iter().map(String::from).collect()
    }

    fn styles(&self, family: &str) -> Vec<StyleCandidate> {
        self.family_faces(family)
            .map(|face| StyleCandidate::new(face.weight.into(), face.style.into()))
            .collect()
    }

    fn select_face(
        &self,
        family: &str,
        weight: FontWeight,
        style: FontStyle,
    ) -> Result<SystemFace, FaceError> {
        let name = self.canonical_family(family).ok_or(FaceError::NoMatch)?;
        let query = Query {
            families: &[Family::Name(name)],
            weight: weight.into(),
            stretch: Stretch::Normal,
            style: style.into(),
        };
        let id = self.db.query(&query).ok_or(FaceError::NoMatch)?;
        debug!("select_face(): {family} {weight} {style} → {id:?}");
        Ok(SystemFace { id })
    }

    fn file_path(&self, face: &SystemFace) -> Result<PathBuf, FaceError> {
        let info = self.db.face(face.id).ok_or(FaceError::NoFace)?;
        match &info.source {
            Source::File(path) => Ok(path.clone()),
            Source::SharedFile(path, _) => Ok(path.clone()),
            Source::Binary(_) => Err(FaceError::NotLocalFile),
        }
    }

    fn family_name(&self, face: &SystemFace) -> Result<String, FaceError> {
        self.db
            .with_face_data(face.id, |data, index| {
                let face = Face::parse(data, index)?;
                embedded_family_name(&face).ok_or(FaceError::NoFamilyName)
            })
            .ok_or(FaceError::NoFace)?
    }

    fn has_char(&self, face: &SystemFace, codepoint: u32) -> Result<bool, FaceError> {
        let c = char::from_u32(codepoint).ok_or(FaceError::InvalidCodepoint(codepoint))?;
        self.db
            .with_face_data(face.id, |data, index| {
                let face = Face::parse(data, index)?;
                Ok::<_, FaceError>(face_has_char(&face, c))
            })
            .ok_or(FaceError::NoFace)?
    }

    fn missing_chars(&self, face: &SystemFace, codepoints: &BTreeSet<u32>) -> BTreeSet<u32> {
        if codepoints.is_empty() {
            return BTreeSet::new();
        }

        // Parse once for all code points
        let result = self.db.with_face_data(face.id, |data, index| {
            let face = Face::parse(data, index)?;
            Ok::<_, FaceError>(
                codepoints
                    .iter()
                    .copied()
                    .filter(|cp| !char::from_u32(*cp).is_some_and(|c| face_has_char(&face, c)))
                    .collect::<BTreeSet<u32>>(),
            )
        });

        match result {
            Some(Ok(missing)) => missing,
            Some(Err(err)) => {
                warn!("coverage of {:?} unavailable: {err}", face.id);
                codepoints.clone()
            }
            None => {
                warn!("coverage of {:?} unavailable: {}", face.id, FaceError::NoFace);
                codepoints.clone()
            }
        }
    }
}

// GlyphId 0 is the 'missing glyph' representation (see cmap table /
// TrueType specification), so a mapping to it does not count.
fn face_has_char(face: &Face, c: char) -> bool {
    face.glyph_index(c).is_some_and(|id| id.0 != 0)
}

/// Read the family name from a face's name table
///
/// The typographic family (name ID 16) is preferred over the legacy family
/// (name ID 1), which is limited to four styles per family and so often
/// carries a weight suffix. US English records are preferred.
pub(crate) fn embedded_family_name(face: &Face) -> Option<String> {
    for id in [name_id::TYPOGRAPHIC_FAMILY, name_id::FAMILY] {
        let mut fallback = None;
        for name in face.names() {
            if name.name_id != id || !name.is_unicode() {
                continue;
            }
            if let Some(s) = name.to_string() {
                if name.language() == Language::English_UnitedStates {
                    return Some(s);
                }
                fallback.get_or_insert(s);
            }
        }
        if fallback.is_some() {
            return fallback;
        }
    }
    None
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_database() {
        assert!(matches!(
            SystemSource::from_database(Database::new()),
            Err(InitError::NoFonts)
        ));
    }

    #[test]
    fn unknown_file() {
        let config = SourceConfig::with_files(["/nonexistent/font/file.ttf"]);
        assert!(matches!(
            SystemSource::new(&config),
            Err(InitError::FontFile { .. })
        ));
    }

    #[test]
    fn unknown_dir() {
        let config = SourceConfig {
            system_fonts: false,
            font_dirs: vec!["/nonexistent/font/dir".into()],
            ..Default::default()
        };
        assert!(matches!(
            SystemSource::new(&config),
            Err(InitError::FontDir { .. })
        ));
    }
}
