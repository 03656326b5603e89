// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! In-memory font source for tests

#![allow(dead_code)]

use kas_font_files::fonts::{
    family_eq, FaceError, FontSource, FontStyle, FontWeight, StyleCandidate,
};
use std::cell::Cell;
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::rc::Rc;

/// Description of one face
#[derive(Clone, Debug)]
pub struct MockFace {
    pub weight: FontWeight,
    pub style: FontStyle,
    /// Backing file; `None` for in-memory faces
    pub path: Option<PathBuf>,
    pub chars: BTreeSet<u32>,
    /// Name stored in the face's name table
    pub embedded_name: Option<String>,
}

impl MockFace {
    pub fn new(weight: FontWeight, style: FontStyle, path: impl Into<PathBuf>) -> Self {
        MockFace {
            weight,
            style,
            path: Some(path.into()),
            chars: BTreeSet::new(),
            embedded_name: None,
        }
    }

    pub fn in_memory(weight: FontWeight, style: FontStyle) -> Self {
        MockFace {
            weight,
            style,
            path: None,
            chars: BTreeSet::new(),
            embedded_name: None,
        }
    }

    pub fn with_chars(mut self, text: &str) -> Self {
        self.chars.extend(text.chars().map(u32::from));
        self
    }

    pub fn with_embedded_name(mut self, name: &str) -> Self {
        self.embedded_name = Some(name.to_string());
        self
    }
}

/// A live face handle
///
/// Counts outstanding handles so tests can check that all are released.
pub struct MockHandle {
    family: usize,
    face: usize,
    live: Rc<Cell<usize>>,
}

impl Drop for MockHandle {
    fn drop(&mut self) {
        self.live.set(self.live.get() - 1);
    }
}

#[derive(Default)]
pub struct MockSource {
    families: Vec<(String, Vec<MockFace>)>,
    live: Rc<Cell<usize>>,
    /// Make every face selection fail
    pub fail_select: bool,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_family(mut self, name: &str, faces: Vec<MockFace>) -> Self {
        self.families.push((name.to_string(), faces));
        self
    }

    /// Number of face handles not yet dropped
    pub fn live_handles(&self) -> usize {
        self.live.get()
    }

    fn family(&self, name: &str) -> Option<(usize, &[MockFace])> {
        self.families
            .iter()
            .enumerate()
            .find(|(_, (n, _))| family_eq(n, name))
            .map(|(i, (_, faces))| (i, faces.as_slice()))
    }

    fn info(&self, handle: &MockHandle) -> &MockFace {
        &self.families[handle.family].1[handle.face]
    }
}

impl FontSource for MockSource {
    type Face = MockHandle;

    fn family_names(&self) -> Vec<String> {
        self.families.iter().map(|(name, _)| name.clone()).collect()
    }

    fn styles(&self, family: &str) -> Vec<StyleCandidate> {
        self.family(family)
            .map(|(_, faces)| {
                faces
                    .iter()
                    .map(|f| StyleCandidate::new(f.weight, f.style))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn select_face(
        &self,
        family: &str,
        weight: FontWeight,
        style: FontStyle,
    ) -> Result<MockHandle, FaceError> {
        if self.fail_select {
            return Err(FaceError::NoMatch);
        }
        let (family, faces) = self.family(family).ok_or(FaceError::NoMatch)?;
        // Prefer matching slant, then the closest weight
        let face = faces
            .iter()
            .enumerate()
            .min_by_key(|(_, f)| {
                let slant = f.style.is_italic() != style.is_italic();
                let distance = (i32::from(f.weight.value()) - i32::from(weight.value())).abs();
                (slant, distance)
            })
            .map(|(i, _)| i)
            .ok_or(FaceError::NoMatch)?;

        self.live.set(self.live.get() + 1);
        Ok(MockHandle {
            family,
            face,
            live: self.live.clone(),
        })
    }

    fn file_path(&self, face: &MockHandle) -> Result<PathBuf, FaceError> {
        self.info(face).path.clone().ok_or(FaceError::NotLocalFile)
    }

    fn family_name(&self, face: &MockHandle) -> Result<String, FaceError> {
        self.info(face)
            .embedded_name
            .clone()
            .ok_or(FaceError::NoFamilyName)
    }

    fn has_char(&self, face: &MockHandle, codepoint: u32) -> Result<bool, FaceError> {
        if char::from_u32(codepoint).is_none() {
            return Err(FaceError::InvalidCodepoint(codepoint));
        }
        Ok(self.info(face).chars.contains(&codepoint))
    }
}

pub const REGULAR: (FontWeight, FontStyle) = (FontWeight::NORMAL, FontStyle::Normal);
pub const ITALIC: (FontWeight, FontStyle) = (FontWeight::NORMAL, FontStyle::Italic);
pub const BOLD: (FontWeight, FontStyle) = (FontWeight::BOLD, FontStyle::Normal);
pub const BOLD_ITALIC: (FontWeight, FontStyle) = (FontWeight::BOLD, FontStyle::Italic);

/// Create a file to stand in for a font
pub fn font_file(dir: &tempfile::TempDir, name: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, b"not really a font").unwrap();
    path
}

/// A face backed by a new file in `dir`
pub fn face(dir: &tempfile::TempDir, name: &str, (weight, style): (FontWeight, FontStyle)) -> MockFace {
    MockFace::new(weight, style, font_file(dir, name))
}
