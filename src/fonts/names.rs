// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Installed family names
//!
//! Used to populate font pickers. The list is sorted and free of duplicates.

use super::{FontSource, FontStyle, FontWeight};
use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Strategy used to name listed families
///
/// Some platforms enumerate legacy family names, truncated or split per
/// style (e.g. "Source Sans Pro Semibold"). [`FamilyNaming::Typographic`]
/// replaces each with the family name read from the font itself.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FamilyNaming {
    /// Use names as enumerated
    Raw,
    /// Re-read each name from a representative face of the family
    Typographic,
}

impl Default for FamilyNaming {
    /// The platform's strategy
    ///
    /// This is `Typographic` on Windows and `Raw` elsewhere.
    fn default() -> Self {
        cfg_if::cfg_if! {
            if #[cfg(windows)] {
                FamilyNaming::Typographic
            } else {
                FamilyNaming::Raw
            }
        }
    }
}

/// List installed family names
///
/// The result is sorted (by code point) with duplicates removed. Failure to
/// enumerate yields an empty list.
pub fn list_face_names<S: FontSource>(source: &S, naming: FamilyNaming) -> Vec<String> {
    let raw = source.family_names();
    debug!("list_face_names(): {} families, {naming:?}", raw.len());

    let mut names = match naming {
        FamilyNaming::Raw => raw,
        FamilyNaming::Typographic => raw
            .into_iter()
            .map(|name| typographic_name(source, name))
            .collect(),
    };

    names.sort_unstable();
    names.dedup();
    names
}

fn typographic_name<S: FontSource>(source: &S, raw: String) -> String {
    // Any representative face will do; the family name is shared
    let face = match source.select_face(&raw, FontWeight::NORMAL, FontStyle::Normal) {
        Ok(face) => face,
        Err(err) => {
            debug!("keeping name \"{raw}\": {err}");
            return raw;
        }
    };

    match source.family_name(&face) {
        Ok(name) if !name.is_empty() => name,
        Ok(_) => raw,
        Err(err) => {
            debug!("keeping name \"{raw}\": {err}");
            raw
        }
    }
}
