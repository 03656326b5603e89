// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Font resolution
//!
//! A [`FontQuery`] names a family, a requested boldness and slant and a set of
//! code points. The [`FontResolver`] maps it to an installed font file and
//! reports how faithfully the request can be met:
//!
//! -   *Fake bold / fake italic*: no installed face of the family has the
//!     requested style, thus renderers will synthesize it from another face
//! -   *Missing code points*: characters the selected face has no glyph for
//!
//! All platform access goes through a [`FontSource`]. The default source,
//! [`SystemSource`], reads the installed font collection via `fontdb`.
//!
//! ### Weights
//!
//! Weights use the usual OpenType scale: 400 is normal and 700 is bold. A
//! plain bold request is satisfied by any face of weight 700 or more; an
//! explicit weight request only by a face strictly heavier than that weight.
//!
//! ### Family names
//!
//! [`list_face_names`] lists installed families for display. On platforms
//! where enumerated names may be legacy or truncated names, each name is
//! replaced with the family name read from the font file
//! (see [`FamilyNaming`]).

mod attributes;
mod names;
pub mod path;
mod query;
mod resolver;
mod source;
mod status;
mod system;

pub use attributes::{FontStyle, FontWeight};
pub use names::{list_face_names, FamilyNaming};
pub use query::{BoldRequest, FontQuery, ResolutionResult, StyleCandidate, StyleFidelity};
pub use resolver::FontResolver;
pub use source::{family_eq, FaceError, FontSource};
pub use status::{LogStatus, NoStatus, Stage, StatusEvent, StatusObserver};
pub use system::{InitError, SystemFace, SystemSource};
