// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! KAS font files library
//!
//! Locate the installed font files used by a document's styles and report
//! which styles and characters they cannot provide.
//!
//! ```no_run
//! use kas_font_files::fonts::{BoldRequest, FontQuery, FontResolver, LogStatus};
//! use kas_font_files::SourceConfig;
//!
//! let resolver = FontResolver::from_config(&SourceConfig::default(), LogStatus)?;
//! let query = FontQuery::new("DejaVu Sans")
//!     .with_bold(BoldRequest::from_ass(1))
//!     .with_text("Hello, world");
//! let result = resolver.resolve(&query);
//! match result.path {
//!     Some(ref path) => println!("{} (fake bold: {})", path.display(), result.fake_bold),
//!     None => println!("font not found"),
//! }
//! # Ok::<(), kas_font_files::fonts::InitError>(())
//! ```

mod config;
pub use config::SourceConfig;

pub mod fonts;
