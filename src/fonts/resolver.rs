// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Font resolver

use super::path::normalize;
use super::{
    list_face_names, FaceError, FontQuery, FontSource, InitError, LogStatus, ResolutionResult,
    Stage, StatusEvent, StatusObserver, StyleFidelity, SystemSource,
};
use crate::SourceConfig;
use log::debug;
use std::fs::File;
use std::path::PathBuf;

/// Resolves [`FontQuery`] values to font files
///
/// The resolver owns its font source, which is constructed once and shared
/// by all subsequent queries. Queries are independent: nothing is cached.
///
/// The resolver is not designed for concurrent use; use one instance per
/// thread or serialize access.
pub struct FontResolver<S: FontSource = SystemSource> {
    source: S,
    status: Box<dyn StatusObserver>,
    config: Option<SourceConfig>,
}

impl FontResolver<SystemSource> {
    /// Construct over the system font collection
    ///
    /// Failure here is fatal: see [`InitError`].
    pub fn from_config(
        config: &SourceConfig,
        status: impl StatusObserver + 'static,
    ) -> Result<Self, InitError> {
        status.report(StatusEvent::Step(Stage::Init), "loading font collection");
        let source = match SystemSource::new(config) {
            Ok(source) => source,
            Err(err) => {
                status.report(StatusEvent::Failed(Stage::Init), &err.to_string());
                return Err(err);
            }
        };

        let mut resolver = FontResolver::new(source).with_status(status);
        resolver.config = Some(config.clone());
        Ok(resolver)
    }

    /// List installed family names
    ///
    /// Uses the naming strategy of the configuration.
    pub fn face_names(&self) -> Vec<String> {
        let naming = self.config.as_ref().map(|c| c.naming).unwrap_or_default();
        list_face_names(&self.source, naming)
    }
}

impl<S: FontSource> FontResolver<S> {
    /// Construct over any source
    ///
    /// Status is logged via [`LogStatus`] until replaced by
    /// [`FontResolver::with_status`].
    pub fn new(source: S) -> Self {
        FontResolver {
            source,
            status: Box::new(LogStatus),
            config: None,
        }
    }

    /// Replace the status observer
    pub fn with_status(mut self, status: impl StatusObserver + 'static) -> Self {
        self.status = Box::new(status);
        self
    }

    /// Access the font source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Resolve a query
    ///
    /// Without a path in the result, the family was not found or could not
    /// be located on disk. This is not an error: callers report it as a
    /// missing font.
    pub fn resolve(&self, query: &FontQuery) -> ResolutionResult {
        debug!(
            "resolve(): \"{}\" bold={:?} italic={} ({} chars)",
            query.family,
            query.bold,
            query.italic,
            query.codepoints.len()
        );
        let mut result = ResolutionResult::default();

        self.step(Stage::Enumerate, || format!("styles of \"{}\"", query.family));
        let candidates = self.source.styles(&query.family);
        if candidates.is_empty() {
            self.fail(Stage::Enumerate, &format!("family \"{}\" not found", query.family));
            return result;
        }
        let fidelity = StyleFidelity::evaluate(query, &candidates);
        debug!("{} faces; {fidelity:?}", candidates.len());
        result.set_fidelity(fidelity);

        let weight = query.bold.target_weight();
        let style = query.target_style();
        self.step(Stage::Select, || format!("{} {weight} {style}", query.family));
        let face = match self.source.select_face(&query.family, weight, style) {
            Ok(face) => face,
            Err(err) => {
                self.fail(Stage::Select, &err);
                // No usable face: fake flags are meaningless
                return ResolutionResult::default();
            }
        };

        match self.locate(&face) {
            Ok(path) => result.path = Some(path),
            Err((stage, err)) => {
                self.fail(stage, &err);
                return result;
            }
        }

        if !query.codepoints.is_empty() {
            self.step(Stage::Coverage, || {
                format!("{} code points", query.codepoints.len())
            });
            result.missing = self.source.missing_chars(&face, &query.codepoints);
        }

        result
    }

    fn locate(&self, face: &S::Face) -> Result<PathBuf, (Stage, FaceError)> {
        self.step(Stage::Locate, String::new);
        let path = self
            .source
            .file_path(face)
            .map_err(|err| (Stage::Locate, err))?;

        self.step(Stage::Open, || path.display().to_string());
        // Held open until normalization completes
        let _file = File::open(&path).map_err(|source| {
            let path = path.clone();
            (Stage::Open, FaceError::Io { path, source })
        })?;

        self.step(Stage::Normalize, || path.display().to_string());
        normalize(&path).map_err(|err| (Stage::Normalize, err))
    }

    fn step(&self, stage: Stage, detail: impl FnOnce() -> String) {
        self.status.report(StatusEvent::Step(stage), &detail());
    }

    fn fail(&self, stage: Stage, err: &dyn std::fmt::Display) {
        self.status
            .report(StatusEvent::Failed(stage), &err.to_string());
    }
}
