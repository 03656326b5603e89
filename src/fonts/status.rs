// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Progress and diagnostic reporting
//!
//! Reports are advisory: observers see them as the resolver works but cannot
//! influence any result.

use std::fmt;

/// A step of font resolution
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Construction of the font source
    Init,
    /// Enumeration of a family's faces
    Enumerate,
    /// Selection of the nearest face
    Select,
    /// Lookup of the face's backing file
    Locate,
    /// Opening the backing file
    Open,
    /// Path normalization
    Normalize,
    /// Glyph coverage tests
    Coverage,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Init => "init",
            Stage::Enumerate => "enumerate",
            Stage::Select => "select",
            Stage::Locate => "locate",
            Stage::Open => "open",
            Stage::Normalize => "normalize",
            Stage::Coverage => "coverage",
        };
        f.write_str(name)
    }
}

/// A status report
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StatusEvent {
    /// A stage is starting
    Step(Stage),
    /// A stage failed; resolution stops here
    Failed(Stage),
}

/// Receiver of status reports
///
/// Any `Fn(StatusEvent, &str)` closure is an observer.
pub trait StatusObserver {
    /// Receive one report with a human-readable `detail`
    fn report(&self, event: StatusEvent, detail: &str);
}

impl<F: Fn(StatusEvent, &str)> StatusObserver for F {
    #[inline]
    fn report(&self, event: StatusEvent, detail: &str) {
        self(event, detail)
    }
}

/// Discards all reports
impl StatusObserver for () {
    #[inline]
    fn report(&self, _: StatusEvent, _: &str) {}
}

/// Discards all reports
///
/// A named alternative to `()`.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoStatus;

impl StatusObserver for NoStatus {
    #[inline]
    fn report(&self, _: StatusEvent, _: &str) {}
}

/// Forwards reports to the [`log`] facade
///
/// Steps are logged at `debug` level and failures at `warn` level.
#[derive(Copy, Clone, Debug, Default)]
pub struct LogStatus;

impl StatusObserver for LogStatus {
    fn report(&self, event: StatusEvent, detail: &str) {
        match event {
            StatusEvent::Step(stage) => log::debug!("{stage}: {detail}"),
            StatusEvent::Failed(stage) => log::warn!("{stage} failed: {detail}"),
        }
    }
}
