// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Font file path normalization

use super::FaceError;
use std::ffi::OsString;
use std::path::{Component, Path, PathBuf, Prefix};

/// Normalize the path of an existing font file
///
/// Links are resolved and the result is absolute, so that two paths to the
/// same file compare equal. Extended-length (`\\?\`) prefixes introduced by
/// canonicalization on Windows are removed.
///
/// Filename case is left as reported by the file system.
pub fn normalize(path: &Path) -> Result<PathBuf, FaceError> {
    let io_err = |source| FaceError::Io {
        path: path.to_path_buf(),
        source,
    };
    let canonical = std::fs::canonicalize(path).map_err(io_err)?;
    std::path::absolute(strip_verbatim(canonical)).map_err(io_err)
}

fn strip_verbatim(path: PathBuf) -> PathBuf {
    let mut components = path.components();
    let Some(Component::Prefix(prefix)) = components.next() else {
        return path;
    };

    let mut out = match prefix.kind() {
        Prefix::VerbatimDisk(disk) => PathBuf::from(format!("{}:\\", char::from(disk))),
        Prefix::VerbatimUNC(server, share) => {
            let mut s = OsString::from(r"\\");
            s.push(server);
            s.push(r"\");
            s.push(share);
            s.push(r"\");
            PathBuf::from(s)
        }
        _ => return path,
    };
    out.extend(components.filter(|c| !matches!(c, Component::RootDir)));
    out
}
