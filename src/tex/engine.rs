// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! LaTeX engine discovery

use cfg_if::cfg_if;
use log::{debug, info};
use smallvec::SmallVec;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A LaTeX engine identifier
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TexEngine {
    LuaLatex,
    XeLatex,
    PdfLatex,
}

impl TexEngine {
    /// Fallback priority, most capable engine first
    pub const FALLBACK: [TexEngine; 3] = [TexEngine::LuaLatex, TexEngine::XeLatex, TexEngine::PdfLatex];

    /// The engine identifier as used in configuration keys
    pub fn name(self) -> &'static str {
        match self {
            TexEngine::LuaLatex => "lualatex",
            TexEngine::XeLatex => "xelatex",
            TexEngine::PdfLatex => "pdflatex",
        }
    }

    /// The executable file name on the given platform
    pub fn exe_name(self, os: OsFamily) -> &'static str {
        match os {
            OsFamily::Windows => match self {
                TexEngine::LuaLatex => "lualatex.exe",
                TexEngine::XeLatex => "xelatex.exe",
                TexEngine::PdfLatex => "pdflatex.exe",
            },
            _ => self.name(),
        }
    }
}

impl fmt::Display for TexEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Not one of the three recognized engine identifiers
#[derive(Error, Debug)]
#[error("unknown TeX engine '{0}'")]
pub struct UnknownEngine(pub String);

impl FromStr for TexEngine {
    type Err = UnknownEngine;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lualatex" => Ok(TexEngine::LuaLatex),
            "xelatex" => Ok(TexEngine::XeLatex),
            "pdflatex" => Ok(TexEngine::PdfLatex),
            other => Err(UnknownEngine(other.to_string())),
        }
    }
}

/// Operating-system family
///
/// Determines the candidate installation directories probed by [`discover`]
/// and the executable naming convention.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OsFamily {
    Linux,
    MacOs,
    Windows,
}

impl OsFamily {
    /// The family of the host this process runs on
    pub fn host() -> Self {
        cfg_if! {
            if #[cfg(windows)] {
                OsFamily::Windows
            } else if #[cfg(target_os = "macos")] {
                OsFamily::MacOs
            } else {
                OsFamily::Linux
            }
        }
    }

    /// Directories where a TeX distribution is commonly installed
    ///
    /// Scanned in order by [`discover`] when the search path does not already
    /// provide all engines.
    pub fn candidate_dirs(self) -> &'static [&'static str] {
        match self {
            OsFamily::Linux => &[
                "/usr/local/texlive/2025/bin/x86_64-linux",
                "/usr/local/texlive/2024/bin/x86_64-linux",
                "/usr/local/texlive/2023/bin/x86_64-linux",
                "/usr/local/bin",
                "/usr/bin",
                "/opt/texbin",
            ],
            OsFamily::MacOs => &[
                "/Library/TeX/texbin",
                "/usr/local/texlive/2025/bin/universal-darwin",
                "/usr/local/texlive/2024/bin/universal-darwin",
                "/opt/homebrew/bin",
                "/opt/local/bin",
            ],
            OsFamily::Windows => &[
                "C:\\texlive\\2025\\bin\\windows",
                "C:\\texlive\\2024\\bin\\windows",
                "C:\\texlive\\2023\\bin\\windows",
                "C:\\Program Files\\MiKTeX\\miktex\\bin\\x64",
                "C:\\Program Files (x86)\\MiKTeX\\miktex\\bin",
            ],
        }
    }

    fn case_insensitive_paths(self) -> bool {
        matches!(self, OsFamily::Windows)
    }
}

/// Environment accessor used by [`discover`]
///
/// Abstracts the execution search path and the filesystem probes so that
/// discovery can run against a simulated environment in tests. The provided
/// [`find_executable`][TexEnv::find_executable] resolves an executable name
/// through the search path in order.
pub trait TexEnv {
    /// The operating-system family of this environment
    fn os(&self) -> OsFamily;

    /// The directories of the execution search path, in order
    fn search_path(&self) -> Vec<PathBuf>;

    /// Prepend `dir` to the search path for the remaining process lifetime
    fn prepend_search_path(&mut self, dir: &Path);

    /// Check that `dir` exists and is a directory
    fn is_dir(&self, dir: &Path) -> bool;

    /// Check that an executable named `exe` exists within `dir`
    fn has_executable(&self, dir: &Path, exe: &str) -> bool;

    /// Resolve `exe` through the search path
    fn find_executable(&self, exe: &str) -> Option<PathBuf> {
        self.search_path()
            .into_iter()
            .find(|dir| self.has_executable(dir, exe))
            .map(|dir| dir.join(exe))
    }
}

/// The real process environment
///
/// Search-path mutation rewrites the `PATH` variable of this process; child
/// processes (the LaTeX engine invoked by the plotting backend) inherit it.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemEnv;

impl TexEnv for SystemEnv {
    fn os(&self) -> OsFamily {
        OsFamily::host()
    }

    fn search_path(&self) -> Vec<PathBuf> {
        match std::env::var_os("PATH") {
            Some(path) => std::env::split_paths(&path).collect(),
            None => vec![],
        }
    }

    fn prepend_search_path(&mut self, dir: &Path) {
        let mut dirs = vec![dir.to_owned()];
        dirs.extend(self.search_path());
        if let Ok(joined) = std::env::join_paths(dirs) {
            std::env::set_var("PATH", joined);
        }
    }

    fn is_dir(&self, dir: &Path) -> bool {
        dir.is_dir()
    }

    fn has_executable(&self, dir: &Path, exe: &str) -> bool {
        dir.join(exe).is_file()
    }
}

/// Compare directories, ignoring trailing separators (and case, on Windows)
fn same_dir(a: &Path, b: &Path, os: OsFamily) -> bool {
    if os.case_insensitive_paths() {
        let lower = |p: &Path| {
            p.components()
                .map(|c| c.as_os_str().to_string_lossy().to_lowercase())
                .collect::<Vec<_>>()
        };
        lower(a) == lower(b)
    } else {
        a.components().eq(b.components())
    }
}

/// Result of a [`discover`] pass
///
/// Maps each discovered engine to its resolved executable path. Built fresh
/// on each call and discarded after use; nothing is cached.
#[derive(Clone, Debug, Default)]
pub struct Discovery {
    found: SmallVec<[(TexEngine, PathBuf); 3]>,
    install_dir: Option<PathBuf>,
}

impl Discovery {
    fn insert(&mut self, engine: TexEngine, path: PathBuf) {
        debug_assert!(!self.contains(engine));
        self.found.push((engine, path));
    }

    /// True if `engine` was discovered
    pub fn contains(&self, engine: TexEngine) -> bool {
        self.found.iter().any(|(e, _)| *e == engine)
    }

    /// The resolved executable path of `engine`, if discovered
    pub fn path_of(&self, engine: TexEngine) -> Option<&Path> {
        self.found
            .iter()
            .find(|(e, _)| *e == engine)
            .map(|(_, p)| p.as_path())
    }

    /// True if no engine was discovered
    pub fn is_empty(&self) -> bool {
        self.found.is_empty()
    }

    /// True if all three engines were discovered
    pub fn is_complete(&self) -> bool {
        self.found.len() == TexEngine::FALLBACK.len()
    }

    /// The TeX installation directory found off the search path, if any
    pub fn install_dir(&self) -> Option<&Path> {
        self.install_dir.as_deref()
    }

    /// Choose an engine
    ///
    /// Returns `requested` if it was discovered; otherwise the first
    /// discovered engine in [`TexEngine::FALLBACK`] order; otherwise `None`.
    pub fn select(&self, requested: Option<TexEngine>) -> Option<TexEngine> {
        if let Some(engine) = requested {
            if self.contains(engine) {
                return Some(engine);
            }
        }
        TexEngine::FALLBACK.into_iter().find(|e| self.contains(*e))
    }
}

/// Probe the environment for installed LaTeX engines
///
/// First resolves each engine through the search path, stopping there if all
/// three are found. Otherwise the per-platform candidate installation
/// directories are scanned in order; the first existing directory containing
/// at least two of the three engines is taken as the installation path,
/// prepended to the search path (unless already on it), and the still-missing
/// engines are resolved again.
///
/// Discovery never fails; an environment without any engine simply yields an
/// empty [`Discovery`].
pub fn discover(env: &mut dyn TexEnv) -> Discovery {
    let os = env.os();
    let mut found = Discovery::default();

    for engine in TexEngine::FALLBACK {
        if let Some(path) = env.find_executable(engine.exe_name(os)) {
            debug!("{} on search path: {}", engine, path.display());
            found.insert(engine, path);
        }
    }
    if found.is_complete() {
        return found;
    }

    // The search path is missing at least one engine; look for an
    // installation in the usual places.
    for dir in os.candidate_dirs() {
        let dir = Path::new(dir);
        if !env.is_dir(dir) {
            continue;
        }
        let count = TexEngine::FALLBACK
            .iter()
            .filter(|e| env.has_executable(dir, e.exe_name(os)))
            .count();
        debug!("candidate {}: {count} engine(s)", dir.display());
        if count >= 2 {
            info!("TeX installation found at {}", dir.display());
            found.install_dir = Some(dir.to_owned());
            break;
        }
    }

    if let Some(dir) = found.install_dir.clone() {
        let on_path = env.search_path().iter().any(|p| same_dir(p, &dir, os));
        if !on_path {
            env.prepend_search_path(&dir);
        }
        for engine in TexEngine::FALLBACK {
            if found.contains(engine) {
                continue;
            }
            if let Some(path) = env.find_executable(engine.exe_name(os)) {
                found.insert(engine, path);
            }
        }
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_names() {
        assert_eq!(TexEngine::LuaLatex.name(), "lualatex");
        assert_eq!(TexEngine::XeLatex.exe_name(OsFamily::Linux), "xelatex");
        assert_eq!(TexEngine::PdfLatex.exe_name(OsFamily::Windows), "pdflatex.exe");
        assert_eq!("xelatex".parse::<TexEngine>().unwrap(), TexEngine::XeLatex);
        assert!("latex".parse::<TexEngine>().is_err());
    }

    #[test]
    fn select_prefers_requested_then_fallback_order() {
        let mut d = Discovery::default();
        d.insert(TexEngine::PdfLatex, PathBuf::from("/usr/bin/pdflatex"));
        d.insert(TexEngine::XeLatex, PathBuf::from("/usr/bin/xelatex"));
        assert_eq!(d.select(Some(TexEngine::PdfLatex)), Some(TexEngine::PdfLatex));
        assert_eq!(d.select(Some(TexEngine::LuaLatex)), Some(TexEngine::XeLatex));
        assert_eq!(d.select(None), Some(TexEngine::XeLatex));
        assert_eq!(Discovery::default().select(None), None);
    }

    #[test]
    fn same_dir_normalization() {
        let os = OsFamily::Linux;
        assert!(same_dir(Path::new("/usr/bin/"), Path::new("/usr/bin"), os));
        assert!(!same_dir(Path::new("/usr/Bin"), Path::new("/usr/bin"), os));

        let os = OsFamily::Windows;
        assert!(same_dir(
            Path::new("C:\\TeXLive\\bin"),
            Path::new("C:\\texlive\\bin"),
            os
        ));
    }

    #[test]
    fn candidate_tables_nonempty() {
        for os in [OsFamily::Linux, OsFamily::MacOs, OsFamily::Windows] {
            assert!(!os.candidate_dirs().is_empty());
        }
    }
}
