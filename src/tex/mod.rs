// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! TeX engine discovery and preamble assembly
//!
//! The custom-font rendering mode needs a LaTeX engine installed on the host.
//! [`discover`] probes the execution search path for the three recognized
//! engines ([`TexEngine`]) and, when the path comes up short, scans a fixed
//! per-platform list of installation directories ([`OsFamily`]), prepending a
//! found installation to the search path for the remainder of the process
//! lifetime.
//!
//! All environment access goes through the [`TexEnv`] trait; [`SystemEnv`]
//! implements it over the real process environment, while tests substitute a
//! mock.
//!
//! [`Preamble`] assembles the document-setup directives handed to the engine,
//! binding a [`FontSet`] (resolved from a caller's [`FontRequest`]) to the
//! LaTeX font roles.

mod engine;
mod preamble;

pub use engine::*;
pub use preamble::*;
