// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Plot style configuration library
//!
//! This crate configures a plotting library's text-rendering pipeline: either
//! native text rendering, the library's bundled LaTeX integration, or
//! custom-font LaTeX via a PGF-style backend driven by a locally installed
//! LaTeX engine. Settings are written to an explicit [`StyleStore`] owned by
//! the caller; nothing here touches ambient global state except the process
//! search path (and only when a TeX installation is discovered off-path).
//!
//! Two entry points:
//!
//! -   [`GeneralParams::apply`] writes visual defaults (figure size, font
//!     size, resolution, line width) plus any caller overrides;
//! -   [`configure`] selects one of the three rendering modes and writes the
//!     corresponding keys, locating a usable LaTeX engine first where needed.
//!
//! ```
//! use plotstyle::{configure, GeneralParams, PgfBackend, RenderOptions, StyleStore};
//! use plotstyle::tex::SystemEnv;
//!
//! struct Backend;
//! impl PgfBackend for Backend {
//!     fn activate(&mut self) -> Result<(), plotstyle::BackendUnavailable> {
//!         Ok(())
//!     }
//! }
//!
//! let mut store = StyleStore::new();
//! GeneralParams::default().apply(&mut store);
//!
//! let options = RenderOptions {
//!     default_latex: true,
//!     sans_text: true,
//!     ..Default::default()
//! };
//! let report = configure(&mut store, &mut SystemEnv, &mut Backend, &options).unwrap();
//! assert!(report.ignored.is_empty());
//! ```

pub mod tex;

mod mode;
pub use mode::*;

mod params;
pub use params::*;

mod store;
pub use store::*;
