// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Rendering mode configuration

use crate::store::{keys, StyleStore};
use crate::tex::{discover, FontSet, Preamble, TexEngine, TexEnv};
use log::{info, warn};
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The PGF-style backend could not be activated
#[derive(Error, Debug)]
#[error("PGF backend not available")]
pub struct BackendUnavailable;

/// Fatal outcome of [`configure`]
///
/// Either variant leaves the configuration store unchanged. Neither is fatal
/// to the process; the caller may retry after adjusting the environment.
#[derive(Error, Debug)]
pub enum ModeError {
    /// No usable LaTeX engine on this host
    #[error("no LaTeX engine found (need one of lualatex, xelatex, pdflatex)")]
    MissingToolchain {
        /// The engine the caller asked for, if any
        requested: Option<TexEngine>,
    },
    /// The plotting library could not switch to its PGF backend
    #[error(transparent)]
    BackendUnavailable(#[from] BackendUnavailable),
}

/// Ability to switch the plotting library to its PGF-style backend
///
/// This capability belongs to the plotting library; [`configure`] only
/// consumes it, and only in the custom-font mode.
pub trait PgfBackend {
    /// Make the PGF-style backend the active one
    fn activate(&mut self) -> Result<(), BackendUnavailable>;
}

/// Which rendering mode a [`configure`] call applied
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ModeKind {
    /// Native text rendering by the plotting library
    Native,
    /// The library's bundled LaTeX integration
    DefaultLatex,
    /// Custom-font LaTeX via the PGF backend
    PgfLatex,
}

/// An input that was supplied but is meaningless in the selected mode
///
/// Each is reported once via [`log::warn!`] and listed in [`Applied`];
/// the value itself is discarded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Ignored {
    /// `cm_math` has no effect when LaTeX rendering is enabled
    CmMath,
    /// Custom fonts have no effect outside the custom-font mode
    Fonts,
    /// The engine choice was not honored: meaningless in this mode, or (in
    /// the custom-font mode) not discovered, with fallback applied
    Engine(TexEngine),
}

/// Report of a successful [`configure`] call
#[derive(Clone, Debug)]
pub struct Applied {
    /// The mode whose keys were written
    pub mode: ModeKind,
    /// The engine written to the store ([`ModeKind::PgfLatex`] only)
    pub engine: Option<TexEngine>,
    /// Supplied inputs that were discarded
    pub ignored: Vec<Ignored>,
}

/// Options for [`configure`]
///
/// The default requests the custom-font LaTeX mode with every font at its
/// default and the engine chosen by discovery.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RenderOptions {
    /// Render text with LaTeX (otherwise natively)
    pub use_latex: bool,
    /// Under `use_latex`: use the bundled integration instead of PGF
    pub default_latex: bool,
    /// Under `default_latex`: sans-serif body text (serif math)
    pub sans_text: bool,
    /// Under native rendering: Computer-Modern-style math fonts instead of
    /// the default sans-based set
    pub cm_math: bool,
    /// Engine for the custom-font mode; `None` lets discovery choose
    pub engine: Option<TexEngine>,
    /// Fonts for the custom-font mode
    pub fonts: crate::tex::FontRequest,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            use_latex: true,
            default_latex: false,
            sans_text: false,
            cm_math: false,
            engine: None,
            fonts: Default::default(),
        }
    }
}

/// Configure the rendering mode
///
/// Selects one of three mutually exclusive modes from `options` and writes
/// the corresponding keys into `store`:
///
/// -   native rendering: `text.usetex`, `mathtext.fontset`;
/// -   default LaTeX: `text.usetex`, `font.family`, `text.latex.preamble`;
/// -   custom-font LaTeX: discovers a LaTeX engine via `env` (see
///     [`discover`]), activates the PGF backend, then writes
///     `pgf.texsystem`, `text.usetex`, `pgf.rcfonts` and `pgf.preamble`.
///
/// On error the store is left exactly as it was. Keys written by a
/// previously selected mode are *not* cleared when switching modes: the
/// plotting library only reads the keys belonging to the active mode, so
/// stale values are inert. Callers wanting a pristine store should pass a
/// fresh one.
///
/// Repeating a call with identical options and an unchanged environment
/// yields an identical store (keys are overwritten, never accumulated).
pub fn configure(
    store: &mut StyleStore,
    env: &mut dyn TexEnv,
    backend: &mut dyn PgfBackend,
    options: &RenderOptions,
) -> Result<Applied, ModeError> {
    let mut ignored = Vec::new();

    if !options.use_latex {
        info!("mode: native rendering");
        if !options.fonts.is_empty() {
            warn!("custom fonts are ignored under native rendering");
            ignored.push(Ignored::Fonts);
        }
        if let Some(engine) = options.engine {
            warn!("engine choice '{engine}' is ignored under native rendering");
            ignored.push(Ignored::Engine(engine));
        }
        let fontset = if options.cm_math { "cm" } else { "dejavusans" };
        store.set(keys::TEXT_USETEX, false);
        store.set(keys::MATHTEXT_FONTSET, fontset);
        return Ok(Applied {
            mode: ModeKind::Native,
            engine: None,
            ignored,
        });
    }

    info!("mode: LaTeX rendering");
    if options.cm_math {
        warn!("'cm_math' is ignored when LaTeX rendering is enabled");
        ignored.push(Ignored::CmMath);
    }

    if options.default_latex {
        info!("sub-mode: default LaTeX");
        if !options.fonts.is_empty() {
            warn!("custom fonts are ignored by the default LaTeX mode");
            ignored.push(Ignored::Fonts);
        }
        if let Some(engine) = options.engine {
            warn!("engine choice '{engine}' is ignored by the default LaTeX mode");
            ignored.push(Ignored::Engine(engine));
        }
        let family = if options.sans_text { "sans-serif" } else { "serif" };
        store.set(keys::TEXT_USETEX, true);
        store.set(keys::FONT_FAMILY, family);
        store.set(
            keys::TEXT_LATEX_PREAMBLE,
            Preamble::default_latex(options.sans_text).to_string(),
        );
        return Ok(Applied {
            mode: ModeKind::DefaultLatex,
            engine: None,
            ignored,
        });
    }

    info!("sub-mode: custom-font LaTeX via PGF backend");
    let discovery = discover(env);
    let Some(engine) = discovery.select(options.engine) else {
        warn!("no LaTeX engine found: install TeX Live or MiKTeX to use custom fonts");
        return Err(ModeError::MissingToolchain {
            requested: options.engine,
        });
    };
    if let Some(requested) = options.engine {
        if requested != engine {
            warn!("requested engine '{requested}' not found, falling back to '{engine}'");
            ignored.push(Ignored::Engine(requested));
        }
    }

    if let Err(err) = backend.activate() {
        warn!("{err}: cannot use the custom-font mode");
        return Err(err.into());
    }

    let fonts = FontSet::resolve(&options.fonts);
    let preamble = Preamble::pgf(&fonts);

    store.set(keys::PGF_TEXSYSTEM, engine.name());
    store.set(keys::TEXT_USETEX, true);
    store.set(keys::PGF_RCFONTS, false);
    store.set(keys::PGF_PREAMBLE, preamble.to_string());

    info!(
        "fonts set: main='{}', sans='{}', math='{}', mathrm='{}', mathcal='{}', special='{}'",
        fonts.main, fonts.sans, fonts.math, fonts.mathrm, fonts.mathcal, fonts.special
    );
    warn!("PGF output is typeset by {engine}; on-screen display and SVG export may not match");

    Ok(Applied {
        mode: ModeKind::PgfLatex,
        engine: Some(engine),
        ignored,
    })
}
