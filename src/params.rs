// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! General visual parameters

use crate::store::{keys, StyleStore, Value};
use log::info;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// General visual parameters
///
/// A fixed set of visual defaults plus an open-ended list of named overrides.
/// These are independent of the rendering mode and may be applied in any
/// configuration, before or after [`configure`][crate::configure].
///
/// The defaults are an 8×6 inch figure at 600 DPI, 12 pt text and 1.0 pt
/// lines.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeneralParams {
    /// Figure (width, height) in inches
    pub figsize: (f64, f64),
    /// Base font size in points
    pub font_size: f64,
    /// Output resolution in dots per inch
    pub dpi: f64,
    /// Default line width in points
    pub linewidth: f64,
    extra: Vec<(String, Value)>,
}

impl Default for GeneralParams {
    fn default() -> Self {
        GeneralParams {
            figsize: (8.0, 6.0),
            font_size: 12.0,
            dpi: 600.0,
            linewidth: 1.0,
            extra: vec![],
        }
    }
}

impl GeneralParams {
    /// Synonym for default
    #[inline]
    pub fn new() -> Self {
        GeneralParams::default()
    }

    /// Add a named override
    ///
    /// Overrides are written after the base values, so an override of one of
    /// the four base keys wins. Multiple overrides of the same key are
    /// written in insertion order (last wins).
    pub fn set_extra(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.extra.push((key.into(), value.into()));
    }

    /// Write these parameters into `store`
    ///
    /// Always succeeds; any key already present is overwritten.
    pub fn apply(&self, store: &mut StyleStore) {
        store.set(keys::FONT_SIZE, self.font_size);
        store.set(keys::FIGURE_FIGSIZE, self.figsize);
        store.set(keys::FIGURE_DPI, self.dpi);
        store.set(keys::LINES_LINEWIDTH, self.linewidth);
        for (key, value) in &self.extra {
            store.set(key.clone(), value.clone());
        }
        info!(
            "general parameters set: font_size={}, figsize=({}, {}), dpi={}, linewidth={}",
            self.font_size, self.figsize.0, self.figsize.1, self.dpi, self.linewidth
        );
    }
}
