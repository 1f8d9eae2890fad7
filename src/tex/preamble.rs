// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Font roles and preamble assembly

use smallvec::SmallVec;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const DEFAULT_MAIN: &str = "Aptos";
const DEFAULT_SANS: &str = "Aptos";
const DEFAULT_MATH: &str = "Cambria Math";
const DEFAULT_MATHRM: &str = "Cambria";
const DEFAULT_MATHCAL: &str = "Brush Script MT";
const DEFAULT_SPECIAL: &str = "Arial";

/// Requested font names per LaTeX role
///
/// `None` (or an empty string) selects the built-in default for that role.
/// The roles:
///
/// -   `main`: body text (`\setmainfont`)
/// -   `sans`: sans-serif text (`\setsansfont`)
/// -   `math`: math mode (`\setmathfont`)
/// -   `mathrm`: the `\mathrm` command (`\setmathrm`)
/// -   `mathcal`: the calligraphic math alphabet
/// -   `special`: the generated `\spchar{}` command
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FontRequest {
    pub main: Option<String>,
    pub sans: Option<String>,
    pub math: Option<String>,
    pub mathrm: Option<String>,
    pub mathcal: Option<String>,
    pub special: Option<String>,
}

impl FontRequest {
    /// Synonym for default: every role at its default font
    #[inline]
    pub fn new() -> Self {
        FontRequest::default()
    }

    /// True if no role was given a name
    pub fn is_empty(&self) -> bool {
        [
            &self.main,
            &self.sans,
            &self.math,
            &self.mathrm,
            &self.mathcal,
            &self.special,
        ]
        .into_iter()
        .all(|role| role.as_deref().map_or(true, str::is_empty))
    }
}

/// Resolved font names for each LaTeX role
///
/// Produced by [`FontSet::resolve`]; every role holds a non-empty name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontSet {
    pub main: String,
    pub sans: String,
    pub math: String,
    pub mathrm: String,
    pub mathcal: String,
    pub special: String,
}

impl FontSet {
    /// Resolve a request, filling unset roles with the default font
    pub fn resolve(req: &FontRequest) -> Self {
        let pick = |name: &Option<String>, default: &str| match name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => default.to_string(),
        };
        FontSet {
            main: pick(&req.main, DEFAULT_MAIN),
            sans: pick(&req.sans, DEFAULT_SANS),
            math: pick(&req.math, DEFAULT_MATH),
            mathrm: pick(&req.mathrm, DEFAULT_MATHRM),
            mathcal: pick(&req.mathcal, DEFAULT_MATHCAL),
            special: pick(&req.special, DEFAULT_SPECIAL),
        }
    }
}

impl Default for FontSet {
    fn default() -> Self {
        FontSet::resolve(&FontRequest::default())
    }
}

/// An ordered sequence of LaTeX preamble directives
///
/// Immutable once built (aside from [`push`][Preamble::push]); [`Display`]
/// joins the directives with newlines, which is the form written to the
/// configuration store.
///
/// [`Display`]: fmt::Display
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Preamble {
    fragments: SmallVec<[String; 12]>,
}

impl Preamble {
    /// Append a directive
    pub fn push(&mut self, fragment: impl Into<String>) {
        self.fragments.push(fragment.into());
    }

    /// Number of directives
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// True if no directive is present
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Iterate over directives in order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.fragments.iter().map(|s| s.as_str())
    }

    /// Preamble for the library's bundled LaTeX integration
    ///
    /// With `sans_text`, `helvet` is loaded so body text is sans-serif while
    /// math stays serif; otherwise text and math both use Computer Modern.
    pub fn default_latex(sans_text: bool) -> Self {
        let mut preamble = Preamble::default();
        if sans_text {
            preamble.push(r"\usepackage{helvet}");
        }
        preamble.push(r"\usepackage{amsmath}");
        preamble.push(r"\usepackage{amssymb}");
        preamble
    }

    /// Preamble for the PGF backend with custom fonts
    ///
    /// Fixed package directives (math, font selection, Unicode math, CJK
    /// support, upright Greek) followed by one binding per font role. The
    /// `special` role additionally defines `\spchar{}` wrapping text in that
    /// font.
    pub fn pgf(fonts: &FontSet) -> Self {
        let mut preamble = Preamble::default();
        preamble.push(r"\usepackage{amsmath}");
        preamble.push(r"\usepackage{fontspec}");
        preamble.push(r"\usepackage{unicode-math}");
        preamble.push(r"\usepackage[UTF8]{ctex}");
        preamble.push(r"\usepackage{upgreek}");

        preamble.push(format!(r"\setmainfont{{{}}}", fonts.main));
        preamble.push(format!(r"\setsansfont{{{}}}", fonts.sans));
        preamble.push(format!(r"\setmathfont{{{}}}", fonts.math));
        preamble.push(format!(r"\setmathrm{{{}}}", fonts.mathrm));

        // Resolution guarantees non-empty names, so these always apply.
        if !fonts.mathcal.is_empty() {
            preamble.push(format!(r"\setmathfont[range=\mathcal]{{{}}}", fonts.mathcal));
        }
        if !fonts.special.is_empty() {
            preamble.push(format!(r"\newfontfamily\specialfont{{{}}}", fonts.special));
            preamble.push(r"\newcommand{\spchar}[1]{\text{\specialfont #1}}");
        }
        preamble
    }
}

impl fmt::Display for Preamble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, fragment) in self.fragments.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(fragment)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_empty() {
        assert!(FontRequest::new().is_empty());
        let req = FontRequest {
            main: Some(String::new()),
            ..Default::default()
        };
        assert!(req.is_empty());
        let req = FontRequest {
            math: Some("STIX Two Math".to_string()),
            ..Default::default()
        };
        assert!(!req.is_empty());
    }

    #[test]
    fn resolve_defaults_and_overrides() {
        let req = FontRequest {
            main: Some("Libertinus Serif".to_string()),
            ..Default::default()
        };
        let fonts = FontSet::resolve(&req);
        assert_eq!(fonts.main, "Libertinus Serif");
        assert_eq!(fonts.sans, "Aptos");
        assert_eq!(fonts.math, "Cambria Math");
        assert_eq!(fonts.mathrm, "Cambria");
        assert_eq!(fonts.mathcal, "Brush Script MT");
        assert_eq!(fonts.special, "Arial");
    }

    #[test]
    fn default_latex_directives() {
        let serif = Preamble::default_latex(false);
        assert_eq!(
            serif.iter().collect::<Vec<_>>(),
            [r"\usepackage{amsmath}", r"\usepackage{amssymb}"]
        );
        let sans = Preamble::default_latex(true);
        assert_eq!(
            sans.iter().collect::<Vec<_>>(),
            [
                r"\usepackage{helvet}",
                r"\usepackage{amsmath}",
                r"\usepackage{amssymb}"
            ]
        );
    }

    #[test]
    fn pgf_directives() {
        let preamble = Preamble::pgf(&FontSet::default());
        let text = preamble.to_string();
        assert!(text.starts_with(r"\usepackage{amsmath}"));
        assert!(text.contains(r"\usepackage[UTF8]{ctex}"));
        assert!(text.contains(r"\usepackage{upgreek}"));
        assert!(text.contains(r"\setmainfont{Aptos}"));
        assert!(text.contains(r"\setmathfont{Cambria Math}"));
        assert!(text.contains(r"\setmathfont[range=\mathcal]{Brush Script MT}"));
        assert!(text.contains(r"\newfontfamily\specialfont{Arial}"));
        assert!(text.ends_with(r"\newcommand{\spchar}[1]{\text{\specialfont #1}}"));
        assert_eq!(preamble.len(), 12);
    }
}
