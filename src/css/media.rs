//! Media conditions and their logical AND.
//!
//! A [`Media`] is one media query: an optional media type plus a set of
//! feature expressions, all joined by `and`. Features are stored in a sorted
//! set, so `a.and(b)` and `b.and(a)` serialize identically and repeated
//! features collapse. `all` is the identity for the media type; two different
//! concrete types can never both match, and their AND is `not all`. The
//! printer prepends `@media `.

use std::collections::BTreeSet;
use std::fmt;
use std::ops::BitAnd;

/// Media type prefix of a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MediaType {
    All,
    Screen,
    Print,
}

impl MediaType {
    pub fn as_str(self) -> &'static str {
        match self {
            MediaType::All => "all",
            MediaType::Screen => "screen",
            MediaType::Print => "print",
        }
    }
}

/// Value of the `prefers-color-scheme` media feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorScheme {
    Light,
    Dark,
}

impl ColorScheme {
    pub fn as_str(self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        }
    }
}

/// Value of the `orientation` media feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Landscape,
    Portrait,
}

/// A media query: `[only] <type> and (<feature>) and ...`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Media {
    /// `(type, only)`; `None` for feature-only queries.
    media_type: Option<(MediaType, bool)>,
    features: BTreeSet<String>,
    /// Matches nothing. Type and features are cleared when set.
    unsatisfiable: bool,
}

impl Media {
    /// An unconstrained query (serializes as `all`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Query on a media type, e.g. `print`.
    pub fn of_type(media_type: MediaType) -> Self {
        Self {
            media_type: Some((media_type, false)),
            ..Self::default()
        }
    }

    /// Query on a media type with the `only` qualifier, e.g. `only screen`.
    pub fn only(media_type: MediaType) -> Self {
        Self {
            media_type: Some((media_type, true)),
            ..Self::default()
        }
    }

    /// A query that matches no device, `not all`.
    pub fn never() -> Self {
        Self {
            unsatisfiable: true,
            ..Self::default()
        }
    }

    /// Query on a single feature expression. Parentheses are added if missing.
    pub fn feature(expression: impl AsRef<str>) -> Self {
        Self::new().and_feature(expression)
    }

    /// Add a feature expression (builder).
    pub fn and_feature(mut self, expression: impl AsRef<str>) -> Self {
        if self.unsatisfiable {
            return self;
        }
        let expression = expression.as_ref().trim();
        let expression = if expression.starts_with('(') && expression.ends_with(')') {
            expression.to_owned()
        } else {
            format!("({expression})")
        };
        self.features.insert(expression);
        self
    }

    /// `(prefers-color-scheme: <scheme>)`.
    pub fn prefers_color_scheme(scheme: ColorScheme) -> Self {
        Self::feature(format!("prefers-color-scheme: {}", scheme.as_str()))
    }

    /// The gate used for dark-mode declarations.
    pub fn dark() -> Self {
        Self::prefers_color_scheme(ColorScheme::Dark)
    }

    pub fn light() -> Self {
        Self::prefers_color_scheme(ColorScheme::Light)
    }

    pub fn print() -> Self {
        Self::of_type(MediaType::Print)
    }

    pub fn min_width_px(self, px: u32) -> Self {
        self.and_feature(format!("min-width: {px}px"))
    }

    pub fn max_width_px(self, px: u32) -> Self {
        self.and_feature(format!("max-width: {px}px"))
    }

    pub fn orientation(orientation: Orientation) -> Self {
        match orientation {
            Orientation::Landscape => Self::feature("orientation: landscape"),
            Orientation::Portrait => Self::feature("orientation: portrait"),
        }
    }

    pub fn desktop() -> Self {
        Self::only(MediaType::Screen).min_width_px(832)
    }

    pub fn mobile() -> Self {
        Self::only(MediaType::Screen).max_width_px(831)
    }

    pub fn tablet() -> Self {
        Self::only(MediaType::Screen).min_width_px(768).max_width_px(1024)
    }

    pub fn small_mobile() -> Self {
        Self::only(MediaType::Screen).max_width_px(320)
    }

    pub fn large_mobile() -> Self {
        Self::only(MediaType::Screen).min_width_px(321).max_width_px(767)
    }

    pub fn large_desktop() -> Self {
        Self::only(MediaType::Screen).min_width_px(1200)
    }

    pub fn landscape() -> Self {
        Self::orientation(Orientation::Landscape)
    }

    pub fn portrait() -> Self {
        Self::orientation(Orientation::Portrait)
    }

    pub fn hover() -> Self {
        Self::feature("hover: hover")
    }

    pub fn reduced_motion() -> Self {
        Self::feature("prefers-reduced-motion: reduce")
    }

    /// Logical AND with an optional second condition.
    ///
    /// Feature sets are unioned. `all` (or no type) yields to the other side's
    /// type; equal types keep `only` if either side has it. Two different
    /// concrete types give [`Media::never`].
    pub fn and(mut self, other: Option<&Media>) -> Media {
        let Some(other) = other else {
            return self;
        };
        if self.unsatisfiable || other.unsatisfiable {
            return Media::never();
        }
        self.media_type = match (self.media_type, other.media_type) {
            (Some((a, a_only)), Some((b, b_only))) if a == b => Some((a, a_only || b_only)),
            (Some((MediaType::All, _)), Some(concrete))
            | (Some(concrete), Some((MediaType::All, _))) => Some(concrete),
            (Some(_), Some(_)) => return Media::never(),
            (a, b) => a.or(b),
        };
        self.features.extend(other.features.iter().cloned());
        self
    }

    /// Whether this query places no constraint at all.
    pub fn is_empty(&self) -> bool {
        !self.unsatisfiable && self.media_type.is_none() && self.features.is_empty()
    }

    /// Whether this query can never match.
    pub fn is_unsatisfiable(&self) -> bool {
        self.unsatisfiable
    }

    /// Whether this query contains `(prefers-color-scheme: dark)`.
    pub fn is_dark_gated(&self) -> bool {
        self.features.contains("(prefers-color-scheme: dark)")
    }
}

impl BitAnd for Media {
    type Output = Media;

    fn bitand(self, rhs: Media) -> Media {
        self.and(Some(&rhs))
    }
}

impl fmt::Display for Media {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unsatisfiable {
            return f.write_str("not all");
        }
        let mut parts: Vec<String> = Vec::with_capacity(self.features.len() + 1);
        match self.media_type {
            Some((media_type, true)) => parts.push(format!("only {}", media_type.as_str())),
            Some((media_type, false)) => parts.push(media_type.as_str().to_owned()),
            None => {}
        }
        parts.extend(self.features.iter().cloned());

        if parts.is_empty() {
            f.write_str("all")
        } else {
            f.write_str(&parts.join(" and "))
        }
    }
}
