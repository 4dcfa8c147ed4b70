//! Light/dark color pairs.

use std::fmt;

use crate::color::value::ColorValue;

/// A color with a value for each color scheme.
///
/// Both fields are always present. Callers that do not supply a dark value
/// get one synthesized from the light value via [`ColorValue::darkened`], so a
/// pair never carries an "absent" dark variant.
#[derive(Debug, Clone, PartialEq)]
pub struct DarkModeColor {
    pub light: ColorValue,
    pub dark: ColorValue,
}

impl DarkModeColor {
    /// Create a pair. A missing `dark` is derived as `light.darkened()`.
    pub fn new(light: ColorValue, dark: Option<ColorValue>) -> Self {
        let dark = dark.unwrap_or_else(|| light.darkened());
        Self { light, dark }
    }

    /// Explicit pair.
    pub fn pair(light: ColorValue, dark: ColorValue) -> Self {
        Self { light, dark }
    }

    /// Pair with a dark variant derived from `light`.
    pub fn auto(light: ColorValue) -> Self {
        Self::new(light, None)
    }

    /// The same color in both schemes.
    pub fn single(color: ColorValue) -> Self {
        Self {
            dark: color.clone(),
            light: color,
        }
    }

    /// Whether light and dark are the same value, i.e. no dark-mode rule is needed.
    pub fn is_single_color(&self) -> bool {
        self.light == self.dark
    }

    /// Keep the light value, replace the dark one.
    pub fn with_dark_color(self, dark: ColorValue) -> Self {
        Self {
            light: self.light,
            dark,
        }
    }

    /// Swap the light and dark values.
    pub fn reverse(self) -> Self {
        Self {
            light: self.dark,
            dark: self.light,
        }
    }

    /// Apply `transform` to both values.
    pub fn map(&self, transform: impl Fn(&ColorValue) -> ColorValue) -> Self {
        Self {
            light: transform(&self.light),
            dark: transform(&self.dark),
        }
    }

    /// Transform each value into a pair, keeping the light half of the light
    /// result and the dark half of the dark result.
    pub fn flat_map(&self, transform: impl Fn(&ColorValue) -> DarkModeColor) -> Self {
        Self {
            light: transform(&self.light).light,
            dark: transform(&self.dark).dark,
        }
    }

    pub fn adjust_brightness(&self, percent: f64) -> Self {
        self.map(|c| c.adjust_brightness(percent))
    }

    pub fn darker(&self, percent: f64) -> Self {
        self.map(|c| c.darker(percent))
    }

    pub fn lighter(&self, percent: f64) -> Self {
        self.map(|c| c.lighter(percent))
    }

    pub fn opacity(&self, alpha: f64) -> Self {
        self.map(|c| c.opacity(alpha))
    }
}

impl ColorValue {
    /// Pair this value (as the light color) with an explicit dark color.
    pub fn with_dark_color(self, dark: ColorValue) -> DarkModeColor {
        DarkModeColor::pair(self, dark)
    }
}

impl From<ColorValue> for DarkModeColor {
    fn from(color: ColorValue) -> Self {
        DarkModeColor::single(color)
    }
}

/// Standalone rendering as a `color` declaration; the emitter does not use this.
impl fmt::Display for DarkModeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single_color() {
            write!(f, "{}", self.light)
        } else {
            write!(
                f,
                "@media (prefers-color-scheme: light) {{ color:{} }} \
                 @media (prefers-color-scheme: dark) {{ color:{} }}",
                self.light, self.dark
            )
        }
    }
}
