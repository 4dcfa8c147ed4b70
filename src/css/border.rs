//! Border shorthand with per-side and light/dark emission.
//!
//! A [`Border`] renders as `<width> <style> <color>` (absent parts dropped).
//! When it covers every side it is written through the `border` shorthand;
//! otherwise each requested side gets its own `border-<side>` declaration in
//! top, right, bottom, left order. Either way, a color whose dark variant
//! differs from its light one adds a second, dark-gated declaration.

use std::collections::BTreeSet;
use std::fmt;

use crate::color::DarkModeColor;
use crate::css::accessor::Css;
use crate::css::emit::emit_value_pair;
use crate::css::model::Scope;

/// One edge of a box. Ordered the way CSS lists edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BorderSide {
    Top,
    Right,
    Bottom,
    Left,
}

impl BorderSide {
    pub const ALL: [BorderSide; 4] = [
        BorderSide::Top,
        BorderSide::Right,
        BorderSide::Bottom,
        BorderSide::Left,
    ];

    /// The side-specific shorthand, e.g. `border-top`.
    pub fn property(self) -> &'static str {
        match self {
            BorderSide::Top => "border-top",
            BorderSide::Right => "border-right",
            BorderSide::Bottom => "border-bottom",
            BorderSide::Left => "border-left",
        }
    }
}

/// `<line-style>` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BorderStyle {
    None,
    Hidden,
    Dotted,
    Dashed,
    #[default]
    Solid,
    Double,
    Groove,
    Ridge,
    Inset,
    Outset,
}

impl BorderStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            BorderStyle::None => "none",
            BorderStyle::Hidden => "hidden",
            BorderStyle::Dotted => "dotted",
            BorderStyle::Dashed => "dashed",
            BorderStyle::Solid => "solid",
            BorderStyle::Double => "double",
            BorderStyle::Groove => "groove",
            BorderStyle::Ridge => "ridge",
            BorderStyle::Inset => "inset",
            BorderStyle::Outset => "outset",
        }
    }
}

impl fmt::Display for BorderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A border on some or all sides of an element.
#[derive(Debug, Clone, PartialEq)]
pub struct Border {
    /// `None` means all four sides.
    pub sides: Option<BTreeSet<BorderSide>>,
    /// Width text, e.g. `1px` or `thin`.
    pub width: Option<String>,
    pub style: Option<BorderStyle>,
    pub color: Option<DarkModeColor>,
}

impl Default for Border {
    fn default() -> Self {
        Self {
            sides: None,
            width: None,
            style: Some(BorderStyle::Solid),
            color: None,
        }
    }
}

impl Border {
    /// A solid border on every side with no width or color.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sides(mut self, sides: impl IntoIterator<Item = BorderSide>) -> Self {
        self.sides = Some(sides.into_iter().collect());
        self
    }

    pub fn with_width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    pub fn with_style(mut self, style: Option<BorderStyle>) -> Self {
        self.style = style;
        self
    }

    pub fn with_color(mut self, color: impl Into<DarkModeColor>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Whether the border is written through the `border` shorthand.
    pub fn covers_all_sides(&self) -> bool {
        self.sides
            .as_ref()
            .is_none_or(|sides| sides.len() == BorderSide::ALL.len())
    }

    /// The sides that get a declaration, in CSS order.
    pub fn resolved_sides(&self) -> Vec<BorderSide> {
        match &self.sides {
            None => BorderSide::ALL.to_vec(),
            Some(sides) => sides.iter().copied().collect(),
        }
    }

    /// Declaration values for the light and dark schemes.
    pub fn values(&self) -> (String, String) {
        let width = self.width.as_deref().unwrap_or_default();
        let style = self.style.map(BorderStyle::as_str).unwrap_or_default();
        let (light, dark) = match &self.color {
            Some(color) => (color.light.to_string(), color.dark.to_string()),
            None => (String::new(), String::new()),
        };
        (
            join_parts([width, style, light.as_str()]),
            join_parts([width, style, dark.as_str()]),
        )
    }
}

fn join_parts<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts
        .into_iter()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

impl Css {
    /// Emit a border. `None` is a no-op, as is a border whose value would
    /// be empty.
    pub fn border(self, border: Option<Border>, scope: &Scope) -> Self {
        let Some(border) = border else {
            return self;
        };
        let (light, dark) = border.values();
        if light.is_empty() {
            return self;
        }

        let properties: Vec<&'static str> = if border.covers_all_sides() {
            vec!["border"]
        } else {
            border
                .resolved_sides()
                .into_iter()
                .map(BorderSide::property)
                .collect()
        };

        let element = properties.into_iter().fold(self.into_element(), |element, property| {
            emit_value_pair(element, property, light.clone(), Some(dark.clone()), scope)
        });
        element.css()
    }

    /// Border on the given sides.
    pub fn border_sides(
        self,
        sides: impl IntoIterator<Item = BorderSide>,
        width: Option<&str>,
        style: Option<BorderStyle>,
        color: Option<DarkModeColor>,
        scope: &Scope,
    ) -> Self {
        let border = Border {
            sides: Some(sides.into_iter().collect()),
            width: width.map(str::to_owned),
            style,
            color,
        };
        self.border(Some(border), scope)
    }

    pub fn border_top(
        self,
        width: Option<&str>,
        style: Option<BorderStyle>,
        color: Option<DarkModeColor>,
        scope: &Scope,
    ) -> Self {
        self.border_sides([BorderSide::Top], width, style, color, scope)
    }

    pub fn border_right(
        self,
        width: Option<&str>,
        style: Option<BorderStyle>,
        color: Option<DarkModeColor>,
        scope: &Scope,
    ) -> Self {
        self.border_sides([BorderSide::Right], width, style, color, scope)
    }

    pub fn border_bottom(
        self,
        width: Option<&str>,
        style: Option<BorderStyle>,
        color: Option<DarkModeColor>,
        scope: &Scope,
    ) -> Self {
        self.border_sides([BorderSide::Bottom], width, style, color, scope)
    }

    pub fn border_left(
        self,
        width: Option<&str>,
        style: Option<BorderStyle>,
        color: Option<DarkModeColor>,
        scope: &Scope,
    ) -> Self {
        self.border_sides([BorderSide::Left], width, style, color, scope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{ColorValue, NamedColor};
    use crate::css::media::Media;
    use crate::dom::elements::div;
    use pretty_assertions::assert_eq;

    fn declarations(css: &Css) -> Vec<String> {
        css.element()
            .styles()
            .iter()
            .map(|s| match &s.media {
                Some(media) => format!("{} @ {media}", s.declaration()),
                None => s.declaration(),
            })
            .collect()
    }

    fn black_white() -> DarkModeColor {
        DarkModeColor::pair(
            ColorValue::named(NamedColor::Black),
            ColorValue::named(NamedColor::White),
        )
    }

    #[test]
    fn none_is_noop() {
        let css = div().css().border(None, &Scope::new());
        assert!(css.element().styles().is_empty());
    }

    #[test]
    fn all_sides_use_shorthand() {
        let border = Border::new().with_width("1px").with_color(black_white());
        let css = div().css().border(Some(border), &Scope::new());
        assert_eq!(
            declarations(&css),
            [
                "border:1px solid black",
                "border:1px solid white @ (prefers-color-scheme: dark)"
            ]
        );
    }

    #[test]
    fn explicit_four_sides_equal_shorthand() {
        let all = Border::new().with_width("2px").with_sides(BorderSide::ALL);
        let implicit = Border::new().with_width("2px");
        assert_eq!(
            div().css().border(Some(all), &Scope::new()),
            div().css().border(Some(implicit), &Scope::new())
        );
    }

    #[test]
    fn single_color_emits_once() {
        let border = Border::new()
            .with_width("1px")
            .with_color(ColorValue::named(NamedColor::Gray));
        let css = div().css().border(Some(border), &Scope::new());
        assert_eq!(declarations(&css), ["border:1px solid gray"]);
    }

    #[test]
    fn per_side_in_css_order() {
        let css = div().css().border_sides(
            [BorderSide::Left, BorderSide::Top],
            Some("1px"),
            Some(BorderStyle::Dashed),
            Some(black_white()),
            &Scope::new(),
        );
        assert_eq!(
            declarations(&css),
            [
                "border-top:1px dashed black",
                "border-top:1px dashed white @ (prefers-color-scheme: dark)",
                "border-left:1px dashed black",
                "border-left:1px dashed white @ (prefers-color-scheme: dark)",
            ]
        );
    }

    #[test]
    fn side_order_is_irrelevant() {
        let a = div().css().border_sides(
            [BorderSide::Top, BorderSide::Left],
            Some("1px"),
            None,
            None,
            &Scope::new(),
        );
        let b = div().css().border_sides(
            [BorderSide::Left, BorderSide::Top],
            Some("1px"),
            None,
            None,
            &Scope::new(),
        );
        assert_eq!(a, b);
    }

    #[test]
    fn side_shortcut_with_scope() {
        let scope = Scope::new().with_media(Media::mobile());
        let css = div()
            .css()
            .border_bottom(Some("3px"), Some(BorderStyle::Double), Some(black_white()), &scope);
        assert_eq!(
            declarations(&css),
            [
                "border-bottom:3px double black @ only screen and (max-width: 831px)",
                "border-bottom:3px double white @ only screen and (max-width: 831px) and (prefers-color-scheme: dark)",
            ]
        );
    }

    #[test]
    fn values_drop_missing_parts() {
        let border = Border::new().with_style(None).with_width("thin");
        assert_eq!(border.values(), ("thin".to_owned(), "thin".to_owned()));
        let empty = Border::new().with_style(None);
        let css = div().css().border(Some(empty), &Scope::new());
        assert!(css.element().styles().is_empty());
    }

    #[test]
    fn empty_side_set_emits_nothing() {
        let css = div().css().border(
            Some(Border::new().with_width("1px").with_sides(Vec::<BorderSide>::new())),
            &Scope::new(),
        );
        assert!(css.element().styles().is_empty());
    }
}
