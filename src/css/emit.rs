//! Generic color emission.
//!
//! One routine turns a [`ColorInput`] into declarations on an element:
//!
//! | input | declarations |
//! |---|---|
//! | `None` | none |
//! | `Single(v)` | `prop: v` under the caller's scope |
//! | `Global(k)` | `prop: k` under the caller's scope |
//! | `WithDarkMode { light, dark }` | `prop: light`, then `prop: dark` gated by `prefers-color-scheme: dark` unless `light == dark` |
//!
//! The dark declaration keeps the caller's selector and pseudo, and its media
//! condition is the caller's media ANDed with the dark-scheme feature.

use tracing::trace;

use crate::color::{ColorInput, ColorValue};
use crate::css::model::Scope;
use crate::css::property::CssColorProperty;
use crate::dom::Element;

/// Emit `input` for the property described by `P`.
pub fn apply_color_property<P: CssColorProperty>(
    element: Element,
    input: Option<ColorInput>,
    scope: &Scope,
) -> Element {
    apply_color_property_named(element, P::NAME, input, scope)
}

/// Emit `input` for a property given by wire name.
pub fn apply_color_property_named(
    element: Element,
    property: &str,
    input: Option<ColorInput>,
    scope: &Scope,
) -> Element {
    let Some(input) = input else {
        return element;
    };

    match input {
        ColorInput::Single(value) => emit_single(element, property, value.to_string(), scope),
        ColorInput::Global(keyword) => emit_single(element, property, keyword.to_string(), scope),
        ColorInput::WithDarkMode { light, dark } => {
            emit_light_dark(element, property, &light, Some(&dark), scope)
        }
    }
}

/// Emit a light declaration and, when `dark` differs from `light`, a
/// dark-gated one.
///
/// A missing `dark` means "no dark variant"; nothing is synthesized here.
/// Callers wanting a derived dark color go through
/// [`ColorInput::with_dark_mode`] instead.
pub fn light_and_dark_mode(
    element: Element,
    property: &str,
    light: &ColorValue,
    dark: Option<&ColorValue>,
    scope: &Scope,
) -> Element {
    emit_light_dark(element, property, light, dark, scope)
}

fn emit_single(element: Element, property: &str, value: String, scope: &Scope) -> Element {
    trace!(property, %value, "emit color declaration");
    element.inline_style(property, Some(value), scope)
}

/// Shared by every light/dark color path. Redundancy is structural, so two
/// values that differ only below print precision both get written.
pub(crate) fn emit_light_dark(
    element: Element,
    property: &str,
    light: &ColorValue,
    dark: Option<&ColorValue>,
    scope: &Scope,
) -> Element {
    let dark = dark.filter(|dark| *dark != light);
    emit_pair(
        element,
        property,
        light.to_string(),
        dark.map(ToString::to_string),
        scope,
    )
}

/// Light/dark emission over already-rendered value text, for composite
/// properties such as `border`. Equal text means no dark declaration.
pub(crate) fn emit_value_pair(
    element: Element,
    property: &str,
    light: String,
    dark: Option<String>,
    scope: &Scope,
) -> Element {
    let dark = dark.filter(|dark| *dark != light);
    emit_pair(element, property, light, dark, scope)
}

fn emit_pair(
    element: Element,
    property: &str,
    light: String,
    dark: Option<String>,
    scope: &Scope,
) -> Element {
    trace!(property, %light, dark = ?dark, "emit light/dark declarations");

    let element = element.inline_style(property, Some(light), scope);
    match dark {
        Some(dark) => element.inline_style(property, Some(dark), &scope.dark_gated()),
        None => element,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{DarkModeColor, Global, NamedColor};
    use crate::css::media::Media;
    use crate::css::model::{InlineStyle, Pseudo};
    use crate::css::property::{BorderLeftColor, Color, Fill};
    use crate::dom::elements::div;
    use pretty_assertions::assert_eq;
    use tracing_test::traced_test;

    fn red() -> ColorValue {
        ColorValue::named(NamedColor::Red)
    }

    fn blue() -> ColorValue {
        ColorValue::named(NamedColor::Blue)
    }

    fn summary(element: &Element) -> Vec<(&str, &str, Option<String>)> {
        element
            .styles()
            .iter()
            .map(|s| {
                (
                    s.property.as_str(),
                    s.value.as_str(),
                    s.media.as_ref().map(ToString::to_string),
                )
            })
            .collect()
    }

    // ── No-op ──────────────────────────────────────────────────────

    #[test]
    fn none_leaves_element_unchanged() {
        let element = div().with_id("x").text("hi");
        let out = apply_color_property::<Color>(element.clone(), None, &Scope::new());
        assert_eq!(out, element);
    }

    // ── Variant counts ─────────────────────────────────────────────

    #[test]
    fn single_emits_one_declaration() {
        let out = apply_color_property::<Color>(div(), Some(red().into()), &Scope::new());
        assert_eq!(summary(&out), [("color", "red", None)]);
    }

    #[test]
    fn global_emits_keyword() {
        let scope = Scope::new().with_media(Media::print());
        let out = apply_color_property::<Fill>(div(), Some(Global::Inherit.into()), &scope);
        assert_eq!(
            summary(&out),
            [("fill", "inherit", Some("print".to_owned()))]
        );
    }

    #[test]
    fn pair_emits_light_then_gated_dark() {
        let input = DarkModeColor::pair(blue(), red()).into();
        let out = apply_color_property::<Color>(div(), Some(input), &Scope::new());
        assert_eq!(
            summary(&out),
            [
                ("color", "blue", None),
                (
                    "color",
                    "red",
                    Some("(prefers-color-scheme: dark)".to_owned())
                ),
            ]
        );
    }

    #[test]
    fn equal_pair_is_deduplicated() {
        let input = DarkModeColor::single(red()).into();
        let out = apply_color_property::<Color>(div(), Some(input), &Scope::new());
        assert_eq!(out.styles().len(), 1);
        assert!(!out.styles()[0].is_dark_gated());
    }

    // ── Scope handling ─────────────────────────────────────────────

    #[test]
    fn dark_declaration_ands_caller_media() {
        let scope = Scope::new()
            .with_media(Media::desktop())
            .with_selector(".card")
            .with_pseudo(Pseudo::Hover);
        let input = DarkModeColor::pair(blue(), red()).into();
        let out = apply_color_property::<BorderLeftColor>(div(), Some(input), &scope);

        let styles = out.styles();
        assert_eq!(styles.len(), 2);
        assert_eq!(styles[0].media, Some(Media::desktop()));
        assert_eq!(
            styles[1].media.as_ref().map(ToString::to_string).as_deref(),
            Some("only screen and (min-width: 832px) and (prefers-color-scheme: dark)")
        );
        assert_eq!(styles[1].selector, scope.selector);
        assert_eq!(styles[1].pseudo, Some(Pseudo::Hover));
    }

    #[test]
    fn declarations_append_after_existing() {
        let element = div().inline_style("margin", Some("0"), &Scope::new());
        let out = apply_color_property::<Color>(element, Some(red().into()), &Scope::new());
        let properties: Vec<&str> = out.styles().iter().map(|s| s.property.as_str()).collect();
        assert_eq!(properties, ["margin", "color"]);
    }

    // ── light_and_dark_mode ────────────────────────────────────────

    #[test]
    fn light_and_dark_mode_matches_generic_path() {
        let scope = Scope::new().with_media(Media::mobile());
        let via_helper = light_and_dark_mode(div(), "color", &blue(), Some(&red()), &scope);
        let via_generic = apply_color_property::<Color>(
            div(),
            Some(ColorInput::WithDarkMode {
                light: blue(),
                dark: red(),
            }),
            &scope,
        );
        assert_eq!(via_helper, via_generic);
    }

    #[test]
    fn light_and_dark_mode_equal_values() {
        let out = light_and_dark_mode(div(), "color", &red(), Some(&red()), &Scope::new());
        assert_eq!(out.styles().len(), 1);
    }

    /// The helper treats a missing dark value as "no variant", while the
    /// `ColorInput` path derives one. Both behaviors are relied upon.
    #[test]
    fn missing_dark_differs_between_helper_and_input_path() {
        let light = ColorValue::hex("cc3333").unwrap();

        let via_helper = light_and_dark_mode(div(), "color", &light, None, &Scope::new());
        assert_eq!(summary(&via_helper), [("color", "#cc3333", None)]);

        let via_input = apply_color_property::<Color>(
            div(),
            Some(ColorInput::with_dark_mode(light, None)),
            &Scope::new(),
        );
        assert_eq!(
            summary(&via_input),
            [
                ("color", "#cc3333", None),
                (
                    "color",
                    "rgb(163, 40, 40)",
                    Some("(prefers-color-scheme: dark)".to_owned())
                ),
            ]
        );
    }

    #[test]
    fn value_pair_suppresses_equal_text() {
        let out = emit_value_pair(
            div(),
            "border",
            "1px solid red".into(),
            Some("1px solid red".to_owned()),
            &Scope::new(),
        );
        assert_eq!(
            out.styles(),
            [InlineStyle::new("border", "1px solid red", &Scope::new())]
        );
    }

    #[test]
    fn color_pair_compares_values_not_text() {
        let light = ColorValue::hsl(10.0001, 50.0, 50.0);
        let dark = ColorValue::hsl(10.0002, 50.0, 50.0);
        assert_eq!(light.to_string(), dark.to_string());

        let out = light_and_dark_mode(div(), "color", &light, Some(&dark), &Scope::new());
        assert_eq!(
            summary(&out),
            [
                ("color", "hsl(10, 50%, 50%)", None),
                (
                    "color",
                    "hsl(10, 50%, 50%)",
                    Some("(prefers-color-scheme: dark)".to_owned())
                ),
            ]
        );
    }

    #[test]
    fn named_and_generic_agree() {
        let a = apply_color_property::<Color>(div(), Some(red().into()), &Scope::new());
        let b = apply_color_property_named(div(), "color", Some(red().into()), &Scope::new());
        assert_eq!(a, b);
    }

    #[traced_test]
    #[test]
    fn emission_is_traced() {
        let _ = apply_color_property::<Color>(div(), Some(red().into()), &Scope::new());
        assert!(logs_contain("emit color declaration"));
    }
}
