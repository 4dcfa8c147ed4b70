//! The `Css` accessor and the per-property color wrappers.
//!
//! ```
//! use chroma_html::color::{palette, DarkModeColor};
//! use chroma_html::dom::elements::p;
//!
//! let element = p()
//!     .css()
//!     .color(DarkModeColor::auto(palette::red()))
//!     .background_color(palette::white())
//!     .into_element();
//! assert_eq!(element.styles().len(), 3);
//! ```

use crate::color::{ColorInput, ColorValue, MaybeColorInput};
use crate::css::emit;
use crate::css::model::Scope;
use crate::css::property::*;
use crate::dom::{Element, Node};

/// Styling view of an element. Every method consumes the accessor and
/// returns one owning the extended element.
#[derive(Debug, Clone, PartialEq)]
pub struct Css {
    element: Element,
}

impl Element {
    /// Start a chain of style calls on this element.
    pub fn css(self) -> Css {
        Css { element: self }
    }
}

impl From<Css> for Element {
    fn from(css: Css) -> Self {
        css.element
    }
}

impl From<Css> for Node {
    fn from(css: Css) -> Self {
        Node::Element(css.element)
    }
}

impl Css {
    pub fn element(&self) -> &Element {
        &self.element
    }

    pub fn into_element(self) -> Element {
        self.element
    }

    fn map(self, f: impl FnOnce(Element) -> Element) -> Self {
        Css {
            element: f(self.element),
        }
    }

    /// Append an arbitrary declaration. `None` is a no-op.
    pub fn inline_style(
        self,
        property: impl Into<String>,
        value: Option<impl Into<String>>,
        scope: &Scope,
    ) -> Self {
        self.map(|element| element.inline_style(property, value, scope))
    }

    /// Emit any color input for a descriptor, including ones defined outside
    /// this crate.
    pub fn apply_color_property<P: CssColorProperty>(
        self,
        input: impl MaybeColorInput,
        scope: &Scope,
    ) -> Self {
        let input = input.into_maybe_color_input();
        self.map(|element| emit::apply_color_property::<P>(element, input, scope))
    }

    /// Like [`Css::apply_color_property`] with the property given by name.
    pub fn apply_color_property_named(
        self,
        property: &str,
        input: impl MaybeColorInput,
        scope: &Scope,
    ) -> Self {
        let input = input.into_maybe_color_input();
        self.map(|element| emit::apply_color_property_named(element, property, input, scope))
    }

    /// See [`emit::light_and_dark_mode`].
    pub fn light_and_dark_mode(
        self,
        property: &str,
        light: &ColorValue,
        dark: Option<&ColorValue>,
        scope: &Scope,
    ) -> Self {
        self.map(|element| emit::light_and_dark_mode(element, property, light, dark, scope))
    }
}

macro_rules! color_wrappers {
    ($($marker:ident => $stem:ident, $scoped:ident, $light_dark:ident;)*) => {
        impl Css {
            $(
                #[doc = concat!("Set `", stringify!($stem), "` from any color input; `None` is a no-op.")]
                pub fn $stem(self, input: impl MaybeColorInput) -> Self {
                    self.apply_color_property::<$marker>(input, &Scope::default())
                }

                #[doc = concat!("[`Css::", stringify!($stem), "`] under a media condition, selector, or pseudo.")]
                pub fn $scoped(self, input: impl MaybeColorInput, scope: &Scope) -> Self {
                    self.apply_color_property::<$marker>(input, scope)
                }

                #[doc = concat!("[`Css::", stringify!($stem), "`] from a light color and an optional dark one, darkening `light` when `dark` is `None`.")]
                pub fn $light_dark(
                    self,
                    light: ColorValue,
                    dark: Option<ColorValue>,
                    scope: &Scope,
                ) -> Self {
                    self.apply_color_property::<$marker>(ColorInput::with_dark_mode(light, dark), scope)
                }
            )*
        }
    };
}

color_wrappers! {
    Color => color, color_scoped, color_light_dark;
    BackgroundColor => background_color, background_color_scoped, background_color_light_dark;
    BorderColor => border_color, border_color_scoped, border_color_light_dark;
    BorderTopColor => border_top_color, border_top_color_scoped, border_top_color_light_dark;
    BorderRightColor => border_right_color, border_right_color_scoped, border_right_color_light_dark;
    BorderBottomColor => border_bottom_color, border_bottom_color_scoped, border_bottom_color_light_dark;
    BorderLeftColor => border_left_color, border_left_color_scoped, border_left_color_light_dark;
    BorderBlockColor => border_block_color, border_block_color_scoped, border_block_color_light_dark;
    BorderBlockStartColor => border_block_start_color, border_block_start_color_scoped, border_block_start_color_light_dark;
    BorderBlockEndColor => border_block_end_color, border_block_end_color_scoped, border_block_end_color_light_dark;
    BorderInlineColor => border_inline_color, border_inline_color_scoped, border_inline_color_light_dark;
    BorderInlineStartColor => border_inline_start_color, border_inline_start_color_scoped, border_inline_start_color_light_dark;
    BorderInlineEndColor => border_inline_end_color, border_inline_end_color_scoped, border_inline_end_color_light_dark;
    AccentColor => accent_color, accent_color_scoped, accent_color_light_dark;
    CaretColor => caret_color, caret_color_scoped, caret_color_light_dark;
    ColumnRuleColor => column_rule_color, column_rule_color_scoped, column_rule_color_light_dark;
    Fill => fill, fill_scoped, fill_light_dark;
    Stroke => stroke, stroke_scoped, stroke_light_dark;
    OutlineColor => outline_color, outline_color_scoped, outline_color_light_dark;
    FloodColor => flood_color, flood_color_scoped, flood_color_light_dark;
    LightingColor => lighting_color, lighting_color_scoped, lighting_color_light_dark;
    StopColor => stop_color, stop_color_scoped, stop_color_light_dark;
    TextDecorationColor => text_decoration_color, text_decoration_color_scoped, text_decoration_color_light_dark;
    TextEmphasisColor => text_emphasis_color, text_emphasis_color_scoped, text_emphasis_color_light_dark;
}
