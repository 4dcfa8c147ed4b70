//! The canonical color input and the conversions into it.
//!
//! Every color-bearing property accepts several input shapes: a raw
//! [`ColorValue`], a [`DarkModeColor`] pair, a [`Global`] keyword, or one of the
//! unions below. Instead of one emission routine per (shape, property)
//! combination, every shape converts into [`ColorInput`] and the emitter in
//! [`crate::css::emit`] only ever matches on that.

use crate::color::dark_mode::DarkModeColor;
use crate::color::global::Global;
use crate::color::value::ColorValue;

/// The single representation the emitter consumes.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorInput {
    /// Light declaration unconditionally, dark declaration gated by
    /// `prefers-color-scheme: dark` (suppressed when both are equal).
    WithDarkMode { light: ColorValue, dark: ColorValue },
    /// One unconditional declaration.
    Single(ColorValue),
    /// A CSS-wide keyword, unconditionally.
    Global(Global),
}

impl ColorInput {
    /// Light/dark pair, deriving `dark` from `light` when it is `None`.
    ///
    /// The derivation happens here, before the variant is built, so the
    /// canonical form never holds an optional dark value.
    pub fn with_dark_mode(light: ColorValue, dark: Option<ColorValue>) -> Self {
        let DarkModeColor { light, dark } = DarkModeColor::new(light, dark);
        ColorInput::WithDarkMode { light, dark }
    }
}

/// Total conversion into [`ColorInput`].
pub trait ColorInputConvertible {
    fn into_color_input(self) -> ColorInput;
}

impl ColorInputConvertible for ColorInput {
    fn into_color_input(self) -> ColorInput {
        self
    }
}

impl ColorInputConvertible for ColorValue {
    fn into_color_input(self) -> ColorInput {
        ColorInput::Single(self)
    }
}

impl ColorInputConvertible for Global {
    fn into_color_input(self) -> ColorInput {
        ColorInput::Global(self)
    }
}

impl ColorInputConvertible for DarkModeColor {
    fn into_color_input(self) -> ColorInput {
        ColorInput::WithDarkMode {
            light: self.light,
            dark: self.dark,
        }
    }
}

/// A color or a CSS-wide keyword.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorWithGlobal {
    Color(ColorValue),
    Global(Global),
}

impl ColorInputConvertible for ColorWithGlobal {
    fn into_color_input(self) -> ColorInput {
        match self {
            ColorWithGlobal::Color(color) => color.into_color_input(),
            ColorWithGlobal::Global(global) => global.into_color_input(),
        }
    }
}

/// A light/dark pair or a CSS-wide keyword.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorWithDarkModeAndGlobal {
    DarkMode(DarkModeColor),
    Global(Global),
}

impl ColorInputConvertible for ColorWithDarkModeAndGlobal {
    fn into_color_input(self) -> ColorInput {
        match self {
            ColorWithDarkModeAndGlobal::DarkMode(pair) => pair.into_color_input(),
            ColorWithDarkModeAndGlobal::Global(global) => global.into_color_input(),
        }
    }
}

/// Widening a plain color into the dark-mode union derives its dark variant.
impl From<ColorWithGlobal> for ColorWithDarkModeAndGlobal {
    fn from(value: ColorWithGlobal) -> Self {
        match value {
            ColorWithGlobal::Color(color) => {
                ColorWithDarkModeAndGlobal::DarkMode(DarkModeColor::auto(color))
            }
            ColorWithGlobal::Global(global) => ColorWithDarkModeAndGlobal::Global(global),
        }
    }
}

/// A color input that may be absent. `None` means "emit nothing".
///
/// Implemented for every [`ColorInputConvertible`] type and for `Option` of
/// each, so property wrappers take either without a separate overload.
pub trait MaybeColorInput {
    fn into_maybe_color_input(self) -> Option<ColorInput>;
}

macro_rules! convertible_inputs {
    ($($ty:ty),* $(,)?) => {
        $(
            impl MaybeColorInput for $ty {
                fn into_maybe_color_input(self) -> Option<ColorInput> {
                    Some(self.into_color_input())
                }
            }

            impl MaybeColorInput for Option<$ty> {
                fn into_maybe_color_input(self) -> Option<ColorInput> {
                    self.map(ColorInputConvertible::into_color_input)
                }
            }

            impl From<$ty> for ColorInput {
                fn from(value: $ty) -> Self {
                    value.into_color_input()
                }
            }
        )*
    };
}

convertible_inputs!(
    ColorValue,
    Global,
    DarkModeColor,
    ColorWithGlobal,
    ColorWithDarkModeAndGlobal,
);

impl MaybeColorInput for ColorInput {
    fn into_maybe_color_input(self) -> Option<ColorInput> {
        Some(self)
    }
}

impl MaybeColorInput for Option<ColorInput> {
    fn into_maybe_color_input(self) -> Option<ColorInput> {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::value::NamedColor;

    fn red() -> ColorValue {
        ColorValue::named(NamedColor::Red)
    }

    #[test]
    fn raw_value_is_single() {
        assert_eq!(red().into_color_input(), ColorInput::Single(red()));
    }

    #[test]
    fn global_is_global() {
        assert_eq!(
            Global::Inherit.into_color_input(),
            ColorInput::Global(Global::Inherit)
        );
    }

    #[test]
    fn pair_passes_through() {
        let pair = DarkModeColor::pair(red(), ColorValue::hex("000").unwrap());
        assert_eq!(
            pair.into_color_input(),
            ColorInput::WithDarkMode {
                light: red(),
                dark: ColorValue::hex("000").unwrap()
            }
        );
    }

    #[test]
    fn color_with_global_branches() {
        assert_eq!(
            ColorWithGlobal::Color(red()).into_color_input(),
            ColorInput::Single(red())
        );
        assert_eq!(
            ColorWithGlobal::Global(Global::Unset).into_color_input(),
            ColorInput::Global(Global::Unset)
        );
    }

    #[test]
    fn color_with_dark_mode_and_global_branches() {
        let pair = DarkModeColor::pair(red(), ColorValue::hex("111").unwrap());
        assert_eq!(
            ColorWithDarkModeAndGlobal::DarkMode(pair.clone()).into_color_input(),
            pair.into_color_input()
        );
        assert_eq!(
            ColorWithDarkModeAndGlobal::Global(Global::Revert).into_color_input(),
            ColorInput::Global(Global::Revert)
        );
    }

    #[test]
    fn widening_derives_dark_variant() {
        let widened: ColorWithDarkModeAndGlobal = ColorWithGlobal::Color(ColorValue::hex("cc3333").unwrap()).into();
        assert_eq!(
            widened.into_color_input(),
            ColorInput::WithDarkMode {
                light: ColorValue::hex("cc3333").unwrap(),
                dark: ColorValue::rgb(163, 40, 40)
            }
        );
    }

    #[test]
    fn with_dark_mode_synthesizes_before_construction() {
        assert_eq!(
            ColorInput::with_dark_mode(ColorValue::hex("000000").unwrap(), None),
            ColorInput::WithDarkMode {
                light: ColorValue::hex("000000").unwrap(),
                dark: ColorValue::rgb(0, 0, 0)
            }
        );
    }

    #[test]
    fn none_is_absent() {
        assert_eq!(None::<ColorValue>.into_maybe_color_input(), None);
        assert_eq!(None::<Global>.into_maybe_color_input(), None);
        assert_eq!(
            Some(Global::Initial).into_maybe_color_input(),
            Some(ColorInput::Global(Global::Initial))
        );
    }

    #[test]
    fn every_shape_lands_in_exactly_one_variant() {
        let inputs: Vec<ColorInput> = vec![
            red().into(),
            Global::Inherit.into(),
            DarkModeColor::auto(red()).into(),
            ColorWithGlobal::Color(red()).into(),
            ColorWithDarkModeAndGlobal::Global(Global::Unset).into(),
        ];
        let variants: Vec<&str> = inputs
            .iter()
            .map(|input| match input {
                ColorInput::WithDarkMode { .. } => "pair",
                ColorInput::Single(_) => "single",
                ColorInput::Global(_) => "global",
            })
            .collect();
        assert_eq!(variants, ["single", "global", "pair", "single", "global"]);
    }
}
