//! Color values, light/dark pairs, and the canonical color input.

pub mod tokenizer;
pub mod value;
pub mod palette;
pub mod global;
pub mod dark_mode;
pub mod input;

pub use dark_mode::DarkModeColor;
pub use global::Global;
pub use input::{
    ColorInput, ColorInputConvertible, ColorWithDarkModeAndGlobal, ColorWithGlobal,
    MaybeColorInput,
};
pub use value::{ColorParseError, ColorValue, HexDigits, NamedColor, DEFAULT_BRIGHTNESS_STEP};
