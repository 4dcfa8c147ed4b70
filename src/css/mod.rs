//! CSS declarations: media conditions, scoping, color property descriptors,
//! the generic emitter, and the `Css` accessor.

pub mod media;
pub mod model;
pub mod property;
pub mod emit;
pub mod accessor;
pub mod border;

pub use accessor::Css;
pub use border::{Border, BorderSide, BorderStyle};
pub use emit::{apply_color_property, apply_color_property_named, light_and_dark_mode};
pub use media::{ColorScheme, Media, MediaType, Orientation};
pub use model::{InlineStyle, Pseudo, Scope, Selector};
pub use property::{CssColorProperty, COLOR_PROPERTIES};
