//! # chroma-html
//!
//! Typed HTML elements and CSS declarations, with first-class dark mode.
//!
//! Color-bearing properties accept a raw color, a light/dark pair, a CSS-wide
//! keyword, or a union of those. Every shape is funnelled into one canonical
//! [`ColorInput`] and emitted by a single generic routine: one declaration, or
//! a light declaration plus a dark one gated by
//! `@media (prefers-color-scheme: dark)`, with the second dropped when both
//! colors are equal.
//!
//! ```
//! use chroma_html::prelude::*;
//!
//! let page = p()
//!     .text("Hello World")
//!     .css()
//!     .color(DarkModeColor::auto(palette::red()))
//!     .into_element();
//!
//! let html = Document::new(page).render(&RenderConfig::default());
//! assert!(html.contains(".color-0{color:#cc3333}"));
//! assert!(html.contains("@media (prefers-color-scheme: dark){"));
//! ```
//!
//! ## Core Systems
//!
//! - **[`color`]**: color values, light/dark pairs, the canonical color input
//! - **[`css`]**: media conditions, scoping, property descriptors, the emitter
//! - **[`dom`]**: the element builder tree and its slotmap arena
//! - **[`render`]**: class generation, stylesheet grouping, the HTML printer

pub mod color;
pub mod css;
pub mod dom;
pub mod render;

pub use color::{
    ColorInput, ColorInputConvertible, ColorParseError, ColorValue, ColorWithDarkModeAndGlobal,
    ColorWithGlobal, DarkModeColor, Global, MaybeColorInput, NamedColor,
};
pub use css::{
    apply_color_property, light_and_dark_mode, Border, BorderSide, BorderStyle, Css,
    CssColorProperty, Media, Pseudo, Scope,
};
pub use dom::{Dom, Element, Node};
pub use render::{Document, RenderConfig};

/// Everything needed to build and print a styled document.
pub mod prelude {
    pub use crate::color::{
        palette, ColorInput, ColorValue, ColorWithDarkModeAndGlobal, ColorWithGlobal,
        DarkModeColor, Global, MaybeColorInput, NamedColor,
    };
    pub use crate::css::{Border, BorderSide, BorderStyle, Css, Media, Pseudo, Scope};
    pub use crate::dom::elements::*;
    pub use crate::dom::{Element, Node};
    pub use crate::render::{Document, RenderConfig};
}
