//! Rendering: class generation, stylesheet printing, and the HTML document.

pub mod config;
pub mod stylesheet;
pub mod html;

pub use config::RenderConfig;
pub use html::Document;
pub use stylesheet::{Rule, Stylesheet};
