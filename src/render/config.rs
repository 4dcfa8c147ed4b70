//! Printer configuration.

/// Configuration for stylesheet and document rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Prepended to every generated class name.
    pub class_prefix: String,
    /// Spaces per nesting level.
    pub indent: usize,
    /// Collect declarations into a `<style>` block. When `false`, only
    /// unscoped declarations are written, as `style` attributes.
    pub emit_style_block: bool,
    /// Optional `<title>` for the document head.
    pub title: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            class_prefix: String::new(),
            indent: 2,
            emit_style_block: true,
            title: None,
        }
    }
}

impl RenderConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the class prefix (builder).
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }

    /// Set the indentation width (builder).
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Set whether declarations are collected into a `<style>` block (builder).
    pub fn with_style_block(mut self, emit: bool) -> Self {
        self.emit_style_block = emit;
        self
    }

    /// Set the document title (builder).
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub(crate) fn indentation(&self, depth: usize) -> String {
        " ".repeat(self.indent * depth)
    }
}
