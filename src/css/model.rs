//! Declaration model: Selector, Pseudo, Scope, InlineStyle.

use std::fmt;

use crate::css::media::Media;

/// Selector context a declaration is scoped under.
///
/// Rendered in front of the generated class, so `Selector::new(".theme")`
/// produces rules of the form `.theme .color-0{...}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selector(String);

impl Selector {
    pub fn new(selector: impl Into<String>) -> Self {
        Self(selector.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Selector {
    fn from(selector: &str) -> Self {
        Self::new(selector)
    }
}

/// Pseudo-class or pseudo-element appended to the generated class selector.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Pseudo {
    Hover,
    Focus,
    FocusVisible,
    Active,
    Visited,
    Disabled,
    FirstChild,
    LastChild,
    Before,
    After,
    Placeholder,
    /// Any other pseudo selector, written with its leading colon(s).
    Custom(String),
}

impl Pseudo {
    pub fn as_str(&self) -> &str {
        match self {
            Pseudo::Hover => ":hover",
            Pseudo::Focus => ":focus",
            Pseudo::FocusVisible => ":focus-visible",
            Pseudo::Active => ":active",
            Pseudo::Visited => ":visited",
            Pseudo::Disabled => ":disabled",
            Pseudo::FirstChild => ":first-child",
            Pseudo::LastChild => ":last-child",
            Pseudo::Before => "::before",
            Pseudo::After => "::after",
            Pseudo::Placeholder => "::placeholder",
            Pseudo::Custom(text) => text,
        }
    }
}

impl fmt::Display for Pseudo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional media / selector / pseudo modifiers for a declaration.
///
/// `Scope::default()` is unscoped: the declaration applies unconditionally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Scope {
    pub media: Option<Media>,
    pub selector: Option<Selector>,
    pub pseudo: Option<Pseudo>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the media condition (builder).
    pub fn with_media(mut self, media: Media) -> Self {
        self.media = Some(media);
        self
    }

    /// Set the selector context (builder).
    pub fn with_selector(mut self, selector: impl Into<Selector>) -> Self {
        self.selector = Some(selector.into());
        self
    }

    /// Set the pseudo selector (builder).
    pub fn with_pseudo(mut self, pseudo: Pseudo) -> Self {
        self.pseudo = Some(pseudo);
        self
    }

    /// This scope with `(prefers-color-scheme: dark)` ANDed into its media.
    pub fn dark_gated(&self) -> Scope {
        Scope {
            media: Some(Media::dark().and(self.media.as_ref())),
            selector: self.selector.clone(),
            pseudo: self.pseudo.clone(),
        }
    }

    /// Whether no modifier is set.
    pub fn is_unscoped(&self) -> bool {
        self.media.is_none() && self.selector.is_none() && self.pseudo.is_none()
    }
}

/// One CSS declaration attached to an element, with its scoping.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InlineStyle {
    /// The property wire name, e.g. `"border-left-color"`.
    pub property: String,
    /// The declaration value text, e.g. `"#cc3333"`.
    pub value: String,
    pub media: Option<Media>,
    pub selector: Option<Selector>,
    pub pseudo: Option<Pseudo>,
}

impl InlineStyle {
    pub fn new(property: impl Into<String>, value: impl Into<String>, scope: &Scope) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
            media: scope.media.clone(),
            selector: scope.selector.clone(),
            pseudo: scope.pseudo.clone(),
        }
    }

    /// `property:value` as it appears inside a rule block.
    pub fn declaration(&self) -> String {
        format!("{}:{}", self.property, self.value)
    }

    /// Whether the declaration only applies under `prefers-color-scheme: dark`.
    pub fn is_dark_gated(&self) -> bool {
        self.media.as_ref().is_some_and(Media::is_dark_gated)
    }

    /// Whether the declaration can be written in a `style="..."` attribute.
    pub fn is_inlinable(&self) -> bool {
        self.media.is_none() && self.selector.is_none() && self.pseudo.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scope_is_unscoped() {
        assert!(Scope::default().is_unscoped());
        assert!(!Scope::new().with_pseudo(Pseudo::Hover).is_unscoped());
    }

    #[test]
    fn dark_gated_ands_with_caller_media() {
        let scope = Scope::new()
            .with_media(Media::print())
            .with_selector(".card")
            .with_pseudo(Pseudo::Hover);
        let gated = scope.dark_gated();
        assert_eq!(
            gated.media.as_ref().map(ToString::to_string).as_deref(),
            Some("print and (prefers-color-scheme: dark)")
        );
        assert_eq!(gated.selector, scope.selector);
        assert_eq!(gated.pseudo, scope.pseudo);
    }

    #[test]
    fn dark_gated_without_media() {
        assert_eq!(Scope::new().dark_gated().media, Some(Media::dark()));
    }

    #[test]
    fn inline_style_carries_scope() {
        let scope = Scope::new().with_media(Media::dark());
        let style = InlineStyle::new("color", "red", &scope);
        assert_eq!(style.declaration(), "color:red");
        assert!(style.is_dark_gated());
        assert!(!style.is_inlinable());
        assert!(InlineStyle::new("color", "red", &Scope::new()).is_inlinable());
    }

    #[test]
    fn pseudo_text() {
        assert_eq!(Pseudo::Before.to_string(), "::before");
        assert_eq!(Pseudo::Custom(":nth-child(2n)".into()).to_string(), ":nth-child(2n)");
    }
}
