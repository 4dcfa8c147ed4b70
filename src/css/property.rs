//! Color-bearing property descriptors.
//!
//! Each descriptor is a zero-sized marker type bound to its wire name. The
//! generic emitter is parameterized over the marker, so adding a property
//! means adding one line to the table below; no emission code changes.

/// A CSS property that takes a `<color>` value.
pub trait CssColorProperty {
    /// The property name as written in CSS, e.g. `"border-left-color"`.
    const NAME: &'static str;
}

macro_rules! color_properties {
    ($($marker:ident => $name:literal),* $(,)?) => {
        $(
            #[doc = concat!("The `", $name, "` property.")]
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
            pub struct $marker;

            impl CssColorProperty for $marker {
                const NAME: &'static str = $name;
            }
        )*

        /// Wire names of every color-bearing property with a descriptor.
        pub const COLOR_PROPERTIES: &[&str] = &[$($name,)*];
    };
}

color_properties! {
    Color => "color",
    BackgroundColor => "background-color",
    BorderColor => "border-color",
    BorderTopColor => "border-top-color",
    BorderRightColor => "border-right-color",
    BorderBottomColor => "border-bottom-color",
    BorderLeftColor => "border-left-color",
    BorderBlockColor => "border-block-color",
    BorderBlockStartColor => "border-block-start-color",
    BorderBlockEndColor => "border-block-end-color",
    BorderInlineColor => "border-inline-color",
    BorderInlineStartColor => "border-inline-start-color",
    BorderInlineEndColor => "border-inline-end-color",
    AccentColor => "accent-color",
    CaretColor => "caret-color",
    ColumnRuleColor => "column-rule-color",
    Fill => "fill",
    Stroke => "stroke",
    OutlineColor => "outline-color",
    FloodColor => "flood-color",
    LightingColor => "lighting-color",
    StopColor => "stop-color",
    TextDecorationColor => "text-decoration-color",
    TextEmphasisColor => "text-emphasis-color",
}
