//! The color leaf type: one concrete CSS color literal.
//!
//! [`ColorValue`] is the only place colors are validated. Everything above it
//! (dark-mode pairs, the canonical input, the emitter) treats a value as an
//! opaque, already-valid literal and only ever asks for its [`Display`] text.

use std::fmt;
use std::str::FromStr;

use crate::color::tokenizer::{tokenize, Token};

/// Default amount used when a dark variant is synthesized from a light color.
pub const DEFAULT_BRIGHTNESS_STEP: f64 = 0.2;

/// Errors from parsing a CSS color literal.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ColorParseError {
    #[error("empty color literal")]
    Empty,
    #[error("unexpected character at byte {position}: {fragment:?}")]
    UnexpectedCharacter { position: usize, fragment: String },
    #[error("unexpected token: {0:?}")]
    UnexpectedToken(String),
    #[error("invalid hex color #{0}: expected 3, 4, 6, or 8 digits")]
    InvalidHex(String),
    #[error("{function}() expects {expected} arguments, got {found}")]
    WrongArity {
        function: String,
        expected: &'static str,
        found: usize,
    },
    #[error("{component} out of range: {value}")]
    OutOfRange {
        component: &'static str,
        value: String,
    },
    #[error("unknown color: {0}")]
    UnknownName(String),
}

macro_rules! named_colors {
    ($($variant:ident => $name:literal $(($r:literal, $g:literal, $b:literal))?),* $(,)?) => {
        /// CSS named color keywords.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum NamedColor {
            $($variant,)*
        }

        impl NamedColor {
            /// Every supported keyword, in declaration order.
            pub const ALL: &'static [NamedColor] = &[$(NamedColor::$variant,)*];

            /// The CSS keyword for this color.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(NamedColor::$variant => $name,)*
                }
            }

            /// RGB channels for the basic CSS 1 colors. Other keywords return `None`
            /// and are left untouched by brightness and opacity adjustments.
            pub fn rgb(self) -> Option<(u8, u8, u8)> {
                match self {
                    $(NamedColor::$variant => named_colors!(@rgb $(($r, $g, $b))?),)*
                }
            }

            /// Look up a keyword, ignoring ASCII case.
            pub fn from_name(name: &str) -> Option<NamedColor> {
                NamedColor::ALL
                    .iter()
                    .copied()
                    .find(|named| named.as_str().eq_ignore_ascii_case(name))
            }
        }
    };
    (@rgb ($r:literal, $g:literal, $b:literal)) => { Some(($r, $g, $b)) };
    (@rgb) => { None };
}

named_colors! {
    // CSS 1 basic colors.
    Black => "black" (0, 0, 0),
    Silver => "silver" (192, 192, 192),
    Gray => "gray" (128, 128, 128),
    White => "white" (255, 255, 255),
    Maroon => "maroon" (128, 0, 0),
    Red => "red" (255, 0, 0),
    Purple => "purple" (128, 0, 128),
    Fuchsia => "fuchsia" (255, 0, 255),
    Green => "green" (0, 128, 0),
    Lime => "lime" (0, 255, 0),
    Olive => "olive" (128, 128, 0),
    Yellow => "yellow" (255, 255, 0),
    Navy => "navy" (0, 0, 128),
    Blue => "blue" (0, 0, 255),
    Teal => "teal" (0, 128, 128),
    Aqua => "aqua" (0, 255, 255),
    // Extended keywords.
    AliceBlue => "aliceblue",
    Beige => "beige",
    Coral => "coral",
    Crimson => "crimson",
    DarkGray => "darkgray",
    DodgerBlue => "dodgerblue",
    Gainsboro => "gainsboro",
    Gold => "gold",
    HotPink => "hotpink",
    Indigo => "indigo",
    Ivory => "ivory",
    Khaki => "khaki",
    Lavender => "lavender",
    LightGray => "lightgray",
    MidnightBlue => "midnightblue",
    Orange => "orange",
    Orchid => "orchid",
    RebeccaPurple => "rebeccapurple",
    Salmon => "salmon",
    SeaGreen => "seagreen",
    SkyBlue => "skyblue",
    SlateGray => "slategray",
    Tomato => "tomato",
    Turquoise => "turquoise",
    Violet => "violet",
    WhiteSmoke => "whitesmoke",
}

impl fmt::Display for NamedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated hex color digits, stored without the leading `#`.
///
/// Holds 3, 4, 6 or 8 ASCII hex digits, case preserved. The only ways in are
/// [`HexDigits::new`] and packed `0xRRGGBB` values, so a [`ColorValue::Hex`]
/// always prints as a legal literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexDigits(String);

impl HexDigits {
    /// Validate `digits`. A leading `#` is accepted and stripped.
    pub fn new(digits: &str) -> Result<Self, ColorParseError> {
        let digits = digits.strip_prefix('#').unwrap_or(digits);
        let valid = matches!(digits.len(), 3 | 4 | 6 | 8)
            && digits.bytes().all(|b| b.is_ascii_hexdigit());
        if valid {
            Ok(Self(digits.to_owned()))
        } else {
            Err(ColorParseError::InvalidHex(digits.to_owned()))
        }
    }

    /// Six lowercase digits from a packed `0xRRGGBB` value. Bits above the
    /// low 24 are ignored.
    pub fn from_rgb(packed: u32) -> Self {
        Self(format!("{:06x}", packed & 0x00ff_ffff))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HexDigits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single CSS color literal.
///
/// Equality is structural: `Hex("000000")` and `Rgb(0, 0, 0)` describe the same
/// color but are different values, and the dark-mode redundancy check relies on
/// exactly that distinction.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorValue {
    Hex(HexDigits),
    Rgb(u8, u8, u8),
    Rgba(u8, u8, u8, f64),
    /// Hue in degrees, saturation and lightness in percent.
    Hsl(f64, f64, f64),
    Hsla(f64, f64, f64, f64),
    Named(NamedColor),
    CurrentColor,
    Transparent,
}

impl ColorValue {
    /// Hex color from its digits. A leading `#` is accepted and stripped;
    /// anything but 3, 4, 6 or 8 hex digits is rejected.
    pub fn hex(digits: &str) -> Result<Self, ColorParseError> {
        HexDigits::new(digits).map(ColorValue::Hex)
    }

    /// Hex color from a packed `0xRRGGBB` value, e.g. `0xcc3333`.
    pub fn hex_rgb(packed: u32) -> Self {
        ColorValue::Hex(HexDigits::from_rgb(packed))
    }

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        ColorValue::Rgb(r, g, b)
    }

    /// Alpha is clamped to `[0, 1]`.
    pub fn rgba(r: u8, g: u8, b: u8, alpha: f64) -> Self {
        ColorValue::Rgba(r, g, b, clamp_unit(alpha))
    }

    pub fn hsl(hue: f64, saturation: f64, lightness: f64) -> Self {
        ColorValue::Hsl(hue, saturation, lightness)
    }

    pub fn hsla(hue: f64, saturation: f64, lightness: f64, alpha: f64) -> Self {
        ColorValue::Hsla(hue, saturation, lightness, clamp_unit(alpha))
    }

    pub fn named(color: NamedColor) -> Self {
        ColorValue::Named(color)
    }

    /// RGB channels when they can be derived without color-space math:
    /// rgb/rgba, 3- or 6-digit hex, and the basic named colors.
    pub fn to_rgb(&self) -> Option<(u8, u8, u8)> {
        match self {
            ColorValue::Rgb(r, g, b) | ColorValue::Rgba(r, g, b, _) => Some((*r, *g, *b)),
            ColorValue::Hex(digits) => hex_to_rgb(digits.as_str()),
            ColorValue::Named(named) => named.rgb(),
            _ => None,
        }
    }

    /// Shift brightness by `percent` in `[-1, 1]`.
    ///
    /// Positive values move each channel toward 255 (or lightness toward 100),
    /// negative values scale it toward 0. Out-of-range amounts and colors with
    /// no known channels return `self` unchanged. Hex and named colors come
    /// back as `rgb(...)`.
    pub fn adjust_brightness(&self, percent: f64) -> ColorValue {
        if !(-1.0..=1.0).contains(&percent) {
            return self.clone();
        }

        let channel = |value: u8| -> u8 {
            let value = f64::from(value);
            let adjusted = if percent > 0.0 {
                value + (255.0 - value) * percent
            } else {
                value * (1.0 + percent)
            };
            adjusted.clamp(0.0, 255.0) as u8
        };
        let lightness = |value: f64| -> f64 {
            let adjusted = if percent > 0.0 {
                value + (100.0 - value) * percent
            } else {
                value * (1.0 + percent)
            };
            adjusted.clamp(0.0, 100.0)
        };

        match self {
            ColorValue::Rgb(r, g, b) => ColorValue::Rgb(channel(*r), channel(*g), channel(*b)),
            ColorValue::Rgba(r, g, b, a) => {
                ColorValue::Rgba(channel(*r), channel(*g), channel(*b), *a)
            }
            ColorValue::Hsl(h, s, l) => ColorValue::Hsl(*h, *s, lightness(*l)),
            ColorValue::Hsla(h, s, l, a) => ColorValue::Hsla(*h, *s, lightness(*l), *a),
            ColorValue::Hex(_) | ColorValue::Named(_) => match self.to_rgb() {
                Some((r, g, b)) => ColorValue::Rgb(channel(r), channel(g), channel(b)),
                None => self.clone(),
            },
            ColorValue::CurrentColor | ColorValue::Transparent => self.clone(),
        }
    }

    /// Darken by `percent` (`0.0..=1.0`).
    pub fn darker(&self, percent: f64) -> ColorValue {
        self.adjust_brightness(-percent)
    }

    /// Lighten by `percent` (`0.0..=1.0`).
    pub fn lighter(&self, percent: f64) -> ColorValue {
        self.adjust_brightness(percent)
    }

    /// The dark variant synthesized when a caller supplies no explicit one.
    pub fn darkened(&self) -> ColorValue {
        self.darker(DEFAULT_BRIGHTNESS_STEP)
    }

    /// Replace (or add) the alpha channel. `alpha` is clamped to `[0, 1]`.
    pub fn opacity(&self, alpha: f64) -> ColorValue {
        let alpha = clamp_unit(alpha);
        match self {
            ColorValue::Rgb(r, g, b) | ColorValue::Rgba(r, g, b, _) => {
                ColorValue::Rgba(*r, *g, *b, alpha)
            }
            ColorValue::Hsl(h, s, l) | ColorValue::Hsla(h, s, l, _) => {
                ColorValue::Hsla(*h, *s, *l, alpha)
            }
            ColorValue::Hex(_) | ColorValue::Named(_) => match self.to_rgb() {
                Some((r, g, b)) => ColorValue::Rgba(r, g, b, alpha),
                None => self.clone(),
            },
            ColorValue::CurrentColor | ColorValue::Transparent => self.clone(),
        }
    }
}

impl From<NamedColor> for ColorValue {
    fn from(named: NamedColor) -> Self {
        ColorValue::Named(named)
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorValue::Hex(digits) => write!(f, "#{digits}"),
            ColorValue::Rgb(r, g, b) => write!(f, "rgb({r}, {g}, {b})"),
            ColorValue::Rgba(r, g, b, a) => write!(f, "rgba({r}, {g}, {b}, {})", Num(*a)),
            ColorValue::Hsl(h, s, l) => write!(f, "hsl({}, {}%, {}%)", Num(*h), Num(*s), Num(*l)),
            ColorValue::Hsla(h, s, l, a) => write!(
                f,
                "hsla({}, {}%, {}%, {})",
                Num(*h),
                Num(*s),
                Num(*l),
                Num(*a)
            ),
            ColorValue::Named(named) => f.write_str(named.as_str()),
            ColorValue::CurrentColor => f.write_str("currentColor"),
            ColorValue::Transparent => f.write_str("transparent"),
        }
    }
}

/// Float formatting for CSS output: at most three decimals, no trailing zeros.
struct Num(f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = (self.0 * 1000.0).round() / 1000.0;
        // Avoid printing "-0".
        let rounded = if rounded == 0.0 { 0.0 } else { rounded };
        write!(f, "{rounded}")
    }
}

fn clamp_unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

fn hex_to_rgb(digits: &str) -> Option<(u8, u8, u8)> {
    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_owned(),
        _ => return None,
    };
    let channel = |i: usize| u8::from_str_radix(expanded.get(i..i + 2)?, 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

impl FromStr for ColorValue {
    type Err = ColorParseError;

    /// Parse a CSS color literal: hex, `rgb()`/`rgba()`, `hsl()`/`hsla()`,
    /// a named color, `currentColor`, or `transparent`.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let tokens = tokenize(input).map_err(|span| ColorParseError::UnexpectedCharacter {
            position: span.start,
            fragment: input[span].to_owned(),
        })?;

        match tokens.as_slice() {
            [] => Err(ColorParseError::Empty),
            [(Token::HexColor, text)] => parse_hex(text),
            [(Token::Ident, name)] => parse_keyword(name),
            [(Token::Ident, function), (Token::ParenOpen, _), args @ .., (Token::ParenClose, _)] => {
                parse_function(function, args)
            }
            [(_, text), ..] => Err(ColorParseError::UnexpectedToken((*text).to_owned())),
        }
    }
}

fn parse_hex(text: &str) -> Result<ColorValue, ColorParseError> {
    ColorValue::hex(text)
}

fn parse_keyword(name: &str) -> Result<ColorValue, ColorParseError> {
    if name.eq_ignore_ascii_case("currentcolor") {
        return Ok(ColorValue::CurrentColor);
    }
    if name.eq_ignore_ascii_case("transparent") {
        return Ok(ColorValue::Transparent);
    }
    NamedColor::from_name(name)
        .map(ColorValue::Named)
        .ok_or_else(|| ColorParseError::UnknownName(name.to_owned()))
}

fn parse_function(function: &str, args: &[(Token, &str)]) -> Result<ColorValue, ColorParseError> {
    // Commas and the `/` alpha separator are interchangeable with whitespace here.
    let values: Vec<(Token, &str)> = args
        .iter()
        .copied()
        .filter(|(token, _)| !matches!(token, Token::Comma | Token::Slash))
        .collect();

    if let Some((_, text)) = values
        .iter()
        .find(|(token, _)| !matches!(token, Token::Number | Token::Percentage | Token::Angle))
    {
        return Err(ColorParseError::UnexpectedToken((*text).to_owned()));
    }

    let lowered = function.to_ascii_lowercase();
    match (lowered.as_str(), values.as_slice()) {
        ("rgb" | "rgba", [r, g, b]) => Ok(ColorValue::Rgb(
            parse_channel(*r)?,
            parse_channel(*g)?,
            parse_channel(*b)?,
        )),
        ("rgb" | "rgba", [r, g, b, a]) => Ok(ColorValue::Rgba(
            parse_channel(*r)?,
            parse_channel(*g)?,
            parse_channel(*b)?,
            parse_alpha(*a)?,
        )),
        ("hsl" | "hsla", [h, s, l]) => Ok(ColorValue::Hsl(
            parse_hue(*h)?,
            parse_percent(*s, "saturation")?,
            parse_percent(*l, "lightness")?,
        )),
        ("hsl" | "hsla", [h, s, l, a]) => Ok(ColorValue::Hsla(
            parse_hue(*h)?,
            parse_percent(*s, "saturation")?,
            parse_percent(*l, "lightness")?,
            parse_alpha(*a)?,
        )),
        ("rgb" | "rgba" | "hsl" | "hsla", found) => Err(ColorParseError::WrongArity {
            function: function.to_owned(),
            expected: "3 or 4",
            found: found.len(),
        }),
        _ => Err(ColorParseError::UnknownName(function.to_owned())),
    }
}

fn number(text: &str, suffix: &str, component: &'static str) -> Result<f64, ColorParseError> {
    text.strip_suffix(suffix)
        .unwrap_or(text)
        .parse::<f64>()
        .map_err(|_| ColorParseError::OutOfRange {
            component,
            value: text.to_owned(),
        })
}

fn out_of_range(component: &'static str, text: &str) -> ColorParseError {
    ColorParseError::OutOfRange {
        component,
        value: text.to_owned(),
    }
}

fn parse_channel((token, text): (Token, &str)) -> Result<u8, ColorParseError> {
    let value = match token {
        Token::Percentage => number(text, "%", "channel")? * 255.0 / 100.0,
        Token::Number => number(text, "", "channel")?,
        _ => return Err(ColorParseError::UnexpectedToken(text.to_owned())),
    };
    if !(0.0..=255.0).contains(&value) {
        return Err(out_of_range("channel", text));
    }
    Ok(value.round() as u8)
}

fn parse_alpha((token, text): (Token, &str)) -> Result<f64, ColorParseError> {
    let value = match token {
        Token::Percentage => number(text, "%", "alpha")? / 100.0,
        Token::Number => number(text, "", "alpha")?,
        _ => return Err(ColorParseError::UnexpectedToken(text.to_owned())),
    };
    if !(0.0..=1.0).contains(&value) {
        return Err(out_of_range("alpha", text));
    }
    Ok(value)
}

fn parse_hue((token, text): (Token, &str)) -> Result<f64, ColorParseError> {
    match token {
        Token::Angle => number(text, "deg", "hue"),
        Token::Number => number(text, "", "hue"),
        _ => Err(ColorParseError::UnexpectedToken(text.to_owned())),
    }
}

fn parse_percent(
    (token, text): (Token, &str),
    component: &'static str,
) -> Result<f64, ColorParseError> {
    let value = match token {
        Token::Percentage => number(text, "%", component)?,
        Token::Number => number(text, "", component)?,
        _ => return Err(ColorParseError::UnexpectedToken(text.to_owned())),
    };
    if !(0.0..=100.0).contains(&value) {
        return Err(out_of_range(component, text));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> ColorValue {
        input.parse().expect("valid color literal")
    }

    fn hex(digits: &str) -> ColorValue {
        ColorValue::hex(digits).expect("valid hex digits")
    }

    // ── Display ──────────────────────────────────────────────────────

    #[test]
    fn display_literals() {
        assert_eq!(hex("FF0000").to_string(), "#FF0000");
        assert_eq!(ColorValue::rgb(163, 40, 40).to_string(), "rgb(163, 40, 40)");
        assert_eq!(ColorValue::rgba(0, 0, 0, 0.5).to_string(), "rgba(0, 0, 0, 0.5)");
        assert_eq!(ColorValue::hsl(210.0, 50.0, 40.0).to_string(), "hsl(210, 50%, 40%)");
        assert_eq!(
            ColorValue::hsla(210.0, 50.0, 40.0, 1.0).to_string(),
            "hsla(210, 50%, 40%, 1)"
        );
        assert_eq!(ColorValue::named(NamedColor::RebeccaPurple).to_string(), "rebeccapurple");
        assert_eq!(ColorValue::CurrentColor.to_string(), "currentColor");
        assert_eq!(ColorValue::Transparent.to_string(), "transparent");
    }

    #[test]
    fn hex_constructor_strips_hash() {
        assert_eq!(hex("#abc"), hex("abc"));
        assert_eq!(hex("#abc").to_string(), "#abc");
    }

    #[test]
    fn hex_constructor_rejects_malformed_digits() {
        assert_eq!(
            ColorValue::hex("not a color"),
            Err(ColorParseError::InvalidHex("not a color".into()))
        );
        assert_eq!(ColorValue::hex("#12345"), Err(ColorParseError::InvalidHex("12345".into())));
        assert_eq!(ColorValue::hex("ggg"), Err(ColorParseError::InvalidHex("ggg".into())));
        assert!(ColorValue::hex("000}</style>").is_err());
        assert!(ColorValue::hex("").is_err());
    }

    #[test]
    fn hex_output_parses_back() {
        for digits in ["fff", "FF0000", "ff000080", "abcd"] {
            let color = hex(digits);
            assert_eq!(parse(&color.to_string()), color);
        }
    }

    #[test]
    fn packed_hex_is_six_lowercase_digits() {
        assert_eq!(ColorValue::hex_rgb(0xcc3333).to_string(), "#cc3333");
        assert_eq!(ColorValue::hex_rgb(0xFF).to_string(), "#0000ff");
        assert_eq!(ColorValue::hex_rgb(0x1ff_ffff).to_string(), "#ffffff");
    }

    // ── Brightness ───────────────────────────────────────────────────

    #[test]
    fn darker_hex_becomes_rgb() {
        assert_eq!(hex("cc3333").darkened(), ColorValue::rgb(163, 40, 40));
    }

    #[test]
    fn darker_black_is_structurally_different() {
        let black = hex("000000");
        let dark = black.darkened();
        assert_eq!(dark, ColorValue::rgb(0, 0, 0));
        assert_ne!(dark, black);
    }

    #[test]
    fn lighter_moves_toward_white() {
        assert_eq!(ColorValue::rgb(0, 100, 255).lighter(0.5), ColorValue::rgb(127, 177, 255));
    }

    #[test]
    fn shorthand_hex_expands() {
        assert_eq!(hex("fff").darker(0.5), ColorValue::rgb(127, 127, 127));
    }

    #[test]
    fn hsl_adjusts_lightness_only() {
        assert_eq!(
            ColorValue::hsl(210.0, 50.0, 40.0).darker(0.5),
            ColorValue::hsl(210.0, 50.0, 20.0)
        );
        assert_eq!(
            ColorValue::hsla(0.0, 0.0, 50.0, 0.3).lighter(0.5),
            ColorValue::hsla(0.0, 0.0, 75.0, 0.3)
        );
    }

    #[test]
    fn out_of_range_adjustment_is_identity() {
        let color = ColorValue::rgb(10, 20, 30);
        assert_eq!(color.adjust_brightness(1.5), color);
        assert_eq!(color.adjust_brightness(-1.01), color);
    }

    #[test]
    fn keywords_without_channels_are_unchanged() {
        assert_eq!(ColorValue::CurrentColor.darkened(), ColorValue::CurrentColor);
        assert_eq!(ColorValue::Transparent.darkened(), ColorValue::Transparent);
        let tomato = ColorValue::named(NamedColor::Tomato);
        assert_eq!(tomato.darkened(), tomato);
        let alpha_hex = hex("ff000080");
        assert_eq!(alpha_hex.darkened(), alpha_hex);
    }

    #[test]
    fn basic_named_colors_darken() {
        assert_eq!(
            ColorValue::named(NamedColor::White).darker(0.2),
            ColorValue::rgb(204, 204, 204)
        );
    }

    // ── Opacity ──────────────────────────────────────────────────────

    #[test]
    fn opacity_variants() {
        assert_eq!(ColorValue::rgb(1, 2, 3).opacity(0.5), ColorValue::rgba(1, 2, 3, 0.5));
        assert_eq!(hex("ff0000").opacity(2.0), ColorValue::rgba(255, 0, 0, 1.0));
        assert_eq!(
            ColorValue::hsl(1.0, 2.0, 3.0).opacity(-1.0),
            ColorValue::hsla(1.0, 2.0, 3.0, 0.0)
        );
        assert_eq!(ColorValue::CurrentColor.opacity(0.5), ColorValue::CurrentColor);
    }

    // ── Parsing ──────────────────────────────────────────────────────

    #[test]
    fn parse_hex() {
        assert_eq!(parse("#FF0000"), hex("FF0000"));
        assert_eq!(parse("#fff"), hex("fff"));
        assert_eq!(parse("#ff000080"), hex("ff000080"));
    }

    #[test]
    fn parse_functions() {
        assert_eq!(parse("rgb(255, 0, 10)"), ColorValue::rgb(255, 0, 10));
        assert_eq!(parse("rgb(100% 0% 0%)"), ColorValue::rgb(255, 0, 0));
        assert_eq!(parse("rgba(0, 0, 0, 0.5)"), ColorValue::rgba(0, 0, 0, 0.5));
        assert_eq!(parse("rgb(0 0 0 / 50%)"), ColorValue::rgba(0, 0, 0, 0.5));
        assert_eq!(parse("hsl(210deg, 50%, 40%)"), ColorValue::hsl(210.0, 50.0, 40.0));
        assert_eq!(parse("hsla(210, 50%, 40%, 1)"), ColorValue::hsla(210.0, 50.0, 40.0, 1.0));
    }

    #[test]
    fn parse_keywords() {
        assert_eq!(parse("currentColor"), ColorValue::CurrentColor);
        assert_eq!(parse("CURRENTCOLOR"), ColorValue::CurrentColor);
        assert_eq!(parse("transparent"), ColorValue::Transparent);
        assert_eq!(parse("Red"), ColorValue::named(NamedColor::Red));
    }

    #[test]
    fn parse_errors() {
        assert_eq!("".parse::<ColorValue>(), Err(ColorParseError::Empty));
        assert_eq!(
            "#12345".parse::<ColorValue>(),
            Err(ColorParseError::InvalidHex("12345".into()))
        );
        assert_eq!(
            "blurple".parse::<ColorValue>(),
            Err(ColorParseError::UnknownName("blurple".into()))
        );
        assert!(matches!(
            "rgb(1, 2)".parse::<ColorValue>(),
            Err(ColorParseError::WrongArity { found: 2, .. })
        ));
        assert!(matches!(
            "rgb(256, 0, 0)".parse::<ColorValue>(),
            Err(ColorParseError::OutOfRange { component: "channel", .. })
        ));
        assert!(matches!(
            "red;".parse::<ColorValue>(),
            Err(ColorParseError::UnexpectedCharacter { position: 3, .. })
        ));
        assert!(matches!(
            "red blue".parse::<ColorValue>(),
            Err(ColorParseError::UnexpectedToken(_))
        ));
    }

    #[test]
    fn parse_display_agree() {
        for literal in ["#cc3333", "rgb(163, 40, 40)", "rgba(0, 0, 0, 0.5)", "hsl(210, 50%, 40%)"] {
            assert_eq!(parse(literal).to_string(), literal);
        }
    }

    #[test]
    fn named_lookup_is_exhaustive() {
        for named in NamedColor::ALL {
            assert_eq!(NamedColor::from_name(named.as_str()), Some(*named));
        }
    }
}
