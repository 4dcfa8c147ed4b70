//! Built-in color scales.
//!
//! Each scale runs from `*_100` (darkest) to `*_900` (lightest). The unsuffixed
//! names (`red()`, `blue()`, …) are the `*_500` midpoint of their scale.
//! [`paired`] holds the same scales with a hand-picked dark-scheme value.

use crate::color::value::ColorValue;

macro_rules! palette {
    ($($name:ident => $hex:literal),* $(,)?) => {
        $(
            #[doc = concat!("`", stringify!($hex), "`")]
            pub fn $name() -> ColorValue {
                ColorValue::hex_rgb($hex)
            }
        )*
    };
}

palette! {
    gray_100 => 0x1a1a1a,
    gray_200 => 0x3a3a3a,
    gray_300 => 0x5a5a5a,
    gray_400 => 0x707070,
    gray_500 => 0x888888,
    gray_600 => 0x999999,
    gray_700 => 0xbbbbbb,
    gray_800 => 0xd0d0d0,
    gray_900 => 0xf5f5f5,

    blue_100 => 0x001a33,
    blue_200 => 0x003366,
    blue_300 => 0x0055aa,
    blue_400 => 0x0077ee,
    blue_500 => 0x3399ff,
    blue_600 => 0x66aaff,
    blue_700 => 0xb3ccff,
    blue_800 => 0xcce5ff,
    blue_900 => 0xf0f8ff,

    green_100 => 0x002600,
    green_200 => 0x004400,
    green_300 => 0x006600,
    green_400 => 0x009900,
    green_500 => 0x33cc33,
    green_600 => 0x66d966,
    green_700 => 0xb3f0b3,
    green_800 => 0xccf5cc,
    green_900 => 0xf0fff0,

    red_100 => 0x260000,
    red_200 => 0x440000,
    red_300 => 0x660000,
    red_400 => 0x990000,
    red_500 => 0xcc3333,
    red_600 => 0xe06666,
    red_700 => 0xf0b3b3,
    red_800 => 0xf5cccc,
    red_900 => 0xfff0f0,

    purple_100 => 0x1a0026,
    purple_200 => 0x3b0044,
    purple_300 => 0x5d0066,
    purple_400 => 0x7f0099,
    purple_500 => 0xa300cc,
    purple_600 => 0xb366e0,
    purple_700 => 0xd9b3f0,
    purple_800 => 0xe6ccf5,
    purple_900 => 0xf9f0ff,

    black => 0x121212,
    off_black => 0x171717,
    white => 0xffffff,
    off_white => 0xfafafa,
}

pub fn gray() -> ColorValue {
    gray_500()
}

pub fn blue() -> ColorValue {
    blue_500()
}

pub fn green() -> ColorValue {
    green_500()
}

pub fn red() -> ColorValue {
    red_500()
}

pub fn purple() -> ColorValue {
    purple_500()
}

/// The scales as light/dark pairs. The light half is the plain palette
/// entry of the same name.
pub mod paired {
    use crate::color::dark_mode::DarkModeColor;
    use crate::color::value::ColorValue;

    macro_rules! paired {
        ($($name:ident => $dark:literal),* $(,)?) => {
            $(
                #[doc = concat!("[`super::", stringify!($name), "`] with dark `", stringify!($dark), "`")]
                pub fn $name() -> DarkModeColor {
                    DarkModeColor::pair(super::$name(), ColorValue::hex_rgb($dark))
                }
            )*
        };
    }

    paired! {
        gray_100 => 0xf7f7f7,
        gray_200 => 0xe0e0e0,
        gray_300 => 0xc0c0c0,
        gray_400 => 0x909090,
        gray_500 => 0x707070,
        gray_600 => 0x606060,
        gray_700 => 0x404040,
        gray_800 => 0x303030,
        gray_900 => 0x101010,

        blue_100 => 0xe6f3ff,
        blue_200 => 0xbbccdd,
        blue_300 => 0x7799bb,
        blue_400 => 0x336699,
        blue_500 => 0x004477,
        blue_600 => 0x003366,
        blue_700 => 0x001144,
        blue_800 => 0x001133,
        blue_900 => 0x001011,

        green_100 => 0xe6ffe6,
        green_200 => 0xbbeebb,
        green_300 => 0x77cc77,
        green_400 => 0x33aa33,
        green_500 => 0x008800,
        green_600 => 0x007700,
        green_700 => 0x005500,
        green_800 => 0x004400,
        green_900 => 0x002200,

        red_100 => 0xffe6e6,
        red_200 => 0xffb3b3,
        red_300 => 0xff8080,
        red_400 => 0xff4d4d,
        red_500 => 0xff1a1a,
        red_600 => 0xff0000,
        red_700 => 0xbb0000,
        red_800 => 0x990000,
        red_900 => 0x550000,

        purple_100 => 0xf0e6ff,
        purple_200 => 0xd9b3ea,
        purple_300 => 0xb366d6,
        purple_400 => 0x8f00b3,
        purple_500 => 0x6e0088,
        purple_600 => 0x5d0066,
        purple_700 => 0x3b0044,
        purple_800 => 0x2a0033,
        purple_900 => 0x110011,
    }

    pub fn gray() -> DarkModeColor {
        gray_500()
    }

    pub fn blue() -> DarkModeColor {
        blue_500()
    }

    pub fn green() -> DarkModeColor {
        green_500()
    }

    pub fn red() -> DarkModeColor {
        red_500()
    }

    pub fn purple() -> DarkModeColor {
        purple_500()
    }
}
