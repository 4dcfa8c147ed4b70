//! logos-based lexer for CSS color literals.
//!
//! Token priority in logos is determined by:
//! 1. Longest match wins (e.g. `50%` as [`Token::Percentage`] beats `50` as `Number`)
//! 2. For equal length matches, earlier-defined variants win
//!
//! Our ordering ensures:
//! - `#ff00aa` matches [`Token::HexColor`] as a single token
//! - `210deg` matches [`Token::Angle`], not `Number` + `Ident`
//! - `rgba` in `rgba(` matches [`Token::Ident`] followed by [`Token::ParenOpen`]

use std::ops::Range;

use logos::Logos;

/// Token produced by the color literal lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\n\r\f]+")]
pub enum Token {
    // ── Compound tokens (longer matches, defined first) ──────────────

    /// Hex color: `#` followed by one or more hex digits. Length is checked by the parser.
    #[regex(r"#[0-9a-fA-F]+")]
    HexColor,

    /// Percentage: `50%`, `12.5%`.
    #[regex(r"-?[0-9]*\.?[0-9]+%")]
    Percentage,

    /// Angle in degrees: `210deg`.
    #[regex(r"-?[0-9]*\.?[0-9]+deg")]
    Angle,

    /// Number: integer or float, possibly negative.
    #[regex(r"-?[0-9]*\.?[0-9]+")]
    Number,

    /// Identifier: function names and color keywords.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_-]*")]
    Ident,

    // ── Single-character punctuation ─────────────────────────────────

    /// `(`
    #[token("(")]
    ParenOpen,

    /// `)`
    #[token(")")]
    ParenClose,

    /// `,`
    #[token(",")]
    Comma,

    /// `/` (alpha separator in space-separated syntax)
    #[token("/")]
    Slash,
}

/// Tokenize a color literal into `(Token, text)` pairs.
///
/// Unlike a lenient stylesheet lexer, a color literal with an unlexable
/// character is rejected: the byte span of the first bad fragment is returned.
pub fn tokenize(input: &str) -> Result<Vec<(Token, &str)>, Range<usize>> {
    let mut tokens = Vec::new();
    for (result, span) in Token::lexer(input).spanned() {
        match result {
            Ok(token) => tokens.push((token, &input[span])),
            Err(()) => return Err(span),
        }
    }
    Ok(tokens)
}
