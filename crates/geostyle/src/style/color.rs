//! CSS color validation.
//!
//! Color-valued properties are passed through verbatim when they are a CSS
//! color the renderer can consume directly, and replaced by the default
//! otherwise. The accepted forms are:
//!
//! - `#rgb` and `#rrggbb` hex notation
//! - `rgb(r, g, b)` and `rgba(r, g, b, a)` with comma-separated components,
//!   where channels are numbers in `0..=255` or percentages, and alpha is a
//!   number in `0..=1` or a percentage
//!
//! Named colors (`red`, `transparent`) are not accepted.

use cssparser::{ParseError, Parser, ParserInput, Token};

/// Returns `true` if `value` is a CSS color in one of the accepted forms.
///
/// The value must be plain text: comments, CSS escapes and unclosed
/// functions are rejected even where a CSS parser would recover from them.
///
/// # Example
///
/// ```rust
/// use geostyle::style::is_css_color;
///
/// assert!(is_css_color("#4169E1"));
/// assert!(is_css_color("rgba(255, 0, 0, 0.5)"));
/// assert!(!is_css_color("blue"));
/// assert!(!is_css_color("#12345"));
/// assert!(!is_css_color("rgb(1, 2, 3"));
/// ```
pub fn is_css_color(value: &str) -> bool {
    if value.is_empty() || value.trim() != value {
        return false;
    }

    let mut input = ParserInput::new(value);
    let mut parser = Parser::new(&mut input);
    let token = match parser.next_including_whitespace_and_comments() {
        Ok(token) => token.clone(),
        Err(_) => return false,
    };

    let valid = match token {
        // The unescaped digits must be the literal source text
        Token::Hash(ref digits) | Token::IDHash(ref digits) => {
            value.strip_prefix('#') == Some(&**digits) && is_hex_color_digits(digits)
        }
        Token::Function(ref name) => {
            let with_alpha = if name.eq_ignore_ascii_case("rgba") {
                true
            } else if name.eq_ignore_ascii_case("rgb") {
                false
            } else {
                return false;
            };
            let literal_name = value.get(..name.len()) == Some(&**name)
                && value[name.len()..].starts_with('(');
            // End of input implicitly closes a block
            if !literal_name || !value.ends_with(')') {
                return false;
            }
            parser
                .parse_nested_block(|p| parse_rgb_components(p, with_alpha))
                .unwrap_or(false)
        }
        _ => false,
    };

    valid && is_exhausted(&mut parser)
}

fn is_hex_color_digits(digits: &str) -> bool {
    matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

/// Legacy `rgb()` channels are all numbers or all percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChannelKind {
    Number,
    Percentage,
}

// Structural problems (missing commas, comments, trailing tokens) surface as
// parse errors; components that parse but are out of range yield `Ok(false)`.
fn parse_rgb_components<'i>(
    parser: &mut Parser<'i, '_>,
    with_alpha: bool,
) -> Result<bool, ParseError<'i, ()>> {
    let mut valid = true;
    let mut kinds = Vec::with_capacity(3);
    for index in 0..3 {
        if index > 0 {
            expect_comma(parser)?;
        }
        match channel_kind(&next_component(parser)?) {
            Some(kind) => kinds.push(kind),
            None => valid = false,
        }
    }
    valid &= kinds.windows(2).all(|pair| pair[0] == pair[1]);
    if with_alpha {
        expect_comma(parser)?;
        valid &= is_alpha(&next_component(parser)?);
    }
    Ok(valid && is_exhausted(parser))
}

/// Next token, skipping whitespace but failing on comments.
fn next_component<'i>(parser: &mut Parser<'i, '_>) -> Result<Token<'i>, ParseError<'i, ()>> {
    loop {
        let token = parser.next_including_whitespace_and_comments()?.clone();
        match token {
            Token::WhiteSpace(_) => continue,
            Token::Comment(_) => return Err(parser.new_unexpected_token_error(token)),
            token => return Ok(token),
        }
    }
}

fn expect_comma<'i>(parser: &mut Parser<'i, '_>) -> Result<(), ParseError<'i, ()>> {
    match next_component(parser)? {
        Token::Comma => Ok(()),
        token => Err(parser.new_unexpected_token_error(token)),
    }
}

fn is_exhausted(parser: &mut Parser<'_, '_>) -> bool {
    loop {
        match parser.next_including_whitespace_and_comments() {
            Err(_) => return true,
            Ok(Token::WhiteSpace(_)) => {}
            Ok(_) => return false,
        }
    }
}

fn channel_kind(token: &Token<'_>) -> Option<ChannelKind> {
    match token {
        Token::Number { value, .. } if (0.0..=255.0).contains(value) => Some(ChannelKind::Number),
        Token::Percentage { unit_value, .. } if (0.0..=1.0).contains(unit_value) => {
            Some(ChannelKind::Percentage)
        }
        _ => None,
    }
}

fn is_alpha(token: &Token<'_>) -> bool {
    match token {
        Token::Number { value, .. } | Token::Percentage {
            unit_value: value, ..
        } => (0.0..=1.0).contains(value),
        _ => false,
    }
}
