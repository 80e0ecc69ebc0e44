//! Parser for CSS declaration lists.
//!
//! Renditions are stored as plain declaration lists
//! (`font-family: 'Garamond'; font-size: 10.0pt`). The grammar is the small
//! subset the writer produces: a property name, a colon and one value per
//! declaration, declarations separated by semicolons. Values are either bare
//! tokens or quoted strings; quotes are removed.

use nom::{
    branch::alt,
    bytes::complete::{take_till, take_while1},
    character::complete::{char, multispace0},
    sequence::delimited,
    IResult,
};

/// A `(property, value)` pair.
pub type Declaration = (String, String);

/// Errors raised while parsing a declaration list. Positions are byte
/// offsets into the input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CssError {
    /// Property not followed by a colon
    #[error("missing colon at position {position}")]
    MissingColon {
        /// Byte offset
        position: usize,
    },

    /// Two declarations not separated by a semicolon
    #[error("missing semicolon at position {position}")]
    MissingSemicolon {
        /// Byte offset
        position: usize,
    },

    /// Character that cannot appear at this point
    #[error("illegal character {character:?} at position {position}")]
    IllegalCharacter {
        /// Offending character
        character: char,
        /// Byte offset
        position: usize,
    },

    /// Input ended inside a declaration
    #[error("unexpected end of input")]
    UnexpectedEof,
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

fn is_value_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '#' | '%' | '+' | '!')
}

fn skip_ws(input: &str) -> &str {
    multispace0::<&str, nom::error::Error<&str>>(input)
        .map(|(rest, _)| rest)
        .unwrap_or(input)
}

fn property(input: &str) -> IResult<&str, &str> {
    take_while1(is_ident_char)(input)
}

fn bare_value(input: &str) -> IResult<&str, &str> {
    take_while1(is_value_char)(input)
}

fn quoted_value(input: &str) -> IResult<&str, &str> {
    alt((
        delimited(char('\''), take_till(|c: char| c == '\''), char('\'')),
        delimited(char('"'), take_till(|c: char| c == '"'), char('"')),
    ))(input)
}

/// Parse a declaration list.
///
/// # Examples
///
/// ```
/// use pdf_tei::style::css::{parse_declarations, CssError};
///
/// let decls = parse_declarations("font-family: 'Garamond'; font-size: 9.5pt;").unwrap();
/// assert_eq!(decls[0], ("font-family".to_string(), "Garamond".to_string()));
/// assert_eq!(decls[1].1, "9.5pt");
///
/// assert!(matches!(
///     parse_declarations("font-style italic"),
///     Err(CssError::MissingColon { .. })
/// ));
/// ```
pub fn parse_declarations(css: &str) -> Result<Vec<Declaration>, CssError> {
    let position = |rest: &str| css.len() - rest.len();
    let illegal = |rest: &str| match rest.chars().next() {
        Some(character) => CssError::IllegalCharacter {
            character,
            position: position(rest),
        },
        None => CssError::UnexpectedEof,
    };

    let mut declarations = Vec::new();
    let mut rest = skip_ws(css);

    while !rest.is_empty() {
        if let Some(after) = rest.strip_prefix(';') {
            rest = skip_ws(after);
            continue;
        }

        let (after_prop, prop) = property(rest).map_err(|_| illegal(rest))?;
        let after_ws = skip_ws(after_prop);
        let after_colon = match after_ws.chars().next() {
            None => return Err(CssError::UnexpectedEof),
            Some(':') => &after_ws[1..],
            Some(_) if after_ws.len() < after_prop.len() => {
                return Err(CssError::MissingColon {
                    position: position(after_ws),
                })
            },
            Some(_) => return Err(illegal(after_ws)),
        };

        let value_start = skip_ws(after_colon);
        if value_start.is_empty() {
            return Err(CssError::UnexpectedEof);
        }
        let (after_value, value) = if value_start.starts_with(|c: char| c == '\'' || c == '"') {
            quoted_value(value_start).map_err(|_| CssError::UnexpectedEof)?
        } else {
            bare_value(value_start).map_err(|_| illegal(value_start))?
        };
        declarations.push((prop.to_string(), value.to_string()));

        let after_ws = skip_ws(after_value);
        rest = match after_ws.chars().next() {
            None => after_ws,
            Some(';') => skip_ws(&after_ws[1..]),
            Some(_) if after_ws.len() < after_value.len() => {
                return Err(CssError::MissingSemicolon {
                    position: position(after_ws),
                })
            },
            Some(_) => return Err(illegal(after_ws)),
        };
    }

    Ok(declarations)
}
