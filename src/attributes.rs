//! Lexer and accessors for HLS attribute lists.
//!
//! Tag bodies like `BANDWIDTH=5000000,CODECS="avc1.4d401f,mp4a.40.2"` are
//! lexed into an ordered [`AttributeList`]. The lexer is deliberately
//! relaxed compared to RFC 8216 §4.2: whitespace is tolerated around `=`
//! and `,`, single quotes are accepted alongside double quotes, an
//! unterminated quote runs to the end of the line, and a token without
//! `=` is kept as a positional value under the empty key.
//!
//! Values keep their surrounding quotes verbatim; only
//! [`AttributeList::get_unquoted`] strips them. Keys are normalized to
//! lowercase ASCII with `-` replaced by `_`.

use nom::branch::alt;
use nom::bytes::complete::{take, take_till};
use nom::character::complete::{char, i64 as dec_i64, space0};
use nom::combinator::{map, opt, peek, recognize};
use nom::multi::fold_many0;
use nom::number::complete::double;
use nom::sequence::tuple;
use nom::IResult;

/// A single `key=value` pair from an attribute list.
///
/// `key` is normalized (`[a-z0-9_]` for well-formed input); `value` is the
/// raw token, quotes included. Positional values carry an empty key.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub key: String,
    pub value: String,
}

/// An ordered attribute list, as it appeared in the input.
///
/// Duplicate keys are kept; lookups return the first occurrence.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AttributeList(Vec<Attribute>);

impl AttributeList {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.0.iter()
    }

    /// First value for `key`, verbatim (quotes preserved).
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|a| a.key == key)
            .map(|a| a.value.as_str())
    }

    /// First value for `key` as an owned string, verbatim.
    pub fn get_owned(&self, key: &str) -> Option<String> {
        self.get(key).map(str::to_string)
    }

    /// First value for `key` with balanced surrounding quotes removed.
    pub fn get_unquoted(&self, key: &str) -> Option<String> {
        self.get(key).map(|v| strip_quotes(v).to_string())
    }

    /// First value for `key` as a base-10 integer (leading sign allowed,
    /// trailing garbage ignored). `None` when absent or malformed.
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(lead_i64)
    }

    /// First value for `key` as a double, `strtod`-style. `None` when
    /// absent or malformed.
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(lead_f64)
    }
}

impl From<Vec<Attribute>> for AttributeList {
    fn from(attrs: Vec<Attribute>) -> Self {
        AttributeList(attrs)
    }
}

/// Lex the portion of a tag line after its `:` separator.
///
/// Total: malformed input yields whatever pairs could be extracted.
pub fn parse_attribute_list(input: &str) -> AttributeList {
    let attrs = fold_many0(attribute, Vec::new, |mut acc, attr| {
        if let Some(attr) = attr {
            acc.push(attr);
        }
        acc
    })(input)
    .map(|(_, attrs)| attrs)
    .unwrap_or_default();
    AttributeList(attrs)
}

fn attribute(i: &str) -> IResult<&str, Option<Attribute>> {
    // Don't accept empty inputs here
    peek(take(1usize))(i)?;

    let (i, _) = space0(i)?;
    let (i, token) = take_till(|c| c == '=' || c == ',')(i)?;
    let (i, eq) = opt(char('='))(i)?;

    if eq.is_none() {
        // Positional value, empty key
        let (i, _) = opt(char(','))(i)?;
        let value = token.trim_matches(|c| c == ' ' || c == '\t');
        let attr = if value.is_empty() {
            None
        } else {
            Some(Attribute {
                key: String::new(),
                value: value.to_string(),
            })
        };
        return Ok((i, attr));
    }

    let (i, _) = space0(i)?;
    let (i, value) = attribute_value(i)?;
    // Anything between a closing quote and the next comma is dropped
    let (i, _) = take_till(|c| c == ',')(i)?;
    let (i, _) = opt(char(','))(i)?;

    Ok((
        i,
        Some(Attribute {
            key: normalize_key(token),
            value: value.to_string(),
        }),
    ))
}

fn attribute_value(i: &str) -> IResult<&str, &str> {
    alt((quoted('"'), quoted('\''), unquoted))(i)
}

/// A quoted value, surrounding quotes included. An unterminated quote
/// consumes through the end of the input.
fn quoted(quote: char) -> impl Fn(&str) -> IResult<&str, &str> {
    move |i| {
        recognize(tuple((
            char(quote),
            take_till(move |c| c == quote),
            opt(char(quote)),
        )))(i)
    }
}

fn unquoted(i: &str) -> IResult<&str, &str> {
    map(take_till(|c| c == ','), |v: &str| {
        v.trim_end_matches(|c| c == ' ' || c == '\t')
    })(i)
}

/// Lowercase ASCII, `-` → `_`, trailing whitespace trimmed.
fn normalize_key(raw: &str) -> String {
    raw.trim_end_matches(|c| c == ' ' || c == '\t')
        .chars()
        .map(|c| if c == '-' { '_' } else { c.to_ascii_lowercase() })
        .collect()
}

/// Remove one balanced pair of surrounding ASCII quotes, if present.
pub(crate) fn strip_quotes(v: &str) -> &str {
    let b = v.as_bytes();
    if b.len() >= 2 {
        let (first, last) = (b[0], b[b.len() - 1]);
        if (first == b'"' && last == b'"') || (first == b'\'' && last == b'\'') {
            return &v[1..v.len() - 1];
        }
    }
    v
}

/// Base-10 integer prefix of `v`, `strtoll`-style.
pub(crate) fn lead_i64(v: &str) -> Option<i64> {
    dec_i64::<_, nom::error::Error<&str>>(v.trim_start())
        .ok()
        .map(|(_, n)| n)
}

/// Double prefix of `v`, `strtod`-style.
pub(crate) fn lead_f64(v: &str) -> Option<f64> {
    double::<_, nom::error::Error<&str>>(v.trim_start())
        .ok()
        .map(|(_, n)| n)
}

// -----------------------------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------------------------
