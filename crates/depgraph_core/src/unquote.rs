//! Decoding of Go string literals.
//!
//! Import tokens are recorded exactly as written; `unquote` turns a token into
//! the package identifier it names, following the Go literal rules. `quote`
//! goes the other way for package identifiers that are printed as graph nodes.

use std::{fmt::Write, str::Chars};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnquoteError {
    #[error("missing quote delimiters")]
    MissingQuotes,
    #[error("newline in string literal")]
    Newline,
    #[error("unescaped quote in string literal")]
    StrayQuote,
    #[error("invalid escape sequence '\\{0}'")]
    InvalidEscape(char),
    #[error("escape sequence at end of string literal")]
    TruncatedEscape,
    #[error("invalid code point {0:#x}")]
    InvalidCodePoint(u32),
    #[error("string literal is not valid UTF-8")]
    InvalidUtf8,
}

/// Strips the delimiters of an interpreted (`"..."`) or raw (`` `...` ``)
/// string literal and decodes its escape sequences.
pub fn unquote(raw: &str) -> Result<String, UnquoteError> {
    if raw.len() < 2 {
        return Err(UnquoteError::MissingQuotes);
    }

    if let Some(body) = raw.strip_prefix('`').and_then(|r| r.strip_suffix('`')) {
        if body.contains('`') {
            return Err(UnquoteError::StrayQuote);
        }
        return Ok(body.replace('\r', ""));
    }

    let body = raw
        .strip_prefix('"')
        .and_then(|r| r.strip_suffix('"'))
        .ok_or(UnquoteError::MissingQuotes)?;

    let mut out: Vec<u8> = Vec::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        match c {
            '"' => return Err(UnquoteError::StrayQuote),
            '\n' => return Err(UnquoteError::Newline),
            '\\' => unescape(&mut chars, &mut out)?,
            c => push_char(&mut out, c),
        }
    }

    String::from_utf8(out).map_err(|_| UnquoteError::InvalidUtf8)
}

/// Wraps `s` in double quotes, escaping it as a Go interpreted string literal.
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{07}' => out.push_str("\\a"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0b}' => out.push_str("\\v"),
            c if (c as u32) < 0x20 || c == '\u{7f}' => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c if c.is_control() || c == '\u{FEFF}' => {
                if (c as u32) <= 0xffff {
                    let _ = write!(out, "\\u{:04x}", c as u32);
                } else {
                    let _ = write!(out, "\\U{:08x}", c as u32);
                }
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

fn unescape(chars: &mut Chars<'_>, out: &mut Vec<u8>) -> Result<(), UnquoteError> {
    let c = chars.next().ok_or(UnquoteError::TruncatedEscape)?;
    match c {
        'a' => out.push(0x07),
        'b' => out.push(0x08),
        'f' => out.push(0x0c),
        'n' => out.push(b'\n'),
        'r' => out.push(b'\r'),
        't' => out.push(b'\t'),
        'v' => out.push(0x0b),
        '\\' => out.push(b'\\'),
        '"' => out.push(b'"'),
        'x' => {
            let value = hex_digits(chars, 2, c)?;
            out.push(value as u8);
        }
        'u' | 'U' => {
            let width = if c == 'u' { 4 } else { 8 };
            let value = hex_digits(chars, width, c)?;
            let decoded = char::from_u32(value).ok_or(UnquoteError::InvalidCodePoint(value))?;
            push_char(out, decoded);
        }
        '0'..='7' => {
            let mut value = c.to_digit(8).unwrap_or_default();
            for _ in 0..2 {
                let digit = chars
                    .next()
                    .and_then(|d| d.to_digit(8))
                    .ok_or(UnquoteError::InvalidEscape(c))?;
                value = value * 8 + digit;
            }
            if value > 0xff {
                return Err(UnquoteError::InvalidEscape(c));
            }
            out.push(value as u8);
        }
        other => return Err(UnquoteError::InvalidEscape(other)),
    }
    Ok(())
}

fn hex_digits(chars: &mut Chars<'_>, width: usize, escape: char) -> Result<u32, UnquoteError> {
    let mut value = 0u32;
    for _ in 0..width {
        let digit = chars
            .next()
            .ok_or(UnquoteError::TruncatedEscape)?
            .to_digit(16)
            .ok_or(UnquoteError::InvalidEscape(escape))?;
        value = value * 16 + digit;
    }
    Ok(value)
}

fn push_char(out: &mut Vec<u8>, c: char) {
    let mut buf = [0u8; 4];
    out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
}
