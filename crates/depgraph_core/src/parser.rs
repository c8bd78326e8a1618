use anyhow::{Context, Result};
use log::{debug, trace};
use std::{fs, path::Path};
use thiserror::Error;

use crate::{
    constants::GO_EXTENSION,
    types::Specifier,
};

/// Reads the import declarations of a single source file.
pub trait ImportExtractor {
    /// Extension (without the dot) of the files this extractor understands
    fn extension(&self) -> &str;

    fn imports_for(&self, file: &Path) -> Result<Vec<Specifier>>;
}

/// Extracts imports from Go source files.
///
/// Only the package clause and the leading import declarations are scanned;
/// the first declaration that is not an `import` ends the scan.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoImportExtractor;

impl ImportExtractor for GoImportExtractor {
    fn extension(&self) -> &str {
        GO_EXTENSION
    }

    fn imports_for(&self, file: &Path) -> Result<Vec<Specifier>> {
        trace!("Parsing file for imports: {}", file.display());
        let src = fs::read_to_string(file)
            .with_context(|| format!("Failed to read {}", file.display()))?;

        let specs =
            parse_imports(&src).with_context(|| format!("Failed to parse {}", file.display()))?;

        debug!("Found {} import specifiers in {}", specs.len(), file.display());
        Ok(specs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {message}")]
pub struct SyntaxError {
    pub line: usize,
    pub message: String,
}

/// Parses the package clause and import declarations of Go source text.
///
/// A leading byte order mark is ignored.
pub fn parse_imports(src: &str) -> Result<Vec<Specifier>, SyntaxError> {
    let src = src.strip_prefix('\u{FEFF}').unwrap_or(src);
    let mut scanner = Scanner::new(src);
    let mut specs = Vec::new();

    scanner.skip_trivia()?;
    if !scanner.eat_keyword("package") {
        return Err(scanner.error("expected 'package'"));
    }
    scanner.skip_trivia()?;
    if scanner.ident().is_none() {
        return Err(scanner.error("expected package name"));
    }

    loop {
        scanner.skip_trivia()?;
        if !scanner.eat_keyword("import") {
            break;
        }
        scanner.skip_trivia()?;

        if scanner.eat(b'(') {
            loop {
                scanner.skip_trivia()?;
                if scanner.eat(b')') {
                    break;
                }
                if scanner.at_end() {
                    return Err(scanner.error("import group not closed"));
                }
                specs.push(scanner.import_spec()?);
                scanner.end_of_spec(true)?;
            }
        } else {
            specs.push(scanner.import_spec()?);
            scanner.end_of_spec(false)?;
        }
    }

    Ok(specs)
}

struct Scanner<'a> {
    src: &'a str,
    pos: usize,
    line: usize,
}

impl<'a> Scanner<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0, line: 1 }
    }

    fn error(&self, message: &str) -> SyntaxError {
        SyntaxError { line: self.line, message: message.to_string() }
    }

    fn peek(&self) -> Option<u8> {
        self.src.as_bytes().get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.src.as_bytes().get(self.pos + offset).copied()
    }

    fn at_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    fn bump(&mut self) {
        if self.peek() == Some(b'\n') {
            self.line += 1;
        }
        self.pos += 1;
    }

    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Skips whitespace, comments and semicolons.
    fn skip_trivia(&mut self) -> Result<(), SyntaxError> {
        while let Some(b) = self.peek() {
            match b {
                b' ' | b'\t' | b'\r' | b'\n' | b';' => self.bump(),
                b'/' if self.peek_at(1) == Some(b'/') => {
                    while let Some(c) = self.peek() {
                        if c == b'\n' {
                            break;
                        }
                        self.bump();
                    }
                }
                b'/' if self.peek_at(1) == Some(b'*') => {
                    self.block_comment()?;
                }
                _ => break,
            }
        }
        Ok(())
    }

    /// Consumes a `/* */` comment and reports whether it spanned lines.
    fn block_comment(&mut self) -> Result<bool, SyntaxError> {
        let start_line = self.line;
        self.bump();
        self.bump();
        loop {
            match self.peek() {
                None => {
                    return Err(SyntaxError {
                        line: start_line,
                        message: "comment not terminated".to_string(),
                    });
                }
                Some(b'*') if self.peek_at(1) == Some(b'/') => {
                    self.bump();
                    self.bump();
                    return Ok(self.line != start_line);
                }
                Some(_) => self.bump(),
            }
        }
    }

    /// An import spec must be followed by a line break, a `;`, the end of the
    /// input or, inside a group, the closing `)`.
    fn end_of_spec(&mut self, in_group: bool) -> Result<(), SyntaxError> {
        while let Some(b) = self.peek() {
            match b {
                b' ' | b'\t' | b'\r' => self.bump(),
                b'\n' | b';' => return Ok(()),
                b')' if in_group => return Ok(()),
                b'/' if self.peek_at(1) == Some(b'/') => return Ok(()),
                b'/' if self.peek_at(1) == Some(b'*') => {
                    if self.block_comment()? {
                        return Ok(());
                    }
                }
                _ => return Err(self.error("expected ';' after import spec")),
            }
        }
        Ok(())
    }

    fn ident_len(&self) -> usize {
        let bytes = &self.src.as_bytes()[self.pos..];
        match bytes.first() {
            Some(b) if is_ident_start(*b) => {
                bytes.iter().take_while(|b| is_ident_start(**b) || b.is_ascii_digit()).count()
            }
            _ => 0,
        }
    }

    fn ident(&mut self) -> Option<&'a str> {
        let len = self.ident_len();
        if len == 0 {
            return None;
        }
        let word = &self.src[self.pos..self.pos + len];
        self.pos += len;
        Some(word)
    }

    fn eat_keyword(&mut self, keyword: &str) -> bool {
        let len = self.ident_len();
        if &self.src[self.pos..self.pos + len] == keyword {
            self.pos += len;
            true
        } else {
            false
        }
    }

    fn import_spec(&mut self) -> Result<Specifier, SyntaxError> {
        // The optional package name (`f`, `.` or `_`) does not affect the graph
        match self.peek() {
            Some(b'"') | Some(b'`') => {}
            Some(b'.') => self.bump(),
            _ => {
                if self.ident().is_none() {
                    return Err(self.error("expected import path"));
                }
            }
        }

        self.skip_trivia()?;
        let line = self.line;
        let request = self.string_literal()?.to_string();
        trace!("Found import {} on line {}", request, line);
        Ok(Specifier { request, line })
    }

    /// Returns the literal text, delimiters included.
    fn string_literal(&mut self) -> Result<&'a str, SyntaxError> {
        let start = self.pos;
        match self.peek() {
            Some(b'"') => {
                self.bump();
                loop {
                    match self.peek() {
                        None | Some(b'\n') => {
                            return Err(self.error("string literal not terminated"));
                        }
                        Some(b'\\') => {
                            self.bump();
                            if self.at_end() {
                                return Err(self.error("string literal not terminated"));
                            }
                            self.bump();
                        }
                        Some(b'"') => {
                            self.bump();
                            break;
                        }
                        Some(_) => self.bump(),
                    }
                }
            }
            Some(b'`') => {
                let start_line = self.line;
                self.bump();
                loop {
                    match self.peek() {
                        None => {
                            return Err(SyntaxError {
                                line: start_line,
                                message: "raw string literal not terminated".to_string(),
                            });
                        }
                        Some(b'`') => {
                            self.bump();
                            break;
                        }
                        Some(_) => self.bump(),
                    }
                }
            }
            _ => return Err(self.error("expected import path")),
        }
        Ok(&self.src[start..self.pos])
    }
}

fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b >= 0x80
}
