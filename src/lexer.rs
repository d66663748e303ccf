//! JSON tokenizer.
//!
//! Converts the full input text into a flat, ordered token list in one pass
//! before any parsing happens. Only single-character lookahead is used within
//! a token; there is no backtracking across tokens. Each token records the
//! byte offset of its first character so later stages can report positions.

use crate::error::{Error, JsonResult};
use crate::limits::Limits;

/// Token kinds produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// Left brace `{`
    LeftBrace,
    /// Right brace `}`
    RightBrace,
    /// Left bracket `[`
    LeftBracket,
    /// Right bracket `]`
    RightBracket,
    /// Colon `:`
    Colon,
    /// Comma `,`
    Comma,
    /// String value (escape sequences already decoded)
    String(String),
    /// Number value, kept as raw text until the parser picks a width
    Number(String),
    /// Boolean literal
    Bool(bool),
    /// Null literal (also produced by the non-standard `undefined` extension)
    Null,
}

impl TokenKind {
    /// Literal text of this token, as used in error messages.
    pub fn literal(&self) -> String {
        match self {
            TokenKind::LeftBrace => "{".to_string(),
            TokenKind::RightBrace => "}".to_string(),
            TokenKind::LeftBracket => "[".to_string(),
            TokenKind::RightBracket => "]".to_string(),
            TokenKind::Colon => ":".to_string(),
            TokenKind::Comma => ",".to_string(),
            TokenKind::String(s) => s.clone(),
            TokenKind::Number(text) => text.clone(),
            TokenKind::Bool(true) => "true".to_string(),
            TokenKind::Bool(false) => "false".to_string(),
            TokenKind::Null => "null".to_string(),
        }
    }
}

/// A single token together with its byte offset in the input.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The token kind and payload.
    pub kind: TokenKind,
    /// Byte offset of the token's first character.
    pub offset: usize,
}

/// JSON lexer that materializes the token list for one document.
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str, limits: Limits) -> JsonResult<Self> {
        if input.len() as u64 > limits.max_input_size {
            return Err(Error::InputTooLarge {
                size: input.len() as u64,
                limit: limits.max_input_size,
            });
        }
        Ok(Self { input, pos: 0 })
    }

    /// Scan the whole input, producing the finalized token list.
    pub fn scan(mut self) -> JsonResult<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            self.skip_whitespace();
            let offset = self.pos;
            let Some(b) = self.peek() else {
                break;
            };
            let kind = match b {
                b'{' => {
                    self.advance();
                    TokenKind::LeftBrace
                }
                b'}' => {
                    self.advance();
                    TokenKind::RightBrace
                }
                b'[' => {
                    self.advance();
                    TokenKind::LeftBracket
                }
                b']' => {
                    self.advance();
                    TokenKind::RightBracket
                }
                b':' => {
                    self.advance();
                    TokenKind::Colon
                }
                b',' => {
                    self.advance();
                    TokenKind::Comma
                }
                b'"' => self.read_string()?,
                b'-' | b'0'..=b'9' => self.read_number(),
                b't' | b'f' => self.read_bool()?,
                b'n' => self.read_keyword("null")?,
                b'u' => self.read_keyword("undefined")?,
                other => {
                    return Err(Error::UnexpectedStartSequence {
                        found: self.char_here().unwrap_or(other as char),
                        offset,
                    })
                }
            };
            tokens.push(Token { kind, offset });
        }
        Ok(tokens)
    }

    /// Peek at the current byte without consuming it.
    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    /// Consume and return the current byte.
    fn advance(&mut self) -> Option<u8> {
        let b = self.peek();
        if b.is_some() {
            self.pos += 1;
        }
        b
    }

    /// The full character at the current position, if any.
    fn char_here(&self) -> Option<char> {
        self.input.get(self.pos..).and_then(|rest| rest.chars().next())
    }

    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
            self.advance();
        }
    }

    /// Read a string token, decoding escape sequences.
    fn read_string(&mut self) -> JsonResult<TokenKind> {
        let start = self.pos;
        // Consume opening quote
        self.advance();

        let mut text = String::new();
        loop {
            match self.advance() {
                None => return Err(Error::UnterminatedString { offset: start }),
                Some(b'"') => break,
                Some(b'\\') => {
                    let offset = self.pos;
                    match self.advance() {
                        None => return Err(Error::UnterminatedString { offset: start }),
                        Some(b'/') => text.push('/'),
                        Some(b'"') => text.push('"'),
                        Some(b'\\') => text.push('\\'),
                        Some(b'b') => text.push('\u{8}'),
                        Some(b'f') => text.push('\u{c}'),
                        Some(b'n') => text.push('\n'),
                        Some(b'r') => text.push('\r'),
                        Some(b't') => text.push('\t'),
                        Some(other) => {
                            let found = if other < 0x80 {
                                other as char
                            } else {
                                self.pos -= 1;
                                self.char_here().unwrap_or(char::REPLACEMENT_CHARACTER)
                            };
                            return Err(Error::UnrecognizedEscape { found, offset });
                        }
                    }
                }
                Some(b) if b < 0x80 => text.push(b as char),
                Some(_) => {
                    // Multi-byte UTF-8 sequence; step back and copy the
                    // full character.
                    self.pos -= 1;
                    match self.char_here() {
                        Some(ch) => {
                            text.push(ch);
                            self.pos += ch.len_utf8();
                        }
                        None => return Err(Error::UnterminatedString { offset: start }),
                    }
                }
            }
        }
        Ok(TokenKind::String(text))
    }

    /// Read a number token: the maximal run of numeric characters, with no
    /// semantic validation. Malformed text is surfaced at parse time.
    fn read_number(&mut self) -> TokenKind {
        let start = self.pos;
        while let Some(b'0'..=b'9' | b'.' | b'e' | b'E' | b'-' | b'+') = self.peek() {
            self.advance();
        }
        TokenKind::Number(self.input.get(start..self.pos).unwrap_or("").to_string())
    }

    /// Read a boolean literal: exactly 4 or 5 characters depending on the
    /// first one, which must spell `true` or `false` exactly.
    fn read_bool(&mut self) -> JsonResult<TokenKind> {
        let offset = self.pos;
        let len = if self.peek() == Some(b'f') { 5 } else { 4 };
        let mut text = String::new();
        for _ in 0..len {
            match self.advance() {
                Some(b) => text.push(b as char),
                None => break,
            }
        }
        match text.as_str() {
            "true" => Ok(TokenKind::Bool(true)),
            "false" => Ok(TokenKind::Bool(false)),
            _ => Err(Error::InvalidLiteral { text, offset }),
        }
    }

    /// Read a keyword literal (`null`, or the non-standard `undefined` extension),
    /// stopping early at whitespace so the error names what was actually
    /// present.
    fn read_keyword(&mut self, expected: &str) -> JsonResult<TokenKind> {
        let offset = self.pos;
        let mut text = String::new();
        for _ in 0..expected.len() {
            match self.peek() {
                None | Some(b' ' | b'\t' | b'\n' | b'\r') => break,
                Some(b) => {
                    text.push(b as char);
                    self.advance();
                }
            }
        }
        if text == expected {
            Ok(TokenKind::Null)
        } else {
            Err(Error::InvalidLiteral { text, offset })
        }
    }
}
