//! Token-stream JSON parser.
//!
//! Consumes the token list produced by [`crate::lexer::Lexer`] through a
//! single forward cursor, with no backtracking, and builds one
//! [`JsonValue`] per grammar production. The entire input must form exactly
//! one document: anything left over after the top-level value is an error.

use crate::error::{Error, JsonResult};
use crate::lexer::{Lexer, Token, TokenKind};
use crate::limits::Limits;
use crate::types::{JsonArray, JsonObject, JsonValue};

/// Recursive-descent parser over a materialized token list.
pub struct Parser {
    tokens: Vec<Token>,
    cursor: usize,
    depth: u64,
    limits: Limits,
}

impl Parser {
    /// Tokenize the input and position the cursor at the first token.
    pub fn new(input: &str, limits: Limits) -> JsonResult<Self> {
        let tokens = Lexer::new(input, limits)?.scan()?;
        Ok(Self {
            tokens,
            cursor: 0,
            depth: 0,
            limits,
        })
    }

    /// Parse exactly one document and verify that nothing follows it.
    pub fn parse_document(&mut self) -> JsonResult<JsonValue> {
        let value = self.parse_value()?;
        if let Some(token) = self.tokens.get(self.cursor) {
            return Err(Error::TrailingData {
                offset: token.offset,
            });
        }
        Ok(value)
    }

    /// The current token without consuming it.
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.cursor)
    }

    /// Consume the current token if it matches `want`.
    fn eat(&mut self, want: &TokenKind) -> bool {
        match self.peek() {
            Some(token) if token.kind == *want => {
                self.cursor += 1;
                true
            }
            _ => false,
        }
    }

    /// Consume the current token, which must match `want`.
    fn expect(&mut self, want: &TokenKind) -> JsonResult<()> {
        match self.peek() {
            Some(token) if token.kind == *want => {
                self.cursor += 1;
                Ok(())
            }
            Some(token) => Err(Error::UnexpectedToken {
                text: token.kind.literal(),
                offset: token.offset,
            }),
            None => Err(Error::UnexpectedEnd),
        }
    }

    fn enter(&mut self) -> JsonResult<()> {
        self.depth += 1;
        if self.depth > self.limits.max_nesting_depth {
            return Err(Error::NestingTooDeep {
                limit: self.limits.max_nesting_depth,
            });
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    /// Parse a single JSON value.
    fn parse_value(&mut self) -> JsonResult<JsonValue> {
        let token = self.peek().cloned().ok_or(Error::UnexpectedEnd)?;
        match token.kind {
            TokenKind::String(s) => {
                self.cursor += 1;
                Ok(JsonValue::String(s))
            }
            TokenKind::Number(text) => {
                self.cursor += 1;
                parse_number(&text, token.offset)
            }
            TokenKind::Bool(b) => {
                self.cursor += 1;
                Ok(JsonValue::Bool(b))
            }
            TokenKind::Null => {
                self.cursor += 1;
                Ok(JsonValue::Null)
            }
            TokenKind::LeftBrace => self.parse_object(),
            TokenKind::LeftBracket => self.parse_array(),
            _ => Err(Error::UnexpectedToken {
                text: token.kind.literal(),
                offset: token.offset,
            }),
        }
    }

    /// Parse a JSON object.
    fn parse_object(&mut self) -> JsonResult<JsonValue> {
        self.enter()?;
        self.expect(&TokenKind::LeftBrace)?;

        let mut object = JsonObject::new();
        if !self.eat(&TokenKind::RightBrace) {
            loop {
                // The member name
                let (key, key_offset) = match self.peek().cloned() {
                    Some(Token {
                        kind: TokenKind::String(key),
                        offset,
                    }) => {
                        self.cursor += 1;
                        (key, offset)
                    }
                    Some(token) => {
                        return Err(Error::UnexpectedToken {
                            text: token.kind.literal(),
                            offset: token.offset,
                        })
                    }
                    None => return Err(Error::UnexpectedEnd),
                };
                if object.contains_key(&key) {
                    return Err(Error::DuplicateMember {
                        key,
                        offset: key_offset,
                    });
                }

                self.expect(&TokenKind::Colon)?;
                let value = self.parse_value()?;
                object.insert(key, value);

                if !self.eat(&TokenKind::Comma) {
                    break;
                }
            }
            self.expect(&TokenKind::RightBrace)?;
        }

        self.leave();
        Ok(JsonValue::Object(object))
    }

    /// Parse a JSON array.
    fn parse_array(&mut self) -> JsonResult<JsonValue> {
        self.enter()?;
        self.expect(&TokenKind::LeftBracket)?;

        let mut array = JsonArray::new();
        if !self.eat(&TokenKind::RightBracket) {
            loop {
                array.push(self.parse_value()?);
                if !self.eat(&TokenKind::Comma) {
                    break;
                }
            }
            self.expect(&TokenKind::RightBracket)?;
        }

        self.leave();
        Ok(JsonValue::Array(array))
    }
}

/// Pick a numeric tag from the literal's form: text with a decimal point or
/// exponent becomes a Double; plain integer text becomes an Int when it fits
/// 32 bits and a Double otherwise. The Int64/Uint64 tags are never produced
/// here.
fn parse_number(text: &str, offset: usize) -> JsonResult<JsonValue> {
    let invalid = || Error::InvalidNumber {
        text: text.to_string(),
        offset,
    };
    if text.contains(['.', 'e', 'E']) {
        return text.parse::<f64>().map(JsonValue::Double).map_err(|_| invalid());
    }
    match text.parse::<i64>() {
        Ok(n) => match i32::try_from(n) {
            Ok(n) => Ok(JsonValue::Int(n)),
            Err(_) => Ok(JsonValue::Double(n as f64)),
        },
        // Integer text wider than 64 bits still has a double rendition.
        Err(_) => text.parse::<f64>().map(JsonValue::Double).map_err(|_| invalid()),
    }
}

/// Parse a JSON document with the standard limits.
pub fn parse(input: &str) -> JsonResult<JsonValue> {
    parse_with_limits(input, Limits::standard())
}

/// Parse a JSON document with custom limits.
pub fn parse_with_limits(input: &str, limits: Limits) -> JsonResult<JsonValue> {
    Parser::new(input, limits)?.parse_document()
}
