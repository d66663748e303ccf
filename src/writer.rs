//! JSON serializer.
//!
//! Walks a [`JsonValue`] tree and renders indented text: tab indentation, one
//! member/element per line, `key : value` members, commas after every
//! non-final entry, and the closing bracket back at the outer depth. Empty
//! containers render as `{}`/`[]` with no interior whitespace. Serialization
//! cannot fail; every tree has a rendition.

use std::fmt::Write as _;

use crate::types::{JsonArray, JsonObject, JsonValue};

/// Serializer that renders one [`JsonValue`] tree to text.
struct JsonWriter {
    output: String,
    depth: usize,
}

impl JsonWriter {
    fn new() -> Self {
        Self {
            output: String::new(),
            depth: 0,
        }
    }

    fn render(mut self, value: &JsonValue) -> String {
        self.write_value(value);
        self.output
    }

    fn write_value(&mut self, value: &JsonValue) {
        match value {
            JsonValue::Null => self.output.push_str("null"),
            JsonValue::Bool(true) => self.output.push_str("true"),
            JsonValue::Bool(false) => self.output.push_str("false"),
            JsonValue::Int(n) => {
                let mut buffer = itoa::Buffer::new();
                self.output.push_str(buffer.format(*n));
            }
            JsonValue::Int64(n) => {
                let mut buffer = itoa::Buffer::new();
                self.output.push_str(buffer.format(*n));
            }
            JsonValue::Uint64(n) => {
                let mut buffer = itoa::Buffer::new();
                self.output.push_str(buffer.format(*n));
            }
            JsonValue::Double(d) => {
                let mut buffer = ryu::Buffer::new();
                self.output.push_str(buffer.format(*d));
            }
            JsonValue::String(s) => self.write_string(s),
            JsonValue::Object(object) => self.write_object(object),
            JsonValue::Array(array) => self.write_array(array),
        }
    }

    fn write_object(&mut self, object: &JsonObject) {
        if object.is_empty() {
            self.output.push_str("{}");
            return;
        }
        self.output.push_str("{\n");
        self.depth += 1;
        let last = object.len() - 1;
        for (i, (key, value)) in object.iter().enumerate() {
            self.indent();
            self.write_string(key);
            self.output.push_str(" : ");
            self.write_value(value);
            if i != last {
                self.output.push(',');
            }
            self.output.push('\n');
        }
        self.depth -= 1;
        self.indent();
        self.output.push('}');
    }

    fn write_array(&mut self, array: &JsonArray) {
        if array.is_empty() {
            self.output.push_str("[]");
            return;
        }
        self.output.push_str("[\n");
        self.depth += 1;
        let last = array.len() - 1;
        for (i, value) in array.iter().enumerate() {
            self.indent();
            self.write_value(value);
            if i != last {
                self.output.push(',');
            }
            self.output.push('\n');
        }
        self.depth -= 1;
        self.indent();
        self.output.push(']');
    }

    fn write_string(&mut self, value: &str) {
        self.output.push('"');
        for ch in value.chars() {
            match ch {
                '"' => self.output.push_str("\\\""),
                '\\' => self.output.push_str("\\\\"),
                '\u{8}' => self.output.push_str("\\b"),
                '\u{c}' => self.output.push_str("\\f"),
                '\n' => self.output.push_str("\\n"),
                '\r' => self.output.push_str("\\r"),
                '\t' => self.output.push_str("\\t"),
                c if c < ' ' => {
                    let _ = write!(self.output, "\\u{:04x}", c as u32);
                }
                c => self.output.push(c),
            }
        }
        self.output.push('"');
    }

    fn indent(&mut self) {
        for _ in 0..self.depth {
            self.output.push('\t');
        }
    }
}

/// Render a [`JsonValue`] tree as indented JSON text.
pub fn write(value: &JsonValue) -> String {
    JsonWriter::new().render(value)
}
