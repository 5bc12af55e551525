//! Deterministic writer for pbxproj documents
//!
//! Output is a fixed point: parsing what this writer emits and writing
//! the result again produces byte-identical text. Xcode's annotation
//! comments are not reproduced; the file stays valid input for Xcode.

use super::lexer::is_word_char;
use super::value::Value;

/// Serialize a document to pbxproj text, including the encoding header.
pub fn write_document(value: &Value) -> String {
    let mut out = String::from("// !$*UTF8*$!\n");
    write_value(&mut out, value, 0);
    out.push('\n');
    out
}

fn write_value(out: &mut String, value: &Value, depth: usize) {
    match value {
        Value::String(value) => write_string(out, value),
        Value::Dict(dict) => {
            out.push_str("{\n");
            for (key, entry) in dict {
                push_indent(out, depth + 1);
                write_string(out, key);
                out.push_str(" = ");
                write_value(out, entry, depth + 1);
                out.push_str(";\n");
            }
            push_indent(out, depth);
            out.push('}');
        }
        Value::Array(items) => {
            out.push_str("(\n");
            for item in items {
                push_indent(out, depth + 1);
                write_value(out, item, depth + 1);
                out.push_str(",\n");
            }
            push_indent(out, depth);
            out.push(')');
        }
    }
}

fn write_string(out: &mut String, value: &str) {
    if !needs_quoting(value) {
        out.push_str(value);
        return;
    }
    out.push('"');
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            ch => out.push(ch),
        }
    }
    out.push('"');
}

fn needs_quoting(value: &str) -> bool {
    value.is_empty() || value.chars().any(|ch| !is_word_char(ch))
}

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push('\t');
    }
}
