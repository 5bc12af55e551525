//! Document values for OpenStep-style property lists

use indexmap::IndexMap;

/// An order-preserving dictionary of document entries.
///
/// Parsed entries keep their file order and new entries append, so a
/// parse/write cycle never reshuffles a document.
pub type Dict = IndexMap<String, Value>;

/// A single value in a pbxproj document.
///
/// Every scalar is a string; numbers and booleans only exist as their
/// textual representation.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Array(Vec<Value>),
    Dict(Dict),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_dict(&self) -> Option<&Dict> {
        match self {
            Value::Dict(dict) => Some(dict),
            _ => None,
        }
    }

    pub fn as_dict_mut(&mut self) -> Option<&mut Dict> {
        match self {
            Value::Dict(dict) => Some(dict),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}
