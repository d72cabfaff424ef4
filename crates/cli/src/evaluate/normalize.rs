// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Normalization of the `tags` / `tags_all` attributes.
//!
//! Scanners hand tag data over in several shapes: a plain object, a
//! single-element list wrapping an object (HCL blocks), an empty
//! structure, `null`, or nothing at all. Both scan modes see the same
//! [`LabelField`] so they only differ in how they interpret it.

use serde_json::{Map, Value};

/// Canonical view of one tag attribute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LabelField<'a> {
    /// Attribute missing or `null`.
    Absent,
    /// Present but holds nothing (`{}`, `[]`, `[{}]`, `""`, ...).
    Empty,
    /// Non-empty mapping of tag name to value.
    Map(&'a Map<String, Value>),
    /// Non-empty value that is not a mapping.
    Other(&'a Value),
}

impl<'a> LabelField<'a> {
    pub fn is_absent(&self) -> bool {
        matches!(self, LabelField::Absent)
    }

    /// True when the attribute holds something (mapping or not).
    pub fn is_populated(&self) -> bool {
        matches!(self, LabelField::Map(_) | LabelField::Other(_))
    }

    pub fn as_map(&self) -> Option<&'a Map<String, Value>> {
        match *self {
            LabelField::Map(m) => Some(m),
            _ => None,
        }
    }
}

/// Normalize a raw attribute value.
///
/// A non-empty list is unwrapped once: its first element is used when
/// truthy, otherwise the attribute counts as empty.
pub fn normalize(value: Option<&Value>) -> LabelField<'_> {
    match value {
        None | Some(Value::Null) => LabelField::Absent,
        Some(Value::Array(items)) => match items.first() {
            None => LabelField::Empty,
            Some(first) => classify(first),
        },
        Some(other) => classify(other),
    }
}

fn classify(value: &Value) -> LabelField<'_> {
    match value {
        Value::Object(map) if !map.is_empty() => LabelField::Map(map),
        v if is_truthy(v) => LabelField::Other(v),
        _ => LabelField::Empty,
    }
}

/// Truthiness of a JSON value: `null`, `false`, zero and empty
/// containers are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// True when a tag value carries no usable text.
///
/// Numbers and booleans always render to something and count as set.
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
