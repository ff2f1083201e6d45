#![cfg(feature = "json")]

//! Dynamic records backed by JSON objects.
//!
//! Every key of the object is a wire tag. Strings, numbers and booleans map to
//! [`ValueRef`]; `null`, arrays and nested objects have no line protocol
//! representation and are declared as unsupported fields.

use serde_json::{Map, Number, Value};

use crate::{FieldRef, Record, ValueRef};

impl Record for Map<String, Value> {
    fn fields(&self) -> Vec<FieldRef<'_>> {
        self.iter().map(|(tag, v)| json_field(tag, v)).collect()
    }
}

fn json_field<'a>(tag: &'a str, value: &'a Value) -> FieldRef<'a> {
    match value {
        Value::String(s) => FieldRef::new(tag, ValueRef::Str(s)),
        Value::Bool(b) => FieldRef::new(tag, ValueRef::Bool(*b)),
        Value::Number(n) => FieldRef::new(tag, json_number(n)),
        Value::Null => FieldRef::unsupported(tag, "null"),
        Value::Array(_) => FieldRef::unsupported(tag, "array"),
        Value::Object(_) => FieldRef::unsupported(tag, "object"),
    }
}

fn json_number(n: &Number) -> ValueRef<'static> {
    if let Some(i) = n.as_i64() {
        ValueRef::Int(i)
    } else if let Some(u) = n.as_u64() {
        ValueRef::UInt(u)
    } else {
        ValueRef::F64(n.as_f64().unwrap_or(f64::NAN))
    }
}
