use std::time::SystemTime;

use time::OffsetDateTime;

/// A typed value that has a line protocol representation.
///
/// The set of variants is closed: only types listed here can be carried on a
/// measurement line. Integers of every width collapse into [`FieldValue::Int`] or
/// [`FieldValue::UInt`] and keep their sign. Floats keep their width so they render
/// with the shortest digits for that width.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// UTF-8 string, rendered quoted.
    Str(String),
    /// Signed integer of any width.
    Int(i64),
    /// Unsigned integer of any width.
    UInt(u64),
    /// Single precision float.
    F32(f32),
    /// Double precision float.
    F64(f64),
    /// Boolean.
    Bool(bool),
    /// Point in time, rendered as nanoseconds since the Unix epoch.
    Time(OffsetDateTime),
}

macro_rules! from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for FieldValue {
            fn from(v: $t) -> Self {
                FieldValue::Int(v as i64)
            }
        })*
    };
}

macro_rules! from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for FieldValue {
            fn from(v: $t) -> Self {
                FieldValue::UInt(v as u64)
            }
        })*
    };
}

from_signed!(i8, i16, i32, i64, isize);
from_unsigned!(u8, u16, u32, u64, usize);

impl From<f32> for FieldValue {
    fn from(v: f32) -> Self {
        FieldValue::F32(v)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::F64(v)
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::Bool(v)
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Str(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Str(v.to_owned())
    }
}

impl From<OffsetDateTime> for FieldValue {
    fn from(v: OffsetDateTime) -> Self {
        FieldValue::Time(v)
    }
}

impl From<SystemTime> for FieldValue {
    fn from(v: SystemTime) -> Self {
        FieldValue::Time(OffsetDateTime::from(v))
    }
}

/// Borrowed view of a field value, read while encoding.
///
/// Strings are borrowed; every other variant is a copy of a scalar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueRef<'a> {
    Str(&'a str),
    Int(i64),
    UInt(u64),
    F32(f32),
    F64(f64),
    Bool(bool),
    Time(OffsetDateTime),
}

/// Types that can be viewed as a [`ValueRef`] without copying their contents.
pub trait ToValue {
    fn to_value(&self) -> ValueRef<'_>;
}

macro_rules! to_value {
    ($variant:ident as $cast:ty: $($t:ty),*) => {
        $(impl ToValue for $t {
            #[inline]
            fn to_value(&self) -> ValueRef<'_> {
                ValueRef::$variant(*self as $cast)
            }
        })*
    };
}

to_value!(Int as i64: i8, i16, i32, i64, isize);
to_value!(UInt as u64: u8, u16, u32, u64, usize);
impl ToValue for f32 {
    #[inline]
    fn to_value(&self) -> ValueRef<'_> {
        ValueRef::F32(*self)
    }
}

impl ToValue for f64 {
    #[inline]
    fn to_value(&self) -> ValueRef<'_> {
        ValueRef::F64(*self)
    }
}

impl ToValue for bool {
    #[inline]
    fn to_value(&self) -> ValueRef<'_> {
        ValueRef::Bool(*self)
    }
}

impl ToValue for str {
    #[inline]
    fn to_value(&self) -> ValueRef<'_> {
        ValueRef::Str(self)
    }
}

impl ToValue for String {
    #[inline]
    fn to_value(&self) -> ValueRef<'_> {
        ValueRef::Str(self)
    }
}

impl ToValue for OffsetDateTime {
    #[inline]
    fn to_value(&self) -> ValueRef<'_> {
        ValueRef::Time(*self)
    }
}

impl ToValue for SystemTime {
    fn to_value(&self) -> ValueRef<'_> {
        ValueRef::Time(OffsetDateTime::from(*self))
    }
}

impl ToValue for FieldValue {
    fn to_value(&self) -> ValueRef<'_> {
        match self {
            FieldValue::Str(s) => ValueRef::Str(s),
            FieldValue::Int(i) => ValueRef::Int(*i),
            FieldValue::UInt(u) => ValueRef::UInt(*u),
            FieldValue::F32(f) => ValueRef::F32(*f),
            FieldValue::F64(f) => ValueRef::F64(*f),
            FieldValue::Bool(b) => ValueRef::Bool(*b),
            FieldValue::Time(t) => ValueRef::Time(*t),
        }
    }
}

impl<T: ToValue + ?Sized> ToValue for &T {
    #[inline]
    fn to_value(&self) -> ValueRef<'_> {
        (**self).to_value()
    }
}
