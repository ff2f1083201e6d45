use crate::{FieldValue, ToValue, ValueRef};

/// Content of a declared field, borrowed from the record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Slot<'a> {
    /// A value with a line protocol representation.
    Value(ValueRef<'a>),
    /// A value whose type has no line protocol representation.
    ///
    /// Only dynamic records produce this; statically declared records are
    /// limited to types implementing [`ToValue`].
    Unsupported(&'static str),
    /// Declared without a wire tag. Never rendered.
    Skipped,
}

/// One declared field of a [`Record`], borrowed for the duration of an encode call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRef<'a> {
    tag: Option<&'a str>,
    slot: Slot<'a>,
}

impl<'a> FieldRef<'a> {
    /// Field emitted under the wire tag `tag`.
    pub fn new(tag: &'a str, value: ValueRef<'a>) -> Self {
        Self {
            tag: Some(tag),
            slot: Slot::Value(value),
        }
    }

    /// Tagged field holding a value of a type that cannot be encoded.
    pub fn unsupported(tag: &'a str, type_name: &'static str) -> Self {
        Self {
            tag: Some(tag),
            slot: Slot::Unsupported(type_name),
        }
    }

    /// Field with no wire tag.
    pub fn untagged() -> Self {
        Self {
            tag: None,
            slot: Slot::Skipped,
        }
    }

    /// Wire tag, if any.
    pub fn tag(&self) -> Option<&'a str> {
        self.tag
    }

    pub fn slot(&self) -> Slot<'a> {
        self.slot
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Content {
    Value(FieldValue),
    Unsupported(&'static str),
    Skipped,
}

/// Owned field, for records assembled at runtime as a `Vec<Field>`.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    tag: Option<String>,
    content: Content,
}

impl Field {
    /// Create a field emitted under the wire tag `tag`.
    pub fn new<T, V>(tag: T, value: V) -> Self
    where
        T: Into<String>,
        V: Into<FieldValue>,
    {
        Self {
            tag: Some(tag.into()),
            content: Content::Value(value.into()),
        }
    }

    /// Create a tagged field holding a value of a type that cannot be encoded.
    pub fn unsupported<T: Into<String>>(tag: T, type_name: &'static str) -> Self {
        Self {
            tag: Some(tag.into()),
            content: Content::Unsupported(type_name),
        }
    }

    /// Create a field with no wire tag.
    pub fn untagged() -> Self {
        Self {
            tag: None,
            content: Content::Skipped,
        }
    }

    /// Borrow the field without copying its value.
    pub fn view(&self) -> FieldRef<'_> {
        let slot = match &self.content {
            Content::Value(v) => Slot::Value(v.to_value()),
            Content::Unsupported(name) => Slot::Unsupported(*name),
            Content::Skipped => Slot::Skipped,
        };
        FieldRef {
            tag: self.tag.as_deref(),
            slot,
        }
    }
}

/// A structured record whose fields can be put on a measurement line.
///
/// Implementations list every declared field in declaration order, including
/// the untagged ones, as views into the record itself. The
/// [`impl_record!`](crate::impl_record) macro writes the implementation for
/// plain structs.
pub trait Record {
    fn fields(&self) -> Vec<FieldRef<'_>>;
}

impl Record for [Field] {
    fn fields(&self) -> Vec<FieldRef<'_>> {
        self.iter().map(Field::view).collect()
    }
}

impl Record for Vec<Field> {
    fn fields(&self) -> Vec<FieldRef<'_>> {
        self.as_slice().fields()
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn fields(&self) -> Vec<FieldRef<'_>> {
        (**self).fields()
    }
}

/// Implements [`Record`] for a struct by mapping its fields to wire tags.
///
/// Fields written as `name => "tag"` are emitted under `tag`; fields written
/// as a bare `name` are declared but never emitted. Tagged field types must
/// implement [`ToValue`], so unsupported types fail to compile.
///
/// ```
/// use lpx_model::{Record, impl_record};
///
/// struct Stats {
///     packets: u64,
///     ratio: f64,
///     scratch: Vec<u8>,
/// }
///
/// impl_record!(Stats {
///     packets => "pkts",
///     ratio => "ratio",
///     scratch,
/// });
///
/// let s = Stats { packets: 3, ratio: 0.5, scratch: vec![] };
/// assert_eq!(s.fields().len(), 3);
/// ```
#[macro_export]
macro_rules! impl_record {
    (@field $this:ident, $field:ident, $tag:literal) => {
        $crate::FieldRef::new($tag, $crate::ToValue::to_value(&$this.$field))
    };
    (@field $this:ident, $field:ident) => {
        $crate::FieldRef::untagged()
    };
    ($ty:ty { $($field:ident $(=> $tag:literal)?),* $(,)? }) => {
        impl $crate::Record for $ty {
            fn fields(&self) -> ::std::vec::Vec<$crate::FieldRef<'_>> {
                ::std::vec![$($crate::impl_record!(@field self, $field $(, $tag)?)),*]
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sample {
        count: u32,
        name: String,
        hidden: i64,
    }

    crate::impl_record!(Sample {
        count => "cnt",
        name => "name",
        hidden,
    });

    #[test]
    fn macro_lists_fields_in_declaration_order() {
        let p = Sample {
            count: 4,
            name: "eth0".into(),
            hidden: -1,
        };
        let _ = p.hidden;

        let fields = p.fields();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0].tag(), Some("cnt"));
        assert_eq!(fields[0].slot(), Slot::Value(ValueRef::UInt(4)));
        assert_eq!(fields[1].tag(), Some("name"));
        assert_eq!(fields[1].slot(), Slot::Value(ValueRef::Str("eth0")));
        assert_eq!(fields[2].tag(), None);
        assert_eq!(fields[2].slot(), Slot::Skipped);
    }

    #[test]
    fn macro_borrows_string_fields() {
        let p = Sample {
            count: 0,
            name: "x".repeat(64_000),
            hidden: 0,
        };
        let _ = p.hidden;

        match p.fields()[1].slot() {
            Slot::Value(ValueRef::Str(s)) => assert!(std::ptr::eq(s.as_ptr(), p.name.as_ptr())),
            other => panic!("unexpected slot: {other:?}"),
        }
    }

    #[test]
    fn unsupported_field_keeps_tag() {
        let f = Field::unsupported("blob", "array");
        let r = f.view();
        assert_eq!(r.tag(), Some("blob"));
        assert_eq!(r.slot(), Slot::Unsupported("array"));
    }

    #[test]
    fn field_lists_are_borrowed_not_copied() {
        let fields = vec![Field::new("a", "payload"), Field::untagged()];

        let refs = fields.fields();
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[1], FieldRef::untagged());
        match refs[0].slot() {
            Slot::Value(ValueRef::Str(s)) => match &fields[0].content {
                Content::Value(FieldValue::Str(owned)) => {
                    assert!(std::ptr::eq(s.as_ptr(), owned.as_ptr()))
                }
                other => panic!("unexpected content: {other:?}"),
            },
            other => panic!("unexpected slot: {other:?}"),
        }
        assert_eq!(fields.as_slice().fields(), refs);
    }
}
