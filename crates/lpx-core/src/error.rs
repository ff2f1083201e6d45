use thiserror::Error;

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("{tag}: unsupported type for line protocol: {type_name}")]
    UnsupportedType { tag: String, type_name: &'static str },

    #[error(
        "{tag}: string too long ({len} bytes, max. {max})",
        max = crate::convert::MAX_STRING_LEN
    )]
    ValueTooLarge { tag: String, len: usize },

    #[error("sink write failed: {0}")]
    Sink(#[source] std::io::Error),
}

impl EncodeError {
    /// Stable label for metrics.
    #[inline]
    pub fn kind(&self) -> &'static str {
        match self {
            EncodeError::UnsupportedType { .. } => "unsupported_type",
            EncodeError::ValueTooLarge { .. } => "value_too_large",
            EncodeError::Sink(_) => "sink_write",
        }
    }
}

pub type EncodeResult<T> = Result<T, EncodeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_tag() {
        let e = EncodeError::ValueTooLarge {
            tag: "payload".into(),
            len: 70000,
        };
        assert_eq!(
            e.to_string(),
            "payload: string too long (70000 bytes, max. 64000)"
        );

        let e = EncodeError::UnsupportedType {
            tag: "blob".into(),
            type_name: "array",
        };
        assert_eq!(e.to_string(), "blob: unsupported type for line protocol: array");
    }

    #[test]
    fn sink_error_is_kept_as_source() {
        use std::error::Error as _;

        let e = EncodeError::Sink(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone"));
        assert_eq!(e.kind(), "sink_write");
        let src = e.source().expect("source must be set");
        assert_eq!(src.to_string(), "gone");
    }
}
