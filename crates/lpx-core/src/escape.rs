use std::borrow::Cow;

/// Escapes commas, equals signs and spaces with a backslash.
///
/// Applied to tag keys, tag values and field keys. Field values, the host and
/// the measurement name are never passed through here.
pub fn escape_key(s: &str) -> Cow<'_, str> {
    if !s.contains([',', '=', ' ']) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len() + 4);
    for c in s.chars() {
        match c {
            ',' => out.push_str("\\,"),
            '=' => out.push_str("\\="),
            ' ' => out.push_str("\\ "),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::escape_key;

    #[test]
    fn plain_keys_are_borrowed() {
        assert!(matches!(escape_key("foo_bar"), Cow::Borrowed("foo_bar")));
    }

    #[test]
    fn escapes_special_chars() {
        assert_eq!(escape_key("baaz gogo"), "baaz\\ gogo");
        assert_eq!(escape_key("gu,gu"), "gu\\,gu");
        assert_eq!(escape_key("a=b"), "a\\=b");
        assert_eq!(escape_key(", = "), "\\,\\ \\=\\ ");
    }

    #[test]
    fn backslashes_pass_through() {
        assert_eq!(escape_key("a\\b"), "a\\b");
    }
}
