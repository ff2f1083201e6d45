//! Conversion of typed field values into line protocol text.

use std::fmt::Write;

use lpx_model::{Slot, ValueRef};

use crate::error::{EncodeError, EncodeResult};

/// Largest string field value accepted, in bytes.
pub const MAX_STRING_LEN: usize = 64_000;

/// Whether integer values carry the `i` type suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeMode {
    /// Integers render as `42i`.
    #[default]
    Static,
    /// Integers render as bare decimals (`42`).
    Untyped,
}

/// Renders the content of a declared field.
///
/// `tag` is only used to name the field in errors.
pub fn render_slot(tag: &str, slot: Slot<'_>, mode: TypeMode) -> EncodeResult<String> {
    match slot {
        Slot::Value(v) => render_value(tag, v, mode),
        Slot::Unsupported(type_name) => Err(EncodeError::UnsupportedType {
            tag: tag.to_owned(),
            type_name,
        }),
        // Untagged fields never reach conversion; treat a tagged one like a type
        // with no representation.
        Slot::Skipped => Err(EncodeError::UnsupportedType {
            tag: tag.to_owned(),
            type_name: "skipped",
        }),
    }
}

/// Renders one value in its exact wire form.
pub fn render_value(tag: &str, value: ValueRef<'_>, mode: TypeMode) -> EncodeResult<String> {
    let out = match value {
        ValueRef::Str(s) => {
            if s.len() > MAX_STRING_LEN {
                return Err(EncodeError::ValueTooLarge {
                    tag: tag.to_owned(),
                    len: s.len(),
                });
            }
            quote(s)
        }
        ValueRef::Int(i) => integer(i, mode),
        ValueRef::UInt(u) => integer(u, mode),
        ValueRef::F32(f) => float(f.is_nan(), f.is_infinite(), f < 0.0, || format!("{f:e}")),
        ValueRef::F64(f) => float(f.is_nan(), f.is_infinite(), f < 0.0, || format!("{f:e}")),
        ValueRef::Bool(b) => b.to_string(),
        ValueRef::Time(t) => t.unix_timestamp_nanos().to_string(),
    };
    Ok(out)
}

fn integer<T: std::fmt::Display>(v: T, mode: TypeMode) -> String {
    match mode {
        TypeMode::Static => format!("{v}i"),
        TypeMode::Untyped => v.to_string(),
    }
}

/// Double-quotes a string value.
///
/// Quotes and backslashes are escaped. Control characters and line or
/// paragraph separators are written as escape sequences (`\a`, `\x00`,
/// `\u2028`), so the value never splits the line.
fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\x07' => out.push_str("\\a"),
            '\x08' => out.push_str("\\b"),
            '\x0c' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\x0b' => out.push_str("\\v"),
            '\0'..='\x1f' | '\x7f' => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            '\u{2028}' | '\u{2029}' => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Lays out a float in `%g` style from its shortest scientific form.
///
/// `sci` must produce Rust's `{:e}` output (`d[.ddd]e[-]x`), which holds the
/// shortest digits that round-trip at the value's own width. Exponent notation
/// is used when the decimal exponent is below -4 or at least 6.
fn float(nan: bool, inf: bool, negative: bool, sci: impl FnOnce() -> String) -> String {
    if nan {
        return "NaN".to_owned();
    }
    if inf {
        return if negative { "-Inf" } else { "+Inf" }.to_owned();
    }

    let sci = sci();
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return sci;
    };
    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(m) => ("-", m),
        None => ("", mantissa),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    let mut out = String::with_capacity(digits.len() + 8);
    out.push_str(sign);

    if exp < -4 || exp >= 6 {
        out.push_str(&digits[..1]);
        if digits.len() > 1 {
            out.push('.');
            out.push_str(&digits[1..]);
        }
        out.push('e');
        out.push(if exp < 0 { '-' } else { '+' });
        out.push_str(&format!("{:02}", exp.unsigned_abs()));
    } else if exp < 0 {
        out.push_str("0.");
        for _ in 0..(-exp - 1) {
            out.push('0');
        }
        out.push_str(&digits);
    } else {
        let int_len = exp as usize + 1;
        if digits.len() <= int_len {
            out.push_str(&digits);
            for _ in digits.len()..int_len {
                out.push('0');
            }
        } else {
            out.push_str(&digits[..int_len]);
            out.push('.');
            out.push_str(&digits[int_len..]);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;

    use lpx_model::ToValue;

    fn render(v: impl ToValue) -> String {
        render_value("t", v.to_value(), TypeMode::Static).unwrap()
    }

    fn render_untyped(v: impl ToValue) -> String {
        render_value("t", v.to_value(), TypeMode::Untyped).unwrap()
    }

    #[test]
    fn integers_carry_suffix_unless_untyped() {
        assert_eq!(render(1u64), "1i");
        assert_eq!(render(-3i64), "-3i");
        assert_eq!(render(u64::MAX), "18446744073709551615i");
        assert_eq!(render(i8::MIN), "-128i");

        assert_eq!(render_untyped(1u64), "1");
        assert_eq!(render_untyped(-3i64), "-3");
    }

    #[test]
    fn untyped_mode_only_touches_integers() {
        assert_eq!(render_untyped(1.5f64), render(1.5f64));
        assert_eq!(render_untyped("x"), render("x"));
        assert_eq!(render_untyped(true), render(true));
    }

    #[test]
    fn strings_are_quoted_and_escaped() {
        assert_eq!(render("foobar\"baz"), "\"foobar\\\"baz\"");
        assert_eq!(render("a\\b"), "\"a\\\\b\"");
        assert_eq!(render("l1\nl2\tx"), "\"l1\\nl2\\tx\"");
        assert_eq!(render(""), "\"\"");
        assert_eq!(render("with space, comma=eq"), "\"with space, comma=eq\"");
    }

    #[test]
    fn control_characters_are_escaped() {
        assert_eq!(render("a\x07b"), "\"a\\ab\"");
        assert_eq!(render("a\0b"), "\"a\\x00b\"");
        assert_eq!(render("\x08\x0b\x0c"), "\"\\b\\v\\f\"");
        assert_eq!(render("\x1b[0m\x7f"), "\"\\x1b[0m\\x7f\"");
        assert_eq!(render("l1\u{2028}l2\u{2029}"), "\"l1\\u2028l2\\u2029\"");
        assert_eq!(render("\u{85}"), "\"\\u0085\"");
        assert_eq!(render("h\u{e9}llo \u{1f600}"), "\"h\u{e9}llo \u{1f600}\"");
    }

    #[test]
    fn string_length_limit_is_inclusive() {
        let ok = "#".repeat(MAX_STRING_LEN);
        assert!(render_value("s", ok.to_value(), TypeMode::Static).is_ok());

        let long = "#".repeat(70_000);
        let err = render_value("s", long.to_value(), TypeMode::Static).unwrap_err();
        match err {
            EncodeError::ValueTooLarge { tag, len } => {
                assert_eq!(tag, "s");
                assert_eq!(len, 70_000);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn floats_use_shortest_digits() {
        assert_eq!(render(std::f32::consts::PI), "3.1415927");
        assert_eq!(render(std::f64::consts::PI), "3.141592653589793");
        assert_eq!(render(1.29e-24f64), "1.29e-24");
        assert_eq!(render(0.1f32), "0.1");
        assert_eq!(render(1.5f64), "1.5");
        assert_eq!(render(-2.25f64), "-2.25");
    }

    #[test]
    fn float_layout_switches_to_exponent_form() {
        assert_eq!(render(0.0f64), "0");
        assert_eq!(render(100.0f64), "100");
        assert_eq!(render(123456.0f64), "123456");
        assert_eq!(render(1e6f64), "1e+06");
        assert_eq!(render(1234567.0f64), "1.234567e+06");
        assert_eq!(render(0.0001f64), "0.0001");
        assert_eq!(render(0.00001f64), "1e-05");
        assert_eq!(render(-1e100f64), "-1e+100");
    }

    #[test]
    fn non_finite_floats() {
        assert_eq!(render(f64::NAN), "NaN");
        assert_eq!(render(f64::INFINITY), "+Inf");
        assert_eq!(render(f32::NEG_INFINITY), "-Inf");
    }

    #[test]
    fn booleans_are_bare_literals() {
        assert_eq!(render(true), "true");
        assert_eq!(render(false), "false");
    }

    #[test]
    fn instants_are_unix_nanos_without_suffix() {
        let t = OffsetDateTime::from_unix_timestamp_nanos(1_500_000_000_123_456_789).unwrap();
        assert_eq!(render(t), "1500000000123456789");
        assert_eq!(render_untyped(t), "1500000000123456789");
    }

    #[test]
    fn unsupported_slot_names_the_tag() {
        let err = render_slot("blob", Slot::Unsupported("array"), TypeMode::Static).unwrap_err();
        match err {
            EncodeError::UnsupportedType { tag, type_name } => {
                assert_eq!(tag, "blob");
                assert_eq!(type_name, "array");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
