use std::fmt::Write as _;

use lpx_model::{FieldSet, Tags};

use crate::{clock::Clock, escape::escape_key};

/// Assembles one line protocol line.
///
/// Layout: `<prefix>,host=<host>[,<tag>=<value>...] <field>=<value>[,...] <nanos>\n`.
/// Tags and fields come out in ascending key order, keys escaped, tag values
/// escaped, field values verbatim. Returns an empty string when `fields` is
/// empty; the clock is only read for non-empty lines.
pub fn format_line(
    prefix: &str,
    host: &str,
    tags: &Tags,
    fields: &FieldSet,
    clock: &dyn Clock,
) -> String {
    if fields.is_empty() {
        return String::new();
    }

    let mut line = String::with_capacity(64 + prefix.len() + host.len());
    line.push_str(prefix);
    line.push_str(",host=");
    line.push_str(host);

    for (k, v) in tags.iter() {
        line.push(',');
        line.push_str(&escape_key(k));
        line.push('=');
        line.push_str(&escape_key(v));
    }

    line.push(' ');
    for (i, (k, v)) in fields.iter().enumerate() {
        if i > 0 {
            line.push(',');
        }
        line.push_str(&escape_key(k));
        line.push('=');
        line.push_str(v);
    }

    // Writing into a String cannot fail.
    let _ = writeln!(line, " {}", clock.now_unix_nanos());
    line
}
