use lpx_model::{FieldSet, Record};
use tracing::trace;

use crate::{
    convert::{TypeMode, render_slot},
    error::EncodeResult,
};

/// Renders every tagged field of `record`, keyed by wire tag.
///
/// Untagged fields are skipped. The first conversion failure aborts the whole
/// extraction and nothing rendered so far is returned. A record with no tagged
/// fields yields an empty set.
pub fn extract_fields<R>(record: &R, mode: TypeMode) -> EncodeResult<FieldSet>
where
    R: Record + ?Sized,
{
    let mut out = FieldSet::new();
    for (idx, field) in record.fields().iter().enumerate() {
        let Some(tag) = field.tag() else {
            trace!(field = idx, "skipping untagged field");
            continue;
        };
        let repr = render_slot(tag, field.slot(), mode)?;
        out.insert(tag, repr);
    }
    Ok(out)
}
