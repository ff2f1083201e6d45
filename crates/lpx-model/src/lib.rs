//! Data model for line protocol records: typed field values, declared fields,
//! tag sets and rendered field sets.

mod value;
pub use value::{FieldValue, ToValue, ValueRef};

mod record;
pub use record::{Field, FieldRef, Record, Slot};

mod fields;
pub use fields::FieldSet;

mod tags;
pub use tags::Tags;

mod json;
