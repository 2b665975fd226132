//! Request extractors.

mod id_path;
mod validated_json;

pub use id_path::{IdPath, NUMERIC_ID_EXPECTED};
pub use validated_json::{collect_messages, ValidatedJson};
