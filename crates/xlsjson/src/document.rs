//! Document assembly and JSON rendering.

use serde::Serialize;
use serde::ser::Error as _;
use serde_json::ser::{PrettyFormatter, Serializer};
use xlsjson_io_xlsx::TypeRecord;

use crate::conf::C_JSON_INDENT;
use crate::spec::{ConvertError, SpecDocument, SpecDocumentMetadata};

/// Wrap sanitized records with their summary block.
pub fn build_document(headers: Vec<String>, records: Vec<TypeRecord>) -> SpecDocument {
    SpecDocument {
        metadata: SpecDocumentMetadata {
            total_records: records.len(),
            field_count: headers.len(),
            fields: headers,
        },
        data: records,
    }
}

/// Render `document` as indented JSON with non-ASCII text kept literal.
///
/// Fails with [`ConvertError::Serialize`] when a value has no JSON form,
/// e.g. a non-finite number that skipped sanitization.
pub fn serialize_document(document: &SpecDocument) -> Result<String, ConvertError> {
    let mut v_buf = Vec::with_capacity(128 * (document.data.len() + 1));
    let mut serializer =
        Serializer::with_formatter(&mut v_buf, PrettyFormatter::with_indent(C_JSON_INDENT));
    document.serialize(&mut serializer)?;

    String::from_utf8(v_buf).map_err(|e| ConvertError::Serialize(serde_json::Error::custom(e)))
}
