mod ser;
mod writer;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::Serialize;

use crate::{EncodeOptions, Result};
use ser::LsfSerializer;
use writer::Writer;

/// Encode a record, or a sequence of records, as LSF text.
///
/// A record is anything that serializes as a map or struct whose values are
/// scalars or sequences of scalars. Every record becomes one `$o~` object;
/// sequences become repeated `$v~` values under the same field.
///
/// # Examples
/// ```
/// use serde_json::json;
///
/// let lsf = lsf::encode::to_string(
///     &json!({"name": "Ada", "age": 37, "tags": ["a", "b"]}),
///     &lsf::EncodeOptions::default(),
/// )?;
/// assert_eq!(lsf, "$o~$f~name$v~Ada$f~age$v~37$t~n$f~tags$v~a$v~b");
/// # Ok::<(), lsf::Error>(())
/// ```
///
/// Nested maps are rejected, naming the field:
/// ```
/// use serde_json::json;
///
/// let err = lsf::encode::to_string(
///     &json!({"user": {"id": 1}}),
///     &lsf::EncodeOptions::default(),
/// )
/// .unwrap_err();
/// assert!(err.to_string().contains("'user'"));
/// ```
pub fn to_string<T: ?Sized + Serialize>(value: &T, options: &EncodeOptions) -> Result<String> {
    let mut writer = Writer::new(options);
    value.serialize(LsfSerializer::document(&mut writer))?;
    Ok(writer.finish())
}

pub fn to_vec<T: ?Sized + Serialize>(value: &T, options: &EncodeOptions) -> Result<Vec<u8>> {
    to_string(value, options).map(String::into_bytes)
}

fn encode_record<T: Serialize>(record: &T, options: &EncodeOptions) -> Result<String> {
    let mut writer = Writer::new(options);
    record.serialize(LsfSerializer::record(&mut writer))?;
    Ok(writer.finish())
}

/// Encode each record as its own object, in order. With the `parallel`
/// feature the records are encoded on the rayon pool; the output is the same.
#[cfg(feature = "parallel")]
pub fn encode_records<T: Serialize + Sync>(records: &[T], options: &EncodeOptions) -> Result<String> {
    let parts = records
        .par_iter()
        .map(|record| encode_record(record, options))
        .collect::<Result<Vec<String>>>()?;
    Ok(parts.concat())
}

/// Encode each record as its own object, in order. With the `parallel`
/// feature the records are encoded on the rayon pool; the output is the same.
#[cfg(not(feature = "parallel"))]
pub fn encode_records<T: Serialize>(records: &[T], options: &EncodeOptions) -> Result<String> {
    let mut out = String::new();
    for record in records {
        out.push_str(&encode_record(record, options)?);
    }
    Ok(out)
}
