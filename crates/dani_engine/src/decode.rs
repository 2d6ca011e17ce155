use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use serde_json::Value;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("failed to decode bytes with {encoding}: {message}")]
    Charset { encoding: String, message: String },
    #[error("body is not valid json: {message}")]
    InvalidJson { message: String },
    #[error("body has no `list` field")]
    MissingList,
    #[error("`list` field is {found}, expected an array")]
    ListNotArray { found: &'static str },
}

impl DecodeError {
    /// True when the body parsed but did not have the expected shape.
    pub fn is_schema(&self) -> bool {
        matches!(self, DecodeError::MissingList | DecodeError::ListNotArray { .. })
    }
}

/// Decode a ranking response into its records.
pub fn decode_page(bytes: &[u8], content_type: Option<&str>) -> Result<Vec<Value>, DecodeError> {
    let text = decode_text(bytes, content_type)?;
    let value: Value = serde_json::from_str(&text).map_err(|err| DecodeError::InvalidJson {
        message: err.to_string(),
    })?;

    let Value::Object(mut body) = value else {
        return Err(DecodeError::MissingList);
    };
    match body.remove("list") {
        Some(Value::Array(records)) => Ok(records),
        Some(other) => Err(DecodeError::ListNotArray {
            found: json_kind(&other),
        }),
        None => Err(DecodeError::MissingList),
    }
}

/// Decode raw bytes into UTF-8 using: BOM -> Content-Type charset -> chardetng fallback.
pub fn decode_text(bytes: &[u8], content_type: Option<&str>) -> Result<String, DecodeError> {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return decode_with(bytes, encoding);
    }

    if let Some(label) = content_type.and_then(extract_charset) {
        if let Some(enc) = Encoding::for_label(label.as_bytes()) {
            return decode_with(bytes, enc);
        }
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let enc = detector.guess(None, true);
    decode_with(bytes, enc)
}

fn extract_charset(content_type: &str) -> Option<String> {
    content_type
        .split(';')
        .filter_map(|part| {
            let (key, value) = part.trim().split_once('=')?;
            key.trim()
                .eq_ignore_ascii_case("charset")
                .then(|| value.trim_matches(&[' ', '"', '\''][..]).to_string())
        })
        .next()
}

fn decode_with(bytes: &[u8], enc: &'static Encoding) -> Result<String, DecodeError> {
    let (text, _, had_errors) = enc.decode(bytes);
    if had_errors {
        return Err(DecodeError::Charset {
            encoding: enc.name().to_string(),
            message: "decoding error".into(),
        });
    }
    Ok(text.into_owned())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
