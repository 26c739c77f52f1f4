//! Reading source files as text.
//!
//! Each file's encoding is detected on its own, so a tree mixing UTF-8 and
//! GBK sources decodes correctly. Byte sequences that are invalid under the
//! detected encoding become U+FFFD and the result is flagged as lossy.

use std::fs;
use std::path::Path;

use chardetng::EncodingDetector;
use encoding_rs::Encoding;

use crate::error::SwcrError;
use crate::Result;

/// Decoded contents of one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub text: String,
    /// Name of the encoding used to decode, e.g. `UTF-8` or `GBK`
    pub encoding: &'static str,
    /// Whether any replacement characters were inserted
    pub lossy: bool,
}

/// Detect the encoding of `bytes` and decode them.
///
/// A byte order mark wins over the detector's guess.
pub fn decode(bytes: &[u8]) -> DecodedText {
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let guess: &'static Encoding = detector.guess(None, true);

    let (text, used, had_errors) = guess.decode(bytes);

    DecodedText {
        text: text.into_owned(),
        encoding: used.name(),
        lossy: had_errors,
    }
}

/// Read and decode a source file.
///
/// A file that cannot be opened or read is an error; undecodable content is not.
pub fn read_source(path: impl AsRef<Path>) -> Result<DecodedText> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| SwcrError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let decoded = decode(&bytes);
    tracing::info!(
        "input_file: {}, encoding: {}",
        path.display(),
        decoded.encoding
    );
    if decoded.lossy {
        tracing::warn!(
            "{}: invalid {} sequences replaced with U+FFFD",
            path.display(),
            decoded.encoding
        );
    }

    Ok(decoded)
}
