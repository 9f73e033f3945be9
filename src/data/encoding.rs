//! Text Encoding Module
//! Detects the character encoding of an uploaded file and decodes it to UTF-8.

use super::loader::LoaderError;
use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use tracing::debug;

/// Text decoded from raw bytes along with the encoding that was used.
#[derive(Debug, Clone)]
pub struct DecodedText {
    pub text: String,
    pub encoding: &'static Encoding,
}

/// Guess the encoding of `bytes`. A byte-order mark wins over the statistical guess.
pub fn detect_encoding(bytes: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return encoding;
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    detector.guess(None, true)
}

/// Detect the encoding and decode without replacement characters.
///
/// Bytes that are malformed in the detected encoding fail with
/// [`LoaderError::Decode`] rather than being silently replaced.
pub fn decode(bytes: &[u8]) -> Result<DecodedText, LoaderError> {
    if bytes.is_empty() {
        return Err(LoaderError::EmptyInput);
    }

    let (encoding, body) = match Encoding::for_bom(bytes) {
        Some((encoding, bom_len)) => (encoding, &bytes[bom_len..]),
        None => (detect_encoding(bytes), bytes),
    };
    debug!(encoding = encoding.name(), len = bytes.len(), "detected encoding");

    let text = encoding
        .decode_without_bom_handling_and_without_replacement(body)
        .ok_or(LoaderError::Decode {
            encoding: encoding.name(),
        })?;

    Ok(DecodedText {
        text: text.into_owned(),
        encoding,
    })
}
