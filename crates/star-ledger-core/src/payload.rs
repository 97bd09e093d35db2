//! The claim payload codec: hex-of-UTF-8 text with a JSON record inside.
//!
//! Payloads are stored as hex-encoded text so the chain carries only an
//! opaque blob; `decode(encode(x)) == x` holds for every valid record.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A decoded star-ownership claim.
///
/// `owner` duplicates the wallet address hex inside the payload, matching
/// the owner field stamped on the block itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarRecord {
    /// The claimed star data, opaque to the ledger.
    pub star: serde_json::Value,
    /// Wallet address hex of the claimant.
    pub owner: String,
}

/// Encode text to its hex payload form.
pub fn encode_text(text: &str) -> Bytes {
    Bytes::from(hex::encode(text.as_bytes()))
}

/// Decode a hex payload back to its original text.
pub fn decode_text(payload: &[u8]) -> Result<String, CoreError> {
    let hex_str = std::str::from_utf8(payload)
        .map_err(|e| CoreError::PayloadEncoding(e.to_string()))?;
    let raw = hex::decode(hex_str).map_err(|e| CoreError::PayloadEncoding(e.to_string()))?;
    String::from_utf8(raw).map_err(|e| CoreError::PayloadEncoding(e.to_string()))
}

/// Encode a claim record: JSON inside the hex layer.
pub fn encode_record(record: &StarRecord) -> Result<Bytes, CoreError> {
    let json = serde_json::to_string(record)
        .map_err(|e| CoreError::PayloadEncoding(e.to_string()))?;
    Ok(encode_text(&json))
}

/// Decode a claim record from a hex payload.
pub fn decode_record(payload: &[u8]) -> Result<StarRecord, CoreError> {
    let text = decode_text(payload)?;
    serde_json::from_str(&text).map_err(|e| CoreError::MalformedClaim(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_text_roundtrip() {
        let text = "First Block";
        let payload = encode_text(text);
        assert_eq!(decode_text(&payload).unwrap(), text);
    }

    #[test]
    fn test_record_roundtrip() {
        let record = StarRecord {
            star: serde_json::json!({"dec": "68° 52' 56.9", "ra": "16h 29m 1.0s", "story": "found it"}),
            owner: "ab".repeat(32),
        };
        let payload = encode_record(&record).unwrap();
        assert_eq!(decode_record(&payload).unwrap(), record);
    }

    #[test]
    fn test_decode_rejects_non_hex() {
        assert!(matches!(
            decode_text(b"zz-not-hex"),
            Err(CoreError::PayloadEncoding(_))
        ));
    }

    #[test]
    fn test_decode_record_rejects_plain_text() {
        // Valid hex text, but not a JSON claim record.
        let payload = encode_text("Genesis Block");
        assert!(matches!(
            decode_record(&payload),
            Err(CoreError::MalformedClaim(_))
        ));
    }

    proptest! {
        #[test]
        fn prop_text_roundtrip(text in "\\PC{0,64}") {
            let payload = encode_text(&text);
            prop_assert_eq!(decode_text(&payload).unwrap(), text);
        }
    }
}
