//! Proptest generators for ledger inputs.

use proptest::prelude::*;
use star_ledger_core::StarRecord;

/// Printable payload text, including the empty string.
pub fn payload_text() -> impl Strategy<Value = String> {
    "\\PC{0,128}"
}

/// A star record with arbitrary coordinates and story, owned by a
/// fixed-format hex address.
pub fn star_record() -> impl Strategy<Value = StarRecord> {
    (
        "[0-9]{1,2}h [0-9]{1,2}m [0-9]{1,2}\\.[0-9]s",
        "-?[0-9]{1,2}° [0-9]{1,2}' [0-9]{1,2}\\.[0-9]",
        "\\PC{0,64}",
        proptest::array::uniform32(any::<u8>()),
    )
        .prop_map(|(ra, dec, story, owner)| StarRecord {
            star: serde_json::json!({ "ra": ra, "dec": dec, "story": story }),
            owner: hex::encode(owner),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use star_ledger_core::payload::{decode_record, encode_record};
    use star_ledger_core::Block;

    proptest! {
        #[test]
        fn prop_star_record_roundtrip(record in star_record()) {
            let payload = encode_record(&record).unwrap();
            prop_assert_eq!(decode_record(&payload).unwrap(), record);
        }

        #[test]
        fn prop_any_text_survives_a_block(text in payload_text()) {
            let block = Block::new(&text).seal(1, 1_700_000_000, None);
            prop_assert!(block.validate());
            prop_assert_eq!(block.decode_payload().unwrap(), text);
        }
    }
}
