//! Canonical CBOR preimage for block hashing.
//!
//! This module implements RFC 8949 Core Deterministic Encoding for the
//! subset a block needs:
//! - Integer keys 0-4 in fixed ascending order (single-byte CBOR)
//! - Integers use smallest valid encoding
//! - Definite lengths only, no floats
//!
//! The preimage covers every block field EXCEPT the hash itself, so two
//! independent implementations agreeing on this layout produce identical
//! hashes for identical logical content.

use ciborium::value::Value;

use crate::block::Block;

/// Preimage field keys.
///
/// Keys 0-23 encode as single bytes in CBOR.
mod keys {
    pub const HEIGHT: u64 = 0;
    pub const TIMESTAMP: u64 = 1;
    pub const PREVIOUS_HASH: u64 = 2;
    pub const OWNER: u64 = 3;
    pub const PAYLOAD: u64 = 4;
}

/// Encode a block's hashing preimage to canonical CBOR bytes.
///
/// The `hash` field is excluded by construction; there is nothing to clear
/// or restore.
pub fn hash_preimage(block: &Block) -> Vec<u8> {
    let value = block_to_cbor_value(block);
    let mut buf = Vec::new();
    encode_value_to(&mut buf, &value);
    buf
}

/// Convert a block to a CBOR Value (map with integer keys 0-4).
fn block_to_cbor_value(block: &Block) -> Value {
    let mut entries = Vec::with_capacity(5);

    entries.push((
        Value::Integer(keys::HEIGHT.into()),
        Value::Integer(block.height.into()),
    ));

    entries.push((
        Value::Integer(keys::TIMESTAMP.into()),
        Value::Integer(block.timestamp.into()),
    ));

    let prev_value = match &block.previous_hash {
        Some(hash) => Value::Bytes(hash.0.to_vec()),
        None => Value::Null,
    };
    entries.push((Value::Integer(keys::PREVIOUS_HASH.into()), prev_value));

    let owner_value = match &block.owner {
        Some(address) => Value::Bytes(address.0.to_vec()),
        None => Value::Null,
    };
    entries.push((Value::Integer(keys::OWNER.into()), owner_value));

    entries.push((
        Value::Integer(keys::PAYLOAD.into()),
        Value::Bytes(block.payload.to_vec()),
    ));

    Value::Map(entries)
}

/// Recursively encode a CBOR value.
fn encode_value_to(buf: &mut Vec<u8>, value: &Value) {
    match value {
        Value::Integer(i) => encode_integer(buf, *i),
        Value::Bytes(b) => encode_bytes(buf, b),
        Value::Null => buf.push(0xf6),
        Value::Map(entries) => encode_map(buf, entries),
        _ => unreachable!("block preimages contain only integers, bytes, null, and maps"),
    }
}

/// Encode a CBOR integer (major types 0 and 1).
fn encode_integer(buf: &mut Vec<u8>, i: ciborium::value::Integer) {
    let n: i128 = i.into();

    if n >= 0 {
        encode_uint(buf, 0, n as u64);
    } else {
        // CBOR encodes -1 as 0, -2 as 1, etc.
        let abs = (-1 - n) as u64;
        encode_uint(buf, 1, abs);
    }
}

/// Encode an unsigned integer with the given major type, smallest form.
fn encode_uint(buf: &mut Vec<u8>, major: u8, n: u64) {
    let mt = major << 5;
    if n < 24 {
        buf.push(mt | (n as u8));
    } else if n <= 0xff {
        buf.push(mt | 24);
        buf.push(n as u8);
    } else if n <= 0xffff {
        buf.push(mt | 25);
        buf.extend_from_slice(&(n as u16).to_be_bytes());
    } else if n <= 0xffffffff {
        buf.push(mt | 26);
        buf.extend_from_slice(&(n as u32).to_be_bytes());
    } else {
        buf.push(mt | 27);
        buf.extend_from_slice(&n.to_be_bytes());
    }
}

/// Encode a byte string (major type 2).
fn encode_bytes(buf: &mut Vec<u8>, bytes: &[u8]) {
    encode_uint(buf, 2, bytes.len() as u64);
    buf.extend_from_slice(bytes);
}

/// Encode a map (major type 5). Keys are already in ascending order.
fn encode_map(buf: &mut Vec<u8>, entries: &[(Value, Value)]) {
    encode_uint(buf, 5, entries.len() as u64);
    for (key, value) in entries {
        encode_value_to(buf, key);
        encode_value_to(buf, value);
    }
}
