//! Key layout of the ordered fund map.

use shared_types::FundId;

/// Prefix of every fund record key.
pub const FUND_PREFIX: &[u8] = b"fund/";

/// Key of the persisted id counter.
pub const NEXT_ID_KEY: &[u8] = b"meta/next_id";

/// Key for fund `id`: prefix plus the 20-digit zero-padded decimal id.
///
/// `u64::MAX` has 20 decimal digits, so lexicographic order equals id order.
pub fn fund_key(id: FundId) -> Vec<u8> {
    let mut key = FUND_PREFIX.to_vec();
    key.extend_from_slice(format!("{:020}", id).as_bytes());
    key
}

pub fn encode_counter(value: u64) -> [u8; 8] {
    value.to_be_bytes()
}

pub fn decode_counter(bytes: &[u8]) -> Option<u64> {
    let raw: [u8; 8] = bytes.try_into().ok()?;
    Some(u64::from_be_bytes(raw))
}
