//! Fixed-layout binary records describing per-nation end state.
//!
//! A `mask.info` file is a concatenation of 140-byte records: 128 bytes
//! of NUL-padded name followed by three little-endian `u32` fields
//! (`id`, `last_update`, `current_d`).

use serde::{Deserialize, Serialize};

/// Length of the NUL-padded name field.
pub const NAME_LEN: usize = 128;

/// Length of one encoded record.
pub const RECORD_LEN: usize = NAME_LEN + 4 + 4 + 4;

/// Binary record decoding errors.
#[derive(thiserror::Error, Debug)]
pub enum DecodeError {
    /// A single record was not exactly [`RECORD_LEN`] bytes.
    #[error("record is {0} bytes, expected {RECORD_LEN}")]
    BadRecordLength(usize),

    /// A record buffer was not a multiple of [`RECORD_LEN`] bytes.
    #[error("record buffer is {0} bytes, not a multiple of {RECORD_LEN}")]
    BadBufferLength(usize),

    /// The name field was not valid UTF-8.
    #[error("record name is not valid UTF-8")]
    BadName(#[from] std::str::Utf8Error),
}

fn read_u32_le(data: &[u8], offset: usize) -> u32 {
    let mut word = [0u8; 4];
    word.copy_from_slice(&data[offset..offset + 4]);
    u32::from_le_bytes(word)
}

/// One nation's state at the end of a test-case run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nation {
    /// Nation name; functions as the unique key within a collection.
    pub name: String,
    /// Numeric identifier; names the nation's `<id>.log` file.
    pub id: u32,
    /// Number of valid bits in the nation's log.
    pub last_update: u32,
    /// Value of the nation's counter at the end of the run.
    pub current_d: u32,
}

impl Nation {
    /// Decode a single record from exactly [`RECORD_LEN`] bytes.
    ///
    /// The name is the leading [`NAME_LEN`] bytes with trailing NULs
    /// trimmed; it must be valid UTF-8.
    pub fn from_bytes(data: &[u8]) -> Result<Self, DecodeError> {
        if data.len() != RECORD_LEN {
            return Err(DecodeError::BadRecordLength(data.len()));
        }
        let raw_name = &data[..NAME_LEN];
        let name_end = raw_name.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
        let name = std::str::from_utf8(&raw_name[..name_end])?.to_string();
        Ok(Self {
            name,
            id: read_u32_le(data, NAME_LEN),
            last_update: read_u32_le(data, NAME_LEN + 4),
            current_d: read_u32_le(data, NAME_LEN + 8),
        })
    }

    /// Encode the record into its fixed 140-byte layout.
    ///
    /// Names longer than [`NAME_LEN`] bytes are truncated.
    pub fn to_bytes(&self) -> [u8; RECORD_LEN] {
        let mut out = [0u8; RECORD_LEN];
        let name = self.name.as_bytes();
        let len = name.len().min(NAME_LEN);
        out[..len].copy_from_slice(&name[..len]);
        out[NAME_LEN..NAME_LEN + 4].copy_from_slice(&self.id.to_le_bytes());
        out[NAME_LEN + 4..NAME_LEN + 8].copy_from_slice(&self.last_update.to_le_bytes());
        out[NAME_LEN + 8..NAME_LEN + 12].copy_from_slice(&self.current_d.to_le_bytes());
        out
    }
}

/// Decode a concatenated buffer of records, in file order.
///
/// The buffer length must be an exact multiple of [`RECORD_LEN`].
pub fn parse_mask_info(data: &[u8]) -> Result<Vec<Nation>, DecodeError> {
    if data.len() % RECORD_LEN != 0 {
        return Err(DecodeError::BadBufferLength(data.len()));
    }
    data.chunks_exact(RECORD_LEN).map(Nation::from_bytes).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nation(name: &str) -> Nation {
        Nation {
            name: name.to_string(),
            id: 7,
            last_update: 1234,
            current_d: 42,
        }
    }

    #[test]
    fn round_trip() {
        let original = nation("Freedonia");
        let decoded = Nation::from_bytes(&original.to_bytes()).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn name_trims_trailing_nuls_only() {
        let mut encoded = nation("a\u{0}b").to_bytes();
        let decoded = Nation::from_bytes(&encoded).unwrap();
        assert_eq!(decoded.name, "a\u{0}b");

        // An all-NUL name decodes as empty.
        encoded[..NAME_LEN].fill(0);
        assert_eq!(Nation::from_bytes(&encoded).unwrap().name, "");
    }

    #[test]
    fn rejects_wrong_record_length() {
        assert!(matches!(
            Nation::from_bytes(&[0u8; RECORD_LEN - 1]),
            Err(DecodeError::BadRecordLength(_))
        ));
        assert!(matches!(
            Nation::from_bytes(&[0u8; RECORD_LEN + 1]),
            Err(DecodeError::BadRecordLength(_))
        ));
    }

    #[test]
    fn rejects_non_utf8_name() {
        let mut encoded = nation("x").to_bytes();
        encoded[0] = 0xFF;
        assert!(matches!(
            Nation::from_bytes(&encoded),
            Err(DecodeError::BadName(_))
        ));
    }

    #[test]
    fn parses_records_in_file_order() {
        let mut buffer = Vec::new();
        buffer.extend_from_slice(&nation("first").to_bytes());
        buffer.extend_from_slice(&nation("second").to_bytes());

        let nations = parse_mask_info(&buffer).unwrap();
        assert_eq!(nations.len(), 2);
        assert_eq!(nations[0].name, "first");
        assert_eq!(nations[1].name, "second");
    }

    #[test]
    fn rejects_buffer_with_partial_record() {
        assert!(parse_mask_info(&[0u8; RECORD_LEN]).is_ok());
        assert!(matches!(
            parse_mask_info(&[0u8; RECORD_LEN + 1]),
            Err(DecodeError::BadBufferLength(_))
        ));
        assert!(matches!(
            parse_mask_info(&[0u8; 139]),
            Err(DecodeError::BadBufferLength(_))
        ));
    }

    #[test]
    fn empty_buffer_is_an_empty_collection() {
        assert!(parse_mask_info(&[]).unwrap().is_empty());
    }
}
