//! Record codec
//!
//! Framing for every durable record (metadata and segments alike).
//!
//! ## Frame Format
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │ Magic: "FKV1" (4) | Version: u16 (2)                     │
//! ├──────────────────────────────────────────────────────────┤
//! │ CRC32 of payload: u32 (4) | PayloadLen: u32 (4)          │
//! ├──────────────────────────────────────────────────────────┤
//! │ Payload: bincode-encoded record (variable)               │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Decode validates magic, version, length, and CRC before handing the
//! payload to bincode, so a truncated or bit-flipped record surfaces as
//! `CorruptRecord` rather than a garbage deserialization.

use bytes::{Buf, BufMut, Bytes, BytesMut};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{FatError, Result};

/// Magic bytes identifying a fatkv record
pub const MAGIC: &[u8; 4] = b"FKV1";

/// Current record format version
pub const VERSION: u16 = 1;

/// Frame header size: Magic (4) + Version (2) + CRC (4) + PayloadLen (4)
pub const FRAME_HEADER_SIZE: usize = 14;

/// Encode a record into a framed byte buffer
pub fn encode_record<T: Serialize>(value: &T) -> Result<Bytes> {
    let payload =
        bincode::serialize(value).map_err(|e| FatError::Serialization(e.to_string()))?;

    let crc = crc32fast::hash(&payload);

    let mut frame = BytesMut::with_capacity(FRAME_HEADER_SIZE + payload.len());
    frame.put_slice(MAGIC);
    frame.put_u16_le(VERSION);
    frame.put_u32_le(crc);
    frame.put_u32_le(payload.len() as u32);
    frame.put_slice(&payload);

    Ok(frame.freeze())
}

/// Decode a framed record, validating magic, version, length, and CRC.
///
/// `key` is only used to label the error when validation fails.
pub fn decode_record<T: DeserializeOwned>(key: &str, bytes: &[u8]) -> Result<T> {
    if bytes.len() < FRAME_HEADER_SIZE {
        return Err(corrupt(key, format!("frame too short: {} bytes", bytes.len())));
    }

    let mut buf = bytes;

    let mut magic = [0u8; 4];
    buf.copy_to_slice(&mut magic);
    if &magic != MAGIC {
        return Err(corrupt(key, format!("bad magic: {:?}", magic)));
    }

    let version = buf.get_u16_le();
    if version != VERSION {
        return Err(corrupt(key, format!("unsupported version: {}", version)));
    }

    let crc = buf.get_u32_le();
    let payload_len = buf.get_u32_le() as usize;

    if buf.remaining() != payload_len {
        return Err(corrupt(
            key,
            format!("payload length mismatch: header says {}, got {}", payload_len, buf.remaining()),
        ));
    }

    if crc32fast::hash(buf) != crc {
        return Err(corrupt(key, "CRC mismatch".to_string()));
    }

    bincode::deserialize(buf).map_err(|e| FatError::Serialization(e.to_string()))
}

fn corrupt(key: &str, reason: String) -> FatError {
    FatError::CorruptRecord {
        key: key.to_string(),
        reason,
    }
}
