//! Wire record layouts.
//!
//! Fixed-size binary records describing processes and threads, as
//! exchanged with the debugged target. All records are little-endian,
//! single-byte aligned, with no padding between fields. Text fields are
//! fixed-width single-byte buffers, zero-padded; the logical value ends
//! at the first NUL and trailing bytes are not significant.
//!
//! ```text
//! ProcessInfo (188 bytes)          ThreadInfo (40 bytes)
//! ┌────────────────────┐           ┌────────────────────┐
//! │ pid: i32           │           │ pid: i32           │
//! │ name: [u8; 40]     │           │ priority: i32      │
//! │ path: [u8; 64]     │           │ name: [u8; 32]     │
//! │ titleid: [u8; 16]  │           └────────────────────┘
//! │ contentid: [u8; 64]│
//! └────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Size of an encoded [`ProcessInfo`] record in bytes.
pub const PROCESS_INFO_SIZE: usize = 188;
/// Size of an encoded [`ThreadInfo`] record in bytes.
pub const THREAD_INFO_SIZE: usize = 40;

const PROCESS_NAME_LEN: usize = 40;
const PROCESS_PATH_LEN: usize = 64;
const PROCESS_TITLEID_LEN: usize = 16;
const PROCESS_CONTENTID_LEN: usize = 64;
const THREAD_NAME_LEN: usize = 32;

/// Errors produced when decoding wire records.
///
/// Field contents are never validated here; the only detectable failure
/// is an input buffer shorter than the fixed record size.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WireError {
    /// The input buffer is shorter than the fixed record layout.
    #[error("record truncated: expected {expected} bytes, got {got}")]
    Truncated {
        /// Fixed size of the record being decoded.
        expected: usize,
        /// Length of the buffer actually supplied.
        got: usize,
    },
}

/// Encode `text` into a fixed-width field, truncating to capacity and
/// zero-padding the remainder.
pub fn encode_fixed_str(field: &mut [u8], text: &str) {
    field.fill(0);
    let bytes = text.as_bytes();
    let len = bytes.len().min(field.len());
    field[..len].copy_from_slice(&bytes[..len]);
}

/// Decode a fixed-width field into its logical text value: everything
/// before the first NUL, lossily converted. Bytes after the NUL are
/// ignored.
pub fn decode_fixed_str(field: &[u8]) -> String {
    let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
    String::from_utf8_lossy(&field[..end]).into_owned()
}

/// Descriptor of one process on the target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessInfo {
    /// Process ID.
    pub pid: i32,
    /// Process name.
    pub name: String,
    /// Filesystem path of the executable.
    pub path: String,
    /// Title identifier.
    pub titleid: String,
    /// Content identifier.
    pub contentid: String,
}

impl ProcessInfo {
    /// Serialize to the fixed 188-byte wire layout.
    pub fn to_bytes(&self) -> [u8; PROCESS_INFO_SIZE] {
        let mut bytes = [0u8; PROCESS_INFO_SIZE];
        bytes[0..4].copy_from_slice(&self.pid.to_le_bytes());
        let mut offset = 4;
        encode_fixed_str(&mut bytes[offset..offset + PROCESS_NAME_LEN], &self.name);
        offset += PROCESS_NAME_LEN;
        encode_fixed_str(&mut bytes[offset..offset + PROCESS_PATH_LEN], &self.path);
        offset += PROCESS_PATH_LEN;
        encode_fixed_str(&mut bytes[offset..offset + PROCESS_TITLEID_LEN], &self.titleid);
        offset += PROCESS_TITLEID_LEN;
        encode_fixed_str(&mut bytes[offset..offset + PROCESS_CONTENTID_LEN], &self.contentid);
        bytes
    }

    /// Deserialize from the fixed wire layout.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, WireError> {
        if bytes.len() < PROCESS_INFO_SIZE {
            return Err(WireError::Truncated { expected: PROCESS_INFO_SIZE, got: bytes.len() });
        }
        let pid = i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        let mut offset = 4;
        let name = decode_fixed_str(&bytes[offset..offset + PROCESS_NAME_LEN]);
        offset += PROCESS_NAME_LEN;
        let path = decode_fixed_str(&bytes[offset..offset + PROCESS_PATH_LEN]);
        offset += PROCESS_PATH_LEN;
        let titleid = decode_fixed_str(&bytes[offset..offset + PROCESS_TITLEID_LEN]);
        offset += PROCESS_TITLEID_LEN;
        let contentid = decode_fixed_str(&bytes[offset..offset + PROCESS_CONTENTID_LEN]);
        Ok(Self { pid, name, path, titleid, contentid })
    }
}

/// Descriptor of one thread on the target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadInfo {
    /// Process ID the thread belongs to.
    pub pid: i32,
    /// Scheduling priority of the thread.
    pub priority: i32,
    /// Thread name.
    pub name: String,
}

impl ThreadInfo {
    /// Serialize to the fixed 40-byte wire layout.
    pub fn to_bytes(&self) -> [u8; THREAD_INFO_SIZE] {
        let mut bytes = [0u8; THREAD_INFO_SIZE];
        bytes[0..4].copy_from_slice(&self.pid.to_le_bytes());
        bytes[4..8].copy_from_slice(&self.priority.to_le_bytes());
        encode_fixed_str(&mut bytes[8..8 + THREAD_NAME_LEN], &self.name);
        bytes
    }

    /// Deserialize from the fixed wire layout.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, WireError> {
        if bytes.len() < THREAD_INFO_SIZE {
            return Err(WireError::Truncated { expected: THREAD_INFO_SIZE, got: bytes.len() });
        }
        let pid = i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        let priority = i32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
        let name = decode_fixed_str(&bytes[8..8 + THREAD_NAME_LEN]);
        Ok(Self { pid, priority, name })
    }
}
