//! Final password and completion code.
//!
//! The password is an obfuscation, not encryption: the payload bytes are
//! XORed with a short fixed key, hex-encoded, and the hex text is Base64
//! encoded. Anyone holding the key can read it back with [`decode_password`].

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;

/// XOR key shared with whoever verifies passwords.
pub const PASSWORD_KEY: &str = "oop2025";

/// Name recorded in completion codes.
pub const DEFAULT_PLAYER: &str = "学生";

/// Failure to read a password back.
#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("payload is not hex text")]
    NotHex,

    #[error("decoded payload is not UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}

fn xor_with_key(data: &[u8], key: &[u8]) -> Vec<u8> {
    data.iter().zip(key.iter().cycle()).map(|(d, k)| d ^ k).collect()
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

fn from_hex(text: &str) -> Option<Vec<u8>> {
    if text.len() % 2 != 0 {
        return None;
    }
    (0..text.len())
        .step_by(2)
        .map(|i| text.get(i..i + 2).and_then(|pair| u8::from_str_radix(pair, 16).ok()))
        .collect()
}

/// Build the password for a finished session.
///
/// Pure: identical inputs always give identical output.
pub fn generate_encrypted_password(
    student_id: &str,
    name: &str,
    score: u32,
    time_secs: u64,
    timestamp_ms: i64,
) -> String {
    let data = format!("{student_id}_{name}_{score}_{time_secs}_{timestamp_ms}");
    let hex = to_hex(&xor_with_key(data.as_bytes(), PASSWORD_KEY.as_bytes()));
    STANDARD.encode(hex.as_bytes())
}

/// Recover `id_name_score_time_timestamp` from a password.
pub fn decode_password(password: &str) -> Result<String, PasswordError> {
    let hex_bytes = STANDARD.decode(password.trim())?;
    let hex = String::from_utf8(hex_bytes).map_err(|_| PasswordError::NotHex)?;
    let xored = from_hex(&hex).ok_or(PasswordError::NotHex)?;
    Ok(String::from_utf8(xor_with_key(&xored, PASSWORD_KEY.as_bytes()))?)
}

/// Base64 of `player_score_time_timestamp`, shown when every level is done.
pub fn completion_code(player: &str, score: u32, time_secs: u64, timestamp_ms: i64) -> String {
    STANDARD.encode(format!("{player}_{score}_{time_secs}_{timestamp_ms}"))
}
