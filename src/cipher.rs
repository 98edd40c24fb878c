use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CipherError {
    #[error("invalid key: {0}")]
    InvalidKey(String),
    #[error("decode error: {0}")]
    DecodeError(String),
}

/// Cipher scheme selected by the caller for a single transform call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CipherScheme {
    Shift { shift: i32 },
    Keyword { key: String },
    Base64,
    Hex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encode,
    Decode,
}

/// Applies `scheme` to `text` in the given direction.
///
/// Pure and deterministic. Decode of malformed Base64/hex input returns
/// `CipherError::DecodeError`; an empty or non-letter keyword key returns
/// `CipherError::InvalidKey`.
pub fn transform(
    text: &str,
    scheme: &CipherScheme,
    direction: Direction,
) -> Result<String, CipherError> {
    match scheme {
        CipherScheme::Shift { shift } => Ok(shift_cipher(text, *shift, direction)),
        CipherScheme::Keyword { key } => keyword_cipher(text, key, direction),
        CipherScheme::Base64 => match direction {
            Direction::Encode => Ok(BASE64.encode(text.as_bytes())),
            Direction::Decode => {
                let bytes = BASE64
                    .decode(text)
                    .map_err(|e| CipherError::DecodeError(e.to_string()))?;
                String::from_utf8(bytes).map_err(|e| CipherError::DecodeError(e.to_string()))
            }
        },
        CipherScheme::Hex => match direction {
            Direction::Encode => Ok(hex::encode(text.as_bytes())),
            Direction::Decode => {
                let bytes =
                    hex::decode(text).map_err(|e| CipherError::DecodeError(e.to_string()))?;
                String::from_utf8(bytes).map_err(|e| CipherError::DecodeError(e.to_string()))
            }
        },
    }
}

fn shift_cipher(text: &str, shift: i32, direction: Direction) -> String {
    let forward = shift.rem_euclid(26) as u8;
    let effective = match direction {
        Direction::Encode => forward,
        Direction::Decode => (26 - forward) % 26,
    };
    text.chars().map(|c| rotate(c, effective)).collect()
}

fn keyword_cipher(text: &str, key: &str, direction: Direction) -> Result<String, CipherError> {
    if key.is_empty() {
        return Err(CipherError::InvalidKey("key must not be empty".into()));
    }
    if !key.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(CipherError::InvalidKey(
            "key must contain ASCII letters only".into(),
        ));
    }

    let key_shifts: Vec<u8> = key
        .bytes()
        .map(|b| b.to_ascii_lowercase() - b'a')
        .collect();

    let mut out = String::with_capacity(text.len());
    // Key index advances only on letters of the input.
    let mut key_index = 0usize;
    for c in text.chars() {
        if c.is_ascii_alphabetic() {
            let k = key_shifts[key_index % key_shifts.len()];
            let effective = match direction {
                Direction::Encode => k,
                Direction::Decode => (26 - k) % 26,
            };
            out.push(rotate(c, effective));
            key_index += 1;
        } else {
            out.push(c);
        }
    }
    Ok(out)
}

fn rotate(c: char, shift: u8) -> char {
    match c {
        'a'..='z' => (b'a' + (c as u8 - b'a' + shift) % 26) as char,
        'A'..='Z' => (b'A' + (c as u8 - b'A' + shift) % 26) as char,
        _ => c,
    }
}
