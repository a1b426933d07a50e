use std::fmt;

const HEX_NUGGET: [u8; 16] = *b"0123456789abcdef";

/// Encode 64-bit number with a leading '0x' and in lowercase.
pub fn encode_hex(imm: i64) -> String {
    let mut buffer = String::with_capacity(19);
    if imm.is_negative() {
        buffer.push('-');
    }
    buffer.push_str("0x");

    let mut imm = imm.unsigned_abs();
    if imm == 0 {
        buffer.push('0');
        return buffer;
    }

    let len = imm.ilog(16) as usize + 1;
    let mut digits = [0u8; 16];
    for idx in (0..len).rev() {
        digits[idx] = HEX_NUGGET[(imm & 0b1111) as usize];
        imm >>= 4;
    }

    for &chr in &digits[..len] {
        buffer.push(chr as char);
    }
    buffer
}

fn push_byte(buffer: &mut String, byte: u8) {
    buffer.push(HEX_NUGGET[(byte >> 4) as usize] as char);
    buffer.push(HEX_NUGGET[(byte & 0b1111) as usize] as char);
    buffer.push(' ');
}

/// Encode bytes as 2 digit hex number each followed by a space.
pub fn encode_hex_bytes(bytes: &[u8]) -> String {
    let mut buffer = String::with_capacity(bytes.len() * 3);
    for &byte in bytes {
        push_byte(&mut buffer, byte);
    }
    buffer
}

/// Truncates string past the max width with a '..', pads it with spaces otherwise.
pub fn encode_hex_bytes_truncated(bytes: &[u8], max_width: usize) -> String {
    let max_width = max_width.max(6);
    let mut buffer = String::with_capacity(max_width + 4);

    // truncation has to occur
    if bytes.len() * 3 > max_width {
        for &byte in &bytes[..max_width / 3 - 1] {
            push_byte(&mut buffer, byte);
        }
        buffer.push_str("..  ");
        return buffer;
    }

    for &byte in bytes {
        push_byte(&mut buffer, byte);
    }

    while buffer.len() < max_width {
        buffer.push(' ');
    }
    buffer
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HexError {
    /// A character that isn't a hex digit or whitespace.
    InvalidChar { offset: usize, chr: char },

    /// Digits didn't pair up into whole bytes.
    OddLength,
}

impl fmt::Display for HexError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            HexError::InvalidChar { offset, chr } => {
                write!(f, "invalid hex character {chr:?} at offset {offset}")
            }
            HexError::OddLength => f.write_str("hex string has an odd number of digits"),
        }
    }
}

impl std::error::Error for HexError {}

/// Parse a hex string where whitespace between digits is ignored, e.g. `"66 0F3A40 08 A5"`.
pub fn decode_hex_bytes(s: &str) -> Result<Vec<u8>, HexError> {
    let mut bytes = Vec::with_capacity(s.len() / 2);
    let mut high: Option<u8> = None;

    for (offset, chr) in s.char_indices() {
        if chr.is_whitespace() {
            continue;
        }

        let nibble = match chr.to_digit(16) {
            Some(digit) => digit as u8,
            None => return Err(HexError::InvalidChar { offset, chr }),
        };

        high = match high {
            Some(hi) => {
                bytes.push((hi << 4) | nibble);
                None
            }
            None => Some(nibble),
        };
    }

    if high.is_some() {
        return Err(HexError::OddLength);
    }

    Ok(bytes)
}
