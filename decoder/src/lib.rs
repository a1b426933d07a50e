//! Shared behaviour required between decoder crates.

mod hex;
mod reader;

pub use hex::{decode_hex_bytes, encode_hex, encode_hex_bytes, encode_hex_bytes_truncated, HexError};
pub use reader::Reader;

use std::fmt;

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Error {
    /// What kind of error happened in decoding an instruction.
    pub kind: ErrorKind,

    /// How many bytes in the stream did the invalid instruction consume.
    size: u8,
}

impl Error {
    pub fn new(kind: ErrorKind, size: usize) -> Self {
        Self {
            kind,
            size: size.min(u8::MAX as usize) as u8,
        }
    }

    pub fn size(&self) -> usize {
        self.size as usize
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} (after {} bytes)", self.kind, self.size)
    }
}

impl std::error::Error for Error {}

#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum ErrorKind {
    /// Opcode in instruction is impossible/unknown.
    InvalidOpcode,

    /// Operand in instruction is impossible/unknown.
    InvalidOperand,

    /// Prefix in instruction is impossible/unknown.
    InvalidPrefixes,

    /// VEX or EVEX payload has reserved bits set or uses extensions the mode doesn't allow.
    InvalidVexEvex,

    /// There weren't any bytes left in the stream to decode.
    ExhaustedInput,

    /// Impossibly long instruction (x86/64 specific).
    TooLong,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::InvalidOpcode => "invalid opcode",
            ErrorKind::InvalidOperand => "invalid operand",
            ErrorKind::InvalidPrefixes => "invalid prefixes",
            ErrorKind::InvalidVexEvex => "invalid vex/evex prefix",
            ErrorKind::ExhaustedInput => "exhausted input",
            ErrorKind::TooLong => "instruction too long",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub trait Decoded {
    /// Number of bytes the instruction occupies in the stream.
    fn width(&self) -> usize;
}

pub trait Decodable {
    type Instruction: Decoded;

    fn decode(&self, reader: &mut Reader) -> Result<Self::Instruction, Error>;
    fn max_width(&self) -> usize;
}
