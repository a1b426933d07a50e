//! # `x86`, a decoder for 16-, 32- and 64-bit x86 machine code
//!
//! Legacy, VEX and EVEX encodings are decoded by walking flat opcode tables, one
//! [`Instruction`] per call. Decoding never allocates and a [`Decoder`] holds no state between
//! instructions, so any number of them can run side by side.
//!
//! ```
//! use x86::{Bitness, Code, Decoder, RegSpec};
//!
//! let instr = Decoder::new(Bitness::Bit64)
//!     .decode_slice(&[0x48, 0xb8, 0x04, 0x15, 0x26, 0x37, 0x5a, 0xa5, 0x12, 0x34])
//!     .unwrap();
//!
//! assert_eq!(instr.code(), Code::Mov_r64_imm64);
//! assert_eq!(instr.op_register(0), Some(RegSpec::rax()));
//! assert_eq!(instr.immediate64(), Some(0x3412a55a37261504));
//! ```

#[macro_use]
mod tables;

mod code;
mod decode;
mod display;
mod evex;
mod instruction;
mod map0f;
mod memory;
mod modrm;
mod operand;
mod prefixes;
mod register;
mod vex;
mod x87;

#[cfg(test)]
mod tests;

use bitflags::bitflags;
use decoder::{Decodable, Error, Reader};

pub use code::Code;
pub use instruction::{ConstantOffsets, Encoding, Instruction};
pub use memory::MemorySize;
pub use operand::{MemoryOperand, OpKind, Operand, RoundingControl};
pub use prefixes::{PrefixRex, Prefixes};
pub use register::{RegSpec, RegisterBank};

/// The processor mode code is decoded for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Bitness {
    Bit16,
    Bit32,
    Bit64,
}

impl Bitness {
    pub const fn bits(self) -> u32 {
        match self {
            Bitness::Bit16 => 16,
            Bitness::Bit32 => 32,
            Bitness::Bit64 => 64,
        }
    }
}

impl TryFrom<u32> for Bitness {
    type Error = u32;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        match bits {
            16 => Ok(Bitness::Bit16),
            32 => Ok(Bitness::Bit32),
            64 => Ok(Bitness::Bit64),
            _ => Err(bits),
        }
    }
}

bitflags! {
    #[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
    pub struct DecoderOptions: u32 {
        /// Accept `lock` on forms that can't be locked and `{z}` without an opmask.
        const NO_INVALID_CHECK = 1;
        /// 66 prefixed near branches in long mode are 16-bit, like AMD processors do it.
        const AMD              = 1 << 1;
    }
}

/// Decoder configuration: the mode, decoding options and the address of the first byte.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Decoder {
    pub(crate) bitness: Bitness,
    pub(crate) options: DecoderOptions,
    pub(crate) ip: u64,
}

impl Decoder {
    pub fn new(bitness: Bitness) -> Self {
        Self {
            bitness,
            options: DecoderOptions::empty(),
            ip: 0,
        }
    }

    pub fn with_options(mut self, options: DecoderOptions) -> Self {
        self.options = options;
        self
    }

    /// Address of the first byte handed to the decoder.
    pub fn with_ip(mut self, ip: u64) -> Self {
        self.ip = ip;
        self
    }

    #[inline]
    pub fn bitness(&self) -> Bitness {
        self.bitness
    }

    #[inline]
    pub fn options(&self) -> DecoderOptions {
        self.options
    }

    /// Decode the single instruction at the start of `bytes`.
    pub fn decode_slice(&self, bytes: &[u8]) -> Result<Instruction, Error> {
        self.decode(&mut Reader::new(bytes))
    }

    /// Decode instructions one after another from `bytes`.
    pub fn stream<'data>(&self, bytes: &'data [u8]) -> Stream<'data> {
        Stream {
            decoder: *self,
            reader: Reader::new(bytes),
            last_error: None,
        }
    }
}

impl Decodable for Decoder {
    type Instruction = Instruction;

    fn decode(&self, reader: &mut Reader) -> Result<Instruction, Error> {
        decode::read_instruction(self, reader).map_err(|kind| Error::new(kind, reader.offset()))
    }

    fn max_width(&self) -> usize {
        decode::MAX_LENGTH
    }
}

/// A [`Decoder`] bound to a buffer.
///
/// Iterating yields every instruction until the buffer runs out. After a failure the stream
/// resumes one byte past the start of the bad instruction.
#[derive(Debug, Clone)]
pub struct Stream<'data> {
    decoder: Decoder,
    reader: Reader<'data>,
    last_error: Option<Error>,
}

impl Stream<'_> {
    /// Decode the instruction at the current position, moving past it on success.
    ///
    /// On failure the position is left at the start of the instruction.
    pub fn decode(&mut self) -> Result<Instruction, Error> {
        let start = self.reader.total_offset();
        match self.decoder.decode(&mut self.reader) {
            Ok(instr) => {
                self.last_error = None;
                Ok(instr)
            }
            Err(err) => {
                self.reader.seek(start);
                self.last_error = Some(err);
                Err(err)
            }
        }
    }

    /// Offset of the next instruction within the buffer.
    #[inline]
    pub fn position(&self) -> usize {
        self.reader.total_offset()
    }

    pub fn set_position(&mut self, position: usize) {
        self.reader.seek(position);
    }

    #[inline]
    pub fn can_decode(&self) -> bool {
        !self.reader.is_empty()
    }

    #[inline]
    pub fn last_error(&self) -> Option<Error> {
        self.last_error
    }

    /// Address of the instruction at the current position.
    #[inline]
    pub fn ip(&self) -> u64 {
        self.decoder.ip.wrapping_add(self.position() as u64)
    }
}

impl Iterator for Stream<'_> {
    type Item = Result<Instruction, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.can_decode() {
            return None;
        }

        let result = self.decode();
        if result.is_err() {
            // `Iterator::position` shadows the inherent method through `&mut self`
            let resume = Stream::position(self) + 1;
            self.set_position(resume);
        }

        Some(result)
    }
}

impl std::iter::FusedIterator for Stream<'_> {}
