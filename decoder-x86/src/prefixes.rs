use decoder::{ErrorKind, Reader};

use crate::register::RegSpec;
use crate::Bitness;

/// Which of 66/F3/F2 selects a column in prefix-dependent opcode tables.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub(crate) enum Mandatory {
    #[default]
    None,
    P66,
    F3,
    F2,
}

impl Mandatory {
    /// From the two `pp` bits of a VEX/EVEX payload.
    pub(crate) const fn from_pp(pp: u8) -> Mandatory {
        match pp & 0b11 {
            0 => Mandatory::None,
            1 => Mandatory::P66,
            2 => Mandatory::F3,
            _ => Mandatory::F2,
        }
    }

    pub(crate) const fn column(self) -> usize {
        self as usize
    }
}

/// bits specified in an x86_64
/// [`rex`](https://wiki.osdev.org/X86-64_Instruction_Encoding#REX_prefix) prefix.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct PrefixRex {
    bits: u8,
}

impl PrefixRex {
    #[inline]
    pub fn present(&self) -> bool {
        self.bits & 0xf0 == 0x40
    }

    #[inline]
    pub fn b(&self) -> bool {
        self.bits & 0x01 == 0x01
    }

    #[inline]
    pub fn x(&self) -> bool {
        self.bits & 0x02 == 0x02
    }

    #[inline]
    pub fn r(&self) -> bool {
        self.bits & 0x04 == 0x04
    }

    #[inline]
    pub fn w(&self) -> bool {
        self.bits & 0x08 == 0x08
    }
}

const LOCK: u8 = 0x01;
const REP: u8 = 0x02;
const REPNE: u8 = 0x04;
const OPERAND_SIZE: u8 = 0x08;
const ADDRESS_SIZE: u8 = 0x10;

/// the prefixes on an instruction.
///
/// `rep`, `repne`, `lock`, and segment override prefixes are directly accessible here. a
/// 66/F2/F3 that was consumed to select an instruction form is no longer reported.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct Prefixes {
    bits: u8,
    rex: PrefixRex,
    mandatory: Mandatory,
    segment: Option<RegSpec>,
}

impl Prefixes {
    #[inline]
    pub fn lock(&self) -> bool {
        self.bits & LOCK == LOCK
    }

    #[inline]
    pub fn rep(&self) -> bool {
        self.bits & REP == REP
    }

    #[inline]
    pub fn repne(&self) -> bool {
        self.bits & REPNE == REPNE
    }

    /// A 66 prefix was seen, whether or not it ended up changing the operand size.
    #[inline]
    pub fn operand_size(&self) -> bool {
        self.bits & OPERAND_SIZE == OPERAND_SIZE
    }

    #[inline]
    pub fn address_size(&self) -> bool {
        self.bits & ADDRESS_SIZE == ADDRESS_SIZE
    }

    #[inline]
    pub fn rex(&self) -> PrefixRex {
        self.rex
    }

    /// The segment override in effect, if any.
    #[inline]
    pub fn segment(&self) -> Option<RegSpec> {
        self.segment
    }

    #[inline]
    pub(crate) fn mandatory(&self) -> Mandatory {
        self.mandatory
    }

    #[inline]
    pub(crate) fn clear_rep(&mut self) {
        self.bits &= !REP;
    }

    #[inline]
    pub(crate) fn clear_repne(&mut self) {
        self.bits &= !REPNE;
    }

    /// Consume legacy prefixes (and a trailing REX in long mode), returning them together with
    /// the first byte that isn't one.
    pub(crate) fn scan(reader: &mut Reader, bitness: Bitness) -> Result<(Prefixes, u8), ErrorKind> {
        let mut prefixes = Prefixes::default();
        let mut fs_gs = false;

        let opcode = loop {
            let b = reader.read_u8()?;
            if reader.offset() > 15 {
                return Err(ErrorKind::TooLong);
            }

            match b {
                0x26 | 0x2e | 0x36 | 0x3e => {
                    // long mode ignores the legacy segments once fs/gs has been seen
                    if bitness != Bitness::Bit64 || !fs_gs {
                        prefixes.segment = Some(RegSpec::segment((b >> 3) & 0b11));
                    }
                }
                0x64 | 0x65 => {
                    prefixes.segment = Some(RegSpec::segment(b - 0x60));
                    fs_gs = true;
                }
                0x66 => {
                    prefixes.bits |= OPERAND_SIZE;
                    if prefixes.mandatory == Mandatory::None {
                        prefixes.mandatory = Mandatory::P66;
                    }
                }
                0x67 => prefixes.bits |= ADDRESS_SIZE,
                0xf0 => prefixes.bits |= LOCK,
                0xf2 => {
                    prefixes.bits |= REPNE;
                    prefixes.mandatory = Mandatory::F2;
                }
                0xf3 => {
                    prefixes.bits |= REP;
                    prefixes.mandatory = Mandatory::F3;
                }
                0x40..=0x4f if bitness == Bitness::Bit64 => {
                    prefixes.rex = PrefixRex { bits: b };
                    continue;
                }
                _ => break b,
            }

            // rex only counts when it's immediately followed by the opcode
            prefixes.rex = PrefixRex::default();
        };

        Ok((prefixes, opcode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(bytes: &[u8], bitness: Bitness) -> Result<(Prefixes, u8), ErrorKind> {
        Prefixes::scan(&mut Reader::new(bytes), bitness)
    }

    #[test]
    fn last_segment_wins() {
        let (prefixes, opcode) = scan(&[0x26, 0x2e, 0xa0], Bitness::Bit32).unwrap();
        assert_eq!(prefixes.segment(), Some(RegSpec::cs()));
        assert_eq!(opcode, 0xa0);
    }

    #[test]
    fn fs_gs_shadow_legacy_segments_in_long_mode() {
        let (prefixes, _) = scan(&[0x64, 0x26, 0x90], Bitness::Bit64).unwrap();
        assert_eq!(prefixes.segment(), Some(RegSpec::fs()));

        let (prefixes, _) = scan(&[0x64, 0x26, 0x90], Bitness::Bit32).unwrap();
        assert_eq!(prefixes.segment(), Some(RegSpec::es()));
    }

    #[test]
    fn rex_must_be_last() {
        let (prefixes, _) = scan(&[0x48, 0x66, 0x90], Bitness::Bit64).unwrap();
        assert!(!prefixes.rex().present());

        let (prefixes, _) = scan(&[0x66, 0x41, 0x48, 0x90], Bitness::Bit64).unwrap();
        assert!(prefixes.rex().w());
        assert!(!prefixes.rex().b());
    }

    #[test]
    fn rex_is_an_opcode_outside_long_mode() {
        let (prefixes, opcode) = scan(&[0x48, 0x90], Bitness::Bit32).unwrap();
        assert!(!prefixes.rex().present());
        assert_eq!(opcode, 0x48);
    }

    #[test]
    fn mandatory_prefix_priority() {
        let (prefixes, _) = scan(&[0xf3, 0x66, 0x0f], Bitness::Bit64).unwrap();
        assert_eq!(prefixes.mandatory(), Mandatory::F3);

        let (prefixes, _) = scan(&[0xf3, 0xf2, 0x0f], Bitness::Bit64).unwrap();
        assert_eq!(prefixes.mandatory(), Mandatory::F2);
        assert!(prefixes.rep() && prefixes.repne());
    }

    #[test]
    fn too_many_prefixes() {
        assert_eq!(scan(&[0x66; 16], Bitness::Bit32), Err(ErrorKind::TooLong));
        assert_eq!(scan(&[0x66; 3], Bitness::Bit32), Err(ErrorKind::ExhaustedInput));
    }
}
