use decoder::Decoded;

use crate::code::Code;
use crate::memory::MemorySize;
use crate::operand::{MemoryOperand, OpKind, Operand, RoundingControl};
use crate::prefixes::Prefixes;
use crate::register::{RegSpec, RegisterBank};

/// Where the displacement and immediates sit within the instruction's bytes.
///
/// Offsets are relative to the first byte of the instruction, a size of 0 means absent.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct ConstantOffsets {
    pub displacement_offset: u8,
    pub displacement_size: u8,
    pub immediate_offset: u8,
    pub immediate_size: u8,
    /// Only `enter` has a second immediate.
    pub immediate_offset2: u8,
    pub immediate_size2: u8,
}

impl ConstantOffsets {
    pub fn has_displacement(&self) -> bool {
        self.displacement_size != 0
    }

    pub fn has_immediate(&self) -> bool {
        self.immediate_size != 0
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Encoding {
    #[default]
    Legacy,
    VEX,
    EVEX,
}

/// A single decoded instruction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Instruction {
    pub(crate) code: Code,
    pub(crate) operands: [Operand; 4],
    pub(crate) op_count: u8,
    pub(crate) length: u8,
    pub(crate) ip: u64,
    pub(crate) prefixes: Prefixes,
    pub(crate) encoding: Encoding,
    /// In bits, 0 for legacy encodings.
    pub(crate) vector_length: u16,
    pub(crate) op_mask: Option<RegSpec>,
    pub(crate) zeroing: bool,
    pub(crate) rounding: RoundingControl,
    pub(crate) sae: bool,
    pub(crate) offsets: ConstantOffsets,
}

impl Default for Instruction {
    fn default() -> Self {
        Self {
            code: Code::INVALID,
            operands: [Operand::Nothing; 4],
            op_count: 0,
            length: 0,
            ip: 0,
            prefixes: Prefixes::default(),
            encoding: Encoding::Legacy,
            vector_length: 0,
            op_mask: None,
            zeroing: false,
            rounding: RoundingControl::None,
            sae: false,
            offsets: ConstantOffsets::default(),
        }
    }
}

impl Instruction {
    pub(crate) fn push(&mut self, operand: Operand) {
        // at most four, anything past that is dropped
        if let Some(slot) = self.operands.get_mut(self.op_count as usize) {
            *slot = operand;
            self.op_count += 1;
        }
    }

    /// Turns `[rip + disp]` into the absolute address it refers to, now that the length is known.
    pub(crate) fn resolve_ip_relative(&mut self) {
        let next_ip = self.next_ip();
        for operand in self.operands.iter_mut() {
            if let Operand::Memory(mem) = operand {
                match mem.base.map(|base| base.bank()) {
                    Some(RegisterBank::RIP) => {
                        mem.displacement = next_ip.wrapping_add(mem.displacement);
                    }
                    Some(RegisterBank::EIP) => {
                        mem.displacement =
                            (next_ip as u32).wrapping_add(mem.displacement as u32) as u64;
                    }
                    _ => {}
                }
            }
        }
    }

    #[inline]
    pub fn code(&self) -> Code {
        self.code
    }

    #[inline]
    pub fn mnemonic(&self) -> &'static str {
        self.code.mnemonic()
    }

    #[inline]
    pub fn op_count(&self) -> usize {
        self.op_count as usize
    }

    /// Length of the instruction in bytes.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.length as usize
    }

    #[inline]
    pub fn ip(&self) -> u64 {
        self.ip
    }

    #[inline]
    pub fn next_ip(&self) -> u64 {
        self.ip.wrapping_add(self.length as u64)
    }

    #[inline]
    pub fn operands(&self) -> &[Operand] {
        &self.operands[..self.op_count as usize]
    }

    /// Operand `idx`, or [`Operand::Nothing`] past the last one.
    pub fn operand(&self, idx: usize) -> Operand {
        self.operands().get(idx).copied().unwrap_or(Operand::Nothing)
    }

    pub fn op_kind(&self, idx: usize) -> OpKind {
        self.operand(idx).kind()
    }

    pub fn op_register(&self, idx: usize) -> Option<RegSpec> {
        match self.operand(idx) {
            Operand::Register(reg) => Some(reg),
            _ => None,
        }
    }

    fn memory_operand(&self) -> Option<Operand> {
        self.operands().iter().copied().find(Operand::is_memory)
    }

    fn modrm_memory(&self) -> Option<MemoryOperand> {
        self.operands().iter().find_map(|op| match op {
            Operand::Memory(mem) => Some(*mem),
            _ => None,
        })
    }

    /// Effective segment of the memory operand.
    pub fn memory_segment(&self) -> Option<RegSpec> {
        self.memory_operand().and_then(|op| op.memory_segment())
    }

    pub fn memory_base(&self) -> Option<RegSpec> {
        self.modrm_memory().and_then(|mem| mem.base)
    }

    pub fn memory_index(&self) -> Option<RegSpec> {
        self.modrm_memory().and_then(|mem| mem.index)
    }

    /// 1, 2, 4 or 8. 1 without a memory operand.
    pub fn memory_index_scale(&self) -> u8 {
        self.modrm_memory().map_or(1, |mem| mem.scale)
    }

    /// The displacement, or the absolute address of a `moffs` or `rip` relative operand.
    pub fn memory_displacement(&self) -> u64 {
        match self.memory_operand() {
            Some(Operand::Memory(mem)) => mem.displacement,
            Some(Operand::Memory64 { address, .. }) => address,
            _ => 0,
        }
    }

    pub fn memory_displ_size(&self) -> u8 {
        match self.memory_operand() {
            Some(Operand::Memory(mem)) => mem.displ_size,
            Some(Operand::Memory64 { .. }) => 8,
            _ => 0,
        }
    }

    pub fn memory_size(&self) -> MemorySize {
        self.memory_operand()
            .and_then(|op| op.memory_size())
            .unwrap_or(MemorySize::Unknown)
    }

    /// Address of a 64-bit `moffs` operand.
    pub fn memory_address64(&self) -> Option<u64> {
        self.operands().iter().find_map(|op| match op {
            Operand::Memory64 { address, .. } => Some(*address),
            _ => None,
        })
    }

    pub fn immediate8(&self) -> Option<u8> {
        self.operands().iter().find_map(|op| match op {
            Operand::Immediate8(imm) => Some(*imm),
            _ => None,
        })
    }

    pub fn immediate8_2nd(&self) -> Option<u8> {
        self.operands().iter().find_map(|op| match op {
            Operand::Immediate8_2nd(imm) => Some(*imm),
            _ => None,
        })
    }

    pub fn immediate16(&self) -> Option<u16> {
        self.operands().iter().find_map(|op| match op {
            Operand::Immediate16(imm) => Some(*imm),
            _ => None,
        })
    }

    pub fn immediate32(&self) -> Option<u32> {
        self.operands().iter().find_map(|op| match op {
            Operand::Immediate32(imm) => Some(*imm),
            _ => None,
        })
    }

    pub fn immediate64(&self) -> Option<u64> {
        self.operands().iter().find_map(|op| match op {
            Operand::Immediate64(imm) => Some(*imm),
            _ => None,
        })
    }

    /// Immediate value of operand `idx`, extended to 64 bits.
    pub fn immediate(&self, idx: usize) -> Option<u64> {
        self.operand(idx).immediate()
    }

    pub fn near_branch_target(&self) -> Option<u64> {
        self.operands().iter().find_map(|op| match *op {
            Operand::NearBranch16(target) => Some(target as u64),
            Operand::NearBranch32(target) => Some(target as u64),
            Operand::NearBranch64(target) => Some(target),
            _ => None,
        })
    }

    pub fn far_branch_selector(&self) -> Option<u16> {
        self.operands().iter().find_map(|op| match *op {
            Operand::FarBranch16 { selector, .. } | Operand::FarBranch32 { selector, .. } => {
                Some(selector)
            }
            _ => None,
        })
    }

    /// EVEX opmask register, `None` for `k0` and non EVEX instructions.
    #[inline]
    pub fn op_mask(&self) -> Option<RegSpec> {
        self.op_mask
    }

    #[inline]
    pub fn zeroing_masking(&self) -> bool {
        self.zeroing
    }

    #[inline]
    pub fn rounding_control(&self) -> RoundingControl {
        self.rounding
    }

    #[inline]
    pub fn suppress_all_exceptions(&self) -> bool {
        self.sae
    }

    pub fn is_broadcast(&self) -> bool {
        self.memory_size().is_broadcast()
    }

    /// Vector length in bits, 0 for legacy encodings.
    #[inline]
    pub fn vector_length(&self) -> u16 {
        self.vector_length
    }

    #[inline]
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    #[inline]
    pub fn prefixes(&self) -> &Prefixes {
        &self.prefixes
    }

    #[inline]
    pub fn has_lock_prefix(&self) -> bool {
        self.prefixes.lock()
    }

    #[inline]
    pub fn has_rep_prefix(&self) -> bool {
        self.prefixes.rep()
    }

    #[inline]
    pub fn has_repe_prefix(&self) -> bool {
        self.prefixes.rep()
    }

    #[inline]
    pub fn has_repne_prefix(&self) -> bool {
        self.prefixes.repne()
    }

    #[inline]
    pub fn segment_prefix(&self) -> Option<RegSpec> {
        self.prefixes.segment()
    }

    #[inline]
    pub fn constant_offsets(&self) -> ConstantOffsets {
        self.offsets
    }
}

impl Decoded for Instruction {
    fn width(&self) -> usize {
        self.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pushes_operands_in_order() {
        let mut instr = Instruction::default();
        instr.push(Operand::Register(RegSpec::rax()));
        instr.push(Operand::Immediate8(4));

        assert_eq!(instr.op_count(), 2);
        assert_eq!(instr.op_register(0), Some(RegSpec::rax()));
        assert_eq!(instr.immediate(1), Some(4));
        assert_eq!(instr.operand(2), Operand::Nothing);
        assert_eq!(instr.op_kind(3), OpKind::Nothing);
    }

    #[test]
    fn fifth_operand_is_dropped() {
        let mut instr = Instruction::default();
        for imm in 0..5 {
            instr.push(Operand::Immediate8(imm));
        }

        assert_eq!(instr.op_count(), 4);
        assert_eq!(instr.operand(3), Operand::Immediate8(3));
    }

    #[test]
    fn rip_relative_becomes_absolute() {
        let mut instr = Instruction::default();
        instr.ip = 0x1000;
        instr.length = 6;
        instr.push(Operand::Memory(MemoryOperand {
            segment: RegSpec::ds(),
            base: Some(RegSpec::rip()),
            index: None,
            scale: 1,
            displacement: (-0x10i64) as u64,
            displ_size: 8,
            size: MemorySize::UInt32,
        }));

        instr.resolve_ip_relative();
        assert_eq!(instr.memory_displacement(), 0xff6);
        assert_eq!(instr.memory_base(), Some(RegSpec::rip()));
    }

    #[test]
    fn no_memory_defaults() {
        let instr = Instruction::default();
        assert_eq!(instr.memory_size(), MemorySize::Unknown);
        assert_eq!(instr.memory_index_scale(), 1);
        assert_eq!(instr.memory_displ_size(), 0);
        assert!(!instr.is_broadcast());
    }
}
