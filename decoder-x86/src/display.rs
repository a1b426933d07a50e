//! Plain Intel syntax, meant for listings and debugging.

use std::fmt;

use decoder::encode_hex;

use crate::instruction::Instruction;
use crate::memory::MemorySize;
use crate::operand::{MemoryOperand, Operand, RoundingControl};
use crate::register::RegSpec;

struct Displacement(i64);

impl fmt::Display for Displacement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.0 == i64::MIN {
            f.write_str(" - 0x8000000000000000")
        } else if self.0 < 0 {
            write!(f, " - {}", encode_hex(-self.0))
        } else {
            write!(f, " + {}", encode_hex(self.0))
        }
    }
}

/// Sign of a stored displacement depends on the width of the address it's added to.
fn signed_displacement(mem: &MemoryOperand) -> i64 {
    let width = mem.base.or(mem.index).map_or(8, |reg| reg.width());
    match width {
        2 => mem.displacement as u16 as i16 as i64,
        4 => mem.displacement as u32 as i32 as i64,
        _ => mem.displacement as i64,
    }
}

fn is_ip(reg: RegSpec) -> bool {
    reg == RegSpec::rip() || reg == RegSpec::eip()
}

fn write_ptr(f: &mut fmt::Formatter, size: MemorySize) -> fmt::Result {
    match size.label() {
        "" => Ok(()),
        label => write!(f, "{label} ptr "),
    }
}

fn string_operand(
    f: &mut fmt::Formatter,
    size: MemorySize,
    segment: RegSpec,
    reg: &str,
) -> fmt::Result {
    write_ptr(f, size)?;
    write!(f, "{segment}:[{reg}]")
}

struct Memory<'a> {
    mem: &'a MemoryOperand,
    show_segment: bool,
}

impl fmt::Display for Memory<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mem = self.mem;
        write_ptr(f, mem.size)?;

        if self.show_segment {
            write!(f, "{}:", mem.segment)?;
        }

        f.write_str("[")?;
        match (mem.base, mem.index) {
            // already resolved to the absolute target
            (Some(base), _) if is_ip(base) => write!(f, "{:#x}", mem.displacement)?,
            (None, None) => write!(f, "{:#x}", mem.displacement)?,
            (base, index) => {
                if let Some(base) = base {
                    write!(f, "{base}")?;
                }
                if let Some(index) = index {
                    if base.is_some() {
                        f.write_str(" + ")?;
                    }
                    write!(f, "{index}")?;
                    if mem.scale != 1 {
                        write!(f, " * {}", mem.scale)?;
                    }
                }
                if mem.displ_size != 0 {
                    write!(f, "{}", Displacement(signed_displacement(mem)))?;
                }
            }
        }
        f.write_str("]")
    }
}

impl Instruction {
    fn fmt_operand(&self, f: &mut fmt::Formatter, operand: &Operand) -> fmt::Result {
        let show_segment = self.segment_prefix().is_some();

        match *operand {
            Operand::Register(reg) => write!(f, "{reg}"),
            Operand::NearBranch16(target) => write!(f, "{target:#x}"),
            Operand::NearBranch32(target) => write!(f, "{target:#x}"),
            Operand::NearBranch64(target) => write!(f, "{target:#x}"),
            Operand::FarBranch16 { selector, offset } => write!(f, "{selector:#x}:{offset:#x}"),
            Operand::FarBranch32 { selector, offset } => write!(f, "{selector:#x}:{offset:#x}"),
            Operand::Immediate8(_)
            | Operand::Immediate8_2nd(_)
            | Operand::Immediate16(_)
            | Operand::Immediate32(_)
            | Operand::Immediate64(_) => {
                let imm = operand.immediate().unwrap_or_default();
                write!(f, "{imm:#x}")
            }
            Operand::Immediate8to16(imm) => f.write_str(&encode_hex(imm as i64)),
            Operand::Immediate8to32(imm) => f.write_str(&encode_hex(imm as i64)),
            Operand::Immediate8to64(imm) | Operand::Immediate32to64(imm) => {
                f.write_str(&encode_hex(imm))
            }
            Operand::MemorySegSI { segment, size } => string_operand(f, size, segment, "si"),
            Operand::MemorySegESI { segment, size } => string_operand(f, size, segment, "esi"),
            Operand::MemorySegRSI { segment, size } => string_operand(f, size, segment, "rsi"),
            Operand::MemorySegDI { segment, size } => string_operand(f, size, segment, "di"),
            Operand::MemorySegEDI { segment, size } => string_operand(f, size, segment, "edi"),
            Operand::MemorySegRDI { segment, size } => string_operand(f, size, segment, "rdi"),
            Operand::MemoryESDI { size } => string_operand(f, size, RegSpec::es(), "di"),
            Operand::MemoryESEDI { size } => string_operand(f, size, RegSpec::es(), "edi"),
            Operand::MemoryESRDI { size } => string_operand(f, size, RegSpec::es(), "rdi"),
            Operand::Memory64 { segment, address, size } => {
                write_ptr(f, size)?;
                if show_segment {
                    write!(f, "{segment}:")?;
                }
                write!(f, "[{address:#x}]")
            }
            Operand::Memory(ref mem) => {
                write!(f, "{}", Memory { mem, show_segment })?;
                if mem.size.is_broadcast() && mem.size.element_size() != 0 {
                    let elements = self.vector_length() as usize / 8 / mem.size.element_size();
                    write!(f, "{{1to{elements}}}")?;
                }
                Ok(())
            }
            Operand::Nothing => Ok(()),
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.has_lock_prefix() {
            f.write_str("lock ")?;
        }
        if self.has_rep_prefix() {
            f.write_str("rep ")?;
        }
        if self.has_repne_prefix() {
            f.write_str("repne ")?;
        }

        f.write_str(self.mnemonic())?;

        for (idx, operand) in self.operands().iter().enumerate() {
            f.write_str(if idx == 0 { " " } else { ", " })?;
            self.fmt_operand(f, operand)?;

            if idx == 0 {
                if let Some(mask) = self.op_mask() {
                    write!(f, " {{{mask}}}")?;
                }
                if self.zeroing_masking() {
                    f.write_str("{z}")?;
                }
            }
        }

        if self.rounding_control() != RoundingControl::None {
            write!(f, ", {}", self.rounding_control().as_str())?;
        } else if self.suppress_all_exceptions() {
            f.write_str(", {sae}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{Bitness, Decoder};

    fn show(bitness: Bitness, bytes: &[u8]) -> String {
        match Decoder::new(bitness).decode_slice(bytes) {
            Ok(instr) => instr.to_string(),
            Err(err) => panic!("failed to decode {bytes:02x?}: {err}"),
        }
    }

    #[test]
    fn registers_and_immediates() {
        assert_eq!(show(Bitness::Bit64, &[0x48, 0x83, 0xc0, 0xff]), "add rax, -0x1");
        assert_eq!(show(Bitness::Bit64, &[0x90]), "nop");
    }

    #[test]
    fn memory_operands() {
        assert_eq!(
            show(Bitness::Bit64, &[0x8b, 0x44, 0x8b, 0xf0]),
            "mov eax, dword ptr [rbx + rcx * 4 - 0x10]"
        );
        assert_eq!(show(Bitness::Bit16, &[0xa0, 0x12, 0x34]), "mov al, byte ptr [0x3412]");
        assert_eq!(show(Bitness::Bit64, &[0xa4]), "movsb byte ptr es:[rdi], byte ptr ds:[rsi]");
    }

    #[test]
    fn evex_decorations() {
        assert_eq!(
            show(Bitness::Bit64, &[0x62, 0xf2, 0xcd, 0x0b, 0xb4, 0x50, 0x01]),
            "vpmadd52luq xmm2 {k3}, xmm6, xmmword ptr [rax + 0x10]"
        );
        assert_eq!(
            show(Bitness::Bit64, &[0x62, 0xf1, 0x7c, 0x38, 0x58, 0xc1]),
            "vaddps zmm0, zmm0, zmm1, {rd-sae}"
        );
    }
}
