use crate::memory::MemorySize;
use crate::register::RegSpec;

/// A ModRM/SIB (or moffs) memory reference.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct MemoryOperand {
    /// Effective segment, after overrides.
    pub segment: RegSpec,
    pub base: Option<RegSpec>,
    pub index: Option<RegSpec>,
    /// 1, 2, 4 or 8. 1 when there is no index.
    pub scale: u8,
    /// Sign-extended to the address size and stored as its unsigned bit pattern.
    pub displacement: u64,
    /// 0, 1, 2, 4 or 8.
    pub displ_size: u8,
    pub size: MemorySize,
}

/// One operand, carrying only the fields relevant to its kind.
#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Operand {
    Register(RegSpec),
    NearBranch16(u16),
    NearBranch32(u32),
    NearBranch64(u64),
    FarBranch16 { selector: u16, offset: u16 },
    FarBranch32 { selector: u16, offset: u32 },
    Immediate8(u8),
    /// Second 8-bit immediate, only used by `enter`.
    Immediate8_2nd(u8),
    Immediate16(u16),
    Immediate32(u32),
    Immediate64(u64),
    Immediate8to16(i16),
    Immediate8to32(i32),
    Immediate8to64(i64),
    Immediate32to64(i64),
    /// `seg:[si]` string source.
    MemorySegSI { segment: RegSpec, size: MemorySize },
    MemorySegESI { segment: RegSpec, size: MemorySize },
    MemorySegRSI { segment: RegSpec, size: MemorySize },
    /// `seg:[di]`, as used by `maskmovq`.
    MemorySegDI { segment: RegSpec, size: MemorySize },
    MemorySegEDI { segment: RegSpec, size: MemorySize },
    MemorySegRDI { segment: RegSpec, size: MemorySize },
    /// `es:[di]` string destination, can't be overridden.
    MemoryESDI { size: MemorySize },
    MemoryESEDI { size: MemorySize },
    MemoryESRDI { size: MemorySize },
    /// Absolute 64-bit moffs address.
    Memory64 { segment: RegSpec, address: u64, size: MemorySize },
    Memory(MemoryOperand),
    Nothing,
}

/// The fieldless discriminant of an [`Operand`].
#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OpKind {
    Register,
    NearBranch16,
    NearBranch32,
    NearBranch64,
    FarBranch16,
    FarBranch32,
    Immediate8,
    Immediate8_2nd,
    Immediate16,
    Immediate32,
    Immediate64,
    Immediate8to16,
    Immediate8to32,
    Immediate8to64,
    Immediate32to64,
    MemorySegSI,
    MemorySegESI,
    MemorySegRSI,
    MemorySegDI,
    MemorySegEDI,
    MemorySegRDI,
    MemoryESDI,
    MemoryESEDI,
    MemoryESRDI,
    Memory64,
    Memory,
    Nothing,
}

impl Operand {
    pub fn kind(&self) -> OpKind {
        match self {
            Operand::Register(_) => OpKind::Register,
            Operand::NearBranch16(_) => OpKind::NearBranch16,
            Operand::NearBranch32(_) => OpKind::NearBranch32,
            Operand::NearBranch64(_) => OpKind::NearBranch64,
            Operand::FarBranch16 { .. } => OpKind::FarBranch16,
            Operand::FarBranch32 { .. } => OpKind::FarBranch32,
            Operand::Immediate8(_) => OpKind::Immediate8,
            Operand::Immediate8_2nd(_) => OpKind::Immediate8_2nd,
            Operand::Immediate16(_) => OpKind::Immediate16,
            Operand::Immediate32(_) => OpKind::Immediate32,
            Operand::Immediate64(_) => OpKind::Immediate64,
            Operand::Immediate8to16(_) => OpKind::Immediate8to16,
            Operand::Immediate8to32(_) => OpKind::Immediate8to32,
            Operand::Immediate8to64(_) => OpKind::Immediate8to64,
            Operand::Immediate32to64(_) => OpKind::Immediate32to64,
            Operand::MemorySegSI { .. } => OpKind::MemorySegSI,
            Operand::MemorySegESI { .. } => OpKind::MemorySegESI,
            Operand::MemorySegRSI { .. } => OpKind::MemorySegRSI,
            Operand::MemorySegDI { .. } => OpKind::MemorySegDI,
            Operand::MemorySegEDI { .. } => OpKind::MemorySegEDI,
            Operand::MemorySegRDI { .. } => OpKind::MemorySegRDI,
            Operand::MemoryESDI { .. } => OpKind::MemoryESDI,
            Operand::MemoryESEDI { .. } => OpKind::MemoryESEDI,
            Operand::MemoryESRDI { .. } => OpKind::MemoryESRDI,
            Operand::Memory64 { .. } => OpKind::Memory64,
            Operand::Memory(_) => OpKind::Memory,
            Operand::Nothing => OpKind::Nothing,
        }
    }

    /// Whether the operand references memory, either through ModRM or implicitly.
    pub fn is_memory(&self) -> bool {
        !matches!(
            self,
            Operand::Register(_)
                | Operand::NearBranch16(_)
                | Operand::NearBranch32(_)
                | Operand::NearBranch64(_)
                | Operand::FarBranch16 { .. }
                | Operand::FarBranch32 { .. }
                | Operand::Immediate8(_)
                | Operand::Immediate8_2nd(_)
                | Operand::Immediate16(_)
                | Operand::Immediate32(_)
                | Operand::Immediate64(_)
                | Operand::Immediate8to16(_)
                | Operand::Immediate8to32(_)
                | Operand::Immediate8to64(_)
                | Operand::Immediate32to64(_)
                | Operand::Nothing
        )
    }

    /// Immediate value zero extended (or sign extended, for the `to` kinds) to 64 bits.
    pub fn immediate(&self) -> Option<u64> {
        Some(match *self {
            Operand::Immediate8(imm) | Operand::Immediate8_2nd(imm) => imm as u64,
            Operand::Immediate16(imm) => imm as u64,
            Operand::Immediate32(imm) => imm as u64,
            Operand::Immediate64(imm) => imm,
            Operand::Immediate8to16(imm) => imm as u16 as u64,
            Operand::Immediate8to32(imm) => imm as u32 as u64,
            Operand::Immediate8to64(imm) | Operand::Immediate32to64(imm) => imm as u64,
            _ => return None,
        })
    }

    /// Segment the memory reference goes through.
    pub fn memory_segment(&self) -> Option<RegSpec> {
        match *self {
            Operand::MemorySegSI { segment, .. }
            | Operand::MemorySegESI { segment, .. }
            | Operand::MemorySegRSI { segment, .. }
            | Operand::MemorySegDI { segment, .. }
            | Operand::MemorySegEDI { segment, .. }
            | Operand::MemorySegRDI { segment, .. }
            | Operand::Memory64 { segment, .. } => Some(segment),
            Operand::MemoryESDI { .. }
            | Operand::MemoryESEDI { .. }
            | Operand::MemoryESRDI { .. } => Some(RegSpec::es()),
            Operand::Memory(mem) => Some(mem.segment),
            _ => None,
        }
    }

    pub fn memory_size(&self) -> Option<MemorySize> {
        match *self {
            Operand::MemorySegSI { size, .. }
            | Operand::MemorySegESI { size, .. }
            | Operand::MemorySegRSI { size, .. }
            | Operand::MemorySegDI { size, .. }
            | Operand::MemorySegEDI { size, .. }
            | Operand::MemorySegRDI { size, .. }
            | Operand::MemoryESDI { size }
            | Operand::MemoryESEDI { size }
            | Operand::MemoryESRDI { size }
            | Operand::Memory64 { size, .. } => Some(size),
            Operand::Memory(mem) => Some(mem.size),
            _ => None,
        }
    }
}

/// Rounding mode embedded in an EVEX register form.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum RoundingControl {
    #[default]
    None,
    RoundToNearest,
    RoundDown,
    RoundUp,
    RoundTowardZero,
}

impl RoundingControl {
    /// From the two `L'L` bits of an EVEX payload.
    pub(crate) const fn from_bits(bits: u8) -> RoundingControl {
        match bits & 0b11 {
            0 => RoundingControl::RoundToNearest,
            1 => RoundingControl::RoundDown,
            2 => RoundingControl::RoundUp,
            _ => RoundingControl::RoundTowardZero,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            RoundingControl::None => "",
            RoundingControl::RoundToNearest => "{rn-sae}",
            RoundingControl::RoundDown => "{rd-sae}",
            RoundingControl::RoundUp => "{ru-sae}",
            RoundingControl::RoundTowardZero => "{rz-sae}",
        }
    }
}
