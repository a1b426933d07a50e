//! ModRM/SIB memory operands for 16, 32 and 64-bit addressing.

use decoder::{ErrorKind, Reader};

use crate::decode::State;
use crate::memory::MemorySize;
use crate::operand::MemoryOperand;
use crate::register::RegSpec;
use crate::Bitness;

/// Base and index registers of 16-bit addressing, selected by ModRM.rm.
const ADDRESSING_16: [(RegSpec, Option<RegSpec>); 8] = [
    (RegSpec::bx(), Some(RegSpec::si())),
    (RegSpec::bx(), Some(RegSpec::di())),
    (RegSpec::bp(), Some(RegSpec::si())),
    (RegSpec::bp(), Some(RegSpec::di())),
    (RegSpec::si(), None),
    (RegSpec::di(), None),
    (RegSpec::bp(), None),
    (RegSpec::bx(), None),
];

/// Memory operand selected by a ModRM byte whose `mod` isn't `0b11`.
#[allow(non_snake_case)]
pub(crate) fn read_M(
    words: &mut Reader,
    state: &mut State,
    modrm: u8,
    size: MemorySize,
) -> Result<MemoryOperand, ErrorKind> {
    debug_assert!(modrm < 0b1100_0000);

    let mut mem = if state.address_size == 2 {
        read_M_16(words, state, modrm)?
    } else {
        read_M_32_64(words, state, modrm)?
    };

    mem.size = size;
    mem.segment = match state.prefixes.segment() {
        Some(segment) => segment,
        None => match mem.base {
            Some(base) if base.is_stack_pointer_or_frame() => RegSpec::ss(),
            _ => RegSpec::ds(),
        },
    };

    Ok(mem)
}

fn empty(scale: u8) -> MemoryOperand {
    MemoryOperand {
        segment: RegSpec::ds(),
        base: None,
        index: None,
        scale,
        displacement: 0,
        displ_size: 0,
        size: MemorySize::Unknown,
    }
}

#[allow(non_snake_case)]
fn read_M_16(words: &mut Reader, state: &mut State, modrm: u8) -> Result<MemoryOperand, ErrorKind> {
    let modbits = modrm >> 6;
    let rm = modrm & 7;
    let mut mem = empty(1);

    if modbits == 0b00 && rm == 0b110 {
        mem.displacement = read_disp(words, state, 2)? as u16 as u64;
        mem.displ_size = 2;
        return Ok(mem);
    }

    let (base, index) = ADDRESSING_16[rm as usize];
    mem.base = Some(base);
    mem.index = index;

    match modbits {
        0b01 => {
            let disp = read_disp(words, state, 1)?;
            mem.displacement = disp as u16 as u64;
            mem.displ_size = 1;
        }
        0b10 => {
            mem.displacement = read_disp(words, state, 2)? as u16 as u64;
            mem.displ_size = 2;
        }
        _ => {}
    }

    Ok(mem)
}

#[allow(non_snake_case)]
fn read_M_32_64(
    words: &mut Reader,
    state: &mut State,
    modrm: u8,
) -> Result<MemoryOperand, ErrorKind> {
    let modbits = modrm >> 6;
    let rm = modrm & 7;
    let width = state.address_size;
    let mut mem = empty(1);

    // a 32-bit displacement with no base register, or rip/eip relative in long mode
    let absolute = if rm == 0b100 {
        let sib = words.read_u8()?;
        let index = ((sib >> 3) & 7) | state.extra_index;
        let base = sib & 7;

        // index 0b100 without REX.X means no index
        if index != 0b100 {
            mem.index = Some(RegSpec::gpr(index, width, false));
            mem.scale = 1 << (sib >> 6);
        }

        if modbits == 0b00 && base == 0b101 {
            true
        } else {
            mem.base = Some(RegSpec::gpr(base | state.extra_base, width, false));
            false
        }
    } else if modbits == 0b00 && rm == 0b101 {
        if state.bitness == Bitness::Bit64 {
            mem.base = Some(if width == 8 { RegSpec::rip() } else { RegSpec::eip() });
        }
        true
    } else {
        mem.base = Some(RegSpec::gpr(rm | state.extra_base, width, false));
        false
    };

    let disp = if absolute {
        Some((read_disp(words, state, 4)?, width))
    } else {
        match modbits {
            0b01 => Some((read_disp(words, state, 1)?, 1)),
            0b10 => Some((read_disp(words, state, 4)?, width)),
            _ => None,
        }
    };

    if let Some((disp, displ_size)) = disp {
        mem.displacement = if width == 8 { disp as u64 } else { disp as u32 as u64 };
        mem.displ_size = displ_size;
    }

    Ok(mem)
}

/// Reads a sign extended displacement of `size` bytes, scaling disp8 by the EVEX `N`.
fn read_disp(words: &mut Reader, state: &mut State, size: u8) -> Result<i64, ErrorKind> {
    state.offsets.displacement_offset = words.offset() as u8;
    state.offsets.displacement_size = size;

    Ok(match size {
        1 => words.read_u8()? as i8 as i64 * state.disp8_scale as i64,
        2 => words.read_u16()? as i16 as i64,
        _ => words.read_u32()? as i32 as i64,
    })
}
