//! VEX encoded forms, reached through `C4` (three byte) and `C5` (two byte) escapes.

use decoder::{ErrorKind, Reader};

use crate::code::Code;
use crate::decode::State;
use crate::instruction::{Encoding, Instruction};
use crate::memory::MemorySize;
use crate::modrm::read_M;
use crate::operand::Operand;
use crate::prefixes::Mandatory;
use crate::register::RegSpec;
use crate::Bitness;

/// Which values of the W bit a form accepts.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum WBit {
    W0,
    W1,
    /// Ignored.
    WIG,
}

impl WBit {
    pub(crate) const fn accepts(self, w: bool) -> bool {
        match self {
            WBit::W0 => !w,
            WBit::W1 => w,
            WBit::WIG => true,
        }
    }
}

/// Opcode maps selectable by VEX.mmmmm and EVEX.mm.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum OpcodeMap {
    Map0F,
    Map0F38,
    Map0F3A,
}

impl OpcodeMap {
    pub(crate) const fn from_bits(bits: u8) -> Result<OpcodeMap, ErrorKind> {
        match bits {
            1 => Ok(OpcodeMap::Map0F),
            2 => Ok(OpcodeMap::Map0F38),
            3 => Ok(OpcodeMap::Map0F3A),
            _ => Err(ErrorKind::InvalidVexEvex),
        }
    }
}

/// `V` is ModRM.reg, `H` is vvvv, `W` is ModRM.rm. The `ss` variants are always xmm.
#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum VexOperandCode {
    Nothing,
    V_W,
    W_V,
    V_H_W,
    V_H_W_Ib,
    /// Vector destination sized by L, xmm or scalar memory source.
    V_Wss,
    Vss_Hss_Wss,
}

impl VexOperandCode {
    const fn uses_vvvv(self) -> bool {
        matches!(
            self,
            VexOperandCode::V_H_W | VexOperandCode::V_H_W_Ib | VexOperandCode::Vss_Hss_Wss
        )
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct VexRecord {
    pub(crate) opcode: u8,
    pub(crate) w: WBit,
    /// Indexed by VEX.L.
    pub(crate) codes: [Code; 2],
    pub(crate) operands: VexOperandCode,
    pub(crate) mem: [MemorySize; 2],
}

macro_rules! vex {
    ($opcode:expr, $w:ident, [$c128:ident, $c256:ident], $operands:ident, [$m128:ident, $m256:ident]) => {
        VexRecord {
            opcode: $opcode,
            w: WBit::$w,
            codes: [Code::$c128, Code::$c256],
            operands: VexOperandCode::$operands,
            mem: [MemorySize::$m128, MemorySize::$m256],
        }
    };
}

#[rustfmt::skip]
const VEX_0F: [VexRecord; 16] = [
    vex!(0x10, WIG, [VEX_Vmovups_xmm_xmmm128, VEX_Vmovups_ymm_ymmm256], V_W, [Packed128_Float32, Packed256_Float32]),
    vex!(0x11, WIG, [VEX_Vmovups_xmmm128_xmm, VEX_Vmovups_ymmm256_ymm], W_V, [Packed128_Float32, Packed256_Float32]),
    vex!(0x28, WIG, [VEX_Vmovaps_xmm_xmmm128, VEX_Vmovaps_ymm_ymmm256], V_W, [Packed128_Float32, Packed256_Float32]),
    vex!(0x29, WIG, [VEX_Vmovaps_xmmm128_xmm, VEX_Vmovaps_ymmm256_ymm], W_V, [Packed128_Float32, Packed256_Float32]),
    vex!(0x51, WIG, [VEX_Vsqrtps_xmm_xmmm128, VEX_Vsqrtps_ymm_ymmm256], V_W, [Packed128_Float32, Packed256_Float32]),
    vex!(0x54, WIG, [VEX_Vandps_xmm_xmm_xmmm128, VEX_Vandps_ymm_ymm_ymmm256], V_H_W, [Packed128_Float32, Packed256_Float32]),
    vex!(0x55, WIG, [VEX_Vandnps_xmm_xmm_xmmm128, VEX_Vandnps_ymm_ymm_ymmm256], V_H_W, [Packed128_Float32, Packed256_Float32]),
    vex!(0x56, WIG, [VEX_Vorps_xmm_xmm_xmmm128, VEX_Vorps_ymm_ymm_ymmm256], V_H_W, [Packed128_Float32, Packed256_Float32]),
    vex!(0x57, WIG, [VEX_Vxorps_xmm_xmm_xmmm128, VEX_Vxorps_ymm_ymm_ymmm256], V_H_W, [Packed128_Float32, Packed256_Float32]),
    vex!(0x58, WIG, [VEX_Vaddps_xmm_xmm_xmmm128, VEX_Vaddps_ymm_ymm_ymmm256], V_H_W, [Packed128_Float32, Packed256_Float32]),
    vex!(0x59, WIG, [VEX_Vmulps_xmm_xmm_xmmm128, VEX_Vmulps_ymm_ymm_ymmm256], V_H_W, [Packed128_Float32, Packed256_Float32]),
    vex!(0x5c, WIG, [VEX_Vsubps_xmm_xmm_xmmm128, VEX_Vsubps_ymm_ymm_ymmm256], V_H_W, [Packed128_Float32, Packed256_Float32]),
    vex!(0x5d, WIG, [VEX_Vminps_xmm_xmm_xmmm128, VEX_Vminps_ymm_ymm_ymmm256], V_H_W, [Packed128_Float32, Packed256_Float32]),
    vex!(0x5e, WIG, [VEX_Vdivps_xmm_xmm_xmmm128, VEX_Vdivps_ymm_ymm_ymmm256], V_H_W, [Packed128_Float32, Packed256_Float32]),
    vex!(0x5f, WIG, [VEX_Vmaxps_xmm_xmm_xmmm128, VEX_Vmaxps_ymm_ymm_ymmm256], V_H_W, [Packed128_Float32, Packed256_Float32]),
    vex!(0x77, WIG, [VEX_Vzeroupper, VEX_Vzeroall], Nothing, [Unknown, Unknown]),
];

#[rustfmt::skip]
const VEX_66_0F: [VexRecord; 20] = [
    vex!(0x10, WIG, [VEX_Vmovupd_xmm_xmmm128, VEX_Vmovupd_ymm_ymmm256], V_W, [Packed128_Float64, Packed256_Float64]),
    vex!(0x11, WIG, [VEX_Vmovupd_xmmm128_xmm, VEX_Vmovupd_ymmm256_ymm], W_V, [Packed128_Float64, Packed256_Float64]),
    vex!(0x28, WIG, [VEX_Vmovapd_xmm_xmmm128, VEX_Vmovapd_ymm_ymmm256], V_W, [Packed128_Float64, Packed256_Float64]),
    vex!(0x29, WIG, [VEX_Vmovapd_xmmm128_xmm, VEX_Vmovapd_ymmm256_ymm], W_V, [Packed128_Float64, Packed256_Float64]),
    vex!(0x51, WIG, [VEX_Vsqrtpd_xmm_xmmm128, VEX_Vsqrtpd_ymm_ymmm256], V_W, [Packed128_Float64, Packed256_Float64]),
    vex!(0x54, WIG, [VEX_Vandpd_xmm_xmm_xmmm128, VEX_Vandpd_ymm_ymm_ymmm256], V_H_W, [Packed128_Float64, Packed256_Float64]),
    vex!(0x55, WIG, [VEX_Vandnpd_xmm_xmm_xmmm128, VEX_Vandnpd_ymm_ymm_ymmm256], V_H_W, [Packed128_Float64, Packed256_Float64]),
    vex!(0x56, WIG, [VEX_Vorpd_xmm_xmm_xmmm128, VEX_Vorpd_ymm_ymm_ymmm256], V_H_W, [Packed128_Float64, Packed256_Float64]),
    vex!(0x57, WIG, [VEX_Vxorpd_xmm_xmm_xmmm128, VEX_Vxorpd_ymm_ymm_ymmm256], V_H_W, [Packed128_Float64, Packed256_Float64]),
    vex!(0x58, WIG, [VEX_Vaddpd_xmm_xmm_xmmm128, VEX_Vaddpd_ymm_ymm_ymmm256], V_H_W, [Packed128_Float64, Packed256_Float64]),
    vex!(0x59, WIG, [VEX_Vmulpd_xmm_xmm_xmmm128, VEX_Vmulpd_ymm_ymm_ymmm256], V_H_W, [Packed128_Float64, Packed256_Float64]),
    vex!(0x5c, WIG, [VEX_Vsubpd_xmm_xmm_xmmm128, VEX_Vsubpd_ymm_ymm_ymmm256], V_H_W, [Packed128_Float64, Packed256_Float64]),
    vex!(0x5d, WIG, [VEX_Vminpd_xmm_xmm_xmmm128, VEX_Vminpd_ymm_ymm_ymmm256], V_H_W, [Packed128_Float64, Packed256_Float64]),
    vex!(0x5e, WIG, [VEX_Vdivpd_xmm_xmm_xmmm128, VEX_Vdivpd_ymm_ymm_ymmm256], V_H_W, [Packed128_Float64, Packed256_Float64]),
    vex!(0x5f, WIG, [VEX_Vmaxpd_xmm_xmm_xmmm128, VEX_Vmaxpd_ymm_ymm_ymmm256], V_H_W, [Packed128_Float64, Packed256_Float64]),
    vex!(0x6f, WIG, [VEX_Vmovdqa_xmm_xmmm128, VEX_Vmovdqa_ymm_ymmm256], V_W, [UInt128, UInt256]),
    vex!(0x7f, WIG, [VEX_Vmovdqa_xmmm128_xmm, VEX_Vmovdqa_ymmm256_ymm], W_V, [UInt128, UInt256]),
    vex!(0xd4, WIG, [VEX_Vpaddq_xmm_xmm_xmmm128, VEX_Vpaddq_ymm_ymm_ymmm256], V_H_W, [Packed128_UInt64, Packed256_UInt64]),
    vex!(0xef, WIG, [VEX_Vpxor_xmm_xmm_xmmm128, VEX_Vpxor_ymm_ymm_ymmm256], V_H_W, [UInt128, UInt256]),
    vex!(0xfe, WIG, [VEX_Vpaddd_xmm_xmm_xmmm128, VEX_Vpaddd_ymm_ymm_ymmm256], V_H_W, [Packed128_UInt32, Packed256_UInt32]),
];

#[rustfmt::skip]
const VEX_F3_0F: [VexRecord; 9] = [
    vex!(0x51, WIG, [VEX_Vsqrtss_xmm_xmm_xmmm32, VEX_Vsqrtss_xmm_xmm_xmmm32], Vss_Hss_Wss, [Float32, Float32]),
    vex!(0x58, WIG, [VEX_Vaddss_xmm_xmm_xmmm32, VEX_Vaddss_xmm_xmm_xmmm32], Vss_Hss_Wss, [Float32, Float32]),
    vex!(0x59, WIG, [VEX_Vmulss_xmm_xmm_xmmm32, VEX_Vmulss_xmm_xmm_xmmm32], Vss_Hss_Wss, [Float32, Float32]),
    vex!(0x5c, WIG, [VEX_Vsubss_xmm_xmm_xmmm32, VEX_Vsubss_xmm_xmm_xmmm32], Vss_Hss_Wss, [Float32, Float32]),
    vex!(0x5d, WIG, [VEX_Vminss_xmm_xmm_xmmm32, VEX_Vminss_xmm_xmm_xmmm32], Vss_Hss_Wss, [Float32, Float32]),
    vex!(0x5e, WIG, [VEX_Vdivss_xmm_xmm_xmmm32, VEX_Vdivss_xmm_xmm_xmmm32], Vss_Hss_Wss, [Float32, Float32]),
    vex!(0x5f, WIG, [VEX_Vmaxss_xmm_xmm_xmmm32, VEX_Vmaxss_xmm_xmm_xmmm32], Vss_Hss_Wss, [Float32, Float32]),
    vex!(0x6f, WIG, [VEX_Vmovdqu_xmm_xmmm128, VEX_Vmovdqu_ymm_ymmm256], V_W, [UInt128, UInt256]),
    vex!(0x7f, WIG, [VEX_Vmovdqu_xmmm128_xmm, VEX_Vmovdqu_ymmm256_ymm], W_V, [UInt128, UInt256]),
];

#[rustfmt::skip]
const VEX_F2_0F: [VexRecord; 7] = [
    vex!(0x51, WIG, [VEX_Vsqrtsd_xmm_xmm_xmmm64, VEX_Vsqrtsd_xmm_xmm_xmmm64], Vss_Hss_Wss, [Float64, Float64]),
    vex!(0x58, WIG, [VEX_Vaddsd_xmm_xmm_xmmm64, VEX_Vaddsd_xmm_xmm_xmmm64], Vss_Hss_Wss, [Float64, Float64]),
    vex!(0x59, WIG, [VEX_Vmulsd_xmm_xmm_xmmm64, VEX_Vmulsd_xmm_xmm_xmmm64], Vss_Hss_Wss, [Float64, Float64]),
    vex!(0x5c, WIG, [VEX_Vsubsd_xmm_xmm_xmmm64, VEX_Vsubsd_xmm_xmm_xmmm64], Vss_Hss_Wss, [Float64, Float64]),
    vex!(0x5d, WIG, [VEX_Vminsd_xmm_xmm_xmmm64, VEX_Vminsd_xmm_xmm_xmmm64], Vss_Hss_Wss, [Float64, Float64]),
    vex!(0x5e, WIG, [VEX_Vdivsd_xmm_xmm_xmmm64, VEX_Vdivsd_xmm_xmm_xmmm64], Vss_Hss_Wss, [Float64, Float64]),
    vex!(0x5f, WIG, [VEX_Vmaxsd_xmm_xmm_xmmm64, VEX_Vmaxsd_xmm_xmm_xmmm64], Vss_Hss_Wss, [Float64, Float64]),
];

#[rustfmt::skip]
const VEX_66_0F38: [VexRecord; 7] = [
    vex!(0x18, W0, [VEX_Vbroadcastss_xmm_xmmm32, VEX_Vbroadcastss_ymm_xmmm32], V_Wss, [Float32, Float32]),
    vex!(0xb4, W1, [VEX_Vpmadd52luq_xmm_xmm_xmmm128, VEX_Vpmadd52luq_ymm_ymm_ymmm256], V_H_W, [Packed128_UInt52, Packed256_UInt52]),
    vex!(0xb5, W1, [VEX_Vpmadd52huq_xmm_xmm_xmmm128, VEX_Vpmadd52huq_ymm_ymm_ymmm256], V_H_W, [Packed128_UInt52, Packed256_UInt52]),
    vex!(0xb6, W0, [VEX_Vfmaddsub231ps_xmm_xmm_xmmm128, VEX_Vfmaddsub231ps_ymm_ymm_ymmm256], V_H_W, [Packed128_Float32, Packed256_Float32]),
    vex!(0xb6, W1, [VEX_Vfmaddsub231pd_xmm_xmm_xmmm128, VEX_Vfmaddsub231pd_ymm_ymm_ymmm256], V_H_W, [Packed128_Float64, Packed256_Float64]),
    vex!(0xb7, W0, [VEX_Vfmsubadd231ps_xmm_xmm_xmmm128, VEX_Vfmsubadd231ps_ymm_ymm_ymmm256], V_H_W, [Packed128_Float32, Packed256_Float32]),
    vex!(0xb7, W1, [VEX_Vfmsubadd231pd_xmm_xmm_xmmm128, VEX_Vfmsubadd231pd_ymm_ymm_ymmm256], V_H_W, [Packed128_Float64, Packed256_Float64]),
];

#[rustfmt::skip]
const VEX_66_0F3A: [VexRecord; 5] = [
    vex!(0x40, WIG, [VEX_Vdpps_xmm_xmm_xmmm128_imm8, VEX_Vdpps_ymm_ymm_ymmm256_imm8], V_H_W_Ib, [Packed128_Float32, Packed256_Float32]),
    vex!(0x41, WIG, [VEX_Vdppd_xmm_xmm_xmmm128_imm8, INVALID], V_H_W_Ib, [Packed128_Float64, Unknown]),
    vex!(0x42, WIG, [VEX_Vmpsadbw_xmm_xmm_xmmm128_imm8, VEX_Vmpsadbw_ymm_ymm_ymmm256_imm8], V_H_W_Ib, [Packed128_UInt8, Packed256_UInt8]),
    vex!(0x44, WIG, [VEX_Vpclmulqdq_xmm_xmm_xmmm128_imm8, VEX_Vpclmulqdq_ymm_ymm_ymmm256_imm8], V_H_W_Ib, [Packed128_UInt64, Packed256_UInt64]),
    vex!(0x46, W0, [INVALID, VEX_Vperm2i128_ymm_ymm_ymmm256_imm8], V_H_W_Ib, [Unknown, Packed256_Int128]),
];

fn table(map: OpcodeMap, pp: Mandatory) -> &'static [VexRecord] {
    match (map, pp) {
        (OpcodeMap::Map0F, Mandatory::None) => &VEX_0F,
        (OpcodeMap::Map0F, Mandatory::P66) => &VEX_66_0F,
        (OpcodeMap::Map0F, Mandatory::F3) => &VEX_F3_0F,
        (OpcodeMap::Map0F, Mandatory::F2) => &VEX_F2_0F,
        (OpcodeMap::Map0F38, Mandatory::P66) => &VEX_66_0F38,
        (OpcodeMap::Map0F3A, Mandatory::P66) => &VEX_66_0F3A,
        _ => &[],
    }
}

/// Binary search of a table sorted by opcode, then the first entry whose W matches.
fn lookup(table: &'static [VexRecord], opcode: u8, w: bool) -> Result<&'static VexRecord, ErrorKind> {
    let start = table.partition_point(|record| record.opcode < opcode);
    let candidates = &table[start..];
    let end = candidates.partition_point(|record| record.opcode == opcode);

    candidates[..end]
        .iter()
        .find(|record| record.w.accepts(w))
        .ok_or(ErrorKind::InvalidOpcode)
}

/// Decodes a VEX form. The reader is positioned right after the `C4`/`C5` byte.
pub(crate) fn read_vex(
    words: &mut Reader,
    state: &mut State,
    instr: &mut Instruction,
    three_byte: bool,
) -> Result<(), ErrorKind> {
    let long = state.bitness == Bitness::Bit64;
    let first = words.read_u8()?;

    // inverted R, X and B only reach registers 8 through 15 in long mode
    let (map, w, payload) = if three_byte {
        let second = words.read_u8()?;
        if long {
            state.extra_reg = if first & 0x80 == 0 { 8 } else { 0 };
            state.extra_index = if first & 0x40 == 0 { 8 } else { 0 };
            state.extra_base = if first & 0x20 == 0 { 8 } else { 0 };
        }
        (OpcodeMap::from_bits(first & 0x1f)?, second & 0x80 != 0, second)
    } else {
        if long {
            state.extra_reg = if first & 0x80 == 0 { 8 } else { 0 };
        }
        (OpcodeMap::Map0F, false, first)
    };

    state.w = long && w;
    let vvvv_mask = if long { 0b1111 } else { 0b0111 };
    state.vvvv = (!payload >> 3) & vvvv_mask;
    let l = ((payload >> 2) & 1) as usize;
    let pp = Mandatory::from_pp(payload);

    let opcode = words.read_u8()?;
    state.opcode = opcode;

    let record = lookup(table(map, pp), opcode, w)?;
    let code = record.codes[l];
    if code == Code::INVALID {
        return Err(ErrorKind::InvalidOpcode);
    }

    if !record.operands.uses_vvvv() && state.vvvv != 0 {
        return Err(ErrorKind::InvalidVexEvex);
    }

    instr.code = code;
    instr.encoding = Encoding::VEX;
    instr.vector_length = if record.operands == VexOperandCode::Vss_Hss_Wss { 128 } else { 128 << l };

    let bytes = 16u16 << l;
    let mem = record.mem[l];

    match record.operands {
        VexOperandCode::Nothing => {}
        VexOperandCode::V_W => {
            let modrm = state.modrm(words)?;
            instr.push(Operand::Register(RegSpec::vector(state.reg_field(modrm), bytes)));
            instr.push(read_vector_rm(words, state, modrm, bytes, mem)?);
        }
        VexOperandCode::W_V => {
            let modrm = state.modrm(words)?;
            instr.push(read_vector_rm(words, state, modrm, bytes, mem)?);
            instr.push(Operand::Register(RegSpec::vector(state.reg_field(modrm), bytes)));
        }
        VexOperandCode::V_H_W | VexOperandCode::V_H_W_Ib => {
            let modrm = state.modrm(words)?;
            instr.push(Operand::Register(RegSpec::vector(state.reg_field(modrm), bytes)));
            instr.push(Operand::Register(RegSpec::vector(state.vvvv, bytes)));
            instr.push(read_vector_rm(words, state, modrm, bytes, mem)?);
            if record.operands == VexOperandCode::V_H_W_Ib {
                instr.push(Operand::Immediate8(state.read_imm8(words)?));
            }
        }
        VexOperandCode::V_Wss => {
            let modrm = state.modrm(words)?;
            instr.push(Operand::Register(RegSpec::vector(state.reg_field(modrm), bytes)));
            instr.push(read_vector_rm(words, state, modrm, 16, mem)?);
        }
        VexOperandCode::Vss_Hss_Wss => {
            let modrm = state.modrm(words)?;
            instr.push(Operand::Register(RegSpec::vector(state.reg_field(modrm), 16)));
            instr.push(Operand::Register(RegSpec::vector(state.vvvv, 16)));
            instr.push(read_vector_rm(words, state, modrm, 16, mem)?);
        }
    }

    Ok(())
}

/// ModRM.rm as a vector register of `bytes` bytes, or memory.
fn read_vector_rm(
    words: &mut Reader,
    state: &mut State,
    modrm: u8,
    bytes: u16,
    mem: MemorySize,
) -> Result<Operand, ErrorKind> {
    if modrm >= 0b1100_0000 {
        let num = (modrm & 7) | state.extra_base | state.extra_base_evex;
        Ok(Operand::Register(RegSpec::vector(num, bytes)))
    } else {
        Ok(Operand::Memory(read_M(words, state, modrm, mem)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(table: &[VexRecord]) -> bool {
        table.windows(2).all(|pair| pair[0].opcode <= pair[1].opcode)
    }

    #[test]
    fn tables_are_sorted() {
        for map in [OpcodeMap::Map0F, OpcodeMap::Map0F38, OpcodeMap::Map0F3A] {
            for pp in 0..4 {
                assert!(sorted(table(map, Mandatory::from_pp(pp))), "{map:?} pp={pp}");
            }
        }
    }

    #[test]
    fn w_selects_between_records() {
        let ps = lookup(&VEX_66_0F38, 0xb6, false).unwrap();
        let pd = lookup(&VEX_66_0F38, 0xb6, true).unwrap();
        assert_eq!(ps.codes[0], Code::VEX_Vfmaddsub231ps_xmm_xmm_xmmm128);
        assert_eq!(pd.codes[0], Code::VEX_Vfmaddsub231pd_xmm_xmm_xmmm128);

        assert_eq!(lookup(&VEX_66_0F38, 0xb4, false), Err(ErrorKind::InvalidOpcode));
        assert_eq!(lookup(&VEX_66_0F38, 0xb0, true), Err(ErrorKind::InvalidOpcode));
    }
}
