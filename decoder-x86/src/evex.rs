//! EVEX encoded forms, reached through the `62` escape.
//!
//! ```text
//! P0: R X B R' 0 0 m m
//! P1: W v v v v 1 p p
//! P2: z L'L    b V' a a a
//! ```

use bitflags::bitflags;
use decoder::{ErrorKind, Reader};

use crate::code::Code;
use crate::decode::State;
use crate::instruction::{Encoding, Instruction};
use crate::memory::{Element, MemorySize};
use crate::modrm::read_M;
use crate::operand::{Operand, RoundingControl};
use crate::prefixes::Mandatory;
use crate::register::{RegSpec, RegisterBank};
use crate::vex::{OpcodeMap, WBit};
use crate::{Bitness, DecoderOptions};

bitflags! {
    /// What EVEX.b may mean for a form.
    #[derive(Debug, PartialEq, Eq, Clone, Copy)]
    pub(crate) struct EvexFlags: u8 {
        /// Memory forms may broadcast one element.
        const BCST = 1;
        /// Register forms may embed a rounding mode.
        const ER   = 1 << 1;
        /// Register forms may suppress exceptions.
        const SAE  = 1 << 2;
    }
}

/// How compressed 8-bit displacements are scaled.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum TupleType {
    /// Whole vector, or one element when broadcasting.
    Full,
    /// Whole vector, never broadcast.
    FullMem,
    Tuple1Scalar,
}

/// `V` is ModRM.reg, `H` is vvvv, `W` is ModRM.rm, `k1z` an opmask with optional zeroing.
#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum EvexOperandCode {
    V_k1z_H_W,
    V_k1z_H_W_Ib,
    /// Unmasked.
    V_H_W_Ib,
    V_k1z_W,
    W_k1z_V,
    /// Opmask destination, merging only.
    K_k1_H_W,
    /// Vector destination sized by L'L, xmm or scalar memory source.
    V_k1z_Wss,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct EvexRecord {
    pub(crate) opcode: u8,
    pub(crate) w: WBit,
    /// Indexed by L'L.
    pub(crate) codes: [Code; 3],
    pub(crate) operands: EvexOperandCode,
    pub(crate) tuple: TupleType,
    pub(crate) element: Element,
    pub(crate) flags: EvexFlags,
}

macro_rules! evex {
    (
        $opcode:expr, $w:ident, [$c128:ident, $c256:ident, $c512:ident], $operands:ident,
        $tuple:ident, $element:ident $(, $flag:ident)*
    ) => {
        EvexRecord {
            opcode: $opcode,
            w: WBit::$w,
            codes: [Code::$c128, Code::$c256, Code::$c512],
            operands: EvexOperandCode::$operands,
            tuple: TupleType::$tuple,
            element: Element::$element,
            flags: EvexFlags::empty()$(.union(EvexFlags::$flag))*,
        }
    };
}

#[rustfmt::skip]
const EVEX_0F: [EvexRecord; 8] = [
    evex!(0x10, W0, [EVEX_Vmovups_xmm_k1z_xmmm128, EVEX_Vmovups_ymm_k1z_ymmm256, EVEX_Vmovups_zmm_k1z_zmmm512], V_k1z_W, FullMem, Float32),
    evex!(0x11, W0, [EVEX_Vmovups_xmmm128_k1z_xmm, EVEX_Vmovups_ymmm256_k1z_ymm, EVEX_Vmovups_zmmm512_k1z_zmm], W_k1z_V, FullMem, Float32),
    evex!(0x58, W0, [EVEX_Vaddps_xmm_k1z_xmm_xmmm128b32, EVEX_Vaddps_ymm_k1z_ymm_ymmm256b32, EVEX_Vaddps_zmm_k1z_zmm_zmmm512b32_er], V_k1z_H_W, Full, Float32, BCST, ER),
    evex!(0x59, W0, [EVEX_Vmulps_xmm_k1z_xmm_xmmm128b32, EVEX_Vmulps_ymm_k1z_ymm_ymmm256b32, EVEX_Vmulps_zmm_k1z_zmm_zmmm512b32_er], V_k1z_H_W, Full, Float32, BCST, ER),
    evex!(0x5c, W0, [EVEX_Vsubps_xmm_k1z_xmm_xmmm128b32, EVEX_Vsubps_ymm_k1z_ymm_ymmm256b32, EVEX_Vsubps_zmm_k1z_zmm_zmmm512b32_er], V_k1z_H_W, Full, Float32, BCST, ER),
    evex!(0x5d, W0, [EVEX_Vminps_xmm_k1z_xmm_xmmm128b32, EVEX_Vminps_ymm_k1z_ymm_ymmm256b32, EVEX_Vminps_zmm_k1z_zmm_zmmm512b32_sae], V_k1z_H_W, Full, Float32, BCST, SAE),
    evex!(0x5e, W0, [EVEX_Vdivps_xmm_k1z_xmm_xmmm128b32, EVEX_Vdivps_ymm_k1z_ymm_ymmm256b32, EVEX_Vdivps_zmm_k1z_zmm_zmmm512b32_er], V_k1z_H_W, Full, Float32, BCST, ER),
    evex!(0x5f, W0, [EVEX_Vmaxps_xmm_k1z_xmm_xmmm128b32, EVEX_Vmaxps_ymm_k1z_ymm_ymmm256b32, EVEX_Vmaxps_zmm_k1z_zmm_zmmm512b32_sae], V_k1z_H_W, Full, Float32, BCST, SAE),
];

#[rustfmt::skip]
const EVEX_66_0F: [EvexRecord; 17] = [
    evex!(0x10, W1, [EVEX_Vmovupd_xmm_k1z_xmmm128, EVEX_Vmovupd_ymm_k1z_ymmm256, EVEX_Vmovupd_zmm_k1z_zmmm512], V_k1z_W, FullMem, Float64),
    evex!(0x11, W1, [EVEX_Vmovupd_xmmm128_k1z_xmm, EVEX_Vmovupd_ymmm256_k1z_ymm, EVEX_Vmovupd_zmmm512_k1z_zmm], W_k1z_V, FullMem, Float64),
    evex!(0x58, W1, [EVEX_Vaddpd_xmm_k1z_xmm_xmmm128b64, EVEX_Vaddpd_ymm_k1z_ymm_ymmm256b64, EVEX_Vaddpd_zmm_k1z_zmm_zmmm512b64_er], V_k1z_H_W, Full, Float64, BCST, ER),
    evex!(0x59, W1, [EVEX_Vmulpd_xmm_k1z_xmm_xmmm128b64, EVEX_Vmulpd_ymm_k1z_ymm_ymmm256b64, EVEX_Vmulpd_zmm_k1z_zmm_zmmm512b64_er], V_k1z_H_W, Full, Float64, BCST, ER),
    evex!(0x5c, W1, [EVEX_Vsubpd_xmm_k1z_xmm_xmmm128b64, EVEX_Vsubpd_ymm_k1z_ymm_ymmm256b64, EVEX_Vsubpd_zmm_k1z_zmm_zmmm512b64_er], V_k1z_H_W, Full, Float64, BCST, ER),
    evex!(0x5d, W1, [EVEX_Vminpd_xmm_k1z_xmm_xmmm128b64, EVEX_Vminpd_ymm_k1z_ymm_ymmm256b64, EVEX_Vminpd_zmm_k1z_zmm_zmmm512b64_sae], V_k1z_H_W, Full, Float64, BCST, SAE),
    evex!(0x5e, W1, [EVEX_Vdivpd_xmm_k1z_xmm_xmmm128b64, EVEX_Vdivpd_ymm_k1z_ymm_ymmm256b64, EVEX_Vdivpd_zmm_k1z_zmm_zmmm512b64_er], V_k1z_H_W, Full, Float64, BCST, ER),
    evex!(0x5f, W1, [EVEX_Vmaxpd_xmm_k1z_xmm_xmmm128b64, EVEX_Vmaxpd_ymm_k1z_ymm_ymmm256b64, EVEX_Vmaxpd_zmm_k1z_zmm_zmmm512b64_sae], V_k1z_H_W, Full, Float64, BCST, SAE),
    evex!(0x6f, W0, [EVEX_Vmovdqa32_xmm_k1z_xmmm128, EVEX_Vmovdqa32_ymm_k1z_ymmm256, EVEX_Vmovdqa32_zmm_k1z_zmmm512], V_k1z_W, FullMem, UInt32),
    evex!(0x6f, W1, [EVEX_Vmovdqa64_xmm_k1z_xmmm128, EVEX_Vmovdqa64_ymm_k1z_ymmm256, EVEX_Vmovdqa64_zmm_k1z_zmmm512], V_k1z_W, FullMem, UInt64),
    evex!(0x76, W0, [EVEX_Vpcmpeqd_kr_k1_xmm_xmmm128b32, EVEX_Vpcmpeqd_kr_k1_ymm_ymmm256b32, EVEX_Vpcmpeqd_kr_k1_zmm_zmmm512b32], K_k1_H_W, Full, Int32, BCST),
    evex!(0x7f, W0, [EVEX_Vmovdqa32_xmmm128_k1z_xmm, EVEX_Vmovdqa32_ymmm256_k1z_ymm, EVEX_Vmovdqa32_zmmm512_k1z_zmm], W_k1z_V, FullMem, UInt32),
    evex!(0x7f, W1, [EVEX_Vmovdqa64_xmmm128_k1z_xmm, EVEX_Vmovdqa64_ymmm256_k1z_ymm, EVEX_Vmovdqa64_zmmm512_k1z_zmm], W_k1z_V, FullMem, UInt64),
    evex!(0xd4, W1, [EVEX_Vpaddq_xmm_k1z_xmm_xmmm128b64, EVEX_Vpaddq_ymm_k1z_ymm_ymmm256b64, EVEX_Vpaddq_zmm_k1z_zmm_zmmm512b64], V_k1z_H_W, Full, Int64, BCST),
    evex!(0xef, W0, [EVEX_Vpxord_xmm_k1z_xmm_xmmm128b32, EVEX_Vpxord_ymm_k1z_ymm_ymmm256b32, EVEX_Vpxord_zmm_k1z_zmm_zmmm512b32], V_k1z_H_W, Full, UInt32, BCST),
    evex!(0xef, W1, [EVEX_Vpxorq_xmm_k1z_xmm_xmmm128b64, EVEX_Vpxorq_ymm_k1z_ymm_ymmm256b64, EVEX_Vpxorq_zmm_k1z_zmm_zmmm512b64], V_k1z_H_W, Full, UInt64, BCST),
    evex!(0xfe, W0, [EVEX_Vpaddd_xmm_k1z_xmm_xmmm128b32, EVEX_Vpaddd_ymm_k1z_ymm_ymmm256b32, EVEX_Vpaddd_zmm_k1z_zmm_zmmm512b32], V_k1z_H_W, Full, Int32, BCST),
];

#[rustfmt::skip]
const EVEX_F3_0F: [EvexRecord; 4] = [
    evex!(0x6f, W0, [EVEX_Vmovdqu32_xmm_k1z_xmmm128, EVEX_Vmovdqu32_ymm_k1z_ymmm256, EVEX_Vmovdqu32_zmm_k1z_zmmm512], V_k1z_W, FullMem, UInt32),
    evex!(0x6f, W1, [EVEX_Vmovdqu64_xmm_k1z_xmmm128, EVEX_Vmovdqu64_ymm_k1z_ymmm256, EVEX_Vmovdqu64_zmm_k1z_zmmm512], V_k1z_W, FullMem, UInt64),
    evex!(0x7f, W0, [EVEX_Vmovdqu32_xmmm128_k1z_xmm, EVEX_Vmovdqu32_ymmm256_k1z_ymm, EVEX_Vmovdqu32_zmmm512_k1z_zmm], W_k1z_V, FullMem, UInt32),
    evex!(0x7f, W1, [EVEX_Vmovdqu64_xmmm128_k1z_xmm, EVEX_Vmovdqu64_ymmm256_k1z_ymm, EVEX_Vmovdqu64_zmmm512_k1z_zmm], W_k1z_V, FullMem, UInt64),
];

#[rustfmt::skip]
const EVEX_66_0F38: [EvexRecord; 7] = [
    evex!(0x18, W0, [EVEX_Vbroadcastss_xmm_k1z_xmmm32, EVEX_Vbroadcastss_ymm_k1z_xmmm32, EVEX_Vbroadcastss_zmm_k1z_xmmm32], V_k1z_Wss, Tuple1Scalar, Float32),
    evex!(0xb4, W1, [EVEX_Vpmadd52luq_xmm_k1z_xmm_xmmm128b64, EVEX_Vpmadd52luq_ymm_k1z_ymm_ymmm256b64, EVEX_Vpmadd52luq_zmm_k1z_zmm_zmmm512b64], V_k1z_H_W, Full, UInt52, BCST),
    evex!(0xb5, W1, [EVEX_Vpmadd52huq_xmm_k1z_xmm_xmmm128b64, EVEX_Vpmadd52huq_ymm_k1z_ymm_ymmm256b64, EVEX_Vpmadd52huq_zmm_k1z_zmm_zmmm512b64], V_k1z_H_W, Full, UInt52, BCST),
    evex!(0xb6, W0, [EVEX_Vfmaddsub231ps_xmm_k1z_xmm_xmmm128b32, EVEX_Vfmaddsub231ps_ymm_k1z_ymm_ymmm256b32, EVEX_Vfmaddsub231ps_zmm_k1z_zmm_zmmm512b32_er], V_k1z_H_W, Full, Float32, BCST, ER),
    evex!(0xb6, W1, [EVEX_Vfmaddsub231pd_xmm_k1z_xmm_xmmm128b64, EVEX_Vfmaddsub231pd_ymm_k1z_ymm_ymmm256b64, EVEX_Vfmaddsub231pd_zmm_k1z_zmm_zmmm512b64_er], V_k1z_H_W, Full, Float64, BCST, ER),
    evex!(0xb7, W0, [EVEX_Vfmsubadd231ps_xmm_k1z_xmm_xmmm128b32, EVEX_Vfmsubadd231ps_ymm_k1z_ymm_ymmm256b32, EVEX_Vfmsubadd231ps_zmm_k1z_zmm_zmmm512b32_er], V_k1z_H_W, Full, Float32, BCST, ER),
    evex!(0xb7, W1, [EVEX_Vfmsubadd231pd_xmm_k1z_xmm_xmmm128b64, EVEX_Vfmsubadd231pd_ymm_k1z_ymm_ymmm256b64, EVEX_Vfmsubadd231pd_zmm_k1z_zmm_zmmm512b64_er], V_k1z_H_W, Full, Float64, BCST, ER),
];

#[rustfmt::skip]
const EVEX_66_0F3A: [EvexRecord; 4] = [
    evex!(0x42, W0, [EVEX_Vdbpsadbw_xmm_k1z_xmm_xmmm128_imm8, EVEX_Vdbpsadbw_ymm_k1z_ymm_ymmm256_imm8, EVEX_Vdbpsadbw_zmm_k1z_zmm_zmmm512_imm8], V_k1z_H_W_Ib, FullMem, UInt8),
    evex!(0x43, W0, [INVALID, EVEX_Vshufi32x4_ymm_k1z_ymm_ymmm256b32_imm8, EVEX_Vshufi32x4_zmm_k1z_zmm_zmmm512b32_imm8], V_k1z_H_W_Ib, Full, UInt32, BCST),
    evex!(0x43, W1, [INVALID, EVEX_Vshufi64x2_ymm_k1z_ymm_ymmm256b64_imm8, EVEX_Vshufi64x2_zmm_k1z_zmm_zmmm512b64_imm8], V_k1z_H_W_Ib, Full, UInt64, BCST),
    evex!(0x44, WIG, [EVEX_Vpclmulqdq_xmm_xmm_xmmm128_imm8, EVEX_Vpclmulqdq_ymm_ymm_ymmm256_imm8, EVEX_Vpclmulqdq_zmm_zmm_zmmm512_imm8], V_H_W_Ib, FullMem, UInt64),
];

fn table(map: OpcodeMap, pp: Mandatory) -> &'static [EvexRecord] {
    match (map, pp) {
        (OpcodeMap::Map0F, Mandatory::None) => &EVEX_0F,
        (OpcodeMap::Map0F, Mandatory::P66) => &EVEX_66_0F,
        (OpcodeMap::Map0F, Mandatory::F3) => &EVEX_F3_0F,
        (OpcodeMap::Map0F38, Mandatory::P66) => &EVEX_66_0F38,
        (OpcodeMap::Map0F3A, Mandatory::P66) => &EVEX_66_0F3A,
        _ => &[],
    }
}

fn lookup(table: &'static [EvexRecord], opcode: u8, w: bool) -> Result<&'static EvexRecord, ErrorKind> {
    let start = table.partition_point(|record| record.opcode < opcode);
    let candidates = &table[start..];
    let end = candidates.partition_point(|record| record.opcode == opcode);

    candidates[..end]
        .iter()
        .find(|record| record.w.accepts(w))
        .ok_or(ErrorKind::InvalidOpcode)
}

/// Decodes an EVEX form. The reader is positioned right after the `62` byte.
pub(crate) fn read_evex(
    words: &mut Reader,
    state: &mut State,
    instr: &mut Instruction,
) -> Result<(), ErrorKind> {
    let p0 = words.read_u8()?;
    let p1 = words.read_u8()?;
    let p2 = words.read_u8()?;

    if p0 & 0b0000_1100 != 0 || p1 & 0b0000_0100 == 0 {
        return Err(ErrorKind::InvalidVexEvex);
    }

    let map = OpcodeMap::from_bits(p0 & 0b11)?;
    let long = state.bitness == Bitness::Bit64;
    let checked = !state.options.contains(DecoderOptions::NO_INVALID_CHECK);

    // the extension bits are stored inverted, and don't exist outside long mode
    if long {
        state.extra_reg = if p0 & 0x80 == 0 { 8 } else { 0 };
        state.extra_index = if p0 & 0x40 == 0 { 8 } else { 0 };
        state.extra_base = if p0 & 0x20 == 0 { 8 } else { 0 };
        state.extra_reg_evex = if p0 & 0x10 == 0 { 16 } else { 0 };
        state.extra_base_evex = if p0 & 0x40 == 0 { 16 } else { 0 };
    }

    let w = p1 & 0x80 != 0;
    state.w = long && w;
    state.vvvv = (!p1 >> 3) & 0b1111;
    if !long {
        state.vvvv &= 0b0111;
    } else if p2 & 0b0000_1000 == 0 {
        state.vvvv |= 16;
    }

    let pp = Mandatory::from_pp(p1);
    let zeroing = p2 & 0x80 != 0;
    let ll = (p2 >> 5) & 0b11;
    let b = p2 & 0x10 != 0;
    let aaa = p2 & 0b111;

    if checked && aaa == 0 && zeroing {
        return Err(ErrorKind::InvalidVexEvex);
    }

    let opcode = words.read_u8()?;
    state.opcode = opcode;

    let record = lookup(table(map, pp), opcode, w)?;
    let modrm = state.modrm(words)?;
    let register_form = modrm >= 0b1100_0000;

    let mut rounding = RoundingControl::None;
    let mut sae = false;
    let mut broadcast = false;

    let l = if register_form && b {
        if record.flags.contains(EvexFlags::ER) {
            rounding = RoundingControl::from_bits(ll);
        } else if record.flags.contains(EvexFlags::SAE) {
            sae = true;
        } else {
            return Err(ErrorKind::InvalidVexEvex);
        }
        // embedded rounding and sae imply a 512-bit vector
        2
    } else {
        if ll == 3 {
            return Err(ErrorKind::InvalidVexEvex);
        }
        if b {
            if record.tuple != TupleType::Full || !record.flags.contains(EvexFlags::BCST) {
                return Err(ErrorKind::InvalidVexEvex);
            }
            broadcast = true;
        }
        ll as usize
    };

    let code = record.codes[l];
    if code == Code::INVALID {
        return Err(ErrorKind::InvalidOpcode);
    }

    let bytes = 16u16 << l;
    let element = record.element;
    state.disp8_scale = match record.tuple {
        TupleType::Full if broadcast => element.size(),
        TupleType::Full | TupleType::FullMem => bytes as u8,
        TupleType::Tuple1Scalar => element.size(),
    };

    let mem = if broadcast {
        element.broadcast(bytes)
    } else {
        match record.tuple {
            TupleType::Full | TupleType::FullMem => element.packed(bytes),
            TupleType::Tuple1Scalar => element.scalar(),
        }
    };

    let uses_vvvv = matches!(
        record.operands,
        EvexOperandCode::V_k1z_H_W
            | EvexOperandCode::V_k1z_H_W_Ib
            | EvexOperandCode::V_H_W_Ib
            | EvexOperandCode::K_k1_H_W
    );
    if !uses_vvvv && state.vvvv != 0 {
        return Err(ErrorKind::InvalidVexEvex);
    }

    if checked {
        let store = record.operands == EvexOperandCode::W_k1z_V && !register_form;
        let unmasked = record.operands == EvexOperandCode::V_H_W_Ib && aaa != 0;
        let merge_only = matches!(
            record.operands,
            EvexOperandCode::K_k1_H_W | EvexOperandCode::V_H_W_Ib
        );
        if unmasked || (zeroing && (store || merge_only)) {
            return Err(ErrorKind::InvalidVexEvex);
        }
    }

    instr.code = code;
    instr.encoding = Encoding::EVEX;
    instr.vector_length = 128 << l;
    instr.op_mask = (aaa != 0).then(|| RegSpec::from_parts(aaa, RegisterBank::K));
    instr.zeroing = zeroing;
    instr.rounding = rounding;
    instr.sae = sae;

    let reg = ((modrm >> 3) & 7) | state.extra_reg | state.extra_reg_evex;
    let v = Operand::Register(RegSpec::vector(reg, bytes));
    let h = Operand::Register(RegSpec::vector(state.vvvv, bytes));

    match record.operands {
        EvexOperandCode::V_k1z_H_W => {
            instr.push(v);
            instr.push(h);
            instr.push(read_vector_rm(words, state, modrm, bytes, mem)?);
        }
        EvexOperandCode::V_k1z_H_W_Ib | EvexOperandCode::V_H_W_Ib => {
            instr.push(v);
            instr.push(h);
            instr.push(read_vector_rm(words, state, modrm, bytes, mem)?);
            instr.push(Operand::Immediate8(state.read_imm8(words)?));
        }
        EvexOperandCode::V_k1z_W => {
            instr.push(v);
            instr.push(read_vector_rm(words, state, modrm, bytes, mem)?);
        }
        EvexOperandCode::W_k1z_V => {
            instr.push(read_vector_rm(words, state, modrm, bytes, mem)?);
            instr.push(v);
        }
        EvexOperandCode::K_k1_H_W => {
            instr.push(Operand::Register(RegSpec::from_parts((modrm >> 3) & 7, RegisterBank::K)));
            instr.push(h);
            instr.push(read_vector_rm(words, state, modrm, bytes, mem)?);
        }
        EvexOperandCode::V_k1z_Wss => {
            instr.push(v);
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
