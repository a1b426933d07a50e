//! One-byte opcode map, its ModRM groups and the record types the other maps share.

use crate::code::Code;
use crate::memory::MemorySize;
use crate::x87;

/// How an opcode byte is to be understood.
///
/// Records nest: a group, a mandatory-prefix column or a mode split only says where to look
/// next, until an `Instruction`, `Sized` or `Loop` record is reached.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Interpretation {
    Invalid,
    Prefix,
    Instruction(Code),
    /// Indexed by operand width: 16, 32, 64 bits.
    Sized([Code; 3]),
    /// `loop`/`jcxz`, selected by address and operand size.
    Loop([Code; 6]),
    /// Selected by ModRM.reg.
    Group(&'static [OpcodeRecord; 8]),
    /// Selected by ModRM.rm.
    RmGroup(&'static [OpcodeRecord; 8]),
    /// Selected by whether ModRM addresses memory or a register.
    RegMem {
        mem: &'static OpcodeRecord,
        reg: &'static OpcodeRecord,
    },
    /// SSE style columns for none/66/F3/F2. The selecting prefix is consumed.
    Mandatory(&'static [OpcodeRecord; 4]),
    /// Columns for none/F3/F2 where 66 keeps sizing the operands.
    Rep(&'static [OpcodeRecord; 3]),
    /// 16/32-bit modes versus long mode.
    Mode {
        legacy: &'static OpcodeRecord,
        long: &'static OpcodeRecord,
    },
    /// 0x90, which is `nop`, `pause` or `xchg r8, rax`.
    Nop(&'static OpcodeRecord),
    Escape0F,
    /// VEX/EVEX escapes, which outside long mode fall back to a legacy form unless the next
    /// byte has both top bits set.
    Vex2(&'static OpcodeRecord),
    Vex3(&'static OpcodeRecord),
    Evex(&'static OpcodeRecord),
}

/// How operands are read for a legacy form.
///
/// Names follow the SDM's operand notation: `E` is ModRM.rm as a GPR or memory, `G` is
/// ModRM.reg, `Z` a register in the low opcode bits, `I` an immediate (`Ibs` sign extended),
/// `J` a relative branch, `X`/`Y` the string source and destination, `O` a moffs, `V`/`W`
/// xmm in ModRM.reg/rm, `P`/`Q` their mmx counterparts, `U`/`N` register-only rm.
#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum OperandCode {
    Nothing,
    Eb_Gb,
    Ev_Gv,
    Gb_Eb,
    Gv_Ev,
    AL_Ib,
    rAX_Iz,
    /// Segment register from opcode bits 5:3.
    Sreg,
    Zv,
    Zv_stack,
    Zv_rAX,
    Zb_Ib,
    Zv_Iv,
    Gv_Ma,
    Ew_Gw,
    Gv_Ez,
    Iz_stack,
    Ibs_stack,
    Gv_Ev_Iz,
    Gv_Ev_Ibs,
    Yb_DX,
    Yz_DX,
    DX_Xb,
    DX_Xz,
    Jb,
    Jz,
    Eb_Ib,
    Ev_Iz,
    Ev_Ibs,
    Ev_Ib,
    Eb_1,
    Ev_1,
    Eb_CL,
    Ev_CL,
    Eb,
    Ev,
    Ew,
    Ev_stack,
    Ev_branch,
    Mp_far,
    Ev_Sw,
    Sw_Ev,
    Gv_M,
    Ap,
    Gv_Mp,
    AL_Ob,
    rAX_Ov,
    Ob_AL,
    Ov_rAX,
    Yb_Xb,
    Yv_Xv,
    Xb_Yb,
    Xv_Yv,
    Yb_AL,
    Yv_rAX,
    AL_Xb,
    rAX_Xv,
    AL_Yb,
    rAX_Yv,
    Stack,
    Iw_stack,
    Iw,
    Iw_Ib,
    Ib,
    eAX_Ib,
    Ib_AL,
    Ib_eAX,
    AL_DX,
    eAX_DX,
    DX_AL,
    DX_eAX,
    Xlat,

    // x87
    Mx87,
    Mx87_env,
    ST_STi,
    STi_ST,
    STi,
    AX,

    // 0F
    Ew_sys,
    Ms,
    M,
    Gv_Evw,
    Gv_Eb,
    Gv_Ew,
    R_Cr,
    Cr_R,
    R_Dr,
    Dr_R,
    Ev_Gv_Ib,
    Ev_Gv_CL,
    Mq_dq,
    My_Gy,
    Gv_Mv,
    Mv_Gv,
    Gy_Eb,
    Gy_Ev,

    // mmx and sse
    V_W,
    W_V,
    V_M,
    M_V,
    V_U,
    V_W_Ib,
    P_Q,
    Q_P,
    P_Q_Ib,
    N_Ib,
    U_Ib,
    P_Ey,
    Ey_P,
    V_Ey,
    Ey_V,
    V_Q,
    P_W,
    Gy_W,
    Gy_U,
    Gd_N,
    Gd_U,
    P_Ew_Ib,
    V_Ew_Ib,
    Gd_N_Ib,
    Gd_U_Ib,
    Ey_V_Ib,
    V_Ey_Ib,
    rDI_P_N,
    rDI_V_U,
    M_P,
    V_N,
    P_U,
}

/// Which prefixes decide the operand width of a form.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum SizePolicy {
    /// 66 and REX.W.
    Default,
    /// Defaults to 64 bits in long mode, 66 gets 16.
    Stack,
    /// Always 64 bits in long mode, unless AMD rules give 66 a 16-bit branch.
    Branch,
    /// REX.W or VEX.W picks 64 bits, 32 otherwise.
    Y,
    /// Capped at 32 bits.
    Z,
    /// The mode's native width.
    Native,
}

impl OperandCode {
    pub(crate) const fn size_policy(self) -> SizePolicy {
        use OperandCode::*;
        match self {
            Sreg | Zv_stack | Iz_stack | Ibs_stack | Ev_stack | Stack | Iw_stack | Iw_Ib => {
                SizePolicy::Stack
            }
            Jb | Jz | Ev_branch => SizePolicy::Branch,
            My_Gy | Gy_W | Gy_U | P_Ey | Ey_P | V_Ey | Ey_V | Ey_V_Ib | V_Ey_Ib => SizePolicy::Y,
            Yz_DX | DX_Xz | eAX_Ib | Ib_eAX | eAX_DX | DX_eAX => SizePolicy::Z,
            R_Cr | Cr_R | R_Dr | Dr_R | Ms => SizePolicy::Native,
            _ => SizePolicy::Default,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct OpcodeRecord(pub Interpretation, pub OperandCode, pub MemorySize);

pub(crate) const INVALID: OpcodeRecord =
    OpcodeRecord(Interpretation::Invalid, OperandCode::Nothing, MemorySize::Unknown);

const PREFIX: OpcodeRecord =
    OpcodeRecord(Interpretation::Prefix, OperandCode::Nothing, MemorySize::Unknown);

macro_rules! op {
    ($code:ident, $operands:ident) => {
        OpcodeRecord(
            Interpretation::Instruction(Code::$code),
            OperandCode::$operands,
            MemorySize::Unknown,
        )
    };
    ($code:ident, $operands:ident, $mem:ident) => {
        OpcodeRecord(
            Interpretation::Instruction(Code::$code),
            OperandCode::$operands,
            MemorySize::$mem,
        )
    };
}

macro_rules! sized {
    ($w:ident, $d:ident, $q:ident; $operands:ident) => {
        OpcodeRecord(
            Interpretation::Sized([Code::$w, Code::$d, Code::$q]),
            OperandCode::$operands,
            MemorySize::Unknown,
        )
    };
    ($w:ident, $d:ident, $q:ident; $operands:ident, $mem:ident) => {
        OpcodeRecord(
            Interpretation::Sized([Code::$w, Code::$d, Code::$q]),
            OperandCode::$operands,
            MemorySize::$mem,
        )
    };
}

macro_rules! group {
    ($table:expr) => {
        OpcodeRecord(Interpretation::Group(&$table), OperandCode::Nothing, MemorySize::Unknown)
    };
}

macro_rules! rm_group {
    ($table:expr) => {
        OpcodeRecord(Interpretation::RmGroup(&$table), OperandCode::Nothing, MemorySize::Unknown)
    };
}

macro_rules! reg_mem {
    ($mem:expr, $reg:expr) => {
        OpcodeRecord(
            Interpretation::RegMem { mem: &$mem, reg: &$reg },
            OperandCode::Nothing,
            MemorySize::Unknown,
        )
    };
}

macro_rules! mandatory {
    ($none:expr, $p66:expr, $f3:expr, $f2:expr) => {
        OpcodeRecord(
            Interpretation::Mandatory(&[$none, $p66, $f3, $f2]),
            OperandCode::Nothing,
            MemorySize::Unknown,
        )
    };
}

macro_rules! rep {
    ($none:expr, $f3:expr, $f2:expr) => {
        OpcodeRecord(
            Interpretation::Rep(&[$none, $f3, $f2]),
            OperandCode::Nothing,
            MemorySize::Unknown,
        )
    };
}

macro_rules! legacy_only {
    ($record:expr) => {
        OpcodeRecord(
            Interpretation::Mode { legacy: &$record, long: &INVALID },
            OperandCode::Nothing,
            MemorySize::Unknown,
        )
    };
}

macro_rules! long_only {
    ($record:expr) => {
        OpcodeRecord(
            Interpretation::Mode { legacy: &INVALID, long: &$record },
            OperandCode::Nothing,
            MemorySize::Unknown,
        )
    };
}

macro_rules! loop_codes {
    ($($code:ident),+ $(,)?) => {
        OpcodeRecord(
            Interpretation::Loop([$(Code::$code),+]),
            OperandCode::Jb,
            MemorySize::Unknown,
        )
    };
}

#[rustfmt::skip]
const GROUP1_EB_IB: [OpcodeRecord; 8] = [
    op!(Add_Eb_Ib, Eb_Ib),
    op!(Or_Eb_Ib, Eb_Ib),
    op!(Adc_Eb_Ib, Eb_Ib),
    op!(Sbb_Eb_Ib, Eb_Ib),
    op!(And_Eb_Ib, Eb_Ib),
    op!(Sub_Eb_Ib, Eb_Ib),
    op!(Xor_Eb_Ib, Eb_Ib),
    op!(Cmp_Eb_Ib, Eb_Ib),
];

#[rustfmt::skip]
const GROUP1_EV_IZ: [OpcodeRecord; 8] = [
    sized!(Add_Ew_Iw, Add_Ed_Id, Add_Eq_Id64; Ev_Iz),
    sized!(Or_Ew_Iw, Or_Ed_Id, Or_Eq_Id64; Ev_Iz),
    sized!(Adc_Ew_Iw, Adc_Ed_Id, Adc_Eq_Id64; Ev_Iz),
    sized!(Sbb_Ew_Iw, Sbb_Ed_Id, Sbb_Eq_Id64; Ev_Iz),
    sized!(And_Ew_Iw, And_Ed_Id, And_Eq_Id64; Ev_Iz),
    sized!(Sub_Ew_Iw, Sub_Ed_Id, Sub_Eq_Id64; Ev_Iz),
    sized!(Xor_Ew_Iw, Xor_Ed_Id, Xor_Eq_Id64; Ev_Iz),
    sized!(Cmp_Ew_Iw, Cmp_Ed_Id, Cmp_Eq_Id64; Ev_Iz),
];

#[rustfmt::skip]
const GROUP1_EV_IBS: [OpcodeRecord; 8] = [
    sized!(Add_Ew_Ib16, Add_Ed_Ib32, Add_Eq_Ib64; Ev_Ibs),
    sized!(Or_Ew_Ib16, Or_Ed_Ib32, Or_Eq_Ib64; Ev_Ibs),
    sized!(Adc_Ew_Ib16, Adc_Ed_Ib32, Adc_Eq_Ib64; Ev_Ibs),
    sized!(Sbb_Ew_Ib16, Sbb_Ed_Ib32, Sbb_Eq_Ib64; Ev_Ibs),
    sized!(And_Ew_Ib16, And_Ed_Ib32, And_Eq_Ib64; Ev_Ibs),
    sized!(Sub_Ew_Ib16, Sub_Ed_Ib32, Sub_Eq_Ib64; Ev_Ibs),
    sized!(Xor_Ew_Ib16, Xor_Ed_Ib32, Xor_Eq_Ib64; Ev_Ibs),
    sized!(Cmp_Ew_Ib16, Cmp_Ed_Ib32, Cmp_Eq_Ib64; Ev_Ibs),
];

#[rustfmt::skip]
const GROUP1A: [OpcodeRecord; 8] = [
    sized!(Pop_Ew, Pop_Ed, Pop_Eq; Ev_stack),
    INVALID, INVALID, INVALID, INVALID, INVALID, INVALID, INVALID,
];

#[rustfmt::skip]
const GROUP2_EB_IB: [OpcodeRecord; 8] = [
    op!(Rol_Eb_Ib, Eb_Ib),
    op!(Ror_Eb_Ib, Eb_Ib),
    op!(Rcl_Eb_Ib, Eb_Ib),
    op!(Rcr_Eb_Ib, Eb_Ib),
    op!(Shl_Eb_Ib, Eb_Ib),
    op!(Shr_Eb_Ib, Eb_Ib),
    op!(Sal_Eb_Ib, Eb_Ib),
    op!(Sar_Eb_Ib, Eb_Ib),
];

#[rustfmt::skip]
const GROUP2_EV_IB: [OpcodeRecord; 8] = [
    sized!(Rol_Ew_Ib, Rol_Ed_Ib, Rol_Eq_Ib; Ev_Ib),
    sized!(Ror_Ew_Ib, Ror_Ed_Ib, Ror_Eq_Ib; Ev_Ib),
    sized!(Rcl_Ew_Ib, Rcl_Ed_Ib, Rcl_Eq_Ib; Ev_Ib),
    sized!(Rcr_Ew_Ib, Rcr_Ed_Ib, Rcr_Eq_Ib; Ev_Ib),
    sized!(Shl_Ew_Ib, Shl_Ed_Ib, Shl_Eq_Ib; Ev_Ib),
    sized!(Shr_Ew_Ib, Shr_Ed_Ib, Shr_Eq_Ib; Ev_Ib),
    sized!(Sal_Ew_Ib, Sal_Ed_Ib, Sal_Eq_Ib; Ev_Ib),
    sized!(Sar_Ew_Ib, Sar_Ed_Ib, Sar_Eq_Ib; Ev_Ib),
];

#[rustfmt::skip]
const GROUP2_EB_1: [OpcodeRecord; 8] = [
    op!(Rol_Eb_1, Eb_1),
    op!(Ror_Eb_1, Eb_1),
    op!(Rcl_Eb_1, Eb_1),
    op!(Rcr_Eb_1, Eb_1),
    op!(Shl_Eb_1, Eb_1),
    op!(Shr_Eb_1, Eb_1),
    op!(Sal_Eb_1, Eb_1),
    op!(Sar_Eb_1, Eb_1),
];

#[rustfmt::skip]
const GROUP2_EV_1: [OpcodeRecord; 8] = [
    sized!(Rol_Ew_1, Rol_Ed_1, Rol_Eq_1; Ev_1),
    sized!(Ror_Ew_1, Ror_Ed_1, Ror_Eq_1; Ev_1),
    sized!(Rcl_Ew_1, Rcl_Ed_1, Rcl_Eq_1; Ev_1),
    sized!(Rcr_Ew_1, Rcr_Ed_1, Rcr_Eq_1; Ev_1),
    sized!(Shl_Ew_1, Shl_Ed_1, Shl_Eq_1; Ev_1),
    sized!(Shr_Ew_1, Shr_Ed_1, Shr_Eq_1; Ev_1),
    sized!(Sal_Ew_1, Sal_Ed_1, Sal_Eq_1; Ev_1),
    sized!(Sar_Ew_1, Sar_Ed_1, Sar_Eq_1; Ev_1),
];

#[rustfmt::skip]
const GROUP2_EB_CL: [OpcodeRecord; 8] = [
    op!(Rol_Eb_CL, Eb_CL),
    op!(Ror_Eb_CL, Eb_CL),
    op!(Rcl_Eb_CL, Eb_CL),
    op!(Rcr_Eb_CL, Eb_CL),
    op!(Shl_Eb_CL, Eb_CL),
    op!(Shr_Eb_CL, Eb_CL),
    op!(Sal_Eb_CL, Eb_CL),
    op!(Sar_Eb_CL, Eb_CL),
];

#[rustfmt::skip]
const GROUP2_EV_CL: [OpcodeRecord; 8] = [
    sized!(Rol_Ew_CL, Rol_Ed_CL, Rol_Eq_CL; Ev_CL),
    sized!(Ror_Ew_CL, Ror_Ed_CL, Ror_Eq_CL; Ev_CL),
    sized!(Rcl_Ew_CL, Rcl_Ed_CL, Rcl_Eq_CL; Ev_CL),
    sized!(Rcr_Ew_CL, Rcr_Ed_CL, Rcr_Eq_CL; Ev_CL),
    sized!(Shl_Ew_CL, Shl_Ed_CL, Shl_Eq_CL; Ev_CL),
    sized!(Shr_Ew_CL, Shr_Ed_CL, Shr_Eq_CL; Ev_CL),
    sized!(Sal_Ew_CL, Sal_Ed_CL, Sal_Eq_CL; Ev_CL),
    sized!(Sar_Ew_CL, Sar_Ed_CL, Sar_Eq_CL; Ev_CL),
];

#[rustfmt::skip]
const GROUP3_EB: [OpcodeRecord; 8] = [
    op!(Test_Eb_Ib, Eb_Ib),
    op!(Test_Eb_Ib, Eb_Ib),
    op!(Not_Eb, Eb),
    op!(Neg_Eb, Eb),
    op!(Mul_Eb, Eb),
    op!(Imul_Eb, Eb),
    op!(Div_Eb, Eb),
    op!(Idiv_Eb, Eb),
];

#[rustfmt::skip]
const GROUP3_EV: [OpcodeRecord; 8] = [
    sized!(Test_Ew_Iw, Test_Ed_Id, Test_Eq_Id64; Ev_Iz),
    sized!(Test_Ew_Iw, Test_Ed_Id, Test_Eq_Id64; Ev_Iz),
    sized!(Not_Ew, Not_Ed, Not_Eq; Ev),
    sized!(Neg_Ew, Neg_Ed, Neg_Eq; Ev),
    sized!(Mul_Ew, Mul_Ed, Mul_Eq; Ev),
    sized!(Imul_Ew, Imul_Ed, Imul_Eq; Ev),
    sized!(Div_Ew, Div_Ed, Div_Eq; Ev),
    sized!(Idiv_Ew, Idiv_Ed, Idiv_Eq; Ev),
];

#[rustfmt::skip]
const GROUP4: [OpcodeRecord; 8] = [
    op!(Inc_Eb, Eb),
    op!(Dec_Eb, Eb),
    INVALID, INVALID, INVALID, INVALID, INVALID, INVALID,
];

#[rustfmt::skip]
const GROUP5: [OpcodeRecord; 8] = [
    sized!(Inc_Ew, Inc_Ed, Inc_Eq; Ev),
    sized!(Dec_Ew, Dec_Ed, Dec_Eq; Ev),
    sized!(Call_Ew, Call_Ed, Call_Eq; Ev_branch),
    sized!(Call_m1616, Call_m1632, Call_m1664; Mp_far),
    sized!(Jmp_Ew, Jmp_Ed, Jmp_Eq; Ev_branch),
    sized!(Jmp_m1616, Jmp_m1632, Jmp_m1664; Mp_far),
    sized!(Push_Ew, Push_Ed, Push_Eq; Ev_stack),
    INVALID,
];

#[rustfmt::skip]
const GROUP11_EB: [OpcodeRecord; 8] = [
    op!(Mov_Eb_Ib, Eb_Ib),
    INVALID, INVALID, INVALID, INVALID, INVALID, INVALID, INVALID,
];

#[rustfmt::skip]
const GROUP11_EV: [OpcodeRecord; 8] = [
    sized!(Mov_Ew_Iw, Mov_Ed_Id, Mov_Eq_Id64; Ev_Iz),
    INVALID, INVALID, INVALID, INVALID, INVALID, INVALID, INVALID,
];

const XCHG_RAX: OpcodeRecord = sized!(Xchg_r16_AX, Xchg_r32_EAX, Xchg_r64_RAX; Zv_rAX);
const INC_R: OpcodeRecord = legacy_only!(sized!(Inc_r16, Inc_r32, Inc_r32; Zv));
const DEC_R: OpcodeRecord = legacy_only!(sized!(Dec_r16, Dec_r32, Dec_r32; Zv));
const PUSH_R: OpcodeRecord = sized!(Push_r16, Push_r32, Push_r64; Zv_stack);
const POP_R: OpcodeRecord = sized!(Pop_r16, Pop_r32, Pop_r64; Zv_stack);
const MOV_R8_IMM: OpcodeRecord = op!(Mov_r8_imm8, Zb_Ib);
const MOV_R_IMM: OpcodeRecord = sized!(Mov_r16_imm16, Mov_r32_imm32, Mov_r64_imm64; Zv_Iv);

#[rustfmt::skip]
pub(crate) static OPCODES: [OpcodeRecord; 256] = [
// 0x00
    op!(Add_Eb_Gb, Eb_Gb),
    sized!(Add_Ew_Gw, Add_Ed_Gd, Add_Eq_Gq; Ev_Gv),
    op!(Add_Gb_Eb, Gb_Eb),
    sized!(Add_Gw_Ew, Add_Gd_Ed, Add_Gq_Eq; Gv_Ev),
    op!(Add_AL_Ib, AL_Ib),
    sized!(Add_AX_Iw, Add_EAX_Id, Add_RAX_Id64; rAX_Iz),
    legacy_only!(sized!(Pushw_ES, Pushd_ES, Pushd_ES; Sreg)),
    legacy_only!(sized!(Popw_ES, Popd_ES, Popd_ES; Sreg)),
    op!(Or_Eb_Gb, Eb_Gb),
    sized!(Or_Ew_Gw, Or_Ed_Gd, Or_Eq_Gq; Ev_Gv),
    op!(Or_Gb_Eb, Gb_Eb),
    sized!(Or_Gw_Ew, Or_Gd_Ed, Or_Gq_Eq; Gv_Ev),
    op!(Or_AL_Ib, AL_Ib),
    sized!(Or_AX_Iw, Or_EAX_Id, Or_RAX_Id64; rAX_Iz),
    legacy_only!(sized!(Pushw_CS, Pushd_CS, Pushd_CS; Sreg)),
    OpcodeRecord(Interpretation::Escape0F, OperandCode::Nothing, MemorySize::Unknown),
// 0x10
    op!(Adc_Eb_Gb, Eb_Gb),
    sized!(Adc_Ew_Gw, Adc_Ed_Gd, Adc_Eq_Gq; Ev_Gv),
    op!(Adc_Gb_Eb, Gb_Eb),
    sized!(Adc_Gw_Ew, Adc_Gd_Ed, Adc_Gq_Eq; Gv_Ev),
    op!(Adc_AL_Ib, AL_Ib),
    sized!(Adc_AX_Iw, Adc_EAX_Id, Adc_RAX_Id64; rAX_Iz),
    legacy_only!(sized!(Pushw_SS, Pushd_SS, Pushd_SS; Sreg)),
    legacy_only!(sized!(Popw_SS, Popd_SS, Popd_SS; Sreg)),
    op!(Sbb_Eb_Gb, Eb_Gb),
    sized!(Sbb_Ew_Gw, Sbb_Ed_Gd, Sbb_Eq_Gq; Ev_Gv),
    op!(Sbb_Gb_Eb, Gb_Eb),
    sized!(Sbb_Gw_Ew, Sbb_Gd_Ed, Sbb_Gq_Eq; Gv_Ev),
    op!(Sbb_AL_Ib, AL_Ib),
    sized!(Sbb_AX_Iw, Sbb_EAX_Id, Sbb_RAX_Id64; rAX_Iz),
    legacy_only!(sized!(Pushw_DS, Pushd_DS, Pushd_DS; Sreg)),
    legacy_only!(sized!(Popw_DS, Popd_DS, Popd_DS; Sreg)),
// 0x20
    op!(And_Eb_Gb, Eb_Gb),
    sized!(And_Ew_Gw, And_Ed_Gd, And_Eq_Gq; Ev_Gv),
    op!(And_Gb_Eb, Gb_Eb),
    sized!(And_Gw_Ew, And_Gd_Ed, And_Gq_Eq; Gv_Ev),
    op!(And_AL_Ib, AL_Ib),
    sized!(And_AX_Iw, And_EAX_Id, And_RAX_Id64; rAX_Iz),
    PREFIX,
    legacy_only!(op!(Daa, Nothing)),
    op!(Sub_Eb_Gb, Eb_Gb),
    sized!(Sub_Ew_Gw, Sub_Ed_Gd, Sub_Eq_Gq; Ev_Gv),
    op!(Sub_Gb_Eb, Gb_Eb),
    sized!(Sub_Gw_Ew, Sub_Gd_Ed, Sub_Gq_Eq; Gv_Ev),
    op!(Sub_AL_Ib, AL_Ib),
    sized!(Sub_AX_Iw, Sub_EAX_Id, Sub_RAX_Id64; rAX_Iz),
    PREFIX,
    legacy_only!(op!(Das, Nothing)),
// 0x30
    op!(Xor_Eb_Gb, Eb_Gb),
    sized!(Xor_Ew_Gw, Xor_Ed_Gd, Xor_Eq_Gq; Ev_Gv),
    op!(Xor_Gb_Eb, Gb_Eb),
    sized!(Xor_Gw_Ew, Xor_Gd_Ed, Xor_Gq_Eq; Gv_Ev),
    op!(Xor_AL_Ib, AL_Ib),
    sized!(Xor_AX_Iw, Xor_EAX_Id, Xor_RAX_Id64; rAX_Iz),
    PREFIX,
    legacy_only!(op!(Aaa, Nothing)),
    op!(Cmp_Eb_Gb, Eb_Gb),
    sized!(Cmp_Ew_Gw, Cmp_Ed_Gd, Cmp_Eq_Gq; Ev_Gv),
    op!(Cmp_Gb_Eb, Gb_Eb),
    sized!(Cmp_Gw_Ew, Cmp_Gd_Ed, Cmp_Gq_Eq; Gv_Ev),
    op!(Cmp_AL_Ib, AL_Ib),
    sized!(Cmp_AX_Iw, Cmp_EAX_Id, Cmp_RAX_Id64; rAX_Iz),
    PREFIX,
    legacy_only!(op!(Aas, Nothing)),
// 0x40, rex in long mode
    INC_R, INC_R, INC_R, INC_R, INC_R, INC_R, INC_R, INC_R,
    DEC_R, DEC_R, DEC_R, DEC_R, DEC_R, DEC_R, DEC_R, DEC_R,
// 0x50
    PUSH_R, PUSH_R, PUSH_R, PUSH_R, PUSH_R, PUSH_R, PUSH_R, PUSH_R,
    POP_R, POP_R, POP_R, POP_R, POP_R, POP_R, POP_R, POP_R,
// 0x60
    legacy_only!(sized!(Pushaw, Pushad, Pushad; Nothing)),
    legacy_only!(sized!(Popaw, Popad, Popad; Nothing)),
    OpcodeRecord(
        Interpretation::Evex(&sized!(Bound_Gw_Mw2, Bound_Gd_Md2, Bound_Gd_Md2; Gv_Ma)),
        OperandCode::Nothing,
        MemorySize::Unknown,
    ),
    OpcodeRecord(
        Interpretation::Mode {
            legacy: &op!(Arpl_Ew_Gw, Ew_Gw),
            long: &sized!(Movsxd_Gw_Ew, Movsxd_Gd_Ed, Movsxd_Gq_Ed; Gv_Ez),
        },
        OperandCode::Nothing,
        MemorySize::Unknown,
    ),
    PREFIX,
    PREFIX,
    PREFIX,
    PREFIX,
    sized!(Push_Iw, Push_Id, Push_Id64; Iz_stack),
    sized!(Imul_Gw_Ew_Iw, Imul_Gd_Ed_Id, Imul_Gq_Eq_Id64; Gv_Ev_Iz),
    sized!(Push_Ib16, Push_Ib32, Push_Ib64; Ibs_stack),
    sized!(Imul_Gw_Ew_Ib16, Imul_Gd_Ed_Ib32, Imul_Gq_Eq_Ib64; Gv_Ev_Ibs),
    op!(Insb_Yb_DX, Yb_DX),
    sized!(Insw_Yw_DX, Insd_Yd_DX, Insd_Yd_DX; Yz_DX),
    op!(Outsb_DX_Xb, DX_Xb),
    sized!(Outsw_DX_Xw, Outsd_DX_Xd, Outsd_DX_Xd; DX_Xz),
// 0x70
    sized!(Jo_Jb16, Jo_Jb32, Jo_Jb64; Jb),
    sized!(Jno_Jb16, Jno_Jb32, Jno_Jb64; Jb),
    sized!(Jb_Jb16, Jb_Jb32, Jb_Jb64; Jb),
    sized!(Jae_Jb16, Jae_Jb32, Jae_Jb64; Jb),
    sized!(Je_Jb16, Je_Jb32, Je_Jb64; Jb),
    sized!(Jne_Jb16, Jne_Jb32, Jne_Jb64; Jb),
    sized!(Jbe_Jb16, Jbe_Jb32, Jbe_Jb64; Jb),
    sized!(Ja_Jb16, Ja_Jb32, Ja_Jb64; Jb),
    sized!(Js_Jb16, Js_Jb32, Js_Jb64; Jb),
    sized!(Jns_Jb16, Jns_Jb32, Jns_Jb64; Jb),
    sized!(Jp_Jb16, Jp_Jb32, Jp_Jb64; Jb),
    sized!(Jnp_Jb16, Jnp_Jb32, Jnp_Jb64; Jb),
    sized!(Jl_Jb16, Jl_Jb32, Jl_Jb64; Jb),
    sized!(Jge_Jb16, Jge_Jb32, Jge_Jb64; Jb),
    sized!(Jle_Jb16, Jle_Jb32, Jle_Jb64; Jb),
    sized!(Jg_Jb16, Jg_Jb32, Jg_Jb64; Jb),
// 0x80
    group!(GROUP1_EB_IB),
    group!(GROUP1_EV_IZ),
    legacy_only!(group!(GROUP1_EB_IB)),
    group!(GROUP1_EV_IBS),
    op!(Test_Eb_Gb, Eb_Gb),
    sized!(Test_Ew_Gw, Test_Ed_Gd, Test_Eq_Gq; Ev_Gv),
    op!(Xchg_Eb_Gb, Eb_Gb),
    sized!(Xchg_Ew_Gw, Xchg_Ed_Gd, Xchg_Eq_Gq; Ev_Gv),
    op!(Mov_Eb_Gb, Eb_Gb),
    sized!(Mov_Ew_Gw, Mov_Ed_Gd, Mov_Eq_Gq; Ev_Gv),
    op!(Mov_Gb_Eb, Gb_Eb),
    sized!(Mov_Gw_Ew, Mov_Gd_Ed, Mov_Gq_Eq; Gv_Ev),
    sized!(Mov_Ew_Sw, Mov_Ed_Sw, Mov_Eq_Sw; Ev_Sw),
    sized!(Lea_Gw_M, Lea_Gd_M, Lea_Gq_M; Gv_M),
    sized!(Mov_Sw_Ew, Mov_Sw_Ed, Mov_Sw_Eq; Sw_Ev),
    group!(GROUP1A),
// 0x90
    OpcodeRecord(Interpretation::Nop(&XCHG_RAX), OperandCode::Nothing, MemorySize::Unknown),
    XCHG_RAX, XCHG_RAX, XCHG_RAX, XCHG_RAX, XCHG_RAX, XCHG_RAX, XCHG_RAX,
    sized!(Cbw, Cwde, Cdqe; Nothing),
    sized!(Cwd, Cdq, Cqo; Nothing),
    legacy_only!(sized!(Call_Aww, Call_Adw, Call_Adw; Ap)),
    op!(Wait, Nothing),
    sized!(Pushfw, Pushfd, Pushfq; Stack),
    sized!(Popfw, Popfd, Popfq; Stack),
    op!(Sahf, Nothing),
    op!(Lahf, Nothing),
// 0xa0
    op!(Mov_AL_Ob, AL_Ob),
    sized!(Mov_AX_Ow, Mov_EAX_Od, Mov_RAX_Oq; rAX_Ov),
    op!(Mov_Ob_AL, Ob_AL),
    sized!(Mov_Ow_AX, Mov_Od_EAX, Mov_Oq_RAX; Ov_rAX),
    op!(Movsb_Yb_Xb, Yb_Xb),
    sized!(Movsw_Yw_Xw, Movsd_Yd_Xd, Movsq_Yq_Xq; Yv_Xv),
    op!(Cmpsb_Xb_Yb, Xb_Yb),
    sized!(Cmpsw_Xw_Yw, Cmpsd_Xd_Yd, Cmpsq_Xq_Yq; Xv_Yv),
    op!(Test_AL_Ib, AL_Ib),
    sized!(Test_AX_Iw, Test_EAX_Id, Test_RAX_Id64; rAX_Iz),
    op!(Stosb_Yb_AL, Yb_AL),
    sized!(Stosw_Yw_AX, Stosd_Yd_EAX, Stosq_Yq_RAX; Yv_rAX),
    op!(Lodsb_AL_Xb, AL_Xb),
    sized!(Lodsw_AX_Xw, Lodsd_EAX_Xd, Lodsq_RAX_Xq; rAX_Xv),
    op!(Scasb_AL_Yb, AL_Yb),
    sized!(Scasw_AX_Yw, Scasd_EAX_Yd, Scasq_RAX_Yq; rAX_Yv),
// 0xb0
    MOV_R8_IMM, MOV_R8_IMM, MOV_R8_IMM, MOV_R8_IMM,
    MOV_R8_IMM, MOV_R8_IMM, MOV_R8_IMM, MOV_R8_IMM,
    MOV_R_IMM, MOV_R_IMM, MOV_R_IMM, MOV_R_IMM,
    MOV_R_IMM, MOV_R_IMM, MOV_R_IMM, MOV_R_IMM,
// 0xc0
    group!(GROUP2_EB_IB),
    group!(GROUP2_EV_IB),
    sized!(Retnw_Iw, Retnd_Iw, Retnq_Iw; Iw_stack),
    sized!(Retnw, Retnd, Retnq; Stack),
    OpcodeRecord(
        Interpretation::Vex3(&sized!(Les_Gw_Mp, Les_Gd_Mp, Les_Gd_Mp; Gv_Mp)),
        OperandCode::Nothing,
        MemorySize::Unknown,
    ),
    OpcodeRecord(
        Interpretation::Vex2(&sized!(Lds_Gw_Mp, Lds_Gd_Mp, Lds_Gd_Mp; Gv_Mp)),
        OperandCode::Nothing,
        MemorySize::Unknown,
    ),
    group!(GROUP11_EB),
    group!(GROUP11_EV),
    sized!(Enterw_Iw_Ib, Enterd_Iw_Ib, Enterq_Iw_Ib; Iw_Ib),
    sized!(Leavew, Leaved, Leaveq; Stack),
    sized!(Retfw_Iw, Retfd_Iw, Retfq_Iw; Iw),
    sized!(Retfw, Retfd, Retfq; Nothing),
    op!(Int3, Nothing),
    op!(Int_Ib, Ib),
    legacy_only!(op!(Into, Nothing)),
    sized!(Iretw, Iretd, Iretq; Nothing),
// 0xd0
    group!(GROUP2_EB_1),
    group!(GROUP2_EV_1),
    group!(GROUP2_EB_CL),
    group!(GROUP2_EV_CL),
    legacy_only!(op!(Aam_Ib, Ib)),
    legacy_only!(op!(Aad_Ib, Ib)),
    legacy_only!(op!(Salc, Nothing)),
    op!(Xlatb, Xlat),
    reg_mem!(group!(x87::D8_MEM), group!(x87::D8_REG)),
    reg_mem!(group!(x87::D9_MEM), group!(x87::D9_REG)),
    reg_mem!(group!(x87::DA_MEM), group!(x87::DA_REG)),
    reg_mem!(group!(x87::DB_MEM), group!(x87::DB_REG)),
    reg_mem!(group!(x87::DC_MEM), group!(x87::DC_REG)),
    reg_mem!(group!(x87::DD_MEM), group!(x87::DD_REG)),
    reg_mem!(group!(x87::DE_MEM), group!(x87::DE_REG)),
    reg_mem!(group!(x87::DF_MEM), group!(x87::DF_REG)),
// 0xe0
    loop_codes!(
        Loopne_Jb16_CX, Loopne_Jb32_CX, Loopne_Jb16_ECX,
        Loopne_Jb32_ECX, Loopne_Jb64_ECX, Loopne_Jb64_RCX,
    ),
    loop_codes!(
        Loope_Jb16_CX, Loope_Jb32_CX, Loope_Jb16_ECX,
        Loope_Jb32_ECX, Loope_Jb64_ECX, Loope_Jb64_RCX,
    ),
    loop_codes!(
        Loop_Jb16_CX, Loop_Jb32_CX, Loop_Jb16_ECX,
        Loop_Jb32_ECX, Loop_Jb64_ECX, Loop_Jb64_RCX,
    ),
    loop_codes!(
        Jcxz_Jb16, Jcxz_Jb32, Jecxz_Jb16,
        Jecxz_Jb32, Jecxz_Jb64, Jrcxz_Jb64,
    ),
    op!(In_AL_Ib, AL_Ib),
    sized!(In_AX_Ib, In_EAX_Ib, In_EAX_Ib; eAX_Ib),
    op!(Out_Ib_AL, Ib_AL),
    sized!(Out_Ib_AX, Out_Ib_EAX, Out_Ib_EAX; Ib_eAX),
    sized!(Call_Jw16, Call_Jd32, Call_Jd64; Jz),
    sized!(Jmp_Jw16, Jmp_Jd32, Jmp_Jd64; Jz),
    legacy_only!(sized!(Jmp_Aww, Jmp_Adw, Jmp_Adw; Ap)),
    sized!(Jmp_Jb16, Jmp_Jb32, Jmp_Jb64; Jb),
    op!(In_AL_DX, AL_DX),
    sized!(In_AX_DX, In_EAX_DX, In_EAX_DX; eAX_DX),
    op!(Out_DX_AL, DX_AL),
    sized!(Out_DX_AX, Out_DX_EAX, Out_DX_EAX; DX_eAX),
// 0xf0
    PREFIX,
    op!(Int1, Nothing),
    PREFIX,
    PREFIX,
    op!(Hlt, Nothing),
    op!(Cmc, Nothing),
    group!(GROUP3_EB),
    group!(GROUP3_EV),
    op!(Clc, Nothing),
    op!(Stc, Nothing),
    op!(Cli, Nothing),
    op!(Sti, Nothing),
    op!(Cld, Nothing),
    op!(Std, Nothing),
    group!(GROUP4),
    group!(GROUP5),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_are_marked() {
        for b in [0x26u8, 0x2e, 0x36, 0x3e, 0x64, 0x65, 0x66, 0x67, 0xf0, 0xf2, 0xf3] {
            assert_eq!(OPCODES[b as usize].0, Interpretation::Prefix, "{b:02x}");
        }
    }

    #[test]
    fn escapes() {
        assert_eq!(OPCODES[0x0f].0, Interpretation::Escape0F);
        assert!(matches!(OPCODES[0x62].0, Interpretation::Evex(_)));
        assert!(matches!(OPCODES[0xc4].0, Interpretation::Vex3(_)));
        assert!(matches!(OPCODES[0xc5].0, Interpretation::Vex2(_)));
    }

    #[test]
    fn policies() {
        assert_eq!(OperandCode::Zv_stack.size_policy(), SizePolicy::Stack);
        assert_eq!(OperandCode::Jz.size_policy(), SizePolicy::Branch);
        assert_eq!(OperandCode::Ev_Gv.size_policy(), SizePolicy::Default);
        assert_eq!(OperandCode::Yz_DX.size_policy(), SizePolicy::Z);
    }
}
