//! x87 escapes D8 through DF. Memory forms are selected by ModRM.reg, register forms by
//! ModRM.reg and, for the operand-less ones, ModRM.rm.

use crate::code::Code;
use crate::memory::MemorySize;
use crate::tables::{Interpretation, OpcodeRecord, OperandCode, INVALID};

#[rustfmt::skip]
pub(crate) const D8_MEM: [OpcodeRecord; 8] = [
    op!(Fadd_Mf32, Mx87, Float32),
    op!(Fmul_Mf32, Mx87, Float32),
    op!(Fcom_Mf32, Mx87, Float32),
    op!(Fcomp_Mf32, Mx87, Float32),
    op!(Fsub_Mf32, Mx87, Float32),
    op!(Fsubr_Mf32, Mx87, Float32),
    op!(Fdiv_Mf32, Mx87, Float32),
    op!(Fdivr_Mf32, Mx87, Float32),
];

#[rustfmt::skip]
pub(crate) const D8_REG: [OpcodeRecord; 8] = [
    op!(Fadd_ST_STi, ST_STi),
    op!(Fmul_ST_STi, ST_STi),
    op!(Fcom_ST_STi, ST_STi),
    op!(Fcomp_ST_STi, ST_STi),
    op!(Fsub_ST_STi, ST_STi),
    op!(Fsubr_ST_STi, ST_STi),
    op!(Fdiv_ST_STi, ST_STi),
    op!(Fdivr_ST_STi, ST_STi),
];

#[rustfmt::skip]
pub(crate) const D9_MEM: [OpcodeRecord; 8] = [
    op!(Fld_Mf32, Mx87, Float32),
    INVALID,
    op!(Fst_Mf32, Mx87, Float32),
    op!(Fstp_Mf32, Mx87, Float32),
    sized!(Fldenv_M14, Fldenv_M28, Fldenv_M28; Mx87_env),
    op!(Fldcw_Mw, Mx87, UInt16),
    sized!(Fnstenv_M14, Fnstenv_M28, Fnstenv_M28; Mx87_env),
    op!(Fnstcw_Mw, Mx87, UInt16),
];

#[rustfmt::skip]
const D9_D0: [OpcodeRecord; 8] = [
    op!(Fnop, Nothing),
    INVALID, INVALID, INVALID, INVALID, INVALID, INVALID, INVALID,
];

#[rustfmt::skip]
const D9_E0: [OpcodeRecord; 8] = [
    op!(Fchs, Nothing),
    op!(Fabs, Nothing),
    INVALID,
    INVALID,
    op!(Ftst, Nothing),
    op!(Fxam, Nothing),
    INVALID,
    INVALID,
];

#[rustfmt::skip]
const D9_E8: [OpcodeRecord; 8] = [
    op!(Fld1, Nothing),
    op!(Fldl2t, Nothing),
    op!(Fldl2e, Nothing),
    op!(Fldpi, Nothing),
    op!(Fldlg2, Nothing),
    op!(Fldln2, Nothing),
    op!(Fldz, Nothing),
    INVALID,
];

#[rustfmt::skip]
const D9_F0: [OpcodeRecord; 8] = [
    op!(F2xm1, Nothing),
    op!(Fyl2x, Nothing),
    op!(Fptan, Nothing),
    op!(Fpatan, Nothing),
    op!(Fxtract, Nothing),
    op!(Fprem1, Nothing),
    op!(Fdecstp, Nothing),
    op!(Fincstp, Nothing),
];

#[rustfmt::skip]
const D9_F8: [OpcodeRecord; 8] = [
    op!(Fprem, Nothing),
    op!(Fyl2xp1, Nothing),
    op!(Fsqrt, Nothing),
    op!(Fsincos, Nothing),
    op!(Frndint, Nothing),
    op!(Fscale, Nothing),
    op!(Fsin, Nothing),
    op!(Fcos, Nothing),
];

#[rustfmt::skip]
pub(crate) const D9_REG: [OpcodeRecord; 8] = [
    op!(Fld_ST_STi, ST_STi),
    op!(Fxch_ST_STi, ST_STi),
    rm_group!(D9_D0),
    INVALID,
    rm_group!(D9_E0),
    rm_group!(D9_E8),
    rm_group!(D9_F0),
    rm_group!(D9_F8),
];

#[rustfmt::skip]
pub(crate) const DA_MEM: [OpcodeRecord; 8] = [
    op!(Fiadd_Mfi32, Mx87, Int32),
    op!(Fimul_Mfi32, Mx87, Int32),
    op!(Ficom_Mfi32, Mx87, Int32),
    op!(Ficomp_Mfi32, Mx87, Int32),
    op!(Fisub_Mfi32, Mx87, Int32),
    op!(Fisubr_Mfi32, Mx87, Int32),
    op!(Fidiv_Mfi32, Mx87, Int32),
    op!(Fidivr_Mfi32, Mx87, Int32),
];

#[rustfmt::skip]
const DA_E8: [OpcodeRecord; 8] = [
    INVALID,
    op!(Fucompp, Nothing),
    INVALID, INVALID, INVALID, INVALID, INVALID, INVALID,
];

#[rustfmt::skip]
pub(crate) const DA_REG: [OpcodeRecord; 8] = [
    op!(Fcmovb_ST_STi, ST_STi),
    op!(Fcmove_ST_STi, ST_STi),
    op!(Fcmovbe_ST_STi, ST_STi),
    op!(Fcmovu_ST_STi, ST_STi),
    INVALID,
    rm_group!(DA_E8),
    INVALID,
    INVALID,
];

#[rustfmt::skip]
pub(crate) const DB_MEM: [OpcodeRecord; 8] = [
    op!(Fild_Mfi32, Mx87, Int32),
    op!(Fisttp_Mfi32, Mx87, Int32),
    op!(Fist_Mfi32, Mx87, Int32),
    op!(Fistp_Mfi32, Mx87, Int32),
    INVALID,
    op!(Fld_Mf80, Mx87, Float80),
    INVALID,
    op!(Fstp_Mf80, Mx87, Float80),
];

#[rustfmt::skip]
const DB_E0: [OpcodeRecord; 8] = [
    INVALID,
    INVALID,
    op!(Fnclex, Nothing),
    op!(Fninit, Nothing),
    INVALID, INVALID, INVALID, INVALID,
];

#[rustfmt::skip]
pub(crate) const DB_REG: [OpcodeRecord; 8] = [
    op!(Fcmovnb_ST_STi, ST_STi),
    op!(Fcmovne_ST_STi, ST_STi),
    op!(Fcmovnbe_ST_STi, ST_STi),
    op!(Fcmovnu_ST_STi, ST_STi),
    rm_group!(DB_E0),
    op!(Fucomi_ST_STi, ST_STi),
    op!(Fcomi_ST_STi, ST_STi),
    INVALID,
];

#[rustfmt::skip]
pub(crate) const DC_MEM: [OpcodeRecord; 8] = [
    op!(Fadd_Mf64, Mx87, Float64),
    op!(Fmul_Mf64, Mx87, Float64),
    op!(Fcom_Mf64, Mx87, Float64),
    op!(Fcomp_Mf64, Mx87, Float64),
    op!(Fsub_Mf64, Mx87, Float64),
    op!(Fsubr_Mf64, Mx87, Float64),
    op!(Fdiv_Mf64, Mx87, Float64),
    op!(Fdivr_Mf64, Mx87, Float64),
];

#[rustfmt::skip]
pub(crate) const DC_REG: [OpcodeRecord; 8] = [
    op!(Fadd_STi_ST, STi_ST),
    op!(Fmul_STi_ST, STi_ST),
    INVALID,
    INVALID,
    op!(Fsubr_STi_ST, STi_ST),
    op!(Fsub_STi_ST, STi_ST),
    op!(Fdivr_STi_ST, STi_ST),
    op!(Fdiv_STi_ST, STi_ST),
];

#[rustfmt::skip]
pub(crate) const DD_MEM: [OpcodeRecord; 8] = [
    op!(Fld_Mf64, Mx87, Float64),
    op!(Fisttp_Mfi64, Mx87, Int64),
    op!(Fst_Mf64, Mx87, Float64),
    op!(Fstp_Mf64, Mx87, Float64),
    INVALID,
    INVALID,
    INVALID,
    op!(Fnstsw_Mw, Mx87, UInt16),
];

#[rustfmt::skip]
pub(crate) const DD_REG: [OpcodeRecord; 8] = [
    op!(Ffree_STi, STi),
    INVALID,
    op!(Fst_STi, STi),
    op!(Fstp_STi, STi),
    op!(Fucom_ST_STi, ST_STi),
    op!(Fucomp_ST_STi, ST_STi),
    INVALID,
    INVALID,
];

#[rustfmt::skip]
pub(crate) const DE_MEM: [OpcodeRecord; 8] = [
    op!(Fiadd_Mfi16, Mx87, Int16),
    op!(Fimul_Mfi16, Mx87, Int16),
    op!(Ficom_Mfi16, Mx87, Int16),
    op!(Ficomp_Mfi16, Mx87, Int16),
    op!(Fisub_Mfi16, Mx87, Int16),
    op!(Fisubr_Mfi16, Mx87, Int16),
    op!(Fidiv_Mfi16, Mx87, Int16),
    op!(Fidivr_Mfi16, Mx87, Int16),
];

#[rustfmt::skip]
const DE_D8: [OpcodeRecord; 8] = [
    INVALID,
    op!(Fcompp, Nothing),
    INVALID, INVALID, INVALID, INVALID, INVALID, INVALID,
];

#[rustfmt::skip]
pub(crate) const DE_REG: [OpcodeRecord; 8] = [
    op!(Faddp_STi_ST, STi_ST),
    op!(Fmulp_STi_ST, STi_ST),
    INVALID,
    rm_group!(DE_D8),
    op!(Fsubrp_STi_ST, STi_ST),
    op!(Fsubp_STi_ST, STi_ST),
    op!(Fdivrp_STi_ST, STi_ST),
    op!(Fdivp_STi_ST, STi_ST),
];

#[rustfmt::skip]
pub(crate) const DF_MEM: [OpcodeRecord; 8] = [
    op!(Fild_Mfi16, Mx87, Int16),
    op!(Fisttp_Mfi16, Mx87, Int16),
    op!(Fist_Mfi16, Mx87, Int16),
    op!(Fistp_Mfi16, Mx87, Int16),
    INVALID,
    op!(Fild_Mfi64, Mx87, Int64),
    INVALID,
    op!(Fistp_Mfi64, Mx87, Int64),
];

#[rustfmt::skip]
const DF_E0: [OpcodeRecord; 8] = [
    op!(Fnstsw_AX, AX),
    INVALID, INVALID, INVALID, INVALID, INVALID, INVALID, INVALID,
];

#[rustfmt::skip]
pub(crate) const DF_REG: [OpcodeRecord; 8] = [
    INVALID,
    INVALID,
    INVALID,
    INVALID,
    rm_group!(DF_E0),
    op!(Fucomip_ST_STi, ST_STi),
    op!(Fcomip_ST_STi, ST_STi),
    INVALID,
];
