//! Two and three byte legacy maps: `0F xx`, `0F 38 xx` and `0F 3A xx`.

use crate::code::Code;
use crate::memory::MemorySize;
use crate::tables::{Interpretation, OpcodeRecord, OperandCode, INVALID};

#[rustfmt::skip]
const GROUP6: [OpcodeRecord; 8] = [
    sized!(Sldtw_Ew, Sldtd_Ew, Sldtq_Ew; Ew_sys),
    sized!(Strw_Ew, Strd_Ew, Strq_Ew; Ew_sys),
    op!(Lldt_Ew, Ew),
    op!(Ltr_Ew, Ew),
    op!(Verr_Ew, Ew),
    op!(Verw_Ew, Ew),
    INVALID,
    INVALID,
];

#[rustfmt::skip]
const GROUP7_MEM: [OpcodeRecord; 8] = [
    sized!(Sgdtw_Ms, Sgdtd_Ms, Sgdtq_Ms; Ms),
    sized!(Sidtw_Ms, Sidtd_Ms, Sidtq_Ms; Ms),
    sized!(Lgdtw_Ms, Lgdtd_Ms, Lgdtq_Ms; Ms),
    sized!(Lidtw_Ms, Lidtd_Ms, Lidtq_Ms; Ms),
    sized!(Smsww_Ew, Smswd_Ew, Smswq_Ew; Ew_sys),
    INVALID,
    op!(Lmsw_Ew, Ew),
    op!(Invlpg_M, M),
];

#[rustfmt::skip]
const GROUP7_C0: [OpcodeRecord; 8] = [
    INVALID,
    op!(Vmcall, Nothing),
    op!(Vmlaunch, Nothing),
    op!(Vmresume, Nothing),
    op!(Vmxoff, Nothing),
    INVALID, INVALID, INVALID,
];

#[rustfmt::skip]
const GROUP7_C8: [OpcodeRecord; 8] = [
    sized!(Monitorw, Monitord, Monitorq; Nothing),
    op!(Mwait, Nothing),
    op!(Clac, Nothing),
    op!(Stac, Nothing),
    INVALID, INVALID, INVALID, INVALID,
];

#[rustfmt::skip]
const GROUP7_D0: [OpcodeRecord; 8] = [
    op!(Xgetbv, Nothing),
    op!(Xsetbv, Nothing),
    INVALID,
    INVALID,
    INVALID,
    op!(Xend, Nothing),
    op!(Xtest, Nothing),
    INVALID,
];

#[rustfmt::skip]
const GROUP7_F8: [OpcodeRecord; 8] = [
    long_only!(op!(Swapgs, Nothing)),
    op!(Rdtscp, Nothing),
    INVALID, INVALID, INVALID, INVALID, INVALID, INVALID,
];

#[rustfmt::skip]
const GROUP7_REG: [OpcodeRecord; 8] = [
    rm_group!(GROUP7_C0),
    rm_group!(GROUP7_C8),
    rm_group!(GROUP7_D0),
    INVALID,
    sized!(Smsww_Ew, Smswd_Ew, Smswq_Ew; Ew_sys),
    INVALID,
    op!(Lmsw_Ew, Ew),
    rm_group!(GROUP7_F8),
];

#[rustfmt::skip]
const PREFETCH: [OpcodeRecord; 8] = [
    op!(Prefetchnta_Mb, M, UInt8),
    op!(Prefetcht0_Mb, M, UInt8),
    op!(Prefetcht1_Mb, M, UInt8),
    op!(Prefetcht2_Mb, M, UInt8),
    INVALID, INVALID, INVALID, INVALID,
];

#[rustfmt::skip]
const PREFETCHW: [OpcodeRecord; 8] = [
    INVALID,
    op!(Prefetchw_Mb, M, UInt8),
    INVALID, INVALID, INVALID, INVALID, INVALID, INVALID,
];

#[rustfmt::skip]
const GROUP8: [OpcodeRecord; 8] = [
    INVALID, INVALID, INVALID, INVALID,
    sized!(Bt_Ew_Ib, Bt_Ed_Ib, Bt_Eq_Ib; Ev_Ib),
    sized!(Bts_Ew_Ib, Bts_Ed_Ib, Bts_Eq_Ib; Ev_Ib),
    sized!(Btr_Ew_Ib, Btr_Ed_Ib, Btr_Eq_Ib; Ev_Ib),
    sized!(Btc_Ew_Ib, Btc_Ed_Ib, Btc_Eq_Ib; Ev_Ib),
];

#[rustfmt::skip]
const GROUP9_MEM: [OpcodeRecord; 8] = [
    INVALID,
    sized!(Cmpxchg8b_Mq, Cmpxchg8b_Mq, Cmpxchg16b_Mdq; Mq_dq),
    INVALID, INVALID, INVALID, INVALID, INVALID, INVALID,
];

#[rustfmt::skip]
const GROUP15_MEM: [OpcodeRecord; 8] = [
    op!(Fxsave_M512, M, Fxsave_512Byte),
    op!(Fxrstor_M512, M, Fxsave_512Byte),
    op!(Ldmxcsr_Md, M, UInt32),
    op!(Stmxcsr_Md, M, UInt32),
    op!(Xsave_M, M),
    op!(Xrstor_M, M),
    op!(Xsaveopt_M, M),
    op!(Clflush_Mb, M, UInt8),
];

#[rustfmt::skip]
const GROUP15_REG: [OpcodeRecord; 8] = [
    INVALID, INVALID, INVALID, INVALID, INVALID,
    op!(Lfence, Nothing),
    op!(Mfence, Nothing),
    op!(Sfence, Nothing),
];

#[rustfmt::skip]
const GROUP12_MMX: [OpcodeRecord; 8] = [
    INVALID, INVALID,
    op!(Psrlw_mm_imm8, N_Ib),
    INVALID,
    op!(Psraw_mm_imm8, N_Ib),
    INVALID,
    op!(Psllw_mm_imm8, N_Ib),
    INVALID,
];

#[rustfmt::skip]
const GROUP12_XMM: [OpcodeRecord; 8] = [
    INVALID, INVALID,
    op!(Psrlw_xmm_imm8, U_Ib),
    INVALID,
    op!(Psraw_xmm_imm8, U_Ib),
    INVALID,
    op!(Psllw_xmm_imm8, U_Ib),
    INVALID,
];

#[rustfmt::skip]
const GROUP13_MMX: [OpcodeRecord; 8] = [
    INVALID, INVALID,
    op!(Psrld_mm_imm8, N_Ib),
    INVALID,
    op!(Psrad_mm_imm8, N_Ib),
    INVALID,
    op!(Pslld_mm_imm8, N_Ib),
    INVALID,
];

#[rustfmt::skip]
const GROUP13_XMM: [OpcodeRecord; 8] = [
    INVALID, INVALID,
    op!(Psrld_xmm_imm8, U_Ib),
    INVALID,
    op!(Psrad_xmm_imm8, U_Ib),
    INVALID,
    op!(Pslld_xmm_imm8, U_Ib),
    INVALID,
];

#[rustfmt::skip]
const GROUP14_MMX: [OpcodeRecord; 8] = [
    INVALID, INVALID,
    op!(Psrlq_mm_imm8, N_Ib),
    INVALID, INVALID, INVALID,
    op!(Psllq_mm_imm8, N_Ib),
    INVALID,
];

#[rustfmt::skip]
const GROUP14_XMM: [OpcodeRecord; 8] = [
    INVALID, INVALID,
    op!(Psrlq_xmm_imm8, U_Ib),
    op!(Psrldq_xmm_imm8, U_Ib),
    INVALID, INVALID,
    op!(Psllq_xmm_imm8, U_Ib),
    op!(Pslldq_xmm_imm8, U_Ib),
];

/// An MMX form without a prefix and its SSE2 twin under 66.
macro_rules! mmx_sse {
    ($mm:ident, $mm_mem:ident, $xmm:ident, $xmm_mem:ident) => {
        mandatory!(
            op!($mm, P_Q, $mm_mem),
            op!($xmm, V_W, $xmm_mem),
            INVALID,
            INVALID
        )
    };
}

/// A packed single form, its 66 packed double, F3 scalar single and F2 scalar double.
macro_rules! sse_arith {
    ($ps:ident, $pd:ident, $ss:ident, $sd:ident) => {
        mandatory!(
            op!($ps, V_W, Packed128_Float32),
            op!($pd, V_W, Packed128_Float64),
            op!($ss, V_W, Float32),
            op!($sd, V_W, Float64)
        )
    };
}

macro_rules! cmov {
    ($w:ident, $d:ident, $q:ident) => {
        sized!($w, $d, $q; Gv_Ev)
    };
}

macro_rules! jcc {
    ($w:ident, $d:ident, $q:ident) => {
        sized!($w, $d, $q; Jz)
    };
}

#[rustfmt::skip]
pub(crate) static MAP_0F: [OpcodeRecord; 256] = [
// 0x00
    group!(GROUP6),
    reg_mem!(group!(GROUP7_MEM), group!(GROUP7_REG)),
    sized!(Lar_Gw_Ew, Lar_Gd_Ed, Lar_Gq_Eq; Gv_Evw),
    sized!(Lsl_Gw_Ew, Lsl_Gd_Ed, Lsl_Gq_Eq; Gv_Evw),
    INVALID,
    long_only!(op!(Syscall, Nothing)),
    op!(Clts, Nothing),
    long_only!(sized!(Sysretd, Sysretd, Sysretq; Nothing)),
    op!(Invd, Nothing),
    op!(Wbinvd, Nothing),
    INVALID,
    op!(Ud2, Nothing),
    INVALID,
    reg_mem!(group!(PREFETCHW), INVALID),
    INVALID,
    INVALID,
// 0x10
    mandatory!(
        op!(Movups_xmm_xmmm128, V_W, Packed128_Float32),
        op!(Movupd_xmm_xmmm128, V_W, Packed128_Float64),
        op!(Movss_xmm_xmmm32, V_W, Float32),
        op!(Movsd_xmm_xmmm64, V_W, Float64)
    ),
    mandatory!(
        op!(Movups_xmmm128_xmm, W_V, Packed128_Float32),
        op!(Movupd_xmmm128_xmm, W_V, Packed128_Float64),
        op!(Movss_xmmm32_xmm, W_V, Float32),
        op!(Movsd_xmmm64_xmm, W_V, Float64)
    ),
    mandatory!(
        reg_mem!(op!(Movlps_xmm_m64, V_M, Packed64_Float32), op!(Movhlps_xmm_xmm, V_U)),
        op!(Movlpd_xmm_m64, V_M, Float64),
        op!(Movsldup_xmm_xmmm128, V_W, Packed128_Float32),
        op!(Movddup_xmm_xmmm64, V_W, Float64)
    ),
    mandatory!(
        op!(Movlps_m64_xmm, M_V, Packed64_Float32),
        op!(Movlpd_m64_xmm, M_V, Float64),
        INVALID,
        INVALID
    ),
    mandatory!(
        op!(Unpcklps_xmm_xmmm128, V_W, Packed128_Float32),
        op!(Unpcklpd_xmm_xmmm128, V_W, Packed128_Float64),
        INVALID,
        INVALID
    ),
    mandatory!(
        op!(Unpckhps_xmm_xmmm128, V_W, Packed128_Float32),
        op!(Unpckhpd_xmm_xmmm128, V_W, Packed128_Float64),
        INVALID,
        INVALID
    ),
    mandatory!(
        reg_mem!(op!(Movhps_xmm_m64, V_M, Packed64_Float32), op!(Movlhps_xmm_xmm, V_U)),
        op!(Movhpd_xmm_m64, V_M, Float64),
        op!(Movshdup_xmm_xmmm128, V_W, Packed128_Float32),
        INVALID
    ),
    mandatory!(
        op!(Movhps_m64_xmm, M_V, Packed64_Float32),
        op!(Movhpd_m64_xmm, M_V, Float64),
        INVALID,
        INVALID
    ),
    reg_mem!(group!(PREFETCH), INVALID),
    INVALID,
    INVALID,
    INVALID,
    INVALID,
    INVALID,
    INVALID,
    sized!(Nopw_Ev, Nopd_Ev, Nopq_Ev; Ev),
// 0x20
    sized!(Mov_r32_cr, Mov_r32_cr, Mov_r64_cr; R_Cr),
    sized!(Mov_r32_dr, Mov_r32_dr, Mov_r64_dr; R_Dr),
    sized!(Mov_cr_r32, Mov_cr_r32, Mov_cr_r64; Cr_R),
    sized!(Mov_dr_r32, Mov_dr_r32, Mov_dr_r64; Dr_R),
    INVALID,
    INVALID,
    INVALID,
    INVALID,
    mandatory!(
        op!(Movaps_xmm_xmmm128, V_W, Packed128_Float32),
        op!(Movapd_xmm_xmmm128, V_W, Packed128_Float64),
        INVALID,
        INVALID
    ),
    mandatory!(
        op!(Movaps_xmmm128_xmm, W_V, Packed128_Float32),
        op!(Movapd_xmmm128_xmm, W_V, Packed128_Float64),
        INVALID,
        INVALID
    ),
    mandatory!(
        op!(Cvtpi2ps_xmm_mmm64, V_Q, Packed64_Int32),
        op!(Cvtpi2pd_xmm_mmm64, V_Q, Packed64_Int32),
        sized!(Cvtsi2ss_xmm_rm32, Cvtsi2ss_xmm_rm32, Cvtsi2ss_xmm_rm64; V_Ey),
        sized!(Cvtsi2sd_xmm_rm32, Cvtsi2sd_xmm_rm32, Cvtsi2sd_xmm_rm64; V_Ey)
    ),
    mandatory!(
        op!(Movntps_m128_xmm, M_V, Packed128_Float32),
        op!(Movntpd_m128_xmm, M_V, Packed128_Float64),
        INVALID,
        INVALID
    ),
    mandatory!(
        op!(Cvttps2pi_mm_xmmm64, P_W, Packed64_Float32),
        op!(Cvttpd2pi_mm_xmmm128, P_W, Packed128_Float64),
        sized!(Cvttss2si_r32_xmmm32, Cvttss2si_r32_xmmm32, Cvttss2si_r64_xmmm32; Gy_W, Float32),
        sized!(Cvttsd2si_r32_xmmm64, Cvttsd2si_r32_xmmm64, Cvttsd2si_r64_xmmm64; Gy_W, Float64)
    ),
    mandatory!(
        op!(Cvtps2pi_mm_xmmm64, P_W, Packed64_Float32),
        op!(Cvtpd2pi_mm_xmmm128, P_W, Packed128_Float64),
        sized!(Cvtss2si_r32_xmmm32, Cvtss2si_r32_xmmm32, Cvtss2si_r64_xmmm32; Gy_W, Float32),
        sized!(Cvtsd2si_r32_xmmm64, Cvtsd2si_r32_xmmm64, Cvtsd2si_r64_xmmm64; Gy_W, Float64)
    ),
    mandatory!(
        op!(Ucomiss_xmm_xmmm32, V_W, Float32),
        op!(Ucomisd_xmm_xmmm64, V_W, Float64),
        INVALID,
        INVALID
    ),
    mandatory!(
        op!(Comiss_xmm_xmmm32, V_W, Float32),
        op!(Comisd_xmm_xmmm64, V_W, Float64),
        INVALID,
        INVALID
    ),
// 0x30
    op!(Wrmsr, Nothing),
    op!(Rdtsc, Nothing),
    op!(Rdmsr, Nothing),
    op!(Rdpmc, Nothing),
    op!(Sysenter, Nothing),
    sized!(Sysexitd, Sysexitd, Sysexitq; Nothing),
    INVALID,
    INVALID,
    INVALID, // 0F38, looked up separately
    INVALID,
    INVALID, // 0F3A, looked up separately
    INVALID,
    INVALID,
    INVALID,
    INVALID,
    INVALID,
// 0x40
    cmov!(Cmovo_Gw_Ew, Cmovo_Gd_Ed, Cmovo_Gq_Eq),
    cmov!(Cmovno_Gw_Ew, Cmovno_Gd_Ed, Cmovno_Gq_Eq),
    cmov!(Cmovb_Gw_Ew, Cmovb_Gd_Ed, Cmovb_Gq_Eq),
    cmov!(Cmovae_Gw_Ew, Cmovae_Gd_Ed, Cmovae_Gq_Eq),
    cmov!(Cmove_Gw_Ew, Cmove_Gd_Ed, Cmove_Gq_Eq),
    cmov!(Cmovne_Gw_Ew, Cmovne_Gd_Ed, Cmovne_Gq_Eq),
    cmov!(Cmovbe_Gw_Ew, Cmovbe_Gd_Ed, Cmovbe_Gq_Eq),
    cmov!(Cmova_Gw_Ew, Cmova_Gd_Ed, Cmova_Gq_Eq),
    cmov!(Cmovs_Gw_Ew, Cmovs_Gd_Ed, Cmovs_Gq_Eq),
    cmov!(Cmovns_Gw_Ew, Cmovns_Gd_Ed, Cmovns_Gq_Eq),
    cmov!(Cmovp_Gw_Ew, Cmovp_Gd_Ed, Cmovp_Gq_Eq),
    cmov!(Cmovnp_Gw_Ew, Cmovnp_Gd_Ed, Cmovnp_Gq_Eq),
    cmov!(Cmovl_Gw_Ew, Cmovl_Gd_Ed, Cmovl_Gq_Eq),
    cmov!(Cmovge_Gw_Ew, Cmovge_Gd_Ed, Cmovge_Gq_Eq),
    cmov!(Cmovle_Gw_Ew, Cmovle_Gd_Ed, Cmovle_Gq_Eq),
    cmov!(Cmovg_Gw_Ew, Cmovg_Gd_Ed, Cmovg_Gq_Eq),
// 0x50
    mandatory!(
        sized!(Movmskps_r32_xmm, Movmskps_r32_xmm, Movmskps_r64_xmm; Gy_U),
        sized!(Movmskpd_r32_xmm, Movmskpd_r32_xmm, Movmskpd_r64_xmm; Gy_U),
        INVALID,
        INVALID
    ),
    sse_arith!(Sqrtps_xmm_xmmm128, Sqrtpd_xmm_xmmm128, Sqrtss_xmm_xmmm32, Sqrtsd_xmm_xmmm64),
    mandatory!(
        op!(Rsqrtps_xmm_xmmm128, V_W, Packed128_Float32),
        INVALID,
        op!(Rsqrtss_xmm_xmmm32, V_W, Float32),
        INVALID
    ),
    mandatory!(
        op!(Rcpps_xmm_xmmm128, V_W, Packed128_Float32),
        INVALID,
        op!(Rcpss_xmm_xmmm32, V_W, Float32),
        INVALID
    ),
    mandatory!(
        op!(Andps_xmm_xmmm128, V_W, Packed128_Float32),
        op!(Andpd_xmm_xmmm128, V_W, Packed128_Float64),
        INVALID,
        INVALID
    ),
    mandatory!(
        op!(Andnps_xmm_xmmm128, V_W, Packed128_Float32),
        op!(Andnpd_xmm_xmmm128, V_W, Packed128_Float64),
        INVALID,
        INVALID
    ),
    mandatory!(
        op!(Orps_xmm_xmmm128, V_W, Packed128_Float32),
        op!(Orpd_xmm_xmmm128, V_W, Packed128_Float64),
        INVALID,
        INVALID
    ),
    mandatory!(
        op!(Xorps_xmm_xmmm128, V_W, Packed128_Float32),
        op!(Xorpd_xmm_xmmm128, V_W, Packed128_Float64),
        INVALID,
        INVALID
    ),
    sse_arith!(Addps_xmm_xmmm128, Addpd_xmm_xmmm128, Addss_xmm_xmmm32, Addsd_xmm_xmmm64),
    sse_arith!(Mulps_xmm_xmmm128, Mulpd_xmm_xmmm128, Mulss_xmm_xmmm32, Mulsd_xmm_xmmm64),
    mandatory!(
        op!(Cvtps2pd_xmm_xmmm64, V_W, Packed64_Float32),
        op!(Cvtpd2ps_xmm_xmmm128, V_W, Packed128_Float64),
        op!(Cvtss2sd_xmm_xmmm32, V_W, Float32),
        op!(Cvtsd2ss_xmm_xmmm64, V_W, Float64)
    ),
    mandatory!(
        op!(Cvtdq2ps_xmm_xmmm128, V_W, Packed128_Int32),
        op!(Cvtps2dq_xmm_xmmm128, V_W, Packed128_Float32),
        op!(Cvttps2dq_xmm_xmmm128, V_W, Packed128_Float32),
        INVALID
    ),
    sse_arith!(Subps_xmm_xmmm128, Subpd_xmm_xmmm128, Subss_xmm_xmmm32, Subsd_xmm_xmmm64),
    sse_arith!(Minps_xmm_xmmm128, Minpd_xmm_xmmm128, Minss_xmm_xmmm32, Minsd_xmm_xmmm64),
    sse_arith!(Divps_xmm_xmmm128, Divpd_xmm_xmmm128, Divss_xmm_xmmm32, Divsd_xmm_xmmm64),
    sse_arith!(Maxps_xmm_xmmm128, Maxpd_xmm_xmmm128, Maxss_xmm_xmmm32, Maxsd_xmm_xmmm64),
// 0x60
    mmx_sse!(Punpcklbw_mm_mmm32, UInt32, Punpcklbw_xmm_xmmm128, Packed128_UInt8),
    mmx_sse!(Punpcklwd_mm_mmm32, UInt32, Punpcklwd_xmm_xmmm128, Packed128_UInt16),
    mmx_sse!(Punpckldq_mm_mmm32, UInt32, Punpckldq_xmm_xmmm128, Packed128_UInt32),
    mmx_sse!(Packsswb_mm_mmm64, Packed64_Int16, Packsswb_xmm_xmmm128, Packed128_Int16),
    mmx_sse!(Pcmpgtb_mm_mmm64, Packed64_Int8, Pcmpgtb_xmm_xmmm128, Packed128_Int8),
    mmx_sse!(Pcmpgtw_mm_mmm64, Packed64_Int16, Pcmpgtw_xmm_xmmm128, Packed128_Int16),
    mmx_sse!(Pcmpgtd_mm_mmm64, Packed64_Int32, Pcmpgtd_xmm_xmmm128, Packed128_Int32),
    mmx_sse!(Packuswb_mm_mmm64, Packed64_Int16, Packuswb_xmm_xmmm128, Packed128_Int16),
    mmx_sse!(Punpckhbw_mm_mmm64, Packed64_UInt8, Punpckhbw_xmm_xmmm128, Packed128_UInt8),
    mmx_sse!(Punpckhwd_mm_mmm64, Packed64_UInt16, Punpckhwd_xmm_xmmm128, Packed128_UInt16),
    mmx_sse!(Punpckhdq_mm_mmm64, Packed64_UInt32, Punpckhdq_xmm_xmmm128, Packed128_UInt32),
    mmx_sse!(Packssdw_mm_mmm64, Packed64_Int32, Packssdw_xmm_xmmm128, Packed128_Int32),
    mandatory!(
        INVALID,
        op!(Punpcklqdq_xmm_xmmm128, V_W, Packed128_UInt64),
        INVALID,
        INVALID
    ),
    mandatory!(
        INVALID,
        op!(Punpckhqdq_xmm_xmmm128, V_W, Packed128_UInt64),
        INVALID,
        INVALID
    ),
    mandatory!(
        sized!(Movd_mm_rm32, Movd_mm_rm32, Movq_mm_rm64; P_Ey),
        sized!(Movd_xmm_rm32, Movd_xmm_rm32, Movq_xmm_rm64; V_Ey),
        INVALID,
        INVALID
    ),
    mandatory!(
        op!(Movq_mm_mmm64, P_Q, UInt64),
        op!(Movdqa_xmm_xmmm128, V_W, UInt128),
        op!(Movdqu_xmm_xmmm128, V_W, UInt128),
        INVALID
    ),
// 0x70
    mandatory!(
        op!(Pshufw_mm_mmm64_imm8, P_Q_Ib, Packed64_UInt16),
        op!(Pshufd_xmm_xmmm128_imm8, V_W_Ib, Packed128_UInt32),
        op!(Pshufhw_xmm_xmmm128_imm8, V_W_Ib, Packed128_UInt16),
        op!(Pshuflw_xmm_xmmm128_imm8, V_W_Ib, Packed128_UInt16)
    ),
    mandatory!(group!(GROUP12_MMX), group!(GROUP12_XMM), INVALID, INVALID),
    mandatory!(group!(GROUP13_MMX), group!(GROUP13_XMM), INVALID, INVALID),
    mandatory!(group!(GROUP14_MMX), group!(GROUP14_XMM), INVALID, INVALID),
    mmx_sse!(Pcmpeqb_mm_mmm64, Packed64_UInt8, Pcmpeqb_xmm_xmmm128, Packed128_UInt8),
    mmx_sse!(Pcmpeqw_mm_mmm64, Packed64_UInt16, Pcmpeqw_xmm_xmmm128, Packed128_UInt16),
    mmx_sse!(Pcmpeqd_mm_mmm64, Packed64_UInt32, Pcmpeqd_xmm_xmmm128, Packed128_UInt32),
    mandatory!(op!(Emms, Nothing), INVALID, INVALID, INVALID),
    INVALID,
    INVALID,
    INVALID,
    INVALID,
    mandatory!(
        INVALID,
        op!(Haddpd_xmm_xmmm128, V_W, Packed128_Float64),
        INVALID,
        op!(Haddps_xmm_xmmm128, V_W, Packed128_Float32)
    ),
    mandatory!(
        INVALID,
        op!(Hsubpd_xmm_xmmm128, V_W, Packed128_Float64),
        INVALID,
        op!(Hsubps_xmm_xmmm128, V_W, Packed128_Float32)
    ),
    mandatory!(
        sized!(Movd_rm32_mm, Movd_rm32_mm, Movq_rm64_mm; Ey_P),
        sized!(Movd_rm32_xmm, Movd_rm32_xmm, Movq_rm64_xmm; Ey_V),
        op!(Movq_xmm_xmmm64, V_W, UInt64),
        INVALID
    ),
    mandatory!(
        op!(Movq_mmm64_mm, Q_P, UInt64),
        op!(Movdqa_xmmm128_xmm, W_V, UInt128),
        op!(Movdqu_xmmm128_xmm, W_V, UInt128),
        INVALID
    ),
// 0x80
    jcc!(Jo_Jw16, Jo_Jd32, Jo_Jd64),
    jcc!(Jno_Jw16, Jno_Jd32, Jno_Jd64),
    jcc!(Jb_Jw16, Jb_Jd32, Jb_Jd64),
    jcc!(Jae_Jw16, Jae_Jd32, Jae_Jd64),
    jcc!(Je_Jw16, Je_Jd32, Je_Jd64),
    jcc!(Jne_Jw16, Jne_Jd32, Jne_Jd64),
    jcc!(Jbe_Jw16, Jbe_Jd32, Jbe_Jd64),
    jcc!(Ja_Jw16, Ja_Jd32, Ja_Jd64),
    jcc!(Js_Jw16, Js_Jd32, Js_Jd64),
    jcc!(Jns_Jw16, Jns_Jd32, Jns_Jd64),
    jcc!(Jp_Jw16, Jp_Jd32, Jp_Jd64),
    jcc!(Jnp_Jw16, Jnp_Jd32, Jnp_Jd64),
    jcc!(Jl_Jw16, Jl_Jd32, Jl_Jd64),
    jcc!(Jge_Jw16, Jge_Jd32, Jge_Jd64),
    jcc!(Jle_Jw16, Jle_Jd32, Jle_Jd64),
    jcc!(Jg_Jw16, Jg_Jd32, Jg_Jd64),
// 0x90
    op!(Seto_Eb, Eb),
    op!(Setno_Eb, Eb),
    op!(Setb_Eb, Eb),
    op!(Setae_Eb, Eb),
    op!(Sete_Eb, Eb),
    op!(Setne_Eb, Eb),
    op!(Setbe_Eb, Eb),
    op!(Seta_Eb, Eb),
    op!(Sets_Eb, Eb),
    op!(Setns_Eb, Eb),
    op!(Setp_Eb, Eb),
    op!(Setnp_Eb, Eb),
    op!(Setl_Eb, Eb),
    op!(Setge_Eb, Eb),
    op!(Setle_Eb, Eb),
    op!(Setg_Eb, Eb),
// 0xa0
    sized!(Pushw_FS, Pushd_FS, Pushq_FS; Sreg),
    sized!(Popw_FS, Popd_FS, Popq_FS; Sreg),
    op!(Cpuid, Nothing),
    sized!(Bt_Ew_Gw, Bt_Ed_Gd, Bt_Eq_Gq; Ev_Gv),
    sized!(Shld_Ew_Gw_Ib, Shld_Ed_Gd_Ib, Shld_Eq_Gq_Ib; Ev_Gv_Ib),
    sized!(Shld_Ew_Gw_CL, Shld_Ed_Gd_CL, Shld_Eq_Gq_CL; Ev_Gv_CL),
    INVALID,
    INVALID,
    sized!(Pushw_GS, Pushd_GS, Pushq_GS; Sreg),
    sized!(Popw_GS, Popd_GS, Popq_GS; Sreg),
    op!(Rsm, Nothing),
    sized!(Bts_Ew_Gw, Bts_Ed_Gd, Bts_Eq_Gq; Ev_Gv),
    sized!(Shrd_Ew_Gw_Ib, Shrd_Ed_Gd_Ib, Shrd_Eq_Gq_Ib; Ev_Gv_Ib),
    sized!(Shrd_Ew_Gw_CL, Shrd_Ed_Gd_CL, Shrd_Eq_Gq_CL; Ev_Gv_CL),
    reg_mem!(group!(GROUP15_MEM), group!(GROUP15_REG)),
    sized!(Imul_Gw_Ew, Imul_Gd_Ed, Imul_Gq_Eq; Gv_Ev),
// 0xb0
    op!(Cmpxchg_Eb_Gb, Eb_Gb),
    sized!(Cmpxchg_Ew_Gw, Cmpxchg_Ed_Gd, Cmpxchg_Eq_Gq; Ev_Gv),
    sized!(Lss_Gw_Mp, Lss_Gd_Mp, Lss_Gq_Mp; Gv_Mp),
    sized!(Btr_Ew_Gw, Btr_Ed_Gd, Btr_Eq_Gq; Ev_Gv),
    sized!(Lfs_Gw_Mp, Lfs_Gd_Mp, Lfs_Gq_Mp; Gv_Mp),
    sized!(Lgs_Gw_Mp, Lgs_Gd_Mp, Lgs_Gq_Mp; Gv_Mp),
    sized!(Movzx_Gw_Eb, Movzx_Gd_Eb, Movzx_Gq_Eb; Gv_Eb),
    sized!(Movzx_Gw_Ew, Movzx_Gd_Ew, Movzx_Gq_Ew; Gv_Ew),
    rep!(
        INVALID,
        sized!(Popcnt_Gw_Ew, Popcnt_Gd_Ed, Popcnt_Gq_Eq; Gv_Ev),
        INVALID
    ),
    INVALID,
    group!(GROUP8),
    sized!(Btc_Ew_Gw, Btc_Ed_Gd, Btc_Eq_Gq; Ev_Gv),
    rep!(
        sized!(Bsf_Gw_Ew, Bsf_Gd_Ed, Bsf_Gq_Eq; Gv_Ev),
        sized!(Tzcnt_Gw_Ew, Tzcnt_Gd_Ed, Tzcnt_Gq_Eq; Gv_Ev),
        sized!(Bsf_Gw_Ew, Bsf_Gd_Ed, Bsf_Gq_Eq; Gv_Ev)
    ),
    rep!(
        sized!(Bsr_Gw_Ew, Bsr_Gd_Ed, Bsr_Gq_Eq; Gv_Ev),
        sized!(Lzcnt_Gw_Ew, Lzcnt_Gd_Ed, Lzcnt_Gq_Eq; Gv_Ev),
        sized!(Bsr_Gw_Ew, Bsr_Gd_Ed, Bsr_Gq_Eq; Gv_Ev)
    ),
    sized!(Movsx_Gw_Eb, Movsx_Gd_Eb, Movsx_Gq_Eb; Gv_Eb),
    sized!(Movsx_Gw_Ew, Movsx_Gd_Ew, Movsx_Gq_Ew; Gv_Ew),
// 0xc0
    op!(Xadd_Eb_Gb, Eb_Gb),
    sized!(Xadd_Ew_Gw, Xadd_Ed_Gd, Xadd_Eq_Gq; Ev_Gv),
    mandatory!(
        op!(Cmpps_xmm_xmmm128_imm8, V_W_Ib, Packed128_Float32),
        op!(Cmppd_xmm_xmmm128_imm8, V_W_Ib, Packed128_Float64),
        op!(Cmpss_xmm_xmmm32_imm8, V_W_Ib, Float32),
        op!(Cmpsd_xmm_xmmm64_imm8, V_W_Ib, Float64)
    ),
    mandatory!(
        sized!(Movnti_m32_r32, Movnti_m32_r32, Movnti_m64_r64; My_Gy),
        INVALID,
        INVALID,
        INVALID
    ),
    mandatory!(
        op!(Pinsrw_mm_r32m16_imm8, P_Ew_Ib, UInt16),
        op!(Pinsrw_xmm_r32m16_imm8, V_Ew_Ib, UInt16),
        INVALID,
        INVALID
    ),
    mandatory!(
        op!(Pextrw_r32_mm_imm8, Gd_N_Ib),
        op!(Pextrw_r32_xmm_imm8, Gd_U_Ib),
        INVALID,
        INVALID
    ),
    mandatory!(
        op!(Shufps_xmm_xmmm128_imm8, V_W_Ib, Packed128_Float32),
        op!(Shufpd_xmm_xmmm128_imm8, V_W_Ib, Packed128_Float64),
        INVALID,
        INVALID
    ),
    reg_mem!(group!(GROUP9_MEM), INVALID),
    sized!(Bswap_r16, Bswap_r32, Bswap_r64; Zv),
    sized!(Bswap_r16, Bswap_r32, Bswap_r64; Zv),
    sized!(Bswap_r16, Bswap_r32, Bswap_r64; Zv),
    sized!(Bswap_r16, Bswap_r32, Bswap_r64; Zv),
    sized!(Bswap_r16, Bswap_r32, Bswap_r64; Zv),
    sized!(Bswap_r16, Bswap_r32, Bswap_r64; Zv),
    sized!(Bswap_r16, Bswap_r32, Bswap_r64; Zv),
    sized!(Bswap_r16, Bswap_r32, Bswap_r64; Zv),
// 0xd0
    mandatory!(
        INVALID,
        op!(Addsubpd_xmm_xmmm128, V_W, Packed128_Float64),
        INVALID,
        op!(Addsubps_xmm_xmmm128, V_W, Packed128_Float32)
    ),
    mmx_sse!(Psrlw_mm_mmm64, UInt64, Psrlw_xmm_xmmm128, UInt128),
    mmx_sse!(Psrld_mm_mmm64, UInt64, Psrld_xmm_xmmm128, UInt128),
    mmx_sse!(Psrlq_mm_mmm64, UInt64, Psrlq_xmm_xmmm128, UInt128),
    mmx_sse!(Paddq_mm_mmm64, UInt64, Paddq_xmm_xmmm128, Packed128_UInt64),
    mmx_sse!(Pmullw_mm_mmm64, Packed64_Int16, Pmullw_xmm_xmmm128, Packed128_Int16),
    mandatory!(
        INVALID,
        op!(Movq_xmmm64_xmm, W_V, UInt64),
        op!(Movq2dq_xmm_mm, V_N),
        op!(Movdq2q_mm_xmm, P_U)
    ),
    mandatory!(op!(Pmovmskb_r32_mm, Gd_N), op!(Pmovmskb_r32_xmm, Gd_U), INVALID, INVALID),
    mmx_sse!(Psubusb_mm_mmm64, Packed64_UInt8, Psubusb_xmm_xmmm128, Packed128_UInt8),
    mmx_sse!(Psubusw_mm_mmm64, Packed64_UInt16, Psubusw_xmm_xmmm128, Packed128_UInt16),
    mmx_sse!(Pminub_mm_mmm64, Packed64_UInt8, Pminub_xmm_xmmm128, Packed128_UInt8),
    mmx_sse!(Pand_mm_mmm64, UInt64, Pand_xmm_xmmm128, UInt128),
    mmx_sse!(Paddusb_mm_mmm64, Packed64_UInt8, Paddusb_xmm_xmmm128, Packed128_UInt8),
    mmx_sse!(Paddusw_mm_mmm64, Packed64_UInt16, Paddusw_xmm_xmmm128, Packed128_UInt16),
    mmx_sse!(Pmaxub_mm_mmm64, Packed64_UInt8, Pmaxub_xmm_xmmm128, Packed128_UInt8),
    mmx_sse!(Pandn_mm_mmm64, UInt64, Pandn_xmm_xmmm128, UInt128),
// 0xe0
    mmx_sse!(Pavgb_mm_mmm64, Packed64_UInt8, Pavgb_xmm_xmmm128, Packed128_UInt8),
    mmx_sse!(Psraw_mm_mmm64, UInt64, Psraw_xmm_xmmm128, UInt128),
    mmx_sse!(Psrad_mm_mmm64, UInt64, Psrad_xmm_xmmm128, UInt128),
    mmx_sse!(Pavgw_mm_mmm64, Packed64_UInt16, Pavgw_xmm_xmmm128, Packed128_UInt16),
    mmx_sse!(Pmulhuw_mm_mmm64, Packed64_UInt16, Pmulhuw_xmm_xmmm128, Packed128_UInt16),
    mmx_sse!(Pmulhw_mm_mmm64, Packed64_Int16, Pmulhw_xmm_xmmm128, Packed128_Int16),
    mandatory!(
        INVALID,
        op!(Cvttpd2dq_xmm_xmmm128, V_W, Packed128_Float64),
        op!(Cvtdq2pd_xmm_xmmm64, V_W, Packed64_Int32),
        op!(Cvtpd2dq_xmm_xmmm128, V_W, Packed128_Float64)
    ),
    mandatory!(
        op!(Movntq_m64_mm, M_P, UInt64),
        op!(Movntdq_m128_xmm, M_V, UInt128),
        INVALID,
        INVALID
    ),
    mmx_sse!(Psubsb_mm_mmm64, Packed64_Int8, Psubsb_xmm_xmmm128, Packed128_Int8),
    mmx_sse!(Psubsw_mm_mmm64, Packed64_Int16, Psubsw_xmm_xmmm128, Packed128_Int16),
    mmx_sse!(Pminsw_mm_mmm64, Packed64_Int16, Pminsw_xmm_xmmm128, Packed128_Int16),
    mmx_sse!(Por_mm_mmm64, UInt64, Por_xmm_xmmm128, UInt128),
    mmx_sse!(Paddsb_mm_mmm64, Packed64_Int8, Paddsb_xmm_xmmm128, Packed128_Int8),
    mmx_sse!(Paddsw_mm_mmm64, Packed64_Int16, Paddsw_xmm_xmmm128, Packed128_Int16),
    mmx_sse!(Pmaxsw_mm_mmm64, Packed64_Int16, Pmaxsw_xmm_xmmm128, Packed128_Int16),
    mmx_sse!(Pxor_mm_mmm64, UInt64, Pxor_xmm_xmmm128, UInt128),
// 0xf0
    mandatory!(INVALID, INVALID, INVALID, op!(Lddqu_xmm_m128, V_M, UInt128)),
    mmx_sse!(Psllw_mm_mmm64, UInt64, Psllw_xmm_xmmm128, UInt128),
    mmx_sse!(Pslld_mm_mmm64, UInt64, Pslld_xmm_xmmm128, UInt128),
    mmx_sse!(Psllq_mm_mmm64, UInt64, Psllq_xmm_xmmm128, UInt128),
    mmx_sse!(Pmuludq_mm_mmm64, Packed64_UInt32, Pmuludq_xmm_xmmm128, Packed128_UInt32),
    mmx_sse!(Pmaddwd_mm_mmm64, Packed64_Int16, Pmaddwd_xmm_xmmm128, Packed128_Int16),
    mmx_sse!(Psadbw_mm_mmm64, Packed64_UInt8, Psadbw_xmm_xmmm128, Packed128_UInt8),
    mandatory!(
        op!(Maskmovq_rDI_mm_mm, rDI_P_N, UInt64),
        op!(Maskmovdqu_rDI_xmm_xmm, rDI_V_U, UInt128),
        INVALID,
        INVALID
    ),
    mmx_sse!(Psubb_mm_mmm64, Packed64_Int8, Psubb_xmm_xmmm128, Packed128_Int8),
    mmx_sse!(Psubw_mm_mmm64, Packed64_Int16, Psubw_xmm_xmmm128, Packed128_Int16),
    mmx_sse!(Psubd_mm_mmm64, Packed64_Int32, Psubd_xmm_xmmm128, Packed128_Int32),
    mmx_sse!(Psubq_mm_mmm64, Int64, Psubq_xmm_xmmm128, Packed128_Int64),
    mmx_sse!(Paddb_mm_mmm64, Packed64_Int8, Paddb_xmm_xmmm128, Packed128_Int8),
    mmx_sse!(Paddw_mm_mmm64, Packed64_Int16, Paddw_xmm_xmmm128, Packed128_Int16),
    mmx_sse!(Paddd_mm_mmm64, Packed64_Int32, Paddd_xmm_xmmm128, Packed128_Int32),
    INVALID,
];

/// `0F 38 xx`, sorted by opcode byte.
#[rustfmt::skip]
pub(crate) static MAP_0F38: [(u8, OpcodeRecord); 7] = [
    (0x00, mmx_sse!(Pshufb_mm_mmm64, Packed64_UInt8, Pshufb_xmm_xmmm128, Packed128_UInt8)),
    (0x17, mandatory!(INVALID, op!(Ptest_xmm_xmmm128, V_W, UInt128), INVALID, INVALID)),
    (0x1c, mmx_sse!(Pabsb_mm_mmm64, Packed64_Int8, Pabsb_xmm_xmmm128, Packed128_Int8)),
    (0x1d, mmx_sse!(Pabsw_mm_mmm64, Packed64_Int16, Pabsw_xmm_xmmm128, Packed128_Int16)),
    (0x1e, mmx_sse!(Pabsd_mm_mmm64, Packed64_Int32, Pabsd_xmm_xmmm128, Packed128_Int32)),
    (0xf0, rep!(
        sized!(Movbe_Gw_Mw, Movbe_Gd_Md, Movbe_Gq_Mq; Gv_Mv),
        INVALID,
        sized!(Crc32_Gd_Eb, Crc32_Gd_Eb, Crc32_Gq_Eb; Gy_Eb)
    )),
    (0xf1, rep!(
        sized!(Movbe_Mw_Gw, Movbe_Md_Gd, Movbe_Mq_Gq; Mv_Gv),
        INVALID,
        sized!(Crc32_Gd_Ew, Crc32_Gd_Ed, Crc32_Gq_Eq; Gy_Ev)
    )),
];

/// `0F 3A xx`, sorted by opcode byte.
#[rustfmt::skip]
pub(crate) static MAP_0F3A: [(u8, OpcodeRecord); 16] = [
    (0x08, mandatory!(INVALID, op!(Roundps_xmm_xmmm128_imm8, V_W_Ib, Packed128_Float32), INVALID, INVALID)),
    (0x09, mandatory!(INVALID, op!(Roundpd_xmm_xmmm128_imm8, V_W_Ib, Packed128_Float64), INVALID, INVALID)),
    (0x0a, mandatory!(INVALID, op!(Roundss_xmm_xmmm32_imm8, V_W_Ib, Float32), INVALID, INVALID)),
    (0x0b, mandatory!(INVALID, op!(Roundsd_xmm_xmmm64_imm8, V_W_Ib, Float64), INVALID, INVALID)),
    (0x0f, mandatory!(
        op!(Palignr_mm_mmm64_imm8, P_Q_Ib, UInt64),
        op!(Palignr_xmm_xmmm128_imm8, V_W_Ib, UInt128),
        INVALID,
        INVALID
    )),
    (0x14, mandatory!(
        INVALID,
        sized!(Pextrb_r32m8_xmm_imm8, Pextrb_r32m8_xmm_imm8, Pextrb_r64m8_xmm_imm8; Ey_V_Ib, UInt8),
        INVALID,
        INVALID
    )),
    (0x15, mandatory!(
        INVALID,
        sized!(Pextrw_r32m16_xmm_imm8, Pextrw_r32m16_xmm_imm8, Pextrw_r64m16_xmm_imm8; Ey_V_Ib, UInt16),
        INVALID,
        INVALID
    )),
    (0x16, mandatory!(
        INVALID,
        sized!(Pextrd_rm32_xmm_imm8, Pextrd_rm32_xmm_imm8, Pextrq_rm64_xmm_imm8; Ey_V_Ib),
        INVALID,
        INVALID
    )),
    (0x17, mandatory!(
        INVALID,
        sized!(Extractps_rm32_xmm_imm8, Extractps_rm32_xmm_imm8, Extractps_r64m32_xmm_imm8; Ey_V_Ib, Float32),
        INVALID,
        INVALID
    )),
    (0x20, mandatory!(
        INVALID,
        sized!(Pinsrb_xmm_r32m8_imm8, Pinsrb_xmm_r32m8_imm8, Pinsrb_xmm_r64m8_imm8; V_Ey_Ib, UInt8),
        INVALID,
        INVALID
    )),
    (0x21, mandatory!(INVALID, op!(Insertps_xmm_xmmm32_imm8, V_W_Ib, Float32), INVALID, INVALID)),
    (0x22, mandatory!(
        INVALID,
        sized!(Pinsrd_xmm_rm32_imm8, Pinsrd_xmm_rm32_imm8, Pinsrq_xmm_rm64_imm8; V_Ey_Ib),
        INVALID,
        INVALID
    )),
    (0x40, mandatory!(INVALID, op!(Dpps_xmm_xmmm128_imm8, V_W_Ib, Packed128_Float32), INVALID, INVALID)),
    (0x41, mandatory!(INVALID, op!(Dppd_xmm_xmmm128_imm8, V_W_Ib, Packed128_Float64), INVALID, INVALID)),
    (0x42, mandatory!(INVALID, op!(Mpsadbw_xmm_xmmm128_imm8, V_W_Ib, Packed128_UInt8), INVALID, INVALID)),
    (0x44, mandatory!(INVALID, op!(Pclmulqdq_xmm_xmmm128_imm8, V_W_Ib, Packed128_UInt64), INVALID, INVALID)),
];

/// Binary search one of the sorted three byte maps.
pub(crate) fn lookup(map: &'static [(u8, OpcodeRecord)], opcode: u8) -> OpcodeRecord {
    match map.binary_search_by_key(&opcode, |&(b, _)| b) {
        Ok(idx) => map[idx].1,
        Err(_) => INVALID,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_sorted(map: &[(u8, OpcodeRecord)]) -> bool {
        map.windows(2).all(|pair| pair[0].0 < pair[1].0)
    }

    #[test]
    fn three_byte_maps_are_sorted() {
        assert!(is_sorted(&MAP_0F38));
        assert!(is_sorted(&MAP_0F3A));
    }

    #[test]
    fn missing_entries_are_invalid() {
        assert_eq!(lookup(&MAP_0F38, 0xb4), INVALID);
        assert_eq!(lookup(&MAP_0F3A, 0x43), INVALID);
        assert_ne!(lookup(&MAP_0F3A, 0x40), INVALID);
    }
}
