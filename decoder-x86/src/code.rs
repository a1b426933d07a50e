// Every instruction form the decoder knows about, named after its operands.
//
// Legacy forms read `Mnemonic_operands`, using the manual's operand notation (`Ev_Gv`, `r64_imm64`,
// `Mq`). VEX and EVEX forms carry an encoding prefix and spell out every register class:
// `EVEX_Vaddps_zmm_k1z_zmm_zmmm512b32_er`.

macro_rules! codes {
    ($($code:ident => $mnemonic:literal),* $(,)?) => {
        /// A decoded instruction form.
        #[allow(non_camel_case_types)]
        #[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        pub enum Code {
            /// Not a valid instruction.
            #[default]
            INVALID,
            $($code,)*
        }

        impl Code {
            /// Lowercase Intel mnemonic.
            pub const fn mnemonic(self) -> &'static str {
                match self {
                    Code::INVALID => "(bad)",
                    $(Code::$code => $mnemonic,)*
                }
            }
        }
    };
}

impl Code {
    /// Whether a `lock` prefix is allowed, given a memory destination.
    pub const fn is_lockable(self) -> bool {
        matches!(
            self,
            Code::Add_Eb_Ib
                | Code::Or_Eb_Ib
                | Code::Adc_Eb_Ib
                | Code::Sbb_Eb_Ib
                | Code::And_Eb_Ib
                | Code::Sub_Eb_Ib
                | Code::Xor_Eb_Ib
                | Code::Not_Eb
                | Code::Neg_Eb
                | Code::Inc_Eb
                | Code::Dec_Eb
                | Code::Add_Eb_Gb
                | Code::Or_Eb_Gb
                | Code::Adc_Eb_Gb
                | Code::Sbb_Eb_Gb
                | Code::And_Eb_Gb
                | Code::Sub_Eb_Gb
                | Code::Xor_Eb_Gb
                | Code::Xchg_Eb_Gb
                | Code::Add_Ew_Iw
                | Code::Add_Ed_Id
                | Code::Add_Eq_Id64
                | Code::Or_Ew_Iw
                | Code::Or_Ed_Id
                | Code::Or_Eq_Id64
                | Code::Adc_Ew_Iw
                | Code::Adc_Ed_Id
                | Code::Adc_Eq_Id64
                | Code::Sbb_Ew_Iw
                | Code::Sbb_Ed_Id
                | Code::Sbb_Eq_Id64
                | Code::And_Ew_Iw
                | Code::And_Ed_Id
                | Code::And_Eq_Id64
                | Code::Sub_Ew_Iw
                | Code::Sub_Ed_Id
                | Code::Sub_Eq_Id64
                | Code::Xor_Ew_Iw
                | Code::Xor_Ed_Id
                | Code::Xor_Eq_Id64
                | Code::Add_Ew_Ib16
                | Code::Add_Ed_Ib32
                | Code::Add_Eq_Ib64
                | Code::Or_Ew_Ib16
                | Code::Or_Ed_Ib32
                | Code::Or_Eq_Ib64
                | Code::Adc_Ew_Ib16
                | Code::Adc_Ed_Ib32
                | Code::Adc_Eq_Ib64
                | Code::Sbb_Ew_Ib16
                | Code::Sbb_Ed_Ib32
                | Code::Sbb_Eq_Ib64
                | Code::And_Ew_Ib16
                | Code::And_Ed_Ib32
                | Code::And_Eq_Ib64
                | Code::Sub_Ew_Ib16
                | Code::Sub_Ed_Ib32
                | Code::Sub_Eq_Ib64
                | Code::Xor_Ew_Ib16
                | Code::Xor_Ed_Ib32
                | Code::Xor_Eq_Ib64
                | Code::Not_Ew
                | Code::Not_Ed
                | Code::Not_Eq
                | Code::Neg_Ew
                | Code::Neg_Ed
                | Code::Neg_Eq
                | Code::Inc_Ew
                | Code::Inc_Ed
                | Code::Inc_Eq
                | Code::Dec_Ew
                | Code::Dec_Ed
                | Code::Dec_Eq
                | Code::Add_Ew_Gw
                | Code::Add_Ed_Gd
                | Code::Add_Eq_Gq
                | Code::Add_EAX_Id
                | Code::Or_Ew_Gw
                | Code::Or_Ed_Gd
                | Code::Or_Eq_Gq
                | Code::Or_EAX_Id
                | Code::Adc_Ew_Gw
                | Code::Adc_Ed_Gd
                | Code::Adc_Eq_Gq
                | Code::Adc_EAX_Id
                | Code::Sbb_Ew_Gw
                | Code::Sbb_Ed_Gd
                | Code::Sbb_Eq_Gq
                | Code::Sbb_EAX_Id
                | Code::And_Ew_Gw
                | Code::And_Ed_Gd
                | Code::And_Eq_Gq
                | Code::And_EAX_Id
                | Code::Sub_Ew_Gw
                | Code::Sub_Ed_Gd
                | Code::Sub_Eq_Gq
                | Code::Sub_EAX_Id
                | Code::Xor_Ew_Gw
                | Code::Xor_Ed_Gd
                | Code::Xor_Eq_Gq
                | Code::Xor_EAX_Id
                | Code::Xchg_Ew_Gw
                | Code::Xchg_Ed_Gd
                | Code::Xchg_Eq_Gq
                | Code::Cmpxchg_Eb_Gb
                | Code::Xadd_Eb_Gb
                | Code::Bts_Ew_Ib
                | Code::Bts_Ed_Ib
                | Code::Bts_Eq_Ib
                | Code::Btr_Ew_Ib
                | Code::Btr_Ed_Ib
                | Code::Btr_Eq_Ib
                | Code::Btc_Ew_Ib
                | Code::Btc_Ed_Ib
                | Code::Btc_Eq_Ib
                | Code::Bts_Ew_Gw
                | Code::Bts_Ed_Gd
                | Code::Bts_Eq_Gq
                | Code::Cmpxchg_Ew_Gw
                | Code::Cmpxchg_Ed_Gd
                | Code::Cmpxchg_Eq_Gq
                | Code::Btr_Ew_Gw
                | Code::Btr_Ed_Gd
                | Code::Btr_Eq_Gq
                | Code::Btc_Ew_Gw
                | Code::Btc_Ed_Gd
                | Code::Btc_Eq_Gq
                | Code::Xadd_Ew_Gw
                | Code::Xadd_Ed_Gd
                | Code::Xadd_Eq_Gq
                | Code::Cmpxchg8b_Mq
                | Code::Cmpxchg16b_Mdq
        )
    }
}

#[rustfmt::skip]
codes! {
    Add_Eb_Ib => "add",
    Or_Eb_Ib => "or",
    Adc_Eb_Ib => "adc",
    Sbb_Eb_Ib => "sbb",
    And_Eb_Ib => "and",
    Sub_Eb_Ib => "sub",
    Xor_Eb_Ib => "xor",
    Cmp_Eb_Ib => "cmp",
    Rol_Eb_Ib => "rol",
    Ror_Eb_Ib => "ror",
    Rcl_Eb_Ib => "rcl",
    Rcr_Eb_Ib => "rcr",
    Shl_Eb_Ib => "shl",
    Shr_Eb_Ib => "shr",
    Sal_Eb_Ib => "sal",
    Sar_Eb_Ib => "sar",
    Rol_Eb_1 => "rol",
    Ror_Eb_1 => "ror",
    Rcl_Eb_1 => "rcl",
    Rcr_Eb_1 => "rcr",
    Shl_Eb_1 => "shl",
    Shr_Eb_1 => "shr",
    Sal_Eb_1 => "sal",
    Sar_Eb_1 => "sar",
    Rol_Eb_CL => "rol",
    Ror_Eb_CL => "ror",
    Rcl_Eb_CL => "rcl",
    Rcr_Eb_CL => "rcr",
    Shl_Eb_CL => "shl",
    Shr_Eb_CL => "shr",
    Sal_Eb_CL => "sal",
    Sar_Eb_CL => "sar",
    Test_Eb_Ib => "test",
    Not_Eb => "not",
    Neg_Eb => "neg",
    Mul_Eb => "mul",
    Imul_Eb => "imul",
    Div_Eb => "div",
    Idiv_Eb => "idiv",
    Inc_Eb => "inc",
    Dec_Eb => "dec",
    Mov_Eb_Ib => "mov",
    Mov_r8_imm8 => "mov",
    Add_Eb_Gb => "add",
    Add_Gb_Eb => "add",
    Add_AL_Ib => "add",
    Or_Eb_Gb => "or",
    Or_Gb_Eb => "or",
    Or_AL_Ib => "or",
    Adc_Eb_Gb => "adc",
    Adc_Gb_Eb => "adc",
    Adc_AL_Ib => "adc",
    Sbb_Eb_Gb => "sbb",
    Sbb_Gb_Eb => "sbb",
    Sbb_AL_Ib => "sbb",
    And_Eb_Gb => "and",
    And_Gb_Eb => "and",
    And_AL_Ib => "and",
    Daa => "daa",
    Sub_Eb_Gb => "sub",
    Sub_Gb_Eb => "sub",
    Sub_AL_Ib => "sub",
    Das => "das",
    Xor_Eb_Gb => "xor",
    Xor_Gb_Eb => "xor",
    Xor_AL_Ib => "xor",
    Aaa => "aaa",
    Cmp_Eb_Gb => "cmp",
    Cmp_Gb_Eb => "cmp",
    Cmp_AL_Ib => "cmp",
    Aas => "aas",
    Arpl_Ew_Gw => "arpl",
    Insb_Yb_DX => "insb",
    Outsb_DX_Xb => "outsb",
    Test_Eb_Gb => "test",
    Xchg_Eb_Gb => "xchg",
    Mov_Eb_Gb => "mov",
    Mov_Gb_Eb => "mov",
    Wait => "wait",
    Sahf => "sahf",
    Lahf => "lahf",
    Mov_AL_Ob => "mov",
    Mov_Ob_AL => "mov",
    Movsb_Yb_Xb => "movsb",
    Cmpsb_Xb_Yb => "cmpsb",
    Test_AL_Ib => "test",
    Stosb_Yb_AL => "stosb",
    Lodsb_AL_Xb => "lodsb",
    Scasb_AL_Yb => "scasb",
    Int3 => "int3",
    Int_Ib => "int",
    Into => "into",
    Aam_Ib => "aam",
    Aad_Ib => "aad",
    Salc => "salc",
    Xlatb => "xlatb",
    In_AL_Ib => "in",
    Out_Ib_AL => "out",
    In_AL_DX => "in",
    Out_DX_AL => "out",
    Int1 => "int1",
    Hlt => "hlt",
    Cmc => "cmc",
    Clc => "clc",
    Stc => "stc",
    Cli => "cli",
    Sti => "sti",
    Cld => "cld",
    Std => "std",
    Add_Ew_Iw => "add",
    Add_Ed_Id => "add",
    Add_Eq_Id64 => "add",
    Or_Ew_Iw => "or",
    Or_Ed_Id => "or",
    Or_Eq_Id64 => "or",
    Adc_Ew_Iw => "adc",
    Adc_Ed_Id => "adc",
    Adc_Eq_Id64 => "adc",
    Sbb_Ew_Iw => "sbb",
    Sbb_Ed_Id => "sbb",
    Sbb_Eq_Id64 => "sbb",
    And_Ew_Iw => "and",
    And_Ed_Id => "and",
    And_Eq_Id64 => "and",
    Sub_Ew_Iw => "sub",
    Sub_Ed_Id => "sub",
    Sub_Eq_Id64 => "sub",
    Xor_Ew_Iw => "xor",
    Xor_Ed_Id => "xor",
    Xor_Eq_Id64 => "xor",
    Cmp_Ew_Iw => "cmp",
    Cmp_Ed_Id => "cmp",
    Cmp_Eq_Id64 => "cmp",
    Add_Ew_Ib16 => "add",
    Add_Ed_Ib32 => "add",
    Add_Eq_Ib64 => "add",
    Or_Ew_Ib16 => "or",
    Or_Ed_Ib32 => "or",
    Or_Eq_Ib64 => "or",
    Adc_Ew_Ib16 => "adc",
    Adc_Ed_Ib32 => "adc",
    Adc_Eq_Ib64 => "adc",
    Sbb_Ew_Ib16 => "sbb",
    Sbb_Ed_Ib32 => "sbb",
    Sbb_Eq_Ib64 => "sbb",
    And_Ew_Ib16 => "and",
    And_Ed_Ib32 => "and",
    And_Eq_Ib64 => "and",
    Sub_Ew_Ib16 => "sub",
    Sub_Ed_Ib32 => "sub",
    Sub_Eq_Ib64 => "sub",
    Xor_Ew_Ib16 => "xor",
    Xor_Ed_Ib32 => "xor",
    Xor_Eq_Ib64 => "xor",
    Cmp_Ew_Ib16 => "cmp",
    Cmp_Ed_Ib32 => "cmp",
    Cmp_Eq_Ib64 => "cmp",
    Pop_Ew => "pop",
    Pop_Ed => "pop",
    Pop_Eq => "pop",
    Rol_Ew_Ib => "rol",
    Rol_Ed_Ib => "rol",
    Rol_Eq_Ib => "rol",
    Ror_Ew_Ib => "ror",
    Ror_Ed_Ib => "ror",
    Ror_Eq_Ib => "ror",
    Rcl_Ew_Ib => "rcl",
    Rcl_Ed_Ib => "rcl",
    Rcl_Eq_Ib => "rcl",
    Rcr_Ew_Ib => "rcr",
    Rcr_Ed_Ib => "rcr",
    Rcr_Eq_Ib => "rcr",
    Shl_Ew_Ib => "shl",
    Shl_Ed_Ib => "shl",
    Shl_Eq_Ib => "shl",
    Shr_Ew_Ib => "shr",
    Shr_Ed_Ib => "shr",
    Shr_Eq_Ib => "shr",
    Sal_Ew_Ib => "sal",
    Sal_Ed_Ib => "sal",
    Sal_Eq_Ib => "sal",
    Sar_Ew_Ib => "sar",
    Sar_Ed_Ib => "sar",
    Sar_Eq_Ib => "sar",
    Rol_Ew_1 => "rol",
    Rol_Ed_1 => "rol",
    Rol_Eq_1 => "rol",
    Ror_Ew_1 => "ror",
    Ror_Ed_1 => "ror",
    Ror_Eq_1 => "ror",
    Rcl_Ew_1 => "rcl",
    Rcl_Ed_1 => "rcl",
    Rcl_Eq_1 => "rcl",
    Rcr_Ew_1 => "rcr",
    Rcr_Ed_1 => "rcr",
    Rcr_Eq_1 => "rcr",
    Shl_Ew_1 => "shl",
    Shl_Ed_1 => "shl",
    Shl_Eq_1 => "shl",
    Shr_Ew_1 => "shr",
    Shr_Ed_1 => "shr",
    Shr_Eq_1 => "shr",
    Sal_Ew_1 => "sal",
    Sal_Ed_1 => "sal",
    Sal_Eq_1 => "sal",
    Sar_Ew_1 => "sar",
    Sar_Ed_1 => "sar",
    Sar_Eq_1 => "sar",
    Rol_Ew_CL => "rol",
    Rol_Ed_CL => "rol",
    Rol_Eq_CL => "rol",
    Ror_Ew_CL => "ror",
    Ror_Ed_CL => "ror",
    Ror_Eq_CL => "ror",
    Rcl_Ew_CL => "rcl",
    Rcl_Ed_CL => "rcl",
    Rcl_Eq_CL => "rcl",
    Rcr_Ew_CL => "rcr",
    Rcr_Ed_CL => "rcr",
    Rcr_Eq_CL => "rcr",
    Shl_Ew_CL => "shl",
    Shl_Ed_CL => "shl",
    Shl_Eq_CL => "shl",
    Shr_Ew_CL => "shr",
    Shr_Ed_CL => "shr",
    Shr_Eq_CL => "shr",
    Sal_Ew_CL => "sal",
    Sal_Ed_CL => "sal",
    Sal_Eq_CL => "sal",
    Sar_Ew_CL => "sar",
    Sar_Ed_CL => "sar",
    Sar_Eq_CL => "sar",
    Test_Ew_Iw => "test",
    Test_Ed_Id => "test",
    Test_Eq_Id64 => "test",
    Not_Ew => "not",
    Not_Ed => "not",
    Not_Eq => "not",
    Neg_Ew => "neg",
    Neg_Ed => "neg",
    Neg_Eq => "neg",
    Mul_Ew => "mul",
    Mul_Ed => "mul",
    Mul_Eq => "mul",
    Imul_Ew => "imul",
    Imul_Ed => "imul",
    Imul_Eq => "imul",
    Div_Ew => "div",
    Div_Ed => "div",
    Div_Eq => "div",
    Idiv_Ew => "idiv",
    Idiv_Ed => "idiv",
    Idiv_Eq => "idiv",
    Inc_Ew => "inc",
    Inc_Ed => "inc",
    Inc_Eq => "inc",
    Dec_Ew => "dec",
    Dec_Ed => "dec",
    Dec_Eq => "dec",
    Call_Ew => "call",
    Call_Ed => "call",
    Call_Eq => "call",
    Call_m1616 => "call",
    Call_m1632 => "call",
    Call_m1664 => "call",
    Jmp_Ew => "jmp",
    Jmp_Ed => "jmp",
    Jmp_Eq => "jmp",
    Jmp_m1616 => "jmp",
    Jmp_m1632 => "jmp",
    Jmp_m1664 => "jmp",
    Push_Ew => "push",
    Push_Ed => "push",
    Push_Eq => "push",
    Mov_Ew_Iw => "mov",
    Mov_Ed_Id => "mov",
    Mov_Eq_Id64 => "mov",
    Xchg_r16_AX => "xchg",
    Xchg_r32_EAX => "xchg",
    Xchg_r64_RAX => "xchg",
    Inc_r16 => "inc",
    Inc_r32 => "inc",
    Dec_r16 => "dec",
    Dec_r32 => "dec",
    Push_r16 => "push",
    Push_r32 => "push",
    Push_r64 => "push",
    Pop_r16 => "pop",
    Pop_r32 => "pop",
    Pop_r64 => "pop",
    Mov_r16_imm16 => "mov",
    Mov_r32_imm32 => "mov",
    Mov_r64_imm64 => "mov",
    Add_Ew_Gw => "add",
    Add_Ed_Gd => "add",
    Add_Eq_Gq => "add",
    Add_Gw_Ew => "add",
    Add_Gd_Ed => "add",
    Add_Gq_Eq => "add",
    Add_AX_Iw => "add",
    Add_EAX_Id => "add",
    Add_RAX_Id64 => "add",
    Pushw_ES => "push",
    Pushd_ES => "push",
    Popw_ES => "pop",
    Popd_ES => "pop",
    Or_Ew_Gw => "or",
    Or_Ed_Gd => "or",
    Or_Eq_Gq => "or",
    Or_Gw_Ew => "or",
    Or_Gd_Ed => "or",
    Or_Gq_Eq => "or",
    Or_AX_Iw => "or",
    Or_EAX_Id => "or",
    Or_RAX_Id64 => "or",
    Pushw_CS => "push",
    Pushd_CS => "push",
    Adc_Ew_Gw => "adc",
    Adc_Ed_Gd => "adc",
    Adc_Eq_Gq => "adc",
    Adc_Gw_Ew => "adc",
    Adc_Gd_Ed => "adc",
    Adc_Gq_Eq => "adc",
    Adc_AX_Iw => "adc",
    Adc_EAX_Id => "adc",
    Adc_RAX_Id64 => "adc",
    Pushw_SS => "push",
    Pushd_SS => "push",
    Popw_SS => "pop",
    Popd_SS => "pop",
    Sbb_Ew_Gw => "sbb",
    Sbb_Ed_Gd => "sbb",
    Sbb_Eq_Gq => "sbb",
    Sbb_Gw_Ew => "sbb",
    Sbb_Gd_Ed => "sbb",
    Sbb_Gq_Eq => "sbb",
    Sbb_AX_Iw => "sbb",
    Sbb_EAX_Id => "sbb",
    Sbb_RAX_Id64 => "sbb",
    Pushw_DS => "push",
    Pushd_DS => "push",
    Popw_DS => "pop",
    Popd_DS => "pop",
    And_Ew_Gw => "and",
    And_Ed_Gd => "and",
    And_Eq_Gq => "and",
    And_Gw_Ew => "and",
    And_Gd_Ed => "and",
    And_Gq_Eq => "and",
    And_AX_Iw => "and",
    And_EAX_Id => "and",
    And_RAX_Id64 => "and",
    Sub_Ew_Gw => "sub",
    Sub_Ed_Gd => "sub",
    Sub_Eq_Gq => "sub",
    Sub_Gw_Ew => "sub",
    Sub_Gd_Ed => "sub",
    Sub_Gq_Eq => "sub",
    Sub_AX_Iw => "sub",
    Sub_EAX_Id => "sub",
    Sub_RAX_Id64 => "sub",
    Xor_Ew_Gw => "xor",
    Xor_Ed_Gd => "xor",
    Xor_Eq_Gq => "xor",
    Xor_Gw_Ew => "xor",
    Xor_Gd_Ed => "xor",
    Xor_Gq_Eq => "xor",
    Xor_AX_Iw => "xor",
    Xor_EAX_Id => "xor",
    Xor_RAX_Id64 => "xor",
    Cmp_Ew_Gw => "cmp",
    Cmp_Ed_Gd => "cmp",
    Cmp_Eq_Gq => "cmp",
    Cmp_Gw_Ew => "cmp",
    Cmp_Gd_Ed => "cmp",
    Cmp_Gq_Eq => "cmp",
    Cmp_AX_Iw => "cmp",
    Cmp_EAX_Id => "cmp",
    Cmp_RAX_Id64 => "cmp",
    Pushaw => "pusha",
    Pushad => "pushad",
    Popaw => "popa",
    Popad => "popad",
    Bound_Gw_Mw2 => "bound",
    Bound_Gd_Md2 => "bound",
    Movsxd_Gw_Ew => "movsxd",
    Movsxd_Gd_Ed => "movsxd",
    Movsxd_Gq_Ed => "movsxd",
    Push_Iw => "push",
    Push_Id => "push",
    Push_Id64 => "push",
    Imul_Gw_Ew_Iw => "imul",
    Imul_Gd_Ed_Id => "imul",
    Imul_Gq_Eq_Id64 => "imul",
    Push_Ib16 => "push",
    Push_Ib32 => "push",
    Push_Ib64 => "push",
    Imul_Gw_Ew_Ib16 => "imul",
    Imul_Gd_Ed_Ib32 => "imul",
    Imul_Gq_Eq_Ib64 => "imul",
    Insw_Yw_DX => "insw",
    Insd_Yd_DX => "insd",
    Outsw_DX_Xw => "outsw",
    Outsd_DX_Xd => "outsd",
    Jo_Jb16 => "jo",
    Jo_Jb32 => "jo",
    Jo_Jb64 => "jo",
    Jno_Jb16 => "jno",
    Jno_Jb32 => "jno",
    Jno_Jb64 => "jno",
    Jb_Jb16 => "jb",
    Jb_Jb32 => "jb",
    Jb_Jb64 => "jb",
    Jae_Jb16 => "jae",
    Jae_Jb32 => "jae",
    Jae_Jb64 => "jae",
    Je_Jb16 => "je",
    Je_Jb32 => "je",
    Je_Jb64 => "je",
    Jne_Jb16 => "jne",
    Jne_Jb32 => "jne",
    Jne_Jb64 => "jne",
    Jbe_Jb16 => "jbe",
    Jbe_Jb32 => "jbe",
    Jbe_Jb64 => "jbe",
    Ja_Jb16 => "ja",
    Ja_Jb32 => "ja",
    Ja_Jb64 => "ja",
    Js_Jb16 => "js",
    Js_Jb32 => "js",
    Js_Jb64 => "js",
    Jns_Jb16 => "jns",
    Jns_Jb32 => "jns",
    Jns_Jb64 => "jns",
    Jp_Jb16 => "jp",
    Jp_Jb32 => "jp",
    Jp_Jb64 => "jp",
    Jnp_Jb16 => "jnp",
    Jnp_Jb32 => "jnp",
    Jnp_Jb64 => "jnp",
    Jl_Jb16 => "jl",
    Jl_Jb32 => "jl",
    Jl_Jb64 => "jl",
    Jge_Jb16 => "jge",
    Jge_Jb32 => "jge",
    Jge_Jb64 => "jge",
    Jle_Jb16 => "jle",
    Jle_Jb32 => "jle",
    Jle_Jb64 => "jle",
    Jg_Jb16 => "jg",
    Jg_Jb32 => "jg",
    Jg_Jb64 => "jg",
    Test_Ew_Gw => "test",
    Test_Ed_Gd => "test",
    Test_Eq_Gq => "test",
    Xchg_Ew_Gw => "xchg",
    Xchg_Ed_Gd => "xchg",
    Xchg_Eq_Gq => "xchg",
    Mov_Ew_Gw => "mov",
    Mov_Ed_Gd => "mov",
    Mov_Eq_Gq => "mov",
    Mov_Gw_Ew => "mov",
    Mov_Gd_Ed => "mov",
    Mov_Gq_Eq => "mov",
    Mov_Ew_Sw => "mov",
    Mov_Ed_Sw => "mov",
    Mov_Eq_Sw => "mov",
    Lea_Gw_M => "lea",
    Lea_Gd_M => "lea",
    Lea_Gq_M => "lea",
    Mov_Sw_Ew => "mov",
    Mov_Sw_Ed => "mov",
    Mov_Sw_Eq => "mov",
    Cbw => "cbw",
    Cwde => "cwde",
    Cdqe => "cdqe",
    Cwd => "cwd",
    Cdq => "cdq",
    Cqo => "cqo",
    Call_Aww => "call",
    Call_Adw => "call",
    Pushfw => "pushf",
    Pushfd => "pushfd",
    Pushfq => "pushfq",
    Popfw => "popf",
    Popfd => "popfd",
    Popfq => "popfq",
    Mov_AX_Ow => "mov",
    Mov_EAX_Od => "mov",
    Mov_RAX_Oq => "mov",
    Mov_Ow_AX => "mov",
    Mov_Od_EAX => "mov",
    Mov_Oq_RAX => "mov",
    Movsw_Yw_Xw => "movsw",
    Movsd_Yd_Xd => "movsd",
    Movsq_Yq_Xq => "movsq",
    Cmpsw_Xw_Yw => "cmpsw",
    Cmpsd_Xd_Yd => "cmpsd",
    Cmpsq_Xq_Yq => "cmpsq",
    Test_AX_Iw => "test",
    Test_EAX_Id => "test",
    Test_RAX_Id64 => "test",
    Stosw_Yw_AX => "stosw",
    Stosd_Yd_EAX => "stosd",
    Stosq_Yq_RAX => "stosq",
    Lodsw_AX_Xw => "lodsw",
    Lodsd_EAX_Xd => "lodsd",
    Lodsq_RAX_Xq => "lodsq",
    Scasw_AX_Yw => "scasw",
    Scasd_EAX_Yd => "scasd",
    Scasq_RAX_Yq => "scasq",
    Retnw_Iw => "ret",
    Retnd_Iw => "ret",
    Retnq_Iw => "ret",
    Retnw => "ret",
    Retnd => "ret",
    Retnq => "ret",
    Les_Gw_Mp => "les",
    Les_Gd_Mp => "les",
    Lds_Gw_Mp => "lds",
    Lds_Gd_Mp => "lds",
    Enterw_Iw_Ib => "enter",
    Enterd_Iw_Ib => "enter",
    Enterq_Iw_Ib => "enter",
    Leavew => "leave",
    Leaved => "leave",
    Leaveq => "leave",
    Retfw_Iw => "retf",
    Retfd_Iw => "retf",
    Retfq_Iw => "retf",
    Retfw => "retf",
    Retfd => "retf",
    Retfq => "retf",
    Iretw => "iret",
    Iretd => "iretd",
    Iretq => "iretq",
    In_AX_Ib => "in",
    In_EAX_Ib => "in",
    Out_Ib_AX => "out",
    Out_Ib_EAX => "out",
    Call_Jw16 => "call",
    Call_Jd32 => "call",
    Call_Jd64 => "call",
    Jmp_Jw16 => "jmp",
    Jmp_Jd32 => "jmp",
    Jmp_Jd64 => "jmp",
    Jmp_Aww => "jmp",
    Jmp_Adw => "jmp",
    Jmp_Jb16 => "jmp",
    Jmp_Jb32 => "jmp",
    Jmp_Jb64 => "jmp",
    In_AX_DX => "in",
    In_EAX_DX => "in",
    Out_DX_AX => "out",
    Out_DX_EAX => "out",
    Loopne_Jb16_CX => "loopne",
    Loopne_Jb32_CX => "loopne",
    Loopne_Jb16_ECX => "loopne",
    Loopne_Jb32_ECX => "loopne",
    Loopne_Jb64_ECX => "loopne",
    Loopne_Jb64_RCX => "loopne",
    Loope_Jb16_CX => "loope",
    Loope_Jb32_CX => "loope",
    Loope_Jb16_ECX => "loope",
    Loope_Jb32_ECX => "loope",
    Loope_Jb64_ECX => "loope",
    Loope_Jb64_RCX => "loope",
    Loop_Jb16_CX => "loop",
    Loop_Jb32_CX => "loop",
    Loop_Jb16_ECX => "loop",
    Loop_Jb32_ECX => "loop",
    Loop_Jb64_ECX => "loop",
    Loop_Jb64_RCX => "loop",
    Jcxz_Jb16 => "jcxz",
    Jcxz_Jb32 => "jcxz",
    Jecxz_Jb16 => "jecxz",
    Jecxz_Jb32 => "jecxz",
    Jecxz_Jb64 => "jecxz",
    Jrcxz_Jb64 => "jrcxz",
    Fadd_Mf32 => "fadd",
    Fmul_Mf32 => "fmul",
    Fcom_Mf32 => "fcom",
    Fcomp_Mf32 => "fcomp",
    Fsub_Mf32 => "fsub",
    Fsubr_Mf32 => "fsubr",
    Fdiv_Mf32 => "fdiv",
    Fdivr_Mf32 => "fdivr",
    Fadd_ST_STi => "fadd",
    Fmul_ST_STi => "fmul",
    Fcom_ST_STi => "fcom",
    Fcomp_ST_STi => "fcomp",
    Fsub_ST_STi => "fsub",
    Fsubr_ST_STi => "fsubr",
    Fdiv_ST_STi => "fdiv",
    Fdivr_ST_STi => "fdivr",
    Fld_Mf32 => "fld",
    Fst_Mf32 => "fst",
    Fstp_Mf32 => "fstp",
    Fldcw_Mw => "fldcw",
    Fnstcw_Mw => "fnstcw",
    Fnop => "fnop",
    Fchs => "fchs",
    Fabs => "fabs",
    Ftst => "ftst",
    Fxam => "fxam",
    Fld1 => "fld1",
    Fldl2t => "fldl2t",
    Fldl2e => "fldl2e",
    Fldpi => "fldpi",
    Fldlg2 => "fldlg2",
    Fldln2 => "fldln2",
    Fldz => "fldz",
    F2xm1 => "f2xm1",
    Fyl2x => "fyl2x",
    Fptan => "fptan",
    Fpatan => "fpatan",
    Fxtract => "fxtract",
    Fprem1 => "fprem1",
    Fdecstp => "fdecstp",
    Fincstp => "fincstp",
    Fprem => "fprem",
    Fyl2xp1 => "fyl2xp1",
    Fsqrt => "fsqrt",
    Fsincos => "fsincos",
    Frndint => "frndint",
    Fscale => "fscale",
    Fsin => "fsin",
    Fcos => "fcos",
    Fld_ST_STi => "fld",
    Fxch_ST_STi => "fxch",
    Fiadd_Mfi32 => "fiadd",
    Fimul_Mfi32 => "fimul",
    Ficom_Mfi32 => "ficom",
    Ficomp_Mfi32 => "ficomp",
    Fisub_Mfi32 => "fisub",
    Fisubr_Mfi32 => "fisubr",
    Fidiv_Mfi32 => "fidiv",
    Fidivr_Mfi32 => "fidivr",
    Fucompp => "fucompp",
    Fcmovb_ST_STi => "fcmovb",
    Fcmove_ST_STi => "fcmove",
    Fcmovbe_ST_STi => "fcmovbe",
    Fcmovu_ST_STi => "fcmovu",
    Fild_Mfi32 => "fild",
    Fisttp_Mfi32 => "fisttp",
    Fist_Mfi32 => "fist",
    Fistp_Mfi32 => "fistp",
    Fld_Mf80 => "fld",
    Fstp_Mf80 => "fstp",
    Fnclex => "fnclex",
    Fninit => "fninit",
    Fcmovnb_ST_STi => "fcmovnb",
    Fcmovne_ST_STi => "fcmovne",
    Fcmovnbe_ST_STi => "fcmovnbe",
    Fcmovnu_ST_STi => "fcmovnu",
    Fucomi_ST_STi => "fucomi",
    Fcomi_ST_STi => "fcomi",
    Fadd_Mf64 => "fadd",
    Fmul_Mf64 => "fmul",
    Fcom_Mf64 => "fcom",
    Fcomp_Mf64 => "fcomp",
    Fsub_Mf64 => "fsub",
    Fsubr_Mf64 => "fsubr",
    Fdiv_Mf64 => "fdiv",
    Fdivr_Mf64 => "fdivr",
    Fadd_STi_ST => "fadd",
    Fmul_STi_ST => "fmul",
    Fsubr_STi_ST => "fsubr",
    Fsub_STi_ST => "fsub",
    Fdivr_STi_ST => "fdivr",
    Fdiv_STi_ST => "fdiv",
    Fld_Mf64 => "fld",
    Fisttp_Mfi64 => "fisttp",
    Fst_Mf64 => "fst",
    Fstp_Mf64 => "fstp",
    Fnstsw_Mw => "fnstsw",
    Ffree_STi => "ffree",
    Fst_STi => "fst",
    Fstp_STi => "fstp",
    Fucom_ST_STi => "fucom",
    Fucomp_ST_STi => "fucomp",
    Fiadd_Mfi16 => "fiadd",
    Fimul_Mfi16 => "fimul",
    Ficom_Mfi16 => "ficom",
    Ficomp_Mfi16 => "ficomp",
    Fisub_Mfi16 => "fisub",
    Fisubr_Mfi16 => "fisubr",
    Fidiv_Mfi16 => "fidiv",
    Fidivr_Mfi16 => "fidivr",
    Fcompp => "fcompp",
    Faddp_STi_ST => "faddp",
    Fmulp_STi_ST => "fmulp",
    Fsubrp_STi_ST => "fsubrp",
    Fsubp_STi_ST => "fsubp",
    Fdivrp_STi_ST => "fdivrp",
    Fdivp_STi_ST => "fdivp",
    Fild_Mfi16 => "fild",
    Fisttp_Mfi16 => "fisttp",
    Fist_Mfi16 => "fist",
    Fistp_Mfi16 => "fistp",
    Fild_Mfi64 => "fild",
    Fistp_Mfi64 => "fistp",
    Fnstsw_AX => "fnstsw",
    Fucomip_ST_STi => "fucomip",
    Fcomip_ST_STi => "fcomip",
    Fldenv_M14 => "fldenv",
    Fldenv_M28 => "fldenv",
    Fnstenv_M14 => "fnstenv",
    Fnstenv_M28 => "fnstenv",
    Lldt_Ew => "lldt",
    Ltr_Ew => "ltr",
    Verr_Ew => "verr",
    Verw_Ew => "verw",
    Lmsw_Ew => "lmsw",
    Invlpg_M => "invlpg",
    Vmcall => "vmcall",
    Vmlaunch => "vmlaunch",
    Vmresume => "vmresume",
    Vmxoff => "vmxoff",
    Mwait => "mwait",
    Clac => "clac",
    Stac => "stac",
    Xgetbv => "xgetbv",
    Xsetbv => "xsetbv",
    Xend => "xend",
    Xtest => "xtest",
    Swapgs => "swapgs",
    Rdtscp => "rdtscp",
    Prefetchnta_Mb => "prefetchnta",
    Prefetcht0_Mb => "prefetcht0",
    Prefetcht1_Mb => "prefetcht1",
    Prefetcht2_Mb => "prefetcht2",
    Prefetchw_Mb => "prefetchw",
    Fxsave_M512 => "fxsave",
    Fxrstor_M512 => "fxrstor",
    Ldmxcsr_Md => "ldmxcsr",
    Stmxcsr_Md => "stmxcsr",
    Xsave_M => "xsave",
    Xrstor_M => "xrstor",
    Xsaveopt_M => "xsaveopt",
    Clflush_Mb => "clflush",
    Lfence => "lfence",
    Mfence => "mfence",
    Sfence => "sfence",
    Psrlw_mm_imm8 => "psrlw",
    Psraw_mm_imm8 => "psraw",
    Psllw_mm_imm8 => "psllw",
    Psrlw_xmm_imm8 => "psrlw",
    Psraw_xmm_imm8 => "psraw",
    Psllw_xmm_imm8 => "psllw",
    Psrld_mm_imm8 => "psrld",
    Psrad_mm_imm8 => "psrad",
    Pslld_mm_imm8 => "pslld",
    Psrld_xmm_imm8 => "psrld",
    Psrad_xmm_imm8 => "psrad",
    Pslld_xmm_imm8 => "pslld",
    Psrlq_mm_imm8 => "psrlq",
    Psllq_mm_imm8 => "psllq",
    Psrlq_xmm_imm8 => "psrlq",
    Psrldq_xmm_imm8 => "psrldq",
    Psllq_xmm_imm8 => "psllq",
    Pslldq_xmm_imm8 => "pslldq",
    Syscall => "syscall",
    Clts => "clts",
    Invd => "invd",
    Wbinvd => "wbinvd",
    Ud2 => "ud2",
    Movups_xmm_xmmm128 => "movups",
    Movupd_xmm_xmmm128 => "movupd",
    Movss_xmm_xmmm32 => "movss",
    Movsd_xmm_xmmm64 => "movsd",
    Movups_xmmm128_xmm => "movups",
    Movupd_xmmm128_xmm => "movupd",
    Movss_xmmm32_xmm => "movss",
    Movsd_xmmm64_xmm => "movsd",
    Movlps_xmm_m64 => "movlps",
    Movhlps_xmm_xmm => "movhlps",
    Movlpd_xmm_m64 => "movlpd",
    Movsldup_xmm_xmmm128 => "movsldup",
    Movddup_xmm_xmmm64 => "movddup",
    Movlps_m64_xmm => "movlps",
    Movlpd_m64_xmm => "movlpd",
    Unpcklps_xmm_xmmm128 => "unpcklps",
    Unpcklpd_xmm_xmmm128 => "unpcklpd",
    Unpckhps_xmm_xmmm128 => "unpckhps",
    Unpckhpd_xmm_xmmm128 => "unpckhpd",
    Movhps_xmm_m64 => "movhps",
    Movlhps_xmm_xmm => "movlhps",
    Movhpd_xmm_m64 => "movhpd",
    Movshdup_xmm_xmmm128 => "movshdup",
    Movhps_m64_xmm => "movhps",
    Movhpd_m64_xmm => "movhpd",
    Movaps_xmm_xmmm128 => "movaps",
    Movapd_xmm_xmmm128 => "movapd",
    Movaps_xmmm128_xmm => "movaps",
    Movapd_xmmm128_xmm => "movapd",
    Cvtpi2ps_xmm_mmm64 => "cvtpi2ps",
    Cvtpi2pd_xmm_mmm64 => "cvtpi2pd",
    Movntps_m128_xmm => "movntps",
    Movntpd_m128_xmm => "movntpd",
    Cvttps2pi_mm_xmmm64 => "cvttps2pi",
    Cvttpd2pi_mm_xmmm128 => "cvttpd2pi",
    Cvtps2pi_mm_xmmm64 => "cvtps2pi",
    Cvtpd2pi_mm_xmmm128 => "cvtpd2pi",
    Ucomiss_xmm_xmmm32 => "ucomiss",
    Ucomisd_xmm_xmmm64 => "ucomisd",
    Comiss_xmm_xmmm32 => "comiss",
    Comisd_xmm_xmmm64 => "comisd",
    Wrmsr => "wrmsr",
    Rdtsc => "rdtsc",
    Rdmsr => "rdmsr",
    Rdpmc => "rdpmc",
    Sysenter => "sysenter",
    Rsqrtps_xmm_xmmm128 => "rsqrtps",
    Rsqrtss_xmm_xmmm32 => "rsqrtss",
    Rcpps_xmm_xmmm128 => "rcpps",
    Rcpss_xmm_xmmm32 => "rcpss",
    Andps_xmm_xmmm128 => "andps",
    Andpd_xmm_xmmm128 => "andpd",
    Andnps_xmm_xmmm128 => "andnps",
    Andnpd_xmm_xmmm128 => "andnpd",
    Orps_xmm_xmmm128 => "orps",
    Orpd_xmm_xmmm128 => "orpd",
    Xorps_xmm_xmmm128 => "xorps",
    Xorpd_xmm_xmmm128 => "xorpd",
    Cvtps2pd_xmm_xmmm64 => "cvtps2pd",
    Cvtpd2ps_xmm_xmmm128 => "cvtpd2ps",
    Cvtss2sd_xmm_xmmm32 => "cvtss2sd",
    Cvtsd2ss_xmm_xmmm64 => "cvtsd2ss",
    Cvtdq2ps_xmm_xmmm128 => "cvtdq2ps",
    Cvtps2dq_xmm_xmmm128 => "cvtps2dq",
    Cvttps2dq_xmm_xmmm128 => "cvttps2dq",
    Punpcklqdq_xmm_xmmm128 => "punpcklqdq",
    Punpckhqdq_xmm_xmmm128 => "punpckhqdq",
    Cmovo_Gw_Ew => "cmovo",
    Cmovo_Gd_Ed => "cmovo",
    Cmovo_Gq_Eq => "cmovo",
    Cmovno_Gw_Ew => "cmovno",
    Cmovno_Gd_Ed => "cmovno",
    Cmovno_Gq_Eq => "cmovno",
    Cmovb_Gw_Ew => "cmovb",
    Cmovb_Gd_Ed => "cmovb",
    Cmovb_Gq_Eq => "cmovb",
    Cmovae_Gw_Ew => "cmovae",
    Cmovae_Gd_Ed => "cmovae",
    Cmovae_Gq_Eq => "cmovae",
    Cmove_Gw_Ew => "cmove",
    Cmove_Gd_Ed => "cmove",
    Cmove_Gq_Eq => "cmove",
    Cmovne_Gw_Ew => "cmovne",
    Cmovne_Gd_Ed => "cmovne",
    Cmovne_Gq_Eq => "cmovne",
    Cmovbe_Gw_Ew => "cmovbe",
    Cmovbe_Gd_Ed => "cmovbe",
    Cmovbe_Gq_Eq => "cmovbe",
    Cmova_Gw_Ew => "cmova",
    Cmova_Gd_Ed => "cmova",
    Cmova_Gq_Eq => "cmova",
    Cmovs_Gw_Ew => "cmovs",
    Cmovs_Gd_Ed => "cmovs",
    Cmovs_Gq_Eq => "cmovs",
    Cmovns_Gw_Ew => "cmovns",
    Cmovns_Gd_Ed => "cmovns",
    Cmovns_Gq_Eq => "cmovns",
    Cmovp_Gw_Ew => "cmovp",
    Cmovp_Gd_Ed => "cmovp",
    Cmovp_Gq_Eq => "cmovp",
    Cmovnp_Gw_Ew => "cmovnp",
    Cmovnp_Gd_Ed => "cmovnp",
    Cmovnp_Gq_Eq => "cmovnp",
    Cmovl_Gw_Ew => "cmovl",
    Cmovl_Gd_Ed => "cmovl",
    Cmovl_Gq_Eq => "cmovl",
    Cmovge_Gw_Ew => "cmovge",
    Cmovge_Gd_Ed => "cmovge",
    Cmovge_Gq_Eq => "cmovge",
    Cmovle_Gw_Ew => "cmovle",
    Cmovle_Gd_Ed => "cmovle",
    Cmovle_Gq_Eq => "cmovle",
    Cmovg_Gw_Ew => "cmovg",
    Cmovg_Gd_Ed => "cmovg",
    Cmovg_Gq_Eq => "cmovg",
    Sqrtps_xmm_xmmm128 => "sqrtps",
    Sqrtpd_xmm_xmmm128 => "sqrtpd",
    Sqrtss_xmm_xmmm32 => "sqrtss",
    Sqrtsd_xmm_xmmm64 => "sqrtsd",
    Addps_xmm_xmmm128 => "addps",
    Addpd_xmm_xmmm128 => "addpd",
    Addss_xmm_xmmm32 => "addss",
    Addsd_xmm_xmmm64 => "addsd",
    Mulps_xmm_xmmm128 => "mulps",
    Mulpd_xmm_xmmm128 => "mulpd",
    Mulss_xmm_xmmm32 => "mulss",
    Mulsd_xmm_xmmm64 => "mulsd",
    Subps_xmm_xmmm128 => "subps",
    Subpd_xmm_xmmm128 => "subpd",
    Subss_xmm_xmmm32 => "subss",
    Subsd_xmm_xmmm64 => "subsd",
    Minps_xmm_xmmm128 => "minps",
    Minpd_xmm_xmmm128 => "minpd",
    Minss_xmm_xmmm32 => "minss",
    Minsd_xmm_xmmm64 => "minsd",
    Divps_xmm_xmmm128 => "divps",
    Divpd_xmm_xmmm128 => "divpd",
    Divss_xmm_xmmm32 => "divss",
    Divsd_xmm_xmmm64 => "divsd",
    Maxps_xmm_xmmm128 => "maxps",
    Maxpd_xmm_xmmm128 => "maxpd",
    Maxss_xmm_xmmm32 => "maxss",
    Maxsd_xmm_xmmm64 => "maxsd",
    Punpcklbw_mm_mmm32 => "punpcklbw",
    Punpcklbw_xmm_xmmm128 => "punpcklbw",
    Punpcklwd_mm_mmm32 => "punpcklwd",
    Punpcklwd_xmm_xmmm128 => "punpcklwd",
    Punpckldq_mm_mmm32 => "punpckldq",
    Punpckldq_xmm_xmmm128 => "punpckldq",
    Packsswb_mm_mmm64 => "packsswb",
    Packsswb_xmm_xmmm128 => "packsswb",
    Pcmpgtb_mm_mmm64 => "pcmpgtb",
    Pcmpgtb_xmm_xmmm128 => "pcmpgtb",
    Pcmpgtw_mm_mmm64 => "pcmpgtw",
    Pcmpgtw_xmm_xmmm128 => "pcmpgtw",
    Pcmpgtd_mm_mmm64 => "pcmpgtd",
    Pcmpgtd_xmm_xmmm128 => "pcmpgtd",
    Packuswb_mm_mmm64 => "packuswb",
    Packuswb_xmm_xmmm128 => "packuswb",
    Punpckhbw_mm_mmm64 => "punpckhbw",
    Punpckhbw_xmm_xmmm128 => "punpckhbw",
    Punpckhwd_mm_mmm64 => "punpckhwd",
    Punpckhwd_xmm_xmmm128 => "punpckhwd",
    Punpckhdq_mm_mmm64 => "punpckhdq",
    Punpckhdq_xmm_xmmm128 => "punpckhdq",
    Packssdw_mm_mmm64 => "packssdw",
    Packssdw_xmm_xmmm128 => "packssdw",
    Pcmpeqb_mm_mmm64 => "pcmpeqb",
    Pcmpeqb_xmm_xmmm128 => "pcmpeqb",
    Pcmpeqw_mm_mmm64 => "pcmpeqw",
    Pcmpeqw_xmm_xmmm128 => "pcmpeqw",
    Pcmpeqd_mm_mmm64 => "pcmpeqd",
    Pcmpeqd_xmm_xmmm128 => "pcmpeqd",
    Psrlw_mm_mmm64 => "psrlw",
    Psrlw_xmm_xmmm128 => "psrlw",
    Psrld_mm_mmm64 => "psrld",
    Psrld_xmm_xmmm128 => "psrld",
    Psrlq_mm_mmm64 => "psrlq",
    Psrlq_xmm_xmmm128 => "psrlq",
    Paddq_mm_mmm64 => "paddq",
    Paddq_xmm_xmmm128 => "paddq",
    Pmullw_mm_mmm64 => "pmullw",
    Pmullw_xmm_xmmm128 => "pmullw",
    Psubusb_mm_mmm64 => "psubusb",
    Psubusb_xmm_xmmm128 => "psubusb",
    Psubusw_mm_mmm64 => "psubusw",
    Psubusw_xmm_xmmm128 => "psubusw",
    Pminub_mm_mmm64 => "pminub",
    Pminub_xmm_xmmm128 => "pminub",
    Pand_mm_mmm64 => "pand",
    Pand_xmm_xmmm128 => "pand",
    Paddusb_mm_mmm64 => "paddusb",
    Paddusb_xmm_xmmm128 => "paddusb",
    Paddusw_mm_mmm64 => "paddusw",
    Paddusw_xmm_xmmm128 => "paddusw",
    Pmaxub_mm_mmm64 => "pmaxub",
    Pmaxub_xmm_xmmm128 => "pmaxub",
    Pandn_mm_mmm64 => "pandn",
    Pandn_xmm_xmmm128 => "pandn",
    Pavgb_mm_mmm64 => "pavgb",
    Pavgb_xmm_xmmm128 => "pavgb",
    Psraw_mm_mmm64 => "psraw",
    Psraw_xmm_xmmm128 => "psraw",
    Psrad_mm_mmm64 => "psrad",
    Psrad_xmm_xmmm128 => "psrad",
    Pavgw_mm_mmm64 => "pavgw",
    Pavgw_xmm_xmmm128 => "pavgw",
    Pmulhuw_mm_mmm64 => "pmulhuw",
    Pmulhuw_xmm_xmmm128 => "pmulhuw",
    Pmulhw_mm_mmm64 => "pmulhw",
    Pmulhw_xmm_xmmm128 => "pmulhw",
    Psubsb_mm_mmm64 => "psubsb",
    Psubsb_xmm_xmmm128 => "psubsb",
    Psubsw_mm_mmm64 => "psubsw",
    Psubsw_xmm_xmmm128 => "psubsw",
    Pminsw_mm_mmm64 => "pminsw",
    Pminsw_xmm_xmmm128 => "pminsw",
    Por_mm_mmm64 => "por",
    Por_xmm_xmmm128 => "por",
    Paddsb_mm_mmm64 => "paddsb",
    Paddsb_xmm_xmmm128 => "paddsb",
    Paddsw_mm_mmm64 => "paddsw",
    Paddsw_xmm_xmmm128 => "paddsw",
    Pmaxsw_mm_mmm64 => "pmaxsw",
    Pmaxsw_xmm_xmmm128 => "pmaxsw",
    Pxor_mm_mmm64 => "pxor",
    Pxor_xmm_xmmm128 => "pxor",
    Psllw_mm_mmm64 => "psllw",
    Psllw_xmm_xmmm128 => "psllw",
    Pslld_mm_mmm64 => "pslld",
    Pslld_xmm_xmmm128 => "pslld",
    Psllq_mm_mmm64 => "psllq",
    Psllq_xmm_xmmm128 => "psllq",
    Pmuludq_mm_mmm64 => "pmuludq",
    Pmuludq_xmm_xmmm128 => "pmuludq",
    Pmaddwd_mm_mmm64 => "pmaddwd",
    Pmaddwd_xmm_xmmm128 => "pmaddwd",
    Psadbw_mm_mmm64 => "psadbw",
    Psadbw_xmm_xmmm128 => "psadbw",
    Psubb_mm_mmm64 => "psubb",
    Psubb_xmm_xmmm128 => "psubb",
    Psubw_mm_mmm64 => "psubw",
    Psubw_xmm_xmmm128 => "psubw",
    Psubd_mm_mmm64 => "psubd",
    Psubd_xmm_xmmm128 => "psubd",
    Psubq_mm_mmm64 => "psubq",
    Psubq_xmm_xmmm128 => "psubq",
    Paddb_mm_mmm64 => "paddb",
    Paddb_xmm_xmmm128 => "paddb",
    Paddw_mm_mmm64 => "paddw",
    Paddw_xmm_xmmm128 => "paddw",
    Paddd_mm_mmm64 => "paddd",
    Paddd_xmm_xmmm128 => "paddd",
    Pshufb_mm_mmm64 => "pshufb",
    Pshufb_xmm_xmmm128 => "pshufb",
    Pabsb_mm_mmm64 => "pabsb",
    Pabsb_xmm_xmmm128 => "pabsb",
    Pabsw_mm_mmm64 => "pabsw",
    Pabsw_xmm_xmmm128 => "pabsw",
    Pabsd_mm_mmm64 => "pabsd",
    Pabsd_xmm_xmmm128 => "pabsd",
    Movq_mm_mmm64 => "movq",
    Movdqa_xmm_xmmm128 => "movdqa",
    Movdqu_xmm_xmmm128 => "movdqu",
    Pshufw_mm_mmm64_imm8 => "pshufw",
    Pshufd_xmm_xmmm128_imm8 => "pshufd",
    Pshufhw_xmm_xmmm128_imm8 => "pshufhw",
    Pshuflw_xmm_xmmm128_imm8 => "pshuflw",
    Emms => "emms",
    Haddpd_xmm_xmmm128 => "haddpd",
    Haddps_xmm_xmmm128 => "haddps",
    Hsubpd_xmm_xmmm128 => "hsubpd",
    Hsubps_xmm_xmmm128 => "hsubps",
    Movq_xmm_xmmm64 => "movq",
    Movq_mmm64_mm => "movq",
    Movdqa_xmmm128_xmm => "movdqa",
    Movdqu_xmmm128_xmm => "movdqu",
    Jo_Jw16 => "jo",
    Jo_Jd32 => "jo",
    Jo_Jd64 => "jo",
    Jno_Jw16 => "jno",
    Jno_Jd32 => "jno",
    Jno_Jd64 => "jno",
    Jb_Jw16 => "jb",
    Jb_Jd32 => "jb",
    Jb_Jd64 => "jb",
    Jae_Jw16 => "jae",
    Jae_Jd32 => "jae",
    Jae_Jd64 => "jae",
    Je_Jw16 => "je",
    Je_Jd32 => "je",
    Je_Jd64 => "je",
    Jne_Jw16 => "jne",
    Jne_Jd32 => "jne",
    Jne_Jd64 => "jne",
    Jbe_Jw16 => "jbe",
    Jbe_Jd32 => "jbe",
    Jbe_Jd64 => "jbe",
    Ja_Jw16 => "ja",
    Ja_Jd32 => "ja",
    Ja_Jd64 => "ja",
    Js_Jw16 => "js",
    Js_Jd32 => "js",
    Js_Jd64 => "js",
    Jns_Jw16 => "jns",
    Jns_Jd32 => "jns",
    Jns_Jd64 => "jns",
    Jp_Jw16 => "jp",
    Jp_Jd32 => "jp",
    Jp_Jd64 => "jp",
    Jnp_Jw16 => "jnp",
    Jnp_Jd32 => "jnp",
    Jnp_Jd64 => "jnp",
    Jl_Jw16 => "jl",
    Jl_Jd32 => "jl",
    Jl_Jd64 => "jl",
    Jge_Jw16 => "jge",
    Jge_Jd32 => "jge",
    Jge_Jd64 => "jge",
    Jle_Jw16 => "jle",
    Jle_Jd32 => "jle",
    Jle_Jd64 => "jle",
    Jg_Jw16 => "jg",
    Jg_Jd32 => "jg",
    Jg_Jd64 => "jg",
    Seto_Eb => "seto",
    Setno_Eb => "setno",
    Setb_Eb => "setb",
    Setae_Eb => "setae",
    Sete_Eb => "sete",
    Setne_Eb => "setne",
    Setbe_Eb => "setbe",
    Seta_Eb => "seta",
    Sets_Eb => "sets",
    Setns_Eb => "setns",
    Setp_Eb => "setp",
    Setnp_Eb => "setnp",
    Setl_Eb => "setl",
    Setge_Eb => "setge",
    Setle_Eb => "setle",
    Setg_Eb => "setg",
    Cpuid => "cpuid",
    Rsm => "rsm",
    Cmpxchg_Eb_Gb => "cmpxchg",
    Xadd_Eb_Gb => "xadd",
    Cmpps_xmm_xmmm128_imm8 => "cmpps",
    Cmppd_xmm_xmmm128_imm8 => "cmppd",
    Cmpss_xmm_xmmm32_imm8 => "cmpss",
    Cmpsd_xmm_xmmm64_imm8 => "cmpsd",
    Pinsrw_mm_r32m16_imm8 => "pinsrw",
    Pinsrw_xmm_r32m16_imm8 => "pinsrw",
    Pextrw_r32_mm_imm8 => "pextrw",
    Pextrw_r32_xmm_imm8 => "pextrw",
    Shufps_xmm_xmmm128_imm8 => "shufps",
    Shufpd_xmm_xmmm128_imm8 => "shufpd",
    Addsubpd_xmm_xmmm128 => "addsubpd",
    Addsubps_xmm_xmmm128 => "addsubps",
    Movq_xmmm64_xmm => "movq",
    Movq2dq_xmm_mm => "movq2dq",
    Movdq2q_mm_xmm => "movdq2q",
    Pmovmskb_r32_mm => "pmovmskb",
    Pmovmskb_r32_xmm => "pmovmskb",
    Cvttpd2dq_xmm_xmmm128 => "cvttpd2dq",
    Cvtdq2pd_xmm_xmmm64 => "cvtdq2pd",
    Cvtpd2dq_xmm_xmmm128 => "cvtpd2dq",
    Movntq_m64_mm => "movntq",
    Movntdq_m128_xmm => "movntdq",
    Lddqu_xmm_m128 => "lddqu",
    Maskmovq_rDI_mm_mm => "maskmovq",
    Maskmovdqu_rDI_xmm_xmm => "maskmovdqu",
    Ptest_xmm_xmmm128 => "ptest",
    Roundps_xmm_xmmm128_imm8 => "roundps",
    Roundpd_xmm_xmmm128_imm8 => "roundpd",
    Roundss_xmm_xmmm32_imm8 => "roundss",
    Roundsd_xmm_xmmm64_imm8 => "roundsd",
    Palignr_mm_mmm64_imm8 => "palignr",
    Palignr_xmm_xmmm128_imm8 => "palignr",
    Insertps_xmm_xmmm32_imm8 => "insertps",
    Dpps_xmm_xmmm128_imm8 => "dpps",
    Dppd_xmm_xmmm128_imm8 => "dppd",
    Mpsadbw_xmm_xmmm128_imm8 => "mpsadbw",
    Pclmulqdq_xmm_xmmm128_imm8 => "pclmulqdq",
    Sldtw_Ew => "sldt",
    Sldtd_Ew => "sldt",
    Sldtq_Ew => "sldt",
    Strw_Ew => "str",
    Strd_Ew => "str",
    Strq_Ew => "str",
    Sgdtw_Ms => "sgdt",
    Sgdtd_Ms => "sgdt",
    Sgdtq_Ms => "sgdt",
    Sidtw_Ms => "sidt",
    Sidtd_Ms => "sidt",
    Sidtq_Ms => "sidt",
    Lgdtw_Ms => "lgdt",
    Lgdtd_Ms => "lgdt",
    Lgdtq_Ms => "lgdt",
    Lidtw_Ms => "lidt",
    Lidtd_Ms => "lidt",
    Lidtq_Ms => "lidt",
    Smsww_Ew => "smsw",
    Smswd_Ew => "smsw",
    Smswq_Ew => "smsw",
    Monitorw => "monitor",
    Monitord => "monitor",
    Monitorq => "monitor",
    Bt_Ew_Ib => "bt",
    Bt_Ed_Ib => "bt",
    Bt_Eq_Ib => "bt",
    Bts_Ew_Ib => "bts",
    Bts_Ed_Ib => "bts",
    Bts_Eq_Ib => "bts",
    Btr_Ew_Ib => "btr",
    Btr_Ed_Ib => "btr",
    Btr_Eq_Ib => "btr",
    Btc_Ew_Ib => "btc",
    Btc_Ed_Ib => "btc",
    Btc_Eq_Ib => "btc",
    Cmpxchg8b_Mq => "cmpxchg8b",
    Cmpxchg16b_Mdq => "cmpxchg16b",
    Lar_Gw_Ew => "lar",
    Lar_Gd_Ed => "lar",
    Lar_Gq_Eq => "lar",
    Lsl_Gw_Ew => "lsl",
    Lsl_Gd_Ed => "lsl",
    Lsl_Gq_Eq => "lsl",
    Sysretd => "sysret",
    Sysretq => "sysretq",
    Nopw_Ev => "nop",
    Nopd_Ev => "nop",
    Nopq_Ev => "nop",
    Mov_r32_cr => "mov",
    Mov_r64_cr => "mov",
    Mov_r32_dr => "mov",
    Mov_r64_dr => "mov",
    Mov_cr_r32 => "mov",
    Mov_cr_r64 => "mov",
    Mov_dr_r32 => "mov",
    Mov_dr_r64 => "mov",
    Cvtsi2ss_xmm_rm32 => "cvtsi2ss",
    Cvtsi2ss_xmm_rm64 => "cvtsi2ss",
    Cvtsi2sd_xmm_rm32 => "cvtsi2sd",
    Cvtsi2sd_xmm_rm64 => "cvtsi2sd",
    Cvttss2si_r32_xmmm32 => "cvttss2si",
    Cvttss2si_r64_xmmm32 => "cvttss2si",
    Cvttsd2si_r32_xmmm64 => "cvttsd2si",
    Cvttsd2si_r64_xmmm64 => "cvttsd2si",
    Cvtss2si_r32_xmmm32 => "cvtss2si",
    Cvtss2si_r64_xmmm32 => "cvtss2si",
    Cvtsd2si_r32_xmmm64 => "cvtsd2si",
    Cvtsd2si_r64_xmmm64 => "cvtsd2si",
    Sysexitd => "sysexit",
    Sysexitq => "sysexitq",
    Movmskps_r32_xmm => "movmskps",
    Movmskps_r64_xmm => "movmskps",
    Movmskpd_r32_xmm => "movmskpd",
    Movmskpd_r64_xmm => "movmskpd",
    Movd_mm_rm32 => "movd",
    Movq_mm_rm64 => "movq",
    Movd_xmm_rm32 => "movd",
    Movq_xmm_rm64 => "movq",
    Movd_rm32_mm => "movd",
    Movq_rm64_mm => "movq",
    Movd_rm32_xmm => "movd",
    Movq_rm64_xmm => "movq",
    Pushw_FS => "push",
    Pushd_FS => "push",
    Pushq_FS => "push",
    Popw_FS => "pop",
    Popd_FS => "pop",
    Popq_FS => "pop",
    Bt_Ew_Gw => "bt",
    Bt_Ed_Gd => "bt",
    Bt_Eq_Gq => "bt",
    Shld_Ew_Gw_Ib => "shld",
    Shld_Ed_Gd_Ib => "shld",
    Shld_Eq_Gq_Ib => "shld",
    Shld_Ew_Gw_CL => "shld",
    Shld_Ed_Gd_CL => "shld",
    Shld_Eq_Gq_CL => "shld",
    Pushw_GS => "push",
    Pushd_GS => "push",
    Pushq_GS => "push",
    Popw_GS => "pop",
    Popd_GS => "pop",
    Popq_GS => "pop",
    Bts_Ew_Gw => "bts",
    Bts_Ed_Gd => "bts",
    Bts_Eq_Gq => "bts",
    Shrd_Ew_Gw_Ib => "shrd",
    Shrd_Ed_Gd_Ib => "shrd",
    Shrd_Eq_Gq_Ib => "shrd",
    Shrd_Ew_Gw_CL => "shrd",
    Shrd_Ed_Gd_CL => "shrd",
    Shrd_Eq_Gq_CL => "shrd",
    Imul_Gw_Ew => "imul",
    Imul_Gd_Ed => "imul",
    Imul_Gq_Eq => "imul",
    Cmpxchg_Ew_Gw => "cmpxchg",
    Cmpxchg_Ed_Gd => "cmpxchg",
    Cmpxchg_Eq_Gq => "cmpxchg",
    Lss_Gw_Mp => "lss",
    Lss_Gd_Mp => "lss",
    Lss_Gq_Mp => "lss",
    Btr_Ew_Gw => "btr",
    Btr_Ed_Gd => "btr",
    Btr_Eq_Gq => "btr",
    Lfs_Gw_Mp => "lfs",
    Lfs_Gd_Mp => "lfs",
    Lfs_Gq_Mp => "lfs",
    Lgs_Gw_Mp => "lgs",
    Lgs_Gd_Mp => "lgs",
    Lgs_Gq_Mp => "lgs",
    Movzx_Gw_Eb => "movzx",
    Movzx_Gd_Eb => "movzx",
    Movzx_Gq_Eb => "movzx",
    Movzx_Gw_Ew => "movzx",
    Movzx_Gd_Ew => "movzx",
    Movzx_Gq_Ew => "movzx",
    Popcnt_Gw_Ew => "popcnt",
    Popcnt_Gd_Ed => "popcnt",
    Popcnt_Gq_Eq => "popcnt",
    Btc_Ew_Gw => "btc",
    Btc_Ed_Gd => "btc",
    Btc_Eq_Gq => "btc",
    Bsf_Gw_Ew => "bsf",
    Bsf_Gd_Ed => "bsf",
    Bsf_Gq_Eq => "bsf",
    Tzcnt_Gw_Ew => "tzcnt",
    Tzcnt_Gd_Ed => "tzcnt",
    Tzcnt_Gq_Eq => "tzcnt",
    Bsr_Gw_Ew => "bsr",
    Bsr_Gd_Ed => "bsr",
    Bsr_Gq_Eq => "bsr",
    Lzcnt_Gw_Ew => "lzcnt",
    Lzcnt_Gd_Ed => "lzcnt",
    Lzcnt_Gq_Eq => "lzcnt",
    Movsx_Gw_Eb => "movsx",
    Movsx_Gd_Eb => "movsx",
    Movsx_Gq_Eb => "movsx",
    Movsx_Gw_Ew => "movsx",
    Movsx_Gd_Ew => "movsx",
    Movsx_Gq_Ew => "movsx",
    Xadd_Ew_Gw => "xadd",
    Xadd_Ed_Gd => "xadd",
    Xadd_Eq_Gq => "xadd",
    Movnti_m32_r32 => "movnti",
    Movnti_m64_r64 => "movnti",
    Bswap_r16 => "bswap",
    Bswap_r32 => "bswap",
    Bswap_r64 => "bswap",
    Movbe_Gw_Mw => "movbe",
    Movbe_Gd_Md => "movbe",
    Movbe_Gq_Mq => "movbe",
    Crc32_Gd_Eb => "crc32",
    Crc32_Gq_Eb => "crc32",
    Movbe_Mw_Gw => "movbe",
    Movbe_Md_Gd => "movbe",
    Movbe_Mq_Gq => "movbe",
    Crc32_Gd_Ew => "crc32",
    Crc32_Gd_Ed => "crc32",
    Crc32_Gq_Eq => "crc32",
    Pextrb_r32m8_xmm_imm8 => "pextrb",
    Pextrb_r64m8_xmm_imm8 => "pextrb",
    Pextrw_r32m16_xmm_imm8 => "pextrw",
    Pextrw_r64m16_xmm_imm8 => "pextrw",
    Pextrd_rm32_xmm_imm8 => "pextrd",
    Pextrq_rm64_xmm_imm8 => "pextrq",
    Extractps_rm32_xmm_imm8 => "extractps",
    Extractps_r64m32_xmm_imm8 => "extractps",
    Pinsrb_xmm_r32m8_imm8 => "pinsrb",
    Pinsrb_xmm_r64m8_imm8 => "pinsrb",
    Pinsrd_xmm_rm32_imm8 => "pinsrd",
    Pinsrq_xmm_rm64_imm8 => "pinsrq",
    VEX_Vmovups_xmm_xmmm128 => "vmovups",
    VEX_Vmovups_ymm_ymmm256 => "vmovups",
    VEX_Vmovups_xmmm128_xmm => "vmovups",
    VEX_Vmovups_ymmm256_ymm => "vmovups",
    VEX_Vmovaps_xmm_xmmm128 => "vmovaps",
    VEX_Vmovaps_ymm_ymmm256 => "vmovaps",
    VEX_Vmovaps_xmmm128_xmm => "vmovaps",
    VEX_Vmovaps_ymmm256_ymm => "vmovaps",
    VEX_Vsqrtps_xmm_xmmm128 => "vsqrtps",
    VEX_Vsqrtps_ymm_ymmm256 => "vsqrtps",
    VEX_Vandps_xmm_xmm_xmmm128 => "vandps",
    VEX_Vandps_ymm_ymm_ymmm256 => "vandps",
    VEX_Vandnps_xmm_xmm_xmmm128 => "vandnps",
    VEX_Vandnps_ymm_ymm_ymmm256 => "vandnps",
    VEX_Vorps_xmm_xmm_xmmm128 => "vorps",
    VEX_Vorps_ymm_ymm_ymmm256 => "vorps",
    VEX_Vxorps_xmm_xmm_xmmm128 => "vxorps",
    VEX_Vxorps_ymm_ymm_ymmm256 => "vxorps",
    VEX_Vaddps_xmm_xmm_xmmm128 => "vaddps",
    VEX_Vaddps_ymm_ymm_ymmm256 => "vaddps",
    VEX_Vmulps_xmm_xmm_xmmm128 => "vmulps",
    VEX_Vmulps_ymm_ymm_ymmm256 => "vmulps",
    VEX_Vsubps_xmm_xmm_xmmm128 => "vsubps",
    VEX_Vsubps_ymm_ymm_ymmm256 => "vsubps",
    VEX_Vminps_xmm_xmm_xmmm128 => "vminps",
    VEX_Vminps_ymm_ymm_ymmm256 => "vminps",
    VEX_Vdivps_xmm_xmm_xmmm128 => "vdivps",
    VEX_Vdivps_ymm_ymm_ymmm256 => "vdivps",
    VEX_Vmaxps_xmm_xmm_xmmm128 => "vmaxps",
    VEX_Vmaxps_ymm_ymm_ymmm256 => "vmaxps",
    VEX_Vzeroupper => "vzeroupper",
    VEX_Vzeroall => "vzeroall",
    VEX_Vmovupd_xmm_xmmm128 => "vmovupd",
    VEX_Vmovupd_ymm_ymmm256 => "vmovupd",
    VEX_Vmovupd_xmmm128_xmm => "vmovupd",
    VEX_Vmovupd_ymmm256_ymm => "vmovupd",
    VEX_Vmovapd_xmm_xmmm128 => "vmovapd",
    VEX_Vmovapd_ymm_ymmm256 => "vmovapd",
    VEX_Vmovapd_xmmm128_xmm => "vmovapd",
    VEX_Vmovapd_ymmm256_ymm => "vmovapd",
    VEX_Vsqrtpd_xmm_xmmm128 => "vsqrtpd",
    VEX_Vsqrtpd_ymm_ymmm256 => "vsqrtpd",
    VEX_Vandpd_xmm_xmm_xmmm128 => "vandpd",
    VEX_Vandpd_ymm_ymm_ymmm256 => "vandpd",
    VEX_Vandnpd_xmm_xmm_xmmm128 => "vandnpd",
    VEX_Vandnpd_ymm_ymm_ymmm256 => "vandnpd",
    VEX_Vorpd_xmm_xmm_xmmm128 => "vorpd",
    VEX_Vorpd_ymm_ymm_ymmm256 => "vorpd",
    VEX_Vxorpd_xmm_xmm_xmmm128 => "vxorpd",
    VEX_Vxorpd_ymm_ymm_ymmm256 => "vxorpd",
    VEX_Vaddpd_xmm_xmm_xmmm128 => "vaddpd",
    VEX_Vaddpd_ymm_ymm_ymmm256 => "vaddpd",
    VEX_Vmulpd_xmm_xmm_xmmm128 => "vmulpd",
    VEX_Vmulpd_ymm_ymm_ymmm256 => "vmulpd",
    VEX_Vsubpd_xmm_xmm_xmmm128 => "vsubpd",
    VEX_Vsubpd_ymm_ymm_ymmm256 => "vsubpd",
    VEX_Vminpd_xmm_xmm_xmmm128 => "vminpd",
    VEX_Vminpd_ymm_ymm_ymmm256 => "vminpd",
    VEX_Vdivpd_xmm_xmm_xmmm128 => "vdivpd",
    VEX_Vdivpd_ymm_ymm_ymmm256 => "vdivpd",
    VEX_Vmaxpd_xmm_xmm_xmmm128 => "vmaxpd",
    VEX_Vmaxpd_ymm_ymm_ymmm256 => "vmaxpd",
    VEX_Vmovdqa_xmm_xmmm128 => "vmovdqa",
    VEX_Vmovdqa_ymm_ymmm256 => "vmovdqa",
    VEX_Vmovdqa_xmmm128_xmm => "vmovdqa",
    VEX_Vmovdqa_ymmm256_ymm => "vmovdqa",
    VEX_Vpaddq_xmm_xmm_xmmm128 => "vpaddq",
    VEX_Vpaddq_ymm_ymm_ymmm256 => "vpaddq",
    VEX_Vpxor_xmm_xmm_xmmm128 => "vpxor",
    VEX_Vpxor_ymm_ymm_ymmm256 => "vpxor",
    VEX_Vpaddd_xmm_xmm_xmmm128 => "vpaddd",
    VEX_Vpaddd_ymm_ymm_ymmm256 => "vpaddd",
    VEX_Vsqrtss_xmm_xmm_xmmm32 => "vsqrtss",
    VEX_Vaddss_xmm_xmm_xmmm32 => "vaddss",
    VEX_Vmulss_xmm_xmm_xmmm32 => "vmulss",
    VEX_Vsubss_xmm_xmm_xmmm32 => "vsubss",
    VEX_Vminss_xmm_xmm_xmmm32 => "vminss",
    VEX_Vdivss_xmm_xmm_xmmm32 => "vdivss",
    VEX_Vmaxss_xmm_xmm_xmmm32 => "vmaxss",
    VEX_Vmovdqu_xmm_xmmm128 => "vmovdqu",
    VEX_Vmovdqu_ymm_ymmm256 => "vmovdqu",
    VEX_Vmovdqu_xmmm128_xmm => "vmovdqu",
    VEX_Vmovdqu_ymmm256_ymm => "vmovdqu",
    VEX_Vsqrtsd_xmm_xmm_xmmm64 => "vsqrtsd",
    VEX_Vaddsd_xmm_xmm_xmmm64 => "vaddsd",
    VEX_Vmulsd_xmm_xmm_xmmm64 => "vmulsd",
    VEX_Vsubsd_xmm_xmm_xmmm64 => "vsubsd",
    VEX_Vminsd_xmm_xmm_xmmm64 => "vminsd",
    VEX_Vdivsd_xmm_xmm_xmmm64 => "vdivsd",
    VEX_Vmaxsd_xmm_xmm_xmmm64 => "vmaxsd",
    VEX_Vbroadcastss_xmm_xmmm32 => "vbroadcastss",
    VEX_Vbroadcastss_ymm_xmmm32 => "vbroadcastss",
    VEX_Vpmadd52luq_xmm_xmm_xmmm128 => "vpmadd52luq",
    VEX_Vpmadd52luq_ymm_ymm_ymmm256 => "vpmadd52luq",
    VEX_Vpmadd52huq_xmm_xmm_xmmm128 => "vpmadd52huq",
    VEX_Vpmadd52huq_ymm_ymm_ymmm256 => "vpmadd52huq",
    VEX_Vfmaddsub231ps_xmm_xmm_xmmm128 => "vfmaddsub231ps",
    VEX_Vfmaddsub231ps_ymm_ymm_ymmm256 => "vfmaddsub231ps",
    VEX_Vfmaddsub231pd_xmm_xmm_xmmm128 => "vfmaddsub231pd",
    VEX_Vfmaddsub231pd_ymm_ymm_ymmm256 => "vfmaddsub231pd",
    VEX_Vfmsubadd231ps_xmm_xmm_xmmm128 => "vfmsubadd231ps",
    VEX_Vfmsubadd231ps_ymm_ymm_ymmm256 => "vfmsubadd231ps",
    VEX_Vfmsubadd231pd_xmm_xmm_xmmm128 => "vfmsubadd231pd",
    VEX_Vfmsubadd231pd_ymm_ymm_ymmm256 => "vfmsubadd231pd",
    VEX_Vdpps_xmm_xmm_xmmm128_imm8 => "vdpps",
    VEX_Vdpps_ymm_ymm_ymmm256_imm8 => "vdpps",
    VEX_Vdppd_xmm_xmm_xmmm128_imm8 => "vdppd",
    VEX_Vmpsadbw_xmm_xmm_xmmm128_imm8 => "vmpsadbw",
    VEX_Vmpsadbw_ymm_ymm_ymmm256_imm8 => "vmpsadbw",
    VEX_Vpclmulqdq_xmm_xmm_xmmm128_imm8 => "vpclmulqdq",
    VEX_Vpclmulqdq_ymm_ymm_ymmm256_imm8 => "vpclmulqdq",
    VEX_Vperm2i128_ymm_ymm_ymmm256_imm8 => "vperm2i128",
    EVEX_Vmovups_xmm_k1z_xmmm128 => "vmovups",
    EVEX_Vmovups_ymm_k1z_ymmm256 => "vmovups",
    EVEX_Vmovups_zmm_k1z_zmmm512 => "vmovups",
    EVEX_Vmovups_xmmm128_k1z_xmm => "vmovups",
    EVEX_Vmovups_ymmm256_k1z_ymm => "vmovups",
    EVEX_Vmovups_zmmm512_k1z_zmm => "vmovups",
    EVEX_Vaddps_xmm_k1z_xmm_xmmm128b32 => "vaddps",
    EVEX_Vaddps_ymm_k1z_ymm_ymmm256b32 => "vaddps",
    EVEX_Vaddps_zmm_k1z_zmm_zmmm512b32_er => "vaddps",
    EVEX_Vmulps_xmm_k1z_xmm_xmmm128b32 => "vmulps",
    EVEX_Vmulps_ymm_k1z_ymm_ymmm256b32 => "vmulps",
    EVEX_Vmulps_zmm_k1z_zmm_zmmm512b32_er => "vmulps",
    EVEX_Vsubps_xmm_k1z_xmm_xmmm128b32 => "vsubps",
    EVEX_Vsubps_ymm_k1z_ymm_ymmm256b32 => "vsubps",
    EVEX_Vsubps_zmm_k1z_zmm_zmmm512b32_er => "vsubps",
    EVEX_Vminps_xmm_k1z_xmm_xmmm128b32 => "vminps",
    EVEX_Vminps_ymm_k1z_ymm_ymmm256b32 => "vminps",
    EVEX_Vminps_zmm_k1z_zmm_zmmm512b32_sae => "vminps",
    EVEX_Vdivps_xmm_k1z_xmm_xmmm128b32 => "vdivps",
    EVEX_Vdivps_ymm_k1z_ymm_ymmm256b32 => "vdivps",
    EVEX_Vdivps_zmm_k1z_zmm_zmmm512b32_er => "vdivps",
    EVEX_Vmaxps_xmm_k1z_xmm_xmmm128b32 => "vmaxps",
    EVEX_Vmaxps_ymm_k1z_ymm_ymmm256b32 => "vmaxps",
    EVEX_Vmaxps_zmm_k1z_zmm_zmmm512b32_sae => "vmaxps",
    EVEX_Vmovupd_xmm_k1z_xmmm128 => "vmovupd",
    EVEX_Vmovupd_ymm_k1z_ymmm256 => "vmovupd",
    EVEX_Vmovupd_zmm_k1z_zmmm512 => "vmovupd",
    EVEX_Vmovupd_xmmm128_k1z_xmm => "vmovupd",
    EVEX_Vmovupd_ymmm256_k1z_ymm => "vmovupd",
    EVEX_Vmovupd_zmmm512_k1z_zmm => "vmovupd",
    EVEX_Vaddpd_xmm_k1z_xmm_xmmm128b64 => "vaddpd",
    EVEX_Vaddpd_ymm_k1z_ymm_ymmm256b64 => "vaddpd",
    EVEX_Vaddpd_zmm_k1z_zmm_zmmm512b64_er => "vaddpd",
    EVEX_Vmulpd_xmm_k1z_xmm_xmmm128b64 => "vmulpd",
    EVEX_Vmulpd_ymm_k1z_ymm_ymmm256b64 => "vmulpd",
    EVEX_Vmulpd_zmm_k1z_zmm_zmmm512b64_er => "vmulpd",
    EVEX_Vsubpd_xmm_k1z_xmm_xmmm128b64 => "vsubpd",
    EVEX_Vsubpd_ymm_k1z_ymm_ymmm256b64 => "vsubpd",
    EVEX_Vsubpd_zmm_k1z_zmm_zmmm512b64_er => "vsubpd",
    EVEX_Vminpd_xmm_k1z_xmm_xmmm128b64 => "vminpd",
    EVEX_Vminpd_ymm_k1z_ymm_ymmm256b64 => "vminpd",
    EVEX_Vminpd_zmm_k1z_zmm_zmmm512b64_sae => "vminpd",
    EVEX_Vdivpd_xmm_k1z_xmm_xmmm128b64 => "vdivpd",
    EVEX_Vdivpd_ymm_k1z_ymm_ymmm256b64 => "vdivpd",
    EVEX_Vdivpd_zmm_k1z_zmm_zmmm512b64_er => "vdivpd",
    EVEX_Vmaxpd_xmm_k1z_xmm_xmmm128b64 => "vmaxpd",
    EVEX_Vmaxpd_ymm_k1z_ymm_ymmm256b64 => "vmaxpd",
    EVEX_Vmaxpd_zmm_k1z_zmm_zmmm512b64_sae => "vmaxpd",
    EVEX_Vmovdqa32_xmm_k1z_xmmm128 => "vmovdqa32",
    EVEX_Vmovdqa32_ymm_k1z_ymmm256 => "vmovdqa32",
    EVEX_Vmovdqa32_zmm_k1z_zmmm512 => "vmovdqa32",
    EVEX_Vmovdqa64_xmm_k1z_xmmm128 => "vmovdqa64",
    EVEX_Vmovdqa64_ymm_k1z_ymmm256 => "vmovdqa64",
    EVEX_Vmovdqa64_zmm_k1z_zmmm512 => "vmovdqa64",
    EVEX_Vpcmpeqd_kr_k1_xmm_xmmm128b32 => "vpcmpeqd",
    EVEX_Vpcmpeqd_kr_k1_ymm_ymmm256b32 => "vpcmpeqd",
    EVEX_Vpcmpeqd_kr_k1_zmm_zmmm512b32 => "vpcmpeqd",
    EVEX_Vmovdqa32_xmmm128_k1z_xmm => "vmovdqa32",
    EVEX_Vmovdqa32_ymmm256_k1z_ymm => "vmovdqa32",
    EVEX_Vmovdqa32_zmmm512_k1z_zmm => "vmovdqa32",
    EVEX_Vmovdqa64_xmmm128_k1z_xmm => "vmovdqa64",
    EVEX_Vmovdqa64_ymmm256_k1z_ymm => "vmovdqa64",
    EVEX_Vmovdqa64_zmmm512_k1z_zmm => "vmovdqa64",
    EVEX_Vpaddq_xmm_k1z_xmm_xmmm128b64 => "vpaddq",
    EVEX_Vpaddq_ymm_k1z_ymm_ymmm256b64 => "vpaddq",
    EVEX_Vpaddq_zmm_k1z_zmm_zmmm512b64 => "vpaddq",
    EVEX_Vpxord_xmm_k1z_xmm_xmmm128b32 => "vpxord",
    EVEX_Vpxord_ymm_k1z_ymm_ymmm256b32 => "vpxord",
    EVEX_Vpxord_zmm_k1z_zmm_zmmm512b32 => "vpxord",
    EVEX_Vpxorq_xmm_k1z_xmm_xmmm128b64 => "vpxorq",
    EVEX_Vpxorq_ymm_k1z_ymm_ymmm256b64 => "vpxorq",
    EVEX_Vpxorq_zmm_k1z_zmm_zmmm512b64 => "vpxorq",
    EVEX_Vpaddd_xmm_k1z_xmm_xmmm128b32 => "vpaddd",
    EVEX_Vpaddd_ymm_k1z_ymm_ymmm256b32 => "vpaddd",
    EVEX_Vpaddd_zmm_k1z_zmm_zmmm512b32 => "vpaddd",
    EVEX_Vmovdqu32_xmm_k1z_xmmm128 => "vmovdqu32",
    EVEX_Vmovdqu32_ymm_k1z_ymmm256 => "vmovdqu32",
    EVEX_Vmovdqu32_zmm_k1z_zmmm512 => "vmovdqu32",
    EVEX_Vmovdqu64_xmm_k1z_xmmm128 => "vmovdqu64",
    EVEX_Vmovdqu64_ymm_k1z_ymmm256 => "vmovdqu64",
    EVEX_Vmovdqu64_zmm_k1z_zmmm512 => "vmovdqu64",
    EVEX_Vmovdqu32_xmmm128_k1z_xmm => "vmovdqu32",
    EVEX_Vmovdqu32_ymmm256_k1z_ymm => "vmovdqu32",
    EVEX_Vmovdqu32_zmmm512_k1z_zmm => "vmovdqu32",
    EVEX_Vmovdqu64_xmmm128_k1z_xmm => "vmovdqu64",
    EVEX_Vmovdqu64_ymmm256_k1z_ymm => "vmovdqu64",
    EVEX_Vmovdqu64_zmmm512_k1z_zmm => "vmovdqu64",
    EVEX_Vbroadcastss_xmm_k1z_xmmm32 => "vbroadcastss",
    EVEX_Vbroadcastss_ymm_k1z_xmmm32 => "vbroadcastss",
    EVEX_Vbroadcastss_zmm_k1z_xmmm32 => "vbroadcastss",
    EVEX_Vpmadd52luq_xmm_k1z_xmm_xmmm128b64 => "vpmadd52luq",
    EVEX_Vpmadd52luq_ymm_k1z_ymm_ymmm256b64 => "vpmadd52luq",
    EVEX_Vpmadd52luq_zmm_k1z_zmm_zmmm512b64 => "vpmadd52luq",
    EVEX_Vpmadd52huq_xmm_k1z_xmm_xmmm128b64 => "vpmadd52huq",
    EVEX_Vpmadd52huq_ymm_k1z_ymm_ymmm256b64 => "vpmadd52huq",
    EVEX_Vpmadd52huq_zmm_k1z_zmm_zmmm512b64 => "vpmadd52huq",
    EVEX_Vfmaddsub231ps_xmm_k1z_xmm_xmmm128b32 => "vfmaddsub231ps",
    EVEX_Vfmaddsub231ps_ymm_k1z_ymm_ymmm256b32 => "vfmaddsub231ps",
    EVEX_Vfmaddsub231ps_zmm_k1z_zmm_zmmm512b32_er => "vfmaddsub231ps",
    EVEX_Vfmaddsub231pd_xmm_k1z_xmm_xmmm128b64 => "vfmaddsub231pd",
    EVEX_Vfmaddsub231pd_ymm_k1z_ymm_ymmm256b64 => "vfmaddsub231pd",
    EVEX_Vfmaddsub231pd_zmm_k1z_zmm_zmmm512b64_er => "vfmaddsub231pd",
    EVEX_Vfmsubadd231ps_xmm_k1z_xmm_xmmm128b32 => "vfmsubadd231ps",
    EVEX_Vfmsubadd231ps_ymm_k1z_ymm_ymmm256b32 => "vfmsubadd231ps",
    EVEX_Vfmsubadd231ps_zmm_k1z_zmm_zmmm512b32_er => "vfmsubadd231ps",
    EVEX_Vfmsubadd231pd_xmm_k1z_xmm_xmmm128b64 => "vfmsubadd231pd",
    EVEX_Vfmsubadd231pd_ymm_k1z_ymm_ymmm256b64 => "vfmsubadd231pd",
    EVEX_Vfmsubadd231pd_zmm_k1z_zmm_zmmm512b64_er => "vfmsubadd231pd",
    EVEX_Vdbpsadbw_xmm_k1z_xmm_xmmm128_imm8 => "vdbpsadbw",
    EVEX_Vdbpsadbw_ymm_k1z_ymm_ymmm256_imm8 => "vdbpsadbw",
    EVEX_Vdbpsadbw_zmm_k1z_zmm_zmmm512_imm8 => "vdbpsadbw",
    EVEX_Vshufi32x4_ymm_k1z_ymm_ymmm256b32_imm8 => "vshufi32x4",
    EVEX_Vshufi32x4_zmm_k1z_zmm_zmmm512b32_imm8 => "vshufi32x4",
    EVEX_Vshufi64x2_ymm_k1z_ymm_ymmm256b64_imm8 => "vshufi64x2",
    EVEX_Vshufi64x2_zmm_k1z_zmm_zmmm512b64_imm8 => "vshufi64x2",
    EVEX_Vpclmulqdq_xmm_xmm_xmmm128_imm8 => "vpclmulqdq",
    EVEX_Vpclmulqdq_ymm_ymm_ymmm256_imm8 => "vpclmulqdq",
    EVEX_Vpclmulqdq_zmm_zmm_zmmm512_imm8 => "vpclmulqdq",
    Pause => "pause",
    Nopw => "nop",
    Nopd => "nop",
    Nopq => "nop",
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mnemonics() {
        assert_eq!(Code::Mov_r64_imm64.mnemonic(), "mov");
        assert_eq!(Code::Retnq.mnemonic(), "ret");
        assert_eq!(Code::Pushq_FS.mnemonic(), "push");
        assert_eq!(Code::EVEX_Vpmadd52luq_xmm_k1z_xmm_xmmm128b64.mnemonic(), "vpmadd52luq");
        assert_eq!(Code::VEX_Vzeroupper.mnemonic(), "vzeroupper");
        assert_eq!(Code::INVALID.mnemonic(), "(bad)");
        assert_eq!(Code::default(), Code::INVALID);
    }

    #[test]
    fn lockable_forms() {
        assert!(Code::Add_Eb_Ib.is_lockable());
        assert!(Code::Cmpxchg16b_Mdq.is_lockable());
        assert!(Code::Xchg_Ed_Gd.is_lockable());
        assert!(!Code::Add_Gb_Eb.is_lockable());
        assert!(!Code::Bt_Ed_Gd.is_lockable());
        assert!(!Code::Cmp_Eb_Ib.is_lockable());
        assert!(!Code::Mov_Eb_Ib.is_lockable());
    }
}
