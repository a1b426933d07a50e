use std::fmt;

/// The kind of register a [`RegSpec`] names.
///
/// `B` holds the legacy byte registers `al..bh`, `rB` the ones only reachable through a REX
/// prefix: `spl..dil` and `r8b..r15b`.
#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum RegisterBank {
    Q,
    D,
    W,
    B,
    rB,
    S,
    CR,
    DR,
    ST,
    MM,
    X,
    Y,
    Z,
    K,
    EIP,
    RIP,
}

/// An x86 register, including its number and bank.
///
/// ```
/// use x86::{RegSpec, RegisterBank};
///
/// assert_eq!(RegSpec::ecx().num(), 1);
/// assert_eq!(RegSpec::ecx().bank(), RegisterBank::D);
/// assert_eq!(RegSpec::xmm(19).name(), "xmm19");
/// ```
#[derive(Copy, Clone, Debug, PartialOrd, Ord, Eq, PartialEq, Hash)]
pub struct RegSpec {
    num: u8,
    bank: RegisterBank,
}

macro_rules! register {
    ($bank:ident, $name:ident => $num:expr, $($tail:tt)+) => {
        #[inline]
        pub const fn $name() -> RegSpec {
            RegSpec { bank: RegisterBank::$bank, num: $num }
        }

        register!($bank, $($tail)*);
    };
    ($bank:ident, $name:ident => $num:expr) => {
        #[inline]
        pub const fn $name() -> RegSpec {
            RegSpec { bank: RegisterBank::$bank, num: $num }
        }
    };
}

const Q_NAMES: [&str; 16] = [
    "rax", "rcx", "rdx", "rbx", "rsp", "rbp", "rsi", "rdi", "r8", "r9", "r10", "r11", "r12",
    "r13", "r14", "r15",
];

const D_NAMES: [&str; 16] = [
    "eax", "ecx", "edx", "ebx", "esp", "ebp", "esi", "edi", "r8d", "r9d", "r10d", "r11d",
    "r12d", "r13d", "r14d", "r15d",
];

const W_NAMES: [&str; 16] = [
    "ax", "cx", "dx", "bx", "sp", "bp", "si", "di", "r8w", "r9w", "r10w", "r11w", "r12w",
    "r13w", "r14w", "r15w",
];

const B_NAMES: [&str; 8] = ["al", "cl", "dl", "bl", "ah", "ch", "dh", "bh"];

const REX_B_NAMES: [&str; 16] = [
    "al", "cl", "dl", "bl", "spl", "bpl", "sil", "dil", "r8b", "r9b", "r10b", "r11b", "r12b",
    "r13b", "r14b", "r15b",
];

const S_NAMES: [&str; 8] = ["es", "cs", "ss", "ds", "fs", "gs", "?", "?"];

const CR_NAMES: [&str; 16] = [
    "cr0", "cr1", "cr2", "cr3", "cr4", "cr5", "cr6", "cr7", "cr8", "cr9", "cr10", "cr11", "cr12",
    "cr13", "cr14", "cr15",
];

const DR_NAMES: [&str; 16] = [
    "dr0", "dr1", "dr2", "dr3", "dr4", "dr5", "dr6", "dr7", "dr8", "dr9", "dr10", "dr11", "dr12",
    "dr13", "dr14", "dr15",
];

const ST_NAMES: [&str; 8] = ["st(0)", "st(1)", "st(2)", "st(3)", "st(4)", "st(5)", "st(6)", "st(7)"];

const MM_NAMES: [&str; 8] = ["mm0", "mm1", "mm2", "mm3", "mm4", "mm5", "mm6", "mm7"];

const X_NAMES: [&str; 32] = [
    "xmm0", "xmm1", "xmm2", "xmm3", "xmm4", "xmm5", "xmm6", "xmm7", "xmm8", "xmm9", "xmm10",
    "xmm11", "xmm12", "xmm13", "xmm14", "xmm15", "xmm16", "xmm17", "xmm18", "xmm19", "xmm20",
    "xmm21", "xmm22", "xmm23", "xmm24", "xmm25", "xmm26", "xmm27", "xmm28", "xmm29", "xmm30",
    "xmm31",
];

const Y_NAMES: [&str; 32] = [
    "ymm0", "ymm1", "ymm2", "ymm3", "ymm4", "ymm5", "ymm6", "ymm7", "ymm8", "ymm9", "ymm10",
    "ymm11", "ymm12", "ymm13", "ymm14", "ymm15", "ymm16", "ymm17", "ymm18", "ymm19", "ymm20",
    "ymm21", "ymm22", "ymm23", "ymm24", "ymm25", "ymm26", "ymm27", "ymm28", "ymm29", "ymm30",
    "ymm31",
];

const Z_NAMES: [&str; 32] = [
    "zmm0", "zmm1", "zmm2", "zmm3", "zmm4", "zmm5", "zmm6", "zmm7", "zmm8", "zmm9", "zmm10",
    "zmm11", "zmm12", "zmm13", "zmm14", "zmm15", "zmm16", "zmm17", "zmm18", "zmm19", "zmm20",
    "zmm21", "zmm22", "zmm23", "zmm24", "zmm25", "zmm26", "zmm27", "zmm28", "zmm29", "zmm30",
    "zmm31",
];

const K_NAMES: [&str; 8] = ["k0", "k1", "k2", "k3", "k4", "k5", "k6", "k7"];

impl RegSpec {
    /// Register number within its bank.
    #[inline]
    pub const fn num(&self) -> u8 {
        self.num
    }

    #[inline]
    pub const fn bank(&self) -> RegisterBank {
        self.bank
    }

    /// Size of the register in bytes.
    pub const fn width(&self) -> u8 {
        match self.bank {
            RegisterBank::B | RegisterBank::rB => 1,
            RegisterBank::W | RegisterBank::S => 2,
            RegisterBank::D | RegisterBank::EIP => 4,
            RegisterBank::Q | RegisterBank::RIP => 8,
            RegisterBank::CR | RegisterBank::DR => 8,
            RegisterBank::ST => 10,
            RegisterBank::MM | RegisterBank::K => 8,
            RegisterBank::X => 16,
            RegisterBank::Y => 32,
            RegisterBank::Z => 64,
        }
    }

    pub fn name(&self) -> &'static str {
        let num = self.num as usize;
        match self.bank {
            RegisterBank::Q => Q_NAMES[num],
            RegisterBank::D => D_NAMES[num],
            RegisterBank::W => W_NAMES[num],
            RegisterBank::B => B_NAMES[num],
            RegisterBank::rB => REX_B_NAMES[num],
            RegisterBank::S => S_NAMES[num],
            RegisterBank::CR => CR_NAMES[num],
            RegisterBank::DR => DR_NAMES[num],
            RegisterBank::ST => ST_NAMES[num],
            RegisterBank::MM => MM_NAMES[num],
            RegisterBank::X => X_NAMES[num],
            RegisterBank::Y => Y_NAMES[num],
            RegisterBank::Z => Z_NAMES[num],
            RegisterBank::K => K_NAMES[num],
            RegisterBank::EIP => "eip",
            RegisterBank::RIP => "rip",
        }
    }

    /// Whether this is one of `esp`, `ebp` and friends, which address through `ss` by default.
    pub(crate) const fn is_stack_pointer_or_frame(&self) -> bool {
        matches!(
            self.bank,
            RegisterBank::Q | RegisterBank::D | RegisterBank::W
        ) && (self.num == 4 || self.num == 5)
    }

    /// A general purpose register `width` bytes wide.
    ///
    /// `rex` selects between `ah..bh` and `spl..dil` for byte registers 4 through 7.
    pub(crate) const fn gpr(num: u8, width: u8, rex: bool) -> RegSpec {
        let bank = match width {
            1 if rex && num >= 4 => RegisterBank::rB,
            1 if num >= 8 => RegisterBank::rB,
            1 => RegisterBank::B,
            2 => RegisterBank::W,
            4 => RegisterBank::D,
            _ => RegisterBank::Q,
        };
        RegSpec { bank, num }
    }

    /// A vector register of `width` bytes: xmm, ymm or zmm.
    pub(crate) const fn vector(num: u8, width: u16) -> RegSpec {
        let bank = match width {
            64 => RegisterBank::Z,
            32 => RegisterBank::Y,
            _ => RegisterBank::X,
        };
        RegSpec { bank, num }
    }

    #[inline]
    pub(crate) const fn from_parts(num: u8, bank: RegisterBank) -> RegSpec {
        RegSpec { num, bank }
    }

    /// Segment register in encoding order, `es` is 0.
    #[inline]
    pub(crate) const fn segment(num: u8) -> RegSpec {
        RegSpec { bank: RegisterBank::S, num }
    }

    /// # Panics
    ///
    /// If `num` is 16 or above.
    #[inline]
    pub fn q(num: u8) -> RegSpec {
        if num >= 16 {
            panic!("invalid qword reg: {num}");
        }
        RegSpec { bank: RegisterBank::Q, num }
    }

    /// # Panics
    ///
    /// If `num` is 16 or above.
    #[inline]
    pub fn d(num: u8) -> RegSpec {
        if num >= 16 {
            panic!("invalid dword reg: {num}");
        }
        RegSpec { bank: RegisterBank::D, num }
    }

    /// # Panics
    ///
    /// If `num` is 16 or above.
    #[inline]
    pub fn w(num: u8) -> RegSpec {
        if num >= 16 {
            panic!("invalid word reg: {num}");
        }
        RegSpec { bank: RegisterBank::W, num }
    }

    /// Byte register as seen under a REX prefix, so 4 is `spl` and not `ah`.
    ///
    /// # Panics
    ///
    /// If `num` is 16 or above.
    #[inline]
    pub fn rb(num: u8) -> RegSpec {
        if num >= 16 {
            panic!("invalid byte reg: {num}");
        }
        RegSpec::gpr(num, 1, true)
    }

    /// # Panics
    ///
    /// If `num` is 8 or above.
    #[inline]
    pub fn b(num: u8) -> RegSpec {
        if num >= 8 {
            panic!("invalid byte reg: {num}");
        }
        RegSpec { bank: RegisterBank::B, num }
    }

    /// # Panics
    ///
    /// If `num` is 32 or above.
    #[inline]
    pub fn xmm(num: u8) -> RegSpec {
        if num >= 32 {
            panic!("invalid x86 xmm reg: {num}");
        }
        RegSpec { bank: RegisterBank::X, num }
    }

    /// # Panics
    ///
    /// If `num` is 32 or above.
    #[inline]
    pub fn ymm(num: u8) -> RegSpec {
        if num >= 32 {
            panic!("invalid x86 ymm reg: {num}");
        }
        RegSpec { bank: RegisterBank::Y, num }
    }

    /// # Panics
    ///
    /// If `num` is 32 or above.
    #[inline]
    pub fn zmm(num: u8) -> RegSpec {
        if num >= 32 {
            panic!("invalid x86 zmm reg: {num}");
        }
        RegSpec { bank: RegisterBank::Z, num }
    }

    /// # Panics
    ///
    /// If `num` is 8 or above.
    #[inline]
    pub fn mask(num: u8) -> RegSpec {
        if num >= 8 {
            panic!("invalid x86 mask reg: {num}");
        }
        RegSpec { bank: RegisterBank::K, num }
    }

    /// # Panics
    ///
    /// If `num` is 8 or above.
    #[inline]
    pub fn st(num: u8) -> RegSpec {
        if num >= 8 {
            panic!("invalid x87 reg: {num}");
        }
        RegSpec { bank: RegisterBank::ST, num }
    }

    /// # Panics
    ///
    /// If `num` is 8 or above.
    #[inline]
    pub fn mm(num: u8) -> RegSpec {
        if num >= 8 {
            panic!("invalid mmx reg: {num}");
        }
        RegSpec { bank: RegisterBank::MM, num }
    }

    register!(Q,
        rax => 0, rcx => 1, rdx => 2, rbx => 3, rsp => 4, rbp => 5, rsi => 6, rdi => 7,
        r8 => 8, r9 => 9, r10 => 10, r11 => 11, r12 => 12, r13 => 13, r14 => 14, r15 => 15
    );

    register!(D,
        eax => 0, ecx => 1, edx => 2, ebx => 3, esp => 4, ebp => 5, esi => 6, edi => 7,
        r8d => 8, r9d => 9, r10d => 10, r11d => 11, r12d => 12, r13d => 13, r14d => 14,
        r15d => 15
    );

    register!(W,
        ax => 0, cx => 1, dx => 2, bx => 3, sp => 4, bp => 5, si => 6, di => 7,
        r8w => 8, r9w => 9, r10w => 10, r11w => 11, r12w => 12, r13w => 13, r14w => 14,
        r15w => 15
    );

    register!(B, al => 0, cl => 1, dl => 2, bl => 3, ah => 4, ch => 5, dh => 6, bh => 7);

    register!(rB,
        spl => 4, bpl => 5, sil => 6, dil => 7, r8b => 8, r9b => 9, r10b => 10, r11b => 11,
        r12b => 12, r13b => 13, r14b => 14, r15b => 15
    );

    register!(S, es => 0, cs => 1, ss => 2, ds => 3, fs => 4, gs => 5);

    register!(K, k0 => 0, k1 => 1, k2 => 2, k3 => 3, k4 => 4, k5 => 5, k6 => 6, k7 => 7);

    register!(ST, st0 => 0);

    register!(EIP, eip => 0);

    register!(RIP, rip => 0);
}

impl fmt::Display for RegSpec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_registers_alias_without_rex() {
        assert_eq!(RegSpec::gpr(0, 1, true), RegSpec::al());
        assert_eq!(RegSpec::gpr(4, 1, false), RegSpec::ah());
        assert_eq!(RegSpec::gpr(4, 1, true), RegSpec::spl());
        assert_eq!(RegSpec::gpr(12, 1, true), RegSpec::r12b());
        assert_eq!(RegSpec::gpr(12, 1, true).name(), "r12b");
    }

    #[test]
    fn names_and_widths() {
        assert_eq!(RegSpec::r12().name(), "r12");
        assert_eq!(RegSpec::r12().num(), 12);
        assert_eq!(RegSpec::r13d().width(), 4);
        assert_eq!(RegSpec::zmm(31).name(), "zmm31");
        assert_eq!(RegSpec::zmm(31).width(), 64);
        assert_eq!(RegSpec::k3().to_string(), "k3");
        assert_eq!(RegSpec::st(3).name(), "st(3)");
    }

    #[test]
    fn stack_family() {
        assert!(RegSpec::esp().is_stack_pointer_or_frame());
        assert!(RegSpec::bp().is_stack_pointer_or_frame());
        assert!(!RegSpec::r13().is_stack_pointer_or_frame());
        assert!(!RegSpec::spl().is_stack_pointer_or_frame());
    }

    #[test]
    #[should_panic]
    fn xmm_out_of_range() {
        RegSpec::xmm(32);
    }
}
