use decoder::ErrorKind;

use super::{check, check_all, check_with, test_error, test_invalid, test_invalid_under, ALL_MODES};
use crate::{Bitness, Code, Decoder, MemorySize, RegSpec, RegisterBank};

#[test]
fn mandatory_prefix_columns() {
    let rows = [
        ("0F 58 C1", Code::Addps_xmm_xmmm128),
        ("66 0F 58 C1", Code::Addpd_xmm_xmmm128),
        ("F3 0F 58 C1", Code::Addss_xmm_xmmm32),
        ("F2 0F 58 C1", Code::Addsd_xmm_xmmm64),
    ];
    for (hex, code) in rows {
        check_all(hex, |instr| {
            assert_eq!(instr.code(), code, "{hex}");
            assert_eq!(instr.op_register(0), Some(RegSpec::xmm(0)));
            assert_eq!(instr.op_register(1), Some(RegSpec::xmm(1)));
            // a mandatory prefix is part of the opcode, not a repeat
            assert!(!instr.has_rep_prefix());
            assert!(!instr.has_repne_prefix());
        });
    }

    check(Bitness::Bit64, "F3 0F 58 00", |instr| {
        assert_eq!(instr.memory_size(), MemorySize::Float32);
    });
    check(Bitness::Bit64, "F2 0F 58 00", |instr| {
        assert_eq!(instr.memory_size(), MemorySize::Float64);
    });
    check(Bitness::Bit64, "66 0F 58 00", |instr| {
        assert_eq!(instr.memory_size(), MemorySize::Packed128_Float64);
    });
}

#[test]
fn f3_beats_66_as_mandatory_prefix() {
    check(Bitness::Bit64, "66 F3 0F 58 C1", |instr| {
        assert_eq!(instr.code(), Code::Addss_xmm_xmmm32);
    });
    check(Bitness::Bit64, "F3 66 0F 6F C1", |instr| {
        assert_eq!(instr.code(), Code::Movdqu_xmm_xmmm128);
    });
}

#[test]
fn mandatory_66_isnt_an_operand_size_override() {
    check(Bitness::Bit64, "66 0F 3A 16 C0 01", |instr| {
        assert_eq!(instr.code(), Code::Pextrd_rm32_xmm_imm8);
        assert_eq!(instr.op_register(0), Some(RegSpec::eax()));
    });
    check(Bitness::Bit64, "66 48 0F 3A 16 C0 01", |instr| {
        assert_eq!(instr.code(), Code::Pextrq_rm64_xmm_imm8);
        assert_eq!(instr.op_register(0), Some(RegSpec::rax()));
        assert_eq!(instr.op_register(1), Some(RegSpec::xmm(0)));
    });
    check(Bitness::Bit32, "66 0F 7E C8", |instr| {
        assert_eq!(instr.code(), Code::Movd_rm32_xmm);
        assert_eq!(instr.op_register(0), Some(RegSpec::eax()));
        assert_eq!(instr.op_register(1), Some(RegSpec::xmm(1)));
    });
}

#[test]
fn mmx_and_sse_twins() {
    check_all("0F EF C1", |instr| {
        assert_eq!(instr.code(), Code::Pxor_mm_mmm64);
        assert_eq!(instr.op_register(0), Some(RegSpec::mm(0)));
        assert_eq!(instr.op_register(1), Some(RegSpec::mm(1)));
    });
    check_all("66 0F EF C1", |instr| {
        assert_eq!(instr.code(), Code::Pxor_xmm_xmmm128);
        assert_eq!(instr.op_register(0), Some(RegSpec::xmm(0)));
    });
    test_invalid("F3 0F EF C1");

    check(Bitness::Bit64, "0F EF 00", |instr| {
        assert_eq!(instr.memory_size(), MemorySize::UInt64);
    });
    check(Bitness::Bit64, "66 0F EF 00", |instr| {
        assert_eq!(instr.memory_size(), MemorySize::UInt128);
    });

    // REX reaches xmm8+, mmx registers only go to 7
    check(Bitness::Bit64, "66 41 0F EF C1", |instr| {
        assert_eq!(instr.op_register(1), Some(RegSpec::xmm(9)));
    });
    check(Bitness::Bit64, "41 0F EF C1", |instr| {
        assert_eq!(instr.op_register(1), Some(RegSpec::mm(1)));
    });

    check(Bitness::Bit32, "0F 6F C1", |instr| {
        assert_eq!(instr.code(), Code::Movq_mm_mmm64);
    });
    check(Bitness::Bit32, "66 0F 6F 00", |instr| {
        assert_eq!(instr.code(), Code::Movdqa_xmm_xmmm128);
        assert_eq!(instr.memory_size(), MemorySize::UInt128);
    });
    check(Bitness::Bit32, "F3 0F 6F 00", |instr| {
        assert_eq!(instr.code(), Code::Movdqu_xmm_xmmm128);
    });
    test_invalid("F2 0F 6F 00");
}

#[test]
fn long_conditional_branches() {
    let at = |bitness| Decoder::new(bitness).with_ip(0x1000);

    check_with(at(Bitness::Bit16), "0F 84 FC FF", |instr| {
        assert_eq!(instr.code(), Code::Je_Jw16);
        assert_eq!(instr.operand(0), crate::Operand::NearBranch16(0x1000));
    });
    check_with(at(Bitness::Bit32), "0F 85 00 01 00 00", |instr| {
        assert_eq!(instr.code(), Code::Jne_Jd32);
        assert_eq!(instr.near_branch_target(), Some(0x1106));
    });
    check_with(at(Bitness::Bit64), "0F 8F 00 00 00 00", |instr| {
        assert_eq!(instr.code(), Code::Jg_Jd64);
        assert_eq!(instr.near_branch_target(), Some(0x1006));
    });
    check_with(at(Bitness::Bit32), "66 0F 80 10 00", |instr| {
        assert_eq!(instr.code(), Code::Jo_Jw16);
        assert_eq!(instr.near_branch_target(), Some(0x1015));
    });
}

#[test]
fn setcc_and_cmovcc() {
    check_all("0F 94 C0", |instr| {
        assert_eq!(instr.code(), Code::Sete_Eb);
        assert_eq!(instr.op_register(0), Some(RegSpec::al()));
    });
    check(Bitness::Bit32, "0F 9F 00", |instr| {
        assert_eq!(instr.code(), Code::Setg_Eb);
        assert_eq!(instr.memory_size(), MemorySize::UInt8);
    });

    check(Bitness::Bit32, "0F 44 C1", |instr| {
        assert_eq!(instr.code(), Code::Cmove_Gd_Ed);
        assert_eq!(instr.op_register(0), Some(RegSpec::eax()));
        assert_eq!(instr.op_register(1), Some(RegSpec::ecx()));
    });
    check(Bitness::Bit64, "48 0F 4F C1", |instr| {
        assert_eq!(instr.code(), Code::Cmovg_Gq_Eq);
        assert_eq!(instr.op_register(0), Some(RegSpec::rax()));
    });
    check(Bitness::Bit16, "0F 42 C1", |instr| {
        assert_eq!(instr.code(), Code::Cmovb_Gw_Ew);
        assert_eq!(instr.op_register(1), Some(RegSpec::cx()));
    });
}

#[test]
fn widening_moves() {
    check(Bitness::Bit32, "0F B6 C1", |instr| {
        assert_eq!(instr.code(), Code::Movzx_Gd_Eb);
        assert_eq!(instr.op_register(0), Some(RegSpec::eax()));
        assert_eq!(instr.op_register(1), Some(RegSpec::cl()));
    });
    check(Bitness::Bit64, "48 0F BF C1", |instr| {
        assert_eq!(instr.code(), Code::Movsx_Gq_Ew);
        assert_eq!(instr.op_register(0), Some(RegSpec::rax()));
        assert_eq!(instr.op_register(1), Some(RegSpec::cx()));
    });
    check(Bitness::Bit32, "0F B7 00", |instr| {
        assert_eq!(instr.code(), Code::Movzx_Gd_Ew);
        assert_eq!(instr.memory_size(), MemorySize::UInt16);
    });
    check(Bitness::Bit16, "0F BE 07", |instr| {
        assert_eq!(instr.code(), Code::Movsx_Gw_Eb);
        assert_eq!(instr.memory_size(), MemorySize::UInt8);
        assert_eq!(instr.memory_base(), Some(RegSpec::bx()));
    });
}

#[test]
fn bit_scans_under_rep() {
    check(Bitness::Bit32, "F3 0F B8 C1", |instr| {
        assert_eq!(instr.code(), Code::Popcnt_Gd_Ed);
        assert!(!instr.has_rep_prefix());
    });
    test_invalid("0F B8 C1");

    check(Bitness::Bit32, "0F BC C1", |instr| assert_eq!(instr.code(), Code::Bsf_Gd_Ed));
    check(Bitness::Bit32, "F3 0F BC C1", |instr| assert_eq!(instr.code(), Code::Tzcnt_Gd_Ed));
    check(Bitness::Bit32, "0F BD C1", |instr| assert_eq!(instr.code(), Code::Bsr_Gd_Ed));
    check(Bitness::Bit64, "F3 48 0F BD C1", |instr| {
        assert_eq!(instr.code(), Code::Lzcnt_Gq_Eq);
        assert_eq!(instr.op_register(0), Some(RegSpec::rax()));
    });

    // F2 falls back to the plain scan
    check(Bitness::Bit32, "F2 0F BD C1", |instr| {
        assert_eq!(instr.code(), Code::Bsr_Gd_Ed);
        assert!(!instr.has_repne_prefix());
    });

    // 66 is still an operand size override here
    check(Bitness::Bit64, "66 F3 0F B8 C1", |instr| {
        assert_eq!(instr.code(), Code::Popcnt_Gw_Ew);
        assert_eq!(instr.op_register(0), Some(RegSpec::ax()));
    });
}

#[test]
fn group_15() {
    check_all("0F AE E8", |instr| assert_eq!(instr.code(), Code::Lfence));
    check_all("0F AE F0", |instr| assert_eq!(instr.code(), Code::Mfence));
    check_all("0F AE F8", |instr| assert_eq!(instr.code(), Code::Sfence));

    check(Bitness::Bit64, "0F AE 38", |instr| {
        assert_eq!(instr.code(), Code::Clflush_Mb);
        assert_eq!(instr.memory_size(), MemorySize::UInt8);
    });
    check(Bitness::Bit64, "0F AE 00", |instr| {
        assert_eq!(instr.code(), Code::Fxsave_M512);
        assert_eq!(instr.memory_size(), MemorySize::Fxsave_512Byte);
    });

    test_invalid("0F AE C0");
}

#[test]
fn system_and_misc() {
    check_all("0F 0B", |instr| assert_eq!(instr.code(), Code::Ud2));
    check_all("0F A2", |instr| assert_eq!(instr.code(), Code::Cpuid));

    check(Bitness::Bit64, "0F 05", |instr| assert_eq!(instr.code(), Code::Syscall));
    test_invalid_under(Decoder::new(Bitness::Bit32), "0F 05");
    test_invalid_under(Decoder::new(Bitness::Bit16), "0F 05");

    check(Bitness::Bit32, "0F C8", |instr| {
        assert_eq!(instr.code(), Code::Bswap_r32);
        assert_eq!(instr.op_register(0), Some(RegSpec::eax()));
    });
    check(Bitness::Bit64, "49 0F CF", |instr| {
        assert_eq!(instr.code(), Code::Bswap_r64);
        assert_eq!(instr.op_register(0), Some(RegSpec::r15()));
    });

    check(Bitness::Bit32, "0F AF C1", |instr| {
        assert_eq!(instr.code(), Code::Imul_Gd_Ed);
    });

    check(Bitness::Bit64, "0F A8", |instr| {
        assert_eq!(instr.code(), Code::Pushq_GS);
        assert_eq!(instr.op_register(0), Some(RegSpec::gs()));
    });
    check(Bitness::Bit32, "0F A1", |instr| {
        assert_eq!(instr.code(), Code::Popd_FS);
    });

    // cmpxchg8b has no register form
    test_invalid("0F C7 C8");
}

#[test]
fn multi_byte_nop() {
    check(Bitness::Bit32, "0F 1F 00", |instr| {
        assert_eq!(instr.code(), Code::Nopd_Ev);
        assert_eq!(instr.memory_size(), MemorySize::UInt32);
    });
    check(Bitness::Bit64, "66 0F 1F 44 00 00", |instr| {
        assert_eq!(instr.code(), Code::Nopw_Ev);
        assert_eq!(instr.memory_size(), MemorySize::UInt16);
    });
    check(Bitness::Bit64, "48 0F 1F 84 00 00 00 00 00", |instr| {
        assert_eq!(instr.code(), Code::Nopq_Ev);
        assert_eq!(instr.len(), 9);
    });
}

#[test]
fn control_and_debug_registers() {
    check(Bitness::Bit64, "0F 20 C0", |instr| {
        assert_eq!(instr.code(), Code::Mov_r64_cr);
        assert_eq!(instr.op_register(0), Some(RegSpec::rax()));
        let cr = instr.op_register(1).map(|reg| (reg.bank(), reg.num()));
        assert_eq!(cr, Some((RegisterBank::CR, 0)));
    });

    check(Bitness::Bit32, "0F 22 D8", |instr| {
        assert_eq!(instr.code(), Code::Mov_cr_r32);
        let cr = instr.op_register(0).map(|reg| (reg.bank(), reg.num()));
        assert_eq!(cr, Some((RegisterBank::CR, 3)));
        assert_eq!(instr.op_register(1), Some(RegSpec::eax()));
    });

    // cr8 exists, but only through REX.R
    check(Bitness::Bit64, "44 0F 20 C0", |instr| {
        assert_eq!(instr.op_register(1).map(|reg| reg.num()), Some(8));
    });

    // the register form is implied, 66 doesn't matter
    check(Bitness::Bit32, "66 0F 20 C0", |instr| {
        assert_eq!(instr.op_register(0), Some(RegSpec::eax()));
    });

    for bitness in ALL_MODES {
        test_error(bitness, "0F 20 C8", ErrorKind::InvalidOperand);
        test_error(bitness, "0F 22 E8", ErrorKind::InvalidOperand);
    }

    check(Bitness::Bit64, "0F 21 F8", |instr| {
        assert_eq!(instr.code(), Code::Mov_r64_dr);
        let dr = instr.op_register(1).map(|reg| (reg.bank(), reg.num()));
        assert_eq!(dr, Some((RegisterBank::DR, 7)));
    });
    test_error(Bitness::Bit64, "44 0F 21 C0", ErrorKind::InvalidOperand);
}
