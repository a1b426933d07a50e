use decoder::ErrorKind;

use super::{check, check_with, test_error, test_invalid_under, unchecked};
use crate::{Bitness, Code, Decoder, OpKind, RegSpec};

#[test]
fn last_segment_override_wins() {
    check(Bitness::Bit16, "26 2E A0 12 34", |instr| {
        assert_eq!(instr.code(), Code::Mov_AL_Ob);
        assert_eq!(instr.segment_prefix(), Some(RegSpec::cs()));
        assert_eq!(instr.memory_segment(), Some(RegSpec::cs()));
    });

    check(Bitness::Bit32, "3E 36 26 A1 78 56 34 12", |instr| {
        assert_eq!(instr.code(), Code::Mov_EAX_Od);
        assert_eq!(instr.memory_segment(), Some(RegSpec::es()));
    });
}

#[test]
fn fs_gs_shadow_legacy_segments_in_long_mode() {
    check(Bitness::Bit64, "64 26 8B 00", |instr| {
        assert_eq!(instr.code(), Code::Mov_Gd_Ed);
        assert_eq!(instr.segment_prefix(), Some(RegSpec::fs()));
        assert_eq!(instr.memory_segment(), Some(RegSpec::fs()));
    });

    check(Bitness::Bit64, "65 64 8B 00", |instr| {
        assert_eq!(instr.memory_segment(), Some(RegSpec::fs()));
    });

    check(Bitness::Bit32, "64 26 8B 00", |instr| {
        assert_eq!(instr.memory_segment(), Some(RegSpec::es()));
    });
}

#[test]
fn string_source_takes_the_override() {
    check(Bitness::Bit64, "2E A4", |instr| {
        assert_eq!(instr.op_kind(1), OpKind::MemorySegRSI);
        assert_eq!(instr.operand(1).memory_segment(), Some(RegSpec::cs()));
        // the destination can't be overridden
        assert_eq!(instr.operand(0).memory_segment(), Some(RegSpec::es()));
    });
}

#[test]
fn rex_counts_only_when_last() {
    check(Bitness::Bit64, "48 66 01 C0", |instr| {
        assert_eq!(instr.code(), Code::Add_Ew_Gw);
        assert_eq!(instr.op_register(0), Some(RegSpec::ax()));
        assert!(!instr.prefixes().rex().present());
    });

    check(Bitness::Bit64, "66 48 01 C0", |instr| {
        assert_eq!(instr.code(), Code::Add_Eq_Gq);
        assert_eq!(instr.op_register(0), Some(RegSpec::rax()));
        assert!(instr.prefixes().rex().w());
    });

    check(Bitness::Bit64, "41 48 01 C0", |instr| {
        assert_eq!(instr.code(), Code::Add_Eq_Gq);
        assert_eq!(instr.op_register(0), Some(RegSpec::rax()));
    });
}

#[test]
fn rex_extends_registers() {
    check(Bitness::Bit64, "41 50", |instr| {
        assert_eq!(instr.code(), Code::Push_r64);
        assert_eq!(instr.op_register(0), Some(RegSpec::r8()));
    });

    check(Bitness::Bit64, "45 01 C8", |instr| {
        assert_eq!(instr.code(), Code::Add_Ed_Gd);
        assert_eq!(instr.op_register(0), Some(RegSpec::r8d()));
        assert_eq!(instr.op_register(1), Some(RegSpec::r9d()));
    });
}

#[test]
fn rex_selects_uniform_byte_registers() {
    check(Bitness::Bit64, "88 E0", |instr| {
        assert_eq!(instr.code(), Code::Mov_Eb_Gb);
        assert_eq!(instr.op_register(0), Some(RegSpec::al()));
        assert_eq!(instr.op_register(1), Some(RegSpec::ah()));
    });

    check(Bitness::Bit64, "40 88 E0", |instr| {
        assert_eq!(instr.op_register(0), Some(RegSpec::al()));
        assert_eq!(instr.op_register(1), Some(RegSpec::spl()));
    });
}

#[test]
fn rex_is_inc_dec_outside_long_mode() {
    check(Bitness::Bit32, "48", |instr| {
        assert_eq!(instr.code(), Code::Dec_r32);
        assert_eq!(instr.op_register(0), Some(RegSpec::eax()));
    });

    check(Bitness::Bit16, "41", |instr| {
        assert_eq!(instr.code(), Code::Inc_r16);
        assert_eq!(instr.op_register(0), Some(RegSpec::cx()));
    });

    // a lone REX has nothing to prefix
    test_error(Bitness::Bit64, "48", ErrorKind::ExhaustedInput);
}

#[test]
fn operand_size_override() {
    check(Bitness::Bit16, "66 8B 00", |instr| {
        assert_eq!(instr.code(), Code::Mov_Gd_Ed);
        assert_eq!(instr.op_register(0), Some(RegSpec::eax()));
        assert_eq!(instr.memory_base(), Some(RegSpec::bx()));
        assert_eq!(instr.memory_index(), Some(RegSpec::si()));
    });

    check(Bitness::Bit32, "66 8B 00", |instr| {
        assert_eq!(instr.code(), Code::Mov_Gw_Ew);
        assert_eq!(instr.op_register(0), Some(RegSpec::ax()));
        assert_eq!(instr.memory_base(), Some(RegSpec::eax()));
    });
}

#[test]
fn address_size_override() {
    check(Bitness::Bit64, "67 8B 00", |instr| {
        assert_eq!(instr.memory_base(), Some(RegSpec::eax()));
    });

    check(Bitness::Bit32, "67 8B 00", |instr| {
        assert_eq!(instr.memory_base(), Some(RegSpec::bx()));
        assert_eq!(instr.memory_index(), Some(RegSpec::si()));
    });

    check(Bitness::Bit16, "67 8B 00", |instr| {
        assert_eq!(instr.memory_base(), Some(RegSpec::eax()));
    });
}

#[test]
fn rep_prefixes() {
    check(Bitness::Bit64, "F3 A4", |instr| {
        assert_eq!(instr.code(), Code::Movsb_Yb_Xb);
        assert!(instr.has_rep_prefix());
        assert!(instr.has_repe_prefix());
        assert!(!instr.has_repne_prefix());
    });

    check(Bitness::Bit32, "F2 A6", |instr| {
        assert_eq!(instr.code(), Code::Cmpsb_Xb_Yb);
        assert!(instr.has_repne_prefix());
        assert!(!instr.has_rep_prefix());
    });
}

#[test]
fn pause_consumes_rep() {
    check(Bitness::Bit64, "F3 90", |instr| {
        assert_eq!(instr.code(), Code::Pause);
        assert!(!instr.has_rep_prefix());
        assert_eq!(instr.op_count(), 0);
    });
}

#[test]
fn lock_on_lockable_memory_forms() {
    check(Bitness::Bit64, "F0 01 00", |instr| {
        assert_eq!(instr.code(), Code::Add_Ed_Gd);
        assert!(instr.has_lock_prefix());
        assert_eq!(instr.op_kind(0), OpKind::Memory);
    });

    check(Bitness::Bit32, "F0 0F C7 08", |instr| {
        assert_eq!(instr.code(), Code::Cmpxchg8b_Mq);
        assert!(instr.has_lock_prefix());
    });

    check(Bitness::Bit64, "F0 48 0F C7 08", |instr| {
        assert_eq!(instr.code(), Code::Cmpxchg16b_Mdq);
        assert_eq!(instr.memory_size(), crate::MemorySize::UInt128);
    });

    check(Bitness::Bit16, "F0 86 07", |instr| {
        assert_eq!(instr.code(), Code::Xchg_Eb_Gb);
        assert_eq!(instr.memory_base(), Some(RegSpec::bx()));
    });
}

#[test]
fn lock_misuse() {
    // register destination
    test_error(Bitness::Bit64, "F0 01 C0", ErrorKind::InvalidPrefixes);
    // not a read-modify-write
    test_error(Bitness::Bit64, "F0 89 00", ErrorKind::InvalidPrefixes);
    test_error(Bitness::Bit32, "F0 90", ErrorKind::InvalidPrefixes);
    // cmp only reads
    test_error(Bitness::Bit32, "F0 80 38 01", ErrorKind::InvalidPrefixes);

    check_with(unchecked(Bitness::Bit64), "F0 01 C0", |instr| {
        assert_eq!(instr.code(), Code::Add_Ed_Gd);
        assert!(instr.has_lock_prefix());
    });
}

#[test]
fn vector_escapes_reject_legacy_prefixes() {
    test_error(Bitness::Bit64, "66 C5 F8 58 C1", ErrorKind::InvalidPrefixes);
    test_error(Bitness::Bit64, "F3 C4 E1 78 58 C1", ErrorKind::InvalidPrefixes);
    test_error(Bitness::Bit64, "48 62 F1 7C 48 58 C1", ErrorKind::InvalidPrefixes);
    test_error(Bitness::Bit64, "F0 C5 F8 58 C1", ErrorKind::InvalidPrefixes);

    // segment and address size overrides are fine
    check(Bitness::Bit64, "2E C5 F8 58 00", |instr| {
        assert_eq!(instr.code(), Code::VEX_Vaddps_xmm_xmm_xmmm128);
        assert_eq!(instr.memory_segment(), Some(RegSpec::cs()));
    });
    test_invalid_under(Decoder::new(Bitness::Bit32), "66 C5 F8 58 C1");
}
