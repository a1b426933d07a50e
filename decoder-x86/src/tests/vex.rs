use decoder::ErrorKind;

use super::{check, check_all, test_error, ALL_MODES};
use crate::{Bitness, Code, Encoding, MemorySize, RegSpec};

#[test]
fn two_byte_form() {
    check_all("C5 F8 58 C1", |instr| {
        assert_eq!(instr.code(), Code::VEX_Vaddps_xmm_xmm_xmmm128);
        assert_eq!(instr.encoding(), Encoding::VEX);
        assert_eq!(instr.vector_length(), 128);
        assert_eq!(instr.op_count(), 3);
        assert_eq!(instr.op_register(0), Some(RegSpec::xmm(0)));
        assert_eq!(instr.op_register(1), Some(RegSpec::xmm(0)));
        assert_eq!(instr.op_register(2), Some(RegSpec::xmm(1)));
    });

    check_all("C5 FC 58 C1", |instr| {
        assert_eq!(instr.code(), Code::VEX_Vaddps_ymm_ymm_ymmm256);
        assert_eq!(instr.vector_length(), 256);
        assert_eq!(instr.op_register(0), Some(RegSpec::ymm(0)));
    });

    check_all("C5 F4 58 C1", |instr| {
        assert_eq!(instr.code(), Code::VEX_Vaddps_ymm_ymm_ymmm256);
        assert_eq!(instr.op_register(1), Some(RegSpec::ymm(1)));
    });

    check_all("C5 F0 58 C1", |instr| {
        assert_eq!(instr.vector_length(), 128);
        assert_eq!(instr.op_register(1), Some(RegSpec::xmm(1)));
    });

    check(Bitness::Bit64, "C5 78 58 C1", |instr| {
        assert_eq!(instr.op_register(0), Some(RegSpec::xmm(8)));
    });
}

#[test]
fn no_operand_forms() {
    check_all("C5 F8 77", |instr| {
        assert_eq!(instr.code(), Code::VEX_Vzeroupper);
        assert_eq!(instr.op_count(), 0);
        assert_eq!(instr.len(), 3);
    });
    check_all("C5 FC 77", |instr| {
        assert_eq!(instr.code(), Code::VEX_Vzeroall);
    });
}

#[test]
fn unused_vvvv_must_be_all_ones() {
    for bitness in ALL_MODES {
        test_error(bitness, "C5 F0 10 C1", ErrorKind::InvalidVexEvex);
        test_error(bitness, "C5 F0 77", ErrorKind::InvalidVexEvex);
    }

    // the top bit of vvvv only exists in long mode
    test_error(Bitness::Bit64, "C4 E1 38 10 C1", ErrorKind::InvalidVexEvex);
    check(Bitness::Bit32, "C4 E1 38 10 C1", |instr| {
        assert_eq!(instr.code(), Code::VEX_Vmovups_xmm_xmmm128);
    });
}

#[test]
fn scalar_forms_ignore_l() {
    check_all("C5 FA 58 C1", |instr| {
        assert_eq!(instr.code(), Code::VEX_Vaddss_xmm_xmm_xmmm32);
        assert_eq!(instr.vector_length(), 128);
    });
    check_all("C5 FE 58 C1", |instr| {
        assert_eq!(instr.code(), Code::VEX_Vaddss_xmm_xmm_xmmm32);
        assert_eq!(instr.vector_length(), 128);
        assert_eq!(instr.op_register(0), Some(RegSpec::xmm(0)));
    });
    check(Bitness::Bit64, "C5 FB 58 00", |instr| {
        assert_eq!(instr.code(), Code::VEX_Vaddsd_xmm_xmm_xmmm64);
        assert_eq!(instr.memory_size(), MemorySize::Float64);
    });
}

#[test]
fn broadcast_source() {
    check(Bitness::Bit64, "C4 E2 7D 18 00", |instr| {
        assert_eq!(instr.code(), Code::VEX_Vbroadcastss_ymm_xmmm32);
        assert_eq!(instr.op_register(0), Some(RegSpec::ymm(0)));
        assert_eq!(instr.memory_size(), MemorySize::Float32);
    });
    check_all("C4 E2 79 18 C1", |instr| {
        assert_eq!(instr.code(), Code::VEX_Vbroadcastss_xmm_xmmm32);
    });
    check_all("C4 E2 7D 18 C1", |instr| {
        // the source register is always xmm
        assert_eq!(instr.op_register(1), Some(RegSpec::xmm(1)));
    });
    for bitness in ALL_MODES {
        test_error(bitness, "C4 E2 F9 18 C1", ErrorKind::InvalidOpcode);
    }
}

#[test]
fn memory_operands() {
    check(Bitness::Bit64, "C5 F8 58 44 24 08", |instr| {
        assert_eq!(instr.memory_base(), Some(RegSpec::rsp()));
        assert_eq!(instr.memory_displacement(), 8);
        assert_eq!(instr.memory_size(), MemorySize::Packed128_Float32);
    });
    check(Bitness::Bit64, "C5 FC 28 00", |instr| {
        assert_eq!(instr.code(), Code::VEX_Vmovaps_ymm_ymmm256);
        assert_eq!(instr.memory_size(), MemorySize::Packed256_Float32);
    });
    check(Bitness::Bit32, "C5 FD 7F 08", |instr| {
        assert_eq!(instr.code(), Code::VEX_Vmovdqa_ymmm256_ymm);
        assert_eq!(instr.memory_base(), Some(RegSpec::eax()));
        assert_eq!(instr.op_register(1), Some(RegSpec::ymm(1)));
    });
}

#[test]
fn three_byte_extension_bits() {
    check(Bitness::Bit64, "C4 C1 78 58 C1", |instr| {
        assert_eq!(instr.op_register(2), Some(RegSpec::xmm(9)));
    });
    check(Bitness::Bit32, "C4 C1 78 58 C1", |instr| {
        assert_eq!(instr.op_register(2), Some(RegSpec::xmm(1)));
    });
}

#[test]
fn bad_escapes() {
    // mmmmm 0 and 4 aren't maps
    for bitness in ALL_MODES {
        test_error(bitness, "C4 E4 78 58 C1", ErrorKind::InvalidVexEvex);
        test_error(bitness, "C4 E0 78 58 C1", ErrorKind::InvalidVexEvex);
    }
    test_error(Bitness::Bit64, "C5 F8", ErrorKind::ExhaustedInput);
    test_error(Bitness::Bit64, "C4 E2", ErrorKind::ExhaustedInput);
    // nothing at F2 in 0F38
    test_error(Bitness::Bit64, "C4 E2 7B B4 C1", ErrorKind::InvalidOpcode);
}
