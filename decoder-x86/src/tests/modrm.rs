use super::{check, check_with};
use crate::{Bitness, Code, Decoder, MemorySize, OpKind, RegSpec};

#[test]
fn addressing_16() {
    check(Bitness::Bit16, "8B 00", |instr| {
        assert_eq!(instr.code(), Code::Mov_Gw_Ew);
        assert_eq!(instr.memory_base(), Some(RegSpec::bx()));
        assert_eq!(instr.memory_index(), Some(RegSpec::si()));
        assert_eq!(instr.memory_segment(), Some(RegSpec::ds()));
        assert_eq!(instr.memory_displ_size(), 0);
    });

    check(Bitness::Bit16, "8B 46 FC", |instr| {
        assert_eq!(instr.memory_base(), Some(RegSpec::bp()));
        assert_eq!(instr.memory_index(), None);
        assert_eq!(instr.memory_segment(), Some(RegSpec::ss()));
        assert_eq!(instr.memory_displacement(), 0xfffc);
        assert_eq!(instr.memory_displ_size(), 1);
    });

    check(Bitness::Bit16, "8B 86 34 12", |instr| {
        assert_eq!(instr.memory_base(), Some(RegSpec::bp()));
        assert_eq!(instr.memory_displacement(), 0x1234);
        assert_eq!(instr.memory_displ_size(), 2);
    });

    check(Bitness::Bit16, "8B 0B", |instr| {
        assert_eq!(instr.op_register(0), Some(RegSpec::cx()));
        assert_eq!(instr.memory_base(), Some(RegSpec::bp()));
        assert_eq!(instr.memory_index(), Some(RegSpec::di()));
        assert_eq!(instr.memory_segment(), Some(RegSpec::ss()));
    });
}

#[test]
fn absolute_16() {
    // mod 00 rm 110 is a bare disp16, not [bp]
    check(Bitness::Bit16, "8B 06 34 12", |instr| {
        assert_eq!(instr.memory_base(), None);
        assert_eq!(instr.memory_index(), None);
        assert_eq!(instr.memory_segment(), Some(RegSpec::ds()));
        assert_eq!(instr.memory_displacement(), 0x1234);
        assert_eq!(instr.memory_displ_size(), 2);
    });
}

#[test]
fn addressing_32() {
    check(Bitness::Bit32, "8B 40 F0", |instr| {
        assert_eq!(instr.memory_base(), Some(RegSpec::eax()));
        assert_eq!(instr.memory_displacement(), 0xffff_fff0);
        assert_eq!(instr.memory_displ_size(), 1);
    });

    check(Bitness::Bit32, "8B 80 00 01 00 00", |instr| {
        assert_eq!(instr.memory_displacement(), 0x100);
        assert_eq!(instr.memory_displ_size(), 4);
    });

    check(Bitness::Bit32, "8B 05 78 56 34 12", |instr| {
        assert_eq!(instr.memory_base(), None);
        assert_eq!(instr.memory_displacement(), 0x1234_5678);
        assert_eq!(instr.memory_displ_size(), 4);
    });
}

#[test]
fn sib() {
    check(Bitness::Bit32, "8B 04 24", |instr| {
        assert_eq!(instr.memory_base(), Some(RegSpec::esp()));
        assert_eq!(instr.memory_index(), None);
        assert_eq!(instr.memory_index_scale(), 1);
        assert_eq!(instr.memory_segment(), Some(RegSpec::ss()));
    });

    check(Bitness::Bit32, "8B 04 8D 00 10 00 00", |instr| {
        assert_eq!(instr.memory_base(), None);
        assert_eq!(instr.memory_index(), Some(RegSpec::ecx()));
        assert_eq!(instr.memory_index_scale(), 4);
        assert_eq!(instr.memory_displacement(), 0x1000);
        assert_eq!(instr.memory_displ_size(), 4);
    });

    check(Bitness::Bit64, "8B 44 CB 08", |instr| {
        assert_eq!(instr.memory_base(), Some(RegSpec::rbx()));
        assert_eq!(instr.memory_index(), Some(RegSpec::rcx()));
        assert_eq!(instr.memory_index_scale(), 8);
        assert_eq!(instr.memory_displacement(), 8);
        assert_eq!(instr.memory_displ_size(), 1);
    });

    check(Bitness::Bit64, "8B 04 25 00 10 00 00", |instr| {
        assert_eq!(instr.memory_base(), None);
        assert_eq!(instr.memory_index(), None);
        assert_eq!(instr.memory_displacement(), 0x1000);
        assert_eq!(instr.memory_displ_size(), 8);
    });
}

#[test]
fn rex_reaches_index_and_base() {
    // REX.X turns the "no index" encoding into r12
    check(Bitness::Bit64, "42 8B 04 20", |instr| {
        assert_eq!(instr.memory_base(), Some(RegSpec::rax()));
        assert_eq!(instr.memory_index(), Some(RegSpec::r12()));
    });

    // r13 needs a displacement but isn't a frame register
    check(Bitness::Bit64, "41 8B 45 00", |instr| {
        assert_eq!(instr.memory_base(), Some(RegSpec::r13()));
        assert_eq!(instr.memory_segment(), Some(RegSpec::ds()));
        assert_eq!(instr.memory_displ_size(), 1);
    });
}

#[test]
fn addressing_64() {
    check(Bitness::Bit64, "8B 40 F0", |instr| {
        assert_eq!(instr.memory_base(), Some(RegSpec::rax()));
        assert_eq!(instr.memory_displacement(), (-0x10i64) as u64);
        assert_eq!(instr.memory_displ_size(), 1);
    });

    check(Bitness::Bit64, "8B 80 00 01 00 00", |instr| {
        assert_eq!(instr.memory_displacement(), 0x100);
        assert_eq!(instr.memory_displ_size(), 8);
    });

    check(Bitness::Bit64, "8B 44 24 08", |instr| {
        assert_eq!(instr.memory_base(), Some(RegSpec::rsp()));
        assert_eq!(instr.memory_segment(), Some(RegSpec::ss()));
    });

    check(Bitness::Bit64, "2E 8B 45 00", |instr| {
        assert_eq!(instr.memory_base(), Some(RegSpec::rbp()));
        assert_eq!(instr.memory_segment(), Some(RegSpec::cs()));
    });
}

#[test]
fn rip_relative() {
    let decoder = Decoder::new(Bitness::Bit64).with_ip(0x1000);

    check_with(decoder, "8B 05 10 00 00 00", |instr| {
        assert_eq!(instr.memory_base(), Some(RegSpec::rip()));
        assert_eq!(instr.memory_index(), None);
        assert_eq!(instr.memory_displacement(), 0x1016);
        assert_eq!(instr.memory_displ_size(), 8);
    });

    check_with(decoder, "67 8B 05 F0 FF FF FF", |instr| {
        assert_eq!(instr.memory_base(), Some(RegSpec::eip()));
        assert_eq!(instr.memory_displacement(), 0xff7);
        assert_eq!(instr.memory_displ_size(), 4);
    });

    // the immediate comes after the displacement but still counts towards the next ip
    check_with(decoder, "C7 05 10 00 00 00 01 00 00 00", |instr| {
        assert_eq!(instr.code(), Code::Mov_Ed_Id);
        assert_eq!(instr.memory_displacement(), 0x101a);
        assert_eq!(instr.immediate32(), Some(1));
    });

    // there is no rip outside long mode
    check(Bitness::Bit32, "8B 05 10 00 00 00", |instr| {
        assert_eq!(instr.memory_base(), None);
        assert_eq!(instr.memory_displacement(), 0x10);
    });
}

#[test]
fn memory_only_operands() {
    check(Bitness::Bit64, "48 8D 04 08", |instr| {
        assert_eq!(instr.code(), Code::Lea_Gq_M);
        assert_eq!(instr.op_register(0), Some(RegSpec::rax()));
        assert_eq!(instr.memory_index(), Some(RegSpec::rcx()));
    });

    super::test_invalid("8D C0");
}

#[test]
fn xlat() {
    check(Bitness::Bit64, "D7", |instr| {
        assert_eq!(instr.code(), Code::Xlatb);
        assert_eq!(instr.op_kind(0), OpKind::Memory);
        assert_eq!(instr.memory_base(), Some(RegSpec::rbx()));
        assert_eq!(instr.memory_index(), Some(RegSpec::al()));
        assert_eq!(instr.memory_size(), MemorySize::UInt8);
    });

    check(Bitness::Bit16, "D7", |instr| {
        assert_eq!(instr.memory_base(), Some(RegSpec::bx()));
    });

    check(Bitness::Bit32, "26 D7", |instr| {
        assert_eq!(instr.memory_base(), Some(RegSpec::ebx()));
        assert_eq!(instr.memory_segment(), Some(RegSpec::es()));
    });
}

#[test]
fn displacement_offsets() {
    check(Bitness::Bit64, "81 44 24 08 78 56 34 12", |instr| {
        assert_eq!(instr.code(), Code::Add_Ed_Id);
        let offsets = instr.constant_offsets();
        assert_eq!(offsets.displacement_offset, 3);
        assert_eq!(offsets.displacement_size, 1);
        assert_eq!(offsets.immediate_offset, 4);
        assert_eq!(offsets.immediate_size, 4);
        assert!(offsets.has_displacement() && offsets.has_immediate());
    });
}
