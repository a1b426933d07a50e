use super::{check, check_all, check_with, test_invalid_under, ALL_MODES};
use crate::{Bitness, Code, Decoder, DecoderOptions, MemorySize, OpKind, Operand, RegSpec};

#[test]
fn mov_al_moffs_16() {
    check(Bitness::Bit16, "A0 12 34", |instr| {
        assert_eq!(instr.code(), Code::Mov_AL_Ob);
        assert_eq!(instr.op_count(), 2);
        assert_eq!(instr.len(), 3);
        assert_eq!(instr.op_kind(0), OpKind::Register);
        assert_eq!(instr.op_register(0), Some(RegSpec::al()));
        assert_eq!(instr.op_kind(1), OpKind::Memory);
        assert_eq!(instr.memory_segment(), Some(RegSpec::ds()));
        assert_eq!(instr.memory_displacement(), 0x3412);
        assert_eq!(instr.memory_displ_size(), 2);
        assert_eq!(instr.memory_size(), MemorySize::UInt8);
    });
}

#[test]
fn mov_r64_imm64() {
    check(Bitness::Bit64, "48 B8 04 15 26 37 5A A5 12 34", |instr| {
        assert_eq!(instr.code(), Code::Mov_r64_imm64);
        assert_eq!(instr.op_register(0), Some(RegSpec::rax()));
        assert_eq!(instr.op_kind(1), OpKind::Immediate64);
        assert_eq!(instr.immediate64(), Some(0x3412_a55a_3726_1504));
        assert_eq!(instr.len(), 10);
    });
}

#[test]
fn movsb_64() {
    check(Bitness::Bit64, "A4", |instr| {
        assert_eq!(instr.code(), Code::Movsb_Yb_Xb);
        assert_eq!(instr.op_kind(0), OpKind::MemoryESRDI);
        assert_eq!(instr.op_kind(1), OpKind::MemorySegRSI);
        assert_eq!(instr.memory_size(), MemorySize::UInt8);
    });
}

#[test]
fn moffs_rows() {
    check(Bitness::Bit16, "A1 34 12", |instr| {
        assert_eq!(instr.code(), Code::Mov_AX_Ow);
        assert_eq!(instr.op_register(0), Some(RegSpec::ax()));
        assert_eq!(instr.memory_displacement(), 0x1234);
        assert_eq!(instr.memory_displ_size(), 2);
        assert_eq!(instr.memory_size(), MemorySize::UInt16);
    });

    check(Bitness::Bit16, "66 A1 34 12", |instr| {
        assert_eq!(instr.code(), Code::Mov_EAX_Od);
        assert_eq!(instr.memory_displ_size(), 2);
    });

    check(Bitness::Bit32, "A1 78 56 34 12", |instr| {
        assert_eq!(instr.code(), Code::Mov_EAX_Od);
        assert_eq!(instr.op_register(0), Some(RegSpec::eax()));
        assert_eq!(instr.memory_displacement(), 0x1234_5678);
        assert_eq!(instr.memory_displ_size(), 4);
    });

    check(Bitness::Bit32, "67 A0 34 12", |instr| {
        assert_eq!(instr.code(), Code::Mov_AL_Ob);
        assert_eq!(instr.memory_displ_size(), 2);
    });

    check(Bitness::Bit64, "48 A1 F0 DE BC 9A 78 56 34 12", |instr| {
        assert_eq!(instr.code(), Code::Mov_RAX_Oq);
        assert_eq!(instr.op_kind(1), OpKind::Memory64);
        assert_eq!(instr.memory_address64(), Some(0x1234_5678_9abc_def0));
        assert_eq!(instr.memory_displacement(), 0x1234_5678_9abc_def0);
        assert_eq!(instr.memory_displ_size(), 8);
        assert_eq!(instr.memory_size(), MemorySize::UInt64);
    });

    check(Bitness::Bit64, "67 A0 78 56 34 12", |instr| {
        assert_eq!(instr.op_kind(1), OpKind::Memory);
        assert_eq!(instr.memory_displ_size(), 4);
        assert_eq!(instr.memory_address64(), None);
    });

    check(Bitness::Bit16, "A2 34 12", |instr| {
        assert_eq!(instr.code(), Code::Mov_Ob_AL);
        assert_eq!(instr.op_kind(0), OpKind::Memory);
        assert_eq!(instr.op_register(1), Some(RegSpec::al()));
    });

    check(Bitness::Bit32, "A3 78 56 34 12", |instr| {
        assert_eq!(instr.code(), Code::Mov_Od_EAX);
        assert_eq!(instr.op_register(1), Some(RegSpec::eax()));
    });

    check(Bitness::Bit32, "66 A3 78 56 34 12", |instr| {
        assert_eq!(instr.code(), Code::Mov_Ow_AX);
    });

    check(Bitness::Bit64, "48 A3 00 00 00 00 00 00 00 80", |instr| {
        assert_eq!(instr.code(), Code::Mov_Oq_RAX);
        assert_eq!(instr.op_kind(0), OpKind::Memory64);
        assert_eq!(instr.memory_address64(), Some(0x8000_0000_0000_0000));
    });
}

#[test]
fn string_rows() {
    check(Bitness::Bit16, "A4", |instr| {
        assert_eq!(instr.op_kind(0), OpKind::MemoryESDI);
        assert_eq!(instr.op_kind(1), OpKind::MemorySegSI);
    });

    check(Bitness::Bit32, "A4", |instr| {
        assert_eq!(instr.op_kind(0), OpKind::MemoryESEDI);
        assert_eq!(instr.op_kind(1), OpKind::MemorySegESI);
    });

    check(Bitness::Bit64, "67 A4", |instr| {
        assert_eq!(instr.op_kind(0), OpKind::MemoryESEDI);
        assert_eq!(instr.op_kind(1), OpKind::MemorySegESI);
    });

    let movs = [
        (Bitness::Bit16, "A5", Code::Movsw_Yw_Xw, MemorySize::UInt16),
        (Bitness::Bit32, "A5", Code::Movsd_Yd_Xd, MemorySize::UInt32),
        (Bitness::Bit64, "A5", Code::Movsd_Yd_Xd, MemorySize::UInt32),
        (Bitness::Bit64, "66 A5", Code::Movsw_Yw_Xw, MemorySize::UInt16),
        (Bitness::Bit64, "48 A5", Code::Movsq_Yq_Xq, MemorySize::UInt64),
    ];
    for (bitness, hex, code, size) in movs {
        check(bitness, hex, |instr| {
            assert_eq!(instr.code(), code, "{hex} under {bitness:?}");
            assert_eq!(instr.memory_size(), size, "{hex} under {bitness:?}");
        });
    }

    check(Bitness::Bit64, "A6", |instr| {
        assert_eq!(instr.code(), Code::Cmpsb_Xb_Yb);
        // source first, so the override-able operand is the one reported
        assert_eq!(instr.op_kind(0), OpKind::MemorySegRSI);
        assert_eq!(instr.op_kind(1), OpKind::MemoryESRDI);
        assert_eq!(instr.memory_segment(), Some(RegSpec::ds()));
    });

    check(Bitness::Bit16, "A7", |instr| assert_eq!(instr.code(), Code::Cmpsw_Xw_Yw));
    check(Bitness::Bit32, "A7", |instr| assert_eq!(instr.code(), Code::Cmpsd_Xd_Yd));
    check(Bitness::Bit64, "48 A7", |instr| assert_eq!(instr.code(), Code::Cmpsq_Xq_Yq));
}

#[test]
fn sign_extended_immediates() {
    check(Bitness::Bit16, "83 C0 FF", |instr| {
        assert_eq!(instr.code(), Code::Add_Ew_Ib16);
        assert_eq!(instr.operand(1), Operand::Immediate8to16(-1));
        assert_eq!(instr.immediate(1), Some(0xffff));
    });

    check(Bitness::Bit32, "83 C0 FF", |instr| {
        assert_eq!(instr.code(), Code::Add_Ed_Ib32);
        assert_eq!(instr.immediate(1), Some(0xffff_ffff));
    });

    check(Bitness::Bit64, "48 83 C0 FF", |instr| {
        assert_eq!(instr.code(), Code::Add_Eq_Ib64);
        assert_eq!(instr.op_kind(1), OpKind::Immediate8to64);
        assert_eq!(instr.immediate(1), Some(u64::MAX));
    });

    check(Bitness::Bit64, "48 05 00 00 00 80", |instr| {
        assert_eq!(instr.code(), Code::Add_RAX_Id64);
        assert_eq!(instr.operand(1), Operand::Immediate32to64(-0x8000_0000));
    });

    check(Bitness::Bit64, "6A F0", |instr| {
        assert_eq!(instr.code(), Code::Push_Ib64);
        assert_eq!(instr.operand(0), Operand::Immediate8to64(-0x10));
    });
}

#[test]
fn plain_immediates() {
    check(Bitness::Bit32, "B8 78 56 34 12", |instr| {
        assert_eq!(instr.code(), Code::Mov_r32_imm32);
        assert_eq!(instr.immediate32(), Some(0x1234_5678));
    });

    check(Bitness::Bit32, "66 B8 34 12", |instr| {
        assert_eq!(instr.code(), Code::Mov_r16_imm16);
        assert_eq!(instr.immediate16(), Some(0x1234));
    });

    check(Bitness::Bit64, "41 B4 7F", |instr| {
        assert_eq!(instr.code(), Code::Mov_r8_imm8);
        assert_eq!(instr.op_register(0), Some(RegSpec::r12b()));
        assert_eq!(instr.immediate8(), Some(0x7f));
    });

    check(Bitness::Bit64, "C8 10 00 02", |instr| {
        assert_eq!(instr.code(), Code::Enterq_Iw_Ib);
        assert_eq!(instr.immediate16(), Some(0x10));
        assert_eq!(instr.immediate8_2nd(), Some(2));

        let offsets = instr.constant_offsets();
        assert_eq!((offsets.immediate_offset, offsets.immediate_size), (1, 2));
        assert_eq!((offsets.immediate_offset2, offsets.immediate_size2), (3, 1));
    });

    check(Bitness::Bit32, "CD 80", |instr| {
        assert_eq!(instr.code(), Code::Int_Ib);
        assert_eq!(instr.immediate8(), Some(0x80));
    });
}

#[test]
fn near_branches() {
    let at = |bitness| Decoder::new(bitness).with_ip(0x1000);

    check_with(at(Bitness::Bit64), "EB FE", |instr| {
        assert_eq!(instr.code(), Code::Jmp_Jb64);
        assert_eq!(instr.operand(0), Operand::NearBranch64(0x1000));
        assert_eq!(instr.near_branch_target(), Some(0x1000));
    });

    check_with(at(Bitness::Bit32), "EB 10", |instr| {
        assert_eq!(instr.code(), Code::Jmp_Jb32);
        assert_eq!(instr.operand(0), Operand::NearBranch32(0x1012));
    });

    check_with(at(Bitness::Bit16), "E8 FD FF", |instr| {
        assert_eq!(instr.code(), Code::Call_Jw16);
        assert_eq!(instr.operand(0), Operand::NearBranch16(0x1000));
    });

    check_with(at(Bitness::Bit64), "E8 00 00 00 00", |instr| {
        assert_eq!(instr.code(), Code::Call_Jd64);
        assert_eq!(instr.near_branch_target(), Some(0x1005));
        assert_eq!(instr.next_ip(), 0x1005);
    });

    check_with(at(Bitness::Bit64), "0F 84 F0 FF FF FF", |instr| {
        assert_eq!(instr.code(), Code::Je_Jd64);
        assert_eq!(instr.near_branch_target(), Some(0xff6));
    });

    check_with(at(Bitness::Bit64), "70 00", |instr| {
        assert_eq!(instr.code(), Code::Jo_Jb64);
    });
}

#[test]
fn operand_size_prefix_on_long_mode_branches() {
    // intel ignores 66 on near branches in long mode
    check(Bitness::Bit64, "66 E8 10 00 00 00", |instr| {
        assert_eq!(instr.code(), Code::Call_Jd64);
        assert_eq!(instr.near_branch_target(), Some(0x16));
    });

    let amd = Decoder::new(Bitness::Bit64).with_options(DecoderOptions::AMD);
    check_with(amd, "66 E8 10 00", |instr| {
        assert_eq!(instr.code(), Code::Call_Jw16);
        assert_eq!(instr.operand(0), Operand::NearBranch16(0x14));
    });
}

#[test]
fn loops() {
    let rows = [
        (Bitness::Bit16, "E2 FE", Code::Loop_Jb16_CX),
        (Bitness::Bit16, "67 E2 FE", Code::Loop_Jb16_ECX),
        (Bitness::Bit32, "E2 FE", Code::Loop_Jb32_ECX),
        (Bitness::Bit32, "67 E2 FE", Code::Loop_Jb32_CX),
        (Bitness::Bit64, "E2 FE", Code::Loop_Jb64_RCX),
        (Bitness::Bit64, "67 E2 FE", Code::Loop_Jb64_ECX),
        (Bitness::Bit64, "E3 00", Code::Jrcxz_Jb64),
        (Bitness::Bit32, "E3 00", Code::Jecxz_Jb32),
        (Bitness::Bit16, "E0 00", Code::Loopne_Jb16_CX),
        (Bitness::Bit64, "E1 00", Code::Loope_Jb64_RCX),
    ];
    for (bitness, hex, code) in rows {
        check(bitness, hex, |instr| {
            assert_eq!(instr.code(), code, "{hex} under {bitness:?}");
        });
    }
}

#[test]
fn far_branches() {
    check(Bitness::Bit32, "EA 78 56 34 12 00 10", |instr| {
        assert_eq!(instr.code(), Code::Jmp_Adw);
        assert_eq!(
            instr.operand(0),
            Operand::FarBranch32 { selector: 0x1000, offset: 0x1234_5678 }
        );
        assert_eq!(instr.far_branch_selector(), Some(0x1000));
    });

    check(Bitness::Bit16, "9A 34 12 00 20", |instr| {
        assert_eq!(instr.code(), Code::Call_Aww);
        assert_eq!(instr.operand(0), Operand::FarBranch16 { selector: 0x2000, offset: 0x1234 });
    });

    test_invalid_under(Decoder::new(Bitness::Bit64), "EA 78 56 34 12 00 10");

    check(Bitness::Bit32, "FF 28", |instr| {
        assert_eq!(instr.code(), Code::Jmp_m1632);
        assert_eq!(instr.memory_size(), MemorySize::SegPtr32);
    });
}

#[test]
fn nop_pause_xchg() {
    check(Bitness::Bit16, "90", |instr| assert_eq!(instr.code(), Code::Nopw));
    check(Bitness::Bit32, "90", |instr| assert_eq!(instr.code(), Code::Nopd));
    check(Bitness::Bit64, "90", |instr| assert_eq!(instr.code(), Code::Nopd));
    check(Bitness::Bit64, "48 90", |instr| assert_eq!(instr.code(), Code::Nopq));

    check(Bitness::Bit64, "41 90", |instr| {
        assert_eq!(instr.code(), Code::Xchg_r32_EAX);
        assert_eq!(instr.op_register(0), Some(RegSpec::r8d()));
        assert_eq!(instr.op_register(1), Some(RegSpec::eax()));
    });

    check(Bitness::Bit32, "93", |instr| {
        assert_eq!(instr.code(), Code::Xchg_r32_EAX);
        assert_eq!(instr.op_register(0), Some(RegSpec::ebx()));
    });
}

#[test]
fn stack_operations() {
    check(Bitness::Bit64, "50", |instr| {
        assert_eq!(instr.code(), Code::Push_r64);
        assert_eq!(instr.op_register(0), Some(RegSpec::rax()));
    });
    check(Bitness::Bit64, "66 50", |instr| {
        assert_eq!(instr.code(), Code::Push_r16);
        assert_eq!(instr.op_register(0), Some(RegSpec::ax()));
    });
    check(Bitness::Bit32, "5F", |instr| {
        assert_eq!(instr.code(), Code::Pop_r32);
        assert_eq!(instr.op_register(0), Some(RegSpec::edi()));
    });

    check(Bitness::Bit64, "0F A0", |instr| {
        assert_eq!(instr.code(), Code::Pushq_FS);
        assert_eq!(instr.op_register(0), Some(RegSpec::fs()));
    });
    check(Bitness::Bit32, "06", |instr| {
        assert_eq!(instr.code(), Code::Pushd_ES);
        assert_eq!(instr.op_register(0), Some(RegSpec::es()));
    });
    test_invalid_under(Decoder::new(Bitness::Bit64), "06");

    check(Bitness::Bit64, "C3", |instr| assert_eq!(instr.code(), Code::Retnq));
    check(Bitness::Bit32, "C2 08 00", |instr| {
        assert_eq!(instr.code(), Code::Retnd_Iw);
        assert_eq!(instr.immediate16(), Some(8));
    });
    check(Bitness::Bit64, "9C", |instr| assert_eq!(instr.code(), Code::Pushfq));
    check(Bitness::Bit16, "60", |instr| assert_eq!(instr.code(), Code::Pushaw));
    test_invalid_under(Decoder::new(Bitness::Bit64), "60");
}

#[test]
fn mode_dependent_one_byte_opcodes() {
    check(Bitness::Bit32, "82 C0 01", |instr| {
        assert_eq!(instr.code(), Code::Add_Eb_Ib);
        assert_eq!(instr.op_register(0), Some(RegSpec::al()));
    });
    test_invalid_under(Decoder::new(Bitness::Bit64), "82 C0 01");

    check(Bitness::Bit32, "63 C8", |instr| {
        assert_eq!(instr.code(), Code::Arpl_Ew_Gw);
        assert_eq!(instr.op_register(0), Some(RegSpec::ax()));
        assert_eq!(instr.op_register(1), Some(RegSpec::cx()));
    });
    check(Bitness::Bit64, "48 63 C8", |instr| {
        assert_eq!(instr.code(), Code::Movsxd_Gq_Ed);
        assert_eq!(instr.op_register(0), Some(RegSpec::rcx()));
        assert_eq!(instr.op_register(1), Some(RegSpec::eax()));
    });

    for hex in ["27", "2F", "37", "3F", "D4 0A", "D5 0A", "CE"] {
        test_invalid_under(Decoder::new(Bitness::Bit64), hex);
        check(Bitness::Bit32, hex, |_| {});
    }
}

#[test]
fn vex_escapes_fall_back_outside_long_mode() {
    check(Bitness::Bit32, "C4 00", |instr| {
        assert_eq!(instr.code(), Code::Les_Gd_Mp);
        assert_eq!(instr.memory_size(), MemorySize::SegPtr32);
    });
    check(Bitness::Bit16, "C5 00", |instr| {
        assert_eq!(instr.code(), Code::Lds_Gw_Mp);
        assert_eq!(instr.memory_size(), MemorySize::SegPtr16);
    });
    check(Bitness::Bit32, "62 00", |instr| {
        assert_eq!(instr.code(), Code::Bound_Gd_Md2);
        assert_eq!(instr.memory_size(), MemorySize::Bound32_DwordDword);
    });
}

#[test]
fn groups() {
    check(Bitness::Bit64, "FF D0", |instr| {
        assert_eq!(instr.code(), Code::Call_Eq);
        assert_eq!(instr.op_register(0), Some(RegSpec::rax()));
    });
    check(Bitness::Bit64, "FF 30", |instr| {
        assert_eq!(instr.code(), Code::Push_Eq);
        assert_eq!(instr.memory_size(), MemorySize::UInt64);
    });
    check(Bitness::Bit32, "F7 D8", |instr| {
        assert_eq!(instr.code(), Code::Neg_Ed);
        assert_eq!(instr.op_register(0), Some(RegSpec::eax()));
    });
    check(Bitness::Bit32, "F6 C1 0F", |instr| {
        assert_eq!(instr.code(), Code::Test_Eb_Ib);
        assert_eq!(instr.immediate8(), Some(0x0f));
    });
    check(Bitness::Bit64, "D1 E0", |instr| {
        assert_eq!(instr.code(), Code::Shl_Ed_1);
        assert_eq!(instr.immediate(1), Some(1));
    });
    check(Bitness::Bit64, "48 D3 F8", |instr| {
        assert_eq!(instr.code(), Code::Sar_Eq_CL);
        assert_eq!(instr.op_register(1), Some(RegSpec::cl()));
    });
    check(Bitness::Bit16, "C6 07 05", |instr| {
        assert_eq!(instr.code(), Code::Mov_Eb_Ib);
        assert_eq!(instr.memory_base(), Some(RegSpec::bx()));
    });

    // reserved group slots
    super::test_invalid("FE 10");
    super::test_invalid("FF F8");
    super::test_invalid("C6 C8 00");
}

#[test]
fn segment_register_moves() {
    check(Bitness::Bit32, "8E D8", |instr| {
        assert_eq!(instr.code(), Code::Mov_Sw_Ed);
        assert_eq!(instr.op_register(0), Some(RegSpec::ds()));
        assert_eq!(instr.op_register(1), Some(RegSpec::eax()));
    });
    check(Bitness::Bit64, "8C 18", |instr| {
        assert_eq!(instr.code(), Code::Mov_Ed_Sw);
        assert_eq!(instr.memory_size(), MemorySize::UInt16);
        assert_eq!(instr.op_register(1), Some(RegSpec::ds()));
    });

    // cs can't be loaded, and there's no seventh segment register
    super::test_invalid("8E C8");
    super::test_invalid("8C F0");
}

#[test]
fn ports() {
    check_all("E4 60", |instr| {
        assert_eq!(instr.code(), Code::In_AL_Ib);
        assert_eq!(instr.immediate8(), Some(0x60));
    });
    check(Bitness::Bit64, "EF", |instr| {
        assert_eq!(instr.code(), Code::Out_DX_EAX);
        assert_eq!(instr.op_register(0), Some(RegSpec::dx()));
        assert_eq!(instr.op_register(1), Some(RegSpec::eax()));
    });
    check(Bitness::Bit32, "6D", |instr| {
        assert_eq!(instr.code(), Code::Insd_Yd_DX);
        assert_eq!(instr.op_kind(0), OpKind::MemoryESEDI);
    });
}

#[test]
fn x87() {
    check_all("D9 EE", |instr| assert_eq!(instr.code(), Code::Fldz));
    check_all("D9 E8", |instr| assert_eq!(instr.code(), Code::Fld1));
    check_all("DB E3", |instr| assert_eq!(instr.code(), Code::Fninit));
    check_all("D9 C9", |instr| {
        assert_eq!(instr.code(), Code::Fxch_ST_STi);
        assert_eq!(instr.op_register(0), Some(RegSpec::st0()));
        assert_eq!(instr.op_register(1), Some(RegSpec::st(1)));
    });
    check_all("DF E0", |instr| {
        assert_eq!(instr.code(), Code::Fnstsw_AX);
        assert_eq!(instr.op_register(0), Some(RegSpec::ax()));
    });
    check(Bitness::Bit64, "D9 00", |instr| {
        assert_eq!(instr.code(), Code::Fld_Mf32);
        assert_eq!(instr.memory_size(), MemorySize::Float32);
    });
    check(Bitness::Bit32, "D9 30", |instr| {
        assert_eq!(instr.code(), Code::Fnstenv_M28);
        assert_eq!(instr.memory_size(), MemorySize::FpuEnv28);
    });
    check(Bitness::Bit16, "D9 30", |instr| {
        assert_eq!(instr.code(), Code::Fnstenv_M14);
    });

    test_invalid_under(Decoder::new(Bitness::Bit64), "D9 D1");
}

#[test]
fn flags_and_misc() {
    let rows = [
        ("F4", Code::Hlt),
        ("F5", Code::Cmc),
        ("F8", Code::Clc),
        ("F9", Code::Stc),
        ("FA", Code::Cli),
        ("FB", Code::Sti),
        ("FC", Code::Cld),
        ("FD", Code::Std),
        ("9E", Code::Sahf),
        ("9F", Code::Lahf),
        ("CC", Code::Int3),
        ("F1", Code::Int1),
        ("9B", Code::Wait),
    ];
    for bitness in ALL_MODES {
        for (hex, code) in rows {
            check(bitness, hex, |instr| {
                assert_eq!(instr.code(), code, "{hex} under {bitness:?}");
                assert_eq!(instr.op_count(), 0);
            });
        }
    }

    check(Bitness::Bit16, "98", |instr| assert_eq!(instr.code(), Code::Cbw));
    check(Bitness::Bit32, "98", |instr| assert_eq!(instr.code(), Code::Cwde));
    check(Bitness::Bit64, "48 98", |instr| assert_eq!(instr.code(), Code::Cdqe));
    check(Bitness::Bit64, "48 99", |instr| assert_eq!(instr.code(), Code::Cqo));
}
