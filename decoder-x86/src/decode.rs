//! The per-instruction state machine: prefixes, table walk, operands.

use decoder::{ErrorKind, Reader};

use crate::code::Code;
use crate::instruction::{ConstantOffsets, Instruction};
use crate::map0f::{self, MAP_0F, MAP_0F38, MAP_0F3A};
use crate::memory::MemorySize;
use crate::modrm::read_M;
use crate::operand::{MemoryOperand, Operand};
use crate::prefixes::{Mandatory, Prefixes};
use crate::register::{RegSpec, RegisterBank};
use crate::tables::{Interpretation, OpcodeRecord, OperandCode, SizePolicy, OPCODES};
use crate::{evex, vex, Bitness, Decoder, DecoderOptions};

pub(crate) const MAX_LENGTH: usize = 15;

/// Everything learned about an instruction while it's being decoded. Discarded afterwards.
#[derive(Debug)]
pub(crate) struct State {
    pub(crate) bitness: Bitness,
    pub(crate) options: DecoderOptions,
    pub(crate) ip: u64,
    pub(crate) prefixes: Prefixes,
    /// Last opcode byte read.
    pub(crate) opcode: u8,
    /// 2, 4 or 8 bytes.
    pub(crate) operand_size: u8,
    pub(crate) address_size: u8,
    /// REX.W, or VEX/EVEX.W in long mode.
    pub(crate) w: bool,
    pub(crate) extra_reg: u8,
    pub(crate) extra_index: u8,
    pub(crate) extra_base: u8,
    /// EVEX.R', reaching registers 16 through 31 in ModRM.reg.
    pub(crate) extra_reg_evex: u8,
    /// EVEX.X, reaching registers 16 through 31 in a register ModRM.rm.
    pub(crate) extra_base_evex: u8,
    pub(crate) vvvv: u8,
    pub(crate) modrm: Option<u8>,
    /// EVEX compressed displacement multiplier, 1 otherwise.
    pub(crate) disp8_scale: u8,
    pub(crate) offsets: ConstantOffsets,
}

impl State {
    fn new(decoder: &Decoder, prefixes: Prefixes, opcode: u8, ip: u64) -> Self {
        let bitness = decoder.bitness;
        let rex = prefixes.rex();
        let w = bitness == Bitness::Bit64 && rex.w();

        let address_size = match (bitness, prefixes.address_size()) {
            (Bitness::Bit16, false) | (Bitness::Bit32, true) => 2,
            (Bitness::Bit16, true) | (Bitness::Bit32, false) | (Bitness::Bit64, true) => 4,
            (Bitness::Bit64, false) => 8,
        };

        let mut state = Self {
            bitness,
            options: decoder.options,
            ip,
            prefixes,
            opcode,
            operand_size: 0,
            address_size,
            w,
            extra_reg: if rex.r() { 8 } else { 0 },
            extra_index: if rex.x() { 8 } else { 0 },
            extra_base: if rex.b() { 8 } else { 0 },
            extra_reg_evex: 0,
            extra_base_evex: 0,
            vvvv: 0,
            modrm: None,
            disp8_scale: 1,
            offsets: ConstantOffsets::default(),
        };

        state.operand_size = state.default_operand_size(prefixes.operand_size());
        state
    }

    /// Operand size given whether a 66 prefix still counts as an operand size override.
    pub(crate) fn default_operand_size(&self, size_override: bool) -> u8 {
        if self.w {
            return 8;
        }

        match (self.bitness, size_override) {
            (Bitness::Bit16, false) | (Bitness::Bit32 | Bitness::Bit64, true) => 2,
            _ => 4,
        }
    }

    /// Width of the sized operands of a form, in bytes.
    pub(crate) fn width(&self, operands: OperandCode) -> u8 {
        let long = self.bitness == Bitness::Bit64;
        match operands.size_policy() {
            SizePolicy::Default => self.operand_size,
            SizePolicy::Stack if long => {
                if self.operand_size == 2 {
                    2
                } else {
                    8
                }
            }
            SizePolicy::Branch if long => {
                if self.options.contains(DecoderOptions::AMD) && self.operand_size == 2 {
                    2
                } else {
                    8
                }
            }
            SizePolicy::Stack | SizePolicy::Branch => self.operand_size,
            SizePolicy::Y => {
                if self.w {
                    8
                } else {
                    4
                }
            }
            SizePolicy::Z => self.operand_size.min(4),
            SizePolicy::Native if long => 8,
            SizePolicy::Native => self.operand_size,
        }
    }

    /// The ModRM byte, read on first use.
    pub(crate) fn modrm(&mut self, words: &mut Reader) -> Result<u8, ErrorKind> {
        if let Some(modrm) = self.modrm {
            return Ok(modrm);
        }

        let modrm = words.read_u8()?;
        self.modrm = Some(modrm);
        Ok(modrm)
    }

    pub(crate) fn gpr(&self, num: u8, width: u8) -> RegSpec {
        RegSpec::gpr(num, width, self.prefixes.rex().present())
    }

    #[inline]
    pub(crate) fn reg_field(&self, modrm: u8) -> u8 {
        ((modrm >> 3) & 7) | self.extra_reg
    }

    #[inline]
    pub(crate) fn rm_field(&self, modrm: u8) -> u8 {
        (modrm & 7) | self.extra_base
    }

    pub(crate) fn segment_or_ds(&self) -> RegSpec {
        self.prefixes.segment().unwrap_or(RegSpec::ds())
    }

    /// Records where an immediate starts, the first one wins the primary slot.
    fn immediate_at(&mut self, offset: usize, size: u8) {
        if self.offsets.immediate_size == 0 {
            self.offsets.immediate_offset = offset as u8;
            self.offsets.immediate_size = size;
        } else {
            self.offsets.immediate_offset2 = offset as u8;
            self.offsets.immediate_size2 = size;
        }
    }

    pub(crate) fn read_imm8(&mut self, words: &mut Reader) -> Result<u8, ErrorKind> {
        self.immediate_at(words.offset(), 1);
        words.read_u8()
    }

    fn read_imm16(&mut self, words: &mut Reader) -> Result<u16, ErrorKind> {
        self.immediate_at(words.offset(), 2);
        words.read_u16()
    }

    fn read_imm32(&mut self, words: &mut Reader) -> Result<u32, ErrorKind> {
        self.immediate_at(words.offset(), 4);
        words.read_u32()
    }

    fn read_imm64(&mut self, words: &mut Reader) -> Result<u64, ErrorKind> {
        self.immediate_at(words.offset(), 8);
        words.read_u64()
    }
}

/// What the table walk ended on.
enum Resolved {
    Legacy {
        code: Code,
        operands: OperandCode,
        mem: MemorySize,
        width: u8,
    },
    /// A VEX/EVEX form, already written into the instruction.
    Vector,
}

const fn sized_index(width: u8) -> usize {
    match width {
        2 => 0,
        4 => 1,
        _ => 2,
    }
}

/// Scalar integer memory size of a GPR sized access.
pub(crate) const fn int_size(width: u8) -> MemorySize {
    match width {
        1 => MemorySize::UInt8,
        2 => MemorySize::UInt16,
        4 => MemorySize::UInt32,
        _ => MemorySize::UInt64,
    }
}

const fn or_int(mem: MemorySize, width: u8) -> MemorySize {
    match mem {
        MemorySize::Unknown => int_size(width),
        mem => mem,
    }
}

pub(crate) fn read_instruction(
    decoder: &Decoder,
    words: &mut Reader,
) -> Result<Instruction, ErrorKind> {
    let ip = decoder.ip.wrapping_add(words.total_offset() as u64);
    words.mark();

    let (prefixes, opcode) = Prefixes::scan(words, decoder.bitness)?;
    let mut state = State::new(decoder, prefixes, opcode, ip);
    let mut instr = Instruction::default();
    instr.ip = ip;

    match resolve(words, &mut state, &mut instr, OPCODES[opcode as usize])? {
        Resolved::Legacy {
            code,
            operands,
            mem,
            width,
        } => {
            instr.code = code;
            read_operands(words, &mut state, &mut instr, operands, mem, width)?;
        }
        Resolved::Vector => {}
    }

    let length = words.offset();
    if length > MAX_LENGTH {
        return Err(ErrorKind::TooLong);
    }

    instr.length = length as u8;
    instr.prefixes = state.prefixes;
    instr.offsets = state.offsets;
    instr.resolve_ip_relative();

    if state.prefixes.lock()
        && !state.options.contains(DecoderOptions::NO_INVALID_CHECK)
        && !(instr.code.is_lockable() && instr.operands[0].is_memory())
    {
        return Err(ErrorKind::InvalidPrefixes);
    }

    Ok(instr)
}

/// Follow nested records until one names an instruction.
fn resolve(
    words: &mut Reader,
    state: &mut State,
    instr: &mut Instruction,
    mut record: OpcodeRecord,
) -> Result<Resolved, ErrorKind> {
    loop {
        let OpcodeRecord(interpretation, operands, mem) = record;

        record = match interpretation {
            Interpretation::Invalid | Interpretation::Prefix => {
                return Err(ErrorKind::InvalidOpcode);
            }
            Interpretation::Instruction(code) => {
                let width = state.width(operands);
                return Ok(Resolved::Legacy { code, operands, mem, width });
            }
            Interpretation::Sized(codes) => {
                let width = state.width(operands);
                let code = codes[sized_index(width)];
                return Ok(Resolved::Legacy { code, operands, mem, width });
            }
            Interpretation::Loop(codes) => {
                let (idx, width) = if state.bitness == Bitness::Bit64 {
                    (if state.address_size == 4 { 4 } else { 5 }, 8)
                } else {
                    let idx = (state.address_size == 4) as usize * 2
                        + (state.operand_size == 4) as usize;
                    (idx, state.operand_size)
                };
                return Ok(Resolved::Legacy { code: codes[idx], operands, mem, width });
            }
            Interpretation::Group(table) => {
                let modrm = state.modrm(words)?;
                table[((modrm >> 3) & 7) as usize]
            }
            Interpretation::RmGroup(table) => {
                let modrm = state.modrm(words)?;
                table[(modrm & 7) as usize]
            }
            Interpretation::RegMem { mem, reg } => {
                if state.modrm(words)? >= 0b1100_0000 {
                    *reg
                } else {
                    *mem
                }
            }
            Interpretation::Mandatory(columns) => {
                let mandatory = state.prefixes.mandatory();
                match mandatory {
                    Mandatory::None => {}
                    Mandatory::P66 => state.operand_size = state.default_operand_size(false),
                    Mandatory::F3 => state.prefixes.clear_rep(),
                    Mandatory::F2 => state.prefixes.clear_repne(),
                }
                columns[mandatory.column()]
            }
            Interpretation::Rep(columns) => match state.prefixes.mandatory() {
                Mandatory::F3 => {
                    state.prefixes.clear_rep();
                    columns[1]
                }
                Mandatory::F2 => {
                    state.prefixes.clear_repne();
                    columns[2]
                }
                Mandatory::None | Mandatory::P66 => columns[0],
            },
            Interpretation::Mode { legacy, long } => {
                if state.bitness == Bitness::Bit64 {
                    *long
                } else {
                    *legacy
                }
            }
            Interpretation::Nop(xchg) => {
                if state.prefixes.rex().b() {
                    *xchg
                } else if state.prefixes.mandatory() == Mandatory::F3 {
                    state.prefixes.clear_rep();
                    return Ok(Resolved::Legacy {
                        code: Code::Pause,
                        operands: OperandCode::Nothing,
                        mem: MemorySize::Unknown,
                        width: state.operand_size,
                    });
                } else {
                    let codes = [Code::Nopw, Code::Nopd, Code::Nopq];
                    let width = state.operand_size;
                    return Ok(Resolved::Legacy {
                        code: codes[sized_index(width)],
                        operands: OperandCode::Nothing,
                        mem: MemorySize::Unknown,
                        width,
                    });
                }
            }
            Interpretation::Escape0F => {
                let opcode = words.read_u8()?;
                state.opcode = opcode;
                match opcode {
                    0x38 | 0x3a => {
                        let map: &'static [(u8, OpcodeRecord)] =
                            if opcode == 0x38 { &MAP_0F38 } else { &MAP_0F3A };
                        let opcode = words.read_u8()?;
                        state.opcode = opcode;
                        map0f::lookup(map, opcode)
                    }
                    _ => MAP_0F[opcode as usize],
                }
            }
            Interpretation::Vex2(fallback)
            | Interpretation::Vex3(fallback)
            | Interpretation::Evex(fallback) => {
                // outside long mode these are only escapes when the next byte would be an
                // impossible register-form ModRM for the legacy instruction
                let escape = state.bitness == Bitness::Bit64
                    || words.peek().map_or(false, |b| b >= 0b1100_0000);
                if !escape {
                    *fallback
                } else {
                    check_vector_prefixes(state)?;
                    match interpretation {
                        Interpretation::Evex(_) => evex::read_evex(words, state, instr)?,
                        Interpretation::Vex3(_) => vex::read_vex(words, state, instr, true)?,
                        _ => vex::read_vex(words, state, instr, false)?,
                    }
                    return Ok(Resolved::Vector);
                }
            }
        };
    }
}

/// VEX and EVEX replace 66/F2/F3/REX, so none of them may precede one.
fn check_vector_prefixes(state: &State) -> Result<(), ErrorKind> {
    if state.prefixes.rex().present() || state.prefixes.mandatory() != Mandatory::None {
        return Err(ErrorKind::InvalidPrefixes);
    }

    if state.prefixes.lock() && !state.options.contains(DecoderOptions::NO_INVALID_CHECK) {
        return Err(ErrorKind::InvalidPrefixes);
    }

    Ok(())
}

#[allow(non_snake_case)]
fn read_E(
    words: &mut Reader,
    state: &mut State,
    width: u8,
    mem: MemorySize,
) -> Result<Operand, ErrorKind> {
    let modrm = state.modrm(words)?;
    if modrm >= 0b1100_0000 {
        Ok(Operand::Register(state.gpr(state.rm_field(modrm), width)))
    } else {
        Ok(Operand::Memory(read_M(words, state, modrm, or_int(mem, width))?))
    }
}

/// A ModRM operand that must address memory.
#[allow(non_snake_case)]
fn read_M_only(
    words: &mut Reader,
    state: &mut State,
    mem: MemorySize,
) -> Result<Operand, ErrorKind> {
    let modrm = state.modrm(words)?;
    if modrm >= 0b1100_0000 {
        return Err(ErrorKind::InvalidOperand);
    }

    Ok(Operand::Memory(read_M(words, state, modrm, mem)?))
}

#[allow(non_snake_case)]
fn read_G(words: &mut Reader, state: &mut State, width: u8) -> Result<Operand, ErrorKind> {
    let modrm = state.modrm(words)?;
    Ok(Operand::Register(state.gpr(state.reg_field(modrm), width)))
}

/// xmm register in ModRM.reg.
#[allow(non_snake_case)]
fn read_V(words: &mut Reader, state: &mut State) -> Result<Operand, ErrorKind> {
    let modrm = state.modrm(words)?;
    Ok(Operand::Register(RegSpec::vector(state.reg_field(modrm), 16)))
}

/// xmm register or memory in ModRM.rm.
#[allow(non_snake_case)]
fn read_W(words: &mut Reader, state: &mut State, mem: MemorySize) -> Result<Operand, ErrorKind> {
    let modrm = state.modrm(words)?;
    if modrm >= 0b1100_0000 {
        Ok(Operand::Register(RegSpec::vector(state.rm_field(modrm), 16)))
    } else {
        Ok(Operand::Memory(read_M(words, state, modrm, mem)?))
    }
}

/// xmm register in ModRM.rm, memory forms are invalid.
#[allow(non_snake_case)]
fn read_U(words: &mut Reader, state: &mut State) -> Result<Operand, ErrorKind> {
    let modrm = state.modrm(words)?;
    if modrm < 0b1100_0000 {
        return Err(ErrorKind::InvalidOperand);
    }

    Ok(Operand::Register(RegSpec::vector(state.rm_field(modrm), 16)))
}

/// mmx register in ModRM.reg, REX.R doesn't apply.
#[allow(non_snake_case)]
fn read_P(words: &mut Reader, state: &mut State) -> Result<Operand, ErrorKind> {
    let modrm = state.modrm(words)?;
    Ok(Operand::Register(RegSpec::from_parts((modrm >> 3) & 7, RegisterBank::MM)))
}

#[allow(non_snake_case)]
fn read_Q(words: &mut Reader, state: &mut State, mem: MemorySize) -> Result<Operand, ErrorKind> {
    let modrm = state.modrm(words)?;
    if modrm >= 0b1100_0000 {
        Ok(Operand::Register(RegSpec::from_parts(modrm & 7, RegisterBank::MM)))
    } else {
        Ok(Operand::Memory(read_M(words, state, modrm, mem)?))
    }
}

/// mmx register in ModRM.rm, memory forms are invalid.
#[allow(non_snake_case)]
fn read_N(words: &mut Reader, state: &mut State) -> Result<Operand, ErrorKind> {
    let modrm = state.modrm(words)?;
    if modrm < 0b1100_0000 {
        return Err(ErrorKind::InvalidOperand);
    }

    Ok(Operand::Register(RegSpec::from_parts(modrm & 7, RegisterBank::MM)))
}

/// `r32/m16` style operand: a full register, or a word in memory.
#[allow(non_snake_case)]
fn read_E_word_mem(
    words: &mut Reader,
    state: &mut State,
    width: u8,
) -> Result<Operand, ErrorKind> {
    read_E(words, state, width, MemorySize::UInt16)
}

/// Control register in ModRM.reg, GPR in ModRM.rm regardless of `mod`.
fn read_control(words: &mut Reader, state: &mut State) -> Result<(Operand, Operand), ErrorKind> {
    let modrm = state.modrm(words)?;
    let native = if state.bitness == Bitness::Bit64 { 8 } else { 4 };
    let cr = state.reg_field(modrm);
    if !matches!(cr, 0 | 2 | 3 | 4 | 8) {
        return Err(ErrorKind::InvalidOperand);
    }

    Ok((
        Operand::Register(RegSpec::gpr(state.rm_field(modrm), native, false)),
        Operand::Register(RegSpec::from_parts(cr, RegisterBank::CR)),
    ))
}

fn read_debug(words: &mut Reader, state: &mut State) -> Result<(Operand, Operand), ErrorKind> {
    let modrm = state.modrm(words)?;
    let native = if state.bitness == Bitness::Bit64 { 8 } else { 4 };
    let dr = state.reg_field(modrm);
    if dr > 7 {
        return Err(ErrorKind::InvalidOperand);
    }

    Ok((
        Operand::Register(RegSpec::gpr(state.rm_field(modrm), native, false)),
        Operand::Register(RegSpec::from_parts(dr, RegisterBank::DR)),
    ))
}

/// Segment register in ModRM.reg.
fn read_sreg(words: &mut Reader, state: &mut State) -> Result<RegSpec, ErrorKind> {
    let modrm = state.modrm(words)?;
    let num = (modrm >> 3) & 7;
    if num >= 6 {
        return Err(ErrorKind::InvalidOperand);
    }

    Ok(RegSpec::segment(num))
}

/// `iz`: an immediate of the operand width, capped at 32 bits and sign extended to 64.
fn read_imm_z(words: &mut Reader, state: &mut State, width: u8) -> Result<Operand, ErrorKind> {
    Ok(match width {
        2 => Operand::Immediate16(state.read_imm16(words)?),
        4 => Operand::Immediate32(state.read_imm32(words)?),
        _ => Operand::Immediate32to64(state.read_imm32(words)? as i32 as i64),
    })
}

/// `ibs`: a byte sign extended to the operand width.
fn read_imm_bs(words: &mut Reader, state: &mut State, width: u8) -> Result<Operand, ErrorKind> {
    let imm = state.read_imm8(words)? as i8;
    Ok(match width {
        2 => Operand::Immediate8to16(imm as i16),
        4 => Operand::Immediate8to32(imm as i32),
        _ => Operand::Immediate8to64(imm as i64),
    })
}

fn read_imm8(words: &mut Reader, state: &mut State) -> Result<Operand, ErrorKind> {
    Ok(Operand::Immediate8(state.read_imm8(words)?))
}

/// Relative branch of `disp_size` bytes, resolved to its target.
fn read_branch(
    words: &mut Reader,
    state: &mut State,
    disp_size: u8,
    width: u8,
) -> Result<Operand, ErrorKind> {
    let disp = match disp_size {
        1 => state.read_imm8(words)? as i8 as i64,
        2 => state.read_imm16(words)? as i16 as i64,
        _ => state.read_imm32(words)? as i32 as i64,
    };

    // the displacement is the last thing in the instruction
    let next_ip = state.ip.wrapping_add(words.offset() as u64);
    let target = next_ip.wrapping_add(disp as u64);

    Ok(match width {
        2 => Operand::NearBranch16(target as u16),
        4 => Operand::NearBranch32(target as u32),
        _ => Operand::NearBranch64(target),
    })
}

/// `moffs`: an address of the address size, without ModRM.
fn read_moffs(words: &mut Reader, state: &mut State, size: MemorySize) -> Result<Operand, ErrorKind> {
    let segment = state.segment_or_ds();
    state.offsets.displacement_offset = words.offset() as u8;
    state.offsets.displacement_size = state.address_size;

    let displacement = match state.address_size {
        2 => words.read_u16()? as u64,
        4 => words.read_u32()? as u64,
        _ => {
            let address = words.read_u64()?;
            return Ok(Operand::Memory64 { segment, address, size });
        }
    };

    Ok(Operand::Memory(MemoryOperand {
        segment,
        base: None,
        index: None,
        scale: 1,
        displacement,
        displ_size: state.address_size,
        size,
    }))
}

/// `es:[rdi]`, the string destination.
fn string_destination(state: &State, size: MemorySize) -> Operand {
    match state.address_size {
        2 => Operand::MemoryESDI { size },
        4 => Operand::MemoryESEDI { size },
        _ => Operand::MemoryESRDI { size },
    }
}

/// `seg:[rsi]`, the string source.
fn string_source(state: &State, size: MemorySize) -> Operand {
    let segment = state.segment_or_ds();
    match state.address_size {
        2 => Operand::MemorySegSI { segment, size },
        4 => Operand::MemorySegESI { segment, size },
        _ => Operand::MemorySegRSI { segment, size },
    }
}

/// `seg:[rdi]`, as used by `maskmovq`.
fn masked_destination(state: &State, size: MemorySize) -> Operand {
    let segment = state.segment_or_ds();
    match state.address_size {
        2 => Operand::MemorySegDI { segment, size },
        4 => Operand::MemorySegEDI { segment, size },
        _ => Operand::MemorySegRDI { segment, size },
    }
}

fn far_pointer_size(width: u8) -> MemorySize {
    match width {
        2 => MemorySize::SegPtr16,
        4 => MemorySize::SegPtr32,
        _ => MemorySize::SegPtr64,
    }
}

fn read_operands(
    words: &mut Reader,
    state: &mut State,
    instr: &mut Instruction,
    operands: OperandCode,
    mem: MemorySize,
    width: u8,
) -> Result<(), ErrorKind> {
    use OperandCode::*;

    let al = Operand::Register(RegSpec::al());
    let dx = Operand::Register(RegSpec::dx());

    match operands {
        Nothing | Stack => {}
        Eb_Gb => {
            instr.push(read_E(words, state, 1, mem)?);
            instr.push(read_G(words, state, 1)?);
        }
        Ev_Gv => {
            instr.push(read_E(words, state, width, mem)?);
            instr.push(read_G(words, state, width)?);
        }
        Gb_Eb => {
            instr.push(read_G(words, state, 1)?);
            instr.push(read_E(words, state, 1, mem)?);
        }
        Gv_Ev => {
            instr.push(read_G(words, state, width)?);
            instr.push(read_E(words, state, width, mem)?);
        }
        AL_Ib => {
            instr.push(al);
            instr.push(read_imm8(words, state)?);
        }
        rAX_Iz => {
            instr.push(Operand::Register(state.gpr(0, width)));
            instr.push(read_imm_z(words, state, width)?);
        }
        Sreg => instr.push(Operand::Register(RegSpec::segment((state.opcode >> 3) & 7))),
        Zv | Zv_stack => {
            let reg = (state.opcode & 7) | state.extra_base;
            instr.push(Operand::Register(state.gpr(reg, width)));
        }
        Zv_rAX => {
            let reg = (state.opcode & 7) | state.extra_base;
            instr.push(Operand::Register(state.gpr(reg, width)));
            instr.push(Operand::Register(state.gpr(0, width)));
        }
        Zb_Ib => {
            let reg = (state.opcode & 7) | state.extra_base;
            instr.push(Operand::Register(state.gpr(reg, 1)));
            instr.push(read_imm8(words, state)?);
        }
        Zv_Iv => {
            let reg = (state.opcode & 7) | state.extra_base;
            instr.push(Operand::Register(state.gpr(reg, width)));
            instr.push(match width {
                2 => Operand::Immediate16(state.read_imm16(words)?),
                4 => Operand::Immediate32(state.read_imm32(words)?),
                _ => Operand::Immediate64(state.read_imm64(words)?),
            });
        }
        Gv_Ma => {
            instr.push(read_G(words, state, width)?);
            let size = if width == 2 {
                MemorySize::Bound16_WordWord
            } else {
                MemorySize::Bound32_DwordDword
            };
            instr.push(read_M_only(words, state, size)?);
        }
        Ew_Gw => {
            instr.push(read_E(words, state, 2, mem)?);
            instr.push(read_G(words, state, 2)?);
        }
        Gv_Ez => {
            instr.push(read_G(words, state, width)?);
            instr.push(read_E(words, state, width.min(4), mem)?);
        }
        Iz_stack => instr.push(read_imm_z(words, state, width)?),
        Ibs_stack => instr.push(read_imm_bs(words, state, width)?),
        Gv_Ev_Iz => {
            instr.push(read_G(words, state, width)?);
            instr.push(read_E(words, state, width, mem)?);
            instr.push(read_imm_z(words, state, width)?);
        }
        Gv_Ev_Ibs => {
            instr.push(read_G(words, state, width)?);
            instr.push(read_E(words, state, width, mem)?);
            instr.push(read_imm_bs(words, state, width)?);
        }
        Yb_DX => {
            instr.push(string_destination(state, MemorySize::UInt8));
            instr.push(dx);
        }
        Yz_DX => {
            instr.push(string_destination(state, int_size(width)));
            instr.push(dx);
        }
        DX_Xb => {
            instr.push(dx);
            instr.push(string_source(state, MemorySize::UInt8));
        }
        DX_Xz => {
            instr.push(dx);
            instr.push(string_source(state, int_size(width)));
        }
        Jb => instr.push(read_branch(words, state, 1, width)?),
        Jz => {
            let disp_size = if width == 2 { 2 } else { 4 };
            instr.push(read_branch(words, state, disp_size, width)?);
        }
        Eb_Ib => {
            instr.push(read_E(words, state, 1, mem)?);
            instr.push(read_imm8(words, state)?);
        }
        Ev_Iz => {
            instr.push(read_E(words, state, width, mem)?);
            instr.push(read_imm_z(words, state, width)?);
        }
        Ev_Ibs => {
            instr.push(read_E(words, state, width, mem)?);
            instr.push(read_imm_bs(words, state, width)?);
        }
        Ev_Ib => {
            instr.push(read_E(words, state, width, mem)?);
            instr.push(read_imm8(words, state)?);
        }
        Eb_1 => {
            instr.push(read_E(words, state, 1, mem)?);
            instr.push(Operand::Immediate8(1));
        }
        Ev_1 => {
            instr.push(read_E(words, state, width, mem)?);
            instr.push(Operand::Immediate8(1));
        }
        Eb_CL => {
            instr.push(read_E(words, state, 1, mem)?);
            instr.push(Operand::Register(RegSpec::cl()));
        }
        Ev_CL => {
            instr.push(read_E(words, state, width, mem)?);
            instr.push(Operand::Register(RegSpec::cl()));
        }
        Eb => instr.push(read_E(words, state, 1, mem)?),
        Ev | Ev_stack | Ev_branch => instr.push(read_E(words, state, width, mem)?),
        Ew => instr.push(read_E(words, state, 2, mem)?),
        Mp_far => instr.push(read_M_only(words, state, far_pointer_size(width))?),
        Ev_Sw => {
            let sreg = read_sreg(words, state)?;
            instr.push(read_E_word_mem(words, state, width)?);
            instr.push(Operand::Register(sreg));
        }
        Sw_Ev => {
            let sreg = read_sreg(words, state)?;
            if sreg == RegSpec::cs() {
                return Err(ErrorKind::InvalidOperand);
            }
            instr.push(Operand::Register(sreg));
            instr.push(read_E_word_mem(words, state, width)?);
        }
        Gv_M => {
            instr.push(read_G(words, state, width)?);
            instr.push(read_M_only(words, state, mem)?);
        }
        Ap => {
            let offset = if width == 2 {
                state.read_imm16(words)? as u32
            } else {
                state.read_imm32(words)?
            };
            let selector = state.read_imm16(words)?;
            instr.push(if width == 2 {
                Operand::FarBranch16 { selector, offset: offset as u16 }
            } else {
                Operand::FarBranch32 { selector, offset }
            });
        }
        Gv_Mp => {
            instr.push(read_G(words, state, width)?);
            instr.push(read_M_only(words, state, far_pointer_size(width))?);
        }
        AL_Ob => {
            instr.push(al);
            instr.push(read_moffs(words, state, MemorySize::UInt8)?);
        }
        rAX_Ov => {
            instr.push(Operand::Register(state.gpr(0, width)));
            instr.push(read_moffs(words, state, int_size(width))?);
        }
        Ob_AL => {
            instr.push(read_moffs(words, state, MemorySize::UInt8)?);
            instr.push(al);
        }
        Ov_rAX => {
            instr.push(read_moffs(words, state, int_size(width))?);
            instr.push(Operand::Register(state.gpr(0, width)));
        }
        Yb_Xb => {
            instr.push(string_destination(state, MemorySize::UInt8));
            instr.push(string_source(state, MemorySize::UInt8));
        }
        Yv_Xv => {
            instr.push(string_destination(state, int_size(width)));
            instr.push(string_source(state, int_size(width)));
        }
        Xb_Yb => {
            instr.push(string_source(state, MemorySize::UInt8));
            instr.push(string_destination(state, MemorySize::UInt8));
        }
        Xv_Yv => {
            instr.push(string_source(state, int_size(width)));
            instr.push(string_destination(state, int_size(width)));
        }
        Yb_AL => {
            instr.push(string_destination(state, MemorySize::UInt8));
            instr.push(al);
        }
        Yv_rAX => {
            instr.push(string_destination(state, int_size(width)));
            instr.push(Operand::Register(state.gpr(0, width)));
        }
        AL_Xb => {
            instr.push(al);
            instr.push(string_source(state, MemorySize::UInt8));
        }
        rAX_Xv => {
            instr.push(Operand::Register(state.gpr(0, width)));
            instr.push(string_source(state, int_size(width)));
        }
        AL_Yb => {
            instr.push(al);
            instr.push(string_destination(state, MemorySize::UInt8));
        }
        rAX_Yv => {
            instr.push(Operand::Register(state.gpr(0, width)));
            instr.push(string_destination(state, int_size(width)));
        }
        Iw_stack | Iw => instr.push(Operand::Immediate16(state.read_imm16(words)?)),
        Iw_Ib => {
            instr.push(Operand::Immediate16(state.read_imm16(words)?));
            instr.push(Operand::Immediate8_2nd(state.read_imm8(words)?));
        }
        Ib => instr.push(read_imm8(words, state)?),
        eAX_Ib => {
            instr.push(Operand::Register(state.gpr(0, width)));
            instr.push(read_imm8(words, state)?);
        }
        Ib_AL => {
            instr.push(read_imm8(words, state)?);
            instr.push(al);
        }
        Ib_eAX => {
            instr.push(read_imm8(words, state)?);
            instr.push(Operand::Register(state.gpr(0, width)));
        }
        AL_DX => {
            instr.push(al);
            instr.push(dx);
        }
        eAX_DX => {
            instr.push(Operand::Register(state.gpr(0, width)));
            instr.push(dx);
        }
        DX_AL => {
            instr.push(dx);
            instr.push(al);
        }
        DX_eAX => {
            instr.push(dx);
            instr.push(Operand::Register(state.gpr(0, width)));
        }
        Xlat => {
            instr.push(Operand::Memory(MemoryOperand {
                segment: state.segment_or_ds(),
                base: Some(RegSpec::gpr(3, state.address_size, false)),
                index: Some(RegSpec::al()),
                scale: 1,
                displacement: 0,
                displ_size: 0,
                size: MemorySize::UInt8,
            }));
        }

        Mx87 | M | V_M | M_V | M_P => {
            let mem = read_M_only(words, state, mem)?;
            match operands {
                V_M => {
                    instr.push(read_V(words, state)?);
                    instr.push(mem);
                }
                M_V => {
                    instr.push(mem);
                    instr.push(read_V(words, state)?);
                }
                M_P => {
                    instr.push(mem);
                    instr.push(read_P(words, state)?);
                }
                _ => instr.push(mem),
            }
        }
        Mx87_env => {
            let size = if width == 2 {
                MemorySize::FpuEnv14
            } else {
                MemorySize::FpuEnv28
            };
            instr.push(read_M_only(words, state, size)?);
        }
        ST_STi | STi_ST | STi => {
            let modrm = state.modrm(words)?;
            let sti = Operand::Register(RegSpec::from_parts(modrm & 7, RegisterBank::ST));
            let st0 = Operand::Register(RegSpec::st0());
            match operands {
                ST_STi => {
                    instr.push(st0);
                    instr.push(sti);
                }
                STi_ST => {
                    instr.push(sti);
                    instr.push(st0);
                }
                _ => instr.push(sti),
            }
        }
        AX => instr.push(Operand::Register(RegSpec::ax())),

        Ew_sys => instr.push(read_E_word_mem(words, state, width)?),
        Ms => {
            let size = if state.bitness == Bitness::Bit64 {
                MemorySize::Fword10
            } else {
                MemorySize::Fword6
            };
            instr.push(read_M_only(words, state, size)?);
        }
        Gv_Evw => {
            instr.push(read_G(words, state, width)?);
            instr.push(read_E_word_mem(words, state, width)?);
        }
        Gv_Eb => {
            instr.push(read_G(words, state, width)?);
            instr.push(read_E(words, state, 1, mem)?);
        }
        Gv_Ew => {
            instr.push(read_G(words, state, width)?);
            instr.push(read_E(words, state, 2, mem)?);
        }
        R_Cr => {
            let (gpr, cr) = read_control(words, state)?;
            instr.push(gpr);
            instr.push(cr);
        }
        Cr_R => {
            let (gpr, cr) = read_control(words, state)?;
            instr.push(cr);
            instr.push(gpr);
        }
        R_Dr => {
            let (gpr, dr) = read_debug(words, state)?;
            instr.push(gpr);
            instr.push(dr);
        }
        Dr_R => {
            let (gpr, dr) = read_debug(words, state)?;
            instr.push(dr);
            instr.push(gpr);
        }
        Ev_Gv_Ib => {
            instr.push(read_E(words, state, width, mem)?);
            instr.push(read_G(words, state, width)?);
            instr.push(read_imm8(words, state)?);
        }
        Ev_Gv_CL => {
            instr.push(read_E(words, state, width, mem)?);
            instr.push(read_G(words, state, width)?);
            instr.push(Operand::Register(RegSpec::cl()));
        }
        Mq_dq => {
            let size = if width == 8 {
                MemorySize::UInt128
            } else {
                MemorySize::UInt64
            };
            instr.push(read_M_only(words, state, size)?);
        }
        My_Gy | Mv_Gv => {
            instr.push(read_M_only(words, state, int_size(width))?);
            instr.push(read_G(words, state, width)?);
        }
        Gv_Mv => {
            instr.push(read_G(words, state, width)?);
            instr.push(read_M_only(words, state, int_size(width))?);
        }
        Gy_Eb => {
            instr.push(read_G(words, state, width.max(4))?);
            instr.push(read_E(words, state, 1, mem)?);
        }
        Gy_Ev => {
            instr.push(read_G(words, state, width.max(4))?);
            instr.push(read_E(words, state, width, mem)?);
        }

        V_W | V_W_Ib => {
            instr.push(read_V(words, state)?);
            instr.push(read_W(words, state, mem)?);
            if operands == V_W_Ib {
                instr.push(read_imm8(words, state)?);
            }
        }
        W_V => {
            instr.push(read_W(words, state, mem)?);
            instr.push(read_V(words, state)?);
        }
        V_U => {
            instr.push(read_V(words, state)?);
            instr.push(read_U(words, state)?);
        }
        P_Q | P_Q_Ib => {
            instr.push(read_P(words, state)?);
            instr.push(read_Q(words, state, mem)?);
            if operands == P_Q_Ib {
                instr.push(read_imm8(words, state)?);
            }
        }
        Q_P => {
            instr.push(read_Q(words, state, mem)?);
            instr.push(read_P(words, state)?);
        }
        N_Ib => {
            instr.push(read_N(words, state)?);
            instr.push(read_imm8(words, state)?);
        }
        U_Ib => {
            instr.push(read_U(words, state)?);
            instr.push(read_imm8(words, state)?);
        }
        P_Ey => {
            instr.push(read_P(words, state)?);
            instr.push(read_E(words, state, width, mem)?);
        }
        Ey_P => {
            instr.push(read_E(words, state, width, mem)?);
            instr.push(read_P(words, state)?);
        }
        V_Ey | V_Ey_Ib => {
            instr.push(read_V(words, state)?);
            instr.push(read_E(words, state, width, mem)?);
            if operands == V_Ey_Ib {
                instr.push(read_imm8(words, state)?);
            }
        }
        Ey_V | Ey_V_Ib => {
            instr.push(read_E(words, state, width, mem)?);
            instr.push(read_V(words, state)?);
            if operands == Ey_V_Ib {
                instr.push(read_imm8(words, state)?);
            }
        }
        V_Q => {
            instr.push(read_V(words, state)?);
            instr.push(read_Q(words, state, mem)?);
        }
        P_W => {
            instr.push(read_P(words, state)?);
            instr.push(read_W(words, state, mem)?);
        }
        Gy_W => {
            instr.push(read_G(words, state, width)?);
            instr.push(read_W(words, state, mem)?);
        }
        Gy_U => {
            instr.push(read_G(words, state, width)?);
            instr.push(read_U(words, state)?);
        }
        Gd_N | Gd_N_Ib => {
            instr.push(read_G(words, state, 4)?);
            instr.push(read_N(words, state)?);
            if operands == Gd_N_Ib {
                instr.push(read_imm8(words, state)?);
            }
        }
        Gd_U | Gd_U_Ib => {
            instr.push(read_G(words, state, 4)?);
            instr.push(read_U(words, state)?);
            if operands == Gd_U_Ib {
                instr.push(read_imm8(words, state)?);
            }
        }
        P_Ew_Ib => {
            instr.push(read_P(words, state)?);
            instr.push(read_E_word_mem(words, state, 4)?);
            instr.push(read_imm8(words, state)?);
        }
        V_Ew_Ib => {
            instr.push(read_V(words, state)?);
            instr.push(read_E_word_mem(words, state, 4)?);
            instr.push(read_imm8(words, state)?);
        }
        rDI_P_N => {
            instr.push(masked_destination(state, mem));
            instr.push(read_P(words, state)?);
            instr.push(read_N(words, state)?);
        }
        rDI_V_U => {
            instr.push(masked_destination(state, mem));
            instr.push(read_V(words, state)?);
            instr.push(read_U(words, state)?);
        }
        V_N => {
            instr.push(read_V(words, state)?);
            instr.push(read_N(words, state)?);
        }
        P_U => {
            instr.push(read_P(words, state)?);
            instr.push(read_U(words, state)?);
        }
    }

    Ok(())
}
