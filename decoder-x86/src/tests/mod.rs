mod errors;
mod legacy;
mod map0f;
mod modrm;
mod prefixes;
mod vex;

use decoder::{decode_hex_bytes, ErrorKind};

use crate::{Bitness, Decoder, DecoderOptions, Instruction};

pub(crate) const ALL_MODES: [Bitness; 3] = [Bitness::Bit16, Bitness::Bit32, Bitness::Bit64];

fn bytes(hex: &str) -> Vec<u8> {
    match decode_hex_bytes(hex) {
        Ok(bytes) => bytes,
        Err(err) => panic!("bad test input {hex:?}: {err}"),
    }
}

/// Decode `hex` and hand the result to `f`, requiring every byte to be consumed.
#[track_caller]
pub(crate) fn check_with(decoder: Decoder, hex: &str, f: impl FnOnce(&Instruction)) {
    let data = bytes(hex);
    match decoder.decode_slice(&data) {
        Ok(instr) => {
            assert!(
                instr.len() == data.len(),
                "decode length mismatch for {:02x?} under {:?}:\n  decoded: {:?}\n  length: {} (expected {})",
                data,
                decoder.bitness(),
                instr.code(),
                instr.len(),
                data.len()
            );
            f(&instr);
        }
        Err(err) => panic!(
            "decode error for {:02x?} under {:?}:\n  error: {}",
            data,
            decoder.bitness(),
            err
        ),
    }
}

#[track_caller]
pub(crate) fn check(bitness: Bitness, hex: &str, f: impl FnOnce(&Instruction)) {
    check_with(Decoder::new(bitness), hex, f)
}

/// Same bytes, same expectations, in every mode.
#[track_caller]
pub(crate) fn check_all(hex: &str, f: impl Fn(&Instruction)) {
    for bitness in ALL_MODES {
        check(bitness, hex, &f);
    }
}

#[track_caller]
pub(crate) fn test_invalid_under(decoder: Decoder, hex: &str) {
    let data = bytes(hex);
    if let Ok(instr) = decoder.decode_slice(&data) {
        panic!(
            "decoded {:?} from {:02x?} under {:?} (expected failure)",
            instr.code(),
            data,
            decoder.bitness()
        );
    }
}

/// Fails to decode in every mode.
#[track_caller]
pub(crate) fn test_invalid(hex: &str) {
    for bitness in ALL_MODES {
        test_invalid_under(Decoder::new(bitness), hex);
    }
}

#[track_caller]
pub(crate) fn test_error(bitness: Bitness, hex: &str, kind: ErrorKind) {
    let data = bytes(hex);
    match Decoder::new(bitness).decode_slice(&data) {
        Ok(instr) => panic!(
            "decoded {:?} from {:02x?} under {:?} (expected {})",
            instr.code(),
            data,
            bitness,
            kind
        ),
        Err(err) => assert!(
            err.kind == kind,
            "wrong error for {:02x?} under {:?}:\n  got: {}\n  expected: {}",
            data,
            bitness,
            err.kind,
            kind
        ),
    }
}

pub(crate) fn unchecked(bitness: Bitness) -> Decoder {
    Decoder::new(bitness).with_options(DecoderOptions::NO_INVALID_CHECK)
}
