use decoder::{decode_hex_bytes, Error, ErrorKind};

use super::{test_error, ALL_MODES};
use crate::{Bitness, Code, Decoder};

fn repeat(prefix: &str, count: usize, tail: &str) -> String {
    let mut hex = vec![prefix; count].join(" ");
    hex.push(' ');
    hex.push_str(tail);
    hex
}

#[test]
fn fifteen_bytes_at_most() {
    for bitness in ALL_MODES {
        // prefixes alone push the opcode past the limit
        test_error(bitness, &repeat("66", 15, "90"), ErrorKind::TooLong);
        // the opcode fits but the ModRM byte doesn't
        test_error(bitness, &repeat("66", 14, "01 C0"), ErrorKind::TooLong);
        test_error(bitness, &repeat("2E", 20, "90"), ErrorKind::TooLong);
    }

    let data = decode_hex_bytes(&repeat("66", 15, "90")).unwrap();
    let err = Decoder::new(Bitness::Bit64).decode_slice(&data).unwrap_err();
    assert_eq!(err.size(), 16);

    // exactly fifteen is fine
    let data = decode_hex_bytes(&repeat("66", 13, "01 C0")).unwrap();
    let instr = Decoder::new(Bitness::Bit32).decode_slice(&data).unwrap();
    assert_eq!(instr.len(), 15);
    assert_eq!(instr.code(), Code::Add_Ew_Gw);
}

#[test]
fn truncated_input() {
    for bitness in ALL_MODES {
        test_error(bitness, "", ErrorKind::ExhaustedInput);
        test_error(bitness, "66", ErrorKind::ExhaustedInput);
        test_error(bitness, "8B", ErrorKind::ExhaustedInput);
        test_error(bitness, "0F", ErrorKind::ExhaustedInput);
        test_error(bitness, "0F 38", ErrorKind::ExhaustedInput);
        test_error(bitness, "05 00", ErrorKind::ExhaustedInput);
    }
    // call rel16 needs two bytes, rel32 four
    test_error(Bitness::Bit16, "E8 00", ErrorKind::ExhaustedInput);
    test_error(Bitness::Bit32, "E8 00 00", ErrorKind::ExhaustedInput);
    test_error(Bitness::Bit64, "E8 00 00", ErrorKind::ExhaustedInput);
    test_error(Bitness::Bit64, "48 B8 00 00 00 00", ErrorKind::ExhaustedInput);
    test_error(Bitness::Bit32, "8B 04", ErrorKind::ExhaustedInput);
    test_error(Bitness::Bit32, "8B 80 00 00", ErrorKind::ExhaustedInput);
    test_error(Bitness::Bit64, "62 F1 7C", ErrorKind::ExhaustedInput);
}

#[test]
fn error_size_counts_consumed_bytes() {
    let data = decode_hex_bytes("0F 38 50 C1").unwrap();
    let err = Decoder::new(Bitness::Bit64).decode_slice(&data).unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidOpcode);
    assert_eq!(err.size(), 3);

    assert_eq!(Error::new(ErrorKind::TooLong, 1000).size(), u8::MAX as usize);
    assert_eq!(
        Error::new(ErrorKind::TooLong, 16).to_string(),
        "instruction too long (after 16 bytes)"
    );
}

#[test]
fn stream_skips_a_byte_after_failure() {
    let data = decode_hex_bytes("90 06 90 C3").unwrap();
    let decoder = Decoder::new(Bitness::Bit64).with_ip(0x1000);
    let mut stream = decoder.stream(&data);

    let first = stream.next().unwrap().unwrap();
    assert_eq!(first.code(), Code::Nopd);
    assert_eq!(stream.position(), 1);
    assert_eq!(stream.ip(), 0x1001);

    // push es doesn't exist in long mode
    let err = stream.next().unwrap().unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidOpcode);
    assert_eq!(stream.last_error(), Some(err));
    assert_eq!(stream.position(), 2);

    let third = stream.next().unwrap().unwrap();
    assert_eq!(third.ip(), 0x1002);
    assert_eq!(stream.last_error(), None);

    let last = stream.next().unwrap().unwrap();
    assert_eq!(last.code(), Code::Retnq);
    assert_eq!(last.next_ip(), 0x1004);

    assert!(!stream.can_decode());
    assert!(stream.next().is_none());
}

#[test]
fn collected_stream_resumes_past_bad_byte() {
    let data = [0x90, 0x06, 0xc3];
    let results: Vec<Result<Code, ErrorKind>> = Decoder::new(Bitness::Bit64)
        .stream(&data)
        .map(|result| result.map(|instr| instr.code()).map_err(|err| err.kind))
        .collect();

    assert_eq!(
        results,
        [Ok(Code::Nopd), Err(ErrorKind::InvalidOpcode), Ok(Code::Retnq)]
    );
}

#[test]
fn stream_decode_stays_put_on_failure() {
    let data = decode_hex_bytes("06 90").unwrap();
    let mut stream = Decoder::new(Bitness::Bit64).stream(&data);

    assert!(stream.decode().is_err());
    assert_eq!(stream.position(), 0);
    assert_eq!(stream.decode().map(|_| ()).unwrap_err().kind, ErrorKind::InvalidOpcode);

    stream.set_position(1);
    let instr = stream.decode().unwrap();
    assert_eq!(instr.ip(), 1);
    assert_eq!(stream.position(), 2);
}

#[test]
fn stream_in_legacy_mode() {
    let data = decode_hex_bytes("06 1F C3").unwrap();
    let codes: Vec<Code> = Decoder::new(Bitness::Bit32)
        .stream(&data)
        .map(|result| result.map(|instr| instr.code()).unwrap())
        .collect();

    assert_eq!(codes, [Code::Pushd_ES, Code::Popd_DS, Code::Retnd]);
}
