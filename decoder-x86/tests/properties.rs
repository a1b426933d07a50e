use decoder::ErrorKind;
use proptest::prelude::*;
use x86::{Bitness, Decoder, RegSpec};

fn bitness() -> impl Strategy<Value = Bitness> {
    prop_oneof![Just(Bitness::Bit16), Just(Bitness::Bit32), Just(Bitness::Bit64)]
}

fn segment(prefix: u8) -> RegSpec {
    match prefix {
        0x26 => RegSpec::es(),
        0x2e => RegSpec::cs(),
        0x36 => RegSpec::ss(),
        0x3e => RegSpec::ds(),
        0x64 => RegSpec::fs(),
        0x65 => RegSpec::gs(),
        _ => unreachable!("not a segment prefix: {prefix:#04x}"),
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 4096,
        .. ProptestConfig::default()
    })]

    #[test]
    fn decoding_is_deterministic(
        bitness in bitness(),
        ip in any::<u64>(),
        bytes in proptest::collection::vec(any::<u8>(), 0..=20),
    ) {
        let decoder = Decoder::new(bitness).with_ip(ip);
        prop_assert_eq!(decoder.decode_slice(&bytes), decoder.decode_slice(&bytes));
    }

    #[test]
    fn length_is_bounded(
        bitness in bitness(),
        bytes in proptest::collection::vec(any::<u8>(), 1..=20),
    ) {
        if let Ok(instr) = Decoder::new(bitness).decode_slice(&bytes) {
            prop_assert!(instr.len() >= 1);
            prop_assert!(instr.len() <= 15, "len={} bytes={:02x?}", instr.len(), bytes);
            prop_assert!(instr.len() <= bytes.len(), "len={} bytes={:02x?}", instr.len(), bytes);
            prop_assert_eq!(instr.next_ip(), instr.ip() + instr.len() as u64);
        }
    }

    #[test]
    fn truncation_runs_out_of_input(
        bitness in bitness(),
        bytes in proptest::collection::vec(any::<u8>(), 1..=15),
    ) {
        let decoder = Decoder::new(bitness);
        if let Ok(instr) = decoder.decode_slice(&bytes) {
            for cut in 0..instr.len() {
                let err = decoder.decode_slice(&bytes[..cut]).map(|instr| instr.code());
                prop_assert_eq!(
                    err.map_err(|err| err.kind),
                    Err(ErrorKind::ExhaustedInput),
                    "cut={} bytes={:02x?}", cut, bytes
                );
            }
        }
    }

    #[test]
    fn last_segment_prefix_wins(
        bitness in prop_oneof![Just(Bitness::Bit16), Just(Bitness::Bit32)],
        prefixes in proptest::collection::vec(
            prop_oneof![Just(0x26u8), Just(0x2e), Just(0x36), Just(0x3e), Just(0x64), Just(0x65)],
            1..=8,
        ),
    ) {
        let mut bytes = prefixes.clone();
        bytes.extend_from_slice(&[0x8b, 0x00]);

        let instr = Decoder::new(bitness).decode_slice(&bytes);
        prop_assert!(instr.is_ok(), "bytes={:02x?}", bytes);
        if let Ok(instr) = instr {
            let last = prefixes[prefixes.len() - 1];
            prop_assert_eq!(instr.segment_prefix(), Some(segment(last)));
            prop_assert_eq!(instr.memory_segment(), Some(segment(last)));
        }
    }
}
