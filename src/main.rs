use std::io::{self, BufWriter, Write};
use std::sync::PoisonError;

use commands::{Cli, Input, ARGS};
use config::Config;
use decoder::{decode_hex_bytes, encode_hex_bytes_truncated};
use x86::Decoder;

#[macro_export]
macro_rules! exit {
    () => {{
        std::process::exit(0);
    }};

    ($($arg:tt)*) => {{
        eprintln!($($arg)*);
        std::process::exit(1);
    }};
}

/// Command line over config over defaults.
fn resolve_decoder(args: &Cli, config: &Config) -> Decoder {
    let bitness = args.bitness.unwrap_or(config.decoder.bitness);
    let ip = args.ip.unwrap_or(config.decoder.ip);

    Decoder::new(bitness)
        .with_options(config.decoder.options())
        .with_ip(ip)
}

fn level(args: &Cli, config: &Config) -> log::Level {
    if args.verbose {
        log::Level::Trace
    } else {
        config.log.level
    }
}

/// Prints one line per instruction. Bytes that fail to decode are reported and skipped one at a
/// time.
fn listing(decoder: &Decoder, bytes: &[u8], bytes_width: usize, mut f: impl Write) -> io::Result<()> {
    let mut stream = decoder.stream(bytes);

    while stream.can_decode() {
        let ip = stream.ip();
        let start = stream.position();

        match stream.decode() {
            Ok(instr) => {
                let raw = bytes.get(start..start + instr.len()).unwrap_or_default();
                let raw = encode_hex_bytes_truncated(raw, bytes_width);
                writeln!(f, "{ip:>12x}: {raw} {instr}")?;
                log::trace!("{ip:#x}: {:?} ({} bytes)", instr.code(), instr.len());
            }
            Err(err) => {
                let raw = bytes.get(start..start + 1).unwrap_or_default();
                let raw = encode_hex_bytes_truncated(raw, bytes_width);
                writeln!(f, "{ip:>12x}: {raw} (bad) {}", err.kind)?;
                log::warning!("Failed to decode at {ip:#x}: {err}.");
                stream.set_position(start + 1);
            }
        }
    }

    f.flush()
}

fn main() {
    let args = &*ARGS;
    let config = match args.config {
        Some(ref path) => Config::from_path(path),
        None => config::CONFIG.clone(),
    };

    log::set_level(level(args, &config));

    let bytes = match args.input {
        Some(Input::Hex(ref hex)) => match decode_hex_bytes(hex) {
            Ok(bytes) => bytes,
            Err(err) => exit!("Failed to parse hex bytes: {err}."),
        },
        Some(Input::File(ref path)) => match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) => exit!("Failed to read {path:?}: {err}."),
        },
        None => exit!("{}", commands::Error::NoInput),
    };

    let decoder = resolve_decoder(args, &config);
    log::notify!(
        "Decoding {} bytes in {}-bit mode at {:#x}.",
        bytes.len(),
        decoder.bitness().bits(),
        args.ip.unwrap_or(config.decoder.ip)
    );

    let stdout = BufWriter::new(io::stdout().lock());
    if let Err(err) = listing(&decoder, &bytes, config.decoder.bytes_width, stdout) {
        log::error!("Failed to write listing: {err}.");
    }

    let mut logger = log::LOGGER.lock().unwrap_or_else(PoisonError::into_inner);
    if let Err(err) = logger.drain_to(io::stderr().lock()) {
        exit!("Failed to flush log: {err}.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use x86::{Bitness, DecoderOptions};

    fn list(decoder: Decoder, hex: &str) -> Vec<String> {
        let bytes = decode_hex_bytes(hex).unwrap();
        let mut out = Vec::new();
        listing(&decoder, &bytes, 30, &mut out).unwrap();
        String::from_utf8(out).unwrap().lines().map(str::to_string).collect()
    }

    #[test]
    fn bad_bytes_are_skipped() {
        let lines = list(Decoder::new(Bitness::Bit64).with_ip(0x1000), "90 06 C3");

        assert_eq!(lines.len(), 3);
        assert!(lines[0].trim_start().starts_with("1000: 90 "), "{}", lines[0]);
        assert!(lines[1].trim_start().starts_with("1001: 06 "), "{}", lines[1]);
        assert!(lines[1].ends_with("(bad) invalid opcode"), "{}", lines[1]);
        assert!(lines[2].trim_start().starts_with("1002: c3 "), "{}", lines[2]);
    }

    #[test]
    fn truncated_tail() {
        let lines = list(Decoder::new(Bitness::Bit32), "90 E8 00");

        assert_eq!(lines.len(), 3);
        assert!(lines[1].ends_with("(bad) exhausted input"), "{}", lines[1]);
        assert!(lines[2].ends_with("(bad) exhausted input"), "{}", lines[2]);
    }

    #[test]
    fn arguments_override_config() {
        let config = Config::from_yaml("decoder:\n  bitness: 16\n  ip: 0x100\n  amd: true\n").unwrap();

        let args = Cli::default();
        let from_config = resolve_decoder(&args, &config);
        assert_eq!(from_config.bitness(), Bitness::Bit16);
        assert_eq!(from_config.options(), DecoderOptions::AMD);
        assert_eq!(level(&args, &config), log::Level::Info);

        let args = Cli {
            bitness: Some(Bitness::Bit32),
            ip: Some(0x7c00),
            verbose: true,
            ..Cli::default()
        };
        let from_args = resolve_decoder(&args, &config);
        assert_eq!(from_args.bitness(), Bitness::Bit32);
        assert_eq!(level(&args, &config), log::Level::Trace);

        let lines = list(from_args, "90");
        assert!(lines[0].trim_start().starts_with("7c00: "), "{}", lines[0]);
    }
}
