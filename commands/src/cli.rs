use std::fmt;
use std::path::{Path, PathBuf};

use x86::Bitness;

macro_rules! exit {
    ($code:expr => $($arg:tt)*) => {{
        eprintln!($($arg)*);
        std::process::exit($code);
    }};
}

pub const HELP: &str = "OVERVIEW: x86/x64 instruction decoder

USAGE: x86dasm [options] [HEX BYTES...]

OPTIONS:
  -H, --help          Print usage information
  -B, --bitness       Processor mode to decode in (16, 32 or 64)
  -C, --config        Path to config used for decoding
  -F, --file          Path to a file of raw bytes to decode
  -I, --ip            Address of the first byte, in hex
  -V, --verbose       Trace every decoded instruction";

const ABBRV: &[&str] = &["-H", "-B", "-C", "-F", "-I", "-V"];
const NAMES: &[&str] = &[
    "--help",
    "--bitness",
    "--config",
    "--file",
    "--ip",
    "--verbose",
];

/// Where the bytes to decode come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Hex digits taken from the positional arguments.
    Hex(String),
    /// Raw bytes read from a file.
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Missing(&'static str),
    AlreadyGiven(&'static str),
    UnknownArg(String),
    InvalidBitness(String),
    InvalidIp(String),
    PathDoesntExist(PathBuf),
    NoInput,
    MultipleInputs,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing(part) => f.write_fmt(format_args!("Expected a value for '{part}'.")),
            Self::AlreadyGiven(part) => f.write_fmt(format_args!("'{part}' was already given.")),
            Self::UnknownArg(arg) => match possible_arg(arg) {
                Some(guess) => f.write_fmt(format_args!(
                    "Unknown cmd arg '{arg}' did you mean '{guess}'?"
                )),
                None => f.write_fmt(format_args!("Unknown cmd arg '{arg}' was entered.")),
            },
            Self::InvalidBitness(bits) => f.write_fmt(format_args!(
                "Bitness '{bits}' isn't one of 16, 32 or 64."
            )),
            Self::InvalidIp(ip) => f.write_fmt(format_args!("Address '{ip}' isn't a hex number.")),
            Self::PathDoesntExist(path) => {
                f.write_fmt(format_args!("Path {path:?} doesn't exist."))
            }
            Self::NoInput => f.write_str("You must provide hex bytes or a file to decode."),
            Self::MultipleInputs => f.write_str("Only one of hex bytes or a file can be decoded."),
        }
    }
}

impl std::error::Error for Error {}

/// The closest known argument, if it's at most 3 edits away.
fn possible_arg(unknown: &str) -> Option<&'static str> {
    let mut distance = u32::MAX;
    let mut best_guess = "";
    for name in NAMES {
        let d = triple_accel::levenshtein_exp(unknown.as_bytes(), name.as_bytes());
        if d < distance {
            distance = d;
            best_guess = name;
        }
    }

    // A guess that's less than 3 `steps` away from a correct arg.
    if distance < 4 {
        Some(best_guess)
    } else {
        None
    }
}

fn expand_homedir(path: PathBuf) -> PathBuf {
    let home_dir = match dirs::home_dir() {
        Some(dir) => dir,
        None => return path,
    };

    match path.strip_prefix("~") {
        Ok(relative_path) => home_dir.join(relative_path),
        Err(_) => path,
    }
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Cli {
    /// Bytes to decode.
    pub input: Option<Input>,

    /// Overrides the configured processor mode.
    pub bitness: Option<Bitness>,

    /// Overrides the configured address of the first byte.
    pub ip: Option<u64>,

    /// Optional path to config.
    pub config: Option<PathBuf>,

    /// Log every decoded instruction.
    pub verbose: bool,
}

impl Cli {
    pub fn parse() -> Self {
        match Self::try_parse_from(std::env::args().skip(1)) {
            Ok(cli) => cli,
            Err(err) => exit!(1 => "{err}"),
        }
    }

    /// Parses the arguments following the program name.
    ///
    /// `--help` exits the process right away.
    pub fn try_parse_from<I, S>(args: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut cli = Cli::default();
        let mut hex = String::new();
        let mut file: Option<PathBuf> = None;
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-H" | "--help" => exit!(0 => "{HELP}"),
                "-B" | "--bitness" => {
                    let bits = value(args.next(), "--bitness")?;
                    if cli.bitness.is_some() {
                        return Err(Error::AlreadyGiven("--bitness"));
                    }
                    let bitness = bits
                        .parse::<u32>()
                        .ok()
                        .and_then(|bits| Bitness::try_from(bits).ok())
                        .ok_or(Error::InvalidBitness(bits))?;
                    cli.bitness = Some(bitness);
                }
                "-C" | "--config" => {
                    let path = value(args.next(), "--config")?;
                    if cli.config.is_some() {
                        return Err(Error::AlreadyGiven("--config"));
                    }
                    cli.config = Some(expand_homedir(PathBuf::from(path)));
                }
                "-F" | "--file" => {
                    let path = value(args.next(), "--file")?;
                    if file.is_some() {
                        return Err(Error::AlreadyGiven("--file"));
                    }
                    file = Some(expand_homedir(PathBuf::from(path)));
                }
                "-I" | "--ip" => {
                    let ip = value(args.next(), "--ip")?;
                    if cli.ip.is_some() {
                        return Err(Error::AlreadyGiven("--ip"));
                    }
                    let digits = ip.trim_start_matches("0x").trim_start_matches("0X");
                    let ip = u64::from_str_radix(digits, 16).map_err(|_| Error::InvalidIp(ip))?;
                    cli.ip = Some(ip);
                }
                "-V" | "--verbose" => {
                    if cli.verbose {
                        return Err(Error::AlreadyGiven("--verbose"));
                    }
                    cli.verbose = true
                }
                unknown if unknown.starts_with('-') => {
                    return Err(Error::UnknownArg(unknown.to_string()));
                }
                bytes => {
                    if !hex.is_empty() {
                        hex.push(' ');
                    }
                    hex.push_str(bytes);
                }
            }
        }

        cli.input = match (hex.is_empty(), file) {
            (true, None) => None,
            (false, None) => Some(Input::Hex(hex)),
            (true, Some(path)) => Some(Input::File(path)),
            (false, Some(_)) => return Err(Error::MultipleInputs),
        };

        cli.validate_args()?;
        Ok(cli)
    }

    fn validate_args(&self) -> Result<(), Error> {
        match self.input {
            None => return Err(Error::NoInput),
            Some(Input::File(ref path)) => exists(path)?,
            Some(Input::Hex(_)) => {}
        }

        if let Some(ref cfg) = self.config {
            exists(cfg)?;
        }

        Ok(())
    }
}

/// The value following a flag, which can't itself be a flag.
fn value(arg: Option<String>, name: &'static str) -> Result<String, Error> {
    match arg {
        Some(arg) if !NAMES.contains(&arg.as_str()) && !ABBRV.contains(&arg.as_str()) => Ok(arg),
        _ => Err(Error::Missing(name)),
    }
}

fn exists(path: &Path) -> Result<(), Error> {
    if path.exists() {
        Ok(())
    } else {
        Err(Error::PathDoesntExist(path.to_path_buf()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, Error> {
        Cli::try_parse_from(args.iter().copied())
    }

    #[test]
    fn positional_hex_is_joined() {
        let cli = parse(&["66", "0F3A40", "08", "A5"]).unwrap();
        assert_eq!(cli.input, Some(Input::Hex("66 0F3A40 08 A5".to_string())));
        assert_eq!(cli.bitness, None);
        assert!(!cli.verbose);
    }

    #[test]
    fn options() {
        let cli = parse(&["-B", "32", "--ip", "0x7c00", "-V", "90"]).unwrap();
        assert_eq!(cli.bitness, Some(Bitness::Bit32));
        assert_eq!(cli.ip, Some(0x7c00));
        assert!(cli.verbose);

        let cli = parse(&["--ip", "ffff", "C3"]).unwrap();
        assert_eq!(cli.ip, Some(0xffff));
    }

    #[test]
    fn bad_values() {
        assert_eq!(parse(&["-B", "8", "90"]), Err(Error::InvalidBitness("8".to_string())));
        assert_eq!(parse(&["-I", "xyz", "90"]), Err(Error::InvalidIp("xyz".to_string())));
        assert_eq!(parse(&["90", "-B"]), Err(Error::Missing("--bitness")));
        assert_eq!(parse(&["-B", "-V", "90"]), Err(Error::Missing("--bitness")));
        assert_eq!(parse(&["-V", "-V", "90"]), Err(Error::AlreadyGiven("--verbose")));
    }

    #[test]
    fn exactly_one_input() {
        assert_eq!(parse(&[]), Err(Error::NoInput));
        assert_eq!(parse(&["-V"]), Err(Error::NoInput));
        assert_eq!(parse(&["90", "-F", "Cargo.toml"]), Err(Error::MultipleInputs));
    }

    #[test]
    fn paths_must_exist() {
        let missing = PathBuf::from("/nonexistent/bytes.bin");
        assert_eq!(
            parse(&["-F", "/nonexistent/bytes.bin"]),
            Err(Error::PathDoesntExist(missing))
        );
        assert!(matches!(
            parse(&["-C", "/nonexistent/config.yaml", "90"]),
            Err(Error::PathDoesntExist(_))
        ));
    }

    #[test]
    fn suggestions() {
        assert_eq!(possible_arg("--bitnes"), Some("--bitness"));
        assert_eq!(possible_arg("--confgi"), Some("--config"));
        assert_eq!(possible_arg("--completely-wrong"), None);

        let err = parse(&["--verbos", "90"]).unwrap_err();
        assert_eq!(err.to_string(), "Unknown cmd arg '--verbos' did you mean '--verbose'?");
    }
}
