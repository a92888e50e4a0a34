use std::error::Error;

use clap::{Parser, Subcommand};
use mactypes::{
    os_type_to_string_or_hex, resolve_current_legacy_encoding, try_os_type_to_string,
    CarbonFolderIcon, CarbonToolbarIcon, OsType, PascalStringDecoder,
};
use serde::Serialize;

type CmdResult = Result<String, Box<dyn Error>>;

#[derive(Parser, Debug)]
#[command(name = "ostype")]
#[command(about = "Classic Mac OS type codes and Pascal strings", long_about = None)]
struct Cli {
    /// Tracing filter, overriding RUST_LOG
    #[arg(long, global = true)]
    log: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the text form of a type code
    Decode {
        /// Decimal or 0x-prefixed hex code
        #[arg(value_parser = parse_code)]
        code: u32,

        /// Fail instead of printing hex for unprintable codes
        #[arg(long)]
        strict: bool,
    },
    /// Print the type code for some text
    Encode {
        /// Up to four Mac OS Roman characters
        #[arg(allow_hyphen_values = true)]
        text: String,

        /// Accept hex codes longer than four characters
        #[arg(long)]
        hex: bool,
    },
    /// Decode a Pascal string given as hex bytes, length byte first
    Pascal {
        /// Hex digits; whitespace is ignored
        #[arg(allow_hyphen_values = true, value_parser = parse_hex_bytes)]
        bytes: HexBytes,

        /// Longest accepted payload
        #[arg(long)]
        max: Option<u8>,

        /// Encoding label, or `current` for the host's legacy encoding
        #[arg(long)]
        encoding: Option<String>,
    },
    /// List the Carbon icon type codes as JSON
    Icons,
    /// Print the host's legacy encoding
    Encoding,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct HexBytes(Vec<u8>);

#[derive(Debug, Serialize)]
struct IconJson {
    family: &'static str,
    name: serde_json::Value,
    code: OsType,
    value: u32,
}

fn main() {
    let cli = Cli::parse();
    mactypes::logging::init_tracing(cli.log.as_deref());

    match run(cli.command) {
        Ok(out) => println!("{}", out),
        Err(err) => {
            eprintln!("ostype: {}", err);
            std::process::exit(1);
        }
    }
}

fn run(command: Commands) -> CmdResult {
    match command {
        Commands::Decode { code, strict } => cmd_decode(code, strict),
        Commands::Encode { text, hex } => cmd_encode(&text, hex),
        Commands::Pascal {
            bytes,
            max,
            encoding,
        } => cmd_pascal(&bytes, max, encoding.as_deref()),
        Commands::Icons => cmd_icons(),
        Commands::Encoding => Ok(resolve_current_legacy_encoding().to_string()),
    }
}

fn cmd_decode(code: u32, strict: bool) -> CmdResult {
    if strict {
        return Ok(try_os_type_to_string(code)?);
    }
    Ok(os_type_to_string_or_hex(code))
}

fn cmd_encode(text: &str, hex: bool) -> CmdResult {
    let code = mactypes::to_os_type(text, hex);
    Ok(format!("0x{:08X} {}", code, code))
}

fn cmd_pascal(bytes: &HexBytes, max: Option<u8>, encoding: Option<&str>) -> CmdResult {
    let mut decoder = match encoding {
        Some("current") => PascalStringDecoder::current_classic(),
        Some(label) => PascalStringDecoder::with_label(label)?,
        None => PascalStringDecoder::default(),
    };
    if let Some(max) = max {
        decoder = decoder.maximum_length(max);
    }
    Ok(decoder.try_decode_bytes(&bytes.0)?)
}

fn cmd_icons() -> CmdResult {
    let mut icons = Vec::new();
    for icon in CarbonToolbarIcon::ALL {
        icons.push(IconJson {
            family: "toolbar",
            name: serde_json::to_value(icon)?,
            code: icon.os_type(),
            value: *icon as u32,
        });
    }
    for icon in CarbonFolderIcon::ALL {
        icons.push(IconJson {
            family: "folder",
            name: serde_json::to_value(icon)?,
            code: icon.os_type(),
            value: *icon as u32,
        });
    }
    Ok(serde_json::to_string_pretty(&icons)?)
}

fn parse_code(raw: &str) -> Result<u32, String> {
    let parsed = match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => raw.parse(),
    };
    parsed.map_err(|err| format!("`{}` is not a u32 type code: {}", raw, err))
}

fn parse_hex_bytes(raw: &str) -> Result<HexBytes, String> {
    let digits: Vec<u8> = raw.bytes().filter(|b| !b.is_ascii_whitespace()).collect();
    if digits.len() % 2 != 0 {
        return Err("hex input must have an even number of digits".to_string());
    }
    digits
        .chunks_exact(2)
        .map(|pair| {
            std::str::from_utf8(pair)
                .ok()
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(|| format!("`{}` is not a hex byte", String::from_utf8_lossy(pair)))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(HexBytes)
}
