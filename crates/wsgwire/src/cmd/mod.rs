use clap::{Args, Subcommand};
use std::path::PathBuf;
use wsgwire_frame::StatusCode;

use crate::exit::CliResult;
use crate::hex::parse_uint;
use crate::output::OutputFormat;

pub mod decode;
pub mod encode;
pub mod flags;
pub mod status;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode a captured response frame.
    Decode(DecodeArgs),
    /// Build a response frame as a device would send it.
    Encode(EncodeArgs),
    /// List status codes or describe one.
    Status(StatusArgs),
    /// Decode a state-flag word.
    Flags(FlagsArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Decode(args) => decode::run(args, format),
        Command::Encode(args) => encode::run(args, format),
        Command::Status(args) => status::run(args, format),
        Command::Flags(args) => flags::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Frame as hex text. Read from stdin when neither this nor --file is given.
    #[arg(conflicts_with = "file")]
    pub hex: Option<String>,
    /// Read the raw frame bytes from a file.
    #[arg(long, conflicts_with = "hex")]
    pub file: Option<PathBuf>,
    /// Accept frames whose checksum does not match.
    #[arg(long)]
    pub no_verify_checksum: bool,
    /// Also interpret the parameters as a state-flag word.
    #[arg(long)]
    pub state_flags: bool,
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Command id (decimal or 0x hex).
    #[arg(long, value_parser = parse_command_id)]
    pub command: u8,
    /// Status code, by number or name (e.g. 14 or E_CMD_UNKNOWN).
    #[arg(long, default_value = "0", value_parser = parse_status)]
    pub status: StatusCode,
    /// Parameter bytes as hex.
    #[arg(long, default_value = "")]
    pub params: String,
}

#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Status code by number or name. Lists every known code when omitted.
    #[arg(value_parser = parse_status)]
    pub code: Option<StatusCode>,
}

#[derive(Args, Debug)]
pub struct FlagsArgs {
    /// State-flag word (decimal or 0x hex).
    #[arg(value_parser = parse_flag_word)]
    pub value: u32,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

fn parse_command_id(input: &str) -> Result<u8, String> {
    let value = parse_uint(input)?;
    u8::try_from(value).map_err(|_| format!("command id {value} does not fit in one byte"))
}

fn parse_flag_word(input: &str) -> Result<u32, String> {
    let value = parse_uint(input)?;
    u32::try_from(value).map_err(|_| format!("state word {value} does not fit in 32 bits"))
}

/// Accepts a numeric code or a name, with or without the `E_` prefix.
pub fn parse_status(input: &str) -> Result<StatusCode, String> {
    if let Ok(value) = parse_uint(input) {
        let raw = u16::try_from(value)
            .map_err(|_| format!("status code {value} does not fit in 16 bits"))?;
        return Ok(StatusCode::from_raw(raw));
    }

    let wanted = input.trim().to_ascii_uppercase();
    let wanted = wanted.strip_prefix("E_").unwrap_or(&wanted);
    StatusCode::ALL
        .iter()
        .copied()
        .find(|status| status.name().strip_prefix("E_") == Some(wanted))
        .ok_or_else(|| format!("unknown status code: {input}"))
}
