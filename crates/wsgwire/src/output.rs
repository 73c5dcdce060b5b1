use std::io::{IsTerminal, Write};

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;
use wsgwire_frame::{ResponseMessage, StateFlags, StatusCode};

use crate::hex::to_hex;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
pub struct StatusOutput {
    pub code: u16,
    pub name: &'static str,
    pub description: &'static str,
    pub known: bool,
}

impl From<StatusCode> for StatusOutput {
    fn from(status: StatusCode) -> Self {
        Self {
            code: status.as_raw(),
            name: status.name(),
            description: status.description(),
            known: status.is_known(),
        }
    }
}

#[derive(Serialize)]
pub struct FlagsOutput {
    pub bits: u32,
    pub hex: String,
    pub names: Vec<&'static str>,
    pub reserved_bits: u32,
    pub fault: bool,
}

impl From<StateFlags> for FlagsOutput {
    fn from(flags: StateFlags) -> Self {
        Self {
            bits: flags.bits(),
            hex: format!("{:#010x}", flags.bits()),
            names: flags.iter_names().collect(),
            reserved_bits: flags.reserved_bits(),
            fault: flags.has_fault(),
        }
    }
}

#[derive(Serialize)]
struct ResponseOutput<'a> {
    schema_id: &'a str,
    command: u8,
    status: StatusOutput,
    params_size: usize,
    params: String,
    checksum_verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    state_flags: Option<FlagsOutput>,
}

pub fn print_response(
    msg: &ResponseMessage,
    checksum_verified: bool,
    flags: Option<StateFlags>,
    format: OutputFormat,
) {
    match format {
        OutputFormat::Json => {
            let out = ResponseOutput {
                schema_id: "https://schemas.3leaps.dev/wsgwire/cli/v1/response-frame.schema.json",
                command: msg.command(),
                status: msg.status().into(),
                params_size: msg.params().len(),
                params: to_hex(msg.params()),
                checksum_verified,
                state_flags: flags.map(FlagsOutput::from),
            };
            print_json(&out);
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["FIELD", "VALUE"])
                .add_row(vec![
                    "command".to_string(),
                    format!("{:#04x} ({})", msg.command(), msg.command()),
                ])
                .add_row(vec!["status".to_string(), msg.status().to_string()])
                .add_row(vec![
                    "description".to_string(),
                    msg.status().description().to_string(),
                ])
                .add_row(vec![
                    "params".to_string(),
                    format!("[{}] {}", msg.params().len(), to_hex(msg.params())),
                ])
                .add_row(vec![
                    "checksum".to_string(),
                    checksum_text(checksum_verified).to_string(),
                ]);
            if let Some(flags) = flags {
                table.add_row(vec!["state flags".to_string(), flags.to_string()]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            let mut line = format!(
                "command={:#04x} status={} params=[{}] checksum={}",
                msg.command(),
                msg.status(),
                to_hex(msg.params()),
                checksum_text(checksum_verified)
            );
            if let Some(flags) = flags {
                line.push_str(&format!(" flags={flags}"));
            }
            println!("{line}");
        }
        OutputFormat::Raw => {
            print_raw(msg.params());
        }
    }
}

pub fn print_json<T: Serialize>(value: &T) {
    println!(
        "{}",
        serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
    );
}

pub fn print_raw(data: &[u8]) {
    let mut out = std::io::stdout();
    let _ = out.write_all(data);
    let _ = out.flush();
}

fn checksum_text(verified: bool) -> &'static str {
    if verified {
        "verified"
    } else {
        "not checked"
    }
}
