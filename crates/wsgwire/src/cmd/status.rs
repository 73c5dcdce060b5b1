use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;
use wsgwire_frame::StatusCode;

use crate::cmd::StatusArgs;
use crate::exit::{CliResult, SUCCESS};
use crate::output::{print_json, OutputFormat, StatusOutput};

#[derive(Serialize)]
struct StatusListOutput {
    schema_id: &'static str,
    codes: Vec<StatusOutput>,
}

pub fn run(args: StatusArgs, format: OutputFormat) -> CliResult<i32> {
    let codes: Vec<StatusCode> = match args.code {
        Some(code) => vec![code],
        None => StatusCode::ALL.to_vec(),
    };

    match format {
        OutputFormat::Json => print_json(&StatusListOutput {
            schema_id: "https://schemas.3leaps.dev/wsgwire/cli/v1/status-codes.schema.json",
            codes: codes.into_iter().map(StatusOutput::from).collect(),
        }),
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["CODE", "NAME", "DESCRIPTION"]);
            for code in codes {
                table.add_row(vec![
                    code.as_raw().to_string(),
                    code.name().to_string(),
                    code.description().to_string(),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for code in codes {
                println!("{:>5}  {:<26} {}", code.as_raw(), code.name(), code.description());
            }
        }
        OutputFormat::Raw => {
            for code in codes {
                println!("{}", code.name());
            }
        }
    }
    Ok(SUCCESS)
}
