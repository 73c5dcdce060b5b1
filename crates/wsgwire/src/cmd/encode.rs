use bytes::BytesMut;
use serde::Serialize;
use wsgwire_frame::encode_response;

use crate::cmd::EncodeArgs;
use crate::exit::{frame_error, CliResult, SUCCESS};
use crate::hex::{parse_hex, to_hex};
use crate::output::{print_json, print_raw, OutputFormat};

#[derive(Serialize)]
struct EncodeOutput {
    schema_id: &'static str,
    command: u8,
    status: u16,
    size: usize,
    frame: String,
}

pub fn run(args: EncodeArgs, format: OutputFormat) -> CliResult<i32> {
    let params = parse_hex(&args.params)?;
    let mut buf = BytesMut::new();
    encode_response(args.command, args.status, &params, &mut buf)
        .map_err(|err| frame_error("encode failed", err))?;
    tracing::debug!(
        command = args.command,
        status = %args.status,
        size = buf.len(),
        "encoded frame"
    );

    match format {
        OutputFormat::Json => print_json(&EncodeOutput {
            schema_id: "https://schemas.3leaps.dev/wsgwire/cli/v1/encoded-frame.schema.json",
            command: args.command,
            status: args.status.as_raw(),
            size: buf.len(),
            frame: to_hex(&buf),
        }),
        OutputFormat::Table | OutputFormat::Pretty => println!("{}", to_hex(&buf)),
        OutputFormat::Raw => print_raw(&buf),
    }
    Ok(SUCCESS)
}
