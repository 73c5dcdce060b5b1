use std::fs;
use std::io::Read;

use wsgwire_frame::{decode_response_with, ChecksumMode, DecodeConfig};

use crate::cmd::DecodeArgs;
use crate::exit::{frame_error, io_error, CliError, CliResult, SUCCESS, USAGE};
use crate::hex::parse_hex;
use crate::output::{print_response, OutputFormat};

pub fn run(args: DecodeArgs, format: OutputFormat) -> CliResult<i32> {
    let buf = resolve_frame(&args)?;
    let config = DecodeConfig {
        checksum: if args.no_verify_checksum {
            ChecksumMode::Ignore
        } else {
            ChecksumMode::Verify
        },
    };
    tracing::debug!(len = buf.len(), checksum = ?config.checksum, "decoding frame");

    let msg = decode_response_with(&buf, &config).map_err(|err| {
        tracing::warn!(recovery = ?err.recovery(), "frame rejected");
        frame_error("decode failed", err)
    })?;

    let flags = if args.state_flags {
        let flags = msg.state_flags().ok_or_else(|| {
            CliError::new(
                USAGE,
                format!(
                    "--state-flags needs at least 4 parameter bytes, frame has {}",
                    msg.params().len()
                ),
            )
        })?;
        Some(flags)
    } else {
        None
    };

    print_response(
        &msg,
        config.checksum == ChecksumMode::Verify,
        flags,
        format,
    );
    Ok(SUCCESS)
}

fn resolve_frame(args: &DecodeArgs) -> CliResult<Vec<u8>> {
    if let Some(hex) = &args.hex {
        return parse_hex(hex);
    }
    if let Some(path) = &args.file {
        return fs::read(path)
            .map_err(|err| io_error(&format!("failed reading {}", path.display()), err));
    }
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .map_err(|err| io_error("failed reading stdin", err))?;
    parse_hex(&text)
}
