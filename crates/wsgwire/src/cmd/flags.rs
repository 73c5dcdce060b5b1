use wsgwire_frame::StateFlags;

use crate::cmd::FlagsArgs;
use crate::exit::{CliResult, SUCCESS};
use crate::output::{print_json, FlagsOutput, OutputFormat};

pub fn run(args: FlagsArgs, format: OutputFormat) -> CliResult<i32> {
    let flags = StateFlags::from_bits(args.value);
    if flags.reserved_bits() != 0 {
        tracing::warn!(
            reserved = flags.reserved_bits(),
            "reserved state bits are set"
        );
    }

    match format {
        OutputFormat::Json => print_json(&FlagsOutput::from(flags)),
        OutputFormat::Table | OutputFormat::Pretty => {
            println!("State flags {:#010x}:", flags.bits());
            if flags.is_empty() {
                println!("  (none)");
            }
            for (name, flag) in StateFlags::NAMED {
                if flags.contains(*flag) {
                    println!("  [{:>2}] {name}", flag.bits().trailing_zeros());
                }
            }
            if flags.reserved_bits() != 0 {
                println!("  reserved bits: {:#010x}", flags.reserved_bits());
            }
            if flags.has_fault() {
                println!("  fault condition present");
            }
        }
        OutputFormat::Raw => println!("{flags}"),
    }
    Ok(SUCCESS)
}
