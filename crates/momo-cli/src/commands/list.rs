//! Implementation of the `momo list` command.

use serde_json::json;

use momo_core::domain::Flavor;

use crate::{
    cli::{ListArgs, ListFormat},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, output: OutputManager) -> CliResult<()> {
    match args.format {
        ListFormat::Table => {
            output.header("Available component flavors:")?;
            for flavor in Flavor::ALL {
                let name = format!("{:<10}", flavor.as_str());
                output.print(&format!("  {}{}", output.accent(&name), flavor.description()))?;
            }
        }

        ListFormat::List => {
            for flavor in Flavor::ALL {
                println!("{flavor}");
            }
        }

        ListFormat::Json => {
            // Straight to stdout so it stays parseable in quiet mode too.
            let flavors: Vec<_> = Flavor::ALL
                .iter()
                .map(|f| {
                    json!({
                        "name": f.as_str(),
                        "label": f.label(),
                        "description": f.description(),
                        "preset": f.preset_file(),
                    })
                })
                .collect();
            let rendered = serde_json::to_string_pretty(&flavors).unwrap_or_else(|_| "[]".into());
            println!("{rendered}");
        }
    }

    Ok(())
}
