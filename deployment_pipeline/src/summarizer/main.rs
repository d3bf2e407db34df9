//!
//! The interaction report summarizer executable.
//!

pub(crate) mod arguments;

use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() {
    let exit_code = match Arguments::try_parse()
        .map_err(|error| anyhow::anyhow!(error))
        .and_then(main_inner)
    {
        Ok(()) => deployment_pipeline::EXIT_CODE_SUCCESS,
        Err(error) => {
            eprintln!("{error:?}");
            deployment_pipeline::EXIT_CODE_FAILURE
        }
    };
    std::process::exit(exit_code);
}

///
/// The entry point wrapper used for proper error handling.
///
fn main_inner(arguments: Arguments) -> anyhow::Result<()> {
    let workspace = deployment_pipeline::Workspace::open(arguments.workspace)?;

    let log = workspace.raw_report_log(arguments.network.as_str());
    if !log.exists() {
        anyhow::bail!("No JSON report found at {:?}", log.path());
    }
    let entries = log.load()?;
    let summary = deployment_pipeline::Summary::from(entries.as_slice());

    let output = arguments.output.unwrap_or_else(|| workspace.summary_path());
    summary.write_to_file(output.as_path())?;

    if !arguments.quiet {
        println!(
            "     {} {} report entries to {output:?}",
            "Summarized".bright_green().bold(),
            summary.rows.len(),
        );
    }

    Ok(())
}
