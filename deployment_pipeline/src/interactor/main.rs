//!
//! The token interactor executable.
//!

pub(crate) mod arguments;

use clap::Parser;
use colored::Colorize;

use deployment_pipeline::chain::address;

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
    workspace.load_environment()?;
    let network = deployment_pipeline::network::selected(arguments.network);
    let config = deployment_pipeline::Config::load(workspace.networks_config_path().as_path())?;

    let entry = deployment_pipeline::Interactor::new(&workspace, network.as_str(), arguments.quiet)
        .run(|deployment| {
            let client = deployment_pipeline::Client::connect(
                &config.network(network.as_str())?,
                &config,
            )?;
            let seed = format!(
                "{}:{}",
                deployment.address,
                chrono::Utc::now().timestamp_millis()
            );
            let roles = deployment_pipeline::Roles::from_signers(
                client.signers()?.as_slice(),
                seed.as_str(),
            )?;
            let token = client.token(
                address::parse(deployment.address.as_str())?,
                deployment.abi_json().as_slice(),
            )?;
            Ok(deployment_pipeline::Session { token, roles })
        })?;

    if entry.is_some() && !arguments.quiet {
        println!(
            "    {} interaction flow on `{network}`",
            "Finished".bright_green().bold(),
        );
    }

    Ok(())
}
