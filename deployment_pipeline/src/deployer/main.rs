//!
//! The contract deployer executable.
//!

pub(crate) mod arguments;

use clap::Parser;

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
    let client =
        deployment_pipeline::Client::connect(&config.network(network.as_str())?, &config)?;

    deployment_pipeline::Deployer::new(
        &workspace,
        network.as_str(),
        arguments.contract.as_str(),
        arguments.source.as_str(),
        arguments.quiet,
    )
    .run(&client)?;

    Ok(())
}
