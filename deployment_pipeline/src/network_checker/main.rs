//!
//! The network checker executable.
//!

pub(crate) mod arguments;

use clap::Parser;
use colored::Colorize;

use deployment_pipeline::chain::address;
use deployment_pipeline::chain::token::ERC20_VIEW_ABI;
use deployment_pipeline::chain::units;
use deployment_pipeline::Token;

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
    let workspace = deployment_pipeline::Workspace::open(arguments.workspace.clone())?;
    workspace.load_environment()?;
    let network = deployment_pipeline::network::selected(arguments.network.clone());
    let config = deployment_pipeline::Config::load(workspace.networks_config_path().as_path())?;
    let network_config = config.network(network.as_str())?;

    println!(
        "    {} `{network}` at {}",
        "Checking".bright_green().bold(),
        network_config.resolve_url(),
    );
    let client = deployment_pipeline::Client::connect(&network_config, &config)?;
    println!(
        "   {} to `{network}` (chain ID {})",
        "Connected".bright_green().bold(),
        client.chain_id(),
    );

    let account = client.account();
    println!(
        "     {} {}",
        "Account".bright_green().bold(),
        address::to_checksum(&account),
    );
    let balance = client.balance(account)?;
    println!(
        "     {} {} ETH",
        "Balance".bright_green().bold(),
        units::format_units(balance, units::ETHER_DECIMALS),
    );

    if let Some(token) = arguments.token(network.as_str()) {
        let token = client.token(address::parse(token.as_str())?, ERC20_VIEW_ABI.as_bytes())?;
        let symbol = token.symbol()?;
        let decimals = token.decimals()?;
        let balance = token.balance_of(account)?;
        println!(
            "     {} {} {symbol}",
            "Balance".bright_green().bold(),
            units::format_units(balance, decimals),
        );
    }

    println!("    {} everything looks good", "Finished".bright_green().bold());

    Ok(())
}
