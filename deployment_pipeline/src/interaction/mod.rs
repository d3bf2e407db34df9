//!
//! The token interactor.
//!

pub mod roles;

#[cfg(test)]
mod tests;

use colored::Colorize;

use crate::chain::units;
use crate::chain::Token;
use crate::model::deployment::Record as DeploymentRecord;
use crate::model::report::balances::Balances;
use crate::model::report::gas::GasOutcome;
use crate::model::report::gas::GasUsage;
use crate::model::report::Entry as ReportEntry;
use crate::model::timestamp;
use crate::network::action::Action;
use crate::network::mode::Mode;
use crate::network::Category as NetworkCategory;
use crate::workspace::Workspace;

use self::roles::Roles;

///
/// The token bound to the deployed contract, together with the interaction roles.
///
#[derive(Debug)]
pub struct Session<T> {
    /// The token.
    pub token: T,
    /// The accounts taking part.
    pub roles: Roles,
}

///
/// The token interactor.
///
/// Exercises the latest deployed token with the operations the network category permits and
/// appends a report entry to the report log of the network.
///
#[derive(Debug)]
pub struct Interactor<'a> {
    /// The project workspace.
    workspace: &'a Workspace,
    /// The logical network name.
    network: &'a str,
    /// Whether to suppress the status output.
    quiet: bool,
}

impl<'a> Interactor<'a> {
    /// The amount transferred from the owner to the first user.
    pub const TRANSFER_AMOUNT: &'static str = "0.001";

    /// The amount minted to the second user.
    pub const MINT_AMOUNT: &'static str = "0.01";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(workspace: &'a Workspace, network: &'a str, quiet: bool) -> Self {
        Self {
            workspace,
            network,
            quiet,
        }
    }

    ///
    /// Runs the interaction.
    ///
    /// `connect` binds the token of the latest deployment. It is not called in the restricted
    /// mode, where the run returns `None` without touching the chain or the report log.
    ///
    pub fn run<T, C>(&self, connect: C) -> anyhow::Result<Option<ReportEntry>>
    where
        T: Token,
        C: FnOnce(&DeploymentRecord) -> anyhow::Result<Session<T>>,
    {
        let deployment = self.latest_deployment()?;

        let category = NetworkCategory::classify(self.network);
        let mode = category.mode();
        if !self.quiet {
            println!(
                "   {} to `{}` ({category} network, {mode} mode)",
                "Connected".bright_green().bold(),
                self.network,
            );
            println!(
                "    {} {} at {}, deployed {}",
                "Contract".bright_green().bold(),
                deployment.contract,
                deployment.address,
                deployment.timestamp.to_rfc3339(),
            );
        }

        if !mode.writes_report() {
            if !self.quiet {
                println!(
                    "    {} mainnet detected, exiting without executing any operations",
                    "Skipping".bright_yellow().bold(),
                );
            }
            return Ok(None);
        }

        let Session { token, roles } = connect(&deployment)?;

        let name = token.name()?;
        let symbol = token.symbol()?;
        let decimals = token.decimals()?;
        let total_supply_before = token.total_supply()?;
        if !self.quiet {
            println!(
                "       {} {name} ({symbol}), {decimals} decimals, total supply {} {symbol}",
                "Token".bright_green().bold(),
                units::format_units(total_supply_before, decimals),
            );
        }

        let transfer_amount = units::parse_units(Self::TRANSFER_AMOUNT, decimals)?;
        let mint_amount = units::parse_units(Self::MINT_AMOUNT, decimals)?;
        let outcome = |action: Action| {
            if !mode.permits(action) {
                return GasOutcome::Disabled;
            }
            let result = match action {
                Action::Transfer => token.transfer(roles.user1, transfer_amount),
                Action::Mint => token.mint(roles.user2, mint_amount),
                Action::TransferOwnership => token.transfer_ownership(roles.user1),
            };
            self.record(mode, action, result)
        };
        let gas_usage = GasUsage {
            transfer: outcome(Action::Transfer),
            mint: outcome(Action::Mint),
            transfer_ownership: outcome(Action::TransferOwnership),
        };

        let balance = |holder| -> anyhow::Result<String> {
            Ok(units::format_units(token.balance_of(holder)?, decimals))
        };
        let balances = Balances {
            owner: balance(roles.owner)?,
            user1: balance(roles.user1)?,
            user2: balance(roles.user2)?,
        };
        let total_supply_after = token.total_supply()?;
        if !self.quiet {
            println!(
                "    {} owner {} {symbol}, user1 {} {symbol}, user2 {} {symbol}, total supply {} {symbol}",
                "Balances".bright_green().bold(),
                balances.owner,
                balances.user1,
                balances.user2,
                units::format_units(total_supply_after, decimals),
            );
        }

        let entry = ReportEntry {
            timestamp: timestamp::now(),
            network: self.network.to_owned(),
            mode,
            contract: deployment.contract,
            address: deployment.address,
            gas_usage,
            balances,
            total_supply_before: units::format_units(total_supply_before, decimals),
            total_supply_after: units::format_units(total_supply_after, decimals),
        };
        let log = self.workspace.report_log(self.network);
        log.append(entry.clone())?;
        if !self.quiet {
            println!(
                "       {} interaction report to {:?}",
                "Saved".bright_green().bold(),
                log.path(),
            );
        }

        Ok(Some(entry))
    }

    ///
    /// Loads the latest deployment record of the network.
    ///
    fn latest_deployment(&self) -> anyhow::Result<DeploymentRecord> {
        let log = self.workspace.deployment_log(self.network);
        if !log.exists() {
            anyhow::bail!("No deployment file found for network: {}", self.network);
        }
        log.latest()?
            .ok_or_else(|| anyhow::anyhow!("Deployment log {:?} has no records", log.path()))
    }

    ///
    /// Converts the action result into the recorded outcome, reporting failures.
    ///
    fn record(&self, mode: Mode, action: Action, result: anyhow::Result<u64>) -> GasOutcome {
        match result {
            Ok(gas) => {
                if !self.quiet {
                    println!(
                        "   {} {action} in {mode} mode, gas used {gas}",
                        "Succeeded".bright_green().bold(),
                    );
                }
                GasOutcome::Recorded(gas)
            }
            Err(error) => {
                if !self.quiet {
                    println!("      {} {action}: {error}", "Failed".bright_red().bold());
                }
                GasOutcome::Failed
            }
        }
    }
}
