//!
//! The token interactor tests.
//!

use std::cell::Cell;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use web3::types::Address;
use web3::types::U256;

use crate::chain::Token;
use crate::model::deployment::Record as DeploymentRecord;
use crate::model::report::gas::GasOutcome;
use crate::model::timestamp;
use crate::network::action::Action;
use crate::network::mode::Mode;
use crate::workspace::Workspace;

use super::roles::Roles;
use super::Interactor;
use super::Session;

const TRANSFER_GAS: u64 = 34_512;
const MINT_GAS: u64 = 51_218;
const TRANSFER_OWNERSHIP_GAS: u64 = 28_742;

/// An in-memory ownable token with 18 decimals and 100 tokens minted to the owner.
struct MockToken {
    sender: Address,
    owner: Cell<Address>,
    balances: RefCell<HashMap<Address, U256>>,
    total_supply: Cell<U256>,
    failing: Vec<Action>,
    calls: Rc<RefCell<Vec<Action>>>,
}

impl MockToken {
    fn new(roles: &Roles, failing: Vec<Action>, calls: Rc<RefCell<Vec<Action>>>) -> Self {
        let initial_supply = U256::exp10(20);
        Self {
            sender: roles.owner,
            owner: Cell::new(roles.owner),
            balances: RefCell::new(HashMap::from([(roles.owner, initial_supply)])),
            total_supply: Cell::new(initial_supply),
            failing,
            calls,
        }
    }

    fn call(&self, action: Action) -> anyhow::Result<()> {
        self.calls.borrow_mut().push(action);
        if self.failing.contains(&action) {
            anyhow::bail!("execution reverted");
        }
        Ok(())
    }

    fn credit(&self, holder: Address, amount: U256) {
        *self.balances.borrow_mut().entry(holder).or_default() += amount;
    }
}

impl Token for MockToken {
    fn name(&self) -> anyhow::Result<String> {
        Ok("MyToken".to_owned())
    }

    fn symbol(&self) -> anyhow::Result<String> {
        Ok("MTK".to_owned())
    }

    fn decimals(&self) -> anyhow::Result<u32> {
        Ok(18)
    }

    fn total_supply(&self) -> anyhow::Result<U256> {
        Ok(self.total_supply.get())
    }

    fn balance_of(&self, holder: Address) -> anyhow::Result<U256> {
        Ok(self
            .balances
            .borrow()
            .get(&holder)
            .copied()
            .unwrap_or_default())
    }

    fn transfer(&self, to: Address, amount: U256) -> anyhow::Result<u64> {
        self.call(Action::Transfer)?;
        let balance = self.balance_of(self.sender)?;
        if balance < amount {
            anyhow::bail!("ERC20InsufficientBalance");
        }
        self.balances.borrow_mut().insert(self.sender, balance - amount);
        self.credit(to, amount);
        Ok(TRANSFER_GAS)
    }

    fn mint(&self, to: Address, amount: U256) -> anyhow::Result<u64> {
        self.call(Action::Mint)?;
        if self.owner.get() != self.sender {
            anyhow::bail!("OwnableUnauthorizedAccount");
        }
        self.credit(to, amount);
        self.total_supply.set(self.total_supply.get() + amount);
        Ok(MINT_GAS)
    }

    fn transfer_ownership(&self, new_owner: Address) -> anyhow::Result<u64> {
        self.call(Action::TransferOwnership)?;
        if self.owner.get() != self.sender {
            anyhow::bail!("OwnableUnauthorizedAccount");
        }
        self.owner.set(new_owner);
        Ok(TRANSFER_OWNERSHIP_GAS)
    }
}

fn roles() -> Roles {
    Roles {
        owner: Address::repeat_byte(0x01),
        user1: Address::repeat_byte(0x02),
        user2: Address::repeat_byte(0x03),
    }
}

fn workspace_with_deployment(network: &str) -> (tempfile::TempDir, Workspace) {
    let directory = tempfile::tempdir().expect("Temporary directory");
    let workspace = Workspace::open(directory.path().to_path_buf()).expect("Workspace");
    workspace
        .deployment_log(network)
        .append(DeploymentRecord {
            contract: "MyToken".to_owned(),
            address: "0xABC".to_owned(),
            network: network.to_owned(),
            timestamp: timestamp::now(),
            deployer: "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266".to_owned(),
            abi: vec![],
        })
        .expect("Deployment log");
    (directory, workspace)
}

fn connect(
    failing: Vec<Action>,
    calls: Rc<RefCell<Vec<Action>>>,
) -> impl FnOnce(&DeploymentRecord) -> anyhow::Result<Session<MockToken>> {
    move |_deployment| {
        let roles = roles();
        Ok(Session {
            token: MockToken::new(&roles, failing, calls),
            roles,
        })
    }
}

#[test]
fn full_mode_attempts_every_action() {
    let (_directory, workspace) = workspace_with_deployment("localhost");
    let calls = Rc::new(RefCell::new(Vec::new()));

    let entry = Interactor::new(&workspace, "localhost", true)
        .run(connect(vec![], calls.clone()))
        .expect("Interaction")
        .expect("Report entry");

    assert_eq!(entry.mode, Mode::Full);
    assert_eq!(calls.borrow().as_slice(), &Action::ALL);
    assert_eq!(entry.gas_usage.attempted(), 3);
    assert_eq!(entry.gas_usage.transfer, GasOutcome::Recorded(TRANSFER_GAS));
    assert_eq!(entry.gas_usage.mint, GasOutcome::Recorded(MINT_GAS));
    assert_eq!(
        entry.gas_usage.transfer_ownership,
        GasOutcome::Recorded(TRANSFER_OWNERSHIP_GAS)
    );
    assert_eq!(entry.balances.owner, "99.999");
    assert_eq!(entry.balances.user1, "0.001");
    assert_eq!(entry.balances.user2, "0.01");
    assert_eq!(entry.total_supply_before, "100.0");
    assert_eq!(entry.total_supply_after, "100.01");

    let report = workspace.report_log("localhost").load().expect("Report log");
    assert_eq!(report, vec![entry]);
}

#[test]
fn safe_mode_attempts_only_the_transfer() {
    let (_directory, workspace) = workspace_with_deployment("sepolia");
    let calls = Rc::new(RefCell::new(Vec::new()));

    let entry = Interactor::new(&workspace, "sepolia", true)
        .run(connect(vec![], calls.clone()))
        .expect("Interaction")
        .expect("Report entry");

    assert_eq!(entry.mode, Mode::Safe);
    assert_eq!(calls.borrow().as_slice(), &[Action::Transfer]);
    assert_eq!(entry.gas_usage.attempted(), 1);
    assert_eq!(entry.gas_usage.mint, GasOutcome::Disabled);
    assert_eq!(entry.gas_usage.transfer_ownership, GasOutcome::Disabled);
    assert_eq!(entry.total_supply_before, entry.total_supply_after);
    assert_eq!(
        workspace.report_log("sepolia").load().expect("Report log").len(),
        1
    );
}

#[test]
fn restricted_mode_neither_connects_nor_writes() {
    for network in ["mainnet", "polygon", ""] {
        let (_directory, workspace) = workspace_with_deployment(network);
        let report_log = workspace.report_log(network);
        std::fs::create_dir_all(workspace.reports_directory()).expect("Create");
        std::fs::write(report_log.path(), "[]").expect("Write");
        let connected = Cell::new(false);

        let entry = Interactor::new(&workspace, network, true)
            .run(|_deployment| -> anyhow::Result<Session<MockToken>> {
                connected.set(true);
                anyhow::bail!("Must not connect")
            })
            .expect("Interaction");

        assert!(entry.is_none());
        assert!(!connected.get());
        assert!(report_log.load().expect("Report log").is_empty());
        assert_eq!(
            std::fs::read_to_string(report_log.path()).expect("Read"),
            "[]"
        );
    }
}

#[test]
fn failed_action_is_recorded_and_execution_continues() {
    let (_directory, workspace) = workspace_with_deployment("hardhat");
    let calls = Rc::new(RefCell::new(Vec::new()));

    let entry = Interactor::new(&workspace, "hardhat", true)
        .run(connect(vec![Action::Mint], calls.clone()))
        .expect("Interaction")
        .expect("Report entry");

    assert_eq!(calls.borrow().as_slice(), &Action::ALL);
    assert_eq!(entry.gas_usage.transfer, GasOutcome::Recorded(TRANSFER_GAS));
    assert_eq!(entry.gas_usage.mint, GasOutcome::Failed);
    assert_eq!(
        entry.gas_usage.transfer_ownership,
        GasOutcome::Recorded(TRANSFER_OWNERSHIP_GAS)
    );
    assert_eq!(entry.balances.user2, "0.0");
    assert_eq!(entry.total_supply_after, "100.0");
}

#[test]
fn missing_deployment_file_is_fatal() {
    let directory = tempfile::tempdir().expect("Temporary directory");
    let workspace = Workspace::open(directory.path().to_path_buf()).expect("Workspace");
    let calls = Rc::new(RefCell::new(Vec::new()));

    let error = Interactor::new(&workspace, "localhost", true)
        .run(connect(vec![], calls.clone()))
        .expect_err("Missing deployment file");

    assert_eq!(
        error.to_string(),
        "No deployment file found for network: localhost"
    );
    assert!(calls.borrow().is_empty());
    assert!(!workspace.report_log("localhost").exists());
}

#[test]
fn empty_deployment_log_is_fatal() {
    let directory = tempfile::tempdir().expect("Temporary directory");
    let workspace = Workspace::open(directory.path().to_path_buf()).expect("Workspace");
    std::fs::create_dir_all(workspace.deployments_directory()).expect("Create");
    std::fs::write(workspace.deployment_log("localhost").path(), "[]").expect("Write");
    let calls = Rc::new(RefCell::new(Vec::new()));

    let result =
        Interactor::new(&workspace, "localhost", true).run(connect(vec![], calls.clone()));

    assert!(result.is_err());
    assert!(calls.borrow().is_empty());
}

#[test]
fn end_to_end_report_on_localhost() {
    let (_directory, workspace) = workspace_with_deployment("localhost");
    let calls = Rc::new(RefCell::new(Vec::new()));

    Interactor::new(&workspace, "localhost", true)
        .run(connect(vec![Action::TransferOwnership], calls))
        .expect("Interaction");

    let report = workspace
        .raw_report_log("localhost")
        .load()
        .expect("Report log");
    assert_eq!(report.len(), 1);
    let entry = &report[0];
    assert_eq!(entry["mode"], "FULL");
    assert_eq!(entry["network"], "localhost");
    assert_eq!(entry["contract"], "MyToken");
    assert_eq!(entry["address"], "0xABC");
    for key in ["transfer", "mint", "transferOwnership"] {
        let gas = entry["gasUsage"][key].as_str().expect("Gas string");
        assert!(
            gas == GasOutcome::FAILED || gas.parse::<u64>().is_ok(),
            "unexpected gas value `{gas}` for `{key}`"
        );
    }
    assert_eq!(entry["gasUsage"]["transferOwnership"], "FAILED");
    assert!(entry["totalSupplyBefore"].is_string());
    assert!(entry["totalSupplyAfter"].is_string());
}

#[test]
fn appends_after_an_entry_with_numeric_supply() {
    let (_directory, workspace) = workspace_with_deployment("localhost");
    let report_log = workspace.report_log("localhost");
    std::fs::create_dir_all(workspace.reports_directory()).expect("Create directory");
    std::fs::write(
        report_log.path(),
        r#"[
  {
    "timestamp": "2024-01-01T00:00:00.000Z",
    "network": "localhost",
    "mode": "FULL",
    "contract": "MyToken",
    "address": "0xABC",
    "gasUsage": { "transfer": "51000", "mint": "68000", "transferOwnership": "28000" },
    "balances": { "owner": "99.999", "user1": "0.001", "user2": "0.01" },
    "totalSupplyBefore": 100,
    "totalSupplyAfter": 100.01
  }
]"#,
    )
    .expect("Write");
    let raw_log = workspace.raw_report_log("localhost");
    let before = raw_log.load().expect("Report log");
    let calls = Rc::new(RefCell::new(Vec::new()));

    let entry = Interactor::new(&workspace, "localhost", true)
        .run(connect(vec![], calls.clone()))
        .expect("Interaction")
        .expect("Report entry");

    assert_eq!(calls.borrow().as_slice(), &Action::ALL);
    let after = raw_log.load().expect("Report log");
    assert_eq!(after.len(), 2);
    assert_eq!(after[0], before[0]);
    assert_eq!(after[0]["totalSupplyBefore"], 100);
    assert_eq!(after[1]["totalSupplyBefore"], "100.0");
    assert_eq!(after[1]["gasUsage"]["mint"], MINT_GAS.to_string());
    assert_eq!(entry.total_supply_after, "100.01");
}
