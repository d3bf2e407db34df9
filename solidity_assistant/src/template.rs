//!
//! The contract templates.
//!

use crate::document::ActiveDocument;

/// The ownable, mintable ERC-20 token the deployment pipeline works with.
pub const ERC20_TEMPLATE: &str = r#"// SPDX-License-Identifier: MIT
pragma solidity ^0.8.20;

import "@openzeppelin/contracts/token/ERC20/ERC20.sol";
import "@openzeppelin/contracts/access/Ownable.sol";

contract MyToken is ERC20, Ownable {
    constructor(address initialOwner) ERC20("MyToken", "MTK") Ownable(initialOwner) {
        // Mint 100 tokens to the initial owner
        _mint(initialOwner, 100 * 10**decimals());
    }

    function mint(address to, uint256 amount) public onlyOwner {
        _mint(to, amount);
    }
}"#;

///
/// Inserts the ERC-20 template at the insertion line of the document.
///
pub fn insert_erc20(document: &mut ActiveDocument) {
    document.insert_at_line(ERC20_TEMPLATE);
}
