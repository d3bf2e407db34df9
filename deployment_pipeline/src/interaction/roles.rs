//!
//! The interaction roles.
//!

use web3::types::Address;

use crate::chain::address;

///
/// The accounts taking part in the interaction.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Roles {
    /// The contract owner and transaction sender.
    pub owner: Address,
    /// The transfer recipient and the new owner.
    pub user1: Address,
    /// The mint recipient.
    pub user2: Address,
}

impl Roles {
    ///
    /// Assigns the roles to the available signers in order.
    ///
    /// The users without a signer get throwaway addresses derived from the seed.
    ///
    pub fn from_signers(signers: &[Address], seed: &str) -> anyhow::Result<Self> {
        let owner = signers
            .first()
            .copied()
            .ok_or_else(|| anyhow::anyhow!("No signer accounts available"))?;
        let user = |index: usize, name: &str| {
            signers
                .get(index)
                .copied()
                .unwrap_or_else(|| address::throwaway(format!("{seed}:{name}").as_str()))
        };

        Ok(Self {
            owner,
            user1: user(1, "user1"),
            user2: user(2, "user2"),
        })
    }
}

#[cfg(test)]
mod tests {
    use web3::types::Address;

    use super::Roles;

    #[test]
    fn signers_in_order() {
        let signers = [
            Address::repeat_byte(1),
            Address::repeat_byte(2),
            Address::repeat_byte(3),
            Address::repeat_byte(4),
        ];

        let roles = Roles::from_signers(&signers, "seed").expect("Roles");

        assert_eq!(roles.owner, signers[0]);
        assert_eq!(roles.user1, signers[1]);
        assert_eq!(roles.user2, signers[2]);
    }

    #[test]
    fn throwaway_users_for_a_single_signer() {
        let owner = Address::repeat_byte(1);

        let roles = Roles::from_signers(&[owner], "seed").expect("Roles");

        assert_eq!(roles.owner, owner);
        assert_ne!(roles.user1, owner);
        assert_ne!(roles.user2, owner);
        assert_ne!(roles.user1, roles.user2);
    }

    #[test]
    fn no_signers_is_an_error() {
        assert!(Roles::from_signers(&[], "seed").is_err());
    }
}
