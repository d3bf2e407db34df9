//!
//! The gated token operations.
//!

///
/// The gated token operations, in execution order.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Transfers tokens from the owner to the first user.
    Transfer,
    /// Mints new tokens to the second user.
    Mint,
    /// Transfers the contract ownership to the first user.
    TransferOwnership,
}

impl Action {
    /// All actions in execution order.
    pub const ALL: [Self; 3] = [Self::Transfer, Self::Mint, Self::TransferOwnership];
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transfer => write!(f, "transfer"),
            Self::Mint => write!(f, "mint"),
            Self::TransferOwnership => write!(f, "transferOwnership"),
        }
    }
}
