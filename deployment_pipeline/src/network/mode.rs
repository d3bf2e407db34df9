//!
//! The interaction mode.
//!

use serde::Deserialize;
use serde::Serialize;

use crate::network::action::Action;

///
/// The interaction mode, deciding which gated operations may run.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Mode {
    /// Every operation is attempted.
    Full,
    /// Only the token transfer is attempted.
    Safe,
    /// Nothing is attempted and no report is written.
    Restricted,
}

impl Mode {
    ///
    /// Whether the action may be attempted in this mode.
    ///
    pub fn permits(self, action: Action) -> bool {
        match (self, action) {
            (Self::Full, _) => true,
            (Self::Safe, Action::Transfer) => true,
            (Self::Safe, _) => false,
            (Self::Restricted, _) => false,
        }
    }

    ///
    /// Whether a run in this mode produces a report entry.
    ///
    pub fn writes_report(self) -> bool {
        !matches!(self, Self::Restricted)
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Full => write!(f, "FULL"),
            Self::Safe => write!(f, "SAFE"),
            Self::Restricted => write!(f, "RESTRICTED"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Action;
    use super::Mode;

    #[test]
    fn permissions() {
        let permitted = |mode: Mode| {
            Action::ALL
                .into_iter()
                .filter(|action| mode.permits(*action))
                .collect::<Vec<Action>>()
        };

        assert_eq!(permitted(Mode::Full), Action::ALL.to_vec());
        assert_eq!(permitted(Mode::Safe), vec![Action::Transfer]);
        assert!(permitted(Mode::Restricted).is_empty());
    }

    #[test]
    fn only_restricted_skips_the_report() {
        assert!(Mode::Full.writes_report());
        assert!(Mode::Safe.writes_report());
        assert!(!Mode::Restricted.writes_report());
    }

    #[test]
    fn serialized_uppercase() {
        assert_eq!(
            serde_json::to_string(&Mode::Restricted).expect("Serialization"),
            r#""RESTRICTED""#
        );
    }
}
