/*!
Reports for the context.
*/

use serde::Serialize;

use crate::context::ContextState;

pub mod json;

/// High-level reports regarding a solve.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize)]
pub enum Report {
    /// The query is true given the rules and facts of the context.
    Entailed,

    /// The query is false given the rules and facts of the context.
    Contradicted,

    /// The value of the query is unknown, for some reason.
    Undetermined,
}

impl From<ContextState> for Report {
    fn from(value: ContextState) -> Self {
        match value {
            ContextState::Input | ContextState::Solving | ContextState::Undetermined => {
                Self::Undetermined
            }
            ContextState::Entailed => Self::Entailed,
            ContextState::Contradicted => Self::Contradicted,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Entailed => write!(f, "Entailed"),
            Self::Contradicted => write!(f, "Contradicted"),
            Self::Undetermined => write!(f, "Undetermined"),
        }
    }
}
