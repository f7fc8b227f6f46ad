use std::str::FromStr;

/// Variant ways to handle the derivation of a value for an atom which already has the opposite value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ConflictPolicy {
    /// Return a [conflict error](crate::types::err::ValuationError::Conflict), ending the solve.
    Reject = 0,

    /// Overwrite the existing value.
    Overwrite,
}

impl std::fmt::Display for ConflictPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reject => write!(f, "Reject"),
            Self::Overwrite => write!(f, "Overwrite"),
        }
    }
}

impl ConflictPolicy {
    /// The minimum ConflictPolicy type.
    pub const MIN: ConflictPolicy = ConflictPolicy::Reject;

    /// The maximum ConflictPolicy type.
    pub const MAX: ConflictPolicy = ConflictPolicy::Overwrite;
}

impl FromStr for ConflictPolicy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Reject" | "reject" => Ok(Self::Reject),

            "Overwrite" | "overwrite" => Ok(Self::Overwrite),

            _unknown_string => Err(()),
        }
    }
}
