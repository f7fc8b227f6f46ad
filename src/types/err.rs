//! Error types used in the library.
//!
//! - Structural and valuation errors are raised by the [sentence model](crate::structures::sentence) and signal a gap in validation upstream of a solve.
//! - Parse and semantic errors are raised by the [builder](crate::builder) before a solve begins, and carry the line of the offending input where one is known.
//! - Failing to settle a query is *not* an error, and is instead reported as [Undetermined](crate::reports::Report::Undetermined).
//!
//! Names of the error enums overlap with the structures they relate to.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

/// The general error type, wrapping an error from each concern.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Parse(ParseError),
    Semantic(SemanticError, Option<usize>),
    State(StateError),
    Structural(StructuralError),
    Valuation(ValuationError),
}

impl ErrorKind {
    /// Notes the line of some input at which the error was found, if the error is the sort to carry a line.
    pub fn at_line(self, line: usize) -> Self {
        match self {
            Self::Semantic(e, None) => Self::Semantic(e, Some(line)),
            other => other,
        }
    }
}

/// Errors with the shape of a sentence.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StructuralError {
    /// De Morgan rewriting was requested for something other than a conjunction, disjunction, or implication.
    DeMorgan,

    /// An inference rule was built from a sentence of the wrong shape.
    /// E.g. modus ponens from a disjunction.
    UnexpectedShape,
}

impl From<StructuralError> for ErrorKind {
    fn from(e: StructuralError) -> Self {
        ErrorKind::Structural(e)
    }
}

/// Errors when reading from or writing to a valuation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ValuationError {
    /// A symbol was not registered with the valuation.
    UnboundSymbol(String),

    /// A value was committed to a symbol which already holds the opposite value.
    Conflict(String),

    /// There are no more fresh atoms.
    AtomsExhausted,
}

impl From<ValuationError> for ErrorKind {
    fn from(e: ValuationError) -> Self {
        ErrorKind::Valuation(e)
    }
}

/// Errors during parsing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Some character which does not begin any token.
    UnexpectedChar { line: usize, found: char },

    /// Some token was required, but something else (or nothing) was found.
    Expected { line: usize, expected: &'static str },

    /// A symbol was required, but some other token was found.
    Symbol { line: usize, found: String },

    /// An empty string, where some non-empty string was required.
    Empty,
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Violations of the shape required of each section of a program.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SemanticError {
    /// Rules must be implications or disjunctions.
    RuleShape,

    /// Facts must be atoms or (iterated) negations of atoms.
    FactShape,

    /// Each symbol may be the subject of at most one fact.
    DuplicateFact(String),

    /// At most one query may be given.
    MultipleQueries,

    /// No query was given.
    MissingQuery,
}

impl From<SemanticError> for ErrorKind {
    fn from(e: SemanticError) -> Self {
        ErrorKind::Semantic(e, None)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StateError {
    /// A context is solved at most once.
    SolveComplete,
}

impl From<StateError> for ErrorKind {
    fn from(e: StateError) -> Self {
        ErrorKind::State(e)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => match e {
                ParseError::UnexpectedChar { line, found } => {
                    write!(f, "L{line}, unexpected char: {found}")
                }
                ParseError::Expected { line, expected } => {
                    write!(f, "L{line}, '{expected}' expected")
                }
                ParseError::Symbol { line, found } => {
                    write!(f, "L{line}, {found} symbols must be letters")
                }
                ParseError::Empty => write!(f, "no data"),
            },

            Self::Semantic(e, line) => {
                if let Some(line) = line {
                    write!(f, "L{line}, ")?;
                }
                match e {
                    SemanticError::RuleShape => {
                        write!(f, "rules may only be implications or disjunctions")
                    }
                    SemanticError::FactShape => {
                        write!(f, "facts may only be atoms or atomic negations")
                    }
                    SemanticError::DuplicateFact(name) => {
                        write!(f, "more than one fact given for {name}")
                    }
                    SemanticError::MultipleQueries => write!(f, "the query must be unique"),
                    SemanticError::MissingQuery => write!(f, "a query is required"),
                }
            }

            Self::State(StateError::SolveComplete) => {
                write!(f, "the context has already been solved")
            }

            Self::Structural(e) => match e {
                StructuralError::DeMorgan => {
                    write!(
                        f,
                        "De Morgan rewriting applies to conjunctions, disjunctions, and implications"
                    )
                }
                StructuralError::UnexpectedShape => {
                    write!(
                        f,
                        "an inference rule was built from a sentence of the wrong shape"
                    )
                }
            },

            Self::Valuation(e) => match e {
                ValuationError::UnboundSymbol(name) => write!(f, "variable {name} not in model"),
                ValuationError::Conflict(name) => {
                    write!(f, "conflicting values derived for {name}")
                }
                ValuationError::AtomsExhausted => write!(f, "no more atoms are available"),
            },
        }
    }
}

impl std::error::Error for ErrorKind {}
