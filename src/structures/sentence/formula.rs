//! Canonical infix rendering of sentences.
//!
//! A part of a compound sentence is wrapped in parentheses unless it is a bare symbol, or its rendering is already wrapped by a matching pair of parentheses.

use super::Sentence;

impl Sentence {
    /// The sentence written in infix notation, with `~`, `&`, `|`, and `->` and minimal parentheses.
    ///
    /// The formula parses to an equal sentence only if each symbol is a word of letters other than `end`.
    ///
    /// ```rust
    /// # use infero::structures::sentence::Sentence;
    /// let a = Sentence::symbol("A");
    /// let b = Sentence::symbol("B");
    /// let c = Sentence::symbol("C");
    ///
    /// let s = Sentence::implication(
    ///     Sentence::conjunction(a.clone(), Sentence::negation(b.clone())),
    ///     Sentence::negation(Sentence::disjunction(b, c)),
    /// );
    /// assert_eq!(s.formula(), "(A & (~B)) -> (~(B | C))");
    /// ```
    pub fn formula(&self) -> String {
        match self {
            Self::Symbol(name) => name.clone(),

            Self::Not(operand) => format!("~{}", parenthesize(operand.formula())),

            Self::And(left, right) => format!(
                "{} & {}",
                parenthesize(left.formula()),
                parenthesize(right.formula())
            ),

            Self::Or(left, right) => format!(
                "{} | {}",
                parenthesize(left.formula()),
                parenthesize(right.formula())
            ),

            Self::Implication(antecedent, consequent) => format!(
                "{} -> {}",
                parenthesize(antecedent.formula()),
                parenthesize(consequent.formula())
            ),
        }
    }
}

impl std::fmt::Display for Sentence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.formula())
    }
}

/// Wraps the string in parentheses, unless empty, alphabetic, or already wrapped.
fn parenthesize(s: String) -> String {
    if s.is_empty() || s.chars().all(char::is_alphabetic) {
        return s;
    }

    if s.starts_with('(') && s.ends_with(')') && s.len() > 1 && balanced(&s[1..s.len() - 1]) {
        return s;
    }

    format!("({s})")
}

/// Whether every closing parenthesis in the string matches an earlier opening parenthesis, and vice versa.
fn balanced(s: &str) -> bool {
    let mut depth: usize = 0;
    for c in s.chars() {
        match c {
            '(' => depth += 1,
            ')' => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return false,
            },
            _ => {}
        }
    }
    depth == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balance() {
        assert!(balanced(""));
        assert!(balanced("A & (B | C)"));
        assert!(!balanced("A) & (B"));
        assert!(!balanced("(A"));
    }

    #[test]
    fn parentheses() {
        assert_eq!(parenthesize("A".to_string()), "A");
        assert_eq!(parenthesize("~A".to_string()), "(~A)");
        assert_eq!(parenthesize("(A & B)".to_string()), "(A & B)");
        assert_eq!(parenthesize("(A) & (B)".to_string()), "((A) & (B))");
    }

    #[test]
    fn formulas() {
        let a = Sentence::symbol("A");
        let b = Sentence::symbol("B");

        assert_eq!(a.formula(), "A");
        assert_eq!(Sentence::negation(a.clone()).formula(), "~A");
        assert_eq!(
            Sentence::negation(Sentence::negation(a.clone())).formula(),
            "~(~A)"
        );
        assert_eq!(
            Sentence::conjunction(a.clone(), b.clone()).formula(),
            "A & B"
        );
        assert_eq!(
            Sentence::negation(Sentence::disjunction(a.clone(), b.clone())).formula(),
            "~(A | B)"
        );
        assert_eq!(
            Sentence::implication(Sentence::implication(a.clone(), b.clone()), a.clone())
                .to_string(),
            "(A -> B) -> A"
        );
    }

    #[test]
    fn names_outside_the_notation() {
        use crate::builder::parser::parse_sentence;

        let a_b = Sentence::implication(Sentence::symbol("A"), Sentence::symbol("B"));
        assert_eq!(parse_sentence(&a_b.formula()), Ok(a_b));

        for name in ["end", "A1", "a_b"] {
            let sentence = Sentence::implication(Sentence::symbol(name), Sentence::symbol("B"));
            assert!(parse_sentence(&sentence.formula()).is_err());
        }
    }
}
