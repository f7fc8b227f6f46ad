/*!
Tools for building a context.

# Basic methods

The library has three basic methods for building a context:
- [add_rule](crate::context::Context::add_rule), to add an implication or disjunction.
- [add_fact](crate::context::Context::add_fact), to give an atom a value.
- [set_query](crate::context::Context::set_query), to set the sentence to settle.

Each method registers the symbols of the sentence with the [atom database](crate::db::atom), in the order the symbols are written.

A program written in the `.ifo` notation may be [parsed](parser::parse) and then [added](crate::context::Context::from_program) to a context.

# Examples

A context built using basic methods.

```rust
# use infero::config::Config;
# use infero::context::Context;
# use infero::reports::Report;
# use infero::structures::sentence::Sentence;
let mut the_context = Context::from_config(Config::default());

let a = Sentence::symbol("A");
let b = Sentence::symbol("B");

assert!(the_context.add_rule(Sentence::implication(a.clone(), b.clone())).is_ok());
assert!(the_context.add_fact(Sentence::negation(b)).is_ok());
assert!(the_context.set_query(Sentence::negation(a)).is_ok());

assert_eq!(the_context.solve(), Ok(Report::Entailed));
```

A context built from a program.

```rust
# use infero::builder::parser::parse;
# use infero::config::Config;
# use infero::context::Context;
# use infero::reports::Report;
let program = parse("
rules:
  A | B
end
facts:
  ~A
end
query:
  B
end
").unwrap();

let mut the_context = Context::from_program(program, Config::default()).unwrap();
assert_eq!(the_context.solve(), Ok(Report::Entailed));
```
*/

pub mod lexer;
pub mod parser;

use crate::{
    config::Config,
    context::{Context, ContextState},
    misc::log::targets::{self},
    structures::sentence::Sentence,
    types::err::{self, ErrorKind},
};

/// A sentence of a program, together with the line on which the sentence begins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Statement {
    pub sentence: Sentence,
    pub line: usize,
}

/// The sections of a program, as parsed and before any check on the shape of each sentence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    pub rules: Vec<Statement>,
    pub facts: Vec<Statement>,
    pub query: Vec<Statement>,
}

impl Context {
    /// Creates a context from some given program and configuration.
    ///
    /// Errors note the line of the offending sentence.
    pub fn from_program(program: Program, config: Config) -> Result<Self, ErrorKind> {
        let mut the_context = Context::from_config(config);

        for Statement { sentence, line } in program.rules {
            the_context
                .add_rule(sentence)
                .map_err(|e| e.at_line(line))?;
        }

        for Statement { sentence, line } in program.facts {
            the_context
                .add_fact(sentence)
                .map_err(|e| e.at_line(line))?;
        }

        let mut queries = program.query.into_iter();
        match queries.next() {
            None => return Err(err::SemanticError::MissingQuery.into()),
            Some(Statement { sentence, line }) => {
                the_context
                    .set_query(sentence)
                    .map_err(|e| e.at_line(line))?;
            }
        }

        if let Some(Statement { line, .. }) = queries.next() {
            return Err(ErrorKind::from(err::SemanticError::MultipleQueries).at_line(line));
        }

        Ok(the_context)
    }

    /// Adds a rule to the context.
    ///
    /// Rules must be implications or disjunctions.
    pub fn add_rule(&mut self, rule: Sentence) -> Result<(), ErrorKind> {
        self.check_input()?;

        if !rule.is_rule() {
            return Err(err::SemanticError::RuleShape.into());
        }

        self.register_symbols(&rule)?;
        log::debug!(target: targets::PARSER, "Rule: {rule}");
        self.rules.push(rule);

        Ok(())
    }

    /// Adds a fact to the context, valuing the atom of the fact.
    ///
    /// A fact must be a symbol under some (possibly zero) negations, and the atom is valued true if the count of negations is even and false otherwise.
    /// At most one fact may be given for each atom.
    pub fn add_fact(&mut self, fact: Sentence) -> Result<(), ErrorKind> {
        self.check_input()?;

        let Some((name, value)) = fact.literal() else {
            return Err(err::SemanticError::FactShape.into());
        };

        let atom = self.atom_db.fresh_or_existing_atom(name)?;
        if let Some(Some(_)) = self.atom_db.value(atom) {
            return Err(err::SemanticError::DuplicateFact(name.to_string()).into());
        }

        log::debug!(target: targets::PARSER, "Fact: {fact}");
        self.atom_db.set_value(name, value)?;

        Ok(())
    }

    /// Sets the query of the context.
    ///
    /// A query may be any sentence, and may be set at most once.
    pub fn set_query(&mut self, query: Sentence) -> Result<(), ErrorKind> {
        self.check_input()?;

        if self.query.is_some() {
            return Err(err::SemanticError::MultipleQueries.into());
        }

        self.register_symbols(&query)?;
        log::debug!(target: targets::PARSER, "Query: {query}");
        self.query = Some(query);

        Ok(())
    }

    fn check_input(&self) -> Result<(), ErrorKind> {
        match self.state {
            ContextState::Input => Ok(()),
            _ => Err(err::StateError::SolveComplete.into()),
        }
    }

    /// Registers each symbol of the sentence with the atom database, from left to right.
    fn register_symbols(&mut self, sentence: &Sentence) -> Result<(), ErrorKind> {
        let mut stack = vec![sentence];
        while let Some(sentence) = stack.pop() {
            match sentence {
                Sentence::Symbol(name) => {
                    self.atom_db.fresh_or_existing_atom(name)?;
                }

                Sentence::Not(operand) => stack.push(operand),

                Sentence::And(left, right)
                | Sentence::Or(left, right)
                | Sentence::Implication(left, right) => {
                    stack.push(right);
                    stack.push(left);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::valuation::Valuation;

    fn symbol(name: &str) -> Sentence {
        Sentence::symbol(name)
    }

    #[test]
    fn registration_order() {
        let mut the_context = Context::from_config(Config::default());
        let rule = Sentence::implication(
            Sentence::conjunction(symbol("C"), symbol("A")),
            Sentence::disjunction(symbol("B"), symbol("C")),
        );

        assert!(the_context.add_rule(rule).is_ok());
        assert!(the_context.add_fact(symbol("D")).is_ok());
        assert!(the_context.set_query(symbol("E")).is_ok());

        let names = the_context
            .atom_db
            .valuation_pairs()
            .map(|(name, _)| name)
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["C", "A", "B", "D", "E"]);
    }

    #[test]
    fn rule_shape() {
        let mut the_context = Context::from_config(Config::default());
        assert_eq!(
            the_context.add_rule(Sentence::conjunction(symbol("A"), symbol("B"))),
            Err(ErrorKind::Semantic(err::SemanticError::RuleShape, None))
        );
        assert_eq!(
            the_context.add_rule(Sentence::negation(symbol("A"))),
            Err(ErrorKind::Semantic(err::SemanticError::RuleShape, None))
        );
        assert!(the_context.rules.is_empty());
    }

    #[test]
    fn facts() {
        let mut the_context = Context::from_config(Config::default());

        let not_not_not_a = Sentence::negation(Sentence::negation(Sentence::negation(symbol("A"))));
        assert!(the_context.add_fact(not_not_not_a).is_ok());
        assert_eq!(the_context.atom_db.value_of("A"), Some(Some(false)));

        assert_eq!(
            the_context.add_fact(symbol("A")),
            Err(ErrorKind::Semantic(
                err::SemanticError::DuplicateFact("A".to_string()),
                None
            ))
        );

        assert_eq!(
            the_context.add_fact(Sentence::negation(Sentence::disjunction(
                symbol("B"),
                symbol("C")
            ))),
            Err(ErrorKind::Semantic(err::SemanticError::FactShape, None))
        );
    }

    #[test]
    fn one_query() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.set_query(symbol("A")).is_ok());
        assert_eq!(
            the_context.set_query(symbol("B")),
            Err(ErrorKind::Semantic(err::SemanticError::MultipleQueries, None))
        );
    }

    #[test]
    fn program_lines() {
        let program =
            parser::parse("rules:\nA -> B\nA & B\nend\nfacts:\nend\nquery:\nB\nend").unwrap();
        assert_eq!(
            Context::from_program(program, Config::default()).err(),
            Some(ErrorKind::Semantic(err::SemanticError::RuleShape, Some(3)))
        );

        let program = parser::parse("rules:\nend\nfacts:\nA\nend\nquery:\nA\nB\nend").unwrap();
        assert_eq!(
            Context::from_program(program, Config::default()).err(),
            Some(ErrorKind::Semantic(err::SemanticError::MultipleQueries, Some(8)))
        );

        let program = parser::parse("rules:\nend\nfacts:\nA\nend\nquery:\nend").unwrap();
        assert_eq!(
            Context::from_program(program, Config::default()).err(),
            Some(ErrorKind::Semantic(err::SemanticError::MissingQuery, None))
        );
    }

    #[test]
    fn input_after_solve() {
        let mut the_context = Context::from_config(Config::default());
        let _ = the_context.set_query(symbol("A"));
        let _ = the_context.solve();

        assert_eq!(
            the_context.add_fact(symbol("A")),
            Err(ErrorKind::State(err::StateError::SolveComplete))
        );
    }
}
