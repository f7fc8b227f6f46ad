//! Presentation of a solve on the terminal.

use crossterm::style::Stylize;

use infero::{
    builder::Program,
    context::Context,
    reports::Report,
    structures::{sentence::Sentence, valuation::Value},
};

const INDENT: &str = "  ";

const USAGE: &str = "Usage: infero [SUBCOMMAND] [ARGUMENTS]

There are three subcommands:

- compile: Compiles a .ifo file, giving the derivation of the query
- tokenize: Prints the tokens of a file
- ast: Prints the sentences of each section of a file

Example:

infero compile demos/modus_ponens.ifo

For more: infero --help";

pub fn usage() {
    for line in USAGE.lines() {
        println!("{INDENT}{line}");
    }
}

/// Prints the derivation and outcome of a solve, followed by the final state of each atom.
pub fn solution(context: &Context) {
    println!();
    println!("{INDENT}{}", "==+==+==+== SOLUTION ==+==+==+==".bold());
    println!();

    match context.report() {
        Report::Undetermined => {
            println!("{INDENT}{}", "Solution not found".bold().yellow());
            println!();
        }

        Report::Contradicted => {
            println!("{INDENT}{}", "Contradiction found".bold().red());
            println!();
        }

        Report::Entailed => {
            for step in &context.path {
                for line in step.trace().lines() {
                    println!("{INDENT}{line}");
                }
                println!();
            }

            if let Some(query) = &context.query {
                println!("{INDENT}{} {query}", "Then".bold());
                println!();
            }
        }
    }

    let pairs = context.atom_db.valuation_pairs().collect::<Vec<_>>();
    for line in table(&pairs) {
        println!(" {line}");
    }
}

fn value_string(value: Value) -> &'static str {
    match value {
        Some(true) => "True",
        Some(false) => "False",
        None => "None",
    }
}

/// A table with a column for each atom, and a single row of values.
fn table(pairs: &[(&str, Value)]) -> Vec<String> {
    let widths = pairs
        .iter()
        .map(|(name, value)| name.len().max(value_string(*value).len()))
        .collect::<Vec<_>>();

    let rule = |left: &str, middle: &str, right: &str| {
        let cells = widths.iter().map(|w| "─".repeat(w + 2)).collect::<Vec<_>>();
        format!("{left}{}{right}", cells.join(middle))
    };

    let row = |cells: Vec<String>| {
        let padded = cells
            .iter()
            .zip(widths.iter().copied())
            .map(|(cell, w)| format!(" {cell:<w$} "))
            .collect::<Vec<_>>();
        format!("│{}│", padded.join("│"))
    };

    vec![
        rule("┏", "┳", "┓"),
        row(pairs.iter().map(|(name, _)| name.to_string()).collect()),
        rule("┡", "╇", "┩"),
        row(pairs.iter().map(|(_, value)| value_string(*value).to_string()).collect()),
        rule("└", "┴", "┘"),
    ]
}

/// Prints the sentences of each section of a program.
pub fn program(program: &Program) {
    for (name, statements) in [
        ("rules", &program.rules),
        ("facts", &program.facts),
        ("query", &program.query),
    ] {
        println!("{}", format!("{name}:").bold());
        for statement in statements {
            println!(
                "{INDENT}L{} {}",
                statement.line,
                structure(&statement.sentence)
            );
        }
    }
}

/// The sentence written as nested constructors, e.g. `Implication(A, Not(B))`.
fn structure(sentence: &Sentence) -> String {
    match sentence {
        Sentence::Symbol(name) => name.clone(),
        Sentence::Not(operand) => format!("Not({})", structure(operand)),
        Sentence::And(left, right) => format!("And({}, {})", structure(left), structure(right)),
        Sentence::Or(left, right) => format!("Or({}, {})", structure(left), structure(right)),
        Sentence::Implication(antecedent, consequent) => format!(
            "Implication({}, {})",
            structure(antecedent),
            structure(consequent)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_widths() {
        let lines = table(&[("A", Some(true)), ("Long", None)]);
        assert_eq!(lines[1], "│ A    │ Long │");
        assert_eq!(lines[3], "│ True │ None │");
        assert!(lines
            .iter()
            .all(|line| line.chars().count() == lines[0].chars().count()));
    }

    #[test]
    fn structures() {
        let sentence = Sentence::implication(
            Sentence::conjunction(Sentence::symbol("A"), Sentence::symbol("B")),
            Sentence::negation(Sentence::disjunction(
                Sentence::symbol("C"),
                Sentence::symbol("D"),
            )),
        );
        assert_eq!(
            structure(&sentence),
            "Implication(And(A, B), Not(Or(C, D)))"
        );
    }
}
