/*!
A recursive descent parser for the `.ifo` notation.

A program is three sections, in order, each a (possibly empty) sequence of sentences closed by `end`:

```none
program ::= "rules:" { expr } "end" "facts:" { expr } "end" "query:" { expr } "end"
expr    ::= term [ "->" term ]
term    ::= fact { ( "&" | "|" ) fact }
fact    ::= "(" expr ")" | "~" fact | symbol
```

Conjunction and disjunction have equal precedence and associate to the left.
So, `A & B | C` is read as `(A & B) | C`, and `A | B & C` as `(A | B) & C`.
Implication binds weakest, and does not chain without parentheses.

Parsing checks only the grammar of a program.
Whether each sentence is of a shape suitable for its section is checked when the program is [added to a context](crate::context::Context::from_program).

```rust
# use infero::builder::parser::parse;
let program = parse("
rules:
  A & B -> C
end
facts:
  A B
end
query:
  C
end
").unwrap();

assert_eq!(program.rules[0].sentence.formula(), "(A & B) -> C");
assert_eq!(program.rules[0].line, 3);
assert_eq!(program.facts.len(), 2);
```
*/

use crate::{
    builder::{
        lexer::{tokenize, Lexeme, Token},
        Program, Statement,
    },
    misc::log::targets::{self},
    structures::sentence::Sentence,
    types::err::{self, ErrorKind},
};

/// Parses the source as a program.
pub fn parse(source: &str) -> Result<Program, ErrorKind> {
    let lexemes = tokenize(source)?;
    let mut parser = Parser::new(lexemes);

    let program = Program {
        rules: parser.section(Token::Rules, "rules:")?,
        facts: parser.section(Token::Facts, "facts:")?,
        query: parser.section(Token::Query, "query:")?,
    };

    if parser.peek().is_some() {
        return Err(parser.expected("end of input"));
    }

    log::info!(target: targets::PARSER,
        "Parsed {} rules, {} facts, and {} queries",
        program.rules.len(),
        program.facts.len(),
        program.query.len()
    );

    Ok(program)
}

/// Parses the source as a single sentence.
///
/// ```rust
/// # use infero::builder::parser::parse_sentence;
/// let sentence = parse_sentence("~(A | B) -> C").unwrap();
/// assert_eq!(sentence.formula(), "(~(A | B)) -> C");
/// ```
pub fn parse_sentence(source: &str) -> Result<Sentence, ErrorKind> {
    let mut parser = Parser::new(tokenize(source)?);
    let sentence = parser.expr()?;

    match parser.peek() {
        None => Ok(sentence),
        Some(_) => Err(parser.expected("end of input")),
    }
}

struct Parser {
    lexemes: Vec<Lexeme>,
    position: usize,
}

impl Parser {
    fn new(lexemes: Vec<Lexeme>) -> Self {
        Parser {
            lexemes,
            position: 0,
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.lexemes.get(self.position).map(|lexeme| &lexeme.token)
    }

    /// The line of the next token, or of the final token if all tokens have been read.
    fn line(&self) -> usize {
        self.lexemes
            .get(self.position)
            .or(self.lexemes.last())
            .map_or(1, |lexeme| lexeme.line)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.lexemes.get(self.position).map(|lexeme| lexeme.token.clone());
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    /// Advances past the next token, if the next token is the given token.
    fn eat(&mut self, token: &Token) -> bool {
        if self.peek() == Some(token) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    fn expected(&self, expected: &'static str) -> ErrorKind {
        err::ParseError::Expected {
            line: self.line(),
            expected,
        }
        .into()
    }

    fn section(&mut self, header: Token, name: &'static str) -> Result<Vec<Statement>, ErrorKind> {
        if !self.eat(&header) {
            return Err(self.expected(name));
        }

        let mut statements = Vec::default();
        loop {
            match self.peek() {
                Some(Token::End) => {
                    self.position += 1;
                    return Ok(statements);
                }

                None => return Err(self.expected("end")),

                Some(_) => {
                    let line = self.line();
                    let sentence = self.expr()?;
                    log::debug!(target: targets::PARSER, "L{line}, {name} {sentence}");
                    statements.push(Statement { sentence, line });
                }
            }
        }
    }

    fn expr(&mut self) -> Result<Sentence, ErrorKind> {
        let antecedent = self.term()?;
        if self.eat(&Token::Implies) {
            let consequent = self.term()?;
            Ok(Sentence::implication(antecedent, consequent))
        } else {
            Ok(antecedent)
        }
    }

    fn term(&mut self) -> Result<Sentence, ErrorKind> {
        let mut left = self.fact()?;
        loop {
            if self.eat(&Token::And) {
                left = Sentence::conjunction(left, self.fact()?);
            } else if self.eat(&Token::Or) {
                left = Sentence::disjunction(left, self.fact()?);
            } else {
                return Ok(left);
            }
        }
    }

    fn fact(&mut self) -> Result<Sentence, ErrorKind> {
        let line = self.line();
        match self.advance() {
            Some(Token::LParen) => {
                let expr = self.expr()?;
                if !self.eat(&Token::RParen) {
                    return Err(self.expected(")"));
                }
                Ok(expr)
            }

            Some(Token::Not) => Ok(Sentence::negation(self.fact()?)),

            Some(Token::Symbol(name)) => Ok(Sentence::symbol(name)),

            Some(other) => Err(err::ParseError::Symbol {
                line,
                found: other.value().to_string(),
            }
            .into()),

            None => Err(self.expected("symbol")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn formula(source: &str) -> String {
        parse_sentence(source).unwrap().formula()
    }

    #[test]
    fn precedence() {
        assert_eq!(formula("A & B | C"), "(A & B) | C");
        assert_eq!(formula("A | B & C"), "(A | B) & C");
        assert_eq!(formula("A | (B & C)"), "A | (B & C)");
        assert_eq!(formula("A & B -> C | D"), "(A & B) -> (C | D)");
        assert_eq!(formula("~~A"), "~(~A)");
        assert_eq!(formula("~A & B"), "(~A) & B");
    }

    #[test]
    fn implication_does_not_chain() {
        assert_eq!(
            parse_sentence("A -> B -> C"),
            Err(ErrorKind::Parse(err::ParseError::Expected {
                line: 1,
                expected: "end of input"
            }))
        );
        assert_eq!(formula("A -> (B -> C)"), "A -> (B -> C)");
    }

    #[test]
    fn sections() {
        let program = parse("rules:\nA -> B\nA | C\nend\nfacts:\nend\nquery:\nB\nend").unwrap();
        assert_eq!(program.rules.len(), 2);
        assert_eq!(program.rules[1].line, 3);
        assert!(program.facts.is_empty());
        assert_eq!(program.query[0].sentence, Sentence::symbol("B"));
    }

    #[test]
    fn errors() {
        assert_eq!(
            parse("facts:\nA\nend"),
            Err(ErrorKind::Parse(err::ParseError::Expected {
                line: 1,
                expected: "rules:"
            }))
        );

        assert_eq!(
            parse("rules:\nA -> B\n"),
            Err(ErrorKind::Parse(err::ParseError::Expected {
                line: 2,
                expected: "end"
            }))
        );

        assert_eq!(
            parse("rules:\n(A -> B\nend"),
            Err(ErrorKind::Parse(err::ParseError::Expected {
                line: 3,
                expected: ")"
            }))
        );

        assert_eq!(
            parse("rules:\nA -> )\nend"),
            Err(ErrorKind::Parse(err::ParseError::Symbol {
                line: 2,
                found: ")".to_string()
            }))
        );

        assert_eq!(
            parse("rules:\nA -> end"),
            Err(ErrorKind::Parse(err::ParseError::Symbol {
                line: 2,
                found: "end".to_string()
            }))
        );
    }
}
