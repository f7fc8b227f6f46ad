/*!
Tokens of the `.ifo` notation, and a lexer to read them from a string.

Tokens are separated by (optional) whitespace, and newlines are counted to note the line of each token.

| Token     | Text                    | Tag             |
|-----------|-------------------------|-----------------|
| Rules     | `rules:`                | `RULES_SECTION` |
| Facts     | `facts:`                | `FACTS_SECTION` |
| Query     | `query:`                | `QUERY_SECTION` |
| End       | `end`                   | `ENDSECTION`    |
| Symbol    | `[A-Za-z]+`             | `SYMBOL`        |
| And       | `&`                     | `AND`           |
| Or        | `\|`                    | `OR`            |
| Implies   | `->`                    | `IMPLIES`       |
| Not       | `~`                     | `NOT`           |
| LParen    | `(`                     | `LPAREN`        |
| RParen    | `)`                     | `RPAREN`        |

A word is read in full before being classified, so `endless` is a symbol rather than `end` followed by `less`.

```rust
# use infero::builder::lexer::{tokenize, Token};
let tokens = tokenize("rules:\n  A -> ~B\nend").unwrap();

assert_eq!(tokens.len(), 6);
assert_eq!(tokens[1].token, Token::Symbol("A".to_string()));
assert_eq!(tokens[1].line, 2);
assert_eq!(tokens[3].to_string(), "<~, NOT>");
```
*/

use std::{iter::Peekable, str::Chars};

use crate::types::err::{self, ErrorKind};

/// A token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    Rules,
    Facts,
    Query,
    End,
    Symbol(String),
    And,
    Or,
    Implies,
    Not,
    LParen,
    RParen,
}

impl Token {
    /// The text of the token.
    pub fn value(&self) -> &str {
        match self {
            Self::Rules => "rules:",
            Self::Facts => "facts:",
            Self::Query => "query:",
            Self::End => "end",
            Self::Symbol(name) => name,
            Self::And => "&",
            Self::Or => "|",
            Self::Implies => "->",
            Self::Not => "~",
            Self::LParen => "(",
            Self::RParen => ")",
        }
    }

    /// The tag of the token.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Rules => "RULES_SECTION",
            Self::Facts => "FACTS_SECTION",
            Self::Query => "QUERY_SECTION",
            Self::End => "ENDSECTION",
            Self::Symbol(_) => "SYMBOL",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Implies => "IMPLIES",
            Self::Not => "NOT",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
        }
    }
}

/// A token, together with the line on which the token was found.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lexeme {
    pub token: Token,
    pub line: usize,
}

impl std::fmt::Display for Lexeme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}, {}>", self.token.value(), self.token.tag())
    }
}

/// A lexer over some string.
pub struct Lexer<'s> {
    chars: Peekable<Chars<'s>>,
    line: usize,
}

impl<'s> Lexer<'s> {
    pub fn new(source: &'s str) -> Self {
        Lexer {
            chars: source.chars().peekable(),
            line: 1,
        }
    }

    /// The line the lexer has reached.
    pub fn line(&self) -> usize {
        self.line
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.chars.next_if(|c| c.is_whitespace()) {
            if c == '\n' {
                self.line += 1;
            }
        }
    }

    fn word(&mut self, first: char) -> Token {
        let mut word = String::from(first);
        while let Some(c) = self.chars.next_if(|c| c.is_ascii_alphabetic()) {
            word.push(c);
        }

        let section = match word.as_str() {
            "rules" => Some(Token::Rules),
            "facts" => Some(Token::Facts),
            "query" => Some(Token::Query),
            _ => None,
        };

        match section {
            Some(section) if self.chars.next_if_eq(&':').is_some() => section,
            _ if word == "end" => Token::End,
            _ => Token::Symbol(word),
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Lexeme, ErrorKind>;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_whitespace();
        let line = self.line;

        let token = match self.chars.next()? {
            '&' => Token::And,
            '|' => Token::Or,
            '~' => Token::Not,
            '(' => Token::LParen,
            ')' => Token::RParen,
            '-' if self.chars.next_if_eq(&'>').is_some() => Token::Implies,
            c if c.is_ascii_alphabetic() => self.word(c),
            found => return Some(Err(err::ParseError::UnexpectedChar { line, found }.into())),
        };

        Some(Ok(Lexeme { token, line }))
    }
}

/// The tokens of the source, or the first error found.
pub fn tokenize(source: &str) -> Result<Vec<Lexeme>, ErrorKind> {
    if source.trim().is_empty() {
        return Err(err::ParseError::Empty.into());
    }

    Lexer::new(source).collect()
}
