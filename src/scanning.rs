use crate::error_handling::*;
use log::trace;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    plus, minus, mul, num
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use TokenKind::*;
        let name = match self {
            plus => "PLUS",
            minus => "MINUS",
            mul => "MUL",
            num => "NUM",
        };
        f.write_str(name)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct InvalidOperator;

impl TryFrom<char> for TokenKind {
    type Error = InvalidOperator;

    fn try_from(character: char) -> std::result::Result<Self, Self::Error> {
        use TokenKind::*;
        match character {
            '+' => Ok(plus),
            '-' => Ok(minus),
            '*' => Ok(mul),
            _ => Err(InvalidOperator),
        }
    }
}

/// A lexical class paired with the exact text it was scanned from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    lexeme: String,
}

impl Token {
    pub(crate) fn new(kind: TokenKind, lexeme: String) -> Self {
        Self{kind, lexeme}
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            TokenKind::num => write!(f, "NUM({})", self.lexeme),
            kind => write!(f, "{}", kind),
        }
    }
}

/// Walks a source string left to right, yielding one token per step.
///
/// Numbers are scanned greedily and whitespace is dropped. The first
/// character outside the language ends the scan with an error.
pub struct StringScanner<'a> {
    source: &'a str,
    index: usize,
}

impl<'a> StringScanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self{source, index: 0}
    }

    fn view(&self) -> &'a str {
        &self.source[self.index..]
    }

    // Byte length of the run at the cursor matching `predicate`.
    fn run_length<P: Fn(char) -> bool>(&self, predicate: P) -> usize {
        let view = self.view();
        view.find(|character: char| !predicate(character)).unwrap_or(view.len())
    }

    fn skip_whitespace(&mut self) {
        self.index += self.run_length(char::is_whitespace);
    }

    fn get_number(&self) -> Token {
        let length = self.run_length(|character| character.is_ascii_digit());
        Token::new(TokenKind::num, self.view()[..length].into())
    }

    fn get_single(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.view()[..1].into())
    }

    fn get_token(&self) -> Option<Result<Token>> {
        let current = self.view().chars().next()?;
        if current.is_ascii_digit() {
            Some(Ok(self.get_number()))
        } else if let Ok(kind) = TokenKind::try_from(current) {
            Some(Ok(self.get_single(kind)))
        } else {
            Some(Err(CalcError::unexpected_input(current)))
        }
    }
}

impl Iterator for StringScanner<'_> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_whitespace();
        let token = self.get_token();
        match &token {
            Some(Ok(token)) => {
                trace!("scanned {} at offset {}", token, self.index);
                self.index += token.lexeme.len();
            },
            // nothing after a bad character is scanned
            Some(Err(_)) => self.index = self.source.len(),
            None => {},
        }
        token
    }
}

pub fn scan(source: &str) -> Result<Vec<Token>> {
    StringScanner::new(source).collect()
}
