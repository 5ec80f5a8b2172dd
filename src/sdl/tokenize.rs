use std::{
    fmt::{self, Display, Formatter},
    io::{self, Read, Seek, SeekFrom},
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokenizeError {
    #[error("a generic IO error: {0}")]
    Io(#[from] io::Error),

    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(char),

    #[error("error parsing number")]
    NumberParseError,
}

/// An operator. Angle brackets delimit vectors.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Lt,
    Gt,
}

/// A separator.
#[derive(Debug, Clone, PartialEq)]
pub enum Sep {
    Comma,
    Colon,
    BraceOpen,
    BraceClose,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A separator.
    Sep(Sep),

    /// An operator.
    Op(Op),

    /// An identifier. Letters, digits and underscores, starting with a letter.
    Identifier(String),

    /// A number. Sign and decimals optional.
    Number(f64),
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sep(Sep::Comma) => write!(f, ","),
            Self::Sep(Sep::Colon) => write!(f, ":"),
            Self::Sep(Sep::BraceOpen) => write!(f, "{{"),
            Self::Sep(Sep::BraceClose) => write!(f, "}}"),

            Self::Op(Op::Lt) => write!(f, "<"),
            Self::Op(Op::Gt) => write!(f, ">"),

            Self::Identifier(ident) => write!(f, "{}", ident),
            Self::Number(num) => write!(f, "{}", num),
        }
    }
}

impl From<Op> for Token {
    fn from(op: Op) -> Self {
        Self::Op(op)
    }
}

impl From<Sep> for Token {
    fn from(sep: Sep) -> Self {
        Self::Sep(sep)
    }
}

pub struct Tokenizer<R: Read + Seek> {
    reader: R,
}

impl<R: Read + Seek> Tokenizer<R> {
    pub fn new(reader: R) -> Self {
        Tokenizer { reader }
    }

    /// Tokenize from the reader, converting to a `Result<Vec<Token>, TokenizeError>`.
    pub fn tokenize(mut self) -> Result<Vec<Token>, TokenizeError> {
        let mut tokens = vec![];

        while let Some(c) = self.peek_next()? {
            let single: Token = match c {
                // whitespace: ignore
                _ if c.is_whitespace() => {
                    self.skip()?;
                    continue;
                }

                // comment: ignore the rest of the line
                '#' => {
                    self.read_while(|c| c != '\n')?;
                    continue;
                }

                'A'..='Z' | 'a'..='z' => {
                    tokens.push(Token::Identifier(self.read_identifier()?));
                    continue;
                }
                '0'..='9' | '.' | '-' | '+' => {
                    tokens.push(Token::Number(self.read_number()?));
                    continue;
                }

                '<' => Op::Lt.into(),
                '>' => Op::Gt.into(),
                ',' => Sep::Comma.into(),
                ':' => Sep::Colon.into(),
                '{' => Sep::BraceOpen.into(),
                '}' => Sep::BraceClose.into(),

                x => return Err(TokenizeError::UnexpectedCharacter(x)),
            };

            tokens.push(single);
            self.skip()?;
        }

        Ok(tokens)
    }

    fn read_identifier(&mut self) -> Result<String, TokenizeError> {
        Ok(self
            .read_while(|c| c.is_ascii_alphanumeric() || c == '_')?
            .into_iter()
            .collect())
    }

    /// Read a number, which is an f64. Sign and decimal optional.
    fn read_number(&mut self) -> Result<f64, TokenizeError> {
        let mut text = String::new();
        if let Some(sign @ ('-' | '+')) = self.peek_next()? {
            self.skip()?;
            text.push(sign);
        }

        let digits: String = self
            .read_while(|c| c.is_ascii_digit() || c == '.')?
            .into_iter()
            .collect();
        if !digits.chars().any(|c| c.is_ascii_digit()) {
            return Err(TokenizeError::NumberParseError);
        }
        text.push_str(&digits);

        text.parse().map_err(|_| TokenizeError::NumberParseError)
    }

    /// Read the next character in the reader, `None` at the end.
    fn next(&mut self) -> Result<Option<char>, io::Error> {
        let mut byte = [0u8];
        match self.reader.read(&mut byte)? {
            0 => Ok(None),
            _ => Ok(Some(byte[0] as char)),
        }
    }

    /// Skips the next character in the reader.
    fn skip(&mut self) -> Result<(), io::Error> {
        self.reader.seek(SeekFrom::Current(1)).map(|_| ())
    }

    /// Goes back to the last character in the reader.
    fn back(&mut self) -> Result<(), io::Error> {
        self.reader.seek(SeekFrom::Current(-1)).map(|_| ())
    }

    /// Peeks ahead at the next character in the reader. This works by reading and then seeking back one on success.
    fn peek_next(&mut self) -> Result<Option<char>, io::Error> {
        let next = self.next()?;
        if next.is_some() {
            self.back()?;
        }
        Ok(next)
    }

    /// Reads characters until the predicate returns false, leaving that character unread.
    fn read_while<F>(&mut self, f: F) -> Result<Vec<char>, io::Error>
    where
        F: Fn(char) -> bool,
    {
        let mut v = vec![];

        while let Some(c) = self.next()? {
            if !f(c) {
                self.back()?;
                break;
            }
            v.push(c);
        }

        Ok(v)
    }
}
