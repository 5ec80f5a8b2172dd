use std::{collections::HashMap, iter::Peekable, vec::IntoIter};

use thiserror::Error;

use crate::math::Vector3;

use super::tokenize::{Op, Sep, Token};

/// An error while parsing to the AST.
#[derive(Debug, Error)]
pub enum AstError {
    #[error("expected {0}, got '{1}'")]
    UnexpectedToken(&'static str, Token),

    #[error("expected more tokens, got end")]
    UnexpectedEof,

    #[error("property {property} is given twice in {object}")]
    DuplicateProperty { object: String, property: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// The root AST node. In essence, the entire source file is this AST node.
    Root(Vec<Node>),

    /// A scene object. It has a name (its object identifier, e.g. 'sphere' or 'camera'), and some properties.
    Object {
        name: String,
        properties: HashMap<String, Node>,
    },

    /// A number.
    Number(f64),

    /// A vector, written `<x, y, z>`.
    Vector(Vector3),
}

/// An AST parser, which takes in a list of tokens from the tokenizer and parses out to
/// a root AST node, which is composed of many more AST nodes.
#[derive(Debug)]
pub struct AstParser {
    tokens: Peekable<IntoIter<Token>>,
}

impl AstParser {
    /// Construct a new AST parser from a list of tokens from the tokenizer.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens: tokens.into_iter().peekable(),
        }
    }

    /// Parse the root node. Every top-level item is an object.
    pub fn parse_root(mut self) -> Result<Node, AstError> {
        let mut nodes = vec![];

        while let Some(token) = self.tokens.next() {
            match token {
                Token::Identifier(name) => nodes.push(self.read_object(name)?),
                t => return Err(AstError::UnexpectedToken("an object name", t)),
            }
        }

        Ok(Node::Root(nodes))
    }

    /// Read the braced property list following an object name.
    fn read_object(&mut self, name: String) -> Result<Node, AstError> {
        self.read_expecting(Sep::BraceOpen.into(), "'{'")?;

        let mut properties = HashMap::new();
        loop {
            let key = match self.next()? {
                Token::Sep(Sep::BraceClose) => break,
                Token::Identifier(key) => key,
                t => return Err(AstError::UnexpectedToken("a property name or '}'", t)),
            };

            self.read_expecting(Sep::Colon.into(), "':'")?;
            let value = self.parse_value()?;

            if properties.contains_key(&key) {
                return Err(AstError::DuplicateProperty {
                    object: name,
                    property: key,
                });
            }
            properties.insert(key, value);

            // commas between properties are optional
            if let Some(Token::Sep(Sep::Comma)) = self.tokens.peek() {
                self.tokens.next();
            }
        }

        Ok(Node::Object { name, properties })
    }

    /// Parse a single value: a number or a vector.
    fn parse_value(&mut self) -> Result<Node, AstError> {
        match self.next()? {
            Token::Number(n) => Ok(Node::Number(n)),
            Token::Op(Op::Lt) => {
                let x = self.read_number()?;
                self.read_expecting(Sep::Comma.into(), "','")?;
                let y = self.read_number()?;
                self.read_expecting(Sep::Comma.into(), "','")?;
                let z = self.read_number()?;
                self.read_expecting(Op::Gt.into(), "'>'")?;

                Ok(Node::Vector(Vector3::new(x, y, z)))
            }
            t => Err(AstError::UnexpectedToken("a value", t)),
        }
    }

    fn read_number(&mut self) -> Result<f64, AstError> {
        match self.next()? {
            Token::Number(n) => Ok(n),
            t => Err(AstError::UnexpectedToken("a number", t)),
        }
    }

    /// Read the next token, failing if it is not the one expected.
    fn read_expecting(&mut self, expected: Token, what: &'static str) -> Result<(), AstError> {
        match self.next()? {
            t if t == expected => Ok(()),
            t => Err(AstError::UnexpectedToken(what, t)),
        }
    }

    fn next(&mut self) -> Result<Token, AstError> {
        self.tokens.next().ok_or(AstError::UnexpectedEof)
    }
}
