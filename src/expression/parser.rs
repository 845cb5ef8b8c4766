//! Recursive-descent parser.
//!
//! Grammar, lowest precedence first:
//!
//! ```text
//! expr    := term  (('+' | '-') term)*
//! term    := unary (('*' | '/' | '%') unary)*
//! unary   := ('+' | '-') unary | power
//! power   := primary ('^' unary)?            right-associative
//! primary := number | ident | ident '(' args ')' | '(' expr ')'
//! args    := expr (',' expr)*
//! ```
//!
//! `^` binds tighter than unary minus, so `-x^2` is `-(x^2)` while
//! `2^-1` is `2^(-1)`.
//!
//! Both the parser's recursion and the height of the finished tree are
//! bounded by [`MAX_DEPTH`]; deeper input is rejected with
//! [`ExpressionError::TooDeep`] so that evaluating and dropping the tree
//! stay within a small, fixed stack.

use super::errors::ExpressionError;
use super::lexer::{Spanned, Token};
use super::node::{BinaryOp, Node};
use super::registry::FunctionRegistry;
use super::VARIABLE;


/// Maximum nesting of the parsed tree (and of parser recursion).
pub const MAX_DEPTH: usize = 256;

/// A parsed subtree with its height (a leaf has height 1).
type Parsed = (Node, usize);


pub(crate) struct Parser<'a> {
    tokens   : &'a [Spanned],
    pos      : usize,
    depth    : usize,
    registry : &'a FunctionRegistry,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(tokens: &'a [Spanned], registry: &'a FunctionRegistry) -> Self {
        Self { tokens, pos: 0, depth: 0, registry }
    }

    /// Parses the whole token stream into a single tree.
    pub(crate) fn parse(mut self) -> Result<Node, ExpressionError> {
        if self.tokens.is_empty() {
            return Err(ExpressionError::Empty);
        }

        let (node, _) = self.expr()?;

        match self.peek() {
            None => Ok(node),
            Some(Spanned { token: Token::RParen, pos }) => {
                Err(ExpressionError::UnbalancedParen { pos: *pos })
            }
            Some(Spanned { token, pos }) => Err(ExpressionError::UnexpectedToken {
                found: token.describe(),
                pos: *pos,
            }),
        }
    }

    #[inline]
    fn peek(&self) -> Option<&'a Spanned> {
        self.tokens.get(self.pos)
    }

    /// Byte offset of the next token, or of the end of input.
    #[inline]
    fn here(&self) -> usize {
        self.peek()
            .or_else(|| self.tokens.last())
            .map_or(0, |s| s.pos)
    }

    #[inline]
    fn next(&mut self) -> Option<&'a Spanned> {
        let tok = self.tokens.get(self.pos);
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    /// Consumes the next token if it equals `expected`.
    #[inline]
    fn eat(&mut self, expected: &Token) -> bool {
        match self.peek() {
            Some(s) if &s.token == expected => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }

    /// Height of a node over children of height `child`.
    #[inline]
    fn grow(child: usize, pos: usize) -> Result<usize, ExpressionError> {
        let height = child + 1;
        if height > MAX_DEPTH {
            return Err(ExpressionError::TooDeep { pos, max: MAX_DEPTH });
        }
        Ok(height)
    }

    fn expr(&mut self) -> Result<Parsed, ExpressionError> {
        let (mut lhs, mut height) = self.term()?;
        loop {
            let (op, pos) = match self.peek() {
                Some(Spanned { token: Token::Plus, pos })  => (BinaryOp::Add, *pos),
                Some(Spanned { token: Token::Minus, pos }) => (BinaryOp::Sub, *pos),
                _ => return Ok((lhs, height)),
            };
            self.pos += 1;
            let (rhs, rhs_height) = self.term()?;
            height = Self::grow(height.max(rhs_height), pos)?;
            lhs = Node::Binary { op, lhs: Box::new(lhs), rhs: Box::new(rhs) };
        }
    }

    fn term(&mut self) -> Result<Parsed, ExpressionError> {
        let (mut lhs, mut height) = self.unary()?;
        loop {
            let (op, pos) = match self.peek() {
                Some(Spanned { token: Token::Star, pos })    => (BinaryOp::Mul, *pos),
                Some(Spanned { token: Token::Slash, pos })   => (BinaryOp::Div, *pos),
                Some(Spanned { token: Token::Percent, pos }) => (BinaryOp::Rem, *pos),
                _ => return Ok((lhs, height)),
            };
            self.pos += 1;
            let (rhs, rhs_height) = self.unary()?;
            height = Self::grow(height.max(rhs_height), pos)?;
            lhs = Node::Binary { op, lhs: Box::new(lhs), rhs: Box::new(rhs) };
        }
    }

    /// Every recursive path of the grammar passes through here, so this is
    /// where the recursion depth is counted.
    fn unary(&mut self) -> Result<Parsed, ExpressionError> {
        let pos = self.here();
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(ExpressionError::TooDeep { pos, max: MAX_DEPTH });
        }
        let parsed = self.unary_inner(pos);
        self.depth -= 1;
        parsed
    }

    fn unary_inner(&mut self, pos: usize) -> Result<Parsed, ExpressionError> {
        if self.eat(&Token::Minus) {
            let (inner, height) = self.unary()?;
            return Ok((Node::Neg(Box::new(inner)), Self::grow(height, pos)?));
        }
        if self.eat(&Token::Plus) {
            return self.unary();
        }
        self.power()
    }

    fn power(&mut self) -> Result<Parsed, ExpressionError> {
        let (base, base_height) = self.primary()?;
        let pos = self.here();
        if self.eat(&Token::Caret) {
            let (exponent, exp_height) = self.unary()?;
            let node = Node::Binary {
                op: BinaryOp::Pow,
                lhs: Box::new(base),
                rhs: Box::new(exponent),
            };
            return Ok((node, Self::grow(base_height.max(exp_height), pos)?));
        }
        Ok((base, base_height))
    }

    fn primary(&mut self) -> Result<Parsed, ExpressionError> {
        let Some(Spanned { token, pos }) = self.next() else {
            return Err(ExpressionError::UnexpectedEnd { expected: "a number, `x`, a function or '('" });
        };
        let pos = *pos;

        match token {
            Token::Number(v) => Ok((Node::Number(*v), 1)),

            Token::LParen => {
                let inner = self.expr()?;
                if !self.eat(&Token::RParen) {
                    return match self.peek() {
                        None => Err(ExpressionError::UnbalancedParen { pos }),
                        Some(s) => Err(ExpressionError::UnexpectedToken {
                            found: s.token.describe(),
                            pos: s.pos,
                        }),
                    };
                }
                Ok(inner)
            }

            Token::Ident(name) => {
                if self.eat(&Token::LParen) {
                    self.call(name, pos)
                } else {
                    Ok((self.identifier(name, pos)?, 1))
                }
            }

            Token::RParen => Err(ExpressionError::UnbalancedParen { pos }),

            other => Err(ExpressionError::UnexpectedToken { found: other.describe(), pos }),
        }
    }

    fn identifier(&self, name: &str, pos: usize) -> Result<Node, ExpressionError> {
        if name.eq_ignore_ascii_case(VARIABLE) {
            return Ok(Node::Variable);
        }
        if let Some(value) = self.registry.constant(name) {
            return Ok(Node::Number(value));
        }
        if self.registry.function(name).is_some() {
            return Err(ExpressionError::MissingArguments { name: name.to_string(), pos });
        }
        Err(ExpressionError::UnknownIdentifier { name: name.to_string(), pos })
    }

    /// Parses an argument list; the opening '(' is already consumed.
    fn call(&mut self, name: &str, pos: usize) -> Result<Parsed, ExpressionError> {
        let func = *self
            .registry
            .function(name)
            .ok_or_else(|| ExpressionError::UnknownFunction { name: name.to_string(), pos })?;

        let mut args = Vec::new();
        let mut height = 0;
        if !self.eat(&Token::RParen) {
            loop {
                let (arg, arg_height) = self.expr()?;
                args.push(arg);
                height = height.max(arg_height);
                if self.eat(&Token::Comma) {
                    continue;
                }
                if self.eat(&Token::RParen) {
                    break;
                }
                return match self.peek() {
                    None => Err(ExpressionError::UnbalancedParen { pos }),
                    Some(s) => Err(ExpressionError::UnexpectedToken {
                        found: s.token.describe(),
                        pos: s.pos,
                    }),
                };
            }
        }

        let arity = func.arity();
        if !arity.accepts(args.len()) {
            return Err(ExpressionError::ArityMismatch {
                name: func.name.to_string(),
                expected: arity.to_string(),
                got: args.len(),
            });
        }

        Ok((Node::Call { func, args }, Self::grow(height, pos)?))
    }
}
