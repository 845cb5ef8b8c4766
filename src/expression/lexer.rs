//! Tokenizer for function text.
//!
//! Splits the source into [`Token`]s tagged with their byte offset.
//! Whitespace is insignificant. Number literals accept an optional
//! fraction and exponent (`2`, `.5`, `1.5e-3`); an `e` that is not
//! followed by digits is left for the identifier rules (so `2*e` and
//! `2e` are not confused with exponents).

use super::errors::ExpressionError;


#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret,
    LParen,
    RParen,
    Comma,
}
impl Token {
    pub(crate) fn describe(&self) -> String {
        match self {
            Token::Number(v) => format!("number {v}"),
            Token::Ident(s)  => format!("identifier '{s}'"),
            Token::Plus      => "'+'".to_string(),
            Token::Minus     => "'-'".to_string(),
            Token::Star      => "'*'".to_string(),
            Token::Slash     => "'/'".to_string(),
            Token::Percent   => "'%'".to_string(),
            Token::Caret     => "'^'".to_string(),
            Token::LParen    => "'('".to_string(),
            Token::RParen    => "')'".to_string(),
            Token::Comma     => "','".to_string(),
        }
    }
}


#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Spanned {
    pub token : Token,
    pub pos   : usize,
}


pub(crate) fn tokenize(src: &str) -> Result<Vec<Spanned>, ExpressionError> {
    let chars: Vec<(usize, char)> = src.char_indices().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let (pos, c) = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        if c.is_ascii_digit() || c == '.' {
            let end = scan_number(&chars, i);
            let stop = chars.get(end).map_or(src.len(), |&(p, _)| p);
            let literal = &src[pos..stop];
            let value = literal.parse::<f64>().map_err(|_| ExpressionError::InvalidNumber {
                literal: literal.to_string(),
                pos,
            })?;
            tokens.push(Spanned { token: Token::Number(value), pos });
            i = end;
            continue;
        }

        if c.is_alphabetic() || c == '_' {
            let mut end = i;
            while end < chars.len() && (chars[end].1.is_alphanumeric() || chars[end].1 == '_') {
                end += 1;
            }
            let stop = chars.get(end).map_or(src.len(), |&(p, _)| p);
            tokens.push(Spanned { token: Token::Ident(src[pos..stop].to_string()), pos });
            i = end;
            continue;
        }

        let token = match c {
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Star,
            '/' => Token::Slash,
            '%' => Token::Percent,
            '^' => Token::Caret,
            '(' => Token::LParen,
            ')' => Token::RParen,
            ',' => Token::Comma,
            _   => return Err(ExpressionError::UnexpectedChar { ch: c, pos }),
        };
        tokens.push(Spanned { token, pos });
        i += 1;
    }

    Ok(tokens)
}


/// Returns the index one past the end of the number starting at `start`.
fn scan_number(chars: &[(usize, char)], start: usize) -> usize {
    let digit_at = |k: usize| chars.get(k).is_some_and(|&(_, c)| c.is_ascii_digit());

    let mut i = start;
    while digit_at(i) {
        i += 1;
    }
    if chars.get(i).is_some_and(|&(_, c)| c == '.') {
        i += 1;
        while digit_at(i) {
            i += 1;
        }
    }

    // exponent only if digits follow, optionally after a sign
    if chars.get(i).is_some_and(|&(_, c)| c == 'e' || c == 'E') {
        let signed = chars.get(i + 1).is_some_and(|&(_, c)| c == '+' || c == '-');
        let first_digit = if signed { i + 2 } else { i + 1 };
        if digit_at(first_digit) {
            i = first_digit;
            while digit_at(i) {
                i += 1;
            }
        }
    }

    i
}
