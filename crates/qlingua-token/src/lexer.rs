//! Lexer for gate tokens.

use logos::Logos;

/// Lexical units of a gate token's argument groups.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
pub enum Token {
    // Constants
    #[regex("[pP][iI]", priority = 3)]
    #[token("π")]
    Pi,

    // Literals
    #[regex(r"[0-9]+\.[0-9]*([eE][+-]?[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+", |lex| lex.slice().parse::<f64>().ok())]
    FloatLiteral(f64),

    #[regex(r"[0-9]+", |lex| lex.slice().parse::<u64>().ok())]
    IntLiteral(u64),

    // Identifiers (only valid as gate names, which are split off before lexing)
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),

    // Operators and punctuation
    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Star,

    #[token("/")]
    Slash,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token(",")]
    Comma,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Pi => write!(f, "PI"),
            Token::FloatLiteral(v) => write!(f, "{v}"),
            Token::IntLiteral(v) => write!(f, "{v}"),
            Token::Identifier(s) => write!(f, "{s}"),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Star => write!(f, "*"),
            Token::Slash => write!(f, "/"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::Comma => write!(f, ","),
        }
    }
}

/// A token with its span information.
#[derive(Debug, Clone)]
pub struct SpannedToken {
    pub token: Token,
    pub span: std::ops::Range<usize>,
}

/// Tokenize the argument groups of a gate token.
///
/// A digit run too wide for `u64` is read as a [`Token::FloatLiteral`], so it
/// is still a number in a parameter expression and an invalid qubit index.
pub fn tokenize(source: &str) -> Vec<Result<SpannedToken, (std::ops::Range<usize>, String)>> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let slice = &source[span.clone()];
        match result.ok().or_else(|| wide_integer(slice)) {
            Some(token) => tokens.push(Ok(SpannedToken { token, span })),
            None => tokens.push(Err((span, format!("Invalid token: '{slice}'")))),
        }
    }

    tokens
}

fn wide_integer(slice: &str) -> Option<Token> {
    if slice.is_empty() || !slice.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    slice.parse::<f64>().ok().map(Token::FloatLiteral)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(source: &str) -> Vec<Token> {
        tokenize(source)
            .into_iter()
            .filter_map(Result::ok)
            .map(|t| t.token)
            .collect()
    }

    #[test]
    fn test_qubit_group() {
        assert_eq!(
            lex("(0, 12)"),
            vec![
                Token::LParen,
                Token::IntLiteral(0),
                Token::Comma,
                Token::IntLiteral(12),
                Token::RParen,
            ]
        );
    }

    #[test]
    fn test_parameter_group() {
        let tokens = lex("(PI/2)(3)");
        assert_eq!(tokens[0], Token::LParen);
        assert_eq!(tokens[1], Token::Pi);
        assert_eq!(tokens[2], Token::Slash);
        assert_eq!(tokens[3], Token::IntLiteral(2));
        assert_eq!(tokens[4], Token::RParen);
        assert_eq!(tokens[6], Token::IntLiteral(3));
    }

    #[test]
    fn test_pi_spellings() {
        assert_eq!(lex("pi Pi PI π"), vec![Token::Pi; 4]);
        assert!(matches!(lex("pix")[0], Token::Identifier(ref s) if s == "pix"));
    }

    #[test]
    fn test_float_literals() {
        assert!(matches!(lex("0.4")[0], Token::FloatLiteral(v) if (v - 0.4).abs() < 1e-15));
        assert!(matches!(lex(".5")[0], Token::FloatLiteral(v) if (v - 0.5).abs() < 1e-15));
        assert!(matches!(lex("1e-3")[0], Token::FloatLiteral(v) if (v - 1e-3).abs() < 1e-18));
        assert!(matches!(lex("2.")[0], Token::FloatLiteral(v) if (v - 2.0).abs() < 1e-15));
    }

    #[test]
    fn test_wide_integer_is_float() {
        assert_eq!(lex("18446744073709551615"), vec![Token::IntLiteral(u64::MAX)]);
        assert_eq!(
            lex("18446744073709551616"),
            vec![Token::FloatLiteral(18_446_744_073_709_551_616.0)]
        );
        assert_eq!(
            lex("100000000000000000000"),
            vec![Token::FloatLiteral(1e20)]
        );
    }

    #[test]
    fn test_invalid_character() {
        let results = tokenize("(0; 1)");
        assert!(results.iter().any(Result::is_err));
    }
}
