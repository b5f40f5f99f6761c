use doomweb_common::span::Span;
use logos::Logos;

/// Callback to normalize identifiers/keywords to lowercase for case-insensitivity.
fn to_lowercase(lex: &logos::Lexer<'_, RawToken>) -> String {
    lex.slice().to_ascii_lowercase()
}

/// Raw token produced by logos before keyword classification.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r]+")]
#[logos(skip r"#[^\n]*")]
pub enum RawToken {
    #[regex(r"-?[0-9]+(\.[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    Number(f64),

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", to_lowercase)]
    Ident(String),

    #[token("=")]
    Eq,

    #[token("\n")]
    Newline,
}

/// Classified token with commands resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Commands
    Connect,
    Disconnect,
    Frame,
    Lost,

    Number(f64),
    /// Button or axis name
    Ident(String),
    Eq,

    Newline,
    Eof,
    Error,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Connect => write!(f, "connect"),
            Token::Disconnect => write!(f, "disconnect"),
            Token::Frame => write!(f, "frame"),
            Token::Lost => write!(f, "lost"),
            Token::Number(v) => write!(f, "{v}"),
            Token::Ident(s) => write!(f, "{s}"),
            Token::Eq => write!(f, "="),
            Token::Newline => write!(f, "\\n"),
            Token::Eof => write!(f, "EOF"),
            Token::Error => write!(f, "<error>"),
        }
    }
}

/// A token with its source span.
#[derive(Debug, Clone)]
pub struct SpannedToken {
    pub token: Token,
    pub span: Span,
}

fn classify_ident(s: &str) -> Token {
    match s {
        "connect" => Token::Connect,
        "disconnect" => Token::Disconnect,
        "frame" => Token::Frame,
        "lost" => Token::Lost,
        _ => Token::Ident(s.to_string()),
    }
}

/// Tokenize a trace script into spanned tokens, terminated by `Eof`.
pub fn tokenize(source: &str) -> Vec<SpannedToken> {
    let mut tokens = Vec::new();
    let lexer = RawToken::lexer(source);

    for (result, range) in lexer.spanned() {
        let span = Span::new(range.start, range.end);
        let token = match result {
            Ok(RawToken::Number(v)) => Token::Number(v),
            Ok(RawToken::Ident(s)) => classify_ident(&s),
            Ok(RawToken::Eq) => Token::Eq,
            Ok(RawToken::Newline) => Token::Newline,
            Err(()) => Token::Error,
        };
        tokens.push(SpannedToken { token, span });
    }

    tokens.push(SpannedToken {
        token: Token::Eof,
        span: Span::new(source.len(), source.len()),
    });

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        tokenize(source).into_iter().map(|t| t.token).collect()
    }

    #[test]
    fn test_frame_line() {
        assert_eq!(
            kinds("frame south ly=-0.5"),
            vec![
                Token::Frame,
                Token::Ident("south".into()),
                Token::Ident("ly".into()),
                Token::Eq,
                Token::Number(-0.5),
                Token::Eof,
            ]
        );
    }

    #[test]
    fn test_case_insensitive_commands_and_comments() {
        assert_eq!(
            kinds("CONNECT 0 # first pad\nLost"),
            vec![
                Token::Connect,
                Token::Number(0.0),
                Token::Newline,
                Token::Lost,
                Token::Eof,
            ]
        );
    }

    #[test]
    fn test_spans() {
        let tokens = tokenize("disconnect 12");
        assert_eq!(tokens[0].span, Span::new(0, 10));
        assert_eq!(tokens[1].span, Span::new(11, 13));
        assert_eq!(tokens[2].span, Span::new(13, 13));
    }

    #[test]
    fn test_unknown_character_is_error() {
        assert_eq!(kinds("frame @"), vec![Token::Frame, Token::Error, Token::Eof]);
    }
}
