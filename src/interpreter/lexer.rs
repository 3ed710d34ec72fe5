use logos::{FilterResult, Logos};

use crate::{ast::Position, error::ParseError};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(error = LexError)]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// Boolean literal tokens, `true` or `false`.
    #[token("true", parse_bool)]
    #[token("false", parse_bool)]
    Bool(bool),
    /// String literal tokens. The callback scans to the closing quote and
    /// resolves the escapes `\\`, `\n`, `\t`, `\"` and backslash-newline
    /// line continuation.
    #[token("\"", lex_string)]
    Str(String),
    /// `(* Block comments. *)` Skipped; comments do not nest.
    #[token("(*", lex_comment)]
    Comment,
    /// `if`
    #[token("if")]
    If,
    /// `then`
    #[token("then")]
    Then,
    /// `else`
    #[token("else")]
    Else,
    /// `let`
    #[token("let")]
    Let,
    /// `val`
    #[token("val")]
    Val,
    /// `fun`
    #[token("fun")]
    Fun,
    /// `and`
    #[token("and")]
    And,
    /// `in`
    #[token("in")]
    In,
    /// `end`
    #[token("end")]
    End,
    /// `fn`
    #[token("fn")]
    Fn,
    /// `orelse`
    #[token("orelse")]
    Orelse,
    /// `andalso`
    #[token("andalso")]
    Andalso,
    /// `div`
    #[token("div")]
    Div,
    /// `mod`
    #[token("mod")]
    Mod,
    /// `not`
    #[token("not")]
    Not,
    /// `print`
    #[token("print")]
    Print,
    /// `fst`
    #[token("fst")]
    Fst,
    /// `snd`
    #[token("snd")]
    Snd,
    /// Identifier tokens; variable or function names such as `x` or `fib`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `<`
    #[token("<")]
    Less,
    /// `=`
    #[token("=")]
    Equals,
    /// `=>`
    #[token("=>")]
    FatArrow,
    /// Any other maximal run of operator characters. Multi-character runs
    /// like `<=` or `::` lex as one token here and are rejected by the
    /// parser with their position, never split into known operators.
    #[regex(r"[+*/<>=&!:.-]+", |lex| lex.slice().to_string(), priority = 1)]
    Operator(String),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `,`
    #[token(",")]
    Comma,
    /// `|`
    #[token("|")]
    Pipe,
    /// The explicit end-of-input sentinel appended by [`tokenize`]. Real
    /// input never contains NUL; the pattern exists so the variant has
    /// one.
    #[token("\0")]
    Eof,

    /// Newlines. Skipped like all other whitespace; line accounting is done
    /// by [`tokenize`] from the token spans.
    #[token("\n", logos::skip)]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// Lexer-internal fault kinds, mapped to [`ParseError`] with a position by
/// [`tokenize`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum LexError {
    /// No lexer rule matched at this input position.
    #[default]
    UnexpectedCharacter,
    /// End of input inside a string literal.
    UnterminatedString,
    /// End of input inside a block comment.
    UnterminatedComment,
    /// Unknown escape sequence inside a string literal.
    InvalidEscape,
    /// Literal newline inside a string literal.
    NewlineInString,
    /// Literal tab inside a string literal.
    TabInString,
    /// Digit run too large for an `i64`.
    LiteralTooLarge,
}

impl LexError {
    /// Converts this lexer fault into a positioned [`ParseError`].
    fn into_parse_error(self, text: &str, position: Position) -> ParseError {
        match self {
            Self::UnexpectedCharacter => ParseError::UnexpectedCharacter { text: text.to_string(),
                                                                           position },
            Self::UnterminatedString => ParseError::UnterminatedString { position },
            Self::UnterminatedComment => ParseError::UnterminatedComment { position },
            Self::InvalidEscape => ParseError::InvalidEscape { position },
            Self::NewlineInString => ParseError::NewlineInString { position },
            Self::TabInString => ParseError::TabInString { position },
            Self::LiteralTooLarge => ParseError::LiteralTooLarge { position },
        }
    }
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Ok(i64)`: The parsed value.
/// - `Err(LexError::LiteralTooLarge)`: If the digit run overflows an `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Result<i64, LexError> {
    lex.slice().parse().map_err(|_| LexError::LiteralTooLarge)
}

/// Parses a boolean literal from the current token slice.
fn parse_bool(lex: &logos::Lexer<Token>) -> Option<bool> {
    match lex.slice() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Scans the remainder of a string literal, resolving escapes.
///
/// Called with the lexer positioned just past the opening quote. Consumes
/// through the closing quote and returns the unescaped contents. A
/// backslash immediately followed by a newline swallows the newline and any
/// run of spaces and tabs after it, so long literals can be wrapped in the
/// source.
fn lex_string(lex: &mut logos::Lexer<Token>) -> Result<String, LexError> {
    let remainder = lex.remainder();
    let mut value = String::new();
    let mut chars = remainder.char_indices();

    while let Some((i, c)) = chars.next() {
        match c {
            '"' => {
                lex.bump(i + 1);
                return Ok(value);
            },
            '\n' => return Err(LexError::NewlineInString),
            '\t' => return Err(LexError::TabInString),
            '\\' => match chars.next() {
                Some((_, '\\')) => value.push('\\'),
                Some((_, 'n')) => value.push('\n'),
                Some((_, 't')) => value.push('\t'),
                Some((_, '"')) => value.push('"'),
                Some((_, '\n')) => {
                    // Line continuation: swallow trailing indentation too.
                    while let Some((_, ' ' | '\t')) = chars.clone().next() {
                        chars.next();
                    }
                },
                _ => return Err(LexError::InvalidEscape),
            },
            _ => value.push(c),
        }
    }

    Err(LexError::UnterminatedString)
}

/// Skips a `(* ... *)` block comment.
///
/// Called with the lexer positioned just past the opener. Comments do not
/// nest: the first `*)` closes the comment.
fn lex_comment(lex: &mut logos::Lexer<Token>) -> FilterResult<(), LexError> {
    match lex.remainder().find("*)") {
        Some(end) => {
            lex.bump(end + 2);
            FilterResult::Skip
        },
        None => FilterResult::Error(LexError::UnterminatedComment),
    }
}

/// Tokenizes a complete source string.
///
/// Produces the token sequence the parser consumes, each token paired with
/// the [`Position`] of its first character, and terminated by an explicit
/// [`Token::Eof`] sentinel so the parser can report a position even at end
/// of input.
///
/// # Errors
/// Returns a [`ParseError`] describing the first lex fault: an unexpected
/// character, a malformed string literal, an unterminated comment, or an
/// oversized integer literal.
///
/// # Example
/// ```
/// use miniml::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("fst (2,3)").unwrap();
/// assert_eq!(tokens[0].0, Token::Fst);
/// assert_eq!(tokens.last().unwrap().0, Token::Eof);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, Position)>, ParseError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();
    let mut tracker = PositionTracker::new(source);

    while let Some(item) = lexer.next() {
        let span = lexer.span();
        let position = tracker.position_of(span.start);
        match item {
            Ok(token) => tokens.push((token, position)),
            Err(fault) => return Err(fault.into_parse_error(lexer.slice(), position)),
        }
    }

    let end = tracker.position_of(source.len());
    tokens.push((Token::Eof, end));
    Ok(tokens)
}

/// Resolves byte offsets to line/column positions in a single forward pass.
///
/// Offsets must be queried in non-decreasing order, which the lexer
/// guarantees. Newlines inside multi-line tokens (strings with
/// continuations, block comments) are counted when the scan passes them, so
/// the positions of later tokens stay correct.
struct PositionTracker<'a> {
    source:     &'a str,
    line:       usize,
    line_start: usize,
    scanned:    usize,
}

impl<'a> PositionTracker<'a> {
    fn new(source: &'a str) -> Self {
        Self { source,
               line: 1,
               line_start: 0,
               scanned: 0 }
    }

    fn position_of(&mut self, offset: usize) -> Position {
        for (i, c) in self.source[self.scanned..offset].char_indices() {
            if c == '\n' {
                self.line += 1;
                self.line_start = self.scanned + i + 1;
            }
        }
        self.scanned = offset;

        let column = self.source[self.line_start..offset]
                         .chars()
                         .map(|c| if c == '\t' { 4 } else { 1 })
                         .sum::<usize>()
                     + 1;
        Position { line: self.line, column }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::Integer(n) => return write!(f, "{n}"),
            Self::Bool(b) => return write!(f, "{b}"),
            Self::Str(s) => return write!(f, "\"{s}\""),
            Self::Identifier(s) | Self::Operator(s) => return write!(f, "{s}"),
            Self::Comment => "(*",
            Self::If => "if",
            Self::Then => "then",
            Self::Else => "else",
            Self::Let => "let",
            Self::Val => "val",
            Self::Fun => "fun",
            Self::And => "and",
            Self::In => "in",
            Self::End => "end",
            Self::Fn => "fn",
            Self::Orelse => "orelse",
            Self::Andalso => "andalso",
            Self::Div => "div",
            Self::Mod => "mod",
            Self::Not => "not",
            Self::Print => "print",
            Self::Fst => "fst",
            Self::Snd => "snd",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Less => "<",
            Self::Equals => "=",
            Self::FatArrow => "=>",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::Semicolon => ";",
            Self::Comma => ",",
            Self::Pipe => "|",
            Self::Eof => "eof",
            Self::NewLine | Self::Ignored => " ",
        };
        write!(f, "{text}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        tokenize(source).unwrap().into_iter().map(|(t, _)| t).collect()
    }

    #[test]
    fn lexes_a_lambda_application() {
        assert_eq!(kinds("(fn x => x+1) 5"),
                   vec![Token::LParen,
                        Token::Fn,
                        Token::Identifier("x".to_string()),
                        Token::FatArrow,
                        Token::Identifier("x".to_string()),
                        Token::Plus,
                        Token::Integer(1),
                        Token::RParen,
                        Token::Integer(5),
                        Token::Eof]);
    }

    #[test]
    fn keywords_are_not_identifiers() {
        assert_eq!(kinds("div mod divisor"),
                   vec![Token::Div,
                        Token::Mod,
                        Token::Identifier("divisor".to_string()),
                        Token::Eof]);
    }

    #[test]
    fn operator_runs_lex_as_single_tokens() {
        assert_eq!(kinds("1 <= 2"),
                   vec![Token::Integer(1),
                        Token::Operator("<=".to_string()),
                        Token::Integer(2),
                        Token::Eof]);
        assert_eq!(kinds("fn x => x"),
                   vec![Token::Fn,
                        Token::Identifier("x".to_string()),
                        Token::FatArrow,
                        Token::Identifier("x".to_string()),
                        Token::Eof]);
    }

    #[test]
    fn comments_and_whitespace_are_skipped() {
        assert_eq!(kinds("1 (* a comment\nover two lines *) + 2"),
                   vec![Token::Integer(1), Token::Plus, Token::Integer(2), Token::Eof]);
    }

    #[test]
    fn unterminated_comment_is_a_fault() {
        assert!(matches!(tokenize("1 + (* oops"),
                         Err(ParseError::UnterminatedComment { .. })));
    }

    #[test]
    fn string_escapes_resolve() {
        assert_eq!(kinds(r#""a\tb\\c\"d""#),
                   vec![Token::Str("a\tb\\c\"d".to_string()), Token::Eof]);
    }

    #[test]
    fn string_line_continuation_swallows_indentation() {
        assert_eq!(kinds("\"ab\\\n   cd\""),
                   vec![Token::Str("abcd".to_string()), Token::Eof]);
    }

    #[test]
    fn string_faults() {
        assert!(matches!(tokenize("\"abc"), Err(ParseError::UnterminatedString { .. })));
        assert!(matches!(tokenize("\"a\\q\""), Err(ParseError::InvalidEscape { .. })));
        assert!(matches!(tokenize("\"a\nb\""), Err(ParseError::NewlineInString { .. })));
        assert!(matches!(tokenize("\"a\tb\""), Err(ParseError::TabInString { .. })));
    }

    #[test]
    fn oversized_integer_literal_is_a_fault() {
        assert!(matches!(tokenize("99999999999999999999"),
                         Err(ParseError::LiteralTooLarge { .. })));
    }

    #[test]
    fn positions_track_lines_and_tab_columns() {
        let tokens = tokenize("1\n\tlet").unwrap();
        assert_eq!(tokens[0].1, Position { line: 1, column: 1 });
        assert_eq!(tokens[1].1, Position { line: 2, column: 5 });
    }

    #[test]
    fn positions_survive_multiline_comments() {
        let tokens = tokenize("(* a\nb *) x").unwrap();
        let (token, position) = &tokens[0];
        assert_eq!(*token, Token::Identifier("x".to_string()));
        assert_eq!(*position, Position { line: 2, column: 6 });
    }
}
