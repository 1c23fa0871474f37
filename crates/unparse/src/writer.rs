// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # SQL Writer
//!
//! [`SqlWriter`] is the token sink the unparser emits into. It knows nothing
//! about operators or dialects; it only decides where whitespace goes and
//! keeps parenthesized lists balanced.
//!
//! ```rust
//! use unified_sql_unparse::writer::{PrettyWriter, SqlWriter};
//!
//! let mut writer = PrettyWriter::new();
//! writer.print("toStartOfYear");
//! let frame = writer.start_list("(", ")");
//! writer.identifier("`ts`");
//! writer.end_list(frame);
//!
//! assert_eq!(writer.as_sql(), "toStartOfYear(`ts`)");
//! ```

/// An open list, returned by [`SqlWriter::start_list`]
///
/// Must be handed back to [`SqlWriter::end_list`] exactly once.
#[derive(Debug)]
#[must_use = "a frame must be closed with end_list"]
pub struct Frame {
    close: &'static str,
    depth: usize,
}

/// Token sink used by the unparser
pub trait SqlWriter {
    /// Print a bare word, such as a function or type name
    fn print(&mut self, text: &str);

    /// Print a keyword or operator symbol
    fn keyword(&mut self, keyword: &str);

    /// Print an identifier that has already been quoted
    fn identifier(&mut self, text: &str);

    /// Print a literal that has already been quoted or formatted
    fn literal(&mut self, text: &str);

    /// Print a list separator such as `,`
    fn sep(&mut self, sep: &str);

    /// Open a list delimited by `open` and `close`
    fn start_list(&mut self, open: &'static str, close: &'static str) -> Frame;

    /// Close a list opened by [`SqlWriter::start_list`]
    fn end_list(&mut self, frame: Frame);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Start,
    Word,
    Keyword,
    Open,
    Close,
    Sep,
}

/// Single-line writer producing compact, conventionally spaced SQL
#[derive(Debug)]
pub struct PrettyWriter {
    buf: String,
    last: Token,
    frames: Vec<&'static str>,
}

impl PrettyWriter {
    pub fn new() -> Self {
        Self {
            buf: String::new(),
            last: Token::Start,
            frames: Vec::new(),
        }
    }

    /// The SQL written so far
    pub fn as_sql(&self) -> &str {
        &self.buf
    }

    pub fn into_sql(self) -> String {
        debug_assert!(self.frames.is_empty(), "unclosed frames: {:?}", self.frames);
        self.buf
    }

    /// Clear the buffer so the writer can be reused
    pub fn reset(&mut self) {
        self.buf.clear();
        self.frames.clear();
        self.last = Token::Start;
    }

    fn needs_space(&self, next: Token) -> bool {
        match (self.last, next) {
            (Token::Start | Token::Open, _) => false,
            (_, Token::Close | Token::Sep) => false,
            // function call: `name(`
            (Token::Word, Token::Open) => false,
            _ => true,
        }
    }

    fn push(&mut self, text: &str, token: Token) {
        if self.needs_space(token) {
            self.buf.push(' ');
        }
        self.buf.push_str(text);
        self.last = token;
    }
}

impl Default for PrettyWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl SqlWriter for PrettyWriter {
    fn print(&mut self, text: &str) {
        self.push(text, Token::Word);
    }

    fn keyword(&mut self, keyword: &str) {
        self.push(keyword, Token::Keyword);
    }

    fn identifier(&mut self, text: &str) {
        self.push(text, Token::Word);
    }

    fn literal(&mut self, text: &str) {
        self.push(text, Token::Word);
    }

    fn sep(&mut self, sep: &str) {
        self.push(sep, Token::Sep);
    }

    fn start_list(&mut self, open: &'static str, close: &'static str) -> Frame {
        self.push(open, Token::Open);
        self.frames.push(close);
        Frame {
            close,
            depth: self.frames.len(),
        }
    }

    fn end_list(&mut self, frame: Frame) {
        debug_assert_eq!(self.frames.len(), frame.depth, "frames closed out of order");
        self.frames.pop();
        self.push(frame.close, Token::Close);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_spacing() {
        let mut w = PrettyWriter::new();
        w.keyword("SELECT");
        w.keyword("NULL");
        w.keyword("UNION ALL");
        w.keyword("SELECT");
        w.keyword("NULL");
        assert_eq!(w.as_sql(), "SELECT NULL UNION ALL SELECT NULL");
    }

    #[test]
    fn test_function_call_spacing() {
        let mut w = PrettyWriter::new();
        w.print("DATE_FORMAT");
        let frame = w.start_list("(", ")");
        w.identifier("`d`");
        w.sep(",");
        w.literal("'%Y-01-01'");
        w.end_list(frame);
        assert_eq!(w.into_sql(), "DATE_FORMAT(`d`, '%Y-01-01')");
    }

    #[test]
    fn test_parenthesized_after_keyword() {
        let mut w = PrettyWriter::new();
        w.keyword("ELSE");
        let frame = w.start_list("(", ")");
        w.keyword("SELECT");
        w.keyword("NULL");
        w.end_list(frame);
        w.keyword("END");
        assert_eq!(w.as_sql(), "ELSE (SELECT NULL) END");
    }

    #[test]
    fn test_nested_frames() {
        let mut w = PrettyWriter::new();
        w.print("f");
        let outer = w.start_list("(", ")");
        w.print("g");
        let inner = w.start_list("(", ")");
        w.identifier("x");
        w.end_list(inner);
        w.end_list(outer);
        assert_eq!(w.as_sql(), "f(g(x))");
    }

    #[test]
    fn test_reset() {
        let mut w = PrettyWriter::new();
        w.keyword("SELECT");
        w.reset();
        w.keyword("VALUES");
        assert_eq!(w.as_sql(), "VALUES");
    }
}
