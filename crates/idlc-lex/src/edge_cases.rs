//! Edge case tests for idlc-lex

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use crate::{LexError, Lexer, LexerConfig};

    fn lex_all(source: &str) -> Vec<String> {
        Lexer::new(source)
            .map(|t| t.map(Cow::into_owned))
            .collect::<Result<_, _>>()
            .unwrap()
    }

    fn lex_err(source: &str) -> LexError {
        Lexer::new(source)
            .collect::<Result<Vec<_>, _>>()
            .unwrap_err()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_edge_whitespace_only() {
        assert!(lex_all("  \n\t \r\n ").is_empty());
    }

    #[test]
    fn test_edge_comments_only() {
        assert!(lex_all("// comment\n/* block */\n/// doc\n/** doc */").is_empty());
    }

    #[test]
    fn test_edge_single_char_token() {
        assert_eq!(lex_all("x"), ["x"]);
    }

    #[test]
    fn test_edge_long_token() {
        let name = "a".repeat(10000);
        let t = lex_all(&format!("{} = 1;", name));
        assert_eq!(t[0], name);
    }

    #[test]
    fn test_edge_no_spaces() {
        assert_eq!(
            lex_all("message A{int32 b=1;}"),
            ["message", "A", "{", "int32", "b", "=", "1", ";", "}"]
        );
    }

    #[test]
    fn test_edge_comment_glued_to_token() {
        assert_eq!(lex_all("a/* x */b"), ["a/*", "x", "*/b"]);
        assert_eq!(lex_all("a /* x */b"), ["a", "b"]);
    }

    #[test]
    fn test_edge_slash_inside_token() {
        assert_eq!(
            lex_all("import \"a/b.proto\";"),
            ["import", "\"", "a/b.proto", "\"", ";"]
        );
        assert_eq!(lex_all("x//y"), ["x//y"]);
    }

    #[test]
    fn test_edge_comment_closes_at_first_terminator() {
        assert_eq!(lex_all("/* a */ b */"), ["b", "*/"]);
    }

    #[test]
    fn test_edge_block_marker_not_closed_by_opening_star() {
        assert_eq!(lex_err("/*/"), LexError::IllegalComment { line: 1 });
    }

    #[test]
    fn test_edge_crlf_line_comment() {
        let mut lexer = Lexer::new("/// crlf\r\nfoo");
        assert_eq!(lexer.next_token().unwrap().as_deref(), Some("foo"));
        assert_eq!(lexer.cmnt(None).unwrap().as_deref(), Some("crlf"));
    }

    #[test]
    fn test_edge_non_ascii_tokens() {
        assert_eq!(lex_all("ñame = 'ü';"), ["ñame", "=", "'", "ü", "'", ";"]);
    }

    #[test]
    fn test_edge_option_with_brackets() {
        assert_eq!(
            lex_all("int32 x = 1 [deprecated = true];"),
            ["int32", "x", "=", "1", "[", "deprecated", "=", "true", "]", ";"]
        );
    }

    #[test]
    fn test_edge_rpc_signature() {
        assert_eq!(
            lex_all("rpc Get(Req) returns (stream Resp);"),
            ["rpc", "Get", "(", "Req", ")", "returns", "(", "stream", "Resp", ")", ";"]
        );
    }

    #[test]
    fn test_edge_quote_at_end_of_input() {
        assert_eq!(lex_err("x \""), LexError::IllegalString { line: 1 });
    }

    #[test]
    fn test_edge_string_then_comment() {
        let mut lexer = Lexer::new("\"a\" /// tail\n");
        let tokens: Vec<_> = lexer.by_ref().collect::<Result<_, _>>().unwrap();
        assert_eq!(tokens, ["\"", "a", "\""]);
        assert_eq!(lexer.cmnt(Some(1)).unwrap().as_deref(), Some("tail"));
    }

    #[test]
    fn test_edge_error_ends_session() {
        let mut lexer = Lexer::new("a 'open\nb c");
        assert_eq!(lexer.next_token().unwrap().as_deref(), Some("a"));
        assert_eq!(lexer.next_token().unwrap().as_deref(), Some("'"));
        assert!(lexer.next_token().is_err());
        assert_eq!(lexer.next_token().unwrap(), None);
        assert_eq!(lexer.peek().unwrap(), None);
    }

    #[test]
    fn test_edge_unexpected_token_ends_session() {
        let mut lexer = Lexer::new("; }");
        assert!(Lexer::skip(&mut lexer, "}", false).is_err());
        assert_eq!(lexer.next_token().unwrap(), None);
    }

    #[test]
    fn test_edge_alternate_mode_doc_markers() {
        let mut lexer = Lexer::with_config("/// three\nx", LexerConfig::alternate_comments());
        assert_eq!(lexer.next_token().unwrap().as_deref(), Some("x"));
        assert_eq!(lexer.cmnt(None).unwrap().as_deref(), Some("three"));
    }

    #[test]
    fn test_edge_unicode_line_separator_is_whitespace() {
        // U+2028 separates tokens but does not count as a line
        let mut lexer = Lexer::new("a\u{2028}b");
        let tokens: Vec<_> = lexer.by_ref().collect::<Result<_, _>>().unwrap();
        assert_eq!(tokens, ["a", "b"]);
        assert_eq!(lexer.line(), 1);
    }
}
