use super::*;

fn lit(s: &str) -> Token {
    Token::Literal(s.to_owned())
}

fn ph(s: &str) -> Token {
    Token::Placeholder(s.to_owned())
}

#[test]
fn literal_placeholder_literal() {
    let lexed = tokenize("Score: {score} pts");
    assert_eq!(lexed.tokens, vec![lit("Score: "), ph("SCORE"), lit(" pts")]);
    assert!(lexed.diagnostics.is_empty());
}

#[test]
fn plain_text_is_one_literal() {
    assert_eq!(tokenize("no placeholders").tokens, vec![lit("no placeholders")]);
}

#[test]
fn empty_input_has_no_tokens() {
    let lexed = tokenize("");
    assert!(lexed.tokens.is_empty());
    assert!(lexed.diagnostics.is_empty());
}

#[test]
fn adjacent_placeholders_emit_no_empty_literals() {
    assert_eq!(
        tokenize("{a}{b}").tokens,
        vec![ph("A"), ph("B")]
    );
}

#[test]
fn names_are_uppercased_and_whitespace_becomes_underscores() {
    assert_eq!(
        tokenize("{player   name }").tokens,
        vec![ph("PLAYER_NAME")]
    );
    assert_eq!(tokenize("{total\t score}").tokens, vec![ph("TOTAL_SCORE")]);
}

#[test]
fn only_trailing_whitespace_is_trimmed() {
    assert_eq!(tokenize("{ score}").tokens, vec![ph("_SCORE")]);
    assert_eq!(tokenize("{score \t}").tokens, vec![ph("SCORE")]);
    assert_eq!(normalize_placeholder("  a b  "), "_A_B");
}

#[test]
fn unclosed_placeholder_is_emitted_with_diagnostic() {
    let lexed = tokenize("Hello {NAME");
    assert_eq!(lexed.tokens, vec![lit("Hello "), ph("NAME")]);
    assert_eq!(
        lexed.diagnostics,
        vec![Diagnostic::UnclosedPlaceholder {
            offset: 6,
            name: "NAME".into()
        }]
    );
}

#[test]
fn lone_open_brace_is_an_empty_unclosed_placeholder() {
    let lexed = tokenize("x {");
    assert_eq!(lexed.tokens, vec![lit("x "), ph("")]);
    assert_eq!(lexed.diagnostics.len(), 1);
}

#[test]
fn stray_close_brace_is_literal() {
    assert_eq!(tokenize("a } b").tokens, vec![lit("a } b")]);
}

#[test]
fn nested_open_brace_is_part_of_the_name() {
    assert_eq!(tokenize("{a{b} c").tokens, vec![ph("A{B"), lit(" c")]);
}

#[test]
fn multibyte_text_is_preserved() {
    assert_eq!(
        tokenize("Gracz: {gracz} ✓").tokens,
        vec![lit("Gracz: "), ph("GRACZ"), lit(" ✓")]
    );
}
