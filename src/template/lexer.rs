/// One piece of a tokenized template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Text copied verbatim.
    Literal(String),
    /// Normalized variable name (uppercase, whitespace runs replaced by `_`).
    Placeholder(String),
}

/// Non-fatal problems found while tokenizing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Input ended inside `{...`. The placeholder is still emitted.
    UnclosedPlaceholder { offset: usize, name: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexed {
    pub tokens: Vec<Token>,
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    InLiteral,
    /// Byte offset of the opening brace.
    InPlaceholder(usize),
}

/// Split `input` into literal and placeholder tokens.
///
/// Total: every input produces a token sequence. `{` opens a placeholder (a nested `{` is part
/// of the name), `}` closes it (a stray `}` in literal text stays literal).
pub fn tokenize(input: &str) -> Lexed {
    let mut out = Lexed::default();
    let mut literal = String::new();
    let mut name = String::new();
    let mut state = State::InLiteral;

    for (i, c) in input.char_indices() {
        match (state, c) {
            (State::InLiteral, '{') => {
                if !literal.is_empty() {
                    out.tokens.push(Token::Literal(std::mem::take(&mut literal)));
                }
                state = State::InPlaceholder(i);
            }
            (State::InLiteral, c) => literal.push(c),
            (State::InPlaceholder(_), '}') => {
                out.tokens
                    .push(Token::Placeholder(normalize_placeholder(&name)));
                name.clear();
                state = State::InLiteral;
            }
            (State::InPlaceholder(_), c) => name.push(c),
        }
    }

    match state {
        State::InPlaceholder(offset) => {
            let name = normalize_placeholder(&name);
            tracing::warn!(offset, placeholder = %name, template = input, "unclosed placeholder");
            out.diagnostics.push(Diagnostic::UnclosedPlaceholder {
                offset,
                name: name.clone(),
            });
            out.tokens.push(Token::Placeholder(name));
        }
        State::InLiteral => {
            if !literal.is_empty() {
                out.tokens.push(Token::Literal(literal));
            }
        }
    }

    out
}

/// Trim trailing whitespace, collapse each remaining whitespace run to a single `_`, and
/// uppercase. Leading whitespace is kept as a `_`.
pub fn normalize_placeholder(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_space = false;
    for c in raw.trim_end().chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push('_');
            }
            in_space = true;
        } else {
            in_space = false;
            out.extend(c.to_uppercase());
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/template/lexer.rs"]
mod tests;
