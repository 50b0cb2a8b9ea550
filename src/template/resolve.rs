use std::fmt;

use crate::{
    template::lexer::{Diagnostic, Token, tokenize},
    variables::VariableTable,
};

/// Text with `{NAME}` placeholders, tokenized once at construction.
///
/// Construction never fails; malformed input degrades to tokens plus [`Diagnostic`]s.
/// Serializes as its source string.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Template {
    source: String,
    tokens: Vec<Token>,
    diagnostics: Vec<Diagnostic>,
}

/// Output of [`Template::resolve_report`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub text: String,
    /// Placeholder names that were not in the table, in template order.
    pub missing: Vec<String>,
}

impl Template {
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let lexed = tokenize(&source);
        Self {
            source,
            tokens: lexed.tokens,
            diagnostics: lexed.diagnostics,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Placeholder names in template order, duplicates included.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().filter_map(|t| match t {
            Token::Placeholder(name) => Some(name.as_str()),
            Token::Literal(_) => None,
        })
    }

    /// `true` when the template contains no placeholders.
    pub fn is_static(&self) -> bool {
        self.placeholders().next().is_none()
    }

    /// Substitute every placeholder from `vars`.
    ///
    /// Missing variables become `{NAME}` and are reported as `warn` events.
    pub fn resolve(&self, vars: &VariableTable) -> String {
        self.resolve_report(vars).text
    }

    /// Like [`Template::resolve`], also returning the names that were missing.
    pub fn resolve_report(&self, vars: &VariableTable) -> Resolution {
        let mut text = String::with_capacity(self.source.len());
        let mut missing = Vec::new();

        for token in &self.tokens {
            match token {
                Token::Literal(s) => text.push_str(s),
                Token::Placeholder(name) => {
                    if !vars.has(name) {
                        missing.push(name.clone());
                    }
                    text.push_str(&vars.render_text(name));
                }
            }
        }

        Resolution { text, missing }
    }
}

impl From<String> for Template {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for Template {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<Template> for String {
    fn from(t: Template) -> Self {
        t.source
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/template/resolve.rs"]
mod tests;
