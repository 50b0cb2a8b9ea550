use std::{collections::BTreeMap, path::Path};

use anyhow::Context;

use crate::{
    foundation::error::{HosuError, HosuResult},
    variables::variable::Variable,
};

/// Name → [`Variable`] table with case-insensitive names.
///
/// Every operation uppercases the name it is given. Mutation goes through `&mut self`, so a
/// table cannot change while a render holds a shared borrow of it.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct VariableTable {
    vars: BTreeMap<String, Variable>,
}

/// Canonical table key for `name`.
pub fn normalize_name(name: &str) -> String {
    name.to_uppercase()
}

/// Spelling substituted for a variable that is not in the table.
pub fn missing_spelling(name: &str) -> String {
    format!("{{{}}}", normalize_name(name))
}

impl VariableTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite.
    pub fn set(&mut self, name: &str, var: Variable) {
        self.vars.insert(normalize_name(name), var);
    }

    pub fn get(&self, name: &str) -> Option<&Variable> {
        self.vars.get(&normalize_name(name))
    }

    pub fn has(&self, name: &str) -> bool {
        self.vars.contains_key(&normalize_name(name))
    }

    /// Canonical text of `name`, or `{NAME}` when it is missing.
    ///
    /// A missing variable is not an error: it is reported as a `warn` event and the
    /// placeholder spelling is returned instead.
    pub fn render_text(&self, name: &str) -> String {
        match self.get(name) {
            Some(var) => var.render().into_owned(),
            None => {
                tracing::warn!(variable = %normalize_name(name), "variable not found");
                missing_spelling(name)
            }
        }
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Variable)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Parse a JSON object of variables.
    pub fn from_json_str(s: &str) -> HosuResult<Self> {
        let raw: BTreeMap<String, Variable> =
            serde_json::from_str(s).map_err(|e| HosuError::serde(e.to_string()))?;
        Ok(raw.into_iter().collect())
    }

    pub fn from_path(path: impl AsRef<Path>) -> HosuResult<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read variables '{}'", path.display()))?;
        Self::from_json_str(&s)
    }
}

impl<K: AsRef<str>> Extend<(K, Variable)> for VariableTable {
    fn extend<I: IntoIterator<Item = (K, Variable)>>(&mut self, iter: I) {
        for (name, var) in iter {
            self.set(name.as_ref(), var);
        }
    }
}

impl IntoIterator for VariableTable {
    type Item = (String, Variable);
    type IntoIter = std::collections::btree_map::IntoIter<String, Variable>;

    fn into_iter(self) -> Self::IntoIter {
        self.vars.into_iter()
    }
}

impl<K: AsRef<str>> FromIterator<(K, Variable)> for VariableTable {
    fn from_iter<I: IntoIterator<Item = (K, Variable)>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

#[cfg(test)]
#[path = "../../tests/unit/variables/table.rs"]
mod tests;
