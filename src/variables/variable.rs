use std::borrow::Cow;

/// A typed value that can be substituted into a template.
///
/// In JSON, strings are [`Variable::Text`], numbers are [`Variable::Number`] and
/// `{"image": "<url or path>"}` is [`Variable::ImageReference`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "VariableRepr", into = "VariableRepr")]
pub enum Variable {
    Text(String),
    Number(f64),
    /// URL or relative path of an image.
    ImageReference(String),
}

impl Variable {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    pub fn number(v: impl Into<f64>) -> Self {
        Self::Number(v.into())
    }

    pub fn image(url: impl Into<String>) -> Self {
        Self::ImageReference(url.into())
    }

    /// Canonical text rendering. Numbers use `f64`'s `Display` (`123.0` is `"123"`).
    pub fn render(&self) -> Cow<'_, str> {
        match self {
            Self::Text(s) | Self::ImageReference(s) => Cow::Borrowed(s),
            Self::Number(v) => Cow::Owned(v.to_string()),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Number(_) => "number",
            Self::ImageReference(_) => "image",
        }
    }
}

#[derive(Clone, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
enum VariableRepr {
    Text(String),
    Number(f64),
    Image { image: String },
}

impl From<VariableRepr> for Variable {
    fn from(r: VariableRepr) -> Self {
        match r {
            VariableRepr::Text(s) => Self::Text(s),
            VariableRepr::Number(v) => Self::Number(v),
            VariableRepr::Image { image } => Self::ImageReference(image),
        }
    }
}

impl From<Variable> for VariableRepr {
    fn from(v: Variable) -> Self {
        match v {
            Variable::Text(s) => Self::Text(s),
            Variable::Number(v) => Self::Number(v),
            Variable::ImageReference(image) => Self::Image { image },
        }
    }
}
