use crate::replay::{reader::ReadError, writer::WriteError};

/// Failures at the replay decode/encode boundary.
#[derive(thiserror::Error, Debug)]
pub enum ReplayError {
    /// The byte source could not be opened or read. Raised before any parsing.
    #[error("replay source '{origin}' is unavailable: {source}")]
    SourceUnavailable {
        origin: String,
        #[source]
        source: std::io::Error,
    },

    /// Malformed wire data. Wraps the first low-level failure.
    #[error("failed to parse replay field '{field}': {cause}")]
    Parse {
        field: &'static str,
        #[source]
        cause: ReadError,
    },

    /// A record field cannot be represented in the wire format.
    #[error("failed to encode replay field '{field}': {cause}")]
    Encode {
        field: &'static str,
        #[source]
        cause: WriteError,
    },
}

impl ReplayError {
    /// The low-level read failure behind a [`ReplayError::Parse`].
    pub fn read_cause(&self) -> Option<&ReadError> {
        match self {
            Self::Parse { cause, .. } => Some(cause),
            _ => None,
        }
    }
}

/// Attach the name of the field being processed to a low-level result.
pub(crate) trait FieldContext<T> {
    fn field(self, field: &'static str) -> Result<T, ReplayError>;
}

impl<T> FieldContext<T> for Result<T, ReadError> {
    fn field(self, field: &'static str) -> Result<T, ReplayError> {
        self.map_err(|cause| ReplayError::Parse { field, cause })
    }
}

impl<T> FieldContext<T> for Result<T, WriteError> {
    fn field(self, field: &'static str) -> Result<T, ReplayError> {
        self.map_err(|cause| ReplayError::Encode { field, cause })
    }
}
