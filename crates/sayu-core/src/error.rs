use thiserror::Error;

#[derive(Error, Debug)]
pub enum SayuError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid SAYU type code: {code}. Valid codes are: {}", valid_codes.join(", "))]
    UnknownArchetype {
        code: String,
        valid_codes: Vec<String>,
    },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Profile store error: {0}")]
    ProfileStore(String),

    #[error("Analysis error: {0}")]
    Analysis(String),
}

impl SayuError {
    /// True for failures the caller caused and can fix.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            SayuError::UnknownArchetype { .. } | SayuError::Validation(_) | SayuError::NotFound(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, SayuError>;
