use crate::locations::{Category, Scope};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Archive(#[from] themepak_archive::Error),

    #[error("package has no `{file}` member")]
    MissingMetadata { file: &'static str },

    #[error("package description is unreadable: {reason}")]
    MalformedMetadata { reason: String },

    #[error("package description is missing required field `{field}`")]
    MissingRequiredField { field: &'static str },

    #[error("category '{category}' has no destination in {scope} scope")]
    CategoryNotSupported { category: Category, scope: Scope },

    #[error("cannot determine the current user's home directory")]
    HomeDirUnavailable,
}

pub type Result<T> = std::result::Result<T, Error>;
