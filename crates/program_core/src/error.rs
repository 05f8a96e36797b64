use shared::error::{AdminError, ErrorCode, FormField};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssetError {
    #[error("asset '{identifier}' has already been added")]
    Duplicate { identifier: String },
    #[error("asset draft is incomplete: {field:?} is required")]
    Incomplete { field: FormField },
}

/// Reasons a create-program submission is blocked. Only the website variant
/// carries a message meant for display; the others just mark their field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("program name is required")]
    MissingName,
    #[error("start date is required")]
    MissingStartDate,
    #[error("at least one asset is required")]
    NoAssets,
    #[error("{message}")]
    InvalidWebsite { message: String },
}

impl SubmitError {
    pub fn field(&self) -> FormField {
        match self {
            Self::MissingName => FormField::Name,
            Self::MissingStartDate => FormField::StartDate,
            Self::NoAssets => FormField::Assets,
            Self::InvalidWebsite { .. } => FormField::Website,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("no create-program form is open")]
    NoOpenForm,
    #[error(transparent)]
    Asset(#[from] AssetError),
    #[error(transparent)]
    Submit(#[from] SubmitError),
}

impl From<&AssetError> for AdminError {
    fn from(value: &AssetError) -> Self {
        match value {
            AssetError::Duplicate { .. } => AdminError::for_field(
                ErrorCode::DuplicateAsset,
                FormField::AssetIdentifier,
                value.to_string(),
            ),
            AssetError::Incomplete { field } => {
                AdminError::for_field(ErrorCode::IncompleteAsset, *field, value.to_string())
            }
        }
    }
}

impl From<&SubmitError> for AdminError {
    fn from(value: &SubmitError) -> Self {
        let code = match value {
            SubmitError::InvalidWebsite { .. } => ErrorCode::InvalidWebsite,
            _ => ErrorCode::MissingField,
        };
        AdminError::for_field(code, value.field(), value.to_string())
    }
}

impl From<&SessionError> for AdminError {
    fn from(value: &SessionError) -> Self {
        match value {
            SessionError::NoOpenForm => AdminError::new(ErrorCode::NoOpenForm, value.to_string()),
            SessionError::Asset(err) => err.into(),
            SessionError::Submit(err) => err.into(),
        }
    }
}
