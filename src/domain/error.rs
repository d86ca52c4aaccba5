use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("field `{field}` is required")]
    Required { field: &'static str },
}

impl DomainError {
    pub fn required(field: &'static str) -> Self {
        Self::Required { field }
    }

    pub fn field(&self) -> &'static str {
        match self {
            Self::Required { field } => field,
        }
    }
}
