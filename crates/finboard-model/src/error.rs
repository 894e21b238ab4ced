use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid entity id: {0:?}")]
    InvalidEntityId(String),
    #[error("unknown template kind: {0:?}")]
    UnknownTemplateKind(String),
    #[error("unknown view: {0:?}")]
    UnknownView(String),
    #[error("unknown trash kind: {0:?}")]
    UnknownTrashKind(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
