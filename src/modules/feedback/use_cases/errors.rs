use crate::modules::feedback::core::store::StoreError;
use crate::modules::feedback::use_cases::submit_feedback::decide::DecideError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Validation(#[from] DecideError),

    #[error("Invalid key")]
    InvalidDeleteKey,

    #[error(transparent)]
    Store(#[from] StoreError),
}
