use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not authenticated; run `csd auth login`")]
    NotAuthenticated,

    #[error("session expired; run `csd auth login` to refresh")]
    SessionExpired,

    #[error("invalid session token: {0}")]
    InvalidToken(String),

    #[error("token store error: {0}")]
    TokenStoreError(String),
}
