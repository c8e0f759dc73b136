use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Record not found")]
    NotFound,

    #[error("{0}")]
    AlreadyExists(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Foreign key violation: {0}")]
    ForeignKey(String),

    #[error("Database error: {0}")]
    Sqlx(sqlx::Error),

    #[error("{0}")]
    Custom(String),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        if matches!(err, sqlx::Error::RowNotFound) {
            return Self::NotFound;
        }

        let code = err
            .as_database_error()
            .and_then(|db| db.code())
            .map(|c| c.to_string());
        let message = err.to_string();

        match code.as_deref() {
            Some("23505") => Self::AlreadyExists(message),
            Some("23503") => Self::ForeignKey(message),
            _ => Self::Sqlx(err),
        }
    }
}
