use diesel::result::Error as DieselError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PositionError {
    #[error("Position not found: {0}")]
    NotFound(String),

    #[error("Invalid position data: {0}")]
    InvalidData(String),

    #[error("Position database error: {0}")]
    DatabaseError(DieselError),
}

impl From<DieselError> for PositionError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => {
                PositionError::NotFound("Position not found".to_string())
            }
            e => PositionError::DatabaseError(e),
        }
    }
}
