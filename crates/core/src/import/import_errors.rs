use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Source file not found: {0}")]
    SourceNotFound(String),

    #[error("Failed to read source file: {0}")]
    SourceRead(String),
}
