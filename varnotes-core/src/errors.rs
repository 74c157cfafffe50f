use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnnotationError {
    #[error("Can't read batch file: {0}")]
    FileReadError(String),

    #[error("Error parsing annotation batch: {0}")]
    BatchParseError(String),

    #[error("Unsupported batch file extension: {0}")]
    UnsupportedExtension(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
