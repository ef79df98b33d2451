use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Row {row}: missing required field `{field}`")]
    MissingField { row: usize, field: &'static str },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
