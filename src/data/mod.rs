use thiserror::Error;

use crate::receipt::FormatError;

pub mod descriptor;
pub mod statement;


pub use descriptor::Descriptor;
pub use statement::{load_statement, read_statement, rent_income_total};

#[derive(Debug, Error)]
pub enum DataError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Csv(#[from] csv::Error),
    #[error("{0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("{0}")]
    Format(#[from] FormatError),
}
