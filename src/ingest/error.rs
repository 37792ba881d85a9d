#[derive(thiserror::Error, Debug)]
pub enum IngestError {
    #[error("IO error")]
    IoError(#[from] std::io::Error),
    #[error("CSV error")]
    CsvError(#[from] csv::Error),
}
