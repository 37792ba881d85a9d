#[derive(thiserror::Error, Debug)]
pub enum ConsoleError {
    #[error("IO error")]
    IoError(#[from] std::io::Error),
}
