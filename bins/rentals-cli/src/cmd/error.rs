use rentals::RentalsError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("config: {0}")]
    Config(String),

    #[error("{0}")]
    Rentals(#[from] RentalsError),

    #[error("stdout: {0}")]
    Io(#[from] std::io::Error),
}
