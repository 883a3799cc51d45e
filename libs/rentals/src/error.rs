use std::fmt;

#[derive(Debug, thiserror::Error)]
pub enum RentalsError {
    /// Any failure reported by the store: unreachable endpoint, missing
    /// table, table already exists, throttling.
    #[error("remote operation failed ({op}): {detail}")]
    Remote { op: &'static str, detail: String },

    #[error("decode item: {0}")]
    Decode(#[from] serde_dynamo::Error),

    #[error("invalid table spec: {0}")]
    InvalidSpec(String),

    #[error("build request: {0}")]
    Build(#[from] aws_sdk_dynamodb::error::BuildError),
}

impl RentalsError {
    pub fn remote(op: &'static str, detail: impl fmt::Display) -> Self {
        Self::Remote { op, detail: detail.to_string() }
    }
}
