//! Error types of the contamination engine.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ContaminationError>;

#[derive(Error, Debug)]
pub enum ContaminationError {
    /// More elements were requested than there are to draw from.
    #[error("Can not sample {requested} elements out of {available}")]
    InsufficientCandidates { requested: usize, available: usize },
    /// `add_noise` was called with parameters it can not honor.
    #[error("Invalid noise parameters: {reason}")]
    InvalidNoiseParameters { reason: String },
    #[error("Invalid parameter '{parameter}': {reason}")]
    InvalidParameter { parameter: String, reason: String },
    /// A record whose name does not carry an OTU.
    #[error("Invalid label '{label}': the OTU is empty")]
    InvalidLabel { label: String },
}

impl From<ContaminationError> for std::io::Error {
    fn from(why: ContaminationError) -> Self {
        std::io::Error::new(std::io::ErrorKind::Other, why.to_string())
    }
}
