use thiserror::Error;

/// Error type for invalid operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DryDepError {
    #[error("Invalid season category {0}. Expected a value between 1 and 5")]
    InvalidSeason(usize),
    #[error("Invalid land use category {0}. Expected a value between 1 and 11")]
    InvalidLandUse(usize),
    #[error("Unknown species '{0}'")]
    UnknownSpecies(String),
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("Series lengths differ. observed has {observed} values, modelled has {modelled}")]
    LengthMismatch { observed: usize, modelled: usize },
    #[error("Cannot compute a statistic over an empty series")]
    EmptySeries,
    #[error("Could not parse configuration: {0}")]
    Config(String),
}

/// Convenience type for `Result<T, DryDepError>`.
pub type DryDepResult<T> = Result<T, DryDepError>;
