use thiserror::Error;

/// Raised while building an offer whose rule shape does not match its operator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Invalid rule. You need to provide a range. ({field} rule)")]
    RangeRequired { field: &'static str },
    #[error("Invalid rule. You need to provide a number. ({field} rule)")]
    ScalarRequired { field: &'static str },
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read offer catalog {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse offer catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("offer {title}: {source}")]
    Invalid {
        title: String,
        #[source]
        source: ValidationError,
    },
}

/// Malformed interactive input. Never swallowed: the session halts on the first one.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Your courier input is invalid: {0:?}")]
    Courier(String),
    #[error("Your parcel input is invalid: {0:?}")]
    Parcel(String),
    #[error("Your fleet input is invalid: {0:?}")]
    Fleet(String),
    #[error("{field} must be a number (got {value:?})")]
    NotANumber { field: &'static str, value: String },
    #[error("input ended before {0} was provided")]
    UnexpectedEof(&'static str),
    #[error(transparent)]
    InvalidFleet(#[from] FleetError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FleetError {
    #[error("fleet needs at least one vehicle")]
    NoVehicles,
    #[error("max speed must be a positive number (got {0})")]
    InvalidSpeed(f64),
    #[error("max load must be a non-negative number (got {0})")]
    InvalidLoad(f64),
    #[error("parcel {id}: {field} must be a non-negative number (got {value})")]
    InvalidParcel {
        id: String,
        field: &'static str,
        value: f64,
    },
    #[error("parcel id {0} appears more than once")]
    DuplicateParcelId(String),
}
