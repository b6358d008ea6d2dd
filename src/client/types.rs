use crate::{Error, Result, table::ResultTable};

/// Service-side failure: the request went through but the service did not
/// answer with 200.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonSuccessStatus {
    pub status: u16,
    pub endpoint: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    Success(ResultTable),
    Failure(NonSuccessStatus),
}

impl QueryOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The table, or `None` for a non-success status.
    pub fn into_table(self) -> Option<ResultTable> {
        match self {
            Self::Success(table) => Some(table),
            Self::Failure(_) => None,
        }
    }

    pub fn into_result(self) -> Result<ResultTable> {
        match self {
            Self::Success(table) => Ok(table),
            Self::Failure(failure) => Err(Error::NonSuccessStatus {
                status: failure.status,
                endpoint: failure.endpoint,
            }),
        }
    }
}
