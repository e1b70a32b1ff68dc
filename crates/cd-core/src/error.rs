use core::fmt;
use std::num::ParseFloatError;

#[derive(Debug)]
pub enum Error {
    Csv(csv::Error),
    TooFewFields {
        record: u64,
        found: usize,
    },
    InvalidFloat {
        record: u64,
        field: usize,
        source: ParseFloatError,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv(err) => write!(f, "csv input: {err}"),
            Self::TooFewFields { record, found } => {
                write!(f, "record {record}: expected at least 2 fields, got {found}")
            }
            Self::InvalidFloat {
                record,
                field,
                source,
            } => {
                write!(f, "record {record}, field {field}: {source}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Csv(err) => Some(err),
            Self::InvalidFloat { source, .. } => Some(source),
            Self::TooFewFields { .. } => None,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}
