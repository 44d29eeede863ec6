pub mod history;
pub mod query;

use std::fmt;

use thiserror::Error;
use url::Url;

pub use history::{History, Navigator};
pub use query::QueryParams;

const APP_ORIGIN: &str = "http://pantry.local/";

#[derive(Debug, Error)]
pub enum LocationError {
    #[error("invalid address {input:?}: {source}")]
    Parse {
        input: String,
        #[source]
        source: url::ParseError,
    },

    #[error("address {0:?} points outside the app")]
    ForeignOrigin(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    path: String,
    query: QueryParams,
}

impl Default for Location {
    fn default() -> Self {
        Self {
            path: "/".to_owned(),
            query: QueryParams::new(),
        }
    }
}

impl Location {
    pub fn parse(input: &str) -> Result<Self, LocationError> {
        let parse_error = |source| LocationError::Parse {
            input: input.to_owned(),
            source,
        };
        let base = Url::parse(APP_ORIGIN).map_err(parse_error)?;
        let url = base.join(input.trim()).map_err(parse_error)?;

        if url.origin() != base.origin() {
            return Err(LocationError::ForeignOrigin(input.to_owned()));
        }

        Ok(Self {
            path: url.path().to_owned(),
            query: QueryParams::parse(url.query().unwrap_or_default()),
        })
    }

    pub fn query(&self) -> &QueryParams {
        &self.query
    }

    pub fn query_mut(&mut self) -> &mut QueryParams {
        &mut self.query
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.query.is_empty() {
            write!(f, "{}", self.path)
        } else {
            write!(f, "{}?{}", self.path, self.query)
        }
    }
}
