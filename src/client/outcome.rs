// QueryOutcome - the result of one lookup attempt
//
// Every failure a query can hit is a variant here; nothing crosses the
// worker/UI boundary as an error.

use crate::protocol::SlangDefinition;

/// Tagged result of a single query. Exactly one branch is populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    /// Server answered 200 with a usable JSON object.
    Success(SlangDefinition),
    /// Server answered 404 for this term.
    NotFound(String),
    /// Server answered 200 but the body is unusable. Carries the raw body.
    ParseError(String),
    /// No response, or a status other than 200/404.
    TransportError(String),
}

impl QueryOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, QueryOutcome::Success(_))
    }

    pub fn definition(&self) -> Option<&SlangDefinition> {
        match self {
            QueryOutcome::Success(def) => Some(def),
            _ => None,
        }
    }

    pub fn not_found_term(&self) -> Option<&str> {
        match self {
            QueryOutcome::NotFound(term) => Some(term),
            _ => None,
        }
    }

    pub fn parse_error_body(&self) -> Option<&str> {
        match self {
            QueryOutcome::ParseError(body) => Some(body),
            _ => None,
        }
    }

    pub fn transport_reason(&self) -> Option<&str> {
        match self {
            QueryOutcome::TransportError(reason) => Some(reason),
            _ => None,
        }
    }

    /// Short label used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            QueryOutcome::Success(_) => "success",
            QueryOutcome::NotFound(_) => "not_found",
            QueryOutcome::ParseError(_) => "parse_error",
            QueryOutcome::TransportError(_) => "transport_error",
        }
    }
}
