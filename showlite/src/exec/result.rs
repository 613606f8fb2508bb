// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Response envelope for query operations

use crate::catalog::Show;
use crate::exec::error::ExecutionError;
use crate::schema::ConstraintViolation;
use serde::{Deserialize, Serialize};

/// Machine-readable error classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    NullViolation,
    SizeViolation,
    UnknownArgument,
    UnknownOperation,
}

/// One structured error in a response envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseError {
    pub message: String,
    pub code: ErrorCode,
    /// The argument the error refers to, when there is one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub argument: Option<String>,
}

impl ResponseError {
    pub fn unknown_operation(name: &str) -> Self {
        Self {
            message: format!("Unknown operation: {}", name),
            code: ErrorCode::UnknownOperation,
            argument: None,
        }
    }
}

impl From<&ConstraintViolation> for ResponseError {
    fn from(violation: &ConstraintViolation) -> Self {
        let code = match violation {
            ConstraintViolation::NotNull { .. } => ErrorCode::NullViolation,
            ConstraintViolation::TooShort { .. } | ConstraintViolation::TooLong { .. } => {
                ErrorCode::SizeViolation
            }
            ConstraintViolation::UnknownArgument { .. } => ErrorCode::UnknownArgument,
        };

        Self {
            message: violation.to_string(),
            code,
            argument: Some(violation.argument().to_string()),
        }
    }
}

/// Data payload of a successful response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowData {
    pub shows: Vec<Show>,
}

/// Response envelope for one query request
///
/// Always well-formed: a successful request carries `data` (possibly an
/// empty list, never null) and no errors; a rejected request carries at
/// least one error and no data. Callers distinguish "no matches" from
/// "invalid request" by which side is populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<ShowData>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ResponseError>,
}

impl QueryResponse {
    /// Build a success envelope from resolved shows
    pub fn success(shows: Vec<Show>) -> Self {
        Self {
            data: Some(ShowData { shows }),
            errors: Vec::new(),
        }
    }

    /// Build a rejection envelope from execution errors
    pub fn rejected(errors: Vec<ResponseError>) -> Self {
        Self {
            data: None,
            errors,
        }
    }

    /// Whether this envelope carries a data payload
    pub fn is_success(&self) -> bool {
        self.data.is_some()
    }
}

impl From<ExecutionError> for QueryResponse {
    fn from(error: ExecutionError) -> Self {
        match error {
            ExecutionError::UnknownOperation(name) => {
                Self::rejected(vec![ResponseError::unknown_operation(&name)])
            }
            ExecutionError::RejectedArguments { violations, .. } => {
                Self::rejected(violations.iter().map(ResponseError::from).collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_serializes_without_errors_key() {
        let response = QueryResponse::success(vec![Show::new("Harbor Town")]);
        let json = serde_json::to_value(&response).expect("serializes");

        assert_eq!(json["data"]["shows"][0]["title"], "Harbor Town");
        assert!(json.get("errors").is_none());
    }

    #[test]
    fn test_rejection_envelope_serializes_without_data_key() {
        let violation = ConstraintViolation::TooShort {
            argument: "titleFilter".to_string(),
            min: 1,
            actual: 0,
        };
        let response = QueryResponse::rejected(vec![ResponseError::from(&violation)]);
        let json = serde_json::to_value(&response).expect("serializes");

        assert!(json.get("data").is_none());
        assert_eq!(json["errors"][0]["code"], "SIZE_VIOLATION");
        assert_eq!(json["errors"][0]["argument"], "titleFilter");
    }

    #[test]
    fn test_violation_codes_map_to_error_codes() {
        let null = ConstraintViolation::NotNull {
            argument: "titleFilter".to_string(),
        };
        assert_eq!(ResponseError::from(&null).code, ErrorCode::NullViolation);

        let long = ConstraintViolation::TooLong {
            argument: "titleFilter".to_string(),
            max: 10,
            actual: 12,
        };
        assert_eq!(ResponseError::from(&long).code, ErrorCode::SizeViolation);
    }

    #[test]
    fn test_empty_match_is_still_success() {
        let response = QueryResponse::success(Vec::new());
        assert!(response.is_success());
        assert_eq!(response.data.unwrap().shows.len(), 0);
    }
}
