// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Validation boundary tests
//!
//! Covers the error path: requests that violate declared argument
//! constraints must be rejected with a structured, well-formed envelope
//! before the resolver runs, never crash the service or come back as a
//! silent success.

#[path = "testutils/mod.rs"]
mod testutils;

use showlite::{operations, ErrorCode, QueryRequest};
use testutils::test_fixture::TestFixture;

#[test]
fn test_search_shows_rejects_null_filter_with_null_violation() {
    let fixture = TestFixture::new();

    let response = fixture.execute(operations::SEARCH_SHOWS, None);
    fixture.assert_rejected(&response, ErrorCode::NullViolation);
}

#[test]
fn test_search_shows_rejects_absent_filter_with_null_violation() {
    let fixture = TestFixture::new();

    let response = fixture.execute_without_argument(operations::SEARCH_SHOWS);
    fixture.assert_rejected(&response, ErrorCode::NullViolation);
}

#[test]
fn test_search_shows_rejects_empty_filter_with_size_violation() {
    let fixture = TestFixture::new();

    let response = fixture.execute(operations::SEARCH_SHOWS, Some(""));
    fixture.assert_rejected(&response, ErrorCode::SizeViolation);

    // The rejection must not look like an unfiltered success
    assert!(response.data.is_none());
}

#[test]
fn test_size_violation_identifies_argument_and_bound() {
    let fixture = TestFixture::new();

    let response = fixture.execute(operations::SEARCH_SHOWS, Some(""));
    let error = &response.errors[0];

    assert_eq!(error.argument.as_deref(), Some("titleFilter"));
    assert!(error.message.contains("at least 1"));
}

#[test]
fn test_unknown_operation_returns_structured_error() {
    let fixture = TestFixture::new();

    let response = fixture.execute("dropShows", Some("Harbor"));
    fixture.assert_rejected(&response, ErrorCode::UnknownOperation);
}

#[test]
fn test_undeclared_argument_returns_structured_error() {
    let fixture = TestFixture::new();

    let request = QueryRequest::new(operations::LIST_SHOWS)
        .with_argument("genreFilter", Some("drama".to_string()));
    let response = fixture.coordinator().execute(&request);

    fixture.assert_rejected(&response, ErrorCode::UnknownArgument);
}

#[test]
fn test_rejection_envelope_is_well_formed_json() {
    let fixture = TestFixture::new();

    let response = fixture.execute(operations::SEARCH_SHOWS, Some(""));
    let json = serde_json::to_value(&response).expect("envelope serializes");

    assert!(json.get("data").is_none());
    assert_eq!(json["errors"][0]["code"], "SIZE_VIOLATION");
    assert_eq!(json["errors"][0]["argument"], "titleFilter");
}

#[test]
fn test_success_envelope_is_well_formed_json() {
    let fixture = TestFixture::new();

    let response = fixture.execute(operations::LIST_SHOWS, Some("Signal"));
    let json = serde_json::to_value(&response).expect("envelope serializes");

    assert!(json.get("errors").is_none());
    assert_eq!(json["data"]["shows"][0]["title"], "Signal Fires");
}

#[test]
fn test_null_and_size_violations_are_distinguishable() {
    let fixture = TestFixture::new();

    let null_response = fixture.execute(operations::SEARCH_SHOWS, None);
    let size_response = fixture.execute(operations::SEARCH_SHOWS, Some(""));

    assert_ne!(
        null_response.errors[0].code,
        size_response.errors[0].code
    );
}

#[test]
fn test_request_round_trips_through_serde() {
    let fixture = TestFixture::new();

    let wire = r#"{"operation": "searchShows", "arguments": {"titleFilter": "Harbor"}}"#;
    let request: QueryRequest = serde_json::from_str(wire).expect("request deserializes");
    let response = fixture.coordinator().execute(&request);

    assert_eq!(fixture.assert_titles(&response).len(), 2);
}

#[test]
fn test_explicit_json_null_filter_validates_as_null() {
    let fixture = TestFixture::new();

    let wire = r#"{"operation": "searchShows", "arguments": {"titleFilter": null}}"#;
    let request: QueryRequest = serde_json::from_str(wire).expect("request deserializes");
    let response = fixture.coordinator().execute(&request);

    fixture.assert_rejected(&response, ErrorCode::NullViolation);
}
