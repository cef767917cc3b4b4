//! Request validation
//!
//! Turns raw query strings and JSON bodies into validated values.

use axum::extract::Query;
use axum::http::Uri;
use chrono::{DateTime, NaiveDate, Utc};
use serde::de::DeserializeOwned;

use crate::domain::calendar::start_of_day;
use crate::error::{AppError, AppResult};

/// Validated `user_id` and `date` query parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryParams {
    pub user_id: i64,
    pub date: DateTime<Utc>,
}

impl QueryParams {
    pub fn day(&self) -> NaiveDate {
        self.date.date_naive()
    }
}

/// Accept exactly `YYYY-MM-DD`
pub fn validate_date(raw: &str) -> AppResult<DateTime<Utc>> {
    let invalid = || AppError::format(format!("invalid date '{}', expected YYYY-MM-DD", raw));

    let bytes = raw.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(start_of_day)
        .map_err(|_| invalid())
}

/// Accept a base-10 integer greater than zero
pub fn validate_user_id(raw: &str) -> AppResult<i64> {
    match raw.parse::<i64>() {
        Ok(user_id) if user_id > 0 => Ok(user_id),
        _ => Err(AppError::format(format!("invalid user_id '{}'", raw))),
    }
}

/// Extract `user_id` and `date` from the query string, stopping at the first failure.
/// A repeated key resolves to its first value.
pub fn parse_query_params(uri: &Uri) -> AppResult<QueryParams> {
    let Query(params) = Query::<Vec<(String, String)>>::try_from_uri(uri)
        .map_err(|e| AppError::format(e.body_text()))?;

    let param = |name: &str| {
        params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
            .unwrap_or_default()
    };

    let user_id = validate_user_id(param("user_id"))?;
    let date = validate_date(param("date"))?;

    Ok(QueryParams { user_id, date })
}

/// Strict JSON decoding; unknown fields are rejected by the target type
pub fn decode_json_body<T: DeserializeOwned>(body: &[u8]) -> AppResult<T> {
    Ok(serde_json::from_slice(body)?)
}
