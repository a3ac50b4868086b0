//! Payload shape validation.
//!
//! Pure function over the raw JSON payload: same input, same output. Shape
//! problems are `WrongShape`; a record missing its mandatory name is
//! `MissingFields` and invalidates the whole batch — no partial acceptance.

use serde_json::Value;

use reviewwatch_common::error::AppError;
use reviewwatch_common::types::{HomeworkRecord, PollResult, ReviewStatus};

/// Validate a raw payload and extract the homework record list.
pub fn validate_response(payload: &Value) -> Result<PollResult, AppError> {
    let object = payload
        .as_object()
        .ok_or_else(|| AppError::WrongShape("payload is not a JSON object".to_string()))?;

    let homeworks = object
        .get("homeworks")
        .ok_or_else(|| AppError::WrongShape("payload has no `homeworks` field".to_string()))?;

    let list = homeworks
        .as_array()
        .ok_or_else(|| AppError::WrongShape("`homeworks` is not a list".to_string()))?;

    list.iter().map(coerce_record).collect()
}

/// Coerce one list element into a `HomeworkRecord`.
///
/// Only `homework_name` is mandatory. The status is parsed leniently: an
/// unknown or absent raw value is carried as `status: None` and rejected
/// later by the interpreter, not here.
fn coerce_record(element: &Value) -> Result<HomeworkRecord, AppError> {
    let name = element
        .get("homework_name")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            AppError::MissingFields("record has no `homework_name`".to_string())
        })?;

    // The wire sends the id as a number or a string; stringify either.
    let id = match element.get("id") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    };

    let raw_status = element
        .get("status")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    Ok(HomeworkRecord {
        id,
        name: name.to_string(),
        status: ReviewStatus::from_raw(&raw_status),
        raw_status,
    })
}
