//! Shape validation of the homework API answer.
//!
//! The answer is untrusted input: every assumption about its structure is
//! checked here before anything indexes into it.

use homework_common::{HomeworkError, Result, UnixTimestamp};
use serde::Deserialize;
use serde_json::Value;

/// One homework entry as returned by the API.
///
/// Fields are optional at this stage; [`crate::parse_status`] decides whether
/// a record carries enough to report on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Submission {
    /// Name of the reviewed work.
    pub homework_name: Option<String>,
    /// Review status code.
    pub status: Option<String>,
}

/// The validated content of one API answer.
///
/// Only the outer shape is checked up front; records are decoded when
/// read, so a malformed older entry never hides the latest one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomeworkBatch {
    /// Raw submission records, most recent first.
    pub homeworks: Vec<Value>,
    /// Server time of the answer, if reported.
    pub current_date: Option<UnixTimestamp>,
}

impl HomeworkBatch {
    /// Whether the answer held no submissions.
    pub fn is_empty(&self) -> bool {
        self.homeworks.is_empty()
    }

    /// The most recent submission, if any, decoded into a typed record.
    pub fn latest(&self) -> Result<Option<Submission>> {
        self.homeworks.first().map(decode_submission).transpose()
    }
}

/// Validates an API answer and extracts its submission records.
pub fn check_response(response: Value) -> Result<HomeworkBatch> {
    let Value::Object(mut answer) = response else {
        return Err(HomeworkError::type_error(
            "Ответ API не является словарем (формат JSON)",
        ));
    };

    let homeworks = answer
        .remove("homeworks")
        .ok_or(HomeworkError::missing_key("homeworks"))?;

    let Value::Array(homeworks) = homeworks else {
        return Err(HomeworkError::type_error(
            "Значение ключа \"homeworks\" не является списком",
        ));
    };

    let current_date = answer.get("current_date").and_then(Value::as_i64);

    Ok(HomeworkBatch {
        homeworks,
        current_date,
    })
}

fn decode_submission(item: &Value) -> Result<Submission> {
    if !item.is_object() {
        return Err(HomeworkError::type_error(
            "Последняя работа в списке \"homeworks\" не является словарем",
        ));
    }

    Submission::deserialize(item).map_err(|e| {
        HomeworkError::type_error(format!(
            "Последняя работа в списке \"homeworks\" имеет неверный формат: {e}"
        ))
    })
}
