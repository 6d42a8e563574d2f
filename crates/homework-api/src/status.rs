//! Review status codes and the message rendered for a status change.

use crate::response::Submission;
use homework_common::{HomeworkError, Result};
use std::fmt;
use std::str::FromStr;

/// Known review verdicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HomeworkStatus {
    /// The reviewer accepted the work.
    Approved,
    /// The work is under review.
    Reviewing,
    /// The reviewer left remarks.
    Rejected,
}

impl HomeworkStatus {
    /// Status code as sent by the API.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Reviewing => "reviewing",
            Self::Rejected => "rejected",
        }
    }

    /// Human-readable verdict for the chat.
    pub const fn verdict(self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl FromStr for HomeworkStatus {
    type Err = HomeworkError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "approved" => Ok(Self::Approved),
            "reviewing" => Ok(Self::Reviewing),
            "rejected" => Ok(Self::Rejected),
            other => Err(HomeworkError::unknown_status(other)),
        }
    }
}

impl fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

fn required<'a>(value: Option<&'a str>, field: &'static str) -> Result<&'a str> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(HomeworkError::missing_field(field)),
    }
}

/// Renders the status-change message for a submission.
pub fn parse_status(homework: Option<&Submission>) -> Result<String> {
    let homework = homework.ok_or(HomeworkError::AbsentRecord)?;

    let homework_name = required(homework.homework_name.as_deref(), "homework_name")?;
    let status: HomeworkStatus = required(homework.status.as_deref(), "status")?.parse()?;

    Ok(format!(
        "Изменился статус проверки работы \"{homework_name}\". {}",
        status.verdict()
    ))
}
