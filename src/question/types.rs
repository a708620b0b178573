//! Question and answer models.

use chrono::NaiveDate;

use crate::{IaiqError, Result};

/// Date format stored in `answers.answer_date`.
pub const ANSWER_DATE_FORMAT: &str = "%Y-%m-%d";

/// A daily question.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Question {
    /// Unique question ID.
    pub id: i64,
    /// Question text.
    pub content: String,
    /// Creation timestamp.
    pub created_at: String,
}

/// A member's answer to a question.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Answer {
    /// Unique answer ID.
    pub id: i64,
    /// Answered question.
    pub question_id: i64,
    /// Answering member.
    pub member_id: i64,
    /// Answer text.
    pub content: String,
    /// Day the answer belongs to (YYYY-MM-DD).
    pub answer_date: String,
    /// Creation timestamp.
    pub created_at: String,
}

/// Answer joined with the text of its question.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct AnswerView {
    /// Answer ID.
    pub id: i64,
    /// Question ID.
    pub question_id: i64,
    /// Question text.
    pub question_content: String,
    /// Answer text.
    pub content: String,
    /// Day the answer belongs to (YYYY-MM-DD).
    pub answer_date: String,
}

/// Data for inserting an answer.
#[derive(Debug, Clone)]
pub struct NewAnswer {
    pub question_id: i64,
    pub member_id: i64,
    pub content: String,
    pub answer_date: NaiveDate,
}

/// Year, month and day as received from a query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCondition {
    pub year: String,
    pub month: String,
    pub day: String,
}

impl SearchCondition {
    /// Create a search condition.
    pub fn new(year: impl Into<String>, month: impl Into<String>, day: impl Into<String>) -> Self {
        Self {
            year: year.into(),
            month: month.into(),
            day: day.into(),
        }
    }

    /// Parse the condition as a calendar date.
    ///
    /// Year must be four digits, month and day two digits each. The month
    /// must be 01-12 and the day 01-31; a day past the end of its month
    /// resolves to the month's last day, so `2023-02-30` is February 28.
    /// Anything else is `InvalidDate`.
    pub fn search_date(&self) -> Result<NaiveDate> {
        let raw = format!("{}-{}-{}", self.year, self.month, self.day);
        let invalid = || IaiqError::InvalidDate(raw.clone());

        let widths_ok =
            is_digits(&self.year, 4) && is_digits(&self.month, 2) && is_digits(&self.day, 2);
        if !widths_ok {
            return Err(invalid());
        }

        let year: i32 = self.year.parse().map_err(|_| invalid())?;
        let month: u32 = self.month.parse().map_err(|_| invalid())?;
        let day: u32 = self.day.parse().map_err(|_| invalid())?;
        if year == 0 || !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return Err(invalid());
        }

        (1..=day)
            .rev()
            .find_map(|d| NaiveDate::from_ymd_opt(year, month, d))
            .ok_or_else(invalid)
    }
}

fn is_digits(s: &str, width: usize) -> bool {
    s.len() == width && s.bytes().all(|b| b.is_ascii_digit())
}
