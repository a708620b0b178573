//! Question and answer repository.

use chrono::NaiveDate;
use sqlx::SqliteConnection;

use super::types::{Answer, AnswerView, NewAnswer, Question, ANSWER_DATE_FORMAT};
use crate::Result;

/// Repository for questions and their answers.
pub struct QuestionRepository<'c> {
    conn: &'c mut SqliteConnection,
}

impl<'c> QuestionRepository<'c> {
    /// Create a repository over a connection or transaction.
    pub fn new(conn: &'c mut SqliteConnection) -> Self {
        Self { conn }
    }

    /// Insert a question.
    pub async fn create_question(&mut self, content: &str) -> Result<Question> {
        let question = sqlx::query_as::<_, Question>(
            "INSERT INTO questions (content) VALUES (?) RETURNING id, content, created_at",
        )
        .bind(content)
        .fetch_one(&mut *self.conn)
        .await?;

        Ok(question)
    }

    /// Get a question by ID.
    pub async fn find_question(&mut self, id: i64) -> Result<Option<Question>> {
        let question = sqlx::query_as::<_, Question>(
            "SELECT id, content, created_at FROM questions WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await?;

        Ok(question)
    }

    /// Insert an answer.
    pub async fn save_answer(&mut self, answer: &NewAnswer) -> Result<Answer> {
        let saved = sqlx::query_as::<_, Answer>(
            "INSERT INTO answers (question_id, member_id, content, answer_date) VALUES (?, ?, ?, ?) \
             RETURNING id, question_id, member_id, content, answer_date, created_at",
        )
        .bind(answer.question_id)
        .bind(answer.member_id)
        .bind(&answer.content)
        .bind(answer.answer_date.format(ANSWER_DATE_FORMAT).to_string())
        .fetch_one(&mut *self.conn)
        .await?;

        Ok(saved)
    }

    /// Answers written by `member_id` for `date`, oldest first.
    pub async fn find_answers_by_member_and_date(
        &mut self,
        member_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<AnswerView>> {
        let answers = sqlx::query_as::<_, AnswerView>(
            r#"
SELECT a.id, a.question_id, q.content AS question_content, a.content, a.answer_date
FROM answers a
JOIN questions q ON q.id = a.question_id
WHERE a.member_id = ? AND a.answer_date = ?
ORDER BY a.id
"#,
        )
        .bind(member_id)
        .bind(date.format(ANSWER_DATE_FORMAT).to_string())
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(answers)
    }
}
