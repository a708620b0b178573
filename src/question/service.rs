//! Daily questions and answer search.

use chrono::{NaiveDate, Utc};
use tracing::info;

use crate::auth::RequestContext;
use crate::db::Database;
use crate::{IaiqError, Result};

use super::repository::QuestionRepository;
use super::types::{Answer, AnswerView, NewAnswer, Question, SearchCondition};

/// Maximum length for question text (in characters).
pub const MAX_QUESTION_LENGTH: usize = 500;

/// Maximum length for answer text (in characters).
pub const MAX_ANSWER_LENGTH: usize = 2_000;

fn validate_text(field: &str, text: &str, max: usize) -> Result<()> {
    if text.trim().is_empty() {
        return Err(IaiqError::Validation(format!("{field} must not be empty")));
    }
    if text.chars().count() > max {
        return Err(IaiqError::Validation(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(())
}

/// Service for questions and answers.
pub struct QuestionService<'a> {
    db: &'a Database,
}

impl<'a> QuestionService<'a> {
    /// Create a new QuestionService with the given database reference.
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Create a question. Requires a bound identity.
    pub async fn create_question(&self, ctx: &RequestContext, content: &str) -> Result<Question> {
        validate_text("question", content, MAX_QUESTION_LENGTH)?;
        let identity = ctx.require_identity()?;

        let mut conn = self.db.pool().acquire().await?;
        let question = QuestionRepository::new(&mut conn)
            .create_question(content)
            .await?;

        info!(
            "Member {} created question {}",
            identity.member_id(),
            question.id
        );
        Ok(question)
    }

    /// Get a question by ID.
    pub async fn get_question(&self, question_id: i64) -> Result<Question> {
        let mut conn = self.db.pool().acquire().await?;
        QuestionRepository::new(&mut conn)
            .find_question(question_id)
            .await?
            .ok_or(IaiqError::ResourceNotFound("question"))
    }

    /// Answer a question as the current member, dated today (UTC).
    pub async fn write_answer(
        &self,
        ctx: &RequestContext,
        question_id: i64,
        content: &str,
    ) -> Result<Answer> {
        self.write_answer_on(ctx, question_id, content, Utc::now().date_naive())
            .await
    }

    /// As [`write_answer`](Self::write_answer), dated `date`.
    pub async fn write_answer_on(
        &self,
        ctx: &RequestContext,
        question_id: i64,
        content: &str,
        date: NaiveDate,
    ) -> Result<Answer> {
        validate_text("answer", content, MAX_ANSWER_LENGTH)?;

        let mut tx = self.db.begin().await?;
        let mut questions = QuestionRepository::new(&mut tx);

        let question = questions
            .find_question(question_id)
            .await?
            .ok_or(IaiqError::ResourceNotFound("question"))?;

        let identity = ctx.require_identity()?;

        let answer = questions
            .save_answer(&NewAnswer {
                question_id: question.id,
                member_id: identity.member_id(),
                content: content.to_string(),
                answer_date: date,
            })
            .await?;

        tx.commit().await?;

        info!(
            "Member {} answered question {} for {}",
            identity.member_id(),
            question.id,
            answer.answer_date
        );
        Ok(answer)
    }

    /// The current member's answers for the searched day.
    pub async fn search_answers(
        &self,
        ctx: &RequestContext,
        condition: &SearchCondition,
    ) -> Result<Vec<AnswerView>> {
        let date = condition.search_date()?;
        let identity = ctx.require_identity()?;

        let mut conn = self.db.pool().acquire().await?;
        QuestionRepository::new(&mut conn)
            .find_answers_by_member_and_date(identity.member_id(), date)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{SessionBinder, TokenProvider};
    use crate::db::{MemberRepository, NewMember};

    const SECRET: &str = "question-service-test-secret-012345";

    async fn setup() -> (Database, TokenProvider) {
        let db = Database::open_in_memory().await.unwrap();
        let tokens = TokenProvider::new(SECRET).unwrap();
        for (email, nickname) in [("a@example.com", "Alice"), ("b@example.com", "Bob")] {
            MemberRepository::new(db.pool())
                .create(&NewMember::new(email, "hash", nickname))
                .await
                .unwrap();
        }
        (db, tokens)
    }

    async fn context(db: &Database, tokens: &TokenProvider, email: &str) -> RequestContext {
        let mut ctx = RequestContext::new();
        SessionBinder::new(tokens, db.pool())
            .bind_session(&mut ctx, &tokens.issue(email).unwrap())
            .await
            .unwrap();
        ctx
    }

    #[tokio::test]
    async fn test_create_and_get_question() {
        let (db, tokens) = setup().await;
        let alice = context(&db, &tokens, "a@example.com").await;
        let service = QuestionService::new(&db);

        let question = service
            .create_question(&alice, "What made you smile today?")
            .await
            .unwrap();
        let fetched = service.get_question(question.id).await.unwrap();
        assert_eq!(fetched.content, "What made you smile today?");

        assert!(matches!(
            service.get_question(999).await,
            Err(IaiqError::ResourceNotFound("question"))
        ));
        assert!(matches!(
            service.create_question(&RequestContext::new(), "Q?").await,
            Err(IaiqError::Unauthenticated)
        ));
    }

    #[tokio::test]
    async fn test_write_answer_dated_today() {
        let (db, tokens) = setup().await;
        let alice = context(&db, &tokens, "a@example.com").await;
        let service = QuestionService::new(&db);
        let question = service.create_question(&alice, "Q?").await.unwrap();

        let answer = service
            .write_answer(&alice, question.id, "An answer")
            .await
            .unwrap();
        let today = Utc::now().date_naive().format("%Y-%m-%d").to_string();
        assert_eq!(answer.answer_date, today);
        assert_eq!(answer.member_id, alice.current_identity().unwrap().member_id());
    }

    #[tokio::test]
    async fn test_write_answer_missing_question() {
        let (db, tokens) = setup().await;
        let alice = context(&db, &tokens, "a@example.com").await;

        let result = QuestionService::new(&db)
            .write_answer(&alice, 42, "An answer")
            .await;
        assert!(matches!(result, Err(IaiqError::ResourceNotFound("question"))));
    }

    #[tokio::test]
    async fn test_search_answers_scoped_to_member_and_day() {
        let (db, tokens) = setup().await;
        let alice = context(&db, &tokens, "a@example.com").await;
        let bob = context(&db, &tokens, "b@example.com").await;
        let service = QuestionService::new(&db);
        let question = service.create_question(&alice, "Best moment?").await.unwrap();

        let christmas = NaiveDate::from_ymd_opt(2023, 12, 25).unwrap();
        let boxing_day = NaiveDate::from_ymd_opt(2023, 12, 26).unwrap();
        service
            .write_answer_on(&alice, question.id, "Dinner", christmas)
            .await
            .unwrap();
        service
            .write_answer_on(&alice, question.id, "Walk", boxing_day)
            .await
            .unwrap();
        service
            .write_answer_on(&bob, question.id, "Presents", christmas)
            .await
            .unwrap();

        let found = service
            .search_answers(&alice, &SearchCondition::new("2023", "12", "25"))
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].content, "Dinner");
        assert_eq!(found[0].question_content, "Best moment?");

        let bad = service
            .search_answers(&alice, &SearchCondition::new("2023", "1", "5"))
            .await;
        assert!(matches!(bad, Err(IaiqError::InvalidDate(_))));

        let anonymous = service
            .search_answers(&RequestContext::new(), &SearchCondition::new("2023", "12", "25"))
            .await;
        assert!(matches!(anonymous, Err(IaiqError::Unauthenticated)));
    }

    #[tokio::test]
    async fn test_search_day_past_month_end_finds_last_day() {
        let (db, tokens) = setup().await;
        let alice = context(&db, &tokens, "a@example.com").await;
        let service = QuestionService::new(&db);
        let question = service.create_question(&alice, "Q?").await.unwrap();

        let feb_end = NaiveDate::from_ymd_opt(2023, 2, 28).unwrap();
        service
            .write_answer_on(&alice, question.id, "Last of February", feb_end)
            .await
            .unwrap();

        let found = service
            .search_answers(&alice, &SearchCondition::new("2023", "02", "30"))
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].answer_date, "2023-02-28");
    }
}
