//! Repository pattern for database operations
//!
//! Provides a clean interface for all data access operations
//! with proper error handling and transaction support.

use crate::db::models::*;
use crate::db::DbPool;
use crate::errors::{AppError, Result};
use crate::media::AvatarStorage;
use crate::metrics;
use chrono::NaiveDate;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;
use validator::{Validate, ValidateLength};

/// Maximum length of a profile login
pub const LOGIN_MAX_LEN: u64 = 32;

/// Maximum length of a tag name
pub const TAG_NAME_MAX_LEN: u64 = 32;

/// A question to be posted
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewQuestion {
    pub author_id: Uuid,

    #[validate(length(min = 1, max = 128))]
    pub title: String,

    pub text: String,

    /// Creation date, today when absent
    #[serde(default)]
    pub date: Option<NaiveDate>,

    #[serde(default)]
    pub tag_ids: Vec<Uuid>,
}

/// Partial update of a question; absent fields stay untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct QuestionEdit {
    #[validate(length(min = 1, max = 128))]
    pub title: Option<String>,

    pub text: Option<String>,
}

fn validate_label(field: &str, value: &str, max: u64) -> Result<()> {
    if value.validate_length(Some(1), Some(max), None) {
        Ok(())
    } else {
        Err(AppError::validation(
            field,
            format!("{} must be between 1 and {} characters", field, max),
        ))
    }
}

fn dedup_ids(ids: &[Uuid]) -> Vec<Uuid> {
    let mut ids = ids.to_vec();
    ids.sort();
    ids.dedup();
    ids
}

/// Repository for data access operations
#[derive(Clone)]
pub struct Repository {
    pool: DbPool,
    default_avatar: String,
}

impl Repository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: DbPool) -> Self {
        Self {
            pool,
            default_avatar: crate::DEFAULT_AVATAR.to_string(),
        }
    }

    /// Use a different avatar reference for new profiles
    pub fn with_default_avatar(mut self, default_avatar: impl Into<String>) -> Self {
        self.default_avatar = default_avatar.into();
        self
    }

    /// Get the read connection
    fn read_conn(&self) -> &DatabaseConnection {
        self.pool.read()
    }

    /// Get the write connection
    fn write_conn(&self) -> &DatabaseConnection {
        self.pool.write()
    }

    // ========================================================================
    // Health Check
    // ========================================================================

    /// Ping the database
    pub async fn ping(&self) -> Result<()> {
        self.pool.ping().await
    }

    // ========================================================================
    // Profile Operations
    // ========================================================================

    /// Fetch the profile bound to an identity, creating it on first use
    pub async fn get_or_create_profile(&self, user_id: Uuid, login: &str) -> Result<Profile> {
        validate_label("login", login, LOGIN_MAX_LEN)?;

        if let Some(existing) = self.profile_for_user(self.write_conn(), user_id).await? {
            return Ok(existing);
        }

        let mut profile = ProfileActiveModel::new();
        profile.user_id = Set(user_id);
        profile.login = Set(login.to_string());
        profile.avatar = Set(self.default_avatar.clone());

        match profile.insert(self.write_conn()).await.map_err(AppError::from) {
            Ok(created) => {
                info!(profile_id = %created.id, user_id = %user_id, "Profile created");
                metrics::record_created("profile");
                Ok(created)
            }
            // Lost a race with a concurrent registration for the same identity
            Err(AppError::Duplicate { .. }) => self
                .profile_for_user(self.write_conn(), user_id)
                .await?
                .ok_or_else(|| AppError::not_found("profile", user_id)),
            Err(e) => Err(e),
        }
    }

    async fn profile_for_user<C: ConnectionTrait>(&self, conn: &C, user_id: Uuid) -> Result<Option<Profile>> {
        ProfileEntity::find()
            .filter(ProfileColumn::UserId.eq(user_id))
            .one(conn)
            .await
            .map_err(Into::into)
    }

    /// Find profile by ID
    pub async fn find_profile(&self, id: Uuid) -> Result<Option<Profile>> {
        ProfileEntity::find_by_id(id)
            .one(self.read_conn())
            .await
            .map_err(Into::into)
    }

    /// Find the profile bound to an identity
    pub async fn find_profile_by_user(&self, user_id: Uuid) -> Result<Option<Profile>> {
        self.profile_for_user(self.read_conn(), user_id).await
    }

    async fn require_profile(&self, id: Uuid) -> Result<Profile> {
        ProfileEntity::find_by_id(id)
            .one(self.write_conn())
            .await?
            .ok_or_else(|| AppError::not_found("profile", id))
    }

    /// Change the display name
    pub async fn update_login(&self, id: Uuid, login: &str) -> Result<Profile> {
        validate_label("login", login, LOGIN_MAX_LEN)?;

        let mut profile: ProfileActiveModel = self.require_profile(id).await?.into();
        profile.login = Set(login.to_string());

        profile.update(self.write_conn()).await.map_err(Into::into)
    }

    /// Store an uploaded avatar and point the profile at it
    ///
    /// The previous upload, if any, is removed once the profile is updated.
    /// If the update fails the new upload is removed instead.
    pub async fn set_avatar(
        &self,
        id: Uuid,
        storage: &dyn AvatarStorage,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<Profile> {
        let current = self.require_profile(id).await?;
        let previous = current.avatar.clone();

        let reference = storage
            .store(chrono::Utc::now().date_naive(), file_name, bytes)
            .await?;

        let mut profile: ProfileActiveModel = current.into();
        profile.avatar = Set(reference.clone());
        let updated = match profile.update(self.write_conn()).await {
            Ok(updated) => updated,
            Err(e) => {
                if let Err(cleanup) = storage.remove(&reference).await {
                    warn!(avatar = %reference, error = %cleanup, "Failed to remove orphaned avatar");
                }
                return Err(e.into());
            }
        };

        if previous != updated.avatar {
            self.discard_avatar(storage, &previous).await?;
        }

        info!(profile_id = %id, avatar = %updated.avatar, "Avatar updated");
        Ok(updated)
    }

    /// Point the profile back at the default avatar
    pub async fn reset_avatar(&self, id: Uuid, storage: &dyn AvatarStorage) -> Result<Profile> {
        let current = self.require_profile(id).await?;
        let previous = current.avatar.clone();

        let mut profile: ProfileActiveModel = current.into();
        profile.avatar = Set(self.default_avatar.clone());
        let updated = profile.update(self.write_conn()).await?;

        if previous != updated.avatar {
            self.discard_avatar(storage, &previous).await?;
        }
        Ok(updated)
    }

    /// Remove a replaced upload. Placeholder images are shared and stay put
    async fn discard_avatar(&self, storage: &dyn AvatarStorage, reference: &str) -> Result<()> {
        if reference == self.default_avatar
            || reference == storage.default_avatar()
            || reference == crate::DEFAULT_AVATAR
        {
            return Ok(());
        }
        storage.remove(reference).await
    }

    /// Delete a profile together with everything it authored or voted
    pub async fn delete_profile(&self, id: Uuid) -> Result<bool> {
        let result = ProfileEntity::delete_by_id(id)
            .exec(self.write_conn())
            .await?;

        if result.rows_affected > 0 {
            info!(profile_id = %id, "Profile deleted");
            metrics::record_deleted("profile");
        }
        Ok(result.rows_affected > 0)
    }

    // ========================================================================
    // Question Operations
    // ========================================================================

    /// Post a question, linking it to the given tags
    pub async fn create_question(&self, input: NewQuestion) -> Result<Question> {
        input.validate()?;

        let txn = self.write_conn().begin().await?;

        let mut question = QuestionActiveModel::new();
        question.author_id = Set(input.author_id);
        question.title = Set(input.title);
        question.text = Set(input.text);
        if let Some(date) = input.date {
            question.date = Set(date);
        }
        let question = question.insert(&txn).await?;

        Self::link_tags(&txn, question.id, &input.tag_ids).await?;
        txn.commit().await?;

        info!(
            question_id = %question.id,
            author_id = %question.author_id,
            tags = input.tag_ids.len(),
            "Question created"
        );
        metrics::record_created("question");

        Ok(question)
    }

    async fn link_tags<C: ConnectionTrait>(conn: &C, question_id: Uuid, tag_ids: &[Uuid]) -> Result<()> {
        let links: Vec<QuestionTagActiveModel> = dedup_ids(tag_ids)
            .into_iter()
            .map(|tag_id| QuestionTagActiveModel {
                question_id: Set(question_id),
                tag_id: Set(tag_id),
            })
            .collect();

        if links.is_empty() {
            return Ok(());
        }

        QuestionTagEntity::insert_many(links)
            .exec_without_returning(conn)
            .await?;
        Ok(())
    }

    /// The question with the given id, `None` when it does not exist
    pub async fn one_question(&self, id: Uuid) -> Result<Option<Question>> {
        QuestionEntity::find_by_id(id)
            .one(self.read_conn())
            .await
            .map_err(Into::into)
    }

    /// All questions, most recent first
    pub async fn new_questions(&self) -> Result<Vec<Question>> {
        QuestionEntity::find_new()
            .all(self.read_conn())
            .await
            .map_err(Into::into)
    }

    /// All questions, highest rating first
    pub async fn hot_questions(&self) -> Result<Vec<Question>> {
        QuestionEntity::find_hot()
            .all(self.read_conn())
            .await
            .map_err(Into::into)
    }

    /// Questions carrying the given tag
    pub async fn tagged_questions(&self, tag_id: Uuid) -> Result<Vec<Question>> {
        QuestionEntity::find_tagged(tag_id)
            .all(self.read_conn())
            .await
            .map_err(Into::into)
    }

    /// Questions carrying the tag with the given name; empty for unknown tags
    pub async fn tagged_questions_by_name(&self, name: &str) -> Result<Vec<Question>> {
        match self.find_tag_by_name(name).await? {
            Some(tag) => self.tagged_questions(tag.id).await,
            None => Ok(Vec::new()),
        }
    }

    async fn require_question<C: ConnectionTrait>(conn: &C, id: Uuid) -> Result<Question> {
        QuestionEntity::find_by_id(id)
            .one(conn)
            .await?
            .ok_or_else(|| AppError::not_found("question", id))
    }

    /// Edit title and/or text
    pub async fn update_question(&self, id: Uuid, edit: QuestionEdit) -> Result<Question> {
        edit.validate()?;

        let mut question: QuestionActiveModel = Self::require_question(self.write_conn(), id).await?.into();
        if let Some(title) = edit.title {
            question.title = Set(title);
        }
        if let Some(text) = edit.text {
            question.text = Set(text);
        }

        question.update(self.write_conn()).await.map_err(Into::into)
    }

    /// Replace the question's tag set
    pub async fn set_question_tags(&self, question_id: Uuid, tag_ids: &[Uuid]) -> Result<()> {
        let txn = self.write_conn().begin().await?;

        Self::require_question(&txn, question_id).await?;

        QuestionTagEntity::delete_many()
            .filter(QuestionTagColumn::QuestionId.eq(question_id))
            .exec(&txn)
            .await?;
        Self::link_tags(&txn, question_id, tag_ids).await?;

        txn.commit().await?;
        debug!(question_id = %question_id, tags = tag_ids.len(), "Question tags replaced");
        Ok(())
    }

    /// Tags of a question, by name
    pub async fn question_tags(&self, question_id: Uuid) -> Result<Vec<Tag>> {
        TagEntity::find()
            .inner_join(QuestionTagEntity)
            .filter(QuestionTagColumn::QuestionId.eq(question_id))
            .order_by_asc(TagColumn::Name)
            .order_by_asc(TagColumn::Id)
            .all(self.read_conn())
            .await
            .map_err(Into::into)
    }

    /// Delete a question with its answers, votes and tag links
    pub async fn delete_question(&self, id: Uuid) -> Result<bool> {
        let result = QuestionEntity::delete_by_id(id)
            .exec(self.write_conn())
            .await?;

        if result.rows_affected > 0 {
            info!(question_id = %id, "Question deleted");
            metrics::record_deleted("question");
        }
        Ok(result.rows_affected > 0)
    }

    // ========================================================================
    // Answer Operations
    // ========================================================================

    /// Answer a question
    pub async fn create_answer(&self, question_id: Uuid, author_id: Uuid, text: String) -> Result<Answer> {
        Self::require_question(self.write_conn(), question_id).await?;

        let mut answer = AnswerActiveModel::new();
        answer.question_id = Set(question_id);
        answer.author_id = Set(author_id);
        answer.text = Set(text);

        let answer = answer.insert(self.write_conn()).await?;

        info!(answer_id = %answer.id, question_id = %question_id, "Answer created");
        metrics::record_created("answer");
        Ok(answer)
    }

    /// Find answer by ID
    pub async fn find_answer(&self, id: Uuid) -> Result<Option<Answer>> {
        AnswerEntity::find_by_id(id)
            .one(self.read_conn())
            .await
            .map_err(Into::into)
    }

    /// Answers of a question in posting order
    pub async fn question_answers(&self, question_id: Uuid) -> Result<Vec<Answer>> {
        AnswerEntity::find()
            .filter(AnswerColumn::QuestionId.eq(question_id))
            .order_by_asc(AnswerColumn::Id)
            .all(self.read_conn())
            .await
            .map_err(Into::into)
    }

    async fn require_answer<C: ConnectionTrait>(conn: &C, id: Uuid) -> Result<Answer> {
        AnswerEntity::find_by_id(id)
            .one(conn)
            .await?
            .ok_or_else(|| AppError::not_found("answer", id))
    }

    /// Replace an answer's text
    pub async fn update_answer_text(&self, id: Uuid, text: String) -> Result<Answer> {
        let mut answer: AnswerActiveModel = Self::require_answer(self.write_conn(), id).await?.into();
        answer.text = Set(text);

        answer.update(self.write_conn()).await.map_err(Into::into)
    }

    /// Accept an answer, clearing any previously accepted one of the same question
    pub async fn mark_correct(&self, answer_id: Uuid) -> Result<Answer> {
        let txn = self.write_conn().begin().await?;

        let answer = Self::require_answer(&txn, answer_id).await?;

        AnswerEntity::update_many()
            .col_expr(AnswerColumn::Correct, Expr::value(false))
            .filter(AnswerColumn::QuestionId.eq(answer.question_id))
            .filter(AnswerColumn::Correct.eq(true))
            .exec(&txn)
            .await?;

        let mut accepted: AnswerActiveModel = answer.into();
        accepted.correct = Set(true);
        let accepted = accepted.update(&txn).await?;

        txn.commit().await?;

        info!(answer_id = %answer_id, question_id = %accepted.question_id, "Answer marked correct");
        Ok(accepted)
    }

    /// Delete an answer with its votes
    pub async fn delete_answer(&self, id: Uuid) -> Result<bool> {
        let result = AnswerEntity::delete_by_id(id)
            .exec(self.write_conn())
            .await?;

        if result.rows_affected > 0 {
            info!(answer_id = %id, "Answer deleted");
            metrics::record_deleted("answer");
        }
        Ok(result.rows_affected > 0)
    }

    // ========================================================================
    // Tag Operations
    // ========================================================================

    /// Create a tag with rating 0
    pub async fn create_tag(&self, name: &str) -> Result<Tag> {
        validate_label("name", name, TAG_NAME_MAX_LEN)?;

        let mut tag = TagActiveModel::new();
        tag.name = Set(name.to_string());
        let tag = tag.insert(self.write_conn()).await?;

        info!(tag_id = %tag.id, name = %tag.name, "Tag created");
        metrics::record_created("tag");
        Ok(tag)
    }

    /// The first tag with this name, created if there is none
    pub async fn get_or_create_tag(&self, name: &str) -> Result<Tag> {
        let existing = TagEntity::find()
            .filter(TagColumn::Name.eq(name))
            .order_by_asc(TagColumn::Id)
            .one(self.write_conn())
            .await?;

        match existing {
            Some(tag) => Ok(tag),
            None => self.create_tag(name).await,
        }
    }

    /// Find tag by ID
    pub async fn find_tag(&self, id: Uuid) -> Result<Option<Tag>> {
        TagEntity::find_by_id(id)
            .one(self.read_conn())
            .await
            .map_err(Into::into)
    }

    /// Find tag by name; names are not unique, the oldest tag wins
    pub async fn find_tag_by_name(&self, name: &str) -> Result<Option<Tag>> {
        TagEntity::find()
            .filter(TagColumn::Name.eq(name))
            .order_by_asc(TagColumn::Id)
            .one(self.read_conn())
            .await
            .map_err(Into::into)
    }

    /// Top 15 tags by rating
    pub async fn hot_tags(&self) -> Result<Vec<Tag>> {
        TagEntity::find_hot()
            .all(self.read_conn())
            .await
            .map_err(Into::into)
    }

    /// Overwrite a tag's popularity score
    pub async fn set_tag_rating(&self, id: Uuid, rating: i32) -> Result<Tag> {
        if rating < 0 {
            return Err(AppError::validation("rating", "tag rating cannot be negative"));
        }

        let mut tag: TagActiveModel = TagEntity::find_by_id(id)
            .one(self.write_conn())
            .await?
            .ok_or_else(|| AppError::not_found("tag", id))?
            .into();
        tag.rating = Set(rating);

        tag.update(self.write_conn()).await.map_err(Into::into)
    }

    /// Delete a tag; the questions it labelled stay
    pub async fn delete_tag(&self, id: Uuid) -> Result<bool> {
        let result = TagEntity::delete_by_id(id)
            .exec(self.write_conn())
            .await?;

        if result.rows_affected > 0 {
            info!(tag_id = %id, "Tag deleted");
            metrics::record_deleted("tag");
        }
        Ok(result.rows_affected > 0)
    }

    // ========================================================================
    // Vote Operations
    // ========================================================================

    /// Cast or change a vote on a question and refresh its rating
    ///
    /// Upserts on (user, question): a re-vote updates the existing row.
    pub async fn vote_question(&self, user_id: Uuid, question_id: Uuid, vote: Vote) -> Result<LikeToQuestion> {
        let txn = self.write_conn().begin().await?;

        Self::require_question(&txn, question_id).await?;

        let mut row = LikeToQuestionActiveModel::new();
        row.user_id = Set(user_id);
        row.question_id = Set(question_id);
        row.is_liked = Set(vote);

        LikeToQuestionEntity::insert(row)
            .on_conflict(
                OnConflict::columns([LikeToQuestionColumn::UserId, LikeToQuestionColumn::QuestionId])
                    .update_column(LikeToQuestionColumn::IsLiked)
                    .to_owned(),
            )
            .exec_without_returning(&txn)
            .await?;

        let rating = Self::refresh_question_rating(&txn, question_id).await?;

        let saved = LikeToQuestionEntity::find()
            .filter(LikeToQuestionColumn::UserId.eq(user_id))
            .filter(LikeToQuestionColumn::QuestionId.eq(question_id))
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::Internal {
                message: format!("vote of {} on question {} vanished after upsert", user_id, question_id),
            })?;

        txn.commit().await?;

        debug!(user_id = %user_id, question_id = %question_id, vote = %vote, rating, "Question vote recorded");
        metrics::record_vote("question", vote);
        Ok(saved)
    }

    /// Cast or change a vote on an answer and refresh its rating
    pub async fn vote_answer(&self, user_id: Uuid, answer_id: Uuid, vote: Vote) -> Result<LikeToAnswer> {
        let txn = self.write_conn().begin().await?;

        Self::require_answer(&txn, answer_id).await?;

        let mut row = LikeToAnswerActiveModel::new();
        row.user_id = Set(user_id);
        row.answer_id = Set(answer_id);
        row.is_liked = Set(vote);

        LikeToAnswerEntity::insert(row)
            .on_conflict(
                OnConflict::columns([LikeToAnswerColumn::UserId, LikeToAnswerColumn::AnswerId])
                    .update_column(LikeToAnswerColumn::IsLiked)
                    .to_owned(),
            )
            .exec_without_returning(&txn)
            .await?;

        let rating = Self::refresh_answer_rating(&txn, answer_id).await?;

        let saved = LikeToAnswerEntity::find()
            .filter(LikeToAnswerColumn::UserId.eq(user_id))
            .filter(LikeToAnswerColumn::AnswerId.eq(answer_id))
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::Internal {
                message: format!("vote of {} on answer {} vanished after upsert", user_id, answer_id),
            })?;

        txn.commit().await?;

        debug!(user_id = %user_id, answer_id = %answer_id, vote = %vote, rating, "Answer vote recorded");
        metrics::record_vote("answer", vote);
        Ok(saved)
    }

    /// A user's vote on a question
    pub async fn find_question_vote(&self, user_id: Uuid, question_id: Uuid) -> Result<Option<LikeToQuestion>> {
        LikeToQuestionEntity::find()
            .filter(LikeToQuestionColumn::UserId.eq(user_id))
            .filter(LikeToQuestionColumn::QuestionId.eq(question_id))
            .one(self.read_conn())
            .await
            .map_err(Into::into)
    }

    /// A user's vote on an answer
    pub async fn find_answer_vote(&self, user_id: Uuid, answer_id: Uuid) -> Result<Option<LikeToAnswer>> {
        LikeToAnswerEntity::find()
            .filter(LikeToAnswerColumn::UserId.eq(user_id))
            .filter(LikeToAnswerColumn::AnswerId.eq(answer_id))
            .one(self.read_conn())
            .await
            .map_err(Into::into)
    }

    /// Recompute a question's rating from its votes
    pub async fn recalculate_question_rating(&self, question_id: Uuid) -> Result<i32> {
        let txn = self.write_conn().begin().await?;
        Self::require_question(&txn, question_id).await?;
        let rating = Self::refresh_question_rating(&txn, question_id).await?;
        txn.commit().await?;
        Ok(rating)
    }

    /// Recompute an answer's rating from its votes
    pub async fn recalculate_answer_rating(&self, answer_id: Uuid) -> Result<i32> {
        let txn = self.write_conn().begin().await?;
        Self::require_answer(&txn, answer_id).await?;
        let rating = Self::refresh_answer_rating(&txn, answer_id).await?;
        txn.commit().await?;
        Ok(rating)
    }

    async fn refresh_question_rating<C: ConnectionTrait>(conn: &C, question_id: Uuid) -> Result<i32> {
        let total: Option<i64> = LikeToQuestionEntity::find()
            .select_only()
            .column_as(Expr::col(LikeToQuestionColumn::IsLiked).sum(), "total")
            .filter(LikeToQuestionColumn::QuestionId.eq(question_id))
            .into_tuple::<Option<i64>>()
            .one(conn)
            .await?
            .flatten();
        let rating = Self::rating_from_total(total)?;

        QuestionEntity::update_many()
            .col_expr(QuestionColumn::Rating, Expr::value(rating))
            .filter(QuestionColumn::Id.eq(question_id))
            .exec(conn)
            .await?;

        Ok(rating)
    }

    async fn refresh_answer_rating<C: ConnectionTrait>(conn: &C, answer_id: Uuid) -> Result<i32> {
        let total: Option<i64> = LikeToAnswerEntity::find()
            .select_only()
            .column_as(Expr::col(LikeToAnswerColumn::IsLiked).sum(), "total")
            .filter(LikeToAnswerColumn::AnswerId.eq(answer_id))
            .into_tuple::<Option<i64>>()
            .one(conn)
            .await?
            .flatten();
        let rating = Self::rating_from_total(total)?;

        AnswerEntity::update_many()
            .col_expr(AnswerColumn::Rating, Expr::value(rating))
            .filter(AnswerColumn::Id.eq(answer_id))
            .exec(conn)
            .await?;

        Ok(rating)
    }

    fn rating_from_total(total: Option<i64>) -> Result<i32> {
        i32::try_from(total.unwrap_or(0)).map_err(|_| AppError::Internal {
            message: format!("vote total {:?} does not fit a rating", total),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory_pool;
    use crate::media::{scratch_storage, LocalAvatarStorage};
    use sea_orm::PaginatorTrait;

    async fn repo() -> Repository {
        Repository::new(memory_pool().await)
    }

    async fn profile(repo: &Repository, login: &str) -> Profile {
        repo.get_or_create_profile(Uuid::new_v4(), login).await.unwrap()
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    async fn question(repo: &Repository, author: &Profile, title: &str, date: NaiveDate, tags: &[Uuid]) -> Question {
        repo.create_question(NewQuestion {
            author_id: author.id,
            title: title.to_string(),
            text: format!("{} body", title),
            date: Some(date),
            tag_ids: tags.to_vec(),
        })
        .await
        .unwrap()
    }

    /// `likes` fresh profiles each like the question
    async fn like_n_times(repo: &Repository, question_id: Uuid, likes: usize) {
        for i in 0..likes {
            let voter = profile(repo, &format!("voter{}", i)).await;
            repo.vote_question(voter.id, question_id, Vote::Like).await.unwrap();
        }
    }

    fn ids(questions: &[Question]) -> Vec<Uuid> {
        questions.iter().map(|q| q.id).collect()
    }

    #[tokio::test]
    async fn test_profile_defaults_and_uniqueness() {
        let repo = repo().await;
        let user_id = Uuid::new_v4();

        let created = repo.get_or_create_profile(user_id, "alice").await.unwrap();
        assert_eq!(created.avatar, crate::DEFAULT_AVATAR);
        assert_eq!(created.to_string(), "alice");

        // Same identity returns the same profile
        let again = repo.get_or_create_profile(user_id, "alice2").await.unwrap();
        assert_eq!(again.id, created.id);
        assert_eq!(again.login, "alice");

        // A second row for the identity is rejected by the store
        let mut duplicate = ProfileActiveModel::new();
        duplicate.user_id = Set(user_id);
        duplicate.login = Set("mallory".to_string());
        let err = AppError::from(duplicate.insert(repo.write_conn()).await.unwrap_err());
        assert!(matches!(err, AppError::Duplicate { .. }));
    }

    #[tokio::test]
    async fn test_login_length_limit() {
        let repo = repo().await;

        let err = repo
            .get_or_create_profile(Uuid::new_v4(), &"x".repeat(33))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));

        // 32 characters, multi-byte included, is still fine
        let login = "ü".repeat(32);
        let created = repo.get_or_create_profile(Uuid::new_v4(), &login).await.unwrap();
        let renamed = repo.update_login(created.id, "bob").await.unwrap();
        assert_eq!(renamed.login, "bob");
        assert_eq!(repo.find_profile(created.id).await.unwrap().unwrap().login, "bob");
    }

    #[tokio::test]
    async fn test_avatar_upload_and_reset() {
        let repo = repo().await;
        let storage = scratch_storage();
        let alice = profile(&repo, "alice").await;

        let updated = repo
            .set_avatar(alice.id, &storage, "face.png", b"img")
            .await
            .unwrap();
        assert!(updated.avatar.starts_with("avatar/"));
        assert!(updated.avatar.contains("/face_") && updated.avatar.ends_with(".png"));
        assert!(storage.root().join(&updated.avatar).exists());

        let reset = repo.reset_avatar(alice.id, &storage).await.unwrap();
        assert_eq!(reset.avatar, crate::DEFAULT_AVATAR);
        assert!(!storage.root().join(&updated.avatar).exists());

        let _ = tokio::fs::remove_dir_all(storage.root()).await;
    }

    #[tokio::test]
    async fn test_same_avatar_name_from_two_profiles() {
        let repo = repo().await;
        let storage = scratch_storage();
        let alice = profile(&repo, "alice").await;
        let bob = profile(&repo, "bob").await;

        let alice = repo.set_avatar(alice.id, &storage, "me.png", b"alice").await.unwrap();
        let bob = repo.set_avatar(bob.id, &storage, "me.png", b"bob").await.unwrap();
        assert_ne!(alice.avatar, bob.avatar);

        let alice_file = storage.root().join(&alice.avatar);
        assert_eq!(tokio::fs::read(&alice_file).await.unwrap(), b"alice");
        assert_eq!(tokio::fs::read(storage.root().join(&bob.avatar)).await.unwrap(), b"bob");

        // Bob dropping his avatar leaves Alice's in place
        repo.reset_avatar(bob.id, &storage).await.unwrap();
        assert!(!storage.root().join(&bob.avatar).exists());
        assert_eq!(tokio::fs::read(&alice_file).await.unwrap(), b"alice");

        let _ = tokio::fs::remove_dir_all(storage.root()).await;
    }

    #[tokio::test]
    async fn test_configured_default_avatar() {
        let repo = repo().await.with_default_avatar("anon.png");
        let storage = LocalAvatarStorage::new(scratch_storage().root(), "anon.png");
        tokio::fs::create_dir_all(storage.root()).await.unwrap();
        for placeholder in ["anon.png", crate::DEFAULT_AVATAR] {
            tokio::fs::write(storage.root().join(placeholder), b"placeholder").await.unwrap();
        }

        let alice = profile(&repo, "alice").await;
        assert_eq!(alice.avatar, "anon.png");

        let updated = repo.set_avatar(alice.id, &storage, "face.png", b"img").await.unwrap();
        let reset = repo.reset_avatar(alice.id, &storage).await.unwrap();
        assert_eq!(reset.avatar, "anon.png");
        assert!(!storage.root().join(&updated.avatar).exists());

        // A profile still pointing at the built-in placeholder keeps it on disk
        let mut legacy: ProfileActiveModel = profile(&repo, "bob").await.into();
        legacy.avatar = Set(crate::DEFAULT_AVATAR.to_string());
        let legacy = legacy.update(repo.write_conn()).await.unwrap();
        repo.set_avatar(legacy.id, &storage, "bob.png", b"img").await.unwrap();

        assert!(storage.root().join("anon.png").exists());
        assert!(storage.root().join(crate::DEFAULT_AVATAR).exists());

        let _ = tokio::fs::remove_dir_all(storage.root()).await;
    }

    /// Storage whose uploads race with the profile being deleted
    struct DeletedDuringUpload {
        inner: LocalAvatarStorage,
        repo: Repository,
        profile_id: Uuid,
        stored: std::sync::Mutex<Option<String>>,
    }

    #[async_trait::async_trait]
    impl AvatarStorage for DeletedDuringUpload {
        async fn store(&self, date: NaiveDate, file_name: &str, bytes: &[u8]) -> Result<String> {
            let reference = self.inner.store(date, file_name, bytes).await?;
            *self.stored.lock().unwrap() = Some(reference.clone());
            self.repo.delete_profile(self.profile_id).await?;
            Ok(reference)
        }

        async fn remove(&self, reference: &str) -> Result<()> {
            self.inner.remove(reference).await
        }

        fn default_avatar(&self) -> &str {
            self.inner.default_avatar()
        }
    }

    #[tokio::test]
    async fn test_failed_avatar_update_removes_upload() {
        let repo = repo().await;
        let alice = profile(&repo, "alice").await;
        let storage = DeletedDuringUpload {
            inner: scratch_storage(),
            repo: repo.clone(),
            profile_id: alice.id,
            stored: std::sync::Mutex::new(None),
        };

        assert!(repo.set_avatar(alice.id, &storage, "face.png", b"img").await.is_err());

        let stored = storage.stored.lock().unwrap().clone().unwrap();
        assert!(!storage.inner.root().join(&stored).exists());

        let _ = tokio::fs::remove_dir_all(storage.inner.root()).await;
    }

    #[tokio::test]
    async fn test_question_defaults() {
        let repo = repo().await;
        let alice = profile(&repo, "alice").await;

        let q = repo
            .create_question(NewQuestion {
                author_id: alice.id,
                title: "Why borrowck?".to_string(),
                text: "...".to_string(),
                date: None,
                tag_ids: vec![],
            })
            .await
            .unwrap();

        assert_eq!(q.rating, 0);
        assert_eq!(q.date, chrono::Utc::now().date_naive());
        assert_eq!(q.to_string(), "Why borrowck?");
    }

    #[tokio::test]
    async fn test_question_title_limit() {
        let repo = repo().await;
        let alice = profile(&repo, "alice").await;

        let err = repo
            .create_question(NewQuestion {
                author_id: alice.id,
                title: "t".repeat(129),
                text: String::new(),
                date: None,
                tag_ids: vec![],
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_rust_tag_scenario() {
        let repo = repo().await;
        let alice = profile(&repo, "alice").await;
        let rust = repo.create_tag("rust").await.unwrap();
        assert_eq!(rust.rating, 0);

        let a = question(&repo, &alice, "A", day(2024, 1, 1), &[rust.id]).await;
        let b = question(&repo, &alice, "B", day(2024, 2, 1), &[rust.id]).await;
        like_n_times(&repo, a.id, 5).await;
        like_n_times(&repo, b.id, 1).await;

        assert_eq!(ids(&repo.new_questions().await.unwrap()), vec![b.id, a.id]);
        assert_eq!(ids(&repo.hot_questions().await.unwrap()), vec![a.id, b.id]);

        let mut tagged = ids(&repo.tagged_questions(rust.id).await.unwrap());
        tagged.sort();
        let mut expected = vec![a.id, b.id];
        expected.sort();
        assert_eq!(tagged, expected);

        let hot = repo.hot_questions().await.unwrap();
        assert_eq!(hot[0].rating, 5);
        assert_eq!(hot[1].rating, 1);
    }

    #[tokio::test]
    async fn test_listings_are_reexecutable() {
        let repo = repo().await;
        let alice = profile(&repo, "alice").await;
        question(&repo, &alice, "first", day(2024, 1, 1), &[]).await;

        let listing = QuestionEntity::find_new();
        assert_eq!(listing.clone().all(repo.read_conn()).await.unwrap().len(), 1);

        question(&repo, &alice, "second", day(2024, 1, 2), &[]).await;
        assert_eq!(listing.all(repo.read_conn()).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_new_ties_break_by_id() {
        let repo = repo().await;
        let alice = profile(&repo, "alice").await;
        let same_day = day(2024, 5, 5);

        let mut posted = Vec::new();
        for title in ["x", "y", "z"] {
            posted.push(question(&repo, &alice, title, same_day, &[]).await.id);
        }
        posted.sort();

        assert_eq!(ids(&repo.new_questions().await.unwrap()), posted);
        assert_eq!(ids(&repo.hot_questions().await.unwrap()), posted);
    }

    #[tokio::test]
    async fn test_tag_filter_is_exact() {
        let repo = repo().await;
        let alice = profile(&repo, "alice").await;
        let rust = repo.create_tag("rust").await.unwrap();
        let go = repo.create_tag("go").await.unwrap();

        let only_rust = question(&repo, &alice, "r", day(2024, 1, 1), &[rust.id]).await;
        let both = question(&repo, &alice, "rg", day(2024, 1, 2), &[rust.id, go.id, go.id]).await;
        let untagged = question(&repo, &alice, "none", day(2024, 1, 3), &[]).await;

        let go_questions = repo.tagged_questions(go.id).await.unwrap();
        assert_eq!(ids(&go_questions), vec![both.id]);

        let rust_questions = ids(&repo.tagged_questions_by_name("rust").await.unwrap());
        assert!(rust_questions.contains(&only_rust.id));
        assert!(rust_questions.contains(&both.id));
        assert!(!rust_questions.contains(&untagged.id));
        assert_eq!(rust_questions.len(), 2);

        assert!(repo.tagged_questions_by_name("cobol").await.unwrap().is_empty());

        let names: Vec<String> = repo
            .question_tags(both.id)
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(names, vec!["go", "rust"]);
    }

    #[tokio::test]
    async fn test_set_question_tags_replaces_links() {
        let repo = repo().await;
        let alice = profile(&repo, "alice").await;
        let rust = repo.get_or_create_tag("rust").await.unwrap();
        let sql = repo.get_or_create_tag("sql").await.unwrap();
        assert_eq!(repo.get_or_create_tag("rust").await.unwrap().id, rust.id);

        let q = question(&repo, &alice, "q", day(2024, 1, 1), &[rust.id]).await;
        repo.set_question_tags(q.id, &[sql.id]).await.unwrap();

        assert!(repo.tagged_questions(rust.id).await.unwrap().is_empty());
        assert_eq!(ids(&repo.tagged_questions(sql.id).await.unwrap()), vec![q.id]);

        let err = repo.set_question_tags(Uuid::new_v4(), &[sql.id]).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_one_question() {
        let repo = repo().await;
        let alice = profile(&repo, "alice").await;
        let q = question(&repo, &alice, "q", day(2024, 1, 1), &[]).await;

        assert_eq!(repo.one_question(q.id).await.unwrap(), Some(q));
        assert_eq!(repo.one_question(Uuid::new_v4()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_update_question() {
        let repo = repo().await;
        let alice = profile(&repo, "alice").await;
        let q = question(&repo, &alice, "old", day(2024, 1, 1), &[]).await;

        let edited = repo
            .update_question(q.id, QuestionEdit { title: Some("new".to_string()), text: None })
            .await
            .unwrap();
        assert_eq!(edited.title, "new");
        assert_eq!(edited.text, q.text);

        let err = repo
            .update_question(Uuid::new_v4(), QuestionEdit::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_hot_tags_limit_and_order() {
        let repo = repo().await;

        for rating in 0..17 {
            let tag = repo.create_tag(&format!("tag{}", rating)).await.unwrap();
            repo.set_tag_rating(tag.id, rating).await.unwrap();
        }

        let hot = repo.hot_tags().await.unwrap();
        assert_eq!(hot.len(), 15);
        assert_eq!(hot[0].name, "tag16");
        assert!(hot.windows(2).all(|w| w[0].rating >= w[1].rating));
        assert_eq!(hot[14].rating, 2);
    }

    #[tokio::test]
    async fn test_hot_tags_fewer_than_limit() {
        let repo = repo().await;
        repo.create_tag("only").await.unwrap();
        assert_eq!(repo.hot_tags().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_tag_rating_never_negative() {
        let repo = repo().await;
        let tag = repo.create_tag("rust").await.unwrap();

        let err = repo.set_tag_rating(tag.id, -1).await.unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));

        // The CHECK constraint holds even when the repository is bypassed
        let mut raw: TagActiveModel = tag.clone().into();
        raw.rating = Set(-5);
        assert!(raw.update(repo.write_conn()).await.is_err());

        assert!(repo.create_tag(&"n".repeat(33)).await.is_err());
    }

    #[tokio::test]
    async fn test_revote_updates_in_place() {
        let repo = repo().await;
        let alice = profile(&repo, "alice").await;
        let bob = profile(&repo, "bob").await;
        let q = question(&repo, &alice, "q", day(2024, 1, 1), &[]).await;

        let first = repo.vote_question(bob.id, q.id, Vote::Like).await.unwrap();
        assert_eq!(repo.one_question(q.id).await.unwrap().unwrap().rating, 1);

        let second = repo.vote_question(bob.id, q.id, Vote::Dislike).await.unwrap();
        assert_eq!(second.id, first.id);
        assert_eq!(second.is_liked, Vote::Dislike);

        let rows = LikeToQuestionEntity::find()
            .filter(LikeToQuestionColumn::QuestionId.eq(q.id))
            .count(repo.read_conn())
            .await
            .unwrap();
        assert_eq!(rows, 1);
        assert_eq!(repo.one_question(q.id).await.unwrap().unwrap().rating, -1);

        // Retracting brings the rating back to zero
        repo.vote_question(bob.id, q.id, Vote::NoLike).await.unwrap();
        assert_eq!(repo.recalculate_question_rating(q.id).await.unwrap(), 0);
        assert_eq!(
            repo.find_question_vote(bob.id, q.id).await.unwrap().map(|v| v.is_liked),
            Some(Vote::NoLike)
        );
    }

    #[tokio::test]
    async fn test_duplicate_vote_rows_rejected() {
        let repo = repo().await;
        let alice = profile(&repo, "alice").await;
        let q = question(&repo, &alice, "q", day(2024, 1, 1), &[]).await;

        for _ in 0..2 {
            let mut row = LikeToQuestionActiveModel::new();
            row.user_id = Set(alice.id);
            row.question_id = Set(q.id);
            row.is_liked = Set(Vote::Like);
            if let Err(e) = row.insert(repo.write_conn()).await {
                assert!(matches!(AppError::from(e), AppError::Duplicate { .. }));
                return;
            }
        }
        panic!("second vote row for the same pair was accepted");
    }

    #[tokio::test]
    async fn test_answer_votes_and_rating() {
        let repo = repo().await;
        let alice = profile(&repo, "alice").await;
        let bob = profile(&repo, "bob").await;
        let carol = profile(&repo, "carol").await;
        let q = question(&repo, &alice, "q", day(2024, 1, 1), &[]).await;
        let answer = repo.create_answer(q.id, bob.id, "use Rc".to_string()).await.unwrap();
        assert_eq!(answer.rating, 0);
        assert!(!answer.correct);

        repo.vote_answer(alice.id, answer.id, Vote::Dislike).await.unwrap();
        repo.vote_answer(carol.id, answer.id, Vote::Dislike).await.unwrap();
        repo.vote_answer(carol.id, answer.id, Vote::Like).await.unwrap();

        assert_eq!(repo.find_answer(answer.id).await.unwrap().unwrap().rating, 0);
        assert_eq!(repo.recalculate_answer_rating(answer.id).await.unwrap(), 0);
        assert_eq!(
            repo.find_answer_vote(carol.id, answer.id).await.unwrap().unwrap().is_liked,
            Vote::Like
        );

        let err = repo.vote_answer(alice.id, Uuid::new_v4(), Vote::Like).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_mark_correct_keeps_single_accepted_answer() {
        let repo = repo().await;
        let alice = profile(&repo, "alice").await;
        let bob = profile(&repo, "bob").await;
        let q = question(&repo, &alice, "q", day(2024, 1, 1), &[]).await;
        let other_q = question(&repo, &alice, "other", day(2024, 1, 1), &[]).await;

        let first = repo.create_answer(q.id, bob.id, "one".to_string()).await.unwrap();
        let second = repo.create_answer(q.id, bob.id, "two".to_string()).await.unwrap();
        let elsewhere = repo.create_answer(other_q.id, bob.id, "x".to_string()).await.unwrap();

        repo.mark_correct(elsewhere.id).await.unwrap();
        repo.mark_correct(first.id).await.unwrap();
        let accepted = repo.mark_correct(second.id).await.unwrap();
        assert!(accepted.correct);

        let answers = repo.question_answers(q.id).await.unwrap();
        let correct: Vec<Uuid> = answers.iter().filter(|a| a.correct).map(|a| a.id).collect();
        assert_eq!(correct, vec![second.id]);

        // Other questions are untouched
        assert!(repo.find_answer(elsewhere.id).await.unwrap().unwrap().correct);
    }

    #[tokio::test]
    async fn test_answer_crud() {
        let repo = repo().await;
        let alice = profile(&repo, "alice").await;
        let q = question(&repo, &alice, "q", day(2024, 1, 1), &[]).await;

        let err = repo
            .create_answer(Uuid::new_v4(), alice.id, "orphan".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));

        let answer = repo.create_answer(q.id, alice.id, "draft".to_string()).await.unwrap();
        let edited = repo.update_answer_text(answer.id, "final".to_string()).await.unwrap();
        assert_eq!(edited.text, "final");

        repo.vote_answer(alice.id, answer.id, Vote::Like).await.unwrap();
        assert!(repo.delete_answer(answer.id).await.unwrap());
        assert!(!repo.delete_answer(answer.id).await.unwrap());
        assert!(repo.find_answer_vote(alice.id, answer.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_question_cascades() {
        let repo = repo().await;
        let alice = profile(&repo, "alice").await;
        let bob = profile(&repo, "bob").await;
        let rust = repo.create_tag("rust").await.unwrap();
        let q = question(&repo, &alice, "q", day(2024, 1, 1), &[rust.id]).await;
        let answer = repo.create_answer(q.id, bob.id, "a".to_string()).await.unwrap();
        repo.vote_question(bob.id, q.id, Vote::Like).await.unwrap();
        repo.vote_answer(alice.id, answer.id, Vote::Like).await.unwrap();

        assert!(repo.delete_question(q.id).await.unwrap());

        assert!(repo.find_answer(answer.id).await.unwrap().is_none());
        assert!(repo.find_question_vote(bob.id, q.id).await.unwrap().is_none());
        assert!(repo.find_answer_vote(alice.id, answer.id).await.unwrap().is_none());
        assert!(repo.tagged_questions(rust.id).await.unwrap().is_empty());
        // The tag itself survives
        assert!(repo.find_tag(rust.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_delete_tag_keeps_questions() {
        let repo = repo().await;
        let alice = profile(&repo, "alice").await;
        let rust = repo.create_tag("rust").await.unwrap();
        let q = question(&repo, &alice, "q", day(2024, 1, 1), &[rust.id]).await;

        assert!(repo.delete_tag(rust.id).await.unwrap());
        assert!(repo.one_question(q.id).await.unwrap().is_some());
        assert!(repo.question_tags(q.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_profile_cascades() {
        let repo = repo().await;
        let alice = profile(&repo, "alice").await;
        let bob = profile(&repo, "bob").await;

        // Alice's question, answered by Bob and voted on by Bob
        let alices_q = question(&repo, &alice, "alice q", day(2024, 1, 1), &[]).await;
        let bobs_answer = repo.create_answer(alices_q.id, bob.id, "b".to_string()).await.unwrap();
        repo.vote_question(bob.id, alices_q.id, Vote::Like).await.unwrap();
        repo.vote_answer(bob.id, bobs_answer.id, Vote::Like).await.unwrap();

        // Bob's question, answered and voted on by Alice
        let bobs_q = question(&repo, &bob, "bob q", day(2024, 1, 2), &[]).await;
        let alices_answer = repo.create_answer(bobs_q.id, alice.id, "a".to_string()).await.unwrap();
        repo.vote_question(alice.id, bobs_q.id, Vote::Dislike).await.unwrap();
        repo.vote_answer(bob.id, alices_answer.id, Vote::Like).await.unwrap();

        assert!(repo.delete_profile(alice.id).await.unwrap());

        assert!(repo.find_profile(alice.id).await.unwrap().is_none());
        assert!(repo.one_question(alices_q.id).await.unwrap().is_none());
        assert!(repo.find_answer(bobs_answer.id).await.unwrap().is_none());
        assert!(repo.find_answer(alices_answer.id).await.unwrap().is_none());
        assert!(repo.find_question_vote(bob.id, alices_q.id).await.unwrap().is_none());
        assert!(repo.find_question_vote(alice.id, bobs_q.id).await.unwrap().is_none());
        assert!(repo.find_answer_vote(bob.id, bobs_answer.id).await.unwrap().is_none());
        assert!(repo.find_answer_vote(bob.id, alices_answer.id).await.unwrap().is_none());

        // Bob's own content stays
        assert_eq!(ids(&repo.new_questions().await.unwrap()), vec![bobs_q.id]);
        assert!(repo.find_profile_by_user(bob.user_id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_display_labels() {
        let repo = repo().await;
        let alice = profile(&repo, "alice").await;
        let q = question(&repo, &alice, "q", day(2024, 1, 1), &[]).await;
        let answer = repo.create_answer(q.id, alice.id, "a".to_string()).await.unwrap();
        let vote = repo.vote_answer(alice.id, answer.id, Vote::Like).await.unwrap();
        let tag = repo.create_tag("rust").await.unwrap();

        assert_eq!(tag.to_string(), "rust");
        assert_eq!(answer.to_string(), format!("answer {} to question {}", answer.id, q.id));
        assert_eq!(vote.to_string(), format!("{} like answer {}", alice.id, answer.id));
    }
}
