//! Schema creation
//!
//! Tables are derived from the entities, so column types, foreign keys and
//! cascades live in one place. On top of that the schema adds the tag
//! rating CHECK and the one-vote-per-user unique indexes the vote upserts
//! rely on. Every statement is `IF NOT EXISTS`, so running it twice is a
//! no-op.

use crate::db::models::*;
use crate::errors::Result;
use sea_orm::sea_query::{Expr, Index, IndexCreateStatement, TableCreateStatement};
use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, Schema};
use tracing::info;

pub const LIKE_TO_QUESTION_UNIQUE: &str = "uq_like_to_question_user_question";
pub const LIKE_TO_ANSWER_UNIQUE: &str = "uq_like_to_answer_user_answer";

/// Create all tables and indexes in dependency order
pub async fn create_schema(conn: &DatabaseConnection) -> Result<()> {
    let backend = conn.get_database_backend();

    for stmt in table_statements(backend) {
        conn.execute(backend.build(&stmt)).await?;
    }

    for stmt in index_statements() {
        conn.execute(backend.build(&stmt)).await?;
    }

    info!(backend = ?backend, "Schema ready");
    Ok(())
}

/// CREATE TABLE statements, parents before children
pub fn table_statements(backend: DbBackend) -> Vec<TableCreateStatement> {
    let schema = Schema::new(backend);

    let mut tags = schema.create_table_from_entity(TagEntity);
    tags.check(Expr::col(TagColumn::Rating).gte(0));

    vec![
        schema.create_table_from_entity(ProfileEntity),
        schema.create_table_from_entity(QuestionEntity),
        schema.create_table_from_entity(AnswerEntity),
        tags,
        schema.create_table_from_entity(QuestionTagEntity),
        schema.create_table_from_entity(LikeToQuestionEntity),
        schema.create_table_from_entity(LikeToAnswerEntity),
    ]
    .into_iter()
    .map(|mut stmt| {
        stmt.if_not_exists();
        stmt
    })
    .collect()
}

/// Composite unique indexes: one vote row per (user, target)
pub fn index_statements() -> Vec<IndexCreateStatement> {
    vec![
        Index::create()
            .name(LIKE_TO_QUESTION_UNIQUE)
            .table(LikeToQuestionEntity)
            .col(LikeToQuestionColumn::UserId)
            .col(LikeToQuestionColumn::QuestionId)
            .unique()
            .if_not_exists()
            .to_owned(),
        Index::create()
            .name(LIKE_TO_ANSWER_UNIQUE)
            .table(LikeToAnswerEntity)
            .col(LikeToAnswerColumn::UserId)
            .col(LikeToAnswerColumn::AnswerId)
            .unique()
            .if_not_exists()
            .to_owned(),
    ]
}
