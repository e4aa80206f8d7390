//! Profile entity
//!
//! Extends an identity-provider user with a display name and an avatar.

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, Set};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Identity provider's user id, one profile per identity
    #[sea_orm(unique)]
    pub user_id: Uuid,

    /// Path of the avatar image relative to the media root
    #[sea_orm(column_type = "Text")]
    pub avatar: String,

    #[sea_orm(column_type = "String(StringLen::N(32))")]
    pub login: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::question::Entity")]
    Questions,

    #[sea_orm(has_many = "super::answer::Entity")]
    Answers,

    #[sea_orm(has_many = "super::like_to_question::Entity")]
    QuestionVotes,

    #[sea_orm(has_many = "super::like_to_answer::Entity")]
    AnswerVotes,
}

impl Related<super::question::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Questions.def()
    }
}

impl Related<super::answer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Answers.def()
    }
}

impl Related<super::like_to_question::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::QuestionVotes.def()
    }
}

impl Related<super::like_to_answer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AnswerVotes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {
    fn new() -> Self {
        Self {
            id: Set(Uuid::now_v7()),
            avatar: Set(crate::DEFAULT_AVATAR.to_string()),
            ..ActiveModelTrait::default()
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.login)
    }
}
