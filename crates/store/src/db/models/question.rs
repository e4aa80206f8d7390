//! Question entity and its listing queries

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, QueryFilter, QueryOrder, Select, Set};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "questions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub author_id: Uuid,

    #[sea_orm(column_type = "String(StringLen::N(128))")]
    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub text: String,

    /// Creation date, today (UTC) unless set explicitly
    pub date: Date,

    /// Sum of the question's vote values
    pub rating: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::profile::Entity",
        from = "Column::AuthorId",
        to = "super::profile::Column::Id",
        on_delete = "Cascade"
    )]
    Author,

    #[sea_orm(has_many = "super::answer::Entity")]
    Answers,

    #[sea_orm(has_many = "super::question_tag::Entity")]
    TagLinks,

    #[sea_orm(has_many = "super::like_to_question::Entity")]
    Votes,
}

impl Related<super::profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

impl Related<super::answer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Answers.def()
    }
}

impl Related<super::question_tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TagLinks.def()
    }
}

impl Related<super::tag::Entity> for Entity {
    fn to() -> RelationDef {
        super::question_tag::Relation::Tag.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::question_tag::Relation::Question.def().rev())
    }
}

impl Related<super::like_to_question::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Votes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {
    fn new() -> Self {
        Self {
            id: Set(Uuid::now_v7()),
            date: Set(chrono::Utc::now().date_naive()),
            rating: Set(0),
            ..ActiveModelTrait::default()
        }
    }
}

// Listing queries. Each returns a fresh `Select`, so a listing can be
// executed as many times as needed. Ties fall back to id ascending.
impl Entity {
    /// Most recent first
    pub fn find_new() -> Select<Entity> {
        Self::find()
            .order_by_desc(Column::Date)
            .order_by_asc(Column::Id)
    }

    /// Highest rating first
    pub fn find_hot() -> Select<Entity> {
        Self::find()
            .order_by_desc(Column::Rating)
            .order_by_asc(Column::Id)
    }

    /// Questions linked to the given tag
    pub fn find_tagged(tag_id: Uuid) -> Select<Entity> {
        Self::find()
            .inner_join(super::question_tag::Entity)
            .filter(super::question_tag::Column::TagId.eq(tag_id))
            .order_by_asc(Column::Id)
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}
