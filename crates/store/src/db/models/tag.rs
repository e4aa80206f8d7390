//! Tag entity

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, QueryOrder, QuerySelect, Select, Set};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tags")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    #[sea_orm(column_type = "String(StringLen::N(32))")]
    pub name: String,

    /// Popularity score, never negative
    pub rating: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::question_tag::Entity")]
    QuestionLinks,
}

impl Related<super::question_tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::QuestionLinks.def()
    }
}

impl Related<super::question::Entity> for Entity {
    fn to() -> RelationDef {
        super::question_tag::Relation::Question.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::question_tag::Relation::Tag.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {
    fn new() -> Self {
        Self {
            id: Set(Uuid::now_v7()),
            rating: Set(0),
            ..ActiveModelTrait::default()
        }
    }
}

impl Entity {
    /// Top tags by rating, ties by id ascending
    pub fn find_hot() -> Select<Entity> {
        Self::find()
            .order_by_desc(Column::Rating)
            .order_by_asc(Column::Id)
            .limit(crate::HOT_TAGS_LIMIT)
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
