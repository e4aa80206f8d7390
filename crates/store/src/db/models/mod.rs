//! SeaORM entity models
//!
//! Database entities for Askboard

mod answer;
mod like_to_answer;
mod like_to_question;
mod profile;
mod question;
mod question_tag;
mod tag;
mod vote;

pub use vote::Vote;

pub use profile::{
    Entity as ProfileEntity,
    Model as Profile,
    ActiveModel as ProfileActiveModel,
    Column as ProfileColumn,
};

pub use question::{
    Entity as QuestionEntity,
    Model as Question,
    ActiveModel as QuestionActiveModel,
    Column as QuestionColumn,
};

pub use answer::{
    Entity as AnswerEntity,
    Model as Answer,
    ActiveModel as AnswerActiveModel,
    Column as AnswerColumn,
};

pub use tag::{
    Entity as TagEntity,
    Model as Tag,
    ActiveModel as TagActiveModel,
    Column as TagColumn,
};

pub use question_tag::{
    Entity as QuestionTagEntity,
    Model as QuestionTag,
    ActiveModel as QuestionTagActiveModel,
    Column as QuestionTagColumn,
};

pub use like_to_question::{
    Entity as LikeToQuestionEntity,
    Model as LikeToQuestion,
    ActiveModel as LikeToQuestionActiveModel,
    Column as LikeToQuestionColumn,
};

pub use like_to_answer::{
    Entity as LikeToAnswerEntity,
    Model as LikeToAnswer,
    ActiveModel as LikeToAnswerActiveModel,
    Column as LikeToAnswerColumn,
};
