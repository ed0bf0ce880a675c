use sea_orm::entity::prelude::*;

/// A tracked item of work. Owns its subtasks; related to categories through
/// the task-category join table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "task")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub description: String,
    pub done: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::subtask::Entity")]
    Subtask,
    #[sea_orm(has_many = "super::task_category::Entity")]
    TaskCategory,
}

impl Related<super::subtask::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subtask.def()
    }
}

impl Related<super::task_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TaskCategory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
