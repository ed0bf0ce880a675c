use sea_orm::entity::prelude::*;

/// A label with a display color, shared across tasks.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "category")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub description: String,
    pub color: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::task_category::Entity")]
    TaskCategory,
}

impl Related<super::task_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TaskCategory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
