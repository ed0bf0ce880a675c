use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::model::user::{CreateUserParams, UserWithCourses};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new user.
    pub async fn create(&self, params: CreateUserParams) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            name: ActiveValue::Set(params.name),
            netid: ActiveValue::Set(params.netid),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds a bare user row by primary key.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    /// Gets a user with the deduplicated union of their courses.
    ///
    /// Student courses come first, then instructor courses not already
    /// present; a course where the user holds both roles appears once.
    pub async fn get_with_courses(&self, id: i32) -> Result<Option<UserWithCourses>, DbErr> {
        let user = entity::prelude::User::find_by_id(id).one(self.db).await?;

        let user = match user {
            Some(user) => user,
            None => return Ok(None),
        };

        let student_rows = entity::prelude::CourseStudent::find()
            .filter(entity::course_student::Column::UserId.eq(id))
            .order_by_asc(entity::course_student::Column::Id)
            .all(self.db)
            .await?;

        let instructor_rows = entity::prelude::CourseInstructor::find()
            .filter(entity::course_instructor::Column::UserId.eq(id))
            .order_by_asc(entity::course_instructor::Column::Id)
            .all(self.db)
            .await?;

        let mut course_ids: Vec<i32> = Vec::new();
        for course_id in student_rows
            .iter()
            .map(|row| row.course_id)
            .chain(instructor_rows.iter().map(|row| row.course_id))
        {
            if !course_ids.contains(&course_id) {
                course_ids.push(course_id);
            }
        }

        if course_ids.is_empty() {
            return Ok(Some(UserWithCourses {
                user,
                courses: Vec::new(),
            }));
        }

        // Fetch all courses in one query, then restore the deduplicated order
        let courses_map: HashMap<i32, entity::course::Model> = entity::prelude::Course::find()
            .filter(entity::course::Column::Id.is_in(course_ids.clone()))
            .all(self.db)
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        let courses = course_ids
            .into_iter()
            .filter_map(|course_id| courses_map.get(&course_id).cloned())
            .collect();

        Ok(Some(UserWithCourses { user, courses }))
    }
}
