use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::model::course::{CourseWithRelations, CreateCourseParams, EnrollmentRole};

/// Repository providing database operations for course management.
///
/// Owns the instructor and student join tables: both directions of each
/// many-to-many relation are views of rows inserted here, so the two sides
/// cannot drift apart.
pub struct CourseRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourseRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new course. All relationship collections start empty.
    pub async fn create(&self, params: CreateCourseParams) -> Result<CourseWithRelations, DbErr> {
        let course = entity::course::ActiveModel {
            code: ActiveValue::Set(params.code),
            name: ActiveValue::Set(params.name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(CourseWithRelations {
            course,
            assignments: Vec::new(),
            instructors: Vec::new(),
            students: Vec::new(),
        })
    }

    /// Finds a bare course row by primary key.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::course::Model>, DbErr> {
        entity::prelude::Course::find_by_id(id).one(self.db).await
    }

    /// Gets a course by primary key with its assignments and both rosters.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<CourseWithRelations>, DbErr> {
        let course = entity::prelude::Course::find_by_id(id).one(self.db).await?;

        if let Some(course) = course {
            Ok(Some(self.load_relations(course).await?))
        } else {
            Ok(None)
        }
    }

    /// Gets all courses with their relations, ordered by id.
    pub async fn get_all(&self) -> Result<Vec<CourseWithRelations>, DbErr> {
        let courses = entity::prelude::Course::find()
            .order_by_asc(entity::course::Column::Id)
            .all(self.db)
            .await?;

        let mut results = Vec::new();
        for course in courses {
            results.push(self.load_relations(course).await?);
        }

        Ok(results)
    }

    /// Deletes a course. Assignments cascade at the persistence layer.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Course::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Places a user on one of the course's rosters.
    ///
    /// Inserts a single join-table row; repeating an enroll for the same
    /// (course, user, role) triple is a no-op, matching the unique index on
    /// the join tables.
    pub async fn enroll(
        &self,
        course_id: i32,
        user_id: i32,
        role: EnrollmentRole,
    ) -> Result<(), DbErr> {
        match role {
            EnrollmentRole::Instructor => {
                let existing = entity::prelude::CourseInstructor::find()
                    .filter(entity::course_instructor::Column::CourseId.eq(course_id))
                    .filter(entity::course_instructor::Column::UserId.eq(user_id))
                    .count(self.db)
                    .await?;

                if existing == 0 {
                    entity::course_instructor::ActiveModel {
                        course_id: ActiveValue::Set(course_id),
                        user_id: ActiveValue::Set(user_id),
                        ..Default::default()
                    }
                    .insert(self.db)
                    .await?;
                }
            }
            EnrollmentRole::Student => {
                let existing = entity::prelude::CourseStudent::find()
                    .filter(entity::course_student::Column::CourseId.eq(course_id))
                    .filter(entity::course_student::Column::UserId.eq(user_id))
                    .count(self.db)
                    .await?;

                if existing == 0 {
                    entity::course_student::ActiveModel {
                        course_id: ActiveValue::Set(course_id),
                        user_id: ActiveValue::Set(user_id),
                        ..Default::default()
                    }
                    .insert(self.db)
                    .await?;
                }
            }
        }

        Ok(())
    }

    async fn load_relations(
        &self,
        course: entity::course::Model,
    ) -> Result<CourseWithRelations, DbErr> {
        let assignments = entity::prelude::Assignment::find()
            .filter(entity::assignment::Column::CourseId.eq(course.id))
            .order_by_asc(entity::assignment::Column::Id)
            .all(self.db)
            .await?;

        let instructors = self.roster(course.id, EnrollmentRole::Instructor).await?;
        let students = self.roster(course.id, EnrollmentRole::Student).await?;

        Ok(CourseWithRelations {
            course,
            assignments,
            instructors,
            students,
        })
    }

    /// Fetches one roster of a course in enrollment order.
    async fn roster(
        &self,
        course_id: i32,
        role: EnrollmentRole,
    ) -> Result<Vec<entity::user::Model>, DbErr> {
        let user_ids: Vec<i32> = match role {
            EnrollmentRole::Instructor => entity::prelude::CourseInstructor::find()
                .filter(entity::course_instructor::Column::CourseId.eq(course_id))
                .order_by_asc(entity::course_instructor::Column::Id)
                .all(self.db)
                .await?
                .into_iter()
                .map(|row| row.user_id)
                .collect(),
            EnrollmentRole::Student => entity::prelude::CourseStudent::find()
                .filter(entity::course_student::Column::CourseId.eq(course_id))
                .order_by_asc(entity::course_student::Column::Id)
                .all(self.db)
                .await?
                .into_iter()
                .map(|row| row.user_id)
                .collect(),
        };

        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        // Fetch all users in one query, then restore enrollment order
        let users_map: HashMap<i32, entity::user::Model> = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(user_ids.clone()))
            .all(self.db)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        Ok(user_ids
            .into_iter()
            .filter_map(|id| users_map.get(&id).cloned())
            .collect())
    }
}
