//! Department data repository.
//!
//! Provides `DepartmentRepository` for departments, their subject assignments and
//! the detail view combining manager, subjects, instructors and a page of students.

use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection,
    DatabaseTransaction, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};

use crate::server::model::{
    department::{CreateDepartmentParams, Department, DepartmentDetail, UpdateDepartmentParams},
    subject::Subject,
    LocalizedRef, PageRequest, Paginated,
};

/// Repository providing database operations for departments.
pub struct DepartmentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DepartmentRepository<'a> {
    /// Creates a new DepartmentRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of departments with their managers, ordered by id.
    ///
    /// # Arguments
    /// - `page` - 1-based page number and page size
    ///
    /// # Returns
    /// - `Ok(Paginated<Department>)` - Requested page and total department count
    /// - `Err(DbErr)` - Database error
    pub async fn get_paginated(&self, page: PageRequest) -> Result<Paginated<Department>, DbErr> {
        let paginator = entity::prelude::Department::find()
            .find_also_related(entity::prelude::Instructor)
            .order_by_asc(entity::department::Column::Id)
            .paginate(self.db, page.page_size);

        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(page.index()).await?;

        Ok(Paginated {
            items: rows
                .into_iter()
                .map(|(department, manager)| Department::from_entity(department, manager))
                .collect(),
            total,
            request: page,
        })
    }

    /// Gets a department with its manager.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Department>, DbErr> {
        let row = entity::prelude::Department::find_by_id(id)
            .find_also_related(entity::prelude::Instructor)
            .one(self.db)
            .await?;

        Ok(row.map(|(department, manager)| Department::from_entity(department, manager)))
    }

    /// Gets a department with its subjects, instructors and one page of students.
    ///
    /// # Arguments
    /// - `id` - Department id
    /// - `student_page` - Page of the department's students to include
    ///
    /// # Returns
    /// - `Ok(Some(DepartmentDetail))` - Department found
    /// - `Ok(None)` - No department with that id
    /// - `Err(DbErr)` - Database error
    pub async fn get_detail(
        &self,
        id: i32,
        student_page: PageRequest,
    ) -> Result<Option<DepartmentDetail>, DbErr> {
        let Some(department) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let subjects = entity::prelude::DepartmentSubject::find()
            .filter(entity::department_subject::Column::DepartmentId.eq(id))
            .find_also_related(entity::prelude::Subject)
            .order_by_asc(entity::department_subject::Column::SubjectId)
            .all(self.db)
            .await?
            .into_iter()
            .filter_map(|(_, subject)| subject.map(Subject::from_entity))
            .collect();

        let instructors = entity::prelude::Instructor::find()
            .filter(entity::instructor::Column::DepartmentId.eq(id))
            .order_by_asc(entity::instructor::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(LocalizedRef::from)
            .collect();

        let paginator = entity::prelude::Student::find()
            .filter(entity::student::Column::DepartmentId.eq(id))
            .order_by_asc(entity::student::Column::Id)
            .paginate(self.db, student_page.page_size);
        let total = paginator.num_items().await?;
        let students = paginator
            .fetch_page(student_page.index())
            .await?
            .into_iter()
            .map(LocalizedRef::from)
            .collect();

        Ok(Some(DepartmentDetail {
            department,
            subjects,
            instructors,
            students: Paginated {
                items: students,
                total,
                request: student_page,
            },
        }))
    }

    pub async fn create(&self, params: CreateDepartmentParams) -> Result<Department, DbErr> {
        let department = entity::department::ActiveModel {
            name_ar: ActiveValue::Set(params.name_ar),
            name_en: ActiveValue::Set(params.name_en),
            manager_id: ActiveValue::Set(params.manager_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.get_by_id(department.id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Department with id {} not found after creation",
                department.id
            )))
    }

    pub async fn update(&self, params: UpdateDepartmentParams) -> Result<Department, DbErr> {
        let department = entity::department::ActiveModel {
            id: ActiveValue::Unchanged(params.id),
            name_ar: ActiveValue::Set(params.name_ar),
            name_en: ActiveValue::Set(params.name_en),
            manager_id: ActiveValue::Set(params.manager_id),
        }
        .update(self.db)
        .await?;

        self.get_by_id(department.id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Department with id {} not found after update",
                department.id
            )))
    }

    /// Deletes a department after detaching its students.
    ///
    /// Students keep existing with a null department. Subject assignments and
    /// instructors still referencing the department make the delete fail with a
    /// foreign-key error, in which case the students stay attached.
    ///
    /// # Returns
    /// - `Ok(true)` - Department deleted
    /// - `Ok(false)` - No department with that id
    /// - `Err(DbErr)` - Database error; the transaction was rolled back
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        match Self::detach_students_and_delete(&txn, id).await {
            Ok(deleted) => {
                txn.commit().await?;
                Ok(deleted)
            }
            Err(err) => {
                txn.rollback().await?;
                Err(err)
            }
        }
    }

    async fn detach_students_and_delete(txn: &DatabaseTransaction, id: i32) -> Result<bool, DbErr> {
        entity::prelude::Student::update_many()
            .filter(entity::student::Column::DepartmentId.eq(id))
            .col_expr(
                entity::student::Column::DepartmentId,
                Expr::value(Option::<i32>::None),
            )
            .exec(txn)
            .await?;

        let result = entity::prelude::Department::delete_by_id(id)
            .exec(txn)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Department::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether a department other than `exclude_id` uses `name_en`.
    pub async fn name_en_exists(
        &self,
        name_en: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Department::find()
            .filter(entity::department::Column::NameEn.eq(name_en));
        if let Some(id) = exclude_id {
            query = query.filter(entity::department::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Links a subject to a department and returns the subject.
    pub async fn assign_subject(&self, department_id: i32, subject_id: i32) -> Result<Subject, DbErr> {
        entity::department_subject::ActiveModel {
            department_id: ActiveValue::Set(department_id),
            subject_id: ActiveValue::Set(subject_id),
        }
        .insert(self.db)
        .await?;

        entity::prelude::Subject::find_by_id(subject_id)
            .one(self.db)
            .await?
            .map(Subject::from_entity)
            .ok_or(DbErr::RecordNotFound(format!(
                "Subject with id {} not found after assignment",
                subject_id
            )))
    }

    pub async fn has_subject(&self, department_id: i32, subject_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::DepartmentSubject::find_by_id((department_id, subject_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
