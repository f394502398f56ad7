//! Student data repository.
//!
//! Provides `StudentRepository` for student rows and their subject enrollments.
//! Reads join the optional department so a dangling or null department reference
//! simply yields a student without department info.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection,
    DatabaseTransaction, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Select,
    TransactionTrait,
};

use crate::{
    model::student::StudentOrdering,
    server::model::{
        student::{CreateStudentParams, Enrollment, Student, StudentFilter, UpdateStudentParams},
        PageRequest, Paginated,
    },
};

pub struct StudentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every student ordered by id.
    pub async fn get_all(&self) -> Result<Vec<Student>, DbErr> {
        let rows = entity::prelude::Student::find()
            .find_also_related(entity::prelude::Department)
            .order_by_asc(entity::student::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(student, department)| Student::from_entity(student, department))
            .collect())
    }

    /// Gets a student by id with its department.
    ///
    /// # Returns
    /// - `Ok(Some(Student))` - Student found; `department` is `None` when unset
    /// - `Ok(None)` - No student with that id
    /// - `Err(DbErr)` - Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Student>, DbErr> {
        let row = entity::prelude::Student::find_by_id(id)
            .find_also_related(entity::prelude::Department)
            .one(self.db)
            .await?;

        Ok(row.map(|(student, department)| Student::from_entity(student, department)))
    }

    /// Gets one page of students matching `filter`.
    ///
    /// The search term matches either name or the address. Ordering by department
    /// name sorts students without a department first.
    ///
    /// # Arguments
    /// - `page` - 1-based page number and page size
    /// - `filter` - Optional search term and sort column
    ///
    /// # Returns
    /// - `Ok(Paginated<Student>)` - Requested page plus the total number of matches
    /// - `Err(DbErr)` - Database error
    pub async fn get_paginated(
        &self,
        page: PageRequest,
        filter: &StudentFilter,
    ) -> Result<Paginated<Student>, DbErr> {
        let mut query = Self::filtered(entity::prelude::Student::find(), filter)
            .find_also_related(entity::prelude::Department);

        query = match filter.order_by {
            StudentOrdering::Id => query.order_by_asc(entity::student::Column::Id),
            StudentOrdering::Name => query.order_by_asc(entity::student::Column::NameEn),
            StudentOrdering::Address => query.order_by_asc(entity::student::Column::Address),
            StudentOrdering::DepartmentName => query
                .order_by_asc(entity::department::Column::NameEn)
                .order_by_asc(entity::student::Column::Id),
        };

        let paginator = query.paginate(self.db, page.page_size);
        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(page.index()).await?;

        Ok(Paginated {
            items: rows
                .into_iter()
                .map(|(student, department)| Student::from_entity(student, department))
                .collect(),
            total,
            request: page,
        })
    }

    fn filtered(
        query: Select<entity::student::Entity>,
        filter: &StudentFilter,
    ) -> Select<entity::student::Entity> {
        match filter.search.as_deref() {
            Some(search) => query.filter(
                Condition::any()
                    .add(entity::student::Column::NameEn.contains(search))
                    .add(entity::student::Column::NameAr.contains(search))
                    .add(entity::student::Column::Address.contains(search)),
            ),
            None => query,
        }
    }

    /// Creates a student and returns it with its department.
    pub async fn create(&self, params: CreateStudentParams) -> Result<Student, DbErr> {
        let student = entity::student::ActiveModel {
            name_ar: ActiveValue::Set(params.name_ar),
            name_en: ActiveValue::Set(params.name_en),
            address: ActiveValue::Set(params.address),
            phone: ActiveValue::Set(params.phone),
            department_id: ActiveValue::Set(params.department_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.get_by_id(student.id).await?.ok_or(DbErr::RecordNotFound(format!(
            "Student with id {} not found after creation",
            student.id
        )))
    }

    /// Overwrites every column of an existing student.
    ///
    /// # Returns
    /// - `Ok(Student)` - Updated student
    /// - `Err(DbErr::RecordNotUpdated)` - No row with that id
    /// - `Err(DbErr)` - Other database error, such as a unique violation
    pub async fn update(&self, params: UpdateStudentParams) -> Result<Student, DbErr> {
        let student = entity::student::ActiveModel {
            id: ActiveValue::Unchanged(params.id),
            name_ar: ActiveValue::Set(params.name_ar),
            name_en: ActiveValue::Set(params.name_en),
            address: ActiveValue::Set(params.address),
            phone: ActiveValue::Set(params.phone),
            department_id: ActiveValue::Set(params.department_id),
        }
        .update(self.db)
        .await?;

        self.get_by_id(student.id).await?.ok_or(DbErr::RecordNotFound(format!(
            "Student with id {} not found after update",
            student.id
        )))
    }

    /// Deletes a student together with its enrollments.
    ///
    /// # Returns
    /// - `Ok(true)` - Student deleted
    /// - `Ok(false)` - No student with that id
    /// - `Err(DbErr)` - Database error; nothing was deleted
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        match Self::delete_with_enrollments(&txn, id).await {
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

    async fn delete_with_enrollments(txn: &DatabaseTransaction, id: i32) -> Result<bool, DbErr> {
        entity::prelude::StudentSubject::delete_many()
            .filter(entity::student_subject::Column::StudentId.eq(id))
            .exec(txn)
            .await?;
        let result = entity::prelude::Student::delete_by_id(id).exec(txn).await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Student::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether another student already uses `name_en`.
    ///
    /// # Arguments
    /// - `name_en` - English name to look for
    /// - `exclude_id` - Student to ignore, used when editing
    pub async fn name_en_exists(
        &self,
        name_en: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Student::find()
            .filter(entity::student::Column::NameEn.eq(name_en));
        if let Some(id) = exclude_id {
            query = query.filter(entity::student::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Enrolls a student in a subject.
    pub async fn enroll(
        &self,
        student_id: i32,
        subject_id: i32,
        grade: Option<i32>,
    ) -> Result<Enrollment, DbErr> {
        let enrollment = entity::student_subject::ActiveModel {
            student_id: ActiveValue::Set(student_id),
            subject_id: ActiveValue::Set(subject_id),
            grade: ActiveValue::Set(grade),
        }
        .insert(self.db)
        .await?;

        Ok(Enrollment::from_entity(enrollment))
    }

    pub async fn is_enrolled(&self, student_id: i32, subject_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::StudentSubject::find_by_id((student_id, subject_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
