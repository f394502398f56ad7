//! Student domain model, repository parameters, commands and queries.

use crate::{
    model::{
        api::PaginatedDto,
        student::{
            AddStudentDto, EditStudentDto, EnrollStudentDto, StudentDto, StudentOrdering,
            StudentPageQueryDto, StudentSubjectDto,
        },
    },
    server::{
        localization::{Locale, Localizer},
        mediator::Request,
        model::{LocalizedRef, PageRequest},
        response::Response,
        validation::{Validate, ValidationResult, Validator},
    },
};

pub const NAME_MAX_LENGTH: usize = 100;
pub const ADDRESS_MAX_LENGTH: usize = 500;
pub const PHONE_MAX_LENGTH: usize = 20;

#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub id: i32,
    pub name_ar: String,
    pub name_en: String,
    pub address: String,
    pub phone: Option<String>,
    /// `None` when the student has no department or it no longer exists.
    pub department: Option<LocalizedRef>,
}

impl Student {
    /// Converts a student row and its optional department at the repository boundary.
    pub fn from_entity(
        entity: entity::student::Model,
        department: Option<entity::department::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            name_ar: entity.name_ar,
            name_en: entity.name_en,
            address: entity.address,
            phone: entity.phone,
            department: department.map(LocalizedRef::from),
        }
    }

    pub fn into_dto(self, locale: Locale) -> StudentDto {
        StudentDto {
            id: self.id,
            name: locale.localize(&self.name_ar, &self.name_en).to_string(),
            address: self.address,
            phone: self.phone,
            department_id: self.department.as_ref().map(|d| d.id),
            department_name: self.department.as_ref().map(|d| d.name(locale)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateStudentParams {
    pub name_ar: String,
    pub name_en: String,
    pub address: String,
    pub phone: Option<String>,
    pub department_id: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct UpdateStudentParams {
    pub id: i32,
    pub name_ar: String,
    pub name_en: String,
    pub address: String,
    pub phone: Option<String>,
    pub department_id: Option<i32>,
}

/// Filter and order of the paginated student list.
#[derive(Debug, Clone, Default)]
pub struct StudentFilter {
    pub search: Option<String>,
    pub order_by: StudentOrdering,
}

#[derive(Debug, Clone)]
pub struct Enrollment {
    pub student_id: i32,
    pub subject_id: i32,
    pub grade: Option<i32>,
}

impl Enrollment {
    pub fn from_entity(entity: entity::student_subject::Model) -> Self {
        Self {
            student_id: entity.student_id,
            subject_id: entity.subject_id,
            grade: entity.grade,
        }
    }

    pub fn into_dto(self) -> StudentSubjectDto {
        StudentSubjectDto {
            student_id: self.student_id,
            subject_id: self.subject_id,
            grade: self.grade,
        }
    }
}

fn validate_fields(
    validator: &mut Validator<'_>,
    name_ar: &str,
    name_en: &str,
    address: &str,
    phone: Option<&str>,
    department_id: Option<i32>,
) {
    validator
        .text("NameAr", name_ar)
        .not_empty()
        .max_length(NAME_MAX_LENGTH);
    validator
        .text("NameEn", name_en)
        .not_empty()
        .max_length(NAME_MAX_LENGTH);
    validator
        .text("Address", address)
        .not_empty()
        .max_length(ADDRESS_MAX_LENGTH);
    validator
        .optional_text("Phone", phone)
        .max_length(PHONE_MAX_LENGTH);
    if let Some(department_id) = department_id {
        validator.number("DepartmentId", department_id).positive();
    }
}

#[derive(Debug, Clone)]
pub struct AddStudentCommand {
    pub name_ar: String,
    pub name_en: String,
    pub address: String,
    pub phone: Option<String>,
    pub department_id: Option<i32>,
}

impl From<AddStudentDto> for AddStudentCommand {
    fn from(dto: AddStudentDto) -> Self {
        Self {
            name_ar: dto.name_ar,
            name_en: dto.name_en,
            address: dto.address,
            phone: dto.phone,
            department_id: dto.department_id,
        }
    }
}

impl Request for AddStudentCommand {
    type Response = Response<StudentDto>;
}

impl Validate for AddStudentCommand {
    fn validate(&self, localizer: &Localizer) -> ValidationResult {
        let mut validator = Validator::new(localizer);
        validate_fields(
            &mut validator,
            &self.name_ar,
            &self.name_en,
            &self.address,
            self.phone.as_deref(),
            self.department_id,
        );
        validator.finish()
    }
}

impl AddStudentCommand {
    pub fn into_params(self) -> CreateStudentParams {
        CreateStudentParams {
            name_ar: self.name_ar.trim().to_string(),
            name_en: self.name_en.trim().to_string(),
            address: self.address.trim().to_string(),
            phone: self.phone,
            department_id: self.department_id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct EditStudentCommand {
    pub id: i32,
    pub name_ar: String,
    pub name_en: String,
    pub address: String,
    pub phone: Option<String>,
    pub department_id: Option<i32>,
}

impl From<EditStudentDto> for EditStudentCommand {
    fn from(dto: EditStudentDto) -> Self {
        Self {
            id: dto.id,
            name_ar: dto.name_ar,
            name_en: dto.name_en,
            address: dto.address,
            phone: dto.phone,
            department_id: dto.department_id,
        }
    }
}

impl Request for EditStudentCommand {
    type Response = Response<StudentDto>;
}

impl Validate for EditStudentCommand {
    fn validate(&self, localizer: &Localizer) -> ValidationResult {
        let mut validator = Validator::new(localizer);
        validator.number("Id", self.id).positive();
        validate_fields(
            &mut validator,
            &self.name_ar,
            &self.name_en,
            &self.address,
            self.phone.as_deref(),
            self.department_id,
        );
        validator.finish()
    }
}

impl EditStudentCommand {
    pub fn into_params(self) -> UpdateStudentParams {
        UpdateStudentParams {
            id: self.id,
            name_ar: self.name_ar.trim().to_string(),
            name_en: self.name_en.trim().to_string(),
            address: self.address.trim().to_string(),
            phone: self.phone,
            department_id: self.department_id,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DeleteStudentCommand {
    pub id: i32,
}

impl Request for DeleteStudentCommand {
    type Response = Response<i32>;
}

#[derive(Debug, Clone, Copy)]
pub struct EnrollStudentCommand {
    pub student_id: i32,
    pub subject_id: i32,
    pub grade: Option<i32>,
}

impl EnrollStudentCommand {
    pub fn from_dto(student_id: i32, dto: EnrollStudentDto) -> Self {
        Self {
            student_id,
            subject_id: dto.subject_id,
            grade: dto.grade,
        }
    }
}

impl Request for EnrollStudentCommand {
    type Response = Response<StudentSubjectDto>;
}

impl Validate for EnrollStudentCommand {
    fn validate(&self, localizer: &Localizer) -> ValidationResult {
        let mut validator = Validator::new(localizer);
        validator.number("StudentId", self.student_id).positive();
        validator.number("SubjectId", self.subject_id).positive();
        if let Some(grade) = self.grade {
            validator.number("Grade", grade).between(0, 100);
        }
        validator.finish()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GetStudentListQuery;

impl Request for GetStudentListQuery {
    type Response = Response<Vec<StudentDto>>;
}

#[derive(Debug, Clone, Copy)]
pub struct GetStudentByIdQuery {
    pub id: i32,
}

impl Request for GetStudentByIdQuery {
    type Response = Response<StudentDto>;
}

#[derive(Debug, Clone)]
pub struct GetStudentPaginatedListQuery {
    pub page: PageRequest,
    pub filter: StudentFilter,
}

impl From<StudentPageQueryDto> for GetStudentPaginatedListQuery {
    fn from(dto: StudentPageQueryDto) -> Self {
        Self {
            page: PageRequest::new(dto.page_number, dto.page_size),
            filter: StudentFilter {
                search: dto
                    .search
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty()),
                order_by: dto.order_by.unwrap_or_default(),
            },
        }
    }
}

impl Request for GetStudentPaginatedListQuery {
    type Response = Response<PaginatedDto<StudentDto>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::fixture;

    #[test]
    fn dto_uses_culture_specific_names() {
        let student = Student::from_entity(
            fixture::student::entity_in_department(1),
            Some(fixture::department::entity()),
        );

        let arabic = student.clone().into_dto(Locale::ArEg);
        let english = student.into_dto(Locale::EnUs);

        assert_eq!(arabic.name, fixture::student::DEFAULT_NAME_AR);
        assert_eq!(
            arabic.department_name.as_deref(),
            Some(fixture::department::DEFAULT_NAME_AR)
        );
        assert_eq!(english.name, fixture::student::DEFAULT_NAME_EN);
        assert_eq!(english.department_id, Some(1));
    }

    #[test]
    fn missing_department_maps_to_null_info() {
        let student = Student::from_entity(fixture::student::entity_in_department(3), None);

        let dto = student.into_dto(Locale::EnUs);

        assert_eq!(dto.department_id, None);
        assert_eq!(dto.department_name, None);
    }

    #[test]
    fn add_command_reports_each_missing_field() {
        let command = AddStudentCommand {
            name_ar: String::new(),
            name_en: String::new(),
            address: String::new(),
            phone: None,
            department_id: Some(0),
        };

        let result = command.validate(&Localizer::new(Locale::EnUs));

        assert!(!result.is_valid());
        assert_eq!(result.errors().len(), 4);
    }

    #[test]
    fn edit_command_is_validated() {
        let command = EditStudentCommand {
            id: 0,
            name_ar: "علي".to_string(),
            name_en: "Ali".to_string(),
            address: "x".repeat(ADDRESS_MAX_LENGTH + 1),
            phone: None,
            department_id: None,
        };

        let result = command.validate(&Localizer::new(Locale::EnUs));

        assert_eq!(
            result.errors(),
            [
                "Id: Must be greater than zero".to_string(),
                "Address: Max length is 500".to_string(),
            ]
        );
    }

    #[test]
    fn enrollment_grade_must_be_in_range() {
        let command = EnrollStudentCommand {
            student_id: 1,
            subject_id: 1,
            grade: Some(120),
        };

        let result = command.validate(&Localizer::new(Locale::EnUs));

        assert_eq!(
            result.errors(),
            ["Grade: Must be between 0 and 100".to_string()]
        );
    }

    #[test]
    fn blank_search_is_ignored() {
        let query = GetStudentPaginatedListQuery::from(StudentPageQueryDto {
            page_number: None,
            page_size: None,
            order_by: None,
            search: Some("   ".to_string()),
        });

        assert!(query.filter.search.is_none());
        assert_eq!(query.page, PageRequest::default());
    }
}
