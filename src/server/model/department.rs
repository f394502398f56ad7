//! Department domain models, repository parameters, commands and queries.

use crate::{
    model::{
        api::PaginatedDto,
        department::{
            AddDepartmentDto, DepartmentDetailDto, DepartmentDetailQueryDto, DepartmentDto,
            DepartmentMemberDto, EditDepartmentDto,
        },
        subject::SubjectDto,
    },
    server::{
        localization::{Locale, Localizer},
        mediator::Request,
        model::{subject::Subject, LocalizedRef, PageRequest, Paginated},
        response::Response,
        validation::{Validate, ValidationResult, Validator},
    },
};

pub const NAME_MAX_LENGTH: usize = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct Department {
    pub id: i32,
    pub name_ar: String,
    pub name_en: String,
    pub manager_id: i32,
    pub manager: Option<LocalizedRef>,
}

impl Department {
    pub fn from_entity(
        entity: entity::department::Model,
        manager: Option<entity::instructor::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            name_ar: entity.name_ar,
            name_en: entity.name_en,
            manager_id: entity.manager_id,
            manager: manager.map(LocalizedRef::from),
        }
    }

    pub fn into_dto(self, locale: Locale) -> DepartmentDto {
        DepartmentDto {
            id: self.id,
            name: locale.localize(&self.name_ar, &self.name_en).to_string(),
            manager_id: self.manager_id,
            manager_name: self.manager.as_ref().map(|m| m.name(locale)),
        }
    }
}

/// Department with its subjects, instructors and one page of students.
#[derive(Debug, Clone)]
pub struct DepartmentDetail {
    pub department: Department,
    pub subjects: Vec<Subject>,
    pub instructors: Vec<LocalizedRef>,
    pub students: Paginated<LocalizedRef>,
}

impl DepartmentDetail {
    pub fn into_dto(self, locale: Locale) -> DepartmentDetailDto {
        let member = |r: LocalizedRef| DepartmentMemberDto {
            id: r.id,
            name: r.name(locale),
        };
        let department = self.department.into_dto(locale);

        DepartmentDetailDto {
            id: department.id,
            name: department.name,
            manager_id: department.manager_id,
            manager_name: department.manager_name,
            subjects: self
                .subjects
                .into_iter()
                .map(|s| s.into_dto(locale))
                .collect(),
            instructors: self.instructors.into_iter().map(member).collect(),
            students: self.students.into_dto(member),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateDepartmentParams {
    pub name_ar: String,
    pub name_en: String,
    pub manager_id: i32,
}

#[derive(Debug, Clone)]
pub struct UpdateDepartmentParams {
    pub id: i32,
    pub name_ar: String,
    pub name_en: String,
    pub manager_id: i32,
}

fn validate_fields(validator: &mut Validator<'_>, name_ar: &str, name_en: &str, manager_id: i32) {
    validator
        .text("NameAr", name_ar)
        .not_empty()
        .max_length(NAME_MAX_LENGTH);
    validator
        .text("NameEn", name_en)
        .not_empty()
        .max_length(NAME_MAX_LENGTH);
    validator.number("ManagerId", manager_id).positive();
}

#[derive(Debug, Clone)]
pub struct AddDepartmentCommand {
    pub name_ar: String,
    pub name_en: String,
    pub manager_id: i32,
}

impl From<AddDepartmentDto> for AddDepartmentCommand {
    fn from(dto: AddDepartmentDto) -> Self {
        Self {
            name_ar: dto.name_ar,
            name_en: dto.name_en,
            manager_id: dto.manager_id,
        }
    }
}

impl AddDepartmentCommand {
    pub fn into_params(self) -> CreateDepartmentParams {
        CreateDepartmentParams {
            name_ar: self.name_ar.trim().to_string(),
            name_en: self.name_en.trim().to_string(),
            manager_id: self.manager_id,
        }
    }
}

impl Request for AddDepartmentCommand {
    type Response = Response<DepartmentDto>;
}

impl Validate for AddDepartmentCommand {
    fn validate(&self, localizer: &Localizer) -> ValidationResult {
        let mut validator = Validator::new(localizer);
        validate_fields(&mut validator, &self.name_ar, &self.name_en, self.manager_id);
        validator.finish()
    }
}

#[derive(Debug, Clone)]
pub struct EditDepartmentCommand {
    pub id: i32,
    pub name_ar: String,
    pub name_en: String,
    pub manager_id: i32,
}

impl From<EditDepartmentDto> for EditDepartmentCommand {
    fn from(dto: EditDepartmentDto) -> Self {
        Self {
            id: dto.id,
            name_ar: dto.name_ar,
            name_en: dto.name_en,
            manager_id: dto.manager_id,
        }
    }
}

impl EditDepartmentCommand {
    pub fn into_params(self) -> UpdateDepartmentParams {
        UpdateDepartmentParams {
            id: self.id,
            name_ar: self.name_ar.trim().to_string(),
            name_en: self.name_en.trim().to_string(),
            manager_id: self.manager_id,
        }
    }
}

impl Request for EditDepartmentCommand {
    type Response = Response<DepartmentDto>;
}

impl Validate for EditDepartmentCommand {
    fn validate(&self, localizer: &Localizer) -> ValidationResult {
        let mut validator = Validator::new(localizer);
        validator.number("Id", self.id).positive();
        validate_fields(&mut validator, &self.name_ar, &self.name_en, self.manager_id);
        validator.finish()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DeleteDepartmentCommand {
    pub id: i32,
}

impl Request for DeleteDepartmentCommand {
    type Response = Response<i32>;
}

#[derive(Debug, Clone, Copy)]
pub struct AssignDepartmentSubjectCommand {
    pub department_id: i32,
    pub subject_id: i32,
}

impl Request for AssignDepartmentSubjectCommand {
    type Response = Response<SubjectDto>;
}

impl Validate for AssignDepartmentSubjectCommand {
    fn validate(&self, localizer: &Localizer) -> ValidationResult {
        let mut validator = Validator::new(localizer);
        validator.number("DepartmentId", self.department_id).positive();
        validator.number("SubjectId", self.subject_id).positive();
        validator.finish()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GetDepartmentListQuery {
    pub page: PageRequest,
}

impl Request for GetDepartmentListQuery {
    type Response = Response<PaginatedDto<DepartmentDto>>;
}

#[derive(Debug, Clone, Copy)]
pub struct GetDepartmentByIdQuery {
    pub id: i32,
    pub student_page: PageRequest,
}

impl GetDepartmentByIdQuery {
    pub fn from_dto(id: i32, dto: DepartmentDetailQueryDto) -> Self {
        Self {
            id,
            student_page: PageRequest::new(dto.student_page_number, dto.student_page_size),
        }
    }
}

impl Request for GetDepartmentByIdQuery {
    type Response = Response<DepartmentDetailDto>;
}
