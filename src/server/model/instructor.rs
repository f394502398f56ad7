use crate::{
    model::{
        instructor::{AddInstructorDto, InstructorDto},
        subject::SubjectDto,
    },
    server::{
        localization::{Locale, Localizer},
        mediator::Request,
        model::LocalizedRef,
        response::Response,
        validation::{Validate, ValidationResult, Validator},
    },
};

pub const NAME_MAX_LENGTH: usize = 100;
pub const ADDRESS_MAX_LENGTH: usize = 500;
pub const POSITION_MAX_LENGTH: usize = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct Instructor {
    pub id: i32,
    pub name_ar: String,
    pub name_en: String,
    pub address: Option<String>,
    pub position: Option<String>,
    pub salary: Option<f64>,
    pub supervisor_id: Option<i32>,
    pub department: Option<LocalizedRef>,
}

impl Instructor {
    pub fn from_entity(
        entity: entity::instructor::Model,
        department: Option<entity::department::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            name_ar: entity.name_ar,
            name_en: entity.name_en,
            address: entity.address,
            position: entity.position,
            salary: entity.salary,
            supervisor_id: entity.supervisor_id,
            department: department.map(LocalizedRef::from),
        }
    }

    pub fn into_dto(self, locale: Locale) -> InstructorDto {
        InstructorDto {
            id: self.id,
            name: locale.localize(&self.name_ar, &self.name_en).to_string(),
            address: self.address,
            position: self.position,
            salary: self.salary,
            department_id: self.department.as_ref().map(|d| d.id),
            department_name: self.department.as_ref().map(|d| d.name(locale)),
            supervisor_id: self.supervisor_id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateInstructorParams {
    pub name_ar: String,
    pub name_en: String,
    pub address: Option<String>,
    pub position: Option<String>,
    pub salary: Option<f64>,
    pub department_id: Option<i32>,
    pub supervisor_id: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct AddInstructorCommand {
    pub name_ar: String,
    pub name_en: String,
    pub address: Option<String>,
    pub position: Option<String>,
    pub salary: Option<f64>,
    pub department_id: Option<i32>,
    pub supervisor_id: Option<i32>,
}

impl From<AddInstructorDto> for AddInstructorCommand {
    fn from(dto: AddInstructorDto) -> Self {
        Self {
            name_ar: dto.name_ar,
            name_en: dto.name_en,
            address: dto.address,
            position: dto.position,
            salary: dto.salary,
            department_id: dto.department_id,
            supervisor_id: dto.supervisor_id,
        }
    }
}

impl AddInstructorCommand {
    pub fn into_params(self) -> CreateInstructorParams {
        CreateInstructorParams {
            name_ar: self.name_ar.trim().to_string(),
            name_en: self.name_en.trim().to_string(),
            address: self.address,
            position: self.position,
            salary: self.salary,
            department_id: self.department_id,
            supervisor_id: self.supervisor_id,
        }
    }
}

impl Request for AddInstructorCommand {
    type Response = Response<InstructorDto>;
}

impl Validate for AddInstructorCommand {
    fn validate(&self, localizer: &Localizer) -> ValidationResult {
        let mut validator = Validator::new(localizer);
        validator
            .text("NameAr", &self.name_ar)
            .not_empty()
            .max_length(NAME_MAX_LENGTH);
        validator
            .text("NameEn", &self.name_en)
            .not_empty()
            .max_length(NAME_MAX_LENGTH);
        validator
            .optional_text("Address", self.address.as_deref())
            .max_length(ADDRESS_MAX_LENGTH);
        validator
            .optional_text("Position", self.position.as_deref())
            .max_length(POSITION_MAX_LENGTH);
        if let Some(salary) = self.salary {
            validator.number("Salary", salary).positive();
        }
        if let Some(department_id) = self.department_id {
            validator.number("DepartmentId", department_id).positive();
        }
        if let Some(supervisor_id) = self.supervisor_id {
            validator.number("SupervisorId", supervisor_id).positive();
        }
        validator.finish()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AssignInstructorSubjectCommand {
    pub instructor_id: i32,
    pub subject_id: i32,
}

impl Request for AssignInstructorSubjectCommand {
    type Response = Response<SubjectDto>;
}

impl Validate for AssignInstructorSubjectCommand {
    fn validate(&self, localizer: &Localizer) -> ValidationResult {
        let mut validator = Validator::new(localizer);
        validator.number("InstructorId", self.instructor_id).positive();
        validator.number("SubjectId", self.subject_id).positive();
        validator.finish()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GetInstructorListQuery;

impl Request for GetInstructorListQuery {
    type Response = Response<Vec<InstructorDto>>;
}

#[derive(Debug, Clone, Copy)]
pub struct GetInstructorByIdQuery {
    pub id: i32,
}

impl Request for GetInstructorByIdQuery {
    type Response = Response<InstructorDto>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command() -> AddInstructorCommand {
        AddInstructorCommand {
            name_ar: "سارة".to_string(),
            name_en: "Sara".to_string(),
            address: None,
            position: Some("Lecturer".to_string()),
            salary: Some(4200.0),
            department_id: None,
            supervisor_id: None,
        }
    }

    #[test]
    fn accepts_minimal_instructor() {
        assert!(command().validate(&Localizer::new(Locale::EnUs)).is_valid());
    }

    #[test]
    fn rejects_non_positive_salary_and_supervisor() {
        let result = AddInstructorCommand {
            salary: Some(0.0),
            supervisor_id: Some(0),
            ..command()
        }
        .validate(&Localizer::new(Locale::EnUs));

        assert_eq!(
            result.errors(),
            [
                "Salary: Must be greater than zero".to_string(),
                "SupervisorId: Must be greater than zero".to_string(),
            ]
        );
    }

    #[test]
    fn into_params_trims_names() {
        let params = AddInstructorCommand {
            name_en: "  Sara ".to_string(),
            ..command()
        }
        .into_params();

        assert_eq!(params.name_en, "Sara");
    }
}
