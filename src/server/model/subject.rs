use crate::{
    model::subject::{AddSubjectDto, SubjectDto},
    server::{
        localization::{Locale, Localizer},
        mediator::Request,
        response::Response,
        validation::{Validate, ValidationResult, Validator},
    },
};

pub const NAME_MAX_LENGTH: usize = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct Subject {
    pub id: i32,
    pub name_ar: String,
    pub name_en: String,
    pub period: Option<i32>,
}

impl Subject {
    pub fn from_entity(entity: entity::subject::Model) -> Self {
        Self {
            id: entity.id,
            name_ar: entity.name_ar,
            name_en: entity.name_en,
            period: entity.period,
        }
    }

    pub fn into_dto(self, locale: Locale) -> SubjectDto {
        SubjectDto {
            id: self.id,
            name: locale.localize(&self.name_ar, &self.name_en).to_string(),
            period: self.period,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateSubjectParams {
    pub name_ar: String,
    pub name_en: String,
    pub period: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct AddSubjectCommand {
    pub name_ar: String,
    pub name_en: String,
    pub period: Option<i32>,
}

impl From<AddSubjectDto> for AddSubjectCommand {
    fn from(dto: AddSubjectDto) -> Self {
        Self {
            name_ar: dto.name_ar,
            name_en: dto.name_en,
            period: dto.period,
        }
    }
}

impl AddSubjectCommand {
    pub fn into_params(self) -> CreateSubjectParams {
        CreateSubjectParams {
            name_ar: self.name_ar.trim().to_string(),
            name_en: self.name_en.trim().to_string(),
            period: self.period,
        }
    }
}

impl Request for AddSubjectCommand {
    type Response = Response<SubjectDto>;
}

impl Validate for AddSubjectCommand {
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
        if let Some(period) = self.period {
            validator.number("Period", period).positive();
        }
        validator.finish()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GetSubjectListQuery;

impl Request for GetSubjectListQuery {
    type Response = Response<Vec<SubjectDto>>;
}

#[derive(Debug, Clone, Copy)]
pub struct GetSubjectByIdQuery {
    pub id: i32,
}

impl Request for GetSubjectByIdQuery {
    type Response = Response<SubjectDto>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_names_and_zero_period() {
        let result = AddSubjectCommand {
            name_ar: String::new(),
            name_en: " ".to_string(),
            period: Some(0),
        }
        .validate(&Localizer::new(Locale::EnUs));

        assert_eq!(
            result.errors(),
            [
                "NameAr: Must not be empty".to_string(),
                "NameEn: Must not be empty".to_string(),
                "Period: Must be greater than zero".to_string(),
            ]
        );
    }

    #[test]
    fn dto_name_follows_locale() {
        let subject = Subject {
            id: 1,
            name_ar: "رياضيات".to_string(),
            name_en: "Math".to_string(),
            period: None,
        };

        assert_eq!(subject.clone().into_dto(Locale::ArEg).name, "رياضيات");
        assert_eq!(subject.into_dto(Locale::EnGb).name, "Math");
    }
}
