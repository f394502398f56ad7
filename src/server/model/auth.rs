use crate::{
    model::auth::{JwtAuthResultDto, SignInDto},
    server::{
        localization::Localizer,
        mediator::Request,
        response::Response,
        validation::{Validate, ValidationResult, Validator},
    },
};

#[derive(Debug, Clone)]
pub struct SignInCommand {
    pub user_name: String,
    pub password: String,
}

impl From<SignInDto> for SignInCommand {
    fn from(dto: SignInDto) -> Self {
        Self {
            user_name: dto.user_name,
            password: dto.password,
        }
    }
}

impl Request for SignInCommand {
    type Response = Response<JwtAuthResultDto>;
}

impl Validate for SignInCommand {
    fn validate(&self, localizer: &Localizer) -> ValidationResult {
        let mut validator = Validator::new(localizer);
        validator.text("UserName", &self.user_name).not_empty();
        validator.text("Password", &self.password).not_empty();
        validator.finish()
    }
}
