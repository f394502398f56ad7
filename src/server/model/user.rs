//! Application user models and the user management commands.

use chrono::{DateTime, Utc};

use crate::{
    model::{
        api::PaginatedDto,
        auth::JwtAuthResultDto,
        user::{ChangePasswordDto, EditUserDto, RegisterUserDto, UserDto},
    },
    server::{
        localization::{Localizer, MessageKey},
        mediator::Request,
        model::PageRequest,
        response::Response,
        validation::{Validate, ValidationResult, Validator},
    },
};

pub const NAME_MAX_LENGTH: usize = 100;
pub const EMAIL_MAX_LENGTH: usize = 256;

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub full_name: String,
    pub user_name: String,
    pub email: String,
    pub address: Option<String>,
    pub country: Option<String>,
    pub phone_number: Option<String>,
    pub roles: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn from_entity(entity: entity::user::Model, roles: Vec<String>) -> Self {
        Self {
            id: entity.id,
            full_name: entity.full_name,
            user_name: entity.user_name,
            email: entity.email,
            address: entity.address,
            country: entity.country,
            phone_number: entity.phone_number,
            roles,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            full_name: self.full_name,
            user_name: self.user_name,
            email: self.email,
            address: self.address,
            country: self.country,
            phone_number: self.phone_number,
            roles: self.roles,
            created_at: self.created_at,
        }
    }
}

/// Profile fields of a new user. The password travels separately.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub full_name: String,
    pub user_name: String,
    pub email: String,
    pub address: Option<String>,
    pub country: Option<String>,
    pub phone_number: Option<String>,
}

#[derive(Debug, Clone)]
pub struct UpdateUserParams {
    pub id: i32,
    pub full_name: String,
    pub user_name: String,
    pub email: String,
    pub address: Option<String>,
    pub country: Option<String>,
    pub phone_number: Option<String>,
}

fn validate_profile(validator: &mut Validator<'_>, full_name: &str, user_name: &str, email: &str) {
    validator
        .text("FullName", full_name)
        .not_empty()
        .max_length(NAME_MAX_LENGTH);
    validator
        .text("UserName", user_name)
        .not_empty()
        .max_length(NAME_MAX_LENGTH);
    validator
        .text("Email", email)
        .not_empty()
        .max_length(EMAIL_MAX_LENGTH)
        .email();
}

#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    pub full_name: String,
    pub user_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub address: Option<String>,
    pub country: Option<String>,
    pub phone_number: Option<String>,
}

impl From<RegisterUserDto> for RegisterUserCommand {
    fn from(dto: RegisterUserDto) -> Self {
        Self {
            full_name: dto.full_name,
            user_name: dto.user_name,
            email: dto.email,
            password: dto.password,
            confirm_password: dto.confirm_password,
            address: dto.address,
            country: dto.country,
            phone_number: dto.phone_number,
        }
    }
}

impl RegisterUserCommand {
    /// Splits the command into profile fields and the password.
    pub fn into_params(self) -> (CreateUserParams, String) {
        (
            CreateUserParams {
                full_name: self.full_name.trim().to_string(),
                user_name: self.user_name.trim().to_string(),
                email: self.email.trim().to_string(),
                address: self.address,
                country: self.country,
                phone_number: self.phone_number,
            },
            self.password,
        )
    }
}

impl Request for RegisterUserCommand {
    type Response = Response<JwtAuthResultDto>;
}

impl Validate for RegisterUserCommand {
    fn validate(&self, localizer: &Localizer) -> ValidationResult {
        let mut validator = Validator::new(localizer);
        validate_profile(&mut validator, &self.full_name, &self.user_name, &self.email);
        validator.text("Password", &self.password).not_empty();
        validator
            .text("ConfirmPassword", &self.confirm_password)
            .equals(&self.password, MessageKey::PasswordsDoNotMatch);
        validator.finish()
    }
}

#[derive(Debug, Clone)]
pub struct EditUserCommand {
    pub id: i32,
    pub full_name: String,
    pub user_name: String,
    pub email: String,
    pub address: Option<String>,
    pub country: Option<String>,
    pub phone_number: Option<String>,
}

impl From<EditUserDto> for EditUserCommand {
    fn from(dto: EditUserDto) -> Self {
        Self {
            id: dto.id,
            full_name: dto.full_name,
            user_name: dto.user_name,
            email: dto.email,
            address: dto.address,
            country: dto.country,
            phone_number: dto.phone_number,
        }
    }
}

impl EditUserCommand {
    pub fn into_params(self) -> UpdateUserParams {
        UpdateUserParams {
            id: self.id,
            full_name: self.full_name.trim().to_string(),
            user_name: self.user_name.trim().to_string(),
            email: self.email.trim().to_string(),
            address: self.address,
            country: self.country,
            phone_number: self.phone_number,
        }
    }
}

impl Request for EditUserCommand {
    type Response = Response<UserDto>;
}

impl Validate for EditUserCommand {
    fn validate(&self, localizer: &Localizer) -> ValidationResult {
        let mut validator = Validator::new(localizer);
        validator.number("Id", self.id).positive();
        validate_profile(&mut validator, &self.full_name, &self.user_name, &self.email);
        validator.finish()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DeleteUserCommand {
    pub id: i32,
}

impl Request for DeleteUserCommand {
    type Response = Response<i32>;
}

#[derive(Debug, Clone)]
pub struct ChangeUserPasswordCommand {
    pub id: i32,
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl From<ChangePasswordDto> for ChangeUserPasswordCommand {
    fn from(dto: ChangePasswordDto) -> Self {
        Self {
            id: dto.id,
            current_password: dto.current_password,
            new_password: dto.new_password,
            confirm_password: dto.confirm_password,
        }
    }
}

impl Request for ChangeUserPasswordCommand {
    type Response = Response<i32>;
}

impl Validate for ChangeUserPasswordCommand {
    fn validate(&self, localizer: &Localizer) -> ValidationResult {
        let mut validator = Validator::new(localizer);
        validator.number("Id", self.id).positive();
        validator.text("CurrentPassword", &self.current_password).not_empty();
        validator.text("NewPassword", &self.new_password).not_empty();
        validator
            .text("ConfirmPassword", &self.confirm_password)
            .equals(&self.new_password, MessageKey::PasswordsDoNotMatch);
        validator.finish()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GetUserListQuery {
    pub page: PageRequest,
}

impl Request for GetUserListQuery {
    type Response = Response<PaginatedDto<UserDto>>;
}

#[derive(Debug, Clone, Copy)]
pub struct GetUserByIdQuery {
    pub id: i32,
}

impl Request for GetUserByIdQuery {
    type Response = Response<UserDto>;
}
