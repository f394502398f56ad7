use crate::{
    model::role::{AddRoleDto, EditRoleDto, RoleDto},
    server::{
        localization::Localizer,
        mediator::Request,
        response::Response,
        validation::{Validate, ValidationResult, Validator},
    },
};

pub const NAME_MAX_LENGTH: usize = 100;

/// Role granted to every registered user.
pub const USER_ROLE: &str = "User";
/// Role required by the role management endpoints.
pub const ADMIN_ROLE: &str = "Admin";

#[derive(Debug, Clone, PartialEq)]
pub struct Role {
    pub id: i32,
    pub name: String,
}

impl Role {
    pub fn from_entity(entity: entity::role::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> RoleDto {
        RoleDto {
            id: self.id,
            name: self.name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AddRoleCommand {
    pub role_name: String,
}

impl From<AddRoleDto> for AddRoleCommand {
    fn from(dto: AddRoleDto) -> Self {
        Self {
            role_name: dto.role_name,
        }
    }
}

impl Request for AddRoleCommand {
    type Response = Response<RoleDto>;
}

impl Validate for AddRoleCommand {
    fn validate(&self, localizer: &Localizer) -> ValidationResult {
        let mut validator = Validator::new(localizer);
        validator
            .text("RoleName", &self.role_name)
            .not_empty()
            .max_length(NAME_MAX_LENGTH);
        validator.finish()
    }
}

#[derive(Debug, Clone)]
pub struct EditRoleCommand {
    pub id: i32,
    pub name: String,
}

impl From<EditRoleDto> for EditRoleCommand {
    fn from(dto: EditRoleDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
        }
    }
}

impl Request for EditRoleCommand {
    type Response = Response<RoleDto>;
}

impl Validate for EditRoleCommand {
    fn validate(&self, localizer: &Localizer) -> ValidationResult {
        let mut validator = Validator::new(localizer);
        validator.number("Id", self.id).positive();
        validator
            .text("Name", &self.name)
            .not_empty()
            .max_length(NAME_MAX_LENGTH);
        validator.finish()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DeleteRoleCommand {
    pub id: i32,
}

impl Request for DeleteRoleCommand {
    type Response = Response<i32>;
}

impl Validate for DeleteRoleCommand {
    fn validate(&self, localizer: &Localizer) -> ValidationResult {
        let mut validator = Validator::new(localizer);
        validator.number("Id", self.id).positive();
        validator.finish()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GetRoleListQuery;

impl Request for GetRoleListQuery {
    type Response = Response<Vec<RoleDto>>;
}

#[derive(Debug, Clone, Copy)]
pub struct GetRoleByIdQuery {
    pub id: i32,
}

impl Request for GetRoleByIdQuery {
    type Response = Response<RoleDto>;
}
