use crate::server::{
    data::user::UserRepository,
    model::{user::CreateUserParams, PageRequest},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_paginated;

fn params(user_name: &str, email: &str) -> CreateUserParams {
    CreateUserParams {
        full_name: "Test User".to_string(),
        user_name: user_name.to_string(),
        email: email.to_string(),
        address: None,
        country: None,
        phone_number: None,
    }
}
