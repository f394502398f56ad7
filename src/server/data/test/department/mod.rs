use crate::server::{
    data::department::DepartmentRepository,
    model::{
        department::{CreateDepartmentParams, UpdateDepartmentParams},
        PageRequest,
    },
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod assign_subject;
mod create;
mod delete;
mod get_detail;
mod get_paginated;
mod name_en_exists;
mod update;
