use crate::server::{
    data::student::StudentRepository,
    model::{
        student::{CreateStudentParams, StudentFilter, UpdateStudentParams},
        PageRequest,
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod enroll;
mod get_by_id;
mod get_paginated;
mod name_en_exists;
mod update;
