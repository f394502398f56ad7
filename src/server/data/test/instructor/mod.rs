use crate::server::{data::instructor::InstructorRepository, model::instructor::CreateInstructorParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod assign_subject;
mod create;
