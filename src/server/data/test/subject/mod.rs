use crate::server::{data::subject::SubjectRepository, model::subject::CreateSubjectParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
