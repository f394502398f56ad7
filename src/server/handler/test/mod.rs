use sea_orm::DatabaseConnection;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    config::JwtSettings,
    error::AppError,
    handler::register_all,
    identity::JwtService,
    localization::Locale,
    mediator::{Mediator, RequestContext},
    response::ResponseStatus,
};

mod subject;

fn jwt() -> JwtService {
    JwtService::new(&JwtSettings {
        secret: "handler-test-secret".to_string(),
        issuer: "school-api".to_string(),
        audience: "school-api-clients".to_string(),
        access_token_minutes: 5,
    })
}

fn mediator(db: &DatabaseConnection) -> Mediator {
    register_all(Mediator::builder(), db, &jwt()).unwrap().build()
}

fn ctx() -> RequestContext {
    RequestContext::new(Locale::EnUs)
}
