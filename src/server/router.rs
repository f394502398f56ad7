use axum::{
    routing::{get, post, put},
    Router,
};
use utoipa::{
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
    Modify, OpenApi,
};

use crate::server::{
    controller::{authentication, authorization, department, instructor, student, subject, user},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/authentication/sign-in",
            post(authentication::sign_in),
        )
        .route(
            "/api/authorization",
            get(authorization::get_roles)
                .post(authorization::add_role)
                .put(authorization::edit_role),
        )
        .route(
            "/api/authorization/{id}",
            get(authorization::get_role).delete(authorization::delete_role),
        )
        .route(
            "/api/department",
            get(department::get_departments)
                .post(department::add_department)
                .put(department::edit_department),
        )
        .route(
            "/api/department/{id}",
            get(department::get_department).delete(department::delete_department),
        )
        .route(
            "/api/department/{id}/subjects",
            post(department::assign_subject),
        )
        .route(
            "/api/student",
            get(student::get_students)
                .post(student::add_student)
                .put(student::edit_student),
        )
        .route("/api/student/paginated", get(student::get_students_paginated))
        .route(
            "/api/student/{id}",
            get(student::get_student).delete(student::delete_student),
        )
        .route("/api/student/{id}/subjects", post(student::enroll_student))
        .route(
            "/api/instructor",
            get(instructor::get_instructors).post(instructor::add_instructor),
        )
        .route("/api/instructor/{id}", get(instructor::get_instructor))
        .route(
            "/api/instructor/{id}/subjects",
            post(instructor::assign_subject),
        )
        .route(
            "/api/subject",
            get(subject::get_subjects).post(subject::add_subject),
        )
        .route("/api/subject/{id}", get(subject::get_subject))
        .route(
            "/api/user",
            get(user::get_users)
                .post(user::register_user)
                .put(user::edit_user),
        )
        .route("/api/user/change-password", put(user::change_password))
        .route(
            "/api/user/{id}",
            get(user::get_user).delete(user::delete_user),
        )
}

/// Registers the bearer token scheme referenced by protected endpoints.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "Bearer",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}

/// OpenAPI document served by Swagger UI.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "School API",
        description = "Students, departments, instructors, subjects, roles and users."
    ),
    paths(
        authentication::sign_in,
        authorization::add_role,
        authorization::edit_role,
        authorization::delete_role,
        authorization::get_roles,
        authorization::get_role,
        department::get_departments,
        department::get_department,
        department::add_department,
        department::edit_department,
        department::delete_department,
        department::assign_subject,
        student::get_students,
        student::get_students_paginated,
        student::get_student,
        student::add_student,
        student::edit_student,
        student::delete_student,
        student::enroll_student,
        instructor::get_instructors,
        instructor::get_instructor,
        instructor::add_instructor,
        instructor::assign_subject,
        subject::get_subjects,
        subject::get_subject,
        subject::add_subject,
        user::register_user,
        user::edit_user,
        user::delete_user,
        user::change_password,
        user::get_users,
        user::get_user,
    ),
    tags(
        (name = "authentication", description = "Sign in"),
        (name = "authorization", description = "Role management, admins only"),
        (name = "department", description = "Departments"),
        (name = "student", description = "Students and enrollments"),
        (name = "instructor", description = "Instructors"),
        (name = "subject", description = "Subjects"),
        (name = "user", description = "Application users")
    )
)]
pub struct ApiDoc;
