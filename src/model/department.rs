use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::{api::PaginatedDto, subject::SubjectDto};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentDto {
    pub id: i32,
    pub name: String,
    pub manager_id: i32,
    pub manager_name: Option<String>,
}

/// Department with its manager, subjects, instructors and one page of students.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentDetailDto {
    pub id: i32,
    pub name: String,
    pub manager_id: i32,
    pub manager_name: Option<String>,
    pub subjects: Vec<SubjectDto>,
    pub instructors: Vec<DepartmentMemberDto>,
    pub students: PaginatedDto<DepartmentMemberDto>,
}

/// Id and localized name of an instructor or student listed under a department.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentMemberDto {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddDepartmentDto {
    #[serde(default)]
    pub name_ar: String,
    #[serde(default)]
    pub name_en: String,
    pub manager_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EditDepartmentDto {
    pub id: i32,
    #[serde(default)]
    pub name_ar: String,
    #[serde(default)]
    pub name_en: String,
    pub manager_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignSubjectDto {
    pub subject_id: i32,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct DepartmentDetailQueryDto {
    /// 1-based page of the department's students, defaults to 1.
    pub student_page_number: Option<u64>,
    /// Students per page, defaults to 10 and capped at 100.
    pub student_page_size: Option<u64>,
}
