use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentDto {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub department_id: Option<i32>,
    /// `null` when the student has no department.
    pub department_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddStudentDto {
    #[serde(default)]
    pub name_ar: String,
    #[serde(default)]
    pub name_en: String,
    #[serde(default)]
    pub address: String,
    pub phone: Option<String>,
    pub department_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EditStudentDto {
    pub id: i32,
    #[serde(default)]
    pub name_ar: String,
    #[serde(default)]
    pub name_en: String,
    #[serde(default)]
    pub address: String,
    pub phone: Option<String>,
    pub department_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnrollStudentDto {
    pub subject_id: i32,
    pub grade: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentSubjectDto {
    pub student_id: i32,
    pub subject_id: i32,
    pub grade: Option<i32>,
}

/// Sort key of the paginated student list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum StudentOrdering {
    #[default]
    Id,
    Name,
    Address,
    DepartmentName,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct StudentPageQueryDto {
    /// 1-based page number, defaults to 1.
    pub page_number: Option<u64>,
    /// Rows per page, defaults to 10 and capped at 100.
    pub page_size: Option<u64>,
    pub order_by: Option<StudentOrdering>,
    /// Matches either name or the address.
    pub search: Option<String>,
}
