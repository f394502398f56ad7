use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InstructorDto {
    pub id: i32,
    pub name: String,
    pub address: Option<String>,
    pub position: Option<String>,
    pub salary: Option<f64>,
    pub department_id: Option<i32>,
    pub department_name: Option<String>,
    pub supervisor_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddInstructorDto {
    #[serde(default)]
    pub name_ar: String,
    #[serde(default)]
    pub name_en: String,
    pub address: Option<String>,
    pub position: Option<String>,
    pub salary: Option<f64>,
    pub department_id: Option<i32>,
    pub supervisor_id: Option<i32>,
}
