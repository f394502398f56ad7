//! Domain models, repository parameters, and the commands and queries
//! dispatched through the mediator.
//!
//! Repositories convert entity rows into these models at the data boundary;
//! handlers convert them into wire DTOs with the request's culture.

pub mod auth;
pub mod department;
pub mod instructor;
pub mod role;
pub mod student;
pub mod subject;
pub mod user;

use crate::{model::api::PaginatedDto, server::localization::Locale};

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Largest page size a caller may request.
pub const MAX_PAGE_SIZE: u64 = 100;

/// Id and both names of a related record.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalizedRef {
    pub id: i32,
    pub name_ar: String,
    pub name_en: String,
}

impl LocalizedRef {
    pub fn name(&self, locale: Locale) -> String {
        locale.localize(&self.name_ar, &self.name_en).to_string()
    }
}

impl From<entity::department::Model> for LocalizedRef {
    fn from(model: entity::department::Model) -> Self {
        Self {
            id: model.id,
            name_ar: model.name_ar,
            name_en: model.name_en,
        }
    }
}

impl From<entity::instructor::Model> for LocalizedRef {
    fn from(model: entity::instructor::Model) -> Self {
        Self {
            id: model.id,
            name_ar: model.name_ar,
            name_en: model.name_en,
        }
    }
}

impl From<entity::student::Model> for LocalizedRef {
    fn from(model: entity::student::Model) -> Self {
        Self {
            id: model.id,
            name_ar: model.name_ar,
            name_en: model.name_en,
        }
    }
}

/// 1-based page request. Zero values are raised to one.
///
/// The page size is capped at [`MAX_PAGE_SIZE`] and the page number is capped
/// so the row offset still fits in a signed 64-bit SQL parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub page_size: u64,
}

impl PageRequest {
    pub fn new(page: Option<u64>, page_size: Option<u64>) -> Self {
        let page_size = page_size
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE);
        let last_page = i64::MAX as u64 / page_size;

        Self {
            page: page.unwrap_or(1).clamp(1, last_page),
            page_size,
        }
    }

    /// Zero-based page index as expected by SeaORM's paginator.
    pub fn index(&self) -> u64 {
        self.page - 1
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// One page of domain models plus the total row count.
#[derive(Debug, Clone, PartialEq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub request: PageRequest,
}

impl<T> Paginated<T> {
    pub fn total_pages(&self) -> u64 {
        self.total.div_ceil(self.request.page_size)
    }

    pub fn into_dto<U>(self, f: impl FnMut(T) -> U) -> PaginatedDto<U> {
        let total_pages = self.total_pages();
        PaginatedDto {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total,
            current_page: self.request.page,
            page_size: self.request.page_size,
            total_pages,
            has_previous_page: self.request.page > 1,
            has_next_page: self.request.page < total_pages,
        }
    }
}
