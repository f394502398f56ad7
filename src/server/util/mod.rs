//! Small extractors shared by the controllers.

pub mod body;
pub mod params;
