use crate::server::{
    localization::{Locale, Localizer},
    response::ResponseHandler,
};

/// Per-request values a handler needs besides its request object.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestContext {
    pub locale: Locale,
}

impl RequestContext {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn localizer(&self) -> Localizer {
        Localizer::new(self.locale)
    }

    pub fn responses(&self) -> ResponseHandler {
        ResponseHandler::new(self.localizer())
    }
}
