//! Typed request dispatch.
//!
//! Every command or query type implements [`Request`] and has exactly one
//! [`Handler`] registered with the [`Mediator`]. Registration happens once at
//! startup through [`MediatorBuilder`], which rejects duplicates; dispatching a
//! type with no handler is a [`DispatchError::MissingHandler`].
//!
//! The mediator holds no business logic. The handler future is awaited inline,
//! so dropping the caller's future (client disconnect, timeout) cancels the
//! handler and its pending database call with it.

mod context;

pub use context::RequestContext;

use std::{
    any::{type_name, Any, TypeId},
    collections::HashMap,
    sync::Arc,
};

use async_trait::async_trait;
use thiserror::Error;

use crate::server::error::AppError;

/// A command or query dispatched through the mediator.
pub trait Request: Send + 'static {
    /// What the handler produces, normally a response envelope.
    type Response: Send + 'static;
}

/// Executes one request type.
#[async_trait]
pub trait Handler<R: Request>: Send + Sync + 'static {
    async fn handle(&self, request: R, ctx: &RequestContext) -> Result<R::Response, AppError>;
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DispatchError {
    /// No handler registered for the request type.
    #[error("No handler registered for {0}")]
    MissingHandler(&'static str),

    /// A second handler was registered for the same request type.
    #[error("Handler for {0} registered more than once")]
    DuplicateHandler(&'static str),
}

/// Type-erased `Arc<dyn Handler<R>>`.
struct Registration {
    handler: Box<dyn Any + Send + Sync>,
}

/// Routes each request to its registered handler.
#[derive(Clone)]
pub struct Mediator {
    handlers: Arc<HashMap<TypeId, Registration>>,
}

impl Mediator {
    pub fn builder() -> MediatorBuilder {
        MediatorBuilder::default()
    }

    /// Dispatches `request` to its handler and awaits the result.
    pub async fn send<R: Request>(
        &self,
        request: R,
        ctx: &RequestContext,
    ) -> Result<R::Response, AppError> {
        let handler = self.handler::<R>()?;

        tracing::debug!(request = type_name::<R>(), locale = %ctx.locale, "Dispatching request");

        handler.handle(request, ctx).await
    }

    pub fn is_registered<R: Request>(&self) -> bool {
        self.handler::<R>().is_ok()
    }

    fn handler<R: Request>(&self) -> Result<Arc<dyn Handler<R>>, DispatchError> {
        self.handlers
            .get(&TypeId::of::<R>())
            .and_then(|registration| registration.handler.downcast_ref::<Arc<dyn Handler<R>>>())
            .cloned()
            .ok_or(DispatchError::MissingHandler(type_name::<R>()))
    }
}

/// Startup-time registration table.
#[derive(Default)]
pub struct MediatorBuilder {
    handlers: HashMap<TypeId, Registration>,
}

impl MediatorBuilder {
    /// Registers `handler` as the only handler of `R`.
    ///
    /// # Returns
    /// - `Ok(Self)` - Builder for further registrations
    /// - `Err(DispatchError::DuplicateHandler)` - `R` already has a handler
    pub fn register<R, H>(mut self, handler: H) -> Result<Self, DispatchError>
    where
        R: Request,
        H: Handler<R>,
    {
        let key = TypeId::of::<R>();
        if self.handlers.contains_key(&key) {
            return Err(DispatchError::DuplicateHandler(type_name::<R>()));
        }

        let handler: Arc<dyn Handler<R>> = Arc::new(handler);
        self.handlers.insert(
            key,
            Registration {
                handler: Box::new(handler),
            },
        );

        Ok(self)
    }

    pub fn build(self) -> Mediator {
        tracing::debug!("Mediator built with {} handlers", self.handlers.len());
        Mediator {
            handlers: Arc::new(self.handlers),
        }
    }
}
