//! Type-keyed request dispatch.
//!
//! # Design
//! The registry maps a request's `TypeId` to its one handler. It is
//! assembled by `MediatorBuilder` at startup and never mutated afterwards, so
//! `Mediator` is `Send + Sync` without locks. Duplicate registrations are
//! reported by `build`; unregistered request types are reported by
//! `dispatch` before anything is validated or sent.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::handler::Handler;
use crate::request::Request;

/// Type-erased slot holding an `Arc<dyn Handler<R>>` for some `R`.
type Slot = Box<dyn Any + Send + Sync>;

struct Entry {
    name: &'static str,
    handler: Slot,
}

/// Immutable dispatch table from request type to handler.
pub struct Mediator {
    handlers: HashMap<TypeId, Entry>,
}

impl fmt::Debug for Mediator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.handlers.values().map(|entry| entry.name).collect();
        names.sort_unstable();
        f.debug_struct("Mediator").field("handlers", &names).finish()
    }
}

impl Mediator {
    pub fn builder() -> MediatorBuilder {
        MediatorBuilder::default()
    }

    /// Run `request` through its registered handler and return the result
    /// unchanged.
    pub fn dispatch<R: Request>(&self, request: R) -> Result<R::Output> {
        let handler = self
            .handlers
            .get(&TypeId::of::<R>())
            .and_then(|entry| entry.handler.downcast_ref::<Arc<dyn Handler<R>>>())
            .ok_or(Error::NoHandlerFound { request: R::NAME })?;
        request.validate()?;
        tracing::debug!(request = R::NAME, "dispatching request");
        handler.handle(request)
    }

    pub fn handles<R: Request>(&self) -> bool {
        self.handlers.contains_key(&TypeId::of::<R>())
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

/// Collects handler registrations; `build` rejects duplicates.
#[derive(Default)]
pub struct MediatorBuilder {
    handlers: HashMap<TypeId, Entry>,
    duplicate: Option<&'static str>,
}

impl MediatorBuilder {
    pub fn register<R, H>(mut self, handler: H) -> Self
    where
        R: Request,
        H: Handler<R> + 'static,
    {
        let slot: Arc<dyn Handler<R>> = Arc::new(handler);
        let entry = Entry {
            name: R::NAME,
            handler: Box::new(slot),
        };
        if self.handlers.insert(TypeId::of::<R>(), entry).is_some() {
            self.duplicate.get_or_insert(R::NAME);
        }
        self
    }

    pub fn build(self) -> Result<Mediator> {
        if let Some(request) = self.duplicate {
            return Err(Error::DuplicateHandler { request });
        }
        Ok(Mediator {
            handlers: self.handlers,
        })
    }
}
