//! Scoped instance caches. A [Scope] is created by
//! [Registry::create_scope](crate::registry::Registry::create_scope), handed
//! to a [Resolver](crate::resolver::Resolver) and released explicitly by its
//! owner. Scopes are siblings of the registry: releasing one clears its own
//! cache and nothing else - instances themselves are not finalized.
//!
//! Note: scope resolution happens at instantiation time, which can lead to
//! unexpected lifetimes when policies are mixed, e.g. a singleton depending
//! on a transient keeps that one transient instance alive as long as the
//! singleton lives.

use crate::error::ResolveError;
use crate::instance::{InstanceAnyPtr, TypeKey};
use fxhash::FxHashMap;
use std::any::TypeId;
use tracing::debug;

/// A bounded-lifetime cache of instances, independent of any other scope.
#[derive(Default)]
pub struct Scope {
    instances: FxHashMap<TypeId, InstanceAnyPtr>,
    released: bool,
}

impl Scope {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Returns the instance cached for `key`, constructing and storing it via
    /// `factory` on first request. A given scope returns the same instance
    /// for the same type for its whole lifetime.
    pub fn get_or_create<F>(&mut self, key: TypeKey, factory: F) -> Result<InstanceAnyPtr, ResolveError>
    where
        F: FnOnce() -> Result<InstanceAnyPtr, ResolveError>,
    {
        if self.released {
            return Err(ResolveError::ScopeReleased(key));
        }

        if let Some(instance) = self.instances.get(&key.id) {
            return Ok(instance.clone());
        }

        let instance = factory()?;
        self.instances.insert(key.id, instance.clone());
        Ok(instance)
    }

    /// Clears all scoped instances and marks the scope as released.
    /// Idempotent; any later resolution through this scope fails with
    /// [ResolveError::ScopeReleased].
    pub fn release(&mut self) {
        if !self.released {
            debug!("Releasing scope with {} instances", self.instances.len());
        }

        self.instances.clear();
        self.released = true;
    }

    pub fn is_released(&self) -> bool {
        self.released
    }
}

// dropping a scope releases it, so instances are let go on every exit path
impl Drop for Scope {
    fn drop(&mut self) {
        self.release();
    }
}
