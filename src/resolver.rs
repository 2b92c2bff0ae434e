//! Recursive dependency-graph construction against a [Registry] and an
//! optional active [Scope].

use crate::component::Component;
use crate::error::ResolveError;
use crate::instance::{Dependencies, InstanceAnyPtr, InstancePtr, TypeKey};
use crate::registry::{Lifetime, Registry};
use crate::scope::Scope;
use itertools::Itertools;
use tracing::trace;

/// Produces instances on demand by walking a binding's dependencies
/// depth-first and applying its lifetime policy. Holds no state of its own -
/// all caching lives on bindings and scopes, so singletons created through
/// one resolver are visible to every later resolver sharing the registry.
pub struct Resolver<'a> {
    registry: &'a mut Registry,
    scope: Option<&'a mut Scope>,
}

impl<'a> Resolver<'a> {
    /// Creates a resolver without an active scope; resolving any scoped
    /// binding through it fails with [ResolveError::NoActiveScope].
    pub fn new(registry: &'a mut Registry) -> Self {
        Self {
            registry,
            scope: None,
        }
    }

    /// Creates a resolver bound to an active scope.
    pub fn with_scope(registry: &'a mut Registry, scope: &'a mut Scope) -> Self {
        Self {
            registry,
            scope: Some(scope),
        }
    }

    /// Resolves an instance of `T`, downcast from the type-erased result of
    /// [Resolver::resolve_any].
    pub fn resolve<T: Component>(&mut self) -> Result<InstancePtr<T>, ResolveError> {
        let key = TypeKey::of::<T>();
        self.resolve_any(key)?
            .downcast()
            .map_err(|_| ResolveError::TypeMismatch(key))
    }

    /// Resolves a type-erased instance for `key`, recursively constructing
    /// the full dependency graph depth-first, in declaration order.
    ///
    /// Dependencies are resolved before the lifetime decision is applied; a
    /// cached singleton or scoped instance therefore discards the freshly
    /// resolved dependencies rather than re-injecting them. There is no cycle
    /// guard - a cyclic graph exhausts the stack.
    pub fn resolve_any(&mut self, key: TypeKey) -> Result<InstanceAnyPtr, ResolveError> {
        let (lifetime, dependencies, constructor) = {
            let binding = self.registry.lookup(key)?;
            (
                binding.lifetime,
                binding.dependencies.clone(),
                binding.constructor,
            )
        };

        trace!("Resolving {} as {:?}", key, lifetime);

        let mut resolved: Dependencies = dependencies
            .iter()
            .map(|dependency| self.resolve_any(*dependency))
            .try_collect()?;

        match lifetime {
            Lifetime::Singleton => {
                if let Some(instance) = self.registry.cached_instance(key) {
                    trace!("Reusing cached singleton for {}", key);
                    return Ok(instance);
                }

                let instance = (constructor)(&mut resolved)?;
                self.registry.store_cached_instance(key, instance.clone());
                Ok(instance)
            }
            Lifetime::Scoped => {
                let scope = self
                    .scope
                    .as_deref_mut()
                    .ok_or(ResolveError::NoActiveScope(key))?;

                scope.get_or_create(key, move || {
                    let mut dependencies = resolved;
                    (constructor)(&mut dependencies)
                })
            }
            Lifetime::Transient => (constructor)(&mut resolved),
        }
    }
}
