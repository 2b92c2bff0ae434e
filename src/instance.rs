//! Type-erased instance storage shared by the registry, scopes and the
//! resolver. Instances live behind [InstancePtr] and are stored in caches as
//! [InstanceAnyPtr], with checked downcasts at the typed API boundary.

use crate::error::ResolveError;
use std::any::{type_name, Any, TypeId};
use std::collections::VecDeque;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Pointer type in which resolved instances are wrapped and injected.
pub type InstancePtr<T> = Arc<T>;

/// Type-erased [InstancePtr] as stored in singleton and scope caches.
pub type InstanceAnyPtr = InstancePtr<dyn Any + Send + Sync>;

/// Type-erased constructor captured at registration time - builds one
/// instance from positionally resolved dependencies.
pub type ConstructorFunction = fn(&mut Dependencies) -> Result<InstanceAnyPtr, ResolveError>;

/// Identity of a registrable type - a [TypeId] paired with the type name, so
/// failures anywhere in a dependency graph can name the type they concern.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct TypeKey {
    pub id: TypeId,
    pub name: &'static str,
}

impl TypeKey {
    pub fn of<T: 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }
}

impl Display for TypeKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}

/// Resolved constructor dependencies for a single binding, in declaration
/// order. Constructors consume them positionally with [Dependencies::take].
#[derive(Default)]
pub struct Dependencies {
    instances: VecDeque<InstanceAnyPtr>,
}

impl Dependencies {
    pub fn new(instances: Vec<InstanceAnyPtr>) -> Self {
        Self {
            instances: instances.into(),
        }
    }

    /// Takes the next resolved dependency, downcast to its concrete type.
    /// Taking more dependencies than were declared, or under a type other
    /// than the declared one, is a contract violation and fails.
    pub fn take<T: Send + Sync + 'static>(&mut self) -> Result<InstancePtr<T>, ResolveError> {
        let key = TypeKey::of::<T>();
        let instance = self
            .instances
            .pop_front()
            .ok_or(ResolveError::MissingDependency(key))?;

        instance
            .downcast()
            .map_err(|_| ResolveError::TypeMismatch(key))
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

impl FromIterator<InstanceAnyPtr> for Dependencies {
    fn from_iter<I: IntoIterator<Item = InstanceAnyPtr>>(iter: I) -> Self {
        Self {
            instances: iter.into_iter().collect(),
        }
    }
}
