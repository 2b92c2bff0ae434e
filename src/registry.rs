//! Functionality related to registering type bindings. A [Registry] owns an
//! insertion-ordered list of [Binding]s; a
//! [Resolver](crate::resolver::Resolver) creates instances based on them.

use crate::component::Component;
use crate::error::ResolveError;
use crate::instance::{ConstructorFunction, Dependencies, InstanceAnyPtr, InstancePtr, TypeKey};
use crate::scope::Scope;
use derivative::Derivative;
use itertools::Itertools;
use tracing::debug;

/// Instance reuse policy attached to a binding.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Lifetime {
    /// One instance per registry, created on first resolution and cached on
    /// the binding for the registry's whole lifetime.
    Singleton,
    /// A fresh instance on every resolution, never cached.
    Transient,
    /// One instance per active [Scope].
    Scoped,
}

/// Registration information for a [Binding]: the identity of the target type,
/// its ordered dependency list and its type-erased constructor.
#[derive(Derivative, Clone)]
#[derivative(Debug)]
pub struct BindingMetadata {
    pub key: TypeKey,
    pub dependencies: Vec<TypeKey>,

    #[derivative(Debug = "ignore")]
    pub constructor: ConstructorFunction,
}

impl BindingMetadata {
    /// Captures the registration contract of `T` as type-erased metadata.
    pub fn of<T: Component>() -> Self {
        Self {
            key: TypeKey::of::<T>(),
            dependencies: T::dependencies(),
            constructor: erased_constructor::<T>,
        }
    }
}

fn erased_constructor<T: Component>(
    dependencies: &mut Dependencies,
) -> Result<InstanceAnyPtr, ResolveError> {
    T::construct(dependencies).map(|instance| InstancePtr::new(instance) as InstanceAnyPtr)
}

/// A registered type: lifetime policy plus the construction contract captured
/// at registration time. Singleton bindings exclusively own their cached
/// instance slot.
#[derive(Derivative, Clone)]
#[derivative(Debug)]
pub struct Binding {
    pub key: TypeKey,
    pub lifetime: Lifetime,
    pub dependencies: Vec<TypeKey>,

    #[derivative(Debug = "ignore")]
    pub(crate) constructor: ConstructorFunction,

    #[derivative(Debug = "ignore")]
    pub(crate) cached: Option<InstanceAnyPtr>,
}

impl Binding {
    /// Whether the singleton slot has been populated.
    pub fn is_instantiated(&self) -> bool {
        self.cached.is_some()
    }
}

/// Insertion-ordered list of [Binding]s with linear-scan lookup by type
/// identity.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    bindings: Vec<Binding>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `T` under the given lifetime. Registration itself is
    /// unchecked; a duplicate binding for the same type is rejected at lookup
    /// as an ambiguous constructor.
    pub fn register<T: Component>(&mut self, lifetime: Lifetime) {
        self.register_binding(BindingMetadata::of::<T>(), lifetime);
    }

    /// Registers a manually assembled binding.
    pub fn register_binding(&mut self, metadata: BindingMetadata, lifetime: Lifetime) {
        debug!("Registering {:?} binding for {}", lifetime, metadata.key);

        self.bindings.push(Binding {
            key: metadata.key,
            lifetime,
            dependencies: metadata.dependencies,
            constructor: metadata.constructor,
            cached: None,
        });
    }

    /// Finds the binding for `key`. Zero matches is a lookup miss; more than
    /// one means the type has no unambiguous constructor.
    pub fn lookup(&self, key: TypeKey) -> Result<&Binding, ResolveError> {
        let mut matches = self
            .bindings
            .iter()
            .filter(|binding| binding.key.id == key.id);

        match (matches.next(), matches.next()) {
            (None, _) => Err(ResolveError::NotRegistered(key)),
            (Some(binding), None) => Ok(binding),
            (Some(_), Some(_)) => Err(ResolveError::MultipleConstructors {
                key,
                count: self
                    .bindings
                    .iter()
                    .filter(|binding| binding.key.id == key.id)
                    .count(),
            }),
        }
    }

    /// Immutable snapshot of all bindings, in registration order.
    pub fn bindings(&self) -> Vec<Binding> {
        self.bindings.iter().cloned().collect_vec()
    }

    /// Creates a new, empty [Scope], independent of any other scope.
    pub fn create_scope(&self) -> Scope {
        Scope::new()
    }

    pub(crate) fn cached_instance(&self, key: TypeKey) -> Option<InstanceAnyPtr> {
        self.bindings
            .iter()
            .find(|binding| binding.key.id == key.id)
            .and_then(|binding| binding.cached.clone())
    }

    pub(crate) fn store_cached_instance(&mut self, key: TypeKey, instance: InstanceAnyPtr) {
        if let Some(binding) = self
            .bindings
            .iter_mut()
            .find(|binding| binding.key.id == key.id)
        {
            binding.cached = Some(instance);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::component::Component;
    use crate::error::ResolveError;
    use crate::instance::{Dependencies, InstanceAnyPtr, InstancePtr, TypeKey};
    use crate::registry::{BindingMetadata, Lifetime, Registry};

    struct TestComponent;

    impl Component for TestComponent {
        fn construct(_dependencies: &mut Dependencies) -> Result<Self, ResolveError> {
            Ok(TestComponent)
        }
    }

    struct OtherComponent;

    impl Component for OtherComponent {
        fn construct(_dependencies: &mut Dependencies) -> Result<Self, ResolveError> {
            Ok(OtherComponent)
        }
    }

    #[test]
    fn should_register_and_look_up_binding() {
        let mut registry = Registry::new();
        registry.register::<TestComponent>(Lifetime::Singleton);

        let binding = registry.lookup(TypeKey::of::<TestComponent>()).unwrap();
        assert_eq!(binding.key, TypeKey::of::<TestComponent>());
        assert_eq!(binding.lifetime, Lifetime::Singleton);
        assert!(binding.dependencies.is_empty());
        assert!(!binding.is_instantiated());
    }

    #[test]
    fn should_fail_lookup_for_unregistered_type() {
        let registry = Registry::new();

        assert_eq!(
            registry.lookup(TypeKey::of::<TestComponent>()).unwrap_err(),
            ResolveError::NotRegistered(TypeKey::of::<TestComponent>())
        );
    }

    #[test]
    fn should_reject_ambiguous_lookup_for_duplicate_binding() {
        let mut registry = Registry::new();
        registry.register::<TestComponent>(Lifetime::Singleton);
        registry.register::<TestComponent>(Lifetime::Transient);

        assert_eq!(
            registry.lookup(TypeKey::of::<TestComponent>()).unwrap_err(),
            ResolveError::MultipleConstructors {
                key: TypeKey::of::<TestComponent>(),
                count: 2,
            }
        );
    }

    #[test]
    fn should_snapshot_bindings_in_registration_order() {
        let mut registry = Registry::new();
        registry.register::<TestComponent>(Lifetime::Singleton);
        registry.register::<OtherComponent>(Lifetime::Transient);

        let bindings = registry.bindings();
        assert_eq!(bindings.len(), 2);
        assert_eq!(bindings[0].key, TypeKey::of::<TestComponent>());
        assert_eq!(bindings[1].key, TypeKey::of::<OtherComponent>());
    }

    #[test]
    fn should_register_manual_binding() {
        fn constructor(
            _dependencies: &mut Dependencies,
        ) -> Result<InstanceAnyPtr, ResolveError> {
            Ok(InstancePtr::new(0_i8) as InstanceAnyPtr)
        }

        let mut registry = Registry::new();
        registry.register_binding(
            BindingMetadata {
                key: TypeKey::of::<i8>(),
                dependencies: vec![],
                constructor,
            },
            Lifetime::Transient,
        );

        assert!(registry.lookup(TypeKey::of::<i8>()).is_ok());
    }

    #[test]
    fn should_create_independent_scopes() {
        let registry = Registry::new();
        let mut first = registry.create_scope();
        let second = registry.create_scope();

        first.release();
        assert!(first.is_released());
        assert!(!second.is_released());
    }
}
