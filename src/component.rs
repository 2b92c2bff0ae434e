//! The registration contract for injectable types. A [Component] declares its
//! ordered constructor dependencies and how to build one instance from their
//! resolved values; the container captures both at registration time, so no
//! runtime type introspection is needed.
//!
//! ```
//! use wirebox::component::Component;
//! use wirebox::instance::{Dependencies, InstancePtr, TypeKey};
//! use wirebox::ResolveError;
//!
//! struct Greeter;
//!
//! impl Component for Greeter {
//!     fn construct(_dependencies: &mut Dependencies) -> Result<Self, ResolveError> {
//!         Ok(Greeter)
//!     }
//! }
//!
//! struct GreetingService {
//!     greeter: InstancePtr<Greeter>,
//! }
//!
//! impl Component for GreetingService {
//!     fn dependencies() -> Vec<TypeKey> {
//!         vec![TypeKey::of::<Greeter>()]
//!     }
//!
//!     fn construct(dependencies: &mut Dependencies) -> Result<Self, ResolveError> {
//!         Ok(Self {
//!             greeter: dependencies.take()?,
//!         })
//!     }
//! }
//! ```

use crate::error::ResolveError;
use crate::instance::{Dependencies, TypeKey};

/// Base trait for types managed by the container.
///
/// Exactly one construction path exists per component: [Component::construct]
/// applied to the dependencies listed by [Component::dependencies], resolved
/// in declaration order. Instances are handed out wrapped in
/// [InstancePtr](crate::instance::InstancePtr).
pub trait Component: Send + Sync + 'static {
    /// Ordered list of constructor dependencies. Defaults to none, which is
    /// where recursive resolution terminates.
    fn dependencies() -> Vec<TypeKey> {
        Vec::new()
    }

    /// Builds one instance from fully resolved dependencies, consumed
    /// positionally in the order given by [Component::dependencies].
    fn construct(dependencies: &mut Dependencies) -> Result<Self, ResolveError>
    where
        Self: Sized;
}
