//! Minimal dependency injection container built around explicit bindings.
//!
//! A [Registry](registry::Registry) maps requested types to
//! [Lifetime](registry::Lifetime) policies, a [Scope](scope::Scope) caches
//! per-scope instances and a [Resolver](resolver::Resolver) walks constructor
//! dependencies recursively to produce fully wired instances:
//!
//! ```
//! use wirebox::component::Component;
//! use wirebox::instance::{Dependencies, InstancePtr, TypeKey};
//! use wirebox::registry::{Lifetime, Registry};
//! use wirebox::resolver::Resolver;
//! use wirebox::ResolveError;
//!
//! struct Database;
//!
//! impl Component for Database {
//!     fn construct(_dependencies: &mut Dependencies) -> Result<Self, ResolveError> {
//!         Ok(Database)
//!     }
//! }
//!
//! struct UserService {
//!     database: InstancePtr<Database>,
//! }
//!
//! impl Component for UserService {
//!     fn dependencies() -> Vec<TypeKey> {
//!         vec![TypeKey::of::<Database>()]
//!     }
//!
//!     fn construct(dependencies: &mut Dependencies) -> Result<Self, ResolveError> {
//!         Ok(Self {
//!             database: dependencies.take()?,
//!         })
//!     }
//! }
//!
//! # fn main() -> Result<(), ResolveError> {
//! let mut registry = Registry::new();
//! registry.register::<Database>(Lifetime::Singleton);
//! registry.register::<UserService>(Lifetime::Transient);
//!
//! let mut resolver = Resolver::new(&mut registry);
//! let service = resolver.resolve::<UserService>()?;
//! let database = resolver.resolve::<Database>()?;
//!
//! // the service received the shared singleton
//! assert!(InstancePtr::ptr_eq(&service.database, &database));
//! # Ok(())
//! # }
//! ```
//!
//! Resolution is synchronous and single-threaded; the container performs no
//! cycle detection, so a cyclic dependency graph exhausts the stack.

pub mod component;
pub mod error;
pub mod instance;
pub mod registry;
pub mod resolver;
pub mod scope;

pub use error::ResolveError;
