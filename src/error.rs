use crate::instance::TypeKey;
use thiserror::Error;

/// Errors surfaced while resolving component instances. All of them abort the
/// whole resolution attempt and propagate to the caller of
/// [Resolver::resolve](crate::resolver::Resolver::resolve).
#[derive(Error, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
pub enum ResolveError {
    #[error("no binding registered for type '{0}'")]
    NotRegistered(TypeKey),
    #[error("{count} constructor candidates registered for type '{key}'")]
    MultipleConstructors { key: TypeKey, count: usize },
    #[error("cannot resolve scoped type '{0}' without an active scope")]
    NoActiveScope(TypeKey),
    #[error("cannot resolve '{0}' through an already released scope")]
    ScopeReleased(TypeKey),
    #[error("resolved instance cannot be downcast to requested type '{0}'")]
    TypeMismatch(TypeKey),
    #[error("no resolved dependency left to satisfy '{0}'")]
    MissingDependency(TypeKey),
}
