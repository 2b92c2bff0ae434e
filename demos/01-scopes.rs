// note: this example assumes you've analyzed the previous one

use wirebox::component::Component;
use wirebox::instance::{Dependencies, InstancePtr};
use wirebox::registry::{Lifetime, Registry};
use wirebox::resolver::Resolver;
use wirebox::ResolveError;

#[derive(Debug)]
struct RequestContext;

impl Component for RequestContext {
    fn construct(_dependencies: &mut Dependencies) -> Result<Self, ResolveError> {
        println!("RequestContext created!");
        Ok(RequestContext)
    }
}

fn main() {
    let mut registry = Registry::new();
    // scoped bindings live as long as the scope they were first resolved in
    registry.register::<RequestContext>(Lifetime::Scoped);

    // resolving a scoped binding without an active scope is an error
    let error = Resolver::new(&mut registry)
        .resolve::<RequestContext>()
        .unwrap_err();
    println!("without a scope: {error}");

    let mut request_scope = registry.create_scope();
    {
        let mut resolver = Resolver::with_scope(&mut registry, &mut request_scope);

        // prints "RequestContext created!" exactly once
        let first = resolver.resolve::<RequestContext>().unwrap();
        let second = resolver.resolve::<RequestContext>().unwrap();
        println!("same context: {}", InstancePtr::ptr_eq(&first, &second));
    }
    request_scope.release();

    // a new scope starts with an empty cache of its own
    let mut other_scope = registry.create_scope();
    Resolver::with_scope(&mut registry, &mut other_scope)
        .resolve::<RequestContext>()
        .unwrap();
}
