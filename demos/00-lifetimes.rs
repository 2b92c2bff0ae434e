use wirebox::component::Component;
use wirebox::instance::{Dependencies, InstancePtr, TypeKey};
use wirebox::registry::{Lifetime, Registry};
use wirebox::resolver::Resolver;
use wirebox::ResolveError;

struct Greeter;

impl Component for Greeter {
    fn construct(_dependencies: &mut Dependencies) -> Result<Self, ResolveError> {
        // to show when construction happens, let's print some info
        println!("Greeter created!");
        Ok(Greeter)
    }
}

struct GreetingService {
    greeter: InstancePtr<Greeter>,
}

impl Component for GreetingService {
    fn dependencies() -> Vec<TypeKey> {
        vec![TypeKey::of::<Greeter>()]
    }

    fn construct(dependencies: &mut Dependencies) -> Result<Self, ResolveError> {
        Ok(Self {
            greeter: dependencies.take()?,
        })
    }
}

fn main() {
    let mut registry = Registry::new();
    // the greeter is shared - it's constructed once and cached on its binding
    registry.register::<Greeter>(Lifetime::Singleton);
    // the service is transient - every resolution builds a fresh one
    registry.register::<GreetingService>(Lifetime::Transient);

    let mut resolver = Resolver::new(&mut registry);

    // prints "Greeter created!" exactly once
    let first = resolver
        .resolve::<GreetingService>()
        .expect("error creating GreetingService");
    let second = resolver
        .resolve::<GreetingService>()
        .expect("error creating GreetingService");

    // two services, one shared greeter
    println!("same service: {}", InstancePtr::ptr_eq(&first, &second));
    println!(
        "same greeter: {}",
        InstancePtr::ptr_eq(&first.greeter, &second.greeter)
    );
}
