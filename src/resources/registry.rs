//! Application module registry.
//!
//! Top-level application modules (logic, control, renderer, ui, net) are
//! lifecycle objects registered once during bootstrap. The registry keeps
//! them in registration order and forwards every lifecycle hook in that
//! same order. A module that also exposes the [`Loadable`] capability gets
//! its load tasks enqueued as part of registration, so it is guaranteed to
//! be fully loaded before `init` runs.

use crate::resources::loadqueue::{LoadQueue, LoadTask};
use bevy_ecs::prelude::World;
use log::debug;

/// Lifecycle hooks implemented by every top-level application module.
///
/// Hooks are invoked in registration order. `init` runs exactly once, after
/// the load queue drains and before the first running frame; `update` runs
/// every running frame; `resize` and `resume` forward window events once
/// the client is running.
pub trait AppModule {
    fn name(&self) -> &'static str;

    fn init(&mut self, _world: &mut World) {}

    fn update(&mut self, _world: &mut World) {}

    fn resize(&mut self, _world: &mut World, _width: i32, _height: i32) {}

    fn resume(&mut self, _world: &mut World) {}

    /// Modules that need asynchronous resource loading before `init` expose
    /// the [`Loadable`] capability here; everyone else inherits `None`.
    fn as_loadable(&self) -> Option<&dyn Loadable> {
        None
    }
}

/// Capability declaring asynchronous resource needs.
pub trait Loadable {
    /// Build the load tasks this module requires before `init` runs.
    fn load_tasks(&self) -> Vec<LoadTask>;
}

/// Ordered collection of [`AppModule`]s.
///
/// Insertion order is registration order and stays the invocation order for
/// every forwarded hook. Stored as a non-send resource; the lifecycle
/// driver temporarily takes it out of the world to call hooks with world
/// access.
#[derive(Default)]
pub struct ModuleRegistry {
    modules: Vec<Box<dyn AppModule>>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a module. A module exposing [`Loadable`] is enqueued on the
    /// load queue in the same step.
    pub fn register(&mut self, queue: &mut LoadQueue, module: Box<dyn AppModule>) {
        if let Some(loadable) = module.as_loadable() {
            for task in loadable.load_tasks() {
                queue.load(task);
            }
        }
        debug!("registered module '{}'", module.name());
        self.modules.push(module);
    }

    /// One-shot post-load initialization pass, in registration order.
    ///
    /// The single-invocation guarantee comes from the lifecycle driver's
    /// state guard, not from the registry.
    pub fn post_init(&mut self, world: &mut World) {
        for module in &mut self.modules {
            debug!("init module '{}'", module.name());
            module.init(world);
        }
    }

    /// Forward the per-frame update to every module.
    pub fn update_all(&mut self, world: &mut World) {
        for module in &mut self.modules {
            module.update(world);
        }
    }

    /// Forward a window resize to every module.
    pub fn resize_all(&mut self, world: &mut World, width: i32, height: i32) {
        for module in &mut self.modules {
            module.resize(world, width, height);
        }
    }

    /// Forward an application resume to every module.
    ///
    /// Only meaningful once the client is running; the lifecycle driver
    /// suppresses the call while modules are still loading.
    pub fn resume_all(&mut self, world: &mut World) {
        for module in &mut self.modules {
            module.resume(world);
        }
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Trace = Rc<RefCell<Vec<String>>>;

    struct Recorder {
        name: &'static str,
        trace: Trace,
        loadable: bool,
    }

    impl AppModule for Recorder {
        fn name(&self) -> &'static str {
            self.name
        }

        fn init(&mut self, _world: &mut World) {
            self.trace.borrow_mut().push(format!("init:{}", self.name));
        }

        fn update(&mut self, _world: &mut World) {
            self.trace.borrow_mut().push(format!("update:{}", self.name));
        }

        fn as_loadable(&self) -> Option<&dyn Loadable> {
            self.loadable.then_some(self as &dyn Loadable)
        }
    }

    impl Loadable for Recorder {
        fn load_tasks(&self) -> Vec<LoadTask> {
            vec![LoadTask::new(format!("{}-assets", self.name), |_| Ok(()))]
        }
    }

    fn recorder(name: &'static str, trace: &Trace, loadable: bool) -> Box<Recorder> {
        Box::new(Recorder {
            name,
            trace: trace.clone(),
            loadable,
        })
    }

    #[test]
    fn hooks_run_in_registration_order() {
        let trace: Trace = Rc::default();
        let mut queue = LoadQueue::new();
        let mut registry = ModuleRegistry::new();
        registry.register(&mut queue, recorder("logic", &trace, false));
        registry.register(&mut queue, recorder("renderer", &trace, false));
        registry.register(&mut queue, recorder("ui", &trace, false));

        let mut world = World::new();
        registry.post_init(&mut world);
        registry.update_all(&mut world);

        assert_eq!(
            *trace.borrow(),
            vec![
                "init:logic",
                "init:renderer",
                "init:ui",
                "update:logic",
                "update:renderer",
                "update:ui",
            ]
        );
    }

    #[test]
    fn loadable_modules_are_auto_enqueued() {
        let trace: Trace = Rc::default();
        let mut queue = LoadQueue::new();
        let mut registry = ModuleRegistry::new();
        registry.register(&mut queue, recorder("logic", &trace, false));
        registry.register(&mut queue, recorder("ui", &trace, true));

        assert_eq!(registry.len(), 2);
        assert_eq!(queue.remaining(), 1);
        assert_eq!(queue.currently_loading(), Some("ui-assets"));
    }
}
