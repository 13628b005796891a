//! Lifecycle integration tests: boot state machine, one-shot post-init,
//! load-complete event, resize/resume gating, and pacing interplay.
//!
//! These drive headless worlds (no raylib handle) through the same
//! `lifecycle_frame` entry point the windowed client uses; the loading
//! screen's draw portion skips itself while the visual bookkeeping and all
//! state transitions still run.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use bevy_ecs::observer::{Observer, On};
use bevy_ecs::prelude::{ResMut, Resource, World};

use emberfall::events::clientload::ClientLoadEvent;
use emberfall::resources::bootstate::{BootClock, BootState};
use emberfall::resources::frametiming::FrameTiming;
use emberfall::resources::gameconfig::GameConfig;
use emberfall::resources::loadingvisual::LoadingVisual;
use emberfall::resources::loadqueue::{LoadQueue, LoadTask};
use emberfall::resources::registry::{AppModule, Loadable, ModuleRegistry};
use emberfall::resources::windowsize::WindowSize;
use emberfall::resources::worldtime::WorldTime;
use emberfall::systems::lifecycle::{lifecycle_frame, resize_frame, resume_frame};

type Trace = Rc<RefCell<Vec<String>>>;

struct StubModule {
    name: &'static str,
    trace: Trace,
    loadable: bool,
}

impl AppModule for StubModule {
    fn name(&self) -> &'static str {
        self.name
    }

    fn init(&mut self, _world: &mut World) {
        self.trace.borrow_mut().push(format!("init:{}", self.name));
    }

    fn update(&mut self, _world: &mut World) {
        self.trace.borrow_mut().push(format!("update:{}", self.name));
    }

    fn resize(&mut self, _world: &mut World, w: i32, h: i32) {
        self.trace
            .borrow_mut()
            .push(format!("resize:{}:{}x{}", self.name, w, h));
    }

    fn resume(&mut self, _world: &mut World) {
        self.trace.borrow_mut().push(format!("resume:{}", self.name));
    }

    fn as_loadable(&self) -> Option<&dyn Loadable> {
        self.loadable.then_some(self as &dyn Loadable)
    }
}

impl Loadable for StubModule {
    fn load_tasks(&self) -> Vec<LoadTask> {
        vec![LoadTask::new(format!("{}-assets.bin", self.name), |_| Ok(()))]
    }
}

fn stub(name: &'static str, trace: &Trace) -> Box<StubModule> {
    Box::new(StubModule {
        name,
        trace: trace.clone(),
        loadable: false,
    })
}

/// A task that overruns the 50ms loading budget, forcing one task per frame.
fn slow_task(name: &str) -> LoadTask {
    LoadTask::new(name, |_: &mut World| {
        std::thread::sleep(Duration::from_millis(55));
        Ok(())
    })
}

#[derive(Resource, Default)]
struct LoadEvents(usize);

fn count_load_events(_trigger: On<ClientLoadEvent>, mut counter: ResMut<LoadEvents>) {
    counter.0 += 1;
}

fn loading_world(tasks: Vec<LoadTask>, modules: Vec<Box<StubModule>>) -> World {
    let mut world = World::new();
    world.insert_resource(BootState::Loading);
    world.insert_resource(WorldTime::default());
    world.insert_resource(BootClock::start());
    world.insert_resource(FrameTiming::default());
    world.insert_resource(LoadingVisual::default());
    world.insert_resource(WindowSize { w: 800, h: 600 });
    let mut config = GameConfig::new();
    config.fps_cap = 0; // keep tests fast; pacing has its own tests
    world.insert_resource(config);

    let mut queue = LoadQueue::new();
    for task in tasks {
        queue.load(task);
    }
    let mut registry = ModuleRegistry::new();
    for module in modules {
        registry.register(&mut queue, module);
    }
    world.insert_non_send_resource(queue);
    world.insert_non_send_resource(registry);

    world.init_resource::<LoadEvents>();
    world.spawn(Observer::new(count_load_events));
    world.flush();
    world
}

const DT: f32 = 1.0 / 60.0;

#[test]
fn loading_frames_never_update_modules() {
    let trace: Trace = Rc::default();
    let mut world = loading_world(
        vec![slow_task("a.msav"), slow_task("b.msav")],
        vec![stub("logic", &trace), stub("renderer", &trace)],
    );

    lifecycle_frame(&mut world, DT);

    assert_eq!(*world.resource::<BootState>(), BootState::Loading);
    assert!(trace.borrow().is_empty(), "modules ran while loading: {:?}", trace);
    // The loading visual advanced, so the loading renderer was invoked.
    assert!(world.resource::<LoadingVisual>().smooth_time > 0.0);
}

#[test]
fn finishing_frame_runs_post_init_once_then_updates() {
    let trace: Trace = Rc::default();
    let mut world = loading_world(
        vec![slow_task("a.msav")],
        vec![stub("logic", &trace), stub("renderer", &trace)],
    );

    lifecycle_frame(&mut world, DT); // runs the only task, budget overrun
    assert_eq!(*world.resource::<BootState>(), BootState::Loading);

    lifecycle_frame(&mut world, DT); // queue empty: finish, post-init, update
    assert_eq!(*world.resource::<BootState>(), BootState::Running);
    assert_eq!(
        *trace.borrow(),
        vec!["init:logic", "init:renderer", "update:logic", "update:renderer"]
    );
    assert_eq!(world.resource::<LoadEvents>().0, 1);

    lifecycle_frame(&mut world, DT); // steady state: updates only
    lifecycle_frame(&mut world, DT);
    let counts = trace.borrow();
    let inits = counts.iter().filter(|e| e.starts_with("init:")).count();
    let updates = counts.iter().filter(|e| e.starts_with("update:")).count();
    assert_eq!(inits, 2, "post-init ran more than once: {:?}", counts);
    assert_eq!(updates, 6);
    assert_eq!(world.resource::<LoadEvents>().0, 1, "load event re-fired");
}

#[test]
fn empty_queue_transitions_on_the_first_frame() {
    let trace: Trace = Rc::default();
    let mut world = loading_world(vec![], vec![stub("logic", &trace)]);

    lifecycle_frame(&mut world, DT);

    assert_eq!(*world.resource::<BootState>(), BootState::Running);
    assert_eq!(*trace.borrow(), vec!["init:logic", "update:logic"]);
    assert_eq!(world.resource::<LoadEvents>().0, 1);
}

#[test]
fn loading_visual_is_untouched_after_running() {
    let trace: Trace = Rc::default();
    let mut world = loading_world(vec![], vec![stub("logic", &trace)]);

    lifecycle_frame(&mut world, DT);
    let settled = *world.resource::<LoadingVisual>();

    for _ in 0..5 {
        lifecycle_frame(&mut world, DT);
    }
    let after = *world.resource::<LoadingVisual>();
    assert_eq!(settled.smooth_time, after.smooth_time);
    assert_eq!(settled.smooth_progress, after.smooth_progress);
}

#[test]
fn resize_while_loading_only_touches_the_projection() {
    let trace: Trace = Rc::default();
    let mut world = loading_world(vec![slow_task("a.png")], vec![stub("ui", &trace)]);

    // No fonts loaded anywhere; must not crash and must not reach modules.
    resize_frame(&mut world, 1024, 768);

    let size = *world.resource::<WindowSize>();
    assert_eq!((size.w, size.h), (1024, 768));
    assert!(trace.borrow().is_empty());
}

#[test]
fn resize_forwards_to_modules_once_running() {
    let trace: Trace = Rc::default();
    let mut world = loading_world(vec![], vec![stub("ui", &trace)]);
    lifecycle_frame(&mut world, DT);

    resize_frame(&mut world, 640, 360);

    assert_eq!((world.resource::<WindowSize>().w, world.resource::<WindowSize>().h), (640, 360));
    assert!(trace.borrow().contains(&"resize:ui:640x360".to_string()));
}

#[test]
fn resume_is_suppressed_until_running() {
    let trace: Trace = Rc::default();
    let mut world = loading_world(vec![slow_task("a.bin")], vec![stub("logic", &trace)]);

    resume_frame(&mut world);
    assert!(trace.borrow().is_empty(), "resume reached a loading module");

    lifecycle_frame(&mut world, DT);
    lifecycle_frame(&mut world, DT);
    assert_eq!(*world.resource::<BootState>(), BootState::Running);

    resume_frame(&mut world);
    assert!(trace.borrow().contains(&"resume:logic".to_string()));
}

#[test]
fn loadable_module_assets_go_through_the_queue() {
    let trace: Trace = Rc::default();
    let ui = Box::new(StubModule {
        name: "ui",
        trace: trace.clone(),
        loadable: true,
    });
    let mut world = loading_world(vec![], vec![ui]);

    {
        let queue = world.non_send_resource::<LoadQueue>();
        assert_eq!(queue.remaining(), 1);
        assert_eq!(queue.currently_loading(), Some("ui-assets.bin"));
    }

    lifecycle_frame(&mut world, DT);
    assert_eq!(*world.resource::<BootState>(), BootState::Running);
    assert!(world.non_send_resource::<LoadQueue>().is_loaded("ui-assets.bin"));
}

#[test]
fn pacing_reference_is_recorded_every_frame() {
    let trace: Trace = Rc::default();
    let mut world = loading_world(vec![slow_task("a.bin")], vec![stub("logic", &trace)]);

    assert!(world.resource::<FrameTiming>().last_frame.is_none());
    lifecycle_frame(&mut world, DT);
    let first = world.resource::<FrameTiming>().last_frame;
    assert!(first.is_some());

    lifecycle_frame(&mut world, DT);
    let second = world.resource::<FrameTiming>().last_frame;
    assert!(second >= first);
}
