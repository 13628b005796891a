//! Asynchronous asset load queue.
//!
//! All deferred load work funnels through [`LoadQueue`]: a FIFO of named
//! tasks drained a bounded amount per frame by [`LoadQueue::advance`]. The
//! queue reports aggregate fractional progress and the identity of the item
//! currently being processed; individual task failures are logged here and
//! never reach the lifecycle driver, which only observes `finished`.
//!
//! The queue is a non-send resource: tasks routinely touch raylib handles,
//! which must stay on the main thread. The lifecycle driver takes the queue
//! out of the world for the duration of `advance` so tasks get full world
//! access without aliasing it.

use bevy_ecs::prelude::World;
use log::{debug, error};
use rustc_hash::FxHashSet;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Closure executed for one load task.
pub type LoadFn = Box<dyn FnOnce(&mut World) -> Result<(), String>>;

/// One unit of deferred load work.
///
/// The name identifies the item on the loading screen (and in logs); by
/// convention it is the file name of the resource being decoded.
pub struct LoadTask {
    pub name: String,
    pub run: LoadFn,
}

impl LoadTask {
    pub fn new(
        name: impl Into<String>,
        run: impl FnOnce(&mut World) -> Result<(), String> + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            run: Box::new(run),
        }
    }
}

/// Bounded-work asset load queue. See the module docs.
#[derive(Default)]
pub struct LoadQueue {
    pending: VecDeque<LoadTask>,
    current: Option<String>,
    completed: usize,
    total: usize,
    fraction: f32,
    loaded: FxHashSet<String>,
}

impl LoadQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a task at the back of the queue.
    pub fn load(&mut self, task: LoadTask) {
        self.total += 1;
        if self.current.is_none() {
            self.current = Some(task.name.clone());
        }
        self.pending.push_back(task);
    }

    /// Enqueue a named closure; shorthand for [`LoadQueue::load`].
    pub fn load_and_run(
        &mut self,
        name: impl Into<String>,
        run: impl FnOnce(&mut World) -> Result<(), String> + 'static,
    ) {
        self.load(LoadTask::new(name, run));
    }

    /// Run queued tasks until `budget_ms` is spent or the queue drains.
    ///
    /// At least one task runs per call so progress is always made. A task
    /// error is logged and the task counted as completed; callers only
    /// observe aggregate progress. Returns `true` once nothing is left.
    pub fn advance(&mut self, world: &mut World, budget_ms: u64) -> bool {
        let start = Instant::now();
        let budget = Duration::from_millis(budget_ms);

        while let Some(task) = self.pending.pop_front() {
            self.current = Some(task.name.clone());
            debug!("loading '{}'", task.name);
            match (task.run)(world) {
                Ok(()) => {
                    self.loaded.insert(task.name);
                }
                Err(e) => {
                    error!("failed to load '{}': {}", task.name, e);
                }
            }
            self.completed += 1;
            if start.elapsed() >= budget {
                break;
            }
        }

        // Monotonic high-water progress: enqueues after loading has begun
        // may grow `total`, but the reported fraction never moves backwards.
        if self.total > 0 {
            let raw = self.completed as f32 / self.total as f32;
            self.fraction = self.fraction.max(raw);
        }

        self.current = self.pending.front().map(|t| t.name.clone());
        self.pending.is_empty()
    }

    /// Aggregate fractional progress in `[0, 1]`.
    ///
    /// Monotonically non-decreasing until completion; `1.0` for an empty
    /// queue.
    pub fn progress(&self) -> f32 {
        if self.pending.is_empty() && self.completed == self.total {
            1.0
        } else {
            self.fraction
        }
    }

    /// Whether the named task completed successfully.
    pub fn is_loaded(&self, name: impl AsRef<str>) -> bool {
        self.loaded.contains(name.as_ref())
    }

    /// Name of the item currently being processed, if any.
    pub fn currently_loading(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Whether all enqueued work has been processed.
    pub fn is_finished(&self) -> bool {
        self.pending.is_empty()
    }

    /// Number of tasks not yet processed.
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::prelude::Resource;

    #[derive(Resource, Default)]
    struct Counter(usize);

    fn counting_task(name: &str) -> LoadTask {
        LoadTask::new(name, |world: &mut World| {
            world.resource_mut::<Counter>().0 += 1;
            Ok(())
        })
    }

    fn make_world() -> World {
        let mut world = World::new();
        world.insert_resource(Counter::default());
        world
    }

    #[test]
    fn empty_queue_reports_finished_and_full_progress() {
        let queue = LoadQueue::new();
        assert!(queue.is_finished());
        assert_eq!(queue.progress(), 1.0);
        assert!(queue.currently_loading().is_none());
    }

    #[test]
    fn advance_runs_tasks_and_tracks_progress() {
        let mut world = make_world();
        let mut queue = LoadQueue::new();
        for i in 0..4 {
            queue.load(counting_task(&format!("item{i}.png")));
        }
        assert_eq!(queue.progress(), 0.0);
        assert_eq!(queue.currently_loading(), Some("item0.png"));

        let finished = queue.advance(&mut world, 1000);
        assert!(finished);
        assert_eq!(world.resource::<Counter>().0, 4);
        assert_eq!(queue.progress(), 1.0);
        assert!(queue.currently_loading().is_none());
    }

    #[test]
    fn budget_bounds_work_per_call() {
        let mut world = make_world();
        let mut queue = LoadQueue::new();
        for i in 0..3 {
            queue.load(LoadTask::new(format!("slow{i}.bin"), |world: &mut World| {
                std::thread::sleep(Duration::from_millis(5));
                world.resource_mut::<Counter>().0 += 1;
                Ok(())
            }));
        }

        // Each task overshoots a 1ms budget, so exactly one runs per call.
        assert!(!queue.advance(&mut world, 1));
        assert_eq!(world.resource::<Counter>().0, 1);
        assert!(!queue.advance(&mut world, 1));
        assert_eq!(world.resource::<Counter>().0, 2);
        assert!(queue.advance(&mut world, 1));
        assert_eq!(world.resource::<Counter>().0, 3);
    }

    #[test]
    fn progress_is_monotonic_across_advances() {
        let mut world = make_world();
        let mut queue = LoadQueue::new();
        for i in 0..5 {
            queue.load(LoadTask::new(format!("slow{i}.bin"), |_: &mut World| {
                std::thread::sleep(Duration::from_millis(2));
                Ok(())
            }));
        }
        let mut last = queue.progress();
        while !queue.advance(&mut world, 1) {
            let p = queue.progress();
            assert!(p >= last, "progress went backwards: {p} < {last}");
            assert!((0.0..=1.0).contains(&p));
            last = p;
        }
        assert_eq!(queue.progress(), 1.0);
    }

    #[test]
    fn task_errors_are_absorbed() {
        let mut world = make_world();
        let mut queue = LoadQueue::new();
        queue.load(LoadTask::new("broken.png", |_: &mut World| {
            Err("decode failed".into())
        }));
        queue.load(counting_task("fine.png"));

        assert!(queue.advance(&mut world, 1000));
        assert_eq!(world.resource::<Counter>().0, 1);
        assert_eq!(queue.progress(), 1.0);
        assert!(!queue.is_loaded("broken.png"));
        assert!(queue.is_loaded("fine.png"));
    }

    #[test]
    fn currently_loading_points_at_the_front_task() {
        let mut world = make_world();
        let mut queue = LoadQueue::new();
        queue.load(LoadTask::new("first.ogg", |_: &mut World| {
            std::thread::sleep(Duration::from_millis(3));
            Ok(())
        }));
        queue.load(counting_task("second.ogg"));

        assert_eq!(queue.currently_loading(), Some("first.ogg"));
        assert!(!queue.advance(&mut world, 1));
        assert_eq!(queue.currently_loading(), Some("second.ogg"));
    }
}
