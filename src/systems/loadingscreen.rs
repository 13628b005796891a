//! Loading screen renderer.
//!
//! While assets stream in, every frame draws a full-width progress bar with
//! a pulsing accent fill, the integer percentage, and a caption classifying
//! whatever the load queue is currently working on. Text drawing silently
//! waits for the baseline font, which is not available on the very first
//! frames; the caption is skipped when the queue reports no current item.

use crate::resources::bundle::Bundle;
use crate::resources::fontstore::FontStore;
use crate::resources::loadingvisual::LoadingVisual;
use crate::resources::loadqueue::LoadQueue;
use crate::resources::windowsize::WindowSize;
use crate::resources::worldtime::WorldTime;
use bevy_ecs::prelude::World;
use raylib::prelude::*;

/// Bar height in density-independent pixels.
const BAR_HEIGHT: f32 = 50.0;
/// Smoothing rate toward the true progress, per nominal frame.
const SMOOTH_RATE: f32 = 0.1;
/// Divisor of the accent pulse phase; larger is slower.
const PULSE_SCALE: f32 = 5.0;
/// Caption offset under the bar, in pixels.
const CAPTION_GAP: f32 = 10.0;
const FONT_SIZE: f32 = 20.0;

const ACCENT: Color = Color::new(255, 210, 100, 255);
const DARKER_GRAY: Color = Color::new(30, 30, 30, 255);

/// Frame-rate independent lerp: `rate` is the fraction covered per nominal
/// 60-fps frame, scaled by the elapsed delta.
fn lerp_delta(from: f32, to: f32, rate: f32, delta: f32) -> f32 {
    from + (to - from) * (rate * delta).clamp(0.0, 1.0)
}

fn lerp_color(a: Color, b: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t) as u8;
    Color::new(mix(a.r, b.r), mix(a.g, b.g), mix(a.b, b.b), mix(a.a, b.a))
}

/// Classify a loading item by its file name.
///
/// Best-effort substring matching inherited from the original loading
/// screen; unknown extensions fall back to the generic content caption.
pub fn caption_key(file_name: &str) -> &'static str {
    let name = file_name.to_lowercase();
    if name.contains("msav") {
        "map"
    } else if name.contains("ogg") || name.contains("mp3") {
        "sound"
    } else if name.contains("png") {
        "image"
    } else {
        "content"
    }
}

/// Advance the smoothed bar state toward the queue's true progress.
///
/// Pure bookkeeping, separate from drawing so it can run headless. The
/// smoothed value approaches the target monotonically and stays in
/// `[0, 1]` for any target sequence in that range.
pub fn update_visual(world: &mut World) {
    let delta = world.resource::<WorldTime>().delta;
    let progress = world.non_send_resource::<LoadQueue>().progress();
    let mut visual = world.resource_mut::<LoadingVisual>();
    visual.smooth_progress = lerp_delta(visual.smooth_progress, progress, SMOOTH_RATE, delta);
    visual.smooth_time += delta;
}

/// Draw one loading frame: clear, bars, percentage, caption.
///
/// Headless worlds (tests, CI) carry no raylib handle; the draw portion is
/// skipped there while the visual state still advances via
/// [`update_visual`].
pub fn draw_loading(world: &mut World) {
    update_visual(world);

    let Some(mut rl) = world.remove_non_send_resource::<RaylibHandle>() else {
        return;
    };
    let Some(thread) = world.remove_non_send_resource::<RaylibThread>() else {
        world.insert_non_send_resource(rl);
        return;
    };

    let size = *world.resource::<WindowSize>();
    let visual = *world.resource::<LoadingVisual>();
    let (progress, current) = {
        let queue = world.non_send_resource::<LoadQueue>();
        (
            queue.progress(),
            queue.currently_loading().map(str::to_owned),
        )
    };
    let caption: Option<String> = current.map(|name| {
        let key = format!("load.{}", caption_key(&name));
        world.resource::<Bundle>().get_or(&key, "").to_owned()
    });

    {
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);

        let w = size.w as f32;
        let h = size.h as f32;
        let bar_y = (h - BAR_HEIGHT) / 2.0;

        d.draw_rectangle(0, bar_y as i32, size.w, BAR_HEIGHT as i32, DARKER_GRAY);

        let pulse = (visual.smooth_time / PULSE_SCALE).sin().abs() * 0.5;
        let fill = lerp_color(ACCENT, Color::WHITE, pulse);
        d.draw_rectangle(
            0,
            bar_y as i32,
            (w * visual.smooth_progress) as i32,
            BAR_HEIGHT as i32,
            fill,
        );

        let fonts = world.non_send_resource::<FontStore>();
        if let Some(font) = fonts.get(FontStore::DEFAULT) {
            let percent = format!("{}%", (progress * 100.0) as i32);
            let measure = font.measure_text(&percent, FONT_SIZE, 1.0);
            d.draw_text_ex(
                font,
                &percent,
                Vector2 {
                    x: (w - measure.x) / 2.0,
                    y: (h - measure.y) / 2.0,
                },
                FONT_SIZE,
                1.0,
                Color::WHITE,
            );

            if let Some(caption) = caption.filter(|c| !c.is_empty()) {
                let measure = font.measure_text(&caption, FONT_SIZE, 1.0);
                d.draw_text_ex(
                    font,
                    &caption,
                    Vector2 {
                        x: (w - measure.x) / 2.0,
                        y: bar_y + BAR_HEIGHT + CAPTION_GAP,
                    },
                    FONT_SIZE,
                    1.0,
                    Color::WHITE,
                );
            }
        }
        // Queued draws flush when the handle drops.
    }

    world.insert_non_send_resource(thread);
    world.insert_non_send_resource(rl);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::loadqueue::LoadTask;

    #[test]
    fn caption_keys_match_known_extensions() {
        assert_eq!(caption_key("level1.msav"), "map");
        assert_eq!(caption_key("theme.ogg"), "sound");
        assert_eq!(caption_key("chiptune.MP3"), "sound");
        assert_eq!(caption_key("icon.png"), "image");
        assert_eq!(caption_key("data.bin"), "content");
        assert_eq!(caption_key(""), "content");
    }

    fn loading_world(tasks: usize) -> World {
        let mut world = World::new();
        world.insert_resource(WorldTime {
            elapsed: 0.0,
            delta: 1.0,
        });
        world.insert_resource(LoadingVisual::default());
        let mut queue = LoadQueue::new();
        for i in 0..tasks {
            queue.load(LoadTask::new(format!("item{i}.png"), |_| Ok(())));
        }
        world.insert_non_send_resource(queue);
        world
    }

    #[test]
    fn smoothing_approaches_target_without_overshoot() {
        let mut world = loading_world(0); // empty queue: progress = 1.0
        let mut last = 0.0f32;
        for _ in 0..200 {
            update_visual(&mut world);
            let v = world.resource::<LoadingVisual>().smooth_progress;
            assert!(v >= last, "smoothed progress regressed: {v} < {last}");
            assert!((0.0..=1.0).contains(&v));
            last = v;
        }
        assert!(last > 0.99, "smoothing never converged: {last}");
    }

    #[test]
    fn smoothing_is_frame_rate_independent() {
        // One big delta covers the same ground as many small ones, roughly.
        let mut slow = loading_world(0);
        slow.resource_mut::<WorldTime>().delta = 6.0;
        update_visual(&mut slow);
        let jumped = slow.resource::<LoadingVisual>().smooth_progress;

        let mut fast = loading_world(0);
        fast.resource_mut::<WorldTime>().delta = 1.0;
        for _ in 0..6 {
            update_visual(&mut fast);
        }
        let stepped = fast.resource::<LoadingVisual>().smooth_progress;
        assert!((jumped - stepped).abs() < 0.2, "{jumped} vs {stepped}");
    }

    #[test]
    fn phase_clock_accumulates_delta() {
        let mut world = loading_world(1);
        for _ in 0..5 {
            update_visual(&mut world);
        }
        assert!((world.resource::<LoadingVisual>().smooth_time - 5.0).abs() < 1e-4);
    }

    #[test]
    fn lerp_delta_saturates_on_huge_deltas() {
        let v = lerp_delta(0.0, 1.0, 0.1, 100.0);
        assert_eq!(v, 1.0);
    }
}
