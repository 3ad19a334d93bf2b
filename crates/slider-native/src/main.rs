use anyhow::Context;
use glam::{Affine3A, Quat, Vec3};
use rand::prelude::*;

use slider_core::{
    AxisSlider, FocusEvent, PointerEvent, PointerHandler, PointerId, PointerKind, SharedFrame,
    SliderAxis, SliderConfig, SliderEventData, SpatialFrame,
};

const HAND: PointerId = PointerId(0);
const RAY: PointerId = PointerId(1);
const JITTER: f32 = 0.01; // off-axis tremor added to every hand sample
const DRAG_STEPS: usize = 8;

/// Catches whatever the slider leaves unconsumed, like a scene-level grab.
#[derive(Default)]
struct Backdrop {
    caught: usize,
}

impl PointerHandler for Backdrop {
    fn on_pointer_down(&mut self, event: &mut PointerEvent) {
        self.catch("down", event);
    }
    fn on_pointer_dragged(&mut self, event: &mut PointerEvent) {
        self.catch("drag", event);
    }
    fn on_pointer_up(&mut self, event: &mut PointerEvent) {
        self.catch("up", event);
    }
    fn on_focus_enter(&mut self, _event: &FocusEvent) {}
    fn on_focus_exit(&mut self, _event: &FocusEvent) {}
}

impl Backdrop {
    fn catch(&mut self, what: &str, event: &mut PointerEvent) {
        if event.is_used() {
            return;
        }
        self.caught += 1;
        log::info!("[backdrop] caught {} from {:?}", what, event.pointer);
        event.use_event();
    }
}

enum Sample {
    Enter(PointerId, PointerKind),
    Exit(PointerId, PointerKind),
    Down(PointerId, Vec3),
    Drag(PointerId, Vec3),
    Up(PointerId, Vec3),
}

/// Visit handlers front to back; a pointer event stops at the first handler
/// that consumes it, focus events reach everyone.
fn dispatch(handlers: &mut [&mut dyn PointerHandler], sample: &Sample) {
    match *sample {
        Sample::Enter(p, kind) => {
            let ev = FocusEvent::new(p, kind);
            handlers.iter_mut().for_each(|h| h.on_focus_enter(&ev));
        }
        Sample::Exit(p, kind) => {
            let ev = FocusEvent::new(p, kind);
            handlers.iter_mut().for_each(|h| h.on_focus_exit(&ev));
        }
        Sample::Down(p, pos) | Sample::Drag(p, pos) | Sample::Up(p, pos) => {
            let mut ev = PointerEvent::new(p, kind_of(p), pos);
            for h in handlers.iter_mut() {
                match sample {
                    Sample::Down(..) => h.on_pointer_down(&mut ev),
                    Sample::Drag(..) => h.on_pointer_dragged(&mut ev),
                    _ => h.on_pointer_up(&mut ev),
                }
                if ev.is_used() {
                    break;
                }
            }
        }
    }
}

fn kind_of(pointer: PointerId) -> PointerKind {
    if pointer == HAND {
        PointerKind::Near
    } else {
        PointerKind::Far
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> anyhow::Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key}={raw:?} is not valid")),
        Err(_) => Ok(default),
    }
}

/// Pinch near the thumb, drag past the end of the track, let a ray pointer
/// try to grab mid-drag, then release.
fn build_trace<F: SpatialFrame>(slider: &AxisSlider<F>, rng: &mut StdRng) -> Vec<Sample> {
    let thumb = slider.thumb_position().unwrap_or_else(|| slider.track_start());
    let dir = slider.track_direction();
    let mut jitter = || {
        Vec3::new(
            rng.gen_range(-JITTER..JITTER),
            rng.gen_range(-JITTER..JITTER),
            rng.gen_range(-JITTER..JITTER),
        )
    };

    let mut trace = vec![
        Sample::Enter(HAND, PointerKind::Near),
        Sample::Down(HAND, thumb),
    ];
    for i in 1..=DRAG_STEPS {
        let t = 0.8 * i as f32 / DRAG_STEPS as f32;
        trace.push(Sample::Drag(HAND, thumb + dir * t + jitter()));
        if i == DRAG_STEPS / 2 {
            trace.push(Sample::Down(RAY, thumb - dir * 0.2));
            trace.push(Sample::Drag(RAY, thumb - dir * 0.4));
        }
    }
    trace.push(Sample::Up(HAND, thumb + dir * 0.8));
    trace.push(Sample::Exit(HAND, PointerKind::Near));
    trace
}

fn log_channel(name: &'static str) -> impl FnMut(&SliderEventData) {
    move |d| {
        log::info!(
            "[{}] {:.3} -> {:.3} (user: {})",
            name,
            d.old_value,
            d.new_value,
            d.was_user_driven
        )
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let axis_index: u8 = env_or("SLIDER_AXIS", 0)?;
    let seed: u64 = env_or("SLIDER_SEED", 42)?;
    let axis = SliderAxis::try_from(axis_index).context("SLIDER_AXIS")?;
    let mut rng = StdRng::seed_from_u64(seed);

    let local_start = -0.5 * axis.unit();
    let local_end = 0.5 * axis.unit();
    let frame = SharedFrame::new(Affine3A::from_rotation_translation(
        Quat::from_rotation_y(0.3),
        Vec3::new(0.0, 1.2, -0.6),
    ));
    let config = SliderConfig::default()
        .with_axis(axis)
        .with_track(local_start, local_end)
        .with_value(0.25);

    let mut slider = AxisSlider::new(config, frame.clone())?;
    // Thumb floats a little above the track, a quarter of the way along.
    let float_above = frame.get().transform_vector3(Vec3::new(0.0, 0.02, 0.02));
    let thumb = slider.track_start() + slider.track_direction() * 0.25 + float_above;
    slider.set_thumb_position(thumb);

    {
        let ev = slider.events_mut();
        ev.on_value_updated.add_listener(log_channel("value"));
        ev.on_interaction_started.add_listener(log_channel("started"));
        ev.on_interaction_ended.add_listener(log_channel("ended"));
        ev.on_hover_entered.add_listener(log_channel("hover+"));
        ev.on_hover_exited.add_listener(log_channel("hover-"));
    }
    slider
        .initialize()
        .context("slider failed to initialize")?;

    let mut backdrop = Backdrop::default();
    let trace = build_trace(&slider, &mut rng);
    for sample in &trace {
        let mut handlers: [&mut dyn PointerHandler; 2] = [&mut slider, &mut backdrop];
        dispatch(&mut handlers, sample);
    }

    // Move the whole control and grab again; shut down mid-drag.
    frame.set(Affine3A::from_translation(Vec3::new(0.0, 1.0, -1.0)));
    let grab_at = slider.thumb_position().unwrap_or(Vec3::ZERO);
    for sample in [
        Sample::Down(RAY, grab_at),
        Sample::Drag(RAY, grab_at - slider.track_direction() * 0.3),
    ] {
        let mut handlers: [&mut dyn PointerHandler; 2] = [&mut slider, &mut backdrop];
        dispatch(&mut handlers, &sample);
    }
    slider.shutdown();

    log::info!(
        "final value {:.3}, thumb {:?}, backdrop caught {} event(s)",
        slider.value(),
        slider.thumb_position(),
        backdrop.caught
    );
    Ok(())
}
