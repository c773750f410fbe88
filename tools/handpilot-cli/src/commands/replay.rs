//! Replay a recorded session through the gesture pipeline.
//!
//! Feeds each recorded frame into the state machine and scroll detector at
//! the original (or scaled) frame timing, dispatching the resulting events
//! into a tracing backend, and prints a summary at the end.

use std::path::PathBuf;
use std::time::Duration;

use handpilot_common::clock::{FpsCounter, FrameClock};
use handpilot_common::config::PilotConfig;
use handpilot_gesture_core::geometry;
use handpilot_gesture_core::mapper::CursorMapper;
use handpilot_gesture_core::{GestureFsm, ScrollDetector, SensitivityMode};
use handpilot_gesture_model::history::GestureHistory;
use handpilot_gesture_model::region::ActiveRegion;
use handpilot_gesture_model::session::Session;
use handpilot_platform_core::{MonitorRouter, PointerBackend, TraceBackend};

pub fn run(
    path: PathBuf,
    speed: f64,
    instant: bool,
    sensitivity: String,
    sensitivity_scale: Option<f64>,
    history_out: Option<PathBuf>,
) -> anyhow::Result<()> {
    tracing::debug!(path = %path.display(), "loading session");
    let session = Session::load(&path)?;
    println!(
        "Replaying {} frames ({:.1}s) from {}",
        session.frames.len(),
        session.duration_ms() as f64 / 1_000.0,
        path.display()
    );

    let config = PilotConfig::load();
    let region = ActiveRegion::new(
        config.region.x_min,
        config.region.y_min,
        config.region.x_max,
        config.region.y_max,
    )?;
    let router =
        MonitorRouter::single_screen(session.header.screen_width, session.header.screen_height)?;

    let mut mapper = CursorMapper::new(region, router);
    let mode: SensitivityMode = sensitivity
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;
    mapper.sensitivity_mut().set_mode(mode);
    if let Some(scale) = sensitivity_scale {
        mapper.sensitivity_mut().set_custom_scale(scale);
    }

    let mut fsm = GestureFsm::new(config.gesture, config.landmarks, mapper)?;
    let mut scroll = ScrollDetector::new(config.gesture, config.scroll, config.landmarks)?;

    let mut backend = TraceBackend::new();
    let mut history = GestureHistory::new(1_000);
    let mut fps = FpsCounter::new(30);

    let speed = if speed > 0.0 { speed } else { 1.0 };
    let clock = FrameClock::start();
    let mut prev_t_ms = session.frames.first().map(|f| f.t_ms).unwrap_or(0);

    for frame in &session.frames {
        // Maintain original frame pacing unless asked not to.
        let gap_ms = frame.t_ms.saturating_sub(prev_t_ms);
        if !instant && gap_ms > 0 {
            std::thread::sleep(Duration::from_millis((gap_ms as f64 / speed) as u64));
        }
        prev_t_ms = frame.t_ms;

        let landmarks = frame.landmarks.as_ref();
        let d_ref = landmarks
            .map(|f| {
                geometry::reference_distance(
                    f,
                    config.landmarks.wrist,
                    config.landmarks.index_knuckle,
                )
            })
            .unwrap_or(0.0);

        let event = fsm.process(landmarks, frame.t_ms);
        history.record(frame.t_ms, event);
        backend.dispatch(&event)?;

        if let Some(scroll_event) = scroll.process(landmarks, d_ref, frame.t_ms) {
            if let Some(scroller) = backend.scroll_capability() {
                scroller.scroll(&scroll_event)?;
            }
        }

        fps.tick(frame.t_ms);
    }

    println!();
    print!("{}", history.summary());
    println!(
        "  dispatched {} pointer / {} scroll events at {:.1} fps (recorded) in {:.1}s",
        backend.pointer_events(),
        backend.scroll_events(),
        fps.fps(),
        clock.elapsed_secs()
    );

    if let Some(out) = history_out {
        history.save(&out)?;
        println!("  history saved to {}", out.display());
    }

    Ok(())
}
