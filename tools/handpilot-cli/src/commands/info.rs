//! Show information about a recorded session file.

use std::collections::BTreeMap;
use std::path::PathBuf;

use handpilot_gesture_core::pose::classify_pose;
use handpilot_gesture_model::session::Session;

pub fn run(path: PathBuf) -> anyhow::Result<()> {
    tracing::debug!(path = %path.display(), "loading session");
    let session = Session::load(&path)?;

    println!("Session: {}", path.display());
    println!("  schema version:  {}", session.header.schema_version);
    println!("  recorded at:     {}", session.header.epoch_wall);
    println!("  capture rate:    {} fps", session.header.capture_fps);
    println!(
        "  output space:    {}x{}",
        session.header.screen_width, session.header.screen_height
    );

    let total = session.frames.len();
    let with_hand = session.hand_frame_count();
    let pct = if total > 0 {
        with_hand as f64 / total as f64 * 100.0
    } else {
        0.0
    };
    println!(
        "  frames:          {} ({:.1}s, hand present in {:.1}%)",
        total,
        session.duration_ms() as f64 / 1_000.0,
        pct
    );

    // Pose distribution over hand-present frames.
    let mut poses: BTreeMap<&'static str, usize> = BTreeMap::new();
    for frame in &session.frames {
        if let Some(landmarks) = &frame.landmarks {
            *poses.entry(classify_pose(landmarks).name()).or_insert(0) += 1;
        }
    }
    if !poses.is_empty() {
        println!("  pose distribution:");
        for (name, count) in &poses {
            println!("    {name:<10} {count}");
        }
    }

    Ok(())
}
