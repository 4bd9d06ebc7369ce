use super::*;
use crate::animation::jitter::SeededJitter;

#[test]
fn defaults() {
    let s = RenderSettings::default();
    assert_eq!(s.fps, PROJECT_FPS);
    assert_eq!(s.exit_window_frames, 30);
    assert_eq!(s.highlight_ramp_ms, 300.0);
    assert_eq!(s.animation_mode, AnimationMode::Block);
    assert_eq!(s.jitter, JitterMode::System);
    s.validate().unwrap();
}

#[test]
fn partial_json_fills_defaults() {
    let s = RenderSettings::from_json_str(
        r#"{ "animationMode": "wordRelative", "jitter": { "kind": "seeded", "seed": 42 } }"#,
    )
    .unwrap();
    assert_eq!(s.animation_mode, AnimationMode::WordRelative);
    assert_eq!(s.jitter, JitterMode::Seeded { seed: 42 });
    assert_eq!(s.exit_window_frames, 30);

    let s = RenderSettings::from_json_str("{}").unwrap();
    assert_eq!(s, RenderSettings::default());
}

#[test]
fn rejects_bad_values() {
    assert!(RenderSettings::from_json_str(r#"{ "fps": { "num": 30, "den": 0 } }"#).is_err());
    assert!(RenderSettings::from_json_str(r#"{ "highlightRampMs": 0 }"#).is_err());
    assert!(RenderSettings::from_json_str(r#"{ "highlightRampMs": -5 }"#).is_err());
}

#[test]
fn seeded_sources_depend_only_on_frame() {
    let mode = JitterMode::Seeded { seed: 9 };
    let a = mode.source_for_frame(FrameIndex(3)).next_unit();
    let b = mode.source_for_frame(FrameIndex(3)).next_unit();
    assert_eq!(a, b);
    assert_eq!(a, SeededJitter::for_frame(9, 3).next_unit());
}

#[test]
fn builders_override_fields() {
    let s = RenderSettings::default()
        .with_mode(AnimationMode::WordRelative)
        .with_seed(5);
    assert_eq!(s.animation_mode, AnimationMode::WordRelative);
    assert_eq!(s.jitter, JitterMode::Seeded { seed: 5 });
}
