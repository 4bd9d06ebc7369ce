use super::*;
use crate::{
    animation::jitter::FixedJitter,
    captions::styles::AnimationSelection,
    render::settings::JitterMode,
};

fn hi_overlay(enter: Option<&str>, exit: Option<&str>) -> CaptionOverlay {
    CaptionOverlay {
        captions: vec![Caption {
            start_ms: 0.0,
            end_ms: 2000.0,
            words: vec![Word::new("Hi", 0.0, 500.0)],
        }],
        duration_in_frames: 90,
        styles: Some(CaptionStyles {
            animation: Some(AnimationSelection {
                enter: enter.map(str::to_owned),
                exit: exit.map(str::to_owned),
            }),
            ..CaptionStyles::defaults()
        }),
    }
}

fn render_with(overlay: &CaptionOverlay, frame: u64, settings: &RenderSettings) -> Option<CaptionFrame> {
    CaptionRenderer::render_frame_with_jitter(
        overlay,
        FrameIndex(frame),
        settings,
        &mut FixedJitter(0.5),
    )
    .unwrap()
}

fn render(overlay: &CaptionOverlay, frame: u64) -> Option<CaptionFrame> {
    render_with(overlay, frame, &RenderSettings::default())
}

fn scale_of(style: &VisualStyle) -> f64 {
    match style.transform.as_ref().unwrap().ops() {
        [TransformOp::Scale(s)] => *s,
        other => panic!("unexpected transform {other:?}"),
    }
}

#[test]
fn fade_in_scenario() {
    let overlay = hi_overlay(Some("fade"), None);

    let f0 = render(&overlay, 0).unwrap();
    assert_eq!(f0.phase, Phase::Enter);
    assert_eq!(f0.container.opacity, Some(0.0));
    assert!(f0.words[0].highlighted);
    assert_eq!(f0.words[0].progress, 0.0);

    let f15 = render(&overlay, 15).unwrap();
    assert_eq!(f15.container.opacity, Some(1.0));
    // 500ms is the word's inclusive end.
    assert!(f15.words[0].highlighted);
    assert_eq!(f15.words[0].progress, 1.0);

    let f45 = render(&overlay, 45).unwrap();
    assert_eq!(f45.frame_ms, 1500.0);
    assert_eq!(f45.phase, Phase::Enter);
    assert_eq!(f45.container.opacity, Some(1.0));
    assert!(f45.container.transform.is_none());
    assert!(!f45.words[0].highlighted);
    assert_eq!(f45.words[0].style.opacity, Some(INACTIVE_WORD_OPACITY));
    assert!(f45.words[0].style.transform.is_none());
}

#[test]
fn exit_phase_without_exit_key_leaves_base_layers() {
    let overlay = hi_overlay(Some("fade"), None);
    let f60 = render(&overlay, 60).unwrap();
    assert_eq!(f60.phase, Phase::Exit);
    assert_eq!(f60.container.opacity, None);
    assert_eq!(f60.words[0].style.opacity, Some(INACTIVE_WORD_OPACITY));

    // The caption has ended by frame 75.
    assert!(render(&overlay, 75).is_none());
}

#[test]
fn exit_key_drives_exit_phase() {
    let overlay = CaptionOverlay {
        captions: vec![Caption {
            start_ms: 0.0,
            end_ms: 3000.0,
            words: vec![],
        }],
        ..hi_overlay(Some("fade"), Some("fade"))
    };
    assert_eq!(render(&overlay, 59).unwrap().container.opacity, Some(1.0));
    assert_eq!(render(&overlay, 60).unwrap().container.opacity, Some(1.0));
    assert_eq!(render(&overlay, 75).unwrap().container.opacity, Some(1.0));
    let f82 = render(&overlay, 82).unwrap();
    assert!((f82.container.opacity.unwrap() - 8.0 / 15.0).abs() < 1e-9);
    assert_eq!(render(&overlay, 90).unwrap().container.opacity, Some(0.0));
}

#[test]
fn phase_boundary() {
    assert_eq!(phase_at(FrameIndex(59), 90, 30), Phase::Enter);
    assert_eq!(phase_at(FrameIndex(60), 90, 30), Phase::Exit);
    assert_eq!(phase_at(FrameIndex(0), 20, 30), Phase::Exit);
    assert_eq!(phase_at(FrameIndex(0), 30, 30), Phase::Exit);
    assert_eq!(phase_at(FrameIndex(u64::MAX), 90, 30), Phase::Exit);
}

#[test]
fn short_overlay_renders_exit_from_first_frame() {
    let overlay = CaptionOverlay {
        duration_in_frames: 20,
        ..hi_overlay(Some("fade"), Some("fade"))
    };
    let f0 = render(&overlay, 0).unwrap();
    assert_eq!(f0.phase, Phase::Exit);
    // exit window spans frames 5..=20, so frame 0 is clamped to full opacity.
    assert_eq!(f0.container.opacity, Some(1.0));
}

#[test]
fn highlight_boundary() {
    let word = Word::new("w", 1000.0, 1500.0);
    assert_eq!(highlight_at(&word, 999.0, 300.0), (false, 0.0));
    assert_eq!(highlight_at(&word, 1000.0, 300.0), (true, 0.0));
    assert_eq!(highlight_at(&word, 1300.0, 300.0), (true, 1.0));
    assert_eq!(highlight_at(&word, 1500.0, 300.0), (true, 1.0));
    assert_eq!(highlight_at(&word, 1500.5, 300.0), (false, 0.0));
}

#[test]
fn overlapping_captions_pick_first_in_list_order() {
    let overlay = CaptionOverlay {
        captions: vec![
            Caption {
                start_ms: 0.0,
                end_ms: 2000.0,
                words: vec![Word::new("first", 0.0, 2000.0)],
            },
            Caption {
                start_ms: 1000.0,
                end_ms: 3000.0,
                words: vec![Word::new("second", 1000.0, 3000.0)],
            },
        ],
        duration_in_frames: 120,
        styles: None,
    };
    let f = render(&overlay, 45).unwrap();
    assert_eq!(f.caption_index, 0);
    assert_eq!(f.words[0].text, "first");
    let f = render(&overlay, 61).unwrap();
    assert_eq!(f.caption_index, 1);
}

#[test]
fn no_caption_renders_nothing() {
    let overlay = CaptionOverlay {
        captions: vec![Caption {
            start_ms: 1000.0,
            end_ms: 2000.0,
            words: vec![],
        }],
        duration_in_frames: 90,
        styles: None,
    };
    assert!(render(&overlay, 0).is_none());
    let f = render(&overlay, 30).unwrap();
    assert!(f.words.is_empty());
}

#[test]
fn word_layers_follow_highlight_state() {
    let overlay = CaptionOverlay {
        captions: vec![Caption {
            start_ms: 0.0,
            end_ms: 2000.0,
            words: vec![Word::new("a", 0.0, 500.0), Word::new("b", 600.0, 900.0)],
        }],
        duration_in_frames: 90,
        styles: None,
    };
    let f = render(&overlay, 3).unwrap();
    let (a, b) = (&f.words[0].style, &f.words[1].style);

    assert_eq!(a.opacity, Some(1.0));
    assert_eq!(a.font_weight, Some(CssValue::Number(700.0)));
    assert_eq!(a.background_color, Some("#3b82f6".into()));
    assert_eq!(a.text_shadow, Some("none".into()));
    assert_eq!(scale_of(a), DEFAULT_HIGHLIGHT_SCALE);

    assert_eq!(b.opacity, Some(INACTIVE_WORD_OPACITY));
    assert_eq!(b.font_weight, Some(CssValue::Number(400.0)));
    assert_eq!(b.background_color, Some("transparent".into()));
    assert_eq!(b.text_shadow, Some("2px 2px 4px rgba(0,0,0,0.8)".into()));
    assert!(b.transform.is_none());

    for s in [a, b] {
        assert_eq!(s.color, Some("#ffffff".into()));
        assert_eq!(s.letter_spacing, Some("0em".into()));
        assert_eq!(s.padding, Some("4px 8px".into()));
        assert_eq!(s.border_radius, Some("4px".into()));
        assert_eq!(s.margin, Some("0 2px".into()));
    }

    assert_eq!(f.container.padding, Some("24px".into()));
    assert_eq!(f.container.line_height, Some(CssValue::Number(1.2)));
    assert_eq!(f.justify, Justify::Center);
}

#[test]
fn missing_highlight_style_uses_default_highlight() {
    let overlay = CaptionOverlay {
        styles: Some(CaptionStyles {
            color: Some("#ff0000".into()),
            ..CaptionStyles::default()
        }),
        ..hi_overlay(None, None)
    };
    let w = &render(&overlay, 3).unwrap().words[0].style;
    assert_eq!(w.background_color, Some("#3b82f6".into()));
    assert_eq!(w.font_weight, Some(CssValue::Number(700.0)));
    assert_eq!(w.text_shadow, Some("none".into()));
    assert_eq!(w.color, Some("#ff0000".into()));
    assert_eq!(w.opacity, Some(1.0));
    assert_eq!(w.padding, Some("4px 8px".into()));
    assert_eq!(scale_of(w), DEFAULT_HIGHLIGHT_SCALE);
}

#[test]
fn configured_scale_ramps_with_progress() {
    let overlay = CaptionOverlay {
        styles: Some(CaptionStyles::default().update_highlight(&HighlightStyle {
            scale: Some(1.2),
            ..HighlightStyle::default()
        })),
        ..hi_overlay(None, None)
    };
    let settings = RenderSettings {
        highlight_ramp_ms: 200.0,
        ..RenderSettings::default()
    };
    let at = |frame| scale_of(&render_with(&overlay, frame, &settings).unwrap().words[0].style);
    assert!((at(0) - 1.0).abs() < 1e-9);
    assert!((at(3) - 1.1).abs() < 1e-9);
    assert!((at(12) - 1.2).abs() < 1e-9);
}

#[test]
fn zero_scale_falls_back_to_fixed_bump() {
    let overlay = CaptionOverlay {
        styles: Some(CaptionStyles::default().update_highlight(&HighlightStyle {
            scale: Some(0.0),
            ..HighlightStyle::default()
        })),
        ..hi_overlay(None, None)
    };
    assert_eq!(
        scale_of(&render(&overlay, 9).unwrap().words[0].style),
        DEFAULT_HIGHLIGHT_SCALE
    );
}

#[test]
fn alignment_maps_to_justification() {
    assert_eq!(Justify::from_text_align(Some(TextAlign::Left)), Justify::Start);
    assert_eq!(Justify::from_text_align(Some(TextAlign::Center)), Justify::Center);
    assert_eq!(Justify::from_text_align(Some(TextAlign::Right)), Justify::End);
    assert_eq!(Justify::from_text_align(Some(TextAlign::Justify)), Justify::Center);
    assert_eq!(Justify::from_text_align(Some(TextAlign::Other)), Justify::Center);
    assert_eq!(Justify::from_text_align(None), Justify::Center);
}

#[test]
fn unknown_key_renders_without_animation() {
    let overlay = hi_overlay(Some("sparkle"), Some("sparkle"));
    let f = render(&overlay, 0).unwrap();
    assert_eq!(f.container.opacity, None);
    assert!(f.container.transform.is_none());
    assert_eq!(render(&overlay, 60).unwrap().container.opacity, None);
}

#[test]
fn word_relative_mode_times_each_word() {
    let mut overlay = hi_overlay(Some("fade"), None);
    overlay.captions[0].words.push(Word::new("there", 1000.0, 1500.0));
    let settings = RenderSettings::default().with_mode(AnimationMode::WordRelative);

    let f = render_with(&overlay, 30, &settings).unwrap();
    assert_eq!(f.container.opacity, None);
    // "Hi" started at frame 0 and has settled; "there" starts now.
    assert_eq!(f.words[0].style.opacity, Some(1.0));
    assert!(f.words[1].highlighted);
    assert_eq!(f.words[1].style.opacity, Some(0.0));

    // Before a word starts its enter curve is clamped to the first frame.
    let f = render_with(&overlay, 10, &settings).unwrap();
    assert_eq!(f.words[1].style.opacity, Some(0.0));
}

#[test]
fn word_relative_exit_uses_word_local_frames() {
    let overlay = CaptionOverlay {
        captions: vec![Caption {
            start_ms: 0.0,
            end_ms: 3000.0,
            words: vec![Word::new("Hi", 0.0, 500.0), Word::new("later", 2500.0, 3000.0)],
        }],
        ..hi_overlay(None, Some("fade"))
    };
    let settings = RenderSettings::default().with_mode(AnimationMode::WordRelative);

    let f = render_with(&overlay, 60, &settings).unwrap();
    assert_eq!(f.phase, Phase::Exit);
    assert_eq!(f.container.opacity, None);
    // "Hi" (frames 0..15) is past its own exit window.
    assert_eq!(f.words[0].style.opacity, Some(0.0));
    // "later" (frames 75..90) has not started, so its exit curve is still at rest.
    assert_eq!(f.words[1].style.opacity, Some(1.0));

    let f = render_with(&overlay, 80, &settings).unwrap();
    assert!(f.words[1].highlighted);
    assert!((f.words[1].style.opacity.unwrap() - 2.0 / 3.0).abs() < 1e-9);
    assert_eq!(f.words[0].style.opacity, Some(0.0));
}

#[test]
fn word_window_uses_floor_and_minimum_duration() {
    let fps = Fps::default();
    assert_eq!(word_window(&Word::new("a", 1000.0, 1500.0), FrameIndex(40), fps), (10.0, 15.0));
    assert_eq!(word_window(&Word::new("a", 1000.0, 1010.0), FrameIndex(30), fps), (0.0, 1.0));
    assert_eq!(word_window(&Word::new("a", 1050.0, 1000.0), FrameIndex(29), fps), (-2.0, 1.0));
}

#[test]
fn rendering_is_idempotent() {
    let overlay = hi_overlay(Some("bounce"), Some("blurIn"));
    for frame in [0, 7, 45, 60, 61] {
        let a = serde_json::to_string(&render(&overlay, frame)).unwrap();
        let b = serde_json::to_string(&render(&overlay, frame)).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn seeded_glitch_is_reproducible() {
    let overlay = hi_overlay(Some("glitch"), Some("glitch"));
    let settings = RenderSettings {
        jitter: JitterMode::Seeded { seed: 11 },
        ..RenderSettings::default()
    };
    for frame in [0, 3, 6, 12, 63, 78] {
        let a = CaptionRenderer::render_frame(&overlay, FrameIndex(frame), &settings).unwrap();
        let b = CaptionRenderer::render_frame(&overlay, FrameIndex(frame), &settings).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn invalid_settings_are_rejected() {
    let overlay = hi_overlay(None, None);
    let settings = RenderSettings {
        highlight_ramp_ms: 0.0,
        ..RenderSettings::default()
    };
    let err = CaptionRenderer::render_frame(&overlay, FrameIndex(0), &settings).unwrap_err();
    assert!(err.to_string().starts_with("validation error:"));
}

#[test]
fn frame_serializes_for_presentation() {
    let overlay = hi_overlay(Some("slideUp"), None);
    let v = serde_json::to_value(render(&overlay, 0).unwrap()).unwrap();
    assert_eq!(v["frame"], 0);
    assert_eq!(v["phase"], "enter");
    assert_eq!(v["justify"], "center");
    assert_eq!(v["container"]["transform"], "translateY(30px)");
    assert_eq!(v["container"]["letterSpacing"], "0em");
    assert_eq!(v["words"][0]["style"]["transform"], "scale(1.08)");
    assert_eq!(v["words"][0]["style"]["fontWeight"], 700.0);
}
