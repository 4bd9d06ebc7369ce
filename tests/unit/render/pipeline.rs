use super::*;
use crate::{
    captions::{
        model::{Caption, Word},
        styles::{AnimationSelection, CaptionStyles},
    },
    render::settings::JitterMode,
};

fn glitchy_overlay() -> CaptionOverlay {
    CaptionOverlay {
        captions: vec![
            Caption {
                start_ms: 0.0,
                end_ms: 1500.0,
                words: vec![Word::new("one", 0.0, 700.0), Word::new("two", 700.0, 1500.0)],
            },
            Caption {
                start_ms: 2000.0,
                end_ms: 4000.0,
                words: vec![Word::new("three", 2000.0, 4000.0)],
            },
        ],
        duration_in_frames: 120,
        styles: Some(CaptionStyles {
            animation: Some(AnimationSelection {
                enter: Some("glitch".into()),
                exit: Some("glitch".into()),
            }),
            ..CaptionStyles::defaults()
        }),
    }
}

fn seeded() -> RenderSettings {
    RenderSettings {
        jitter: JitterMode::Seeded { seed: 0xDEAD_BEEF },
        ..RenderSettings::default()
    }
}

fn full_range(overlay: &CaptionOverlay) -> FrameRange {
    FrameRange::new(FrameIndex(0), FrameIndex(overlay.duration_in_frames)).unwrap()
}

#[test]
fn sequential_and_parallel_agree_with_seeded_jitter() {
    let overlay = glitchy_overlay();
    let settings = seeded();
    let range = full_range(&overlay);

    let (seq, seq_stats) =
        render_frames_with_stats(&overlay, range, &settings, &RenderThreading::default()).unwrap();
    let threading = RenderThreading {
        parallel: true,
        chunk_size: 7,
        threads: Some(3),
    };
    let (par, par_stats) = render_frames_with_stats(&overlay, range, &settings, &threading).unwrap();

    assert_eq!(seq, par);
    assert_eq!(seq_stats, par_stats);
    assert_eq!(
        serde_json::to_string(&seq).unwrap(),
        serde_json::to_string(&par).unwrap()
    );
}

#[test]
fn stats_count_empty_frames() {
    let overlay = glitchy_overlay();
    let (frames, stats) = render_frames_with_stats(
        &overlay,
        full_range(&overlay),
        &seeded(),
        &RenderThreading::default(),
    )
    .unwrap();
    assert_eq!(frames.len(), 120);
    assert_eq!(stats.frames_total, 120);
    // 1500ms..2000ms is a gap: frames 46..=59.
    assert_eq!(stats.frames_empty, 14);
    assert_eq!(stats.frames_with_caption, 106);
    assert!(frames[50].is_none());
    assert_eq!(frames[60].as_ref().unwrap().caption_index, 1);
}

#[test]
fn frames_come_back_in_order() {
    let overlay = glitchy_overlay();
    let range = FrameRange::new(FrameIndex(10), FrameIndex(40)).unwrap();
    let threading = RenderThreading {
        parallel: true,
        chunk_size: 4,
        threads: None,
    };
    let (frames, _) = render_frames_with_stats(&overlay, range, &seeded(), &threading).unwrap();
    for (i, f) in frames.iter().enumerate() {
        assert_eq!(f.as_ref().unwrap().frame, FrameIndex(10 + i as u64));
    }
}

#[test]
fn empty_range_is_rejected() {
    let overlay = glitchy_overlay();
    let range = FrameRange::new(FrameIndex(5), FrameIndex(5)).unwrap();
    let err = render_frames(&overlay, range, &seeded()).unwrap_err();
    assert!(err.to_string().starts_with("validation error:"));
}

#[test]
fn zero_threads_is_rejected() {
    let overlay = glitchy_overlay();
    let threading = RenderThreading {
        parallel: true,
        chunk_size: 8,
        threads: Some(0),
    };
    assert!(
        render_frames_with_stats(&overlay, full_range(&overlay), &seeded(), &threading).is_err()
    );
}

#[test]
fn zero_chunk_size_still_renders() {
    let overlay = glitchy_overlay();
    let range = FrameRange::new(FrameIndex(0), FrameIndex(5)).unwrap();
    let threading = RenderThreading {
        parallel: true,
        chunk_size: 0,
        threads: Some(1),
    };
    let (frames, stats) = render_frames_with_stats(&overlay, range, &seeded(), &threading).unwrap();
    assert_eq!(frames.len(), 5);
    assert_eq!(stats.frames_total, 5);
}

#[test]
fn parallel_chunks_reach_the_end_of_the_timeline() {
    let overlay = glitchy_overlay();
    let range = FrameRange::new(FrameIndex(u64::MAX - 10), FrameIndex(u64::MAX)).unwrap();
    let threading = RenderThreading {
        parallel: true,
        chunk_size: 64,
        threads: Some(2),
    };
    let (frames, stats) = render_frames_with_stats(&overlay, range, &seeded(), &threading).unwrap();
    assert_eq!(frames.len(), 10);
    assert_eq!(stats.frames_empty, 10);
}
