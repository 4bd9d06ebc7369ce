use super::*;

#[test]
fn loads_editor_json_and_ignores_unknown_fields() {
    let overlay = CaptionOverlay::from_json_str(
        r#"{
            "id": 7,
            "type": "caption",
            "durationInFrames": 90,
            "captions": [
                {
                    "text": "Hi there",
                    "startMs": 0,
                    "endMs": 2000,
                    "words": [
                        { "word": "Hi", "startMs": 0, "endMs": 500, "confidence": 0.9 },
                        { "word": "there", "startMs": 500, "endMs": 1200 }
                    ]
                }
            ]
        }"#,
    )
    .unwrap();
    assert_eq!(overlay.duration_in_frames, 90);
    assert_eq!(overlay.captions.len(), 1);
    assert_eq!(overlay.captions[0].words[1], Word::new("there", 500.0, 1200.0));
    assert!(overlay.styles.is_none());
}

#[test]
fn missing_styles_fall_back_to_defaults() {
    let overlay = CaptionOverlay {
        duration_in_frames: 30,
        ..CaptionOverlay::default()
    };
    assert_eq!(overlay.effective_styles(), &CaptionStyles::defaults());

    let styles = CaptionStyles {
        color: Some("red".into()),
        ..CaptionStyles::default()
    };
    let overlay = CaptionOverlay {
        styles: Some(styles.clone()),
        ..overlay
    };
    assert_eq!(overlay.effective_styles(), &styles);
}

#[test]
fn caption_lookup_is_inclusive_and_first_wins() {
    let overlay = CaptionOverlay {
        captions: vec![
            Caption {
                start_ms: 0.0,
                end_ms: 1000.0,
                words: vec![],
            },
            Caption {
                start_ms: 500.0,
                end_ms: 2000.0,
                words: vec![],
            },
        ],
        duration_in_frames: 60,
        styles: None,
    };
    assert_eq!(overlay.caption_at(0.0).map(|(i, _)| i), Some(0));
    assert_eq!(overlay.caption_at(1000.0).map(|(i, _)| i), Some(0));
    assert_eq!(overlay.caption_at(1000.5).map(|(i, _)| i), Some(1));
    assert_eq!(overlay.caption_at(2000.0).map(|(i, _)| i), Some(1));
    assert!(overlay.caption_at(2000.1).is_none());
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = CaptionOverlay::from_json_str("{ not json").unwrap_err();
    assert!(err.to_string().starts_with("serialization error:"));
}

#[test]
fn serializes_camel_case() {
    let overlay = CaptionOverlay {
        captions: vec![Caption {
            start_ms: 0.0,
            end_ms: 10.0,
            words: vec![Word::new("a", 0.0, 10.0)],
        }],
        duration_in_frames: 3,
        styles: None,
    };
    let v = serde_json::to_value(&overlay).unwrap();
    assert_eq!(v["durationInFrames"], 3);
    assert_eq!(v["captions"][0]["words"][0]["startMs"], 0.0);
    assert!(v.get("styles").is_none());
    let back = CaptionOverlay::from_json_str(&overlay.to_json_string_pretty().unwrap()).unwrap();
    assert_eq!(back, overlay);
}

#[test]
fn loads_from_bytes() {
    let overlay = CaptionOverlay::from_json_slice(
        br#"{"durationInFrames": 30, "captions": [{"startMs": 0, "endMs": 900}]}"#,
    )
    .unwrap();
    assert_eq!(overlay.duration_in_frames, 30);
    assert!(overlay.captions[0].words.is_empty());
    assert!(CaptionOverlay::from_json_slice(b"[]").is_err());
}
