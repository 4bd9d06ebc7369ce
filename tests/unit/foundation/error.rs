use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        CaptionError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        CaptionError::invalid_range("x")
            .to_string()
            .contains("invalid range:")
    );
    assert!(
        CaptionError::evaluation("x")
            .to_string()
            .contains("evaluation error:")
    );
    assert!(
        CaptionError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = CaptionError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde_variant() {
    let err: CaptionError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, CaptionError::Serde(_)));
}
