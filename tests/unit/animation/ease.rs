use super::*;

const ALL: [Ease; 9] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::InOutSine,
    Ease::OutBack,
];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert!(ease.apply(0.0).abs() < 1e-12, "{ease:?} at 0");
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-12, "{ease:?} at 1");
    }
}

#[test]
fn bounded_curves_are_monotonic() {
    for ease in ALL.into_iter().filter(|e| e.is_bounded()) {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b, "{ease:?}");
        assert!(b < c, "{ease:?}");
    }
}

#[test]
fn out_back_overshoots() {
    assert!(Ease::OutBack.apply(0.8) > 1.0);
}

#[test]
fn input_is_clamped() {
    assert_eq!(Ease::InQuad.apply(-3.0), 0.0);
    assert_eq!(Ease::InQuad.apply(4.0), 1.0);
}

#[test]
fn serde_names_are_camel_case() {
    let s = serde_json::to_string(&Ease::InOutCubic).unwrap();
    assert_eq!(s, "\"inOutCubic\"");
}
