use super::*;

#[test]
fn seeded_stream_is_deterministic() {
    let mut a = SeededJitter::new(123);
    let mut b = SeededJitter::new(123);
    for _ in 0..10 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
}

#[test]
fn per_frame_streams_differ() {
    let a = SeededJitter::for_frame(7, 1).next_unit();
    let b = SeededJitter::for_frame(7, 2).next_unit();
    assert_ne!(a, b);
    assert_eq!(a, SeededJitter::for_frame(7, 1).next_unit());
}

#[test]
fn samples_stay_in_unit_interval() {
    let mut seeded = SeededJitter::new(99);
    let mut system = SystemJitter::default();
    for _ in 0..1000 {
        let s = seeded.next_unit();
        assert!((0.0..1.0).contains(&s));
        let s = system.next_unit();
        assert!((0.0..1.0).contains(&s));
    }
}

#[test]
fn fixed_jitter_repeats() {
    let mut j = FixedJitter(0.25);
    assert_eq!(j.next_unit(), 0.25);
    assert_eq!(j.next_unit(), 0.25);
}
