use super::*;
use crate::animation::value::Rgba;

#[test]
fn positions_parse_gsap_forms() {
    assert_eq!(Position::parse("-=0.6").unwrap(), Position::After(-0.6));
    assert_eq!(Position::parse("+=0.25").unwrap(), Position::After(0.25));
    assert_eq!(Position::parse("<").unwrap(), Position::WithPrevious(0.0));
    assert_eq!(Position::parse("<0.1").unwrap(), Position::WithPrevious(0.1));
    assert_eq!(Position::parse("1.5").unwrap(), Position::At(1.5));
    assert_eq!(Position::parse("").unwrap(), Position::After(0.0));
    assert!(Position::parse("soon").is_err());
}

#[test]
fn position_resolves_against_timeline_end() {
    assert!((Position::After(-0.6).resolve(1.0, 0.0) - 0.4).abs() < 1e-12);
    assert!((Position::WithPrevious(0.1).resolve(3.0, 2.0) - 2.1).abs() < 1e-12);
    assert_eq!(Position::At(0.5).resolve(9.0, 9.0), 0.5);
}

#[test]
fn from_tween_ends_at_resting_value() {
    let step = AnimationStep::builder("hero/sub")
        .from(Property::TranslateY, 24.0)
        .fade_in()
        .duration(0.9)
        .ease("power2.out")
        .at("-=0.6")
        .build()
        .unwrap();
    assert_eq!(step.tweens().len(), 2);
    assert_eq!(step.tweens()[0].to, AnimValue::Number(0.0));
    assert_eq!(step.tweens()[1].from, AnimValue::Number(0.0));
    assert_eq!(step.tweens()[1].to, AnimValue::Number(1.0));
    assert_eq!(step.position(), Position::After(-0.6));
}

#[test]
fn unknown_ease_fails_at_construction() {
    let err = AnimationStep::builder("x")
        .fade_in()
        .ease("power9.out")
        .build()
        .unwrap_err();
    assert!(err.to_string().contains("unknown easing id"));
}

#[test]
fn non_positive_duration_is_rejected() {
    for d in [0.0, -1.0, f64::NAN] {
        let err = AnimationStep::builder("x")
            .fade_in()
            .duration(d)
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("positive duration"));
    }
}

#[test]
fn empty_and_mixed_steps_are_rejected() {
    assert!(AnimationStep::builder("x").build().is_err());
    assert!(
        AnimationStep::builder("x")
            .tween(Property::BackgroundColor, 0.0, Rgba::transparent())
            .build()
            .is_err()
    );
    assert!(
        AnimationStep::builder("x")
            .from(Property::PaddingY, 24.0)
            .build()
            .is_err()
    );
}
