use super::*;
use crate::{animation::step::AnimationStep, host::memory::MemoryHost};
use kurbo::Size;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn fade(target: &str, duration: f64, at: &str) -> AnimationStep {
    AnimationStep::builder(target)
        .fade_in()
        .duration(duration)
        .at(at)
        .build()
        .unwrap()
}

#[test]
fn negative_offset_overlaps_previous_tail() {
    let tl = Timeline::build([fade("a", 1.0, ""), fade("b", 0.8, "-=0.6")]).unwrap();
    assert!(close(tl.steps()[0].start(), 0.0));
    assert!(close(tl.steps()[1].start(), 0.4));
    assert!(close(tl.total_duration(), 1.2));
}

#[test]
fn offsets_are_relative_to_furthest_end() {
    // B ends before A does; C is placed after A's tail, not B's.
    let tl = Timeline::build([
        fade("a", 2.0, ""),
        fade("b", 0.5, "0.2"),
        fade("c", 1.0, "-=0.5"),
    ])
    .unwrap();
    assert!(close(tl.steps()[2].start(), 1.5));
}

#[test]
fn start_before_origin_is_rejected() {
    let err = Timeline::build([fade("a", 1.0, "-=0.3")]).unwrap_err();
    assert!(err.to_string().contains("starts before 0"));
    assert!(Timeline::build(Vec::<AnimationStep>::new()).is_err());
}

#[test]
fn stagger_expands_per_target() {
    let targets = (0..3).map(|i| TargetId::new("hero").child("line", i));
    let tl = Timeline::builder("hero")
        .stagger(
            targets,
            0.1,
            AnimationStep::builder("hero")
                .from(Property::TranslateY, 48.0)
                .fade_in()
                .duration(1.1)
                .ease("power3.out"),
        )
        .step(
            AnimationStep::builder("hero/sub")
                .fade_in()
                .duration(0.9)
                .at("-=0.6"),
        )
        .build()
        .unwrap();
    let starts: Vec<f64> = tl.steps().iter().map(|s| s.start()).collect();
    assert!(close(starts[0], 0.0));
    assert!(close(starts[1], 0.1));
    assert!(close(starts[2], 0.2));
    // Last line ends at 1.3; the subtitle overlaps its final 0.6s.
    assert!(close(starts[3], 0.7));
    assert_eq!(tl.steps()[2].step().target().as_str(), "hero/line/2");
}

#[test]
fn bad_stagger_template_surfaces_on_build() {
    let err = Timeline::builder("x")
        .stagger(
            [TargetId::new("a")],
            0.1,
            AnimationStep::builder("x").fade_in().ease("nope"),
        )
        .build()
        .unwrap_err();
    assert!(err.to_string().contains("unknown easing id"));
}

#[test]
fn play_is_idempotent_and_completes() {
    let mut tl = Timeline::build([fade("a", 1.0, "")]).unwrap();
    assert_eq!(tl.state(), PlayState::Idle);
    tl.play();
    tl.tick(0.4);
    tl.play();
    assert_eq!(tl.state(), PlayState::Playing);
    assert!(close(tl.playhead(), 0.4));
    tl.tick(1.0);
    assert_eq!(tl.state(), PlayState::Completed);
    assert!(close(tl.progress(), 1.0));
    tl.play();
    assert_eq!(tl.state(), PlayState::Completed);
    assert!(!tl.tick(0.1));
}

#[test]
fn delay_holds_the_playhead() {
    let mut tl = Timeline::builder("d")
        .delay(0.3)
        .push(fade("a", 1.0, ""))
        .build()
        .unwrap();
    tl.play();
    assert!(!tl.tick(0.2));
    assert!(close(tl.playhead(), 0.0));
    assert!(tl.tick(0.2));
    assert!(close(tl.playhead(), 0.1));
}

#[test]
fn reverse_returns_to_idle_and_can_replay() {
    let mut tl = Timeline::build([fade("nav", 0.4, "")]).unwrap();
    tl.play();
    tl.tick(0.4);
    assert_eq!(tl.state(), PlayState::Completed);
    tl.reverse();
    assert_eq!(tl.state(), PlayState::Reversing);
    tl.tick(0.1);
    tl.play();
    assert_eq!(tl.state(), PlayState::Playing);
    tl.reverse();
    tl.tick(1.0);
    assert_eq!(tl.state(), PlayState::Idle);
    assert!(close(tl.playhead(), 0.0));
    tl.play();
    assert_eq!(tl.state(), PlayState::Playing);
}

#[test]
fn yoyo_repeat_bounces() {
    let mut tl = Timeline::builder("cue")
        .repeat(Repeat::Infinite)
        .yoyo(true)
        .step(
            AnimationStep::builder("cue")
                .to(Property::TranslateY, 8.0)
                .duration(1.0),
        )
        .build()
        .unwrap();
    tl.play();
    tl.tick(1.25);
    assert!(close(tl.playhead(), 0.75));
    tl.tick(0.5);
    assert!(close(tl.playhead(), 0.25));
    tl.tick(0.5);
    assert!(close(tl.playhead(), 0.25));
    assert_eq!(tl.state(), PlayState::Playing);
}

#[test]
fn counted_repeat_completes() {
    let mut tl = Timeline::builder("r")
        .repeat(Repeat::Count(1))
        .push(fade("a", 1.0, ""))
        .build()
        .unwrap();
    tl.play();
    tl.tick(1.5);
    assert_eq!(tl.state(), PlayState::Playing);
    assert!(close(tl.playhead(), 0.5));
    tl.tick(0.6);
    assert_eq!(tl.state(), PlayState::Completed);
}

#[test]
fn scrub_maps_progress_directly() {
    let mut tl = Timeline::build([
        AnimationStep::builder("card")
            .tween(Property::Scale, 1.0, 0.9)
            .duration(2.0)
            .build()
            .unwrap(),
    ])
    .unwrap();
    tl.scrub(0.5);
    assert!(close(tl.playhead(), 1.0));
    let v = tl
        .value_of(&TargetId::new("card"), &Property::Scale)
        .unwrap();
    assert!(close(v.as_number().unwrap(), 0.95));
    // Parked: frame time does not move a scrubbed timeline.
    assert!(!tl.tick(0.5));
    tl.scrub(2.0);
    assert_eq!(tl.state(), PlayState::Completed);
    tl.scrub(0.0);
    assert_eq!(tl.state(), PlayState::Idle);
}

#[test]
fn unstarted_steps_show_from_values() {
    let tl = Timeline::build([fade("a", 1.0, ""), fade("b", 1.0, "")]).unwrap();
    let mut host = MemoryHost::new(Size::new(10.0, 10.0));
    tl.apply(&mut host);
    assert_eq!(host.number("a", Property::Opacity), Some(0.0));
    assert_eq!(host.number("b", Property::Opacity), Some(0.0));
}

#[test]
fn later_started_step_overrides_earlier() {
    let mut tl = Timeline::build([
        AnimationStep::builder("x")
            .tween(Property::TranslateY, 0.0, 10.0)
            .duration(1.0)
            .build()
            .unwrap(),
        AnimationStep::builder("x")
            .tween(Property::TranslateY, 100.0, 200.0)
            .duration(1.0)
            .build()
            .unwrap(),
    ])
    .unwrap();
    tl.scrub(0.25);
    let y = |tl: &Timeline| {
        tl.value_of(&TargetId::new("x"), &Property::TranslateY)
            .and_then(|v| v.as_number())
            .unwrap()
    };
    assert!(close(y(&tl), 5.0));
    tl.scrub(0.75);
    assert!(close(y(&tl), 150.0));
}
