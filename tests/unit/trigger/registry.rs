use super::*;
use crate::{
    animation::{step::AnimationStep, timeline::Timeline},
    foundation::core::Size,
    host::memory::MemoryHost,
    trigger::boundary::Boundary,
};

fn host() -> MemoryHost {
    MemoryHost::new(Size::new(1280.0, 1000.0))
        .with_element("sobre", Rect::new(0.0, 1500.0, 1280.0, 2300.0))
        .with_element("stage", Rect::new(0.0, 3000.0, 1280.0, 4000.0))
}

fn kinds(f: &Option<Firing>) -> Vec<EventKind> {
    f.as_ref()
        .map(|f| f.events.iter().map(|e| e.kind).collect())
        .unwrap_or_default()
}

#[test]
fn handles_are_monotonic_and_never_reused() {
    let mut reg = TriggerRegistry::new();
    let a = reg.register(TriggerRegion::toggle("a", Boundary::Scroll(1.0))).unwrap();
    let b = reg.register(TriggerRegion::toggle("b", Boundary::Scroll(2.0))).unwrap();
    assert!(reg.unregister(a));
    assert!(!reg.unregister(a));
    let c = reg.register(TriggerRegion::toggle("c", Boundary::Scroll(3.0))).unwrap();
    assert!(a < b && b < c);
    assert_eq!(reg.handles(), vec![b, c]);
    assert!(!reg.contains(a));
}

#[test]
fn one_shot_fires_once_when_crossed() {
    let h = host();
    let mut reg = TriggerRegistry::new();
    // top 72% of an element at y=1500 in a 1000px viewport resolves to 780.
    let id = reg
        .register(TriggerRegion::one_shot("about", Boundary::top_at(72.0)).trigger("sobre"))
        .unwrap();

    assert!(kinds(&reg.evaluate(id, 0.0, &h).unwrap()).is_empty());
    assert_eq!(reg.status(id), Some(RegionStatus::Armed));
    assert!(kinds(&reg.evaluate(id, 779.0, &h).unwrap()).is_empty());
    // Reaching the boundary is not enough; the scroll must pass it.
    assert!(kinds(&reg.evaluate(id, 780.0, &h).unwrap()).is_empty());
    assert_eq!(reg.status(id), Some(RegionStatus::Armed));

    let f = reg.evaluate(id, 780.5, &h).unwrap();
    assert_eq!(kinds(&f), vec![EventKind::Enter]);
    assert_eq!(f.unwrap().cue, Some(Cue::Play));
    assert_eq!(reg.status(id), Some(RegionStatus::Fired));

    for y in [0.0, 2000.0, 100.0, 5000.0] {
        assert!(reg.evaluate(id, y, &h).unwrap().is_none());
    }
}

#[test]
fn first_evaluation_primes_animation() {
    let h = host();
    let mut reg = TriggerRegistry::new();
    let id = reg
        .register(TriggerRegion::one_shot("about", Boundary::Scroll(500.0)))
        .unwrap();
    let f = reg.evaluate(id, 0.0, &h).unwrap().unwrap();
    assert!(f.prime);
    assert!(f.events.is_empty());
    assert!(reg.evaluate(id, 0.0, &h).unwrap().is_none());
}

#[test]
fn toggle_alternates() {
    let h = host();
    let mut reg = TriggerRegistry::new();
    let id = reg
        .register(TriggerRegion::toggle("navbar", Boundary::Scroll(80.0)))
        .unwrap();
    let mut seen = Vec::new();
    for y in [0.0, 100.0, 120.0, 50.0, 40.0, 100.0, 0.0] {
        seen.extend(kinds(&reg.evaluate(id, y, &h).unwrap()));
    }
    assert_eq!(
        seen,
        vec![
            EventKind::Enter,
            EventKind::LeaveBack,
            EventKind::Enter,
            EventKind::LeaveBack
        ]
    );
    assert_eq!(reg.status(id), Some(RegionStatus::Below));
}

#[test]
fn back_to_top_stays_hidden_at_exactly_the_threshold() {
    let h = host();
    let mut reg = TriggerRegistry::new();
    let id = reg
        .register(TriggerRegion::toggle("back-to-top", Boundary::Scroll(600.0)))
        .unwrap();
    assert!(kinds(&reg.evaluate(id, 0.0, &h).unwrap()).is_empty());
    assert!(kinds(&reg.evaluate(id, 600.0, &h).unwrap()).is_empty());
    assert_eq!(reg.status(id), Some(RegionStatus::Below));

    assert_eq!(kinds(&reg.evaluate(id, 600.5, &h).unwrap()), vec![EventKind::Enter]);
    assert_eq!(reg.status(id), Some(RegionStatus::Above));
    // Falling back onto the threshold counts as leaving.
    assert_eq!(kinds(&reg.evaluate(id, 600.0, &h).unwrap()), vec![EventKind::LeaveBack]);
}

#[test]
fn one_shot_with_leave_back_callback_toggles() {
    let h = host();
    let mut reg = TriggerRegistry::new();
    let region = TriggerRegion::one_shot("nav", Boundary::Scroll(80.0))
        .on_enter(|_| {})
        .on_leave_back(|_| {});
    assert_eq!(region.mode(), TriggerMode::Toggle);
    let id = reg.register(region).unwrap();
    assert_eq!(reg.status(id), Some(RegionStatus::Below));

    let mut seen = Vec::new();
    for y in [0.0, 200.0, 20.0, 200.0, 20.0] {
        seen.extend(kinds(&reg.evaluate(id, y, &h).unwrap()));
    }
    assert_eq!(
        seen,
        vec![
            EventKind::Enter,
            EventKind::LeaveBack,
            EventKind::Enter,
            EventKind::LeaveBack
        ]
    );
    assert!(reg.take_callback(id, EventKind::LeaveBack).is_some());
}

#[test]
fn missing_trigger_element_parks_region() {
    let h = host();
    let mut reg = TriggerRegistry::new();
    let id = reg
        .register(TriggerRegion::one_shot("ghost", Boundary::top_at(80.0)).trigger("nope"))
        .unwrap();
    for y in [0.0, 10_000.0, 0.0, 20_000.0] {
        assert!(kinds(&reg.evaluate(id, y, &h).unwrap()).is_empty());
    }
    assert_eq!(reg.status(id), Some(RegionStatus::Unresolved));
}

#[test]
fn missing_trigger_element_leaves_content_at_rest() {
    let h = host();
    let mut reg = TriggerRegistry::new();
    let tl = Timeline::builder("ghost")
        .step(AnimationStep::builder("ghost/item").fade_in().duration(0.5))
        .build()
        .unwrap()
        .shared();
    let id = reg
        .register(
            TriggerRegion::one_shot("ghost", Boundary::top_at(80.0))
                .trigger("nope")
                .animation(tl),
        )
        .unwrap();
    assert!(reg.evaluate(id, 0.0, &h).unwrap().is_none());
}

#[test]
fn pinned_region_scrubs_and_reports_crossings() {
    let h = host();
    let mut reg = TriggerRegistry::new();
    let id = reg
        .register_in(
            TriggerRegion::pinned(
                "protocol",
                Boundary::parse("top top").unwrap(),
                Boundary::AfterStart(400.0),
            )
            .trigger("stage"),
            &h,
        )
        .unwrap();

    let f = reg.evaluate(id, 3200.0, &h).unwrap().unwrap();
    assert_eq!(
        f.events.iter().map(|e| e.kind).collect::<Vec<_>>(),
        vec![EventKind::Enter, EventKind::Scrub { progress: 0.5 }]
    );
    assert_eq!(f.cue, Some(Cue::Scrub(0.5)));
    assert_eq!(f.pin, Some((TargetId::new("stage"), 200.0)));
    assert_eq!(reg.status(id), Some(RegionStatus::Pinned(PinPhase::Pinning)));

    let f = reg.evaluate(id, 3600.0, &h).unwrap();
    assert_eq!(
        kinds(&f),
        vec![EventKind::Leave, EventKind::Scrub { progress: 1.0 }]
    );
    let f = reg.evaluate(id, 2000.0, &h).unwrap();
    assert_eq!(
        kinds(&f),
        vec![
            EventKind::EnterBack,
            EventKind::LeaveBack,
            EventKind::Scrub { progress: 0.0 }
        ]
    );
}

#[test]
fn register_in_rejects_degenerate_resolved_pin() {
    let mut reg = TriggerRegistry::new();
    // start and end both resolve to the element top.
    let err = reg
        .register_in(
            TriggerRegion::pinned(
                "p",
                Boundary::parse("top top").unwrap(),
                Boundary::parse("bottom bottom").unwrap(),
            )
            .trigger("sobre"),
            &MemoryHost::new(Size::new(1280.0, 800.0))
                .with_element("sobre", Rect::new(0.0, 1500.0, 1280.0, 2300.0)),
        )
        .unwrap_err();
    assert!(matches!(err, RevealError::Configuration(_)));
    assert!(reg.is_empty());
}

#[test]
fn callbacks_can_be_taken_and_restored() {
    let mut reg = TriggerRegistry::new();
    let id = reg
        .register(TriggerRegion::toggle("n", Boundary::Scroll(1.0)).on_enter(|_| {}))
        .unwrap();
    let cb = reg.take_callback(id, EventKind::Enter).unwrap();
    assert!(reg.take_callback(id, EventKind::Enter).is_none());
    assert!(reg.restore_callback(id, EventKind::Enter, cb).is_none());
    let cb = reg.take_callback(id, EventKind::Enter).unwrap();
    reg.unregister(id);
    assert!(reg.restore_callback(id, EventKind::Enter, cb).is_some());
}

#[test]
fn timelines_are_deduplicated() {
    use crate::animation::value::Property;
    let tl = Timeline::builder("t")
        .step(AnimationStep::builder("a").duration(1.0).tween(Property::Opacity, 0.0, 1.0))
        .build()
        .unwrap()
        .shared();
    let mut reg = TriggerRegistry::new();
    reg.register(TriggerRegion::toggle("a", Boundary::Scroll(1.0)).animation(tl.clone()))
        .unwrap();
    reg.register(TriggerRegion::toggle("b", Boundary::Scroll(2.0)).animation(tl))
        .unwrap();
    assert_eq!(reg.timelines().len(), 1);
}

#[test]
#[cfg_attr(debug_assertions, should_panic(expected = "fired twice"))]
fn double_fire_is_loud() {
    let mut state = SlotState::Armed;
    mark_fired(&mut state, "about").unwrap();
    let err = mark_fired(&mut state, "about").unwrap_err();
    assert!(matches!(err, RevealError::Invariant(_)));
}
