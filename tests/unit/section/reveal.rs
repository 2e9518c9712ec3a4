use super::*;
use crate::{animation::value::AnimValue, trigger::region::TriggerMode};

fn items(n: usize) -> (TargetId, Vec<TargetId>) {
    let anchor = TargetId::new("s");
    let targets = children(&anchor, "item", n);
    (anchor, targets)
}

fn starts(region: &TriggerRegion) -> Vec<f64> {
    let tl = region.timeline().unwrap().borrow();
    tl.steps().iter().map(|s| s.start()).collect()
}

#[test]
fn children_are_named_by_kind_and_index() {
    let ids = children(&TargetId::new("a"), "card", 2);
    assert_eq!(ids, vec![TargetId::new("a/card/0"), TargetId::new("a/card/1")]);
}

#[test]
fn staggered_group_is_one_region_on_the_shared_trigger() {
    let (anchor, targets) = items(3);
    let regions = RevealGroup::new("g", anchor, targets).stagger(0.1).regions().unwrap();
    assert_eq!(regions.len(), 1);

    let r = &regions[0];
    assert_eq!(r.label(), "g");
    assert_eq!(r.mode(), TriggerMode::OneShot);
    assert_eq!(r.trigger_id(), Some("s"));
    assert_eq!(r.start(), Boundary::top_at(80.0));

    let s = starts(r);
    assert_eq!(s.len(), 3);
    for (got, want) in s.iter().zip([0.0, 0.1, 0.2]) {
        assert!((got - want).abs() < 1e-9, "{s:?}");
    }
}

#[test]
fn individual_sequencing_gives_each_target_its_own_region_and_delay() {
    let (anchor, targets) = items(3);
    let regions = RevealGroup::new("g", anchor, targets.clone())
        .individually(0.2)
        .start(85.0)
        .regions()
        .unwrap();
    assert_eq!(regions.len(), 3);
    for (i, r) in regions.iter().enumerate() {
        assert_eq!(r.label(), format!("g[{i}]"));
        assert_eq!(r.trigger_id(), Some(targets[i].as_str()));
        assert_eq!(r.start(), Boundary::top_at(85.0));
        let delay = r.timeline().unwrap().borrow().delay();
        assert!((delay - i as f64 * 0.2).abs() < 1e-9);
    }
}

#[test]
fn template_fades_in_from_the_configured_offset() {
    let (anchor, targets) = items(1);
    let tl = RevealGroup::new("g", anchor, targets)
        .from_x(-30.0)
        .duration(0.85)
        .ease("power2.out")
        .timelines()
        .unwrap()
        .remove(0);
    let tl = tl.borrow();
    let step = tl.steps()[0].step();
    assert_eq!(step.duration(), 0.85);
    assert_eq!(step.ease().to_string(), "power2.out");

    let slide = step
        .tweens()
        .iter()
        .find(|t| t.property == Property::TranslateX)
        .unwrap();
    assert_eq!(slide.from, AnimValue::Number(-30.0));
    assert_eq!(slide.to, AnimValue::Number(0.0));
    assert!(step.tweens().iter().any(|t| t.property == Property::Opacity));
}

#[test]
fn group_without_targets_is_rejected() {
    let err = RevealGroup::new("g", TargetId::new("s"), Vec::new())
        .regions()
        .unwrap_err();
    assert!(err.to_string().contains("no steps"), "{err}");
}

#[test]
fn section_build_concatenates_groups_in_order() {
    let (anchor, targets) = items(2);
    let layout = SectionLayout::flow(anchor.clone(), crate::section::Extent::Px(100.0), Vec::new());
    let section = RevealSection::new(
        "sec",
        layout.clone(),
        vec![
            RevealGroup::new("first", anchor.clone(), targets.clone()),
            RevealGroup::new("second", anchor, targets).individually(0.1),
        ],
    );
    assert_eq!(section.name(), "sec");
    assert_eq!(section.layout(), layout);

    let labels: Vec<String> = section
        .build()
        .unwrap()
        .regions
        .iter()
        .map(|r| r.label().to_owned())
        .collect();
    assert_eq!(labels, ["first", "second[0]", "second[1]"]);
}
