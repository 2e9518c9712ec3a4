use super::*;
use crate::{
    animation::value::AnimValue,
    foundation::core::Size,
    host::{Layout, memory::MemoryHost},
    scroll::observer::{HostEvent, ScrollObserver},
    section::MountedSection,
    site::{Variant, layout::synthetic_host},
    trigger::region::{EventKind, TriggerMode},
};

#[test]
fn stacking_shrinks_every_card_but_the_last() {
    let content = Variant::Noir.content();
    let tl = Protocol::new(content).stacking().unwrap().unwrap();
    assert_eq!(tl.steps().len(), content.process.len() - 1);
    assert!((tl.total_duration() - (content.process.len() - 1) as f64).abs() < 1e-9);
    for s in tl.steps() {
        let scale = s
            .step()
            .tweens()
            .iter()
            .find(|t| t.property == Property::Scale)
            .unwrap();
        assert_eq!(scale.to, AnimValue::Number(STACKED_SCALE));
    }
}

#[test]
fn plan_reveals_cards_then_pins_the_stage() {
    let content = Variant::Noir.content();
    let regions = Protocol::new(content).build().unwrap().regions;
    assert_eq!(regions.len(), content.process.len() + 1);

    let pin = regions.last().unwrap();
    assert_eq!(pin.label(), "protocol-pin");
    assert_eq!(pin.mode(), TriggerMode::PinnedScrub);
    assert_eq!(pin.trigger_id(), Some("protocolo"));
    assert_eq!(pin.pinned_element(), Some(TargetId::new("protocolo/stage")));
    for r in &regions[..regions.len() - 1] {
        assert_eq!(r.mode(), TriggerMode::OneShot);
        assert_eq!(r.start(), Boundary::top_at(85.0));
    }
}

#[test]
fn scrolling_through_the_section_scrubs_the_stack() {
    let mut host: MemoryHost = synthetic_host(Variant::Noir, Size::new(1280.0, 800.0));
    let obs = ScrollObserver::default();
    let mounted =
        MountedSection::mount(&Protocol::new(Variant::Noir.content()), &obs, &mut host).unwrap();
    let pin = *mounted.handles().last().unwrap();

    // Section is 2.5 viewports tall, so the pin spans 1.5 viewports of scroll.
    let top = host.element_bounds("protocolo").unwrap().y0;
    let span = 1.5 * 800.0;

    host.scroll_to(top + span / 2.0);
    let report = obs.handle(HostEvent::Scroll, &mut host).unwrap();
    let scrub = report
        .events
        .iter()
        .find(|e| e.region == pin && matches!(e.kind, EventKind::Scrub { .. }))
        .unwrap();
    let EventKind::Scrub { progress } = scrub.kind else {
        unreachable!()
    };
    assert!((progress - 0.5).abs() < 1e-9);
    assert_eq!(
        host.number("protocolo/stage", Property::PinOffset),
        Some(span / 2.0)
    );
    let first = host.number("protocolo/card/0", Property::Scale).unwrap();
    assert!(first < 1.0 && first >= STACKED_SCALE, "{first}");
}

#[test]
fn single_card_has_nothing_to_stack() {
    use crate::site::content::{ProcessStep, SiteContent};
    static ONE: &[ProcessStep] = &[ProcessStep {
        num: "01",
        title: "Único",
        description: "",
    }];
    let content: &'static SiteContent = Box::leak(Box::new(SiteContent {
        process: ONE,
        ..*Variant::Noir.content()
    }));
    let protocol = Protocol::new(content);
    assert!(protocol.stacking().unwrap().is_none());
    let regions = protocol.build().unwrap().regions;
    assert_eq!(regions.len(), 1);
}
