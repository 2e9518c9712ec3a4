use super::*;
use crate::{
    animation::value::Property,
    host::Layout,
    trigger::region::EventKind,
};

fn parse(json: &str) -> PageDef {
    PageDef::from_reader(json.as_bytes()).unwrap()
}

#[test]
fn minimal_description_uses_defaults() {
    let def = parse(r#"{"variant":"noir"}"#);
    assert_eq!(def.variant, Variant::Noir);
    assert_eq!(def.viewport, Size::new(1280.0, 800.0));
    assert_eq!(def.observer, ObserverOpts::default());
    assert!(def.trace.is_empty());
}

#[test]
fn trace_actions_are_tagged() {
    let def = parse(
        r#"{
            "variant": "clinic",
            "trace": [
                {"action": "scroll", "to": 900},
                {"action": "frame", "dt": 0.016},
                {"action": "resize", "width": 390, "height": 844},
                {"action": "submit", "form": {"name": "Ana"}}
            ]
        }"#,
    );
    assert_eq!(def.trace[0], Action::Scroll { to: 900.0 });
    assert_eq!(def.trace[1], Action::Frame { dt: 0.016, repeat: 1 });
    assert!(matches!(&def.trace[3], Action::Submit { form } if form.name == "Ana"));
}

#[test]
fn unknown_fields_are_rejected() {
    let err = PageDef::from_reader(r#"{"variant":"clinic","zoom":2}"#.as_bytes()).unwrap_err();
    assert!(matches!(err, RevealError::Serde(_)), "{err}");
    let err =
        PageDef::from_reader(r#"{"variant":"clinic","trace":[{"action":"fly"}]}"#.as_bytes())
            .unwrap_err();
    assert!(matches!(err, RevealError::Serde(_)), "{err}");
}

#[test]
fn validate_rejects_bad_sizes_and_steps() {
    let mut def = parse(r#"{"variant":"clinic"}"#);
    def.trace.push(Action::Scroll { to: -5.0 });
    assert!(def.validate().is_err());

    let mut def = parse(r#"{"variant":"clinic"}"#);
    def.viewport = Size::new(0.0, 800.0);
    assert!(def.validate().is_err());

    let mut def = parse(r#"{"variant":"clinic"}"#);
    def.trace.push(Action::Frame { dt: 0.016, repeat: 0 });
    assert!(def.validate().is_err());
}

#[test]
fn missing_file_is_a_configuration_error() {
    let err = PageDef::from_path("/definitely/not/here.json").unwrap_err();
    assert!(matches!(err, RevealError::Configuration(_)), "{err}");
}

#[test]
fn overrides_and_removals_shape_the_host() {
    let def = parse(
        r#"{
            "variant": "clinic",
            "elements": {"extra": {"y": 10, "width": 100, "height": 20}},
            "remove": ["sobre"]
        }"#,
    );
    let host = def.host();
    assert_eq!(host.element_bounds("extra"), Some(Rect::new(0.0, 10.0, 100.0, 30.0)));
    assert!(host.element_bounds("sobre").is_none());
    assert!(host.element_bounds("especialidades").is_some());
}

#[test]
fn simulate_reports_one_step_per_action_plus_the_initial_pass() {
    let def = parse(
        r#"{
            "variant": "clinic",
            "trace": [
                {"action": "scroll", "to": 200},
                {"action": "frame", "dt": 0.05, "repeat": 10},
                {"action": "submit"}
            ]
        }"#,
    );
    let (steps, host) = def.simulate().unwrap();
    assert_eq!(steps.len(), 4);
    assert_eq!(steps[0].step, None);
    assert_eq!(steps[1].step, Some(0));

    let navbar: Vec<EventKind> = steps[1]
        .report
        .events
        .iter()
        .filter(|e| e.label == "navbar")
        .map(|e| e.kind)
        .collect();
    assert_eq!(navbar, [EventKind::Enter]);
    assert!(steps[2].report.advanced > 0);
    assert_eq!(
        steps[3].acknowledgment.as_deref(),
        Some(Variant::Clinic.content().acknowledgment)
    );
    assert_eq!(host.number("navbar", Property::BackdropBlur), Some(12.0));
}

#[test]
fn removed_trigger_element_parks_its_region_without_failing() {
    let def = parse(
        r#"{
            "variant": "clinic",
            "remove": ["sobre"],
            "trace": [{"action": "scroll", "to": 5000}]
        }"#,
    );
    let (steps, _) = def.simulate().unwrap();
    let labels: Vec<&str> = steps
        .iter()
        .flat_map(|s| s.report.events.iter())
        .map(|e| e.label.as_str())
        .collect();
    assert!(!labels.contains(&"about"));
    assert!(labels.contains(&"specialties"));
}

#[test]
fn submitting_on_noir_fails_the_simulation() {
    let def = parse(r#"{"variant":"noir","trace":[{"action":"submit"}]}"#);
    assert!(def.simulate().is_err());
}
