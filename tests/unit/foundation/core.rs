use super::*;

#[test]
fn child_and_part_paths_nest() {
    let root = TargetId::new("sobre");
    assert_eq!(root.child("reveal", 2).as_str(), "sobre/reveal/2");
    assert_eq!(root.part("quote").as_str(), "sobre/quote");
    assert_eq!(root.part("quote").child("line", 0).to_string(), "sobre/quote/line/0");
}

#[test]
fn target_id_serializes_as_plain_string() {
    let id = TargetId::new("hero/cta");
    assert_eq!(serde_json::to_string(&id).unwrap(), "\"hero/cta\"");
    let back: TargetId = serde_json::from_str("\"hero/cta\"").unwrap();
    assert_eq!(back, id);
}

#[test]
fn direction_between_offsets() {
    assert_eq!(ScrollDirection::between(0.0, 10.0), ScrollDirection::Forward);
    assert_eq!(ScrollDirection::between(10.0, 0.0), ScrollDirection::Backward);
    assert_eq!(ScrollDirection::between(5.0, 5.0), ScrollDirection::Still);
}
