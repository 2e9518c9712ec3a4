use super::*;

fn vp() -> Size {
    Size::new(1280.0, 1000.0)
}

#[test]
fn parses_scrolltrigger_forms() {
    assert_eq!(Boundary::parse("top 80%").unwrap(), Boundary::top_at(80.0));
    assert_eq!(
        Boundary::parse("top top").unwrap(),
        Boundary::Edge {
            element: Anchor::Top,
            viewport: Anchor::Top
        }
    );
    assert_eq!(
        Boundary::parse("bottom bottom").unwrap(),
        Boundary::Edge {
            element: Anchor::Bottom,
            viewport: Anchor::Bottom
        }
    );
    assert_eq!(Boundary::parse("80").unwrap(), Boundary::Scroll(80.0));
    assert_eq!(Boundary::parse("600px").unwrap(), Boundary::Scroll(600.0));
    assert_eq!(Boundary::parse("+=500").unwrap(), Boundary::AfterStart(500.0));
}

#[test]
fn rejects_malformed_boundaries() {
    for bad in ["", "top", "top 80% extra", "middle 50%", "top eighty%", "+=far"] {
        assert!(Boundary::parse(bad).is_err(), "{bad}");
    }
}

#[test]
fn top_at_percent_resolves_against_viewport() {
    // Element top at 2000; it reaches 80% of a 1000px viewport when scrolled to 1200.
    let el = Rect::new(0.0, 2000.0, 1280.0, 2600.0);
    let y = Boundary::top_at(80.0).resolve(Some(el), vp(), None).unwrap();
    assert!((y - 1200.0).abs() < 1e-9);
}

#[test]
fn pin_style_boundaries_resolve() {
    let el = Rect::new(0.0, 3000.0, 1280.0, 5000.0);
    let start = Boundary::parse("top top")
        .unwrap()
        .resolve(Some(el), vp(), None)
        .unwrap();
    let end = Boundary::parse("bottom bottom")
        .unwrap()
        .resolve(Some(el), vp(), Some(start))
        .unwrap();
    assert_eq!(start, 3000.0);
    assert_eq!(end, 4000.0);
    let rel = Boundary::AfterStart(250.0)
        .resolve(None, vp(), Some(start))
        .unwrap();
    assert_eq!(rel, 3250.0);
}

#[test]
fn edge_without_element_is_a_missing_target() {
    let err = Boundary::top_at(80.0).resolve(None, vp(), None).unwrap_err();
    assert!(matches!(err, RevealError::MissingTarget(_)));
    assert!(Boundary::AfterStart(1.0).resolve(None, vp(), None).is_err());
}

#[test]
fn serde_accepts_numbers_and_strings() {
    let b: Boundary = serde_json::from_str("80").unwrap();
    assert_eq!(b, Boundary::Scroll(80.0));
    let b: Boundary = serde_json::from_str("\"top 72%\"").unwrap();
    assert_eq!(b, Boundary::top_at(72.0));
    assert_eq!(serde_json::to_string(&Boundary::Scroll(80.0)).unwrap(), "80.0");
}
