use super::*;

#[test]
fn parses_hex_forms() {
    assert_eq!(
        Rgba::parse("#e7e5e4").unwrap().to_rgba8(),
        [0xe7, 0xe5, 0xe4, 255]
    );
    assert_eq!(Rgba::parse("#fff").unwrap().to_rgba8(), [255, 255, 255, 255]);
    assert_eq!(
        Rgba::parse("#c4a35a80").unwrap().to_rgba8(),
        [0xc4, 0xa3, 0x5a, 0x80]
    );
}

#[test]
fn parses_rgba_and_transparent() {
    let c = Rgba::parse("rgba(250,250,249,0.96)").unwrap();
    assert_eq!(c.to_rgba8()[..3], [250, 250, 249]);
    assert!((c.a - 0.96).abs() < 1e-12);
    assert_eq!(Rgba::parse("transparent").unwrap(), Rgba::transparent());
    assert_eq!(Rgba::parse("rgb(0, 0, 0)").unwrap().a, 1.0);
}

#[test]
fn rejects_garbage_colors() {
    for bad in ["#12", "#ggg", "rgba(1,2)", "hsl(0,0%,0%)", "blue"] {
        assert!(Rgba::parse(bad).is_err(), "{bad}");
    }
}

#[test]
fn color_lerp_is_channelwise() {
    let a = Rgba::new(0.0, 0.0, 0.0, 0.0);
    let b = Rgba::new(1.0, 0.5, 0.25, 1.0);
    let mid = Rgba::lerp(&a, &b, 0.5);
    assert_eq!(mid, Rgba::new(0.5, 0.25, 0.125, 0.5));
}

#[test]
fn kinds_must_match_to_blend() {
    let n = AnimValue::Number(1.0);
    let c = AnimValue::Color(Rgba::transparent());
    assert!(n.same_kind(&AnimValue::Number(3.0)));
    assert!(!n.same_kind(&c));
    assert_eq!(
        AnimValue::lerp(&AnimValue::Number(0.0), &AnimValue::Number(10.0), 0.25),
        AnimValue::Number(2.5)
    );
}

#[test]
fn property_names_round_trip() {
    for p in [
        Property::Opacity,
        Property::TranslateY,
        Property::BackgroundColor,
        Property::PinOffset,
        Property::Custom("typed-chars".to_owned()),
    ] {
        let back: Property = p.name().parse().unwrap();
        assert_eq!(back, p);
    }
    assert_eq!(Property::Opacity.natural(), Some(AnimValue::Number(1.0)));
    assert_eq!(Property::Custom("z".to_owned()).natural(), None);
}
