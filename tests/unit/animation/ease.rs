use super::*;

fn all() -> Vec<Ease> {
    [
        "none",
        "power1.in",
        "power2.out",
        "power3.out",
        "power4.inOut",
        "sine.in",
        "sine.inOut",
        "expo.out",
        "circ.inOut",
        "cubic-bezier(0.25, 0.1, 0.25, 1.0)",
    ]
    .iter()
    .map(|id| Ease::parse(id).unwrap())
    .collect()
}

#[test]
fn endpoints_are_fixed() {
    for ease in all() {
        assert!((ease.apply(0.0)).abs() < 1e-9, "{ease}");
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-9, "{ease}");
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in all() {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b, "{ease}");
        assert!(b < c, "{ease}");
    }
}

#[test]
fn family_without_curve_defaults_to_out() {
    assert_eq!(
        Ease::parse("power3").unwrap(),
        Ease::Power {
            power: 3,
            curve: Curve::Out
        }
    );
    assert_eq!(Ease::parse("sine").unwrap(), Ease::Sine(Curve::Out));
}

#[test]
fn out_curves_lead_linear() {
    let e = Ease::parse("power3.out").unwrap();
    assert!(e.apply(0.3) > 0.3);
    let e = Ease::parse("power2.in").unwrap();
    assert!(e.apply(0.3) < 0.3);
}

#[test]
fn back_overshoots() {
    let e = Ease::parse("back.out").unwrap();
    let peak = (1..100)
        .map(|i| e.apply(f64::from(i) / 100.0))
        .fold(0.0, f64::max);
    assert!(peak > 1.0);
    let custom = Ease::parse("back.out(3)").unwrap();
    assert_eq!(
        custom,
        Ease::Back {
            curve: Curve::Out,
            overshoot: 3.0
        }
    );
}

#[test]
fn unknown_ids_fail_fast() {
    for bad in [
        "",
        "power5.out",
        "power3.sideways",
        "bounce.out",
        "power3.out(2)",
        "linear.in",
        "cubic-bezier(1.5, 0, 0, 1)",
        "cubic-bezier(0, 0, 1)",
    ] {
        let err = Ease::parse(bad).unwrap_err();
        assert!(err.to_string().contains("configuration error"), "{bad}");
    }
}

#[test]
fn ids_round_trip_through_display() {
    for ease in all() {
        let again = Ease::parse(&ease.to_string()).unwrap();
        assert_eq!(again, ease);
    }
}

#[test]
fn deserializes_from_id_string() {
    let e: Ease = serde_json::from_str("\"sine.inOut\"").unwrap();
    assert_eq!(e, Ease::Sine(Curve::InOut));
    assert!(serde_json::from_str::<Ease>("\"wobble\"").is_err());
}
