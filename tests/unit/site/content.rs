use super::*;

#[test]
fn clinic_content_matches_page() {
    let c = SiteContent::for_variant(Variant::Clinic);
    assert_eq!(c.variant, Variant::Clinic);
    assert_eq!(c.nav.len(), 5);
    assert_eq!(c.credentials.len(), 4);
    assert_eq!(c.specialties.len(), 6);
    assert_eq!(c.conditions.len(), 10);
    assert_eq!(c.testimonials.len(), 4);
    assert_eq!(c.process.len(), 5);
    assert_eq!(c.contrasts.len(), 4);
    assert!(c.acknowledgment.starts_with("Mensagem enviada!"));
}

#[test]
fn noir_content_matches_page() {
    let c = SiteContent::for_variant(Variant::Noir);
    assert_eq!(c.stats.len(), 4);
    assert_eq!(c.specialties.len(), 3);
    assert_eq!(c.conditions.len(), 13);
    assert_eq!(c.process.len(), 3);
    assert_eq!(c.process[2].title, "Transformação");
    assert_eq!(c.testimonials.len(), 6);
    assert_eq!(c.weekdays.len(), 7);
    assert!(c.typewriter.ends_with("Decodificando símbolos..."));
}

#[test]
fn nav_anchors_are_unique() {
    for variant in [Variant::Clinic, Variant::Noir] {
        let c = SiteContent::for_variant(variant);
        let mut anchors: Vec<_> = c.nav.iter().map(|l| l.anchor).collect();
        anchors.sort_unstable();
        anchors.dedup();
        assert_eq!(anchors.len(), c.nav.len());
    }
}
