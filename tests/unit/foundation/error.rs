use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        RevealError::configuration("x")
            .to_string()
            .contains("configuration error:")
    );
    assert!(
        RevealError::missing_target("x")
            .to_string()
            .contains("missing target:")
    );
    assert!(
        RevealError::invariant("x")
            .to_string()
            .contains("invariant violated:")
    );
    assert!(
        RevealError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = RevealError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
