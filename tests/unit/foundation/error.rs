use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        DanceError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(DanceError::config("x").to_string().contains("config error:"));
    assert!(
        DanceError::schedule("x")
            .to_string()
            .contains("schedule error:")
    );
    assert!(
        DanceError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = DanceError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
