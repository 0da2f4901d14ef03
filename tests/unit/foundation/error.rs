use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        GradFieldError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        GradFieldError::config("x")
            .to_string()
            .contains("configuration error:")
    );
    assert!(
        GradFieldError::kernel("x")
            .to_string()
            .contains("kernel error:")
    );
    assert!(
        GradFieldError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = GradFieldError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
