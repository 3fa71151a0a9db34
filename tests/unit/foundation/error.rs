use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        SmartzoomError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        SmartzoomError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SmartzoomError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde_variant() {
    let err: SmartzoomError = serde_json::from_str::<Vec<f64>>("[1, ")
        .unwrap_err()
        .into();
    assert!(matches!(err, SmartzoomError::Serde(_)));
}
