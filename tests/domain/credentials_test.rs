use cloudrun_ingest::domain::Credentials;

#[test]
fn given_both_fields_when_checking_then_complete() {
    assert!(Credentials::new("id", "secret").is_complete());
}

#[test]
fn given_empty_field_when_checking_then_incomplete() {
    assert!(!Credentials::new("", "secret").is_complete());
    assert!(!Credentials::new("id", "").is_complete());
}

#[test]
fn given_credentials_when_debug_formatted_then_secret_is_redacted() {
    let rendered = format!("{:?}", Credentials::new("AKIDexample", "very-secret-value"));

    assert!(rendered.contains("AKIDexample"));
    assert!(!rendered.contains("very-secret-value"));
    assert!(rendered.contains("[REDACTED]"));
}
