use cloudrun_ingest::presentation::config::{Environment, Settings, StorageProviderSetting};

#[test]
fn given_environment_names_when_parsing_then_maps_aliases() {
    assert_eq!(
        Environment::try_from("production".to_string()),
        Ok(Environment::Prod)
    );
    assert_eq!(Environment::try_from("Local".to_string()), Ok(Environment::Local));
    assert_eq!(Environment::try_from("test".to_string()), Ok(Environment::Test));
    assert!(Environment::try_from("staging".to_string()).is_err());
}

#[test]
fn given_environment_when_naming_settings_file_then_uses_lowercase_name() {
    assert_eq!(Environment::Prod.settings_file(), "appsettings.prod");
}

#[test]
fn given_no_settings_file_when_loading_then_defaults_target_cos_in_shanghai() {
    let settings = Settings::load(Environment::Test).unwrap();

    assert_eq!(settings.storage.provider, StorageProviderSetting::Cos);
    assert_eq!(settings.storage.region, "ap-shanghai");
    assert_eq!(settings.credentials.secret_id_var, "TENCENTCLOUD_SECRETID");
    assert_eq!(settings.credentials.secret_key_var, "TENCENTCLOUD_SECRETKEY");
}
