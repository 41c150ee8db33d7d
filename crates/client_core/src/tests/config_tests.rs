use super::*;

use std::{
    collections::HashMap,
    env, fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};

fn temp_settings_path(tag: &str) -> PathBuf {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let dir = env::temp_dir().join(format!("phonebook_settings_{tag}_{suffix}"));
    fs::create_dir_all(&dir).expect("temp dir");
    dir.join(SETTINGS_FILE)
}

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| vars.get(name).cloned()
}

#[test]
fn defaults_when_no_file_and_no_env() {
    let path = temp_settings_path("defaults");
    let settings = load_settings_from(&path, env_from(&[]));
    assert_eq!(settings, ClientSettings::default());
    assert_eq!(settings.api_url, DEFAULT_API_URL);
}

#[test]
fn file_values_override_defaults() {
    let path = temp_settings_path("file");
    fs::write(
        &path,
        "api_url = \"http://127.0.0.1:5000/api/PhoneBook\"\naccept_invalid_certs = true\n",
    )
    .expect("write settings");

    let settings = load_settings_from(&path, env_from(&[]));
    assert_eq!(settings.api_url, "http://127.0.0.1:5000/api/PhoneBook");
    assert!(settings.accept_invalid_certs);

    fs::remove_dir_all(path.parent().expect("parent")).expect("cleanup");
}

#[test]
fn env_overrides_file_and_app_prefix_wins() {
    let path = temp_settings_path("env");
    fs::write(&path, "api_url = \"http://from-file\"\n").expect("write settings");

    let settings = load_settings_from(
        &path,
        env_from(&[
            ("PHONEBOOK_API_URL", "http://from-env"),
            ("APP__API_URL", "http://from-app-env"),
            ("PHONEBOOK_ACCEPT_INVALID_CERTS", "yes"),
        ]),
    );
    assert_eq!(settings.api_url, "http://from-app-env");
    assert!(settings.accept_invalid_certs);

    fs::remove_dir_all(path.parent().expect("parent")).expect("cleanup");
}

#[test]
fn malformed_file_and_bad_flag_fall_back_to_defaults() {
    let path = temp_settings_path("malformed");
    fs::write(&path, "api_url = [not toml").expect("write settings");

    let settings = load_settings_from(
        &path,
        env_from(&[("APP__ACCEPT_INVALID_CERTS", "maybe"), ("PHONEBOOK_API_URL", "  ")]),
    );
    assert_eq!(settings, ClientSettings::default());

    fs::remove_dir_all(path.parent().expect("parent")).expect("cleanup");
}
