use super::*;

#[test]
fn default_config_points_at_local_api() {
    let config = ClientConfig::default();
    assert_eq!(config.api_base, "http://localhost:5000/api");
    assert_eq!(config.storage_keys.user, "user");
    assert_eq!(config.storage_keys.token, "token");
    assert_eq!(config.task_poll_interval_ms, 2_000);
}

#[test]
fn api_base_override_trims_trailing_slashes() {
    let config = ClientConfig::with_api_base(Some("https://parking.example.com/api//"));
    assert_eq!(config.api_base, "https://parking.example.com/api");
}

#[test]
fn blank_api_base_override_falls_back_to_default() {
    let config = ClientConfig::with_api_base(Some("   "));
    assert_eq!(config.api_base, DEFAULT_API_BASE);
}

#[test]
fn missing_api_base_override_uses_default() {
    let config = ClientConfig::with_api_base(None);
    assert_eq!(config, ClientConfig::default());
}
