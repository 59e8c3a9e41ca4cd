use furniture_ner::config::constants::USER_AGENT;
use furniture_ner::network::IdentityProfile;

#[test]
fn test_default_profile_uses_browser_agent() {
    let profile = IdentityProfile::default();
    assert_eq!(profile.user_agent, USER_AGENT);
    assert!(profile.user_agent.contains("Chrome/120"));
}

#[test]
fn test_headers_integrity() {
    let profile = IdentityProfile::new("furniture-ner-test/1.0");
    let headers = profile.headers().unwrap();

    assert_eq!(headers.get("User-Agent").unwrap(), "furniture-ner-test/1.0");
    assert_eq!(headers.get("Accept-Language").unwrap(), "en-US,en;q=0.9");
    assert_eq!(headers.get("Upgrade-Insecure-Requests").unwrap(), "1");
}

#[test]
fn test_invalid_header_value_is_rejected() {
    let profile = IdentityProfile::new("bad\nagent");
    assert!(profile.headers().is_err());
}
