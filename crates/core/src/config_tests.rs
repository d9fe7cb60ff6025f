use super::*;
use yare::parameterized;

#[test]
fn default_is_fail_fast() {
    assert_eq!(RegistryConfig::default().dispatch, DispatchMode::FailFast);
}

#[test]
fn builder_sets_dispatch() {
    let config = RegistryConfig::new().with_dispatch(DispatchMode::Isolate);
    assert_eq!(config.dispatch, DispatchMode::Isolate);
}

#[parameterized(
    empty_uses_defaults = { "", DispatchMode::FailFast },
    fail_fast = { "dispatch = \"fail_fast\"", DispatchMode::FailFast },
    isolate = { "dispatch = \"isolate\"", DispatchMode::Isolate },
)]
fn parses_dispatch_mode(input: &str, expected: DispatchMode) {
    let config = RegistryConfig::from_toml_str(input).unwrap();
    assert_eq!(config.dispatch, expected);
}

#[parameterized(
    unknown_mode = { "dispatch = \"eventually\"" },
    unknown_field = { "retries = 3" },
    wrong_type = { "dispatch = 1" },
)]
fn rejects_invalid_config(input: &str) {
    let err = RegistryConfig::from_toml_str(input).unwrap_err();
    assert!(
        err.to_string().starts_with("invalid registry config"),
        "unexpected error: {}",
        err
    );
}
