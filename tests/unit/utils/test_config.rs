use std::env;
use storefront_client::utils::config::{get_env_or_default, get_env_or_none, get_env_origin};

#[test]
fn test_get_env_or_default_with_existing_var() {
    unsafe {
        env::set_var("SF_TEST_VAR_STRING", "test_value");
        let result: String = get_env_or_default("SF_TEST_VAR_STRING", "default".to_string());
        assert_eq!(result, "test_value");
        env::remove_var("SF_TEST_VAR_STRING");
    }
}

#[test]
fn test_get_env_or_default_with_missing_var() {
    unsafe {
        env::remove_var("SF_MISSING_VAR");
        let result: u64 = get_env_or_default("SF_MISSING_VAR", 5);
        assert_eq!(result, 5);
    }
}

#[test]
fn test_get_env_or_default_with_invalid_parse() {
    unsafe {
        env::set_var("SF_TEST_VAR_INVALID", "five");
        let result: u64 = get_env_or_default("SF_TEST_VAR_INVALID", 5);
        assert_eq!(result, 5);
        env::remove_var("SF_TEST_VAR_INVALID");
    }
}

#[test]
fn test_get_env_or_none_blank_is_none() {
    unsafe {
        env::set_var("SF_TEST_VAR_BLANK", "   ");
        let result: Option<String> = get_env_or_none("SF_TEST_VAR_BLANK");
        assert_eq!(result, None);
        env::remove_var("SF_TEST_VAR_BLANK");
    }
}

#[test]
fn test_get_env_or_none_with_existing_var() {
    unsafe {
        env::set_var("SF_TEST_VAR_OPTION", "123");
        let result: Option<u32> = get_env_or_none("SF_TEST_VAR_OPTION");
        assert_eq!(result, Some(123));
        env::remove_var("SF_TEST_VAR_OPTION");
    }
}

#[test]
fn test_get_env_origin_trims_trailing_slash() {
    unsafe {
        env::set_var("SF_TEST_ORIGIN", "https://api.shop.com/ ");
        assert_eq!(
            get_env_origin("SF_TEST_ORIGIN", "http://localhost:5000"),
            "https://api.shop.com"
        );
        env::set_var("SF_TEST_ORIGIN", " ");
        assert_eq!(
            get_env_origin("SF_TEST_ORIGIN", "http://localhost:5000/"),
            "http://localhost:5000"
        );
        env::remove_var("SF_TEST_ORIGIN");
        assert_eq!(
            get_env_origin("SF_TEST_ORIGIN", "http://localhost:5000"),
            "http://localhost:5000"
        );
    }
}
