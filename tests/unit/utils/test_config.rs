use builtwith_client::utils::config::{get_env_or_default, get_env_or_none};
use std::env;

#[test]
fn test_get_env_or_default_with_existing_var() {
    unsafe {
        env::set_var("BW_TEST_VAR_STRING", "  padded  ");
        let result: String = get_env_or_default("BW_TEST_VAR_STRING", "default".to_string());
        assert_eq!(result, "padded");
        env::remove_var("BW_TEST_VAR_STRING");
    }
}

#[test]
fn test_get_env_or_default_with_blank_var() {
    unsafe {
        env::set_var("BW_TEST_VAR_BLANK", "   ");
        let result: u64 = get_env_or_default("BW_TEST_VAR_BLANK", 30);
        assert_eq!(result, 30);
        env::remove_var("BW_TEST_VAR_BLANK");
    }
}

#[test]
fn test_get_env_or_default_with_invalid_parse() {
    unsafe {
        env::set_var("BW_TEST_VAR_INVALID", "thirty");
        let result: u64 = get_env_or_default("BW_TEST_VAR_INVALID", 30);
        assert_eq!(result, 30);
        env::remove_var("BW_TEST_VAR_INVALID");
    }
}

#[test]
fn test_get_env_or_none() {
    unsafe {
        env::set_var("BW_TEST_VAR_OPTION", "45");
        assert_eq!(get_env_or_none::<u64>("BW_TEST_VAR_OPTION"), Some(45));
        env::remove_var("BW_TEST_VAR_OPTION");

        env::remove_var("BW_TEST_VAR_MISSING");
        assert_eq!(get_env_or_none::<u64>("BW_TEST_VAR_MISSING"), None);

        env::set_var("BW_TEST_VAR_EMPTY", "");
        assert_eq!(get_env_or_none::<String>("BW_TEST_VAR_EMPTY"), None);
        env::remove_var("BW_TEST_VAR_EMPTY");
    }
}
