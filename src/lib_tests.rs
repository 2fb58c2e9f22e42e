use super::*;

#[test]
fn exit_codes_are_distinct() {
    assert_ne!(EXIT_SUCCESS, EXIT_CONFIG_ERROR);
}

#[test]
fn error_exit_code_is_two() {
    assert_eq!(EXIT_CONFIG_ERROR, 2);
}
