// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serial_test::serial;

#[test]
fn no_status_code_is_uncolored() {
    assert_eq!(result_color("OK", None), "OK");
}

#[test]
#[serial]
fn zero_status_is_green_when_colorized() {
    std::env::set_var("COLOR", "1");
    assert!(result_color("OK", Some(0)).contains("32m"));
    std::env::remove_var("COLOR");
}

#[test]
#[serial]
fn warning_prefixed_text_is_yellow() {
    std::env::set_var("COLOR", "1");
    assert!(result_color("warning: retrying", Some(1)).contains("33m"));
    std::env::remove_var("COLOR");
}

#[test]
#[serial]
fn error_prefixed_text_is_red() {
    std::env::set_var("COLOR", "1");
    assert!(result_color("error: boom", Some(1)).contains("31m"));
    std::env::remove_var("COLOR");
}

#[test]
#[serial]
fn other_nonzero_is_magenta() {
    std::env::set_var("COLOR", "1");
    assert!(result_color("NO", Some(1)).contains("35m"));
    std::env::remove_var("COLOR");
}

#[test]
#[serial]
fn no_color_env_disables_colorization() {
    std::env::set_var("NO_COLOR", "1");
    assert_eq!(result_color("OK", Some(0)), "OK");
    std::env::remove_var("NO_COLOR");
}
