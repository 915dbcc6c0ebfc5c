// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[parameterized(
    url = { "https://example.com/x", VariableType::Url },
    unix_path = { "/usr/local/bin", VariableType::Path },
    unix_file = { "/usr/local/bin/ls", VariableType::File },
    win_path = { "C:\\Windows", VariableType::WinPath },
    win_file = { "C:\\Windows\\notepad.exe", VariableType::WinFile },
    boolean = { "yes", VariableType::Bool },
    integer = { "42", VariableType::Int },
    float = { "3.14", VariableType::Float },
    version = { "1.2.3", VariableType::Version },
    plain_string = { "hello", VariableType::String },
)]
fn infers_expected_type(value: &str, want: VariableType) {
    assert_eq!(VariableType::infer(value), want);
}
