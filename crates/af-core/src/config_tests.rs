// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn proxy_parses_host_port() {
    let proxy = ProxyConfig::parse("proxy.example.com:8080").unwrap();
    assert_eq!(proxy.host, "proxy.example.com");
    assert_eq!(proxy.port, 8080);
    assert_eq!(proxy.url(), "http://proxy.example.com:8080");
}

#[test]
fn proxy_rejects_missing_port() {
    assert!(ProxyConfig::parse("proxy.example.com").is_none());
}
