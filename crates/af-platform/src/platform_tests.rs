// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use af_vars::VariableStore;

#[test]
fn workspace_path_can_be_read_and_updated() {
    let platform = Platform::new(
        PathBuf::from("/tmp/ws"),
        Arc::new(RwLock::new(VariableStore::from_env())),
        PlatformConfig::default(),
    );
    assert_eq!(platform.workspace_path(), PathBuf::from("/tmp/ws"));
    platform.set_workspace_path(PathBuf::from("/tmp/ws2"));
    assert_eq!(platform.workspace_path(), PathBuf::from("/tmp/ws2"));
}

#[test]
fn default_config_lists_the_original_interactive_commands() {
    let config = PlatformConfig::default();
    assert!(config.interactive_commands.contains(&"vim".to_string()));
    assert!(config.interactive_commands.contains(&"htop".to_string()));
}
