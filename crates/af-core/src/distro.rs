// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Linux distribution identification, used to resolve distro-keyed
//! `status_on_error` maps and `validate_prerequisite` argument shapes.

use std::fmt;
use std::path::Path;

/// Normalized distro id, mirroring the original's classification of
/// `/etc/os-release`'s `ID` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Distro {
    Ubuntu,
    Debian,
    Fedora,
    Centos,
    Rhel,
    Rocky,
    Alma,
    Arch,
    Manjaro,
    Suse,
    Alpine,
    Amazon,
    Unknown,
}

impl Distro {
    pub fn from_id(id: &str) -> Self {
        match id.trim().to_lowercase().as_str() {
            "ubuntu" => Distro::Ubuntu,
            "debian" => Distro::Debian,
            "fedora" => Distro::Fedora,
            "centos" => Distro::Centos,
            "rhel" => Distro::Rhel,
            "rocky" => Distro::Rocky,
            "almalinux" => Distro::Alma,
            "arch" => Distro::Arch,
            "manjaro" => Distro::Manjaro,
            "opensuse" => Distro::Suse,
            "alpine" => Distro::Alpine,
            "amzn" => Distro::Amazon,
            _ => Distro::Unknown,
        }
    }

    /// Detect the current host's distro by reading `/etc/os-release` once.
    pub fn detect() -> Self {
        Self::detect_from(Path::new("/etc/os-release"))
    }

    fn detect_from(path: &Path) -> Self {
        let Ok(contents) = std::fs::read_to_string(path) else {
            return Distro::Unknown;
        };
        for line in contents.lines() {
            if let Some(id) = line.strip_prefix("ID=") {
                return Self::from_id(id.trim_matches('"'));
            }
        }
        Distro::Unknown
    }

    pub fn as_key(&self) -> &'static str {
        match self {
            Distro::Ubuntu => "ubuntu",
            Distro::Debian => "debian",
            Distro::Fedora => "fedora",
            Distro::Centos => "centos",
            Distro::Rhel => "rhel",
            Distro::Rocky => "rocky",
            Distro::Alma => "almalinux",
            Distro::Arch => "arch",
            Distro::Manjaro => "manjaro",
            Distro::Suse => "opensuse",
            Distro::Alpine => "alpine",
            Distro::Amazon => "amzn",
            Distro::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Distro {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}

#[cfg(test)]
#[path = "distro_tests.rs"]
mod tests;
