//! Platforms and platform scopes.
//!
//! Linker directives carry an abstract [`PlatformScope`]; the package tool
//! needs concrete platform lists. [`PlatformScope::platforms`] is the only
//! place that mapping lives.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GraphError;

/// A concrete platform understood by the package tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Ios,
    Macos,
    Linux,
}

impl Platform {
    /// Platforms of the Apple family.
    pub const APPLE: [Platform; 2] = [Platform::Ios, Platform::Macos];

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Ios => "ios",
            Platform::Macos => "macos",
            Platform::Linux => "linux",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ios" => Ok(Platform::Ios),
            "macos" => Ok(Platform::Macos),
            "linux" => Ok(Platform::Linux),
            _ => Err(GraphError::UnknownPlatform {
                name: s.to_string(),
            }),
        }
    }
}

/// The set of platforms a linker directive applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlatformScope {
    All,
    AppleOnly,
    LinuxOnly,
}

impl PlatformScope {
    /// Concrete platforms for this scope. `None` means unconditional.
    pub fn platforms(self) -> Option<&'static [Platform]> {
        match self {
            PlatformScope::All => None,
            PlatformScope::AppleOnly => Some(&Platform::APPLE),
            PlatformScope::LinuxOnly => Some(&[Platform::Linux]),
        }
    }
}

impl fmt::Display for PlatformScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.platforms() {
            None => write!(f, "all"),
            Some(platforms) => {
                let names: Vec<&str> = platforms.iter().map(|p| p.as_str()).collect();
                write!(f, "{}", names.join(", "))
            }
        }
    }
}

/// Minimum deployment version for one platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentTarget {
    pub platform: Platform,
    pub version: String,
}

impl DeploymentTarget {
    pub fn new(platform: Platform, version: impl Into<String>) -> Self {
        Self {
            platform,
            version: version.into(),
        }
    }
}
