//! Platform identifier → target triple mapping.

use crate::error::{BundleError, Result};

/// Known platform identifiers and their triples.
pub const PLATFORM_TRIPLES: [(&str, &str); 7] = [
    ("linux-x86_64", "x86_64-unknown-linux-gnu"),
    ("linux-aarch64", "aarch64-unknown-linux-gnu"),
    ("macos-arm64", "arm64-apple-macosx"),
    ("macos-x86_64", "x86_64-apple-macosx"),
    ("ios-arm64", "arm64-apple-ios"),
    ("ios-arm64-simulator", "arm64-apple-ios-simulator"),
    ("ios-x86_64-simulator", "x86_64-apple-ios-simulator"),
];

/// Look up the triple of a platform identifier.
pub fn triple_for(platform: &str) -> Result<&'static str> {
    PLATFORM_TRIPLES
        .iter()
        .find(|(id, _)| *id == platform)
        .map(|(_, triple)| *triple)
        .ok_or_else(|| BundleError::UnknownPlatform {
            platform: platform.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_triples() {
        assert_eq!(triple_for("linux-x86_64").unwrap(), "x86_64-unknown-linux-gnu");
        assert_eq!(triple_for("ios-arm64-simulator").unwrap(), "arm64-apple-ios-simulator");
        assert_eq!(triple_for("macos-arm64").unwrap(), "arm64-apple-macosx");
    }

    #[test]
    fn unknown_platform() {
        let err = triple_for("windows-x86_64").unwrap_err();
        assert_eq!(err.to_string(), "unknown platform: windows-x86_64");
    }
}
