//! Per-platform argument lists → manifest.
//!
//! Command-line callers pass parallel lists: the n-th library path (and, if
//! given, the n-th header path and module map) belongs to the n-th platform.

use crate::error::{BundleError, Result};
use crate::manifest::{create_manifest, create_variant, ArtifactBundleManifest};

/// Inputs for one artifact bundle manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BundleRequest {
    pub name: String,
    pub version: String,
    pub platforms: Vec<String>,
    pub library_paths: Vec<String>,
    /// Empty, or one header directory per platform.
    pub header_paths: Vec<String>,
    /// Empty, or one module map per platform.
    pub modulemap_paths: Vec<String>,
}

impl BundleRequest {
    /// Check list lengths, then build the manifest.
    ///
    /// The version is written through as given.
    pub fn build(&self) -> Result<ArtifactBundleManifest> {
        let count = self.platforms.len();
        if self.library_paths.len() != count {
            return Err(BundleError::ArgumentMismatch {
                detail: "number of platforms and library paths must match".to_string(),
            });
        }
        if !self.header_paths.is_empty() && self.header_paths.len() != count {
            return Err(BundleError::ArgumentMismatch {
                detail: "header paths, if given, must match number of platforms".to_string(),
            });
        }
        if !self.modulemap_paths.is_empty() && self.modulemap_paths.len() != count {
            return Err(BundleError::ArgumentMismatch {
                detail: "module map paths, if given, must match number of platforms".to_string(),
            });
        }

        let variants = self
            .platforms
            .iter()
            .enumerate()
            .map(|(i, platform)| {
                let headers: Vec<String> = self.header_paths.get(i).cloned().into_iter().collect();
                create_variant(
                    platform,
                    &self.library_paths[i],
                    &headers,
                    self.modulemap_paths.get(i).map(String::as_str),
                )
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(create_manifest(&self.name, &self.version, variants))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> BundleRequest {
        BundleRequest {
            name: "executorch".into(),
            version: "1.2.0".into(),
            platforms: vec!["macos-arm64".into(), "linux-x86_64".into()],
            library_paths: vec![
                "macos-arm64/libexecutorch.a".into(),
                "linux-x86_64/libexecutorch.a".into(),
            ],
            header_paths: Vec::new(),
            modulemap_paths: Vec::new(),
        }
    }

    #[test]
    fn build_one_variant_per_platform() {
        let manifest = request().build().unwrap();
        let artifact = &manifest.artifacts["executorch"];
        assert_eq!(artifact.variants.len(), 2);
        assert_eq!(artifact.variants[0].supported_triples, vec!["arm64-apple-macosx"]);
        assert_eq!(artifact.variants[1].path, "linux-x86_64/libexecutorch.a");
        assert!(artifact.variants.iter().all(|v| v.static_library_metadata.is_none()));
    }

    #[test]
    fn headers_attach_per_platform() {
        let mut req = request();
        req.header_paths = vec!["macos-arm64/include".into(), "linux-x86_64/include".into()];
        let manifest = req.build().unwrap();
        let variants = &manifest.artifacts["executorch"].variants;
        let metadata = variants[1].static_library_metadata.as_ref().unwrap();
        assert_eq!(metadata.header_paths, vec!["linux-x86_64/include"]);
    }

    #[test]
    fn reject_library_count_mismatch() {
        let mut req = request();
        req.library_paths.pop();
        let err = req.build().unwrap_err();
        assert!(err.to_string().contains("library paths must match"));
    }

    #[test]
    fn reject_header_count_mismatch() {
        let mut req = request();
        req.header_paths = vec!["include".into()];
        assert!(matches!(req.build(), Err(BundleError::ArgumentMismatch { .. })));
    }

    #[test]
    fn reject_modulemap_count_mismatch() {
        let mut req = request();
        req.modulemap_paths = vec!["a".into(), "b".into(), "c".into()];
        assert!(matches!(req.build(), Err(BundleError::ArgumentMismatch { .. })));
    }

    #[test]
    fn version_written_verbatim() {
        for version in ["1.0", "0.7.0.dev20250601", "latest"] {
            let mut req = request();
            req.version = version.into();
            let manifest = req.build().unwrap();
            assert_eq!(manifest.artifacts["executorch"].version, version);
        }
    }

    #[test]
    fn reject_unknown_platform() {
        let mut req = request();
        req.platforms[1] = "linux-riscv64".into();
        assert!(matches!(req.build(), Err(BundleError::UnknownPlatform { .. })));
    }
}
