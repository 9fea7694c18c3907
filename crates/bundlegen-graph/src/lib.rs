//! Build graph assembly for bundlegen.
//!
//! Turns an expanded product catalog into the graph handed to the package
//! tool: public products, binary artifact targets, aggregate targets with
//! variant-aware dependency edges and platform-scoped linker plans, and
//! test targets.
//!
//! # Pipeline
//!
//! ```text
//! cross-platform ─┐
//!                 ├─ merge ─ expand ─ assemble ─ validate ─ BuildGraph
//! apple-only ─────┘                      │
//!                                  linker plans
//! ```

pub mod assemble;
pub mod error;
pub mod graph;
pub mod linker;
pub mod pipeline;
pub mod platform;
pub mod test_target;
pub mod tree;

// Re-exports for convenience.
pub use assemble::{assemble, AggregateTarget, Assembly, BinaryTarget, Layout, PublicProduct};
pub use error::{GraphError, Result};
pub use graph::BuildGraph;
pub use linker::{build_linker_plan, LinkerDirective, LinkerPlan};
pub use pipeline::{generate, PackageInput};
pub use platform::{DeploymentTarget, Platform, PlatformScope};
pub use test_target::{ForceLoad, PlatformFlags, TestTarget};
pub use tree::format_tree;
