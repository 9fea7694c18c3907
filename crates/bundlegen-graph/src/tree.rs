//! Product tree display.
//!
//! ```text
//! executorch
//! ├── backend_xnnpack
//! │   ├── release: backend_xnnpack_with_dependencies
//! │   │   ├── backend_xnnpack
//! │   │   └── threadpool
//! │   └── debug: backend_xnnpack_debug_with_dependencies
//! │       ├── backend_xnnpack_debug
//! │       └── threadpool_debug
//! └── executorch
//!     ...
//! ```

use bundlegen_catalog::variant::{aggregate_name, debug_name};
use bundlegen_catalog::Variant;

use crate::assemble::AggregateTarget;
use crate::graph::BuildGraph;

/// Format the products of a graph as a human-readable tree.
pub fn format_tree(graph: &BuildGraph) -> String {
    let mut out = format!("{}\n", graph.package);

    let count = graph.products.len();
    for (i, product) in graph.products.iter().enumerate() {
        let is_last = i == count - 1;
        let connector = if is_last { "└── " } else { "├── " };
        out.push_str(&format!("{connector}{}\n", product.name));

        let prefix = if is_last { "    " } else { "│   " };
        let variants: Vec<(&str, Option<&AggregateTarget>)> = vec![
            ("release", graph.aggregate(&product.target)),
            (
                "debug",
                graph
                    .aggregate(&aggregate_name(&debug_name(&product.name)))
                    .filter(|t| t.variant == Variant::Debug),
            ),
        ];
        let present: Vec<(&str, &AggregateTarget)> = variants
            .into_iter()
            .filter_map(|(label, target)| target.map(|t| (label, t)))
            .collect();

        let variant_count = present.len();
        for (j, (label, target)) in present.into_iter().enumerate() {
            format_aggregate(&mut out, label, target, prefix, j == variant_count - 1);
        }
    }

    out.push_str(&format!(
        "\n{} products, {} targets\n",
        graph.products.len(),
        graph.target_names().count()
    ));

    out
}

/// Format one aggregate target with its dependencies and linker settings.
fn format_aggregate(
    out: &mut String,
    label: &str,
    target: &AggregateTarget,
    prefix: &str,
    is_last: bool,
) {
    let connector = if is_last { "└── " } else { "├── " };
    out.push_str(&format!("{prefix}{connector}{label}: {}\n", target.name));

    let child_prefix = if is_last {
        format!("{prefix}    ")
    } else {
        format!("{prefix}│   ")
    };

    let lines: Vec<String> = target
        .dependencies
        .iter()
        .cloned()
        .chain(target.linker.iter().map(|d| format!("link {d}")))
        .collect();

    let line_count = lines.len();
    for (i, line) in lines.iter().enumerate() {
        let connector = if i == line_count - 1 { "└── " } else { "├── " };
        out.push_str(&format!("{child_prefix}{connector}{line}\n"));
    }
}
