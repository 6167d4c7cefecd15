use std::path::Path;

use crate::error::Error;
use crate::graph::{ModuleId, ReasonGraph};
use crate::logger::Sink;
use crate::render;
use crate::traversal::{Bounds, ReasonsTraversal};
use crate::tree::ImportTree;

/// Join names as `` a', `b', `c `` so the caller can wrap the whole list in
/// a single pair of quotes.
pub fn quote_list(names: &[String]) -> String {
    names.join("', `")
}

/// Replace a leading working-directory prefix with `.`. The prefix only
/// matches whole path components; anything else is returned unchanged.
pub fn shorten(identity: &str, prefix: &str) -> String {
    if prefix.is_empty() {
        return identity.to_owned();
    }
    match Path::new(identity).strip_prefix(prefix) {
        Ok(rest) if rest.as_os_str().is_empty() => ".".to_owned(),
        Ok(rest) => format!("./{}", rest.display()),
        Err(_) => identity.to_owned(),
    }
}

pub fn banner(modules: &[String], chunk: &str, bounds: Bounds) -> String {
    format!(
        "Asserting absence of modules `{}' in chunk: `{chunk}' (maxStackDepth={}, maxStackWidth={})",
        quote_list(modules),
        bounds.max_depth,
        bounds.max_width
    )
}

pub fn offense_header(request: &str, chunk: &str) -> String {
    format!("Error: Restricted module `{request}' found in bundle `{chunk}'")
}

pub fn absent_summary(modules: &[String], chunk: &str, module_count: usize) -> String {
    format!(
        "Restricted module(s) `{}' absent from bundle chunk `{chunk}' ({module_count} module processed).",
        quote_list(modules)
    )
}

pub fn violation_message(offenders: &[String], chunk: &str) -> String {
    format!(
        "Restricted module(s) `{}' present in main bundle chunk `{chunk}'.",
        quote_list(offenders)
    )
}

/// Build the provenance tree of `module` under a `header` root node.
#[allow(clippy::cast_possible_wrap)]
pub fn provenance_tree(
    graph: &ReasonGraph,
    module: ModuleId,
    header: &str,
    bounds: Bounds,
    prefix: &str,
    sink: &mut dyn Sink,
) -> Result<ImportTree, Error> {
    let mut tree = ImportTree::new(header);
    let events = ReasonsTraversal::new(graph, module, bounds).events(sink);
    for event in events {
        let label = format!("from: {}", shorten(event.label, prefix));
        tree.add_node_incrementally(&label, event.depth as isize)?;
    }
    Ok(tree)
}

/// Trace and render the reasons `module` was included.
pub fn print_reasons(
    graph: &ReasonGraph,
    module: ModuleId,
    header: &str,
    bounds: Bounds,
    indent: usize,
    prefix: &str,
    sink: &mut dyn Sink,
) -> Result<(), Error> {
    let tree = provenance_tree(graph, module, header, bounds, prefix, sink)?;
    render::render(&tree, indent, sink);
    Ok(())
}
