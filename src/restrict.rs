//! Deny-list check over one chunk.

use crate::config::Options;
use crate::error::Error;
use crate::graph::{ModuleId, ReasonGraph};
use crate::logger::Sink;
use crate::report;

/// Result of one check. Offenders are a normal outcome, not an error;
/// whether they fail the build is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Deny-listed requests found in the chunk, in discovery order.
    pub offenders: Vec<String>,
    /// Number of modules in the chunk.
    pub modules_processed: usize,
    pub chunk: String,
}

impl Outcome {
    pub fn is_clean(&self) -> bool {
        self.offenders.is_empty()
    }

    /// Turn offenders into an [`Error::RestrictedModules`].
    pub fn into_result(self) -> Result<usize, Error> {
        if self.is_clean() {
            Ok(self.modules_processed)
        } else {
            Err(Error::RestrictedModules(report::violation_message(
                &self.offenders,
                &self.chunk,
            )))
        }
    }
}

/// Deny-listed modules of a chunk, keyed by request. A request seen twice
/// keeps its first position but points at the last module carrying it.
pub fn find_offenders(graph: &ReasonGraph, members: &[ModuleId], deny: &[String]) -> Vec<(String, ModuleId)> {
    let mut offenders: Vec<(String, ModuleId)> = Vec::new();
    for &mid in members {
        let request = &graph.module(mid).request;
        if !deny.iter().any(|d| d == request) {
            continue;
        }
        match offenders.iter().position(|(r, _)| r == request) {
            Some(i) => offenders[i].1 = mid,
            None => offenders.push((request.clone(), mid)),
        }
    }
    offenders
}

/// Check a chunk against the deny-list, writing the banner, one provenance
/// block per offender, and a summary line to `sink`.
pub fn check(graph: &ReasonGraph, opts: &Options, sink: &mut dyn Sink) -> Result<Outcome, Error> {
    sink.info(&report::banner(&opts.modules, &opts.chunk, opts.bounds));

    let names: Vec<&str> = graph.chunks.iter().map(|c| c.name.as_str()).collect();
    sink.debug(&format!("Processing chunks: {}", names.join(",")));

    let members: &[ModuleId] = graph
        .find_chunk(&opts.chunk)
        .map(|c| c.modules.as_slice())
        .unwrap_or_default();
    let offenders = find_offenders(graph, members, &opts.modules);

    for (request, mid) in &offenders {
        let header = report::offense_header(request, &opts.chunk);
        report::print_reasons(graph, *mid, &header, opts.bounds, opts.indent, &opts.prefix, sink)?;
    }

    let outcome = Outcome {
        offenders: offenders.into_iter().map(|(request, _)| request).collect(),
        modules_processed: members.len(),
        chunk: opts.chunk.clone(),
    };
    if outcome.is_clean() {
        sink.info(&report::absent_summary(
            &opts.modules,
            &opts.chunk,
            outcome.modules_processed,
        ));
    } else {
        sink.error(&report::violation_message(&outcome.offenders, &opts.chunk));
    }
    tracing::debug!(
        chunk = %opts.chunk,
        modules = outcome.modules_processed,
        offenders = outcome.offenders.len(),
        "check finished"
    );
    Ok(outcome)
}
