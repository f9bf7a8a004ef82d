// Dweve Benchsight - Benchmark Statistics Toolkit
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Normalized data model for benchmark results.
//!
//! All entities here are immutable derivations of one parsed input document.
//! Derived metrics (`ops_per_sec`, `ns_per_op`) are computed on access from
//! the stored counters so they can never drift from the rule that defines
//! them.

use std::collections::BTreeMap;
use std::fmt;

/// One of the four fixed benchmark workload scenarios.
///
/// The set is closed: the harness emits at most one section per kind inside
/// each implementation record. Declaration order is the canonical order used
/// by reports, exports and charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WorkloadKind {
    /// Random insert/extract mix over a small working set.
    SmallSetRandomOps,
    /// Random insert/extract mix over a large working set.
    LargeSetRandomOps,
    /// Repeated linear insert-then-extract passes over a small set.
    SmallSetLinear,
    /// Repeated linear insert-then-extract passes over a large set.
    LargeSetLinear,
}

impl WorkloadKind {
    /// All workload kinds in canonical order.
    pub const ALL: [WorkloadKind; 4] = [
        WorkloadKind::SmallSetRandomOps,
        WorkloadKind::LargeSetRandomOps,
        WorkloadKind::SmallSetLinear,
        WorkloadKind::LargeSetLinear,
    ];

    /// The XML section element name for this workload kind.
    pub fn section_name(self) -> &'static str {
        match self {
            WorkloadKind::SmallSetRandomOps => "SmallSetRandomOps",
            WorkloadKind::LargeSetRandomOps => "LargeSetRandomOps",
            WorkloadKind::SmallSetLinear => "SmallSetLinear",
            WorkloadKind::LargeSetLinear => "LargeSetLinear",
        }
    }

    /// Map an XML section element name back to a workload kind.
    ///
    /// Returns `None` for element names outside the closed set, which the
    /// extractor skips rather than rejects.
    pub fn from_section_name(name: &str) -> Option<Self> {
        WorkloadKind::ALL
            .into_iter()
            .find(|kind| kind.section_name() == name)
    }
}

impl fmt::Display for WorkloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.section_name())
    }
}

/// One measurement: a single benchmark run at a given structure size.
///
/// Only the raw counters are stored; the rate metrics are derived on access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sample {
    /// Data-structure size under test (number of nodes).
    pub node_count: u64,
    /// Measured wall time in nanoseconds.
    pub duration_ns: u64,
    /// Number of insert operations performed.
    pub insert_count: u64,
    /// Number of extract operations performed.
    pub extract_count: u64,
}

impl Sample {
    /// Total operations performed during the measurement.
    pub fn total_ops(&self) -> u64 {
        self.insert_count + self.extract_count
    }

    /// Throughput in operations per second.
    ///
    /// Returns `0.0` when the sample performed no operations or recorded no
    /// elapsed time. The zero is a data value, not an error: consumers
    /// filter it when averaging.
    pub fn ops_per_sec(&self) -> f64 {
        let total_ops = self.total_ops();
        if total_ops > 0 && self.duration_ns > 0 {
            (total_ops as f64 * 1e9) / self.duration_ns as f64
        } else {
            0.0
        }
    }

    /// Mean latency in nanoseconds per operation.
    ///
    /// Returns `None` when the metric is undefined (no operations or no
    /// elapsed time). The two derived metrics are defined under the same
    /// joint condition, so a sample is excluded from both statistics or
    /// from neither.
    pub fn ns_per_op(&self) -> Option<f64> {
        let total_ops = self.total_ops();
        if total_ops > 0 && self.duration_ns > 0 {
            Some(self.duration_ns as f64 / total_ops as f64)
        } else {
            None
        }
    }

    /// Measured wall time in seconds.
    pub fn duration_sec(&self) -> f64 {
        self.duration_ns as f64 / 1e9
    }
}

/// One implementation's ordered samples for one workload kind.
#[derive(Debug, Clone, PartialEq)]
pub struct ImplementationRun {
    /// Implementation identifier, unique within a workload kind.
    pub implementation: String,
    /// Memory footprint of one element in this implementation, in bytes.
    pub node_size_bytes: u64,
    /// Samples in input order (not necessarily sorted by node count).
    pub samples: Vec<Sample>,
}

impl ImplementationRun {
    /// Create a run with no samples yet.
    pub fn new(implementation: impl Into<String>, node_size_bytes: u64) -> Self {
        Self {
            implementation: implementation.into(),
            node_size_bytes,
            samples: Vec::new(),
        }
    }

    /// Minimum and maximum node count over all samples.
    ///
    /// Returns `None` for a run without samples; runs stored in
    /// [`BenchmarkData`] always have at least one.
    pub fn node_count_range(&self) -> Option<(u64, u64)> {
        self.samples.iter().fold(None, |range, sample| {
            let n = sample.node_count;
            match range {
                None => Some((n, n)),
                Some((lo, hi)) => Some((lo.min(n), hi.max(n))),
            }
        })
    }
}

/// The normalized dataset: every implementation run grouped by workload kind.
///
/// Implementation order within a workload is the input encounter order,
/// which downstream ranking relies on for its tie-break rule.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BenchmarkData {
    /// Platform identifier from the input document, if present.
    pub platform: Option<String>,
    /// Compiler identifier from the input document, if present.
    pub compiler: Option<String>,
    workloads: BTreeMap<WorkloadKind, Vec<ImplementationRun>>,
}

impl BenchmarkData {
    /// Create an empty dataset with optional run metadata.
    pub fn new(platform: Option<String>, compiler: Option<String>) -> Self {
        Self {
            platform,
            compiler,
            workloads: BTreeMap::new(),
        }
    }

    /// Append a run to a workload, preserving encounter order.
    ///
    /// A run without samples is dropped: a section that yielded no samples
    /// must be indistinguishable from an absent section, so no placeholder
    /// entry is ever stored.
    pub fn push_run(&mut self, kind: WorkloadKind, run: ImplementationRun) {
        if run.samples.is_empty() {
            return;
        }
        self.workloads.entry(kind).or_default().push(run);
    }

    /// Runs recorded for one workload kind, in input order.
    pub fn runs(&self, kind: WorkloadKind) -> &[ImplementationRun] {
        self.workloads.get(&kind).map_or(&[], Vec::as_slice)
    }

    /// Whether no workload holds any run.
    pub fn is_empty(&self) -> bool {
        self.workloads.is_empty()
    }

    /// Platform identifier, defaulting to `"Unknown"`.
    pub fn platform_name(&self) -> &str {
        self.platform.as_deref().unwrap_or("Unknown")
    }

    /// Compiler identifier, defaulting to `"Unknown"`.
    pub fn compiler_name(&self) -> &str {
        self.compiler.as_deref().unwrap_or("Unknown")
    }
}

/// Descriptive statistics over the qualifying values of one metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatBlock {
    /// Arithmetic mean.
    pub mean: f64,
    /// Median (midpoint of the two central values for even counts).
    pub median: f64,
    /// Sample standard deviation (N−1); `0.0` when fewer than two values.
    pub stdev: f64,
    /// Smallest qualifying value.
    pub min: f64,
    /// Largest qualifying value.
    pub max: f64,
}

/// Aggregate statistics for one implementation within one workload kind.
///
/// `sample_count` and `node_count_range` cover every sample, including those
/// whose metrics were undefined and therefore excluded from the stat blocks.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateStats {
    /// Memory footprint of one element, in bytes.
    pub node_size_bytes: u64,
    /// Total number of samples, qualifying or not.
    pub sample_count: usize,
    /// Minimum and maximum node count over all samples.
    pub node_count_range: (u64, u64),
    /// Throughput statistics over samples with `ops_per_sec > 0`.
    pub ops_per_sec: StatBlock,
    /// Latency statistics over samples with a defined `ns_per_op`.
    pub ns_per_op: StatBlock,
}

/// The best-performing implementation of one workload kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    /// Name of the best implementation (highest mean throughput; ties go to
    /// the first-encountered implementation in input order).
    pub best: String,
    /// The best implementation's mean ops/sec, the 100% reference.
    pub best_mean: f64,
}

impl Ranking {
    /// Whether `implementation` is the ranked best.
    pub fn is_best(&self, implementation: &str) -> bool {
        self.best == implementation
    }

    /// Relative standing of a mean throughput against the best, in percent.
    ///
    /// The best implementation itself evaluates to exactly `100.0`, but is
    /// reported with a distinguished best marker instead of a percentage.
    pub fn relative_pct(&self, mean: f64) -> f64 {
        (mean / self.best_mean) * 100.0
    }
}

/// Aggregates and ranking for one workload kind.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkloadAnalysis {
    /// `(implementation, stats)` pairs in input encounter order. An
    /// implementation with zero qualifying throughput values is omitted.
    pub aggregates: Vec<(String, AggregateStats)>,
    /// Best-performer ranking; `None` when no implementation aggregated.
    pub ranking: Option<Ranking>,
}

impl WorkloadAnalysis {
    /// Whether this workload produced no aggregated implementations.
    pub fn is_empty(&self) -> bool {
        self.aggregates.is_empty()
    }
}

/// The full derived analysis: one [`WorkloadAnalysis`] per workload kind.
///
/// Every kind is present, including empty ones, so consumers can report
/// "no data" uniformly instead of special-casing missing keys.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    workloads: BTreeMap<WorkloadKind, WorkloadAnalysis>,
}

impl Analysis {
    /// Build an analysis from per-workload results.
    ///
    /// Kinds missing from `workloads` are filled with empty entries.
    pub fn new(mut workloads: BTreeMap<WorkloadKind, WorkloadAnalysis>) -> Self {
        for kind in WorkloadKind::ALL {
            workloads.entry(kind).or_default();
        }
        Self { workloads }
    }

    /// The analysis for one workload kind.
    pub fn workload(&self, kind: WorkloadKind) -> &WorkloadAnalysis {
        // new() guarantees every kind is present
        &self.workloads[&kind]
    }

    /// Iterate all workloads in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (WorkloadKind, &WorkloadAnalysis)> {
        WorkloadKind::ALL
            .into_iter()
            .map(move |kind| (kind, self.workload(kind)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_name_roundtrip() {
        for kind in WorkloadKind::ALL {
            assert_eq!(WorkloadKind::from_section_name(kind.section_name()), Some(kind));
        }
        assert_eq!(WorkloadKind::from_section_name("MediumSetRandomOps"), None);
    }

    #[test]
    fn test_sample_derived_metrics() {
        let sample = Sample {
            node_count: 1000,
            duration_ns: 500_000,
            insert_count: 500,
            extract_count: 500,
        };
        assert_eq!(sample.total_ops(), 1000);
        assert_eq!(sample.ops_per_sec(), 2_000_000.0);
        assert_eq!(sample.ns_per_op(), Some(500.0));
        assert_eq!(sample.duration_sec(), 0.0005);
    }

    #[test]
    fn test_sample_zero_ops_is_undefined() {
        let sample = Sample {
            node_count: 10,
            duration_ns: 100,
            insert_count: 0,
            extract_count: 0,
        };
        assert_eq!(sample.ops_per_sec(), 0.0);
        assert_eq!(sample.ns_per_op(), None);
    }

    #[test]
    fn test_sample_zero_duration_is_undefined() {
        let sample = Sample {
            node_count: 10,
            duration_ns: 0,
            insert_count: 5,
            extract_count: 5,
        };
        assert_eq!(sample.ops_per_sec(), 0.0);
        assert_eq!(sample.ns_per_op(), None);
    }

    #[test]
    fn test_push_run_drops_empty_runs() {
        let mut data = BenchmarkData::default();
        data.push_run(
            WorkloadKind::SmallSetLinear,
            ImplementationRun::new("Empty", 16),
        );
        assert!(data.is_empty());
        assert!(data.runs(WorkloadKind::SmallSetLinear).is_empty());
    }

    #[test]
    fn test_push_run_preserves_encounter_order() {
        let mut data = BenchmarkData::default();
        for name in ["Zebra", "Alpha", "Mid"] {
            let mut run = ImplementationRun::new(name, 24);
            run.samples.push(Sample {
                node_count: 100,
                duration_ns: 1000,
                insert_count: 1,
                extract_count: 1,
            });
            data.push_run(WorkloadKind::SmallSetRandomOps, run);
        }
        let names: Vec<&str> = data
            .runs(WorkloadKind::SmallSetRandomOps)
            .iter()
            .map(|r| r.implementation.as_str())
            .collect();
        assert_eq!(names, ["Zebra", "Alpha", "Mid"]);
    }

    #[test]
    fn test_node_count_range() {
        let mut run = ImplementationRun::new("RBTree", 24);
        assert_eq!(run.node_count_range(), None);
        for node_count in [500, 100, 900] {
            run.samples.push(Sample {
                node_count,
                duration_ns: 10,
                insert_count: 1,
                extract_count: 0,
            });
        }
        assert_eq!(run.node_count_range(), Some((100, 900)));
    }

    #[test]
    fn test_metadata_defaults() {
        let data = BenchmarkData::default();
        assert_eq!(data.platform_name(), "Unknown");
        assert_eq!(data.compiler_name(), "Unknown");

        let data = BenchmarkData::new(Some("Linux".into()), Some("gcc 13.2".into()));
        assert_eq!(data.platform_name(), "Linux");
        assert_eq!(data.compiler_name(), "gcc 13.2");
    }

    #[test]
    fn test_analysis_fills_missing_kinds() {
        let analysis = Analysis::new(BTreeMap::new());
        for kind in WorkloadKind::ALL {
            assert!(analysis.workload(kind).is_empty());
        }
        assert_eq!(analysis.iter().count(), 4);
    }
}
