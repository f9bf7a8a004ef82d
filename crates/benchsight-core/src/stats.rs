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

//! Aggregate statistics over extracted benchmark runs.
//!
//! Each derived metric is averaged over its own qualifying values only:
//! throughput over samples with `ops_per_sec > 0`, latency over samples with
//! a defined `ns_per_op`. The two filters are defined by the same joint
//! condition on the raw counters, so the exclusion sets always coincide.
//! Excluded samples still count toward `sample_count` and the node-count
//! range.

use crate::model::{
    AggregateStats, Analysis, BenchmarkData, ImplementationRun, StatBlock, WorkloadAnalysis,
    WorkloadKind,
};
use crate::rank;
use std::collections::BTreeMap;

/// Compute aggregate statistics for one implementation run.
///
/// Returns `None` when the run has no qualifying throughput values, in which
/// case the implementation is omitted from the workload's aggregate map
/// entirely (its raw samples remain in the model for export and plotting).
pub fn aggregate(run: &ImplementationRun) -> Option<AggregateStats> {
    let ops_values: Vec<f64> = run
        .samples
        .iter()
        .map(|s| s.ops_per_sec())
        .filter(|v| *v > 0.0)
        .collect();
    if ops_values.is_empty() {
        return None;
    }

    let ns_values: Vec<f64> = run.samples.iter().filter_map(|s| s.ns_per_op()).collect();
    let (lo, hi) = run.node_count_range()?;

    Some(AggregateStats {
        node_size_bytes: run.node_size_bytes,
        sample_count: run.samples.len(),
        node_count_range: (lo, hi),
        ops_per_sec: stat_block(&ops_values),
        ns_per_op: stat_block(&ns_values),
    })
}

/// Compute the full analysis for a dataset: per-workload aggregates in
/// input encounter order, plus the best-performer ranking.
///
/// Every workload kind appears in the result, including those with no data,
/// so downstream reporting can emit "no data" uniformly.
pub fn analyze(data: &BenchmarkData) -> Analysis {
    let mut workloads = BTreeMap::new();

    for kind in WorkloadKind::ALL {
        let aggregates: Vec<(String, AggregateStats)> = data
            .runs(kind)
            .iter()
            .filter_map(|run| aggregate(run).map(|stats| (run.implementation.clone(), stats)))
            .collect();
        let ranking = rank::rank(&aggregates);
        workloads.insert(kind, WorkloadAnalysis { aggregates, ranking });
    }

    Analysis::new(workloads)
}

/// Descriptive statistics over a non-empty set of qualifying values.
fn stat_block(values: &[f64]) -> StatBlock {
    let mean = mean(values);
    StatBlock {
        mean,
        median: median(values),
        stdev: sample_stdev(values, mean),
        min: values.iter().copied().fold(f64::INFINITY, f64::min),
        max: values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Sample standard deviation with the N−1 denominator.
///
/// Defined as 0 for fewer than two values, never NaN.
fn sample_stdev(values: &[f64], mean: f64) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let sum_sq: f64 = values.iter().map(|v| (v - mean) * (v - mean)).sum();
    (sum_sq / (values.len() - 1) as f64).sqrt()
}
