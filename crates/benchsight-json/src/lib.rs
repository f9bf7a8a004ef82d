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

//! Machine-readable JSON export of benchmark analyses.
//!
//! Produces one self-sufficient document with three top-level fields:
//! `metadata` (platform, compiler, source identifier), `statistics` (the
//! full aggregate structure with rankings, keyed by workload then
//! implementation) and `raw_data` (every extracted sample with its derived
//! metrics). The document can be re-analyzed without the original input.
//!
//! The undefined `ns_per_op` sentinel serializes as JSON `null`, keeping the
//! output standard-conforming JSON.

use benchsight_core::{Analysis, BenchmarkData, StatBlock, WorkloadKind};
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Error produced when the export document cannot be serialized.
#[derive(Error, Debug)]
pub enum ExportError {
    /// JSON serialization failed.
    #[error("JSON serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The complete export document.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ExportDocument {
    /// Run metadata, pass-through strings from the input.
    pub metadata: Metadata,
    /// Aggregate statistics and ranking, keyed by workload then implementation.
    pub statistics: BTreeMap<String, BTreeMap<String, StatisticsEntry>>,
    /// Raw per-sample data, keyed the same way.
    pub raw_data: BTreeMap<String, BTreeMap<String, RawRun>>,
}

/// Free-form run identifiers; absent values default to `"Unknown"`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Metadata {
    /// Platform identifier from the input document.
    pub platform: String,
    /// Compiler identifier from the input document.
    pub compiler: String,
    /// Identifier of the analyzed input (typically the file path).
    pub source: String,
}

/// One implementation's aggregate statistics within one workload.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StatisticsEntry {
    /// Memory footprint of one element, in bytes.
    pub node_size: u64,
    /// Total sample count, including metric-undefined samples.
    pub sample_count: usize,
    /// `[min, max]` node count over all samples.
    pub node_count_range: (u64, u64),
    /// Throughput statistics over qualifying samples.
    pub ops_per_sec: Block,
    /// Latency statistics over qualifying samples.
    pub ns_per_op: Block,
    /// Whether this implementation ranked best for the workload.
    pub best: bool,
    /// Mean throughput relative to the workload's best, in percent
    /// (exactly 100.0 for the best implementation).
    pub relative_to_best_pct: f64,
}

/// Serialized stat block.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Block {
    pub mean: f64,
    pub median: f64,
    pub stdev: f64,
    pub min: f64,
    pub max: f64,
}

impl From<&StatBlock> for Block {
    fn from(block: &StatBlock) -> Self {
        Self {
            mean: block.mean,
            median: block.median,
            stdev: block.stdev,
            min: block.min,
            max: block.max,
        }
    }
}

/// One implementation's raw samples within one workload.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RawRun {
    /// Memory footprint of one element, in bytes.
    pub node_size: u64,
    /// Every extracted sample, including metric-undefined ones.
    pub samples: Vec<RawSample>,
}

/// One sample with its stored counters and derived metrics.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RawSample {
    pub node_count: u64,
    pub duration_ns: u64,
    pub insert_count: u64,
    pub extract_count: u64,
    pub total_ops: u64,
    pub ops_per_sec: f64,
    /// `null` when the metric is undefined for this sample.
    pub ns_per_op: Option<f64>,
    pub duration_sec: f64,
}

/// Build the export document from the model and its analysis.
pub fn to_export(data: &BenchmarkData, analysis: &Analysis, source: &str) -> ExportDocument {
    let mut statistics = BTreeMap::new();
    let mut raw_data = BTreeMap::new();

    for kind in WorkloadKind::ALL {
        let workload = analysis.workload(kind);
        if !workload.is_empty() {
            let mut entries = BTreeMap::new();
            for (implementation, stats) in &workload.aggregates {
                let (best, relative_to_best_pct) = match &workload.ranking {
                    Some(ranking) => (
                        ranking.is_best(implementation),
                        ranking.relative_pct(stats.ops_per_sec.mean),
                    ),
                    None => (false, 0.0),
                };
                entries.insert(
                    implementation.clone(),
                    StatisticsEntry {
                        node_size: stats.node_size_bytes,
                        sample_count: stats.sample_count,
                        node_count_range: stats.node_count_range,
                        ops_per_sec: Block::from(&stats.ops_per_sec),
                        ns_per_op: Block::from(&stats.ns_per_op),
                        best,
                        relative_to_best_pct,
                    },
                );
            }
            statistics.insert(kind.section_name().to_string(), entries);
        }

        let runs = data.runs(kind);
        if !runs.is_empty() {
            let mut entries = BTreeMap::new();
            for run in runs {
                entries.insert(
                    run.implementation.clone(),
                    RawRun {
                        node_size: run.node_size_bytes,
                        samples: run
                            .samples
                            .iter()
                            .map(|s| RawSample {
                                node_count: s.node_count,
                                duration_ns: s.duration_ns,
                                insert_count: s.insert_count,
                                extract_count: s.extract_count,
                                total_ops: s.total_ops(),
                                ops_per_sec: s.ops_per_sec(),
                                ns_per_op: s.ns_per_op(),
                                duration_sec: s.duration_sec(),
                            })
                            .collect(),
                    },
                );
            }
            raw_data.insert(kind.section_name().to_string(), entries);
        }
    }

    ExportDocument {
        metadata: Metadata {
            platform: data.platform_name().to_string(),
            compiler: data.compiler_name().to_string(),
            source: source.to_string(),
        },
        statistics,
        raw_data,
    }
}

/// Serialize the export document as a `serde_json::Value`.
pub fn to_json_value(
    data: &BenchmarkData,
    analysis: &Analysis,
    source: &str,
) -> Result<serde_json::Value, ExportError> {
    Ok(serde_json::to_value(to_export(data, analysis, source))?)
}

/// Serialize the export document as pretty-printed JSON.
pub fn to_json(
    data: &BenchmarkData,
    analysis: &Analysis,
    source: &str,
) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(&to_export(
        data, analysis, source,
    ))?)
}
