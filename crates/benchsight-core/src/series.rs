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

//! Per-implementation sample series for chart adapters.
//!
//! This is the plotting boundary: chart renderers consume ordered
//! `(node_count, ops_per_sec)` points per implementation and owe the core
//! nothing about their visual output.

use crate::model::{BenchmarkData, WorkloadKind};

/// One implementation's plottable throughput curve for one workload kind.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalabilitySeries {
    /// Implementation name, used for the chart legend.
    pub implementation: String,
    /// `(node_count, ops_per_sec)` points in sample order. Zero-rate
    /// samples are dropped; they have no meaningful position on a rate axis.
    pub points: Vec<(u64, f64)>,
}

/// Extract the plottable series of one workload kind, in input order.
///
/// Implementations whose samples are all zero-rate contribute no series.
pub fn scalability_series(data: &BenchmarkData, kind: WorkloadKind) -> Vec<ScalabilitySeries> {
    data.runs(kind)
        .iter()
        .map(|run| ScalabilitySeries {
            implementation: run.implementation.clone(),
            points: run
                .samples
                .iter()
                .filter(|s| s.ops_per_sec() > 0.0)
                .map(|s| (s.node_count, s.ops_per_sec()))
                .collect(),
        })
        .filter(|series| !series.points.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ImplementationRun, Sample};

    fn sample(node_count: u64, duration_ns: u64, ops: u64) -> Sample {
        Sample {
            node_count,
            duration_ns,
            insert_count: ops,
            extract_count: 0,
        }
    }

    #[test]
    fn test_series_preserves_sample_order() {
        let mut data = BenchmarkData::default();
        let mut run = ImplementationRun::new("RBTree", 24);
        run.samples = vec![sample(1000, 1000, 10), sample(100, 1000, 10), sample(5000, 1000, 10)];
        data.push_run(WorkloadKind::SmallSetRandomOps, run);

        let series = scalability_series(&data, WorkloadKind::SmallSetRandomOps);
        assert_eq!(series.len(), 1);
        let counts: Vec<u64> = series[0].points.iter().map(|(n, _)| *n).collect();
        assert_eq!(counts, [1000, 100, 5000]);
    }

    #[test]
    fn test_zero_rate_points_are_dropped() {
        let mut data = BenchmarkData::default();
        let mut run = ImplementationRun::new("RBTree", 24);
        run.samples = vec![sample(1000, 1000, 10), sample(2000, 0, 10), sample(3000, 1000, 0)];
        data.push_run(WorkloadKind::SmallSetLinear, run);

        let series = scalability_series(&data, WorkloadKind::SmallSetLinear);
        assert_eq!(series[0].points.len(), 1);
        assert_eq!(series[0].points[0].0, 1000);
    }

    #[test]
    fn test_all_zero_rate_run_contributes_no_series() {
        let mut data = BenchmarkData::default();
        let mut run = ImplementationRun::new("Stalled", 24);
        run.samples = vec![sample(1000, 0, 10)];
        data.push_run(WorkloadKind::LargeSetLinear, run);

        assert!(scalability_series(&data, WorkloadKind::LargeSetLinear).is_empty());
        assert!(scalability_series(&data, WorkloadKind::SmallSetLinear).is_empty());
    }
}
