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

//! Best-performer ranking for one workload kind.

use crate::model::{AggregateStats, Ranking};

/// Select the best-performing implementation by mean throughput.
///
/// The scan uses a strict greater-than comparison over the encounter-ordered
/// aggregate list, so when two implementations tie on the mean the one that
/// appeared first in the input wins. This is a deliberate, documented rule,
/// not an artifact of map iteration order.
///
/// Returns `None` when no implementation aggregated for the workload, which
/// consumers report as "no data" rather than an error.
pub fn rank(aggregates: &[(String, AggregateStats)]) -> Option<Ranking> {
    let mut best: Option<(&str, f64)> = None;

    for (name, stats) in aggregates {
        let mean = stats.ops_per_sec.mean;
        match best {
            Some((_, best_mean)) if mean <= best_mean => {}
            _ => best = Some((name, mean)),
        }
    }

    best.map(|(name, best_mean)| Ranking {
        best: name.to_string(),
        best_mean,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StatBlock;

    fn stats_with_mean(mean: f64) -> AggregateStats {
        let block = StatBlock {
            mean,
            median: mean,
            stdev: 0.0,
            min: mean,
            max: mean,
        };
        AggregateStats {
            node_size_bytes: 24,
            sample_count: 1,
            node_count_range: (1000, 1000),
            ops_per_sec: block,
            ns_per_op: StatBlock {
                mean: 1e9 / mean,
                median: 1e9 / mean,
                stdev: 0.0,
                min: 1e9 / mean,
                max: 1e9 / mean,
            },
        }
    }

    #[test]
    fn test_empty_input_has_no_ranking() {
        assert!(rank(&[]).is_none());
    }

    #[test]
    fn test_highest_mean_wins() {
        let aggregates = vec![
            ("Slow".to_string(), stats_with_mean(1_000_000.0)),
            ("Fast".to_string(), stats_with_mean(3_000_000.0)),
            ("Mid".to_string(), stats_with_mean(2_000_000.0)),
        ];
        let ranking = rank(&aggregates).unwrap();
        assert_eq!(ranking.best, "Fast");
        assert_eq!(ranking.best_mean, 3_000_000.0);
    }

    #[test]
    fn test_tie_goes_to_first_encountered() {
        let aggregates = vec![
            ("Second".to_string(), stats_with_mean(2_000_000.0)),
            ("First".to_string(), stats_with_mean(2_000_000.0)),
        ];
        let ranking = rank(&aggregates).unwrap();
        assert_eq!(ranking.best, "Second");
    }

    #[test]
    fn test_relative_percentages() {
        let aggregates = vec![
            ("Best".to_string(), stats_with_mean(4_000_000.0)),
            ("Half".to_string(), stats_with_mean(2_000_000.0)),
        ];
        let ranking = rank(&aggregates).unwrap();
        assert!(ranking.is_best("Best"));
        assert!(!ranking.is_best("Half"));
        assert_eq!(ranking.relative_pct(4_000_000.0), 100.0);
        assert_eq!(ranking.relative_pct(2_000_000.0), 50.0);
        for (_, stats) in &aggregates {
            assert!(ranking.relative_pct(stats.ops_per_sec.mean) <= 100.0);
        }
    }

    #[test]
    fn test_sole_entrant_is_best() {
        let aggregates = vec![("RBTree".to_string(), stats_with_mean(2_000_000.0))];
        let ranking = rank(&aggregates).unwrap();
        assert_eq!(ranking.best, "RBTree");
        assert_eq!(ranking.relative_pct(ranking.best_mean), 100.0);
    }
}
