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

//! Property-based tests for the per-sample metric derivation rules.
//!
//! # Properties Tested
//!
//! 1. **Rate identity**: for defined metrics, `ops_per_sec ≈ 1e9 / ns_per_op`
//! 2. **Sentinel coupling**: `ops_per_sec == 0` exactly when `ns_per_op` is undefined
//! 3. **Aggregate bounds**: min ≤ median ≤ max and min ≤ mean ≤ max
//! 4. **Undefined samples** never shrink `sample_count` or the node-count range

use benchsight_core::{stats, ImplementationRun, Sample};
use proptest::prelude::*;

fn arb_sample() -> impl Strategy<Value = Sample> {
    (1u64..1_000_000, 0u64..10_000_000_000, 0u64..100_000, 0u64..100_000).prop_map(
        |(node_count, duration_ns, insert_count, extract_count)| Sample {
            node_count,
            duration_ns,
            insert_count,
            extract_count,
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: throughput and latency are reciprocal where defined.
    #[test]
    fn prop_rate_roundtrip_identity(sample in arb_sample()) {
        if let Some(ns_per_op) = sample.ns_per_op() {
            let reconstructed = 1e9 / ns_per_op;
            let ops_per_sec = sample.ops_per_sec();
            let tolerance = ops_per_sec.abs() * 1e-9 + 1e-9;
            prop_assert!((ops_per_sec - reconstructed).abs() <= tolerance,
                "ops_per_sec {} vs 1e9/ns_per_op {}", ops_per_sec, reconstructed);
        }
    }

    /// Property: the zero rate and the undefined sentinel always travel together.
    #[test]
    fn prop_sentinel_coupling(sample in arb_sample()) {
        let undefined = sample.total_ops() == 0 || sample.duration_ns == 0;
        prop_assert_eq!(sample.ops_per_sec() == 0.0, undefined);
        prop_assert_eq!(sample.ns_per_op().is_none(), undefined);
        if !undefined {
            prop_assert!(sample.ops_per_sec() > 0.0);
            prop_assert!(sample.ns_per_op().is_some_and(f64::is_finite));
        }
    }

    /// Property: aggregate stat blocks are internally consistent.
    #[test]
    fn prop_aggregate_bounds(samples in prop::collection::vec(arb_sample(), 1..20)) {
        let run = ImplementationRun {
            implementation: "prop".to_string(),
            node_size_bytes: 24,
            samples: samples.clone(),
        };
        let qualifying = samples.iter().filter(|s| s.ops_per_sec() > 0.0).count();

        match stats::aggregate(&run) {
            None => prop_assert_eq!(qualifying, 0),
            Some(agg) => {
                prop_assert!(qualifying > 0);
                prop_assert_eq!(agg.sample_count, samples.len());

                for block in [&agg.ops_per_sec, &agg.ns_per_op] {
                    prop_assert!(block.min <= block.max);
                    prop_assert!(block.min <= block.median && block.median <= block.max);
                    // Summation rounding can push the mean past the extremes
                    // by an ulp, hence the relative slack.
                    let slack = block.max.abs() * 1e-9;
                    prop_assert!(block.min - slack <= block.mean && block.mean <= block.max + slack);
                    prop_assert!(block.stdev >= 0.0);
                }
                if qualifying < 2 {
                    prop_assert_eq!(agg.ops_per_sec.stdev, 0.0);
                    prop_assert_eq!(agg.ns_per_op.stdev, 0.0);
                }

                let (lo, hi) = agg.node_count_range;
                for s in &samples {
                    prop_assert!(lo <= s.node_count && s.node_count <= hi);
                }
            }
        }
    }
}
