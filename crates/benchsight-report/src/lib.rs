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

//! Text report rendering for benchmark analyses.
//!
//! Formats the aggregate statistics and rankings computed by
//! `benchsight-core` as a plain-text report. Consumers rely on the numeric
//! content and the section ordering; the decorative layout (banners,
//! separators) is incidental. Per implementation the report emits, in order:
//! identity, node size, sample count, node-count range, the full ops/sec
//! stat block, the best/relative marker, and the full ns/op stat block.
//! A memory-efficiency section follows the workload sections.

use benchsight_core::{Analysis, BenchmarkData, Ranking, StatBlock, WorkloadAnalysis};
use std::fmt::Write;

/// Marker line printed instead of a percentage for the best implementation.
const BEST_MARKER: &str = "★ BEST PERFORMANCE ★";

/// Render the full text report for one analyzed dataset.
///
/// Workload sections appear in canonical order; implementations within a
/// section appear in input encounter order. Workloads without aggregated
/// implementations render a "no data" note instead of failing.
pub fn render(data: &BenchmarkData, analysis: &Analysis) -> String {
    let mut out = String::new();

    push_line(&mut out, &"=".repeat(60));
    push_line(&mut out, "DATA STRUCTURE BENCHMARK REPORT");
    push_line(&mut out, &"=".repeat(60));
    push_line(&mut out, "");
    push_line(&mut out, &format!("Platform: {}", data.platform_name()));
    push_line(&mut out, &format!("Compiler: {}", data.compiler_name()));
    push_line(&mut out, "");

    for (kind, workload) in analysis.iter() {
        push_line(&mut out, &format!("{} {} {}", "=".repeat(20), kind, "=".repeat(20)));
        push_line(&mut out, "");

        if workload.is_empty() {
            push_line(&mut out, "No data available for this workload.");
            push_line(&mut out, "");
            continue;
        }

        render_workload(&mut out, workload);
    }

    render_memory_efficiency(&mut out, analysis);

    out
}

fn render_workload(out: &mut String, workload: &WorkloadAnalysis) {
    for (implementation, stats) in &workload.aggregates {
        push_line(out, &format!("Implementation: {}", implementation));
        push_line(out, &format!("  Node size: {} bytes", stats.node_size_bytes));
        push_line(out, &format!("  Samples: {}", stats.sample_count));
        push_line(
            out,
            &format!(
                "  Node count range: {} - {}",
                group_digits(stats.node_count_range.0),
                group_digits(stats.node_count_range.1)
            ),
        );
        push_line(out, "");

        push_line(out, "  Operations per second:");
        render_rate_block(out, &stats.ops_per_sec);
        render_standing(out, workload.ranking.as_ref(), implementation, &stats.ops_per_sec);
        push_line(out, "");

        push_line(out, "  Nanoseconds per operation:");
        render_latency_block(out, &stats.ns_per_op);
        push_line(out, "");

        push_line(out, &"-".repeat(40));
        push_line(out, "");
    }
}

fn render_rate_block(out: &mut String, block: &StatBlock) {
    push_line(out, &format!("    Mean: {}", group_rounded(block.mean)));
    push_line(out, &format!("    Median: {}", group_rounded(block.median)));
    push_line(out, &format!("    Std Dev: {}", group_rounded(block.stdev)));
    push_line(
        out,
        &format!(
            "    Range: {} - {}",
            group_rounded(block.min),
            group_rounded(block.max)
        ),
    );
}

fn render_latency_block(out: &mut String, block: &StatBlock) {
    push_line(out, &format!("    Mean: {:.1} ns", block.mean));
    push_line(out, &format!("    Median: {:.1} ns", block.median));
    push_line(out, &format!("    Std Dev: {:.1} ns", block.stdev));
    push_line(
        out,
        &format!("    Range: {:.1} - {:.1} ns", block.min, block.max),
    );
}

fn render_standing(
    out: &mut String,
    ranking: Option<&Ranking>,
    implementation: &str,
    ops: &StatBlock,
) {
    // A workload with aggregates always carries a ranking.
    let Some(ranking) = ranking else { return };
    if ranking.is_best(implementation) {
        push_line(out, &format!("    {}", BEST_MARKER));
    } else {
        push_line(
            out,
            &format!("    Relative to best: {:.1}%", ranking.relative_pct(ops.mean)),
        );
    }
}

fn render_memory_efficiency(out: &mut String, analysis: &Analysis) {
    push_line(
        out,
        &format!("{} MEMORY EFFICIENCY {}", "=".repeat(20), "=".repeat(20)),
    );
    push_line(out, "");

    for (kind, workload) in analysis.iter() {
        if workload.is_empty() {
            continue;
        }
        push_line(out, &format!("{}:", kind));
        for (implementation, stats) in &workload.aggregates {
            // A zero node size means "unknown footprint": efficiency is
            // reported as 0 rather than dividing by zero.
            let efficiency = if stats.node_size_bytes > 0 {
                stats.ops_per_sec.mean / stats.node_size_bytes as f64
            } else {
                0.0
            };
            push_line(
                out,
                &format!(
                    "  {}: {} ops/sec/byte",
                    implementation,
                    group_rounded(efficiency)
                ),
            );
        }
        push_line(out, "");
    }
}

fn push_line(out: &mut String, line: &str) {
    let _ = writeln!(out, "{}", line);
}

/// Round to the nearest integer and insert thousands separators.
fn group_rounded(value: f64) -> String {
    group_digits(value.round() as u64)
}

/// Insert thousands separators into a non-negative integer.
fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(999), "999");
        assert_eq!(group_digits(1000), "1,000");
        assert_eq!(group_digits(2_000_000), "2,000,000");
        assert_eq!(group_digits(1_234_567_890), "1,234,567,890");
    }

    #[test]
    fn test_group_rounded() {
        assert_eq!(group_rounded(1_499.6), "1,500");
        assert_eq!(group_rounded(0.2), "0");
    }
}
