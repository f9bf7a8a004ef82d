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

//! Extraction and aggregation benchmarks.
//!
//! Measures the two hot paths of the pipeline: parsing a harness result
//! document and computing the full analysis over the extracted model.

use benchsight_core::{extract, stats};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::fmt::Write;

const SAMPLES_PER_SECTION: [usize; 3] = [10, 100, 1_000];

/// Generate a synthetic result document with `impls` implementations and
/// `samples` measurements per workload section.
fn generate_document(impls: usize, samples: usize) -> String {
    let mut xml = String::new();
    xml.push_str("<RBTestCollection platform=\"bench\" compiler=\"bench\">\n");
    for i in 0..impls {
        let _ = writeln!(xml, "<RBTest implementation=\"tree{}\" nodeSize=\"24\">", i);
        for section in [
            "SmallSetRandomOps",
            "LargeSetRandomOps",
            "SmallSetLinear",
            "LargeSetLinear",
        ] {
            let _ = writeln!(xml, "<{}>", section);
            for s in 0..samples {
                let _ = writeln!(
                    xml,
                    "<Sample nodeCount=\"{}\" insertCount=\"500\" extractCount=\"500\" duration=\"{}\"/>",
                    1000 * (s + 1),
                    400_000 + 31 * s
                );
            }
            let _ = writeln!(xml, "</{}>", section);
        }
        xml.push_str("</RBTest>\n");
    }
    xml.push_str("</RBTestCollection>\n");
    xml
}

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");
    for samples in SAMPLES_PER_SECTION {
        let xml = generate_document(4, samples);
        group.throughput(Throughput::Bytes(xml.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(samples), &xml, |b, xml| {
            b.iter(|| extract::parse_str(black_box(xml)).unwrap());
        });
    }
    group.finish();
}

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");
    for samples in SAMPLES_PER_SECTION {
        let data = extract::parse_str(&generate_document(4, samples)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(samples), &data, |b, data| {
            b.iter(|| stats::analyze(black_box(data)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_extract, bench_analyze);
criterion_main!(benches);
