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

//! Core data model and statistics engine for benchmark analysis.
//!
//! This crate parses the XML result documents produced by the benchmark
//! harness into a normalized in-memory model, derives per-sample throughput
//! and latency metrics, and computes per-implementation aggregate statistics
//! with rankings.
//!
//! # Pipeline
//!
//! ```text
//! XML document --extract--> BenchmarkData --analyze--> Analysis
//!                                |                        |
//!                                +--series--> chart adapter
//!                                +------------------------+--> report / export
//! ```
//!
//! The whole pipeline is synchronous and eager: one parse builds the model,
//! every derived structure is computed from it, and all outputs of an
//! invocation observe the same immutable data.

mod error;
pub mod extract;
mod model;
pub mod rank;
pub mod series;
pub mod stats;

pub use error::Error;
pub use model::{
    AggregateStats, Analysis, BenchmarkData, ImplementationRun, Ranking, Sample, StatBlock,
    WorkloadAnalysis, WorkloadKind,
};
pub use series::ScalabilitySeries;

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;
