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

//! CLI argument definitions.

use clap::Parser;

/// Benchsight - benchmark statistics and analysis toolkit.
///
/// Parses the XML result documents produced by the benchmark harness and
/// produces aggregate statistics, rankings, and exports.
///
/// # Examples
///
/// ```bash
/// # Print the detailed report to stdout
/// benchsight results.xml
///
/// # Write the report to a file
/// benchsight results.xml --report analysis.txt
///
/// # Export JSON data and scalability charts
/// benchsight results.xml --json data.json --chart scalability.svg
///
/// # All outputs with a common base name
/// benchsight results.xml --all rbtree
/// ```
#[derive(Parser, Debug)]
#[command(name = "benchsight")]
#[command(author, version, about = "Benchmark statistics and analysis toolkit", long_about = None)]
pub struct Args {
    /// XML benchmark results file
    #[arg(value_name = "FILE")]
    pub input: String,

    /// Generate the detailed text report (to stdout when no file is given)
    #[arg(short, long, value_name = "FILE", num_args = 0..=1)]
    pub report: Option<Option<String>>,

    /// Export the full analysis and raw data as JSON
    #[arg(short, long, value_name = "FILE")]
    pub json: Option<String>,

    /// Render scalability charts as SVG
    #[arg(short, long, value_name = "FILE")]
    pub chart: Option<String>,

    /// Generate all outputs with this base name
    #[arg(short, long, value_name = "BASE", conflicts_with_all = ["report", "json", "chart"])]
    pub all: Option<String>,
}
