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

//! Chart command - renders the SVG scalability grid.

use super::write_output;
use crate::error::CliError;
use benchsight_chart::ChartConfig;
use benchsight_core::BenchmarkData;
use colored::Colorize;
use std::path::Path;

/// Render the 2×2 scalability chart grid to an SVG file.
///
/// # Errors
///
/// Returns `Err` when the destination cannot be written.
pub fn chart(data: &BenchmarkData, destination: &str) -> Result<(), CliError> {
    let svg = benchsight_chart::render_svg(data, &ChartConfig::default());
    write_output(&svg, Some(Path::new(destination)))?;
    println!(
        "{} Scalability chart saved to {}",
        "✓".green().bold(),
        destination
    );
    Ok(())
}
