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

//! Report command - renders the detailed text report.

use super::write_output;
use crate::error::CliError;
use benchsight_core::{Analysis, BenchmarkData};
use colored::Colorize;
use std::path::Path;

/// Render the detailed text report to a file or stdout.
///
/// # Errors
///
/// Returns `Err` when the destination cannot be written.
pub fn report(
    data: &BenchmarkData,
    analysis: &Analysis,
    destination: Option<&str>,
) -> Result<(), CliError> {
    let text = benchsight_report::render(data, analysis);
    write_output(&text, destination.map(Path::new))?;
    if let Some(path) = destination {
        println!("{} Detailed report saved to {}", "✓".green().bold(), path);
    }
    Ok(())
}
