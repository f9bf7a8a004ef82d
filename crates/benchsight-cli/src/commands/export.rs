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

//! Export command - writes the machine-readable JSON document.

use super::write_output;
use crate::error::CliError;
use benchsight_core::{Analysis, BenchmarkData};
use colored::Colorize;
use std::path::Path;

/// Export the full analysis and raw data as pretty-printed JSON.
///
/// `source` identifies the analyzed input inside the document's metadata so
/// the export stays self-sufficient for later re-analysis.
///
/// # Errors
///
/// Returns `Err` when serialization fails or the destination cannot be
/// written.
pub fn export(
    data: &BenchmarkData,
    analysis: &Analysis,
    source: &str,
    destination: &str,
) -> Result<(), CliError> {
    let json = benchsight_json::to_json(data, analysis, source)?;
    write_output(&json, Some(Path::new(destination)))?;
    println!(
        "{} JSON data exported to {}",
        "✓".green().bold(),
        destination
    );
    Ok(())
}
