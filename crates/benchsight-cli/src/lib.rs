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

//! Benchsight CLI library.
//!
//! Wires the extraction, statistics, report, export, and chart crates
//! behind one invocation surface. The input is parsed exactly once; every
//! requested output is produced sequentially from the same immutable model.

pub mod cli;
pub mod commands;
pub mod error;

use cli::Args;
use error::CliError;

/// Execute one CLI invocation.
///
/// With `--all BASE`, writes the report, JSON export, and chart under
/// derived file names. Otherwise each requested output flag is honored in
/// order; when no output flag is present at all, the text report goes to
/// stdout.
///
/// # Errors
///
/// Returns `Err` when the input cannot be read or parsed, or when an output
/// destination cannot be written. All errors are fatal for the invocation.
pub fn run(args: Args) -> Result<(), CliError> {
    let data = benchsight_core::extract::parse_file(&args.input)?;
    let analysis = benchsight_core::stats::analyze(&data);

    if let Some(base) = &args.all {
        commands::report(&data, &analysis, Some(&format!("{}_report.txt", base)))?;
        commands::export(
            &data,
            &analysis,
            &args.input,
            &format!("{}_data.json", base),
        )?;
        commands::chart(&data, &format!("{}_scalability.svg", base))?;
        return Ok(());
    }

    let mut produced = false;

    if let Some(destination) = &args.report {
        commands::report(&data, &analysis, destination.as_deref())?;
        produced = true;
    }
    if let Some(destination) = &args.json {
        commands::export(&data, &analysis, &args.input, destination)?;
        produced = true;
    }
    if let Some(destination) = &args.chart {
        commands::chart(&data, destination)?;
        produced = true;
    }

    if !produced {
        commands::report(&data, &analysis, None)?;
    }

    Ok(())
}
