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

//! CLI command implementations.
//!
//! Each command consumes the shared immutable model built by one parse of
//! the input; requesting several outputs in one invocation never re-parses
//! and can never observe inconsistent data.

mod chart;
mod export;
mod report;

pub use chart::chart;
pub use export::export;
pub use report::report;

use crate::error::CliError;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Write content to a file, or to stdout when no path is given.
pub(crate) fn write_output(content: &str, path: Option<&Path>) -> Result<(), CliError> {
    match path {
        Some(p) => fs::write(p, content).map_err(|e| CliError::output(p, e)),
        None => io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| CliError::output("stdout", e)),
    }
}
