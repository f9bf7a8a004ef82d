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

//! Structured error types for the Benchsight CLI.
//!
//! All CLI operations return `Result<T, CliError>`. Every variant is fatal:
//! the process reports the diagnostic on stderr and exits non-zero. The
//! file-not-found and malformed-input cases are distinguished by their
//! message text (carried from `benchsight_core::Error`), not by exit code.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for Benchsight CLI operations.
#[derive(Error, Debug)]
pub enum CliError {
    /// Input extraction failed (file unreadable or content malformed).
    #[error(transparent)]
    Input(#[from] benchsight_core::Error),

    /// JSON export serialization failed.
    #[error(transparent)]
    Export(#[from] benchsight_json::ExportError),

    /// An output artifact could not be written.
    #[error("Failed to write '{path}': {message}")]
    Output {
        /// The destination path that failed
        path: PathBuf,
        /// The underlying I/O error message
        message: String,
    },
}

impl CliError {
    /// Create an output-write error with destination context.
    pub fn output(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Output {
            path: path.into(),
            message: source.to_string(),
        }
    }
}
