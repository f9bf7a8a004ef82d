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

//! Error types for benchmark input handling.
//!
//! Exactly two conditions are fatal at this boundary: the input file cannot
//! be read, or its content does not conform to the expected result-document
//! structure. Undefined per-sample metrics (zero operations, zero duration)
//! are never errors; they are represented structurally in the model and
//! filtered by the statistics layer.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The error type for benchmark extraction.
///
/// Both variants are fatal for the whole run: every aggregate depends on a
/// fully parsed input, so there is no partial-result mode. The two variants
/// are distinguished in the message text, not in the process exit code.
///
/// # Examples
///
/// ```
/// use benchsight_core::Error;
///
/// let err = Error::malformed("unexpected end of document");
/// assert!(err.to_string().contains("Malformed benchmark input"));
/// ```
#[derive(Error, Debug, Clone)]
pub enum Error {
    /// The input file is missing or unreadable.
    #[error("Cannot read benchmark file '{path}': {message}")]
    InputNotFound {
        /// The file path that could not be read
        path: PathBuf,
        /// The underlying I/O error message
        message: String,
    },

    /// The input content does not conform to the expected XML structure.
    #[error("Malformed benchmark input: {0}")]
    InputMalformed(String),
}

impl Error {
    /// Create an input-not-found error with file path context.
    pub fn not_found(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::InputNotFound {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a malformed-input error.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::InputMalformed(msg.into())
    }
}
