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

//! XML benchmark result extraction.
//!
//! Parses the harness output document into [`BenchmarkData`]. The expected
//! shape is a root element with optional `platform`/`compiler` attributes
//! containing repeated `RBTest` records; each record carries
//! `implementation` and `nodeSize` attributes and up to four workload
//! sections holding `Sample` elements.
//!
//! No metric filtering happens here: every convertible sample passes
//! through, including zero-rate ones. Filtering qualifying values is the
//! statistics layer's job.

use crate::model::{BenchmarkData, ImplementationRun, Sample, WorkloadKind};
use crate::{Error, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Element name of one per-implementation record.
const RECORD_ELEMENT: &str = "RBTest";
/// Element name of one measurement inside a workload section.
const SAMPLE_ELEMENT: &str = "Sample";

/// Parse a benchmark result file into [`BenchmarkData`].
///
/// # Errors
///
/// Returns [`Error::InputNotFound`] when the file cannot be read and
/// [`Error::InputMalformed`] when its content does not parse. Both are fatal
/// for the run; there is no partial-result mode.
pub fn parse_file(path: impl AsRef<Path>) -> Result<BenchmarkData> {
    let path = path.as_ref();
    let xml = fs::read_to_string(path).map_err(|e| Error::not_found(path, e))?;
    parse_str(&xml)
}

/// Parse a benchmark result document from a string.
pub fn parse_str(xml: &str) -> Result<BenchmarkData> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let root_name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                let attrs = attributes(&e)?;
                let mut data =
                    BenchmarkData::new(attrs.get("platform").cloned(), attrs.get("compiler").cloned());
                parse_collection(&mut reader, &root_name, &mut data)?;
                return Ok(data);
            }
            Ok(Event::Empty(e)) => {
                // A self-closing root carries metadata but no records.
                let attrs = attributes(&e)?;
                return Ok(BenchmarkData::new(
                    attrs.get("platform").cloned(),
                    attrs.get("compiler").cloned(),
                ));
            }
            Ok(Event::Eof) => {
                return Err(Error::malformed("document contains no root element"));
            }
            Err(e) => {
                return Err(Error::malformed(format!(
                    "XML parse error at position {}: {}",
                    reader.buffer_position(),
                    e
                )));
            }
            _ => {}
        }
    }
}

fn parse_collection(
    reader: &mut Reader<&[u8]>,
    root_name: &str,
    data: &mut BenchmarkData,
) -> Result<()> {
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                if name == RECORD_ELEMENT {
                    let elem = e.to_owned();
                    parse_record(reader, &elem, data)?;
                } else {
                    skip_element(reader, &e)?;
                }
            }
            Ok(Event::Empty(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                if name == RECORD_ELEMENT {
                    // Record with no sections: contributes nothing, but its
                    // attributes must still be well-formed.
                    record_header(&e)?;
                }
            }
            Ok(Event::End(e)) => {
                if e.name().as_ref() == root_name.as_bytes() {
                    return Ok(());
                }
            }
            Ok(Event::Eof) => {
                return Err(Error::malformed(format!(
                    "unexpected end of document inside <{}>",
                    root_name
                )));
            }
            Err(e) => {
                return Err(Error::malformed(format!(
                    "XML parse error at position {}: {}",
                    reader.buffer_position(),
                    e
                )));
            }
            _ => {}
        }
    }
}

/// Extract `(implementation, node_size)` from a record's attributes.
fn record_header(elem: &BytesStart) -> Result<(String, u64)> {
    let attrs = attributes(elem)?;
    let implementation = attrs
        .get("implementation")
        .cloned()
        .ok_or_else(|| Error::malformed("RBTest missing implementation attribute"))?;
    let node_size = optional_u64(&attrs, "nodeSize", &implementation)?;
    Ok((implementation, node_size))
}

fn parse_record(
    reader: &mut Reader<&[u8]>,
    elem: &BytesStart,
    data: &mut BenchmarkData,
) -> Result<()> {
    let (implementation, node_size) = record_header(elem)?;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                match WorkloadKind::from_section_name(&name) {
                    Some(kind) => {
                        let mut run = ImplementationRun::new(&implementation, node_size);
                        run.samples = parse_samples(reader, &name, &implementation)?;
                        // Empty sections are dropped inside push_run, making
                        // them indistinguishable from absent sections.
                        data.push_run(kind, run);
                    }
                    None => skip_element(reader, &e)?,
                }
            }
            Ok(Event::End(e)) => {
                if e.name().as_ref() == RECORD_ELEMENT.as_bytes() {
                    return Ok(());
                }
            }
            Ok(Event::Eof) => {
                return Err(Error::malformed(format!(
                    "unexpected end of document inside record '{}'",
                    implementation
                )));
            }
            Err(e) => {
                return Err(Error::malformed(format!(
                    "XML parse error at position {}: {}",
                    reader.buffer_position(),
                    e
                )));
            }
            _ => {}
        }
    }
}

fn parse_samples(
    reader: &mut Reader<&[u8]>,
    section_name: &str,
    implementation: &str,
) -> Result<Vec<Sample>> {
    let mut samples = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Empty(e)) => {
                if e.name().as_ref() == SAMPLE_ELEMENT.as_bytes() {
                    samples.push(parse_sample(&e, implementation)?);
                }
            }
            Ok(Event::Start(e)) => {
                if e.name().as_ref() == SAMPLE_ELEMENT.as_bytes() {
                    samples.push(parse_sample(&e, implementation)?);
                }
                skip_element(reader, &e)?;
            }
            Ok(Event::End(e)) => {
                if e.name().as_ref() == section_name.as_bytes() {
                    return Ok(samples);
                }
            }
            Ok(Event::Eof) => {
                return Err(Error::malformed(format!(
                    "unexpected end of document inside <{}> of '{}'",
                    section_name, implementation
                )));
            }
            Err(e) => {
                return Err(Error::malformed(format!(
                    "XML parse error at position {}: {}",
                    reader.buffer_position(),
                    e
                )));
            }
            _ => {}
        }
    }
}

fn parse_sample(elem: &BytesStart, implementation: &str) -> Result<Sample> {
    let attrs = attributes(elem)?;
    Ok(Sample {
        node_count: required_u64(&attrs, "nodeCount", implementation)?,
        duration_ns: required_u64(&attrs, "duration", implementation)?,
        insert_count: optional_u64(&attrs, "insertCount", implementation)?,
        extract_count: optional_u64(&attrs, "extractCount", implementation)?,
    })
}

/// Consume an already-opened element and everything inside it.
fn skip_element(reader: &mut Reader<&[u8]>, elem: &BytesStart) -> Result<()> {
    let end = elem.to_end().into_owned();
    reader.read_to_end(end.name()).map_err(|e| {
        Error::malformed(format!(
            "XML parse error at position {}: {}",
            reader.buffer_position(),
            e
        ))
    })?;
    Ok(())
}

fn attributes(elem: &BytesStart) -> Result<BTreeMap<String, String>> {
    let mut map = BTreeMap::new();
    for attr in elem.attributes() {
        let attr = attr.map_err(|e| Error::malformed(format!("invalid attribute: {}", e)))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).to_string();
        let value = attr
            .unescape_value()
            .map_err(|e| Error::malformed(format!("invalid attribute value: {}", e)))?
            .into_owned();
        map.insert(key, value);
    }
    Ok(map)
}

fn required_u64(attrs: &BTreeMap<String, String>, key: &str, context: &str) -> Result<u64> {
    let value = attrs.get(key).ok_or_else(|| {
        Error::malformed(format!("Sample in '{}' missing {} attribute", context, key))
    })?;
    parse_u64(value, key, context)
}

fn optional_u64(attrs: &BTreeMap<String, String>, key: &str, context: &str) -> Result<u64> {
    match attrs.get(key) {
        Some(value) => parse_u64(value, key, context),
        None => Ok(0),
    }
}

fn parse_u64(value: &str, key: &str, context: &str) -> Result<u64> {
    value.parse::<u64>().map_err(|_| {
        Error::malformed(format!(
            "invalid {} value '{}' in '{}': expected a non-negative integer",
            key, value, context
        ))
    })
}
