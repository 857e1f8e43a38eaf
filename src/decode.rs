//! Decoding and normalization of the ping-samples wire format.
//!
//! The endpoints return JSON in an awkward shape: each destination region
//! maps to an array of arrays, and only the first inner array carries the
//! measurement. Within that array the timestamp is a JSON number while RTT,
//! loss, and jitter are decimal strings. Decoding validates every field
//! explicitly and converts the whole response into a strongly typed
//! [`Overview`], failing on the first field that does not conform.

use serde::Deserialize;
use serde_json::Value;

use crate::{Error, Overview, Region, Sample, SampleField};

/// Wire representation of a response body: one loosely typed measurement
/// list per destination region.
#[derive(Debug, Deserialize)]
struct RawSamples {
    #[serde(rename = "linode-dallas")]
    dallas: Vec<Vec<Value>>,
    #[serde(rename = "linode-fremont")]
    fremont: Vec<Vec<Value>>,
    #[serde(rename = "linode-atlanta")]
    atlanta: Vec<Vec<Value>>,
    #[serde(rename = "linode-newark")]
    newark: Vec<Vec<Value>>,
    #[serde(rename = "linode-london")]
    london: Vec<Vec<Value>>,
    #[serde(rename = "linode-tokyo")]
    tokyo: Vec<Vec<Value>>,
}

/// Decode a raw response body into an [`Overview`] tagged with `name`.
///
/// Pure function of the body bytes: the same input always produces the
/// same overview or the same error.
pub(crate) fn decode_overview(body: &[u8], name: &str) -> Result<Overview, Error> {
    let raw: RawSamples =
        serde_json::from_slice(body).map_err(|e| Error::MalformedResponse(e.to_string()))?;

    Ok(Overview {
        name: name.to_string(),
        dallas: pull_sample(&raw.dallas, Region::Dallas)?,
        fremont: pull_sample(&raw.fremont, Region::Fremont)?,
        atlanta: pull_sample(&raw.atlanta, Region::Atlanta)?,
        newark: pull_sample(&raw.newark, Region::Newark)?,
        london: pull_sample(&raw.london, Region::London)?,
        tokyo: pull_sample(&raw.tokyo, Region::Tokyo)?,
    })
}

/// Normalize one destination's measurement list into a [`Sample`].
///
/// Only the first inner array is meaningful; any further entries are
/// ignored. Whether they ever carry historical samples is unknown, so they
/// are dropped rather than interpreted.
fn pull_sample(entries: &[Vec<Value>], region: Region) -> Result<Sample, Error> {
    let raw = entries.first().ok_or_else(|| Error::MalformedMeasurement {
        region,
        field: SampleField::Epoch,
        reason: "no measurement entries".to_string(),
    })?;

    Ok(Sample {
        epoch: epoch(raw, region)?,
        rtt: metric(raw, SampleField::Rtt, region)?,
        loss: metric(raw, SampleField::Loss, region)?,
        jitter: metric(raw, SampleField::Jitter, region)?,
    })
}

/// Extract the timestamp: a JSON number, truncated to whole seconds.
fn epoch(raw: &[Value], region: Region) -> Result<i64, Error> {
    let value = field(raw, SampleField::Epoch, region)?;
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .ok_or_else(|| malformed(region, SampleField::Epoch, "timestamp out of range")),
        other => Err(malformed(
            region,
            SampleField::Epoch,
            format!("expected number, got {}", json_type(other)),
        )),
    }
}

/// Extract a metric field: a decimal string that must fit in a u32.
///
/// The string encoding is an upstream quirk being normalized away, not a
/// format this crate accepts loosely: anything but pure decimal digits in
/// range is rejected.
fn metric(raw: &[Value], field_name: SampleField, region: Region) -> Result<u32, Error> {
    let value = field(raw, field_name, region)?;
    let text = value.as_str().ok_or_else(|| {
        malformed(
            region,
            field_name,
            format!("expected string, got {}", json_type(value)),
        )
    })?;
    // u32::from_str tolerates a leading '+'; the wire format is bare digits
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed(region, field_name, "expected decimal digits"));
    }
    text.parse::<u32>()
        .map_err(|e| malformed(region, field_name, e.to_string()))
}

fn field(raw: &[Value], field_name: SampleField, region: Region) -> Result<&Value, Error> {
    raw.get(field_name.index())
        .ok_or_else(|| malformed(region, field_name, "missing"))
}

fn malformed(region: Region, field: SampleField, reason: impl Into<String>) -> Error {
    Error::MalformedMeasurement {
        region,
        field,
        reason: reason.into(),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
