//! Error types for the netint client.

use std::fmt;

use thiserror::Error;

use crate::Region;

/// Which field of a raw measurement failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleField {
    Epoch,
    Rtt,
    Loss,
    Jitter,
}

impl SampleField {
    /// Position of the field within the raw four-element array.
    pub(crate) fn index(self) -> usize {
        match self {
            SampleField::Epoch => 0,
            SampleField::Rtt => 1,
            SampleField::Loss => 2,
            SampleField::Jitter => 3,
        }
    }
}

impl fmt::Display for SampleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SampleField::Epoch => "epoch",
            SampleField::Rtt => "rtt",
            SampleField::Loss => "loss",
            SampleField::Jitter => "jitter",
        };
        f.write_str(name)
    }
}

/// Errors that can occur while fetching or decoding an overview.
#[derive(Debug, Error)]
pub enum Error {
    /// The supplied name is not one of the six known regions.
    #[error("'{0}' is not a valid datacenter")]
    UnknownRegion(String),

    /// The HTTP request failed: connection, timeout, or non-success status.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not valid JSON in the expected six-region shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// A measurement field failed type, range, or parse validation.
    #[error("malformed {field} in measurement toward {region}: {reason}")]
    MalformedMeasurement {
        /// Destination region whose measurement was rejected.
        region: Region,
        /// The field that failed.
        field: SampleField,
        /// Human-readable parse or validation failure.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_region_names_the_input() {
        let err = Error::UnknownRegion("osaka".to_string());
        assert_eq!(err.to_string(), "'osaka' is not a valid datacenter");
    }

    #[test]
    fn malformed_measurement_names_region_and_field() {
        let err = Error::MalformedMeasurement {
            region: Region::London,
            field: SampleField::Rtt,
            reason: "invalid digit found in string".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("london"));
        assert!(msg.contains("rtt"));
    }

    #[test]
    fn sample_field_indices_cover_the_wire_layout() {
        let fields = [
            SampleField::Epoch,
            SampleField::Rtt,
            SampleField::Loss,
            SampleField::Jitter,
        ];
        let indices: Vec<usize> = fields.iter().map(|f| f.index()).collect();
        assert_eq!(indices, [0, 1, 2, 3]);
    }
}
