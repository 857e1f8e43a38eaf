//! Normalized result types returned by the client.

use serde::{Deserialize, Serialize};

use crate::Region;

/// A single point-to-point measurement, normalized from the wire encoding.
///
/// The endpoints report RTT, loss, and jitter as decimal strings while the
/// timestamp is a JSON number; decoding flattens that asymmetry into plain
/// integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    /// Unix timestamp of the measurement, in seconds.
    pub epoch: i64,
    /// Round-trip time in milliseconds.
    pub rtt: u32,
    /// Packet loss in percentage points.
    pub loss: u32,
    /// Jitter in milliseconds.
    pub jitter: u32,
}

/// One origin region's view of the network: a [`Sample`] toward every
/// tracked region, including itself.
///
/// An overview is built fresh per fetch and owns its samples; repeated
/// fetches produce independent instances reflecting the latest server data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overview {
    /// Name of the origin region this overview was fetched for.
    pub name: String,
    pub dallas: Sample,
    pub fremont: Sample,
    pub atlanta: Sample,
    pub newark: Sample,
    pub london: Sample,
    pub tokyo: Sample,
}

impl Overview {
    /// The sample toward a destination region.
    pub fn sample(&self, destination: Region) -> &Sample {
        match destination {
            Region::Dallas => &self.dallas,
            Region::Fremont => &self.fremont,
            Region::Atlanta => &self.atlanta,
            Region::Newark => &self.newark,
            Region::London => &self.london,
            Region::Tokyo => &self.tokyo,
        }
    }

    /// Iterate over destination regions with their samples, in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (Region, &Sample)> + '_ {
        Region::ALL.into_iter().map(move |r| (r, self.sample(r)))
    }
}
