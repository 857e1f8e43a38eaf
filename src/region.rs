//! The closed set of Linode regions that expose ping-samples endpoints.

use std::fmt;

/// A Linode data center tracked by the network-internals endpoints.
///
/// The set is fixed: these six regions report measurements toward each
/// other, and the endpoints know about no others. Unknown region names
/// are rejected at the string boundary ([`Region::from_name`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    Dallas,
    Fremont,
    Atlanta,
    Newark,
    London,
    Tokyo,
}

impl Region {
    /// All regions, in the canonical order used throughout the crate.
    pub const ALL: [Region; 6] = [
        Region::Dallas,
        Region::Fremont,
        Region::Atlanta,
        Region::Newark,
        Region::London,
        Region::Tokyo,
    ];

    /// The lowercase full name, e.g. `"dallas"`.
    pub fn name(self) -> &'static str {
        match self {
            Region::Dallas => "dallas",
            Region::Fremont => "fremont",
            Region::Atlanta => "atlanta",
            Region::Newark => "newark",
            Region::London => "london",
            Region::Tokyo => "tokyo",
        }
    }

    /// The short code used in the endpoint URL, e.g. `"dal"`.
    pub fn abbreviation(self) -> &'static str {
        match self {
            Region::Dallas => "dal",
            Region::Fremont => "fmt",
            Region::Atlanta => "atl",
            Region::Newark => "nwk",
            Region::London => "lon",
            Region::Tokyo => "tok",
        }
    }

    /// Look up a region by its full name.
    ///
    /// Returns `None` for anything outside the fixed set; callers that
    /// need a URL turn that into an error.
    pub fn from_name(name: &str) -> Option<Region> {
        Region::ALL.into_iter().find(|r| r.name() == name)
    }

    /// The JSON key this region is reported under in a response body.
    pub(crate) fn wire_key(self) -> &'static str {
        match self {
            Region::Dallas => "linode-dallas",
            Region::Fremont => "linode-fremont",
            Region::Atlanta => "linode-atlanta",
            Region::Newark => "linode-newark",
            Region::London => "linode-london",
            Region::Tokyo => "linode-tokyo",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The full names of all tracked regions, in canonical order.
pub fn regions() -> [&'static str; 6] {
    let mut names = [""; 6];
    for (slot, region) in names.iter_mut().zip(Region::ALL) {
        *slot = region.name();
    }
    names
}

/// The URL abbreviation for a region name, or `None` if the name is unknown.
pub fn abbreviation(name: &str) -> Option<&'static str> {
    Region::from_name(name).map(Region::abbreviation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn six_regions_in_stable_order() {
        assert_eq!(
            regions(),
            ["dallas", "fremont", "atlanta", "newark", "london", "tokyo"]
        );
    }

    #[test]
    fn abbreviations_are_distinct_and_nonempty() {
        let codes: BTreeSet<&str> = Region::ALL.iter().map(|r| r.abbreviation()).collect();
        assert_eq!(codes.len(), Region::ALL.len());
        assert!(codes.iter().all(|c| !c.is_empty()));
    }

    #[test]
    fn name_roundtrips_through_lookup() {
        for region in Region::ALL {
            assert_eq!(Region::from_name(region.name()), Some(region));
        }
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!(Region::from_name("osaka"), None);
        assert_eq!(Region::from_name("Dallas"), None); // names are lowercase
        assert_eq!(Region::from_name(""), None);
        assert_eq!(abbreviation("osaka"), None);
    }

    #[test]
    fn abbreviation_lookup_by_name() {
        assert_eq!(abbreviation("dallas"), Some("dal"));
        assert_eq!(abbreviation("fremont"), Some("fmt"));
        assert_eq!(abbreviation("tokyo"), Some("tok"));
    }

    #[test]
    fn wire_keys_match_region_names() {
        for region in Region::ALL {
            assert_eq!(region.wire_key(), format!("linode-{}", region.name()));
        }
    }
}
