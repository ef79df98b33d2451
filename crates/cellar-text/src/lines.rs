/// Boilerplate found in merchant emails; any line containing one is dropped.
pub const BOILERPLATE_LINES: &[&str] = &[
    "/person",
    "finest and freshest original provenance available",
    "first come first served",
    "jon rimmerman",
    "parcel has arrived",
    "parcel has just arrived",
    "parcel is set to arrive",
    "shipment only",
    "wholesalers",
];

/// Simple line filter using substring containment
#[derive(Debug, Clone)]
pub struct LineFilter {
    blacklist: Vec<String>,
}

impl LineFilter {
    pub fn new(blacklist: Vec<String>) -> Self {
        Self { blacklist }
    }

    /// Check if a line contains any blacklisted substring
    pub fn is_boilerplate(&self, line: &str) -> bool {
        self.blacklist.iter().any(|entry| line.contains(entry.as_str()))
    }

    /// Get first matching entry (for diagnostics)
    pub fn matching_entry(&self, line: &str) -> Option<&str> {
        self.blacklist
            .iter()
            .find(|entry| line.contains(entry.as_str()))
            .map(String::as_str)
    }

    /// Keep lines free of boilerplate, joined with single spaces.
    pub fn filter(&self, text: &str) -> String {
        text.split('\n')
            .filter(|line| !self.is_boilerplate(line))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for LineFilter {
    fn default() -> Self {
        Self::new(BOILERPLATE_LINES.iter().map(|s| s.to_string()).collect())
    }
}
