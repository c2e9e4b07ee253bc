use std::path::Path;

const BUNDLED_TIME_ZONES: &str = include_str!("../../data/timezones.txt");

/// Source of the time zone identifiers a talk may be submitted with.
pub trait TimezoneLookup: Send + Sync {
    /// Recognized identifiers containing `filter` (case-insensitive), in
    /// list order. An empty filter returns every identifier.
    fn load_time_zones(&self, filter: &str) -> Vec<String>;
}

/// Lookup over a fixed list of identifiers.
#[derive(Debug, Clone)]
pub struct StaticTimezoneLookup {
    zones: Vec<String>,
}

impl StaticTimezoneLookup {
    /// The list shipped with the binary.
    pub fn bundled() -> Self {
        Self::parse(BUNDLED_TIME_ZONES)
    }

    /// Read one identifier per line; blank lines and `#` comments are skipped.
    pub fn from_file(path: &Path) -> std::io::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let lookup = Self::parse(&text);
        log::info!("Loaded {} time zones from {}", lookup.zones.len(), path.display());
        Ok(lookup)
    }

    pub fn parse(text: &str) -> Self {
        let zones = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .map(str::to_string)
            .collect();
        Self { zones }
    }
}

impl TimezoneLookup for StaticTimezoneLookup {
    fn load_time_zones(&self, filter: &str) -> Vec<String> {
        let needle = filter.trim().to_lowercase();
        if needle.is_empty() {
            return self.zones.clone();
        }
        self.zones
            .iter()
            .filter(|z| z.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }
}
