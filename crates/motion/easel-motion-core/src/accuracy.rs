//! Accuracy tiers: sample density and RDP tolerance.

named_enum! {
    /// Higher tiers sample at least as densely with a tighter tolerance,
    /// so they never keep fewer points than lower tiers.
    pub enum AccuracyTier ("accuracy tier") {
        Low => "LOW",
        Medium => "MEDIUM",
        High => "HIGH",
        Ultra => "ULTRA",
    }
}

impl Default for AccuracyTier {
    fn default() -> Self {
        AccuracyTier::High
    }
}

impl AccuracyTier {
    /// Number of equally spaced samples, both ends included.
    pub fn sample_count(self) -> usize {
        match self {
            AccuracyTier::Low => 250,
            AccuracyTier::Medium => 500,
            AccuracyTier::High | AccuracyTier::Ultra => 1000,
        }
    }

    /// Maximum perpendicular deviation allowed for a dropped sample.
    pub fn tolerance(self) -> f64 {
        match self {
            AccuracyTier::Low => 0.04,
            AccuracyTier::Medium => 0.02,
            AccuracyTier::High => 0.005,
            AccuracyTier::Ultra => 0.001,
        }
    }
}
