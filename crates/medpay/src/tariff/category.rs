use serde::{Deserialize, Serialize};

/// Canonical dispute categories of the published tariff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DisputeCategory {
    WorkerEmployer,
    Commercial,
    Consumer,
    Rent,
    Family,
    PartnershipDissolution,
    Other,
}

impl DisputeCategory {
    pub const ALL: [DisputeCategory; 7] = [
        DisputeCategory::WorkerEmployer,
        DisputeCategory::Commercial,
        DisputeCategory::Consumer,
        DisputeCategory::Rent,
        DisputeCategory::Family,
        DisputeCategory::PartnershipDissolution,
        DisputeCategory::Other,
    ];

    /// Label the category carries in the published tariff tables.
    pub fn canonical_label(&self) -> &'static str {
        match self {
            DisputeCategory::WorkerEmployer => "İşçi-İşveren",
            DisputeCategory::Commercial => "Ticari",
            DisputeCategory::Consumer => "Tüketici",
            DisputeCategory::Rent => "Kira",
            DisputeCategory::Family => "Aile",
            DisputeCategory::PartnershipDissolution => "Ortaklığın Giderilmesi",
            DisputeCategory::Other => "Diğer",
        }
    }

    /// Maps a display label to its tariff category.
    ///
    /// Canonical labels match exactly. Combined screen labels such as
    /// "Kira, Komşu Hakkı, Kat Mülkiyeti" resolve through the legacy
    /// substring rules; anything unrecognized falls back to `Other`.
    pub fn from_label(label: &str) -> Self {
        let trimmed = label.trim();
        if let Some(exact) = Self::ALL
            .iter()
            .find(|category| category.canonical_label() == trimmed)
        {
            return *exact;
        }
        if trimmed.contains("Kira") {
            return DisputeCategory::Rent;
        }
        if trimmed.contains("Ortaklık") {
            return DisputeCategory::PartnershipDissolution;
        }
        DisputeCategory::Other
    }

    /// A missing label falls back to `Other`, like an unrecognized one.
    pub fn resolve(label: Option<&str>) -> Self {
        label.map(Self::from_label).unwrap_or(DisputeCategory::Other)
    }

    /// Commercial-class categories are floored at the higher minimum fee.
    pub fn is_commercial_class(&self) -> bool {
        matches!(
            self,
            DisputeCategory::Commercial | DisputeCategory::PartnershipDissolution
        )
    }
}
