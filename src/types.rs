use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Columns every contact file must carry, in export order.
pub const REQUIRED_COLUMNS: [&str; 5] = ["name", "email", "engagement", "revenue", "industry_fit"];

/// Export header: the input columns followed by the derived score.
pub const EXPORT_COLUMNS: [&str; 6] = [
    "name",
    "email",
    "engagement",
    "revenue",
    "industry_fit",
    "score",
];

/// One CSV row exactly as read. Numeric cells stay textual until the loader
/// has validated them so a bad value can be reported with its line and column.
#[derive(Debug, Deserialize)]
pub struct RawRow {
    pub name: Option<String>,
    pub email: Option<String>,
    pub engagement: Option<String>,
    pub revenue: Option<String>,
    pub industry_fit: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    pub name: String,
    pub email: String,
    /// Percentage, documented range 0-100.
    pub engagement: f64,
    pub revenue: f64,
    /// Fit score, documented range 0-100.
    pub industry_fit: f64,
}

/// A contact with its lead score. Field order is the export column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredContact {
    pub name: String,
    pub email: String,
    pub engagement: f64,
    pub revenue: f64,
    pub industry_fit: f64,
    pub score: f64,
}

impl ScoredContact {
    pub fn from_contact(contact: &Contact, score: f64) -> Self {
        Self {
            name: contact.name.clone(),
            email: contact.email.clone(),
            engagement: contact.engagement,
            revenue: contact.revenue,
            industry_fit: contact.industry_fit,
            score,
        }
    }

    pub fn tier(&self) -> ScoreTier {
        ScoreTier::for_score(self.score)
    }
}

/// Highlight band used when rendering the contacts table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    High,
    Medium,
    Low,
}

impl ScoreTier {
    pub const HIGH_FLOOR: f64 = 80.0;
    pub const MEDIUM_FLOOR: f64 = 50.0;

    pub fn for_score(score: f64) -> Self {
        if score >= Self::HIGH_FLOOR {
            ScoreTier::High
        } else if score >= Self::MEDIUM_FLOOR {
            ScoreTier::Medium
        } else {
            ScoreTier::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreTier::High => "High",
            ScoreTier::Medium => "Medium",
            ScoreTier::Low => "Low",
        }
    }
}

#[derive(Debug, Tabled, Clone)]
pub struct ContactTableRow {
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Email")]
    pub email: String,
    #[tabled(rename = "Engagement")]
    pub engagement: String,
    #[tabled(rename = "Revenue")]
    pub revenue: String,
    #[tabled(rename = "IndustryFit")]
    pub industry_fit: String,
    #[tabled(rename = "Score")]
    pub score: String,
    #[tabled(rename = "Tier")]
    pub tier: &'static str,
}

#[derive(Debug, Tabled, Clone)]
pub struct RankingRow {
    #[tabled(rename = "Rank")]
    pub rank: usize,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Score")]
    pub score: String,
}

/// Bar chart point: one of the top-N leads.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopScorePoint {
    pub name: String,
    pub score: f64,
}

/// Scatter point: engagement against revenue, sized by fit and colored by score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub name: String,
    pub engagement: f64,
    pub revenue: f64,
    pub size: f64,
    pub color: f64,
}
