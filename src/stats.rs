use crate::types::ScoredContact;
use crate::util::{average, format_number};

/// Headline metrics for a set of contacts. `mean_score` and `max_engagement`
/// are `None` for an empty set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean_score: Option<f64>,
    pub max_engagement: Option<f64>,
}

impl Summary {
    /// "Average Lead Score" as displayed: one decimal, or `n/a`.
    pub fn mean_score_label(&self) -> String {
        self.mean_score
            .map(|v| format_number(v, 1))
            .unwrap_or_else(|| "n/a".to_string())
    }

    /// "Highest Engagement" as displayed: whole percent, or `n/a`.
    pub fn max_engagement_label(&self) -> String {
        self.max_engagement
            .map(|v| format!("{}%", format_number(v, 0)))
            .unwrap_or_else(|| "n/a".to_string())
    }
}

pub fn summarize(contacts: &[ScoredContact]) -> Summary {
    if contacts.is_empty() {
        return Summary {
            count: 0,
            mean_score: None,
            max_engagement: None,
        };
    }
    let scores: Vec<f64> = contacts.iter().map(|c| c.score).collect();
    Summary {
        count: contacts.len(),
        mean_score: Some(average(&scores)),
        max_engagement: contacts.iter().map(|c| c.engagement).reduce(f64::max),
    }
}
