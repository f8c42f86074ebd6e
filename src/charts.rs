// Chart series over a filtered result. Rendering belongs to whatever plotting
// layer consumes the JSON; only the data shape is fixed here.
use crate::filter::ResultSet;
use crate::types::{ScatterPoint, TopScorePoint};
use serde::Serialize;

pub const DEFAULT_TOP_N: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub top_scores: Vec<TopScorePoint>,
    pub engagement_vs_revenue: Vec<ScatterPoint>,
}

impl ChartSeries {
    pub fn build(results: &ResultSet, top: usize) -> Self {
        Self {
            top_scores: top_scores_series(results, top),
            engagement_vs_revenue: engagement_revenue_series(results),
        }
    }
}

/// Ranked bar chart, ordered like [`crate::ranking::top_n`].
pub fn top_scores_series(results: &ResultSet, n: usize) -> Vec<TopScorePoint> {
    results
        .top(n)
        .into_iter()
        .map(|c| TopScorePoint {
            name: c.name,
            score: c.score,
        })
        .collect()
}

/// Engagement (x) against revenue (y), sized by industry fit and colored by
/// score, in result order.
pub fn engagement_revenue_series(results: &ResultSet) -> Vec<ScatterPoint> {
    results
        .contacts()
        .iter()
        .map(|c| ScatterPoint {
            name: c.name.clone(),
            engagement: c.engagement,
            revenue: c.revenue,
            size: c.industry_fit,
            color: c.score,
        })
        .collect()
}
