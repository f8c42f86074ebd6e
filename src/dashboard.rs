// One dashboard session.
//
// Contacts are loaded and scored once; the scores never change afterwards.
// The filter is the only mutable state, and every view is derived from scratch
// from (scored contacts, filter) so nothing can drift between recomputes.
use crate::charts::ChartSeries;
use crate::error::{LoadError, ScoreError};
use crate::filter::{apply_filter, FilterBounds, FilterOverrides, FilterSpec, ResultSet};
use crate::loader::{self, LoadReport};
use crate::scoring::score_all;
use crate::stats::{summarize, Summary};
use crate::types::{Contact, ScoredContact};
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct Dashboard {
    contacts: Vec<ScoredContact>,
    overview: Summary,
    bounds: Option<FilterBounds>,
    defaults: FilterSpec,
    filter: FilterSpec,
}

/// Everything a presentation layer needs for one filter state.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub filter: FilterSpec,
    pub results: ResultSet,
    pub summary: Summary,
    pub top: Vec<ScoredContact>,
    pub charts: ChartSeries,
}

impl Dashboard {
    pub fn new(contacts: &[Contact]) -> Result<Self, ScoreError> {
        if contacts.is_empty() {
            warn!("no contacts loaded; dashboard will be empty");
        }
        let scored = score_all(contacts)?;
        let defaults = FilterSpec::derive_defaults(&scored);
        Ok(Self {
            overview: summarize(&scored),
            bounds: FilterBounds::from_contacts(&scored),
            defaults,
            filter: defaults,
            contacts: scored,
        })
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<(Self, LoadReport), LoadError> {
        let (contacts, report) = loader::load_contacts(path)?;
        Ok((Self::new(&contacts)?, report))
    }

    pub fn contacts(&self) -> &[ScoredContact] {
        &self.contacts
    }

    /// Metrics over the full, unfiltered set.
    pub fn overview(&self) -> &Summary {
        &self.overview
    }

    pub fn bounds(&self) -> Option<&FilterBounds> {
        self.bounds.as_ref()
    }

    pub fn filter(&self) -> &FilterSpec {
        &self.filter
    }

    pub fn default_filter(&self) -> &FilterSpec {
        &self.defaults
    }

    pub fn set_filter(&mut self, filter: FilterSpec) {
        debug!(?filter, "filter updated");
        self.filter = filter;
    }

    pub fn apply_overrides(&mut self, overrides: &FilterOverrides) {
        self.set_filter(self.filter.with_overrides(overrides));
    }

    pub fn reset_filter(&mut self) {
        self.set_filter(self.defaults);
    }

    pub fn results(&self) -> ResultSet {
        apply_filter(&self.contacts, &self.filter)
    }

    pub fn view(&self, top: usize) -> DashboardView {
        let results = self.results();
        debug!(
            matched = results.len(),
            total = self.contacts.len(),
            "filter applied"
        );
        DashboardView {
            filter: self.filter,
            summary: summarize(results.contacts()),
            top: results.top(top),
            charts: ChartSeries::build(&results, top),
            results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(name: &str, engagement: f64, revenue: f64, industry_fit: f64) -> Contact {
        Contact {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            engagement,
            revenue,
            industry_fit,
        }
    }

    fn sample() -> Vec<Contact> {
        vec![
            contact("One", 50.0, 1000.0, 80.0),
            contact("Two", 90.0, 500.0, 40.0),
            contact("Three", 10.0, 100.0, 10.0),
        ]
    }

    #[test]
    fn default_view_shows_everything() {
        let dashboard = Dashboard::new(&sample()).expect("sample scores");
        let view = dashboard.view(10);
        assert_eq!(view.results.len(), 3);
        assert_eq!(view.summary, *dashboard.overview());
        assert_eq!(view.top[0].name, "One");
    }

    #[test]
    fn overview_is_unaffected_by_filter() {
        let mut dashboard = Dashboard::new(&sample()).expect("sample scores");
        let before = *dashboard.overview();
        dashboard.apply_overrides(&FilterOverrides {
            min_score: Some(70.0),
            ..FilterOverrides::default()
        });
        let view = dashboard.view(10);

        assert_eq!(*dashboard.overview(), before);
        assert_eq!(before.count, 3);
        assert_eq!(view.summary.count, 1);
        assert_eq!(view.results.contacts()[0].name, "One");
        assert_eq!(view.charts.top_scores.len(), 1);
    }

    #[test]
    fn scores_stay_fixed_when_filter_excludes_max_revenue() {
        let mut dashboard = Dashboard::new(&sample()).expect("sample scores");
        dashboard.apply_overrides(&FilterOverrides {
            revenue_high: Some(600.0),
            ..FilterOverrides::default()
        });
        let view = dashboard.view(10);
        let two = view
            .results
            .contacts()
            .iter()
            .find(|c| c.name == "Two")
            .expect("Two passes the revenue filter");
        assert_eq!(two.score, 63.0);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut dashboard = Dashboard::new(&sample()).expect("sample scores");
        let defaults = *dashboard.default_filter();
        dashboard.apply_overrides(&FilterOverrides {
            eng_threshold: Some(95.0),
            ..FilterOverrides::default()
        });
        assert!(dashboard.view(10).results.is_empty());

        dashboard.reset_filter();
        assert_eq!(*dashboard.filter(), defaults);
        assert_eq!(dashboard.view(10).results.len(), 3);
    }

    #[test]
    fn empty_dataset_yields_empty_view() {
        let dashboard = Dashboard::new(&[]).expect("empty set scores");
        let view = dashboard.view(10);
        assert!(view.results.is_empty());
        assert!(view.top.is_empty());
        assert_eq!(view.summary.mean_score, None);
        assert!(dashboard.bounds().is_none());
    }
}
