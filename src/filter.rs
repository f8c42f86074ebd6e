use crate::ranking::top_n;
use crate::types::ScoredContact;

/// Inclusive `[low, high]` revenue window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevenueRange {
    pub low: f64,
    pub high: f64,
}

impl RevenueRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn contains(&self, revenue: f64) -> bool {
        self.low <= revenue && revenue <= self.high
    }
}

/// The three user-controlled thresholds. Every bound is inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterSpec {
    pub min_score: f64,
    pub revenue_range: RevenueRange,
    pub eng_threshold: f64,
}

impl FilterSpec {
    /// Defaults that admit every loaded contact: the minimum score, the full
    /// revenue span and the minimum engagement. An empty set yields all zeros.
    pub fn derive_defaults(contacts: &[ScoredContact]) -> Self {
        FilterBounds::from_contacts(contacts)
            .map(|bounds| bounds.default_spec())
            .unwrap_or(Self {
                min_score: 0.0,
                revenue_range: RevenueRange::new(0.0, 0.0),
                eng_threshold: 0.0,
            })
    }

    /// Replace the fields the caller set, keep the rest.
    pub fn with_overrides(mut self, overrides: &FilterOverrides) -> Self {
        if let Some(min_score) = overrides.min_score {
            self.min_score = min_score;
        }
        if let Some(low) = overrides.revenue_low {
            self.revenue_range.low = low;
        }
        if let Some(high) = overrides.revenue_high {
            self.revenue_range.high = high;
        }
        if let Some(eng) = overrides.eng_threshold {
            self.eng_threshold = eng;
        }
        self
    }
}

/// Partial filter supplied from the command line or the interactive prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FilterOverrides {
    pub min_score: Option<f64>,
    pub revenue_low: Option<f64>,
    pub revenue_high: Option<f64>,
    pub eng_threshold: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub min: f64,
    pub max: f64,
}

impl Span {
    fn of(values: impl Iterator<Item = f64>) -> Option<Self> {
        values.fold(None, |acc, v| match acc {
            None => Some(Span { min: v, max: v }),
            Some(span) => Some(Span {
                min: span.min.min(v),
                max: span.max.max(v),
            }),
        })
    }
}

/// Observed range of each filterable attribute over the full set; these are
/// the legal ranges offered to the user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterBounds {
    pub score: Span,
    pub revenue: Span,
    pub engagement: Span,
}

impl FilterBounds {
    pub fn from_contacts(contacts: &[ScoredContact]) -> Option<Self> {
        Some(Self {
            score: Span::of(contacts.iter().map(|c| c.score))?,
            revenue: Span::of(contacts.iter().map(|c| c.revenue))?,
            engagement: Span::of(contacts.iter().map(|c| c.engagement))?,
        })
    }

    pub fn default_spec(&self) -> FilterSpec {
        FilterSpec {
            min_score: self.score.min,
            revenue_range: RevenueRange::new(self.revenue.min, self.revenue.max),
            eng_threshold: self.engagement.min,
        }
    }
}

pub fn matches(contact: &ScoredContact, spec: &FilterSpec) -> bool {
    contact.score >= spec.min_score
        && spec.revenue_range.contains(contact.revenue)
        && contact.engagement >= spec.eng_threshold
}

/// Contacts passing a filter, in load order. Rebuilt on every filter change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    contacts: Vec<ScoredContact>,
}

impl ResultSet {
    pub fn contacts(&self) -> &[ScoredContact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn top(&self, n: usize) -> Vec<ScoredContact> {
        top_n(&self.contacts, n)
    }
}

pub fn apply_filter(contacts: &[ScoredContact], spec: &FilterSpec) -> ResultSet {
    ResultSet {
        contacts: contacts
            .iter()
            .filter(|c| matches(c, spec))
            .cloned()
            .collect(),
    }
}
