// Lead scoring.
//
//   score = engagement * 0.4 + (revenue / max_revenue * 100) * 0.3 + industry_fit * 0.3
//
// rounded to one decimal place. `max_revenue` is taken over the whole loaded
// set, never over a filtered subset, so scores stay comparable across filters.
use crate::error::ScoreError;
use crate::types::{Contact, ScoredContact};
use tracing::warn;

pub const ENGAGEMENT_WEIGHT: f64 = 0.4;
pub const REVENUE_WEIGHT: f64 = 0.3;
pub const INDUSTRY_FIT_WEIGHT: f64 = 0.3;

/// Weighted lead score of a single contact.
///
/// When `max_revenue` is zero the normalised revenue term contributes 0 for
/// every contact instead of dividing by zero. Inputs outside 0-100 are not
/// clamped.
pub fn score(contact: &Contact, max_revenue: f64) -> f64 {
    let revenue_pct = if max_revenue == 0.0 {
        0.0
    } else {
        contact.revenue / max_revenue * 100.0
    };
    round_one_decimal(
        contact.engagement * ENGAGEMENT_WEIGHT
            + revenue_pct * REVENUE_WEIGHT
            + contact.industry_fit * INDUSTRY_FIT_WEIGHT,
    )
}

/// Round half away from zero to one decimal place.
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Largest revenue in the set, or 0 for an empty set.
pub fn max_revenue(contacts: &[Contact]) -> f64 {
    contacts
        .iter()
        .map(|c| c.revenue)
        .reduce(f64::max)
        .unwrap_or(0.0)
}

/// Score every contact against the set-wide maximum revenue.
///
/// Inputs are finite, but ones far outside 0-100 can still overflow the
/// weighted sum; such a set is rejected rather than scored as infinity.
pub fn score_all(contacts: &[Contact]) -> Result<Vec<ScoredContact>, ScoreError> {
    let max = max_revenue(contacts);
    if max == 0.0 && !contacts.is_empty() {
        warn!(
            contacts = contacts.len(),
            "maximum revenue is zero; revenue term scored as 0"
        );
    }
    contacts
        .iter()
        .map(|c| {
            let s = score(c, max);
            if !s.is_finite() {
                return Err(ScoreError::NonFinite {
                    name: c.name.clone(),
                });
            }
            Ok(ScoredContact::from_contact(c, s))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(engagement: f64, revenue: f64, industry_fit: f64) -> Contact {
        Contact {
            name: "Test".to_string(),
            email: "test@example.com".to_string(),
            engagement,
            revenue,
            industry_fit,
        }
    }

    #[test]
    fn weights_sum_to_one() {
        let total = ENGAGEMENT_WEIGHT + REVENUE_WEIGHT + INDUSTRY_FIT_WEIGHT;
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn reference_contacts_score_as_documented() {
        assert_eq!(score(&contact(50.0, 1000.0, 80.0), 1000.0), 74.0);
        assert_eq!(score(&contact(90.0, 500.0, 40.0), 1000.0), 63.0);
    }

    #[test]
    fn score_is_deterministic() {
        let c = contact(37.3, 812.5, 66.6);
        let first = score(&c, 2000.0);
        let second = score(&c, 2000.0);
        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn score_has_at_most_one_decimal() {
        // 33 * 0.4 + 25 * 0.3 + 71 * 0.3 = 42.
        assert_eq!(score(&contact(33.0, 250.0, 71.0), 1000.0), 42.0);
        // 12.34 * 0.4 = 4.936 -> 4.9
        assert_eq!(score(&contact(12.34, 0.0, 0.0), 100.0), 4.9);
    }

    #[test]
    fn rounding_goes_half_up_for_positive_scores() {
        assert_eq!(round_one_decimal(0.25), 0.3);
        assert_eq!(round_one_decimal(12.75), 12.8);
        assert_eq!(round_one_decimal(12.74), 12.7);
        assert_eq!(round_one_decimal(-0.25), -0.3);
    }

    #[test]
    fn zero_max_revenue_drops_revenue_term() {
        let c = contact(50.0, 0.0, 80.0);
        let s = score(&c, 0.0);
        assert!(s.is_finite());
        assert_eq!(s, 44.0);
    }

    #[test]
    fn out_of_range_inputs_are_not_clamped() {
        assert_eq!(score(&contact(200.0, 0.0, 0.0), 10.0), 80.0);
        assert_eq!(score(&contact(-10.0, 0.0, 0.0), 10.0), -4.0);
    }

    #[test]
    fn max_revenue_of_empty_set_is_zero() {
        assert_eq!(max_revenue(&[]), 0.0);
        assert_eq!(
            max_revenue(&[contact(0.0, 5.0, 0.0), contact(0.0, 12.0, 0.0)]),
            12.0
        );
    }

    #[test]
    fn score_all_uses_global_maximum() {
        let contacts = vec![contact(50.0, 1000.0, 80.0), contact(90.0, 500.0, 40.0)];
        let scored = score_all(&contacts).expect("finite scores");
        assert_eq!(scored.len(), 2);
        assert_eq!(scored[0].score, 74.0);
        assert_eq!(scored[1].score, 63.0);
        assert_eq!(scored[1].revenue, 500.0);

        // Scoring the second contact alone normalises against a different max.
        let alone = score_all(&contacts[1..]).expect("finite scores");
        assert_ne!(alone[0].score, scored[1].score);
    }

    #[test]
    fn all_zero_revenue_still_scores() {
        let contacts = vec![contact(10.0, 0.0, 10.0), contact(20.0, 0.0, 20.0)];
        let scored = score_all(&contacts).expect("finite scores");
        assert!(scored.iter().all(|c| c.score.is_finite()));
        assert_eq!(scored[0].score, 7.0);
        assert_eq!(scored[1].score, 14.0);
    }

    #[test]
    fn overflowing_inputs_are_rejected() {
        let huge = f64::MAX / 2.0;
        let contacts = vec![contact(10.0, 5.0, 10.0), contact(huge, 0.0, huge)];
        match score_all(&contacts) {
            Err(ScoreError::NonFinite { name }) => assert_eq!(name, "Test"),
            other => panic!("expected a non-finite score error, got {other:?}"),
        }
    }
}
