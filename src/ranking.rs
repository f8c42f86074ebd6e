use crate::types::ScoredContact;

/// The `n` highest-scoring contacts, best first.
///
/// The sort is stable, so contacts with equal scores keep the order they
/// were given in (load order for a [`crate::filter::ResultSet`]). Asking for
/// more than there are returns them all.
pub fn top_n(contacts: &[ScoredContact], n: usize) -> Vec<ScoredContact> {
    let mut ranked: Vec<ScoredContact> = contacts.to_vec();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked.truncate(n);
    ranked
}
