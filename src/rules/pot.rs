//! Pot history.
//!
//! The pot is every meld accepted this round, oldest first. Passes may be
//! recorded as empty melds. A new play only ever has to beat the most recent
//! non-empty meld.

use im::Vector;
use serde::{Deserialize, Serialize};

/// Most recent non-empty meld of a pot, scanning from the end.
///
/// ```
/// use tycoon_rules::rules::last_non_empty_meld;
///
/// let pot = vec![vec!["4H"], vec!["6C"], vec![]];
/// assert_eq!(last_non_empty_meld(&pot), Some(&["6C"][..]));
///
/// let passes: Vec<Vec<&str>> = vec![vec![], vec![]];
/// assert_eq!(last_non_empty_meld(&passes), None);
/// ```
#[must_use]
pub fn last_non_empty_meld<M, T>(pot: &[M]) -> Option<&[T]>
where
    M: AsRef<[T]>,
{
    pot.iter().rev().map(|meld| meld.as_ref()).find(|meld| !meld.is_empty())
}

/// Append-only pot for one round.
///
/// Backed by `im::Vector`, so cloning is O(1). Hosts can snapshot the pot
/// before an optimistic play and restore it if the server disagrees.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PotHistory {
    melds: Vector<Vec<String>>,
}

impl PotHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a pot from existing melds, oldest first.
    pub fn from_melds<I, M, S>(melds: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut pot = Self::new();
        for meld in melds {
            pot.push(meld);
        }
        pot
    }

    /// Record an accepted meld. An empty meld records a pass.
    pub fn push<M, S>(&mut self, meld: M)
    where
        M: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.melds.push_back(meld.into_iter().map(Into::into).collect());
    }

    /// Start a new round.
    pub fn clear(&mut self) {
        self.melds.clear();
    }

    /// Number of recorded melds, passes included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.melds.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.melds.is_empty()
    }

    /// All melds, oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Vec<String>> {
        self.melds.iter()
    }

    /// The meld a new play must beat; empty when the pot is open.
    #[must_use]
    pub fn last_meld(&self) -> &[String] {
        self.melds
            .iter()
            .rev()
            .find(|meld| !meld.is_empty())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
