//! Frequency counts that remember first-seen order

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// Category counts kept in the order each category was first recorded
///
/// Serializes as a JSON object (`{"negative": 2, "positive": 1}`) whose key
/// order is the first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distribution<K> {
    counts: Vec<(K, usize)>,
}

impl<K> Default for Distribution<K> {
    fn default() -> Self {
        Self { counts: Vec::new() }
    }
}

impl<K: Copy + PartialEq> Distribution<K> {
    /// Create an empty distribution
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `key`
    pub fn record(&mut self, key: K) {
        match self.counts.iter_mut().find(|(k, _)| *k == key) {
            Some((_, count)) => *count += 1,
            None => self.counts.push((key, 1)),
        }
    }

    /// Occurrences of `key` (0 when never recorded)
    pub fn get(&self, key: K) -> usize {
        self.counts
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, c)| *c)
            .unwrap_or(0)
    }

    /// Highest count; the earliest recorded key wins ties
    pub fn dominant(&self) -> Option<K> {
        let mut best: Option<(K, usize)> = None;
        for &(key, count) in &self.counts {
            match best {
                Some((_, best_count)) if count <= best_count => {}
                _ => best = Some((key, count)),
            }
        }
        best.map(|(key, _)| key)
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, c)| c).sum()
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True when nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate `(key, count)` in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (K, usize)> + '_ {
        self.counts.iter().copied()
    }
}

impl<K: Copy + PartialEq> FromIterator<K> for Distribution<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut dist = Distribution::new();
        for key in iter {
            dist.record(key);
        }
        dist
    }
}

impl<K: Serialize> Serialize for Distribution<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.counts.len()))?;
        for (key, count) in &self.counts {
            map.serialize_entry(key, count)?;
        }
        map.end()
    }
}

struct DistributionVisitor<K>(PhantomData<K>);

impl<'de, K: Deserialize<'de>> Visitor<'de> for DistributionVisitor<K> {
    type Value = Distribution<K>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of category to count")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut counts = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, count)) = access.next_entry::<K, usize>()? {
            counts.push((key, count));
        }
        Ok(Distribution { counts })
    }
}

impl<'de, K: Deserialize<'de>> Deserialize<'de> for Distribution<K> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(DistributionVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SentimentClass;

    #[test]
    fn test_record_and_get() {
        let dist: Distribution<SentimentClass> = [
            SentimentClass::Negative,
            SentimentClass::Positive,
            SentimentClass::Negative,
        ]
        .into_iter()
        .collect();

        assert_eq!(dist.get(SentimentClass::Negative), 2);
        assert_eq!(dist.get(SentimentClass::Positive), 1);
        assert_eq!(dist.get(SentimentClass::Neutral), 0);
        assert_eq!(dist.total(), 3);
        assert_eq!(dist.len(), 2);
    }

    #[test]
    fn test_dominant_prefers_first_seen_on_tie() {
        let dist: Distribution<SentimentClass> = [
            SentimentClass::Positive,
            SentimentClass::Negative,
            SentimentClass::Negative,
            SentimentClass::Positive,
        ]
        .into_iter()
        .collect();

        assert_eq!(dist.dominant(), Some(SentimentClass::Positive));
    }

    #[test]
    fn test_empty_has_no_dominant() {
        let dist: Distribution<SentimentClass> = Distribution::new();
        assert!(dist.is_empty());
        assert_eq!(dist.dominant(), None);
    }

    #[test]
    fn test_serializes_as_ordered_map() {
        let dist: Distribution<SentimentClass> =
            [SentimentClass::Negative, SentimentClass::Positive]
                .into_iter()
                .collect();
        let json = serde_json::to_string(&dist).unwrap();
        assert_eq!(json, r#"{"negative":1,"positive":1}"#);

        let back: Distribution<SentimentClass> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, dist);
    }
}
