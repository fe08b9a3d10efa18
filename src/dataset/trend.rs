use super::*;
use crate::Engagement;
use serde::Serialize;
use std::collections::BTreeMap;

/// Mean engagement at one posting hour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub hour: u32,
    pub engagement: Engagement,
}

/// Engagement versus posting hour across the whole dataset.
/// Hours without any row are absent, the rest are in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Trend(Vec<Point>);

impl Trend {
    pub fn points(&self) -> &[Point] {
        &self.0
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Smallest and largest mean engagement, if any.
    pub fn range(&self) -> Option<(Engagement, Engagement)> {
        self.0.iter().map(|p| p.engagement).fold(None, |acc, e| match acc {
            None => Some((e, e)),
            Some((lo, hi)) => Some((lo.min(e), hi.max(e))),
        })
    }
}

impl From<&[Record]> for Trend {
    fn from(records: &[Record]) -> Self {
        let mut hours = BTreeMap::<u32, (Engagement, usize)>::new();
        for record in records {
            let hour = record.post_hour.round().clamp(0.0, 23.0) as u32;
            let entry = hours.entry(hour).or_default();
            entry.0 += record.normalized_engagement;
            entry.1 += 1;
        }
        Self(
            hours
                .into_iter()
                .map(|(hour, (sum, n))| Point {
                    hour,
                    engagement: sum / n as Engagement,
                })
                .collect(),
        )
    }
}
