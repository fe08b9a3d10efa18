use super::*;
use crate::Error;
use crate::features::Column;
use crate::features::Options;
use crate::features::PostFeatures;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use std::path::Path;

/// The in-memory dataset. Read once at startup and shared read-only.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<Record>,
}

impl From<Vec<Record>> for Dataset {
    fn from(records: Vec<Record>) -> Self {
        Self { records }
    }
}

impl Dataset {
    /// Read the CSV at `path`. Missing, malformed or empty files are fatal.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        log::info!("loading dataset ({})", path.display());
        let records = csv::Reader::from_path(path)
            .map_err(|e| Error::Dataset(format!("{}: {}", path.display(), e)))?
            .deserialize::<Record>()
            .collect::<Result<Vec<Record>, csv::Error>>()?;
        if records.is_empty() {
            return Err(Error::Dataset(format!("{}: no rows", path.display())));
        }
        log::info!("loaded {} rows", records.len());
        Ok(Self::from(records))
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }
    pub fn len(&self) -> usize {
        self.records.len()
    }
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn posts(&self) -> Vec<PostFeatures> {
        self.records.iter().map(PostFeatures::from).collect()
    }
    /// Virality labels as 0.0 / 1.0.
    pub fn labels(&self) -> Vec<f64> {
        self.records.iter().map(Record::label).collect()
    }
    /// Normalized engagement targets.
    pub fn targets(&self) -> Vec<f64> {
        self.records.iter().map(Record::target).collect()
    }

    /// Sorted unique values of a categorical column.
    pub fn categories(&self, column: Column) -> Vec<String> {
        self.options().get(column).to_vec()
    }

    pub fn options(&self) -> Options {
        Column::categorical()
            .iter()
            .map(|&column| {
                (
                    column,
                    self.records
                        .iter()
                        .map(move |r| match column {
                            Column::AccountType => r.account_type.as_str(),
                            Column::MediaType => r.media_type.as_str(),
                            Column::ContentCategory => r.content_category.as_str(),
                            Column::TrafficSource => r.traffic_source.as_str(),
                            _ => unreachable!("categorical columns only"),
                        })
                        .collect::<Vec<&str>>(),
                )
            })
            .collect()
    }

    pub fn trend(&self) -> Trend {
        Trend::from(self.records.as_slice())
    }

    /// Shuffle row indices with `seed` and split off `ratio` of them.
    /// Returns (train, holdout).
    pub fn holdout(&self, ratio: f64, seed: u64) -> (Self, Self) {
        let ref mut rng = SmallRng::seed_from_u64(seed);
        let mut indices = (0..self.len()).collect::<Vec<usize>>();
        indices.shuffle(rng);
        let n = ((self.len() as f64) * ratio.clamp(0.0, 1.0)).round() as usize;
        let (test, train) = indices.split_at(n);
        (self.subset(train), self.subset(test))
    }

    fn subset(&self, indices: &[usize]) -> Self {
        Self::from(
            indices
                .iter()
                .map(|&i| self.records[i].clone())
                .collect::<Vec<Record>>(),
        )
    }
}

/// Reproducible rows with a learnable signal: large Reel posts with
/// plenty of interaction go viral.
#[cfg(test)]
pub(crate) fn synthetic(n: usize, seed: u64) -> Dataset {
    use rand::Rng;
    use rand::prelude::IndexedRandom;
    let ref mut rng = SmallRng::seed_from_u64(seed);
    let accounts = ["Business", "Creator", "Personal"];
    let medias = ["Carousel", "Image", "Reel", "Video"];
    let categories = ["Fashion", "Food", "Technology"];
    let sources = ["Explore", "Hashtags", "Home Feed"];
    Dataset::from(
        (0..n)
            .map(|_| {
                let media = *medias.choose(rng).expect("non-empty");
                let followers = rng.random_range(100..200_000) as f64;
                let likes = rng.random_range(0..20_000) as f64;
                let hour = rng.random_range(0..24) as f64;
                let boost = if media == "Reel" { 1.5 } else { 1.0 };
                let engagement = (likes / 20_000.0 * boost).min(1.0);
                Record {
                    account_type: accounts.choose(rng).expect("non-empty").to_string(),
                    media_type: media.to_string(),
                    content_category: categories.choose(rng).expect("non-empty").to_string(),
                    traffic_source: sources.choose(rng).expect("non-empty").to_string(),
                    follower_count: followers,
                    hashtags_count: rng.random_range(0..31) as f64,
                    caption_length: rng.random_range(0..301) as f64,
                    has_cta: rng.random_range(0..2) as f64,
                    is_weekend: rng.random_range(0..2) as f64,
                    post_hour: hour,
                    likes,
                    comments: (likes / 10.0).floor(),
                    shares: (likes / 25.0).floor(),
                    saves: (likes / 15.0).floor(),
                    is_viral: engagement > 0.6,
                    normalized_engagement: engagement,
                }
            })
            .collect::<Vec<Record>>(),
    )
}
