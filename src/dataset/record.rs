use crate::Engagement;
use crate::features::PostFeatures;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

/// One dataset row: the fourteen feature columns plus both labels.
///
/// Numeric columns are read as floats so that exports writing
/// `10000.0` for an integer column still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub account_type: String,
    pub media_type: String,
    pub content_category: String,
    pub traffic_source: String,
    pub follower_count: f64,
    pub hashtags_count: f64,
    pub caption_length: f64,
    pub has_cta: f64,
    pub is_weekend: f64,
    pub post_hour: f64,
    pub likes: f64,
    pub comments: f64,
    pub shares: f64,
    pub saves: f64,
    #[serde(deserialize_with = "flag")]
    pub is_viral: bool,
    pub normalized_engagement: Engagement,
}

impl Record {
    pub fn label(&self) -> f64 {
        if self.is_viral { 1.0 } else { 0.0 }
    }
    pub fn target(&self) -> Engagement {
        self.normalized_engagement
    }
}

impl From<&Record> for PostFeatures {
    fn from(r: &Record) -> Self {
        let count = |x: f64| x.round().max(0.0) as u32;
        let flag = |x: f64| (x >= 0.5) as u8;
        Self {
            account_type: r.account_type.clone(),
            media_type: r.media_type.clone(),
            content_category: r.content_category.clone(),
            traffic_source: r.traffic_source.clone(),
            follower_count: count(r.follower_count),
            hashtags_count: count(r.hashtags_count),
            caption_length: count(r.caption_length),
            has_cta: flag(r.has_cta),
            is_weekend: flag(r.is_weekend),
            post_hour: count(r.post_hour),
            likes: count(r.likes),
            comments: count(r.comments),
            shares: count(r.shares),
            saves: count(r.saves),
        }
    }
}

/// Accepts `0`/`1`, `0.0`/`1.0` and `true`/`false` in any case.
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    match s.trim().to_lowercase().as_str() {
        "1" | "1.0" | "true" => Ok(true),
        "0" | "0.0" | "false" => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "is_viral must be binary, found {:?}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "account_type,media_type,content_category,traffic_source,follower_count,hashtags_count,caption_length,has_cta,is_weekend,post_hour,likes,comments,shares,saves,is_viral,normalized_engagement";

    fn parse(line: &str) -> Result<Record, csv::Error> {
        let text = format!("{}\n{}\n", HEADER, line);
        csv::Reader::from_reader(text.as_bytes())
            .deserialize::<Record>()
            .next()
            .expect("one row")
    }

    #[test]
    fn reads_integer_and_float_exports() {
        let a = parse("Business,Reel,Food,Explore,10000,10,50,1,0,18,500,50,20,30,1,0.5").unwrap();
        let b = parse("Business,Reel,Food,Explore,10000.0,10.0,50.0,1.0,0.0,18.0,500.0,50.0,20.0,30.0,True,0.5").unwrap();
        assert_eq!(PostFeatures::from(&a), PostFeatures::from(&b));
        assert!(a.is_viral && b.is_viral);
        assert_eq!(a.label(), 1.0);
    }

    #[test]
    fn rejects_non_binary_label() {
        assert!(parse("Business,Reel,Food,Explore,10000,10,50,1,0,18,500,50,20,30,maybe,0.5").is_err());
    }
}
