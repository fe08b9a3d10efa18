use super::*;
use crate::Feature;
use serde::Deserialize;
use serde::Serialize;

/// One cell of a feature row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell<'a> {
    Text(&'a str),
    Number(Feature),
}

/// A single post configuration, exactly as the models consume it.
///
/// Field order matches [`Column::all`]. Built once per analysis request
/// and dropped after both models have seen it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostFeatures {
    pub account_type: String,
    pub media_type: String,
    pub content_category: String,
    pub traffic_source: String,
    pub follower_count: u32,
    pub hashtags_count: u32,
    pub caption_length: u32,
    pub has_cta: u8,
    pub is_weekend: u8,
    pub post_hour: u32,
    pub likes: u32,
    pub comments: u32,
    pub shares: u32,
    pub saves: u32,
}

impl PostFeatures {
    pub fn columns() -> &'static [Column] {
        Column::all()
    }

    pub fn text(&self, column: Column) -> Option<&str> {
        match column {
            Column::AccountType => Some(&self.account_type),
            Column::MediaType => Some(&self.media_type),
            Column::ContentCategory => Some(&self.content_category),
            Column::TrafficSource => Some(&self.traffic_source),
            _ => None,
        }
    }

    pub fn number(&self, column: Column) -> Option<Feature> {
        match column {
            Column::FollowerCount => Some(self.follower_count as Feature),
            Column::HashtagsCount => Some(self.hashtags_count as Feature),
            Column::CaptionLength => Some(self.caption_length as Feature),
            Column::HasCta => Some(self.has_cta as Feature),
            Column::IsWeekend => Some(self.is_weekend as Feature),
            Column::PostHour => Some(self.post_hour as Feature),
            Column::Likes => Some(self.likes as Feature),
            Column::Comments => Some(self.comments as Feature),
            Column::Shares => Some(self.shares as Feature),
            Column::Saves => Some(self.saves as Feature),
            _ => None,
        }
    }

    pub fn cell(&self, column: Column) -> Cell<'_> {
        match column.kind() {
            Kind::Categorical => Cell::Text(self.text(column).expect("categorical column")),
            Kind::Integer | Kind::Binary => {
                Cell::Number(self.number(column).expect("numeric column"))
            }
        }
    }

    /// The row as (column, cell) pairs in pipeline order.
    pub fn cells(&self) -> Vec<(Column, Cell<'_>)> {
        Self::columns()
            .iter()
            .map(|&column| (column, self.cell(column)))
            .collect()
    }
}

#[cfg(test)]
pub(crate) fn example() -> PostFeatures {
    PostFeatures {
        account_type: "Business".to_string(),
        media_type: "Reel".to_string(),
        content_category: "Technology".to_string(),
        traffic_source: "Explore".to_string(),
        follower_count: 10_000,
        hashtags_count: 10,
        caption_length: 50,
        has_cta: 1,
        is_weekend: 0,
        post_hour: 18,
        likes: 500,
        comments: 50,
        shares: 20,
        saves: 30,
    }
}
