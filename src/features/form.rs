use super::*;
use serde::Deserialize;
use serde::Serialize;

/// Raw sidebar state, as posted by the dashboard form or the JSON API.
///
/// Every field is optional; missing ones take their widget default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Form {
    pub account_type: Option<String>,
    pub media_type: Option<String>,
    pub content_category: Option<String>,
    pub traffic_source: Option<String>,
    pub follower_count: Option<i64>,
    pub hashtags_count: Option<i64>,
    pub caption_length: Option<i64>,
    pub has_cta: Option<i64>,
    pub is_weekend: Option<i64>,
    pub post_hour: Option<i64>,
    pub likes: Option<i64>,
    pub comments: Option<i64>,
    pub shares: Option<i64>,
    pub saves: Option<i64>,
}

impl Form {
    /// Admit each value through its widget, then rename into a feature row.
    pub fn assemble(&self, options: &Options) -> Result<PostFeatures, InputError> {
        let choose = |column: Column, value: &Option<String>| {
            value
                .as_deref()
                .filter(|s| !s.is_empty())
                .or_else(|| options.first(column))
                .map(str::to_string)
                .ok_or(InputError::MissingCategory(column))
        };
        Ok(PostFeatures {
            account_type: choose(Column::AccountType, &self.account_type)?,
            media_type: choose(Column::MediaType, &self.media_type)?,
            content_category: choose(Column::ContentCategory, &self.content_category)?,
            traffic_source: choose(Column::TrafficSource, &self.traffic_source)?,
            follower_count: Slider::FOLLOWER_COUNT.admit(self.follower_count)?,
            hashtags_count: Slider::HASHTAGS_COUNT.admit(self.hashtags_count)?,
            caption_length: Slider::CAPTION_LENGTH.admit(self.caption_length)?,
            has_cta: Slider::HAS_CTA.admit(self.has_cta)? as u8,
            is_weekend: Slider::IS_WEEKEND.admit(self.is_weekend)? as u8,
            post_hour: Slider::POST_HOUR.admit(self.post_hour)?,
            likes: Slider::LIKES.admit(self.likes)?,
            comments: Slider::COMMENTS.admit(self.comments)?,
            shares: Slider::SHARES.admit(self.shares)?,
            saves: Slider::SAVES.admit(self.saves)?,
        })
    }

    /// Current value shown by a numeric widget.
    pub fn value(&self, column: Column) -> Option<i64> {
        match column {
            Column::FollowerCount => self.follower_count,
            Column::HashtagsCount => self.hashtags_count,
            Column::CaptionLength => self.caption_length,
            Column::HasCta => self.has_cta,
            Column::IsWeekend => self.is_weekend,
            Column::PostHour => self.post_hour,
            Column::Likes => self.likes,
            Column::Comments => self.comments,
            Column::Shares => self.shares,
            Column::Saves => self.saves,
            _ => None,
        }
    }

    /// Current choice shown by a select box.
    pub fn choice(&self, column: Column) -> Option<&str> {
        match column {
            Column::AccountType => self.account_type.as_deref(),
            Column::MediaType => self.media_type.as_deref(),
            Column::ContentCategory => self.content_category.as_deref(),
            Column::TrafficSource => self.traffic_source.as_deref(),
            _ => None,
        }
    }
}

impl From<&PostFeatures> for Form {
    fn from(post: &PostFeatures) -> Self {
        Self {
            account_type: Some(post.account_type.clone()),
            media_type: Some(post.media_type.clone()),
            content_category: Some(post.content_category.clone()),
            traffic_source: Some(post.traffic_source.clone()),
            follower_count: Some(post.follower_count as i64),
            hashtags_count: Some(post.hashtags_count as i64),
            caption_length: Some(post.caption_length as i64),
            has_cta: Some(post.has_cta as i64),
            is_weekend: Some(post.is_weekend as i64),
            post_hour: Some(post.post_hour as i64),
            likes: Some(post.likes as i64),
            comments: Some(post.comments as i64),
            shares: Some(post.shares as i64),
            saves: Some(post.saves as i64),
        }
    }
}
