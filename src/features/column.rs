use serde::Deserialize;
use serde::Serialize;

/// How a column reaches the model.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Kind {
    /// One-hot encoded over the categories seen at fit time.
    Categorical,
    /// Non-negative count, passed through.
    Integer,
    /// 0 or 1, passed through.
    Binary,
}

/// The fourteen feature columns, in the order the pipeline consumes them.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    AccountType,
    MediaType,
    ContentCategory,
    TrafficSource,
    FollowerCount,
    HashtagsCount,
    CaptionLength,
    HasCta,
    IsWeekend,
    PostHour,
    Likes,
    Comments,
    Shares,
    Saves,
}

impl Column {
    pub const fn all() -> &'static [Self] {
        &[
            Self::AccountType,
            Self::MediaType,
            Self::ContentCategory,
            Self::TrafficSource,
            Self::FollowerCount,
            Self::HashtagsCount,
            Self::CaptionLength,
            Self::HasCta,
            Self::IsWeekend,
            Self::PostHour,
            Self::Likes,
            Self::Comments,
            Self::Shares,
            Self::Saves,
        ]
    }
    pub const fn categorical() -> &'static [Self] {
        &[
            Self::AccountType,
            Self::MediaType,
            Self::ContentCategory,
            Self::TrafficSource,
        ]
    }
    pub fn numeric() -> impl Iterator<Item = Self> {
        Self::all()
            .iter()
            .copied()
            .filter(|c| c.kind() != Kind::Categorical)
    }
    pub const fn kind(&self) -> Kind {
        match self {
            Self::AccountType | Self::MediaType | Self::ContentCategory | Self::TrafficSource => {
                Kind::Categorical
            }
            Self::HasCta | Self::IsWeekend => Kind::Binary,
            _ => Kind::Integer,
        }
    }
    /// Column header, as found in the dataset.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AccountType => "account_type",
            Self::MediaType => "media_type",
            Self::ContentCategory => "content_category",
            Self::TrafficSource => "traffic_source",
            Self::FollowerCount => "follower_count",
            Self::HashtagsCount => "hashtags_count",
            Self::CaptionLength => "caption_length",
            Self::HasCta => "has_cta",
            Self::IsWeekend => "is_weekend",
            Self::PostHour => "post_hour",
            Self::Likes => "likes",
            Self::Comments => "comments",
            Self::Shares => "shares",
            Self::Saves => "saves",
        }
    }
    /// Sidebar label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::AccountType => "Account Type",
            Self::MediaType => "Media Type",
            Self::ContentCategory => "Content Category",
            Self::TrafficSource => "Traffic Source",
            Self::FollowerCount => "Follower Count",
            Self::HashtagsCount => "Hashtag Count",
            Self::CaptionLength => "Caption Length (words)",
            Self::HasCta => "Call To Action",
            Self::IsWeekend => "Is Weekend",
            Self::PostHour => "Post Hour",
            Self::Likes => "Expected Likes",
            Self::Comments => "Expected Comments",
            Self::Shares => "Expected Shares",
            Self::Saves => "Expected Saves",
        }
    }
}

impl TryFrom<&str> for Column {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::all()
            .iter()
            .copied()
            .find(|c| c.name() == s)
            .ok_or_else(|| format!("unknown column: {}", s))
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
