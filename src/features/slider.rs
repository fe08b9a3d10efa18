use super::*;
use serde::Serialize;

/// A bounded integer input in the sidebar.
///
/// Values outside `[min, max]` are rejected here and never reach
/// the feature row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Slider {
    pub column: Column,
    pub min: u32,
    pub max: u32,
    pub default: u32,
    pub step: u32,
}

impl Slider {
    pub const FOLLOWER_COUNT: Self = Self::new(Column::FollowerCount, 100, 1_000_000, 10_000, 500);
    pub const HASHTAGS_COUNT: Self = Self::new(Column::HashtagsCount, 0, 30, 10, 1);
    pub const CAPTION_LENGTH: Self = Self::new(Column::CaptionLength, 0, 300, 50, 1);
    pub const HAS_CTA: Self = Self::new(Column::HasCta, 0, 1, 0, 1);
    pub const IS_WEEKEND: Self = Self::new(Column::IsWeekend, 0, 1, 0, 1);
    pub const POST_HOUR: Self = Self::new(Column::PostHour, 0, 23, 18, 1);
    pub const LIKES: Self = Self::new(Column::Likes, 0, 50_000, 500, 1);
    pub const COMMENTS: Self = Self::new(Column::Comments, 0, 5_000, 50, 1);
    pub const SHARES: Self = Self::new(Column::Shares, 0, 5_000, 20, 1);
    pub const SAVES: Self = Self::new(Column::Saves, 0, 5_000, 30, 1);

    const fn new(column: Column, min: u32, max: u32, default: u32, step: u32) -> Self {
        Self {
            column,
            min,
            max,
            default,
            step,
        }
    }

    /// Every numeric input, in column order.
    pub const fn all() -> &'static [Self] {
        &[
            Self::FOLLOWER_COUNT,
            Self::HASHTAGS_COUNT,
            Self::CAPTION_LENGTH,
            Self::HAS_CTA,
            Self::IS_WEEKEND,
            Self::POST_HOUR,
            Self::LIKES,
            Self::COMMENTS,
            Self::SHARES,
            Self::SAVES,
        ]
    }

    pub fn of(column: Column) -> Option<&'static Self> {
        Self::all().iter().find(|s| s.column == column)
    }

    /// Binary inputs render as a 0/1 select rather than a range.
    pub fn is_toggle(&self) -> bool {
        self.column.kind() == Kind::Binary
    }

    /// Missing values take the default, present ones must lie within bounds.
    pub fn admit(&self, value: Option<i64>) -> Result<u32, InputError> {
        match value {
            None => Ok(self.default),
            Some(v) if v >= self.min as i64 && v <= self.max as i64 => Ok(v as u32),
            Some(v) => Err(InputError::OutOfRange {
                column: self.column,
                value: v,
                min: self.min,
                max: self.max,
            }),
        }
    }
}

/// A form value the sidebar refuses to pass on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    OutOfRange {
        column: Column,
        value: i64,
        min: u32,
        max: u32,
    },
    MissingCategory(Column),
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange {
                column,
                value,
                min,
                max,
            } => write!(f, "{} = {} outside [{}, {}]", column, value, min, max),
            Self::MissingCategory(column) => write!(f, "no value for {}", column),
        }
    }
}

impl std::error::Error for InputError {}
