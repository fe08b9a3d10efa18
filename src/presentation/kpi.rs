use super::*;
use crate::prediction::Analysis;

/// Shown in every card until an analysis has been requested.
pub const PLACEHOLDER: &str = "--";

/// One headline number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kpi {
    pub label: &'static str,
    pub value: Option<String>,
}

impl Kpi {
    /// The three snapshot cards; placeholders until `analysis` is present.
    pub fn cards(analysis: Option<&Analysis>) -> [Self; 3] {
        [
            Self {
                label: "🔥 Viral Probability",
                value: analysis.map(|a| format!("{:.2}%", a.virality * 100.0)),
            },
            Self {
                label: "📈 Predicted Engagement",
                value: analysis.map(|a| format!("{:.4}", a.engagement)),
            },
            Self {
                label: "👥 Followers",
                value: analysis.map(|a| thousands(a.followers)),
            },
        ]
    }

    pub fn text(&self) -> &str {
        self.value.as_deref().unwrap_or(PLACEHOLDER)
    }

    pub fn html(&self) -> String {
        format!(
            r#"<div class="kpi-card"><div class="kpi-label">{}</div><div class="kpi-value">{}</div></div>"#,
            self.label,
            escape(self.text())
        )
    }
}

/// The insight banner under the cards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Insight {
    Pending,
    Ready(Tier),
}

impl From<Option<&Analysis>> for Insight {
    fn from(analysis: Option<&Analysis>) -> Self {
        analysis.map_or(Self::Pending, |a| Self::Ready(a.tier))
    }
}

impl Insight {
    pub const PROMPT: &'static str = "Adjust inputs and click Analyze Post";

    pub fn message(&self) -> &'static str {
        match self {
            Self::Pending => Self::PROMPT,
            Self::Ready(tier) => tier.message(),
        }
    }

    pub fn html(&self) -> String {
        match self {
            Self::Pending => {
                r#"<div class="info">Adjust inputs and click <b>Analyze Post</b></div>"#.to_string()
            }
            Self::Ready(tier) => format!(
                r#"<div class="kpi-card" style="border-left:6px solid {}"><div class="kpi-value" style="font-size:18px">{}</div></div>"#,
                tier.color(),
                tier.message()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analysis(virality: f64) -> Analysis {
        Analysis {
            virality,
            engagement: 0.123456,
            tier: Tier::from(virality),
            followers: 10_000,
        }
    }

    #[test]
    fn cards_are_placeholders_before_analysis() {
        for kpi in Kpi::cards(None) {
            assert_eq!(kpi.text(), PLACEHOLDER);
            assert!(!kpi.html().chars().any(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn cards_format_an_analysis() {
        let a = analysis(0.73456);
        let cards = Kpi::cards(Some(&a));
        assert_eq!(cards[0].text(), "73.46%");
        assert_eq!(cards[1].text(), "0.1235");
        assert_eq!(cards[2].text(), "10,000");
    }

    #[test]
    fn insight_waits_for_analysis() {
        assert_eq!(Insight::from(None).message(), Insight::PROMPT);
        let a = analysis(0.2);
        let insight = Insight::from(Some(&a));
        assert_eq!(insight, Insight::Ready(Tier::Low));
        assert!(insight.html().contains("#ef4444"));
    }
}
