use super::*;
use crate::dataset::Trend;
use crate::features::Column;
use crate::features::Form;
use crate::features::Options;
use crate::features::Slider;
use crate::prediction::Analysis;
use const_format::concatcp;

const HEAD: &str = concatcp!(
    r#"<!DOCTYPE html><html lang="en"><head><meta charset="utf-8">"#,
    r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#,
    "<title>",
    TITLE,
    "</title><style>",
    CSS,
    "</style></head>"
);

/// The whole dashboard for one request.
pub struct Page<'a> {
    pub options: &'a Options,
    pub trend: &'a Trend,
    pub form: &'a Form,
    pub analysis: Option<&'a Analysis>,
}

impl Page<'_> {
    pub fn html(&self) -> String {
        let mut html = String::with_capacity(16 * 1024);
        html.push_str(HEAD);
        html.push_str("<body>");
        html.push_str(&self.sidebar());
        html.push_str("<main>");
        html.push_str(&format!("<h2>{}</h2><p>{}</p>", HEADLINE, TAGLINE));
        html.push_str(r#"<div class="section-title">Performance Snapshot</div><div class="cards">"#);
        for kpi in Kpi::cards(self.analysis) {
            html.push_str(&kpi.html());
        }
        html.push_str("</div>");
        html.push_str(r#"<div class="section-title">🧠 AI Insights</div>"#);
        html.push_str(&Insight::from(self.analysis).html());
        html.push_str(r#"<div class="section-title">📊 Engagement Trend</div>"#);
        html.push_str(&Chart::from(self.trend).svg());
        html.push_str(&format!(r#"<div class="caption">{}</div>"#, CAPTION));
        html.push_str("</main></body></html>");
        html
    }

    fn sidebar(&self) -> String {
        let mut html = String::from(
            r#"<aside><h3>🔧 Post Configuration</h3><small>Set values → click Analyze</small><form method="post" action="/analyze">"#,
        );
        for &column in Column::categorical() {
            html.push_str(&self.select(column));
        }
        for slider in Slider::all() {
            html.push_str(&self.input(slider));
        }
        html.push_str(r#"<button type="submit">🔍 Analyze Post</button></form></aside>"#);
        html
    }

    fn select(&self, column: Column) -> String {
        let current = self
            .form
            .choice(column)
            .or_else(|| self.options.first(column));
        let choices = self
            .options
            .get(column)
            .iter()
            .map(|choice| {
                format!(
                    r#"<option value="{v}"{s}>{v}</option>"#,
                    v = escape(choice),
                    s = if Some(choice.as_str()) == current { " selected" } else { "" }
                )
            })
            .collect::<String>();
        format!(
            r#"<label>{}<select name="{}">{}</select></label>"#,
            column.label(),
            column.name(),
            choices
        )
    }

    fn input(&self, slider: &Slider) -> String {
        let value = self
            .form
            .value(slider.column)
            .unwrap_or(slider.default as i64);
        if slider.is_toggle() {
            let choices = (slider.min..=slider.max)
                .map(|v| {
                    format!(
                        r#"<option value="{v}"{s}>{v}</option>"#,
                        v = v,
                        s = if v as i64 == value { " selected" } else { "" }
                    )
                })
                .collect::<String>();
            format!(
                r#"<label>{}<select name="{}">{}</select></label>"#,
                slider.column.label(),
                slider.column.name(),
                choices
            )
        } else {
            format!(
                r#"<label>{} <output>{}</output><input type="number" name="{}" min="{}" max="{}" step="{}" value="{}" required></label>"#,
                slider.column.label(),
                value,
                slider.column.name(),
                slider.min,
                slider.max,
                slider.step,
                value
            )
        }
    }
}
