use std::fmt::Write;

use crate::config::{DEFAULT_TITLE, PieSource};
use crate::error::Result;
use crate::pipeline::DerivedViews;

use super::ReportFormatter;
use super::charts::{ChartOptions, ReportCharts};
use super::html_template::{HTML_FOOTER, HTML_HEAD_OPEN, HTML_STYLE};
use super::narrative::Narrative;
use super::svg::{format_value, html_escape};

/// Standalone HTML report: summary, notes, six chart sections.
pub struct HtmlFormatter {
    title: String,
    charts: ChartOptions,
}

struct Section<'a> {
    id: &'static str,
    heading: String,
    narrative: &'a str,
    svg: &'a str,
}

impl HtmlFormatter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            charts: ChartOptions::default(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_chart_options(mut self, options: ChartOptions) -> Self {
        self.charts = options;
        self
    }

    fn write_header(&self, output: &mut String) {
        let title = html_escape(&self.title);
        output.push_str(HTML_HEAD_OPEN);
        writeln!(output, "    <title>{title}</title>").ok();
        output.push_str(HTML_STYLE);
        writeln!(output, "        <h1>{title}</h1>").ok();
    }

    fn write_summary(output: &mut String, views: &DerivedViews, narrative: &Narrative) {
        let s = &views.summary;
        let cards = [
            (s.rows.to_string(), "Observations"),
            (s.countries.to_string(), "Countries"),
            (s.first_period.clone().unwrap_or_else(|| "n/a".into()), "First period"),
            (s.last_period.clone().unwrap_or_else(|| "n/a".into()), "Last period"),
            (views.series.len().to_string(), "Series"),
            (views.map.values.len().to_string(), "Mapped"),
        ];

        output.push_str("        <div class=\"summary-grid\">\n");
        for (value, label) in cards {
            writeln!(
                output,
                r#"            <div class="summary-card">
                <span class="value">{}</span>
                <span class="label">{label}</span>
            </div>"#,
                html_escape(&value)
            )
            .ok();
        }
        output.push_str("        </div>\n");

        writeln!(
            output,
            r#"        <p class="narrative">{}</p>"#,
            html_escape(&narrative.summary)
        )
        .ok();
        if !s.fingerprint.is_empty() {
            writeln!(
                output,
                r#"        <p class="narrative"><small>Source SHA-256: <code>{}</code></small></p>"#,
                html_escape(&s.fingerprint)
            )
            .ok();
        }
    }

    fn write_notes(output: &mut String, views: &DerivedViews) {
        if views.warnings.is_empty() {
            return;
        }
        output.push_str("        <div class=\"notes\">\n");
        output.push_str("            <h2>Notes</h2>\n");
        output.push_str("            <ul>\n");
        for warning in &views.warnings {
            writeln!(
                output,
                "                <li>{}</li>",
                html_escape(&warning.to_string())
            )
            .ok();
        }
        output.push_str("            </ul>\n");
        output.push_str("        </div>\n");
    }

    fn open_section(output: &mut String, class: &str, section: &Section<'_>) {
        writeln!(
            output,
            r#"        <section class="{class}" id="{}">"#,
            section.id
        )
        .ok();
        writeln!(output, "            <h2>{}</h2>", html_escape(&section.heading)).ok();
        writeln!(
            output,
            r#"            <p class="narrative">{}</p>"#,
            html_escape(section.narrative)
        )
        .ok();
        for line in section.svg.lines() {
            writeln!(output, "            {line}").ok();
        }
    }

    fn write_section(output: &mut String, section: &Section<'_>, table: Option<String>) {
        Self::open_section(output, "chart-section", section);
        if let Some(table) = table {
            output.push_str(&table);
        }
        output.push_str("        </section>\n");
    }

    /// The donut section wraps its frames in a player with a play/pause button.
    fn write_pie_section(output: &mut String, section: &Section<'_>) {
        Self::open_section(output, "chart-section pie-player", section);
        output.push_str(
            "            <button type=\"button\" class=\"pie-toggle\" aria-pressed=\"false\">Play</button>\n",
        );
        output.push_str("        </section>\n");
    }

    fn write_sections(&self, output: &mut String, views: &DerivedViews, narrative: &Narrative) {
        let charts = ReportCharts::render(views, &self.charts);
        let indicator = &self.charts.indicator;

        Self::write_section(
            output,
            &Section {
                id: "top-means",
                heading: format!("Top {} countries by mean {indicator}", views.top_means.len()),
                narrative: &narrative.top_means,
                svg: &charts.top_means,
            },
            Some(top_means_table(views)),
        );
        Self::write_section(
            output,
            &Section {
                id: "top-observations",
                heading: format!("Top {} single observations", views.top_observations.len()),
                narrative: &narrative.top_observations,
                svg: &charts.top_observations,
            },
            Some(top_observations_table(views)),
        );
        Self::write_section(
            output,
            &Section {
                id: "series",
                heading: "Trends by country and sex".to_string(),
                narrative: &narrative.series,
                svg: &charts.series,
            },
            None,
        );
        Self::write_section(
            output,
            &Section {
                id: "trend",
                heading: format!("Focus countries: {}", views.focus_countries.join(", ")),
                narrative: &narrative.trend,
                svg: &charts.scatter,
            },
            None,
        );
        Self::write_section(
            output,
            &Section {
                id: "map",
                heading: format!("Latest {indicator} by country"),
                narrative: &narrative.map,
                svg: &charts.map,
            },
            Some(latest_table(views)),
        );
        let pie_heading = match self.charts.pie_source {
            PieSource::Top10 => "Share of the mean ranking",
            PieSource::Top5 => "Share of the top observations",
        };
        Self::write_pie_section(
            output,
            &Section {
                id: "pie",
                heading: pie_heading.to_string(),
                narrative: &narrative.pie,
                svg: &charts.pie,
            },
        );
    }
}

impl Default for HtmlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for HtmlFormatter {
    fn format(&self, views: &DerivedViews) -> Result<String> {
        let narrative = Narrative::build(views, &self.charts);
        let mut output = String::new();

        self.write_header(&mut output);
        Self::write_summary(&mut output, views, &narrative);
        Self::write_notes(&mut output, views);
        self.write_sections(&mut output, views, &narrative);
        output.push_str(HTML_FOOTER);

        Ok(output)
    }
}

/// Sortable table; `numeric` marks columns whose cells carry `data-value`.
fn table(headers: &[(&str, bool)], rows: Vec<Vec<(String, Option<f64>)>>) -> String {
    let mut output = String::new();
    if rows.is_empty() {
        return output;
    }
    output.push_str("            <div class=\"table-container\">\n");
    output.push_str("            <table>\n");
    output.push_str("                <thead>\n                    <tr>\n");
    for (name, numeric) in headers {
        let sort = if *numeric { "number" } else { "text" };
        writeln!(
            output,
            r#"                        <th class="sortable" data-sort="{sort}">{name}</th>"#
        )
        .ok();
    }
    output.push_str("                    </tr>\n                </thead>\n");
    output.push_str("                <tbody>\n");
    for row in rows {
        output.push_str("                    <tr>\n");
        for (text, value) in row {
            let text = html_escape(&text);
            let cell = match value {
                Some(v) => format!(r#"<td class="number" data-value="{v}">{text}</td>"#),
                None => format!("<td>{text}</td>"),
            };
            writeln!(output, "                        {cell}").ok();
        }
        output.push_str("                    </tr>\n");
    }
    output.push_str("                </tbody>\n");
    output.push_str("            </table>\n");
    output.push_str("            </div>\n");
    output
}

#[allow(clippy::cast_precision_loss)]
fn rank_cell(rank: usize) -> (String, Option<f64>) {
    (rank.to_string(), Some(rank as f64))
}

fn value_cell(value: Option<f64>, fallback: String) -> (String, Option<f64>) {
    match value {
        Some(v) => (format_value(v), Some(v)),
        None => (fallback, None),
    }
}

fn top_means_table(views: &DerivedViews) -> String {
    let rows = views
        .top_means
        .iter()
        .map(|r| {
            vec![
                rank_cell(r.rank),
                (r.country.clone(), None),
                value_cell(Some(r.mean_obs_value), String::new()),
            ]
        })
        .collect();
    table(&[("Rank", true), ("Country", false), ("Mean", true)], rows)
}

fn top_observations_table(views: &DerivedViews) -> String {
    let rows = views
        .top_observations
        .iter()
        .map(|r| {
            let obs = &r.observation;
            vec![
                rank_cell(r.rank),
                (obs.country.clone(), None),
                (obs.time_period.to_string(), None),
                (obs.sex.clone(), None),
                value_cell(obs.obs_value.as_f64(), obs.obs_value.to_string()),
            ]
        })
        .collect();
    table(
        &[
            ("Rank", true),
            ("Country", false),
            ("Period", false),
            ("Sex", false),
            ("Value", true),
        ],
        rows,
    )
}

fn latest_table(views: &DerivedViews) -> String {
    let rows = views
        .latest
        .iter()
        .map(|l| {
            let obs = &l.observation;
            vec![
                (obs.country.clone(), None),
                (obs.time_period.to_string(), None),
                (obs.sex.clone(), None),
                value_cell(obs.obs_value.as_f64(), obs.obs_value.to_string()),
            ]
        })
        .collect();
    table(
        &[
            ("Country", false),
            ("Period", false),
            ("Sex", false),
            ("Value", true),
        ],
        rows,
    )
}

#[cfg(test)]
#[path = "html_tests.rs"]
mod tests;
