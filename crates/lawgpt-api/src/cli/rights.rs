//! `lawgpt rights` -- the Fundamental Rights catalogue.

use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;

use lawgpt_types::rights::{
    CATALOGUE_INTRO, CATALOGUE_SUBTITLE, CATALOGUE_TITLE, FUNDAMENTAL_RIGHTS, FundamentalRight,
    LEGAL_PRINCIPLES, find_right,
};

/// Print the catalogue overview, or one right in detail when `query` is given.
pub fn show_rights(query: Option<&str>, json: bool) -> anyhow::Result<()> {
    match query {
        Some(query) => {
            let right = find_right(query).ok_or_else(|| {
                anyhow::anyhow!("No fundamental right matches '{query}'. Try an article number (14-32) or a title.")
            })?;
            if json {
                println!("{}", serde_json::to_string_pretty(right)?);
            } else {
                print!("{}", render_right(right));
            }
        }
        None => {
            if json {
                let catalogue = serde_json::json!({
                    "title": CATALOGUE_TITLE,
                    "rights": FUNDAMENTAL_RIGHTS,
                    "principles": LEGAL_PRINCIPLES,
                });
                println!("{}", serde_json::to_string_pretty(&catalogue)?);
            } else {
                print!("{}", render_overview());
            }
        }
    }
    Ok(())
}

/// Overview table of all rights followed by the general principles.
pub fn render_overview() -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(&format!("  {}\n", style(CATALOGUE_TITLE).cyan().bold()));
    out.push_str(&format!("  {}\n\n", style(CATALOGUE_SUBTITLE).dim()));
    out.push_str(&format!("  {CATALOGUE_INTRO}\n\n"));

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Right").fg(Color::White),
        Cell::new("Articles").fg(Color::White),
        Cell::new("Description").fg(Color::White),
    ]);
    for right in FUNDAMENTAL_RIGHTS {
        table.add_row(vec![
            Cell::new(right.title).fg(Color::Cyan),
            Cell::new(right.articles),
            Cell::new(right.description),
        ]);
    }
    out.push_str(&format!("{table}\n\n"));

    out.push_str(&format!("  {}\n", style("Important Legal Principles").bold()));
    for principle in LEGAL_PRINCIPLES {
        out.push_str(&format!(
            "  {} {}: {}\n",
            style("*").cyan(),
            style(principle.title).bold(),
            principle.summary
        ));
    }
    out.push('\n');
    out.push_str(&format!(
        "  {}\n\n",
        style("Run `lawgpt rights <article>` for the constitutional provisions.").dim()
    ));
    out
}

/// Full entry: provisions, exceptions and landmark judgment.
pub fn render_right(right: &FundamentalRight) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(&format!(
        "  {} {}\n",
        style(right.title).cyan().bold(),
        style(format!("({})", right.articles)).dim()
    ));
    out.push_str(&format!("  {}\n\n", right.description));

    out.push_str(&format!("  {}\n", style("Constitutional Provisions:").bold()));
    for provision in right.provisions {
        out.push_str(&format!("\n  {}\n", style(provision.title).yellow()));
        out.push_str(&format!("  {}\n", provision.content));
    }

    out.push_str(&format!("\n  {}\n", style("Exceptions & Limitations:").bold()));
    out.push_str(&format!("  {}\n", right.exceptions));
    out.push_str(&format!("\n  {}\n", style("Landmark Judgment:").bold()));
    out.push_str(&format!("  {}\n\n", right.landmark));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overview_lists_every_right() {
        let text = render_overview();
        for right in FUNDAMENTAL_RIGHTS {
            assert!(text.contains(right.title), "missing {}", right.title);
        }
        assert!(text.contains("Justiciability"));
    }

    #[test]
    fn test_render_right_includes_provisions() {
        let right = find_right("21").unwrap();
        let text = render_right(right);
        assert!(text.contains("Protection of Life and Personal Liberty (Article 21)"));
        assert!(text.contains("Maneka Gandhi"));
    }

    #[test]
    fn test_unknown_query_is_an_error() {
        assert!(show_rights(Some("maritime"), false).is_err());
    }
}
