//! HTML rendering of the landing page

use crate::scan::{PrPreview, SiteStructure};
use chrono::NaiveDate;
use gh_pages_config::AppConfig;
use std::fmt::Write;

const STYLE: &str = r#"
    body {
      font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
      line-height: 1.6;
      color: #333;
      max-width: 800px;
      margin: 0 auto;
      padding: 20px;
    }
    h1 { border-bottom: 1px solid #eaecef; padding-bottom: 10px; }
    h2 { margin-top: 24px; margin-bottom: 16px; font-size: 1.5em; }
    .section { margin-bottom: 30px; }
    .language-link {
      display: inline-block;
      margin-right: 15px;
      padding: 5px 10px;
      background: #f1f8ff;
      border-radius: 3px;
      text-decoration: none;
      color: #0366d6;
    }
    .language-link:hover { background: #ddeeff; }
    .item { margin: 10px 0; padding: 10px; background: #f6f8fa; border-radius: 3px; }
    .item-title { font-weight: bold; margin-bottom: 10px; }
    .no-item { color: #666; font-style: italic; }
    footer {
      margin-top: 50px;
      color: #666;
      font-size: 0.9em;
      text-align: center;
      border-top: 1px solid #eaecef;
      padding-top: 20px;
    }
"#;

/// Human readable name of a language directory
pub fn language_label(lang: &str) -> String {
    match lang {
        "it" => "Italiano".to_string(),
        "en" => "English".to_string(),
        "de" => "Deutsch".to_string(),
        "fr" => "Français".to_string(),
        "es" => "Español".to_string(),
        other => other.to_uppercase(),
    }
}

/// Escape text for use in HTML content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Render the landing page
///
/// Pull requests are listed newest first, releases in descending name
/// order. When `repository` is known each PR title links to the pull
/// request on GitHub.
pub fn render_html(
    structure: &SiteStructure,
    config: &AppConfig,
    repository: Option<&str>,
    generated_on: NaiveDate,
) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("  <meta charset=\"UTF-8\">\n");
    html.push_str(
        "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    html.push_str("  <title>Project Documentation</title>\n");
    let _ = writeln!(html, "  <style>{STYLE}  </style>");
    html.push_str("</head>\n<body>\n<h1>Project Documentation</h1>\n");

    html.push_str("\n<div class=\"section\">\n  <h2>Current Version</h2>\n");
    let current = &structure.current_version;
    if current.exists && !current.languages.is_empty() {
        html.push_str("  <div class=\"item\">\n");
        push_language_links(&mut html, &config.current_version_dir, &current.languages);
        html.push_str("  </div>\n");
    } else {
        html.push_str("  <p class=\"no-item\">No current version available</p>\n");
    }
    html.push_str("</div>\n");

    html.push_str("\n<div class=\"section\">\n  <h2>Releases</h2>\n");
    if structure.releases.is_empty() {
        html.push_str("  <p class=\"no-item\">No releases available</p>\n");
    }
    for (name, release) in structure.releases.iter().rev() {
        html.push_str("  <div class=\"item\">\n");
        let _ = writeln!(html, "    <div class=\"item-title\">{}</div>", escape_html(name));
        push_language_links(
            &mut html,
            &format!("{}/{}", config.releases_dir, name),
            &release.languages,
        );
        html.push_str("  </div>\n");
    }
    html.push_str("</div>\n");

    html.push_str("\n<div class=\"section\">\n  <h2>Pull Requests</h2>\n");
    if structure.prs.is_empty() {
        html.push_str("  <p class=\"no-item\">No pull requests available</p>\n");
    }
    for (name, preview) in sorted_previews(structure) {
        html.push_str("  <div class=\"item\">\n");
        let _ = writeln!(
            html,
            "    <div class=\"item-title\">{}</div>",
            pr_heading(preview, repository)
        );
        push_language_links(
            &mut html,
            &format!("{}/{}", config.prs_dir, name),
            &preview.languages,
        );
        html.push_str("  </div>\n");
    }
    html.push_str("</div>\n");

    html.push_str("\n<footer>\n");
    let _ = write!(
        html,
        "  Generated on {} by automatic directory scan",
        generated_on.format("%Y-%m-%d")
    );
    if let Some(repo) = repository {
        let repo = escape_html(repo);
        let _ = write!(
            html,
            " of <a href=\"https://github.com/{repo}\">{repo}</a>"
        );
    }
    html.push_str("\n</footer>\n</body>\n</html>\n");

    html
}

/// PRs with a number first (newest first), then the rest by name
fn sorted_previews(structure: &SiteStructure) -> Vec<(&String, &PrPreview)> {
    let mut previews: Vec<_> = structure.prs.iter().collect();
    previews.sort_by(|(a_name, a), (b_name, b)| {
        b.number
            .cmp(&a.number)
            .then_with(|| a_name.cmp(b_name))
    });
    previews
}

fn pr_heading(preview: &PrPreview, repository: Option<&str>) -> String {
    let title = escape_html(&preview.title);
    match (preview.number, repository) {
        (Some(number), Some(repo)) => format!(
            "<a href=\"https://github.com/{}/pull/{}\">#{}</a> {}",
            escape_html(repo),
            number,
            number,
            title
        ),
        (Some(number), None) => format!("#{number} {title}"),
        (None, _) => title,
    }
}

fn push_language_links(html: &mut String, prefix: &str, languages: &[String]) {
    for lang in languages {
        let _ = writeln!(
            html,
            "    <a class=\"language-link\" href=\"{}/{}/index.html\">{}</a>",
            escape_html(prefix),
            escape_html(lang),
            escape_html(&language_label(lang))
        );
    }
}
