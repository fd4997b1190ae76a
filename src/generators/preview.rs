//! HTML preview generator.

use crate::core::report::PreviewRow;

/// Generate a standalone HTML page with one table row per rename.
pub fn generate_preview_html(rows: &[PreviewRow]) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n");
    html.push_str("<html lang=\"en\">\n");
    html.push_str("<head>\n");
    html.push_str("  <meta charset=\"UTF-8\">\n");
    html.push_str("  <title>Rename Preview</title>\n");
    html.push_str("  <style>\n");
    html.push_str("    body { font-family: sans-serif; margin: 2em; }\n");
    html.push_str("    table { border-collapse: collapse; width: 100%; }\n");
    html.push_str("    th, td { border: 1px solid #ccc; padding: 8px; vertical-align: top; text-align: left; }\n");
    html.push_str("    img { max-width: 120px; }\n");
    html.push_str("  </style>\n");
    html.push_str("</head>\n");
    html.push_str("<body>\n");
    html.push_str("  <h1>Rename Preview</h1>\n");
    html.push_str("  <table>\n");
    html.push_str("    <tr><th>Poster</th><th>Old Name</th><th>New Name</th><th>Overview</th></tr>\n");

    for row in rows {
        let poster = if row.poster_url.is_empty() {
            String::new()
        } else {
            format!(
                "<img src=\"{}\" alt=\"{}\">",
                escape_html(&row.poster_url),
                escape_html(&row.new_name)
            )
        };
        html.push_str(&format!(
            "    <tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            poster,
            escape_html(&row.old_name),
            escape_html(&row.new_name),
            escape_html(&row.overview)
        ));
    }

    html.push_str("  </table>\n");
    html.push_str("</body>\n");
    html.push_str("</html>\n");
    html
}

/// Escape special HTML characters.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(poster_url: &str) -> PreviewRow {
        PreviewRow {
            old_name: "Terminator".to_string(),
            new_name: "Terminator (1984)".to_string(),
            overview: "A cyborg <assassin> & a \"target\"".to_string(),
            poster_url: poster_url.to_string(),
        }
    }

    #[test]
    fn test_generate_preview_html() {
        let html = generate_preview_html(&[row("https://image.tmdb.org/t/p/w500/a.jpg")]);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<td>Terminator</td><td>Terminator (1984)</td>"));
        assert!(html.contains("<img src=\"https://image.tmdb.org/t/p/w500/a.jpg\""));
        assert!(html.contains("A cyborg &lt;assassin&gt; &amp; a &quot;target&quot;"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_row_without_poster() {
        let html = generate_preview_html(&[row("")]);
        assert!(!html.contains("<img"));
        assert!(html.contains("<tr><td></td><td>Terminator</td>"));
    }

    #[test]
    fn test_empty_preview() {
        let html = generate_preview_html(&[]);
        assert_eq!(html.matches("<tr>").count(), 1);
    }
}
