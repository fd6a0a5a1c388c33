//! HTML output. Every user or stored value is escaped on the way out.

use std::fmt::Write as _;

use htmlescape::{encode_attribute, encode_minimal};

use super::projector::{Cell, RenderableRow};

pub const NO_RESULTS: &str = "No results!";

/// Where the award page's "Go back!" link points.
pub const AWARD_FORM_HREF: &str = "/#awards";

const NAV_LINKS: &[(&str, &str)] = &[
    ("/", "Home"),
    (AWARD_FORM_HREF, "Awards"),
    ("/#music", "Music"),
    ("/#artists", "Artists"),
];

const INDEX_BODY: &str = r#"<h2>Award reports</h2>
<section id="artists">
<h3>Artists</h3>
<form action="/singer" method="get">
<label>Singer id <input type="number" name="singer_id" required></label>
<input type="submit" value="Look up">
</form>
</section>
<section id="music">
<h3>Music</h3>
<form action="/genre" method="post">
<label>Genre <input type="text" name="genre" required></label>
<input type="submit" value="Find songs">
</form>
</section>
<section id="awards">
<h3>Awards</h3>
<form action="/awards" method="post">
<label>Year <input type="number" name="year" required></label>
<label>Prize <input type="text" name="artist_title" required></label>
<label>Winner <input type="text" name="winner_artist" required></label>
<input type="submit" value="Add award">
</form>
</section>"#;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

#[derive(Debug, Clone)]
pub struct Table {
    pub headers: &'static [&'static str],
    pub rows: Vec<RenderableRow>,
}

#[derive(Debug, Clone)]
pub struct Page {
    pub title: String,
    pub heading: String,
    pub notices: Vec<Notice>,
    pub table: Table,
    pub back_link: Option<(String, String)>,
}

fn render_cell(cell: &Cell) -> String {
    match cell {
        Cell::Text(text) => encode_minimal(text),
        Cell::Link { href, text } => format!(
            "<a href=\"{}\">{}</a>",
            encode_attribute(href),
            encode_minimal(text)
        ),
    }
}

/// Renders the table. An empty row set yields exactly one "No results!" row.
pub fn render_table(table: &Table) -> String {
    let mut html = String::from("<table>\n<tr>");
    for header in table.headers {
        let _ = write!(html, "<th>{}</th>", encode_minimal(header));
    }
    html.push_str("</tr>\n");

    if table.rows.is_empty() {
        let _ = writeln!(
            html,
            "<tr><td colspan=\"{}\">{NO_RESULTS}</td></tr>",
            table.headers.len().max(1)
        );
    }

    for row in &table.rows {
        html.push_str("<tr>");
        for cell in row {
            let _ = write!(html, "<td>{}</td>", render_cell(cell));
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</table>");
    html
}

fn render_shell(title: &str, body: &str) -> String {
    let mut nav = String::new();
    for (href, label) in NAV_LINKS {
        let _ = write!(nav, "<li><a href=\"{href}\">{label}</a></li>");
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="UTF-8">
<link rel="stylesheet" type="text/css" href="style.css">
<title>{title}</title>
</head>
<body>
<ul>{nav}</ul>
{body}
</body>
</html>
"#,
        title = encode_minimal(title),
    )
}

pub fn render_page(page: &Page) -> String {
    let mut body = format!("<h2>{}</h2>\n", encode_minimal(&page.heading));

    for notice in &page.notices {
        let (class, message) = match notice {
            Notice::Success(message) => ("success", message),
            Notice::Error(message) => ("error", message),
        };
        let _ = writeln!(
            body,
            "<p class=\"{class}\">{}</p>",
            encode_minimal(message)
        );
    }

    let _ = writeln!(body, "<section>\n{}\n</section>", render_table(&page.table));

    if let Some((href, label)) = &page.back_link {
        let _ = writeln!(
            body,
            "<div><a href=\"{}\">{}</a></div>",
            encode_attribute(href),
            encode_minimal(label)
        );
    }

    render_shell(&page.title, &body)
}

/// Landing page holding the lookup and award forms the nav links point at.
pub fn render_index() -> String {
    render_shell("Award reports", INDEX_BODY)
}

/// Terminal error document: message only, never a partial table.
pub fn render_error_page(message: &str) -> String {
    let body = format!(
        "<h2>Something went wrong</h2>\n<p class=\"error\">{}</p>",
        encode_minimal(message)
    );
    render_shell("Error", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: Vec<RenderableRow>) -> Table {
        Table {
            headers: &["Song Title"],
            rows,
        }
    }

    #[test]
    fn test_empty_table_has_single_no_results_row() {
        let html = render_table(&table(Vec::new()));
        assert_eq!(html.matches(NO_RESULTS).count(), 1);
        // header row + the no-results row
        assert_eq!(html.matches("<tr>").count(), 2);
    }

    #[test]
    fn test_one_row_per_renderable_row() {
        let html = render_table(&table(vec![
            vec![Cell::Text("a".into())],
            vec![Cell::Text("b".into())],
        ]));
        assert!(!html.contains(NO_RESULTS));
        assert_eq!(html.matches("<tr>").count(), 3);
        assert!(html.find("<td>a</td>").unwrap() < html.find("<td>b</td>").unwrap());
    }

    #[test]
    fn test_values_are_escaped() {
        let html = render_table(&table(vec![vec![Cell::Link {
            href: "/song?song_id=1\"".into(),
            text: "<script>".into(),
        }]]));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("song_id=1\""));
    }

    #[test]
    fn test_page_renders_notices_and_back_link() {
        let html = render_page(&Page {
            title: "Awards".into(),
            heading: "Input Feedback Page".into(),
            notices: vec![Notice::Error("insert failed".into())],
            table: table(Vec::new()),
            back_link: Some((AWARD_FORM_HREF.into(), "Go back!".into())),
        });
        assert!(html.contains("<p class=\"error\">insert failed</p>"));
        assert!(html.contains(&format!(
            "<a href=\"{}\">Go back!</a>",
            encode_attribute(AWARD_FORM_HREF)
        )));
        assert!(html.contains(NO_RESULTS));
    }

    #[test]
    fn test_error_page_has_no_table() {
        let html = render_error_page("Connection failed");
        assert!(html.contains("Connection failed"));
        assert!(!html.contains("<table>"));
    }

    #[test]
    fn test_index_hosts_every_nav_target() {
        let html = render_index();
        for (href, _) in NAV_LINKS {
            assert!(html.contains(&format!("<a href=\"{href}\">")), "{href}");
            if let Some(anchor) = href.strip_prefix("/#") {
                assert!(html.contains(&format!("id=\"{anchor}\"")), "{anchor}");
            }
        }
        assert!(html.contains("action=\"/singer\""));
        assert!(html.contains("action=\"/genre\""));
        assert!(html.contains("action=\"/awards\""));
    }
}
