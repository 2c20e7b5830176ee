//! RSS 2.0 feed

use chrono::NaiveDate;

use crate::domain::entities::Post;
use crate::render::html::escape;

/// Formats a `YYYY-MM-DD` post date as RFC 2822 for `<pubDate>`. Dates that
/// fail to parse are omitted rather than emitting an invalid element.
fn pub_date(date: &str) -> Option<String> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    let datetime = date.and_hms_opt(0, 0, 0)?.and_utc();
    Some(datetime.to_rfc2822())
}

pub fn render_rss(site_url: &str, posts: &[Post]) -> String {
    let site_url = site_url.trim_end_matches('/');
    let mut buf = String::new();

    buf.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    buf.push_str("<rss version=\"2.0\" xmlns:atom=\"http://www.w3.org/2005/Atom\">\n");
    buf.push_str("<channel>\n");
    buf.push_str("  <title>Framelight</title>\n");
    buf.push_str(&format!("  <link>{}</link>\n", escape(site_url)));
    buf.push_str(
        "  <description>Photography, architecture, and engineering notes.</description>\n",
    );
    buf.push_str("  <language>en</language>\n");
    buf.push_str(&format!(
        "  <atom:link href=\"{}/feed.xml\" rel=\"self\" type=\"application/rss+xml\"/>\n",
        escape(site_url)
    ));

    for post in posts {
        buf.push_str("  <item>\n");
        buf.push_str(&format!(
            "    <title><![CDATA[{}]]></title>\n",
            post.title.replace("]]>", "]]&gt;")
        ));
        buf.push_str(&format!(
            "    <link>{}/blog/{}</link>\n",
            escape(site_url),
            escape(&post.slug)
        ));
        buf.push_str(&format!(
            "    <guid isPermaLink=\"true\">{}/blog/{}</guid>\n",
            escape(site_url),
            escape(&post.slug)
        ));
        buf.push_str(&format!(
            "    <description><![CDATA[{}]]></description>\n",
            post.excerpt.replace("]]>", "]]&gt;")
        ));
        buf.push_str(&format!("    <category>{}</category>\n", escape(&post.category)));
        if let Some(date) = pub_date(&post.date) {
            buf.push_str(&format!("    <pubDate>{}</pubDate>\n", date));
        }
        buf.push_str("  </item>\n");
    }

    buf.push_str("</channel>\n</rss>\n");
    buf
}
