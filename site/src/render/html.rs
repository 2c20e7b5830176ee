//! Shared HTML building blocks
//!
//! Every page goes through `layout`, which wraps the page body in the site
//! chrome (head, navigation, footer). Renderers build strings; all dynamic
//! content must pass through `escape`.

/// Escape text for safe interpolation into HTML
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const NAV_LINKS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/blog", "Blog"),
    ("/gallery", "Gallery"),
    ("/portfolio", "Portfolio"),
    ("/resume", "Resume"),
    ("/about", "About"),
    ("/contact", "Contact"),
];

const STYLE: &str = "\
:root{--fg:#1a1a1a;--muted:#6b6b6b;--line:#e5e5e5;--accent:#0f62fe}\
body{font-family:Georgia,serif;color:var(--fg);max-width:72rem;margin:0 auto;padding:0 1.5rem;line-height:1.6}\
nav{display:flex;gap:1.5rem;padding:1.5rem 0;border-bottom:1px solid var(--line)}\
nav a{color:var(--muted);text-decoration:none;text-transform:uppercase;font-size:.8rem;letter-spacing:.1em}\
nav a[aria-current]{color:var(--fg)}\
main{padding:2rem 0}\
footer{border-top:1px solid var(--line);padding:1.5rem 0;color:var(--muted);font-size:.85rem}\
.meta{color:var(--muted);font-size:.85rem;text-transform:uppercase;letter-spacing:.05em}\
.grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(18rem,1fr));gap:1.5rem}\
article.card{border:1px solid var(--line);padding:1rem}\
figure{margin:0}figcaption{color:var(--muted);font-size:.8rem;padding-top:.25rem}\
img{max-width:100%;height:auto;display:block}\
a{color:var(--accent)}h1,h2,h3{line-height:1.2}";

/// Wrap a page body in the site chrome.
///
/// `active` is the nav path to mark as current ("/blog" for post pages too).
pub fn layout(title: &str, description: &str, active: &str, body: &str) -> String {
    let mut buf = String::new();

    buf.push_str("<!doctype html>\n<html lang=\"en\">\n<head>\n");
    buf.push_str("<meta charset=\"utf-8\">\n");
    buf.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    buf.push_str(&format!("<title>{} | Framelight</title>\n", escape(title)));
    buf.push_str(&format!(
        "<meta name=\"description\" content=\"{}\">\n",
        escape(description)
    ));
    buf.push_str(
        "<link rel=\"alternate\" type=\"application/rss+xml\" title=\"Framelight Blog\" \
         href=\"/feed.xml\">\n",
    );
    buf.push_str(&format!("<style>{}</style>\n", STYLE));
    buf.push_str("</head>\n<body>\n");

    buf.push_str("<nav>\n");
    for (href, label) in NAV_LINKS {
        if *href == active {
            buf.push_str(&format!(
                "  <a href=\"{}\" aria-current=\"page\">{}</a>\n",
                href, label
            ));
        } else {
            buf.push_str(&format!("  <a href=\"{}\">{}</a>\n", href, label));
        }
    }
    buf.push_str("</nav>\n");

    buf.push_str("<main>\n");
    buf.push_str(body);
    buf.push_str("</main>\n");

    buf.push_str("<footer>\n");
    buf.push_str("  <p>Framelight &middot; photography &amp; engineering &middot; ");
    buf.push_str("<a href=\"/feed.xml\">RSS</a></p>\n");
    buf.push_str("</footer>\n</body>\n</html>\n");

    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_handles_all_html_metacharacters() {
        assert_eq!(
            escape(r#"<a href="x">&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn escape_leaves_plain_text_alone() {
        assert_eq!(escape("Concrete Dreams"), "Concrete Dreams");
    }

    #[test]
    fn layout_marks_the_active_nav_link() {
        let page = layout("Blog", "All posts", "/blog", "<h1>Blog</h1>");

        assert!(page.contains("<a href=\"/blog\" aria-current=\"page\">Blog</a>"));
        assert!(page.contains("<a href=\"/gallery\">Gallery</a>"));
    }

    #[test]
    fn layout_escapes_the_title() {
        let page = layout("A <b>bold</b> title", "", "/", "");

        assert!(page.contains("<title>A &lt;b&gt;bold&lt;/b&gt; title | Framelight</title>"));
        assert!(!page.contains("<title>A <b>"));
    }
}
