//! XML sitemap

use crate::domain::entities::Post;
use crate::render::html::escape;

const STATIC_PATHS: &[&str] = &[
    "/",
    "/about",
    "/blog",
    "/blog/archive",
    "/gallery",
    "/portfolio",
    "/resume",
    "/contact",
];

fn url_entry(buf: &mut String, loc: &str, lastmod: Option<&str>) {
    buf.push_str("  <url>\n");
    buf.push_str(&format!("    <loc>{}</loc>\n", escape(loc)));
    if let Some(lastmod) = lastmod {
        buf.push_str(&format!("    <lastmod>{}</lastmod>\n", escape(lastmod)));
    }
    buf.push_str("  </url>\n");
}

pub fn render_sitemap(site_url: &str, posts: &[Post]) -> String {
    let site_url = site_url.trim_end_matches('/');
    let mut buf = String::new();

    buf.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    buf.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");

    for path in STATIC_PATHS {
        let loc = if *path == "/" {
            format!("{}/", site_url)
        } else {
            format!("{}{}", site_url, path)
        };
        url_entry(&mut buf, &loc, None);
    }

    for post in posts {
        url_entry(
            &mut buf,
            &format!("{}/blog/{}", site_url, post.slug),
            Some(&post.date),
        );
    }

    buf.push_str("</urlset>\n");
    buf
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::mock_content::mock_posts;

    #[test]
    fn sitemap_lists_static_pages_and_posts() {
        let sitemap = render_sitemap("https://example.com", &mock_posts());

        assert!(sitemap.contains("<loc>https://example.com/</loc>"));
        assert!(sitemap.contains("<loc>https://example.com/gallery</loc>"));
        assert!(sitemap.contains(
            "<loc>https://example.com/blog/minimalism-modern-spaces</loc>"
        ));
        assert!(sitemap.contains("<lastmod>2024-01-10</lastmod>"));
        assert_eq!(sitemap.matches("<url>").count(), STATIC_PATHS.len() + 3);
    }

    #[test]
    fn static_pages_carry_no_lastmod() {
        let sitemap = render_sitemap("https://example.com", &[]);

        assert!(!sitemap.contains("<lastmod>"));
    }
}
