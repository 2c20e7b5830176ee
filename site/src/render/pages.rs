//! Page renderers
//!
//! One function per route, building the page body and wrapping it in the
//! shared layout. Everything dynamic is escaped.

use std::collections::BTreeMap;

use crate::domain::entities::{GalleryImage, PortfolioItem, Post};
use crate::render::html::{escape, layout};

fn post_card(post: &Post) -> String {
    let mut buf = String::new();

    buf.push_str("<article class=\"card\">\n");
    if let Some(image) = &post.image {
        buf.push_str(&format!(
            "  <a href=\"/blog/{}\"><img src=\"{}\" alt=\"{}\" loading=\"lazy\"></a>\n",
            escape(&post.slug),
            escape(image),
            escape(&post.title)
        ));
    }
    buf.push_str(&format!(
        "  <p class=\"meta\">{} &middot; {} &middot; {}</p>\n",
        escape(&post.category),
        escape(&post.date),
        escape(&post.read_time)
    ));
    buf.push_str(&format!(
        "  <h3><a href=\"/blog/{}\">{}</a></h3>\n",
        escape(&post.slug),
        escape(&post.title)
    ));
    buf.push_str(&format!("  <p>{}</p>\n", escape(&post.excerpt)));
    buf.push_str("</article>\n");

    buf
}

/// Home page: featured post, latest posts, featured gallery strip
pub fn render_home(posts: &[Post], gallery: &[GalleryImage]) -> String {
    let mut body = String::new();

    body.push_str("<h1>Framelight</h1>\n");
    body.push_str(
        "<p>Photography, architecture, technology, and the spaces between frames.</p>\n",
    );

    if let Some(featured) = posts.iter().find(|p| p.featured) {
        body.push_str("<h2>Featured</h2>\n");
        body.push_str(&post_card(featured));
    }

    body.push_str("<h2>Latest thoughts</h2>\n");
    if posts.is_empty() {
        body.push_str("<p>No posts yet.</p>\n");
    } else {
        body.push_str("<div class=\"grid\">\n");
        for post in posts.iter().take(3) {
            body.push_str(&post_card(post));
        }
        body.push_str("</div>\n");
    }

    let featured_images: Vec<&GalleryImage> = gallery.iter().filter(|g| g.featured).collect();
    if !featured_images.is_empty() {
        body.push_str("<h2>From the gallery</h2>\n<div class=\"grid\">\n");
        for image in featured_images.iter().take(4) {
            body.push_str(&format!(
                "<figure><a href=\"/gallery\"><img src=\"{}\" alt=\"{}\" loading=\"lazy\"></a>\
                 <figcaption>{}</figcaption></figure>\n",
                escape(&image.src),
                escape(&image.alt),
                escape(&image.name)
            ));
        }
        body.push_str("</div>\n");
    }

    body.push_str(
        "<h2>Newsletter</h2>\n\
         <form method=\"post\" action=\"/api/newsletter\">\n\
           <input type=\"email\" name=\"email\" placeholder=\"you@example.com\" required>\n\
           <button type=\"submit\">Subscribe</button>\n\
         </form>\n",
    );

    layout(
        "Home",
        "Portfolio and blog of an architectural photographer and engineer.",
        "/",
        &body,
    )
}

pub fn render_blog_index(posts: &[Post]) -> String {
    let mut body = String::new();

    body.push_str("<h1>Blog</h1>\n");
    if posts.is_empty() {
        body.push_str("<p>No posts yet.</p>\n");
    } else {
        body.push_str("<div class=\"grid\">\n");
        for post in posts {
            body.push_str(&post_card(post));
        }
        body.push_str("</div>\n");
    }
    body.push_str("<p><a href=\"/blog/archive\">Browse the archive</a></p>\n");

    layout("Blog", "Thoughts on photography and architecture.", "/blog", &body)
}

/// Archive page: posts grouped by year, newest year first
pub fn render_blog_archive(posts: &[Post]) -> String {
    let mut by_year: BTreeMap<String, Vec<&Post>> = BTreeMap::new();
    for post in posts {
        by_year.entry(post.year().to_string()).or_default().push(post);
    }

    let mut body = String::new();
    body.push_str("<h1>Archive</h1>\n");

    if by_year.is_empty() {
        body.push_str("<p>No posts yet.</p>\n");
    }

    for (year, posts) in by_year.iter().rev() {
        body.push_str(&format!("<h2>{}</h2>\n<ul>\n", escape(year)));
        for post in posts {
            body.push_str(&format!(
                "  <li><a href=\"/blog/{}\">{}</a> <span class=\"meta\">{}</span></li>\n",
                escape(&post.slug),
                escape(&post.title),
                escape(&post.date)
            ));
        }
        body.push_str("</ul>\n");
    }

    layout("Archive", "All posts by year.", "/blog", &body)
}

pub fn render_blog_post(post: &Post) -> String {
    let mut body = String::new();

    body.push_str(&format!("<h1>{}</h1>\n", escape(&post.title)));
    body.push_str(&format!(
        "<p class=\"meta\">{} &middot; {} &middot; {} &middot; by {}, {}</p>\n",
        escape(&post.category),
        escape(&post.date),
        escape(&post.read_time),
        escape(&post.author),
        escape(&post.author_title)
    ));

    if let Some(image) = &post.image {
        body.push_str(&format!(
            "<img src=\"{}\" alt=\"{}\">\n",
            escape(image),
            escape(&post.title)
        ));
    }

    // Plain-text content; blank lines separate paragraphs.
    for paragraph in post.content.split("\n\n") {
        let paragraph = paragraph.trim();
        if !paragraph.is_empty() {
            body.push_str(&format!("<p>{}</p>\n", escape(paragraph)));
        }
    }

    body.push_str("<p><a href=\"/blog\">&larr; Back to all posts</a></p>\n");

    layout(&post.title, &post.excerpt, "/blog", &body)
}

pub fn render_gallery(images: &[GalleryImage]) -> String {
    let mut body = String::new();

    body.push_str("<h1>Gallery</h1>\n");
    if images.is_empty() {
        body.push_str("<p>No images yet.</p>\n");
    } else {
        body.push_str("<div class=\"grid\">\n");
        for image in images {
            body.push_str("<figure>\n");
            body.push_str(&format!(
                "  <img src=\"{}\" alt=\"{}\" loading=\"lazy\">\n",
                escape(&image.src),
                escape(&image.alt)
            ));
            body.push_str(&format!(
                "  <figcaption>{} &middot; {} &middot; {}",
                escape(&image.name),
                escape(&image.place),
                escape(&image.date)
            ));
            if let Some(exif) = &image.exif {
                let caption = exif.caption();
                if !caption.is_empty() {
                    body.push_str(&format!("<br>{}", escape(&caption)));
                }
            }
            body.push_str("</figcaption>\n</figure>\n");
        }
        body.push_str("</div>\n");
    }

    layout("Gallery", "Selected photography.", "/gallery", &body)
}

pub fn render_portfolio(items: &[PortfolioItem]) -> String {
    let mut body = String::new();

    body.push_str("<h1>Portfolio</h1>\n");
    if items.is_empty() {
        body.push_str("<p>Nothing here yet.</p>\n");
    } else {
        body.push_str("<div class=\"grid\">\n");
        for item in items {
            body.push_str("<article class=\"card\">\n");
            if let Some(image) = &item.image {
                body.push_str(&format!(
                    "  <a href=\"/portfolio/{}\"><img src=\"{}\" alt=\"{}\" loading=\"lazy\"></a>\n",
                    escape(&item.id),
                    escape(image),
                    escape(&item.name)
                ));
            }
            body.push_str(&format!(
                "  <p class=\"meta\">{} &middot; {} &middot; {}</p>\n",
                escape(&item.category),
                escape(&item.place),
                escape(&item.date)
            ));
            body.push_str(&format!(
                "  <h3><a href=\"/portfolio/{}\">{}</a></h3>\n",
                escape(&item.id),
                escape(&item.name)
            ));
            body.push_str("</article>\n");
        }
        body.push_str("</div>\n");
    }

    layout("Portfolio", "Selected projects.", "/portfolio", &body)
}

pub fn render_portfolio_item(item: &PortfolioItem) -> String {
    let mut body = String::new();

    body.push_str(&format!("<h1>{}</h1>\n", escape(&item.name)));
    body.push_str(&format!(
        "<p class=\"meta\">{} &middot; {} &middot; {}</p>\n",
        escape(&item.category),
        escape(&item.place),
        escape(&item.date)
    ));
    if let Some(image) = &item.image {
        body.push_str(&format!(
            "<img src=\"{}\" alt=\"{}\">\n",
            escape(image),
            escape(&item.name)
        ));
    }
    body.push_str(&format!("<p>{}</p>\n", escape(&item.description)));
    body.push_str("<p><a href=\"/portfolio\">&larr; Back to portfolio</a></p>\n");

    layout(&item.name, &item.description, "/portfolio", &body)
}

pub fn render_about() -> String {
    let body = "\
<h1>About</h1>\n\
<p>I photograph buildings and write software. The camera taught me to look for \
structure; engineering taught me why it holds up. This site collects both \
habits: photographs of the built environment and occasional writing about \
design, cities, and the tools I use.</p>\n\
<p>Most of the photography here is shot on mirrorless bodies with a small bag \
of primes, then catalogued with the EXIF data you can see under each gallery \
image.</p>\n";

    layout("About", "Who runs this site and why.", "/about", body)
}

pub fn render_resume() -> String {
    let body = "\
<h1>Resume</h1>\n\
<h2>Experience</h2>\n\
<ul>\n\
  <li><strong>Freelance architectural photographer</strong> — commissions for \
studios and publications across Europe (2019 &ndash; present)</li>\n\
  <li><strong>Software engineer</strong> — web platforms and content systems \
(2016 &ndash; present)</li>\n\
</ul>\n\
<h2>Skills</h2>\n\
<ul>\n\
  <li>Architectural and interior photography, photo editing and cataloguing</li>\n\
  <li>Web engineering, content modelling, build &amp; deployment tooling</li>\n\
</ul>\n\
<p><a href=\"/contact\">Get in touch</a> for commissions or collaboration.</p>\n";

    layout("Resume", "Experience and skills.", "/resume", body)
}

pub fn render_contact() -> String {
    let body = "\
<h1>Contact</h1>\n\
<p>For commissions, prints, or anything else — the form below lands straight \
in my inbox.</p>\n\
<form method=\"post\" action=\"/api/contact\">\n\
  <p><input type=\"text\" name=\"name\" placeholder=\"Your name\" required></p>\n\
  <p><input type=\"email\" name=\"email\" placeholder=\"you@example.com\" required></p>\n\
  <p><textarea name=\"message\" rows=\"6\" placeholder=\"Your message\" required></textarea></p>\n\
  <p><button type=\"submit\">Send</button></p>\n\
</form>\n";

    layout("Contact", "Get in touch.", "/contact", body)
}

pub fn render_not_found() -> String {
    let body = "\
<h1>404</h1>\n\
<p>That frame doesn't exist. <a href=\"/\">Back to the start</a>.</p>\n";

    layout("Not found", "Page not found.", "", body)
}
