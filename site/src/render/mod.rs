pub mod html;
pub mod pages;
pub mod rss;
pub mod sitemap;

pub use pages::{
    render_about, render_blog_archive, render_blog_index, render_blog_post, render_contact,
    render_gallery, render_home, render_not_found, render_portfolio, render_portfolio_item,
    render_resume,
};
pub use rss::render_rss;
pub use sitemap::render_sitemap;
