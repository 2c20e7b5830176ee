//! Static fallback content
//!
//! Served whenever the CMS is not configured or a fetch fails, so the site
//! always renders something. The arrays are kept newest-first, matching the
//! sort the CMS queries ask for.

use crate::domain::entities::{ExifInfo, GalleryImage, PortfolioItem, Post};

pub fn mock_posts() -> Vec<Post> {
    vec![
        Post {
            id: "mock-1".to_string(),
            title: "The Future of Sustainable Architecture".to_string(),
            slug: "future-sustainable-architecture".to_string(),
            date: "2024-01-15".to_string(),
            excerpt: "Exploring how modern architecture is evolving to meet environmental \
                      challenges through innovative design and materials."
                .to_string(),
            content: "Modern architecture is undergoing a fundamental transformation as \
                      designers and builders increasingly prioritize environmental \
                      sustainability. From passive cooling strategies to reclaimed \
                      materials, the discipline is rethinking what a building owes to \
                      its surroundings."
                .to_string(),
            category: "SUSTAINABILITY".to_string(),
            read_time: "8 min read".to_string(),
            image: Some("/brutalist-concrete-architecture-berlin-dramatic-li.png".to_string()),
            featured: true,
            author: "Emir Duruduygu".to_string(),
            author_title: "Architectural Photographer".to_string(),
        },
        Post {
            id: "mock-2".to_string(),
            title: "Minimalism in Modern Spaces".to_string(),
            slug: "minimalism-modern-spaces".to_string(),
            date: "2024-01-10".to_string(),
            excerpt: "How less can be more in contemporary architectural design, focusing \
                      on space, light, and essential elements."
                .to_string(),
            content: "The philosophy of minimalism in architecture goes beyond mere \
                      aesthetics. Stripping a space to its essential elements forces \
                      every remaining line, surface, and shaft of light to carry \
                      meaning."
                .to_string(),
            category: "DESIGN".to_string(),
            read_time: "6 min read".to_string(),
            image: Some("/minimalist-interior-design-copenhagen-clean-lines.png".to_string()),
            featured: false,
            author: "Emir Duruduygu".to_string(),
            author_title: "Architectural Photographer".to_string(),
        },
        Post {
            id: "mock-3".to_string(),
            title: "Urban Planning Trends for 2024".to_string(),
            slug: "urban-planning-trends-2024".to_string(),
            date: "2024-01-05".to_string(),
            excerpt: "Examining the latest trends in urban development and how cities are \
                      adapting to changing demographics and climate."
                .to_string(),
            content: "As we move through 2024, urban planning continues to evolve. \
                      Fifteen-minute neighbourhoods, depaved streets, and adaptive \
                      reuse of office stock are no longer fringe ideas but planning \
                      policy in a growing number of cities."
                .to_string(),
            category: "URBAN PLANNING".to_string(),
            read_time: "12 min read".to_string(),
            image: Some("/modern-glass-building-reflection.png".to_string()),
            featured: false,
            author: "Emir Duruduygu".to_string(),
            author_title: "Architectural Photographer".to_string(),
        },
    ]
}

pub fn mock_gallery_images() -> Vec<GalleryImage> {
    vec![
        GalleryImage {
            id: "mock-g1".to_string(),
            src: "/modern-geometric-building-tokyo-architecture.png".to_string(),
            alt: "Geometric facade of a modern Tokyo office tower".to_string(),
            name: "Tokyo Geometry".to_string(),
            date: "2024-03-02".to_string(),
            place: "Tokyo, Japan".to_string(),
            category: "Architecture".to_string(),
            featured: true,
            exif: Some(ExifInfo {
                camera: Some("Fujifilm X-T4".to_string()),
                lens: Some("XF 16-55mm F2.8".to_string()),
                aperture: Some("f/8".to_string()),
                shutter_speed: Some("1/250s".to_string()),
                iso: Some("160".to_string()),
                focal_length: Some("23mm".to_string()),
            }),
        },
        GalleryImage {
            id: "mock-g2".to_string(),
            src: "/brutalist-concrete-architecture-berlin-dramatic-li.png".to_string(),
            alt: "Brutalist concrete housing block in dramatic side light".to_string(),
            name: "Concrete Dreams".to_string(),
            date: "2023-11-18".to_string(),
            place: "Berlin, Germany".to_string(),
            category: "Architecture".to_string(),
            featured: true,
            exif: Some(ExifInfo {
                camera: Some("Fujifilm X-T4".to_string()),
                lens: Some("XF 23mm F1.4".to_string()),
                aperture: Some("f/5.6".to_string()),
                shutter_speed: Some("1/500s".to_string()),
                iso: Some("200".to_string()),
                focal_length: Some("23mm".to_string()),
            }),
        },
        GalleryImage {
            id: "mock-g3".to_string(),
            src: "/architectural-photography-natural-light-barcelona-.png".to_string(),
            alt: "Sunlight falling through an atrium in Barcelona".to_string(),
            name: "Light Studies".to_string(),
            date: "2023-09-04".to_string(),
            place: "Barcelona, Spain".to_string(),
            category: "Photography".to_string(),
            featured: false,
            exif: None,
        },
        GalleryImage {
            id: "mock-g4".to_string(),
            src: "/minimalist-interior-design-copenhagen-clean-lines.png".to_string(),
            alt: "Minimalist Copenhagen interior with clean lines".to_string(),
            name: "Quiet Rooms".to_string(),
            date: "2023-06-27".to_string(),
            place: "Copenhagen, Denmark".to_string(),
            category: "Interior".to_string(),
            featured: false,
            exif: None,
        },
    ]
}

pub fn mock_portfolio_items() -> Vec<PortfolioItem> {
    vec![
        PortfolioItem {
            id: "mock-p1".to_string(),
            name: "Urban Geometries".to_string(),
            description: "A study of geometric forms in contemporary Japanese architecture, \
                          exploring the interplay between traditional minimalism and modern \
                          urban design."
                .to_string(),
            category: "Architecture".to_string(),
            image: Some("/modern-geometric-building-tokyo-architecture.png".to_string()),
            place: "Tokyo, Japan".to_string(),
            date: "2024".to_string(),
            featured: true,
        },
        PortfolioItem {
            id: "mock-p2".to_string(),
            name: "Concrete Dreams".to_string(),
            description: "Capturing the raw beauty of brutalist architecture through dramatic \
                          lighting and bold compositions."
                .to_string(),
            category: "Photography".to_string(),
            image: Some("/brutalist-concrete-architecture-berlin-dramatic-li.png".to_string()),
            place: "Berlin, Germany".to_string(),
            date: "2023".to_string(),
            featured: false,
        },
        PortfolioItem {
            id: "mock-p3".to_string(),
            name: "Light Studies".to_string(),
            description: "An exploration of how natural light transforms architectural spaces \
                          throughout the day."
                .to_string(),
            category: "Photography".to_string(),
            image: Some("/architectural-photography-natural-light-barcelona-.png".to_string()),
            place: "Barcelona, Spain".to_string(),
            date: "2023".to_string(),
            featured: true,
        },
        PortfolioItem {
            id: "mock-p4".to_string(),
            name: "Minimalist Spaces".to_string(),
            description: "Documenting the essence of Scandinavian minimalism in contemporary \
                          interior spaces."
                .to_string(),
            category: "Interior".to_string(),
            image: Some("/minimalist-interior-design-copenhagen-clean-lines.png".to_string()),
            place: "Copenhagen, Denmark".to_string(),
            date: "2024".to_string(),
            featured: false,
        },
        PortfolioItem {
            id: "mock-p5".to_string(),
            name: "Industrial Heritage".to_string(),
            description: "The transformation of industrial heritage buildings into modern \
                          architectural marvels."
                .to_string(),
            category: "Architecture".to_string(),
            image: Some("/industrial-architecture-manchester-converted-wareh.png".to_string()),
            place: "Manchester, UK".to_string(),
            date: "2023".to_string(),
            featured: false,
        },
        PortfolioItem {
            id: "mock-p6".to_string(),
            name: "Shadow Play".to_string(),
            description: "Exploring the dramatic interplay of shadows and geometric forms in \
                          contemporary architecture."
                .to_string(),
            category: "Photography".to_string(),
            image: Some("/architectural-shadows-los-angeles-modern-building-.png".to_string()),
            place: "Los Angeles, USA".to_string(),
            date: "2024".to_string(),
            featured: true,
        },
    ]
}
