// src/templates/mod.rs
pub mod about;
pub mod arts;
pub mod contact;
pub mod not_found;
pub mod portfolio;
pub mod tech;
pub mod volunteering;

mod layout;

pub use layout::{render_page, render_portfolio_page};

use crate::models::Section;

/// The content block for a section, without the shell.
pub fn content_for(section: Section) -> String {
    match section {
        Section::About => about::content(),
        Section::Tech => tech::content(),
        Section::Arts => arts::content(),
        Section::Volunteering => volunteering::content(),
        Section::Contact => contact::content(),
    }
}

/// The standalone route page for a section.
pub fn render_section(section: Section) -> String {
    match section {
        Section::About => about::render(),
        Section::Tech => tech::render(),
        Section::Arts => arts::render(),
        Section::Volunteering => volunteering::render(),
        Section::Contact => contact::render(),
    }
}

/// Link to another site, opened in a new tab.
pub fn external_link(href: &str, class: &str, text: &str) -> String {
    format!(
        r#"<a href="{}" target="_blank" rel="noopener noreferrer" class="{}">{}</a>"#,
        href, class, text
    )
}

// Helper function for HTML escaping
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("DevOps & SRE"), "DevOps &amp; SRE");
        assert_eq!(html_escape(r#"<a href="x">'</a>"#), "&lt;a href=&quot;x&quot;&gt;&#x27;&lt;/a&gt;");
        assert_eq!(html_escape("99.9% uptime"), "99.9% uptime");
    }

    #[test]
    fn test_section_page_wraps_its_block() {
        for section in Section::ALL {
            let html = render_section(section);
            assert!(html.contains(&content_for(section)));
            assert!(html.contains(&format!("<title>{} - Yogapriya Veturi</title>", section.label())));
        }
    }
}
