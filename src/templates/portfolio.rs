// src/templates/portfolio.rs
// Single-page view: the shell plus whichever block the selector holds.
use super::{content_for, render_portfolio_page};
use crate::models::SectionSelector;

pub fn render(selector: &SectionSelector) -> String {
    render_portfolio_page(selector, &content_for(selector.active()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Section;

    fn block_marker(section: Section) -> String {
        format!(r#"id="section-{}""#, section.id())
    }

    #[test]
    fn test_exactly_one_block_rendered() {
        for section in Section::ALL {
            let mut selector = SectionSelector::new();
            selector.select(section);
            let html = render(&selector);

            assert_eq!(html.matches(r#"class="section-block""#).count(), 1);
            for other in Section::ALL {
                assert_eq!(html.contains(&block_marker(other)), other == section);
            }
        }
    }

    #[test]
    fn test_default_renders_about() {
        let html = render(&SectionSelector::new());
        assert!(html.contains(&block_marker(Section::About)));
        assert!(html.contains(r#"<a href="/?section=about" class="nav-link active">About</a>"#));
    }

    #[test]
    fn test_reselect_renders_identically() {
        let mut selector = SectionSelector::new();
        selector.select(Section::Tech);
        let first = render(&selector);
        selector.select(Section::Tech);
        assert_eq!(render(&selector), first);
    }
}
