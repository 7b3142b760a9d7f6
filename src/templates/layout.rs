// src/templates/layout.rs
use crate::models::{Section, SectionSelector};

pub const SITE_TITLE: &str = "Yogapriya Veturi";
pub const SITE_DESCRIPTION: &str = "Yogapriya Veturi's personal site";

/// Shell for the per-section routes. No entry is highlighted.
pub fn render_page(title: &str, content: &str) -> String {
    let nav = Section::ALL
        .iter()
        .map(|section| nav_link(section.path(), section.label(), false))
        .collect::<Vec<_>>()
        .join("\n                    ");

    render_shell(&page_title(Some(title)), &nav, content)
}

/// Shell for the single-page view; the active section's entry is highlighted.
pub fn render_portfolio_page(selector: &SectionSelector, content: &str) -> String {
    let nav = Section::ALL
        .iter()
        .map(|section| {
            let href = format!("/?section={}", section.id());
            nav_link(&href, section.label(), selector.is_active(*section))
        })
        .collect::<Vec<_>>()
        .join("\n                    ");

    render_shell(&page_title(None), &nav, content)
}

fn page_title(title: Option<&str>) -> String {
    match title {
        Some(title) => format!("{} - {}", title, SITE_TITLE),
        None => SITE_TITLE.to_string(),
    }
}

fn render_shell(title: &str, nav: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <meta name="description" content="{description}">
    <title>{title}</title>
    <link rel="stylesheet" href="/static/css/main.css">
</head>
<body>
    <nav class="nav">
        <div class="container">
            <div class="nav-links">
                    {nav}
            </div>
        </div>
    </nav>

    <main class="main">
        <div class="container">
            {content}
        </div>
    </main>

    <footer class="footer">
        <div class="container">
            <p class="footer-stack">Built with Next.js • Deployed on Kubernetes • Managed with Terraform • Monitored with AI</p>
            <p class="footer-copyright">© 2025 Yogapriya Veturi</p>
        </div>
    </footer>
</body>
</html>"#,
        description = super::html_escape(SITE_DESCRIPTION),
        title = super::html_escape(title),
        nav = nav,
        content = content,
    )
}

pub fn nav_link(href: &str, text: &str, active: bool) -> String {
    let class = if active { "nav-link active" } else { "nav-link" };
    format!(r#"<a href="{}" class="{}">{}</a>"#, href, class, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_link_active_class() {
        assert_eq!(
            nav_link("/tech", "Tech", true),
            r#"<a href="/tech" class="nav-link active">Tech</a>"#
        );
        assert_eq!(
            nav_link("/tech", "Tech", false),
            r#"<a href="/tech" class="nav-link">Tech</a>"#
        );
    }

    #[test]
    fn test_route_shell_lists_every_section_unhighlighted() {
        let html = render_page("Arts", "<p>body</p>");
        assert!(html.contains("<title>Arts - Yogapriya Veturi</title>"));
        for section in Section::ALL {
            assert!(html.contains(&nav_link(section.path(), section.label(), false)));
        }
        assert!(!html.contains("nav-link active"));
        assert!(html.contains("<p>body</p>"));
        assert!(html.contains("© 2025 Yogapriya Veturi"));
        assert!(html.contains(
            "Built with Next.js • Deployed on Kubernetes • Managed with Terraform • Monitored with AI"
        ));
    }

    #[test]
    fn test_portfolio_shell_highlights_only_active() {
        let mut selector = SectionSelector::new();
        selector.select(Section::Volunteering);
        let html = render_portfolio_page(&selector, "");

        assert!(html.contains("<title>Yogapriya Veturi</title>"));
        assert_eq!(html.matches("nav-link active").count(), 1);
        assert!(html.contains(
            r#"<a href="/?section=volunteering" class="nav-link active">Volunteering</a>"#
        ));
        assert!(html.contains(r#"<a href="/?section=about" class="nav-link">About</a>"#));
    }
}
