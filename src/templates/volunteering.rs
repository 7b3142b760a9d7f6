// src/templates/volunteering.rs
use super::{external_link, html_escape, render_page};
use crate::models::Section;

pub struct Role {
    pub organization: &'static str,
    pub period: &'static str,
    pub summary: &'static str,
    pub url: &'static str,
}

pub const CURRENT: Role = Role {
    organization: "Alameda County Community Food Bank",
    period: "Present",
    summary: "Supporting local communities in addressing food insecurity and hunger relief.",
    url: "https://www.accfb.org/",
};

pub const PAST: [Role; 2] = [
    Role {
        organization: "Second Harvest of Silicon Valley",
        period: "2020 – 2025 | Oracle Corporate Volunteer Program",
        summary: "Participated in food sorting and distribution efforts through Oracle's volunteer initiatives, \
                  helping provide meals to families across Silicon Valley.",
        url: "https://www.shfb.org/",
    },
    Role {
        organization: "Bay Area Tutor",
        period: "2016 – 2018",
        summary: "Provided educational support and mentorship to students, helping build confidence and \
                  academic skills in STEM subjects.",
        url: "https://bayareatutor.org/",
    },
];

pub fn render() -> String {
    render_page(Section::Volunteering.label(), &content())
}

fn role_entry(role: &Role, current: bool) -> String {
    let class = if current { "role role-current" } else { "role" };
    format!(
        r#"<div class="{class}">
                <h4>{organization}</h4>
                <p class="period">{period}</p>
                <p>{summary}</p>
                {link}
            </div>"#,
        class = class,
        organization = html_escape(role.organization),
        period = html_escape(role.period),
        summary = html_escape(role.summary),
        link = external_link(role.url, "link", "Learn more →"),
    )
}

pub fn content() -> String {
    let past = PAST
        .iter()
        .map(|role| role_entry(role, false))
        .collect::<Vec<_>>()
        .join("\n\n            ");

    format!(
        r#"
    <div class="section-block" id="section-volunteering">
        <h2>Volunteering &amp; Community</h2>

        <div class="card">
            <h3>Current</h3>
            {current}
        </div>

        <div class="card">
            <h3>Past Volunteer Work</h3>
            {past}
        </div>

        <div class="quote quote-cool">
            <p>"Giving back to the community reminds me what really matters—people, connection, and making a small difference where I can."</p>
        </div>
    </div>
    "#,
        current = role_entry(&CURRENT, true),
        past = past,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_organization_links() {
        let html = content();
        for url in [
            "https://www.accfb.org/",
            "https://www.shfb.org/",
            "https://bayareatutor.org/",
        ] {
            assert!(html.contains(&format!(
                r#"<a href="{}" target="_blank" rel="noopener noreferrer" class="link">Learn more →</a>"#,
                url
            )));
        }
    }

    #[test]
    fn test_headings_and_closing_quote() {
        let html = content();
        assert!(html.contains("<h2>Volunteering &amp; Community</h2>"));
        assert!(html.contains("<h3>Current</h3>"));
        assert!(html.contains("<h3>Past Volunteer Work</h3>"));
        assert!(html.contains("<h4>Alameda County Community Food Bank</h4>"));
        assert!(html.contains("<h4>Second Harvest of Silicon Valley</h4>"));
        assert!(html.contains("<h4>Bay Area Tutor</h4>"));
        assert!(html.contains(
            r#"<p>"Giving back to the community reminds me what really matters—people, connection, and making a small difference where I can."</p>"#
        ));
    }

    #[test]
    fn test_periods() {
        let html = content();
        assert_eq!(html.matches(r#"class="role role-current""#).count(), 1);
        assert!(html.contains("2020 – 2025 | Oracle Corporate Volunteer Program"));
        assert!(html.contains("2016 – 2018"));
        assert!(html.contains("Oracle&#x27;s volunteer initiatives, helping provide meals"));
    }
}
