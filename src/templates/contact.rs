// src/templates/contact.rs
use super::{external_link, render_page};
use crate::models::Section;

pub const EMAIL: &str = "yogapriya.veturi@gmail.com";
pub const LINKEDIN_URL: &str = "https://linkedin.com/in/yogapriyaveturi";
pub const GITHUB_URL: &str = "https://github.com/yogapriyav";
pub const LOCATION: &str = "📍 Oakland, California";

pub fn render() -> String {
    render_page(Section::Contact.label(), &content())
}

pub fn content() -> String {
    format!(
        r#"
    <div class="section-block" id="section-contact">
        <h2 class="centered">Let's Connect</h2>

        <div class="narrow">
            <div class="card centered">
                <p class="lead">
                    I'm always interested in conversations about SRE, team building, automation, or any of the topics
                    I've shared here. Feel free to reach out!
                </p>

                <div class="contact-links">
                    <a href="mailto:{email}" class="btn btn-block btn-dark">{email}</a>
                    {linkedin}
                    {github}
                </div>

                <div class="location">
                    <p>{location}</p>
                </div>
            </div>
        </div>
    </div>
    "#,
        email = EMAIL,
        linkedin = external_link(LINKEDIN_URL, "btn btn-block btn-accent", "Connect on LinkedIn"),
        github = external_link(GITHUB_URL, "btn btn-block btn-slate", "Follow on GitHub"),
        location = LOCATION,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_links() {
        let html = content();
        assert!(html.contains(
            r#"<a href="mailto:yogapriya.veturi@gmail.com" class="btn btn-block btn-dark">yogapriya.veturi@gmail.com</a>"#
        ));
        assert!(html.contains(
            r#"<a href="https://linkedin.com/in/yogapriyaveturi" target="_blank" rel="noopener noreferrer" class="btn btn-block btn-accent">Connect on LinkedIn</a>"#
        ));
        assert!(html.contains(
            r#"<a href="https://github.com/yogapriyav" target="_blank" rel="noopener noreferrer" class="btn btn-block btn-slate">Follow on GitHub</a>"#
        ));
    }

    #[test]
    fn test_location_line() {
        assert!(content().contains("<p>📍 Oakland, California</p>"));
    }
}
