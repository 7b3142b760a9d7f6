// src/templates/about.rs
use super::{html_escape, render_page};
use crate::models::Section;

pub const PROFILE_IMAGE: &str = "/images/profile.jpg";
pub const BADGES: [&str; 4] = ["19+ years", "DevOps & SRE", "Multi-region", "99.9% uptime"];

pub fn render() -> String {
    render_page(Section::About.label(), &content())
}

pub fn content() -> String {
    let badges = BADGES
        .iter()
        .map(|badge| format!(r#"<span class="badge">{}</span>"#, html_escape(badge)))
        .collect::<Vec<_>>()
        .join("\n                    ");

    format!(
        r#"
    <div class="section-block" id="section-about">
        <div class="card profile">
            <div class="profile-photo">
                <img src="{image}" alt="Yogapriya at Great Ocean Road">
            </div>

            <div class="profile-text">
                <div>
                    <h1>Yogapriya Veturi</h1>
                    <p class="tagline">Engineering Leader | SRE | Builder of Teams</p>
                </div>

                <p>
                    Over the years, I've realised how much I enjoy building teams and recognizing potential in people. I also quite love transforming complex
                    technical challenges into simpler, dare-I-say elegant, solutions by bringing the right people together and giving them space to thrive.
                    I'm biased toward automation over manual work, quality over quantity, and clear communication - especially crucial
                    during high-stakes situations. Skills I've built over 19 years in tech.
                </p>

                <p>
                    Right now, I'm learning by building - deploying this site on Kubernetes with Terraform, sharpening my
                    coding skills, and exploring how AI can help reliability engineering.
                </p>

                <p>
                    Outside of work, I find quiet joy in nature, art, and solving puzzles. I love conversations about everything
                    from philosophy to music - usually asking questions and listening to different perspectives.
                </p>

                <div class="badges">
                    {badges}
                </div>
            </div>
        </div>
    </div>
    "#,
        image = PROFILE_IMAGE,
        badges = badges,
    )
}
