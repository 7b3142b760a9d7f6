// src/templates/tech.rs
use super::contact::GITHUB_URL;
use super::{html_escape, render_page};
use crate::models::Section;

const GITHUB_ICON: &str = r#"<svg class="icon" fill="currentColor" viewBox="0 0 24 24"><path d="M12 0c-6.626 0-12 5.373-12 12 0 5.302 3.438 9.8 8.207 11.387.599.111.793-.261.793-.577v-2.234c-3.338.726-4.033-1.416-4.033-1.416-.546-1.387-1.333-1.756-1.333-1.756-1.089-.745.083-.729.083-.729 1.205.084 1.839 1.237 1.839 1.237 1.07 1.834 2.807 1.304 3.492.997.107-.775.418-1.305.762-1.604-2.665-.305-5.467-1.334-5.467-5.931 0-1.311.469-2.381 1.236-3.221-.124-.303-.535-1.524.117-3.176 0 0 1.008-.322 3.301 1.23.957-.266 1.983-.399 3.003-.404 1.02.005 2.047.138 3.006.404 2.291-1.552 3.297-1.23 3.297-1.23.653 1.653.242 2.874.118 3.176.77.84 1.235 1.911 1.235 3.221 0 4.609-2.807 5.624-5.479 5.921.43.372.823 1.102.823 2.222v3.293c0 .319.192.694.801.576 4.765-1.589 8.199-6.086 8.199-11.386 0-6.627-5.373-12-12-12z"/></svg>"#;

/// Expertise areas and what falls under each.
pub const EXPERTISE: [(&str, &str); 4] = [
    (
        "Cloud & Infrastructure",
        "OCI, AWS, Terraform, Kubernetes, Infrastructure as Code, Multi-region deployments",
    ),
    (
        "Observability",
        "Prometheus, Grafana, ELK, Custom metrics, Distributed tracing, Performance optimization",
    ),
    (
        "SRE Practices",
        "Incident management, SLO/SLI frameworks, Capacity planning, On-call optimization, Blameless postmortems",
    ),
    (
        "Automation & CI/CD",
        "GitOps, GitHub Actions, Jenkins, Automated provisioning, Infrastructure automation",
    ),
];

pub fn render() -> String {
    render_page(Section::Tech.label(), &content())
}

pub fn content() -> String {
    let expertise = EXPERTISE
        .iter()
        .map(|(area, items)| {
            format!(
                r#"<div>
                    <h4>{}</h4>
                    <p>{}</p>
                </div>"#,
                html_escape(area),
                html_escape(items)
            )
        })
        .collect::<Vec<_>>()
        .join("\n                ");

    format!(
        r#"
    <div class="section-block" id="section-tech">
        <h2>Tech &amp; Projects</h2>

        <div class="card">
            <h3>Building in Public</h3>
            <p>
                I'm currently exploring AI-native SRE practices and building projects that demonstrate production-grade
                infrastructure patterns. This very site is a learning exercise—built with Next.js, deployed on Kubernetes,
                managed with Terraform, and monitored with Prometheus/Grafana.
            </p>
            <a href="{github}" target="_blank" rel="noopener noreferrer" class="btn btn-dark">
                {icon}
                View My GitHub
            </a>
        </div>

        <div class="card">
            <h3>Blog</h3>
            <p class="muted">Coming soon: Technical essays on SRE, automation, and AI-native operations.</p>
        </div>

        <div class="card card-dark">
            <h3>Technical Expertise</h3>
            <div class="grid-2">
                {expertise}
            </div>
        </div>
    </div>
    "#,
        github = GITHUB_URL,
        icon = GITHUB_ICON,
        expertise = expertise,
    )
}
