// src/templates/not_found.rs
use super::{html_escape, render_page};

pub fn render(path: &str) -> String {
    let content = format!(
        r#"
    <div class="card centered">
        <h2>Page not found</h2>
        <p class="muted">Nothing lives at <code>{}</code>.</p>
        <p><a href="/" class="link">Back to the portfolio</a></p>
    </div>
    "#,
        html_escape(path)
    );

    render_page("Not Found", &content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_is_escaped() {
        let html = render("/<script>");
        assert!(html.contains("<code>/&lt;script&gt;</code>"));
        assert!(!html.contains("<script>"));
    }
}
