// src/templates/arts.rs
use super::render_page;
use crate::models::Section;

pub fn render() -> String {
    render_page(Section::Arts.label(), &content())
}

pub fn content() -> String {
    r#"
    <div class="section-block" id="section-arts">
        <h2>Arts &amp; Creative Pursuits</h2>

        <div class="grid-3">
            <div class="card centered">
                <div class="emoji">🧩</div>
                <h3>Jigsaw Puzzles</h3>
                <p>Finding patterns and solving complex problems, one piece at a time.</p>
                <div class="note">Gallery coming soon</div>
            </div>

            <div class="card centered">
                <div class="emoji">🎨</div>
                <h3>Art</h3>
                <p>Exploring creativity through various mediums and expressions.</p>
                <div class="note">Gallery coming soon</div>
            </div>

            <div class="card centered">
                <div class="emoji">🎵</div>
                <h3>Music</h3>
                <p>Appreciating the patterns, complexity, and emotion in sound.</p>
                <div class="note">Favorites coming soon</div>
            </div>
        </div>

        <div class="quote quote-warm">
            <p>"I find quiet joy in nature, art, and solving puzzles. There's something meditative about creating with your hands and seeing patterns emerge—whether in code, jigsaw pieces, or on canvas."</p>
        </div>
    </div>
    "#
    .to_string()
}
