//! Static page theme: a dark navy palette and the CSS for the card grid.
//!
//! The theme is read by the renderers only. The presenter uses the
//! background and foreground colors to build the image placeholder URL.

/// Page background.
pub const BACKGROUND: &str = "0A192F";
/// Card and input background.
pub const SURFACE: &str = "172A45";
pub const BORDER: &str = "2A3C5A";
pub const HEADING: &str = "CCD6F6";
/// Body text; also the placeholder image's text color.
pub const FOREGROUND: &str = "E6F1FF";
pub const MUTED: &str = "A8B2D1";
pub const ACCENT: &str = "64FFDA";

/// Number of card columns in the grid.
pub const GRID_COLUMNS: usize = 3;

/// Stylesheet embedded in the rendered page.
pub const PAGE_CSS: &str = r#"
body {
    margin: 0;
    background-color: #0A192F;
    color: #E6F1FF;
    font-family: -apple-system, "Noto Sans KR", "Apple SD Gothic Neo", sans-serif;
}
.container {
    max-width: 1200px;
    margin: 0 auto;
    padding: 24px;
}
h1 {
    color: #CCD6F6;
    text-align: center;
    padding-bottom: 20px;
}
.search-query {
    text-align: center;
    color: #A8B2D1;
    margin-bottom: 24px;
}
.status {
    background-color: #172A45;
    border: 1px solid #2A3C5A;
    border-radius: 8px;
    padding: 16px;
    text-align: center;
}
.status.error {
    border-color: #FF6B6B;
}
.grid {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 20px;
    align-items: start;
}
.column {
    display: flex;
    flex-direction: column;
}
.news-card {
    background-color: #172A45;
    border-radius: 10px;
    padding: 20px;
    margin-bottom: 20px;
    border: 1px solid #2A3C5A;
    transition: transform 0.2s;
    display: flex;
    flex-direction: column;
    justify-content: space-between;
}
.news-card:hover {
    transform: translateY(-5px);
    box-shadow: 0 4px 20px rgba(0, 0, 0, 0.2);
}
.news-card img {
    width: 100%;
    border-radius: 8px;
    margin-bottom: 15px;
    object-fit: cover;
    height: 200px;
}
.news-card h3 {
    font-size: 1.2rem;
    color: #CCD6F6;
    margin-bottom: 10px;
    white-space: normal;
    word-wrap: break-word;
}
.news-card p {
    font-size: 0.9rem;
    color: #A8B2D1;
    flex-grow: 1;
}
.news-card .meta {
    font-size: 0.8rem;
    color: #A8B2D1;
}
.news-card a {
    display: inline-block;
    margin-top: 15px;
    padding: 8px 12px;
    background-color: #0A192F;
    color: #64FFDA;
    text-decoration: none;
    border-radius: 5px;
    border: 1px solid #64FFDA;
    text-align: center;
    transition: all 0.2s ease-in-out;
}
.news-card a:hover {
    background-color: #64FFDA;
    color: #0A192F;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_uses_palette() {
        for color in [BACKGROUND, SURFACE, BORDER, HEADING, FOREGROUND, MUTED, ACCENT] {
            assert!(PAGE_CSS.contains(&format!("#{color}")), "missing #{color}");
        }
        assert!(PAGE_CSS.contains(&format!("repeat({GRID_COLUMNS}, 1fr)")));
    }
}
