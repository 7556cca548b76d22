use figlet_rs::FIGfont;

pub const TITLE: &str = "SysPeek";
pub const SUBTITLE: &str = "🔧 Your Lightweight System Monitor";

/// Render `text` in the FIGlet standard font, falling back to plain text
pub fn render(text: &str) -> String {
    let figure = FIGfont::standard()
        .map_err(|e| log::debug!("Standard FIGlet font unavailable: {}", e))
        .ok()
        .and_then(|font| font.convert(text).map(|figure| figure.to_string()));

    let mut banner = match figure {
        Some(figure) => figure,
        None => text.to_string(),
    };
    if !banner.ends_with('\n') {
        banner.push('\n');
    }
    banner
}
