/// HTML tags and entities produced by the renderer.
pub struct Html;

impl Html {
    pub const EMSP: &'static str = "&emsp;";
    pub const NBSP: &'static str = "&nbsp;";
    pub const BREAK: &'static str = "<br>";
    pub const PARAGRAPH_OPEN: &'static str = "<div>";
    pub const PARAGRAPH_CLOSE: &'static str = "</div>";
    pub const SPAN_CLOSE: &'static str = "</span>";
    pub const ITEM_OPEN: &'static str = "<li>";
    pub const ITEM_CLOSE: &'static str = "</li>";

    /// Whitespace characters that make up one `&emsp;` of indentation.
    pub const SPACES_PER_EMSP: usize = 4;
}
