use super::tags::Html;

/// Renders hanging indentation as HTML space entities.
///
/// Every four whitespace characters become one `&emsp;`; the remaining zero
/// to three become `&nbsp;` each.
pub fn indent_to_html(indent: &str) -> String {
    let units = indent.chars().count();
    let mut out = Html::EMSP.repeat(units / Html::SPACES_PER_EMSP);
    out.push_str(&Html::NBSP.repeat(units % Html::SPACES_PER_EMSP));
    out
}

/// Replaces every tab control word with an `&emsp;`.
pub fn replace_tabs(text: &str, tab: &str) -> String {
    text.replace(tab, Html::EMSP)
}

/// Wraps text in a span carrying the space-joined class list.
///
/// The `class` attribute is left out when there are no classes.
pub fn span(classes: &[&str], text: &str) -> String {
    if classes.is_empty() {
        format!("<span>{text}{}", Html::SPAN_CLOSE)
    } else {
        format!(
            "<span class=\"{}\">{text}{}",
            classes.join(" "),
            Html::SPAN_CLOSE
        )
    }
}
