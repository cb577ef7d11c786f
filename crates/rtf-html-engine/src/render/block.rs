use crate::markers::WrapperKind;
use crate::parsing::list::ListNode;

use super::tags::Html;

/// Wraps the part of `result` not yet inside a paragraph container.
///
/// With no closed container yet, the whole result is wrapped. Otherwise only
/// the text after the last `</div>` is, and earlier containers stay as they
/// are.
pub fn wrap_paragraph(result: &mut String) {
    match result.rfind(Html::PARAGRAPH_CLOSE) {
        None => {
            let body = std::mem::take(result);
            push_paragraph(result, &body);
        }
        Some(at) => {
            let tail = result.split_off(at + Html::PARAGRAPH_CLOSE.len());
            result.push('\n');
            push_paragraph(result, &tail);
        }
    }
}

fn push_paragraph(out: &mut String, body: &str) {
    out.push_str(Html::PARAGRAPH_OPEN);
    out.push('\n');
    out.push_str(body);
    out.push('\n');
    out.push_str(Html::PARAGRAPH_CLOSE);
}

/// Appends a finished list to `result`.
///
/// A `<br>` within the last five bytes of the result is dropped first, so a
/// pending inline break does not dangle before the list. Nested items are
/// rendered as a wrapper of the same kind right after their parent item.
pub fn render_list(result: &mut String, kind: WrapperKind, items: &[ListNode]) {
    strip_trailing_break(result);
    result.push('\n');
    push_wrapper(result, kind, items);
}

fn strip_trailing_break(result: &mut String) {
    let tail_start = floor_char_boundary(result, result.len().saturating_sub(5));
    if result[tail_start..].contains(Html::BREAK)
        && let Some(at) = result.rfind(Html::BREAK)
    {
        result.truncate(at);
    }
}

fn floor_char_boundary(s: &str, mut index: usize) -> usize {
    while !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

fn push_wrapper(out: &mut String, kind: WrapperKind, items: &[ListNode]) {
    let tag = kind.tag();
    out.push_str(&format!("<{tag}>\n"));
    for item in items {
        out.push_str(Html::ITEM_OPEN);
        out.push_str(&item.text);
        out.push_str(Html::ITEM_CLOSE);
        out.push('\n');
        if !item.children.is_empty() {
            push_wrapper(out, kind, &item.children);
        }
    }
    out.push_str(&format!("</{tag}>\n"));
}
