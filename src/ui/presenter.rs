use crate::ui::display::{DisplayList, Span};
use colored::*;

fn paint(span: &Span) -> String {
    match span.color {
        Some(color) => span.text.as_str().color(color).to_string(),
        None => span.text.clone(),
    }
}

/// Renders the list as it is printed: a blank line, one
/// `"  {label}  {value}"` line per row, and a closing blank line.
pub fn render(list: &DisplayList) -> String {
    let mut out = String::from("\n");

    for row in list {
        let value: String = row.value.iter().map(paint).collect();
        out.push_str(&format!("  {}  {}\n", paint(&row.label), value));
    }

    out.push('\n');
    out
}

pub fn print(list: &DisplayList) {
    print!("{}", render(list));
}
