//! Display model: one row per fact, in output order.

use colored::Color;

/// A piece of text with an optional foreground color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub color: Option<Color>,
}

impl Span {
    pub fn plain<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            color: None,
        }
    }

    pub fn colored<S: Into<String>>(text: S, color: Color) -> Self {
        Self {
            text: text.into(),
            color: Some(color),
        }
    }
}

/// Which fact a row shows. Declaration order is output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RowKind {
    Identity,
    Os,
    CpuName,
    CpuUsage,
    Temperature,
    Battery,
    Session,
    Uptime,
    Memory,
    Disk,
    PrivateIp,
    PublicIp,
    Footer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub kind: RowKind,
    pub label: Span,
    pub value: Vec<Span>,
}

impl DisplayRow {
    pub fn new(kind: RowKind, label: Span, value: Vec<Span>) -> Self {
        Self { kind, label, value }
    }

    /// Value text without colors
    pub fn value_text(&self) -> String {
        self.value.iter().map(|span| span.text.as_str()).collect()
    }
}

/// Ordered rows for one run; insertion order is rendering order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayList {
    rows: Vec<DisplayRow>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, row: DisplayRow) {
        debug_assert!(
            self.rows.last().map_or(true, |last| last.kind < row.kind),
            "row {:?} pushed out of order",
            row.kind
        );
        self.rows.push(row);
    }

    /// Pushes a row only when its fact is present
    pub fn push_some(&mut self, row: Option<DisplayRow>) {
        if let Some(row) = row {
            self.push(row);
        }
    }

    pub fn rows(&self) -> &[DisplayRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn kinds(&self) -> Vec<RowKind> {
        self.rows.iter().map(|row| row.kind).collect()
    }

    pub fn get(&self, kind: RowKind) -> Option<&DisplayRow> {
        self.rows.iter().find(|row| row.kind == kind)
    }
}

impl<'a> IntoIterator for &'a DisplayList {
    type Item = &'a DisplayRow;
    type IntoIter = std::slice::Iter<'a, DisplayRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
