// UI and formatting module

pub mod display;
pub mod presenter;

// Re-export commonly used items for cleaner imports
pub use display::{DisplayList, DisplayRow, RowKind, Span};
pub use presenter::{print, render};
