pub mod icons;

pub use icons::{resolve_os_icon, Glyph};
