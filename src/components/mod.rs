mod header;
pub mod icons;
mod scroll_top;

pub use header::Header;
pub use scroll_top::{ScrollProgress, ScrollTopButton};
