//! Styling of harness output

mod color;

pub use color::Palette;
pub use color::Styled;

pub use goldbox_macros::eprintln;
