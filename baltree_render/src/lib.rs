pub mod layout;
pub mod printer;
pub mod theme;

pub use layout::*;
pub use printer::*;
pub use theme::*;
