pub mod detail_window;
pub mod keybindings;
pub mod schematic_view;

pub use detail_window::*;
pub use keybindings::*;
pub use schematic_view::*;
