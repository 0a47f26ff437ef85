pub mod hover;
pub mod mode;
pub mod pointer;

pub use hover::wire_hover_effects;
pub use mode::wire_mode_switch;
pub use pointer::{wire_pointer_handlers, PointerWiring};
