pub mod cable;
pub mod config;
pub mod constants;
pub mod grid;
pub mod hover;
pub mod network;
pub mod palette;
pub mod preference;
pub mod reveal;

pub use cable::*;
pub use config::*;
pub use grid::*;
pub use hover::*;
pub use network::*;
pub use palette::*;
pub use preference::*;
pub use reveal::*;
