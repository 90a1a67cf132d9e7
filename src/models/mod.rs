pub mod event;
pub mod suggestion;

pub use event::*;
pub use suggestion::*;
