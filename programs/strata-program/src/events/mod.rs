pub use lev_event::*;
pub use price_update_event::*;
pub use stable_event::*;

pub mod lev_event;
pub mod price_update_event;
pub mod stable_event;
