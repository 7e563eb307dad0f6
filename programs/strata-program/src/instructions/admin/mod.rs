pub use emergency_pause::*;
pub use initialize::*;
pub use sync_exchange_rate::*;
pub use update_fees::*;
pub use update_parameters::*;
pub use update_prices::*;
pub use update_treasury::*;

pub mod emergency_pause;
pub mod initialize;
pub mod sync_exchange_rate;
pub mod update_fees;
pub mod update_parameters;
pub mod update_prices;
pub mod update_treasury;
