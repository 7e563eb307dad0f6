pub use mint_lev::*;
pub use mint_stable::*;
pub use redeem_lev::*;
pub use redeem_stable::*;

pub mod mint_lev;
pub mod mint_stable;
pub mod redeem_lev;
pub mod redeem_stable;
