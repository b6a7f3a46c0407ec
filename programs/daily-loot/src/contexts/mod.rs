pub mod admin;
pub mod configure;
pub mod items;
pub mod claim;

pub use admin::*;
pub use configure::*;
pub use items::*;
pub use claim::*;
