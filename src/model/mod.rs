pub mod category;
pub mod common;
pub mod country;
pub mod owner;
pub mod pokemon;
pub mod review;
pub mod reviewer;

pub use category::*;
pub use common::*;
pub use country::*;
pub use owner::*;
pub use pokemon::*;
pub use review::*;
pub use reviewer::*;
