pub mod category_handlers;
pub mod country_handlers;
pub mod handlers;
pub mod owner_handlers;
pub mod pokemon_handlers;
pub mod review_handlers;
pub mod reviewer_handlers;
pub mod routes;

pub use handlers::*;
pub use routes::*;
