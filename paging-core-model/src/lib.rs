pub mod builder;
pub mod models;
pub mod paginate;

pub use builder::*;
pub use models::*;
pub use paginate::*;
