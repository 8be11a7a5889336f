pub mod error;
pub mod schema;
pub mod store;

pub use error::*;
pub use schema::*;
pub use store::*;
