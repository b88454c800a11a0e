//! Value Objects
//!
//! Immutable domain values, compared by value. Operations never mutate in
//! place; they return a new instance or an error.

pub mod code;
pub mod execution_period;
pub mod name;
pub mod price;
pub mod quantity;
pub mod status;
pub mod stock;

pub use code::Code;
pub use execution_period::ExecutionPeriod;
pub use name::Name;
pub use price::Price;
pub use quantity::Quantity;
pub use status::{OrderStatus, ALL_STATUSES};
pub use stock::Stock;
