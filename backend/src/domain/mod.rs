//! # Domain Module
//!
//! The two course demos and the types they are built on.
//!
//! - **models::account**: single-balance account whose overdraws are clamped
//!   and reported on an error channel
//! - **models::integer**: wrapped `i32` whose division returns an error on a
//!   zero divisor
//! - **account_demo**: scripted walk-through of the account
//! - **division_demo**: catches the division error and always prints a
//!   closing line
//!
//! The two demos handle failure differently on purpose. An overdraw is
//! absorbed by the account and never reaches the caller, while a zero divisor
//! is handed back as an `Err` the caller has to deal with.

pub mod account_demo;
pub mod division_demo;
pub mod models;

pub use account_demo::*;
pub use division_demo::*;
pub use models::*;
