pub mod account;
pub mod integer;

pub use account::{Account, ErrorChannel, StderrChannel, INSUFFICIENT_FUNDS_MESSAGE};
pub use integer::{ArithmeticError, Integer};
