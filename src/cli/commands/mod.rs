pub mod check;
pub mod is_prime;

pub use check::*;
pub use is_prime::*;
