//! Page components for the portfolio.

mod greeting;
mod home;

pub use greeting::Greeting;
pub use home::Home;
