pub mod config;
mod check;
mod resolve;
mod route;
mod show;

pub use check::check;
pub use resolve::resolve;
pub use route::{ConsoleHost, route};
pub use show::{catalog, window};
