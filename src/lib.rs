pub mod catalog;
pub mod commands;
pub mod http;
pub mod page;
pub mod platform;
pub mod probe;
pub mod router;
pub mod runtime;
pub mod window;
