//! Command implementations for lazypath

pub mod demo;
pub mod dispatch;
pub mod route;
