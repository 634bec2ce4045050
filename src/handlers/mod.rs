//! Handlers notified when a dashboard resolution is applied

pub mod console;

pub use console::ConsoleEventHandler;
