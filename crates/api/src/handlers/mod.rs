//! HTTP request handlers.

pub mod class_type;
pub mod gym;
pub mod room;
