//! UI module - shared widgets and painters used by the page sections

pub mod components;
