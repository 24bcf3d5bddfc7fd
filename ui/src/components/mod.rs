// Core components
pub mod common;

// Display components
pub mod outline;
