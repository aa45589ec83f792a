// Calendar drag-and-drop library
// Exports all modules for testing and reuse

pub mod dnd;
pub mod models;
pub mod services;
pub mod utils;
