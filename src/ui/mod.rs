pub mod components;
pub mod tasks;
