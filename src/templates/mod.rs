pub mod components;
pub mod layouts;
pub mod pages;

// Re-export for convenience
pub use layouts::desktop::desktop_layout;
