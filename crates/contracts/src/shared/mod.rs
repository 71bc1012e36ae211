pub mod badge;
pub mod tabs;
