pub mod app_reducer;
pub mod navigation_reducer;
pub mod settings_reducer;
pub mod theme_reducer;

pub use app_reducer::{reduce, reduce_raw};
