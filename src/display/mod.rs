mod listener;
mod values;

pub use listener::display_listener;
pub use values::DisplayValues;

#[cfg(test)]
pub use values::{format_timestamp, progress_percent};
