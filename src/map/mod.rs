pub mod log_renderer;
mod renderer;
mod session;

pub use renderer::MapRenderer;
pub use session::MapSession;

#[cfg(test)]
pub use renderer::recording;
