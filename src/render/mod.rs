pub mod block_renderer;
pub mod gif_loader;
pub mod scaler;
