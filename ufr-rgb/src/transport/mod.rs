// ufr-rgb/src/transport/mod.rs

pub mod mock;
pub mod traits;
#[cfg(feature = "ufcoder")]
pub mod ufcoder;

pub use mock::MockTransport;
pub use traits::Transport;
#[cfg(feature = "ufcoder")]
pub use ufcoder::{OpenMode, UfCoderTransport};
