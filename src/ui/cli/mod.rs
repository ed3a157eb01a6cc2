pub mod drivers;
pub mod render;
pub mod session;
pub mod wizard;

pub use session::Session;
