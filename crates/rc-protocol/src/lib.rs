pub mod feedback;
pub mod instruction;
pub mod payload;
pub mod session;

pub use feedback::*;
pub use instruction::*;
pub use payload::*;
pub use session::*;
