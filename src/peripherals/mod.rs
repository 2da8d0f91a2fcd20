pub mod analog;
pub mod clock;
pub mod serial;

pub use analog::*;
pub use clock::*;
pub use serial::*;
