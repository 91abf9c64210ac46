pub mod bulk;
pub mod info;
pub mod keygen;
pub mod transform;

pub use bulk::*;
pub use info::*;
pub use keygen::*;
pub use transform::*;
