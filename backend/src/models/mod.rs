pub mod alert;
pub mod coop;
pub mod device;
pub mod macros;
pub mod view;

pub use alert::*;
pub use coop::*;
pub use device::*;
pub use view::*;
