pub mod badge;
pub mod category;
pub mod error;
pub mod mode;
pub mod projection;

pub use badge::*;
pub use category::*;
pub use error::*;
pub use mode::*;
pub use projection::*;
