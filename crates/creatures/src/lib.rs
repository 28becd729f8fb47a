mod animal;
pub use animal::*;

mod named;
pub use named::Named;
