pub use orientation::Orientation;
pub use site::Site;
pub use span::{Flanks, Span};

mod orientation;
mod site;
mod span;
