mod notification;
pub use notification::*;

mod push;
pub use push::*;
