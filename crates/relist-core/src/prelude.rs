pub use crate::effects::{Dispose, subscription};
pub use crate::error::ListError;
pub use crate::geometry::{Rect, Size, Vec2};
pub use crate::signal::{Signal, SubId, signal};
