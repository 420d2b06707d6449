//! Character cursor and position tracking

mod cursor;
mod position;

pub use cursor::CharCursor;
pub use position::Position;
