mod cursor;
mod grid;
mod index;

pub use cursor::MonthCursor;
pub use grid::{CalendarCell, GRID_CELLS, MonthGrid};
pub use index::DateIndex;
