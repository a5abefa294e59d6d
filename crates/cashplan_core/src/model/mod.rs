mod cards;
mod events;
mod results;

pub use cards::{CardId, CardSet};
pub use events::{EventKind, UpcomingItem};
pub use results::{DayRecord, Projection};
