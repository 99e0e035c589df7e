pub mod codec;
pub mod logic;
pub mod map_pin;
pub mod property;
pub mod store;

pub use codec::{decode, encode, ParseError};
pub use property::PropertyRecord;
pub use store::{FilterCriteria, ListingStore};
