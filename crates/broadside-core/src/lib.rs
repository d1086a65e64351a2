pub mod broadcast;
pub mod error;
pub mod extract;
pub mod target;

pub use broadcast::{BroadcastLog, BroadcastTransaction};
pub use error::{Error, Result};
pub use extract::{extract_addresses, to_json, AddressRecord};
pub use target::Target;
