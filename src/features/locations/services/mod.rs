mod location_store;

pub use location_store::{decode_list, encode_list, LocationStore};
