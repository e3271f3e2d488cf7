pub mod locations;
pub mod search;
pub mod widget;
