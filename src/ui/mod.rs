pub mod cards;
pub mod messages;
