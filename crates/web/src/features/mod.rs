pub mod health;
pub mod lifts;
