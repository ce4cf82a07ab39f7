pub mod actors;
pub mod health;
pub mod schemas;
