/// API route modules
pub mod health;
pub mod player;
pub mod songs;
pub mod web;
