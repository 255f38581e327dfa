#![deny(clippy::all, clippy::pedantic)]

pub mod cache;
pub mod categories;
pub mod health;
pub mod newsletter;
pub mod posts;
