pub mod actors;
pub mod auth;
pub mod health;
pub mod movies;
pub mod ratings;
pub mod reviews;
pub mod users;
