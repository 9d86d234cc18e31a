pub mod actor;
pub mod genre;
pub mod movie;
pub mod rating;
pub mod review;
pub mod session;
pub mod user;
