// API routes and handlers

pub mod error;
pub mod health;
pub mod params;
pub mod routes;
pub mod trainings;
pub mod training_feedback;
pub mod users;
