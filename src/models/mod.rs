// Data models and query parameters

pub mod user;
pub mod training;
pub mod training_feedback;

pub use user::*;
pub use training::*;
pub use training_feedback::*;
