// Query layer over the connection pool

pub mod user_service;
pub mod training_service;
pub mod training_feedback_service;

pub use user_service::UserService;
pub use training_service::TrainingService;
pub use training_feedback_service::TrainingFeedbackService;
