pub mod course;
pub mod selected_class;
pub mod user;
pub use course::Course;
pub use selected_class::SelectedClass;
pub use user::{User, UserRole};
