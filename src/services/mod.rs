pub mod course_service;
pub mod selected_class_service;
pub mod user_service;

pub use course_service::CourseService;
pub use selected_class_service::SelectedClassService;
pub use user_service::UserService;
