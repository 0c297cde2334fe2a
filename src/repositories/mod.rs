pub mod course_repository;
pub mod selected_class_repository;
pub mod user_repository;

pub use course_repository::{CourseRepository, MongoCourseRepository};
pub use selected_class_repository::{MongoSelectedClassRepository, SelectedClassRepository};
pub use user_repository::{MongoUserRepository, UserRepository};

#[cfg(test)]
pub use user_repository::MockUserRepository;
