pub mod classes;
pub mod departments;
pub mod subjects;
pub mod system;
pub mod users;

pub use classes::ClassService;
pub use departments::DepartmentService;
pub use subjects::SubjectService;
pub use system::SystemService;
pub use users::UserService;
