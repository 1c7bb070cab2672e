pub mod classes;

pub mod departments;

pub mod subjects;

pub mod system;

pub mod users;

pub use classes::configure_classes_routes;
pub use departments::configure_departments_routes;
pub use subjects::configure_subjects_routes;
pub use system::configure_system_routes;
pub use users::configure_user_routes;
