mod home;
mod not_found;
mod section;

pub use home::Home;
pub use not_found::NotFound;
pub use section::Section;
