mod about;
mod gallery;
mod home;
mod layout;
mod websites;

pub use about::About;
pub use gallery::Gallery;
pub use home::Home;
pub use layout::SiteLayout;
pub use websites::Websites;
