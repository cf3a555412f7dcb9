mod courses;
mod dashboard;
mod decision;
mod landing;
mod login;
mod network;
mod profile;
mod wellness;

pub use courses::Courses;
pub use dashboard::Dashboard;
pub use decision::Decision;
pub use landing::Landing;
pub use login::Login;
pub use network::Network;
pub use profile::Profile;
pub use wellness::Wellness;
