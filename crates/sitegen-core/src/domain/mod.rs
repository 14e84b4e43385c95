pub mod alumnus;
pub mod board;
pub mod contact;
pub mod image;
pub mod kind;
pub mod sponsor;
pub mod team;
pub mod url;

pub use alumnus::Alumnus;
pub use board::BoardMember;
pub use contact::ContactInfo;
pub use image::ImageStyle;
pub use kind::Domain;
pub use sponsor::Sponsor;
pub use team::Team;
pub use url::normalize_url;
