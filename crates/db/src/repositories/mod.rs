//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod banner_repo;
pub mod booking_repo;
pub mod business_info_repo;
pub mod contact_repo;
pub mod gallery_repo;
pub mod hero_settings_repo;
pub mod option_repo;
pub mod service_repo;
pub mod session_repo;
pub mod user_repo;

pub use banner_repo::BannerRepo;
pub use booking_repo::BookingRepo;
pub use business_info_repo::BusinessInfoRepo;
pub use contact_repo::ContactRepo;
pub use gallery_repo::GalleryRepo;
pub use hero_settings_repo::HeroSettingsRepo;
pub use option_repo::{OptionKind, OptionRepo};
pub use service_repo::ServiceRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;
