//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod captcha_repo;
pub mod category_repo;
pub mod contact_repo;
pub mod photo_repo;
pub mod subcategory_repo;

pub use captcha_repo::CaptchaRepo;
pub use category_repo::CategoryRepo;
pub use contact_repo::ContactRepo;
pub use photo_repo::PhotoRepo;
pub use subcategory_repo::SubcategoryRepo;
