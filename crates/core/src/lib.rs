//! Domain logic for the vitrina catalog service.
//!
//! Everything in this crate is pure bytes-in/bytes-out: image processing,
//! captcha challenge generation, validation rules, and SEO document
//! builders. Database and network I/O live in `vitrina-db` and
//! `vitrina-api`.

pub mod captcha;
pub mod contact;
pub mod error;
pub mod image;
pub mod seo;
pub mod types;
