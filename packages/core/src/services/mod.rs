//! Selection Logic
//!
//! The two pure pieces of business logic the HTTP layer composes with the
//! store:
//!
//! - [`paging`] - fixed-size pagination over an ordered result list
//! - [`quiz`] - uniformly-random unseen-question selection

pub mod paging;
pub mod quiz;

pub use paging::{paginate, parse_page, QUESTIONS_PER_PAGE};
pub use quiz::{pick_unseen, ALL_CATEGORIES};
