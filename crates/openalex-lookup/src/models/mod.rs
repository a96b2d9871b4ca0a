//! Data models for OpenAlex entities.
//!
//! Records deserialize from the raw wire objects through private
//! `*Record` structs, so nested fields (`summary_stats.h_index`,
//! `primary_location.source`) flatten into plain, owned values.

mod author;
mod enums;
mod response;
mod work;

pub use author::{Author, short_id};
pub use enums::{ResponseFormat, WorkSort};
pub use response::{Meta, Page, parse_author, parse_authors, parse_page, parse_works};
pub use work::Work;
