//! Fixture generation.
//!
//! A [`ContentType`] names what a fixture contains; [`FixtureBuilder`] turns
//! it into a [`Document`](crate::model::Document) tree and writes the
//! rendered bytes. [`FixturePlan`] lists the files of a batch and
//! [`generate_all`] writes them in order.

mod batch;
mod builder;
mod content;
mod content_type;
pub mod samples;

pub use batch::{
    generate_all, generate_all_with, BatchReport, FixtureJob, FixturePlan, FixtureSource,
};
pub use builder::{FixtureBuilder, GeneratedFile};
pub use content::build_tree;
pub use content_type::ContentType;
