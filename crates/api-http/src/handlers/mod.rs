//! Request handlers

pub mod job_posts;
pub mod probes;
