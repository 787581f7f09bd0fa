// Port Layer - Interfaces for external dependencies

pub mod job_post_repository;

// Re-exports
pub use job_post_repository::JobPostRepository;

#[cfg(test)]
pub use job_post_repository::MockJobPostRepository;
