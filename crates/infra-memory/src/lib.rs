// Jobboard Infrastructure - In-Memory Adapter
// Implements: JobPostRepository

mod job_post_repository;

pub use job_post_repository::InMemoryJobPostRepository;
