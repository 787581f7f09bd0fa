// Application Layer - Use Cases and Business Logic

pub mod job_board;

// Re-exports
pub use job_board::JobBoardService;
