// Startup seed set for the registry

use super::JobPost;

/// The two postings every fresh registry starts with
pub fn default_posts() -> Vec<JobPost> {
    vec![
        JobPost::new(
            1,
            "Java developer",
            "Must have 2exp",
            2,
            ["Core Java", "J2EE", "Spring Boot", "Hibernate"],
        ),
        JobPost::new(2, "c developer", "Must have 2exp", 2, ["c", "assembly"]),
    ]
}
