// Job Post Domain Model

use serde::{Deserialize, Serialize};

/// Job post identifier (caller-supplied, not unique-enforced)
pub type PostId = i32;

/// Job Post Entity
///
/// Serialized with camelCase field names (`postId`, `postProfile`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPost {
    pub post_id: PostId,
    pub post_profile: String,
    pub post_desc: String,
    pub req_experience: i32,
    pub post_tech_stack: Vec<String>,
}

impl JobPost {
    /// Create a new job post
    ///
    /// # Arguments
    ///
    /// * `post_id` - Identifier supplied by the caller
    /// * `post_profile` - Role title, free text
    /// * `post_desc` - Description, free text
    /// * `req_experience` - Required years of experience (no range check)
    /// * `post_tech_stack` - Technology tags, order preserved
    pub fn new<I, S>(
        post_id: PostId,
        post_profile: impl Into<String>,
        post_desc: impl Into<String>,
        req_experience: i32,
        post_tech_stack: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            post_id,
            post_profile: post_profile.into(),
            post_desc: post_desc.into(),
            req_experience,
            post_tech_stack: post_tech_stack.into_iter().map(Into::into).collect(),
        }
    }

    /// Overwrite every field except `post_id` with the values from `other`
    pub fn apply_update(&mut self, other: JobPost) {
        self.post_profile = other.post_profile;
        self.post_desc = other.post_desc;
        self.req_experience = other.req_experience;
        self.post_tech_stack = other.post_tech_stack;
    }
}
