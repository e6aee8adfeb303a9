pub mod commands {
    pub mod submit_feedback;
}
pub mod entries;
pub mod state;
