/// Admin request to remove the entry at `index` (insertion order).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteFeedback {
    pub index: i64,
    pub delete_key: String,
}
