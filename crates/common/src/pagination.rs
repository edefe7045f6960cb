//! `limit`/`offset` pagination shared by the list endpoints.

/// Largest accepted `limit`.
pub const MAX_LIMIT: i64 = 100;

/// Optional page window. Absent `limit` means "everything after `offset`".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl Pagination {
    #[must_use]
    pub fn new(limit: Option<i64>, offset: Option<i64>) -> Self {
        Self { limit, offset }
    }

    /// Check `1 <= limit <= 100` and `offset >= 0`.
    ///
    /// # Errors
    ///
    /// Returns the message reported to the caller.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(limit) = self.limit {
            if !(1..=MAX_LIMIT).contains(&limit) {
                return Err(format!("limit must be between 1 and {MAX_LIMIT}"));
            }
        }
        if let Some(offset) = self.offset {
            if offset < 0 {
                return Err("offset must be 0 or greater".to_string());
            }
        }
        Ok(())
    }

    /// Apply the window to an already filtered sequence.
    pub fn apply<T>(&self, items: impl IntoIterator<Item = T>) -> Vec<T> {
        let offset = self
            .offset
            .and_then(|o| usize::try_from(o).ok())
            .unwrap_or(0);
        let limit = self
            .limit
            .and_then(|l| usize::try_from(l).ok())
            .unwrap_or(usize::MAX);

        items.into_iter().skip(offset).take(limit).collect()
    }
}
