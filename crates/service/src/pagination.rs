//! Pagination inputs for list operations.

use crate::errors::ServiceError;

/// 1-based page request as supplied by callers.
#[derive(Clone, Copy, Debug)]
pub struct PageRequest {
    pub page_number: i64,
    pub page_size: i64,
}

impl PageRequest {
    pub fn new(page_number: i64, page_size: i64) -> Self {
        Self { page_number, page_size }
    }

    /// Convert to a zero-based page index plus page size for the repository.
    /// Non-positive values are rejected, not clamped.
    pub fn to_offsets(self) -> Result<(u64, u64), ServiceError> {
        if self.page_number <= 0 || self.page_size <= 0 {
            return Err(ServiceError::validation("paging", "invalid parameters for paging"));
        }
        Ok(((self.page_number - 1) as u64, self.page_size as u64))
    }
}

impl Default for PageRequest {
    fn default() -> Self { Self { page_number: 1, page_size: 20 } }
}

#[cfg(test)]
mod tests {
    use super::PageRequest;

    #[test]
    fn rejects_zero_and_negative_values() {
        assert!(PageRequest::new(0, 10).to_offsets().is_err());
        assert!(PageRequest::new(1, 0).to_offsets().is_err());
        assert!(PageRequest::new(-1, 10).to_offsets().is_err());
        assert!(PageRequest::new(1, -5).to_offsets().is_err());
    }

    #[test]
    fn converts_to_zero_based_index() {
        let (idx, per) = PageRequest::new(3, 25).to_offsets().unwrap();
        assert_eq!(idx, 2);
        assert_eq!(per, 25);
    }

    #[test]
    fn default_values_are_sane() {
        let d = PageRequest::default();
        assert_eq!(d.page_number, 1);
        assert_eq!(d.page_size, 20);
    }
}
