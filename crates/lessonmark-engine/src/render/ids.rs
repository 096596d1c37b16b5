/// Allocates copy-button ids from a monotonically increasing counter
/// scoped to one render pass.
///
/// Ids are positional, not content-derived: the same block sequence and
/// the same starting counter always produce the same ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    pub fn starting_at(next: u64) -> Self {
        Self { next }
    }

    pub fn next_code_id(&mut self) -> String {
        let id = format!("code-{}", self.next);
        self.next += 1;
        id
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_count_up_from_zero() {
        let mut ids = IdAllocator::new();
        assert_eq!(ids.next_code_id(), "code-0");
        assert_eq!(ids.next_code_id(), "code-1");
    }

    #[test]
    fn starting_value_is_respected() {
        let mut ids = IdAllocator::starting_at(7);
        assert_eq!(ids.next_code_id(), "code-7");
    }
}
