use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PagerError {
    #[error("page size must be greater than zero")]
    ZeroPageSize,
    #[error("at least one page button must be visible")]
    ZeroMaxVisible,
}
