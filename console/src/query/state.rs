use std::sync::Arc;

use crate::core::error::ApiError;

/// Observable state of one cached read.
#[derive(Debug)]
pub enum QueryState<T> {
    /// No fetch attempted, either because nothing asked yet or because the
    /// query is disabled (e.g. its required id is missing).
    Idle,
    /// A request for this key is in flight.
    Pending,
    /// The most recent request finished.
    Resolved(Result<Arc<T>, ApiError>),
}

impl<T> QueryState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, QueryState::Idle)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, QueryState::Pending)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, QueryState::Resolved(Ok(_)))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, QueryState::Resolved(Err(_)))
    }

    pub fn data(&self) -> Option<&Arc<T>> {
        match self {
            QueryState::Resolved(Ok(data)) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            QueryState::Resolved(Err(err)) => Some(err),
            _ => None,
        }
    }
}

// Manual impl: cloning only bumps the Arc, so T itself need not be Clone.
impl<T> Clone for QueryState<T> {
    fn clone(&self) -> Self {
        match self {
            QueryState::Idle => QueryState::Idle,
            QueryState::Pending => QueryState::Pending,
            QueryState::Resolved(outcome) => QueryState::Resolved(outcome.clone()),
        }
    }
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        QueryState::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_predicates() {
        let idle: QueryState<u32> = QueryState::default();
        assert!(idle.is_idle());
        assert!(idle.data().is_none());

        let ok = QueryState::Resolved(Ok(Arc::new(7)));
        assert!(ok.is_success());
        assert_eq!(ok.data().map(|d| **d), Some(7));

        let err: QueryState<u32> = QueryState::Resolved(Err(ApiError::Network("down".into())));
        assert!(err.is_error());
        assert_eq!(err.error(), Some(&ApiError::Network("down".into())));
        assert!(err.clone().is_error());
    }
}
