use std::fmt::Display;

/// What a data-backed component is showing.
///
/// Screens start in `Loading`, move to `Loaded` or `Failed` when the request
/// resolves, and go back to `Loading` on retry or after a mutation re-lists.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn from_result<E: Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Loaded(value),
            Err(err) => Self::Failed(err.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        Self::Loading
    }
}

#[cfg(test)]
mod tests {
    use super::LoadState;
    use crate::store::StoreError;

    #[test]
    fn failure_keeps_the_error_text() {
        let state: LoadState<Vec<u8>> =
            LoadState::from_result(Err(StoreError::Transport("offline".to_string())));
        assert_eq!(state.error(), Some("store request failed: offline"));
        assert!(state.loaded().is_none());
    }

    #[test]
    fn starts_loading() {
        let state = LoadState::<()>::default();
        assert!(state.is_loading());
        assert_eq!(LoadState::from_result::<String>(Ok(3)).loaded(), Some(&3));
    }
}
