//! Actions produced by components and consumed by the controller

/// Stable identity for a UI component.
///
/// Unique over all non-equivalent component instances, and stable for the
/// lifetime of the component (a tile's id never changes as its cell value
/// changes).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(String);

impl ComponentId {
    pub fn new(id: impl Into<String>) -> Self {
        ComponentId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ComponentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ComponentId {
    fn from(value: &str) -> Self {
        ComponentId(value.to_string())
    }
}

/// What a component asks the controller to do in response to an event.
///
/// Produced by components inside event dispatch; consumed exclusively by the
/// controller state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A component (tile or arrow) was picked
    Select(ComponentId),
    /// Abandon the current selection or word entry
    Cancel,
    /// Commit the current word entry
    Submit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_id_equality() {
        assert_eq!(ComponentId::from("tile-0-0"), ComponentId::new("tile-0-0"));
        assert_ne!(ComponentId::from("tile-0-0"), ComponentId::from("tile-0-1"));
    }

    #[test]
    fn test_action_carries_component() {
        let action = Action::Select(ComponentId::from("arrow-1"));
        match action {
            Action::Select(id) => assert_eq!(id.as_str(), "arrow-1"),
            _ => panic!("expected select"),
        }
    }
}
