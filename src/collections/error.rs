use derive_more::{Display, Error, From, IsVariant, TryInto};

/// Returned when a lookup in a [`HashTable`](super::hash::HashTable) probes every candidate slot
/// without finding the requested key.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("key '{key}' not found")]
pub struct KeyNotFound {
    pub key: String,
}

impl KeyNotFound {
    pub fn new(key: impl ToString) -> KeyNotFound {
        KeyNotFound {
            key: key.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("stack is empty")]
pub struct EmptyStack;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("queue is empty")]
pub struct EmptyQueue;

/// Any error that a collection in this crate can produce.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum CollectionError {
    KeyNotFound(KeyNotFound),
    EmptyStack(EmptyStack),
    EmptyQueue(EmptyQueue),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(KeyNotFound::new("apple").to_string(), "key 'apple' not found");
        assert_eq!(KeyNotFound::new(-3).to_string(), "key '-3' not found");
        assert_eq!(EmptyStack.to_string(), "stack is empty");
        assert_eq!(EmptyQueue.to_string(), "queue is empty");
    }

    #[test]
    fn test_umbrella_conversion() {
        let error = CollectionError::from(EmptyQueue);
        assert!(error.is_empty_queue());
        assert_eq!(
            error.to_string(), "queue is empty",
            "CollectionError should display the wrapped error."
        );

        let error = CollectionError::from(KeyNotFound::new(7));
        let inner: KeyNotFound = error.try_into().expect("variant should round-trip");
        assert_eq!(inner.key, "7");
    }
}
