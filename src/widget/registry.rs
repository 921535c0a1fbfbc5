// Process-wide tag -> factory table, the host's way of instantiating widgets by name.
use super::counter_widget::SoberCounter;
use super::{SOBER_COUNTER_TAG, Widget};
use crate::counter::{CounterError, CounterResult};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

pub type WidgetFactory = fn() -> CounterResult<Box<dyn Widget>>;

static REGISTRY: Lazy<Mutex<HashMap<&'static str, WidgetFactory>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

fn registry() -> MutexGuard<'static, HashMap<&'static str, WidgetFactory>> {
    REGISTRY.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Registers `factory` under `tag`. Each tag can be registered once.
pub fn register(tag: &'static str, factory: WidgetFactory) -> CounterResult<()> {
    let mut table = registry();
    if table.contains_key(tag) {
        return Err(CounterError::DuplicateWidget {
            tag: tag.to_string(),
        });
    }
    table.insert(tag, factory);
    log::debug!("Registered widget '{}'", tag);
    Ok(())
}

pub fn is_registered(tag: &str) -> bool {
    registry().contains_key(tag)
}

/// Builds a fresh, unmounted instance of the widget registered under `tag`.
pub fn create(tag: &str) -> CounterResult<Box<dyn Widget>> {
    // Copy the fn pointer out so the factory runs without the lock held
    let factory = registry()
        .get(tag)
        .copied()
        .ok_or_else(|| CounterError::UnknownWidget {
            tag: tag.to_string(),
        })?;
    factory()
}

fn sober_counter_factory() -> CounterResult<Box<dyn Widget>> {
    Ok(Box::new(SoberCounter::new()?))
}

/// Registers the built-in widgets. Safe to call more than once.
pub fn register_builtin_widgets() {
    registry()
        .entry(SOBER_COUNTER_TAG)
        .or_insert(sober_counter_factory as WidgetFactory);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failing_factory() -> CounterResult<Box<dyn Widget>> {
        Err(CounterError::UnknownWidget {
            tag: "inner".to_string(),
        })
    }

    #[test]
    fn test_builtin_registration_is_idempotent() {
        register_builtin_widgets();
        register_builtin_widgets();
        assert!(is_registered(SOBER_COUNTER_TAG));
    }

    #[test]
    fn test_create_builtin_is_unmounted() {
        register_builtin_widgets();
        let widget = create(SOBER_COUNTER_TAG).unwrap();
        assert_eq!(widget.tag(), SOBER_COUNTER_TAG);
        assert!(!widget.is_mounted());
    }

    #[test]
    fn test_unknown_tag() {
        let err = create("no-such-widget").err().unwrap();
        assert!(matches!(err, CounterError::UnknownWidget { ref tag } if tag == "no-such-widget"));
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        register("registry-test-duplicate", failing_factory).unwrap();
        let err = register("registry-test-duplicate", failing_factory).unwrap_err();
        assert!(matches!(err, CounterError::DuplicateWidget { .. }));
    }

    #[test]
    fn test_factory_error_propagates() {
        register("registry-test-failing", failing_factory).unwrap();
        assert!(matches!(
            create("registry-test-failing"),
            Err(CounterError::UnknownWidget { ref tag }) if tag == "inner"
        ));
    }
}
