//! Helpers for optional values.
//!
//! ## Summary
//! Read an `Option<&T>` without caring whether it is present, falling back to
//! the type's default or to a caller-supplied value.

/// Returns a fresh owned reference holding `value`.
#[must_use]
pub fn ptr<T>(value: T) -> Box<T> {
    Box::new(value)
}

/// Returns a copy of the referenced value, or `T::default()` if absent.
#[must_use]
pub fn deref_or_default<T>(value: Option<&T>) -> T
where
    T: Clone + Default,
{
    value.cloned().unwrap_or_default()
}

/// Returns a copy of the referenced value, or `fallback` if absent.
#[must_use]
pub fn deref_or<T>(value: Option<&T>, fallback: T) -> T
where
    T: Clone,
{
    value.cloned().unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    struct Sample {
        name: String,
    }

    #[test]
    fn test_ptr_holds_copy() {
        let original = String::from("test");
        let boxed = ptr(original.clone());
        assert_eq!(*boxed, original);
    }

    #[test]
    fn test_ptr_is_fresh() {
        let first = ptr(1_u8);
        let mut second = ptr(1_u8);
        *second += 1;
        assert_eq!(*first, 1);
        assert_eq!(*second, 2);
    }

    #[test]
    fn test_deref_or_default_present() {
        let sample = Sample {
            name: "test".to_owned(),
        };
        assert_eq!(deref_or_default(Some(&sample)), sample);
        assert_eq!(deref_or_default(Some(&"test".to_owned())), "test");
    }

    #[test]
    fn test_deref_or_default_absent() {
        assert_eq!(deref_or_default(None::<&String>), "");
        assert_eq!(deref_or_default(None::<&i64>), 0);
        assert_eq!(deref_or_default(None::<&Sample>), Sample::default());
    }

    #[test]
    fn test_deref_or_default_through_box() {
        let boxed = Some(ptr(42_u32));
        assert_eq!(deref_or_default(boxed.as_deref()), 42);
    }

    #[test]
    fn test_deref_or() {
        let value = "test".to_owned();
        assert_eq!(deref_or(Some(&value), "fallback".to_owned()), "test");
        assert_eq!(deref_or(None, "fallback".to_owned()), "fallback");
    }
}
