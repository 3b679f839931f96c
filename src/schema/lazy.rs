//! Deferred and alternative factories: `lazy` for recursive shapes and
//! `union` for a plain choice between validators.

use std::sync::{Arc, OnceLock};

use super::Schema;
use crate::validator::{first_match, Alternatives, Validator};

impl Schema {
    /// Defers building a validator until its first use.
    ///
    /// `build` runs at most once; the result is shared by every later
    /// check. This is how a shape refers to itself.
    ///
    /// ```rust
    /// use conform::{Schema, Shape, Validator, Value};
    /// use indexmap::IndexMap;
    /// use serde_json::json;
    ///
    /// fn node() -> Validator<IndexMap<String, Value>> {
    ///     Schema::object(
    ///         Shape::new()
    ///             .field("name", Schema::string())
    ///             .field("children", Schema::array(Schema::lazy(node))),
    ///     )
    /// }
    ///
    /// let tree = Value::from(json!({
    ///     "name": "root",
    ///     "children": [{"name": "leaf", "children": []}]
    /// }));
    /// assert!(node().check(&tree).is_ok());
    ///
    /// let broken = Value::from(json!({
    ///     "name": "root",
    ///     "children": [{"name": 1, "children": []}]
    /// }));
    /// assert_eq!(node().check(&broken).unwrap_err().path.to_string(), "children[0].name");
    /// ```
    #[track_caller]
    pub fn lazy<T, F>(build: F) -> Validator<T>
    where
        T: 'static,
        F: Fn() -> Validator<T> + Send + Sync + 'static,
    {
        let cell: Arc<OnceLock<Validator<T>>> = Arc::new(OnceLock::new());
        Validator::new(move |value, path| cell.get_or_init(&build).check_at(value, path))
    }

    /// Accepts the first of `alternatives` that succeeds.
    ///
    /// ```rust
    /// use conform::{Schema, Value};
    ///
    /// let id = Schema::union([Schema::string().erase(), Schema::number().erase()]);
    ///
    /// assert!(id.check(&Value::from("a1")).is_ok());
    /// assert_eq!(id.check(&Value::Null).unwrap_err().message, "no valid alternative");
    /// ```
    #[track_caller]
    pub fn union<T: 'static>(alternatives: impl Alternatives<T>) -> Validator<T> {
        first_match(alternatives.into_alternatives())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::value::Value;
    use serde_json::json;

    static BUILDS: AtomicUsize = AtomicUsize::new(0);

    fn counted() -> Validator<f64> {
        BUILDS.fetch_add(1, Ordering::SeqCst);
        Schema::number()
    }

    #[test]
    fn test_lazy_builds_once() {
        let validator = Schema::lazy(counted);
        assert_eq!(BUILDS.load(Ordering::SeqCst), 0);

        assert!(validator.check(&Value::from(1)).is_ok());
        assert!(validator.check(&Value::from("x")).is_err());
        assert_eq!(BUILDS.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_union_tries_in_order() {
        let validator = Schema::union(vec![
            Schema::string().map(|_| "text"),
            Schema::unknown().map(|_| "anything"),
        ]);
        assert_eq!(validator.check(&Value::from("x")).unwrap(), "text");
        assert_eq!(validator.check(&Value::from(json!([]))).unwrap(), "anything");
    }

    #[test]
    fn test_union_failure_code() {
        let validator = Schema::union(Schema::string());
        let error = validator.check(&Value::from(1)).unwrap_err();
        assert_eq!(error.code, "no_valid_alternative");
    }
}
