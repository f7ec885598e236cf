//! Property access without reflection
//!
//! Rules look up properties by name. [`PropertySource`] is the single seam
//! for that lookup: dynamic documents (`serde_json::Value`, maps) implement
//! it directly, and typed structs get it through a [`Fields`] descriptor
//! table of named getters.
//!
//! # Examples
//!
//! ```rust,ignore
//! use fieldcheck_validator::foundation::{Fields, PropertySource};
//!
//! struct Signup { email: String, age: u32 }
//!
//! let fields = Fields::new()
//!     .field("email", |s: &Signup| s.email.clone())
//!     .field("age", |s: &Signup| s.age);
//!
//! let signup = Signup { email: "a@b.io".into(), age: 30 };
//! let record = fields.bind(&signup);
//! assert_eq!(record.property("age").unwrap().as_u64(), Some(30));
//! ```

use std::borrow::Cow;
use std::fmt;

use indexmap::IndexMap;
use serde_json::{Map, Value};

// ============================================================================
// PROPERTY SOURCE
// ============================================================================

/// An object whose properties can be read by name.
///
/// Returning `None` means the property does not exist; the engine then
/// evaluates rules against `null`.
pub trait PropertySource {
    /// Reads a property by name.
    fn property(&self, name: &str) -> Option<Cow<'_, Value>>;
}

impl PropertySource for Value {
    fn property(&self, name: &str) -> Option<Cow<'_, Value>> {
        match self {
            Value::Object(map) => map.get(name).map(Cow::Borrowed),
            _ => None,
        }
    }
}

impl PropertySource for Map<String, Value> {
    fn property(&self, name: &str) -> Option<Cow<'_, Value>> {
        self.get(name).map(Cow::Borrowed)
    }
}

impl PropertySource for IndexMap<String, Value> {
    fn property(&self, name: &str) -> Option<Cow<'_, Value>> {
        self.get(name).map(Cow::Borrowed)
    }
}

impl<S: PropertySource + ?Sized> PropertySource for &S {
    fn property(&self, name: &str) -> Option<Cow<'_, Value>> {
        (**self).property(name)
    }
}

// ============================================================================
// FIELD DESCRIPTORS
// ============================================================================

type Getter<T> = Box<dyn Fn(&T) -> Value + Send + Sync>;

fn erase<T, V, F>(getter: F) -> Getter<T>
where
    T: 'static,
    F: Fn(&T) -> V + Send + Sync + 'static,
    V: Into<Value> + 'static,
{
    Box::new(move |object: &T| getter(object).into())
}

/// A table mapping property names to typed getters for `T`.
///
/// Build it once and [`bind`](Self::bind) it to each instance to validate.
pub struct Fields<T> {
    getters: IndexMap<Cow<'static, str>, Getter<T>>,
}

impl<T> Fields<T> {
    /// Creates an empty descriptor table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            getters: IndexMap::new(),
        }
    }

    /// Registers a getter for `name`. A later registration replaces an earlier one.
    #[must_use = "builder methods must be chained or built"]
    pub fn field<V, F>(mut self, name: impl Into<Cow<'static, str>>, getter: F) -> Self
    where
        T: 'static,
        F: Fn(&T) -> V + Send + Sync + 'static,
        V: Into<Value> + 'static,
    {
        self.getters.insert(name.into(), erase(getter));
        self
    }

    /// Names of the registered properties in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.getters.keys().map(AsRef::as_ref)
    }

    /// Returns true if a getter is registered for `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.getters.contains_key(name)
    }

    /// Views `object` through this table.
    pub fn bind<'a>(&'a self, object: &'a T) -> Record<'a, T> {
        Record {
            fields: self,
            object,
        }
    }

    /// Views every element of `items` through this table.
    pub fn bind_all<'a>(&'a self, items: &'a [T]) -> Vec<Record<'a, T>> {
        items.iter().map(|item| self.bind(item)).collect()
    }
}

impl<T> Default for Fields<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Fields<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fields")
            .field("names", &self.getters.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// A typed object viewed through its [`Fields`] table.
pub struct Record<'a, T> {
    fields: &'a Fields<T>,
    object: &'a T,
}

impl<'a, T> Record<'a, T> {
    /// The underlying object.
    pub fn object(&self) -> &'a T {
        self.object
    }
}

impl<T> Clone for Record<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Record<'_, T> {}

impl<T> PropertySource for Record<'_, T> {
    fn property(&self, name: &str) -> Option<Cow<'_, Value>> {
        self.fields
            .getters
            .get(name)
            .map(|getter| Cow::Owned(getter(self.object)))
    }
}

impl<T: fmt::Debug> fmt::Debug for Record<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Record").field(self.object).finish()
    }
}

impl<T: serde::Serialize> serde::Serialize for Record<'_, T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.object.serialize(serializer)
    }
}

impl<T: PartialEq> PartialEq for Record<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.object == other.object
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, PartialEq)]
    struct Signup {
        email: String,
        age: u32,
        tags: Vec<String>,
    }

    fn signup_fields() -> Fields<Signup> {
        Fields::new()
            .field("email", |s: &Signup| s.email.clone())
            .field("age", |s: &Signup| s.age)
            .field("tags", |s: &Signup| s.tags.clone())
    }

    #[test]
    fn json_object_lookup() {
        let doc = json!({"name": "Ada"});
        assert_eq!(doc.property("name").as_deref(), Some(&json!("Ada")));
        assert!(doc.property("missing").is_none());
    }

    #[test]
    fn non_object_json_has_no_properties() {
        assert!(json!([1, 2]).property("0").is_none());
        assert!(json!("text").property("len").is_none());
    }

    #[test]
    fn map_lookup() {
        let mut map = Map::new();
        map.insert("a".to_owned(), json!(1));
        assert_eq!(map.property("a").as_deref(), Some(&json!(1)));

        let mut ordered = IndexMap::new();
        ordered.insert("b".to_owned(), json!(true));
        assert_eq!(ordered.property("b").as_deref(), Some(&json!(true)));
    }

    #[test]
    fn typed_fields_convert_to_json() {
        let fields = signup_fields();
        let signup = Signup {
            email: "ada@example.com".to_owned(),
            age: 36,
            tags: vec!["math".to_owned()],
        };
        let record = fields.bind(&signup);

        assert_eq!(record.property("email").as_deref(), Some(&json!("ada@example.com")));
        assert_eq!(record.property("age").as_deref(), Some(&json!(36)));
        assert_eq!(record.property("tags").as_deref(), Some(&json!(["math"])));
        assert!(record.property("password").is_none());
        assert_eq!(record.object(), &signup);
    }

    #[test]
    fn names_keep_registration_order() {
        let fields = signup_fields();
        assert_eq!(fields.names().collect::<Vec<_>>(), ["email", "age", "tags"]);
        assert!(fields.contains("age"));
        assert!(!fields.contains("name"));
    }

    #[test]
    fn bind_all_preserves_order() {
        let fields = signup_fields();
        let items = vec![
            Signup {
                email: "a@x.io".to_owned(),
                age: 1,
                tags: vec![],
            },
            Signup {
                email: "b@x.io".to_owned(),
                age: 2,
                tags: vec![],
            },
        ];
        let records = fields.bind_all(&items);
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].property("age").as_deref(), Some(&json!(2)));
    }
}
