use chrono::{DateTime, Utc};

/// A value that can live in a keyed store.
///
/// The store owns id assignment and timestamp stamping; models only expose
/// the accessors it needs. `owner_id` scopes listing to one user and
/// `lookup_key` is a secondary key that must be unique across the collection.
pub trait Entity: Clone + Send + Sync + 'static {
    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);

    fn owner_id(&self) -> Option<&str> {
        None
    }

    fn lookup_key(&self) -> Option<&str> {
        None
    }

    fn created_at(&self) -> DateTime<Utc>;
    fn set_created_at(&mut self, at: DateTime<Utc>);
    fn set_updated_at(&mut self, at: DateTime<Utc>);
}

/// Implements the id and timestamp accessors for a model with the usual
/// `id`, `created_at` and `updated_at` fields.
#[macro_export]
macro_rules! impl_entity_fields {
    () => {
        fn id(&self) -> &str {
            &self.id
        }

        fn set_id(&mut self, id: String) {
            self.id = id;
        }

        fn created_at(&self) -> chrono::DateTime<chrono::Utc> {
            self.created_at
        }

        fn set_created_at(&mut self, at: chrono::DateTime<chrono::Utc>) {
            self.created_at = at;
        }

        fn set_updated_at(&mut self, at: chrono::DateTime<chrono::Utc>) {
            self.updated_at = at;
        }
    };
}
