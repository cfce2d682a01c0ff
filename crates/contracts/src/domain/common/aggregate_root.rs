use super::AggregateId;

/// Aggregate root trait
///
/// Carries the class-level metadata the backend needs for table names,
/// modal form URLs and modal titles.
pub trait AggregateRoot {
    /// Identifier type
    type Id: AggregateId;

    /// ID of the stored record
    fn id(&self) -> Self::Id;

    /// Aggregate index in the system (e.g. "a002")
    fn aggregate_index() -> &'static str;

    /// Collection name used for the table and URLs (e.g. "guinea_pig")
    fn collection_name() -> &'static str;

    /// Element name for the UI (singular, e.g. "guinea pig")
    fn element_name() -> &'static str;

    /// List name for the UI (plural, e.g. "guinea pigs")
    fn list_name() -> &'static str;

    /// Modal form URL for a new record
    fn add_url() -> String {
        format!("/api/{}/add", Self::collection_name())
    }

    /// Modal form URL for an existing record
    fn edit_url(id: Self::Id) -> String {
        format!("/api/{}/edit/{}", Self::collection_name(), id.as_string())
    }
}
