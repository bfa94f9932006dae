//! Diesel schema for owner-scoped task storage.

diesel::table! {
    /// Task records owned by individual users.
    tasks (id) {
        /// Task identifier.
        #[max_length = 255]
        id -> Varchar,
        /// Task title.
        #[max_length = 255]
        title -> Varchar,
        /// Task description.
        description -> Text,
        /// Task progress status.
        #[max_length = 50]
        status -> Varchar,
        /// Identifier of the owning user.
        #[max_length = 255]
        owner_id -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
