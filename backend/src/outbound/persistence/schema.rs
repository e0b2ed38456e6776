//! Diesel table definitions for the document collections.
//!
//! These definitions must match `backend/migrations` exactly.

diesel::table! {
    /// User account documents.
    users (id) {
        /// 24-hex document identifier.
        id -> Varchar,
        /// Account document: email, name, password hash, creation time.
        doc -> Jsonb,
    }
}

diesel::table! {
    /// Task documents.
    tasks (id) {
        /// 24-hex document identifier.
        id -> Varchar,
        /// Creation time, duplicated out of the document for ordering.
        created_at -> Timestamptz,
        /// Task document.
        doc -> Jsonb,
    }
}

diesel::allow_tables_to_appear_in_same_query!(users, tasks);
