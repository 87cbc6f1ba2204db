//! Diesel schema for message persistence.

diesel::table! {
    /// Board messages.
    messages (id) {
        /// Store-assigned identifier.
        id -> Int8,
        /// Message text.
        body -> Text,
        /// Author name.
        username -> Text,
        /// Insertion timestamp.
        created_at -> Timestamptz,
    }
}
