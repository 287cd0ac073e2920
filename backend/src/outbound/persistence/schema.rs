//! Diesel table definitions. Must match `migrations/` exactly.

diesel::table! {
    /// Catalogued exoplanets, one row per record.
    exoplanets (id) {
        /// Primary key: UUID v4 assigned by the service.
        id -> Uuid,
        name -> Text,
        description -> Text,
        /// Light-years, within 10..=1000.
        distance -> Int4,
        /// Earth radii.
        radius -> Float8,
        /// Earth masses; 0 for gas giants stored without one.
        mass -> Float8,
        /// `GasGiant` or `Terrestrial`.
        #[sql_name = "type"]
        kind -> Text,
    }
}
