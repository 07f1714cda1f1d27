//! Diesel schema for scheduling persistence.

diesel::table! {
    /// Animal registry records.
    animals (id) {
        /// Animal identifier.
        id -> Uuid,
        /// Animal name.
        #[max_length = 100]
        name -> Varchar,
        /// Animal birth date.
        birth_date -> Timestamptz,
        /// Owner identifier.
        owner_id -> Uuid,
        /// Owner display name, possibly empty.
        #[max_length = 100]
        owner_name -> Varchar,
        /// Owner contact address; unique where present
        /// (`idx_animals_owner_email`).
        #[max_length = 100]
        owner_email -> Nullable<Varchar>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Appointment booking records.
    ///
    /// The window columns participate in the
    /// `appointments_no_double_booking` exclusion constraint, which
    /// rejects overlapping windows sharing an animal or a veterinarian.
    appointments (id) {
        /// Appointment identifier.
        id -> Uuid,
        /// Window start instant.
        start_time -> Timestamptz,
        /// Window end instant.
        end_time -> Timestamptz,
        /// Referenced animal (`fk_appointments_animal`).
        animal_id -> Uuid,
        /// Booking customer.
        customer_id -> Uuid,
        /// Assigned veterinarian.
        veterinarian_id -> Uuid,
        /// Status (`scheduled`, `in_progress`, `completed`, `cancelled`,
        /// `no_show`).
        #[max_length = 50]
        status -> Varchar,
        /// Optional free-text notes.
        #[max_length = 500]
        notes -> Nullable<Varchar>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::joinable!(appointments -> animals (animal_id));
diesel::allow_tables_to_appear_in_same_query!(animals, appointments);
