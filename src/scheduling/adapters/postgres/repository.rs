//! `PostgreSQL` repository implementations for scheduling records.

use super::{
    models::{AnimalRow, AppointmentRow, NewAnimalRow, NewAppointmentRow},
    schema::{animals, appointments},
};
use crate::scheduling::domain::{
    Animal, AnimalId, Appointment, AppointmentId, AppointmentStatus, CustomerId, DateRange,
    OwnerEmail, OwnerId, PersistedAnimalData, PersistedAppointmentData, TimeWindow,
    VeterinarianId,
};
use crate::scheduling::ports::{
    AnimalRepository, AnimalRepositoryError, AnimalRepositoryResult, AppointmentRepository,
    AppointmentRepositoryError, AppointmentRepositoryResult,
};
use async_trait::async_trait;
use diesel::dsl::exists;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type for scheduling adapters.
pub type SchedulingPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed repository for appointment records.
#[derive(Debug, Clone)]
pub struct PostgresAppointmentRepository {
    pool: SchedulingPgPool,
}

impl PostgresAppointmentRepository {
    /// Creates a new repository from a `PostgreSQL` pool.
    #[must_use]
    pub const fn new(pool: SchedulingPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, operation: F) -> AppointmentRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> AppointmentRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(AppointmentRepositoryError::persistence)?;
            operation(&mut connection)
        })
        .await
        .map_err(AppointmentRepositoryError::persistence)?
    }
}

#[async_trait]
impl AppointmentRepository for PostgresAppointmentRepository {
    async fn insert(&self, appointment: &Appointment) -> AppointmentRepositoryResult<()> {
        let appointment_id = appointment.id();
        let new_row = appointment_to_new_row(appointment);

        self.run_blocking(move |connection| {
            diesel::insert_into(appointments::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| map_appointment_write_error(err, appointment_id))?;
            Ok(())
        })
        .await
    }

    async fn update(&self, appointment: &Appointment) -> AppointmentRepositoryResult<()> {
        let appointment_id = appointment.id();
        let row = appointment_to_new_row(appointment);

        self.run_blocking(move |connection| {
            let updated_count = diesel::update(
                appointments::table.filter(appointments::id.eq(appointment_id.into_inner())),
            )
            .set((
                appointments::start_time.eq(row.start_time),
                appointments::end_time.eq(row.end_time),
                appointments::animal_id.eq(row.animal_id),
                appointments::customer_id.eq(row.customer_id),
                appointments::veterinarian_id.eq(row.veterinarian_id),
                appointments::status.eq(&row.status),
                appointments::notes.eq(&row.notes),
                appointments::updated_at.eq(row.updated_at),
            ))
            .execute(connection)
            .map_err(|err| map_appointment_write_error(err, appointment_id))?;

            if updated_count == 0 {
                return Err(AppointmentRepositoryError::NotFound(appointment_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(
        &self,
        id: AppointmentId,
    ) -> AppointmentRepositoryResult<Option<Appointment>> {
        self.run_blocking(move |connection| {
            let row = appointments::table
                .filter(appointments::id.eq(id.into_inner()))
                .select(AppointmentRow::as_select())
                .first::<AppointmentRow>(connection)
                .optional()
                .map_err(AppointmentRepositoryError::persistence)?;
            row.map(row_to_appointment).transpose()
        })
        .await
    }

    async fn find_overlapping(
        &self,
        window: TimeWindow,
        animal_id: AnimalId,
        veterinarian_id: VeterinarianId,
        exclude: Option<AppointmentId>,
    ) -> AppointmentRepositoryResult<Vec<Appointment>> {
        let animal_uuid = animal_id.into_inner();
        let vet_uuid = veterinarian_id.into_inner();
        let excluded = exclude.map(AppointmentId::into_inner);

        self.run_blocking(move |connection| {
            let base = appointments::table
                .filter(appointments::start_time.lt(window.end()))
                .filter(appointments::end_time.gt(window.start()))
                .filter(
                    appointments::animal_id
                        .eq(animal_uuid)
                        .or(appointments::veterinarian_id.eq(vet_uuid)),
                )
                .order(appointments::start_time.asc())
                .select(AppointmentRow::as_select());

            let rows = match excluded {
                Some(excluded_id) => base
                    .filter(appointments::id.ne(excluded_id))
                    .load::<AppointmentRow>(connection),
                None => base.load::<AppointmentRow>(connection),
            }
            .map_err(AppointmentRepositoryError::persistence)?;

            rows.into_iter().map(row_to_appointment).collect()
        })
        .await
    }

    async fn list_for_veterinarian(
        &self,
        veterinarian_id: VeterinarianId,
        range: DateRange,
    ) -> AppointmentRepositoryResult<Vec<Appointment>> {
        let vet_uuid = veterinarian_id.into_inner();

        self.run_blocking(move |connection| {
            let rows = appointments::table
                .filter(appointments::veterinarian_id.eq(vet_uuid))
                .filter(appointments::start_time.ge(range.start()))
                .filter(appointments::start_time.le(range.end()))
                .order(appointments::start_time.asc())
                .select(AppointmentRow::as_select())
                .load::<AppointmentRow>(connection)
                .map_err(AppointmentRepositoryError::persistence)?;

            rows.into_iter().map(row_to_appointment).collect()
        })
        .await
    }

    async fn exists_for_animal(&self, animal_id: AnimalId) -> AppointmentRepositoryResult<bool> {
        let animal_uuid = animal_id.into_inner();

        self.run_blocking(move |connection| {
            diesel::select(exists(
                appointments::table.filter(appointments::animal_id.eq(animal_uuid)),
            ))
            .get_result::<bool>(connection)
            .map_err(AppointmentRepositoryError::persistence)
        })
        .await
    }
}

/// `PostgreSQL`-backed repository for animal registry records.
#[derive(Debug, Clone)]
pub struct PostgresAnimalRepository {
    pool: SchedulingPgPool,
}

impl PostgresAnimalRepository {
    /// Creates a new repository from a `PostgreSQL` pool.
    #[must_use]
    pub const fn new(pool: SchedulingPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, operation: F) -> AnimalRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> AnimalRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(AnimalRepositoryError::persistence)?;
            operation(&mut connection)
        })
        .await
        .map_err(AnimalRepositoryError::persistence)?
    }
}

#[async_trait]
impl AnimalRepository for PostgresAnimalRepository {
    async fn insert(&self, animal: &Animal) -> AnimalRepositoryResult<()> {
        let animal_id = animal.id();
        let owner_email = animal.owner_email().cloned();
        let new_row = animal_to_new_row(animal);

        self.run_blocking(move |connection| {
            diesel::insert_into(animals::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info)
                        if is_owner_email_unique_violation(info.as_ref()) =>
                    {
                        owner_email.clone().map_or_else(
                            || AnimalRepositoryError::DuplicateAnimal(animal_id),
                            AnimalRepositoryError::DuplicateOwnerEmail,
                        )
                    }
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        AnimalRepositoryError::DuplicateAnimal(animal_id)
                    }
                    _ => AnimalRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: AnimalId) -> AnimalRepositoryResult<Option<Animal>> {
        self.run_blocking(move |connection| {
            let row = animals::table
                .filter(animals::id.eq(id.into_inner()))
                .select(AnimalRow::as_select())
                .first::<AnimalRow>(connection)
                .optional()
                .map_err(AnimalRepositoryError::persistence)?;
            row.map(row_to_animal).transpose()
        })
        .await
    }

    async fn exists(&self, id: AnimalId) -> AnimalRepositoryResult<bool> {
        self.run_blocking(move |connection| {
            diesel::select(exists(
                animals::table.filter(animals::id.eq(id.into_inner())),
            ))
            .get_result::<bool>(connection)
            .map_err(AnimalRepositoryError::persistence)
        })
        .await
    }

    async fn owner_email_exists(&self, email: &OwnerEmail) -> AnimalRepositoryResult<bool> {
        let address = email.as_str().to_owned();

        self.run_blocking(move |connection| {
            diesel::select(exists(
                animals::table.filter(animals::owner_email.eq(&address)),
            ))
            .get_result::<bool>(connection)
            .map_err(AnimalRepositoryError::persistence)
        })
        .await
    }

    async fn delete(&self, id: AnimalId) -> AnimalRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let deleted_count =
                diesel::delete(animals::table.filter(animals::id.eq(id.into_inner())))
                    .execute(connection)
                    .map_err(|err| match err {
                        DieselError::DatabaseError(
                            DatabaseErrorKind::ForeignKeyViolation,
                            _,
                        ) => AnimalRepositoryError::ReferencedByAppointments(id),
                        _ => AnimalRepositoryError::persistence(err),
                    })?;

            if deleted_count == 0 {
                return Err(AnimalRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

fn appointment_to_new_row(appointment: &Appointment) -> NewAppointmentRow {
    NewAppointmentRow {
        id: appointment.id().into_inner(),
        start_time: appointment.window().start(),
        end_time: appointment.window().end(),
        animal_id: appointment.animal_id().into_inner(),
        customer_id: appointment.customer_id().into_inner(),
        veterinarian_id: appointment.veterinarian_id().into_inner(),
        status: appointment.status().as_str().to_owned(),
        notes: appointment.notes().map(str::to_owned),
        created_at: appointment.created_at(),
        updated_at: appointment.updated_at(),
    }
}

fn animal_to_new_row(animal: &Animal) -> NewAnimalRow {
    NewAnimalRow {
        id: animal.id().into_inner(),
        name: animal.name().to_owned(),
        birth_date: animal.birth_date(),
        owner_id: animal.owner_id().into_inner(),
        owner_name: animal.owner_name().to_owned(),
        owner_email: animal.owner_email().map(|email| email.as_str().to_owned()),
        created_at: animal.created_at(),
        updated_at: animal.updated_at(),
    }
}

fn row_to_appointment(row: AppointmentRow) -> AppointmentRepositoryResult<Appointment> {
    let AppointmentRow {
        id,
        start_time,
        end_time,
        animal_id,
        customer_id,
        veterinarian_id,
        status,
        notes,
        created_at,
        updated_at,
    } = row;

    let window =
        TimeWindow::new(start_time, end_time).map_err(AppointmentRepositoryError::persistence)?;
    let parsed_status = AppointmentStatus::try_from(status.as_str())
        .map_err(AppointmentRepositoryError::persistence)?;

    let data = PersistedAppointmentData {
        id: AppointmentId::from_uuid(id),
        window,
        animal_id: AnimalId::from_uuid(animal_id),
        customer_id: CustomerId::from_uuid(customer_id),
        veterinarian_id: VeterinarianId::from_uuid(veterinarian_id),
        status: parsed_status,
        notes,
        created_at,
        updated_at,
    };

    Ok(Appointment::from_persisted(data))
}

fn row_to_animal(row: AnimalRow) -> AnimalRepositoryResult<Animal> {
    let AnimalRow {
        id,
        name,
        birth_date,
        owner_id,
        owner_name,
        owner_email,
        created_at,
        updated_at,
    } = row;

    let parsed_email = owner_email
        .map(OwnerEmail::new)
        .transpose()
        .map_err(AnimalRepositoryError::persistence)?;

    let data = PersistedAnimalData {
        id: AnimalId::from_uuid(id),
        name,
        birth_date,
        owner_id: OwnerId::from_uuid(owner_id),
        owner_name,
        owner_email: parsed_email,
        created_at,
        updated_at,
    };

    Ok(Animal::from_persisted(data))
}

fn map_appointment_write_error(
    err: DieselError,
    appointment_id: AppointmentId,
) -> AppointmentRepositoryError {
    match err {
        DieselError::DatabaseError(_, ref info) if is_window_exclusion_violation(info.as_ref()) => {
            AppointmentRepositoryError::WindowConflict
        }
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            AppointmentRepositoryError::DuplicateAppointment(appointment_id)
        }
        _ => AppointmentRepositoryError::persistence(err),
    }
}

fn is_window_exclusion_violation(info: &dyn diesel::result::DatabaseErrorInformation) -> bool {
    info.constraint_name()
        .is_some_and(|name| name == "appointments_no_double_booking")
}

fn is_owner_email_unique_violation(info: &dyn diesel::result::DatabaseErrorInformation) -> bool {
    info.constraint_name()
        .is_some_and(|name| name == "idx_animals_owner_email")
}
