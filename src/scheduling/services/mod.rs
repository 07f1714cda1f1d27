//! Orchestration services for the scheduling core.

mod lifecycle;
mod notice;
mod registry;

pub use lifecycle::{
    AppointmentLifecycleError, AppointmentLifecycleResult, AppointmentLifecycleService,
    AppointmentUpdate, NoticeDisposition,
};
pub use notice::{CANCELLATION_SUBJECT, NoticeContext, NoticeRenderError, build_cancellation_notice};
pub use registry::{AnimalRegistryError, AnimalRegistryResult, AnimalRegistryService};
