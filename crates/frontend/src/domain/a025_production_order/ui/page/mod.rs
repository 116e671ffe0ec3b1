//! Production Order entry page
//!
//! MVVM split:
//! - model.rs: API functions (list, create) and error kinds
//! - form.rs: form state, validation and reset
//! - view_model.rs: page state and commands
//! - view.rs: Leptos component (pure UI)

mod form;
mod model;
mod view;
mod view_model;

pub use form::{FormErrors, ProductionOrderForm, ProductionOrderFormValues};
pub use model::{FailureCause, OrderError, ProductionOrderApi};
pub use view::ProductionOrderPage;
pub use view_model::{PageDisplay, ProductionOrderPageViewModel, MSG_ORDER_CREATED};
