// Wizard controller: session state, the in-memory session store, and the
// deferred work (recommendation fetch, chat reply) that feeds back into it.

pub mod dispatch;
pub mod handlers;
pub mod session;
pub mod store;

pub use session::{Session, SessionView, WizardError};
pub use store::SessionStore;
