pub mod catalog;
pub mod error;
pub mod model;
pub mod synth;

pub use catalog::{object_id_prefix, resource_of, EVENT_TYPES};
pub use error::{EventError, Result};
pub use model::{EventObject, EventPayload, RequestHeaders, WebhookRecord};
pub use synth::{EventSynthesizer, DEFAULT_WINDOW_DAYS};
