//! Data models

pub mod event;
pub mod user;

pub use event::{CreateEventRequest, DateRange, Event, EventCategory, EventFilter, UpdateEventRequest};
pub use user::{
    RegisterRequest, UpdateProfileRequest, UpdateUserDetailRequest, User, UserDetail, UserPatch,
};
