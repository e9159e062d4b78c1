mod course;
mod event;
mod notification;
mod share;
mod status;
mod subscription;

pub mod dtos {
    pub use crate::course::dtos::*;
    pub use crate::event::dtos::*;
    pub use crate::notification::dtos::*;
    pub use crate::share::dtos::*;
    pub use crate::subscription::dtos::*;
}

pub use crate::course::api::*;
pub use crate::event::api::*;
pub use crate::notification::api::*;
pub use crate::share::api::*;
pub use crate::status::api::*;
pub use crate::subscription::api::*;
