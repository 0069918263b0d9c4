mod quote;
mod reminder;
mod sent_email;
mod status;

pub mod dtos {
    pub use crate::quote::dtos::*;
    pub use crate::reminder::dtos::*;
    pub use crate::sent_email::dtos::*;
}

pub use crate::quote::api::*;
pub use crate::reminder::api::*;
pub use crate::sent_email::api::*;
pub use crate::status::api::*;
