mod command;
mod connection;
mod data_type;
mod error;
mod parameter;
mod parameters;
mod policy;
mod row;
mod util;
mod value;

pub use command::*;
pub use connection::*;
pub use data_type::*;
pub use error::*;
pub use parameter::*;
pub use parameters::*;
pub use policy::*;
pub use row::*;
pub use util::*;
pub use value::*;
pub mod stream {
    pub use ::futures::stream::*;
}
