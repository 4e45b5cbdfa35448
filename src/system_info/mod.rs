pub mod load;
pub mod locale;
pub mod uptime;
pub mod users;

pub use load::*;
pub use uptime::*;
pub use users::*;
