mod lenient;
mod remote;
mod rocket;

pub use remote::*;
pub use rocket::*;
