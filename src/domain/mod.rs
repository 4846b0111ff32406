mod account;
mod favorite;
mod id;
mod money;
mod payment;

pub use account::*;
pub use favorite::*;
pub use id::*;
pub use money::*;
pub use payment::*;
