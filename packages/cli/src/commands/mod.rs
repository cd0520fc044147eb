pub mod form;
pub mod get;
pub mod init;
pub mod path;
pub mod paths;
pub mod set;

pub use form::{form, FormArgs};
pub use get::{get, GetArgs};
pub use init::{init, InitArgs};
pub use path::{path, PathArgs};
pub use paths::{paths, PathsArgs};
pub use set::{set, SetArgs};
