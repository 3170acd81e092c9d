mod args;
mod error;
mod output;
mod patch_type;
mod process;
mod wrapper;

pub use args::{ApplyOptions, CreateOptions, Manifest, apply_args, create_args, info_args};
pub use error::{FResult, FlipsError};
pub use output::FlipsOutput;
pub use patch_type::PatchType;
pub use process::run;
pub use wrapper::FlipsWrapper;
