mod batch;
mod convert;
mod formats;

pub use batch::execute_convert_directory;
pub use convert::execute_convert_file;
pub use formats::execute_list_formats;
