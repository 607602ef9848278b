pub mod csv_loader;
pub mod path_writer;
pub mod profile;

pub use csv_loader::CsvLoadError;
pub use path_writer::write_search_path;
pub use profile::{Profile, ProfileError, load_profile, load_profile_from_str};
