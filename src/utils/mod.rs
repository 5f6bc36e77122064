pub mod environment;
pub mod paths;

pub use environment::default_projects_dir;
pub use paths::{
    decode_dir_name, file_age_days, file_modified, format_path_with_tilde, project_display_name,
    title_case,
};
