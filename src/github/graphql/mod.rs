mod types;
mod viewer;

pub(crate) use viewer::query_viewer_login;
