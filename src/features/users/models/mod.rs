mod backend_user;

pub use backend_user::BackendUser;
