mod backend_users;

pub use backend_users::BackendUsersClient;
