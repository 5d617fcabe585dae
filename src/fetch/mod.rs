pub mod users;

pub use users::{users_table, FetchError, UserRecord, UsersClient, UsersOutcome};

/// Column headers of the users table, in display order.
pub const USER_COLUMNS: [&str; 8] = [
    "ID",
    "Nama",
    "Username",
    "Email",
    "Kota",
    "Telepon",
    "Website",
    "Perusahaan",
];
