mod admin_layout;
pub use admin_layout::AdminLayout;

mod login;
pub use login::Login;

mod forgot_password;
pub use forgot_password::ForgotPassword;

mod blogs;
pub use blogs::Blogs;

mod blog_form;
pub use blog_form::{BlogEdit, BlogNew};

mod vehicles;
pub use vehicles::Vehicles;

mod rentals;
pub use rentals::Rentals;

mod transactions;
pub use transactions::Transactions;
