mod dashboard;
mod expenses;
mod login;

pub use dashboard::DashboardScreen;
pub use expenses::ExpensePanel;
pub use login::{use_login_form, LoginForm, LoginScreen};
