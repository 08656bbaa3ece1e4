//! Admin access adapters.

mod site_password;

pub use site_password::SitePasswordGate;
