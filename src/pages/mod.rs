//! Page components for Mundos.

mod dashboard;
mod ejercicios;
mod landing;
mod login;
mod mundo;
mod not_found;
mod perfil;

pub use dashboard::Dashboard;
pub use ejercicios::Ejercicios;
pub use landing::Landing;
pub use login::Login;
pub use mundo::Mundo;
pub use not_found::NotFound;
pub use perfil::Perfil;
