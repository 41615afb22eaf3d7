pub mod app;
pub mod cafe_list;
pub mod login;
pub mod register;

pub use app::render_app;
pub use cafe_list::render_cafes;
pub use login::render_login;
pub use register::render_register;
