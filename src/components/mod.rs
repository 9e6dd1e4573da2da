//! UI Components
//!
//! Leptos components for the admin console and the table viewer.

mod access_gate;
mod admin_dashboard;
mod admin_page;
mod category_panel;
mod login_form;
mod menu_item_form;
mod menu_item_table;
mod restaurant_sidebar;
mod table_menu_page;

pub use access_gate::AccessGate;
pub use admin_dashboard::AdminDashboard;
pub use admin_page::AdminPage;
pub use category_panel::CategoryPanel;
pub use login_form::LoginForm;
pub use menu_item_form::{ItemFormMode, MenuItemForm};
pub use menu_item_table::MenuItemTable;
pub use restaurant_sidebar::RestaurantSidebar;
pub use table_menu_page::TableMenuPage;
