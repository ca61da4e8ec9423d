mod delete_button;

pub use delete_button::DeleteEdgeButton;
