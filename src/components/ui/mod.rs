mod error_modal;

pub use error_modal::ErrorModal;
