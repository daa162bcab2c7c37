mod view;
pub mod view_model;

pub use view::ContactForm;
pub use view_model::ContactFormVm;
