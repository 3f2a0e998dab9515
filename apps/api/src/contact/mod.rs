// Contact form: local field validation, then a single relay POST.

pub mod handlers;
pub mod relay;
pub mod validation;
