pub mod client;
pub mod loader;
pub mod render;

pub use crate::domain::model::{Profile, Project, Service, Testimonial};
pub use crate::domain::ports::{PortfolioApi, RequestObserver};
pub use crate::utils::error::Result;
