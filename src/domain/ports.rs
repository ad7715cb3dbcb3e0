use crate::domain::model::{
    ApiResponse, Contact, ContactCreate, HealthStatus, Profile, ProfileUpdate, Project,
    ProjectCreate, ProjectUpdate, Service, ServiceCreate, ServiceUpdate, Testimonial,
    TestimonialCreate, TestimonialUpdate,
};
use crate::utils::error::{PortfolioError, Result};
use async_trait::async_trait;

/// Full operation surface of the portfolio backend, one method per
/// (resource, verb) pair. The loader and the CLIs depend on this trait,
/// not on the concrete HTTP client.
#[async_trait]
pub trait PortfolioApi: Send + Sync {
    async fn get_profile(&self) -> Result<Profile>;
    async fn update_profile(&self, update: ProfileUpdate) -> Result<Profile>;

    async fn get_services(&self) -> Result<Vec<Service>>;
    async fn create_service(&self, service: ServiceCreate) -> Result<Service>;
    async fn update_service(&self, id: &str, update: ServiceUpdate) -> Result<Service>;
    async fn delete_service(&self, id: &str) -> Result<ApiResponse>;

    async fn get_projects(&self) -> Result<Vec<Project>>;
    async fn create_project(&self, project: ProjectCreate) -> Result<Project>;
    async fn update_project(&self, id: &str, update: ProjectUpdate) -> Result<Project>;
    async fn delete_project(&self, id: &str) -> Result<ApiResponse>;

    async fn get_testimonials(&self) -> Result<Vec<Testimonial>>;
    async fn create_testimonial(&self, testimonial: TestimonialCreate) -> Result<Testimonial>;
    async fn update_testimonial(&self, id: &str, update: TestimonialUpdate)
        -> Result<Testimonial>;
    async fn delete_testimonial(&self, id: &str) -> Result<ApiResponse>;

    async fn submit_contact(&self, contact: ContactCreate) -> Result<ApiResponse>;
    async fn list_contacts(&self) -> Result<Vec<Contact>>;
    async fn mark_contact_read(&self, id: &str) -> Result<Contact>;

    async fn health(&self) -> Result<HealthStatus>;
}

/// Observation hook for outbound requests. Purely observational: the client
/// calls it before raising an error or returning a result, and nothing it
/// does may alter control flow or error classification.
pub trait RequestObserver: Send + Sync {
    fn on_request(&self, method: &str, url: &str);
    fn on_response(&self, method: &str, url: &str, status: u16);
    fn on_error(&self, method: &str, url: &str, error: &PortfolioError);
}
