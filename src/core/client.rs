use crate::config::ClientConfig;
use crate::domain::model::{
    ApiResponse, Contact, ContactCreate, ContactUpdate, HealthStatus, Profile, ProfileUpdate,
    Project, ProjectCreate, ProjectUpdate, Service, ServiceCreate, ServiceUpdate, Testimonial,
    TestimonialCreate, TestimonialUpdate,
};
use crate::domain::ports::{PortfolioApi, RequestObserver};
use crate::utils::error::{PortfolioError, Result};
use crate::utils::logger::TracingObserver;
use crate::utils::validation::validate_range;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// Sole outbound HTTP component. No retries, no caching, no auth; every call
/// is one request whose failure is normalized into the fixed error taxonomy.
pub struct ApiClient {
    http: Client,
    base: String,
    observer: Arc<dyn RequestObserver>,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::with_observer(config, Arc::new(TracingObserver))
    }

    pub fn with_observer(
        config: ClientConfig,
        observer: Arc<dyn RequestObserver>,
    ) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .timeout(config.timeout())
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base: config.api_base(),
            observer,
        })
    }

    /// One HTTP call: observe the request, send it, observe the outcome, and
    /// either deserialize the 2xx payload or raise the classified error.
    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T> {
        let url = format!("{}{}", self.base, path);
        let label = method.as_str().to_string();
        self.observer.on_request(&label, &url);

        let mut request = self.http.request(method, &url);
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(source) => {
                let err = PortfolioError::from_transport(source);
                self.observer.on_error(&label, &url, &err);
                return Err(err);
            }
        };

        let status = response.status();
        self.observer.on_response(&label, &url, status.as_u16());

        if status.is_success() {
            return response.json::<T>().await.map_err(PortfolioError::Transport);
        }

        let err = match status {
            StatusCode::NOT_FOUND => PortfolioError::NotFound,
            StatusCode::INTERNAL_SERVER_ERROR => PortfolioError::Server,
            _ => match response.error_for_status() {
                Err(source) => PortfolioError::Transport(source),
                // Redirect-class statuses are not reqwest errors.
                Ok(_) => PortfolioError::UnexpectedStatus {
                    status: status.as_u16(),
                },
            },
        };
        self.observer.on_error(&label, &url, &err);
        Err(err)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.execute(Method::GET, path, None).await
    }

    async fn send_json<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.execute(method, path, Some(serde_json::to_value(body)?))
            .await
    }
}

#[async_trait]
impl PortfolioApi for ApiClient {
    async fn get_profile(&self) -> Result<Profile> {
        self.get("/profile").await
    }

    async fn update_profile(&self, update: ProfileUpdate) -> Result<Profile> {
        self.send_json(Method::PUT, "/profile", &update).await
    }

    async fn get_services(&self) -> Result<Vec<Service>> {
        self.get("/services").await
    }

    async fn create_service(&self, service: ServiceCreate) -> Result<Service> {
        self.send_json(Method::POST, "/services", &service).await
    }

    async fn update_service(&self, id: &str, update: ServiceUpdate) -> Result<Service> {
        self.send_json(Method::PUT, &format!("/services/{}", id), &update)
            .await
    }

    async fn delete_service(&self, id: &str) -> Result<ApiResponse> {
        self.execute(Method::DELETE, &format!("/services/{}", id), None)
            .await
    }

    async fn get_projects(&self) -> Result<Vec<Project>> {
        self.get("/projects").await
    }

    async fn create_project(&self, project: ProjectCreate) -> Result<Project> {
        self.send_json(Method::POST, "/projects", &project).await
    }

    async fn update_project(&self, id: &str, update: ProjectUpdate) -> Result<Project> {
        self.send_json(Method::PUT, &format!("/projects/{}", id), &update)
            .await
    }

    async fn delete_project(&self, id: &str) -> Result<ApiResponse> {
        self.execute(Method::DELETE, &format!("/projects/{}", id), None)
            .await
    }

    async fn get_testimonials(&self) -> Result<Vec<Testimonial>> {
        self.get("/testimonials").await
    }

    async fn create_testimonial(&self, testimonial: TestimonialCreate) -> Result<Testimonial> {
        // The backend rejects out-of-range ratings; catch it before the wire.
        validate_range("rating", testimonial.rating, 1, 5)?;
        self.send_json(Method::POST, "/testimonials", &testimonial)
            .await
    }

    async fn update_testimonial(
        &self,
        id: &str,
        update: TestimonialUpdate,
    ) -> Result<Testimonial> {
        if let Some(rating) = update.rating {
            validate_range("rating", rating, 1, 5)?;
        }
        self.send_json(Method::PUT, &format!("/testimonials/{}", id), &update)
            .await
    }

    async fn delete_testimonial(&self, id: &str) -> Result<ApiResponse> {
        self.execute(Method::DELETE, &format!("/testimonials/{}", id), None)
            .await
    }

    async fn submit_contact(&self, contact: ContactCreate) -> Result<ApiResponse> {
        self.send_json(Method::POST, "/contact", &contact).await
    }

    async fn list_contacts(&self) -> Result<Vec<Contact>> {
        self.get("/contact").await
    }

    async fn mark_contact_read(&self, id: &str) -> Result<Contact> {
        self.send_json(
            Method::PUT,
            &format!("/contact/{}", id),
            &ContactUpdate { is_read: true },
        )
        .await
    }

    async fn health(&self) -> Result<HealthStatus> {
        self.get("/health").await
    }
}
