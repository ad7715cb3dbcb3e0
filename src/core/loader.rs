use crate::domain::model::{Profile, Project, Service, Testimonial};
use crate::domain::ports::PortfolioApi;

/// The one message the page shows on a failed load; the underlying
/// classification is logged, never surfaced.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load portfolio data. Please try again later.";

/// Everything the page needs, delivered atomically by a successful batch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PortfolioData {
    pub profile: Profile,
    pub services: Vec<Service>,
    pub projects: Vec<Project>,
    pub testimonials: Vec<Testimonial>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Loaded(PortfolioData),
    Error { message: &'static str },
}

/// Owns the page-level load/error/success state. One batch of four
/// concurrent GETs, all-or-nothing: any single failure discards the partial
/// results and collapses to one generic error. Retry repeats the whole
/// batch, no backoff, no attempt limit.
pub struct PortfolioLoader<A: PortfolioApi> {
    api: A,
    state: LoadState,
}

impl<A: PortfolioApi> PortfolioLoader<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: LoadState::Loading,
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn data(&self) -> Option<&PortfolioData> {
        match &self.state {
            LoadState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    /// Issues the four reads concurrently and waits for all of them to
    /// settle. No fail-fast: an early rejection does not cancel the other
    /// in-flight requests.
    pub async fn load(&mut self) -> &LoadState {
        self.state = LoadState::Loading;

        let (profile, services, projects, testimonials) = tokio::join!(
            self.api.get_profile(),
            self.api.get_services(),
            self.api.get_projects(),
            self.api.get_testimonials(),
        );

        self.state = match (profile, services, projects, testimonials) {
            (Ok(profile), Ok(services), Ok(projects), Ok(testimonials)) => {
                tracing::info!(
                    "Portfolio loaded: {} services, {} projects, {} testimonials",
                    services.len(),
                    projects.len(),
                    testimonials.len()
                );
                LoadState::Loaded(PortfolioData {
                    profile,
                    services,
                    projects,
                    testimonials,
                })
            }
            (profile, services, projects, testimonials) => {
                for err in [
                    profile.err(),
                    services.err(),
                    projects.err(),
                    testimonials.err(),
                ]
                .into_iter()
                .flatten()
                {
                    tracing::error!("Portfolio fetch failed: {}", err);
                }
                LoadState::Error {
                    message: LOAD_FAILED_MESSAGE,
                }
            }
        };

        &self.state
    }

    /// User-triggered retry: re-enter `Loading` and repeat the full batch.
    pub async fn retry(&mut self) -> &LoadState {
        self.load().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{
        ApiResponse, Contact, ContactCreate, HealthStatus, ProfileUpdate, ProjectCreate,
        ProjectUpdate, ServiceCreate, ServiceUpdate, TestimonialCreate, TestimonialUpdate,
    };
    use crate::utils::error::{PortfolioError, Result};
    use async_trait::async_trait;
    use std::collections::{HashMap, HashSet};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct MockApi {
        data: PortfolioData,
        failing: Arc<Mutex<HashSet<&'static str>>>,
        calls: Arc<Mutex<HashMap<&'static str, usize>>>,
    }

    impl MockApi {
        fn new(data: PortfolioData) -> Self {
            Self {
                data,
                ..Default::default()
            }
        }

        fn with_failing(self, resources: &[&'static str]) -> Self {
            self.failing.lock().unwrap().extend(resources);
            self
        }

        fn clear_failures(&self) {
            self.failing.lock().unwrap().clear();
        }

        fn calls(&self, resource: &str) -> usize {
            self.calls.lock().unwrap().get(resource).copied().unwrap_or(0)
        }

        fn visit(&self, resource: &'static str) -> Result<()> {
            *self.calls.lock().unwrap().entry(resource).or_insert(0) += 1;
            if self.failing.lock().unwrap().contains(resource) {
                Err(PortfolioError::Server)
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl PortfolioApi for MockApi {
        async fn get_profile(&self) -> Result<Profile> {
            self.visit("profile")?;
            Ok(self.data.profile.clone())
        }

        async fn update_profile(&self, _update: ProfileUpdate) -> Result<Profile> {
            unimplemented!("not exercised by the loader")
        }

        async fn get_services(&self) -> Result<Vec<Service>> {
            self.visit("services")?;
            Ok(self.data.services.clone())
        }

        async fn create_service(&self, _service: ServiceCreate) -> Result<Service> {
            unimplemented!("not exercised by the loader")
        }

        async fn update_service(&self, _id: &str, _update: ServiceUpdate) -> Result<Service> {
            unimplemented!("not exercised by the loader")
        }

        async fn delete_service(&self, _id: &str) -> Result<ApiResponse> {
            unimplemented!("not exercised by the loader")
        }

        async fn get_projects(&self) -> Result<Vec<Project>> {
            self.visit("projects")?;
            Ok(self.data.projects.clone())
        }

        async fn create_project(&self, _project: ProjectCreate) -> Result<Project> {
            unimplemented!("not exercised by the loader")
        }

        async fn update_project(&self, _id: &str, _update: ProjectUpdate) -> Result<Project> {
            unimplemented!("not exercised by the loader")
        }

        async fn delete_project(&self, _id: &str) -> Result<ApiResponse> {
            unimplemented!("not exercised by the loader")
        }

        async fn get_testimonials(&self) -> Result<Vec<Testimonial>> {
            self.visit("testimonials")?;
            Ok(self.data.testimonials.clone())
        }

        async fn create_testimonial(
            &self,
            _testimonial: TestimonialCreate,
        ) -> Result<Testimonial> {
            unimplemented!("not exercised by the loader")
        }

        async fn update_testimonial(
            &self,
            _id: &str,
            _update: TestimonialUpdate,
        ) -> Result<Testimonial> {
            unimplemented!("not exercised by the loader")
        }

        async fn delete_testimonial(&self, _id: &str) -> Result<ApiResponse> {
            unimplemented!("not exercised by the loader")
        }

        async fn submit_contact(&self, _contact: ContactCreate) -> Result<ApiResponse> {
            unimplemented!("not exercised by the loader")
        }

        async fn list_contacts(&self) -> Result<Vec<Contact>> {
            unimplemented!("not exercised by the loader")
        }

        async fn mark_contact_read(&self, _id: &str) -> Result<Contact> {
            unimplemented!("not exercised by the loader")
        }

        async fn health(&self) -> Result<HealthStatus> {
            unimplemented!("not exercised by the loader")
        }
    }

    fn sample_data() -> PortfolioData {
        PortfolioData {
            profile: Profile {
                name: "Alex Chen".to_string(),
                ..Default::default()
            },
            services: vec![Service {
                id: "s1".to_string(),
                title: "React Development".to_string(),
                ..Default::default()
            }],
            projects: vec![Project {
                id: "p1".to_string(),
                title: "E-commerce Platform".to_string(),
                ..Default::default()
            }],
            testimonials: vec![Testimonial {
                id: "t1".to_string(),
                name: "Sarah Johnson".to_string(),
                rating: 5,
                ..Default::default()
            }],
        }
    }

    #[tokio::test]
    async fn initial_state_is_loading() {
        let loader = PortfolioLoader::new(MockApi::new(sample_data()));
        assert_eq!(*loader.state(), LoadState::Loading);
        assert!(loader.data().is_none());
    }

    #[tokio::test]
    async fn all_success_transitions_to_loaded_with_exact_data() {
        let data = sample_data();
        let mut loader = PortfolioLoader::new(MockApi::new(data.clone()));

        loader.load().await;

        assert_eq!(*loader.state(), LoadState::Loaded(data));
    }

    #[tokio::test]
    async fn any_single_failure_collapses_to_error() {
        for failing in ["profile", "services", "projects", "testimonials"] {
            let mock = MockApi::new(sample_data()).with_failing(&[failing]);
            let mut loader = PortfolioLoader::new(mock.clone());

            loader.load().await;

            assert_eq!(
                *loader.state(),
                LoadState::Error {
                    message: LOAD_FAILED_MESSAGE
                },
                "failed fetch: {}",
                failing
            );
            assert!(loader.data().is_none(), "partial data leaked: {}", failing);
            // The other three were still issued and awaited.
            for resource in ["profile", "services", "projects", "testimonials"] {
                assert_eq!(mock.calls(resource), 1);
            }
        }
    }

    #[tokio::test]
    async fn retry_reissues_all_four_and_recovers() {
        let mock = MockApi::new(sample_data()).with_failing(&["testimonials"]);
        let mut loader = PortfolioLoader::new(mock.clone());

        loader.load().await;
        assert_eq!(
            *loader.state(),
            LoadState::Error {
                message: LOAD_FAILED_MESSAGE
            }
        );

        mock.clear_failures();
        loader.retry().await;

        assert_eq!(*loader.state(), LoadState::Loaded(sample_data()));
        for resource in ["profile", "services", "projects", "testimonials"] {
            assert_eq!(mock.calls(resource), 2);
        }
    }

    #[tokio::test]
    async fn empty_collections_still_load() {
        let mut loader = PortfolioLoader::new(MockApi::new(PortfolioData::default()));

        loader.load().await;

        let data = loader.data().expect("state should be Loaded");
        assert!(data.services.is_empty());
        assert!(data.projects.is_empty());
        assert!(data.testimonials.is_empty());
    }
}
