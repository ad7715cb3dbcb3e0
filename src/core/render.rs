use crate::core::loader::PortfolioData;
use crate::domain::fallback::with_profile_fallbacks;
use crate::domain::model::ContactCreate;
use crate::domain::ports::PortfolioApi;

pub const NO_SERVICES_PLACEHOLDER: &str = "No services listed yet.";
pub const NO_PROJECTS_PLACEHOLDER: &str = "No projects to show yet.";
pub const NO_TESTIMONIALS_PLACEHOLDER: &str = "No testimonials yet.";

pub const SUBMIT_FAILED_MESSAGE: &str = "Failed to send message. Please try again.";

/// Renders the loaded page as plain text. Tolerates empty collections and
/// missing profile fields; never panics on absent data.
pub fn render_portfolio(data: &PortfolioData) -> String {
    let profile = with_profile_fallbacks(data.profile.clone());
    let mut lines = Vec::new();

    lines.push(format!("{} - {}", profile.name, profile.title));
    lines.push(format!(
        "{} | {} | {}",
        profile.email, profile.phone, profile.location
    ));
    if !profile.skills.is_empty() {
        lines.push(format!("Skills: {}", profile.skills.join(", ")));
    }
    let mut platforms: Vec<&String> = profile.social.keys().collect();
    platforms.sort();
    for platform in platforms {
        lines.push(format!("  {}: {}", platform, profile.social[platform]));
    }

    lines.push(String::new());
    lines.push("## Services".to_string());
    if data.services.is_empty() {
        lines.push(NO_SERVICES_PLACEHOLDER.to_string());
    } else {
        for service in &data.services {
            lines.push(format!("- {}: {}", service.title, service.description));
            for feature in &service.features {
                lines.push(format!("    * {}", feature));
            }
        }
    }

    lines.push(String::new());
    lines.push("## Projects".to_string());
    if data.projects.is_empty() {
        lines.push(NO_PROJECTS_PLACEHOLDER.to_string());
    } else {
        for project in &data.projects {
            lines.push(format!("- {}: {}", project.title, project.description));
            if !project.technologies.is_empty() {
                lines.push(format!("    tech: {}", project.technologies.join(", ")));
            }
            for result in &project.results {
                lines.push(format!("    * {}", result));
            }
        }
    }

    lines.push(String::new());
    lines.push("## Testimonials".to_string());
    if data.testimonials.is_empty() {
        lines.push(NO_TESTIMONIALS_PLACEHOLDER.to_string());
    } else {
        for testimonial in &data.testimonials {
            let stars = "*".repeat(testimonial.rating.clamp(0, 5) as usize);
            lines.push(format!(
                "- \"{}\" by {} ({}, {}) {}",
                testimonial.content,
                testimonial.name,
                testimonial.position,
                testimonial.company,
                stars
            ));
        }
    }

    lines.join("\n")
}

/// Ephemeral contact-form state. The only mutation the client side owns:
/// fields reset on a confirmed submission, are preserved on any failure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    Success(String),
    Error(String),
}

impl ContactForm {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.email.is_empty()
            && self.company.is_empty()
            && self.message.is_empty()
    }

    pub async fn submit<A: PortfolioApi>(&mut self, api: &A) -> Notification {
        let contact = ContactCreate {
            name: self.name.clone(),
            email: self.email.clone(),
            company: if self.company.trim().is_empty() {
                None
            } else {
                Some(self.company.clone())
            },
            message: self.message.clone(),
        };

        match api.submit_contact(contact).await {
            Ok(response) if response.success => {
                *self = Self::default();
                Notification::Success(response.message)
            }
            Ok(response) => {
                tracing::error!("Contact submission rejected: {}", response.message);
                Notification::Error(SUBMIT_FAILED_MESSAGE.to_string())
            }
            Err(err) => {
                tracing::error!("Contact submission failed: {}", err);
                Notification::Error(SUBMIT_FAILED_MESSAGE.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Profile, Project, Service, Testimonial};

    #[test]
    fn empty_collections_render_placeholders() {
        let rendered = render_portfolio(&PortfolioData::default());

        assert!(rendered.contains(NO_SERVICES_PLACEHOLDER));
        assert!(rendered.contains(NO_PROJECTS_PLACEHOLDER));
        assert!(rendered.contains(NO_TESTIMONIALS_PLACEHOLDER));
        // Missing profile fields fall back instead of rendering blanks.
        assert!(rendered.contains("Alex Chen"));
    }

    #[test]
    fn populated_sections_render_content() {
        let data = PortfolioData {
            profile: Profile {
                name: "Jordan Lee".to_string(),
                skills: vec!["Rust".to_string()],
                ..Default::default()
            },
            services: vec![Service {
                title: "Consulting".to_string(),
                description: "Architecture reviews".to_string(),
                features: vec!["Audits".to_string()],
                ..Default::default()
            }],
            projects: vec![Project {
                title: "Dashboard".to_string(),
                description: "Analytics".to_string(),
                technologies: vec!["React".to_string()],
                ..Default::default()
            }],
            testimonials: vec![Testimonial {
                name: "Sarah Johnson".to_string(),
                content: "Great work".to_string(),
                rating: 5,
                ..Default::default()
            }],
        };

        let rendered = render_portfolio(&data);

        assert!(rendered.contains("Jordan Lee"));
        assert!(rendered.contains("Skills: Rust"));
        assert!(rendered.contains("- Consulting: Architecture reviews"));
        assert!(rendered.contains("tech: React"));
        assert!(rendered.contains("Sarah Johnson"));
        assert!(rendered.contains("*****"));
        assert!(!rendered.contains(NO_SERVICES_PLACEHOLDER));
    }

    #[test]
    fn out_of_range_rating_does_not_panic() {
        let data = PortfolioData {
            testimonials: vec![Testimonial {
                rating: 9,
                ..Default::default()
            }],
            ..Default::default()
        };
        let rendered = render_portfolio(&data);
        assert!(rendered.contains("*****"));
        assert!(!rendered.contains("******"));
    }
}
