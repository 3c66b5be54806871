//! Turning a [`QueryOutcome`] into text for the user.

pub mod narrator;
pub mod prompts;
pub mod template;

use crate::routing::QueryOutcome;
use narrator::Narrator;

#[derive(Clone)]
pub enum Renderer {
    Template,
    Narrated(Narrator),
}

impl Renderer {
    pub async fn render(&self, query: &str, outcome: &QueryOutcome) -> String {
        match self {
            Renderer::Template => template::render(outcome),
            Renderer::Narrated(narrator) => narrator.narrate(query, outcome).await,
        }
    }
}
