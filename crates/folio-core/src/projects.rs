//! Project gallery data: remote JSON collection with a bundled fallback.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::CARD_STAGGER_SECS;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub image: String,
    pub description: String,
    pub live: String,
}

#[derive(Debug, Error)]
pub enum ProjectDataError {
    #[error("project data is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse the fetched collection. Order is whatever the source returns.
pub fn parse_projects(json: &str) -> Result<Vec<Project>, ProjectDataError> {
    Ok(serde_json::from_str(json)?)
}

/// Statically bundled substitute gallery used when the remote fetch fails.
pub fn fallback_projects() -> Vec<Project> {
    let entries = [
        (
            "Weather Dashboard",
            "assets/projects/weather.png",
            "Live weather dashboard with hourly and weekly forecasts.",
            "https://example.com/weather",
        ),
        (
            "Task Tracker",
            "assets/projects/tasks.png",
            "Kanban-style task tracker with drag-and-drop boards.",
            "https://example.com/tasks",
        ),
        (
            "Recipe Finder",
            "assets/projects/recipes.png",
            "Ingredient-driven recipe search with saved favourites.",
            "https://example.com/recipes",
        ),
        (
            "Music Visualizer",
            "assets/projects/visualizer.png",
            "Generative 3D visualizer reacting to audio in real time.",
            "https://example.com/visualizer",
        ),
    ];
    entries
        .into_iter()
        .map(|(title, image, description, live)| Project {
            title: title.to_string(),
            image: image.to_string(),
            description: description.to_string(),
            live: live.to_string(),
        })
        .collect()
}

/// Staggered entrance delay so cards cascade in display order.
pub fn entrance_delay_secs(index: usize) -> f32 {
    index as f32 * CARD_STAGGER_SECS
}
