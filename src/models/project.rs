//! Project entity and the built-in catalog.

use serde::{Deserialize, Serialize};

/// A portfolio item, referenced by identifier from the navigation state.
///
/// Projects are read-only reference data: the core only looks them up by
/// id to decide what the detail view renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Stable identifier used by navigation (`ProjectDetail`).
    pub id: String,
    /// Display name.
    pub name: String,
    /// One-line description shown on the list cards.
    pub short_description: String,
    /// Full description shown on the detail screen.
    pub description: String,
    /// Technology tags.
    pub technologies: Vec<String>,
    /// Live demo URL, if deployed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_link: Option<String>,
    /// Source repository URL, if public.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_link: Option<String>,
}

impl Project {
    /// Looks up a project by id in a slice of projects.
    #[must_use]
    pub fn find<'a>(projects: &'a [Self], id: &str) -> Option<&'a Self> {
        projects.iter().find(|p| p.id == id)
    }

    /// Returns the built-in project catalog.
    #[must_use]
    pub fn catalog() -> Vec<Self> {
        vec![
            Self {
                id: "1".to_string(),
                name: "Offline RAG application".to_string(),
                short_description: "Offline RAG application.".to_string(),
                description: "A local RAG (Retrieval-Augmented Generation) application built \
                              with Streamlit and LangChain. This application allows you to \
                              create a local knowledge base from your documents and interact \
                              with it using various LLM models through Ollama."
                    .to_string(),
                technologies: vec![
                    "streamlit".to_string(),
                    "LangChain".to_string(),
                    "Ollama".to_string(),
                ],
                live_link: None,
                repo_link: Some(
                    "https://github.com/code-grafiki/Offline-RAG-Application".to_string(),
                ),
            },
            Self {
                id: "2".to_string(),
                name: "2D Platformer".to_string(),
                short_description: "A platformer adventure game.".to_string(),
                description: "A platformer adventure game made with unity, player navigate \
                              through small puzzles, defeat enemies, avoid spikes to reach \
                              the goal."
                    .to_string(),
                technologies: vec![
                    "Unity".to_string(),
                    "C#".to_string(),
                    "Aseprite".to_string(),
                ],
                live_link: None,
                repo_link: Some("https://github.com/code-grafiki/2d-Player-Controller".to_string()),
            },
            Self {
                id: "3".to_string(),
                name: "Pixel 2 Plates".to_string(),
                short_description: "Recipe generator app.".to_string(),
                description: "A recipie generator application where user uploads the \
                              ingredient images and through gemini api the application will \
                              provide a recipe."
                    .to_string(),
                technologies: vec![
                    "Streamlit".to_string(),
                    "GeminiAPI".to_string(),
                    "Figma(ui design)".to_string(),
                ],
                live_link: None,
                repo_link: None,
            },
            Self {
                id: "4".to_string(),
                name: "Snow Boarding".to_string(),
                short_description: "2D snow boarding game".to_string(),
                description: "a 2D snow boarding game where user have to finish the snow \
                              boarding course before the time ends without falling over."
                    .to_string(),
                technologies: vec!["unity".to_string(), "C#".to_string()],
                live_link: None,
                repo_link: None,
            },
            Self {
                id: "5".to_string(),
                name: "GamePortal".to_string(),
                short_description: "E commerce ui design.".to_string(),
                description: "During my internship, I designed an e-commerce website and \
                              conducted a comprehensive UX case study. I researched user \
                              needs, created wireframes and prototypes, and iterated on the \
                              design based on usability feedback to enhance the overall \
                              shopping experience."
                    .to_string(),
                technologies: vec!["Figma (wireframe, design, prototype)".to_string()],
                live_link: None,
                repo_link: Some(
                    "https://www.figma.com/community/file/1317869431291251276".to_string(),
                ),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_five_projects() {
        let projects = Project::catalog();
        assert_eq!(projects.len(), 5);
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        let projects = Project::catalog();
        let mut ids: Vec<&str> = projects.iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), projects.len());
    }

    #[test]
    fn test_find_by_id() {
        let projects = Project::catalog();
        let found = Project::find(&projects, "3").expect("project 3 exists");
        assert_eq!(found.name, "Pixel 2 Plates");
    }

    #[test]
    fn test_find_unknown_id() {
        let projects = Project::catalog();
        assert!(Project::find(&projects, "99").is_none());
    }
}
