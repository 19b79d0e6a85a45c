//! Knowledge domain module.
//!
//! Holds the static data the tools answer from: curated project notes keyed
//! by topic, and the ordered roadmap. A `KnowledgeBase` is built once at
//! startup and shared read-only (behind an `Arc`) with every request handler.

use std::collections::BTreeMap;

/// Curated notes shipped with the server, keyed by lower-case topic.
const BUILTIN_NOTES: &[(&str, &str)] = &[
    (
        "onboarding",
        "The onboarding checklist covers environment bootstrapping, style guides, \
         and CI expectations. Encourage makers to run appsdk env and review \
         README sections before sharing the manifest.",
    ),
    (
        "deployment",
        "Deployment happens via GitHub Actions which lints the project and uploads \
         build/app.json as an artifact. Import the artifact into ChatGPT to update \
         the app.",
    ),
    (
        "backlog",
        "Backlog items include capturing screenshots for UI changes and adding more \
         MCP endpoints that expose internal data sources.",
    ),
];

/// Roadmap entries in display order.
const BUILTIN_ROADMAP: &[&str] = &[
    "✅ Local MCP server boots with `appsdk run-server`.",
    "✅ Manifest generation documents the HTTP endpoints exposed to ChatGPT.",
    "🚧 Next: proxy CRM data through a new tool once the API is available.",
];

/// Immutable note and roadmap data backing the tools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeBase {
    notes: BTreeMap<String, String>,
    roadmap: Vec<String>,
}

impl KnowledgeBase {
    /// Build a knowledge base from arbitrary notes and roadmap entries.
    ///
    /// Topics are lower-cased on the way in so lookups can be
    /// case-insensitive.
    pub fn new<N, T, R>(notes: N, roadmap: R) -> Self
    where
        N: IntoIterator<Item = (T, T)>,
        T: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        Self {
            notes: notes
                .into_iter()
                .map(|(topic, text)| (topic.into().to_lowercase(), text.into()))
                .collect(),
            roadmap: roadmap.into_iter().map(Into::into).collect(),
        }
    }

    /// The knowledge base shipped with the server.
    pub fn builtin() -> Self {
        Self::new(
            BUILTIN_NOTES.iter().copied(),
            BUILTIN_ROADMAP.iter().copied(),
        )
    }

    /// Look up a note by topic, ignoring case.
    pub fn note(&self, topic: &str) -> Option<&str> {
        self.notes.get(&topic.to_lowercase()).map(String::as_str)
    }

    /// All known topics, sorted.
    pub fn topics(&self) -> impl Iterator<Item = &str> {
        self.notes.keys().map(String::as_str)
    }

    /// Roadmap entries in display order.
    pub fn roadmap(&self) -> &[String] {
        &self.roadmap
    }

    /// The roadmap rendered one entry per line.
    pub fn roadmap_text(&self) -> String {
        self.roadmap.join("\n")
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::builtin()
    }
}
