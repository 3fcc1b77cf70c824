//! Canonical method list: seed data, search filtering, create/edit mutations.
//!
//! DESIGN
//! ======
//! The list is the single source of truth for card data. Filtering never
//! mutates it; create prepends, edit replaces in place, and nothing deletes.
//! Identifiers are allocated monotonically from the current maximum, which
//! stays collision-free precisely because records are never removed.

#[cfg(test)]
#[path = "methods_test.rs"]
mod methods_test;

use std::time::Duration;

use crate::state::editor::MethodDraft;

/// Identifier for a method record, unique within the in-memory list.
pub type MethodId = u64;

/// How long the "novo" badge stays on a freshly created record.
pub const RECENT_MARKER_TTL: Duration = Duration::from_secs(10);

/// One UX-methodology reference card.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MethodRecord {
    pub id: MethodId,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    /// Transient marker driving the "novo" badge; cleared once by a delayed
    /// task scheduled at creation time.
    pub recently_added: bool,
}

/// Canonical in-memory method list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MethodsState {
    pub items: Vec<MethodRecord>,
}

impl MethodsState {
    /// The eight reference cards compiled into the initial state.
    pub fn seeded() -> Self {
        Self {
            items: vec![
                seed(
                    1,
                    "Design Thinking",
                    "Processo centrado no usuário que combina empatia, criatividade e \
                     racionalidade para atender às necessidades dos usuários e ao sucesso \
                     do negócio.",
                    &["processo", "criatividade", "empatia", "inovação"],
                ),
                seed(
                    2,
                    "User Journey Mapping",
                    "Visualização do processo que uma pessoa passa para atingir um objetivo, \
                     identificando pontos de dor e oportunidades de melhoria.",
                    &["mapeamento", "jornada", "visualização", "experiência"],
                ),
                seed(
                    3,
                    "Personas",
                    "Representações fictícias dos usuários ideais baseadas em dados reais e \
                     pesquisa, ajudando a entender necessidades e comportamentos.",
                    &["usuário", "pesquisa", "comportamento", "segmentação"],
                ),
                seed(
                    4,
                    "A/B Testing",
                    "Método de comparação entre duas versões de um elemento para determinar \
                     qual performa melhor em termos de conversão.",
                    &["teste", "conversão", "otimização", "dados"],
                ),
                seed(
                    5,
                    "Card Sorting",
                    "Técnica para entender como os usuários categorizam informações, ajudando \
                     na criação de arquiteturas de informação intuitivas.",
                    &["categorização", "arquitetura", "informação", "usabilidade"],
                ),
                seed(
                    6,
                    "Wireframing",
                    "Criação de esquemas visuais básicos que mostram a estrutura e layout de \
                     uma interface antes do design final.",
                    &["estrutura", "layout", "prototipagem", "interface"],
                ),
                seed(
                    7,
                    "Usability Testing",
                    "Avaliação de um produto através da observação de usuários reais tentando \
                     completar tarefas específicas.",
                    &["teste", "usabilidade", "observação", "validação"],
                ),
                seed(
                    8,
                    "Heuristic Evaluation",
                    "Método de avaliação de usabilidade onde especialistas examinam a \
                     interface usando princípios de usabilidade estabelecidos.",
                    &["avaliação", "heurística", "especialistas", "princípios"],
                ),
            ],
        }
    }

    /// Ordered subsequence of records matching `query`.
    ///
    /// An empty query returns the full list unchanged. Evaluated fresh on
    /// every keystroke; no debouncing, no ranking.
    pub fn filtered(&self, query: &str) -> Vec<MethodRecord> {
        self.items
            .iter()
            .filter(|record| matches_query(record, query))
            .cloned()
            .collect()
    }

    /// Prepend a new record built from `draft`, marked recently added.
    ///
    /// Returns the freshly allocated identifier so the caller can schedule
    /// the delayed marker clearance.
    pub fn create(&mut self, draft: &MethodDraft) -> MethodId {
        let id = self.items.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        self.items.insert(
            0,
            MethodRecord {
                id,
                title: draft.title.clone(),
                description: draft.description.clone(),
                tags: draft.tags.clone(),
                recently_added: true,
            },
        );
        id
    }

    /// Replace title/description/tags of the record with `id` in place,
    /// preserving its identifier and recently-added marker.
    ///
    /// Returns `false` when no record carries `id`.
    pub fn apply_edit(&mut self, id: MethodId, draft: &MethodDraft) -> bool {
        let Some(record) = self.items.iter_mut().find(|r| r.id == id) else {
            return false;
        };
        record.title = draft.title.clone();
        record.description = draft.description.clone();
        record.tags = draft.tags.clone();
        true
    }

    /// Clear the recently-added marker on the record with `id`.
    ///
    /// Idempotent, and a harmless no-op when the identifier no longer
    /// resolves.
    pub fn clear_recent(&mut self, id: MethodId) {
        if let Some(record) = self.items.iter_mut().find(|r| r.id == id) {
            record.recently_added = false;
        }
    }
}

/// Case-insensitive substring containment over title, description, or any tag.
pub fn matches_query(record: &MethodRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    record.title.to_lowercase().contains(&needle)
        || record.description.to_lowercase().contains(&needle)
        || record.tags.iter().any(|tag| tag.to_lowercase().contains(&needle))
}

fn seed(id: MethodId, title: &str, description: &str, tags: &[&str]) -> MethodRecord {
    MethodRecord {
        id,
        title: title.to_owned(),
        description: description.to_owned(),
        tags: tags.iter().map(|&tag| tag.to_owned()).collect(),
        recently_added: false,
    }
}
