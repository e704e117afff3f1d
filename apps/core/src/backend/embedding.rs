//! Zero-shot sentiment classification using FastEmbed embeddings.
//!
//! Embeds a handful of label descriptions once, then labels a text by
//! cosine similarity against them. Similarities are turned into a
//! probability with a softmax.

use async_trait::async_trait;
use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

use super::{BackendError, Classification, ClassificationBackend};

/// AllMiniLML6V2 works on 256 word pieces; characters are a safe proxy
const MAX_INPUT_CHARS: usize = 512;

/// Sharpens the softmax over cosine similarities
const SOFTMAX_TEMPERATURE: f32 = 0.05;

/// Label description for semantic matching
struct LabelTemplate {
    label: &'static str,
    descriptions: &'static [&'static str],
}

const LABEL_TEMPLATES: &[LabelTemplate] = &[
    LabelTemplate {
        label: "POSITIVE",
        descriptions: &[
            "I love this brand, it is amazing",
            "great product, excellent quality, highly recommend",
            "happy customer, fantastic service",
        ],
    },
    LabelTemplate {
        label: "NEGATIVE",
        descriptions: &[
            "I hate this brand, it is terrible",
            "awful product, broken and useless, avoid",
            "angry customer, disappointing service",
        ],
    },
    LabelTemplate {
        label: "NEUTRAL",
        descriptions: &[
            "saw this brand mentioned in the news",
            "a question about the product",
            "a factual statement without opinion",
        ],
    },
];

/// Semantic sentiment classifier using embeddings
pub struct EmbeddingClassifier {
    model: Arc<TextEmbedding>,
    label_embeddings: Arc<Vec<(&'static str, Vec<f32>)>>,
}

impl EmbeddingClassifier {
    /// Load the embedding model from `cache_dir` and pre-compute label embeddings.
    ///
    /// Blocking: may download the model on first use.
    pub fn load(cache_dir: PathBuf) -> Result<Self, BackendError> {
        let mut options = InitOptions::new(EmbeddingModel::AllMiniLML6V2);
        options.show_download_progress = false;
        options.cache_dir = cache_dir;

        let model = TextEmbedding::try_new(options).map_err(|e| {
            warn!("Failed to load embedding model for sentiment classification: {}", e);
            BackendError::Load(e.to_string())
        })?;

        info!("Pre-computing sentiment label embeddings...");
        let mut label_embeddings = Vec::with_capacity(LABEL_TEMPLATES.len());
        for template in LABEL_TEMPLATES {
            let combined_text = template.descriptions.join(". ");
            let embedding = embed_one(&model, combined_text)?;
            label_embeddings.push((template.label, embedding));
        }
        info!("Pre-computed {} label embeddings", label_embeddings.len());

        Ok(Self {
            model: Arc::new(model),
            label_embeddings: Arc::new(label_embeddings),
        })
    }
}

fn embed_one(model: &TextEmbedding, text: String) -> Result<Vec<f32>, BackendError> {
    let mut embeddings = model
        .embed(vec![text], None)
        .map_err(|e| BackendError::Request(format!("Embedding failed: {}", e)))?;
    if embeddings.is_empty() {
        return Err(BackendError::Malformed("empty embedding".to_string()));
    }
    Ok(embeddings.swap_remove(0))
}

/// Pick the closest label and its softmax probability
fn nearest_label(
    query: &[f32],
    labels: &[(&'static str, Vec<f32>)],
) -> Result<Classification, BackendError> {
    let similarities: Vec<(&'static str, f32)> = labels
        .iter()
        .map(|(label, embedding)| (*label, cosine_similarity(query, embedding)))
        .collect();

    let (best_label, best_similarity) = similarities
        .iter()
        .copied()
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .ok_or_else(|| BackendError::Malformed("no label embeddings".to_string()))?;

    // Softmax relative to the best similarity keeps exponents bounded
    let denominator: f32 = similarities
        .iter()
        .map(|(_, similarity)| ((similarity - best_similarity) / SOFTMAX_TEMPERATURE).exp())
        .sum();

    Ok(Classification {
        label: best_label.to_string(),
        probability: f64::from(1.0 / denominator),
    })
}

/// Calculate cosine similarity between two vectors
fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let magnitude_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let magnitude_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if magnitude_a == 0.0 || magnitude_b == 0.0 {
        return 0.0;
    }

    dot_product / (magnitude_a * magnitude_b)
}

#[async_trait]
impl ClassificationBackend for EmbeddingClassifier {
    fn name(&self) -> &'static str {
        "embedding"
    }

    fn max_input_chars(&self) -> usize {
        MAX_INPUT_CHARS
    }

    async fn classify(&self, text: &str) -> Result<Classification, BackendError> {
        let model = Arc::clone(&self.model);
        let labels = Arc::clone(&self.label_embeddings);
        let text = text.to_string();

        // ONNX inference is CPU bound, keep it off the async workers
        tokio::task::spawn_blocking(move || {
            let query = embed_one(&model, text)?;
            nearest_label(&query, &labels)
        })
        .await?
    }
}
