//! ChatEngine: orchestrates the full answering pipeline for one turn.
//!
//! Of the three potentially blocking phases (store read, generation
//! call, session write) only the generation call may suspend for a
//! meaningful duration, and only it is cancellable: exceeding the
//! deadline deterministically routes the turn to the fallback
//! synthesizer instead of blocking the caller.

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use tracing::{debug, info, warn};

use qanun_core::config::QanunConfig;
use qanun_core::errors::{QanunError, QanunResult};
use qanun_core::models::{
    Category, ChatResponse, Document, DocumentRef, GenerationMessage, GenerationRequest,
    MessageMetadata, MessageRole, Session,
};
use qanun_core::traits::{IDocumentStore, IGenerationClient};
use qanun_generation::{prompt, FallbackSynthesizer};
use qanun_retrieval::{confidence, ContextBuilder, QueryClassifier, RetrievalEngine};
use qanun_session::SessionManager;

/// The turn orchestrator. Generic over the generation client so tests
/// can substitute a stub for the HTTP gateway.
pub struct ChatEngine<G: IGenerationClient> {
    documents: Arc<dyn IDocumentStore>,
    sessions: SessionManager,
    generator: G,
    config: QanunConfig,
}

impl<G: IGenerationClient> ChatEngine<G> {
    pub fn new(
        documents: Arc<dyn IDocumentStore>,
        sessions: SessionManager,
        generator: G,
        config: QanunConfig,
    ) -> Self {
        Self {
            documents,
            sessions,
            generator,
            config,
        }
    }

    /// Answer one chat message.
    ///
    /// The turn either produces a grounded answer, a degraded non-empty
    /// fallback answer, or an explicit rejection; it never returns an
    /// empty message.
    pub async fn handle_message(
        &self,
        user_id: &str,
        session_id: Option<&str>,
        text: &str,
        explicit_category: Option<Category>,
    ) -> QanunResult<ChatResponse> {
        let started = Instant::now();

        // Step 1: Validate before any retrieval work.
        let query = text.trim();
        if query.is_empty() {
            return Err(QanunError::InvalidInput {
                reason: "empty query".to_string(),
            });
        }
        if query.chars().count() > self.config.chat.max_query_chars {
            return Err(QanunError::InvalidInput {
                reason: format!(
                    "query exceeds {} characters",
                    self.config.chat.max_query_chars
                ),
            });
        }

        // Step 2: Load or create the session.
        let session = match session_id {
            Some(id) => self.sessions.load(id, user_id)?,
            None => self.sessions.create(user_id, explicit_category)?,
        };

        // Step 3: Classify category and target article.
        let classifier =
            QueryClassifier::new(self.documents.as_ref(), self.config.retrieval.clone());
        let classification = classifier.classify(query, explicit_category);
        let article = classification.article_number.as_deref();

        // Step 4: Retrieve ranked candidates.
        let engine = RetrievalEngine::new(self.documents.as_ref(), self.config.retrieval.clone());
        let documents = engine.search(query, classification.category, article)?;

        // Step 5: Bounded context + confidence.
        let context = ContextBuilder::new(self.config.retrieval.excerpt_budget)
            .build(&documents, article);
        let confidence = confidence::score(documents.len(), context.chars().count());
        debug!(
            documents = documents.len(),
            context_chars = context.chars().count(),
            confidence,
            "retrieval stage complete"
        );

        // Step 6: Generate, falling back on any gateway failure.
        let answer = self
            .generate_answer(
                &session,
                classification.category,
                &context,
                query,
                &documents,
                article,
            )
            .await;

        // Step 7: Usage accounting for surfaced documents.
        for doc in &documents {
            self.documents.increment_usage(&doc.id)?;
        }

        // Step 8: Append both sides of the exchange.
        let latency_ms = started.elapsed().as_secs_f64() * 1000.0;
        self.sessions.append_message(
            &session.id,
            user_id,
            MessageRole::User,
            query.to_string(),
            None,
            Vec::new(),
        )?;
        self.sessions.append_message(
            &session.id,
            user_id,
            MessageRole::Assistant,
            answer.clone(),
            Some(MessageMetadata {
                confidence: Some(confidence),
                latency_ms: Some(latency_ms),
            }),
            documents.iter().map(|d| d.id.clone()).collect(),
        )?;

        info!(
            session_id = %session.id,
            confidence,
            latency_ms,
            "turn complete"
        );

        Ok(ChatResponse {
            session_id: session.id,
            message: answer,
            relevant_documents: documents.iter().map(DocumentRef::from).collect(),
            confidence,
            timestamp: Utc::now(),
        })
    }

    /// One generation attempt; every failure mode resolves to the
    /// fallback synthesizer within the same turn.
    async fn generate_answer(
        &self,
        session: &Session,
        category: Option<Category>,
        context: &str,
        query: &str,
        documents: &[Document],
        article: Option<&str>,
    ) -> String {
        let system_prompt = prompt::build_system_prompt(category, context);
        let mut messages =
            prompt::recent_messages(&session.messages, self.config.generation.history_window);
        messages.push(GenerationMessage {
            role: "user".to_string(),
            content: query.to_string(),
        });
        let request = GenerationRequest {
            system_prompt,
            messages,
        };

        let deadline = Duration::from_secs(self.config.generation.timeout_secs);
        match self.generator.generate(&request, deadline).await {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "generation unavailable; synthesizing fallback");
                FallbackSynthesizer::synthesize(documents, article)
            }
        }
    }
}
