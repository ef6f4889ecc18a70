//! Ask use case.
//!
//! Executes one question-answer interaction: compose the prompt, open a
//! fresh session, send, and fold any fault into the `Answer`.
//!
//! `execute` is infallible at its boundary. Every fault raised by the
//! gateway — connection, auth, quota, malformed response — becomes
//! `Answer::Failure` carrying the fault's message. Nothing is retried and
//! nothing is cached; sequential calls share no state.

use crate::ports::chat_gateway::{ChatGateway, GatewayError};
use githelper_domain::{Answer, Model, PromptTemplate, Question};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Use case for answering one question with a single model call.
pub struct AskUseCase {
    gateway: Arc<dyn ChatGateway>,
    model: Model,
}

impl AskUseCase {
    pub fn new(gateway: Arc<dyn ChatGateway>, model: Model) -> Self {
        Self { gateway, model }
    }

    /// The model this use case sends to
    pub fn model(&self) -> &Model {
        &self.model
    }

    /// The gateway's known model inventory
    pub fn available_models(&self) -> Vec<Model> {
        self.gateway.available_models()
    }

    /// Execute one interaction. Always returns an `Answer`.
    pub async fn execute(&self, question: Question) -> Answer {
        debug!(model = %self.model, "Starting ask interaction");

        match self.ask(&question).await {
            Ok(text) => {
                info!(bytes = text.len(), "Ask completed");
                Answer::reply(text)
            }
            Err(e) => {
                warn!(error = %e, "Ask failed");
                Answer::failure(e.to_string())
            }
        }
    }

    async fn ask(&self, question: &Question) -> Result<String, GatewayError> {
        // Fresh session per call: no conversational state survives
        let session = self.gateway.create_session(&self.model).await?;
        let message = PromptTemplate::user_message(question.content());
        session.send(&message).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::chat_gateway::ChatSession;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // ==================== Test Mocks ====================

    struct MockSession {
        model: Model,
        responses: Arc<Mutex<VecDeque<Result<String, GatewayError>>>>,
        sent: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl ChatSession for MockSession {
        fn model(&self) -> &Model {
            &self.model
        }

        async fn send(&self, content: &str) -> Result<String, GatewayError> {
            self.sent.lock().unwrap().push(content.to_string());
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(GatewayError::Api("No more responses".to_string())))
        }
    }

    struct MockGateway {
        responses: Arc<Mutex<VecDeque<Result<String, GatewayError>>>>,
        sent: Arc<Mutex<Vec<String>>>,
        sessions_created: AtomicUsize,
        fail_session_creation: Option<String>,
    }

    impl MockGateway {
        fn new(responses: Vec<Result<String, GatewayError>>) -> Self {
            Self {
                responses: Arc::new(Mutex::new(VecDeque::from(responses))),
                sent: Arc::new(Mutex::new(Vec::new())),
                sessions_created: AtomicUsize::new(0),
                fail_session_creation: None,
            }
        }

        fn failing_creation(message: &str) -> Self {
            let mut gateway = Self::new(vec![]);
            gateway.fail_session_creation = Some(message.to_string());
            gateway
        }

        fn sent_messages(&self) -> Vec<String> {
            self.sent.lock().unwrap().clone()
        }

        fn session_count(&self) -> usize {
            self.sessions_created.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ChatGateway for MockGateway {
        async fn create_session(
            &self,
            model: &Model,
        ) -> Result<Box<dyn ChatSession>, GatewayError> {
            if let Some(message) = &self.fail_session_creation {
                return Err(GatewayError::Connection(message.clone()));
            }
            self.sessions_created.fetch_add(1, Ordering::SeqCst);
            Ok(Box::new(MockSession {
                model: model.clone(),
                responses: Arc::clone(&self.responses),
                sent: Arc::clone(&self.sent),
            }))
        }

        fn available_models(&self) -> Vec<Model> {
            Model::known_models()
        }
    }

    fn use_case(gateway: &Arc<MockGateway>) -> AskUseCase {
        AskUseCase::new(Arc::clone(gateway) as Arc<dyn ChatGateway>, Model::default())
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_healthy_service_returns_verbatim_reply() {
        let gateway = Arc::new(MockGateway::new(vec![Ok(
            "A merge conflict happens when two branches edit the same lines.".to_string(),
        )]));

        let answer = use_case(&gateway)
            .execute(Question::new("What is a merge conflict?"))
            .await;

        assert!(answer.is_reply());
        assert_eq!(
            answer.to_string(),
            "A merge conflict happens when two branches edit the same lines."
        );
        assert!(!answer.to_string().contains("❌"));
    }

    #[tokio::test]
    async fn test_auth_fault_message_passes_through_literally() {
        let gateway = Arc::new(MockGateway::new(vec![Err(GatewayError::Auth(
            "invalid api key".to_string(),
        ))]));

        let answer = use_case(&gateway).execute(Question::new("hello")).await;

        assert!(answer.is_failure());
        assert_eq!(answer.to_string(), "❌ Error: invalid api key");
    }

    #[tokio::test]
    async fn test_session_creation_fault_becomes_failure() {
        let gateway = Arc::new(MockGateway::failing_creation("connection refused"));

        let answer = use_case(&gateway).execute(Question::new("hello")).await;

        assert_eq!(answer.to_string(), "❌ Error: connection refused");
    }

    #[tokio::test]
    async fn test_outbound_message_is_role_prefix_plus_question() {
        let gateway = Arc::new(MockGateway::new(vec![Ok("ok".to_string())]));

        use_case(&gateway)
            .execute(Question::new("How do I squash commits?"))
            .await;

        let sent = gateway.sent_messages();
        assert_eq!(sent.len(), 1);
        assert_eq!(
            sent[0],
            PromptTemplate::user_message("How do I squash commits?")
        );
    }

    #[tokio::test]
    async fn test_sequential_calls_are_independent() {
        let gateway = Arc::new(MockGateway::new(vec![
            Ok("first answer".to_string()),
            Ok("second answer".to_string()),
        ]));
        let use_case = use_case(&gateway);

        let first = use_case.execute(Question::new("question A")).await;
        let second = use_case.execute(Question::new("question B")).await;

        assert_eq!(first.to_string(), "first answer");
        assert_eq!(second.to_string(), "second answer");

        // Each call opened its own session
        assert_eq!(gateway.session_count(), 2);

        // Neither outbound request leaks the other call's text
        let sent = gateway.sent_messages();
        assert_eq!(sent.len(), 2);
        assert!(sent[0].contains("question A"));
        assert!(!sent[0].contains("question B"));
        assert!(sent[1].contains("question B"));
        assert!(!sent[1].contains("question A"));
        assert!(!sent[1].contains("first answer"));
    }

    #[test]
    fn test_available_models_come_from_gateway() {
        let gateway = Arc::new(MockGateway::new(vec![]));
        let use_case = use_case(&gateway);
        assert_eq!(use_case.available_models(), Model::known_models());
    }

    #[tokio::test]
    async fn test_answer_is_never_empty_for_nonempty_question() {
        let gateway = Arc::new(MockGateway::new(vec![Err(GatewayError::RateLimited(
            "quota exceeded".to_string(),
        ))]));

        let answer = use_case(&gateway).execute(Question::new("q")).await;
        assert!(!answer.to_string().is_empty());
    }
}
